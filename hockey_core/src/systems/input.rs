use hecs::World;

use crate::components::*;
use crate::resources::*;
use crate::table::Table;

/// Apply all queued touch events in arrival order
pub fn ingest_touches(world: &mut World, table: &Table, queue: &mut TouchQueue) {
    for event in queue.events.drain(..) {
        handle_touch(world, table, &event);
    }
}

/// Apply one touch event to the mallets.
///
/// Only mallet fields are written here: the touch id, the staged next
/// position and the drag velocity. Current positions are left for the
/// simulation step to commit.
pub fn handle_touch(world: &mut World, table: &Table, event: &TouchEvent) {
    match event.phase {
        TouchPhase::Began => capture_touch(world, event),
        TouchPhase::Moved => drag_mallet(world, table, event),
        TouchPhase::Ended | TouchPhase::Cancelled => release_touch(world, event.id),
    }
}

/// Hit-test mallets at touch start. A touch that misses every mallet is never
/// captured later, even if it slides over one.
fn capture_touch(world: &mut World, event: &TouchEvent) {
    let mut hits: Vec<_> = world
        .query::<(&Mallet, &Body)>()
        .iter()
        .filter(|(_e, (_mallet, body))| body.bounding_box().contains(event.point))
        .map(|(e, (mallet, _body))| (mallet.side, e))
        .collect();
    hits.sort_by_key(|(side, _e)| *side);

    if let Some(&(side, entity)) = hits.first() {
        if let Ok(mut mallet) = world.get::<&mut Mallet>(entity) {
            mallet.touch = Some(event.id);
            tracing::debug!(?side, touch = event.id.0, "Mallet captured touch");
        }
    }
}

/// Stage the clamped drag target; velocity follows the raw pointer so a
/// mallet pinned at its court edge still hits with the drag speed.
fn drag_mallet(world: &mut World, table: &Table, event: &TouchEvent) {
    for (_entity, (mallet, body)) in world.query_mut::<(&Mallet, &mut Body)>() {
        if mallet.touch != Some(event.id) {
            continue;
        }
        body.next_pos = table.clamp_to_court(mallet.side, event.point, body.radius);
        body.vel = event.point - body.pos;
    }
}

fn release_touch(world: &mut World, id: TouchId) {
    for (_entity, (mallet, body)) in world.query_mut::<(&mut Mallet, &mut Body)>() {
        if mallet.touch == Some(id) {
            mallet.release(body);
        }
    }
}
