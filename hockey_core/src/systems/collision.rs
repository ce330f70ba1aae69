use glam::Vec2;
use hecs::World;

use crate::components::{Body, Mallet};
use crate::config::Config;
use crate::resources::{Events, Hit};
use crate::systems::movement::PuckMotion;
use crate::table::Table;

/// Collide the puck against each mallet, South first
pub fn check_mallet_collisions(world: &World, motion: &mut PuckMotion, events: &mut Events) {
    let mut mallets: Vec<_> = world
        .query::<(&Mallet, &Body)>()
        .iter()
        .map(|(_e, (mallet, body))| (mallet.side, *body))
        .collect();
    mallets.sort_by_key(|(side, _body)| *side);

    for (side, mallet) in mallets {
        if resolve_mallet_hit(motion, &mallet) {
            tracing::trace!(?side, vel = ?motion.vel, "Puck hit mallet");
            events.hit(Hit::Mallet(side));
        }
    }
}

/// Test one mallet against the puck and, on contact, send the puck away from
/// it. Returns whether a hit happened.
///
/// Contact is checked both ways: the puck's tentative position against the
/// mallet's current one, and the puck's current position against the
/// mallet's staged one. The new speed combines both bodies' speeds; the
/// direction runs from the mallet to the puck's tentative position.
pub fn resolve_mallet_hit(motion: &mut PuckMotion, mallet: &Body) -> bool {
    let reach = mallet.radius + motion.radius;
    let reach_sq = reach * reach;

    let puck_next_to_mallet = motion.next - mallet.pos;
    let puck_to_mallet_next = motion.pos - mallet.next_pos;
    if puck_next_to_mallet.length_squared() > reach_sq
        && puck_to_mallet_next.length_squared() > reach_sq
    {
        return false;
    }

    let force = (motion.vel.length_squared() + mallet.vel.length_squared()).sqrt();
    let angle = hit_angle(puck_next_to_mallet);
    let dir = Vec2::new(angle.cos(), angle.sin());

    motion.vel = dir * force;
    motion.next = mallet.next_pos + dir * (reach + force);
    true
}

/// Direction of a mallet-to-puck offset. Coincident centers fall back to 0.
fn hit_angle(delta: Vec2) -> f32 {
    if delta == Vec2::ZERO {
        0.0
    } else {
        delta.y.atan2(delta.x)
    }
}

/// Bounce the puck off the rails. End rails stay open across the goal mouth,
/// tested against the puck's committed x.
pub fn bounce_off_walls(
    motion: &mut PuckMotion,
    table: &Table,
    config: &Config,
    events: &mut Events,
) {
    let r = motion.radius;
    let bounce = -config.wall_restitution;

    if motion.next.x < r {
        motion.next.x = r;
        motion.vel.x *= bounce;
        events.hit(Hit::SideWall);
    }
    if motion.next.x > table.width() - r {
        motion.next.x = table.width() - r;
        motion.vel.x *= bounce;
        events.hit(Hit::SideWall);
    }

    let in_goal_mouth = table.is_inside_goal(motion.pos.x);
    if motion.next.y > table.height() - r && !in_goal_mouth {
        motion.next.y = table.height() - r;
        motion.vel.y *= bounce;
        events.hit(Hit::EndWall);
    }
    if motion.next.y < r && !in_goal_mouth {
        motion.next.y = r;
        motion.vel.y *= bounce;
        events.hit(Hit::EndWall);
    }
}
