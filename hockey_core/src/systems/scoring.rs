use hecs::World;

use crate::components::{Body, Puck, Side};
use crate::resources::{Events, Score};
use crate::table::Table;

/// Check whether the puck has fully left the table through a goal.
///
/// A puck more than one diameter past an end line is credited to the side
/// owning that end: past y = 0 scores for South, past y = height scores for
/// North. The scorer's counter is incremented and the puck is put back at
/// rest on the center spot.
pub fn check_scoring(world: &mut World, table: &Table, score: &mut Score, events: &mut Events) {
    for (_entity, (puck, _marker)) in world.query_mut::<(&mut Body, &Puck)>() {
        let margin = puck.radius * 2.0;
        let scorer = if puck.next_pos.y < -margin {
            Side::South
        } else if puck.next_pos.y > table.height() + margin {
            Side::North
        } else {
            continue;
        };

        let total = score.increment(scorer);
        events.scored = Some(scorer);
        tracing::debug!(?scorer, total, north = score.north, south = score.south, "Goal");

        puck.place(table.center());
    }
}
