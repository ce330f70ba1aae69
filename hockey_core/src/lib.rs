pub mod components;
pub mod config;
pub mod params;
pub mod resources;
pub mod systems;
pub mod table;

pub use components::*;
pub use config::*;
pub use params::*;
pub use resources::*;
pub use table::*;

use hecs::World;
use systems::*;

/// Advance the air hockey match by one frame.
///
/// Motion is per call: the host's elapsed time is recorded in `time` but
/// does not scale damping or integration.
pub fn step(
    world: &mut World,
    time: &mut Time,
    table: &Table,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
) {
    // Clear events at start of frame
    events.clear();

    // 1. Damp puck velocity and stage its tentative position
    if let Some(mut motion) = begin_puck_motion(world, config) {
        // 2. Puck vs each mallet
        check_mallet_collisions(world, &mut motion, events);

        // 3. Rails and goal mouths, once per frame
        bounce_off_walls(&mut motion, table, config, events);

        store_puck_motion(world, &motion);
    }

    // 4. Commit puck and mallet positions
    commit_positions(world);

    // 5. Check scoring (puck left through a goal)
    check_scoring(world, table, score, events);

    time.advance();
}
