use glam::Vec2;
use hecs::{Entity, World};

use crate::components::{Body, Puck};
use crate::config::Config;

/// Puck state being resolved during one step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PuckMotion {
    pub entity: Entity,
    pub pos: Vec2,  // committed position at the start of the step
    pub vel: Vec2,  // damped, then rewritten by hits and bounces
    pub next: Vec2, // tentative position
    pub radius: f32,
}

/// Damp the puck velocity and integrate its tentative position.
///
/// Integration starts from the staged next position rather than the
/// committed one; both agree after every commit and every reset.
pub fn begin_puck_motion(world: &World, config: &Config) -> Option<PuckMotion> {
    let mut query = world.query::<(&Body, &Puck)>();
    let (entity, (body, _puck)) = query.iter().next()?;

    let vel = body.vel * config.puck_damping;
    Some(PuckMotion {
        entity,
        pos: body.pos,
        vel,
        next: body.next_pos + vel,
        radius: body.radius,
    })
}

/// Write the resolved puck velocity and tentative position back to the puck
pub fn store_puck_motion(world: &mut World, motion: &PuckMotion) {
    if let Ok(mut puck) = world.get::<&mut Body>(motion.entity) {
        puck.vel = motion.vel;
        puck.next_pos = motion.next;
    }
}

/// Move every body to its staged next position
pub fn commit_positions(world: &mut World) {
    for (_entity, body) in world.query_mut::<&mut Body>() {
        body.pos = body.next_pos;
    }
}
