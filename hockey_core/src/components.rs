use glam::Vec2;
use hecs::{Entity, World};

use crate::resources::Score;
use crate::table::Aabb;

/// Which half of the table a player defends. Ordered South first, which is
/// also the order mallets are hit-tested and collided in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Side {
    South, // bottom half, owns the end at y = 0
    North, // top half, owns the end at y = height
}

/// Opaque identifier of an active touch, assigned by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TouchId(pub u64);

/// Circular physical body shared by the puck and both mallets
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    pub next_pos: Vec2, // staged position, committed at the end of a step
    pub radius: f32,
}

impl Body {
    pub fn new(pos: Vec2, radius: f32) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            next_pos: pos,
            radius,
        }
    }

    /// Put the body at rest at `pos`, discarding any staged movement
    pub fn place(&mut self, pos: Vec2) {
        self.pos = pos;
        self.next_pos = pos;
        self.vel = Vec2::ZERO;
    }

    /// Square hit box around the current position, used for touch capture
    pub fn bounding_box(&self) -> Aabb {
        Aabb::from_center_size(self.pos, Vec2::splat(self.radius * 2.0))
    }
}

/// Marker for the puck entity
#[derive(Debug, Clone, Copy, Default)]
pub struct Puck;

/// Mallet component - the player-controlled paddle
#[derive(Debug, Clone, Copy)]
pub struct Mallet {
    pub side: Side,
    pub touch: Option<TouchId>, // touch currently dragging this mallet
}

impl Mallet {
    pub fn new(side: Side) -> Self {
        Self { side, touch: None }
    }

    /// Drop the active touch and stop reporting drag velocity
    pub fn release(&mut self, body: &mut Body) {
        self.touch = None;
        body.vel = Vec2::ZERO;
    }
}

/// A player is an association of a side with the mallet it drags.
/// The world owns the mallet body; the score lives in [`Score`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    pub side: Side,
    pub mallet: Entity,
}

impl Player {
    pub fn score(&self, score: &Score) -> u32 {
        score.get(self.side)
    }
}

/// Helper to create the puck entity
pub fn create_puck(world: &mut World, pos: Vec2, radius: f32) -> Entity {
    world.spawn((Body::new(pos, radius), Puck))
}

/// Helper to create a mallet entity and the player that owns it
pub fn create_mallet(world: &mut World, side: Side, pos: Vec2, radius: f32) -> Player {
    let mallet = world.spawn((Body::new(pos, radius), Mallet::new(side)));
    Player { side, mallet }
}
