use glam::Vec2;

use crate::components::{Side, TouchId};

/// Frame clock. Motion is per call, so `dt` is recorded but never scales physics.
#[derive(Debug, Clone, Copy, Default)]
pub struct Time {
    pub dt: f32,    // Elapsed time reported by the host for this frame
    pub now: f32,   // Total elapsed time
    pub frame: u64, // Steps taken
}

impl Time {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self) {
        self.now += self.dt.max(0.0);
        self.frame += 1;
    }
}

/// Goals scored by each side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub north: u32,
    pub south: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::North => self.north,
            Side::South => self.south,
        }
    }

    /// Add a goal for `side` and return its new total
    pub fn increment(&mut self, side: Side) -> u32 {
        let counter = match side {
            Side::North => &mut self.north,
            Side::South => &mut self.south,
        };
        *counter += 1;
        *counter
    }
}

/// Something the puck struck this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Mallet(Side),
    SideWall, // left or right rail
    EndWall,  // end rail outside the goal mouth
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub hits: Vec<Hit>,
    pub scored: Option<Side>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.hits.clear();
        self.scored = None;
    }

    pub fn hit(&mut self, hit: Hit) {
        self.hits.push(hit);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    Began,
    Moved,
    Ended,
    Cancelled,
}

/// A pointer event in table coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchEvent {
    pub id: TouchId,
    pub phase: TouchPhase,
    pub point: Vec2,
}

impl TouchEvent {
    pub fn new(id: TouchId, phase: TouchPhase, point: Vec2) -> Self {
        Self { id, phase, point }
    }
}

/// Touch events waiting to be applied, in arrival order
#[derive(Debug, Clone, Default)]
pub struct TouchQueue {
    pub events: Vec<TouchEvent>,
}

impl TouchQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: TouchEvent) {
        self.events.push(event);
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
