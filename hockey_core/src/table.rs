use glam::Vec2;

use crate::components::Side;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Clamp each axis of `point` into the box independently
    pub fn clamp(&self, point: Vec2) -> Vec2 {
        // max/min rather than f32::clamp: a court narrower than a mallet must not panic
        Vec2::new(
            point.x.max(self.min.x).min(self.max.x),
            point.y.max(self.min.y).min(self.max.y),
        )
    }
}

/// Playing surface, fixed at scene start from the viewport size.
/// Origin is the bottom-left corner; South defends y = 0, North defends y = height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Table {
    width: f32,
    height: f32,
    goal_width: f32,
}

impl Table {
    pub fn new(width: f32, height: f32, goal_width: f32) -> Self {
        Self {
            width,
            height,
            goal_width,
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn goal_width(&self) -> f32 {
        self.goal_width
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width, self.height) * 0.5
    }

    pub fn halfway_line(&self) -> f32 {
        self.height * 0.5
    }

    /// Region a mallet center may occupy so its body stays inside its own half
    pub fn court(&self, side: Side, radius: f32) -> Aabb {
        let halfway = self.halfway_line();
        match side {
            Side::North => Aabb::new(
                Vec2::new(radius, halfway + radius),
                Vec2::new(self.width - radius, self.height - radius),
            ),
            Side::South => Aabb::new(
                Vec2::splat(radius),
                Vec2::new(self.width - radius, halfway - radius),
            ),
        }
    }

    /// Keep a dragged mallet inside its court
    pub fn clamp_to_court(&self, side: Side, point: Vec2, radius: f32) -> Vec2 {
        self.court(side, radius).clamp(point)
    }

    /// Whether `x` lies within the goal mouth centered on either end line.
    /// Both bounds are inclusive.
    pub fn is_inside_goal(&self, x: f32) -> bool {
        let left = (self.width - self.goal_width) * 0.5;
        let right = (self.width + self.goal_width) * 0.5;
        x >= left && x <= right
    }

    /// Starting spot for a mallet, one diameter in from its end line
    pub fn mallet_spawn(&self, side: Side, radius: f32) -> Vec2 {
        let diameter = radius * 2.0;
        match side {
            Side::North => Vec2::new(self.width * 0.5, self.height - diameter),
            Side::South => Vec2::new(self.width * 0.5, diameter),
        }
    }

    /// Opening puck spot, just south of center
    pub fn puck_spawn(&self, radius: f32) -> Vec2 {
        self.center() - Vec2::new(0.0, radius * 2.0)
    }
}
