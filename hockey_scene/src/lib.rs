//! Host-side glue for the air hockey scene.
//!
//! The engine owns sprites, audio and labels; this crate turns its touch
//! callbacks and frame ticks into simulation input, and feeds the results
//! back out through small collaborator traits.

use glam::Vec2;
use hecs::{Entity, World};
use hockey_core::systems::ingest_touches;
use hockey_core::*;

#[cfg(test)]
mod tests;

pub const MALLET_IMAGE: &str = "mallet.png";
pub const PUCK_IMAGE: &str = "puck.png";

#[derive(Debug)]
pub enum SceneError {
    MissingAsset(String),
    InvalidViewport { width: f32, height: f32 },
    Config(ConfigError),
}

impl std::fmt::Display for SceneError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingAsset(name) => write!(f, "missing asset: {name}"),
            Self::InvalidViewport { width, height } => {
                write!(f, "invalid viewport size: {width}x{height}")
            }
            Self::Config(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for SceneError {}

impl From<ConfigError> for SceneError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// Fire-and-forget audio playback
pub trait SoundPlayer {
    fn play_effect(&self, name: &str);
}

/// Score labels shown to the players
pub trait ScoreDisplay {
    fn set_score(&self, side: Side, score: u32);
}

/// Sprite metadata lookup. Body radii are half the sprite width; a loaded
/// sprite with no known size (`None` or zero width) falls back to the
/// configured radius.
pub trait AssetSource {
    fn image_size(&self, name: &str) -> Result<Option<Vec2>, SceneError>;
}

fn body_radius(assets: &dyn AssetSource, name: &str, fallback: f32) -> Result<f32, SceneError> {
    match assets.image_size(name)? {
        Some(size) if size.x.is_finite() && size.x > 0.0 => Ok(size.x * 0.5),
        _ => {
            tracing::debug!(name, fallback, "No sprite size, using configured radius");
            Ok(fallback)
        }
    }
}

/// A touch as delivered by the host, already in table coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Touch {
    pub id: TouchId,
    pub location: Vec2,
}

impl Touch {
    pub fn new(id: u64, location: Vec2) -> Self {
        Self {
            id: TouchId(id),
            location,
        }
    }
}

/// Where the renderer should draw each body after a frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScenePositions {
    pub puck: Vec2,
    pub south: Vec2,
    pub north: Vec2,
}

/// One match, from scene start to scene end
pub struct MatchScene {
    world: World,
    time: Time,
    table: Table,
    config: Config,
    score: Score,
    events: Events,
    touches: TouchQueue,
    puck: Entity,
    south: Player,
    north: Player,
    sound: Box<dyn SoundPlayer>,
    display: Box<dyn ScoreDisplay>,
}

impl MatchScene {
    pub fn new(
        viewport: Vec2,
        config: Config,
        assets: &dyn AssetSource,
        sound: Box<dyn SoundPlayer>,
        display: Box<dyn ScoreDisplay>,
    ) -> Result<Self, SceneError> {
        if !(viewport.is_finite() && viewport.x > 0.0 && viewport.y > 0.0) {
            return Err(SceneError::InvalidViewport {
                width: viewport.x,
                height: viewport.y,
            });
        }
        config.validate()?;

        let mallet_radius = body_radius(assets, MALLET_IMAGE, config.mallet_radius)?;
        let puck_radius = body_radius(assets, PUCK_IMAGE, config.puck_radius)?;
        let table = Table::new(viewport.x, viewport.y, config.goal_width);

        let mut world = World::new();
        let south = create_mallet(
            &mut world,
            Side::South,
            table.mallet_spawn(Side::South, mallet_radius),
            mallet_radius,
        );
        let north = create_mallet(
            &mut world,
            Side::North,
            table.mallet_spawn(Side::North, mallet_radius),
            mallet_radius,
        );
        let puck = create_puck(&mut world, table.puck_spawn(puck_radius), puck_radius);

        display.set_score(Side::South, 0);
        display.set_score(Side::North, 0);

        tracing::info!(
            width = viewport.x,
            height = viewport.y,
            mallet_radius,
            puck_radius,
            "Match scene ready"
        );

        Ok(Self {
            world,
            time: Time::new(),
            table,
            config,
            score: Score::new(),
            events: Events::new(),
            touches: TouchQueue::new(),
            puck,
            south,
            north,
            sound,
            display,
        })
    }

    pub fn touches_began(&mut self, touches: &[Touch]) {
        self.dispatch(TouchPhase::Began, touches);
    }

    pub fn touches_moved(&mut self, touches: &[Touch]) {
        self.dispatch(TouchPhase::Moved, touches);
    }

    pub fn touches_ended(&mut self, touches: &[Touch]) {
        self.dispatch(TouchPhase::Ended, touches);
    }

    pub fn touches_cancelled(&mut self, touches: &[Touch]) {
        self.dispatch(TouchPhase::Cancelled, touches);
    }

    fn dispatch(&mut self, phase: TouchPhase, touches: &[Touch]) {
        for touch in touches {
            self.touches.push(TouchEvent::new(touch.id, phase, touch.location));
        }
        ingest_touches(&mut self.world, &self.table, &mut self.touches);
    }

    /// Frame tick from the host scheduler
    pub fn update(&mut self, dt: f32) {
        self.time.dt = dt;
        step(
            &mut self.world,
            &mut self.time,
            &self.table,
            &self.config,
            &mut self.score,
            &mut self.events,
        );

        for _hit in &self.events.hits {
            self.sound.play_effect(&self.config.hit_sound);
        }
        if let Some(side) = self.events.scored {
            let total = self.score.get(side);
            tracing::info!(?side, total, frame = self.time.frame, "Goal scored");
            self.display.set_score(side, total);
        }
    }

    pub fn positions(&self) -> ScenePositions {
        ScenePositions {
            puck: self.body(self.puck).pos,
            south: self.body(self.south.mallet).pos,
            north: self.body(self.north.mallet).pos,
        }
    }

    fn body(&self, entity: Entity) -> Body {
        self.world
            .get::<&Body>(entity)
            .map(|body| *body)
            .unwrap_or_else(|_| Body::new(Vec2::ZERO, 0.0))
    }

    pub fn puck(&self) -> Body {
        self.body(self.puck)
    }

    pub fn mallet(&self, side: Side) -> Body {
        self.body(self.player(side).mallet)
    }

    pub fn player(&self, side: Side) -> Player {
        match side {
            Side::South => self.south,
            Side::North => self.north,
        }
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn time(&self) -> &Time {
        &self.time
    }
}
