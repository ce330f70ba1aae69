use glam::Vec2;
use hockey_core::{Config, Params, Side};
use hockey_scene::{AssetSource, MatchScene, SceneError, ScoreDisplay, SoundPlayer, Touch};
use hockey_scene::{MALLET_IMAGE, PUCK_IMAGE};
use std::env;

const VIEWPORT: Vec2 = Vec2::new(Params::TABLE_WIDTH, Params::TABLE_HEIGHT);
const FRAME_DT: f32 = 1.0 / 60.0;

/// Bundled art is headless: sprites exist but carry no size, so radii
/// come from the config.
struct BundledAssets;

impl AssetSource for BundledAssets {
    fn image_size(&self, name: &str) -> Result<Option<Vec2>, SceneError> {
        match name {
            MALLET_IMAGE | PUCK_IMAGE => Ok(None),
            _ => Err(SceneError::MissingAsset(name.to_string())),
        }
    }
}

struct LogSound;

impl SoundPlayer for LogSound {
    fn play_effect(&self, name: &str) {
        tracing::debug!(name, "play effect");
    }
}

struct LogScore;

impl ScoreDisplay for LogScore {
    fn set_score(&self, side: Side, score: u32) {
        tracing::info!(?side, score, "score label");
    }
}

fn main() -> Result<(), SceneError> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::filter::EnvFilter::from_default_env())
        .init();

    let frames: u32 = env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(600);

    let config = Config::load();
    let mut scene = MatchScene::new(
        VIEWPORT,
        config,
        &BundledAssets,
        Box::new(LogSound),
        Box::new(LogScore),
    )?;

    // North steps aside, South sweeps up the middle and lets go after contact
    let north = scene.positions().north;
    scene.touches_began(&[Touch::new(2, north)]);
    scene.touches_moved(&[Touch::new(2, Vec2::new(120.0, north.y))]);
    scene.touches_ended(&[Touch::new(2, Vec2::new(120.0, north.y))]);

    let south = scene.positions().south;
    scene.touches_began(&[Touch::new(1, south)]);

    let mut hits = 0;
    for frame in 0..frames {
        if frame < 12 {
            let target = south + Vec2::new(0.0, 30.0 * (frame + 1) as f32);
            scene.touches_moved(&[Touch::new(1, target)]);
        } else if frame == 12 {
            scene.touches_ended(&[Touch::new(1, scene.positions().south)]);
        }

        scene.update(FRAME_DT);
        hits += scene.events().hits.len();
    }

    let score = scene.score();
    tracing::info!(
        frames,
        hits,
        north = score.north,
        south = score.south,
        puck = ?scene.positions().puck,
        "Match finished"
    );
    println!("North {} - South {} after {frames} frames", score.north, score.south);

    Ok(())
}
