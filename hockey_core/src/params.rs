/// Tuning defaults for air hockey
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Table (design resolution, portrait)
    pub const TABLE_WIDTH: f32 = 768.0;
    pub const TABLE_HEIGHT: f32 = 1024.0;
    pub const GOAL_WIDTH: f32 = 400.0;

    // Bodies (used when the host cannot report sprite sizes)
    pub const MALLET_RADIUS: f32 = 40.0;
    pub const PUCK_RADIUS: f32 = 20.0;

    // Physics, applied once per frame
    pub const PUCK_DAMPING: f32 = 0.98;
    pub const WALL_RESTITUTION: f32 = 0.8;

    // Audio
    pub const HIT_SOUND: &'static str = "hit.wav";
}
