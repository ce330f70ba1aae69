use crate::*;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Default)]
struct MockSound {
    played: Rc<RefCell<Vec<String>>>,
}

impl SoundPlayer for MockSound {
    fn play_effect(&self, name: &str) {
        self.played.borrow_mut().push(name.to_string());
    }
}

#[derive(Clone, Default)]
struct MockDisplay {
    shown: Rc<RefCell<Vec<(Side, u32)>>>,
}

impl ScoreDisplay for MockDisplay {
    fn set_score(&self, side: Side, score: u32) {
        self.shown.borrow_mut().push((side, score));
    }
}

struct MockAssets {
    missing: Option<&'static str>,
    r#unsized: Option<&'static str>,
}

impl MockAssets {
    fn all() -> Self {
        Self {
            missing: None,
            r#unsized: None,
        }
    }
}

impl AssetSource for MockAssets {
    fn image_size(&self, name: &str) -> Result<Option<Vec2>, SceneError> {
        if self.missing == Some(name) {
            return Err(SceneError::MissingAsset(name.to_string()));
        }
        if self.r#unsized == Some(name) {
            return Ok(None);
        }
        match name {
            MALLET_IMAGE => Ok(Some(Vec2::new(80.0, 80.0))),
            PUCK_IMAGE => Ok(Some(Vec2::new(40.0, 40.0))),
            _ => Err(SceneError::MissingAsset(name.to_string())),
        }
    }
}

/// Host that loads sprites but reports every width as zero
struct ZeroSizeAssets;

impl AssetSource for ZeroSizeAssets {
    fn image_size(&self, _name: &str) -> Result<Option<Vec2>, SceneError> {
        Ok(Some(Vec2::ZERO))
    }
}

fn setup_scene() -> (MatchScene, MockSound, MockDisplay) {
    let sound = MockSound::default();
    let display = MockDisplay::default();
    let scene = MatchScene::new(
        Vec2::new(768.0, 1024.0),
        Config::new(),
        &MockAssets::all(),
        Box::new(sound.clone()),
        Box::new(display.clone()),
    )
    .unwrap();
    (scene, sound, display)
}

#[test]
fn test_scene_start_layout() {
    let (scene, _sound, display) = setup_scene();

    let positions = scene.positions();
    assert_eq!(positions.south, Vec2::new(384.0, 80.0));
    assert_eq!(positions.north, Vec2::new(384.0, 944.0));
    assert_eq!(positions.puck, Vec2::new(384.0, 472.0));
    assert_eq!(scene.mallet(Side::South).radius, 40.0);
    assert_eq!(scene.puck().radius, 20.0);

    // Both labels start at zero
    assert_eq!(
        *display.shown.borrow(),
        vec![(Side::South, 0), (Side::North, 0)]
    );
}

#[test]
fn test_missing_asset_is_reported() {
    let result = MatchScene::new(
        Vec2::new(768.0, 1024.0),
        Config::new(),
        &MockAssets {
            missing: Some(PUCK_IMAGE),
            r#unsized: None,
        },
        Box::new(MockSound::default()),
        Box::new(MockDisplay::default()),
    );

    match result {
        Err(SceneError::MissingAsset(name)) => assert_eq!(name, PUCK_IMAGE),
        Err(e) => panic!("unexpected error: {e}"),
        Ok(_) => panic!("scene should not start without the puck sprite"),
    }
}

#[test]
fn test_unsized_sprites_use_configured_radii() {
    let config = Config {
        mallet_radius: 60.0,
        puck_radius: 30.0,
        ..Config::default()
    };
    let scene = MatchScene::new(
        Vec2::new(768.0, 1024.0),
        config,
        &MockAssets {
            missing: None,
            r#unsized: Some(MALLET_IMAGE),
        },
        Box::new(MockSound::default()),
        Box::new(MockDisplay::default()),
    )
    .unwrap();

    assert_eq!(scene.mallet(Side::South).radius, 60.0);
    assert_eq!(scene.mallet(Side::North).radius, 60.0);
    assert_eq!(scene.positions().south, Vec2::new(384.0, 120.0));
    // Puck sprite reports a size, so it wins over the configured radius
    assert_eq!(scene.puck().radius, 20.0);
}

#[test]
fn test_zero_width_sprites_use_configured_radii() {
    let config = Config {
        mallet_radius: 60.0,
        puck_radius: 30.0,
        ..Config::default()
    };
    let scene = MatchScene::new(
        Vec2::new(768.0, 1024.0),
        config,
        &ZeroSizeAssets,
        Box::new(MockSound::default()),
        Box::new(MockDisplay::default()),
    )
    .unwrap();

    assert_eq!(scene.mallet(Side::South).radius, 60.0);
    assert_eq!(scene.puck().radius, 30.0);
    assert_eq!(scene.positions().puck, Vec2::new(384.0, 452.0));
}

#[test]
fn test_invalid_viewport_is_rejected() {
    let result = MatchScene::new(
        Vec2::new(0.0, 1024.0),
        Config::new(),
        &MockAssets::all(),
        Box::new(MockSound::default()),
        Box::new(MockDisplay::default()),
    );
    assert!(matches!(result, Err(SceneError::InvalidViewport { .. })));
}

#[test]
fn test_invalid_config_is_rejected() {
    let config = Config {
        puck_damping: 2.0,
        ..Config::default()
    };
    let result = MatchScene::new(
        Vec2::new(768.0, 1024.0),
        config,
        &MockAssets::all(),
        Box::new(MockSound::default()),
        Box::new(MockDisplay::default()),
    );
    assert!(matches!(result, Err(SceneError::Config(_))));
}

#[test]
fn test_drag_moves_mallet_after_update() {
    let (mut scene, _sound, _display) = setup_scene();

    scene.touches_began(&[Touch::new(1, Vec2::new(384.0, 80.0))]);
    scene.touches_moved(&[Touch::new(1, Vec2::new(200.0, 150.0))]);
    assert_eq!(scene.positions().south, Vec2::new(384.0, 80.0));

    scene.update(1.0 / 60.0);

    assert_eq!(scene.positions().south, Vec2::new(200.0, 150.0));
    assert_eq!(scene.time().frame, 1);
}

#[test]
fn test_touch_outside_mallet_is_ignored_for_its_lifetime() {
    let (mut scene, _sound, _display) = setup_scene();

    scene.touches_began(&[Touch::new(4, Vec2::new(600.0, 300.0))]);
    scene.touches_moved(&[Touch::new(4, Vec2::new(384.0, 80.0))]);
    scene.touches_moved(&[Touch::new(4, Vec2::new(100.0, 100.0))]);
    scene.update(1.0 / 60.0);

    assert_eq!(scene.positions().south, Vec2::new(384.0, 80.0));
}

#[test]
fn test_release_zeroes_mallet_velocity() {
    let (mut scene, _sound, _display) = setup_scene();
    scene.touches_began(&[Touch::new(1, Vec2::new(384.0, 80.0))]);
    scene.touches_moved(&[Touch::new(1, Vec2::new(384.0, 120.0))]);
    assert_eq!(scene.mallet(Side::South).vel, Vec2::new(0.0, 40.0));

    scene.touches_cancelled(&[Touch::new(1, Vec2::new(384.0, 120.0))]);

    assert_eq!(scene.mallet(Side::South).vel, Vec2::ZERO);
}

#[test]
fn test_hit_plays_sound_once_per_collision() {
    let (mut scene, sound, _display) = setup_scene();

    // Strike the resting puck from below
    scene.touches_began(&[Touch::new(1, Vec2::new(384.0, 80.0))]);
    scene.touches_moved(&[Touch::new(1, Vec2::new(384.0, 420.0))]);
    scene.update(1.0 / 60.0);

    assert_eq!(scene.events().hits, vec![Hit::Mallet(Side::South)]);
    assert_eq!(*sound.played.borrow(), vec!["hit.wav".to_string()]);
    assert!(scene.puck().vel.y > 0.0, "Puck heads north");
}

#[test]
fn test_goal_updates_score_display() {
    let (mut scene, sound, display) = setup_scene();

    // Get the north mallet out of the lane, then drive the puck straight up
    scene.touches_began(&[Touch::new(2, Vec2::new(384.0, 944.0))]);
    scene.touches_moved(&[Touch::new(2, Vec2::new(100.0, 944.0))]);
    scene.touches_ended(&[Touch::new(2, Vec2::new(100.0, 944.0))]);
    scene.update(1.0 / 60.0);

    scene.touches_began(&[Touch::new(1, Vec2::new(384.0, 80.0))]);
    scene.touches_moved(&[Touch::new(1, Vec2::new(384.0, 420.0))]);
    scene.update(1.0 / 60.0);
    scene.touches_ended(&[Touch::new(1, Vec2::new(384.0, 420.0))]);
    assert_eq!(scene.events().hits, vec![Hit::Mallet(Side::South)]);

    for _ in 0..300 {
        scene.update(1.0 / 60.0);
        if scene.events().scored.is_some() {
            break;
        }
    }

    // Exit past the top end is credited to North
    assert_eq!(scene.events().scored, Some(Side::North));
    assert_eq!(scene.score(), Score { north: 1, south: 0 });
    assert_eq!(display.shown.borrow().last(), Some(&(Side::North, 1)));
    assert_eq!(scene.positions().puck, scene.table().center());
    assert!(!sound.played.borrow().is_empty());
}
