use super::*;
use crate::entities::AsteroidDestroyed;
use aster_engine::physics::PhysicsBody;
use aster_engine::storage::Preferences;

fn sizes(director: &Director) -> Vec<AsteroidSize> {
    director.scene().asteroids().iter().map(|(_, a)| a.size()).collect()
}

#[test]
fn test_first_asteroid_after_initial_delay() {
    let mut h = Harness::with_defaults();
    h.start_game();

    h.run_for(4.8);
    assert!(h.director.scene().asteroids().is_empty());

    h.run_for(0.4);
    assert_eq!(h.director.scene().asteroids().len(), 1);

    let duration = h.director.timer().duration();
    assert!((1.0..=5.0).contains(&duration));
    assert!(h.director.timer().is_running());
}

#[test]
fn test_spawn_cap_still_rearms_timer() {
    let mut h = Harness::with_defaults();
    h.start_game();

    for position in [
        Vec2::new(-6.0, 3.0),
        Vec2::new(-6.0, -3.0),
        Vec2::new(6.0, 3.0),
        Vec2::new(6.0, -3.0),
        Vec2::new(0.0, -4.0),
    ] {
        h.director
            .scene_mut()
            .spawn_asteroid(still_asteroid(AsteroidSize::Small, position));
    }

    h.run_for(5.2);

    assert_eq!(h.director.scene().asteroids().len(), 5);
    let duration = h.director.timer().duration();
    assert!((1.0..=5.0).contains(&duration));
    assert!(h.director.timer().is_running());
}

#[test]
fn test_shooting_large_splits_into_two_medium() {
    let mut h = Harness::with_defaults();
    h.start_game();
    let target = Vec2::new(0.0, 3.0);
    h.director
        .scene_mut()
        .spawn_asteroid(still_asteroid(AsteroidSize::Large, target));

    h.tap(KeyCode::Space);
    h.frame();

    assert_eq!(sizes(&h.director), vec![AsteroidSize::Medium, AsteroidSize::Medium]);
    for (_, asteroid) in h.director.scene().asteroids().iter() {
        assert_eq!(asteroid.position(), target);
        assert!(!asteroid.is_destroyed_by_projectile());
    }
    assert!(h.director.scene().projectiles().is_empty());
    assert_eq!(h.director.score().score(), 0);
}

#[test]
fn test_medium_splits_into_two_small() {
    let mut h = Harness::with_defaults();
    h.start_game();
    let screen = *h.engine.screen();
    let position = Vec2::new(-2.0, 1.5);

    h.director.handle_asteroid_destroyed(
        AsteroidDestroyed { size: AsteroidSize::Medium, position },
        &screen,
    );

    assert_eq!(sizes(&h.director), vec![AsteroidSize::Small, AsteroidSize::Small]);
    for (_, asteroid) in h.director.scene().asteroids().iter() {
        assert_eq!(asteroid.position(), position);
        assert!((asteroid.collider().radius - 0.5).abs() < f32::EPSILON);
    }
}

#[test]
fn test_replacements_ignore_the_cap() {
    let mut config = still_config();
    config.gameplay.max_asteroids = 1;
    let mut h = Harness::new(config, MemoryPreferences::new());
    h.start_game();
    let screen = *h.engine.screen();

    h.director.handle_asteroid_destroyed(
        AsteroidDestroyed { size: AsteroidSize::Large, position: Vec2::new(4.0, 0.0) },
        &screen,
    );

    assert_eq!(h.director.scene().asteroids().len(), 2);
}

#[test]
fn test_shooting_small_scores_a_point() {
    let mut h = Harness::with_defaults();
    h.start_game();
    h.director
        .scene_mut()
        .spawn_asteroid(still_asteroid(AsteroidSize::Small, Vec2::new(0.0, 2.0)));

    h.tap(KeyCode::Space);
    h.frame();

    assert!(h.director.scene().asteroids().is_empty());
    assert_eq!(h.director.score().score(), 1);
    assert_eq!(h.director.score().high_score(), 1);
    assert_eq!(h.director.score().preferences().get_int("HighScore"), Some(1));
    assert_eq!(h.director.score().score_banner().text(), "1");
}

#[test]
fn test_destruction_outside_play_is_ignored() {
    let mut h = Harness::with_defaults();
    let screen = *h.engine.screen();

    h.director.handle_asteroid_destroyed(
        AsteroidDestroyed { size: AsteroidSize::Large, position: Vec2::zeros() },
        &screen,
    );
    h.director.handle_asteroid_destroyed(
        AsteroidDestroyed { size: AsteroidSize::Small, position: Vec2::zeros() },
        &screen,
    );

    assert!(h.director.scene().asteroids().is_empty());
    assert_eq!(h.director.score().score(), 0);
}

#[test]
fn test_asteroids_wrap_around_the_screen() {
    let mut config = GameConfig::default();
    config.session.seed = Some(11);
    config.asteroid.min_impulse = 4.0;
    config.asteroid.max_impulse = 4.0;
    let mut h = Harness::new(config, MemoryPreferences::new());
    h.start_game();

    h.run_for(30.0);

    let screen = *h.engine.screen();
    let margin = 5.0 * DT;
    for (_, asteroid) in h.director.scene().asteroids().iter() {
        let p = asteroid.position();
        assert!(p.x >= screen.left - margin && p.x <= screen.right + margin, "{p:?}");
        assert!(p.y >= screen.bottom - margin && p.y <= screen.top + margin, "{p:?}");
    }
}
