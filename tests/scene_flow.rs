//! End-to-end exercises of the CPU-side scene: flying the spacecraft with
//! camera follow, regenerating the galaxy, and accumulating scattered
//! galaxies, all through the same entry points the app uses.

use glam::Vec2;

use stardrift::camera::{CameraMode, FOLLOW_OFFSET, GALAXY_VIEW_OFFSET};
use stardrift::input::{KeyCode, KeyTransition};
use stardrift::scene::{Scene, GALAXY_POSITION};
use stardrift::spacecraft::FLIGHT_SPEED;

const DT: f32 = 1.0 / 60.0;

fn press(key: KeyCode) -> KeyTransition {
    KeyTransition { key, pressed: true }
}

fn release(key: KeyCode) -> KeyTransition {
    KeyTransition {
        key,
        pressed: false,
    }
}

#[test]
fn a_full_flight_session() {
    let mut scene = Scene::new();
    let start = scene.spacecraft.position;

    // Keys do nothing to position until flight mode integrates them.
    scene.handle_key(press(KeyCode::Up));
    assert_eq!(scene.spacecraft.position, start);

    scene.set_flight_mode(true);
    assert_eq!(scene.camera.mode, CameraMode::FollowSpacecraft);

    for _ in 0..60 {
        scene.tick(DT, Vec2::ZERO);
    }

    // One second of holding Up moves one speed unit straight up.
    let flown = scene.spacecraft.position;
    assert!((flown.y - (start.y + FLIGHT_SPEED)).abs() < 1e-3);
    assert!((flown.x - start.x).abs() < 1e-5);

    // The chase camera stays pinned at its fixed offset.
    assert!((scene.camera.position() - (flown + FOLLOW_OFFSET)).length() < 1e-5);
    assert_eq!(scene.camera.target(), flown);

    // Releasing the key stops the craft where it is.
    scene.handle_key(release(KeyCode::Up));
    let parked = scene.spacecraft.position;
    scene.tick(DT, Vec2::ZERO);
    assert_eq!(scene.spacecraft.position, parked);

    // Reverse flips the heading half a turn.
    let yaw_before = scene.spacecraft.yaw;
    scene.reverse_spacecraft();
    assert!((scene.spacecraft.yaw - yaw_before - std::f32::consts::PI).abs() < 1e-6);

    // Leaving flight mode hands control back to the orbit camera.
    scene.set_flight_mode(false);
    assert_eq!(scene.camera.mode, CameraMode::FreeOrbit);
}

#[test]
fn w_and_s_push_along_the_depth_axis() {
    let mut scene = Scene::new();
    scene.set_flight_mode(true);
    let start = scene.spacecraft.position;

    scene.handle_key(press(KeyCode::W));
    for _ in 0..30 {
        scene.tick(DT, Vec2::ZERO);
    }
    assert!(scene.spacecraft.position.z > start.z);

    scene.handle_key(release(KeyCode::W));
    scene.handle_key(press(KeyCode::S));
    let forward = scene.spacecraft.position.z;
    for _ in 0..30 {
        scene.tick(DT, Vec2::ZERO);
    }
    assert!(scene.spacecraft.position.z < forward);
}

#[test]
fn regenerating_the_galaxy_swaps_the_cloud_in_place() {
    let mut scene = Scene::new();
    let generation = scene.galaxy_generation;

    let params = stardrift::galaxy::GalaxyParams {
        count: 500,
        ..scene.galaxy_params
    };
    scene.regenerate_galaxy(params);

    assert_eq!(scene.galaxy.len(), 500);
    assert_eq!(scene.galaxy_generation, generation + 1);
}

#[test]
fn scattered_galaxies_only_accumulate() {
    let mut scene = Scene::new();
    let initial = scene.scattered.len();

    scene.spawn_scattered(3);
    assert_eq!(scene.scattered.len(), initial + 3);

    // Regeneration touches only the canonical galaxy.
    scene.regenerate_galaxy(scene.galaxy_params);
    assert_eq!(scene.scattered.len(), initial + 3);
}

#[test]
fn go_to_galaxy_frames_the_point_cloud() {
    let mut scene = Scene::new();
    scene.go_to_galaxy();

    assert_eq!(scene.camera.target(), GALAXY_POSITION);
    let expected_eye = GALAXY_POSITION + GALAXY_VIEW_OFFSET;
    assert!((scene.camera.position() - expected_eye).length() < 1e-3);
}

#[test]
fn pointer_position_drives_starfield_drift() {
    let mut scene = Scene::new();
    assert_eq!(scene.starfield.rotation, Vec2::ZERO);

    for _ in 0..100 {
        scene.tick(DT, Vec2::new(400.0, 300.0));
    }

    assert!(scene.starfield.rotation.x > 0.0);
    assert!(scene.starfield.rotation.y > 0.0);

    // Pointer at the origin freezes the drift.
    let frozen = scene.starfield.rotation;
    scene.tick(DT, Vec2::ZERO);
    assert_eq!(scene.starfield.rotation, frozen);
}
