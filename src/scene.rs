//! The scene aggregate and the per-frame tick.
//!
//! `Scene` owns every entity — sun, planets, spacecraft, galaxies, starfield,
//! camera — so nothing lives in module-level state. The winit app holds one
//! `Scene` and calls [`Scene::tick`] once per frame; input handlers call the
//! mutation methods between ticks (winit dispatch is single threaded, so a
//! handler never lands mid-tick).
//!
//! Tick order, fixed: spacecraft flight or free-orbit camera resolve, then
//! sun and planet rotation, then starfield drift. Galaxy generation is *not*
//! part of the tick; it runs on demand from panel events.

use crate::body::{self, CelestialBody, SUN_SPIN_RATE};
use crate::camera::{CameraMode, CameraRig};
use crate::galaxy::{self, GalaxyCloud, GalaxyParams, ScatteredGalaxy, SCATTERED_GALAXY_COUNT};
use crate::input::KeyTransition;
use crate::spacecraft::Spacecraft;
use crate::starfield::Starfield;
use glam::{Vec2, Vec3};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::info;

/// Where the canonical galaxy sits in the scene.
pub const GALAXY_POSITION: Vec3 = Vec3::new(50.0, 0.0, 100.0);

pub struct Scene {
    pub sun_rotation: f32,
    pub planets: Vec<CelestialBody>,
    pub spacecraft: Spacecraft,
    pub camera: CameraRig,
    pub flight_mode: bool,

    pub galaxy_params: GalaxyParams,
    pub galaxy: GalaxyCloud,
    /// Bumped every regeneration; the renderer re-uploads (and frees the old
    /// buffer) when its copy lags behind.
    pub galaxy_generation: u64,

    /// Scattered galaxies only ever accumulate.
    pub scattered: Vec<ScatteredGalaxy>,
    pub starfield: Starfield,

    rng: SmallRng,
}

impl Scene {
    pub fn new() -> Self {
        let mut rng = SmallRng::from_entropy();

        let galaxy_params = GalaxyParams::default();
        let galaxy = galaxy::generate(&galaxy_params, &mut rng);
        let scattered = (0..SCATTERED_GALAXY_COUNT)
            .map(|_| galaxy::scatter(&mut rng))
            .collect::<Vec<_>>();
        let starfield = Starfield::new(&mut rng);

        info!(
            points = galaxy.len(),
            scattered = scattered.len(),
            "scene populated"
        );

        Self {
            sun_rotation: 0.0,
            planets: body::planets(),
            spacecraft: Spacecraft::new(),
            camera: CameraRig::new(),
            flight_mode: false,
            galaxy_params,
            galaxy,
            galaxy_generation: 0,
            scattered,
            starfield,
            rng,
        }
    }

    /// One frame of simulation. `mouse` is the latest pointer position in
    /// physical pixels.
    pub fn tick(&mut self, dt: f32, mouse: Vec2) {
        if self.flight_mode {
            self.spacecraft.integrate(dt);
            self.camera.follow(self.spacecraft.position);
        } else {
            self.camera.update_free();
        }

        self.sun_rotation += SUN_SPIN_RATE;
        for body in &mut self.planets {
            body.advance();
        }

        self.starfield.drift(mouse);
    }

    /// Replace the canonical galaxy from a fresh parameter set. The previous
    /// cloud is dropped here; the generation bump tells the renderer to free
    /// the stale GPU buffer instead of accumulating.
    pub fn regenerate_galaxy(&mut self, params: GalaxyParams) {
        self.galaxy_params = params.sanitized();
        self.galaxy = galaxy::generate(&self.galaxy_params, &mut self.rng);
        self.galaxy_generation += 1;
        info!(
            points = self.galaxy.len(),
            generation = self.galaxy_generation,
            "canonical galaxy regenerated"
        );
    }

    /// Spawn `n` more scattered galaxies. Existing ones are untouched.
    pub fn spawn_scattered(&mut self, n: usize) {
        for _ in 0..n {
            let g = galaxy::scatter(&mut self.rng);
            self.scattered.push(g);
        }
    }

    /// Flip between free-orbit and spacecraft-follow camera control.
    pub fn set_flight_mode(&mut self, enabled: bool) {
        self.flight_mode = enabled;
        self.camera.mode = if enabled {
            CameraMode::FollowSpacecraft
        } else {
            CameraMode::FreeOrbit
        };
    }

    pub fn reverse_spacecraft(&mut self) {
        self.spacecraft.reverse();
    }

    pub fn go_to_galaxy(&mut self) {
        self.camera.go_to(GALAXY_POSITION);
    }

    /// Route a debounced key transition into the flight intent.
    pub fn handle_key(&mut self, transition: KeyTransition) {
        self.spacecraft.handle_key(transition.key, transition.pressed);
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
