//! Celestial bodies and the per-tick rotation update.
//!
//! Bodies are statically offset from the sun and spin in place about the
//! world Y axis — a display simplification, not orbital mechanics. Rotation
//! accumulates without wrapping; the renderer's trig wraps it implicitly.

use glam::Vec3;
use std::f32::consts::TAU;

/// Shared base angular rate: one simulated Earth year per 3600 ticks.
pub const EARTH_YEAR: f32 = TAU * (1.0 / 60.0) * (1.0 / 60.0);

/// The sun's own spin per tick, independent of the orbital base rate.
pub const SUN_SPIN_RATE: f32 = 0.001;

/// Radius of the sun sphere.
pub const SUN_RADIUS: f32 = 9.0;

/// One planet: fixed shape and placement, mutable spin.
#[derive(Debug, Clone)]
pub struct CelestialBody {
    pub name: &'static str,
    pub radius: f32,
    /// Offset from the sun in the orbital plane.
    pub offset: Vec3,
    /// Accumulated rotation about world Y, radians. Unbounded.
    pub rotation: f32,
    /// Multiplier of [`EARTH_YEAR`] applied each tick.
    pub rate_multiplier: f32,
    /// Flat display color (no texture assets).
    pub color: Vec3,
}

impl CelestialBody {
    fn new(
        name: &'static str,
        radius: f32,
        x: f32,
        z: f32,
        rate_multiplier: f32,
        color: Vec3,
    ) -> Self {
        Self {
            name,
            radius,
            offset: Vec3::new(x, 0.0, z),
            rotation: 0.0,
            rate_multiplier,
            color,
        }
    }

    /// Advance this body's spin by one tick.
    pub fn advance(&mut self) {
        self.rotation += EARTH_YEAR * self.rate_multiplier;
    }
}

/// The eight planets, innermost first. Rate multipliers fall monotonically
/// from x4 (Mercury) to x0.025 (Neptune).
pub fn planets() -> Vec<CelestialBody> {
    vec![
        CelestialBody::new("mercury", 2.0, 16.0, 0.0, 4.0, Vec3::new(0.62, 0.58, 0.55)),
        CelestialBody::new("venus", 3.0, 0.0, 32.0, 2.0, Vec3::new(0.85, 0.70, 0.45)),
        CelestialBody::new("earth", 4.0, -48.0, 0.0, 1.0, Vec3::new(0.25, 0.45, 0.80)),
        CelestialBody::new("mars", 5.0, 0.0, -64.0, 0.5, Vec3::new(0.80, 0.40, 0.25)),
        CelestialBody::new("jupiter", 6.0, 80.0, 0.0, 0.2, Vec3::new(0.78, 0.65, 0.50)),
        CelestialBody::new("saturn", 7.0, 0.0, 75.0, 0.1, Vec3::new(0.85, 0.78, 0.58)),
        CelestialBody::new("uranus", 8.0, -112.0, 0.0, 0.05, Vec3::new(0.55, 0.78, 0.82)),
        CelestialBody::new("neptune", 9.0, 0.0, -130.0, 0.025, Vec3::new(0.30, 0.42, 0.85)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eight_planets_with_descending_rates() {
        let planets = planets();
        assert_eq!(planets.len(), 8);

        let expected = [4.0, 2.0, 1.0, 0.5, 0.2, 0.1, 0.05, 0.025];
        for (body, rate) in planets.iter().zip(expected) {
            assert_eq!(body.rate_multiplier, rate);
        }
        for pair in planets.windows(2) {
            assert!(pair[0].rate_multiplier > pair[1].rate_multiplier);
        }
    }

    #[test]
    fn rotation_accumulates_linearly_per_body() {
        let mut planets = planets();
        let ticks = 1000;
        for _ in 0..ticks {
            for body in &mut planets {
                body.advance();
            }
        }
        for body in &planets {
            let expected = ticks as f32 * EARTH_YEAR * body.rate_multiplier;
            assert!(
                (body.rotation - expected).abs() < 1e-3,
                "{}: {} != {}",
                body.name,
                body.rotation,
                expected
            );
        }
    }

    #[test]
    fn rotation_is_independent_per_body() {
        // Advancing one body never touches another.
        let mut planets = planets();
        planets[0].advance();
        assert!(planets[0].rotation > 0.0);
        for body in &planets[1..] {
            assert_eq!(body.rotation, 0.0);
        }
    }

    #[test]
    fn rotation_never_wraps() {
        let mut mercury = planets().swap_remove(0);
        // Enough ticks to pass TAU many times over.
        for _ in 0..100_000 {
            mercury.advance();
        }
        assert!(mercury.rotation > TAU * 10.0);
    }
}
