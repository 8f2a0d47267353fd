//! Spacecraft flight state and per-tick integration.
//!
//! Six keys drive a per-axis intent vector (-1, 0 or +1 per axis); each tick
//! integrates `position += intent * FLIGHT_SPEED * dt` while flight mode is
//! on. Two point lights ride the hull at fixed offsets and follow every move.
//!
//! Integration uses the frame delta, never the absolute clock, so speed is
//! constant over a session: after time `t` at full intent the craft has
//! moved exactly `FLIGHT_SPEED * t` on that axis.

use crate::input::KeyCode;
use glam::Vec3;
use std::f32::consts::PI;

/// Cruise speed in world units per second.
pub const FLIGHT_SPEED: f32 = 6.0;

/// Uniform render scale of the craft mesh.
pub const SPACECRAFT_SCALE: f32 = 0.2;

/// Offsets of the two hull lights relative to the craft position.
pub const FRONT_LIGHT_OFFSET: Vec3 = Vec3::new(-1.0, 0.0, 0.0);
pub const MID_LIGHT_OFFSET: Vec3 = Vec3::new(-5.0, -1.0, 0.0);

#[derive(Debug, Clone)]
pub struct Spacecraft {
    pub position: Vec3,
    /// Heading about world Y; the reverse command flips it by 180 degrees.
    pub yaw: f32,
    /// Per-axis directional intent, each component in {-1, 0, 1}.
    pub intent: Vec3,
    /// Hull light positions, derived from `position` after each integration.
    pub front_light: Vec3,
    pub mid_light: Vec3,
}

impl Spacecraft {
    pub fn new() -> Self {
        let position = Vec3::new(20.0, 15.0, 0.0);
        Self {
            position,
            yaw: 0.0,
            intent: Vec3::ZERO,
            front_light: position + FRONT_LIGHT_OFFSET,
            mid_light: position + MID_LIGHT_OFFSET,
        }
    }

    /// Route a key transition into the intent vector.
    ///
    /// Releasing either key of an axis zeroes the whole axis: letting go of
    /// Left while still holding Right stops x motion until Right is pressed
    /// again.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) {
        if pressed {
            match key {
                KeyCode::Up => self.intent.y = 1.0,
                KeyCode::Down => self.intent.y = -1.0,
                KeyCode::Left => self.intent.x = -1.0,
                KeyCode::Right => self.intent.x = 1.0,
                KeyCode::W => self.intent.z = 1.0,
                KeyCode::S => self.intent.z = -1.0,
                _ => {}
            }
        } else {
            match key {
                KeyCode::Up | KeyCode::Down => self.intent.y = 0.0,
                KeyCode::Left | KeyCode::Right => self.intent.x = 0.0,
                KeyCode::W | KeyCode::S => self.intent.z = 0.0,
                _ => {}
            }
        }
    }

    /// Integrate one tick of flight and reseat the hull lights.
    pub fn integrate(&mut self, dt: f32) {
        self.position += self.intent * FLIGHT_SPEED * dt;
        self.update_lights();
    }

    /// Flip heading 180 degrees about world Y. Intent is untouched, so a
    /// held key keeps pushing along the same world axis.
    pub fn reverse(&mut self) {
        self.yaw += PI;
    }

    fn update_lights(&mut self) {
        self.front_light = self.position + FRONT_LIGHT_OFFSET;
        self.mid_light = self.position + MID_LIGHT_OFFSET;
    }
}

impl Default for Spacecraft {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_press_and_release_round_trips_intent() {
        let mut craft = Spacecraft::new();
        assert_eq!(craft.intent.x, 0.0);

        craft.handle_key(KeyCode::Right, true);
        assert_eq!(craft.intent.x, 1.0);

        craft.handle_key(KeyCode::Right, false);
        assert_eq!(craft.intent.x, 0.0);
    }

    #[test]
    fn releasing_opposite_key_still_zeroes_axis() {
        // Key-up of either key on an axis clears the whole axis.
        let mut craft = Spacecraft::new();
        craft.handle_key(KeyCode::Right, true);
        craft.handle_key(KeyCode::Left, false);
        assert_eq!(craft.intent.x, 0.0);
    }

    #[test]
    fn full_intent_moves_at_flight_speed() {
        let mut craft = Spacecraft::new();
        let start = craft.position;
        craft.intent = Vec3::new(1.0, 0.0, 0.0);

        // 120 ticks of 1/60 s = 2 seconds of flight.
        for _ in 0..120 {
            craft.integrate(1.0 / 60.0);
        }

        let moved = craft.position.x - start.x;
        assert!((moved - FLIGHT_SPEED * 2.0).abs() < 1e-3);
        assert_eq!(craft.position.y, start.y);
        assert_eq!(craft.position.z, start.z);
    }

    #[test]
    fn zero_intent_never_moves() {
        let mut craft = Spacecraft::new();
        let start = craft.position;
        for _ in 0..100 {
            craft.integrate(0.5);
        }
        assert_eq!(craft.position, start);
    }

    #[test]
    fn lights_follow_the_hull() {
        let mut craft = Spacecraft::new();
        craft.intent = Vec3::new(0.0, 0.0, 1.0);
        craft.integrate(1.0);

        assert_eq!(craft.front_light, craft.position + FRONT_LIGHT_OFFSET);
        assert_eq!(craft.mid_light, craft.position + MID_LIGHT_OFFSET);
    }

    #[test]
    fn reverse_flips_heading_without_touching_intent() {
        let mut craft = Spacecraft::new();
        craft.handle_key(KeyCode::W, true);
        craft.reverse();
        assert!((craft.yaw - PI).abs() < 1e-6);
        assert_eq!(craft.intent.z, 1.0);

        craft.reverse();
        assert!((craft.yaw - 2.0 * PI).abs() < 1e-6);
    }
}
