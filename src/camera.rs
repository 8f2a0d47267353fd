//! Camera rig: free orbit and spacecraft-follow modes.
//!
//! The orbit half is a yaw/pitch/distance rig around a movable target; mouse
//! drag rotates and the wheel zooms. Follow mode pins the eye to a fixed
//! offset behind and above the craft every tick. The two never fight: orbit
//! input is ignored while follow mode is active, and a mode flip takes
//! effect on the very next tick without any settling.

use glam::{Mat4, Vec3};

/// Eye offset from the spacecraft while following it.
pub const FOLLOW_OFFSET: Vec3 = Vec3::new(-10.0, 10.0, 20.0);

/// Eye offset from the galaxy center for the "go to galaxy" jump.
pub const GALAXY_VIEW_OFFSET: Vec3 = Vec3::new(3.0, 5.0, 10.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraMode {
    FreeOrbit,
    FollowSpacecraft,
}

/// Free-orbit state: spherical coordinates around a target.
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
    pub target: Vec3,
}

impl OrbitCamera {
    fn new() -> Self {
        let mut orbit = Self {
            yaw: 0.0,
            pitch: 0.0,
            distance: 1.0,
            target: Vec3::ZERO,
        };
        // Initial framing: eye at (-10, 10, 20) looking at the origin.
        orbit.frame_offset(Vec3::ZERO, Vec3::new(-10.0, 10.0, 20.0));
        orbit
    }

    /// Place the rig so the eye sits at `target + offset`, looking at `target`.
    pub fn frame_offset(&mut self, target: Vec3, offset: Vec3) {
        self.target = target;
        self.distance = offset.length().max(0.1);
        self.pitch = (offset.y / self.distance).asin();
        self.yaw = offset.x.atan2(offset.z);
    }

    pub fn position(&self) -> Vec3 {
        let x = self.distance * self.pitch.cos() * self.yaw.sin();
        let y = self.distance * self.pitch.sin();
        let z = self.distance * self.pitch.cos() * self.yaw.cos();
        self.target + Vec3::new(x, y, z)
    }

    fn rotate(&mut self, dx: f32, dy: f32) {
        self.yaw -= dx * 0.005;
        self.pitch = (self.pitch + dy * 0.005).clamp(-1.5, 1.5);
    }

    fn zoom(&mut self, scroll: f32) {
        self.distance = (self.distance - scroll * 0.3 * self.distance.max(1.0) * 0.1)
            .clamp(0.5, 500.0);
    }
}

/// The scene camera: orbit rig plus follow mode, resolved once per tick into
/// an eye position and look-at target.
#[derive(Debug, Clone)]
pub struct CameraRig {
    pub mode: CameraMode,
    pub orbit: OrbitCamera,
    position: Vec3,
    target: Vec3,
}

impl CameraRig {
    pub fn new() -> Self {
        let orbit = OrbitCamera::new();
        let position = orbit.position();
        let target = orbit.target;
        Self {
            mode: CameraMode::FreeOrbit,
            orbit,
            position,
            target,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }

    /// Mouse drag input. Ignored while following the spacecraft.
    pub fn rotate(&mut self, dx: f32, dy: f32) {
        if self.mode == CameraMode::FreeOrbit {
            self.orbit.rotate(dx, dy);
        }
    }

    /// Scroll wheel input. Ignored while following the spacecraft.
    pub fn zoom(&mut self, scroll: f32) {
        if self.mode == CameraMode::FreeOrbit {
            self.orbit.zoom(scroll);
        }
    }

    /// Per-tick resolve in free-orbit mode.
    pub fn update_free(&mut self) {
        self.position = self.orbit.position();
        self.target = self.orbit.target;
    }

    /// Per-tick resolve in follow mode: pin to the craft.
    pub fn follow(&mut self, craft_position: Vec3) {
        self.position = craft_position + FOLLOW_OFFSET;
        self.target = craft_position;
    }

    /// Jump the free camera to frame the canonical galaxy.
    pub fn go_to(&mut self, galaxy_position: Vec3) {
        self.orbit.frame_offset(galaxy_position, GALAXY_VIEW_OFFSET);
        self.update_free();
    }
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_framing_matches_scene_defaults() {
        let rig = CameraRig::new();
        let expected = Vec3::new(-10.0, 10.0, 20.0);
        assert!((rig.position() - expected).length() < 1e-3);
        assert_eq!(rig.target(), Vec3::ZERO);
    }

    #[test]
    fn follow_pins_to_craft_offset_immediately() {
        let mut rig = CameraRig::new();
        rig.mode = CameraMode::FollowSpacecraft;

        let craft = Vec3::new(40.0, 5.0, -12.0);
        rig.follow(craft);

        assert_eq!(rig.position(), craft + FOLLOW_OFFSET);
        assert_eq!(rig.target(), craft);
    }

    #[test]
    fn orbit_input_is_suppressed_while_following() {
        let mut rig = CameraRig::new();
        rig.mode = CameraMode::FollowSpacecraft;
        let before = rig.orbit.clone();

        rig.rotate(100.0, 50.0);
        rig.zoom(3.0);

        assert_eq!(rig.orbit.yaw, before.yaw);
        assert_eq!(rig.orbit.pitch, before.pitch);
        assert_eq!(rig.orbit.distance, before.distance);
    }

    #[test]
    fn returning_to_free_orbit_resumes_the_rig_state() {
        let mut rig = CameraRig::new();
        let free_position = {
            rig.update_free();
            rig.position()
        };

        rig.mode = CameraMode::FollowSpacecraft;
        rig.follow(Vec3::new(500.0, 0.0, 0.0));
        assert_ne!(rig.position(), free_position);

        rig.mode = CameraMode::FreeOrbit;
        rig.update_free();
        assert!((rig.position() - free_position).length() < 1e-4);
    }

    #[test]
    fn go_to_galaxy_frames_the_requested_offset() {
        let mut rig = CameraRig::new();
        let galaxy = Vec3::new(50.0, 0.0, 100.0);
        rig.go_to(galaxy);

        assert!((rig.position() - (galaxy + GALAXY_VIEW_OFFSET)).length() < 1e-2);
        assert_eq!(rig.target(), galaxy);
    }

    #[test]
    fn pitch_stays_clamped_under_wild_drag() {
        let mut rig = CameraRig::new();
        rig.rotate(0.0, 1.0e6);
        assert!(rig.orbit.pitch <= 1.5);
        rig.rotate(0.0, -2.0e6);
        assert!(rig.orbit.pitch >= -1.5);
    }
}
