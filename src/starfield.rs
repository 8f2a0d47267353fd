//! Background starfield: a cube of random points that drifts with the pointer.

use glam::{Vec2, Vec3};
use rand::Rng;

pub const STAR_COUNT: usize = 8000;

/// Stars scatter uniformly in `[-EXTENT, EXTENT)^3`.
const EXTENT: f32 = 250.0;

/// Pointer pixels to radians per tick. Tiny on purpose: the field should
/// barely breathe, not swing.
const DRIFT_RATE: f32 = 8.0e-7;

#[derive(Debug, Clone)]
pub struct Starfield {
    pub positions: Vec<Vec3>,
    pub sizes: Vec<f32>,
    /// Accumulated rigid rotation of the whole field (about X then Y).
    pub rotation: Vec2,
}

impl Starfield {
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        let positions = (0..STAR_COUNT)
            .map(|_| {
                Vec3::new(
                    (rng.gen::<f32>() - 0.5) * 2.0 * EXTENT,
                    (rng.gen::<f32>() - 0.5) * 2.0 * EXTENT,
                    (rng.gen::<f32>() - 0.5) * 2.0 * EXTENT,
                )
            })
            .collect();
        let sizes = (0..STAR_COUNT)
            .map(|_| rng.gen::<f32>() * 0.8 + 0.1)
            .collect();

        Self {
            positions,
            sizes,
            rotation: Vec2::ZERO,
        }
    }

    /// Advance the field rotation from the current pointer position.
    pub fn drift(&mut self, mouse: Vec2) {
        self.rotation.x += mouse.y * DRIFT_RATE;
        self.rotation.y += mouse.x * DRIFT_RATE;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn field_fills_the_cube() {
        let field = Starfield::new(&mut SmallRng::seed_from_u64(7));
        assert_eq!(field.positions.len(), STAR_COUNT);
        assert_eq!(field.sizes.len(), STAR_COUNT);

        for p in &field.positions {
            assert!(p.abs().max_element() <= EXTENT);
        }
        for s in &field.sizes {
            assert!(*s >= 0.1 && *s < 0.9);
        }
    }

    #[test]
    fn drift_accumulates_with_the_pointer() {
        let mut field = Starfield::new(&mut SmallRng::seed_from_u64(7));
        for _ in 0..100 {
            field.drift(Vec2::new(640.0, 360.0));
        }
        assert!((field.rotation.y - 100.0 * 640.0 * DRIFT_RATE).abs() < 1e-6);
        assert!((field.rotation.x - 100.0 * 360.0 * DRIFT_RATE).abs() < 1e-6);

        // Pointer parked at the origin corner: no drift at all.
        let frozen = field.rotation;
        field.drift(Vec2::ZERO);
        assert_eq!(field.rotation, frozen);
    }
}
