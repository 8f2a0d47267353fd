//! Procedural spiral-galaxy point clouds.
//!
//! The generator turns a [`GalaxyParams`] set and a random source into two
//! parallel buffers (positions and colors) that the renderer consumes as a
//! point-cloud primitive. The shape is deterministic — evenly spaced arms
//! twisted by radius — while per-point jitter comes from the RNG, so two runs
//! only match when the RNG is seeded (tests do, the app does not).
//!
//! Two variants exist:
//! - the *canonical* galaxy, driven by the settings panel and regenerated in
//!   place whenever a parameter changes;
//! - *scattered* galaxies, spawned in a batch with fully random parameters,
//!   a random rigid rotation and a random placement offset, and never removed.

use glam::Vec3;
use rand::Rng;
use std::f32::consts::TAU;

/// Default parameter set for the canonical galaxy.
const DEFAULT_COUNT: u32 = 70_000;
const DEFAULT_SIZE: f32 = 0.01;
const DEFAULT_RADIUS: f32 = 7.0;
const DEFAULT_BRANCHES: u32 = 8;

/// How many scattered galaxies the initial scene spawns.
pub const SCATTERED_GALAXY_COUNT: usize = 15;

/// Half-size of the cube scattered galaxies are placed in.
const SCATTER_EXTENT: f32 = 200.0;

/// Parameters for one galaxy point cloud.
///
/// `randomness` is carried for parameter-set compatibility but does not feed
/// the generator; only `randomness_power` shapes the jitter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GalaxyParams {
    /// Number of points.
    pub count: u32,
    /// Render size of each point. Not used by the generator itself.
    pub size: f32,
    /// Maximum radial extent of the arms.
    pub radius: f32,
    /// Number of evenly spaced spiral arms.
    pub branches: u32,
    /// Twist factor; arms curve more the farther out a point sits. May be negative.
    pub spin: f32,
    /// Carried in saved parameter sets; not consumed by generation.
    pub randomness: f32,
    /// Jitter falloff exponent; higher concentrates jitter near the arm centerline.
    pub randomness_power: u32,
    /// Gradient color at the core.
    pub inside_color: Vec3,
    /// Gradient color at the rim.
    pub outside_color: Vec3,
}

impl Default for GalaxyParams {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            size: DEFAULT_SIZE,
            radius: DEFAULT_RADIUS,
            branches: DEFAULT_BRANCHES,
            spin: 1.0,
            randomness: 0.3,
            randomness_power: 5,
            inside_color: Vec3::new(1.0, 0.376, 0.188),  // #ff6030
            outside_color: Vec3::new(0.106, 0.224, 0.518), // #1b3984
        }
    }
}

impl GalaxyParams {
    /// Clamp fields to the generator's invariants: at least one point, at
    /// least one branch, strictly positive radius.
    pub fn sanitized(mut self) -> Self {
        self.count = self.count.max(1);
        self.branches = self.branches.max(1);
        if !(self.radius > 0.0) {
            self.radius = DEFAULT_RADIUS;
        }
        self.randomness_power = self.randomness_power.max(1);
        self
    }

    /// Draw a full parameter set from the fixed spawn ranges used by the
    /// "spawn random galaxies" feature.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            count: rng.gen_range(100..=10_000),
            size: rng.gen_range(0.001..0.1),
            radius: rng.gen_range(15.0..19.0),
            branches: rng.gen_range(1..=10),
            spin: rng.gen_range(-5.0..5.0),
            randomness: rng.gen_range(0.0..2.0),
            randomness_power: rng.gen_range(1..=10),
            inside_color: random_color(rng),
            outside_color: random_color(rng),
        }
    }
}

fn random_color<R: Rng>(rng: &mut R) -> Vec3 {
    Vec3::new(rng.gen::<f32>(), rng.gen::<f32>(), rng.gen::<f32>())
}

/// Generated point cloud: parallel position and color buffers.
#[derive(Debug, Clone)]
pub struct GalaxyCloud {
    pub positions: Vec<Vec3>,
    pub colors: Vec<Vec3>,
    /// Point render size, copied from the generating parameters.
    pub point_size: f32,
}

impl GalaxyCloud {
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Angle of the arm that point `index` belongs to: points cycle through the
/// `branches` arms, so indices `i` and `i + branches` share an arm.
#[inline]
pub(crate) fn branch_angle(index: u32, branches: u32) -> f32 {
    (index % branches) as f32 / branches as f32 * TAU
}

/// One axis of jitter: random sign times `uniform(0,1)^power`. Raising the
/// draw to `power` pushes mass toward zero, thinning the halo around each arm.
#[inline]
pub(crate) fn jitter_axis<R: Rng>(rng: &mut R, power: u32) -> f32 {
    let magnitude = rng.gen::<f32>().powi(power as i32);
    let sign = if rng.gen::<f32>() < 0.5 { 1.0 } else { -1.0 };
    sign * magnitude
}

/// Gradient color for a point at radial distance `x`, interpolated against
/// `color_radius`. The lerp is deliberately unclamped: the scattered-galaxy
/// variant passes the default radius here while `x` can run well past it.
#[inline]
pub(crate) fn point_color(params: &GalaxyParams, x: f32, color_radius: f32) -> Vec3 {
    let t = x / color_radius;
    params.inside_color + (params.outside_color - params.inside_color) * t
}

/// Generate a galaxy cloud, interpolating colors against the instance radius.
pub fn generate<R: Rng>(params: &GalaxyParams, rng: &mut R) -> GalaxyCloud {
    generate_with_color_radius(params, params.radius, rng)
}

fn generate_with_color_radius<R: Rng>(
    params: &GalaxyParams,
    color_radius: f32,
    rng: &mut R,
) -> GalaxyCloud {
    let count = params.count as usize;
    let mut positions = Vec::with_capacity(count);
    let mut colors = Vec::with_capacity(count);

    for i in 0..params.count {
        let x = rng.gen::<f32>() * params.radius;
        let angle = branch_angle(i, params.branches) + x * params.spin;

        let jx = jitter_axis(rng, params.randomness_power);
        let jy = jitter_axis(rng, params.randomness_power);
        let jz = jitter_axis(rng, params.randomness_power);

        positions.push(Vec3::new(
            angle.sin() * x + jx,
            jy,
            angle.cos() * x + jz,
        ));
        colors.push(point_color(params, x, color_radius));
    }

    GalaxyCloud {
        positions,
        colors,
        point_size: params.size,
    }
}

/// A randomly parameterized galaxy placed somewhere in the scene.
///
/// The rotation and offset stay separate from the point data; the renderer
/// applies them as a rigid model transform.
#[derive(Debug, Clone)]
pub struct ScatteredGalaxy {
    pub cloud: GalaxyCloud,
    /// Euler rotation (XYZ order), each angle uniform in `[0, TAU)`.
    pub rotation: Vec3,
    /// Placement offset, uniform in `[-SCATTER_EXTENT, SCATTER_EXTENT)^3`.
    pub offset: Vec3,
}

/// Spawn one scattered galaxy with fully random parameters and placement.
///
/// Color interpolation here runs against the *default* radius constant, not
/// the instance's sampled radius: sampled radii land in 15..19 while the
/// divisor stays 7, so rim colors extrapolate past the gradient endpoints
/// and the outer arms take on the hot, oversaturated look the scattered
/// galaxies are known for. See `scattered_colors_extrapolate_past_gradient`
/// before changing this.
pub fn scatter<R: Rng>(rng: &mut R) -> ScatteredGalaxy {
    let params = GalaxyParams::random(rng);

    let rotation = Vec3::new(
        rng.gen::<f32>() * TAU,
        rng.gen::<f32>() * TAU,
        rng.gen::<f32>() * TAU,
    );
    let offset = Vec3::new(
        rng.gen::<f32>() * 2.0 * SCATTER_EXTENT - SCATTER_EXTENT,
        rng.gen::<f32>() * 2.0 * SCATTER_EXTENT - SCATTER_EXTENT,
        rng.gen::<f32>() * 2.0 * SCATTER_EXTENT - SCATTER_EXTENT,
    );

    let cloud = generate_with_color_radius(&params, GalaxyParams::default().radius, rng);

    ScatteredGalaxy {
        cloud,
        rotation,
        offset,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(0x5EED)
    }

    #[test]
    fn generates_exactly_count_points_and_colors() {
        let params = GalaxyParams {
            count: 1234,
            ..GalaxyParams::default()
        };
        let cloud = generate(&params, &mut rng());
        assert_eq!(cloud.positions.len(), 1234);
        assert_eq!(cloud.colors.len(), 1234);
    }

    #[test]
    fn branch_angles_repeat_every_branches_indices() {
        let branches = 4;
        for i in 0..64 {
            assert_eq!(branch_angle(i, branches), branch_angle(i + branches, branches));
        }
        // And consecutive indices land on distinct arms.
        assert_ne!(branch_angle(0, branches), branch_angle(1, branches));
    }

    #[test]
    fn jitter_magnitude_shrinks_as_power_grows() {
        let mut r = rng();
        let mean_abs = |power: u32, r: &mut SmallRng| {
            let n = 20_000;
            (0..n).map(|_| jitter_axis(r, power).abs()).sum::<f32>() / n as f32
        };

        let mut previous = f32::INFINITY;
        for power in [1, 2, 5, 10] {
            let mean = mean_abs(power, &mut r);
            assert!(
                mean < previous,
                "mean |jitter| should fall with power: {mean} !< {previous} at power {power}"
            );
            previous = mean;
        }
        // power = 1 leaves the draw uniform(0,1): mean near 0.5.
        assert!((mean_abs(1, &mut r) - 0.5).abs() < 0.02);
    }

    #[test]
    fn color_gradient_hits_both_endpoints() {
        let params = GalaxyParams::default();
        let inside = point_color(&params, 0.0, params.radius);
        let outside = point_color(&params, params.radius, params.radius);
        assert!((inside - params.inside_color).length() < 1e-6);
        assert!((outside - params.outside_color).length() < 1e-6);
    }

    #[test]
    fn flat_unspun_galaxy_stays_inside_jittered_disc() {
        let params = GalaxyParams {
            count: 100,
            branches: 4,
            radius: 10.0,
            spin: 0.0,
            randomness_power: 1,
            ..GalaxyParams::default()
        };
        let cloud = generate(&params, &mut rng());
        assert_eq!(cloud.len(), 100);

        // Jitter is at most 1 per axis, so y is bounded by 1 and the
        // horizontal distance by radius plus the diagonal of the xz jitter.
        let horizontal_bound = params.radius + std::f32::consts::SQRT_2 + 1e-4;
        for p in &cloud.positions {
            assert!(p.y.abs() <= 1.0, "y out of jitter bound: {}", p.y);
            let horizontal = (p.x * p.x + p.z * p.z).sqrt();
            assert!(
                horizontal <= horizontal_bound,
                "point past disc: {horizontal} > {horizontal_bound}"
            );
        }
    }

    #[test]
    fn random_params_respect_spawn_ranges() {
        let mut r = rng();
        for _ in 0..200 {
            let p = GalaxyParams::random(&mut r);
            assert!((100..=10_000).contains(&p.count));
            assert!(p.size >= 0.001 && p.size < 0.1);
            assert!(p.radius >= 15.0 && p.radius < 19.0);
            assert!((1..=10).contains(&p.branches));
            assert!(p.spin >= -5.0 && p.spin < 5.0);
            assert!((1..=10).contains(&p.randomness_power));
            for c in [p.inside_color, p.outside_color] {
                assert!(c.min_element() >= 0.0 && c.max_element() < 1.0);
            }
        }
    }

    /// Pins the scattered-galaxy color behavior: interpolation runs against
    /// the default radius (7) while the instance radius is 15..19, so points
    /// in the outer half extrapolate past the outside color instead of
    /// clamping to it. Tightening this to the instance radius would visibly
    /// recolor every scattered galaxy.
    #[test]
    fn scattered_colors_extrapolate_past_gradient() {
        let params = GalaxyParams {
            radius: 16.0,
            inside_color: Vec3::ZERO,
            outside_color: Vec3::ONE,
            ..GalaxyParams::default()
        };
        let rim = point_color(&params, params.radius, GalaxyParams::default().radius);
        // 16 / 7 > 2: well past the nominal endpoint.
        assert!(rim.x > 2.0);

        // Whole-cloud check: scatter() must produce some out-of-gamut colors.
        let galaxy = scatter(&mut rng());
        assert!(galaxy
            .cloud
            .colors
            .iter()
            .any(|c| c.min_element() < 0.0 || c.max_element() > 1.0));
    }

    #[test]
    fn scatter_placement_and_rotation_stay_in_range() {
        let mut r = rng();
        for _ in 0..20 {
            let g = scatter(&mut r);
            for axis in [g.rotation.x, g.rotation.y, g.rotation.z] {
                assert!((0.0..TAU).contains(&axis));
            }
            for axis in [g.offset.x, g.offset.y, g.offset.z] {
                assert!(axis.abs() <= SCATTER_EXTENT);
            }
        }
    }

    #[test]
    fn sanitize_restores_degenerate_params() {
        let p = GalaxyParams {
            count: 0,
            branches: 0,
            radius: -3.0,
            randomness_power: 0,
            ..GalaxyParams::default()
        }
        .sanitized();
        assert_eq!(p.count, 1);
        assert_eq!(p.branches, 1);
        assert!(p.radius > 0.0);
        assert_eq!(p.randomness_power, 1);
    }
}
