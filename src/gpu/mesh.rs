//! Procedural meshes: UV spheres for the sun, halo shell and planets, and a
//! small dart-shaped hull for the spacecraft. Flat-color lit geometry; no
//! texture or model files are involved.

use bytemuck::{Pod, Zeroable};

#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

#[derive(Debug, Clone)]
pub struct MeshData {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }
}

/// Unit-radius UV sphere; callers scale through the model matrix.
pub fn uv_sphere(sectors: u32, stacks: u32) -> MeshData {
    let mut vertices = Vec::with_capacity(((stacks + 1) * (sectors + 1)) as usize);
    let mut indices = Vec::new();

    for stack in 0..=stacks {
        let phi = std::f32::consts::PI * stack as f32 / stacks as f32;
        let (sin_phi, cos_phi) = phi.sin_cos();
        for sector in 0..=sectors {
            let theta = std::f32::consts::TAU * sector as f32 / sectors as f32;
            let (sin_theta, cos_theta) = theta.sin_cos();
            let position = [sin_phi * cos_theta, cos_phi, sin_phi * sin_theta];
            vertices.push(MeshVertex {
                position,
                normal: position,
            });
        }
    }

    let ring = sectors + 1;
    for stack in 0..stacks {
        for sector in 0..sectors {
            let a = stack * ring + sector;
            let b = a + ring;
            indices.extend_from_slice(&[a, b, a + 1, a + 1, b, b + 1]);
        }
    }

    MeshData { vertices, indices }
}

/// Spacecraft hull: an elongated dart with two swept wings, flat-shaded.
/// Dimensions are pre-scale; the craft's 0.2 scale factor applies in the
/// model matrix. The nose points along +X.
pub fn spacecraft() -> MeshData {
    let nose = [6.0, 0.0, 0.0];
    let tail_top = [-4.0, 1.5, 0.0];
    let tail_left = [-4.0, -1.0, -2.0];
    let tail_right = [-4.0, -1.0, 2.0];
    let wing_left = [-2.0, 0.0, -6.0];
    let wing_right = [-2.0, 0.0, 6.0];

    let mut vertices = Vec::new();
    let mut indices = Vec::new();

    let mut face = |a: [f32; 3], b: [f32; 3], c: [f32; 3]| {
        let normal = face_normal(a, b, c);
        let base = vertices.len() as u32;
        for position in [a, b, c] {
            vertices.push(MeshVertex { position, normal });
        }
        indices.extend_from_slice(&[base, base + 1, base + 2]);
    };

    // Hull: three side faces and a base.
    face(nose, tail_top, tail_left);
    face(nose, tail_right, tail_top);
    face(nose, tail_left, tail_right);
    face(tail_top, tail_right, tail_left);

    // Wings, doubled so both sides render regardless of winding.
    face(nose, wing_left, tail_left);
    face(nose, tail_left, wing_left);
    face(nose, tail_right, wing_right);
    face(nose, wing_right, tail_right);

    MeshData { vertices, indices }
}

fn face_normal(a: [f32; 3], b: [f32; 3], c: [f32; 3]) -> [f32; 3] {
    let u = [b[0] - a[0], b[1] - a[1], b[2] - a[2]];
    let v = [c[0] - a[0], c[1] - a[1], c[2] - a[2]];
    let n = [
        u[1] * v[2] - u[2] * v[1],
        u[2] * v[0] - u[0] * v[2],
        u[0] * v[1] - u[1] * v[0],
    ];
    let len = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt().max(1e-6);
    [n[0] / len, n[1] / len, n[2] / len]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sphere_vertex_and_index_counts() {
        let mesh = uv_sphere(16, 12);
        assert_eq!(mesh.vertices.len(), 17 * 13);
        assert_eq!(mesh.indices.len(), (16 * 12 * 6) as usize);
        assert_eq!(mesh.index_count() % 3, 0);
    }

    #[test]
    fn sphere_vertices_sit_on_the_unit_shell() {
        let mesh = uv_sphere(12, 8);
        for v in &mesh.vertices {
            let r = (v.position[0].powi(2) + v.position[1].powi(2) + v.position[2].powi(2)).sqrt();
            assert!((r - 1.0).abs() < 1e-4);
            // Normals point radially on a sphere.
            for (p, n) in v.position.iter().zip(v.normal) {
                assert!((p - n).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn sphere_indices_stay_in_bounds() {
        let mesh = uv_sphere(24, 16);
        let max = *mesh.indices.iter().max().unwrap();
        assert!((max as usize) < mesh.vertices.len());
    }

    #[test]
    fn spacecraft_normals_are_unit_length() {
        let mesh = spacecraft();
        assert!(!mesh.vertices.is_empty());
        assert_eq!(mesh.indices.len(), mesh.vertices.len());
        for v in &mesh.vertices {
            let len = (v.normal[0].powi(2) + v.normal[1].powi(2) + v.normal[2].powi(2)).sqrt();
            assert!((len - 1.0).abs() < 1e-4);
        }
    }
}
