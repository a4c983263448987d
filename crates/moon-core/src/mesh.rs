//! CPU-side geometry for the body sphere and marker disc.

use glam::Vec3;
use std::f32::consts::{PI, TAU};

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Latitude/longitude sphere with an equirectangular UV layout.
///
/// Vertex `(u, v)` sits at `lat_lon_to_vec3(90 - 180 v, 360 u - 180, radius)`,
/// so textures line up with projected markers. Row 0 is the north pole and
/// `v` grows southwards, matching image row order.
pub fn uv_sphere(radius: f32, width_segments: u32, height_segments: u32) -> MeshData {
    let width_segments = width_segments.max(3);
    let height_segments = height_segments.max(2);
    let row = width_segments + 1;

    let mut vertices = Vec::with_capacity((row * (height_segments + 1)) as usize);
    for iy in 0..=height_segments {
        let v = iy as f32 / height_segments as f32;
        let polar = v * PI;
        for ix in 0..=width_segments {
            let u = ix as f32 / width_segments as f32;
            let azimuth = u * TAU;
            let normal = Vec3::new(
                -azimuth.cos() * polar.sin(),
                polar.cos(),
                azimuth.sin() * polar.sin(),
            );
            vertices.push(Vertex {
                position: (normal * radius).to_array(),
                normal: normal.to_array(),
                uv: [u, v],
            });
        }
    }

    let mut indices = Vec::with_capacity((width_segments * height_segments * 6) as usize);
    for iy in 0..height_segments {
        for ix in 0..width_segments {
            let a = iy * row + ix + 1;
            let b = iy * row + ix;
            let c = (iy + 1) * row + ix;
            let d = (iy + 1) * row + ix + 1;
            // the pole rows collapse to a point, so each only needs one triangle
            if iy != 0 {
                indices.extend_from_slice(&[a, b, d]);
            }
            if iy != height_segments - 1 {
                indices.extend_from_slice(&[b, c, d]);
            }
        }
    }

    MeshData { vertices, indices }
}

/// Flat disc in the XY plane facing +Z, centred on the origin.
pub fn disc(radius: f32, segments: u32) -> MeshData {
    let segments = segments.max(3);
    let mut vertices = Vec::with_capacity(segments as usize + 2);
    vertices.push(Vertex {
        position: [0.0, 0.0, 0.0],
        normal: [0.0, 0.0, 1.0],
        uv: [0.5, 0.5],
    });
    for s in 0..=segments {
        let angle = s as f32 / segments as f32 * TAU;
        let (sin, cos) = angle.sin_cos();
        vertices.push(Vertex {
            position: [radius * cos, radius * sin, 0.0],
            normal: [0.0, 0.0, 1.0],
            uv: [(cos + 1.0) * 0.5, (sin + 1.0) * 0.5],
        });
    }
    let indices = (1..=segments).flat_map(|i| [i, i + 1, 0]).collect();
    MeshData { vertices, indices }
}
