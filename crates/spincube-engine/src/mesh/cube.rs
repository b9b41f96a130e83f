use bytemuck::{Pod, Zeroable};

/// Interleaved vertex: position followed by color.
///
/// Layout: stride 24 bytes, position at offset 0, color at offset 12.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

impl Vertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x3, // position
        1 => Float32x3  // color
    ];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

const fn v(position: [f32; 3], color: [f32; 3]) -> Vertex {
    Vertex { position, color }
}

/// Unit cube centered on the origin, one color per corner.
#[rustfmt::skip]
pub const CUBE_VERTICES: [Vertex; 8] = [
    v([-0.5, -0.5, -0.5], [1.0, 0.0, 0.0]), // front-bottom-left
    v([ 0.5, -0.5, -0.5], [0.0, 1.0, 0.0]), // front-bottom-right
    v([ 0.5,  0.5, -0.5], [0.0, 0.0, 1.0]), // front-top-right
    v([-0.5,  0.5, -0.5], [1.0, 1.0, 0.0]), // front-top-left
    v([-0.5, -0.5,  0.5], [1.0, 0.0, 1.0]), // back-bottom-left
    v([ 0.5, -0.5,  0.5], [0.0, 1.0, 1.0]), // back-bottom-right
    v([ 0.5,  0.5,  0.5], [1.0, 1.0, 1.0]), // back-top-right
    v([-0.5,  0.5,  0.5], [0.5, 0.5, 0.5]), // back-top-left
];

/// Two triangles per face, faces in the order front, back, bottom, top, left, right.
#[rustfmt::skip]
pub const CUBE_INDICES: [u32; 36] = [
    0, 1, 2,  2, 3, 0,
    4, 5, 6,  6, 7, 4,
    4, 5, 1,  1, 0, 4,
    3, 2, 6,  6, 7, 3,
    0, 3, 7,  7, 4, 0,
    1, 5, 6,  6, 2, 1,
];

pub const CUBE_INDEX_COUNT: u32 = CUBE_INDICES.len() as u32;

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    fn triangles() -> Vec<[u32; 3]> {
        CUBE_INDICES
            .chunks_exact(3)
            .map(|t| [t[0], t[1], t[2]])
            .collect()
    }

    /// Returns `(axis, sign)` of the cube face all `verts` lie on, if any.
    fn shared_plane(verts: &BTreeSet<u32>) -> Option<(usize, bool)> {
        (0..3).find_map(|axis| {
            let coords: Vec<f32> = verts
                .iter()
                .map(|&i| CUBE_VERTICES[i as usize].position[axis])
                .collect();
            let first = coords[0];
            coords
                .iter()
                .all(|&c| c == first)
                .then_some((axis, first > 0.0))
        })
    }

    #[test]
    fn indices_stay_inside_vertex_table() {
        assert_eq!(CUBE_INDEX_COUNT, 36);
        assert!(CUBE_INDICES
            .iter()
            .all(|&i| (i as usize) < CUBE_VERTICES.len()));
    }

    #[test]
    fn twelve_triangles_form_six_faces() {
        let tris = triangles();
        assert_eq!(tris.len(), 12);

        let mut faces = BTreeSet::new();
        for pair in tris.chunks_exact(2) {
            let corners: BTreeSet<u32> = pair.iter().flatten().copied().collect();
            assert_eq!(corners.len(), 4, "face {pair:?} must span 4 corners");

            let plane = shared_plane(&corners)
                .unwrap_or_else(|| panic!("face {pair:?} is not axis aligned"));
            faces.insert(plane);
        }

        assert_eq!(faces.len(), 6);
    }

    #[test]
    fn triangles_are_not_degenerate() {
        for t in triangles() {
            assert!(t[0] != t[1] && t[1] != t[2] && t[0] != t[2], "{t:?}");
        }
    }

    #[test]
    fn vertex_layout_matches_interleaving() {
        let layout = Vertex::layout();
        assert_eq!(layout.array_stride, 24);
        assert_eq!(layout.attributes[0].offset, 0);
        assert_eq!(layout.attributes[0].shader_location, 0);
        assert_eq!(layout.attributes[1].offset, 12);
        assert_eq!(layout.attributes[1].shader_location, 1);
    }

    #[test]
    fn vertices_are_unit_cube_corners() {
        let corners: BTreeSet<[i8; 3]> = CUBE_VERTICES
            .iter()
            .map(|v| v.position.map(|c| if c > 0.0 { 1 } else { -1 }))
            .collect();
        assert_eq!(corners.len(), 8);
        assert!(CUBE_VERTICES
            .iter()
            .all(|v| v.position.iter().all(|c| c.abs() == 0.5)));
    }
}
