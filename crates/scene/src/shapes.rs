use crate::geometry::{MeshGeometry, SubsetRange, Vertex};

/// Axis-aligned cube faces in skybox face order: +X, -X, +Y, -Y, +Z, -Z.
/// Four vertices per face with outward normals, two triangles each.
fn cube_faces(half: f32) -> (Vec<Vertex>, Vec<u32>) {
    let p = half;
    #[rustfmt::skip]
    let face_corners: [([f32; 3], [[f32; 3]; 4]); 6] = [
        ([ 1.0,  0.0,  0.0], [[ p, -p,  p], [ p, -p, -p], [ p,  p, -p], [ p,  p,  p]]),
        ([-1.0,  0.0,  0.0], [[-p, -p, -p], [-p, -p,  p], [-p,  p,  p], [-p,  p, -p]]),
        ([ 0.0,  1.0,  0.0], [[-p,  p,  p], [ p,  p,  p], [ p,  p, -p], [-p,  p, -p]]),
        ([ 0.0, -1.0,  0.0], [[-p, -p, -p], [ p, -p, -p], [ p, -p,  p], [-p, -p,  p]]),
        ([ 0.0,  0.0,  1.0], [[-p, -p,  p], [ p, -p,  p], [ p,  p,  p], [-p,  p,  p]]),
        ([ 0.0,  0.0, -1.0], [[ p, -p, -p], [-p, -p, -p], [-p,  p, -p], [ p,  p, -p]]),
    ];
    const UVS: [[f32; 2]; 4] = [[0.0, 1.0], [1.0, 1.0], [1.0, 0.0], [0.0, 0.0]];

    let mut vertices = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);
    for (face, (normal, corners)) in face_corners.iter().enumerate() {
        let base = (face * 4) as u32;
        for (corner, uv) in corners.iter().zip(UVS) {
            vertices.push(Vertex {
                position: *corner,
                normal: *normal,
                uv,
            });
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base + 2, base + 3, base]);
    }
    (vertices, indices)
}

/// A cube split into six single-face subsets, one per skybox face, in the
/// fixed +X, -X, +Y, -Y, +Z, -Z order. The camera sits inside it; culling
/// is disabled when it is drawn, so the outward winding is irrelevant.
pub fn skybox_box(size: f32) -> MeshGeometry {
    let (vertices, indices) = cube_faces(size * 0.5);
    let subsets = (0..6)
        .map(|face| SubsetRange {
            first_index: face * 6,
            index_count: 6,
        })
        .collect();
    MeshGeometry {
        vertices,
        indices,
        subsets,
    }
}

/// A single-subset cube used as the demo's target mesh.
pub fn target_block(size: f32) -> MeshGeometry {
    let (vertices, indices) = cube_faces(size * 0.5);
    let index_count = indices.len() as u32;
    MeshGeometry {
        vertices,
        indices,
        subsets: vec![SubsetRange {
            first_index: 0,
            index_count,
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skybox_has_six_face_subsets_in_order() {
        let skybox = skybox_box(500.0);
        assert_eq!(skybox.subset_count(), 6);
        assert!(skybox.subsets_in_bounds());
        for (face, subset) in skybox.subsets.iter().enumerate() {
            assert_eq!(subset.first_index, face as u32 * 6);
            assert_eq!(subset.index_count, 6);
        }
    }

    #[test]
    fn skybox_extents_match_requested_size() {
        let skybox = skybox_box(500.0);
        let max = skybox
            .vertices
            .iter()
            .flat_map(|v| v.position)
            .fold(0.0_f32, |acc, c| acc.max(c.abs()));
        assert_eq!(max, 250.0);
    }

    #[test]
    fn target_block_is_one_subset() {
        let block = target_block(2.0);
        assert_eq!(block.subset_count(), 1);
        assert_eq!(block.indices.len(), 36);
        assert_eq!(block.vertices.len(), 24);
        assert!(block.subsets_in_bounds());
    }
}
