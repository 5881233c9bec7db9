use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// CPU-side vertex layout shared by every mesh in the demo.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

/// One contiguous run of indices drawn with a single material/texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubsetRange {
    pub first_index: u32,
    pub index_count: u32,
}

impl SubsetRange {
    /// Exclusive end of the index range.
    pub fn end(&self) -> u32 {
        self.first_index + self.index_count
    }
}

/// Indexed triangle mesh split into material subsets.
///
/// Subset order is draw order; the render layer issues one draw call per
/// subset, in sequence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MeshGeometry {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
    pub subsets: Vec<SubsetRange>,
}

impl MeshGeometry {
    pub fn subset_count(&self) -> usize {
        self.subsets.len()
    }

    /// True when every subset range lies within the index buffer.
    pub fn subsets_in_bounds(&self) -> bool {
        let count = self.indices.len() as u32;
        self.subsets.iter().all(|s| s.end() <= count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subset_bounds_check() {
        let geometry = MeshGeometry {
            vertices: vec![],
            indices: vec![0, 1, 2, 0, 2, 3],
            subsets: vec![SubsetRange {
                first_index: 0,
                index_count: 6,
            }],
        };
        assert!(geometry.subsets_in_bounds());

        let overflow = MeshGeometry {
            subsets: vec![SubsetRange {
                first_index: 3,
                index_count: 6,
            }],
            ..geometry
        };
        assert!(!overflow.subsets_in_bounds());
    }
}
