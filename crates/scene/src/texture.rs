use serde::{Deserialize, Serialize};

/// CPU-side RGBA8 texture data.
///
/// The demo has no file loading; textures are generated procedurally
/// before upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextureData {
    pub width: u32,
    pub height: u32,
    /// Tightly packed RGBA8 rows, `width * height * 4` bytes.
    pub pixels: Vec<u8>,
}

impl TextureData {
    /// A single flat color.
    pub fn solid(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let pixels = rgba
            .iter()
            .copied()
            .cycle()
            .take((width * height * 4) as usize)
            .collect();
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Two-color checkerboard with `cell`-pixel squares.
    pub fn checkerboard(size: u32, cell: u32, a: [u8; 4], b: [u8; 4]) -> Self {
        let cell = cell.max(1);
        let mut pixels = Vec::with_capacity((size * size * 4) as usize);
        for y in 0..size {
            for x in 0..size {
                let color = if ((x / cell) + (y / cell)) % 2 == 0 { a } else { b };
                pixels.extend_from_slice(&color);
            }
        }
        Self {
            width: size,
            height: size,
            pixels,
        }
    }

    /// Top-to-bottom linear gradient, used for the sky faces.
    pub fn vertical_gradient(size: u32, top: [u8; 4], bottom: [u8; 4]) -> Self {
        let mut pixels = Vec::with_capacity((size * size * 4) as usize);
        let span = (size.max(2) - 1) as f32;
        for y in 0..size {
            let t = y as f32 / span;
            let row: [u8; 4] = std::array::from_fn(|c| {
                (top[c] as f32 + (bottom[c] as f32 - top[c] as f32) * t) as u8
            });
            for _ in 0..size {
                pixels.extend_from_slice(&row);
            }
        }
        Self {
            width: size,
            height: size,
            pixels,
        }
    }

    /// Expected byte length for the stated dimensions.
    pub fn expected_len(&self) -> usize {
        (self.width * self.height * 4) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solid_fills_every_pixel() {
        let tex = TextureData::solid(4, 2, [10, 20, 30, 255]);
        assert_eq!(tex.pixels.len(), tex.expected_len());
        assert_eq!(&tex.pixels[0..4], &[10, 20, 30, 255]);
        assert_eq!(&tex.pixels[tex.pixels.len() - 4..], &[10, 20, 30, 255]);
    }

    #[test]
    fn checkerboard_alternates_cells() {
        let a = [255, 0, 0, 255];
        let b = [0, 0, 255, 255];
        let tex = TextureData::checkerboard(8, 4, a, b);
        assert_eq!(tex.pixels.len(), tex.expected_len());
        // (0,0) is in the first cell, (4,0) in the next one over.
        assert_eq!(&tex.pixels[0..4], &a);
        let offset = (4 * 4) as usize;
        assert_eq!(&tex.pixels[offset..offset + 4], &b);
    }

    #[test]
    fn gradient_spans_endpoint_colors() {
        let tex = TextureData::vertical_gradient(8, [0, 0, 0, 255], [255, 255, 255, 255]);
        assert_eq!(tex.pixels.len(), tex.expected_len());
        assert_eq!(tex.pixels[0], 0);
        let last_row = tex.pixels.len() - 4;
        assert_eq!(tex.pixels[last_row], 255);
    }
}
