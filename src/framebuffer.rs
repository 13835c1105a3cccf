use crate::params::Params;
use crate::render::{Color, Renderer};

/// Linear 16-bit color plane, one `u16` per pixel, row-major.
///
/// Writes outside the plane are clipped.
#[derive(Debug, Clone)]
pub struct Framebuffer {
    width: i32,
    height: i32,
    pixels: Vec<u16>,
}

impl Framebuffer {
    pub fn new(width: i32, height: i32) -> Self {
        let len = (width.max(0) * height.max(0)) as usize;
        Self {
            width,
            height,
            pixels: vec![Color::BACKGROUND.0; len],
        }
    }

    pub fn pixels(&self) -> &[u16] {
        &self.pixels
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        Some(Color(self.pixels[(y * self.width + x) as usize]))
    }

    /// Nearest-neighbour upscale into a `0x00RRGGBB` surface `out_width` wide.
    ///
    /// Rows or columns that do not fit in `out` are dropped.
    pub fn blit_scaled(&self, out: &mut [u32], out_width: usize, scale: usize) {
        if out_width == 0 || scale == 0 || self.width <= 0 {
            return;
        }
        let out_height = out.len() / out_width;
        for (y, row) in self.pixels.chunks_exact(self.width as usize).enumerate() {
            for sy in 0..scale {
                let oy = y * scale + sy;
                if oy >= out_height {
                    return;
                }
                let line = &mut out[oy * out_width..(oy + 1) * out_width];
                for (x, px) in row.iter().enumerate() {
                    let rgb = Color(*px).to_rgb888();
                    let start = x * scale;
                    if start >= out_width {
                        break;
                    }
                    let end = (start + scale).min(out_width);
                    line[start..end].fill(rgb);
                }
            }
        }
    }
}

impl Default for Framebuffer {
    fn default() -> Self {
        Self::new(Params::SCREEN_WIDTH, Params::SCREEN_HEIGHT)
    }
}

impl Renderer for Framebuffer {
    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color) {
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = (x + width).min(self.width);
        let y1 = (y + height).min(self.height);
        if x0 >= x1 || y0 >= y1 {
            return;
        }
        for row in y0..y1 {
            let start = (row * self.width + x0) as usize;
            let end = (row * self.width + x1) as usize;
            self.pixels[start..end].fill(color.0);
        }
    }
}
