use crate::types::{Rgb, Rgba};

use super::Surface;

/// An in-memory RGB pixel surface.
///
/// Cleared pixels take the backdrop color. Rectangles are snapped to whole
/// pixels and clipped to the canvas.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: usize,
    height: usize,
    background: Rgb,
    pixels: Vec<Rgb>,
    path: Vec<(f64, f64, f64)>,
    color: Rgba,
}

impl Canvas {
    pub fn new(width: usize, height: usize, background: Rgb) -> Self {
        Canvas {
            width,
            height,
            background,
            pixels: vec![background; width * height],
            path: Vec::new(),
            color: Rgba::from_channels(&[]),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn background(&self) -> Rgb {
        self.background
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgb> {
        if x < self.width && y < self.height {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }

    /// Row-major pixel slice.
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    fn paint_rect(&mut self, x: f64, y: f64, side: f64) {
        let Some((x0, x1)) = span(x, side, self.width) else {
            return;
        };
        let Some((y0, y1)) = span(y, side, self.height) else {
            return;
        };

        let src = self.color.clamped();
        let alpha = self.color.alpha();
        for py in y0..y1 {
            let row = py * self.width;
            for px in x0..x1 {
                let dst = &mut self.pixels[row + px];
                *dst = blend(src, *dst, alpha);
            }
        }
    }
}

/// Pixel range `[start, end)` covered by `[pos, pos + side)`, clipped to `0..limit`.
fn span(pos: f64, side: f64, limit: usize) -> Option<(usize, usize)> {
    if !pos.is_finite() || side <= 0.0 {
        return None;
    }
    let start = pos.round();
    let end = start + side.round();
    let start = start.max(0.0);
    let end = end.min(limit as f64);
    if start >= end {
        return None;
    }
    Some((start as usize, end as usize))
}

fn blend(src: Rgb, dst: Rgb, alpha: f32) -> Rgb {
    if alpha >= 1.0 {
        return src;
    }
    let mix = |s: u8, d: u8| (s as f32 * alpha + d as f32 * (1.0 - alpha)).round() as u8;
    Rgb::new(mix(src.r, dst.r), mix(src.g, dst.g), mix(src.b, dst.b))
}

impl Surface for Canvas {
    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn set_fill(&mut self, color: Rgba) {
        self.color = color;
    }

    fn rect(&mut self, x: f64, y: f64, side: f64) {
        self.path.push((x, y, side));
    }

    fn fill(&mut self) {
        let path = std::mem::take(&mut self.path);
        for &(x, y, side) in &path {
            self.paint_rect(x, y, side);
        }
        self.path = path;
    }

    fn clear(&mut self) {
        self.path.clear();
        self.pixels.fill(self.background);
    }
}
