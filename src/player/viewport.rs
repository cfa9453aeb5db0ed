//! Mapping from canvas pixels to terminal cells.
//!
//! Each terminal cell shows two square pixel blocks stacked vertically
//! (drawn with `▀`). A block is represented by its brightest pixel so that
//! small sparks survive heavy downsampling.

use crate::renderer::Canvas;
use crate::types::Rgb;

/// Two stacked pixel blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HalfCell {
    pub top: Rgb,
    pub bottom: Rgb,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Canvas pixels per block edge.
    pub block: usize,
    pub cols: u16,
    pub rows: u16,
}

impl Viewport {
    /// The smallest square block size that fits the canvas into
    /// `cols` × `rows` terminal cells.
    pub fn fit(canvas_w: usize, canvas_h: usize, cols: u16, rows: u16) -> Self {
        let cols_avail = (cols as usize).max(1);
        let blocks_avail = (rows as usize).max(1) * 2;
        let block = canvas_w
            .div_ceil(cols_avail)
            .max(canvas_h.div_ceil(blocks_avail))
            .max(1);
        Viewport {
            block,
            cols: canvas_w.div_ceil(block) as u16,
            rows: canvas_h.div_ceil(block * 2) as u16,
        }
    }

    /// Downsample the canvas into rows of cells.
    pub fn sample(&self, canvas: &Canvas) -> Vec<Vec<HalfCell>> {
        (0..self.rows as usize)
            .map(|row| {
                (0..self.cols as usize)
                    .map(|col| HalfCell {
                        top: self.brightest(canvas, col, row * 2),
                        bottom: self.brightest(canvas, col, row * 2 + 1),
                    })
                    .collect()
            })
            .collect()
    }

    fn brightest(&self, canvas: &Canvas, bx: usize, by: usize) -> Rgb {
        let x0 = bx * self.block;
        let y0 = by * self.block;
        let x1 = (x0 + self.block).min(canvas.width());
        let y1 = (y0 + self.block).min(canvas.height());

        let mut best = canvas.background();
        for y in y0..y1 {
            for x in x0..x1 {
                if let Some(p) = canvas.pixel(x, y) {
                    if p.brightness() > best.brightness() {
                        best = p;
                    }
                }
            }
        }
        best
    }
}

/// Cells that differ between two equally sized grids.
pub fn diff(prev: &[Vec<HalfCell>], next: &[Vec<HalfCell>]) -> Vec<(u16, u16, HalfCell)> {
    let mut changes = Vec::new();
    for (y, (prev_row, next_row)) in prev.iter().zip(next.iter()).enumerate() {
        for (x, (prev_cell, next_cell)) in prev_row.iter().zip(next_row.iter()).enumerate() {
            if prev_cell != next_cell {
                changes.push((x as u16, y as u16, *next_cell));
            }
        }
    }
    changes
}
