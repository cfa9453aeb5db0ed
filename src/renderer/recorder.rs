use serde::{Deserialize, Serialize};

use crate::types::Rgba;

use super::Surface;

/// A surface operation as observed by a `Recorder`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PaintOp {
    Clear,
    Fill { x: f64, y: f64, side: f64, color: Rgba },
}

/// A surface that keeps a log of what was painted instead of pixels.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    ops: Vec<PaintOp>,
    path: Vec<(f64, f64, f64)>,
    color: Option<Rgba>,
}

impl Recorder {
    pub fn ops(&self) -> &[PaintOp] {
        &self.ops
    }

    /// Take the log, leaving the recorder empty.
    pub fn take(&mut self) -> Vec<PaintOp> {
        std::mem::take(&mut self.ops)
    }
}

impl Surface for Recorder {
    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn set_fill(&mut self, color: Rgba) {
        self.color = Some(color);
    }

    fn rect(&mut self, x: f64, y: f64, side: f64) {
        self.path.push((x, y, side));
    }

    fn fill(&mut self) {
        let color = self.color.unwrap_or(Rgba::from_channels(&[]));
        self.ops.extend(
            self.path
                .iter()
                .map(|&(x, y, side)| PaintOp::Fill { x, y, side, color }),
        );
    }

    fn clear(&mut self) {
        self.path.clear();
        self.ops.push(PaintOp::Clear);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_without_begin_path_repaints_previous_rects() {
        let mut rec = Recorder::default();
        rec.rect(1.0, 2.0, 4.0);
        rec.fill();
        rec.fill();
        assert_eq!(rec.ops().len(), 2);
    }

    #[test]
    fn take_empties_the_log() {
        let mut rec = Recorder::default();
        rec.clear();
        assert_eq!(rec.take(), vec![PaintOp::Clear]);
        assert!(rec.ops().is_empty());
    }

    #[test]
    fn ops_serialize_with_type_tag() {
        let op = PaintOp::Fill {
            x: 1.0,
            y: 2.0,
            side: 4.0,
            color: Rgba { r: 1, g: 2, b: 3, a: 1.0 },
        };
        let json = serde_json::to_string(&op).unwrap();
        assert!(json.starts_with(r#"{"type":"fill""#), "{json}");
    }
}
