//! Character buffer and depth buffer.

use crate::projection::{Projected, Viewport};
use crate::types::BACKGROUND;

/// Paired character and depth buffers for one screen.
///
/// Both buffers are allocated once in [`FrameBuffer::new`] and never resized.
/// A cell's glyph and depth are only ever written together, by [`plot`].
///
/// [`plot`]: FrameBuffer::plot
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    width: usize,
    height: usize,
    glyphs: Vec<char>,
    depth: Vec<f32>,
}

impl FrameBuffer {
    pub fn new(viewport: Viewport) -> Self {
        let len = viewport.area();
        Self {
            width: viewport.width,
            height: viewport.height,
            glyphs: vec![BACKGROUND; len],
            depth: vec![0.0; len],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height)
    }

    /// Glyphs in row-major order.
    pub fn glyphs(&self) -> &[char] {
        &self.glyphs
    }

    /// Depth reciprocals in row-major order.
    pub fn depth(&self) -> &[f32] {
        &self.depth
    }

    #[inline(always)]
    fn idx(&self, x: usize, y: usize) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    pub fn glyph_at(&self, x: usize, y: usize) -> Option<char> {
        self.idx(x, y).map(|i| self.glyphs[i])
    }

    pub fn depth_at(&self, x: usize, y: usize) -> Option<f32> {
        self.idx(x, y).map(|i| self.depth[i])
    }

    /// Reset every glyph to the background and every depth to zero.
    pub fn clear(&mut self) {
        self.glyphs.fill(BACKGROUND);
        self.depth.fill(0.0);
    }

    /// Depth-tested write of a single glyph.
    ///
    /// The linear index is `x + y * width`; only the index as a whole is
    /// range checked, so an `x` past the right edge lands on the next row.
    /// Out-of-range indices are dropped. A write happens only when `ooz` is
    /// strictly greater than the stored depth. Returns whether the cell was
    /// written.
    #[inline(always)]
    pub fn plot(&mut self, x: i32, y: i32, ooz: f32, glyph: char) -> bool {
        // i64 so saturated coordinates from non-finite projections can't overflow.
        let idx = i64::from(x) + i64::from(y) * self.width as i64;
        if idx < 0 || idx >= self.glyphs.len() as i64 {
            return false;
        }
        let idx = idx as usize;

        if ooz > self.depth[idx] {
            self.depth[idx] = ooz;
            self.glyphs[idx] = glyph;
            true
        } else {
            false
        }
    }

    /// [`plot`](Self::plot) for an already projected point.
    #[inline(always)]
    pub fn plot_projected(&mut self, p: Projected, glyph: char) -> bool {
        self.plot(p.x, p.y, p.ooz, glyph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> FrameBuffer {
        FrameBuffer::new(Viewport::new(4, 3))
    }

    #[test]
    fn new_buffer_is_clear() {
        let fb = small();
        assert_eq!(fb.glyphs().len(), 12);
        assert!(fb.glyphs().iter().all(|&c| c == BACKGROUND));
        assert!(fb.depth().iter().all(|&d| d == 0.0));
    }

    #[test]
    fn plot_writes_glyph_and_depth_together() {
        let mut fb = small();
        assert!(fb.plot(1, 2, 0.5, '@'));
        assert_eq!(fb.glyph_at(1, 2), Some('@'));
        assert_eq!(fb.depth_at(1, 2), Some(0.5));
    }

    #[test]
    fn equal_depth_does_not_overwrite() {
        let mut fb = small();
        assert!(fb.plot(0, 0, 0.5, '@'));
        assert!(!fb.plot(0, 0, 0.5, '#'));
        assert_eq!(fb.glyph_at(0, 0), Some('@'));
    }

    #[test]
    fn zero_and_negative_depth_never_win_on_a_clear_cell() {
        let mut fb = small();
        assert!(!fb.plot(0, 0, 0.0, '@'));
        assert!(!fb.plot(0, 0, -1.0, '@'));
        assert!(!fb.plot(0, 0, f32::NAN, '@'));
        assert_eq!(fb.glyph_at(0, 0), Some(BACKGROUND));
    }

    #[test]
    fn x_past_right_edge_wraps_to_next_row() {
        let mut fb = small();
        assert!(fb.plot(4, 0, 1.0, '$'));
        assert_eq!(fb.glyph_at(0, 1), Some('$'));
    }

    #[test]
    fn out_of_range_index_is_dropped() {
        let mut fb = small();
        let before = fb.clone();
        assert!(!fb.plot(-1, 0, 1.0, '@'));
        assert!(!fb.plot(0, 3, 1.0, '@'));
        assert!(!fb.plot(i32::MAX, i32::MAX, f32::INFINITY, '@'));
        assert!(!fb.plot(i32::MIN, 0, 1.0, '@'));
        assert_eq!(fb, before);
    }

    #[test]
    fn clear_resets_both_buffers() {
        let mut fb = small();
        fb.plot(2, 1, 0.25, '~');
        fb.clear();
        assert_eq!(fb, small());
    }
}
