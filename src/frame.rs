//! Character-grid rasterization of a galaxy snapshot.
//!
//! A frame is built in layers: blank background, twinkling stars, particle
//! intensity mapped through a density ramp, then the core motif on top.

use crate::body::{Particle, Star};
use crate::vec2::Vec2;

/// Sparse to dense.
pub const GRADIENT: [char; 10] = [' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

/// Cells at or below this accumulated intensity keep whatever the star layer drew.
pub const INTENSITY_FLOOR: f32 = 0.1;
const INTENSITY_SCALE: f32 = 3.0;

pub const CORE_MOTIF: [char; 3] = ['(', '@', ')'];

/// Glyph for a star of the given brightness, or `None` if it is too dim to show.
pub fn star_glyph(brightness: f32) -> Option<char> {
    if brightness > 0.7 {
        Some('*')
    } else if brightness > 0.4 {
        Some('+')
    } else if brightness > 0.2 {
        Some('.')
    } else {
        None
    }
}

/// Index into [`GRADIENT`] for an accumulated intensity. Saturates at the
/// densest glyph when many particles pile into one cell.
pub fn glyph_index(intensity: f32) -> usize {
    let i = (intensity * INTENSITY_SCALE) as i32;
    i.clamp(0, GRADIENT.len() as i32 - 1) as usize
}

/// Grid cell for a continuous position, or `None` when it falls outside.
/// Coordinates are truncated toward zero, not floored.
fn cell_of(pos: Vec2, width: usize, height: usize) -> Option<(usize, usize)> {
    let x = pos.x as i32;
    let y = pos.y as i32;
    if x >= 0 && y >= 0 && (x as usize) < width && (y as usize) < height {
        Some((x as usize, y as usize))
    } else {
        None
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    width: usize,
    height: usize,
    cells: Vec<char>,
    intensity: Vec<f32>,
}

impl Frame {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![' '; width * height],
            intensity: vec![0.0; width * height],
        }
    }

    fn idx(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    pub fn width(&self) -> usize {
        self.width
    }
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, x: usize, y: usize) -> Option<char> {
        if x < self.width && y < self.height {
            Some(self.cells[self.idx(x, y)])
        } else {
            None
        }
    }

    pub fn intensity_at(&self, x: usize, y: usize) -> Option<f32> {
        if x < self.width && y < self.height {
            Some(self.intensity[self.idx(x, y)])
        } else {
            None
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        // chunks panics on 0, and a zero-width frame has no visible rows anyway
        self.cells.chunks(self.width.max(1)).take(self.height)
    }

    /// Blank background layer; resizes the buffers if the dimensions changed.
    pub fn reset(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.cells.clear();
        self.cells.resize(width * height, ' ');
        self.intensity.clear();
        self.intensity.resize(width * height, 0.0);
    }

    pub fn draw_stars(&mut self, stars: &[Star]) {
        for s in stars {
            let Some((x, y)) = cell_of(s.pos(), self.width, self.height) else {
                continue;
            };
            if let Some(ch) = star_glyph(s.brightness()) {
                let i = self.idx(x, y);
                self.cells[i] = ch;
            }
        }
    }

    /// Sums particle brightness per cell. Overlaps add up on purpose; that
    /// is what makes dense regions bloom.
    pub fn accumulate(&mut self, particles: &[Particle], center: Vec2, aspect: f32) {
        for p in particles {
            if let Some((x, y)) = cell_of(p.project(center, aspect), self.width, self.height) {
                let i = self.idx(x, y);
                self.intensity[i] += p.brightness();
            }
        }
    }

    pub fn apply_intensity(&mut self) {
        for (cell, &v) in self.cells.iter_mut().zip(self.intensity.iter()) {
            if v > INTENSITY_FLOOR {
                *cell = GRADIENT[glyph_index(v)];
            }
        }
    }

    /// Stamps `(@)` on the center row, if both neighbors fit.
    pub fn stamp_core(&mut self, center: Vec2) {
        let cx = center.x as usize;
        let cy = center.y as usize;
        if cx == 0 || cx + 1 >= self.width || cy >= self.height {
            return;
        }
        for (dx, ch) in CORE_MOTIF.iter().enumerate() {
            let i = self.idx(cx + dx - 1, cy);
            self.cells[i] = *ch;
        }
    }

    /// The full text block for one redraw: every row, a blank line and the
    /// wall-clock footer.
    pub fn to_text(&self, elapsed_secs: u64) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height + 16);
        for row in self.rows() {
            out.extend(row.iter());
            out.push('\n');
        }
        out.push_str(&format!("\n Time: {}s", elapsed_secs));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f32::consts::PI;

    #[test]
    fn star_thresholds() {
        assert_eq!(star_glyph(0.95), Some('*'));
        assert_eq!(star_glyph(0.7), Some('+'));
        assert_eq!(star_glyph(0.5), Some('+'));
        assert_eq!(star_glyph(0.4), Some('.'));
        assert_eq!(star_glyph(0.25), Some('.'));
        assert_eq!(star_glyph(0.2), None);
    }

    #[test]
    fn glyph_index_clamps_to_ramp() {
        assert_eq!(glyph_index(0.15), 0);
        assert_eq!(glyph_index(0.8), 2);
        assert_eq!(glyph_index(2.9), 8);
        assert_eq!(glyph_index(3.0), 9);
        assert_eq!(glyph_index(250.0), 9);
    }

    #[test]
    fn out_of_bounds_positions_are_dropped() {
        assert_eq!(cell_of(Vec2::new(10.0, 1.0), 10, 5), None);
        assert_eq!(cell_of(Vec2::new(-1.2, 1.0), 10, 5), None);
        assert_eq!(cell_of(Vec2::new(3.9, 4.99), 10, 5), Some((3, 4)));
        // truncation toward zero keeps slightly negative positions on the edge
        assert_eq!(cell_of(Vec2::new(-0.5, 0.0), 10, 5), Some((0, 0)));
    }

    #[test]
    fn dim_star_leaves_cell_blank() {
        let mut f = Frame::new(10, 10);
        let dim = Star::new(Vec2::new(2.0, 2.0), 1.5 * PI, 1.0, 0.5);
        f.draw_stars(&[dim]);
        assert_eq!(f.get(2, 2), Some(' '));
    }

    #[test]
    fn particles_overwrite_stars() {
        let mut f = Frame::new(10, 10);
        f.draw_stars(&[Star::new(Vec2::new(4.0, 3.0), PI / 2.0, 1.0, 1.0)]);
        assert_eq!(f.get(4, 3), Some('*'));

        let p = Particle::new(0.0, 0.0, 0.0, 1.0);
        f.accumulate(&[p], Vec2::new(4.5, 3.5), 2.0);
        f.apply_intensity();
        assert_eq!(f.get(4, 3), Some(GRADIENT[3]));
    }

    #[test]
    fn faint_intensity_keeps_star() {
        let mut f = Frame::new(10, 10);
        f.draw_stars(&[Star::new(Vec2::new(1.0, 1.0), PI / 2.0, 1.0, 1.0)]);
        let p = Particle::new(0.0, 0.0, 0.0, 0.05);
        f.accumulate(&[p], Vec2::new(1.0, 1.0), 2.0);
        f.apply_intensity();
        assert_eq!(f.get(1, 1), Some('*'));
    }

    #[test]
    fn core_needs_room_for_both_neighbors() {
        let mut f = Frame::new(2, 2);
        f.stamp_core(Vec2::new(1.0, 1.0));
        assert_eq!(f.rows().flatten().collect::<String>(), "    ");

        let mut f = Frame::new(3, 1);
        f.stamp_core(Vec2::new(1.5, 0.5));
        assert_eq!(f.rows().flatten().collect::<String>(), "(@)");
    }

    #[test]
    fn text_layout() {
        let mut f = Frame::new(3, 2);
        f.stamp_core(Vec2::new(1.5, 1.0));
        assert_eq!(f.to_text(7), "   \n(@)\n\n Time: 7s");
    }

    #[test]
    fn reset_clears_previous_contents() {
        let mut f = Frame::new(4, 4);
        f.stamp_core(Vec2::new(2.0, 2.0));
        f.accumulate(&[Particle::new(0.0, 0.0, 0.0, 1.0)], Vec2::new(0.0, 0.0), 2.0);
        f.reset(5, 3);
        assert_eq!(f, Frame::new(5, 3));
    }

    proptest! {
        #[test]
        fn glyph_choice_is_monotonic(a in 0.1001f32..50.0, b in 0.1001f32..50.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(glyph_index(lo) <= glyph_index(hi));
        }
    }
}
