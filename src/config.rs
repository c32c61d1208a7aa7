use std::time::Duration;

/// Fixed run parameters. There is no file or command line behind these.
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub seed: u64,
    pub max_width: u16,
    pub max_height: u16,
    /// Rows kept free below the grid for the footer.
    pub reserved_rows: u16,
    /// Simulated time per tick, independent of wall-clock.
    pub sim_step: f32,
    pub frame_interval: Duration,
    /// Used when the terminal size cannot be queried.
    pub fallback_size: (u16, u16),
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: 42,
            max_width: 120,
            max_height: 35,
            reserved_rows: 3,
            sim_step: 0.1,
            frame_interval: Duration::from_millis(50),
            fallback_size: (120, 40),
        }
    }
}

impl Settings {
    /// Grid `(width, height)` for a terminal of `cols` x `rows`, never below 1x1.
    pub fn grid_size(&self, cols: u16, rows: u16) -> (usize, usize) {
        let w = cols.min(self.max_width).max(1);
        let h = rows
            .saturating_sub(self.reserved_rows)
            .min(self.max_height)
            .max(1);
        (w as usize, h as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_is_capped() {
        let s = Settings::default();
        assert_eq!(s.grid_size(200, 60), (120, 35));
        assert_eq!(s.grid_size(80, 24), (80, 21));
        assert_eq!(s.grid_size(120, 40), (120, 35));
    }

    #[test]
    fn tiny_terminal_still_gets_a_cell() {
        let s = Settings::default();
        assert_eq!(s.grid_size(0, 2), (1, 1));
    }
}
