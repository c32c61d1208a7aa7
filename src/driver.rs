//! The frame loop: render, present, step, sleep.

use crate::config::Settings;
use crate::frame::Frame;
use crate::galaxy::Galaxy;
use crate::term::Terminal;
use anyhow::Result;
use std::time::{Duration, Instant};

pub struct FrameDriver {
    pub dt: f32,
    pub frame_interval: Duration,
}

impl FrameDriver {
    pub fn new(dt: f32, frame_interval: Duration) -> Self {
        Self { dt, frame_interval }
    }

    pub fn from_settings(s: &Settings) -> Self {
        Self::new(s.sim_step, s.frame_interval)
    }

    /// Runs frames while `keep_going(frame_number)` holds and returns how many
    /// were drawn. Simulation always advances by the fixed `dt`; wall-clock
    /// time only feeds the footer, so the two clocks may drift apart.
    pub fn run<T, F>(&self, galaxy: &mut Galaxy, term: &mut T, mut keep_going: F) -> Result<u64>
    where
        T: Terminal + ?Sized,
        F: FnMut(u64) -> bool,
    {
        let start = Instant::now();
        let mut frame = Frame::new(galaxy.width(), galaxy.height());
        let mut frames = 0u64;

        while keep_going(frames) {
            let elapsed = start.elapsed().as_secs();
            log::trace!("frame {} at {}s", frames, elapsed);

            galaxy.render_into(&mut frame);
            term.present(&frame.to_text(elapsed))?;
            galaxy.update(self.dt);
            frames += 1;

            if !self.frame_interval.is_zero() {
                std::thread::sleep(self.frame_interval);
            }
        }
        Ok(frames)
    }
}

/// Hides the cursor, clears the screen and works out the grid size.
pub fn setup<T: Terminal + ?Sized>(term: &mut T, settings: &Settings) -> Result<(usize, usize)> {
    term.hide_cursor()?;
    term.clear()?;
    let (cols, rows) = match term.size() {
        Ok(sz) => sz,
        Err(e) => {
            log::warn!("{:#}; assuming {:?}", e, settings.fallback_size);
            settings.fallback_size
        }
    };
    Ok(settings.grid_size(cols, rows))
}
