//! Terminal control behind a small capability trait, so the frame loop can
//! run against a real tty or an in-memory recorder.

use anyhow::{Context, Result};
use crossterm::{
    cursor, execute, queue,
    style::Print,
    terminal::{self, Clear, ClearType},
};
use std::io::{self, Write};

pub trait Terminal {
    /// Current size in cells as `(cols, rows)`.
    fn size(&self) -> Result<(u16, u16)>;
    fn hide_cursor(&mut self) -> Result<()>;
    /// Clears the screen and homes the cursor.
    fn clear(&mut self) -> Result<()>;
    /// Draws one full frame from the top-left corner and flushes.
    fn present(&mut self, frame: &str) -> Result<()>;
}

pub struct CrosstermTerminal<W: Write> {
    out: W,
}

impl CrosstermTerminal<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> CrosstermTerminal<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Terminal for CrosstermTerminal<W> {
    fn size(&self) -> Result<(u16, u16)> {
        terminal::size().context("querying terminal size")
    }

    fn hide_cursor(&mut self) -> Result<()> {
        execute!(self.out, cursor::Hide).context("hiding cursor")
    }

    fn clear(&mut self) -> Result<()> {
        execute!(self.out, Clear(ClearType::All), cursor::MoveTo(0, 0)).context("clearing screen")
    }

    fn present(&mut self, frame: &str) -> Result<()> {
        queue!(self.out, cursor::MoveTo(0, 0), Print(frame)).context("writing frame")?;
        self.out.flush().context("flushing frame")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn present_homes_cursor_then_writes_frame() {
        let mut t = CrosstermTerminal::new(Vec::new());
        t.present("ab\ncd\n\n Time: 0s").unwrap();
        let bytes = String::from_utf8(t.into_inner()).unwrap();
        assert_eq!(bytes, "\x1b[1;1Hab\ncd\n\n Time: 0s");
    }

    #[test]
    fn hide_and_clear_emit_escape_sequences() {
        let mut t = CrosstermTerminal::new(Vec::new());
        t.hide_cursor().unwrap();
        t.clear().unwrap();
        let bytes = String::from_utf8(t.into_inner()).unwrap();
        assert_eq!(bytes, "\x1b[?25l\x1b[2J\x1b[1;1H");
    }
}
