//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Raw mode + alternate screen on enter, always restored on exit. Frames are
//! diffed against the previous one and only changed row-runs are written.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::term::fb::{CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to be a full redraw (e.g. after a resize event).
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        // Changed runs against the previous frame, or None for a full redraw.
        let runs: Option<Vec<(u16, u16, u16)>> = match &self.last {
            Some(prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                let mut runs = Vec::new();
                for y in 0..fb.height() {
                    let mut x = 0;
                    while x < fb.width() {
                        if prev.get(x, y) == fb.get(x, y) {
                            x += 1;
                            continue;
                        }
                        let start = x;
                        while x < fb.width() && prev.get(x, y) != fb.get(x, y) {
                            x += 1;
                        }
                        runs.push((start, y, x - start));
                    }
                }
                Some(runs)
            }
            _ => None,
        };

        let mut style: Option<CellStyle> = None;
        match runs {
            Some(runs) => {
                for (x, y, len) in runs {
                    self.stdout.queue(cursor::MoveTo(x, y))?;
                    self.flush_row(fb, x, y, len, &mut style)?;
                }
            }
            None => {
                self.stdout.queue(terminal::Clear(terminal::ClearType::All))?;
                for y in 0..fb.height() {
                    self.stdout.queue(cursor::MoveTo(0, y))?;
                    self.flush_row(fb, 0, y, fb.width(), &mut style)?;
                }
            }
        }

        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.flush()?;
        self.last = Some(fb.clone());
        Ok(())
    }

    fn flush_row(
        &mut self,
        fb: &FrameBuffer,
        x: u16,
        y: u16,
        len: u16,
        current: &mut Option<CellStyle>,
    ) -> Result<()> {
        for dx in 0..len {
            let cell = fb.get(x + dx, y).unwrap_or_default();
            if *current != Some(cell.style) {
                self.apply_style(cell.style)?;
                *current = Some(cell.style);
            }
            self.stdout.queue(Print(cell.ch))?;
        }
        Ok(())
    }

    fn apply_style(&mut self, style: CellStyle) -> Result<()> {
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.queue(SetForegroundColor(to_color(style.fg)))?;
        self.stdout.queue(SetBackgroundColor(to_color(style.bg)))?;
        if style.bold {
            self.stdout.queue(SetAttribute(Attribute::Bold))?;
        }
        if style.dim {
            self.stdout.queue(SetAttribute(Attribute::Dim))?;
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
