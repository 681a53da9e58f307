//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! The first frame (and any frame after a resize or `invalidate`) is a full
//! redraw; later frames only emit the changed runs.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal,
    tty::IsTty,
    QueueableCommand,
};

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

/// True when stdout is attached to a terminal we can draw on.
pub fn stdout_is_terminal() -> bool {
    io::stdout().is_tty()
}

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
    force_full: bool,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(16 * 1024),
            force_full: true,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.buf.queue(EnableMouseCapture)?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(DisableMouseCapture)?;
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to be a full redraw.
    ///
    /// Useful on terminal resize events.
    pub fn invalidate(&mut self) {
        self.force_full = true;
    }

    /// Draw a framebuffer, swapping it into internal state.
    ///
    /// Callers should keep one `FrameBuffer` and pass it in every frame.
    /// The renderer will diff against the previous frame and then swap buffers
    /// so the caller can reuse the old one without cloning.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        // Take previous out to avoid borrow conflicts (no cloning).
        let mut prev = self
            .last
            .take()
            .unwrap_or_else(|| FrameBuffer::new(fb.width(), fb.height()));
        let needs_full = self.force_full
            || prev.width() != fb.width()
            || prev.height() != fb.height();
        self.force_full = false;

        if needs_full {
            self.buf.clear();
            encode_full_into(fb, &mut self.buf)?;
            self.flush_buf()?;
            prev.resize(fb.width(), fb.height());
        } else {
            self.buf.clear();
            encode_diff_into(&prev, fb, &mut self.buf)?;
            self.flush_buf()?;
        }

        // Swap current into prev so next frame can diff without cloning.
        std::mem::swap(&mut prev, fb);
        self.last = Some(prev);
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Queues cells as crossterm commands, emitting colors and attributes only
/// when the style changes between consecutive cells.
struct StyledWriter<'a> {
    out: &'a mut Vec<u8>,
    style: Option<CellStyle>,
}

impl<'a> StyledWriter<'a> {
    fn new(out: &'a mut Vec<u8>) -> Self {
        Self { out, style: None }
    }

    fn move_to(&mut self, x: u16, y: u16) -> Result<()> {
        self.out.queue(cursor::MoveTo(x, y))?;
        Ok(())
    }

    fn cells(&mut self, cells: &[Cell]) -> Result<()> {
        for cell in cells {
            if self.style != Some(cell.style) {
                self.set_style(cell.style)?;
            }
            self.out.queue(Print(cell.ch))?;
        }
        Ok(())
    }

    fn set_style(&mut self, style: CellStyle) -> Result<()> {
        self.out.queue(SetAttribute(Attribute::Reset))?;
        self.out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
        self.out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
        if style.bold {
            self.out.queue(SetAttribute(Attribute::Bold))?;
        }
        if style.dim {
            self.out.queue(SetAttribute(Attribute::Dim))?;
        }
        self.style = Some(style);
        Ok(())
    }

    fn finish(self) -> Result<()> {
        self.out.queue(ResetColor)?;
        self.out.queue(SetAttribute(Attribute::Reset))?;
        Ok(())
    }
}

/// Encode a full-frame redraw into `out`.
///
/// Only builds the command bytes; nothing is written to stdout.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let mut writer = StyledWriter::new(out);
    for y in 0..fb.height() {
        writer.move_to(0, y)?;
        writer.cells(row(fb, y))?;
    }
    writer.finish()
}

/// Encode only the cells that differ from `prev` into `out`.
///
/// Falls back to a full redraw when the frame size changed.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    if prev.width() != next.width() || prev.height() != next.height() {
        return encode_full_into(next, out);
    }

    let mut writer = StyledWriter::new(out);
    for y in 0..next.height() {
        let (old, new) = (row(prev, y), row(next, y));
        for (start, end) in changed_runs(old, new) {
            writer.move_to(start as u16, y)?;
            writer.cells(&new[start..end])?;
        }
    }
    writer.finish()
}

fn row(fb: &FrameBuffer, y: u16) -> &[Cell] {
    let w = fb.width() as usize;
    let start = y as usize * w;
    fb.cells().get(start..start + w).unwrap_or(&[])
}

/// Half-open column ranges where `old` and `new` differ, left to right.
fn changed_runs<'a>(old: &'a [Cell], new: &'a [Cell]) -> impl Iterator<Item = (usize, usize)> + 'a {
    let differs = move |x: usize| old.get(x) != new.get(x);
    let mut x = 0;
    std::iter::from_fn(move || {
        while x < new.len() && !differs(x) {
            x += 1;
        }
        if x >= new.len() {
            return None;
        }
        let start = x;
        while x < new.len() && differs(x) {
            x += 1;
        }
        Some((start, x))
    })
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
