//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! The first frame (and any frame after a resize) is a full redraw; later
//! frames only rewrite the runs of cells that changed. With a snake moving one
//! segment per tick that is a handful of short runs per frame.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::fb::{Cell, CellStyle, FrameBuffer};
use crate::types::Rgb;

pub struct TerminalRenderer {
    stdout: io::Stdout,
    prev: Option<FrameBuffer>,
    buf: Vec<u8>,
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
            prev: None,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    /// Raw mode, alternate screen, hidden cursor.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf
            .queue(terminal::EnterAlternateScreen)?
            .queue(cursor::Hide)?
            .queue(terminal::DisableLineWrap)?;
        self.flush()
    }

    /// Undo [`enter`](Self::enter). Raw mode is dropped even if the flush fails.
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf
            .queue(ResetColor)?
            .queue(SetAttribute(Attribute::Reset))?
            .queue(terminal::EnableLineWrap)?
            .queue(cursor::Show)?
            .queue(terminal::LeaveAlternateScreen)?;
        let flushed = self.flush();
        terminal::disable_raw_mode()?;
        flushed
    }

    /// Next draw repaints the whole screen.
    pub fn invalidate(&mut self) {
        self.prev = None;
    }

    /// Draw `fb`, then hand the previous frame back through `fb`.
    ///
    /// The caller keeps passing the same buffer every frame; the renderer keeps
    /// the other one to diff against, so frames are never cloned.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        let mut prev = match self.prev.take() {
            Some(prev) if prev.same_size(fb) => {
                encode_diff_into(&prev, fb, &mut self.buf)?;
                prev
            }
            stale => {
                encode_full_into(fb, &mut self.buf)?;
                let mut prev = stale.unwrap_or_else(|| FrameBuffer::new(0, 0));
                prev.resize(fb.width(), fb.height());
                prev
            }
        };
        self.flush()?;

        std::mem::swap(&mut prev, fb);
        self.prev = Some(prev);
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Encode a clear-and-repaint of every cell into `out`.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let mut painter = Painter::new(out);
    for (y, row) in fb.rows().enumerate() {
        painter.move_to(0, y as u16)?;
        for &cell in row {
            painter.paint(cell)?;
        }
    }
    painter.finish()
}

/// Encode only the cells of `next` that differ from `prev` into `out`.
///
/// Both frames must have the same size.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut painter = Painter::new(out);
    for (y, (a, row)) in prev.rows().zip(next.rows()).enumerate() {
        for (x, len) in changed_runs(a, row) {
            painter.move_to(x as u16, y as u16)?;
            for &cell in &row[x..x + len] {
                painter.paint(cell)?;
            }
        }
    }
    painter.finish()
}

/// Emits cells, switching colors only when the style changes.
struct Painter<'a> {
    out: &'a mut Vec<u8>,
    style: Option<CellStyle>,
}

impl<'a> Painter<'a> {
    fn new(out: &'a mut Vec<u8>) -> Self {
        Self { out, style: None }
    }

    fn move_to(&mut self, x: u16, y: u16) -> Result<()> {
        self.out.queue(cursor::MoveTo(x, y))?;
        Ok(())
    }

    fn paint(&mut self, cell: Cell) -> Result<()> {
        if self.style != Some(cell.style) {
            self.out
                .queue(SetForegroundColor(to_color(cell.style.fg)))?
                .queue(SetBackgroundColor(to_color(cell.style.bg)))?;
            self.style = Some(cell.style);
        }
        self.out.queue(Print(cell.ch))?;
        Ok(())
    }

    fn finish(self) -> Result<()> {
        self.out.queue(ResetColor)?;
        Ok(())
    }
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Maximal runs `(x, len)` where two rows differ.
fn changed_runs<'a>(a: &'a [Cell], b: &'a [Cell]) -> impl Iterator<Item = (usize, usize)> + 'a {
    let width = a.len().min(b.len());
    let differs = move |x: usize| a[x] != b[x];

    let mut x = 0;
    std::iter::from_fn(move || {
        while x < width && !differs(x) {
            x += 1;
        }
        if x == width {
            return None;
        }
        let start = x;
        while x < width && differs(x) {
            x += 1;
        }
        Some((start, x - start))
    })
}
