//! Output sinks: flush a finished frame to a terminal or any writer.
//!
//! Every frame is encoded as a cursor-home sequence followed by the whole
//! character buffer. The first column of each row is replaced by a line
//! break, so that column never reaches the screen.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{cursor, style::Print, terminal, QueueableCommand};
use log::debug;

use crate::core::{FrameBuffer, FrameSink};

/// Encode one frame into `out`.
///
/// This builds the byte stream without writing anywhere. Index `k` of the
/// buffer is emitted verbatim unless `k % width == 0`, where a `'\n'` is
/// written instead.
pub fn encode_frame_into(frame: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(cursor::MoveTo(0, 0))?;

    let width = frame.width();
    for (k, &ch) in frame.glyphs().iter().enumerate() {
        let ch = if k % width == 0 { '\n' } else { ch };
        out.queue(Print(ch))?;
    }
    Ok(())
}

/// Writes encoded frames to any `io::Write`.
pub struct WriterSink<W: Write> {
    out: W,
    buf: Vec<u8>,
}

impl<W: Write> WriterSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> FrameSink for WriterSink<W> {
    type Error = anyhow::Error;

    fn present(&mut self, frame: &FrameBuffer) -> Result<()> {
        self.buf.clear();
        encode_frame_into(frame, &mut self.buf)?;
        self.flush_buf()
    }
}

/// Frame sink bound to the process's stdout.
///
/// Call [`enter`](Self::enter) before the first frame and
/// [`exit`](Self::exit) on the way out. Raw mode is left off, so the
/// terminal still turns `'\n'` into CR LF and Ctrl-C still raises SIGINT.
pub struct TerminalSink {
    inner: WriterSink<io::Stdout>,
}

impl Default for TerminalSink {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalSink {
    pub fn new() -> Self {
        Self {
            inner: WriterSink::new(io::stdout()),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        debug!("entering alternate screen");
        let buf = &mut self.inner.buf;
        buf.clear();
        buf.queue(terminal::EnterAlternateScreen)?;
        buf.queue(cursor::Hide)?;
        buf.queue(terminal::DisableLineWrap)?;
        buf.queue(terminal::Clear(terminal::ClearType::All))?;
        self.inner.flush_buf()
    }

    pub fn exit(&mut self) -> Result<()> {
        debug!("restoring terminal");
        let buf = &mut self.inner.buf;
        buf.clear();
        buf.queue(terminal::EnableLineWrap)?;
        buf.queue(cursor::Show)?;
        buf.queue(terminal::LeaveAlternateScreen)?;
        self.inner.flush_buf()
    }
}

impl FrameSink for TerminalSink {
    type Error = anyhow::Error;

    fn present(&mut self, frame: &FrameBuffer) -> Result<()> {
        self.inner.present(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FrameRenderer, Viewport};

    const HOME: &str = "\x1b[1;1H";

    #[test]
    fn encode_starts_with_cursor_home() {
        let fb = FrameBuffer::new(Viewport::new(3, 2));
        let mut out = Vec::new();
        encode_frame_into(&fb, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, format!("{HOME}\n  \n  "));
    }

    #[test]
    fn first_column_is_replaced_by_line_break() {
        let mut fb = FrameBuffer::new(Viewport::new(3, 2));
        for (k, ch) in "abcdef".chars().enumerate() {
            fb.plot(k as i32, 0, 1.0, ch);
        }
        let mut out = Vec::new();
        encode_frame_into(&fb, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, format!("{HOME}\nbc\nef"));
    }

    #[test]
    fn writer_sink_emits_one_block_per_frame() {
        let mut renderer = FrameRenderer::new(Viewport::new(20, 8));
        let mut sink = WriterSink::new(Vec::new());
        renderer.step(&mut sink).unwrap();
        renderer.step(&mut sink).unwrap();

        let text = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(text.matches(HOME).count(), 2);
        assert_eq!(text.matches('\n').count(), 16);
    }
}
