//! Sink selection and writer adapters for the logging pipeline.

use std::io::{self, Write};

use super::{ColorMode, LogMirror};

// 256-color rainbow cycle, roughly red → violet.
const RAINBOW: [u8; 7] = [196, 208, 226, 46, 51, 21, 129];

/// Picks the writer stack for a logger: the mode-selected base writer,
/// optionally teed into the mirror buffer.
pub fn select_sink(
    mode: ColorMode,
    mirror: &LogMirror,
    duplicate: bool,
) -> Box<dyn Write + Send> {
    let base: Box<dyn Write + Send> = match mode {
        ColorMode::Rainbow => Box::new(RainbowWriter::new(io::stdout())),
        _ => Box::new(io::stdout()),
    };
    if duplicate {
        Box::new(TeeWriter::new(base, MirrorWriter::new(mirror)))
    } else {
        base
    }
}

/// Appends everything written to a shared in-memory buffer.
pub struct MirrorWriter {
    buffer: LogMirror,
}

impl MirrorWriter {
    pub fn new(mirror: &LogMirror) -> MirrorWriter {
        MirrorWriter {
            buffer: mirror.clone(),
        }
    }
}

impl Write for MirrorWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if let Ok(mut bytes) = self.buffer.lock() {
            bytes.extend_from_slice(buf);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Fans writes out to two writers. Both receive the same bytes; the first
/// writer's error wins if both fail.
pub struct TeeWriter<A: Write, B: Write> {
    first: A,
    second: B,
}

impl<A: Write, B: Write> TeeWriter<A, B> {
    pub fn new(first: A, second: B) -> TeeWriter<A, B> {
        TeeWriter { first, second }
    }
}

impl<A: Write, B: Write> Write for TeeWriter<A, B> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.first.write_all(buf)?;
        self.second.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.first.flush()?;
        self.second.flush()
    }
}

/// Colorizes each visible character through a cycling rainbow palette before
/// passing it on. Whitespace keeps the current palette position so words
/// advance through the cycle together.
pub struct RainbowWriter<W: Write> {
    inner: W,
    position: usize,
}

impl<W: Write> RainbowWriter<W> {
    pub fn new(inner: W) -> RainbowWriter<W> {
        RainbowWriter { inner, position: 0 }
    }
}

impl<W: Write> Write for RainbowWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let text = String::from_utf8_lossy(buf);
        let mut rendered = String::with_capacity(text.len() * 4);
        for ch in text.chars() {
            if ch.is_whitespace() {
                rendered.push(ch);
                continue;
            }
            let color = RAINBOW[self.position % RAINBOW.len()];
            self.position += 1;
            rendered.push_str(&format!("\u{1b}[38;5;{}m{}", color, ch));
        }
        rendered.push_str("\u{1b}[0m");
        self.inner.write_all(rendered.as_bytes())?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
