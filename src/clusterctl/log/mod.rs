//! Per-invocation logging pipeline.
//!
//! Every command execution owns its own [`Logger`]; there is no process-global
//! logging state. A logger is built from three inputs:
//!
//! - a verbosity level (0..=4) that selects the enabled [`Category`] mask,
//! - a [`ColorMode`] that selects the sink and whether lines are colorized,
//! - an optional mirror buffer that receives a verbatim copy of every line.
//!
//! Rendered lines look like `2024-01-02 15:04:05 [ℹ]  message` and always end
//! in exactly one newline.

pub mod sink;

use std::io::Write;
use std::sync::{Arc, Mutex};

use bitflags::bitflags;
use chrono::Local;
use colored::Colorize;

use self::sink::select_sink;

const TIMESTAMP_LAYOUT: &str = "%Y-%m-%d %H:%M:%S";

bitflags! {
    /// Log categories, combined into the enabled-set mask of a [`Logger`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Category: u8 {
        const DEPRECATED = 0b0000_0001;
        const ALWAYS     = 0b0000_0010;
        const SUCCESS    = 0b0000_0100;
        const CRITICAL   = 0b0000_1000;
        const WARNING    = 0b0001_0000;
        const INFO       = 0b0010_0000;
        const DEBUG      = 0b0100_0000;
    }
}

impl Category {
    /// Maps a verbosity level to the enabled-category mask. The mapping is
    /// monotonic: each level enables a superset of the level below it. Any
    /// level outside 0..=4 enables everything.
    pub fn for_level(level: i32) -> Category {
        let base = Category::DEPRECATED | Category::ALWAYS | Category::SUCCESS;
        match level {
            0 => base,
            1 => base | Category::CRITICAL,
            2 => base | Category::CRITICAL | Category::WARNING,
            3 => base | Category::CRITICAL | Category::WARNING | Category::INFO,
            4 => {
                base | Category::CRITICAL
                    | Category::WARNING
                    | Category::INFO
                    | Category::DEBUG
            }
            _ => Category::all(),
        }
    }

    fn icon(self) -> &'static str {
        match self {
            c if c == Category::ALWAYS => "✿",
            c if c == Category::CRITICAL => "✖",
            c if c == Category::INFO => "ℹ",
            c if c == Category::DEBUG => "▶",
            c if c == Category::SUCCESS => "✔",
            c if c == Category::WARNING => "!",
            _ => "ℹ",
        }
    }

    fn colorize(self, line: String) -> String {
        match self {
            c if c == Category::CRITICAL => line.red().to_string(),
            c if c == Category::ALWAYS
                || c == Category::DEBUG
                || c == Category::WARNING =>
            {
                line.green().to_string()
            }
            _ => line.cyan().to_string(),
        }
    }
}

/// Terminal rendering style for log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    Plain,
    #[default]
    Ansi,
    Rainbow,
}

impl ColorMode {
    /// Parses the `--color` flag value. Unrecognized values fall back to
    /// plain output rather than erroring.
    pub fn from_flag(value: &str) -> ColorMode {
        match value {
            "true" => ColorMode::Ansi,
            "fabulous" => ColorMode::Rainbow,
            _ => ColorMode::Plain,
        }
    }
}

/// Shared in-memory buffer that can mirror every rendered log line.
pub type LogMirror = Arc<Mutex<Vec<u8>>>;

pub fn new_mirror() -> LogMirror {
    Arc::new(Mutex::new(Vec::new()))
}

/// A configured, per-invocation logger. Line filtering happens against the
/// category mask; formatting and colorization happen at write time.
pub struct Logger {
    mask: Category,
    mode: ColorMode,
    sink: Box<dyn Write + Send>,
}

impl Logger {
    /// Builds a logger for one invocation. When `duplicate` is true the sink
    /// fans out to both the mode-selected writer and `mirror`; otherwise the
    /// mirror is left untouched.
    pub fn configure(level: i32, mode: ColorMode, mirror: &LogMirror, duplicate: bool) -> Logger {
        Logger {
            mask: Category::for_level(level),
            mode,
            sink: select_sink(mode, mirror, duplicate),
        }
    }

    /// Builds a logger over an arbitrary sink. The caller keeps ownership of
    /// color-mode and level semantics; only the destination changes.
    pub fn with_sink(level: i32, mode: ColorMode, sink: Box<dyn Write + Send>) -> Logger {
        Logger {
            mask: Category::for_level(level),
            mode,
            sink,
        }
    }

    /// A logger that discards everything. Used where a handler requires a
    /// logger but the caller has no output configured yet.
    pub fn discard() -> Logger {
        Logger::with_sink(0, ColorMode::Plain, Box::new(std::io::sink()))
    }

    pub fn enabled(&self, category: Category) -> bool {
        self.mask.contains(category)
    }

    pub fn always(&mut self, message: impl AsRef<str>) {
        self.emit(Category::ALWAYS, message.as_ref());
    }

    pub fn critical(&mut self, message: impl AsRef<str>) {
        self.emit(Category::CRITICAL, message.as_ref());
    }

    pub fn warning(&mut self, message: impl AsRef<str>) {
        self.emit(Category::WARNING, message.as_ref());
    }

    pub fn info(&mut self, message: impl AsRef<str>) {
        self.emit(Category::INFO, message.as_ref());
    }

    pub fn debug(&mut self, message: impl AsRef<str>) {
        self.emit(Category::DEBUG, message.as_ref());
    }

    pub fn success(&mut self, message: impl AsRef<str>) {
        self.emit(Category::SUCCESS, message.as_ref());
    }

    pub fn deprecated(&mut self, message: impl AsRef<str>) {
        self.emit(Category::DEPRECATED, message.as_ref());
    }

    fn emit(&mut self, category: Category, message: &str) {
        if !self.mask.contains(category) {
            return;
        }
        let line = format_line(category, message, self.mode);
        // A failing log write must not abort the command.
        let _ = self.sink.write_all(line.as_bytes());
        let _ = self.sink.flush();
    }
}

/// Renders one log line: timestamp, category icon, message, exactly one
/// trailing newline. Colorization of the whole line applies only in Ansi
/// mode; the rainbow writer colorizes at the sink instead.
pub fn format_line(category: Category, message: &str, mode: ColorMode) -> String {
    let now = Local::now().format(TIMESTAMP_LAYOUT);
    let body = message.trim_end_matches('\n');
    let line = format!("{} [{}]  {}\n", now, category.icon(), body);
    match mode {
        ColorMode::Ansi => category.colorize(line),
        _ => line,
    }
}
