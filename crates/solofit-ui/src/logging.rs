//! Browser console logging
//!
//! Installs a `tracing-subscriber` fmt layer whose writer forwards each
//! formatted event to `console.{debug,info,warn,error}`. Timestamps are off:
//! `std::time::SystemTime` is unavailable on `wasm32-unknown-unknown`.

use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;
use wasm_bindgen::JsValue;

use crate::error::{Result, UiError};

/// Console method an event is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleMethod {
    Debug,
    Info,
    Warn,
    Error,
}

impl ConsoleMethod {
    /// Pick the console method for a tracing level.
    #[must_use]
    pub fn for_level(level: Level) -> Self {
        if level == Level::ERROR {
            Self::Error
        } else if level == Level::WARN {
            Self::Warn
        } else if level == Level::INFO {
            Self::Info
        } else {
            Self::Debug
        }
    }

    fn emit(self, line: &str) {
        let value = JsValue::from_str(line);
        match self {
            Self::Debug => web_sys::console::debug_1(&value),
            Self::Info => web_sys::console::info_1(&value),
            Self::Warn => web_sys::console::warn_1(&value),
            Self::Error => web_sys::console::error_1(&value),
        }
    }
}

/// Buffers one formatted event and emits it on drop.
pub struct ConsoleWriter {
    method: ConsoleMethod,
    buffer: Vec<u8>,
}

impl ConsoleWriter {
    #[must_use]
    pub const fn new(method: ConsoleMethod) -> Self {
        Self {
            method,
            buffer: Vec::new(),
        }
    }

    /// The buffered line without its trailing newline, if any text was written.
    #[must_use]
    pub fn line(&self) -> Option<String> {
        let text = String::from_utf8_lossy(&self.buffer);
        let trimmed = text.trim_end();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if let Some(line) = self.line() {
            self.method.emit(&line);
        }
    }
}

/// [`MakeWriter`] producing a [`ConsoleWriter`] per event.
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeConsoleWriter;

impl<'a> MakeWriter<'a> for MakeConsoleWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(ConsoleMethod::Info)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(ConsoleMethod::for_level(*meta.level()))
    }
}

/// Install the global subscriber. Call once, before mounting the app.
///
/// # Errors
///
/// Returns [`UiError::LoggingInitFailed`] if a global subscriber is already set.
pub fn init(level: Level) -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(MakeConsoleWriter)
        .with_max_level(level)
        .without_time()
        .with_ansi(false)
        .try_init()
        .map_err(|e| UiError::LoggingInitFailed(e.to_string()))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use std::io::Write;
    use std::mem::ManuallyDrop;

    use super::*;

    #[test]
    fn test_levels_map_to_console_methods() {
        assert_eq!(ConsoleMethod::for_level(Level::ERROR), ConsoleMethod::Error);
        assert_eq!(ConsoleMethod::for_level(Level::WARN), ConsoleMethod::Warn);
        assert_eq!(ConsoleMethod::for_level(Level::INFO), ConsoleMethod::Info);
        assert_eq!(ConsoleMethod::for_level(Level::DEBUG), ConsoleMethod::Debug);
        assert_eq!(ConsoleMethod::for_level(Level::TRACE), ConsoleMethod::Debug);
    }

    #[test]
    fn test_writer_buffers_and_trims() {
        // Never dropped: dropping would call into the browser console.
        let mut writer = ManuallyDrop::new(ConsoleWriter::new(ConsoleMethod::Info));
        writer.write_all(b" INFO solofit: request accepted\n").unwrap();
        assert_eq!(
            writer.line().as_deref(),
            Some(" INFO solofit: request accepted")
        );
    }

    #[test]
    fn test_empty_writer_has_no_line() {
        let writer = ManuallyDrop::new(ConsoleWriter::new(ConsoleMethod::Debug));
        assert_eq!(writer.line(), None);
    }
}
