//! Logging subscriber initialisation.
//!
//! Events are formatted by a `tracing-subscriber` fmt layer and forwarded line
//! by line to the browser console.

use std::io;

use tracing_subscriber::{
    EnvFilter,
    fmt::MakeWriter,
    layer::SubscriberExt,
    util::{SubscriberInitExt, TryInitError},
};

const DEFAULT_DIRECTIVES: &str = "info,storefront=debug,storefront_web=debug";

/// Buffers one formatted event and emits it when dropped.
#[derive(Debug, Default)]
pub(crate) struct ConsoleWriter {
    buffer: Vec<u8>,
}

impl ConsoleWriter {
    fn emit(&mut self) {
        if self.buffer.is_empty() {
            return;
        }

        let line = String::from_utf8_lossy(&self.buffer);

        #[cfg(target_arch = "wasm32")]
        web_sys::console::log_1(&line.trim_end().into());

        #[cfg(not(target_arch = "wasm32"))]
        {
            use std::io::Write as _;

            if io::stderr().write_all(line.as_bytes()).is_err() {
                // Nowhere left to report to.
            }
        }

        self.buffer.clear();
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);

        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.emit();

        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        self.emit();
    }
}

/// Hands out a fresh [`ConsoleWriter`] per event.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct MakeConsoleWriter;

impl<'a> MakeWriter<'a> for MakeConsoleWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::default()
    }
}

/// Install the global subscriber.
pub(crate) fn init_subscriber() -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_ansi(false)
                .with_target(true)
                .with_writer(MakeConsoleWriter),
        )
        .with(EnvFilter::new(DEFAULT_DIRECTIVES))
        .try_init()
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn writer_buffers_until_flushed() -> io::Result<()> {
        let mut writer = ConsoleWriter::default();

        writer.write_all(b"cart initialized\n")?;

        assert_eq!(writer.buffer, b"cart initialized\n");

        writer.flush()?;

        assert!(writer.buffer.is_empty());

        Ok(())
    }
}
