use std::io;

use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber. Safe to call more than once.
///
/// In the browser events go to the devtools console; elsewhere to stderr.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    #[cfg(target_arch = "wasm32")]
    let result = builder
        .with_ansi(false)
        .without_time()
        .with_writer(ConsoleWriter)
        .try_init();

    #[cfg(not(target_arch = "wasm32"))]
    let result = builder.with_writer(io::stderr).try_init();

    if result.is_err() {
        tracing::debug!("Logging already initialised");
    }
}

/// Routes formatted events to `console.log`, one call per event.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleWriter;

impl<'a> MakeWriter<'a> for ConsoleWriter {
    type Writer = ConsoleLine;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleLine::default()
    }
}

#[derive(Debug, Default)]
pub struct ConsoleLine {
    buf: Vec<u8>,
}

impl io::Write for ConsoleLine {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleLine {
    fn drop(&mut self) {
        let text = String::from_utf8_lossy(&self.buf);
        let line = text.trim_end();
        if !line.is_empty() {
            web_sys::console::log_1(&line.into());
        }
    }
}
