//! Destination of `print` statements and REPL echoes.
//!
//! - Stdout: the CLI default
//! - Buffer: captures output for tests and embedders
//! - Silent: discards everything
//!
//! Enum dispatch keeps the per-`print` path free of vtable calls.

use std::io::Write as _;
use std::sync::Arc;

use parking_lot::Mutex;

/// Writes to stdout.
#[derive(Default)]
pub struct StdoutPrintHandler;

impl StdoutPrintHandler {
    pub fn println(&self, msg: &str) {
        println!("{msg}");
    }

    /// Print without newline, flushing so prompts appear immediately.
    pub fn print(&self, msg: &str) {
        let mut out = std::io::stdout().lock();
        let _ = out.write_all(msg.as_bytes());
        let _ = out.flush();
    }
}

/// Captures output in memory.
#[derive(Default)]
pub struct BufferPrintHandler {
    buffer: Mutex<String>,
}

impl BufferPrintHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn println(&self, msg: &str) {
        let mut buf = self.buffer.lock();
        buf.push_str(msg);
        buf.push('\n');
    }

    pub fn print(&self, msg: &str) {
        self.buffer.lock().push_str(msg);
    }

    pub fn captured(&self) -> String {
        self.buffer.lock().clone()
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

pub enum PrintHandler {
    Stdout(StdoutPrintHandler),
    Buffer(BufferPrintHandler),
    Silent,
}

impl PrintHandler {
    pub fn println(&self, msg: &str) {
        match self {
            Self::Stdout(h) => h.println(msg),
            Self::Buffer(h) => h.println(msg),
            Self::Silent => {}
        }
    }

    pub fn print(&self, msg: &str) {
        match self {
            Self::Stdout(h) => h.print(msg),
            Self::Buffer(h) => h.print(msg),
            Self::Silent => {}
        }
    }

    /// Captured output; empty for handlers that do not capture.
    pub fn captured(&self) -> String {
        match self {
            Self::Buffer(h) => h.captured(),
            Self::Stdout(_) | Self::Silent => String::new(),
        }
    }

    pub fn clear(&self) {
        if let Self::Buffer(h) = self {
            h.clear();
        }
    }
}

/// Handler shared between a runtime and everything it evaluates.
pub type SharedPrintHandler = Arc<PrintHandler>;

pub fn stdout_handler() -> SharedPrintHandler {
    Arc::new(PrintHandler::Stdout(StdoutPrintHandler))
}

pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintHandler::Buffer(BufferPrintHandler::new()))
}

pub fn silent_handler() -> SharedPrintHandler {
    Arc::new(PrintHandler::Silent)
}

/// `io::Write` over a shared handler; backs the script-visible
/// `system.stdout` so its writes land wherever `print` does.
pub(crate) struct HandlerWriter(pub(crate) SharedPrintHandler);

impl std::io::Write for HandlerWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.print(&String::from_utf8_lossy(buf));
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn buffer_captures_lines_and_fragments() {
        let handler = buffer_handler();
        handler.print("a");
        handler.println("b");
        assert_eq!(handler.captured(), "ab\n");
        handler.clear();
        assert_eq!(handler.captured(), "");
    }

    #[test]
    fn silent_discards() {
        let handler = silent_handler();
        handler.println("hello");
        assert_eq!(handler.captured(), "");
    }

    #[test]
    fn buffer_is_thread_safe() {
        let handler = buffer_handler();
        let other = handler.clone();
        let t = std::thread::spawn(move || {
            for _ in 0..50 {
                other.println("a");
            }
        });
        for _ in 0..50 {
            handler.println("b");
        }
        t.join().unwrap();
        assert_eq!(handler.captured().lines().count(), 100);
    }
}
