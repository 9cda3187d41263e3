//! Host event-source registration.
//!
//! Listeners are acquired when a board gets an engine and released when the
//! engine goes away, so no event source outlives the engine it feeds.

use std::io::{self, Write};

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::ExecutableCommand;
use tracing::debug;

pub trait InputListeners {
    fn attach(&mut self) -> io::Result<()>;

    /// Release the event sources. Must be safe to call when not attached.
    fn detach(&mut self) -> io::Result<()>;

    fn is_attached(&self) -> bool;
}

/// Terminal mouse capture, needed for swipe gestures.
///
/// Keyboard events need no registration in raw mode.
#[derive(Debug)]
pub struct TerminalListeners<W: Write> {
    out: W,
    attached: bool,
}

impl TerminalListeners<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalListeners<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            attached: false,
        }
    }

    pub fn writer(&self) -> &W {
        &self.out
    }
}

impl<W: Write> InputListeners for TerminalListeners<W> {
    fn attach(&mut self) -> io::Result<()> {
        if self.attached {
            return Ok(());
        }
        self.out.execute(EnableMouseCapture)?;
        self.attached = true;
        debug!("mouse capture enabled");
        Ok(())
    }

    fn detach(&mut self) -> io::Result<()> {
        if !self.attached {
            return Ok(());
        }
        self.out.execute(DisableMouseCapture)?;
        self.attached = false;
        debug!("mouse capture disabled");
        Ok(())
    }

    fn is_attached(&self) -> bool {
        self.attached
    }
}

impl<W: Write> Drop for TerminalListeners<W> {
    fn drop(&mut self) {
        let _ = self.detach();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Writer whose writes can be made to fail.
    #[derive(Default)]
    struct Flaky {
        buf: Vec<u8>,
        broken: bool,
    }

    impl Write for Flaky {
        fn write(&mut self, data: &[u8]) -> io::Result<usize> {
            if self.broken {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
            }
            self.buf.extend_from_slice(data);
            Ok(data.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            if self.broken {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
            }
            Ok(())
        }
    }

    #[test]
    fn test_failed_detach_stays_attached() {
        let mut listeners = TerminalListeners::new(Flaky::default());
        listeners.attach().unwrap();

        listeners.out.broken = true;
        assert!(listeners.detach().is_err());
        assert!(listeners.is_attached());

        listeners.out.broken = false;
        let before = listeners.writer().buf.len();
        listeners.detach().unwrap();
        assert!(!listeners.is_attached());
        assert!(listeners.writer().buf.len() > before);
    }

    #[test]
    fn test_attach_detach_emit_once() {
        let mut listeners = TerminalListeners::new(Vec::new());
        listeners.attach().unwrap();
        let after_attach = listeners.writer().len();
        assert!(after_attach > 0);

        listeners.attach().unwrap();
        assert_eq!(listeners.writer().len(), after_attach);

        listeners.detach().unwrap();
        let after_detach = listeners.writer().len();
        assert!(after_detach > after_attach);
        assert!(!listeners.is_attached());

        listeners.detach().unwrap();
        assert_eq!(listeners.writer().len(), after_detach);
    }
}
