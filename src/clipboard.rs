//! Clipboard access and transient messages.

use std::time::Duration;

use copypasta::{ClipboardContext, ClipboardProvider};
use tokio::time::Instant;
use zeroize::Zeroize;

use crate::error::{Error, Result};

pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// System clipboard, opened on first use.
#[derive(Default)]
pub struct SystemClipboard {
    ctx: Option<ClipboardContext>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn context(&mut self) -> Result<&mut ClipboardContext> {
        if self.ctx.is_none() {
            let ctx = ClipboardContext::new().map_err(|e| Error::clipboard(e.to_string()))?;
            self.ctx = Some(ctx);
        }
        self.ctx
            .as_mut()
            .ok_or_else(|| Error::clipboard("clipboard unavailable"))
    }
}

impl Clipboard for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        let ctx = self.context()?;
        let mut contents = text.to_string();
        let res = ctx
            .set_contents(contents.clone())
            .map_err(|e| Error::clipboard(e.to_string()));
        contents.zeroize();
        res?;
        // Some providers keep a copy from the read-back; wipe ours.
        if let Ok(mut retrieved) = ctx.get_contents() {
            retrieved.zeroize();
        }
        Ok(())
    }
}

/// A message shown briefly, then dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub text: String,
    pub duration: Duration,
}

pub trait ToastSink {
    fn show(&mut self, toast: Toast);
}

/// Holds at most one toast and forgets it once it expires.
#[derive(Debug, Default)]
pub struct Toasts {
    current: Option<(Toast, Instant)>,
}

impl Toasts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref().map(|(toast, _)| toast)
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.current.as_ref().map(|(_, at)| *at)
    }

    /// Drop the toast if its time is up. Returns whether one was dismissed.
    pub fn expire(&mut self, now: Instant) -> bool {
        match self.deadline() {
            Some(at) if now >= at => {
                self.current = None;
                true
            }
            _ => false,
        }
    }
}

impl ToastSink for Toasts {
    fn show(&mut self, toast: Toast) {
        let at = Instant::now() + toast.duration;
        self.current = Some((toast, at));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn toast_dismisses_after_duration() {
        let mut toasts = Toasts::new();
        toasts.show(Toast {
            text: "hi".into(),
            duration: Duration::from_millis(3000),
        });
        assert!(!toasts.expire(Instant::now()));
        tokio::time::sleep(Duration::from_millis(2999)).await;
        assert!(!toasts.expire(Instant::now()));
        tokio::time::sleep(Duration::from_millis(1)).await;
        assert!(toasts.expire(Instant::now()));
        assert!(toasts.current().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn newer_toast_replaces_older() {
        let mut toasts = Toasts::new();
        toasts.show(Toast {
            text: "one".into(),
            duration: Duration::from_millis(100),
        });
        toasts.show(Toast {
            text: "two".into(),
            duration: Duration::from_millis(500),
        });
        assert_eq!(toasts.current().map(|t| t.text.as_str()), Some("two"));
        tokio::time::sleep(Duration::from_millis(200)).await;
        assert!(!toasts.expire(Instant::now()));
    }
}
