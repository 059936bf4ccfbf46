//! The widget controller: current password, visibility and the active
//! reveal run, held in one place instead of process-wide state.

use log::{debug, warn};

use crate::clipboard::{Clipboard, Toast, ToastSink};
use crate::entropy::Entropy;
use crate::error::Result;
use crate::pass::{self, ClassSet, GenerationRequest, Password};
use crate::reveal::{Animation, Animator, Frame, RunToken};
use crate::settings::Settings;

pub const COPIED_MESSAGE: &str = "Password copied to clipboard";
pub const COPY_FAILED_MESSAGE: &str = "Could not copy password";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Display {
    Idle,
    Invalid(String),
    Frame(String),
    Masked,
    Plain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    Failed,
    NothingToCopy,
}

pub struct Session {
    settings: Settings,
    animator: Animator,
    password: Option<Password>,
    run: Option<RunToken>,
    display: Display,
}

impl Session {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            animator: Animator::new(),
            password: None,
            run: None,
            display: Display::Idle,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn password(&self) -> Option<&Password> {
        self.password.as_ref()
    }

    /// Build a fresh password and prepare its reveal.
    ///
    /// Any in-flight reveal is invalidated first, whether or not the new
    /// request is valid. On an invalid request the stored password is
    /// cleared and the validation message is displayed.
    pub fn generate<E: Entropy>(
        &mut self,
        length: usize,
        classes: ClassSet,
        rng: &mut E,
    ) -> Result<Animation> {
        self.animator.cancel();
        self.run = None;

        let length = self.settings.clamp_length(length);
        let built = GenerationRequest::new(length, classes)
            .and_then(|request| pass::build(&request, rng));

        let password = match built {
            Ok(p) => p,
            Err(e) => {
                debug!("generation refused: {e}");
                self.password = None;
                self.display = Display::Invalid(e.user_message());
                return Err(e);
            }
        };

        let token = self.animator.begin();
        let animation = Animation::new(
            token.clone(),
            password.as_str(),
            self.settings.mask_char,
            self.settings.step_delay,
        );
        debug!("starting reveal run {}", token.id());
        self.password = Some(password);
        self.run = Some(token);
        self.display = Display::Frame(String::new());
        Ok(animation)
    }

    /// Apply a frame. Frames from superseded runs are dropped.
    pub fn show_frame(&mut self, token: &RunToken, frame: Frame) -> bool {
        let current = self
            .run
            .as_ref()
            .is_some_and(|run| run.id() == token.id() && run.is_current());
        if !current {
            return false;
        }
        if frame.is_final() {
            self.run = None;
            self.display = Display::Masked;
        } else {
            self.display = Display::Frame(frame.text().to_string());
        }
        true
    }

    pub fn is_animating(&self) -> bool {
        self.run.is_some()
    }

    pub fn is_visible(&self) -> bool {
        self.display == Display::Plain
    }

    /// Flip between masked and plain text. Ignored with no password or
    /// while a reveal is still running.
    pub fn toggle_visibility(&mut self) -> bool {
        if self.password.is_none() || self.is_animating() {
            return false;
        }
        self.display = match self.display {
            Display::Plain => Display::Masked,
            _ => Display::Plain,
        };
        true
    }

    pub fn copy_password<C, S>(&self, clipboard: &mut C, sink: &mut S) -> CopyOutcome
    where
        C: Clipboard + ?Sized,
        S: ToastSink + ?Sized,
    {
        let Some(password) = &self.password else {
            return CopyOutcome::NothingToCopy;
        };
        let (outcome, text) = match clipboard.write_text(password.as_str()) {
            Ok(()) => (CopyOutcome::Copied, COPIED_MESSAGE),
            Err(e) => {
                warn!("copy failed: {e}");
                (CopyOutcome::Failed, COPY_FAILED_MESSAGE)
            }
        };
        sink.show(Toast {
            text: text.to_string(),
            duration: self.settings.toast_duration,
        });
        outcome
    }

    /// What the password line shows right now.
    pub fn display_text(&self) -> String {
        match (&self.display, &self.password) {
            (Display::Invalid(msg), _) => msg.clone(),
            (Display::Frame(text), _) => text.clone(),
            (Display::Masked, Some(p)) => mask(p, self.settings.mask_char),
            (Display::Plain, Some(p)) => p.as_str().to_string(),
            _ => String::new(),
        }
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self.display, Display::Invalid(_))
    }
}

fn mask(password: &Password, mask: char) -> String {
    std::iter::repeat_n(mask, password.len()).collect()
}
