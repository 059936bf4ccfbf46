//! Widget state and rendering.

use std::io::{self, Write};

use tokio::time::Instant;

use super::input::Action;
use crate::clipboard::{Clipboard, Toasts};
use crate::entropy::Entropy;
use crate::pass::{CharacterClass, ClassSet, LengthControl};
use crate::reveal::{Animation, Frame, RunToken};
use crate::session::Session;
use crate::settings::Settings;
use crate::terminal::{
    DIM, GREEN, RED, RESET, box_bottom, box_line, box_line_center, box_rule, box_top, home,
    slider,
};

pub enum Effect {
    None,
    Reveal(Animation),
    Quit,
}

pub struct App {
    session: Session,
    length: LengthControl,
    classes: ClassSet,
    toasts: Toasts,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        Self {
            length: settings.length_control(),
            classes: settings.initial_classes,
            session: Session::new(settings),
            toasts: Toasts::new(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn length(&self) -> &LengthControl {
        &self.length
    }

    pub fn classes(&self) -> &ClassSet {
        &self.classes
    }

    pub fn toasts(&self) -> &Toasts {
        &self.toasts
    }

    pub fn apply<E, C>(&mut self, action: Action, rng: &mut E, clipboard: &mut C) -> Effect
    where
        E: Entropy,
        C: Clipboard + ?Sized,
    {
        match action {
            Action::Quit => return Effect::Quit,
            Action::Generate => {
                self.length.commit();
                // Refusals are shown on the password line by the session.
                if let Ok(animation) = self.session.generate(self.length.value(), self.classes, rng) {
                    return Effect::Reveal(animation);
                }
            }
            Action::Copy => {
                self.session.copy_password(clipboard, &mut self.toasts);
            }
            Action::ToggleVisibility => {
                self.session.toggle_visibility();
            }
            Action::ToggleClass(class) => {
                self.classes.toggle(class);
            }
            Action::Slide(delta) => self.length.step(delta),
            Action::Digit(c) => self.length.push_digit(c),
            Action::Backspace => self.length.pop_digit(),
        }
        Effect::None
    }

    pub fn on_frame(&mut self, token: &RunToken, frame: Frame) {
        self.session.show_frame(token, frame);
    }

    pub fn expire_toast(&mut self, now: Instant) -> bool {
        self.toasts.expire(now)
    }

    pub fn render(&self, out: &mut impl Write) -> io::Result<()> {
        home(out)?;
        box_top(out, "revealpass")?;

        let text = self.session.display_text();
        if self.session.is_invalid() {
            box_line_center(out, &format!("{RED}{text}{RESET}"))?;
        } else if text.is_empty() && !self.session.is_animating() {
            box_line_center(out, &format!("{DIM}press Enter to generate{RESET}"))?;
        } else {
            box_line_center(out, &text)?;
        }
        let eye = if self.session.is_visible() { "hide" } else { "show" };
        box_line_center(out, &format!("{DIM}[v] {eye}   [c] copy{RESET}"))?;
        box_rule(out)?;

        let (min, max) = self.length.bounds();
        box_line(
            out,
            &format!(
                "Length {:>4}  {}  {DIM}←/→ or type{RESET}",
                self.length.text(),
                slider(self.length.value(), min, max, 32)
            ),
        )?;
        box_rule(out)?;

        for pair in CharacterClass::ALL.chunks(2) {
            let cells: Vec<String> = pair.iter().map(|c| self.class_cell(*c)).collect();
            box_line(out, &cells.join("    "))?;
        }
        box_rule(out)?;
        box_line(out, &format!("{DIM}[Enter] generate   [q] quit{RESET}"))?;
        box_bottom(out)?;

        match self.toasts.current() {
            Some(toast) => write!(out, "  {GREEN}{}{RESET}\r\n", toast.text)?,
            None => write!(out, "\r\n")?,
        }
        Ok(())
    }

    fn class_cell(&self, class: CharacterClass) -> String {
        let lock = if self.classes.contains(class) {
            "[■]"
        } else {
            "[ ]"
        };
        let key = match class {
            CharacterClass::Lowercase => 'l',
            CharacterClass::Uppercase => 'u',
            CharacterClass::Digit => 'n',
            CharacterClass::Symbol => 's',
        };
        format!("{lock} {:<10} ({key})", class.label())
    }
}
