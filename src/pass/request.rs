//! Generation requests and the synced length controls feeding them.

use super::charset::ClassSet;
use crate::error::{InvalidRequest, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationRequest {
    length: usize,
    classes: ClassSet,
}

impl GenerationRequest {
    pub fn new(length: usize, classes: ClassSet) -> Result<Self> {
        if classes.is_empty() {
            return Err(InvalidRequest::NoClassSelected.into());
        }
        if length == 0 {
            return Err(InvalidRequest::ZeroLength.into());
        }
        Ok(Self { length, classes })
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn classes(&self) -> &ClassSet {
        &self.classes
    }
}

/// Slider and number field for the password length.
///
/// Both views always show the same value. Typed text is clamped to
/// `[min, max]`; anything that is not a number resets to the default.
#[derive(Debug, Clone)]
pub struct LengthControl {
    min: usize,
    max: usize,
    default: usize,
    value: usize,
    text: String,
}

impl LengthControl {
    pub fn new(min: usize, max: usize, default: usize) -> Self {
        let default = default.clamp(min, max);
        Self {
            min,
            max,
            default,
            value: default,
            text: default.to_string(),
        }
    }

    pub fn value(&self) -> usize {
        self.value
    }

    /// Number field contents while editing.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn bounds(&self) -> (usize, usize) {
        (self.min, self.max)
    }

    /// Number field edited.
    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        let trimmed = text.trim();
        self.value = match trimmed.parse::<usize>() {
            Ok(n) => n.clamp(self.min, self.max),
            // Too many digits for usize.
            Err(_) if !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit()) => {
                self.max
            }
            Err(_) => self.default,
        };
    }

    /// Append a typed digit to the number field. Once the field holds more
    /// digits than `max` has, it snaps back to the clamped value.
    pub fn push_digit(&mut self, digit: char) {
        if !digit.is_ascii_digit() {
            return;
        }
        let mut text = self.text.clone();
        text.push(digit);
        self.set_text(&text);
        if self.text.len() > self.max.to_string().len() {
            self.commit();
        }
    }

    pub fn pop_digit(&mut self) {
        let mut text = self.text.clone();
        text.pop();
        self.set_text(&text);
    }

    /// Slider moved by `delta` steps.
    pub fn step(&mut self, delta: isize) {
        let next = self.value.saturating_add_signed(delta).clamp(self.min, self.max);
        self.set_value(next);
    }

    pub fn set_value(&mut self, value: usize) {
        self.value = value.clamp(self.min, self.max);
        self.text = self.value.to_string();
    }

    /// Rewrite the number field to the value actually in use.
    pub fn commit(&mut self) {
        self.text = self.value.to_string();
    }
}
