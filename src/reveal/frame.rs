//! Reveal frames and the synchronous frame sequencer.

use crate::entropy::Entropy;
use crate::pass::charset::DECOY_ALPHABET;

/// One snapshot of the password display during a reveal.
///
/// The first `index` positions hold the mask character, the rest hold
/// decoys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    index: usize,
    len: usize,
    text: String,
}

impl Frame {
    /// Number of masked positions.
    pub fn masked(&self) -> usize {
        self.index
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_final(&self) -> bool {
        self.index == self.len
    }
}

/// Sequencer for `len + 1` frames, driven by the caller's clock.
#[derive(Debug, Clone)]
pub struct Reveal {
    len: usize,
    mask: char,
    next: usize,
}

impl Reveal {
    pub fn new(len: usize, mask: char) -> Self {
        Self { len, mask, next: 0 }
    }

    pub fn is_finished(&self) -> bool {
        self.next > self.len
    }

    /// Produce the next frame, or `None` once the fully masked frame has
    /// been handed out. Decoys are redrawn on every call.
    pub fn next_frame<E: Entropy>(&mut self, rng: &mut E) -> Option<Frame> {
        if self.is_finished() {
            return None;
        }
        let index = self.next;
        self.next += 1;

        let mut text = String::with_capacity(self.len * self.mask.len_utf8());
        text.extend(std::iter::repeat_n(self.mask, index));
        text.extend((index..self.len).map(|_| rng.pick(DECOY_ALPHABET) as char));

        Some(Frame {
            index,
            len: self.len,
            text,
        })
    }
}
