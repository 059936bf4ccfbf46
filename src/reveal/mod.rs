//! Reveal animation: progressively masks a password behind decoy frames.

mod animator;
mod frame;

pub use animator::{Animation, Animator, Outcome, RunToken, animate};
pub use frame::{Frame, Reveal};
