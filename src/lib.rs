//! Password generator widget: class-guaranteed password construction and a
//! cancellable masked reveal animation, with a terminal front end.

pub mod clipboard;
pub mod entropy;
pub mod error;
pub mod pass;
pub mod reveal;
pub mod session;
pub mod settings;
pub mod terminal;
pub mod tui;

pub use error::{Error, InvalidRequest, Result};
pub use pass::{CharacterClass, ClassSet, GenerationRequest, Password, build};
pub use reveal::{Animation, Animator, Frame, Outcome, Reveal, RunToken, animate};
pub use session::{CopyOutcome, Session};
pub use settings::Settings;
