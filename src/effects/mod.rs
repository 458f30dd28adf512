//! Client-state components for the portfolio UI.
//!
//! Each component owns a watch-published state cell driven by the tokio event
//! loop: the visibility trigger for entrance animations, the typewriter for
//! the hero terminal, and the color-mode manager for the theme toggle.
//! Dropping a handle releases its timers and observers.

pub mod color_mode;
pub mod typewriter;
pub mod visibility;

pub use color_mode::{ColorMode, ColorModeManager, PreferenceStore};
pub use typewriter::{Typewriter, TypewriterOptions, TypingState};
pub use visibility::{IntersectionEvent, VisibilityOptions, VisibilityTrigger};
