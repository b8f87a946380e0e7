//! Theme Module
//!
//! Color scheme for the blog UI: light gray page, white cards, cyan
//! primary actions and a pink sign-out accent.

pub mod colors;

pub use colors::*;
