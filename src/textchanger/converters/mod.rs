//! # Converter Functions
//!
//! The text transformations behind the built-in catalogue, grouped by the
//! family they belong to. Every function here is total: it accepts any `&str`
//! (empty, astral characters, pre-existing combining marks) and always returns
//! a `String`.
//!
//! Randomized converters take `&mut dyn RngCore` so callers decide where the
//! randomness comes from. Production code passes an entropy-seeded generator;
//! tests pass a seeded `StdRng`.
//!
//! The catalogue itself (names, categories, display order) lives in
//! [`crate::registry`].

pub mod case;
pub mod code_style;
pub mod direction;
pub mod encoding;
pub mod fancy;
pub mod glitch;
pub mod meme;

pub use case::capitalize;
