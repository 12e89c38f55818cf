//! # Resolver
//!
//! Gesture resolution module.
//!
//! Responsibilities:
//! - Classify the raw status byte via one decode table
//! - Disambiguate direction flags from compound gestures with a single
//!   lookahead read after the settle window
//! - Propagate bus errors instead of masking them as "no gesture"

pub mod decode;
pub mod resolver;

pub use contracts::{GestureEvent, GestureFlags, GestureReader, ResolverConfig};
pub use decode::{completion_override, decode, DecodeEntry, ResolvePolicy};
pub use resolver::GestureResolver;
