//! Adjective matching module
//!
//! This module scores catalog records against the fixed vocabulary of
//! descriptive adjectives used to compose a personalized palette.

pub mod adjective;

pub use adjective::{score, score_token, Adjective};
