//! # `OpenAI` Vocabularies
//!
//! Patterns, special tokens, and published sources for the public
//! `OpenAI` BPE vocabularies.

pub mod patterns;
pub mod specials;
pub mod vocabs;

pub use patterns::*;
pub use specials::*;
pub use vocabs::*;
