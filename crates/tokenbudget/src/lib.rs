//! # `tokenbudget` BPE Token Counting
//!
//! Byte pair encoding for the public `OpenAI` vocabularies; for counting
//! and budgeting tokens before a model request is made.
//!
//! See:
//! * [`encoding_for_model`] / [`pretrained::EncodingRegistry`] to get an [`Encoding`].
//! * [`Encoding`] to encode text into tokens, and decode them back.
//! * [`pretrained`] for the vocabulary catalog and model name resolution.
//! * [`resources`] for vocabulary loading and caching.
//! * [`vocab`] for rank tables and rank file formats.
//!
//! ## Crate Features
//!
//! #### feature: ``default``
//!
//! * ``ahash``
//! * ``download``
//! * ``rayon``
//!
//! #### feature: ``download``
//!
//! This enables downloading vocabularies, and caching them on disk,
//! through ``tokenbudget-disk-cache``; re-exported as [`disk_cache`].
//!
//! #### feature: ``ahash``
//!
//! This swaps all HashMap/HashSet implementations for ``ahash``.
//!
//! This is done by the ``types::TBHash{*}`` type alias machinery.
//!
//! #### feature: ``rayon``
//!
//! This enables parallel [`Encoding::encode_batch`].
//!
//! #### feature: ``tracing``
//!
//! This enables a number of ``tracing`` instrumentation points.
//!
//! ## Example
//!
//! ```rust,no_run
//! fn example() -> tokenbudget::TBResult<()> {
//!     let Some(encoding) = tokenbudget::encoding_for_model("gpt-4")? else {
//!         return Ok(());
//!     };
//!
//!     let tokens = encoding.encode("hello world");
//!     assert_eq!(encoding.decode(&tokens), "hello world");
//!     Ok(())
//! }
//! ```
#![warn(missing_docs, unused)]

#[cfg(feature = "download")]
#[doc(inline)]
pub use tokenbudget_disk_cache as disk_cache;

pub mod bpe;
mod encoding;
pub mod errors;
pub mod pretrained;
pub mod regex;
pub mod resources;
pub mod strings;
pub mod types;
pub mod vocab;

pub use encoding::Encoding;
pub use errors::{TBError, TBResult};
#[cfg(feature = "download")]
pub use pretrained::encoding_for_model;
pub use types::TokenType;
