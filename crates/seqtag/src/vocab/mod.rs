//! # Vocabulary and Tag Maps
//!
//! Builds the `{ token -> index }` and `{ tag -> index }` maps used to
//! numericalize sequence-labeling datasets.
//!
//! Both files hold one entry per line; line `i` (0-based) is assigned index `i`.
//! The vocabulary additionally receives a padding entry after all real tokens.
//!
//! ```rust,no_run
//! use seqtag::vocab::{IndexMap, build_vocab};
//!
//! fn example() -> seqtag::errors::Result<()> {
//!     let (vocab, tags): (IndexMap<u32>, IndexMap<u32>) =
//!         build_vocab("words.txt", "tags.txt")?;
//!     assert!(vocab.contains_key("<PAD>"));
//!     assert!(!tags.contains_key("<PAD>"));
//!     Ok(())
//! }
//! ```

mod index_map_io;
mod vocab_builder;
mod vocab_options;

#[doc(inline)]
pub use index_map_io::*;
#[doc(inline)]
pub use vocab_builder::*;
#[doc(inline)]
pub use vocab_options::*;

use crate::types::STHashMap;

/// The default padding key appended to a built vocabulary.
pub const DEFAULT_PAD_TOKEN: &str = "<PAD>";

/// The default unknown-token key substituted for out-of-vocabulary tokens.
pub const DEFAULT_UNK_TOKEN: &str = "UNK";

/// `{ String -> T }` map.
///
/// ## Style Hints
/// Instance names should prefer `vocab` for tokens, and `tags` or `tag_map` for labels.
pub type IndexMap<T> = STHashMap<String, T>;
