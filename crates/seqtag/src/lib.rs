//! # `seqtag` Sequence-Labeling Dataset Prep
//!
//! Builds token and tag index maps from line-delimited files, and encodes
//! space-separated sentence/label files into index sequences for
//! sequence-labeling models (NER, POS tagging, chunking).
//!
//! See:
//! * [`vocab`] to build `{ token -> index }` and `{ tag -> index }` maps.
//! * [`dataset`] to encode sentence and label files with those maps.
//!
//! ```rust,no_run
//! use seqtag::{dataset::encode_dataset, vocab::build_vocab};
//!
//! fn example() -> seqtag::errors::Result<()> {
//!     type T = u32;
//!
//!     let (vocab, tags) = build_vocab::<T, _, _>("words.txt", "tags.txt")?;
//!     let (sentences, labels, count) =
//!         encode_dataset(&vocab, &tags, "train/sentences.txt", "train/labels.txt")?;
//!
//!     assert_eq!(sentences.len(), count);
//!     assert_eq!(labels.len(), count);
//!     Ok(())
//! }
//! ```
//!
//! ## Logging
//!
//! This crate logs through the [`log`] facade; install a logger in the
//! calling binary to see map sizes (`debug`) and alignment warnings (`warn`).
//!
//! ## Crate Features
#![doc = document_features::document_features!()]
#![warn(missing_docs, unused)]

pub mod dataset;
pub mod errors;
pub mod text_lines;
pub mod types;
pub mod vocab;

#[doc(inline)]
pub use dataset::{DatasetEncoder, DatasetEncoderOptions, EncodedDataset, encode_dataset};
#[doc(inline)]
pub use errors::{Result, SeqTagError};
#[doc(inline)]
pub use types::IndexType;
#[doc(inline)]
pub use vocab::{IndexMap, VocabOptions, build_vocab};
