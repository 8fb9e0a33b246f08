//! # Dataset Encoding
//!
//! Converts space-separated sentence and label files into index sequences,
//! using the maps built by [`crate::vocab`].
//!
//! ```rust,no_run
//! use seqtag::{
//!     dataset::{DatasetEncoder, DatasetEncoderOptions},
//!     vocab::{IndexMap, build_vocab},
//! };
//!
//! fn example() -> seqtag::errors::Result<()> {
//!     let (vocab, tags): (IndexMap<u32>, IndexMap<u32>) =
//!         build_vocab("words.txt", "tags.txt")?;
//!
//!     let encoder = DatasetEncoder::new(
//!         DatasetEncoderOptions::default().with_strict_alignment(true),
//!         &vocab,
//!         &tags,
//!     )?;
//!
//!     for split in ["train", "val", "test"] {
//!         let dataset = encoder.encode_paths(
//!             format!("{split}/sentences.txt"),
//!             format!("{split}/labels.txt"),
//!         )?;
//!         println!("{split}: {} examples", dataset.count());
//!     }
//!     Ok(())
//! }
//! ```

mod dataset_encoder;
mod encoded_dataset;
mod encoder_options;

#[doc(inline)]
pub use dataset_encoder::*;
#[doc(inline)]
pub use encoded_dataset::*;
#[doc(inline)]
pub use encoder_options::*;
