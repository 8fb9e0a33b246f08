//! # Vocabulary Builder

use std::{io::BufRead, path::Path};

use crate::{
    errors::Result,
    types::IndexType,
    vocab::{IndexMap, VocabOptions, append_entry, load_index_map_path, read_index_map},
};

/// Build the `(vocab, tags)` maps from line-delimited files, with default options.
///
/// The vocabulary maps line `i` to index `i` and then receives
/// [`DEFAULT_PAD_TOKEN`](crate::vocab::DEFAULT_PAD_TOKEN) at the current map size.
/// The tag map is built the same way, without padding.
///
/// # Arguments
/// * `vocab_path` - one token per line.
/// * `tags_path` - one tag per line.
///
/// ## Returns
/// An I/O error if either file is missing or unreadable.
pub fn build_vocab<T, P, Q>(
    vocab_path: P,
    tags_path: Q,
) -> Result<(IndexMap<T>, IndexMap<T>)>
where
    T: IndexType,
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    build_vocab_with_options(&VocabOptions::default(), vocab_path, tags_path)
}

/// Build the `(vocab, tags)` maps from line-delimited files.
///
/// # Arguments
/// * `options` - the build options.
/// * `vocab_path` - one token per line.
/// * `tags_path` - one tag per line.
pub fn build_vocab_with_options<T, P, Q>(
    options: &VocabOptions,
    vocab_path: P,
    tags_path: Q,
) -> Result<(IndexMap<T>, IndexMap<T>)>
where
    T: IndexType,
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let vocab_path = vocab_path.as_ref();
    let tags_path = tags_path.as_ref();

    let mut vocab = load_index_map_path(vocab_path)?;
    let pad = append_entry(&mut vocab, options.pad_token())?;
    log::debug!(
        "loaded vocab from {}: {} entries, {:?} at {pad}",
        vocab_path.display(),
        vocab.len(),
        options.pad_token(),
    );

    let tags = load_index_map_path(tags_path)?;
    log::debug!(
        "loaded tags from {}: {} entries",
        tags_path.display(),
        tags.len()
    );

    Ok((vocab, tags))
}

/// Build the `(vocab, tags)` maps from line readers.
///
/// Same semantics as [`build_vocab_with_options`].
pub fn read_vocab<T, V, G>(
    options: &VocabOptions,
    vocab_reader: V,
    tags_reader: G,
) -> Result<(IndexMap<T>, IndexMap<T>)>
where
    T: IndexType,
    V: BufRead,
    G: BufRead,
{
    let mut vocab = read_index_map(vocab_reader)?;
    append_entry(&mut vocab, options.pad_token())?;

    let tags = read_index_map(tags_reader)?;

    Ok((vocab, tags))
}
