use std::path::Path;

use crate::{
    errors::Result,
    types::IndexType,
    vocab::{DEFAULT_PAD_TOKEN, IndexMap, build_vocab_with_options},
};

/// Options for building vocabulary and tag maps.
#[derive(Debug, Clone, PartialEq)]
pub struct VocabOptions {
    /// The padding key appended to the vocabulary.
    pub pad_token: String,
}

impl Default for VocabOptions {
    fn default() -> Self {
        Self {
            pad_token: DEFAULT_PAD_TOKEN.to_string(),
        }
    }
}

impl VocabOptions {
    /// Gets the configured padding key.
    pub fn pad_token(&self) -> &str {
        &self.pad_token
    }

    /// Sets the configured padding key.
    pub fn set_pad_token(
        &mut self,
        pad_token: impl Into<String>,
    ) {
        self.pad_token = pad_token.into();
    }

    /// Sets the configured padding key.
    pub fn with_pad_token(
        mut self,
        pad_token: impl Into<String>,
    ) -> Self {
        self.set_pad_token(pad_token);
        self
    }

    /// Build the `(vocab, tags)` maps from the given files.
    ///
    /// See [`build_vocab_with_options`].
    pub fn build<T, P, Q>(
        &self,
        vocab_path: P,
        tags_path: Q,
    ) -> Result<(IndexMap<T>, IndexMap<T>)>
    where
        T: IndexType,
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        build_vocab_with_options(self, vocab_path, tags_path)
    }
}
