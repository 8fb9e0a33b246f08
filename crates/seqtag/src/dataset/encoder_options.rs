use crate::{
    dataset::DatasetEncoder,
    errors::Result,
    types::IndexType,
    vocab::{DEFAULT_UNK_TOKEN, IndexMap},
};

/// Options for configuring a [`DatasetEncoder`].
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetEncoderOptions {
    /// The vocabulary key substituted for out-of-vocabulary tokens.
    pub unk_token: String,

    /// Reject sentence/label misalignment instead of logging it.
    pub strict_alignment: bool,
}

impl Default for DatasetEncoderOptions {
    fn default() -> Self {
        Self {
            unk_token: DEFAULT_UNK_TOKEN.to_string(),
            strict_alignment: false,
        }
    }
}

impl DatasetEncoderOptions {
    /// Gets the configured unknown-token key.
    pub fn unk_token(&self) -> &str {
        &self.unk_token
    }

    /// Sets the configured unknown-token key.
    pub fn set_unk_token(
        &mut self,
        unk_token: impl Into<String>,
    ) {
        self.unk_token = unk_token.into();
    }

    /// Sets the configured unknown-token key.
    pub fn with_unk_token(
        mut self,
        unk_token: impl Into<String>,
    ) -> Self {
        self.set_unk_token(unk_token);
        self
    }

    /// Gets the configured strict alignment value.
    ///
    /// When enabled, unequal line counts and unequal per-line
    /// token/label counts are errors. When disabled they are
    /// accepted and reported with `log::warn!`.
    pub fn strict_alignment(&self) -> bool {
        self.strict_alignment
    }

    /// Sets the configured strict alignment value.
    ///
    /// See: [`strict_alignment`](Self::strict_alignment)
    pub fn set_strict_alignment(
        &mut self,
        strict_alignment: bool,
    ) {
        self.strict_alignment = strict_alignment;
    }

    /// Sets the configured strict alignment value.
    ///
    /// See: [`strict_alignment`](Self::strict_alignment)
    pub fn with_strict_alignment(
        mut self,
        strict_alignment: bool,
    ) -> Self {
        self.set_strict_alignment(strict_alignment);
        self
    }

    /// Build a [`DatasetEncoder`] over the given maps.
    pub fn build<'a, T: IndexType>(
        &self,
        vocab: &'a IndexMap<T>,
        tags: &'a IndexMap<T>,
    ) -> Result<DatasetEncoder<'a, T>> {
        DatasetEncoder::new(self.clone(), vocab, tags)
    }
}
