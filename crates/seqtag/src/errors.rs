//! # Error Types

/// Errors from seqtag operations.
#[derive(Debug, thiserror::Error)]
pub enum SeqTagError {
    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A label has no entry in the tag mapping.
    #[error("label {label:?} on line {line} is not in the tag map")]
    MissingLabel {
        /// The label text.
        label: String,

        /// The 1-based line number in the labels source.
        line: usize,
    },

    /// The vocabulary has no entry for the unknown-token key.
    #[error("vocab has no unknown token entry {token:?}")]
    MissingUnknownToken {
        /// The configured unknown-token key.
        token: String,
    },

    /// An index exceeds the capacity of the target index type.
    #[error("index ({size}) exceeds index type capacity")]
    IndexOverflow {
        /// The index value that exceeded the capacity.
        size: usize,
    },

    /// Sentence and label sources have different line counts.
    #[error("sentence/label line count mismatch: {sentences} sentences, {labels} labels")]
    LineCountMismatch {
        /// The number of sentence lines.
        sentences: usize,

        /// The number of label lines.
        labels: usize,
    },

    /// A sentence line and its label line have different lengths.
    #[error("line {line}: {tokens} tokens but {labels} labels")]
    SequenceLengthMismatch {
        /// The 1-based line number.
        line: usize,

        /// The number of tokens on the sentence line.
        tokens: usize,

        /// The number of labels on the label line.
        labels: usize,
    },
}

/// Result type for seqtag operations.
pub type Result<T> = core::result::Result<T, SeqTagError>;
