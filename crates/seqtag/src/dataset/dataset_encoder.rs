//! # Dataset Encoder

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::{
    dataset::{DatasetEncoderOptions, EncodedDataset},
    errors::{Result, SeqTagError},
    text_lines::{read_text, split_lines},
    types::IndexType,
    vocab::IndexMap,
};

/// Separator between tokens on a sentence line, and labels on a label line.
pub const FIELD_SEPARATOR: char = ' ';

/// Encode a sentence file and a label file, with default options.
///
/// Tokens missing from `vocab` are replaced by the index of
/// [`DEFAULT_UNK_TOKEN`](crate::vocab::DEFAULT_UNK_TOKEN); labels missing from
/// `tags` are an error.
///
/// # Arguments
/// * `vocab` - the token map; must contain the unknown-token key.
/// * `tags` - the label map.
/// * `sentences_path` - one sentence per line, tokens separated by single spaces.
/// * `labels_path` - one label sequence per line, labels separated by single spaces.
///
/// ## Returns
/// `(sentences, labels, count)`, where `count` is the number of sentence lines.
///
/// Fails with [`SeqTagError::MissingUnknownToken`] before reading either file
/// if `vocab` has no unknown-token entry, even when every token in the
/// sentences is in the vocabulary.
pub fn encode_dataset<T, P, Q>(
    vocab: &IndexMap<T>,
    tags: &IndexMap<T>,
    sentences_path: P,
    labels_path: Q,
) -> Result<(Vec<Vec<T>>, Vec<Vec<T>>, usize)>
where
    T: IndexType,
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let encoder = DatasetEncoder::new(DatasetEncoderOptions::default(), vocab, tags)?;
    Ok(encoder
        .encode_paths(sentences_path, labels_path)?
        .into_parts())
}

/// Encodes sentence and label lines against borrowed vocab and tag maps.
///
/// The maps are read-only; one encoder can be reused across dataset splits.
#[derive(Debug, Clone)]
pub struct DatasetEncoder<'a, T: IndexType> {
    options: DatasetEncoderOptions,
    vocab: &'a IndexMap<T>,
    tags: &'a IndexMap<T>,
    unk: T,
}

impl<'a, T: IndexType> DatasetEncoder<'a, T> {
    /// Create a new encoder.
    ///
    /// ## Returns
    /// [`SeqTagError::MissingUnknownToken`] if `vocab` has no entry
    /// for the configured unknown-token key.
    pub fn new(
        options: DatasetEncoderOptions,
        vocab: &'a IndexMap<T>,
        tags: &'a IndexMap<T>,
    ) -> Result<Self> {
        let unk = vocab.get(options.unk_token()).copied().ok_or_else(|| {
            SeqTagError::MissingUnknownToken {
                token: options.unk_token().to_string(),
            }
        })?;

        Ok(Self {
            options,
            vocab,
            tags,
            unk,
        })
    }

    /// Get the encoder options.
    pub fn options(&self) -> &DatasetEncoderOptions {
        &self.options
    }

    /// Get the index used for out-of-vocabulary tokens.
    pub fn unk_index(&self) -> T {
        self.unk
    }

    /// Look up a single token, falling back to the unknown-token index.
    pub fn lookup_token(
        &self,
        token: &str,
    ) -> T {
        self.vocab.get(token).copied().unwrap_or(self.unk)
    }

    /// Look up a single label.
    pub fn lookup_label(
        &self,
        label: &str,
    ) -> Option<T> {
        self.tags.get(label).copied()
    }

    /// Encode one sentence line.
    ///
    /// The line is split on single spaces; consecutive spaces produce
    /// empty tokens, which encode like any other token.
    pub fn encode_sentence(
        &self,
        line: &str,
    ) -> Vec<T> {
        line.split(FIELD_SEPARATOR)
            .map(|token| self.lookup_token(token))
            .collect()
    }

    /// Encode one label line.
    ///
    /// # Arguments
    /// * `line` - the label line.
    /// * `line_no` - the 1-based line number, reported in errors.
    ///
    /// ## Returns
    /// [`SeqTagError::MissingLabel`] for the first label not in the tag map.
    pub fn encode_labels(
        &self,
        line: &str,
        line_no: usize,
    ) -> Result<Vec<T>> {
        line.split(FIELD_SEPARATOR)
            .map(|label| {
                self.lookup_label(label)
                    .ok_or_else(|| SeqTagError::MissingLabel {
                        label: label.to_string(),
                        line: line_no,
                    })
            })
            .collect()
    }

    /// Encode a sentence file and a label file.
    pub fn encode_paths<P, Q>(
        &self,
        sentences_path: P,
        labels_path: Q,
    ) -> Result<EncodedDataset<T>>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        let sentences = BufReader::new(File::open(sentences_path)?);
        let labels = BufReader::new(File::open(labels_path)?);
        self.encode_readers(sentences, labels)
    }

    /// Encode sentence and label line readers.
    ///
    /// Line boundaries are those of [`split_lines`].
    /// Alignment between the two sources is checked according to
    /// [`DatasetEncoderOptions::strict_alignment`].
    pub fn encode_readers<S, L>(
        &self,
        sentences: S,
        labels: L,
    ) -> Result<EncodedDataset<T>>
    where
        S: BufRead,
        L: BufRead,
    {
        let mut dataset = EncodedDataset::default();

        let text = read_text(sentences)?;
        for line in split_lines(&text) {
            dataset.sentences.push(self.encode_sentence(line));
        }

        let text = read_text(labels)?;
        for (i, line) in split_lines(&text).into_iter().enumerate() {
            dataset.labels.push(self.encode_labels(line, i + 1)?);
        }

        self.check_alignment(&dataset)?;

        log::debug!("encoded {} examples", dataset.count());
        Ok(dataset)
    }

    fn check_alignment(
        &self,
        dataset: &EncodedDataset<T>,
    ) -> Result<()> {
        let strict = self.options.strict_alignment();

        if dataset.sentences.len() != dataset.labels.len() {
            if strict {
                return Err(SeqTagError::LineCountMismatch {
                    sentences: dataset.sentences.len(),
                    labels: dataset.labels.len(),
                });
            }
            log::warn!(
                "sentence/label line count mismatch: {} sentences, {} labels",
                dataset.sentences.len(),
                dataset.labels.len()
            );
        }

        let mut mismatched = dataset
            .iter()
            .enumerate()
            .filter(|(_, (s, l))| s.len() != l.len())
            .map(|(i, (s, l))| (i + 1, s.len(), l.len()));

        if let Some((line, tokens, labels)) = mismatched.next() {
            if strict {
                return Err(SeqTagError::SequenceLengthMismatch {
                    line,
                    tokens,
                    labels,
                });
            }
            log::warn!(
                "{} lines have unequal token/label counts; first on line {line}: {tokens} tokens, {labels} labels",
                1 + mismatched.count()
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn index_map(keys: &[&str]) -> IndexMap<u32> {
        keys.iter()
            .enumerate()
            .map(|(i, k)| (k.to_string(), i as u32))
            .collect()
    }

    fn sample_maps() -> (IndexMap<u32>, IndexMap<u32>) {
        (
            index_map(&["the", "cat", "UNK", "<PAD>"]),
            index_map(&["O", "ANIMAL"]),
        )
    }

    #[test]
    fn test_requires_unk() {
        let vocab = index_map(&["the", "cat"]);
        let tags = index_map(&["O"]);

        let res = DatasetEncoder::new(DatasetEncoderOptions::default(), &vocab, &tags);
        assert!(matches!(
            res,
            Err(SeqTagError::MissingUnknownToken { token }) if token == "UNK"
        ));

        let encoder = DatasetEncoderOptions::default()
            .with_unk_token("cat")
            .build(&vocab, &tags)
            .unwrap();
        assert_eq!(encoder.unk_index(), 1);
    }

    #[test]
    fn test_encode_sentence() {
        let (vocab, tags) = sample_maps();
        let encoder = DatasetEncoder::new(DatasetEncoderOptions::default(), &vocab, &tags).unwrap();

        assert_eq!(encoder.encode_sentence("the cat sat"), vec![0, 1, 2]);
        assert_eq!(encoder.encode_sentence("dog"), vec![2]);
        // An empty line is one empty token.
        assert_eq!(encoder.encode_sentence(""), vec![2]);
        assert_eq!(encoder.encode_sentence("the  cat"), vec![0, 2, 1]);
    }

    #[test]
    fn test_encode_labels() {
        let (vocab, tags) = sample_maps();
        let encoder = DatasetEncoder::new(DatasetEncoderOptions::default(), &vocab, &tags).unwrap();

        assert_eq!(encoder.encode_labels("O ANIMAL O", 1).unwrap(), vec![0, 1, 0]);

        let res = encoder.encode_labels("O MISC", 7);
        assert!(matches!(
            res,
            Err(SeqTagError::MissingLabel { label, line: 7 }) if label == "MISC"
        ));
    }

    #[test]
    fn test_encode_readers() {
        let (vocab, tags) = sample_maps();
        let encoder = DatasetEncoder::new(DatasetEncoderOptions::default(), &vocab, &tags).unwrap();

        let dataset = encoder
            .encode_readers(
                Cursor::new("the cat sat\ncat\n"),
                Cursor::new("O ANIMAL O\nANIMAL\n"),
            )
            .unwrap();

        assert_eq!(dataset.sentences, vec![vec![0, 1, 2], vec![1]]);
        assert_eq!(dataset.labels, vec![vec![0, 1, 0], vec![1]]);
        assert_eq!(dataset.count(), 2);
    }

    #[test]
    fn test_encode_readers_line_boundaries() {
        let (vocab, tags) = sample_maps();
        let encoder = DatasetEncoderOptions::default()
            .with_strict_alignment(true)
            .build(&vocab, &tags)
            .unwrap();

        let dataset = encoder
            .encode_readers(
                Cursor::new("the cat\rcat\u{2028}the\r\n"),
                Cursor::new("O ANIMAL\nANIMAL\u{85}O\n"),
            )
            .unwrap();

        assert_eq!(dataset.sentences, vec![vec![0, 1], vec![1], vec![0]]);
        assert_eq!(dataset.labels, vec![vec![0, 1], vec![1], vec![0]]);
        assert_eq!(dataset.count(), 3);
    }

    #[test]
    fn test_encode_dataset_requires_unk_before_reading() {
        let vocab = index_map(&["the", "cat"]);
        let tags = index_map(&["O"]);

        let res = encode_dataset(&vocab, &tags, "/nonexistent/s.txt", "/nonexistent/l.txt");
        assert!(matches!(res, Err(SeqTagError::MissingUnknownToken { .. })));
    }

    #[test]
    fn test_missing_label_line_number() {
        let (vocab, tags) = sample_maps();
        let encoder = DatasetEncoder::new(DatasetEncoderOptions::default(), &vocab, &tags).unwrap();

        let res = encoder.encode_readers(Cursor::new("the\ncat\n"), Cursor::new("O\nMISC\n"));
        assert!(matches!(
            res,
            Err(SeqTagError::MissingLabel { label, line: 2 }) if label == "MISC"
        ));
    }

    #[test]
    fn test_lenient_alignment() {
        let (vocab, tags) = sample_maps();
        let encoder = DatasetEncoder::new(DatasetEncoderOptions::default(), &vocab, &tags).unwrap();

        let dataset = encoder
            .encode_readers(Cursor::new("the cat\nthe\ncat\n"), Cursor::new("O\nO\n"))
            .unwrap();

        assert_eq!(dataset.count(), 3);
        assert_eq!(dataset.labels.len(), 2);
        assert_eq!(dataset.sentences[0].len(), 2);
        assert_eq!(dataset.labels[0].len(), 1);
    }

    #[test]
    fn test_strict_alignment() {
        let (vocab, tags) = sample_maps();
        let encoder = DatasetEncoderOptions::default()
            .with_strict_alignment(true)
            .build(&vocab, &tags)
            .unwrap();

        let res = encoder.encode_readers(Cursor::new("the\ncat\n"), Cursor::new("O\n"));
        assert!(matches!(
            res,
            Err(SeqTagError::LineCountMismatch {
                sentences: 2,
                labels: 1
            })
        ));

        let res = encoder.encode_readers(Cursor::new("the\nthe cat\n"), Cursor::new("O\nO\n"));
        assert!(matches!(
            res,
            Err(SeqTagError::SequenceLengthMismatch {
                line: 2,
                tokens: 2,
                labels: 1
            })
        ));

        let dataset = encoder
            .encode_readers(Cursor::new("the cat\n"), Cursor::new("O ANIMAL\n"))
            .unwrap();
        assert_eq!(dataset.count(), 1);
    }

    #[test]
    fn test_encode_dataset_paths() {
        let (vocab, tags) = sample_maps();

        tempdir::TempDir::new("dataset_test")
            .and_then(|dir| {
                let sentences_path = dir.path().join("sentences.txt");
                let labels_path = dir.path().join("labels.txt");
                std::fs::write(&sentences_path, "the cat sat\n")?;
                std::fs::write(&labels_path, "O ANIMAL O\n")?;

                let (sentences, labels, count) =
                    encode_dataset(&vocab, &tags, &sentences_path, &labels_path)
                        .expect("failed to encode dataset");
                assert_eq!(sentences, vec![vec![0, 1, 2]]);
                assert_eq!(labels, vec![vec![0, 1, 0]]);
                assert_eq!(count, 1);

                let res = encode_dataset(&vocab, &tags, &sentences_path, dir.path().join("nope"));
                assert!(matches!(res, Err(SeqTagError::Io(_))));

                Ok(())
            })
            .unwrap();
    }
}
