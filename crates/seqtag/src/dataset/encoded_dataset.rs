use crate::types::IndexType;

/// Encoded sentence and label sequences.
///
/// `sentences[i]` and `labels[i]` come from line `i` of their sources.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EncodedDataset<T: IndexType> {
    /// One index sequence per sentence line.
    pub sentences: Vec<Vec<T>>,

    /// One index sequence per label line.
    pub labels: Vec<Vec<T>>,
}

impl<T: IndexType> EncodedDataset<T> {
    /// The number of examples; the number of sentence lines.
    pub fn count(&self) -> usize {
        self.sentences.len()
    }

    /// Check if the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Iterate over `(sentence, labels)` pairs.
    ///
    /// Stops at the shorter of the two sequences.
    pub fn iter(&self) -> impl Iterator<Item = (&[T], &[T])> {
        self.sentences
            .iter()
            .zip(self.labels.iter())
            .map(|(s, l)| (s.as_slice(), l.as_slice()))
    }

    /// Split into `(sentences, labels, count)`.
    pub fn into_parts(self) -> (Vec<Vec<T>>, Vec<Vec<T>>, usize) {
        let count = self.count();
        (self.sentences, self.labels, count)
    }
}
