//! # Index Map IO

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::{
    errors::Result,
    text_lines::{read_text, split_lines},
    types::{IndexType, hash_map_new, try_index},
    vocab::IndexMap,
};

/// Load an [`IndexMap`] from a line-delimited file.
///
/// # Arguments
/// * `path` - the path to the file.
pub fn load_index_map_path<T, P>(path: P) -> Result<IndexMap<T>>
where
    T: IndexType,
    P: AsRef<Path>,
{
    let reader = BufReader::new(File::open(path)?);
    read_index_map(reader)
}

/// Read an [`IndexMap`] from a line reader.
///
/// Each line is one entry; line `i` (0-based) maps to index `i`.
/// Line boundaries are those of [`split_lines`].
/// Empty lines are valid entries. A repeated line overwrites the index of its
/// earlier occurrence, so indices may skip values when duplicates are present.
///
/// # Arguments
/// * `reader` - the line reader.
pub fn read_index_map<T, R>(reader: R) -> Result<IndexMap<T>>
where
    T: IndexType,
    R: BufRead,
{
    let text = read_text(reader)?;
    let mut map: IndexMap<T> = hash_map_new();

    for (i, line) in split_lines(&text).into_iter().enumerate() {
        let index = try_index::<T>(i)?;
        if let Some(prev) = map.insert(line.to_string(), index) {
            log::trace!("duplicate entry on line {i} replaces index {prev}");
        }
    }

    Ok(map)
}

/// Insert `key` into `map` at index `map.len()`.
///
/// The index is the size of the map before the insert. If `key` is
/// already present it is reassigned to that index.
///
/// ## Returns
/// The index assigned to `key`.
pub fn append_entry<T: IndexType>(
    map: &mut IndexMap<T>,
    key: &str,
) -> Result<T> {
    let index = try_index::<T>(map.len())?;
    map.insert(key.to_string(), index);
    Ok(index)
}
