//! Positional row addresses.
//!
//! A [`TreePath`] is a sequence of row indices, one per level, written as
//! text like `"0"`, `"3"`, or `"0:2:1"`. Paths are plain values: they are
//! not tied to any store and stay meaningful only as long as the positions
//! they name do.
//!
//! # Text Format
//!
//! Components are base-10 non-negative integers separated by `:` or `.`.
//! [`Display`](std::fmt::Display) always writes the `:` form.
//!
//! # Encoded Form
//!
//! Toolkit boundaries that pass a single-level path as one integer use
//! `index + 1`, reserving [`TreePath::NONE`] (`0`) for "no path".
//! [`TreePath::validation_check`] rejects that sentinel.

use std::fmt;
use std::str::FromStr;

use crate::error::{ModelError, Result};

/// A positional address of a row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TreePath {
    indices: Vec<usize>,
}

impl TreePath {
    /// Encoded value meaning "no path".
    pub const NONE: i64 = 0;

    /// Returns the path of the first top-level row, `"0"`.
    pub fn new_first() -> Self {
        Self { indices: vec![0] }
    }

    /// Returns the single-level path of the row at `index`.
    pub(crate) fn from_index(index: usize) -> Self {
        Self {
            indices: vec![index],
        }
    }

    /// Parses the text form, e.g. `"1"` or `"0:2:1"`.
    pub fn parse(text: &str) -> Result<Self> {
        let invalid = || ModelError::InvalidPath(text.to_string());

        if text.is_empty() {
            return Err(invalid());
        }

        let indices = text
            .split([':', '.'])
            .map(|component| {
                if component.is_empty() || !component.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(invalid());
                }
                component.parse::<usize>().map_err(|_| invalid())
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { indices })
    }

    /// Builds a path from explicit indices. Fails on an empty sequence.
    pub fn from_indices(indices: &[usize]) -> Result<Self> {
        if indices.is_empty() {
            return Err(ModelError::InvalidPath(String::new()));
        }
        Ok(Self {
            indices: indices.to_vec(),
        })
    }

    /// Checks an encoded single-level path without decoding it.
    ///
    /// Fails with [`ModelError::NoPath`] for [`TreePath::NONE`] and with
    /// [`ModelError::InvalidPath`] for negative values.
    pub fn validation_check(encoded: i64) -> Result<()> {
        match encoded {
            Self::NONE => Err(ModelError::NoPath),
            n if n < 0 => Err(ModelError::InvalidPath(n.to_string())),
            _ => Ok(()),
        }
    }

    /// Decodes a single-level path from its encoded form.
    pub fn from_encoded(encoded: i64) -> Result<Self> {
        Self::validation_check(encoded)?;
        let index = usize::try_from(encoded - 1)
            .map_err(|_| ModelError::InvalidPath(encoded.to_string()))?;
        Ok(Self {
            indices: vec![index],
        })
    }

    /// Returns the encoded form of a single-level path, or `None` for deeper paths.
    pub fn encoded(&self) -> Option<i64> {
        match self.indices.as_slice() {
            [index] => i64::try_from(*index).ok()?.checked_add(1),
            _ => None,
        }
    }

    /// Returns the index sequence.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Returns the number of levels. Top-level rows have depth 1.
    pub fn depth(&self) -> usize {
        self.indices.len()
    }

    /// Returns the index of the row among its siblings.
    pub fn index(&self) -> usize {
        self.indices.last().copied().unwrap_or_default()
    }

    /// Returns the path of the following sibling, or `None` if the index
    /// would overflow.
    pub fn next(&self) -> Option<Self> {
        let mut indices = self.indices.clone();
        let last = indices.last_mut()?;
        *last = last.checked_add(1)?;
        Some(Self { indices })
    }

    /// Returns the path of the preceding sibling, or `None` for the first row.
    pub fn prev(&self) -> Option<Self> {
        let mut indices = self.indices.clone();
        let last = indices.last_mut()?;
        *last = last.checked_sub(1)?;
        Some(Self { indices })
    }
}

impl FromStr for TreePath {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for TreePath {
    type Error = ModelError;

    fn try_from(value: &str) -> Result<Self> {
        Self::parse(value)
    }
}

impl fmt::Display for TreePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, index) in self.indices.iter().enumerate() {
            if i > 0 {
                f.write_str(":")?;
            }
            write!(f, "{index}")?;
        }
        Ok(())
    }
}
