use thiserror::Error;

use crate::words::to_words;

/// Collection-level precondition failures. Per-element conversion is total,
/// so these are the only error kinds anywhere in the library.
#[derive(Debug, PartialEq, Eq, Error)]
pub enum TransformError {
    /// The input sequence reference is absent.
    #[error("input sequence is absent")]
    NullInput,
    /// The input sequence has zero elements.
    #[error("input sequence is empty")]
    EmptyInput,
}

/// Spells out each element of `source`, preserving order and length.
///
/// Fails fast before any per-element work: `None` yields
/// [`TransformError::NullInput`] and an empty slice yields
/// [`TransformError::EmptyInput`]. There is no partial-failure mode.
///
/// ```
/// use numwords::transform;
///
/// let words = transform(Some(&[2.345, -0.0, 0.0, 0.1])).unwrap();
/// assert_eq!(
///     words,
///     ["Two point three four five", "Minus zero", "Zero", "Zero point one"]
/// );
/// ```
pub fn transform(source: Option<&[f64]>) -> Result<Vec<String>, TransformError> {
    let Some(values) = source else {
        return Err(TransformError::NullInput);
    };
    if values.is_empty() {
        return Err(TransformError::EmptyInput);
    }
    Ok(values.iter().copied().map(to_words).collect())
}
