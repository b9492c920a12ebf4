//! Slot validation - 「欠落」を含みうる引数列の検証とコピー
//!
//! `None` の列は「列そのものが欠落」、列中の `None` は「要素の欠落」を表します。
//! 検証を通過した列だけを、新しく確保した `Vec` に浅くコピーします
//! （`Arc` の clone なので中身は共有、列は呼び出し元と独立）。

use crate::domain::FunctorError;

/// Check that the sequence and every element in it are present.
///
/// `what` names the sequence in error messages ("predicate", "transformer").
pub(crate) fn validate<'a, T>(
    what: &'static str,
    slots: Option<&'a [Option<T>]>,
) -> Result<&'a [Option<T>], FunctorError> {
    let slots = slots.ok_or(FunctorError::MissingSequence(what))?;
    if let Some(index) = slots.iter().position(Option::is_none) {
        return Err(FunctorError::MissingElement { what, index });
    }
    Ok(slots)
}

/// Shallow copy of validated slots into an owned `Vec`.
pub(crate) fn copy<T: Clone>(slots: &[Option<T>]) -> Vec<T> {
    slots.iter().flatten().cloned().collect()
}
