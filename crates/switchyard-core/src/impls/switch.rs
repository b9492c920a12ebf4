//! SwitchTransformer - 最初に一致した predicate の transformer を呼ぶ
//!
//! `switch` 文のように、predicate を先頭から順に評価し、最初に入力を受け入れた
//! predicate と同じ位置の transformer で変換します。どれも一致しなければ
//! default transformer を使います。
//!
//! # 構築経路
//! - [`switch_transformer`]: 検証あり。列を防御的にコピーする
//! - [`switch_transformer_from_map`]: 順序付き [`SwitchMap`] から構築（`None` キー = default）
//! - [`SwitchTransformer::new`]: 検証なし・コピーなし（呼び出し側で検証済みの場合）
//!
//! 構築後は不変なので、predicate / transformer 自身がスレッド安全であれば
//! 同期なしで複数スレッドから `transform` を呼べます。

use std::sync::Arc;

use tracing::{debug, trace};

use super::constant::null_transformer;
use super::slots;
use crate::domain::{FunctorError, SwitchMap};
use crate::ports::{PredicateRef, Transformer, TransformerRef};

/// Transformer that calls the transformer whose predicate accepts the input.
pub struct SwitchTransformer<I, O> {
    predicates: Vec<PredicateRef<I>>,
    transformers: Vec<TransformerRef<I, O>>,
    default: TransformerRef<I, O>,
}

impl<I, O: Default> SwitchTransformer<I, O> {
    /// Constructor that performs no validation and no copying.
    ///
    /// An absent `default` means "produce `O::default()`" and is replaced by
    /// the null transformer. Use [`switch_transformer`] for the validating
    /// path.
    ///
    /// # Panics
    /// `transform` panics if a predicate matches at an index with no
    /// transformer, i.e. when `transformers` is shorter than `predicates`.
    pub fn new(
        predicates: Vec<PredicateRef<I>>,
        transformers: Vec<TransformerRef<I, O>>,
        default: Option<TransformerRef<I, O>>,
    ) -> Self {
        Self {
            predicates,
            transformers,
            default: default.unwrap_or_else(null_transformer),
        }
    }
}

impl<I, O> SwitchTransformer<I, O> {
    /// Like [`Self::new`] with an explicit default; no `O: Default` needed.
    pub fn with_default(
        predicates: Vec<PredicateRef<I>>,
        transformers: Vec<TransformerRef<I, O>>,
        default: TransformerRef<I, O>,
    ) -> Self {
        Self {
            predicates,
            transformers,
            default,
        }
    }

    /// The predicates, in evaluation order.
    pub fn predicates(&self) -> &[PredicateRef<I>] {
        &self.predicates
    }

    /// The transformers, positionally paired with [`Self::predicates`].
    pub fn transformers(&self) -> &[TransformerRef<I, O>] {
        &self.transformers
    }

    /// The transformer used when no predicate matches.
    pub fn default_transformer(&self) -> &TransformerRef<I, O> {
        &self.default
    }
}

impl<I, O> Transformer<I, O> for SwitchTransformer<I, O> {
    fn transform(&self, input: &I) -> O {
        for (index, predicate) in self.predicates.iter().enumerate() {
            if predicate.evaluate(input) {
                trace!(rule = index, "switch rule matched");
                return self.transformers[index].transform(input);
            }
        }
        trace!("no switch rule matched, using default");
        self.default.transform(input)
    }
}

impl<I, O> Clone for SwitchTransformer<I, O> {
    fn clone(&self) -> Self {
        Self {
            predicates: self.predicates.clone(),
            transformers: self.transformers.clone(),
            default: self.default.clone(),
        }
    }
}

impl<I, O> std::fmt::Debug for SwitchTransformer<I, O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SwitchTransformer")
            .field("predicates", &self.predicates.len())
            .field("transformers", &self.transformers.len())
            .finish_non_exhaustive()
    }
}

/// Factory that validates and copies the parameter sequences.
///
/// # Errors
/// [`FunctorError`] if either sequence is absent, contains an absent
/// element, or the two sequences differ in length.
///
/// # Degenerate table
/// With two empty sequences no switch is built: the result is `default`
/// itself, or the null transformer when `default` is absent.
pub fn switch_transformer<I, O>(
    predicates: Option<&[Option<PredicateRef<I>>]>,
    transformers: Option<&[Option<TransformerRef<I, O>>]>,
    default: Option<TransformerRef<I, O>>,
) -> Result<TransformerRef<I, O>, FunctorError>
where
    I: 'static,
    O: Default + 'static,
{
    let predicates = slots::validate("predicate", predicates)?;
    let transformers = slots::validate("transformer", transformers)?;
    if predicates.len() != transformers.len() {
        return Err(FunctorError::LengthMismatch {
            predicates: predicates.len(),
            transformers: transformers.len(),
        });
    }
    if predicates.is_empty() {
        debug!(has_default = default.is_some(), "empty switch table");
        return Ok(default.unwrap_or_else(null_transformer));
    }

    debug!(rules = predicates.len(), "building switch transformer");
    let switch: TransformerRef<I, O> = Arc::new(SwitchTransformer::new(
        slots::copy(predicates),
        slots::copy(transformers),
        default,
    ));
    Ok(switch)
}

/// Factory that builds a switch from an ordered [`SwitchMap`].
///
/// Iteration order of the map is the evaluation order. The entry under the
/// `None` key, if any, is taken out and used as the default transformer.
/// Absent transformers among the remaining entries are rejected the same way
/// [`switch_transformer`] rejects them.
///
/// # Errors
/// [`FunctorError::MissingMap`] if `map` is absent, or
/// [`FunctorError::MissingElement`] for an entry without a transformer.
pub fn switch_transformer_from_map<I, O>(
    map: Option<SwitchMap<I, O>>,
) -> Result<TransformerRef<I, O>, FunctorError>
where
    I: 'static,
    O: Default + 'static,
{
    let mut map = map.ok_or(FunctorError::MissingMap)?;
    if map.is_empty() {
        debug!("empty switch map");
        return Ok(null_transformer());
    }

    let default = map.remove(None).flatten();
    if map.is_empty() {
        debug!(has_default = default.is_some(), "switch map holds only a default");
        return Ok(default.unwrap_or_else(null_transformer));
    }

    let (predicates, transformers): (Vec<_>, Vec<_>) = map.into_iter().unzip();
    let predicates = slots::validate("predicate", Some(predicates.as_slice()))?;
    let transformers = slots::validate("transformer", Some(transformers.as_slice()))?;

    debug!(rules = predicates.len(), "building switch transformer from map");
    let switch: TransformerRef<I, O> = Arc::new(SwitchTransformer::new(
        slots::copy(predicates),
        slots::copy(transformers),
        default,
    ));
    Ok(switch)
}
