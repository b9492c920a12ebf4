//! SwitchBuilder - ルール表の組み立て
//!
//! # 設計
//! - `when(p, t)` でルールを末尾に追加（追加順 = 評価順）
//! - `otherwise(t)` で default を設定（未設定なら null transformer）
//! - `build()` は検証付き factory を通す（Fail-fast、退化ケースも同じ挙動）
//!
//! 列の欠落や長さの不一致は型の上で起こりえないので、null キーの
//! map よりもこちらを使うのが基本です。

use std::sync::Arc;

use crate::domain::FunctorError;
use crate::impls::{SwitchTransformer, switch_transformer};
use crate::ports::{PredicateRef, TransformerRef};

/// Builds a switch from `when`/`otherwise` calls.
///
/// # 使用例
/// ```
/// use switchyard_core::SwitchBuilder;
/// use switchyard_core::ports::{predicate, transformer, Transformer};
///
/// let sign = SwitchBuilder::new()
///     .when(predicate(|x: &i64| *x < 0), transformer(|_: &i64| "negative"))
///     .when(predicate(|x: &i64| *x == 0), transformer(|_: &i64| "zero"))
///     .otherwise(transformer(|_: &i64| "positive"))
///     .build()
///     .unwrap();
///
/// assert_eq!(sign.transform(&-3), "negative");
/// assert_eq!(sign.transform(&8), "positive");
/// ```
pub struct SwitchBuilder<I, O> {
    rules: Vec<(PredicateRef<I>, TransformerRef<I, O>)>,
    default: Option<TransformerRef<I, O>>,
}

impl<I, O> SwitchBuilder<I, O> {
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            default: None,
        }
    }

    /// Append a rule; earlier rules take priority.
    pub fn when(mut self, predicate: PredicateRef<I>, transformer: TransformerRef<I, O>) -> Self {
        self.rules.push((predicate, transformer));
        self
    }

    /// Set the transformer used when no rule matches. The last call wins.
    pub fn otherwise(mut self, transformer: TransformerRef<I, O>) -> Self {
        self.default = Some(transformer);
        self
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<I: 'static, O: Default + 'static> SwitchBuilder<I, O> {
    /// Build through [`switch_transformer`].
    ///
    /// With no rules the result is the default itself (or the null
    /// transformer).
    pub fn build(self) -> Result<TransformerRef<I, O>, FunctorError> {
        let (predicates, transformers): (Vec<_>, Vec<_>) = self
            .rules
            .into_iter()
            .map(|(p, t)| (Some(p), Some(t)))
            .unzip();
        switch_transformer(
            Some(predicates.as_slice()),
            Some(transformers.as_slice()),
            self.default,
        )
    }

    /// Build a concrete [`SwitchTransformer`], even for an empty rule list,
    /// so its parts stay inspectable.
    pub fn build_switch(self) -> SwitchTransformer<I, O> {
        let (predicates, transformers) = self.rules.into_iter().unzip();
        SwitchTransformer::new(predicates, transformers, self.default)
    }
}

impl<I, O> Default for SwitchBuilder<I, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I, O> Clone for SwitchBuilder<I, O> {
    fn clone(&self) -> Self {
        Self {
            rules: self.rules.clone(),
            default: self.default.as_ref().map(Arc::clone),
        }
    }
}
