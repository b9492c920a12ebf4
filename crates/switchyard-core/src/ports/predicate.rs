//! Predicate port - 入力値に対する真偽判定

use std::sync::Arc;

/// Predicate は入力値を受け入れるかどうかを判定する
///
/// # 使用例
/// ```
/// use switchyard_core::ports::Predicate;
///
/// struct IsEven;
///
/// impl Predicate<i64> for IsEven {
///     fn evaluate(&self, input: &i64) -> bool {
///         input % 2 == 0
///     }
/// }
///
/// assert!(IsEven.evaluate(&4));
/// ```
///
/// `Fn(&I) -> bool` を満たす closure はそのまま Predicate として使えます。
/// 副作用のない実装を想定していますが、強制はしません。
pub trait Predicate<I>: Send + Sync {
    fn evaluate(&self, input: &I) -> bool;
}

impl<I, F> Predicate<I> for F
where
    F: Fn(&I) -> bool + Send + Sync,
{
    fn evaluate(&self, input: &I) -> bool {
        self(input)
    }
}

/// Shared, type-erased predicate as held by dispatchers.
pub type PredicateRef<I> = Arc<dyn Predicate<I>>;

/// Wrap a closure into a [`PredicateRef`].
pub fn predicate<I, F>(f: F) -> PredicateRef<I>
where
    F: Fn(&I) -> bool + Send + Sync + 'static,
{
    Arc::new(f)
}
