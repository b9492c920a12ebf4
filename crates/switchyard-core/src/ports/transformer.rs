//! Transformer port - 入力値から出力値への変換

use std::sync::Arc;

/// Transformer は入力値を出力値に変換する
///
/// # 失敗の扱い
/// - 失敗を値で表したい場合は `O = Result<T, E>` にする（dispatcher はそのまま返す）
/// - panic は dispatcher を素通りして呼び出し元へ伝播する
///
/// `Fn(&I) -> O` を満たす closure はそのまま Transformer として使えます。
pub trait Transformer<I, O>: Send + Sync {
    fn transform(&self, input: &I) -> O;
}

impl<I, O, F> Transformer<I, O> for F
where
    F: Fn(&I) -> O + Send + Sync,
{
    fn transform(&self, input: &I) -> O {
        self(input)
    }
}

/// Shared, type-erased transformer as held by dispatchers.
pub type TransformerRef<I, O> = Arc<dyn Transformer<I, O>>;

/// Wrap a closure into a [`TransformerRef`].
pub fn transformer<I, O, F>(f: F) -> TransformerRef<I, O>
where
    F: Fn(&I) -> O + Send + Sync + 'static,
{
    Arc::new(f)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closure_is_a_transformer() {
        let double = transformer(|x: &i64| x * 2);
        assert_eq!(double.transform(&21), 42);
    }

    #[test]
    fn fallible_output_is_returned_as_is() {
        let parse = transformer(|s: &String| s.parse::<i64>());
        assert_eq!(parse.transform(&"12".to_string()), Ok(12));
        assert!(parse.transform(&"twelve".to_string()).is_err());
    }
}
