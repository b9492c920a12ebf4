//! Errors - エラー型と分類
//!
//! 構築時の引数エラーは `FunctorError`、設定ファイル（`SwitchSpec`）由来の
//! エラーは `SpecError` で表します。
//! Predicate / Transformer 自身の失敗はここでは扱いません（そのまま伝播させる）。

use thiserror::Error;

/// ErrorKind はエラーの運用分類
///
/// - InvalidArgument: 構築時の引数不正（欠落、要素の欠落、長さの不一致）
/// - InvalidConfig: 設定（`SwitchSpec`）の読み込み・検証の失敗
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidArgument,
    InvalidConfig,
}

/// FunctorError は dispatcher 構築時のエラー
///
/// どの variant も構築呼び出しに対して fatal で、内部でリトライはしません。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FunctorError {
    #[error("the {0} sequence must not be absent")]
    MissingSequence(&'static str),

    #[error("the {what} sequence must not contain an absent element (index {index})")]
    MissingElement { what: &'static str, index: usize },

    #[error(
        "the predicate and transformer sequences must be the same size ({predicates} != {transformers})"
    )]
    LengthMismatch {
        predicates: usize,
        transformers: usize,
    },

    #[error("the predicate and transformer map must not be absent")]
    MissingMap,
}

impl FunctorError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidArgument
    }
}

/// SpecError は `SwitchSpec` の読み込み・検証・構築のエラー
#[derive(Debug, Error)]
pub enum SpecError {
    #[error("failed to read switch spec: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to decode switch spec: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid switch spec: {0}")]
    Invalid(String),

    #[error(transparent)]
    Build(#[from] FunctorError),
}

impl SpecError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SpecError::Build(err) => err.kind(),
            _ => ErrorKind::InvalidConfig,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_variant_is_an_invalid_argument() {
        let errors = [
            FunctorError::MissingSequence("predicate"),
            FunctorError::MissingElement {
                what: "transformer",
                index: 2,
            },
            FunctorError::LengthMismatch {
                predicates: 2,
                transformers: 1,
            },
            FunctorError::MissingMap,
        ];
        for err in errors {
            assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        }
    }

    #[test]
    fn messages_name_the_offending_part() {
        let err = FunctorError::MissingElement {
            what: "predicate",
            index: 1,
        };
        assert_eq!(
            err.to_string(),
            "the predicate sequence must not contain an absent element (index 1)"
        );

        let err = FunctorError::LengthMismatch {
            predicates: 2,
            transformers: 1,
        };
        assert!(err.to_string().contains("(2 != 1)"));
    }

    #[test]
    fn spec_error_kind_follows_the_wrapped_error() {
        let build: SpecError = FunctorError::MissingMap.into();
        assert_eq!(build.kind(), ErrorKind::InvalidArgument);

        let invalid = SpecError::Invalid("too deep".to_string());
        assert_eq!(invalid.kind(), ErrorKind::InvalidConfig);
        assert_eq!(invalid.to_string(), "invalid switch spec: too deep");
    }
}
