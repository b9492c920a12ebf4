//! Impls - 実装
//!
//! このモジュールには ports の実装を含めます。
//!
//! # 含まれる実装
//! - **SwitchTransformer**: 条件分岐 dispatcher 本体と、その factory
//! - **ConstantTransformer / NullTransformer / IdentityTransformer**: 組み込み transformer
//! - **TruePredicate / FalsePredicate / NotPredicate / EqualPredicate**: 組み込み predicate
//! - **json**: `SwitchSpec` から `serde_json::Value` 用の functor を組み立てる

pub mod constant;
pub mod json;
pub mod predicates;
pub mod switch;
mod slots;

#[cfg(test)]
mod switch_props;

// 主要な型を再エクスポート
pub use self::constant::{ConstantTransformer, IdentityTransformer, NullTransformer, null_transformer};
pub use self::predicates::{EqualPredicate, FalsePredicate, NotPredicate, TruePredicate};
pub use self::switch::{SwitchTransformer, switch_transformer, switch_transformer_from_map};
