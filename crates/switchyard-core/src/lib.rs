//! switchyard-core
//!
//! Functor building blocks for conditional dispatch: a value is routed to the
//! transformer paired with the first predicate that accepts it, like a
//! `switch` statement over arbitrary tests.
//!
//! # モジュール構成
//! - **ports**: capability traits（`Predicate`, `Transformer`）と共有参照型
//! - **domain**: エラー型、順序付き `SwitchMap`、宣言的な `SwitchSpec`
//! - **impls**: 実装（`SwitchTransformer`, 組み込み functor, JSON functor）
//! - **app**: 型付きの構築 API（`SwitchBuilder`）
//!
//! # 使用例
//! ```
//! use switchyard_core::ports::{predicate, transformer, Transformer};
//! use switchyard_core::impls::{switch_transformer, IdentityTransformer};
//! use std::sync::Arc;
//!
//! let predicates = [
//!     Some(predicate(|x: &i64| *x < 0)),
//!     Some(predicate(|x: &i64| *x == 0)),
//! ];
//! let transformers = [
//!     Some(transformer(|x: &i64| -x * 2)),
//!     Some(transformer(|_: &i64| 1)),
//! ];
//! let switch = switch_transformer(
//!     Some(&predicates[..]),
//!     Some(&transformers[..]),
//!     Some(Arc::new(IdentityTransformer)),
//! )
//! .unwrap();
//!
//! assert_eq!(switch.transform(&-5), 10);
//! assert_eq!(switch.transform(&0), 1);
//! assert_eq!(switch.transform(&7), 7);
//! ```

pub mod app;
pub mod domain;
pub mod impls;
pub mod ports;

pub use crate::app::SwitchBuilder;
pub use crate::domain::{ErrorKind, FunctorError, SpecError, SwitchMap, SwitchSpec};
pub use crate::impls::{SwitchTransformer, switch_transformer, switch_transformer_from_map};
pub use crate::ports::{Predicate, PredicateRef, Transformer, TransformerRef};
