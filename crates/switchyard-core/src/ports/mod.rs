//! Ports - capability の抽象化レイヤー
//!
//! Dispatcher が依存するのはこの 2 つの trait だけです。
//! 具体的な実装（closure, 組み込み functor, JSON functor）は差し替え可能です。
//!
//! # 設計原則
//! - 1 trait = 1 メソッド（closure と同じ形）
//! - `Send + Sync` を要求し、構築済みの dispatcher をスレッド間で共有できるようにする
//! - 所有ではなく共有参照（`Arc<dyn ...>`）で保持する

pub mod predicate;
pub mod transformer;

// 主要な trait を再エクスポート
pub use self::predicate::{Predicate, PredicateRef, predicate};
pub use self::transformer::{Transformer, TransformerRef, transformer};
