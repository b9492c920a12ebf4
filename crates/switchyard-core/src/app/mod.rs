//! App - 構築 API
//!
//! ports / impls を組み合わせて dispatcher を組み立てる表層です。
//!
//! # 主要コンポーネント
//! - **SwitchBuilder**: `{ rules, default }` を型安全に組み立てる builder

pub mod builder;

pub use self::builder::SwitchBuilder;
