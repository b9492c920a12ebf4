//! Domain model (errors, ordered switch map, declarative switch spec).

pub mod errors;
pub mod spec;
pub mod switch_map;

pub use self::errors::{ErrorKind, FunctorError, SpecError};
pub use self::spec::{MAX_SPEC_DEPTH, PredicateSpec, RuleSpec, SwitchSpec, TransformerSpec};
pub use self::switch_map::SwitchMap;
