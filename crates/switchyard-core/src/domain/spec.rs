//! Declarative switch tables over JSON values.
//!
//! A `SwitchSpec` is the configuration form of a switch transformer: an
//! ordered list of `when`/`then` rules plus an optional default. It is a
//! document that describes a dispatcher, not a serialized dispatcher.
//!
//! ```json
//! {
//!   "rules": [
//!     { "when": { "op": "less_than", "value": 0 }, "then": { "op": "scale", "factor": -2 } },
//!     { "when": { "op": "equals", "value": 0 },    "then": { "op": "constant", "value": 1 } }
//!   ],
//!   "default": { "op": "identity" }
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use super::errors::SpecError;
use crate::impls::json::{compile_predicate, compile_transformer};
use crate::impls::switch_transformer;
use crate::ports::{PredicateRef, TransformerRef};

/// Maximum nesting of `not` / `all` / `any` / `chain` accepted by [`SwitchSpec::validate`].
pub const MAX_SPEC_DEPTH: usize = 32;

/// A whole switch table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwitchSpec {
    /// Rules in evaluation order.
    #[serde(default)]
    pub rules: Vec<RuleSpec>,

    /// Transformer used when no rule matches; absent means `null`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<TransformerSpec>,
}

/// One `when` → `then` pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleSpec {
    pub when: PredicateSpec,
    pub then: TransformerSpec,
}

/// Tests over a JSON value.
///
/// Numeric comparisons accept any JSON number and reject everything else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum PredicateSpec {
    Always,
    Never,
    IsNull,
    IsNumber,
    IsString,
    /// Numbers compare by value (`0` equals `0.0`), everything else structurally.
    Equals {
        value: Value,
    },
    LessThan {
        value: f64,
    },
    GreaterThan {
        value: f64,
    },
    Not {
        predicate: Box<PredicateSpec>,
    },
    /// Every inner predicate accepts (`true` when empty).
    All {
        predicates: Vec<PredicateSpec>,
    },
    /// At least one inner predicate accepts (`false` when empty).
    Any {
        predicates: Vec<PredicateSpec>,
    },
}

/// Transformations of a JSON value.
///
/// Arithmetic keeps integers integral while the result is exact and in
/// range, otherwise falls back to floating point. Non-numeric input yields
/// `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum TransformerSpec {
    Identity,
    Null,
    Constant {
        value: Value,
    },
    Negate,
    Scale {
        factor: f64,
    },
    Offset {
        by: f64,
    },
    /// Strings pass through; any other value becomes its JSON text.
    #[serde(rename = "to_string")]
    Stringify,
    /// Apply the steps left to right (identity when empty).
    Chain {
        steps: Vec<TransformerSpec>,
    },
}

impl SwitchSpec {
    pub fn from_json_str(json: &str) -> Result<Self, SpecError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SpecError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// The sample table: negatives are negated and doubled, zero becomes
    /// one, everything else passes through.
    pub fn example() -> Self {
        Self {
            rules: vec![
                RuleSpec {
                    when: PredicateSpec::LessThan { value: 0.0 },
                    then: TransformerSpec::Scale { factor: -2.0 },
                },
                RuleSpec {
                    when: PredicateSpec::Equals {
                        value: Value::from(0),
                    },
                    then: TransformerSpec::Constant {
                        value: Value::from(1),
                    },
                },
            ],
            default: Some(TransformerSpec::Identity),
        }
    }

    /// Reject tables nested deeper than [`MAX_SPEC_DEPTH`].
    pub fn validate(&self) -> Result<(), SpecError> {
        for (index, rule) in self.rules.iter().enumerate() {
            if predicate_depth(&rule.when) > MAX_SPEC_DEPTH {
                return Err(SpecError::Invalid(format!(
                    "rule {index}: predicate nesting exceeds {MAX_SPEC_DEPTH}"
                )));
            }
            if transformer_depth(&rule.then) > MAX_SPEC_DEPTH {
                return Err(SpecError::Invalid(format!(
                    "rule {index}: transformer nesting exceeds {MAX_SPEC_DEPTH}"
                )));
            }
        }
        if let Some(default) = &self.default {
            if transformer_depth(default) > MAX_SPEC_DEPTH {
                return Err(SpecError::Invalid(format!(
                    "default: transformer nesting exceeds {MAX_SPEC_DEPTH}"
                )));
            }
        }
        Ok(())
    }

    /// Validate and build the dispatcher.
    ///
    /// Goes through the validating factory, so an empty rule list yields the
    /// default itself (or the null transformer).
    pub fn compile(&self) -> Result<TransformerRef<Value, Value>, SpecError> {
        self.validate()?;
        let predicates: Vec<Option<PredicateRef<Value>>> = self
            .rules
            .iter()
            .map(|rule| Some(compile_predicate(&rule.when)))
            .collect();
        let transformers: Vec<Option<TransformerRef<Value, Value>>> = self
            .rules
            .iter()
            .map(|rule| Some(compile_transformer(&rule.then)))
            .collect();
        let default = self.default.as_ref().map(compile_transformer);

        debug!(
            rules = self.rules.len(),
            has_default = default.is_some(),
            "compiling switch spec"
        );
        Ok(switch_transformer(
            Some(predicates.as_slice()),
            Some(transformers.as_slice()),
            default,
        )?)
    }
}

fn predicate_depth(spec: &PredicateSpec) -> usize {
    match spec {
        PredicateSpec::Not { predicate } => 1 + predicate_depth(predicate),
        PredicateSpec::All { predicates } | PredicateSpec::Any { predicates } => {
            1 + predicates.iter().map(predicate_depth).max().unwrap_or(0)
        }
        _ => 1,
    }
}

fn transformer_depth(spec: &TransformerSpec) -> usize {
    match spec {
        TransformerSpec::Chain { steps } => {
            1 + steps.iter().map(transformer_depth).max().unwrap_or(0)
        }
        _ => 1,
    }
}
