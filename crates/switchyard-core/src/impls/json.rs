//! JSON functors - `SwitchSpec` の各要素を Predicate / Transformer に変換
//!
//! 入力・出力ともに `serde_json::Value`。組み込み functor で表せるものは
//! 組み込みを使い、それ以外は closure で組み立てます。

use std::sync::Arc;

use serde_json::{Number, Value};

use super::constant::{ConstantTransformer, IdentityTransformer, NullTransformer};
use super::predicates::{EqualPredicate, FalsePredicate, NotPredicate, TruePredicate};
use crate::domain::{PredicateSpec, TransformerSpec};
use crate::ports::{PredicateRef, TransformerRef, predicate, transformer};

pub fn compile_predicate(spec: &PredicateSpec) -> PredicateRef<Value> {
    match spec {
        PredicateSpec::Always => Arc::new(TruePredicate),
        PredicateSpec::Never => Arc::new(FalsePredicate),
        PredicateSpec::IsNull => predicate(Value::is_null),
        PredicateSpec::IsNumber => predicate(Value::is_number),
        PredicateSpec::IsString => predicate(Value::is_string),
        PredicateSpec::Equals {
            value: Value::Number(expected),
        } => {
            let expected = expected.clone();
            predicate(move |input: &Value| match input {
                Value::Number(n) => same_number(n, &expected),
                _ => false,
            })
        }
        PredicateSpec::Equals { value } => Arc::new(EqualPredicate::new(value.clone())),
        PredicateSpec::LessThan { value } => {
            let bound = *value;
            predicate(move |input: &Value| input.as_f64().is_some_and(|x| x < bound))
        }
        PredicateSpec::GreaterThan { value } => {
            let bound = *value;
            predicate(move |input: &Value| input.as_f64().is_some_and(|x| x > bound))
        }
        PredicateSpec::Not { predicate } => Arc::new(NotPredicate::new(compile_predicate(predicate))),
        PredicateSpec::All { predicates } => {
            let inner: Vec<_> = predicates.iter().map(compile_predicate).collect();
            predicate(move |input: &Value| inner.iter().all(|p| p.evaluate(input)))
        }
        PredicateSpec::Any { predicates } => {
            let inner: Vec<_> = predicates.iter().map(compile_predicate).collect();
            predicate(move |input: &Value| inner.iter().any(|p| p.evaluate(input)))
        }
    }
}

pub fn compile_transformer(spec: &TransformerSpec) -> TransformerRef<Value, Value> {
    match spec {
        TransformerSpec::Identity => Arc::new(IdentityTransformer),
        TransformerSpec::Null => Arc::new(NullTransformer),
        TransformerSpec::Constant { value } => Arc::new(ConstantTransformer::new(value.clone())),
        TransformerSpec::Negate => {
            transformer(|input: &Value| arithmetic(input, i64::checked_neg, |x| -x))
        }
        TransformerSpec::Scale { factor } => {
            let factor = *factor;
            let int_factor = exact_i64(factor);
            transformer(move |input: &Value| {
                arithmetic(input, |n| int_factor.and_then(|f| n.checked_mul(f)), |x| x * factor)
            })
        }
        TransformerSpec::Offset { by } => {
            let by = *by;
            let int_by = exact_i64(by);
            transformer(move |input: &Value| {
                arithmetic(input, |n| int_by.and_then(|b| n.checked_add(b)), |x| x + by)
            })
        }
        TransformerSpec::Stringify => transformer(|input: &Value| match input {
            Value::String(_) => input.clone(),
            other => Value::String(other.to_string()),
        }),
        TransformerSpec::Chain { steps } => {
            let steps: Vec<_> = steps.iter().map(compile_transformer).collect();
            transformer(move |input: &Value| {
                steps
                    .iter()
                    .fold(input.clone(), |value, step| step.transform(&value))
            })
        }
    }
}

/// Integer arithmetic first, `f64` when the integer path has no exact answer.
fn arithmetic(
    input: &Value,
    int_op: impl Fn(i64) -> Option<i64>,
    float_op: impl Fn(f64) -> f64,
) -> Value {
    if let Some(result) = input.as_i64().and_then(int_op) {
        return Value::from(result);
    }
    input
        .as_f64()
        .and_then(|x| Number::from_f64(float_op(x)))
        .map(Value::Number)
        .unwrap_or(Value::Null)
}

/// Integers compare exactly; `f64` only when either side is a float.
fn same_number(a: &Number, b: &Number) -> bool {
    if a.is_f64() || b.is_f64() {
        a.as_f64() == b.as_f64()
    } else {
        a.as_i64() == b.as_i64() && a.as_u64() == b.as_u64()
    }
}

fn exact_i64(x: f64) -> Option<i64> {
    // i64::MAX as f64 rounds up to 2^63, which is out of range
    let in_range = x >= i64::MIN as f64 && x < i64::MAX as f64;
    (x.fract() == 0.0 && in_range).then_some(x as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case::always(PredicateSpec::Always, json!("x"), true)]
    #[case::never(PredicateSpec::Never, json!("x"), false)]
    #[case::is_null(PredicateSpec::IsNull, Value::Null, true)]
    #[case::is_number(PredicateSpec::IsNumber, json!(1.5), true)]
    #[case::is_string(PredicateSpec::IsString, json!(1), false)]
    #[case::equals_int_float(PredicateSpec::Equals { value: json!(0) }, json!(0.0), true)]
    #[case::equals_large_int(
        PredicateSpec::Equals { value: json!(9007199254740993_i64) },
        json!(9007199254740992_i64),
        false
    )]
    #[case::equals_large_int_exact(
        PredicateSpec::Equals { value: json!(9007199254740993_i64) },
        json!(9007199254740993_i64),
        true
    )]
    #[case::equals_u64_max(PredicateSpec::Equals { value: json!(u64::MAX) }, json!(u64::MAX), true)]
    #[case::equals_sign_differs(PredicateSpec::Equals { value: json!(-1) }, json!(u64::MAX), false)]
    #[case::equals_number_vs_string(PredicateSpec::Equals { value: json!(1) }, json!("1"), false)]
    #[case::equals_string(PredicateSpec::Equals { value: json!("a") }, json!("a"), true)]
    #[case::equals_object(PredicateSpec::Equals { value: json!({"k": 1}) }, json!({"k": 2}), false)]
    #[case::less_than(PredicateSpec::LessThan { value: 0.0 }, json!(-1), true)]
    #[case::less_than_non_number(PredicateSpec::LessThan { value: 0.0 }, json!("-1"), false)]
    #[case::greater_than(PredicateSpec::GreaterThan { value: 10.0 }, json!(10), false)]
    #[case::not(PredicateSpec::Not { predicate: Box::new(PredicateSpec::IsNull) }, json!(1), true)]
    #[case::all_empty(PredicateSpec::All { predicates: vec![] }, json!(1), true)]
    #[case::any_empty(PredicateSpec::Any { predicates: vec![] }, json!(1), false)]
    #[case::range(
        PredicateSpec::All { predicates: vec![
            PredicateSpec::GreaterThan { value: 0.0 },
            PredicateSpec::LessThan { value: 10.0 },
        ] },
        json!(5),
        true
    )]
    fn predicates(#[case] spec: PredicateSpec, #[case] input: Value, #[case] expected: bool) {
        assert_eq!(compile_predicate(&spec).evaluate(&input), expected);
    }

    #[rstest]
    #[case::identity(TransformerSpec::Identity, json!([1]), json!([1]))]
    #[case::null(TransformerSpec::Null, json!(1), Value::Null)]
    #[case::constant(TransformerSpec::Constant { value: json!("c") }, json!(1), json!("c"))]
    #[case::negate_int(TransformerSpec::Negate, json!(4), json!(-4))]
    #[case::negate_min(TransformerSpec::Negate, json!(i64::MIN), json!(9223372036854775808.0))]
    #[case::negate_string(TransformerSpec::Negate, json!("4"), Value::Null)]
    #[case::scale_int(TransformerSpec::Scale { factor: -2.0 }, json!(-5), json!(10))]
    #[case::scale_fraction(TransformerSpec::Scale { factor: 0.5 }, json!(3), json!(1.5))]
    #[case::offset(TransformerSpec::Offset { by: 1.0 }, json!(41), json!(42))]
    #[case::offset_float(TransformerSpec::Offset { by: 0.25 }, json!(1.0), json!(1.25))]
    #[case::stringify_number(TransformerSpec::Stringify, json!(12), json!("12"))]
    #[case::stringify_string(TransformerSpec::Stringify, json!("s"), json!("s"))]
    #[case::chain(
        TransformerSpec::Chain { steps: vec![TransformerSpec::Negate, TransformerSpec::Offset { by: 1.0 }] },
        json!(5),
        json!(-4)
    )]
    #[case::empty_chain(TransformerSpec::Chain { steps: vec![] }, json!(5), json!(5))]
    fn transformers(#[case] spec: TransformerSpec, #[case] input: Value, #[case] expected: Value) {
        assert_eq!(compile_transformer(&spec).transform(&input), expected);
    }

    #[test]
    fn exact_i64_rejects_fractions_and_out_of_range() {
        assert_eq!(exact_i64(-2.0), Some(-2));
        assert_eq!(exact_i64(0.5), None);
        assert_eq!(exact_i64(1e20), None);
    }
}
