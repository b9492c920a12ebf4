//! Built-in predicates.

use crate::ports::{Predicate, PredicateRef};

/// Accepts every input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TruePredicate;

impl<I> Predicate<I> for TruePredicate {
    fn evaluate(&self, _input: &I) -> bool {
        true
    }
}

/// Rejects every input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FalsePredicate;

impl<I> Predicate<I> for FalsePredicate {
    fn evaluate(&self, _input: &I) -> bool {
        false
    }
}

/// Inverts another predicate.
pub struct NotPredicate<I> {
    inner: PredicateRef<I>,
}

impl<I> NotPredicate<I> {
    pub fn new(inner: PredicateRef<I>) -> Self {
        Self { inner }
    }
}

impl<I> Predicate<I> for NotPredicate<I> {
    fn evaluate(&self, input: &I) -> bool {
        !self.inner.evaluate(input)
    }
}

/// Accepts inputs equal to a fixed value.
#[derive(Debug, Clone, PartialEq)]
pub struct EqualPredicate<T> {
    expected: T,
}

impl<T> EqualPredicate<T> {
    pub fn new(expected: T) -> Self {
        Self { expected }
    }
}

impl<T> Predicate<T> for EqualPredicate<T>
where
    T: PartialEq + Send + Sync,
{
    fn evaluate(&self, input: &T) -> bool {
        *input == self.expected
    }
}
