//! Fibonacci-style additive recurrence with configurable seeds.

use std::ops::Add;

use crate::core::sequence::LazySequence;

#[derive(Debug, Clone)]
enum Phase<T> {
    First(T, T),
    Second(T, T),
    Running(T, T),
}

/// Yields `first`, `second`, then the sum of the two latest values. Each sum is
/// computed only when it is pulled.
#[derive(Debug, Clone)]
pub struct RecurrenceCursor<T> {
    phase: Option<Phase<T>>,
}

impl<T> RecurrenceCursor<T> {
    pub fn new(first: T, second: T) -> Self {
        RecurrenceCursor { phase: Some(Phase::First(first, second)) }
    }
}

impl<T> Iterator for RecurrenceCursor<T>
where
    T: Clone + Add<Output = T>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let (out, phase) = match self.phase.take()? {
            Phase::First(a, b) => (a.clone(), Phase::Second(a, b)),
            Phase::Second(a, b) => (b.clone(), Phase::Running(a, b)),
            Phase::Running(a, b) => {
                let c = a + b.clone();
                (c.clone(), Phase::Running(b, c))
            }
        };
        self.phase = Some(phase);
        Some(out)
    }
}

pub fn enumerate_recurrence<T>(first: T, second: T) -> LazySequence<T>
where
    T: Clone + Add<Output = T> + 'static,
{
    LazySequence::unbounded(RecurrenceCursor::new(first, second))
}
