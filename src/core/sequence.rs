//! Restartable lazy sequences.
//!
//! A `LazySequence<T>` is a description of how to produce values, not a buffer.
//! Each call to [`LazySequence::iter`] starts a fresh pass from the seed state,
//! so consuming it twice yields the same values, and nothing is produced until
//! a consumer pulls.
//!
//! Generators plug in as `Iterator + Clone` cursors ("next value given state");
//! the combinators here compose on top of them. Every sequence tracks an upper
//! bound on its length ([`Extent`]) so that folds over unbounded sequences are
//! refused up front instead of spinning forever.

use std::fmt;
use std::rc::Rc;

use super::error::{SeqError, SeqResult};

/// Upper bound on how many values a sequence can yield.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extent {
    Unbounded,
    AtMost(usize),
}

impl Extent {
    fn cap(self, n: usize) -> Extent {
        match self {
            Extent::Unbounded => Extent::AtMost(n),
            Extent::AtMost(m) => Extent::AtMost(m.min(n)),
        }
    }
}

type Source<T> = Rc<dyn Fn() -> Box<dyn Iterator<Item = T>>>;

fn source<T, F>(f: F) -> Source<T>
where
    F: Fn() -> Box<dyn Iterator<Item = T>> + 'static,
{
    Rc::new(f)
}

pub struct LazySequence<T> {
    source: Source<T>,
    extent: Extent,
}

impl<T> Clone for LazySequence<T> {
    fn clone(&self) -> Self {
        Self { source: Rc::clone(&self.source), extent: self.extent }
    }
}

impl<T> fmt::Debug for LazySequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazySequence").field("extent", &self.extent).finish()
    }
}

impl<T: 'static> LazySequence<T> {
    /// Infinite sequence driven by `seed`; every pass clones the untouched seed.
    pub fn unbounded<C>(seed: C) -> Self
    where
        C: Iterator<Item = T> + Clone + 'static,
    {
        Self {
            source: source(move || Box::new(seed.clone())),
            extent: Extent::Unbounded,
        }
    }

    /// Finite sequence over already-materialized values.
    pub fn from_vec(values: Vec<T>) -> Self
    where
        T: Clone,
    {
        let extent = Extent::AtMost(values.len());
        let values = Rc::new(values);
        Self {
            source: source(move || {
                let values = Rc::clone(&values);
                Box::new((0..values.len()).map(move |i| values[i].clone()))
            }),
            extent,
        }
    }

    pub fn extent(&self) -> Extent {
        self.extent
    }

    pub fn is_finite(&self) -> bool {
        matches!(self.extent, Extent::AtMost(_))
    }

    /// Fresh cursor positioned at the first value.
    pub fn iter(&self) -> Box<dyn Iterator<Item = T>> {
        (self.source)()
    }

    /// First `n` values; pulls at most `n` times from the producer.
    pub fn take(&self, n: usize) -> Vec<T> {
        self.iter().take(n).collect()
    }

    /// Lazy counterpart of [`take`](Self::take): the same values, still unevaluated.
    pub fn prefix(&self, n: usize) -> Self {
        let inner = Rc::clone(&self.source);
        Self {
            source: source(move || Box::new(inner().take(n))),
            extent: self.extent.cap(n),
        }
    }

    /// Drops the first `k` values.
    pub fn skip(&self, k: usize) -> Self {
        let inner = Rc::clone(&self.source);
        let extent = match self.extent {
            Extent::Unbounded => Extent::Unbounded,
            Extent::AtMost(m) => Extent::AtMost(m.saturating_sub(k)),
        };
        Self {
            source: source(move || Box::new(inner().skip(k))),
            extent,
        }
    }

    /// Keeps values matching `pred`. Pulling from a filtered infinite sequence
    /// with no further matches never returns.
    pub fn filter<P>(&self, pred: P) -> Self
    where
        P: Fn(&T) -> bool + 'static,
    {
        let inner = Rc::clone(&self.source);
        let pred = Rc::new(pred);
        Self {
            source: source(move || {
                let pred = Rc::clone(&pred);
                Box::new(inner().filter(move |x| pred(x)))
            }),
            extent: self.extent,
        }
    }

    pub fn map<U, F>(&self, f: F) -> LazySequence<U>
    where
        U: 'static,
        F: Fn(T) -> U + 'static,
    {
        let inner = Rc::clone(&self.source);
        let f = Rc::new(f);
        LazySequence {
            source: source(move || {
                let f = Rc::clone(&f);
                Box::new(inner().map(move |x| f(x)))
            }),
            extent: self.extent,
        }
    }

    /// Value at zero-based position `k`, if the sequence is that long.
    pub fn nth(&self, k: usize) -> Option<T> {
        self.iter().nth(k)
    }

    /// Left fold over a bounded sequence. Unbounded sequences are rejected
    /// before any value is produced.
    pub fn reduce<A, F>(&self, initial: A, op: F) -> SeqResult<A>
    where
        F: FnMut(A, T) -> A,
    {
        self.ensure_bounded()?;
        Ok(self.iter().fold(initial, op))
    }

    /// Fallible fold; stops at the first error.
    pub fn try_reduce<A, F>(&self, initial: A, op: F) -> SeqResult<A>
    where
        F: FnMut(A, T) -> SeqResult<A>,
    {
        self.ensure_bounded()?;
        self.iter().try_fold(initial, op)
    }

    fn ensure_bounded(&self) -> SeqResult<()> {
        match self.extent {
            Extent::Unbounded => Err(SeqError::InfiniteReduction),
            Extent::AtMost(_) => Ok(()),
        }
    }
}

impl<T: 'static> IntoIterator for &LazySequence<T> {
    type Item = T;
    type IntoIter = Box<dyn Iterator<Item = T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
