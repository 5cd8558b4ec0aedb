// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use std::fmt;
use std::iter::{FusedIterator, Rev};
use std::sync::Arc;
use std::vec;

/// Chain is a persistent, non-empty, append-only sequence.
///
/// It is a singly-linked list of reference-counted links pointing towards the front
/// of the sequence. [Chain::push] and [Chain::replace_last] run in constant time
/// and share all preceding links with the receiver, which stays unchanged.
/// Cloning a Chain only bumps a reference count.
pub(crate) struct Chain<T> {
    last: Arc<Link<T>>,
}

struct Link<T> {
    value: T,
    prev: Option<Arc<Link<T>>>,
    len: usize,
}

impl<T> Chain<T> {
    /// Creates a Chain with a single element.
    pub(crate) fn new(value: T) -> Self {
        Self {
            last: Arc::new(Link {
                value,
                prev: None,
                len: 1,
            }),
        }
    }

    /// Returns a new Chain with `value` added after all elements of this one.
    pub(crate) fn push(&self, value: T) -> Self {
        Self {
            last: Arc::new(Link {
                value,
                prev: Some(self.last.clone()),
                len: self.last.len + 1,
            }),
        }
    }

    /// Returns a new Chain with the last element replaced by `value`.
    pub(crate) fn replace_last(&self, value: T) -> Self {
        Self {
            last: Arc::new(Link {
                value,
                prev: self.last.prev.clone(),
                len: self.last.len,
            }),
        }
    }

    pub(crate) fn last(&self) -> &T {
        &self.last.value
    }

    /// Returns the number of elements. Always at least one.
    pub(crate) fn len(&self) -> usize {
        self.last.len
    }

    /// Returns an iterator over all elements, from first to last.
    pub(crate) fn iter(&self) -> Iter<'_, T> {
        let mut values = Vec::with_capacity(self.len());
        let mut link = Some(&self.last);
        while let Some(l) = link {
            values.push(&l.value);
            link = l.prev.as_ref();
        }
        Iter(values.into_iter().rev())
    }
}

impl<T> Clone for Chain<T> {
    fn clone(&self) -> Self {
        Self {
            last: self.last.clone(),
        }
    }
}

impl<T: PartialEq> PartialEq for Chain<T> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.last, &other.last)
            || (self.len() == other.len() && self.iter().eq(other.iter()))
    }
}

impl<T: Eq> Eq for Chain<T> {}

impl<T: fmt::Debug> fmt::Debug for Chain<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Drop for Link<T> {
    fn drop(&mut self) {
        // Unlink uniquely-owned predecessors one by one,
        // as the default recursive drop could overflow the stack on long chains.
        let mut prev = self.prev.take();
        while let Some(link) = prev {
            prev = Arc::into_inner(link).and_then(|mut l| l.prev.take());
        }
    }
}

/// Iterator over elements of a [Route](crate::Route) or a [Feature](crate::Feature),
/// in order.
///
/// Every call to `segments()` or `features()` creates a new, independent iterator.
#[derive(Debug)]
pub struct Iter<'a, T>(Rev<vec::IntoIter<&'a T>>);

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}
