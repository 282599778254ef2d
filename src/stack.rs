//! Persistent singly-linked stack.
//!
//! Every `push` returns a new stack that shares its tail with the old one, so
//! cursors derived from each other share their sibling lists and paths instead
//! of copying them. Length is cached per frame, which keeps `len` O(1).

use std::fmt;
use std::iter::FromIterator;
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

struct Frame<T> {
    item: T,
    len: usize,
    rest: Option<Arc<Frame<T>>>,
}

pub struct Stack<T> {
    head: Option<Arc<Frame<T>>>,
}

impl<T> Stack<T> {
    pub const fn new() -> Self {
        Self { head: None }
    }

    pub fn len(&self) -> usize {
        self.head.as_ref().map_or(0, |frame| frame.len)
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Top of the stack (the nearest element).
    pub fn peek(&self) -> Option<&T> {
        self.head.as_ref().map(|frame| &frame.item)
    }

    pub fn push(&self, item: T) -> Self {
        Self {
            head: Some(Arc::new(Frame {
                item,
                len: self.len() + 1,
                rest: self.head.clone(),
            })),
        }
    }

    /// Everything below the top. Empty stays empty.
    pub fn tail(&self) -> Self {
        Self {
            head: self.head.as_ref().and_then(|frame| frame.rest.clone()),
        }
    }

    pub fn pop(&self) -> Option<(&T, Self)> {
        self.head.as_ref().map(|frame| {
            (
                &frame.item,
                Self {
                    head: frame.rest.clone(),
                },
            )
        })
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.iter().nth(index)
    }

    /// Iterates from the top (nearest) to the bottom (farthest).
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            frame: self.head.as_deref(),
            remaining: self.len(),
        }
    }
}

impl<T: Clone> Stack<T> {
    pub fn reversed(&self) -> Self {
        self.iter().fold(Self::new(), |acc, item| acc.push(item.clone()))
    }

    /// Items from the bottom (farthest) to the top (nearest).
    pub fn to_vec_reversed(&self) -> Vec<T> {
        let mut items: Vec<T> = self.iter().cloned().collect();
        items.reverse();
        items
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }

    /// Pushes every item in iteration order; the last one ends up on top.
    pub fn push_all<I>(&self, items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        items.into_iter().fold(self.clone(), |acc, item| acc.push(item))
    }

    /// Removes the top `n` items, returning them nearest first together with
    /// the remainder. `None` when fewer than `n` items are stored.
    pub fn split_at(&self, n: usize) -> Option<(Vec<T>, Self)> {
        if n > self.len() {
            return None;
        }
        let mut taken = Vec::with_capacity(n);
        let mut rest = self.clone();
        for _ in 0..n {
            let (item, tail) = rest.pop()?;
            taken.push(item.clone());
            rest = tail;
        }
        Some((taken, rest))
    }
}

impl<T> Clone for Stack<T> {
    fn clone(&self) -> Self {
        Self {
            head: self.head.clone(),
        }
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Unlink frames one at a time so long paths do not recurse on drop.
impl<T> Drop for Stack<T> {
    fn drop(&mut self) {
        let mut current = self.head.take();
        while let Some(frame) = current {
            match Arc::try_unwrap(frame) {
                Ok(mut frame) => current = frame.rest.take(),
                Err(_) => break,
            }
        }
    }
}

impl<T> FromIterator<T> for Stack<T> {
    /// The first item of the iterator becomes the top of the stack.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let items: Vec<T> = iter.into_iter().collect();
        items
            .into_iter()
            .rev()
            .fold(Self::new(), |acc, item| acc.push(item))
    }
}

impl<T: PartialEq> PartialEq for Stack<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Stack<T> {}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Serialize> Serialize for Stack<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Stack<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(Stack::from_iter)
    }
}

pub struct Iter<'a, T> {
    frame: Option<&'a Frame<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.frame.map(|frame| {
            self.frame = frame.rest.as_deref();
            self.remaining -= 1;
            &frame.item
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
