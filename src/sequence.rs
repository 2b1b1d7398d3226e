//! Sequence Containers - The two variants under test
//!
//! Both variants keep their elements in non-decreasing order through
//! [`SortedSequence::insert_sorted`] and support positional removal through
//! [`SortedSequence::remove_at`].
//!
//! | Variant | Backing store | Insert step | Remove step |
//! |---------|---------------|-------------|-------------|
//! | [`ContiguousSeq`] | `Vec<T>` | O(n) shift | O(n - i) shift |
//! | [`LinkedSeq`] | linked nodes | O(1) relink | O(i) walk + O(1) unlink |
//!
//! Locating the insertion point is a single linear scan from the front for
//! both; the linked variant also reaches an index by walking from the front.

use std::fmt;

/// Ordered mutable sequence driven by the benchmark workload.
pub trait SortedSequence<T: Ord> {
    /// Short name used in logs and reports
    const LABEL: &'static str;

    /// Insert `value` before the first element `>= value` (or at the end).
    ///
    /// A new value lands in front of any run of equal values, so a run of
    /// duplicates reads newest-first from the front.
    fn insert_sorted(&mut self, value: T);

    /// Remove and return the element at `index`.
    ///
    /// Out-of-range indices are a silent no-op and return `None`.
    fn remove_at(&mut self, index: usize) -> Option<T>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of the elements in sequence order
    fn to_vec(&self) -> Vec<T>
    where
        T: Clone;
}

// ============================================================================
// Contiguous (Vec-backed)
// ============================================================================

/// Array-backed sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContiguousSeq<T> {
    items: Vec<T>,
}

impl<T> Default for ContiguousSeq<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ContiguousSeq<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T: Ord> SortedSequence<T> for ContiguousSeq<T> {
    const LABEL: &'static str = "Vector";

    fn insert_sorted(&mut self, value: T) {
        let pos = self
            .items
            .iter()
            .position(|x| *x >= value)
            .unwrap_or(self.items.len());
        self.items.insert(pos, value);
    }

    fn remove_at(&mut self, index: usize) -> Option<T> {
        if index >= self.items.len() {
            return None;
        }
        Some(self.items.remove(index))
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.clone()
    }
}

// ============================================================================
// Linked (node-linked)
// ============================================================================

#[derive(Debug, Clone)]
struct Node<T> {
    x: Option<T>,
    prev: Option<usize>,
    next: Option<usize>,
}

/// Position reached by walking links from the head
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cursor {
    at: Option<usize>,
    steps: usize,
}

/// Doubly-linked sequence
///
/// Nodes live in a slot arena and link to each other by slot index; freed
/// slots are reused. Every positional operation walks forward from the head,
/// then relinks or unlinks in O(1).
#[derive(Clone)]
pub struct LinkedSeq<T> {
    nodes: Vec<Node<T>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    n: usize,
}

impl<T> Default for LinkedSeq<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LinkedSeq<T> {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            n: 0,
        }
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            seq: self,
            at: self.head,
            remaining: self.n,
        }
    }

    fn alloc(&mut self, x: T) -> usize {
        let node = Node {
            x: Some(x),
            prev: None,
            next: None,
        };
        match self.free.pop() {
            Some(u) => {
                self.nodes[u] = node;
                u
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        }
    }

    /// Walk `i` links forward from the head
    fn seek(&self, i: usize) -> Cursor {
        let mut cursor = Cursor {
            at: self.head,
            steps: 0,
        };
        while cursor.steps < i {
            match cursor.at {
                Some(u) => {
                    cursor.at = self.nodes[u].next;
                    cursor.steps += 1;
                }
                None => break,
            }
        }
        cursor
    }

    /// Link a new node holding `x` in front of `w` (`None` appends)
    fn add_before(&mut self, w: Option<usize>, x: T) {
        let u = self.alloc(x);
        let prev = match w {
            Some(w) => self.nodes[w].prev,
            None => self.tail,
        };
        self.nodes[u].prev = prev;
        self.nodes[u].next = w;
        match prev {
            Some(p) => self.nodes[p].next = Some(u),
            None => self.head = Some(u),
        }
        match w {
            Some(w) => self.nodes[w].prev = Some(u),
            None => self.tail = Some(u),
        }
        self.n += 1;
    }

    fn remove_node(&mut self, w: usize) -> Option<T> {
        let (prev, next) = (self.nodes[w].prev.take(), self.nodes[w].next.take());
        match prev {
            Some(p) => self.nodes[p].next = next,
            None => self.head = next,
        }
        match next {
            Some(q) => self.nodes[q].prev = prev,
            None => self.tail = prev,
        }
        self.free.push(w);
        self.n -= 1;
        self.nodes[w].x.take()
    }
}

impl<T: Ord> SortedSequence<T> for LinkedSeq<T> {
    const LABEL: &'static str = "List";

    fn insert_sorted(&mut self, value: T) {
        let mut at = self.head;
        while let Some(u) = at {
            match &self.nodes[u].x {
                Some(x) if *x >= value => break,
                _ => at = self.nodes[u].next,
            }
        }
        self.add_before(at, value);
    }

    fn remove_at(&mut self, index: usize) -> Option<T> {
        if index >= self.n {
            return None;
        }
        let w = self.seek(index).at?;
        self.remove_node(w)
    }

    fn len(&self) -> usize {
        self.n
    }

    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedSeq<T> {
    fn eq(&self, other: &Self) -> bool {
        self.n == other.n && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedSeq<T> {}

impl<T: fmt::Debug> fmt::Debug for LinkedSeq<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Front-to-back iterator over a [`LinkedSeq`]
pub struct Iter<'a, T> {
    seq: &'a LinkedSeq<T>,
    at: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = &self.seq.nodes[self.at?];
        self.at = node.next;
        self.remaining -= 1;
        node.x.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
