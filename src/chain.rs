//! Doubly-linked chain of digits
//!
//! Nodes live in a slot vector and refer to each other by index. The
//! `next` links run front (most significant) to rear (least significant)
//! and define the sequence; `prev` links mirror them and are only used to
//! walk backwards from the rear.
//!
//! Freed slots are recycled, so a `NodeId` is only meaningful while the
//! node it names is still linked.
//!

use crate::stdlib::iter::FromIterator;
use crate::stdlib::Vec;

use crate::digit::Digit;


/// Index of a node within its chain
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct NodeId(usize);

#[derive(Clone, Debug)]
struct Node {
    digit: Digit,
    next: Option<NodeId>,
    prev: Option<NodeId>,
}

/// Arena-backed doubly-linked list of digits
#[derive(Debug, Default)]
pub(crate) struct DigitChain {
    slots: Vec<Option<Node>>,
    free: Vec<NodeId>,
    front: Option<NodeId>,
    rear: Option<NodeId>,
}

impl DigitChain {
    /// Create empty chain
    pub fn new() -> Self {
        Self::default()
    }

    fn node(&self, id: NodeId) -> &Node {
        self.slots[id.0].as_ref().expect("link to freed node")
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        self.slots[id.0].as_mut().expect("link to freed node")
    }

    /// Store node in a free slot (or a new one)
    fn alloc(&mut self, node: Node) -> NodeId {
        match self.free.pop() {
            Some(id) => {
                debug_assert!(self.slots[id.0].is_none());
                self.slots[id.0] = Some(node);
                id
            }
            None => {
                self.slots.push(Some(node));
                NodeId(self.slots.len() - 1)
            }
        }
    }

    /// First (most significant) digit
    pub fn front(&self) -> Option<&Digit> {
        self.front.map(|id| &self.node(id).digit)
    }

    /// Last (least significant) digit
    pub fn rear(&self) -> Option<&Digit> {
        self.rear.map(|id| &self.node(id).digit)
    }

    /// True if chain has no nodes
    pub fn is_empty(&self) -> bool {
        self.front.is_none()
    }

    /// Number of nodes, counted by walking from the front
    pub fn count(&self) -> usize {
        self.iter().count()
    }

    /// Append digit after the current rear
    pub fn push_rear(&mut self, digit: Digit) -> NodeId {
        let id = self.alloc(Node { digit, next: None, prev: self.rear });
        match self.rear {
            Some(rear) => self.node_mut(rear).next = Some(id),
            None => self.front = Some(id),
        }
        self.rear = Some(id);
        id
    }

    /// Prepend digit before the current front
    pub fn push_front(&mut self, digit: Digit) -> NodeId {
        let id = self.alloc(Node { digit, next: self.front, prev: None });
        match self.front {
            Some(front) => self.node_mut(front).prev = Some(id),
            None => self.rear = Some(id),
        }
        self.front = Some(id);
        id
    }

    /// Splice digit in directly after (on the rear side of) `at`
    pub fn insert_after(&mut self, at: NodeId, digit: Digit) -> NodeId {
        let next = self.node(at).next;
        let id = self.alloc(Node { digit, next, prev: Some(at) });
        self.node_mut(at).next = Some(id);
        match next {
            Some(next) => self.node_mut(next).prev = Some(id),
            None => self.rear = Some(id),
        }
        id
    }

    /// Remove node from the chain, rejoining its neighbors
    pub fn unlink(&mut self, id: NodeId) -> Digit {
        let node = self.slots[id.0].take().expect("unlink of freed node");
        match node.prev {
            Some(prev) => self.node_mut(prev).next = node.next,
            None => self.front = node.next,
        }
        match node.next {
            Some(next) => self.node_mut(next).prev = node.prev,
            None => self.rear = node.prev,
        }
        self.free.push(id);
        node.digit
    }

    /// Node `n` steps from the rear, following `prev` links
    pub fn nth_from_rear(&self, n: usize) -> Option<NodeId> {
        let mut cursor = self.rear;
        for _ in 0..n {
            cursor = self.node(cursor?).prev;
        }
        cursor
    }

    /// Node `n` steps from the front, following `next` links
    #[cfg(test)]
    pub fn nth_from_front(&self, n: usize) -> Option<NodeId> {
        let mut cursor = self.front;
        for _ in 0..n {
            cursor = self.node(cursor?).next;
        }
        cursor
    }

    /// Digit stored at node
    #[cfg(test)]
    pub fn digit(&self, id: NodeId) -> &Digit {
        &self.node(id).digit
    }

    /// Iterate digits from front to rear
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            chain: self,
            head: self.front,
            tail: self.rear,
        }
    }

    /// Panic if any link invariant is broken
    #[cfg(test)]
    pub fn check_links(&self) {
        let live = self.slots.iter().filter(|s| s.is_some()).count();
        assert_eq!(live + self.free.len(), self.slots.len());

        match (self.front, self.rear) {
            (None, None) => {
                assert_eq!(live, 0);
                return;
            }
            (Some(front), Some(rear)) => {
                assert_eq!(self.node(front).prev, None);
                assert_eq!(self.node(rear).next, None);
            }
            (front, rear) => panic!("half-empty chain: front={:?} rear={:?}", front, rear),
        }

        let mut seen = 0;
        let mut prev = None;
        let mut cursor = self.front;
        while let Some(id) = cursor {
            seen += 1;
            assert!(seen <= live, "cycle in chain");
            let node = self.node(id);
            assert_eq!(node.prev, prev);
            if let Some(next) = node.next {
                assert_eq!(self.node(next).prev, Some(id));
            }
            prev = cursor;
            cursor = node.next;
        }
        assert_eq!(prev, self.rear);
        assert_eq!(seen, live);
    }
}

impl Clone for DigitChain {
    /// Rebuild into a compact chain, dropping free slots
    fn clone(&self) -> Self {
        self.iter().copied().collect()
    }
}

impl FromIterator<Digit> for DigitChain {
    fn from_iter<I: IntoIterator<Item = Digit>>(iter: I) -> Self {
        let mut chain = DigitChain::new();
        for digit in iter {
            chain.push_rear(digit);
        }
        chain
    }
}

impl<'a> IntoIterator for &'a DigitChain {
    type Item = &'a Digit;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}


/// Double-ended iterator over the digits of a chain
///
/// Forward iteration runs front to rear, `rev()` runs rear to front.
///
#[derive(Clone, Debug)]
pub struct Iter<'a> {
    chain: &'a DigitChain,
    head: Option<NodeId>,
    tail: Option<NodeId>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Digit;

    fn next(&mut self) -> Option<&'a Digit> {
        let id = self.head?;
        let node = self.chain.node(id);
        if self.head == self.tail {
            self.head = None;
            self.tail = None;
        } else {
            self.head = node.next;
        }
        Some(&node.digit)
    }
}

impl<'a> DoubleEndedIterator for Iter<'a> {
    fn next_back(&mut self) -> Option<&'a Digit> {
        let id = self.tail?;
        let node = self.chain.node(id);
        if self.head == self.tail {
            self.head = None;
            self.tail = None;
        } else {
            self.tail = node.prev;
        }
        Some(&node.digit)
    }
}


#[cfg(test)]
#[allow(non_snake_case)]
mod test {
    use super::*;
    use crate::stdlib::string::String;

    fn chain_of(s: &str) -> DigitChain {
        s.chars().map(Digit::new).collect()
    }

    fn render(chain: &DigitChain) -> String {
        chain.iter().map(Digit::glyph).collect()
    }

    fn render_rev(chain: &DigitChain) -> String {
        chain.iter().rev().map(Digit::glyph).collect()
    }

    include!("chain.tests.rs");
}
