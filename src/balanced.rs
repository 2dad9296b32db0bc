//! # Red-black tree.
//!
//! Nodes live in an arena and refer to each other by position. Every node stores all records
//! inserted under its key, so the tree has one node per distinct key.
//!
//! After every insertion the tree satisfies:
//!
//! 1. The root is black.
//! 2. A red node never has a red child.
//! 3. Every path from the root to an empty position passes through the same number of black
//!    nodes, empty positions counting as black.

use std::cmp::Ordering;

use crate::{Index, Record, Violation};

type NodeId = usize;

/// The color of a red-black tree node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    /// A red node.
    Red,
    /// A black node.
    Black,
}

/// A red-black tree that keeps every record inserted under a key, in insertion order.
#[derive(Clone, Default)]
pub struct BalancedTree {
    nodes: Vec<Node>,
    root: Option<NodeId>,
    len: usize,
}

#[derive(Debug, Clone)]
struct Node {
    key: String,
    values: Vec<Record>,
    color: Color,
    parent: Option<NodeId>,
    left: Option<NodeId>,
    right: Option<NodeId>,
}

impl Node {
    fn new(record: Record, parent: Option<NodeId>) -> Self {
        Self {
            key: record.key().to_owned(),
            values: vec![record],
            color: Color::Red,
            parent,
            left: None,
            right: None,
        }
    }
}

impl std::fmt::Debug for BalancedTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(root) = self.root {
            self.debug_print_node(f, root, 0)
        } else {
            writeln!(f, "empty")
        }
    }
}

impl BalancedTree {
    /// Create an empty tree.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
            len: 0,
        }
    }

    /// Get every record inserted under the given key, in insertion order.
    #[must_use]
    pub fn get(&self, key: &str) -> &[Record] {
        let mut cursor = self.root;
        while let Some(id) = cursor {
            let node = &self.nodes[id];
            cursor = match key.cmp(&node.key) {
                Ordering::Equal => return &node.values,
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
            };
        }
        &[]
    }

    /// Get the number of distinct keys, which is the number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get the color of the root, if there is one.
    #[must_use]
    pub fn root_color(&self) -> Option<Color> {
        self.root.map(|root| self.nodes[root].color)
    }

    /// Get the number of nodes on the longest path from the root to a leaf.
    #[must_use]
    pub fn height(&self) -> usize {
        fn walk(tree: &BalancedTree, node: Option<NodeId>) -> usize {
            node.map_or(0, |id| {
                let node = &tree.nodes[id];
                1 + walk(tree, node.left).max(walk(tree, node.right))
            })
        }
        walk(self, self.root)
    }

    /// Check the red-black invariants together with key order and parent links.
    ///
    /// On success, returns the number of black nodes on every path from the root to an empty
    /// position, counting the empty position itself.
    ///
    /// # Errors
    ///
    /// Returns the first [`Violation`] found.
    pub fn validate(&self) -> Result<usize, Violation> {
        if self.root_color() == Some(Color::Red) {
            return Err(Violation::RedRoot);
        }
        self.validate_node(self.root)
    }

    fn validate_node(&self, node: Option<NodeId>) -> Result<usize, Violation> {
        let Some(id) = node else {
            return Ok(1);
        };
        let node = &self.nodes[id];
        for (child, expected) in [(node.left, Ordering::Less), (node.right, Ordering::Greater)] {
            let Some(child) = child else {
                continue;
            };
            let child = &self.nodes[child];
            if child.parent != Some(id) {
                return Err(Violation::ParentLink {
                    key: node.key.clone(),
                });
            }
            if child.key.cmp(&node.key) != expected {
                return Err(Violation::Order {
                    key: node.key.clone(),
                });
            }
            if node.color == Color::Red && child.color == Color::Red {
                return Err(Violation::RedChild {
                    key: node.key.clone(),
                });
            }
        }
        let left = self.validate_node(node.left)?;
        let right = self.validate_node(node.right)?;
        if left != right {
            return Err(Violation::BlackHeight {
                key: node.key.clone(),
                left,
                right,
            });
        }
        Ok(left + usize::from(node.color == Color::Black))
    }

    fn is_red(&self, node: Option<NodeId>) -> bool {
        node.is_some_and(|id| self.nodes[id].color == Color::Red)
    }

    fn fix_insert(&mut self, mut node: NodeId) {
        while let Some(mut parent) = self.nodes[node].parent {
            if self.nodes[parent].color == Color::Black {
                break;
            }
            let Some(grand) = self.nodes[parent].parent else {
                break;
            };
            let parent_is_left = self.nodes[grand].left == Some(parent);
            let uncle = if parent_is_left {
                self.nodes[grand].right
            } else {
                self.nodes[grand].left
            };
            if let Some(uncle) = uncle.filter(|&uncle| self.is_red(Some(uncle))) {
                self.nodes[parent].color = Color::Black;
                self.nodes[uncle].color = Color::Black;
                self.nodes[grand].color = Color::Red;
                node = grand;
                continue;
            }
            if parent_is_left {
                if self.nodes[parent].right == Some(node) {
                    // The rotation swaps the two nodes' positions.
                    self.rotate_left(parent);
                    std::mem::swap(&mut node, &mut parent);
                }
                self.nodes[parent].color = Color::Black;
                self.nodes[grand].color = Color::Red;
                self.rotate_right(grand);
            } else {
                if self.nodes[parent].left == Some(node) {
                    self.rotate_right(parent);
                    std::mem::swap(&mut node, &mut parent);
                }
                self.nodes[parent].color = Color::Black;
                self.nodes[grand].color = Color::Red;
                self.rotate_left(grand);
            }
        }
        if let Some(root) = self.root {
            self.nodes[root].color = Color::Black;
        }
    }

    /// Promote the right child of `pivot` into its place. No-op without a right child.
    fn rotate_left(&mut self, pivot: NodeId) {
        let Some(child) = self.nodes[pivot].right else {
            return;
        };
        tracing::trace!(pivot = %self.nodes[pivot].key, "rotate left");
        let inner = self.nodes[child].left;
        self.nodes[pivot].right = inner;
        if let Some(inner) = inner {
            self.nodes[inner].parent = Some(pivot);
        }
        self.replace_child(self.nodes[pivot].parent, pivot, child);
        self.nodes[child].left = Some(pivot);
        self.nodes[pivot].parent = Some(child);
    }

    /// Promote the left child of `pivot` into its place. No-op without a left child.
    fn rotate_right(&mut self, pivot: NodeId) {
        let Some(child) = self.nodes[pivot].left else {
            return;
        };
        tracing::trace!(pivot = %self.nodes[pivot].key, "rotate right");
        let inner = self.nodes[child].right;
        self.nodes[pivot].left = inner;
        if let Some(inner) = inner {
            self.nodes[inner].parent = Some(pivot);
        }
        self.replace_child(self.nodes[pivot].parent, pivot, child);
        self.nodes[child].right = Some(pivot);
        self.nodes[pivot].parent = Some(child);
    }

    /// Point whatever referred to `old` (a parent's child link, or the root) at `new`.
    fn replace_child(&mut self, parent: Option<NodeId>, old: NodeId, new: NodeId) {
        self.nodes[new].parent = parent;
        match parent {
            None => self.root = Some(new),
            Some(parent) if self.nodes[parent].left == Some(old) => {
                self.nodes[parent].left = Some(new);
            }
            Some(parent) => self.nodes[parent].right = Some(new),
        }
    }

    fn debug_print_node(
        &self,
        f: &mut std::fmt::Formatter<'_>,
        id: NodeId,
        level: usize,
    ) -> std::fmt::Result {
        let node = &self.nodes[id];
        for _ in 0..level {
            write!(f, "  ")?;
        }
        let payloads: Vec<_> = node.values.iter().map(Record::payload).collect();
        writeln!(f, "{:?} {:?} -> {:?}", node.color, node.key, payloads)?;
        for child in [node.left, node.right].into_iter().flatten() {
            self.debug_print_node(f, child, level + 1)?;
        }
        Ok(())
    }
}

impl Index for BalancedTree {
    fn insert(&mut self, record: Record) {
        self.len += 1;
        let mut parent = None;
        let mut cursor = self.root;
        let mut ordering = Ordering::Equal;
        while let Some(id) = cursor {
            let node = &mut self.nodes[id];
            ordering = record.key().cmp(&node.key);
            cursor = match ordering {
                Ordering::Equal => {
                    node.values.push(record);
                    return;
                }
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
            };
            parent = Some(id);
        }
        let id = self.nodes.len();
        self.nodes.push(Node::new(record, parent));
        match parent {
            None => self.root = Some(id),
            Some(parent) if ordering == Ordering::Less => self.nodes[parent].left = Some(id),
            Some(parent) => self.nodes[parent].right = Some(id),
        }
        self.fix_insert(id);
    }

    fn search(&self, key: &str) -> Vec<&Record> {
        self.get(key).iter().collect()
    }

    fn len(&self) -> usize {
        self.len
    }
}
