//! # Unbalanced binary search tree.

use crate::{Index, Record};

type NodeId = usize;

/// An unbalanced binary search tree holding one node per record. Records with equal keys are
/// never merged; each one becomes its own node to the right of the previous one.
///
/// Nothing rebalances the tree, so sorted input degrades it into a chain of height `n`.
#[derive(Debug, Clone, Default)]
pub struct OrderedTree {
    nodes: Vec<Node>,
    root: Option<NodeId>,
}

#[derive(Debug, Clone)]
struct Node {
    record: Record,
    left: Option<NodeId>,
    right: Option<NodeId>,
}

impl OrderedTree {
    /// Create an empty tree.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
        }
    }

    /// Get the number of nodes on the longest path from the root to a leaf.
    #[must_use]
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(NodeId, usize)> =
            self.root.map(|root| (root, 1)).into_iter().collect();
        while let Some((id, depth)) = stack.pop() {
            height = height.max(depth);
            let node = &self.nodes[id];
            stack.extend(node.left.map(|child| (child, depth + 1)));
            stack.extend(node.right.map(|child| (child, depth + 1)));
        }
        height
    }
}

impl Index for OrderedTree {
    fn insert(&mut self, record: Record) {
        let id = self.nodes.len();
        if let Some(mut cursor) = self.root {
            loop {
                let node = &mut self.nodes[cursor];
                // Ties go right, which `search` relies on.
                let slot = if record.key() < node.record.key() {
                    &mut node.left
                } else {
                    &mut node.right
                };
                match *slot {
                    Some(child) => cursor = child,
                    None => {
                        *slot = Some(id);
                        break;
                    }
                }
            }
        } else {
            self.root = Some(id);
        }
        self.nodes.push(Node {
            record,
            left: None,
            right: None,
        });
    }

    fn search(&self, key: &str) -> Vec<&Record> {
        let mut found = Vec::new();
        let mut stack: Vec<NodeId> = self.root.into_iter().collect();
        while let Some(id) = stack.pop() {
            let node = &self.nodes[id];
            let node_key = node.record.key();
            if key == node_key {
                found.push(&node.record);
            }
            // Both branches are taken on equality.
            if key <= node_key {
                stack.extend(node.left);
            }
            if key >= node_key {
                stack.extend(node.right);
            }
        }
        found
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }
}

#[cfg(test)]
mod tests {
    use crate::{Index, OrderedTree, Record};

    fn payloads(tree: &OrderedTree, key: &str) -> Vec<i64> {
        let mut found: Vec<_> = tree.search(key).into_iter().map(Record::payload).collect();
        found.sort_unstable();
        found
    }

    #[test]
    fn test_search_finds_every_duplicate() {
        let mut tree = OrderedTree::new();
        for (idx, key) in ["m", "c", "m", "x", "m", "a", "c"].into_iter().enumerate() {
            tree.insert(Record::new(key, idx as i64));
        }
        assert_eq!(tree.len(), 7);
        assert_eq!(payloads(&tree, "m"), vec![0, 2, 4]);
        assert_eq!(payloads(&tree, "c"), vec![1, 6]);
        assert_eq!(payloads(&tree, "a"), vec![5]);
        assert!(tree.search("b").is_empty());
        assert!(tree.search("z").is_empty());
    }

    #[test]
    fn test_sorted_input_degenerates_without_overflow() {
        let mut tree = OrderedTree::new();
        for idx in 0..5_000 {
            tree.insert(Record::new(format!("{idx:08}"), idx));
        }
        assert_eq!(tree.height(), 5_000);
        assert_eq!(payloads(&tree, "00004999"), vec![4_999]);
        assert!(tree.search("99999999").is_empty());
    }

    #[test]
    fn test_empty_tree() {
        let tree = OrderedTree::new();
        assert!(tree.is_empty());
        assert_eq!(tree.height(), 0);
        assert!(tree.search("").is_empty());
    }

    #[test]
    fn test_empty_key() {
        let mut tree = OrderedTree::new();
        tree.insert(Record::new("b", 1));
        tree.insert(Record::new("", 2));
        tree.insert(Record::new("", 3));
        assert_eq!(payloads(&tree, ""), vec![2, 3]);
    }
}
