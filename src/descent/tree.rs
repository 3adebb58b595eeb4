//! Ordered Tree
//!
//!     A small generic tree with ordered children, used both for the intermediate
//!     replay tree and for the final derivation tree. Nodes are addressed by paths:
//!     a path is the sequence of child indices leading from the root to a node, so
//!     an empty path names the root itself.
//!
//!     The one non-trivial primitive is [`Tree::rightmost_where`]: a depth-first
//!     left-to-right scan that returns the path of the *last* node satisfying a
//!     predicate. The trace replay in [building](crate::descent::building) leans on
//!     it to find the next slot to fill, working through the tree right to left.

use serde::{Deserialize, Serialize};

/// A node with a value and ordered children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tree<T> {
    pub value: T,
    pub children: Vec<Tree<T>>,
}

impl<T> Tree<T> {
    /// A node with no children.
    pub fn leaf(value: T) -> Self {
        Tree {
            value,
            children: Vec::new(),
        }
    }

    pub fn with_children(value: T, children: Vec<Tree<T>>) -> Self {
        Tree { value, children }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Follow a path of child indices from this node.
    pub fn navigate(&self, path: &[usize]) -> Option<&Tree<T>> {
        match path.split_first() {
            None => Some(self),
            Some((&index, rest)) => self.children.get(index)?.navigate(rest),
        }
    }

    /// Follow a path of child indices from this node, mutably.
    pub fn navigate_mut(&mut self, path: &[usize]) -> Option<&mut Tree<T>> {
        match path.split_first() {
            None => Some(self),
            Some((&index, rest)) => self.children.get_mut(index)?.navigate_mut(rest),
        }
    }

    /// Path of the last node (in depth-first left-to-right order, parents before
    /// children) satisfying `predicate`, or `None` if no node does.
    pub fn rightmost_where<F>(&self, predicate: F) -> Option<Vec<usize>>
    where
        F: Fn(&Tree<T>) -> bool,
    {
        fn walk<T, F>(
            node: &Tree<T>,
            path: &mut Vec<usize>,
            best: &mut Option<Vec<usize>>,
            predicate: &F,
        ) where
            F: Fn(&Tree<T>) -> bool,
        {
            if predicate(node) {
                *best = Some(path.clone());
            }
            for (index, child) in node.children.iter().enumerate() {
                path.push(index);
                walk(child, path, best, predicate);
                path.pop();
            }
        }

        let mut best = None;
        walk(self, &mut Vec::new(), &mut best, &predicate);
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Tree<i32> {
        // 1
        // ├─2
        // │ ├─4
        // │ └─5
        // └─3
        Tree::with_children(
            1,
            vec![
                Tree::with_children(2, vec![Tree::leaf(4), Tree::leaf(5)]),
                Tree::leaf(3),
            ],
        )
    }

    #[test]
    fn test_navigate_follows_child_indices() {
        let tree = sample();
        assert_eq!(tree.navigate(&[]).unwrap().value, 1);
        assert_eq!(tree.navigate(&[0, 1]).unwrap().value, 5);
        assert_eq!(tree.navigate(&[1]).unwrap().value, 3);
        assert!(tree.navigate(&[2]).is_none());
    }

    #[test]
    fn test_navigate_mut_allows_in_place_replacement() {
        let mut tree = sample();
        let node = tree.navigate_mut(&[0, 0]).unwrap();
        node.value = 40;
        node.children.push(Tree::leaf(41));
        assert_eq!(tree.navigate(&[0, 0]).unwrap().value, 40);
        assert_eq!(tree.navigate(&[0, 0, 0]).unwrap().value, 41);
    }

    #[test]
    fn test_rightmost_where_takes_the_last_match() {
        let tree = sample();
        // Depth-first left-to-right visits 1, 2, 4, 5, 3; the last leaf is 3.
        assert_eq!(tree.rightmost_where(|n| n.is_leaf()), Some(vec![1]));
        // The last even value is 4 at path [0, 0].
        assert_eq!(
            tree.rightmost_where(|n| n.value % 2 == 0),
            Some(vec![0, 0])
        );
        assert_eq!(tree.rightmost_where(|n| n.value > 9), None);
    }

    #[test]
    fn test_rightmost_where_can_match_the_root() {
        let tree = Tree::leaf(7);
        assert_eq!(tree.rightmost_where(|n| n.value == 7), Some(vec![]));
    }
}
