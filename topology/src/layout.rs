//! Index arithmetic over the implicit broadcast tree.
//!
//! The committee list is the array layout of a complete `width`-ary tree
//! with the root at position 0, so parent/child relationships are pure
//! integer functions over positions — no node objects exist anywhere.

/// Parent/child arithmetic for a complete `width`-ary tree laid out
/// breadth-first in an array.
#[derive(Clone, Copy, Debug)]
pub struct TreeLayout {
    width: usize,
}

impl TreeLayout {
    /// Create a layout with the given branching factor.
    ///
    /// The width is validated upstream by
    /// [`crate::TopologyConfig::validate`]; a width of at least 1 is
    /// assumed here.
    pub fn new(width: usize) -> Self {
        debug_assert!(width >= 1);
        Self { width }
    }

    /// Branching factor of the tree.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Position of `parent`'s child in the given slot (`slot < width`).
    ///
    /// Children of a position occupy a contiguous, strictly increasing
    /// run of positions as `slot` increases.
    pub fn child_index(&self, parent: usize, slot: usize) -> usize {
        parent * self.width + slot + 1
    }

    /// Position of the parent of `index`.
    ///
    /// For the root (`index == 0`) this returns 0 — the root is its own
    /// parent under the array formula, which callers must treat as "no
    /// parent exists".
    pub fn parent_index(&self, index: usize) -> usize {
        index.saturating_sub(1) / self.width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parent_inverts_child() {
        for width in 1..=5 {
            let layout = TreeLayout::new(width);
            for parent in 0..50 {
                for slot in 0..width {
                    let child = layout.child_index(parent, slot);
                    assert_eq!(layout.parent_index(child), parent);
                }
            }
        }
    }

    #[test]
    fn children_are_contiguous_and_increasing() {
        let layout = TreeLayout::new(3);
        assert_eq!(layout.child_index(0, 0), 1);
        assert_eq!(layout.child_index(0, 1), 2);
        assert_eq!(layout.child_index(0, 2), 3);
        assert_eq!(layout.child_index(1, 0), 4);
        assert_eq!(layout.child_index(2, 0), 7);
    }

    #[test]
    fn root_is_its_own_parent() {
        for width in 1..=5 {
            assert_eq!(TreeLayout::new(width).parent_index(0), 0);
        }
    }

    #[test]
    fn binary_tree_parents() {
        let layout = TreeLayout::new(2);
        assert_eq!(layout.parent_index(1), 0);
        assert_eq!(layout.parent_index(2), 0);
        assert_eq!(layout.parent_index(3), 1);
        assert_eq!(layout.parent_index(4), 1);
        assert_eq!(layout.parent_index(5), 2);
        assert_eq!(layout.parent_index(6), 2);
    }

    #[test]
    fn unary_tree_is_a_chain() {
        let layout = TreeLayout::new(1);
        for pos in 1..20 {
            assert_eq!(layout.child_index(pos - 1, 0), pos);
            assert_eq!(layout.parent_index(pos), pos - 1);
        }
    }
}
