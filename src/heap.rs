//! Max-heap forest of Leonardo trees laid out implicitly over a slice.
//!
//! A tree of order `k` occupies `L(k)` consecutive slots with its root at
//! the rightmost one. Orders 0 and 1 are single nodes. For `k >= 2` the
//! root's right child (order `k - 2`) ends directly left of the root, and
//! the left child (order `k - 1`) ends directly left of the right child.
//! Trees sit left to right in decreasing order, except that the two
//! rightmost may hold consecutive orders, the only configuration the next
//! push may merge.

use crate::leonardo::leonardo;

pub(crate) struct LeonardoHeap<'a, T, F> {
    v: &'a mut [T],
    /// One entry per tree root, left to right. `tree_orders[i] == k` means
    /// that tree spans `L(k)` slots. Never recomputed from scratch, only
    /// adjusted by pushes and pops. Holds at most O(log(n)) entries.
    tree_orders: Vec<usize>,
    is_less: F,
}

impl<'a, T, F> LeonardoHeap<'a, T, F>
where
    F: FnMut(&T, &T) -> bool,
{
    pub(crate) fn new(v: &'a mut [T], is_less: F) -> Self {
        Self {
            v,
            tree_orders: Vec::new(),
            is_less,
        }
    }

    /// Turns the slice into a valid heap forest, one push per slot.
    pub(crate) fn build(&mut self) {
        for heap_end in 0..self.v.len() {
            self.push();
            self.fix_roots(heap_end, self.tree_orders.len() - 1);
        }
    }

    /// Pops the maximum until the heap is empty. Each pop leaves the
    /// maximum of the remaining region at the region's right edge, so the
    /// slice ends up sorted ascending.
    pub(crate) fn extract(&mut self) {
        for heap_size in (0..self.v.len()).rev() {
            self.pop(heap_size);
        }
    }

    /// Adds the slot right of the current heap region as a new single-node
    /// tree. Exactly one of three cases applies, checked in this order:
    /// consecutive rightmost orders merge under the new element, an
    /// order-1 tree on the right edge is followed by order 0, anything
    /// else is followed by order 1.
    fn push(&mut self) {
        let n = self.tree_orders.len();

        if n > 1 && self.tree_orders[n - 2] == self.tree_orders[n - 1] + 1 {
            // The new element becomes the shared root of the two rightmost
            // trees. The only case that grows a tree past order 1.
            self.tree_orders[n - 2] += 1;
            self.tree_orders.pop();
            return;
        }

        if n > 0 && self.tree_orders[n - 1] == 1 {
            self.tree_orders.push(0);
            return;
        }

        self.tree_orders.push(1);
    }

    /// Removes the rightmost root, the maximum of the heap region.
    /// `heap_size` is the region size after the removal, which is also the
    /// slice index the removed root lived at.
    fn pop(&mut self, heap_size: usize) {
        let removed_order = self
            .tree_orders
            .pop()
            .expect("pop on an empty heap forest");

        // Single-node trees expose nothing.
        if removed_order <= 1 {
            return;
        }

        // The removed root exposes its two children as new roots, larger
        // order first.
        self.tree_orders.push(removed_order - 1);
        self.tree_orders.push(removed_order - 2);

        let right_root = heap_size - 1;
        let left_root = right_root - leonardo(removed_order - 2);
        let right_order_idx = self.tree_orders.len() - 1;
        let left_order_idx = right_order_idx - 1;

        // Left first. Fixing the right root assumes the left one is
        // already settled.
        self.fix_roots(left_root, left_order_idx);
        self.fix_roots(right_root, right_order_idx);
    }

    /// Walks the chain of roots leftward from `start_root`, swapping the
    /// current root with any left neighbor root that exceeds it, then
    /// restores the heap property of the tree the value settles in.
    ///
    /// A left neighbor is only promoted past a tree with children if it
    /// also exceeds both children, otherwise it could not dominate the
    /// subtree it would take over.
    fn fix_roots(&mut self, start_root: usize, start_order_idx: usize) {
        let mut cur_root = start_root;
        let mut cur_idx = start_order_idx;

        while cur_idx > 0 {
            let cur_order = self.tree_orders[cur_idx];
            // The current tree spans L(cur_order) slots, the next root to
            // the left sits directly before them.
            let next_root = cur_root - leonardo(cur_order);

            if !self.less(cur_root, next_root) {
                break;
            }

            if cur_order > 1 {
                let right_child = cur_root - 1;
                let left_child = cur_root - leonardo(cur_order - 2) - 1;

                if !self.less(right_child, next_root) || !self.less(left_child, next_root) {
                    break;
                }
            }

            self.v.swap(cur_root, next_root);

            cur_idx -= 1;
            cur_root = next_root;
        }

        self.sift_down(cur_root, self.tree_orders[cur_idx]);
    }

    /// Trickles the value at `root` down its tree until it dominates both
    /// children. Descending right shrinks the order by 2, descending left
    /// by 1.
    fn sift_down(&mut self, root: usize, order: usize) {
        let mut cur = root;
        let mut order = order;

        while order > 1 {
            let right_child = cur - 1;
            let left_child = cur - leonardo(order - 2) - 1;

            if !self.less(cur, left_child) && !self.less(cur, right_child) {
                break;
            }

            // Ties descend into the right child.
            if !self.less(right_child, left_child) {
                self.v.swap(cur, right_child);
                cur = right_child;
                order -= 2;
            } else {
                self.v.swap(cur, left_child);
                cur = left_child;
                order -= 1;
            }
        }
    }

    #[inline]
    fn less(&mut self, a: usize, b: usize) -> bool {
        (self.is_less)(&self.v[a], &self.v[b])
    }
}
