// Index arithmetic for the implicit complete binary tree stored in a flat array.

/// Parent of `index`. Only meaningful for `index > 0`; the root has no parent.
pub(crate) fn parent(index: usize) -> usize {
    debug_assert!(index > 0, "the root has no parent");
    (index - 1) / 2
}

pub(crate) fn left(index: usize) -> usize {
    2 * index + 1
}

pub(crate) fn right(index: usize) -> usize {
    2 * index + 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_children() {
        assert_eq!(left(0), 1);
        assert_eq!(right(0), 2);
        assert_eq!(left(1), 3);
        assert_eq!(right(1), 4);
        assert_eq!(left(4), 9);
        assert_eq!(right(4), 10);
    }

    #[test]
    fn check_parent_inverts_children() {
        for i in 0..100 {
            assert_eq!(parent(left(i)), i);
            assert_eq!(parent(right(i)), i);
        }
    }
}
