//! Index-bounded navigation over a list the caller owns.
//!
//! `BoundedNav` is a snapshot of `(current_index, len)` taken from whoever owns
//! the selection. It never moves on its own: each operation answers which index
//! should be requested next, or `None` when the request would leave the list.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundedNav {
    current_index: usize,
    len: usize,
}

impl BoundedNav {
    pub fn new(current_index: usize, len: usize) -> Self {
        Self { current_index, len }
    }

    pub fn index(&self) -> usize {
        self.current_index
    }

    pub fn total(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn can_go_previous(&self) -> bool {
        self.current_index > 0 && self.len > 0
    }

    pub fn can_go_next(&self) -> bool {
        self.current_index + 1 < self.len
    }

    pub fn previous(&self) -> Option<usize> {
        self.can_go_previous().then(|| self.current_index - 1)
    }

    pub fn next(&self) -> Option<usize> {
        self.can_go_next().then(|| self.current_index + 1)
    }

    /// Target for a direct selection (thumbnail or indicator). Out-of-range
    /// targets are clamped to the last index; an empty list has no target.
    pub fn jump_to(&self, idx: usize) -> Option<usize> {
        if self.len == 0 {
            return None;
        }

        if idx >= self.len {
            tracing::warn!(
                requested = idx,
                len = self.len,
                "jump target out of range, clamping to last item"
            );
            return Some(self.len - 1);
        }

        Some(idx)
    }

    /// "3 / 7" style position, 1-based.
    pub fn position_label(&self) -> String {
        if self.len == 0 {
            return String::from("0 / 0");
        }
        format!("{} / {}", self.current_index + 1, self.len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interior_index_moves_one_step_each_way() {
        for idx in 1..4 {
            let nav = BoundedNav::new(idx, 5);
            assert_eq!(nav.previous(), Some(idx - 1));
            assert_eq!(nav.next(), Some(idx + 1));
        }
    }

    #[test]
    fn edges_disable_navigation() {
        let first = BoundedNav::new(0, 3);
        assert!(!first.can_go_previous());
        assert_eq!(first.previous(), None);
        assert!(first.can_go_next());

        let last = BoundedNav::new(2, 3);
        assert!(!last.can_go_next());
        assert_eq!(last.next(), None);
        assert!(last.can_go_previous());
    }

    #[test]
    fn single_item_has_nowhere_to_go() {
        let nav = BoundedNav::new(0, 1);
        assert_eq!(nav.previous(), None);
        assert_eq!(nav.next(), None);
        assert_eq!(nav.jump_to(0), Some(0));
    }

    #[test]
    fn empty_list_has_no_targets() {
        let nav = BoundedNav::new(0, 0);
        assert!(nav.is_empty());
        assert!(!nav.can_go_previous());
        assert!(!nav.can_go_next());
        assert_eq!(nav.jump_to(0), None);
        assert_eq!(nav.position_label(), "0 / 0");
    }

    #[test]
    fn jump_clamps_out_of_range() {
        let nav = BoundedNav::new(0, 4);
        assert_eq!(nav.jump_to(2), Some(2));
        assert_eq!(nav.jump_to(4), Some(3));
        assert_eq!(nav.jump_to(usize::MAX), Some(3));
    }

    #[test]
    fn position_label_is_one_based() {
        assert_eq!(BoundedNav::new(1, 3).position_label(), "2 / 3");
    }
}
