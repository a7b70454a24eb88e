use watersort_core::Arrangement;

/// Undo history: whole-arrangement snapshots, newest last.
///
/// Arrangements are at most a few dozen units, so every pour stores a full
/// copy of the arrangement it replaced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    snapshots: Vec<Arrangement>,
}

impl History {
    /// Creates an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of snapshots that can be undone.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.snapshots.len()
    }

    /// Returns `true` if there is nothing to undo.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Returns the snapshots from newest to oldest.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Arrangement> {
        self.snapshots.iter().rev()
    }

    pub(crate) fn push(&mut self, snapshot: Arrangement) {
        self.snapshots.push(snapshot);
    }

    pub(crate) fn pop(&mut self) -> Option<Arrangement> {
        self.snapshots.pop()
    }

    pub(crate) fn clear(&mut self) {
        self.snapshots.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arrangement(s: &str) -> Arrangement {
        s.parse().unwrap()
    }

    #[test]
    fn test_push_pop_order() {
        let mut history = History::new();
        history.push(arrangement("R"));
        history.push(arrangement("B"));
        assert_eq!(history.depth(), 2);

        let newest: Vec<_> = history.iter().map(ToString::to_string).collect();
        assert_eq!(newest, ["B", "R"]);

        assert_eq!(history.pop(), Some(arrangement("B")));
        assert_eq!(history.pop(), Some(arrangement("R")));
        assert_eq!(history.pop(), None);
        assert!(history.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut history = History::new();
        history.push(arrangement("R -"));
        history.clear();
        assert!(history.is_empty());
        assert_eq!(history.pop(), None);
    }
}
