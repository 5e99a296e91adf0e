use std::collections::HashSet;

use crate::geometry::ShapeId;

/// Shapes that have already been classified, so a settled sketch is never
/// classified or prompted for twice.
#[derive(Debug, Default, Clone)]
pub struct ShapeLedger {
    seen: HashSet<ShapeId>,
}

impl ShapeLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` when the shape was already recorded.
    pub fn mark(&mut self, id: ShapeId) -> bool {
        self.seen.insert(id)
    }

    pub fn contains(&self, id: &ShapeId) -> bool {
        self.seen.contains(id)
    }

    /// Drop a shape the user deleted, so its id can be drawn and classified anew.
    pub fn forget(&mut self, id: &ShapeId) -> bool {
        self.seen.remove(id)
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marks_once() {
        let mut ledger = ShapeLedger::new();
        assert!(ledger.mark("a".into()));
        assert!(!ledger.mark("a".into()));
        assert!(ledger.contains(&"a".into()));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn forget_allows_marking_again() {
        let mut ledger = ShapeLedger::new();
        ledger.mark("a".into());
        assert!(ledger.forget(&"a".into()));
        assert!(!ledger.forget(&"a".into()));
        assert!(ledger.mark("a".into()));
    }
}
