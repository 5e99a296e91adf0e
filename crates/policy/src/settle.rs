use intent_sketch::SketchSignal;
use std::collections::HashMap;
use std::time::Duration;

use crate::geometry::ShapeId;

pub const DEFAULT_SETTLE_WINDOW: Duration = Duration::from_millis(300);

#[derive(Debug, Clone)]
struct Pending {
    signal: SketchSignal,
    last_change: Duration,
    finalized: bool,
    seq: u64,
}

/// Coalesces bursts of shape updates into one settled signal per shape.
///
/// A shape settles once it has gone `window` without changing, or as soon as
/// the canvas reports it finalized. Timestamps are offsets from any fixed
/// origin chosen by the caller; the detector never reads a clock.
#[derive(Debug, Clone)]
pub struct SettleDetector {
    window: Duration,
    pending: HashMap<ShapeId, Pending>,
    next_seq: u64,
}

impl Default for SettleDetector {
    fn default() -> Self {
        Self::new(DEFAULT_SETTLE_WINDOW)
    }
}

impl SettleDetector {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: HashMap::new(),
            next_seq: 0,
        }
    }

    /// Record the latest geometry of a shape that is still being edited.
    pub fn observe(&mut self, id: ShapeId, signal: SketchSignal, now: Duration) {
        match self.pending.get_mut(&id) {
            Some(pending) => {
                pending.signal = signal;
                pending.last_change = pending.last_change.max(now);
            }
            None => {
                let seq = self.next_seq;
                self.next_seq += 1;
                self.pending.insert(
                    id,
                    Pending {
                        signal,
                        last_change: now,
                        finalized: false,
                        seq,
                    },
                );
            }
        }
    }

    /// Mark a shape settled regardless of timing. Returns `false` for shapes
    /// that were never observed.
    pub fn finalize(&mut self, id: &ShapeId) -> bool {
        match self.pending.get_mut(id) {
            Some(pending) => {
                pending.finalized = true;
                true
            }
            None => false,
        }
    }

    /// Stop tracking a shape that left the canvas before settling.
    pub fn forget(&mut self, id: &ShapeId) -> bool {
        self.pending.remove(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Remove and return every settled shape, in first-observed order.
    pub fn drain_settled(&mut self, now: Duration) -> Vec<(ShapeId, SketchSignal)> {
        let window = self.window;
        let mut settled: Vec<(u64, ShapeId)> = self
            .pending
            .iter()
            .filter(|(_, p)| p.finalized || now.saturating_sub(p.last_change) >= window)
            .map(|(id, p)| (p.seq, id.clone()))
            .collect();
        settled.sort_by_key(|(seq, _)| *seq);

        settled
            .into_iter()
            .filter_map(|(_, id)| {
                let pending = self.pending.remove(&id)?;
                Some((id, pending.signal))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use intent_sketch::GeoShape;
    use pretty_assertions::assert_eq;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn rect(width: f64) -> SketchSignal {
        SketchSignal::geo(GeoShape::Rectangle, width, 40.0)
    }

    #[test]
    fn settles_after_quiet_window() {
        let mut detector = SettleDetector::default();
        detector.observe("a".into(), rect(10.0), ms(0));
        assert!(detector.drain_settled(ms(299)).is_empty());
        assert_eq!(detector.drain_settled(ms(300)), vec![(ShapeId::from("a"), rect(10.0))]);
        assert!(detector.is_empty());
    }

    #[test]
    fn each_change_restarts_window_and_keeps_latest_geometry() {
        let mut detector = SettleDetector::default();
        detector.observe("a".into(), rect(10.0), ms(0));
        detector.observe("a".into(), rect(200.0), ms(250));
        assert!(detector.drain_settled(ms(400)).is_empty());
        assert_eq!(detector.drain_settled(ms(550)), vec![(ShapeId::from("a"), rect(200.0))]);
    }

    #[test]
    fn finalize_skips_the_wait() {
        let mut detector = SettleDetector::default();
        detector.observe("a".into(), rect(10.0), ms(0));
        assert!(detector.finalize(&"a".into()));
        assert_eq!(detector.drain_settled(ms(1)).len(), 1);
        assert!(!detector.finalize(&"a".into()));
    }

    #[test]
    fn drains_in_first_seen_order() {
        let mut detector = SettleDetector::new(ms(100));
        detector.observe("b".into(), rect(1.0), ms(0));
        detector.observe("a".into(), rect(2.0), ms(10));
        detector.observe("c".into(), rect(3.0), ms(20));
        let ids: Vec<_> = detector
            .drain_settled(ms(500))
            .into_iter()
            .map(|(id, _)| id)
            .collect();
        assert_eq!(ids, vec![ShapeId::from("b"), ShapeId::from("a"), ShapeId::from("c")]);
    }

    #[test]
    fn forgotten_shape_never_settles() {
        let mut detector = SettleDetector::default();
        detector.observe("a".into(), rect(10.0), ms(0));
        detector.observe("b".into(), rect(20.0), ms(0));
        assert!(detector.forget(&"a".into()));
        assert!(!detector.forget(&"a".into()));
        assert_eq!(detector.drain_settled(ms(300)), vec![(ShapeId::from("b"), rect(20.0))]);
    }

    #[test]
    fn out_of_order_timestamps_never_rewind() {
        let mut detector = SettleDetector::default();
        detector.observe("a".into(), rect(10.0), ms(500));
        detector.observe("a".into(), rect(20.0), ms(100));
        assert!(detector.drain_settled(ms(700)).is_empty());
        assert_eq!(detector.drain_settled(ms(800)).len(), 1);
    }
}
