//! Event types and sinks for observing segment regeneration.
//!
//! Controllers emit [`SegmentEvent`]s alongside `tracing` output. Sinks are
//! cheap adapters: pass `&mut ()` to ignore events, a [`VecSink`] to collect
//! them in tests, or a [`FnSink`] to forward them to application code.
use crate::config::GeneratorKind;
use crate::segment::SegmentId;

/// Describes events emitted while resolving and regenerating a segment.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub enum SegmentEvent {
    /// Configuration resolution replaced the attached generator set.
    Resolved {
        segment: SegmentId,
        generator_count: usize,
    },

    /// A generator finished a regeneration pass.
    GeneratorUpdated {
        segment: SegmentId,
        kind: GeneratorKind,
        item_count: usize,
    },

    /// A generator needed randomness but had no seed; a fresh one was sent
    /// to the persistence layer.
    SeedRequested {
        segment: SegmentId,
        generator_index: usize,
        seed: u32,
    },

    /// A generator released its items to independent editing.
    ItemsDetached {
        segment: SegmentId,
        kind: GeneratorKind,
        item_count: usize,
    },

    /// Non-fatal problem recovered during resolution or regeneration.
    Warning { context: String, message: String },
}

/// A generic event sink that accepts [`SegmentEvent`]s.
pub trait EventSink {
    fn send(&mut self, event: SegmentEvent);
}

/// A no-op event sink.
impl EventSink for () {
    #[inline]
    fn send(&mut self, _event: SegmentEvent) {}
}

/// An event sink that forwards to a user-provided closure.
pub struct FnSink<F>
where
    F: FnMut(SegmentEvent),
{
    f: F,
}

impl<F> FnSink<F>
where
    F: FnMut(SegmentEvent),
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> EventSink for FnSink<F>
where
    F: FnMut(SegmentEvent),
{
    #[inline]
    fn send(&mut self, event: SegmentEvent) {
        (self.f)(event);
    }
}

/// An event sink that collects all events in a `Vec`.
#[derive(Default)]
pub struct VecSink {
    events: Vec<SegmentEvent>,
}

impl VecSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn into_inner(self) -> Vec<SegmentEvent> {
        self.events
    }

    pub fn as_slice(&self) -> &[SegmentEvent] {
        &self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventSink for VecSink {
    #[inline]
    fn send(&mut self, event: SegmentEvent) {
        self.events.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec_sink_collects_events() {
        let mut sink = VecSink::new();
        assert!(sink.is_empty());
        sink.send(SegmentEvent::Warning {
            context: "a".into(),
            message: "m".into(),
        });
        assert_eq!(sink.len(), 1);
        sink.clear();
        assert!(sink.is_empty());
    }

    #[test]
    fn fn_sink_invokes_callback() {
        let mut count = 0;
        let mut sink = FnSink::new(|_event| {
            count += 1;
        });
        sink.send(SegmentEvent::Warning {
            context: "ctx".into(),
            message: "msg".into(),
        });
        assert_eq!(count, 1);
    }
}
