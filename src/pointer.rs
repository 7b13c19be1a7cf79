//! Mouse position tracking coalesced to the display's frame cadence.
//!
//! Raw `mousemove` events only fill a pending slot; the slot is drained once
//! per animation frame, so the rendered cursor never updates more often than
//! the screen refreshes.

/// Side of the square cursor ring, in CSS pixels.
pub const CURSOR_SIZE: f64 = 32.0;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Top-left corner that centres the cursor ring on this position.
    pub fn cursor_origin(self) -> Self {
        let half = CURSOR_SIZE / 2.0;
        Self::new(self.x - half, self.y - half)
    }
}

/// What the caller has to do after recording a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameRequest {
    /// No frame is outstanding; request one.
    Schedule,
    /// A frame is already outstanding and will pick up the new position.
    Pending,
    /// The tracker was detached; ignore the event.
    Detached,
}

#[derive(Debug)]
pub struct FrameCoalescer {
    pending: Option<PointerPosition>,
    applied: PointerPosition,
    frame_requested: bool,
    attached: bool,
}

impl Default for FrameCoalescer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameCoalescer {
    pub fn new() -> Self {
        Self {
            pending: None,
            applied: PointerPosition::default(),
            frame_requested: false,
            attached: true,
        }
    }

    pub fn record(&mut self, position: PointerPosition) -> FrameRequest {
        if !self.attached {
            return FrameRequest::Detached;
        }

        self.pending = Some(position);
        if self.frame_requested {
            FrameRequest::Pending
        } else {
            self.frame_requested = true;
            FrameRequest::Schedule
        }
    }

    /// Drains the pending slot on an animation frame. Returns the position to
    /// write, or `None` when nothing changed since the last write.
    pub fn on_frame(&mut self) -> Option<PointerPosition> {
        self.frame_requested = false;
        if !self.attached {
            self.pending = None;
            return None;
        }

        let next = self.pending.take()?;
        if next == self.applied {
            return None;
        }
        self.applied = next;
        Some(next)
    }

    pub fn detach(&mut self) {
        self.attached = false;
        self.pending = None;
        self.frame_requested = false;
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn applied(&self) -> PointerPosition {
        self.applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn burst_within_one_frame_writes_last_position_once() {
        let mut coalescer = FrameCoalescer::new();
        let mut scheduled = 0;

        for (x, y) in [(10.0, 10.0), (15.0, 12.0), (20.0, 20.0)] {
            if coalescer.record(PointerPosition::new(x, y)) == FrameRequest::Schedule {
                scheduled += 1;
            }
        }

        assert_eq!(scheduled, 1);
        assert_eq!(
            coalescer.on_frame(),
            Some(PointerPosition::new(20.0, 20.0))
        );
        assert_eq!(coalescer.on_frame(), None);
    }

    #[test]
    fn each_frame_reschedules_on_next_move() {
        let mut coalescer = FrameCoalescer::new();

        assert_eq!(coalescer.record(PointerPosition::new(1.0, 1.0)), FrameRequest::Schedule);
        assert_eq!(coalescer.record(PointerPosition::new(2.0, 2.0)), FrameRequest::Pending);
        assert_eq!(coalescer.on_frame(), Some(PointerPosition::new(2.0, 2.0)));

        assert_eq!(coalescer.record(PointerPosition::new(3.0, 4.0)), FrameRequest::Schedule);
        assert_eq!(coalescer.on_frame(), Some(PointerPosition::new(3.0, 4.0)));
        assert_eq!(coalescer.applied(), PointerPosition::new(3.0, 4.0));
    }

    #[test]
    fn unchanged_position_is_not_rewritten() {
        let mut coalescer = FrameCoalescer::new();
        coalescer.record(PointerPosition::new(5.0, 5.0));
        assert!(coalescer.on_frame().is_some());

        coalescer.record(PointerPosition::new(5.0, 5.0));
        assert_eq!(coalescer.on_frame(), None);
    }

    #[test]
    fn origin_move_matches_initial_state() {
        let mut coalescer = FrameCoalescer::new();
        coalescer.record(PointerPosition::default());
        assert_eq!(coalescer.on_frame(), None);
    }

    #[test]
    fn no_writes_after_detach() {
        let mut coalescer = FrameCoalescer::new();
        assert_eq!(coalescer.record(PointerPosition::new(8.0, 9.0)), FrameRequest::Schedule);

        coalescer.detach();

        // A frame requested before teardown may still fire.
        assert_eq!(coalescer.on_frame(), None);
        assert_eq!(
            coalescer.record(PointerPosition::new(40.0, 40.0)),
            FrameRequest::Detached
        );
        assert_eq!(coalescer.on_frame(), None);
        assert!(!coalescer.is_attached());
    }

    #[test]
    fn remount_leaves_only_the_new_tracker_live() {
        let mut first = FrameCoalescer::new();
        assert_eq!(first.record(PointerPosition::new(1.0, 2.0)), FrameRequest::Schedule);
        first.detach();

        let mut second = FrameCoalescer::new();
        second.detach();

        let mut third = FrameCoalescer::new();
        let position = PointerPosition::new(30.0, 40.0);

        let live: Vec<FrameRequest> = [&mut first, &mut second, &mut third]
            .into_iter()
            .map(|coalescer| coalescer.record(position))
            .collect();
        assert_eq!(
            live,
            vec![FrameRequest::Detached, FrameRequest::Detached, FrameRequest::Schedule]
        );

        assert_eq!(first.on_frame(), None);
        assert_eq!(second.on_frame(), None);
        assert_eq!(third.on_frame(), Some(position));
    }

    #[test]
    fn cursor_ring_is_centred_on_pointer() {
        let origin = PointerPosition::new(100.0, 50.0).cursor_origin();
        assert_eq!(origin, PointerPosition::new(84.0, 34.0));
    }
}
