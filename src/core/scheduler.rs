//! Tick scheduling seam for the rotation decay loop.
//!
//! The decay loop never calls the display clock directly. It asks a
//! [`TickScheduler`] for the next tick and gets back a handle it can cancel.
//! The host delivers due handles back to the loop, which ignores any handle
//! it no longer owns.

/// Opaque identifier for one scheduled tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TickHandle(u64);

impl TickHandle {
    #[inline]
    pub fn id(&self) -> u64 {
        self.0
    }
}

pub trait TickScheduler {
    /// Request one tick at the next opportunity.
    fn schedule_tick(&mut self) -> TickHandle;
    /// Withdraw a previously scheduled tick. Unknown handles are ignored.
    fn cancel(&mut self, handle: TickHandle);
}

/// Scheduler drained once per animation frame.
///
/// In the browser the requestAnimationFrame loop calls [`FrameScheduler::take_due`]
/// every frame; tests call it directly as a virtual clock.
#[derive(Debug, Default)]
pub struct FrameScheduler {
    next_id: u64,
    pending: Vec<TickHandle>,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handles due this frame, in scheduling order. Ticks scheduled while the
    /// caller processes these land in the next frame.
    pub fn take_due(&mut self) -> Vec<TickHandle> {
        std::mem::take(&mut self.pending)
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }
}

impl TickScheduler for FrameScheduler {
    fn schedule_tick(&mut self) -> TickHandle {
        self.next_id += 1;
        let handle = TickHandle(self.next_id);
        self.pending.push(handle);
        handle
    }

    fn cancel(&mut self, handle: TickHandle) {
        self.pending.retain(|h| *h != handle);
    }
}
