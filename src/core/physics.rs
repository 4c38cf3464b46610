use super::scheduler::{TickHandle, TickScheduler};
use glam::Vec2;

/// Angular velocity of the free-rotating tree and the decay loop that bleeds
/// it off once the user lets go.
///
/// There is one velocity value. Callers publish it after any method that
/// reports a change; nothing else keeps a copy.
#[derive(Clone, Debug)]
pub struct RotationPhysics {
    velocity: Vec2,
    dragging: bool,
    pending: Option<TickHandle>,
    decay: f32,
    epsilon: f32,
}

impl RotationPhysics {
    pub fn new(decay: f32, epsilon: f32) -> Self {
        Self {
            velocity: Vec2::ZERO,
            dragging: false,
            pending: None,
            decay,
            epsilon,
        }
    }

    #[inline]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// True while a decay tick is outstanding.
    #[inline]
    pub fn is_decaying(&self) -> bool {
        self.pending.is_some()
    }

    fn cancel_pending<S: TickScheduler + ?Sized>(&mut self, sched: &mut S) {
        if let Some(h) = self.pending.take() {
            sched.cancel(h);
        }
    }

    pub fn begin_drag<S: TickScheduler + ?Sized>(&mut self, sched: &mut S) {
        self.dragging = true;
        self.cancel_pending(sched);
    }

    /// Leaves drag mode and restarts the decay loop from the current velocity.
    pub fn end_drag<S: TickScheduler + ?Sized>(&mut self, sched: &mut S) {
        self.dragging = false;
        self.cancel_pending(sched);
        self.pending = Some(sched.schedule_tick());
    }

    /// Overwrites the velocity with a drag delta already scaled to radians.
    pub fn set_from_drag(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    /// Overwrites the horizontal component only. Outside a drag the decay loop
    /// is started if it is not already running.
    pub fn inject_x<S: TickScheduler + ?Sized>(&mut self, x: f32, sched: &mut S) {
        self.velocity.x = x;
        if !self.dragging && self.pending.is_none() {
            self.pending = Some(sched.schedule_tick());
        }
    }

    /// Halts rotation outright. The only path that sets the velocity to zero.
    pub fn stop<S: TickScheduler + ?Sized>(&mut self, sched: &mut S) {
        self.cancel_pending(sched);
        self.velocity = Vec2::ZERO;
    }

    /// Runs one decay step for `handle`. Returns false (and does nothing) if
    /// the handle was cancelled or superseded.
    pub fn on_tick<S: TickScheduler + ?Sized>(
        &mut self,
        handle: TickHandle,
        sched: &mut S,
    ) -> bool {
        if self.dragging || self.pending != Some(handle) {
            return false;
        }
        self.pending = None;
        self.velocity *= self.decay;
        if self.velocity.x.abs() > self.epsilon || self.velocity.y.abs() > self.epsilon {
            self.pending = Some(sched.schedule_tick());
        }
        true
    }
}
