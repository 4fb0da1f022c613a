//! Latest-result slot for plans computed off the UI thread.
//!
//! Each request takes a [`Ticket`]. A worker publishes its plan with the
//! ticket it was issued; anything but the newest ticket is dropped, so a slow
//! computation for an old magnitude never overwrites a newer one.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard};

use crate::layout::RenderPlan;

/// Generation stamp for one plan request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

impl Ticket {
    #[inline]
    pub fn generation(self) -> u64 {
        self.0
    }
}

/// Holds the newest published plan. Shareable across threads via `Arc`.
#[derive(Debug, Default)]
pub struct LatestPlan {
    issued: AtomicU64,
    slot: Mutex<Option<(u64, RenderPlan)>>,
}

impl LatestPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request. Invalidates every earlier ticket.
    pub fn issue(&self) -> Ticket {
        Ticket(self.issued.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// True if no newer ticket has been issued since `ticket`.
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.issued.load(Ordering::SeqCst) == ticket.0
    }

    /// Store `plan` if `ticket` is still the newest. Returns whether it was kept.
    pub fn publish(&self, ticket: Ticket, plan: RenderPlan) -> bool {
        let mut slot = self.lock();
        // Checked under the lock so a stale publish can't race a fresh one.
        if !self.is_current(ticket) {
            log::trace!("dropping stale plan #{}", ticket.0);
            return false;
        }
        *slot = Some((ticket.0, plan));
        true
    }

    /// Take the published plan, if no newer ticket has been issued since.
    ///
    /// A plan superseded after it was published is dropped, not returned.
    pub fn take(&self) -> Option<RenderPlan> {
        let (generation, plan) = self.lock().take()?;
        if generation != self.issued.load(Ordering::SeqCst) {
            log::trace!("discarding superseded plan #{generation}");
            return None;
        }
        Some(plan)
    }

    fn lock(&self) -> MutexGuard<'_, Option<(u64, RenderPlan)>> {
        self.slot.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::compute_render_plan;
    use num_bigint::BigUint;
    use std::sync::Arc;
    use std::thread;

    fn plan_for(value: u32) -> RenderPlan {
        compute_render_plan(&BigUint::from(value), 100.0, 100.0)
    }

    #[test]
    fn test_newest_ticket_wins() {
        let latest = LatestPlan::new();
        let old = latest.issue();
        let new = latest.issue();
        assert!(new > old);

        assert!(latest.publish(new, plan_for(7)));
        assert!(!latest.publish(old, plan_for(3)));
        assert_eq!(latest.take().map(|p| p.total_instances), Some(7));
        assert!(latest.take().is_none());
    }

    #[test]
    fn test_plan_superseded_after_publish_is_not_taken() {
        let latest = LatestPlan::new();
        let first = latest.issue();
        assert!(latest.publish(first, plan_for(5)));

        let _second = latest.issue();
        assert!(latest.take().is_none());
        // Dropped, not kept around for a later take.
        assert!(latest.take().is_none());
    }

    #[test]
    fn test_stale_publish_from_worker_is_dropped() {
        let latest = Arc::new(LatestPlan::new());
        let stale = latest.issue();

        let worker = {
            let latest = Arc::clone(&latest);
            thread::spawn(move || {
                let plan = plan_for(5);
                latest.publish(stale, plan)
            })
        };
        let fresh = latest.issue();
        assert!(!worker.join().unwrap());

        assert!(latest.publish(fresh, plan_for(9)));
        assert_eq!(latest.take().map(|p| p.total_instances), Some(9));
    }
}
