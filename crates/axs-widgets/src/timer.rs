//! Cancellable Timers
//!
//! Single-shot timers on a logical millisecond clock. A timer fires at
//! most once; cancellation removes it before expiry. The page advances
//! the clock and collects due actions in deadline order.

use axs_dom::NodeId;

/// Timer handle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerId(u64);

/// What to do when a timer fires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerAction {
    /// Hover dwell expired: dismiss the mega-menu at this index
    MegaMenuDismiss(usize),
    /// Move focus after an open transition settles
    DeferredFocus(NodeId),
    /// Announce the character count for the search box at this index
    SearchCharCount(usize),
    /// Restore the add-to-cart button for the card at this index
    CardFeedbackReset(usize),
}

#[derive(Debug)]
struct Pending {
    id: TimerId,
    due_ms: u64,
    action: TimerAction,
}

/// Pending single-shot timers
#[derive(Debug, Default)]
pub struct TimerQueue {
    next_id: u64,
    pending: Vec<Pending>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule an action `delay_ms` after `now_ms`
    pub fn schedule(&mut self, now_ms: u64, delay_ms: u64, action: TimerAction) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.push(Pending {
            id,
            due_ms: now_ms + delay_ms,
            action,
        });
        id
    }

    /// Cancel a pending timer. Cancelling an already-fired or unknown
    /// timer is a no-op.
    pub fn cancel(&mut self, id: TimerId) {
        self.pending.retain(|p| p.id != id);
    }

    /// Remove and return every action due at `now_ms`, in deadline
    /// order (insertion order breaks ties).
    pub fn advance(&mut self, now_ms: u64) -> Vec<TimerAction> {
        let mut due: Vec<Pending> = Vec::new();
        let mut i = 0;
        while i < self.pending.len() {
            if self.pending[i].due_ms <= now_ms {
                due.push(self.pending.remove(i));
            } else {
                i += 1;
            }
        }
        due.sort_by_key(|p| (p.due_ms, p.id.0));
        due.into_iter().map(|p| p.action).collect()
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}
