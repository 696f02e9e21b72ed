//! Cancellable delayed tasks.
//!
//! Every timer the form uses (input debounce, shake clear, success reset) is a
//! [`TaskKey`] in one [`Scheduler`]. Scheduling a key that is already pending
//! replaces it. Fired timers come back to the owner as [`Ticket`]s on its event
//! channel, and [`Scheduler::accept`] drops tickets that were superseded after
//! they fired but before the owner got to them.

use std::collections::HashMap;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Instant;

/// Identity of a delayed task.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TaskKey {
    /// Silent validation of a field after typing pauses.
    Debounce(String),
    /// End of the invalid-submit shake.
    Shake,
    /// Form reset after the success indicator.
    SuccessReset,
}

/// Notification that a scheduled task's delay elapsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    /// Which task fired.
    pub key: TaskKey,
    generation: u64,
}

struct Slot {
    generation: u64,
    handle: JoinHandle<()>,
}

/// Keyed one-shot timers that report through an mpsc channel.
///
/// Must be used from within a tokio runtime.
pub struct Scheduler<E> {
    tx: mpsc::UnboundedSender<E>,
    slots: HashMap<TaskKey, Slot>,
    next_generation: u64,
}

impl<E> Scheduler<E>
where
    E: From<Ticket> + Send + 'static,
{
    /// Create a scheduler delivering tickets on `tx`.
    pub fn new(tx: mpsc::UnboundedSender<E>) -> Self {
        Self {
            tx,
            slots: HashMap::new(),
            next_generation: 0,
        }
    }

    /// Fire `key` after `delay`, replacing any pending task with the same key.
    pub fn schedule(&mut self, key: TaskKey, delay: Duration) {
        self.cancel(&key);

        self.next_generation += 1;
        let generation = self.next_generation;
        let deadline = Instant::now() + delay;
        let ticket = Ticket {
            key: key.clone(),
            generation,
        };
        let tx = self.tx.clone();

        log::debug!("Scheduled {:?} in {:?}", key, delay);

        let handle = tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            // Receiver dropped = owner is gone.
            let _ = tx.send(E::from(ticket));
        });

        self.slots.insert(key, Slot { generation, handle });
    }

    /// Cancel a pending task. Returns whether one was pending.
    pub fn cancel(&mut self, key: &TaskKey) -> bool {
        match self.slots.remove(key) {
            Some(slot) => {
                slot.handle.abort();
                log::debug!("Cancelled {:?}", key);
                true
            }
            None => false,
        }
    }

    /// Cancel every pending task whose key matches `predicate`.
    pub fn cancel_where(&mut self, predicate: impl Fn(&TaskKey) -> bool) {
        let keys: Vec<TaskKey> = self.slots.keys().filter(|&k| predicate(k)).cloned().collect();
        for key in keys {
            self.cancel(&key);
        }
    }

    /// Claim a fired ticket.
    ///
    /// Returns `false` for tickets of tasks that were cancelled or replaced.
    pub fn accept(&mut self, ticket: &Ticket) -> bool {
        match self.slots.get(&ticket.key) {
            Some(slot) if slot.generation == ticket.generation => {
                self.slots.remove(&ticket.key);
                true
            }
            _ => {
                log::debug!("Dropping stale timer {:?}", ticket.key);
                false
            }
        }
    }

    /// Check if a task is waiting to fire (or fired but unclaimed).
    pub fn is_pending(&self, key: &TaskKey) -> bool {
        self.slots.contains_key(key)
    }

    /// Check if any task is pending.
    pub fn has_pending(&self) -> bool {
        !self.slots.is_empty()
    }
}

impl<E> Drop for Scheduler<E> {
    fn drop(&mut self) {
        for slot in self.slots.values() {
            slot.handle.abort();
        }
    }
}
