use std::sync::Arc;
use std::sync::Mutex;
use std::sync::PoisonError;
use std::sync::Weak;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;

/// A stop handle for the calls running on one simulator.
///
/// Every call takes its own [`Ticket`] when it starts. `cancel` trips the
/// tickets of calls already in flight and nothing else, so a cancel that
/// lands after a call finished, or while the simulator sits idle, never
/// reaches the next call. Clones share the same set of tickets.
#[derive(Debug, Default, Clone)]
pub struct Canceller(Arc<Mutex<Vec<Weak<AtomicBool>>>>);

impl Canceller {
    /// stop every call in flight
    pub fn cancel(&self) {
        let live = self.live();
        log::debug!("{:<32}{:<32}", "cancelling calls in flight", live.len());
        live.iter().for_each(|flag| flag.store(true, Ordering::Relaxed));
    }
    /// how many calls this handle would stop right now
    pub fn in_flight(&self) -> usize {
        self.live().len()
    }

    /// register a new call. it stays reachable until the ticket drops.
    pub(crate) fn ticket(&self) -> Ticket {
        let flag = Arc::new(AtomicBool::new(false));
        let mut tickets = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        tickets.retain(|weak| weak.strong_count() > 0);
        tickets.push(Arc::downgrade(&flag));
        Ticket(flag)
    }

    fn live(&self) -> Vec<Arc<AtomicBool>> {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter_map(Weak::upgrade)
            .collect()
    }
}

/// The stop flag of a single call, polled by its workers between trials.
#[derive(Debug)]
pub(crate) struct Ticket(Arc<AtomicBool>);

impl Ticket {
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}
