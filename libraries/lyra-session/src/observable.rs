//! Single-writer observable value cells
//!
//! Each cell holds at most one current value and a set of subscriber
//! channels. Publishing stores the value and fans it out; subscribing
//! replays the current value so a late subscriber still learns the present
//! state. A cell starts unset and delivers nothing until the first publish.
//! A [`Watch`] is the read-only face of a cell: same state, no publish.

use crossbeam_channel::{unbounded, Receiver, Sender};
use std::sync::{Arc, Mutex};

struct Inner<T> {
    /// Latest published value, `None` until the first publish
    value: Option<T>,
    /// Live subscriber senders, pruned when a receiver is dropped
    subscribers: Vec<Sender<T>>,
}

/// A subscribable holder of a value.
///
/// Clones share the same underlying cell. A component keeps the writable
/// cell private and hands consumers a [`Watch`], the read-only face of the
/// same state. Delivery channels are unbounded; `publish` never blocks.
pub struct Observable<T> {
    inner: Arc<Mutex<Inner<T>>>,
}

impl<T: Clone> Observable<T> {
    /// Create an empty cell with no value and no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                value: None,
                subscribers: Vec::new(),
            })),
        }
    }

    /// Latest published value, or `None` while the cell is unset.
    #[must_use]
    pub fn get(&self) -> Option<T> {
        self.inner.lock().unwrap().value.clone()
    }

    /// Register a subscriber and return its receiving channel.
    ///
    /// If the cell already holds a value it is replayed into the channel
    /// immediately. Dropping the receiver unsubscribes; the dead sender is
    /// pruned on the next publish.
    pub fn subscribe(&self) -> Receiver<T> {
        let (tx, rx) = unbounded::<T>();
        let mut inner = self.inner.lock().unwrap();
        if let Some(value) = &inner.value {
            // The paired receiver is still in scope, so this cannot fail.
            let _ = tx.send(value.clone());
        }
        inner.subscribers.push(tx);
        rx
    }

    /// Store `value` and deliver it to every live subscriber.
    pub fn publish(&self, value: T) {
        let mut inner = self.inner.lock().unwrap();
        inner
            .subscribers
            .retain(|tx| tx.send(value.clone()).is_ok());
        inner.value = Some(value);
    }

    /// Number of live subscribers as of the last publish.
    ///
    /// Dropped receivers are only detected while publishing, so the count
    /// may briefly include subscribers that are already gone.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.lock().unwrap().subscribers.len()
    }

    /// Read-only handle sharing this cell's state.
    #[must_use]
    pub fn watch(&self) -> Watch<T> {
        Watch { cell: self.clone() }
    }
}

impl<T: Clone> Default for Observable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

/// Read-only handle onto an [`Observable`] cell.
///
/// Shares the cell's state but exposes only the reading half. Consumers
/// can inspect and subscribe; publishing stays with whoever owns the
/// [`Observable`] itself.
pub struct Watch<T> {
    cell: Observable<T>,
}

impl<T: Clone> Watch<T> {
    /// Latest published value, or `None` while the cell is unset.
    #[must_use]
    pub fn get(&self) -> Option<T> {
        self.cell.get()
    }

    /// Register a subscriber and return its receiving channel.
    ///
    /// Replay and pruning behave exactly as in [`Observable::subscribe`].
    pub fn subscribe(&self) -> Receiver<T> {
        self.cell.subscribe()
    }
}

impl<T> Clone for Watch<T> {
    fn clone(&self) -> Self {
        Self {
            cell: self.cell.clone(),
        }
    }
}
