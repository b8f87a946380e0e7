//! Session store
//!
//! Holds zero-or-one authenticated user (token plus user record) and pushes
//! every change to registered listeners. `save` is called by a successful
//! password auth, `clear` by logout and by the client when the server
//! answers 401 (expired token). Clearing is synchronous and performs no
//! network call.

use std::sync::{Arc, Mutex};

use crate::pocketbase::records::UserRecord;

/// Handle returned by [`AuthStore::on_change`]; pass it back to
/// [`AuthStore::unsubscribe`] on teardown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn Fn(Option<&str>, Option<&UserRecord>) + Send>;

#[derive(Default)]
struct State {
    token: Option<String>,
    record: Option<UserRecord>,
}

/// Shared session store. Cheap to clone; all clones observe the same session.
#[derive(Clone, Default)]
pub struct AuthStore {
    state: Arc<Mutex<State>>,
    listeners: Arc<Mutex<Vec<(u64, Listener)>>>,
    next_id: Arc<Mutex<u64>>,
}

impl AuthStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current token, if a session exists.
    pub fn token(&self) -> Option<String> {
        self.state.lock().expect("auth store poisoned").token.clone()
    }

    /// Current user record, if a session exists.
    pub fn record(&self) -> Option<UserRecord> {
        self.state.lock().expect("auth store poisoned").record.clone()
    }

    /// Whether a session is present.
    pub fn is_valid(&self) -> bool {
        self.state.lock().expect("auth store poisoned").token.is_some()
    }

    /// Store a new session and notify listeners.
    pub fn save(&self, token: String, record: UserRecord) {
        {
            let mut state = self.state.lock().expect("auth store poisoned");
            state.token = Some(token);
            state.record = Some(record);
        }
        self.notify();
    }

    /// Drop the session and notify listeners. No network call.
    pub fn clear(&self) {
        {
            let mut state = self.state.lock().expect("auth store poisoned");
            state.token = None;
            state.record = None;
        }
        self.notify();
    }

    /// Register a change listener. The callback receives the new token and
    /// user record (both `None` after a clear).
    pub fn on_change<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(Option<&str>, Option<&UserRecord>) + Send + 'static,
    {
        let mut next = self.next_id.lock().expect("auth store poisoned");
        let id = *next;
        *next += 1;
        self.listeners
            .lock()
            .expect("auth store poisoned")
            .push((id, Box::new(callback)));
        SubscriptionId(id)
    }

    /// Remove a previously registered listener.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.listeners
            .lock()
            .expect("auth store poisoned")
            .retain(|(lid, _)| *lid != id.0);
    }

    fn notify(&self) {
        // Snapshot first so listeners can read the store without deadlocking.
        let (token, record) = {
            let state = self.state.lock().expect("auth store poisoned");
            (state.token.clone(), state.record.clone())
        };
        let listeners = self.listeners.lock().expect("auth store poisoned");
        for (_, listener) in listeners.iter() {
            listener(token.as_deref(), record.as_ref());
        }
    }
}
