use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Mutex, RwLock};
use tokio::time::Instant;
use uuid::Uuid;

struct Entry<T> {
    session: Arc<Mutex<T>>,
    created: Instant,
}

/// In-memory, id-keyed store of independently locked sessions.
///
/// The map lock is only held to look entries up; each session has its own mutex,
/// so a slow operation on one session never blocks another.
pub struct SessionStore<T> {
    sessions: RwLock<HashMap<Uuid, Entry<T>>>,
}

impl<T> Default for SessionStore<T> {
    fn default() -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
        }
    }
}

impl<T> SessionStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, id: Uuid, session: T) -> Arc<Mutex<T>> {
        let session = Arc::new(Mutex::new(session));
        let entry = Entry {
            session: session.clone(),
            created: Instant::now(),
        };
        self.sessions.write().await.insert(id, entry);
        session
    }

    pub async fn get(&self, id: Uuid) -> Option<Arc<Mutex<T>>> {
        self.sessions
            .read()
            .await
            .get(&id)
            .map(|entry| entry.session.clone())
    }

    pub async fn remove(&self, id: Uuid) -> Option<Arc<Mutex<T>>> {
        self.sessions
            .write()
            .await
            .remove(&id)
            .map(|entry| entry.session)
    }

    /// Removes every session created more than `max_age` ago and hands them back
    /// so the caller can wind down any work they still own.
    pub async fn prune_older_than(&self, max_age: Duration) -> Vec<Arc<Mutex<T>>> {
        let mut sessions = self.sessions.write().await;
        let expired: Vec<Uuid> = sessions
            .iter()
            .filter(|(_, entry)| entry.created.elapsed() > max_age)
            .map(|(id, _)| *id)
            .collect();

        expired
            .into_iter()
            .filter_map(|id| sessions.remove(&id))
            .map(|entry| entry.session)
            .collect()
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
