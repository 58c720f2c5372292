use std::sync::{Arc, Mutex, MutexGuard};

use crate::models::User;

// Process-lifetime user store. The whole state is one ordered list of users;
// every request takes the mutex once and runs its guard chain plus handler
// under that single lock, so mutations never interleave mid-request.
pub struct TodoStore {
    users: Arc<Mutex<Vec<User>>>,
}

impl TodoStore {
    pub fn new() -> Self {
        Self {
            users: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn lock(&self) -> MutexGuard<'_, Vec<User>> {
        self.users.lock().expect("user store mutex poisoned")
    }
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for TodoStore {
    fn clone(&self) -> Self {
        Self {
            users: self.users.clone(),
        }
    }
}
