//! Users collection container.
//!
//! Holds the ordered list of team members. All actions record failures
//! in the slice only; callers watch the `error` field rather than a
//! return value. Merge rules: add appends, edit replaces the record with
//! the matching id, remove drops it. An edit or remove whose id matches
//! nothing leaves the collection untouched.

use std::sync::Arc;

use crate::api::{ApiClient, UserPatch, UserRecord};
use crate::store::SliceCell;

const LOAD_FALLBACK: &str = "Unable to load users";
const ADD_FALLBACK: &str = "Unable to add the user";
const EDIT_FALLBACK: &str = "Unable to update the user";
const REMOVE_FALLBACK: &str = "Unable to remove the user";

/// The users slice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsersSlice {
    /// Insertion-ordered collection of team members.
    pub users: Vec<UserRecord>,
    pub loading: bool,
    pub error: Option<String>,
}

/// State container for the team-member collection.
#[derive(Clone)]
pub struct UsersStore {
    api: Arc<ApiClient>,
    cell: SliceCell<UsersSlice>,
}

impl UsersStore {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            api,
            cell: SliceCell::new(UsersSlice::default()),
        }
    }

    /// Current slice, for rendering.
    pub fn snapshot(&self) -> UsersSlice {
        self.cell.snapshot()
    }

    /// Drop all collection state. Intended for test isolation.
    pub fn reset(&self) {
        self.cell.replace(UsersSlice::default());
    }

    fn begin(&self) -> u64 {
        self.cell.begin(|slice| {
            slice.loading = true;
            slice.error = None;
        })
    }

    fn fail(&self, generation: u64, err: &crate::api::ApiError, fallback: &str) {
        let message = err.message_or(fallback);
        tracing::warn!(kind = err.kind.as_str(), "users action failed");
        self.cell.settle(generation, |slice| {
            slice.loading = false;
            slice.error = Some(message);
        });
    }

    /// Fetch the full collection, replacing the current one.
    pub async fn load(&self) {
        let generation = self.begin();
        match self.api.list_users().await {
            Ok(users) => {
                self.cell.settle(generation, |slice| {
                    slice.loading = false;
                    slice.users = users;
                });
            }
            Err(err) => self.fail(generation, &err, LOAD_FALLBACK),
        }
    }

    /// Create a user; the new record is appended at the end.
    pub async fn add(&self, name: &str, email: &str, password: &str) {
        let generation = self.begin();
        match self.api.create_user(name, email, password).await {
            Ok(record) => {
                self.cell.settle(generation, |slice| {
                    slice.loading = false;
                    slice.users.push(record);
                });
            }
            Err(err) => self.fail(generation, &err, ADD_FALLBACK),
        }
    }

    /// Apply a partial update; the returned record replaces the one
    /// with the matching id.
    pub async fn edit(&self, id: i64, patch: UserPatch) {
        let generation = self.begin();
        match self.api.update_user(id, &patch).await {
            Ok(record) => {
                self.cell.settle(generation, |slice| {
                    slice.loading = false;
                    replace_matching(&mut slice.users, record);
                });
            }
            Err(err) => self.fail(generation, &err, EDIT_FALLBACK),
        }
    }

    /// Delete a user and drop its record from the collection.
    pub async fn remove(&self, id: i64) {
        let generation = self.begin();
        match self.api.delete_user(id).await {
            Ok(()) => {
                self.cell.settle(generation, |slice| {
                    slice.loading = false;
                    remove_matching(&mut slice.users, id);
                });
            }
            Err(err) => self.fail(generation, &err, REMOVE_FALLBACK),
        }
    }
}

fn replace_matching(users: &mut [UserRecord], record: UserRecord) {
    if let Some(slot) = users.iter_mut().find(|user| user.id == record.id) {
        *slot = record;
    }
}

fn remove_matching(users: &mut Vec<UserRecord>, id: i64) {
    users.retain(|user| user.id != id);
}
