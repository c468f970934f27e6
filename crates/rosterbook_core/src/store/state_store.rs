//! Single writable source of truth for the application snapshot.
//!
//! # Responsibility
//! - Hold the current `AppState` and apply shallow-merge mutations.
//! - Persist every mutation to the durable slot and notify subscribers.
//! - Rehydrate from the slot at startup, seeding demo data on first run.
//!
//! # Invariants
//! - Mutation order is: replace snapshot, persist, notify. Subscribers
//!   never observe a snapshot that was not already offered to storage.
//! - All operations are synchronous; there is no suspension point inside
//!   any of them. At-most-one-writer is structural (`&mut self`).
//! - `update_employee` always exits edit mode; `delete_employee` clears
//!   the edit target when it references the deleted id.

use crate::model::employee::{Employee, EmployeeId};
use crate::model::state::{seed_roster, AppState, StatePatch};
use crate::repo::state_repo::{RepoError, StateRepository};
use log::{error, info, warn};

/// Stable token identifying one subscriber registration.
pub type SubscriberId = u64;

struct Subscriber {
    id: SubscriberId,
    callback: Box<dyn FnMut(&AppState)>,
}

/// The state store. Constructed once by the composition root and passed
/// by reference to whichever collaborators need it; there is no hidden
/// process-wide instance.
pub struct Store<R: StateRepository> {
    repo: R,
    state: AppState,
    subscribers: Vec<Subscriber>,
    next_subscriber_id: SubscriberId,
}

impl<R: StateRepository> Store<R> {
    /// Creates a store over the given repository with the empty default
    /// snapshot. Call [`Store::load_state`] to rehydrate from storage.
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            state: AppState::default(),
            subscribers: Vec::new(),
            next_subscriber_id: 1,
        }
    }

    /// Returns a copy of the current snapshot.
    ///
    /// Value semantics: mutating the returned snapshot never affects the
    /// store. Callers that need to react to future changes must use
    /// [`Store::subscribe`], not re-poll.
    pub fn state(&self) -> AppState {
        self.state.clone()
    }

    /// Shallow-merges the patch into the current snapshot, persists the
    /// result and notifies all subscribers.
    ///
    /// No validation is performed here; validating a draft before
    /// submission is the caller's responsibility.
    pub fn set_state(&mut self, patch: StatePatch) {
        let next = self.state.merged(patch);
        self.install(next);
    }

    /// Registers a callback invoked synchronously on every future
    /// mutation, and once immediately with the current snapshot.
    ///
    /// Returns a token accepted by [`Store::unsubscribe`].
    pub fn subscribe(&mut self, callback: impl FnMut(&AppState) + 'static) -> SubscriberId {
        let id = self.next_subscriber_id;
        self.next_subscriber_id += 1;

        let mut callback = Box::new(callback);
        callback(&self.state);
        self.subscribers.push(Subscriber { id, callback });
        id
    }

    /// Deregisters a subscriber. Unknown or already-removed tokens are
    /// ignored, so double-unsubscribe is a no-op.
    pub fn unsubscribe(&mut self, id: SubscriberId) {
        self.subscribers.retain(|subscriber| subscriber.id != id);
    }

    /// Rehydrates the snapshot from the durable slot.
    ///
    /// - Slot present and well-shaped: adopt it and notify.
    /// - Slot absent: install the fixed seed roster and persist it.
    /// - Slot malformed: log a warning and keep the default snapshot.
    /// - Read failure: log, keep the default snapshot, record the error.
    pub fn load_state(&mut self) {
        match self.repo.load() {
            Ok(Some(snapshot)) => {
                info!(
                    "event=state_load module=store status=ok employees={}",
                    snapshot.employees.len()
                );
                self.state = snapshot;
                self.notify();
            }
            Ok(None) => {
                info!("event=state_load module=store status=seeded");
                let next = AppState {
                    employees: seed_roster(),
                    ..AppState::default()
                };
                self.install(next);
            }
            Err(RepoError::MalformedSnapshot(err)) => {
                warn!(
                    "event=state_load module=store status=malformed error={}",
                    err
                );
            }
            Err(err) => {
                error!(
                    "event=state_load module=store status=error error_code=state_read_failed error={}",
                    err
                );
                self.state.error = Some(format!("failed to load state: {err}"));
                self.notify();
            }
        }
    }

    /// Replaces the snapshot with the empty default, persists, notifies.
    pub fn reset(&mut self) {
        info!("event=state_reset module=store status=ok");
        self.install(AppState::default());
    }

    /// Replaces the roster wholesale.
    pub fn set_employees(&mut self, employees: Vec<Employee>) {
        self.set_state(StatePatch {
            employees: Some(employees),
            ..StatePatch::default()
        });
    }

    /// Sets or clears the record loaded into the edit form.
    pub fn set_editing_employee(&mut self, employee: Option<Employee>) {
        self.set_state(StatePatch {
            editing_employee: Some(employee),
            ..StatePatch::default()
        });
    }

    /// Appends a record to the end of the roster.
    ///
    /// Uniqueness is a validation-layer concern; this operation does not
    /// check it.
    pub fn add_employee(&mut self, employee: Employee) {
        let mut employees = self.state.employees.clone();
        employees.push(employee);
        self.set_state(StatePatch {
            employees: Some(employees),
            ..StatePatch::default()
        });
    }

    /// Replaces the roster entry whose id matches, leaving order and all
    /// other entries unchanged, and exits edit mode.
    pub fn update_employee(&mut self, updated: Employee) {
        let employees = self
            .state
            .employees
            .iter()
            .map(|employee| {
                if employee.id == updated.id {
                    updated.clone()
                } else {
                    employee.clone()
                }
            })
            .collect();
        self.set_state(StatePatch {
            employees: Some(employees),
            editing_employee: Some(None),
            ..StatePatch::default()
        });
    }

    /// Removes the entry with the given id; unknown ids are ignored.
    ///
    /// Also clears the edit target when it references the deleted id, so
    /// a stale edit form can never point at a removed record.
    pub fn delete_employee(&mut self, id: &EmployeeId) {
        let employees = self
            .state
            .employees
            .iter()
            .filter(|employee| &employee.id != id)
            .cloned()
            .collect();

        let mut patch = StatePatch {
            employees: Some(employees),
            ..StatePatch::default()
        };
        if self
            .state
            .editing_employee
            .as_ref()
            .is_some_and(|editing| &editing.id == id)
        {
            patch.editing_employee = Some(None);
        }
        self.set_state(patch);
    }

    fn install(&mut self, next: AppState) {
        self.state = next;
        self.persist();
        self.notify();
    }

    fn persist(&mut self) {
        if let Err(err) = self.repo.save(&self.state) {
            error!(
                "event=state_persist module=store status=error error_code=state_write_failed error={}",
                err
            );
            // In-memory state stays authoritative for the session.
            self.state.error = Some(format!("failed to persist state: {err}"));
        }
    }

    fn notify(&mut self) {
        for subscriber in &mut self.subscribers {
            (subscriber.callback)(&self.state);
        }
    }
}
