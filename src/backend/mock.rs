//! In-memory backend for dev mode and tests.
//!
//! Behaves like the hosted service without the network: sessions are a
//! flag, expenses live in a per-user map, and failures can be injected
//! to exercise the app's error paths.

use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use super::{validate_description, AuthGateway, BackendError, ExpenseRepository};
use crate::models::{Expense, ExpensePatch};

/// Test double implementing both backend traits.
pub struct MemoryBackend {
    uid: String,
    signed_in: Mutex<Option<String>>,
    expenses: Mutex<HashMap<String, BTreeMap<String, Expense>>>,
    refuse_sign_in: AtomicBool,
    reject_writes: AtomicBool,
}

impl MemoryBackend {
    /// Backend whose sign-in always yields `uid`.
    pub fn new(uid: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            signed_in: Mutex::new(None),
            expenses: Mutex::new(HashMap::new()),
            refuse_sign_in: AtomicBool::new(false),
            reject_writes: AtomicBool::new(false),
        }
    }

    /// Backend that already has a live session for `uid`.
    pub fn signed_in(uid: impl Into<String>) -> Self {
        let uid = uid.into();
        let backend = Self::new(uid.clone());
        *backend.signed_in.lock().unwrap() = Some(uid);
        backend
    }

    /// Make subsequent sign-in attempts fail, as a cancelled popup would.
    pub fn refuse_sign_in(&self, refuse: bool) {
        self.refuse_sign_in.store(refuse, Ordering::SeqCst);
    }

    /// Make subsequent writes fail with a rejection.
    pub fn reject_writes(&self, reject: bool) {
        self.reject_writes.store(reject, Ordering::SeqCst);
    }

    /// Seed stored expenses for `uid`.
    pub fn seed(&self, uid: &str, expenses: Vec<Expense>) {
        let mut store = self.expenses.lock().unwrap();
        let user = store.entry(uid.to_string()).or_default();
        for expense in expenses {
            user.insert(expense.id.clone(), expense);
        }
    }

    /// Snapshot of what is stored for `uid`, id-ordered.
    pub fn stored(&self, uid: &str) -> Vec<Expense> {
        self.expenses
            .lock()
            .unwrap()
            .get(uid)
            .map(|user| user.values().cloned().collect())
            .unwrap_or_default()
    }

    fn check_writable(&self) -> Result<(), BackendError> {
        if self.reject_writes.load(Ordering::SeqCst) {
            return Err(BackendError::Rejected {
                status: 403,
                message: "write rejected".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl AuthGateway for MemoryBackend {
    async fn current_user(&self) -> Result<Option<String>, BackendError> {
        Ok(self.signed_in.lock().unwrap().clone())
    }

    async fn sign_in(&self) -> Result<String, BackendError> {
        if self.refuse_sign_in.load(Ordering::SeqCst) {
            return Err(BackendError::SignInRefused);
        }
        *self.signed_in.lock().unwrap() = Some(self.uid.clone());
        Ok(self.uid.clone())
    }

    async fn sign_out(&self) -> Result<(), BackendError> {
        *self.signed_in.lock().unwrap() = None;
        Ok(())
    }
}

#[async_trait]
impl ExpenseRepository for MemoryBackend {
    async fn fetch_expenses(&self, uid: &str) -> Result<Vec<Expense>, BackendError> {
        Ok(self.stored(uid))
    }

    async fn create_expense(&self, uid: &str, expense: &Expense) -> Result<(), BackendError> {
        self.check_writable()?;
        validate_description(&expense.description)?;
        self.expenses
            .lock()
            .unwrap()
            .entry(uid.to_string())
            .or_default()
            .insert(expense.id.clone(), expense.clone());
        Ok(())
    }

    async fn update_expense(
        &self,
        uid: &str,
        id: &str,
        updates: &ExpensePatch,
    ) -> Result<(), BackendError> {
        self.check_writable()?;
        if let Some(description) = &updates.description {
            validate_description(description)?;
        }
        let mut store = self.expenses.lock().unwrap();
        if let Some(expense) = store.entry(uid.to_string()).or_default().get_mut(id) {
            *expense = updates.overlay(expense);
        }
        Ok(())
    }

    async fn delete_expense(&self, uid: &str, id: &str) -> Result<(), BackendError> {
        self.check_writable()?;
        self.expenses
            .lock()
            .unwrap()
            .entry(uid.to_string())
            .or_default()
            .remove(id);
        Ok(())
    }
}
