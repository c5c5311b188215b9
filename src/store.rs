//! In-memory consultation store.
//!
//! Append-only for the lifetime of the process; nothing reads the records
//! back out today (they exist for a future administrative view), so the
//! public surface is deliberately just [`ConsultationStore::append`] and a
//! size accessor.

use std::sync::{Mutex, PoisonError};

use chrono::Local;

use crate::forms::ConsultationSubmission;
use crate::models::Consultation;

/// Insertion-ordered, mutex-guarded collection of accepted submissions.
///
/// The id is computed as `len + 1` and the push happens inside the same
/// critical section, so ids are unique and strictly increasing even when the
/// runtime dispatches requests across worker threads.
#[derive(Debug, Default)]
pub struct ConsultationStore {
    records: Mutex<Vec<Consultation>>,
}

impl ConsultationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an accepted submission, stamping it with the next id and the
    /// current wall-clock time. Returns the assigned id.
    pub fn append(&self, submission: ConsultationSubmission) -> u64 {
        let mut records = self.records.lock().unwrap_or_else(PoisonError::into_inner);
        let id = records.len() as u64 + 1;
        records.push(Consultation {
            id,
            name: submission.name,
            email: submission.email,
            age: submission.age,
            category: submission.category,
            message: submission.message,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        });
        id
    }

    pub fn len(&self) -> usize {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[cfg(test)]
    pub fn snapshot(&self) -> Vec<Consultation> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
