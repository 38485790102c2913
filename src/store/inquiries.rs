//! Contact inquiry log

use snowflaked::Generator;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::models::inquiry::InquiryRecord;

/// Append-only inquiry log with monotonically increasing ids
#[derive(Clone)]
pub struct InquiryLog {
    inner: Arc<Mutex<Inner>>,
}

struct Inner {
    records: Vec<InquiryRecord>,
    generator: Generator,
}

impl InquiryLog {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                records: Vec::new(),
                generator: Generator::new(0),
            })),
        }
    }

    /// Next inquiry id; snowflake ids are strictly increasing
    pub fn next_id(&self) -> u64 {
        self.lock().generator.generate()
    }

    pub fn append(&self, record: InquiryRecord) {
        self.lock().records.push(record);
    }

    pub fn len(&self) -> usize {
        self.lock().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().records.is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for InquiryLog {
    fn default() -> Self {
        Self::new()
    }
}
