//! Dataset session store — holds the current dataset between an ingest
//! step and an analyze step.
//!
//! The store never hands out mutable access: analyses receive an
//! `Arc<TimeSeries>` snapshot, so replacing the dataset mid-flight cannot
//! affect a run that already started. Uploads replace the dataset
//! wholesale.

use std::sync::{Arc, RwLock};

use streaklab_core::domain::TimeSeries;

/// Shared slot for the current dataset.
#[derive(Debug, Default)]
pub struct DatasetStore {
    current: RwLock<Option<Arc<TimeSeries>>>,
}

impl DatasetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current dataset wholesale and return its snapshot.
    pub fn replace(&self, series: TimeSeries) -> Arc<TimeSeries> {
        let snapshot = Arc::new(series);
        let mut slot = self.current.write().expect("dataset store lock poisoned");
        *slot = Some(Arc::clone(&snapshot));
        snapshot
    }

    /// Immutable snapshot of the current dataset, if one is loaded.
    pub fn snapshot(&self) -> Option<Arc<TimeSeries>> {
        self.current
            .read()
            .expect("dataset store lock poisoned")
            .clone()
    }

    /// Drop the current dataset.
    pub fn clear(&self) {
        let mut slot = self.current.write().expect("dataset store lock poisoned");
        *slot = None;
    }

    pub fn is_loaded(&self) -> bool {
        self.current
            .read()
            .expect("dataset store lock poisoned")
            .is_some()
    }
}
