//! ObservationScope for automatic begin/complete logging
//!
//! - Logs `{name}_BEGIN` on creation
//! - Logs `{name}_COMPLETE` with elapsed time when completed
//! - Logs `{name}_INCOMPLETE` on drop if never completed

use std::time::Instant;

/// A scope that logs begin and complete events around a unit of work
///
/// # Usage
///
/// ```
/// use visto_catalog::observability::ObservationScope;
///
/// let scope = ObservationScope::new("CATALOG_LOAD");
/// // ... do work ...
/// scope.complete_with(&[("products", "13".to_string())]);
/// ```
pub struct ObservationScope {
    name: &'static str,
    timer: Timer,
    completed: bool,
}

impl ObservationScope {
    /// Create a new observation scope. Logs `{name}_BEGIN` immediately.
    pub fn new(name: &'static str) -> Self {
        tracing::debug!(event = %format!("{}_BEGIN", name));

        Self {
            name,
            timer: Timer::new(),
            completed: false,
        }
    }

    /// Mark the scope as successfully completed
    pub fn complete(self) {
        self.complete_with(&[]);
    }

    /// Mark the scope as completed, attaching extra fields
    pub fn complete_with(mut self, fields: &[(&str, String)]) {
        self.completed = true;
        let rendered = render_fields(fields);
        tracing::info!(
            event = %format!("{}_COMPLETE", self.name),
            elapsed_us = self.timer.elapsed_us(),
            fields = %rendered,
        );
    }

    /// Mark the scope as failed with a reason
    pub fn fail(mut self, reason: &str) {
        self.completed = true;
        tracing::error!(
            event = %format!("{}_FAILED", self.name),
            elapsed_us = self.timer.elapsed_us(),
            reason,
        );
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }
}

impl Drop for ObservationScope {
    fn drop(&mut self) {
        if !self.completed {
            tracing::warn!(
                event = %format!("{}_INCOMPLETE", self.name),
                reason = "scope dropped without completion",
            );
        }
    }
}

fn render_fields(fields: &[(&str, String)]) -> String {
    fields
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join(" ")
}

/// A simple duration timer for logging elapsed time
#[derive(Debug, Clone, Copy)]
pub struct Timer {
    start: Instant,
}

impl Timer {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Elapsed microseconds
    pub fn elapsed_us(&self) -> u64 {
        self.start.elapsed().as_micros() as u64
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}
