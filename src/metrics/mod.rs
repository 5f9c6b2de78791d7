//! Basic metrics instrumentation for the contact pipeline.
//!
//! Provides counters and duration tracking for provider calls and for the
//! outcome of each dispatch.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Metrics collector shared by the provider client and the dispatcher.
#[derive(Debug, Clone)]
pub struct Metrics {
    /// Total number of provider requests made
    provider_requests_total: Arc<AtomicU64>,

    /// Total number of failed provider requests
    provider_errors_total: Arc<AtomicU64>,

    /// Total duration of all provider requests in milliseconds
    provider_duration_total_ms: Arc<AtomicU64>,

    /// Operator notifications accepted by the provider
    notifications_sent_total: Arc<AtomicU64>,

    /// Confirmations accepted by the provider
    confirmations_sent_total: Arc<AtomicU64>,

    /// Confirmations that failed after a successful notification
    confirmations_failed_total: Arc<AtomicU64>,

    /// Dispatches that returned an error to the form
    dispatch_failures_total: Arc<AtomicU64>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    /// Create a new metrics collector.
    pub fn new() -> Self {
        Self {
            provider_requests_total: Arc::new(AtomicU64::new(0)),
            provider_errors_total: Arc::new(AtomicU64::new(0)),
            provider_duration_total_ms: Arc::new(AtomicU64::new(0)),
            notifications_sent_total: Arc::new(AtomicU64::new(0)),
            confirmations_sent_total: Arc::new(AtomicU64::new(0)),
            confirmations_failed_total: Arc::new(AtomicU64::new(0)),
            dispatch_failures_total: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Record a provider request with duration.
    pub fn record_provider_request(&self, duration: Duration) {
        self.provider_requests_total.fetch_add(1, Ordering::Relaxed);
        self.provider_duration_total_ms
            .fetch_add(duration.as_millis() as u64, Ordering::Relaxed);
    }

    /// Record a failed provider request.
    pub fn record_provider_error(&self) {
        self.provider_errors_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_notification_sent(&self) {
        self.notifications_sent_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_confirmation_sent(&self) {
        self.confirmations_sent_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_confirmation_failed(&self) {
        self.confirmations_failed_total
            .fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_dispatch_failure(&self) {
        self.dispatch_failures_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Get total provider requests.
    pub fn provider_requests_total(&self) -> u64 {
        self.provider_requests_total.load(Ordering::Relaxed)
    }

    /// Get total provider errors.
    pub fn provider_errors_total(&self) -> u64 {
        self.provider_errors_total.load(Ordering::Relaxed)
    }

    /// Get total provider duration in milliseconds.
    pub fn provider_duration_total_ms(&self) -> u64 {
        self.provider_duration_total_ms.load(Ordering::Relaxed)
    }

    /// Get average provider request duration in milliseconds.
    pub fn provider_duration_avg_ms(&self) -> f64 {
        let total = self.provider_duration_total_ms.load(Ordering::Relaxed);
        let count = self.provider_requests_total.load(Ordering::Relaxed);
        if count == 0 {
            0.0
        } else {
            total as f64 / count as f64
        }
    }

    pub fn notifications_sent_total(&self) -> u64 {
        self.notifications_sent_total.load(Ordering::Relaxed)
    }

    pub fn confirmations_sent_total(&self) -> u64 {
        self.confirmations_sent_total.load(Ordering::Relaxed)
    }

    pub fn confirmations_failed_total(&self) -> u64 {
        self.confirmations_failed_total.load(Ordering::Relaxed)
    }

    pub fn dispatch_failures_total(&self) -> u64 {
        self.dispatch_failures_total.load(Ordering::Relaxed)
    }

    /// Get a summary of all metrics.
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            provider_requests_total: self.provider_requests_total(),
            provider_errors_total: self.provider_errors_total(),
            provider_duration_total_ms: self.provider_duration_total_ms(),
            provider_duration_avg_ms: self.provider_duration_avg_ms(),
            notifications_sent_total: self.notifications_sent_total(),
            confirmations_sent_total: self.confirmations_sent_total(),
            confirmations_failed_total: self.confirmations_failed_total(),
            dispatch_failures_total: self.dispatch_failures_total(),
        }
    }
}

/// A snapshot of metrics values.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsSummary {
    pub provider_requests_total: u64,
    pub provider_errors_total: u64,
    pub provider_duration_total_ms: u64,
    pub provider_duration_avg_ms: f64,
    pub notifications_sent_total: u64,
    pub confirmations_sent_total: u64,
    pub confirmations_failed_total: u64,
    pub dispatch_failures_total: u64,
}
