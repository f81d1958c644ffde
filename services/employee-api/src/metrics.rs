//! Prometheus counters owned by the application state.

use prometheus::{IntCounterVec, Opts, Registry, TextEncoder};

use crate::error::ApiError;

pub struct ApiMetrics {
    registry: Registry,
    operations: IntCounterVec,
}

impl ApiMetrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new_custom(Some("staffdesk".to_string()), None)?;

        let operations = IntCounterVec::new(
            Opts::new(
                "employee_operations_total",
                "Employee operations handled, by operation and outcome",
            ),
            &["operation", "outcome"],
        )?;
        registry.register(Box::new(operations.clone()))?;

        Ok(Self {
            registry,
            operations,
        })
    }

    pub fn record<T>(&self, operation: &str, result: &Result<T, ApiError>) {
        let outcome = match result {
            Ok(_) => "ok",
            Err(error) => error.code(),
        };
        self.operations
            .with_label_values(&[operation, outcome])
            .inc();
    }

    /// Text exposition format.
    pub fn render(&self) -> Result<String, prometheus::Error> {
        TextEncoder::new().encode_to_string(&self.registry.gather())
    }
}
