use std::sync::Arc;

use anyhow::Result;
use staffdesk_database::EmployeeStore;

use crate::metrics::ApiMetrics;

/// Shared handler state. The store is built by the caller and passed in.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn EmployeeStore>,
    pub metrics: Arc<ApiMetrics>,
}

impl AppState {
    pub fn new(store: Arc<dyn EmployeeStore>) -> Result<Self> {
        Ok(Self {
            store,
            metrics: Arc::new(ApiMetrics::new()?),
        })
    }
}
