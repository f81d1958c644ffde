pub mod config;
pub mod logging;
pub mod validation;

pub use crate::config::*;
pub use crate::logging::*;
pub use crate::validation::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.bind_address(), "0.0.0.0:8000");
        assert_eq!(config.database.backend, StorageBackend::Postgres);
    }
}
