use service_core::config as core_config;
use service_core::error::AppError;
use std::env;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Dev,
    Prod,
}

impl FromStr for Environment {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dev" | "development" => Ok(Environment::Dev),
            "prod" | "production" => Ok(Environment::Prod),
            other => Err(AppError::ConfigError(anyhow::anyhow!(
                "ENVIRONMENT must be 'dev' or 'prod', got '{}'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DijitleConfig {
    pub common: core_config::Config,
    pub environment: Environment,
    pub log_level: String,
    /// Trace export is disabled when unset.
    pub otlp_endpoint: Option<String>,
    /// Serves Swagger UI at `/docs`; `/openapi.json` is always available.
    pub swagger_enabled: bool,
}

impl DijitleConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;
        Self::from_lookup(common_config, |key| env::var(key).ok())
    }

    /// Resolve service settings through `lookup`, so callers can supply
    /// values from somewhere other than the process environment.
    pub fn from_lookup<F>(common: core_config::Config, lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = match lookup("ENVIRONMENT") {
            Some(value) => value.parse()?,
            None => Environment::Dev,
        };

        let swagger_enabled = match lookup("SWAGGER_ENABLED") {
            Some(value) => value.parse().map_err(|_| {
                AppError::ConfigError(anyhow::anyhow!(
                    "SWAGGER_ENABLED must be 'true' or 'false', got '{}'",
                    value
                ))
            })?,
            None => environment == Environment::Dev,
        };

        Ok(DijitleConfig {
            common,
            environment,
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
            otlp_endpoint: lookup("OTLP_ENDPOINT").filter(|v| !v.is_empty()),
            swagger_enabled,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<DijitleConfig, AppError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        DijitleConfig::from_lookup(core_config::Config::default(), |key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_any_variables() {
        let config = load(&[]).unwrap();
        assert_eq!(config.environment, Environment::Dev);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.otlp_endpoint, None);
        assert!(config.swagger_enabled);
        assert_eq!(config.common.bind_address(), "0.0.0.0:8000");
    }

    #[test]
    fn prod_disables_swagger_by_default() {
        let config = load(&[("ENVIRONMENT", "prod")]).unwrap();
        assert_eq!(config.environment, Environment::Prod);
        assert!(!config.swagger_enabled);
    }

    #[test]
    fn explicit_swagger_flag_wins() {
        let config = load(&[("ENVIRONMENT", "production"), ("SWAGGER_ENABLED", "true")]).unwrap();
        assert!(config.swagger_enabled);

        let config = load(&[("SWAGGER_ENABLED", "false")]).unwrap();
        assert!(!config.swagger_enabled);
    }

    #[test]
    fn empty_otlp_endpoint_is_ignored() {
        let config = load(&[("OTLP_ENDPOINT", "")]).unwrap();
        assert_eq!(config.otlp_endpoint, None);

        let config = load(&[("OTLP_ENDPOINT", "http://tempo:4317")]).unwrap();
        assert_eq!(config.otlp_endpoint.as_deref(), Some("http://tempo:4317"));
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(matches!(
            load(&[("ENVIRONMENT", "staging")]),
            Err(AppError::ConfigError(_))
        ));
        assert!(matches!(
            load(&[("SWAGGER_ENABLED", "yes")]),
            Err(AppError::ConfigError(_))
        ));
    }
}
