//! Shared configuration building blocks for the workspace services.
//!
//! Provides environment detection, typed env-var loading via [`FromEnv`],
//! and tracing/error-report setup in [`tracing`].

pub mod server;
pub mod tracing;

use std::env;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Environment variable '{0}' is required but not set")]
    MissingEnvVar(String),

    #[error("Failed to parse environment variable '{key}': {details}")]
    ParseError { key: String, details: String },
}

/// Deployment environment, selected by `APP_ENV`.
///
/// Anything other than "production" (case-insensitive) counts as
/// development, including an unset variable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn from_env() -> Self {
        match env::var("APP_ENV") {
            Ok(value) if value.eq_ignore_ascii_case("production") => Environment::Production,
            _ => Environment::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        *self == Environment::Production
    }

    pub fn is_development(&self) -> bool {
        *self == Environment::Development
    }
}

/// Static application metadata, baked in at compile time.
///
/// Use the [`app_info!`] macro so name and version always come from the
/// calling crate's own Cargo manifest.
#[derive(Clone, Copy, Debug)]
pub struct AppInfo {
    pub name: &'static str,
    pub version: &'static str,
}

/// Build an [`AppInfo`] from the calling crate's Cargo metadata.
#[macro_export]
macro_rules! app_info {
    () => {
        $crate::AppInfo {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
        }
    };
}

/// Configuration sections that know how to load themselves from the
/// process environment.
pub trait FromEnv: Sized {
    fn from_env() -> Result<Self, ConfigError>;
}

/// Read an env var, falling back to `default` when unset.
pub fn env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Read an env var that must be present.
pub fn env_required(key: &str) -> Result<String, ConfigError> {
    env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_app_env_means_development() {
        temp_env::with_var_unset("APP_ENV", || {
            assert!(Environment::from_env().is_development());
        });
    }

    #[test]
    fn production_is_detected_in_any_case() {
        for spelling in ["production", "PRODUCTION", "Production"] {
            temp_env::with_var("APP_ENV", Some(spelling), || {
                assert!(Environment::from_env().is_production());
            });
        }
    }

    #[test]
    fn unknown_app_env_falls_back_to_development() {
        temp_env::with_var("APP_ENV", Some("staging"), || {
            assert_eq!(Environment::from_env(), Environment::Development);
        });
    }

    #[test]
    fn env_or_default_prefers_the_set_value() {
        temp_env::with_var("SOME_KEY", Some("configured"), || {
            assert_eq!(env_or_default("SOME_KEY", "fallback"), "configured");
        });
        temp_env::with_var_unset("SOME_KEY", || {
            assert_eq!(env_or_default("SOME_KEY", "fallback"), "fallback");
        });
    }

    #[test]
    fn env_required_names_the_missing_variable() {
        temp_env::with_var_unset("MUST_EXIST", || {
            let err = env_required("MUST_EXIST").unwrap_err();
            assert!(err.to_string().contains("MUST_EXIST"));
        });
        temp_env::with_var("MUST_EXIST", Some("yes"), || {
            assert_eq!(env_required("MUST_EXIST").unwrap(), "yes");
        });
    }

    #[test]
    fn app_info_reflects_the_calling_crate() {
        let info = app_info!();
        assert_eq!(info.name, "core_config");
        assert!(!info.version.is_empty());
    }
}
