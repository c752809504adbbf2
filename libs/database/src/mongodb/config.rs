#[cfg(feature = "config")]
use core_config::{ConfigError, FromEnv};

/// Connection settings for a MongoDB deployment.
///
/// Built manually for tests and tools, or from the environment behind
/// the `config` feature.
///
/// # Example
///
/// ```ignore
/// use database::mongodb::MongoConfig;
///
/// let local = MongoConfig::new("mongodb://localhost:27017");
/// let named = MongoConfig::with_database("mongodb://localhost:27017", "mydb");
/// let from_env = MongoConfig::from_env()?;
/// ```
#[derive(Clone, Debug)]
pub struct MongoConfig {
    /// Connection string, `mongodb://[user:pass@]host[:port][/db][?options]`
    pub url: String,

    /// Database name to operate on
    pub database: String,

    /// App name shown in the server's connection logs
    pub app_name: Option<String>,

    /// Connection pool ceiling
    pub max_pool_size: u32,

    pub connect_timeout_secs: u64,

    pub server_selection_timeout_secs: u64,
}

/// Database name used when the environment does not provide one.
const DEFAULT_DATABASE: &str = "catalog";

impl MongoConfig {
    /// Settings for `url` with the default database and driver defaults.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            database: DEFAULT_DATABASE.to_string(),
            app_name: None,
            max_pool_size: 100,
            connect_timeout_secs: 10,
            server_selection_timeout_secs: 30,
        }
    }

    /// Like [`MongoConfig::new`] but naming the database explicitly.
    pub fn with_database(url: impl Into<String>, database: impl Into<String>) -> Self {
        Self {
            database: database.into(),
            ..Self::new(url)
        }
    }

    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = Some(app_name.into());
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn database(&self) -> &str {
        &self.database
    }
}

#[cfg(feature = "config")]
impl MongoConfig {
    /// Read settings from the environment, tolerating their absence.
    ///
    /// `Ok(None)` means no connection URL is set at all; callers can then
    /// run without a store instead of refusing to start.
    ///
    /// Recognized variables:
    /// - `DATABASE_URL` or `MONGODB_URL`
    /// - `DATABASE_NAME` or `MONGODB_DATABASE` (default: "catalog")
    /// - `MONGODB_APP_NAME`
    /// - `MONGODB_MAX_POOL_SIZE` (default: 100)
    /// - `MONGODB_CONNECT_TIMEOUT_SECS` (default: 10)
    /// - `MONGODB_SERVER_SELECTION_TIMEOUT_SECS` (default: 30)
    pub fn from_env_optional() -> Result<Option<Self>, ConfigError> {
        let url = match std::env::var("DATABASE_URL").or_else(|_| std::env::var("MONGODB_URL")) {
            Ok(url) => url,
            Err(_) => return Ok(None),
        };

        let database = std::env::var("DATABASE_NAME")
            .or_else(|_| std::env::var("MONGODB_DATABASE"))
            .unwrap_or_else(|_| DEFAULT_DATABASE.to_string());

        Ok(Some(Self {
            url,
            database,
            app_name: std::env::var("MONGODB_APP_NAME").ok(),
            max_pool_size: parse_env_or("MONGODB_MAX_POOL_SIZE", 100)?,
            connect_timeout_secs: parse_env_or("MONGODB_CONNECT_TIMEOUT_SECS", 10)?,
            server_selection_timeout_secs: parse_env_or(
                "MONGODB_SERVER_SELECTION_TIMEOUT_SECS",
                30,
            )?,
        }))
    }
}

#[cfg(feature = "config")]
fn parse_env_or<T: std::str::FromStr>(key: &str, default: T) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw.parse().map_err(|e: T::Err| ConfigError::ParseError {
            key: key.to_string(),
            details: format!("{}", e),
        }),
        Err(_) => Ok(default),
    }
}

#[cfg(feature = "config")]
impl FromEnv for MongoConfig {
    /// As [`MongoConfig::from_env_optional`], but a missing URL is an error.
    fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_optional()?
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL or MONGODB_URL".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_url_fills_in_driver_defaults() {
        let config = MongoConfig::new("mongodb://localhost:27017");
        assert_eq!(config.url, "mongodb://localhost:27017");
        assert_eq!(config.database, "catalog");
        assert_eq!(config.max_pool_size, 100);
        assert_eq!(config.connect_timeout_secs, 10);
        assert_eq!(config.server_selection_timeout_secs, 30);
    }

    #[test]
    fn explicit_database_name_sticks() {
        let config = MongoConfig::with_database("mongodb://localhost:27017", "mydb");
        assert_eq!(config.database, "mydb");
    }

    #[test]
    fn app_name_builder_sets_the_option() {
        let config = MongoConfig::new("mongodb://localhost:27017").with_app_name("my-app");
        assert_eq!(config.app_name, Some("my-app".to_string()));
    }

    #[cfg(feature = "config")]
    mod from_env {
        use super::*;

        #[test]
        fn primary_variables_win() {
            temp_env::with_vars(
                [
                    ("DATABASE_URL", Some("mongodb://localhost:27017")),
                    ("DATABASE_NAME", Some("testdb")),
                ],
                || {
                    let config = MongoConfig::from_env().unwrap();
                    assert_eq!(config.url, "mongodb://localhost:27017");
                    assert_eq!(config.database, "testdb");
                },
            );
        }

        #[test]
        fn mongodb_prefixed_variables_back_up_the_primaries() {
            temp_env::with_vars(
                [
                    ("DATABASE_URL", None::<&str>),
                    ("MONGODB_URL", Some("mongodb://fallback:27017")),
                    ("DATABASE_NAME", None::<&str>),
                    ("MONGODB_DATABASE", Some("fallbackdb")),
                ],
                || {
                    let config = MongoConfig::from_env().unwrap();
                    assert_eq!(config.url, "mongodb://fallback:27017");
                    assert_eq!(config.database, "fallbackdb");
                },
            );
        }

        #[test]
        fn optional_load_reports_none_without_a_url() {
            temp_env::with_vars(
                [
                    ("DATABASE_URL", None::<&str>),
                    ("MONGODB_URL", None::<&str>),
                ],
                || {
                    assert!(MongoConfig::from_env_optional().unwrap().is_none());
                },
            );
        }

        #[test]
        fn required_load_errors_without_a_url() {
            temp_env::with_vars(
                [
                    ("DATABASE_URL", None::<&str>),
                    ("MONGODB_URL", None::<&str>),
                ],
                || {
                    assert!(MongoConfig::from_env().is_err());
                },
            );
        }

        #[test]
        fn database_name_falls_back_to_the_default() {
            temp_env::with_vars(
                [
                    ("DATABASE_URL", Some("mongodb://localhost:27017")),
                    ("DATABASE_NAME", None::<&str>),
                    ("MONGODB_DATABASE", None::<&str>),
                ],
                || {
                    let config = MongoConfig::from_env().unwrap();
                    assert_eq!(config.database, "catalog");
                },
            );
        }

        #[test]
        fn unparseable_pool_size_is_a_config_error() {
            temp_env::with_vars(
                [
                    ("DATABASE_URL", Some("mongodb://localhost:27017")),
                    ("MONGODB_MAX_POOL_SIZE", Some("not_a_number")),
                ],
                || {
                    assert!(MongoConfig::from_env().is_err());
                },
            );
        }
    }
}
