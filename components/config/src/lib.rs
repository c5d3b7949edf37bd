use std::{fs::File, path::Path};

use error::ConfigurationError;
use log::info;
use serde::{Deserialize, Serialize};
pub mod error;

/// Schema holding the partitioned tables when none is configured.
pub const DEFAULT_SCHEMA: &str = "maxposter";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Database {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,

    /// Schema, that is, MySQL database, whose partition metadata is inspected.
    pub schema: String,

    /// Whether to connect over TLS.
    pub ssl: bool,
}

impl Default for Database {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 3306,
            user: "viewer".to_owned(),
            password: String::new(),
            schema: DEFAULT_SCHEMA.to_owned(),
            ssl: false,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Configuration {
    #[serde(default)]
    pub database: Database,
}

impl Configuration {
    /// Load configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigurationError> {
        let path = path.as_ref();
        let configuration: Configuration = serde_yaml::from_reader(File::open(path)?)?;
        info!(
            "Loaded configuration from {}: {}:{}/{}",
            path.display(),
            configuration.database.host,
            configuration.database.port,
            configuration.database.schema
        );
        Ok(configuration)
    }

    /// Check the configuration.
    pub fn check_and_apply(&mut self) -> Result<(), ConfigurationError> {
        let database = &mut self.database;
        database.host = database.host.trim().to_owned();
        database.schema = database.schema.trim().to_owned();

        if database.host.is_empty() {
            return Err(ConfigurationError::MissingField("database.host"));
        }

        if database.port == 0 {
            return Err(ConfigurationError::InvalidPort(database.port));
        }

        if database.user.is_empty() {
            return Err(ConfigurationError::MissingField("database.user"));
        }

        if database.schema.is_empty() {
            return Err(ConfigurationError::MissingField("database.schema"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{error::ConfigurationError, Configuration, DEFAULT_SCHEMA};
    use std::{error::Error, path::Path};

    #[test]
    fn test_yaml() -> Result<(), Box<dyn Error>> {
        let manifest_dir = std::env::var("CARGO_MANIFEST_DIR")?;
        let path = Path::new(&manifest_dir)
            .parent()
            .and_then(Path::parent)
            .ok_or("workspace root not found")?
            .join("etc/partition-viewer.yaml");
        let mut config = Configuration::from_file(path)?;
        config.check_and_apply()?;
        assert_eq!("127.0.0.1", config.database.host);
        assert_eq!(3306, config.database.port);
        assert_eq!("viewer", config.database.user);
        assert_eq!(DEFAULT_SCHEMA, config.database.schema);
        assert!(!config.database.ssl);
        Ok(())
    }

    #[test]
    fn test_partial_yaml() -> Result<(), Box<dyn Error>> {
        let yaml = r#"
database:
  host: db.internal
  schema: reporting
"#;
        let mut config: Configuration = serde_yaml::from_str(yaml)?;
        config.check_and_apply()?;
        assert_eq!("db.internal", config.database.host);
        assert_eq!("reporting", config.database.schema);
        assert_eq!(3306, config.database.port);
        assert_eq!("viewer", config.database.user);
        Ok(())
    }

    #[test]
    fn test_check_and_apply() {
        let mut config = Configuration::default();
        assert!(config.check_and_apply().is_ok());

        let mut config = Configuration::default();
        config.database.schema = "  ".to_owned();
        assert!(matches!(
            config.check_and_apply(),
            Err(ConfigurationError::MissingField("database.schema"))
        ));

        let mut config = Configuration::default();
        config.database.port = 0;
        assert!(matches!(
            config.check_and_apply(),
            Err(ConfigurationError::InvalidPort(0))
        ));

        let mut config = Configuration::default();
        config.database.host = String::new();
        assert!(matches!(
            config.check_and_apply(),
            Err(ConfigurationError::MissingField("database.host"))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            Configuration::from_file("/nonexistent/partition-viewer.yaml"),
            Err(ConfigurationError::Io(_))
        ));
    }
}
