//! Runtime settings resolved from CLI flags, environment variables and defaults.

use std::path::PathBuf;

use crate::{
    cli::{Backend, GlobalArgs},
    error::{PipelineError, Result},
};

pub const PROJECT_ID_ENV_VAR: &str = "BQ_PROJECT_ID";
pub const DATASET_ID_ENV_VAR: &str = "BQ_DATASET_ID";
pub const LOCATION_ENV_VAR: &str = "BQ_LOCATION";
pub const ACCESS_TOKEN_ENV_VAR: &str = "BQ_ACCESS_TOKEN";
pub const DB_PATH_ENV_VAR: &str = "FANTASY_FOOTBALL_DB";
pub const DATA_DIR_ENV_VAR: &str = "NFLVERSE_DATA_DIR";

pub const DEFAULT_DATASET_ID: &str = "fantasy_football";
pub const DEFAULT_LOCATION: &str = "US";

/// BigQuery connection settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BigQuerySettings {
    pub project_id: String,
    pub dataset_id: String,
    pub location: String,
    /// Pre-issued OAuth2 access token; `gcloud` is consulted when absent.
    pub access_token: Option<String>,
}

/// Fully resolved settings for one CLI invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WarehouseSettings {
    BigQuery(BigQuerySettings),
    Sqlite { path: PathBuf },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub warehouse: WarehouseSettings,
    pub data_dir: Option<PathBuf>,
    pub refresh: bool,
}

impl Settings {
    /// Resolve settings: CLI flag first, then environment variable, then default.
    pub fn resolve(args: &GlobalArgs) -> Result<Self> {
        let warehouse = match args.backend {
            Backend::Bigquery => {
                let project_id = flag_or_env(args.project_id.as_deref(), PROJECT_ID_ENV_VAR)
                    .ok_or_else(|| PipelineError::MissingSetting {
                        name: "Project ID".to_string(),
                        env_var: PROJECT_ID_ENV_VAR.to_string(),
                    })?;

                WarehouseSettings::BigQuery(BigQuerySettings {
                    project_id,
                    dataset_id: flag_or_env(args.dataset_id.as_deref(), DATASET_ID_ENV_VAR)
                        .unwrap_or_else(|| DEFAULT_DATASET_ID.to_string()),
                    location: flag_or_env(args.location.as_deref(), LOCATION_ENV_VAR)
                        .unwrap_or_else(|| DEFAULT_LOCATION.to_string()),
                    access_token: flag_or_env(None, ACCESS_TOKEN_ENV_VAR),
                })
            }
            Backend::Sqlite => WarehouseSettings::Sqlite {
                path: args
                    .db_path
                    .clone()
                    .or_else(|| flag_or_env(None, DB_PATH_ENV_VAR).map(PathBuf::from))
                    .unwrap_or_else(default_db_path),
            },
        };

        let data_dir = args
            .data_dir
            .clone()
            .or_else(|| flag_or_env(None, DATA_DIR_ENV_VAR).map(PathBuf::from));

        Ok(Self {
            warehouse,
            data_dir,
            refresh: args.refresh,
        })
    }
}

fn flag_or_env(flag: Option<&str>, env_var: &str) -> Option<String> {
    flag.map(str::to_string)
        .or_else(|| std::env::var(env_var).ok())
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Path: ~/.cache/fantasy-football/warehouse.db
pub fn default_db_path() -> PathBuf {
    crate::core::cache::cache_root().join("warehouse.db")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bigquery_settings_from_flags() {
        let args = GlobalArgs {
            project_id: Some("my-project".to_string()),
            dataset_id: Some("nfl".to_string()),
            location: Some("EU".to_string()),
            ..GlobalArgs::default()
        };

        let settings = Settings::resolve(&args).unwrap();
        match settings.warehouse {
            WarehouseSettings::BigQuery(bq) => {
                assert_eq!(bq.project_id, "my-project");
                assert_eq!(bq.dataset_id, "nfl");
                assert_eq!(bq.location, "EU");
            }
            other => panic!("Expected BigQuery settings, got {:?}", other),
        }
    }

    #[test]
    fn test_sqlite_settings_ignore_project() {
        let args = GlobalArgs {
            backend: Backend::Sqlite,
            db_path: Some(PathBuf::from("/tmp/nfl.db")),
            refresh: true,
            ..GlobalArgs::default()
        };

        let settings = Settings::resolve(&args).unwrap();
        assert_eq!(
            settings.warehouse,
            WarehouseSettings::Sqlite {
                path: PathBuf::from("/tmp/nfl.db")
            }
        );
        assert!(settings.refresh);
    }

    #[test]
    fn test_flag_or_env_blank_flag_is_missing() {
        assert_eq!(flag_or_env(Some("   "), "FANTASY_FOOTBALL_UNSET_VAR"), None);
        assert_eq!(
            flag_or_env(Some(" value "), "FANTASY_FOOTBALL_UNSET_VAR"),
            Some("value".to_string())
        );
    }

    #[test]
    fn test_default_db_path_file_name() {
        let path = default_db_path();
        assert!(path.ends_with("fantasy-football/warehouse.db"));
    }
}
