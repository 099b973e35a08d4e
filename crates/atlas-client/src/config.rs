//! Client configuration.
//!
//! Sources, highest precedence first:
//! - the `log` query-string parameter (persisted to local storage; `?log=` clears it)
//! - the configuration persisted in local storage
//! - compiled-in defaults

use gloo::storage::errors::StorageError;
use gloo::storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize};

/// Id of the element the application mounts into.
pub const MOUNT_POINT_ID: &str = "app";

pub const DEFAULT_LOG_FILTER: &str = "info";

const CONFIG_STORAGE_KEY: &str = "$admin-atlas$/config";
const LOG_FILTER_QUERY_KEY: &str = "log";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// `EnvFilter` directive for the browser console logger.
    pub log_filter: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl ClientConfig {
    /// Load the configuration for this page load.
    ///
    /// Runs before logging is initialized, so a failure to persist the
    /// configuration is returned for the caller to report.
    pub fn load() -> (Self, Option<StorageError>) {
        let query = query_param(LOG_FILTER_QUERY_KEY);
        let stored = LocalStorage::get::<ClientConfig>(CONFIG_STORAGE_KEY).ok();
        let config = Self::from_sources(stored, query.as_deref());

        let persist_error = match StorageAction::for_query(query.as_deref()) {
            StorageAction::Keep => None,
            StorageAction::Clear => {
                LocalStorage::delete(CONFIG_STORAGE_KEY);
                None
            }
            StorageAction::Store => LocalStorage::set(CONFIG_STORAGE_KEY, &config).err(),
        };
        (config, persist_error)
    }

    /// Merge a stored configuration with the query-string override.
    pub fn from_sources(stored: Option<ClientConfig>, query_log_filter: Option<&str>) -> Self {
        match query_log_filter {
            Some("") => Self::default(),
            Some(filter) => Self {
                log_filter: filter.to_string(),
            },
            None => stored
                .filter(|config| !config.log_filter.is_empty())
                .unwrap_or_default(),
        }
    }
}

/// What a page load does to the persisted configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StorageAction {
    Keep,
    Clear,
    Store,
}

impl StorageAction {
    fn for_query(query_log_filter: Option<&str>) -> Self {
        match query_log_filter {
            None => StorageAction::Keep,
            Some("") => StorageAction::Clear,
            Some(_) => StorageAction::Store,
        }
    }
}

fn query_param(key: &str) -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    web_sys::UrlSearchParams::new_with_str(&search).ok()?.get(key)
}
