use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use config::ConfigError;
use serde::Deserialize;

use crate::{
    core::state::{ListOptions, PageSizeOptions, PageWindow, PaginationOptions, PagingMode},
    domain::ViewKind,
    utils,
};

const CONFIG: &str = include_str!("../../.config/config.json5");

/// Widest page window accepted from configuration
pub const MAX_SIBLINGS: usize = 10;

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PaginationConfig {
    pub page_sizes: PageSizeOptions,
    pub default_page_size: usize,
    pub siblings: usize,
    pub collapse_threshold: usize,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        let window = PageWindow::default();
        Self {
            page_sizes: PageSizeOptions::default(),
            default_page_size: crate::core::state::pagination::DEFAULT_PAGE_SIZE,
            siblings: window.siblings,
            collapse_threshold: window.collapse_threshold,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SearchConfig {
    pub debounce_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: crate::core::state::search::DEFAULT_DEBOUNCE.as_millis() as u64,
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct ViewConfig {
    #[serde(default)]
    pub page_size: Option<usize>,
    #[serde(default)]
    pub server_paging: bool,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub pagination: PaginationConfig,
    #[serde(default)]
    pub search: SearchConfig,
    /// Keyed by the view's command-line name (`users`, `audit-logs`, ...)
    #[serde(default)]
    pub views: HashMap<String, ViewConfig>,
}

impl Config {
    /// The configuration shipped with the binary
    pub fn defaults() -> Result<Self, ConfigError> {
        json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))
    }

    /// Embedded defaults, overlaid by the first user config files found in
    /// the config directory, overlaid by `MENTORLIST_*` variables
    /// (e.g. `MENTORLIST_PAGINATION__DEFAULT_PAGE_SIZE=25`).
    pub fn new() -> Result<Self, ConfigError> {
        Self::load_from(&utils::get_config_dir())
    }

    pub fn load_from(config_dir: &Path) -> Result<Self, ConfigError> {
        // Fail early with a clear message if the embedded file is broken
        Self::defaults()?;

        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(CONFIG, config::FileFormat::Json5));

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
            ("config.ini", config::FileFormat::Ini),
        ];
        let mut found_config = false;
        for (file, format) in &config_files {
            let path = config_dir.join(file);
            if path.exists() {
                found_config = true;
            }
            builder = builder.add_source(config::File::from(path).format(*format).required(false));
        }
        if !found_config {
            log::info!(
                "No configuration file in {}, using defaults",
                config_dir.display()
            );
        }

        builder = builder.add_source(
            config::Environment::with_prefix(utils::logging::PROJECT_NAME.as_str())
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("pagination.page_sizes"),
        );

        let cfg: Self = builder.build()?.try_deserialize()?;
        if cfg.pagination.default_page_size == 0 {
            return Err(ConfigError::Message(
                "pagination.default_page_size must be positive".to_string(),
            ));
        }
        if cfg.pagination.siblings > MAX_SIBLINGS {
            return Err(ConfigError::Message(format!(
                "pagination.siblings must be at most {MAX_SIBLINGS}, got {}",
                cfg.pagination.siblings
            )));
        }
        Ok(cfg)
    }

    pub fn view(&self, kind: ViewKind) -> ViewConfig {
        self.views.get(&kind.to_string()).cloned().unwrap_or_default()
    }

    /// Options for mounting `kind`. A page size given on the command line wins
    /// over the view's configured size, which wins over the global default.
    pub fn list_options(
        &self,
        kind: ViewKind,
        page_size: Option<usize>,
        server_paging: bool,
    ) -> ListOptions {
        let view = self.view(kind);
        let mode = if server_paging || view.server_paging {
            PagingMode::Server
        } else {
            PagingMode::Client
        };
        ListOptions {
            mode,
            pagination: PaginationOptions {
                initial_page: None,
                initial_page_size: Some(
                    page_size
                        .or(view.page_size)
                        .unwrap_or(self.pagination.default_page_size),
                ),
                page_sizes: self.pagination.page_sizes.clone(),
                window: PageWindow {
                    siblings: self.pagination.siblings,
                    collapse_threshold: self.pagination.collapse_threshold,
                },
            },
            debounce: Duration::from_millis(self.search.debounce_ms),
        }
    }
}
