use std::path::PathBuf;

pub const DEFAULT_DATA_PATH: &str = "./data/dashboard.json";

pub struct Config {
    pub data_path: PathBuf,
    pub log_format: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let data_path = std::env::var("DEBTBOARD_DATA_PATH")
            .unwrap_or_else(|_| DEFAULT_DATA_PATH.to_string())
            .into();
        let log_format =
            std::env::var("DEBTBOARD_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
        Self {
            data_path,
            log_format,
        }
    }

    /// Applies command line overrides on top of the environment.
    pub fn with_data_path(mut self, data_path: Option<PathBuf>) -> Self {
        if let Some(path) = data_path {
            self.data_path = path;
        }
        self
    }
}
