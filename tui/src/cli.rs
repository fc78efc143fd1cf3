use clap::Parser;
use kubenav_core::config::ConfigError;
use kubenav_core::config::NavigationConfig;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "kubenav", version, about = "Keyboard-driven Kubernetes dashboard shell")]
pub struct Cli {
    /// Navigation table (TOML). Omitted fields keep the stock layout.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file; defaults to ~/.kubenav/log/kubenav.log.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Panel focused at startup, overriding `initial_panel`.
    #[arg(long = "initial-panel", value_name = "NAME")]
    pub initial_panel: Option<String>,

    /// Print the effective navigation table as TOML and exit.
    #[arg(long = "print-config", default_value_t = false)]
    pub print_config: bool,
}

impl Cli {
    pub fn navigation_config(&self) -> Result<NavigationConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => NavigationConfig::load(path)?,
            None => NavigationConfig::default(),
        };
        if let Some(panel) = &self.initial_panel {
            config.initial_panel = panel.clone();
        }
        Ok(config)
    }
}
