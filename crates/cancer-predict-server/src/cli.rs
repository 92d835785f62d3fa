//! Command-line interface.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use cancer_predict_adapters::default_model_path;
use clap::Parser;

use crate::config::AppConfig;

/// Hardcoded defaults, used when neither CLI nor config sets a value.
mod defaults {
    pub const HOST: &str = "0.0.0.0";
    pub const PORT: u16 = 3000;
}

/// Cancer Predict - image classification over HTTP
#[derive(Parser, Debug, Clone)]
#[command(name = "cancer-predict")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Host to bind to
    #[arg(long, env = "HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "PORT")]
    pub port: Option<u16>,

    /// Path to the classifier weights (safetensors)
    #[arg(short, long, env = "MODEL_PATH", value_name = "FILE")]
    pub model: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Fully resolved runtime settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Address to bind.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Classifier weights.
    pub model_path: PathBuf,
}

impl Settings {
    /// Returns the socket address to listen on.
    ///
    /// # Errors
    ///
    /// Returns an error if `host` is not a valid IP address.
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("Invalid listen address {}:{}", self.host, self.port))
    }
}

impl Cli {
    /// Returns the log filter selected by the `-v` count.
    #[must_use]
    pub const fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Layers CLI values over config values over hardcoded defaults.
    #[must_use]
    pub fn with_config(self, config: &AppConfig) -> Settings {
        Settings {
            host: self
                .host
                .or_else(|| config.server.host.clone())
                .unwrap_or_else(|| defaults::HOST.to_string()),
            port: self
                .port
                .or(config.server.port)
                .unwrap_or(defaults::PORT),
            model_path: self
                .model
                .or_else(|| config.model.path.clone())
                .unwrap_or_else(default_model_path),
        }
    }
}
