use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::Config;
use crate::navigation::Route;

#[derive(Debug, Parser)]
#[command(name = "nexus", version, about = "NEXUS alumni network terminal client")]
pub struct Cli {
    /// Config file (default: <config dir>/nexus/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Screen to open at startup
    #[arg(long, value_enum)]
    pub screen: Option<StartScreen>,

    /// Catalog JSON replacing the built-in sample data
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Write diagnostic logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Load config and catalog, print a summary, and exit
    #[arg(long)]
    pub check: bool,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum StartScreen {
    SignIn,
    SignUp,
}

impl From<StartScreen> for Route {
    fn from(screen: StartScreen) -> Self {
        match screen {
            StartScreen::SignIn => Route::SignIn,
            StartScreen::SignUp => Route::SignUp,
        }
    }
}

impl Cli {
    /// Config file to read: `--config`, else the default location.
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::config_path)
    }

    /// Folds command-line overrides into `config`.
    pub fn apply(&self, config: &mut Config) {
        if let Some(screen) = self.screen {
            config.ui.start_screen = screen.into();
        }
        if let Some(path) = &self.catalog {
            config.catalog.path = Some(path.clone());
        }
    }
}
