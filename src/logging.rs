use std::{
    fs::{self, File},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use env_logger::Target;
use log::LevelFilter;

use crate::common::project_data_dir;

/// Logger setup for the binary.
///
/// Prompts own the terminal while they run, so by default logs go to a file
/// in the data directory. Without a file they go to stderr.
#[derive(Default)]
pub struct Logging {
    file_name: Option<PathBuf>,
    debug_mode: bool,
}

impl Logging {
    #[must_use]
    pub fn new() -> Self {
        Self {
            file_name: None,
            debug_mode: false,
        }
    }

    /// Log to `file_name` inside the project data directory.
    #[must_use]
    pub fn with_file<P>(mut self, file_name: P) -> Self
    where
        P: Into<PathBuf>,
    {
        self.file_name = Some(file_name.into());
        self
    }

    /// Raise the level from info to debug.
    #[must_use]
    pub fn with_debug_mode(mut self, enable: bool) -> Self {
        self.debug_mode = enable;
        self
    }

    fn level(&self) -> LevelFilter {
        if self.debug_mode {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }

    pub fn start(&self) -> Result<()> {
        let mut b = env_logger::builder();
        b.filter_level(self.level());

        if let Some(file_name) = &self.file_name {
            let log_file = log_file_path(&project_data_dir()?, file_name);
            let fd = open_log_file(&log_file)?;
            b.target(Target::Pipe(Box::new(fd)));
        }

        b.try_init().context("Unable to install logger")?;

        Ok(())
    }
}

fn log_file_path(data_dir: &Path, file_name: &Path) -> PathBuf {
    data_dir.join(file_name)
}

/// Opens the log file, truncating the previous run's output.
fn open_log_file(path: &Path) -> Result<File> {
    fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
        .with_context(|| format!("Unable to open {} for writing", path.display()))
}
