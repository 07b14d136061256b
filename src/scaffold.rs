//! Scaffold orchestration: writes the stub, rewrites the index and touches
//! the input placeholders for one day.

use log::debug;
use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::config::ProjectPaths;
use crate::error::{Error, Result};
use crate::index::build_index;
use crate::renderer::TemplateRenderer;
use crate::templates::{render_index, render_stub};

/// What happened to a generated file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// File content was written, replacing anything already there
    Write,
    /// Empty file was created
    Create,
    /// Existing file kept its content, only its timestamp changed
    Touch,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Write => write!(f, "write"),
            Action::Create => write!(f, "create"),
            Action::Touch => write!(f, "touch"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    pub action: Action,
    pub target: PathBuf,
}

/// Writes `content` to `path`, creating parent directories as needed.
pub fn write_file<P: AsRef<Path>>(content: &str, path: P) -> Result<()> {
    let path = path.as_ref();
    let write_error = |source| Error::WriteError {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(write_error)?;
    }
    fs::write(path, content).map_err(write_error)
}

/// Creates `path` empty if it is missing, otherwise bumps its modification time.
///
/// The file is never truncated.
pub fn touch_file<P: AsRef<Path>>(path: P) -> Result<Action> {
    let path = path.as_ref();
    let write_error = |source| Error::WriteError {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(write_error)?;
    }
    if path.exists() {
        // a read-only handle is enough to set the timestamp
        File::open(path)
            .and_then(|file| file.set_modified(SystemTime::now()))
            .map_err(write_error)?;
        Ok(Action::Touch)
    } else {
        OpenOptions::new()
            .create(true)
            .write(true)
            .open(path)
            .map_err(write_error)?;
        Ok(Action::Create)
    }
}

pub struct ScaffoldWriter<'a> {
    engine: &'a dyn TemplateRenderer,
    paths: &'a ProjectPaths,
    year: u32,
}

impl<'a> ScaffoldWriter<'a> {
    pub fn new(engine: &'a dyn TemplateRenderer, paths: &'a ProjectPaths, year: u32) -> Self {
        Self { engine, paths, year }
    }

    /// Generates every file for `day`, in order: stub, index, input, sample input.
    ///
    /// Stops at the first failure; files written before it are left in place.
    pub fn scaffold(&self, day: i64, sample: bool) -> Result<Vec<Generated>> {
        let mut generated = Vec::new();

        let stub_path = self.paths.stub_file(day);
        let stub = render_stub(
            self.engine,
            day,
            self.year,
            &self.paths.display_relative(&stub_path),
        );
        debug!("Writing stub for day {day} to {}", stub_path.display());
        write_file(&stub, &stub_path)?;
        generated.push(Generated {
            action: Action::Write,
            target: stub_path,
        });

        let index_path = self.paths.index_file();
        let blocks = build_index(day);
        let index = render_index(self.engine, &blocks, &self.paths.display_relative(&index_path));
        debug!("Writing index of {} days to {}", blocks.count, index_path.display());
        write_file(&index, &index_path)?;
        generated.push(Generated {
            action: Action::Write,
            target: index_path,
        });

        let mut inputs = vec![self.paths.input_file(day)];
        if sample {
            inputs.push(self.paths.sample_file(day));
        }
        for input_path in inputs {
            debug!("Touching {}", input_path.display());
            let action = touch_file(&input_path)?;
            generated.push(Generated {
                action,
                target: input_path,
            });
        }

        Ok(generated)
    }
}
