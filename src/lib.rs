pub mod config;
pub mod environment;
pub mod error;
pub mod generator;
pub mod name;
pub mod options;
pub mod plugins;
pub mod render;

use std::path::PathBuf;

use crate::config::{load_user_config, UserConfig};
use crate::environment::SystemEnvironment;
use crate::error::{Result, ScaffoldError};
use crate::generator::{
    DiskWriter, GenerationReport, GenerationRequest, PlanRecorder, PlannedEntry, Scaffolder,
};
use crate::options::ComponentOverrides;
use crate::render::BuiltinRenderer;

pub struct GenerateOptions {
    pub name: String,
    /// Parent directory for the marketplace; defaults to the current directory.
    pub directory: Option<PathBuf>,
    /// Plugin count as given; parsed and range-checked during generation.
    pub plugins: String,
    pub minimal: bool,
    pub overrides: ComponentOverrides,
}

impl GenerateOptions {
    fn request(&self) -> GenerationRequest {
        GenerationRequest {
            name: self.name.clone(),
            plugin_count: self.plugins.clone(),
            minimal: self.minimal,
            overrides: self.overrides,
        }
    }

    fn parent_dir(&self) -> Result<PathBuf> {
        match &self.directory {
            Some(dir) => Ok(dir.clone()),
            None => std::env::current_dir().map_err(|e| ScaffoldError::Io {
                context: "getting current directory".into(),
                source: e,
            }),
        }
    }
}

/// A broken config file only loses the identity it would have supplied.
fn user_config_or_default() -> Option<UserConfig> {
    match load_user_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "ignoring unreadable user config");
            None
        }
    }
}

/// Everything a run would create, without anything written to disk.
pub struct GenerationPlan {
    pub parent: PathBuf,
    pub report: GenerationReport,
    pub entries: Vec<PlannedEntry>,
}

/// Plan a generation: validate, resolve and render everything in memory.
pub fn plan_generation(options: &GenerateOptions) -> Result<GenerationPlan> {
    let parent = options.parent_dir()?;
    let renderer = BuiltinRenderer::new()?;
    let env = SystemEnvironment::new(user_config_or_default());

    let mut recorder = PlanRecorder::default();
    let report =
        Scaffolder::new(&renderer, &env).generate(&options.request(), &parent, &mut recorder)?;

    Ok(GenerationPlan {
        parent,
        report,
        entries: recorder.entries,
    })
}

/// Generate a marketplace on disk.
pub fn generate(options: &GenerateOptions) -> Result<GenerationReport> {
    let parent = options.parent_dir()?;
    let renderer = BuiltinRenderer::new()?;
    let env = SystemEnvironment::new(user_config_or_default());

    let mut writer = DiskWriter::new(&parent);
    Scaffolder::new(&renderer, &env).generate(&options.request(), &parent, &mut writer)
}
