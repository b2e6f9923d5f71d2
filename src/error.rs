#![allow(unused_assignments)]

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum ScaffoldError {
    #[error("Invalid name: '{name}'")]
    #[diagnostic(help(
        "Names must start with a letter or digit, contain only letters, digits, '.', '_' or '-', \
         and must not contain '..' or end with '.'"
    ))]
    InvalidName { name: String },

    #[error("Directory already exists: {path}")]
    #[diagnostic(help("Choose another name or remove the existing directory"))]
    DirectoryExists { path: PathBuf },

    #[error("Invalid plugin count: {value}")]
    #[diagnostic(help("The number of plugins must be a whole number between 1 and 10"))]
    InvalidPluginCount { value: String },

    #[error("Failed to render template: {template}")]
    RenderError {
        template: String,
        #[source]
        source: tera::Error,
    },

    #[error("Failed to register built-in templates")]
    TemplateRegistration {
        #[source]
        source: tera::Error,
    },

    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}")]
    #[diagnostic(help("Check the TOML syntax in your config file"))]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;
