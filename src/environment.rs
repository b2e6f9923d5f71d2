use std::process::Command;

use chrono::Datelike;

use crate::config::UserConfig;

/// Source of the generation-time facts that end up in rendered templates.
pub trait Environment {
    fn author_name(&self) -> Option<String>;
    fn author_email(&self) -> Option<String>;
    fn current_year(&self) -> i32;
}

/// Reads the author from the user config, then `git config`, and the year
/// from the local clock. Nothing is cached.
#[derive(Debug, Default)]
pub struct SystemEnvironment {
    config: Option<UserConfig>,
}

impl SystemEnvironment {
    pub fn new(config: Option<UserConfig>) -> Self {
        Self { config }
    }
}

impl Environment for SystemEnvironment {
    fn author_name(&self) -> Option<String> {
        self.config
            .as_ref()
            .and_then(|c| non_empty(c.author.name.clone()))
            .or_else(|| git_config("user.name"))
    }

    fn author_email(&self) -> Option<String> {
        self.config
            .as_ref()
            .and_then(|c| non_empty(c.author.email.clone()))
            .or_else(|| git_config("user.email"))
    }

    fn current_year(&self) -> i32 {
        chrono::Local::now().year()
    }
}

/// Query a single git config value. A missing git binary, a non-zero exit
/// or an empty value all yield `None`.
fn git_config(key: &str) -> Option<String> {
    Command::new("git")
        .args(["config", key])
        .output()
        .ok()
        .and_then(|output| {
            if output.status.success() {
                non_empty(Some(String::from_utf8_lossy(&output.stdout).into_owned()))
            } else {
                None
            }
        })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Fixed values, for tests and reproducible output.
#[derive(Debug, Clone, Default)]
pub struct FixedEnvironment {
    pub author_name: Option<String>,
    pub author_email: Option<String>,
    pub year: i32,
}

impl Environment for FixedEnvironment {
    fn author_name(&self) -> Option<String> {
        self.author_name.clone()
    }

    fn author_email(&self) -> Option<String> {
        self.author_email.clone()
    }

    fn current_year(&self) -> i32 {
        self.year
    }
}
