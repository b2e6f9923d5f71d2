use serde::Serialize;
use tera::Context;

use crate::environment::Environment;

pub const DEFAULT_AUTHOR_NAME: &str = "Your Name";
pub const DEFAULT_AUTHOR_EMAIL: &str = "your@email.com";

/// Variables available to every template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateContext {
    pub plugin_name: String,
    pub plugin_class_name: String,
    pub author_name: String,
    pub author_email: String,
    pub year: i32,
}

impl TemplateContext {
    /// Build a fresh context for `identifier`. Author and year are looked up
    /// on every call.
    pub fn build(identifier: &str, env: &dyn Environment) -> Self {
        Self {
            plugin_name: identifier.to_string(),
            plugin_class_name: class_name(identifier),
            author_name: env
                .author_name()
                .unwrap_or_else(|| DEFAULT_AUTHOR_NAME.to_string()),
            author_email: env
                .author_email()
                .unwrap_or_else(|| DEFAULT_AUTHOR_EMAIL.to_string()),
            year: env.current_year(),
        }
    }

    pub fn to_tera(&self) -> Context {
        let mut context = Context::new();
        context.insert("plugin_name", &self.plugin_name);
        context.insert("plugin_class_name", &self.plugin_class_name);
        context.insert("author_name", &self.author_name);
        context.insert("author_email", &self.author_email);
        context.insert("year", &self.year);
        context
    }
}

/// One `plugins` entry of the marketplace manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarketplaceEntry {
    pub name: String,
    pub source: String,
}

/// Context for marketplace-level files: the base context of the marketplace
/// name plus the ordered plugin list.
pub fn build_marketplace_context(
    marketplace: &str,
    entries: &[MarketplaceEntry],
    env: &dyn Environment,
) -> Context {
    let mut context = TemplateContext::build(marketplace, env).to_tera();
    context.insert("marketplace_name", marketplace);
    context.insert("plugins", entries);
    context
}

/// `my-plugin` -> `MyPlugin`. Each `-` segment keeps only its first letter
/// upper-cased.
pub fn class_name(identifier: &str) -> String {
    identifier
        .split('-')
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect()
}
