use tera::{Context, Tera};

use crate::error::{Result, ScaffoldError};

/// Turns a template id plus context into text.
pub trait Renderer {
    fn render(&self, template: &str, context: &Context) -> Result<String>;
}

/// Template bodies compiled into the binary, keyed by template id.
pub const BUILTIN_TEMPLATES: &[(&str, &str)] = &[
    (
        "marketplace.json",
        include_str!("../../templates/marketplace.json.tera"),
    ),
    (
        "plugin.json",
        include_str!("../../templates/plugin.json.tera"),
    ),
    (
        "hooks/hooks.json",
        include_str!("../../templates/hooks/hooks.json.tera"),
    ),
    (
        "hooks/session-start.sh",
        include_str!("../../templates/hooks/session-start.sh.tera"),
    ),
    (
        "hooks/common.sh",
        include_str!("../../templates/hooks/common.sh.tera"),
    ),
    (
        "commands/example.md",
        include_str!("../../templates/commands/example.md.tera"),
    ),
    (
        "agents/example.md",
        include_str!("../../templates/agents/example.md.tera"),
    ),
    (
        "skills/SKILL.md",
        include_str!("../../templates/skills/SKILL.md.tera"),
    ),
    ("mcp.json", include_str!("../../templates/mcp.json.tera")),
    (
        "tests/example.bats",
        include_str!("../../templates/tests/example.bats.tera"),
    ),
    (
        "tests/test_helper.bash",
        include_str!("../../templates/tests/test_helper.bash.tera"),
    ),
    ("README.md", include_str!("../../templates/README.md.tera")),
    ("LICENSE", include_str!("../../templates/LICENSE.tera")),
    ("gitignore", include_str!("../../templates/gitignore.tera")),
];

/// Tera-backed renderer over [`BUILTIN_TEMPLATES`].
#[derive(Debug)]
pub struct BuiltinRenderer {
    tera: Tera,
}

impl BuiltinRenderer {
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![]);
        tera.add_raw_templates(BUILTIN_TEMPLATES.iter().copied())
            .map_err(|e| ScaffoldError::TemplateRegistration { source: e })?;
        Ok(Self { tera })
    }
}

impl Renderer for BuiltinRenderer {
    fn render(&self, template: &str, context: &Context) -> Result<String> {
        self.tera
            .render(template, context)
            .map_err(|e| ScaffoldError::RenderError {
                template: template.to_string(),
                source: e,
            })
    }
}
