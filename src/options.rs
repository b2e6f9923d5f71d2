use std::fmt;

/// Per-component overrides as given on the command line.
///
/// `None` means the flag was not specified at all, which is distinct from
/// an explicit `Some(false)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ComponentOverrides {
    pub hooks: Option<bool>,
    pub commands: Option<bool>,
    pub agents: Option<bool>,
    pub skills: Option<bool>,
    pub mcp: Option<bool>,
    pub tests: Option<bool>,
}

impl ComponentOverrides {
    pub fn any_specified(&self) -> bool {
        [
            self.hooks,
            self.commands,
            self.agents,
            self.skills,
            self.mcp,
            self.tests,
        ]
        .iter()
        .any(Option::is_some)
    }
}

/// One of the optional parts generated inside each plugin directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    Hooks,
    Commands,
    Agents,
    Skills,
    Mcp,
}

/// Plugin components in the order they are written.
pub const PLUGIN_COMPONENTS: [Component; 5] = [
    Component::Hooks,
    Component::Commands,
    Component::Agents,
    Component::Skills,
    Component::Mcp,
];

/// Fully resolved component selection, shared by every plugin in a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentSet {
    pub hooks: bool,
    pub commands: bool,
    pub agents: bool,
    pub skills: bool,
    pub mcp: bool,
    pub tests: bool,
}

impl ComponentSet {
    pub const fn all(enabled: bool) -> Self {
        Self {
            hooks: enabled,
            commands: enabled,
            agents: enabled,
            skills: enabled,
            mcp: enabled,
            tests: enabled,
        }
    }

    pub fn includes(&self, component: Component) -> bool {
        match component {
            Component::Hooks => self.hooks,
            Component::Commands => self.commands,
            Component::Agents => self.agents,
            Component::Skills => self.skills,
            Component::Mcp => self.mcp,
        }
    }

    /// Names of the enabled components, in generation order.
    pub fn enabled(&self) -> Vec<&'static str> {
        [
            ("hooks", self.hooks),
            ("commands", self.commands),
            ("agents", self.agents),
            ("skills", self.skills),
            ("mcp", self.mcp),
            ("tests", self.tests),
        ]
        .into_iter()
        .filter_map(|(name, on)| on.then_some(name))
        .collect()
    }
}

impl fmt::Display for ComponentSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let enabled = self.enabled();
        if enabled.is_empty() {
            write!(f, "(none)")
        } else {
            write!(f, "{}", enabled.join(", "))
        }
    }
}

/// Resolve the requested component flags.
///
/// `minimal` disables everything. Otherwise, if any override was given, only
/// components explicitly set to `true` are produced. With no overrides at
/// all every component is enabled.
pub fn resolve_components(minimal: bool, overrides: &ComponentOverrides) -> ComponentSet {
    if minimal {
        return ComponentSet::all(false);
    }

    if !overrides.any_specified() {
        return ComponentSet::all(true);
    }

    ComponentSet {
        hooks: overrides.hooks.unwrap_or(false),
        commands: overrides.commands.unwrap_or(false),
        agents: overrides.agents.unwrap_or(false),
        skills: overrides.skills.unwrap_or(false),
        mcp: overrides.mcp.unwrap_or(false),
        tests: overrides.tests.unwrap_or(false),
    }
}
