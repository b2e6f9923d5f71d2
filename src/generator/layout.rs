use crate::options::Component;

/// Directory holding marketplace and plugin manifests.
pub const MANIFEST_DIR: &str = ".claude-plugin";

pub const MARKETPLACE_MANIFEST: &str = "marketplace.json";
pub const PLUGIN_MANIFEST: &str = "plugin.json";

/// A rendered file: template id, destination and whether it gets the exec bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileSpec {
    pub template: &'static str,
    pub path: &'static str,
    pub executable: bool,
}

const fn file(template: &'static str, path: &'static str) -> FileSpec {
    FileSpec {
        template,
        path,
        executable: false,
    }
}

/// Directories and files making up one component. Paths are relative to the
/// owning directory; `dirs` are created in order before any file.
#[derive(Debug, Clone, Copy)]
pub struct Layout {
    pub dirs: &'static [&'static str],
    pub files: &'static [FileSpec],
}

const HOOKS: Layout = Layout {
    dirs: &["hooks", "hooks/entrypoints", "hooks/lib"],
    files: &[
        file("hooks/hooks.json", "hooks/hooks.json"),
        FileSpec {
            template: "hooks/session-start.sh",
            path: "hooks/entrypoints/session-start.sh",
            executable: true,
        },
        file("hooks/common.sh", "hooks/lib/common.sh"),
    ],
};

const COMMANDS: Layout = Layout {
    dirs: &["commands"],
    files: &[file("commands/example.md", "commands/example.md")],
};

const AGENTS: Layout = Layout {
    dirs: &["agents"],
    files: &[file("agents/example.md", "agents/example.md")],
};

const SKILLS: Layout = Layout {
    dirs: &["skills", "skills/example-skill"],
    files: &[file("skills/SKILL.md", "skills/example-skill/SKILL.md")],
};

const MCP: Layout = Layout {
    dirs: &[],
    files: &[file("mcp.json", ".mcp.json")],
};

/// Test scaffold, created at the marketplace root.
pub const TESTS: Layout = Layout {
    dirs: &[
        "tests",
        "tests/unit",
        "tests/integration",
        "tests/fixtures",
        "tests/test_helper",
    ],
    files: &[
        file("tests/example.bats", "tests/unit/example.bats"),
        file("tests/test_helper.bash", "tests/test_helper/common.bash"),
    ],
};

/// Files rendered at the marketplace root on every run.
pub const ROOT_FILES: &[FileSpec] = &[
    file("README.md", "README.md"),
    file("LICENSE", "LICENSE"),
    file("gitignore", ".gitignore"),
];

pub fn component_layout(component: Component) -> &'static Layout {
    match component {
        Component::Hooks => &HOOKS,
        Component::Commands => &COMMANDS,
        Component::Agents => &AGENTS,
        Component::Skills => &SKILLS,
        Component::Mcp => &MCP,
    }
}
