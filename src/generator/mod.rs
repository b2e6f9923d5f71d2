pub mod layout;
pub mod writer;

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::environment::Environment;
use crate::error::Result;
use crate::name::{check_destination_free, validate_name};
use crate::options::{resolve_components, ComponentOverrides, ComponentSet, PLUGIN_COMPONENTS};
use crate::plugins::{
    derive_plugin_names, parse_plugin_count, plugin_units, PluginUnit, Topology, PLUGINS_DIR,
};
use crate::render::{build_marketplace_context, MarketplaceEntry, Renderer, TemplateContext};

use layout::{
    component_layout, FileSpec, Layout, MANIFEST_DIR, MARKETPLACE_MANIFEST, PLUGIN_MANIFEST,
    ROOT_FILES, TESTS,
};
pub use writer::{DiskWriter, PlanRecorder, PlannedEntry, TreeWriter};

/// Input to a generation run.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub name: String,
    /// Requested number of plugins, unparsed.
    pub plugin_count: String,
    pub minimal: bool,
    pub overrides: ComponentOverrides,
}

/// Outcome of a successful run.
#[derive(Debug, Clone)]
pub struct GenerationReport {
    /// Marketplace root, relative to the parent directory.
    pub root: PathBuf,
    pub components: ComponentSet,
    pub plugins: Vec<PluginUnit>,
    /// Every created directory and file, in creation order, relative to the
    /// parent directory.
    pub created: Vec<PathBuf>,
}

/// Builds a marketplace tree from a [`GenerationRequest`].
pub struct Scaffolder<'a> {
    renderer: &'a dyn Renderer,
    env: &'a dyn Environment,
}

impl<'a> Scaffolder<'a> {
    pub fn new(renderer: &'a dyn Renderer, env: &'a dyn Environment) -> Self {
        Self { renderer, env }
    }

    /// Generate `parent/<name>/`.
    ///
    /// Name, destination and plugin count are checked before the first write.
    /// A failure after that aborts immediately and leaves whatever was already
    /// written in place.
    pub fn generate(
        &self,
        request: &GenerationRequest,
        parent: &Path,
        writer: &mut dyn TreeWriter,
    ) -> Result<GenerationReport> {
        validate_name(&request.name)?;
        check_destination_free(parent, &request.name)?;

        let components = resolve_components(request.minimal, &request.overrides);
        let count = parse_plugin_count(&request.plugin_count)?;
        let names = derive_plugin_names(&request.name, count)?;
        let units = plugin_units(&names, components);
        info!(components = %components, plugins = ?names, "resolved generation request");

        let mut tree = Tree {
            root: PathBuf::from(&request.name),
            writer,
            created: Vec::new(),
        };

        tree.dir(Path::new(""))?;
        tree.dir(Path::new(MANIFEST_DIR))?;
        if Topology::for_count(units.len()) == Topology::Multi {
            tree.dir(Path::new(PLUGINS_DIR))?;
        }

        for unit in &units {
            self.materialize_plugin(&mut tree, unit)?;
        }

        let entries: Vec<_> = units
            .iter()
            .map(|unit| MarketplaceEntry {
                name: unit.name.clone(),
                source: unit.source(),
            })
            .collect();

        let manifest = Path::new(MANIFEST_DIR).join(MARKETPLACE_MANIFEST);
        self.render_root_file(&mut tree, "marketplace.json", &manifest, &entries, false)?;

        if components.tests {
            self.materialize_layout_at_root(&mut tree, &TESTS, &entries)?;
        }

        for spec in ROOT_FILES {
            self.render_root_file(
                &mut tree,
                spec.template,
                Path::new(spec.path),
                &entries,
                spec.executable,
            )?;
        }

        Ok(GenerationReport {
            root: tree.root,
            components,
            plugins: units,
            created: tree.created,
        })
    }

    fn materialize_plugin(&self, tree: &mut Tree<'_>, unit: &PluginUnit) -> Result<()> {
        debug!(plugin = %unit.name, dir = %unit.dir.display(), "creating plugin");
        tree.dir(&unit.dir)?;
        tree.dir(&unit.dir.join(MANIFEST_DIR))?;

        let manifest = FileSpec {
            template: "plugin.json",
            path: PLUGIN_MANIFEST,
            executable: false,
        };
        self.render_plugin_file(tree, unit, &manifest, Some(MANIFEST_DIR))?;

        for component in PLUGIN_COMPONENTS {
            if !unit.components.includes(component) {
                continue;
            }
            let layout = component_layout(component);
            for dir in layout.dirs {
                tree.dir(&unit.dir.join(dir))?;
            }
            for spec in layout.files {
                self.render_plugin_file(tree, unit, spec, None)?;
            }
        }

        Ok(())
    }

    fn render_plugin_file(
        &self,
        tree: &mut Tree<'_>,
        unit: &PluginUnit,
        spec: &FileSpec,
        subdir: Option<&str>,
    ) -> Result<()> {
        let context = TemplateContext::build(&unit.name, self.env).to_tera();
        let rendered = self.renderer.render(spec.template, &context)?;

        let mut dest = unit.dir.clone();
        if let Some(subdir) = subdir {
            dest.push(subdir);
        }
        dest.push(spec.path);
        tree.file(&dest, &rendered, spec.executable)
    }

    fn materialize_layout_at_root(
        &self,
        tree: &mut Tree<'_>,
        layout: &Layout,
        entries: &[MarketplaceEntry],
    ) -> Result<()> {
        for dir in layout.dirs {
            tree.dir(Path::new(dir))?;
        }
        for spec in layout.files {
            self.render_root_file(
                tree,
                spec.template,
                Path::new(spec.path),
                entries,
                spec.executable,
            )?;
        }
        Ok(())
    }

    fn render_root_file(
        &self,
        tree: &mut Tree<'_>,
        template: &str,
        dest: &Path,
        entries: &[MarketplaceEntry],
        executable: bool,
    ) -> Result<()> {
        let marketplace = tree.root.to_string_lossy().into_owned();
        let context = build_marketplace_context(&marketplace, entries, self.env);
        let rendered = self.renderer.render(template, &context)?;
        tree.file(dest, &rendered, executable)
    }
}

/// Writer plus creation log, rooted at the marketplace directory.
struct Tree<'w> {
    root: PathBuf,
    writer: &'w mut dyn TreeWriter,
    created: Vec<PathBuf>,
}

impl Tree<'_> {
    fn resolve(&self, rel: &Path) -> PathBuf {
        if rel.as_os_str().is_empty() {
            self.root.clone()
        } else {
            self.root.join(rel)
        }
    }

    fn dir(&mut self, rel: &Path) -> Result<()> {
        let path = self.resolve(rel);
        debug!(path = %path.display(), "create dir");
        self.writer.create_dir(&path)?;
        self.created.push(path);
        Ok(())
    }

    fn file(&mut self, rel: &Path, contents: &str, executable: bool) -> Result<()> {
        let path = self.resolve(rel);
        debug!(path = %path.display(), executable, "write file");
        self.writer.write_file(&path, contents, executable)?;
        self.created.push(path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::FixedEnvironment;
    use crate::error::ScaffoldError;
    use std::cell::RefCell;
    use tera::Context;

    /// Returns `<template>:<plugin_name>` and remembers every call.
    #[derive(Default)]
    struct StubRenderer {
        calls: RefCell<Vec<(String, String)>>,
        fail_on: Option<&'static str>,
    }

    impl Renderer for StubRenderer {
        fn render(&self, template: &str, context: &Context) -> Result<String> {
            if self.fail_on == Some(template) {
                return Err(ScaffoldError::RenderError {
                    template: template.to_string(),
                    source: tera::Error::msg("stub failure"),
                });
            }
            let plugin = context
                .get("plugin_name")
                .and_then(|v| v.as_str())
                .unwrap_or_default()
                .to_string();
            self.calls
                .borrow_mut()
                .push((template.to_string(), plugin.clone()));
            Ok(format!("{template}:{plugin}"))
        }
    }

    fn env() -> FixedEnvironment {
        FixedEnvironment {
            year: 2030,
            ..Default::default()
        }
    }

    fn request(name: &str, count: i64, overrides: ComponentOverrides) -> GenerationRequest {
        GenerationRequest {
            name: name.to_string(),
            plugin_count: count.to_string(),
            minimal: false,
            overrides,
        }
    }

    fn run(
        renderer: &StubRenderer,
        req: &GenerationRequest,
    ) -> (Result<GenerationReport>, PlanRecorder) {
        let parent = tempfile::tempdir().unwrap();
        let env = env();
        let mut recorder = PlanRecorder::default();
        let result = Scaffolder::new(renderer, &env).generate(req, parent.path(), &mut recorder);
        (result, recorder)
    }

    fn files(recorder: &PlanRecorder) -> Vec<String> {
        recorder
            .entries
            .iter()
            .filter_map(|e| match e {
                PlannedEntry::File { path, .. } => Some(path.to_string_lossy().into_owned()),
                PlannedEntry::Dir(_) => None,
            })
            .collect()
    }

    #[test]
    fn single_plugin_full_tree_order() {
        let renderer = StubRenderer::default();
        let (result, recorder) = run(&renderer, &request("acme", 1, Default::default()));
        result.unwrap();

        assert_eq!(
            files(&recorder),
            vec![
                "acme/plugin/.claude-plugin/plugin.json",
                "acme/plugin/hooks/hooks.json",
                "acme/plugin/hooks/entrypoints/session-start.sh",
                "acme/plugin/hooks/lib/common.sh",
                "acme/plugin/commands/example.md",
                "acme/plugin/agents/example.md",
                "acme/plugin/skills/example-skill/SKILL.md",
                "acme/plugin/.mcp.json",
                "acme/.claude-plugin/marketplace.json",
                "acme/tests/unit/example.bats",
                "acme/tests/test_helper/common.bash",
                "acme/README.md",
                "acme/LICENSE",
                "acme/.gitignore",
            ]
        );
    }

    #[test]
    fn root_directories_come_first() {
        let renderer = StubRenderer::default();
        let (_, recorder) = run(&renderer, &request("acme", 2, Default::default()));

        let first: Vec<_> = recorder.entries.iter().take(4).map(PlannedEntry::path).collect();
        assert_eq!(
            first,
            vec![
                Path::new("acme"),
                Path::new("acme/.claude-plugin"),
                Path::new("acme/plugins"),
                Path::new("acme/plugins/acme-core"),
            ]
        );
    }

    #[test]
    fn each_plugin_renders_with_its_own_name() {
        let renderer = StubRenderer::default();
        let overrides = ComponentOverrides {
            commands: Some(true),
            ..Default::default()
        };
        let (result, _) = run(&renderer, &request("acme", 3, overrides));
        let report = result.unwrap();
        assert_eq!(report.plugins.len(), 3);

        let plugin_calls: Vec<_> = renderer
            .calls
            .borrow()
            .iter()
            .filter(|(t, _)| t == "plugin.json" || t == "commands/example.md")
            .cloned()
            .collect();
        assert_eq!(
            plugin_calls,
            vec![
                ("plugin.json".to_string(), "acme-core".to_string()),
                ("commands/example.md".to_string(), "acme-core".to_string()),
                ("plugin.json".to_string(), "acme-hooks".to_string()),
                ("commands/example.md".to_string(), "acme-hooks".to_string()),
                ("plugin.json".to_string(), "acme-extras".to_string()),
                ("commands/example.md".to_string(), "acme-extras".to_string()),
            ]
        );
    }

    #[test]
    fn marketplace_and_root_files_use_marketplace_name() {
        let renderer = StubRenderer::default();
        let (result, _) = run(&renderer, &request("acme", 2, Default::default()));
        result.unwrap();

        for (template, plugin) in renderer.calls.borrow().iter() {
            if ["marketplace.json", "README.md", "LICENSE", "gitignore"].contains(&template.as_str())
            {
                assert_eq!(plugin, "acme", "{template} rendered for {plugin}");
            }
        }
    }

    #[test]
    fn minimal_writes_manifests_and_root_files_only() {
        let renderer = StubRenderer::default();
        let mut req = request("acme", 1, Default::default());
        req.minimal = true;
        let (result, recorder) = run(&renderer, &req);

        let report = result.unwrap();
        assert_eq!(report.components, ComponentSet::all(false));
        assert_eq!(
            files(&recorder),
            vec![
                "acme/plugin/.claude-plugin/plugin.json",
                "acme/.claude-plugin/marketplace.json",
                "acme/README.md",
                "acme/LICENSE",
                "acme/.gitignore",
            ]
        );
    }

    #[test]
    fn tests_scaffold_independent_of_plugin_count() {
        let overrides = ComponentOverrides {
            tests: Some(true),
            ..Default::default()
        };
        for count in [1, 4] {
            let renderer = StubRenderer::default();
            let (_, recorder) = run(&renderer, &request("acme", count, overrides));
            let test_files: Vec<_> = files(&recorder)
                .into_iter()
                .filter(|f| f.starts_with("acme/tests/"))
                .collect();
            assert_eq!(
                test_files,
                vec!["acme/tests/unit/example.bats", "acme/tests/test_helper/common.bash"]
            );
        }
    }

    #[test]
    fn only_entrypoint_is_executable() {
        let renderer = StubRenderer::default();
        let (_, recorder) = run(&renderer, &request("acme", 1, Default::default()));

        let executables: Vec<_> = recorder
            .entries
            .iter()
            .filter_map(|e| match e {
                PlannedEntry::File {
                    path,
                    executable: true,
                    ..
                } => Some(path.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(
            executables,
            vec![PathBuf::from("acme/plugin/hooks/entrypoints/session-start.sh")]
        );
    }

    #[test]
    fn invalid_name_writes_nothing() {
        let renderer = StubRenderer::default();
        let (result, recorder) = run(&renderer, &request("-bad", 1, Default::default()));
        assert!(matches!(result, Err(ScaffoldError::InvalidName { .. })));
        assert!(recorder.entries.is_empty());
    }

    #[test]
    fn invalid_count_writes_nothing() {
        let renderer = StubRenderer::default();
        let (result, recorder) = run(&renderer, &request("acme", 11, Default::default()));
        assert!(matches!(
            result,
            Err(ScaffoldError::InvalidPluginCount { ref value }) if value == "11"
        ));
        assert!(recorder.entries.is_empty());
    }

    #[test]
    fn unparsable_count_writes_nothing() {
        let renderer = StubRenderer::default();
        let mut req = request("acme", 1, Default::default());
        req.plugin_count = "two".to_string();
        let (result, recorder) = run(&renderer, &req);
        assert!(matches!(
            result,
            Err(ScaffoldError::InvalidPluginCount { ref value }) if value == "two"
        ));
        assert!(recorder.entries.is_empty());
    }

    #[test]
    fn render_failure_stops_the_run() {
        let renderer = StubRenderer {
            fail_on: Some("marketplace.json"),
            ..Default::default()
        };
        let (result, recorder) = run(&renderer, &request("acme", 1, Default::default()));

        assert!(matches!(result, Err(ScaffoldError::RenderError { .. })));
        let written = files(&recorder);
        assert_eq!(written.last().map(String::as_str), Some("acme/plugin/.mcp.json"));
        assert!(!written.iter().any(|f| f.ends_with("README.md")));
    }

    #[test]
    fn report_lists_created_paths_in_order() {
        let renderer = StubRenderer::default();
        let (result, recorder) = run(&renderer, &request("acme", 1, Default::default()));
        let report = result.unwrap();

        let recorded: Vec<_> = recorder
            .entries
            .iter()
            .map(|e| e.path().to_path_buf())
            .collect();
        assert_eq!(report.created, recorded);
        assert_eq!(report.root, PathBuf::from("acme"));
    }
}
