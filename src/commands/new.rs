use std::path::PathBuf;

use console::style;
use miette::Result;
use plugin_scaffold::generator::PlannedEntry;
use plugin_scaffold::options::ComponentOverrides;
use plugin_scaffold::GenerateOptions;

use crate::cli::ComponentFlags;

impl From<ComponentFlags> for ComponentOverrides {
    fn from(flags: ComponentFlags) -> Self {
        ComponentOverrides {
            hooks: flags.hooks,
            commands: flags.commands,
            agents: flags.agents,
            skills: flags.skills,
            mcp: flags.mcp,
            tests: flags.tests,
        }
    }
}

pub fn run(
    name: String,
    plugins: String,
    minimal: bool,
    components: ComponentFlags,
    directory: Option<PathBuf>,
    dry_run: bool,
    verbose: bool,
) -> Result<()> {
    let options = GenerateOptions {
        name,
        directory,
        plugins,
        minimal,
        overrides: components.into(),
    };

    if dry_run {
        let plan = plugin_scaffold::plan_generation(&options)?;

        println!(
            "\n{} Dry run \u{2014} files that would be generated in {}:",
            style("==>").cyan().bold(),
            style(plan.parent.join(&plan.report.root).display()).cyan()
        );
        println!("  components: {}", plan.report.components);

        for entry in &plan.entries {
            let action = match entry {
                PlannedEntry::Dir(_) => "mkdir ",
                PlannedEntry::File {
                    executable: true, ..
                } => "create+x",
                PlannedEntry::File { .. } => "create",
            };
            println!("  {} {}", style(action).green(), entry.path().display());

            if let (true, PlannedEntry::File { contents, .. }) = (verbose, entry) {
                println!("  {}", style("──────").dim());
                for line in contents.lines() {
                    println!("  {}", line);
                }
                println!("  {}", style("──────").dim());
                println!();
            }
        }

        println!(
            "\n{} Dry run \u{2014} no files written.",
            style("\u{2139}").blue().bold()
        );
        return Ok(());
    }

    let report = plugin_scaffold::generate(&options)?;
    let root = match &options.directory {
        Some(dir) => dir.join(&report.root),
        None => report.root.clone(),
    };

    for path in &report.created {
        println!("  {} {}", style("create").green(), path.display());
    }

    println!(
        "\n{} Marketplace '{}' created with {} plugin(s)",
        style("\u{2713}").green().bold(),
        style(report.root.display()).cyan(),
        report.plugins.len()
    );
    println!("  cd {}", root.display());

    Ok(())
}
