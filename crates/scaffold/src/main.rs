//! scaffold - Project skeleton for data-science repositories
//!
//! Run with no arguments to create every missing manifest file in the current
//! directory.
//!
//! Commands:
//! - (none): create missing files
//! - list: show the manifest by category

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dskit_core::{logging, Config, Paths};
use scaffold::{validate_project_name, Category, Manifest, Placeholder, Scaffolder};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "scaffold")]
#[command(about = "Create the standard data-science project skeleton")]
#[command(version)]
#[command(after_help = r#"PLACEHOLDERS:
    Dockerfile          python:3.11-slim image running app.py
    requirements.txt    comments only
    setup.py            setuptools script for src/<NAME>
    app.py              prints a message when run directly
    *.yaml              single comment line
    *.html              minimal page with a heading
    anything else       empty file

Existing files are never overwritten.

EXAMPLES:
    scaffold                        # Create missing files here
    scaffold --root ../churn        # Scaffold another directory
    scaffold --name churn           # Use src/churn instead of src/datascience
    scaffold --dry-run              # Show what would be created
    scaffold list --json            # Print the manifest
"#)]
struct Cli {
    /// Directory to scaffold into
    #[arg(long, global = true, default_value = ".")]
    root: PathBuf,

    /// Package name under src/ (default: project_name from config)
    #[arg(long, global = true)]
    name: Option<String>,

    /// Config file (default: $DSKIT_CONFIG or ~/.config/dskit/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Report what would be created without writing anything
    #[arg(long)]
    dry_run: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List manifest entries by category
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.unwrap_or_else(|| Paths::new().config_file());
    let config = Config::load(&config_path)?;

    logging::init(&config.log_level);

    let name = cli.name.unwrap_or(config.project_name);
    validate_project_name(&name)?;
    let manifest = Manifest::new(&name);

    match cli.command {
        Some(Commands::List { json }) => cmd_list(&manifest, json),
        None if cli.dry_run => cmd_plan(&manifest, &cli.root),
        None => cmd_run(&manifest, &cli.root),
    }
}

/// Create every missing manifest file
fn cmd_run(manifest: &Manifest, root: &Path) -> Result<()> {
    let scaffolder = Scaffolder::new(root, manifest.project_name());

    let report = scaffolder
        .scaffold(&manifest.files())
        .with_context(|| format!("Failed to scaffold project in {}", root.display()))?;

    debug!(
        "{} directories created, {} files created, {} files skipped",
        report.created_dirs.len(),
        report.created_files.len(),
        report.skipped_files.len()
    );
    info!("Project structure created successfully.");

    Ok(())
}

/// Show what a run would create
fn cmd_plan(manifest: &Manifest, root: &Path) -> Result<()> {
    let scaffolder = Scaffolder::new(root, manifest.project_name());
    let plan = scaffolder.plan(&manifest.files());

    let mut pending = 0;
    for file in &plan {
        if file.exists {
            println!("  \x1b[2mexists  {}\x1b[0m", file.path.display());
        } else {
            pending += 1;
            println!(
                "  \x1b[32mcreate\x1b[0m  {} \x1b[2m({})\x1b[0m",
                file.path.display(),
                file.placeholder.as_str()
            );
        }
    }

    println!();
    println!("{} of {} files would be created in {}", pending, plan.len(), root.display());

    Ok(())
}

/// List manifest entries
fn cmd_list(manifest: &Manifest, json: bool) -> Result<()> {
    if json {
        let json_output: Vec<_> = manifest
            .entries()
            .iter()
            .map(|e| {
                serde_json::json!({
                    "category": e.category,
                    "path": e.path.to_string_lossy(),
                    "placeholder": Placeholder::for_path(&e.path),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&json_output)?);
        return Ok(());
    }

    println!("\x1b[1mManifest: {}\x1b[0m", manifest.project_name());
    println!();

    for category in Category::ALL {
        println!("\x1b[36m{}:\x1b[0m", category.as_str());
        for path in manifest.in_category(category) {
            println!("  {}", path.display());
        }
        println!();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_arguments_scaffolds_current_dir() {
        let cli = Cli::try_parse_from(["scaffold"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.dry_run);
        assert_eq!(cli.root, PathBuf::from("."));
        assert!(cli.name.is_none());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["scaffold", "list", "--json", "--name", "churn"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::List { json: true })));
        assert_eq!(cli.name.as_deref(), Some("churn"));
    }

    #[test]
    fn test_run_into_temp_root() {
        let tmp = tempfile::TempDir::new().unwrap();
        let manifest = Manifest::new("churn");

        cmd_run(&manifest, tmp.path()).unwrap();
        cmd_run(&manifest, tmp.path()).unwrap();

        assert!(tmp.path().join("src/churn/__init__.py").is_file());
        assert!(tmp.path().join("templates/index.html").is_file());
    }
}
