//! Tree compilation command.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use serde_json::Value;
use stylebook_core::{compile, serialize, LoaderRegistry, StyleguideConfig};
use stylebook_props::InterfaceExtractor;

/// Compile the configured style guide into its JSON artifact.
pub fn build_artifact(config_path: &Path, resolve: bool) -> Result<Value> {
    let config = StyleguideConfig::from_file(config_path)
        .with_context(|| format!("Failed to load {}", config_path.display()))?;

    let tree = compile(&config).context("Failed to compile documentation tree")?;
    let artifact = serialize(&tree);

    if !resolve {
        return Ok(artifact);
    }

    let registry = LoaderRegistry::with_defaults(Arc::new(InterfaceExtractor::new()));
    registry
        .resolve_artifact(&artifact)
        .context("Failed to resolve documentation tree")
}

/// Run the compile command.
pub fn run(config_path: &Path, output: Option<PathBuf>, resolve: bool) -> Result<()> {
    tracing::info!("Compiling style guide...");

    let artifact = build_artifact(config_path, resolve)?;
    let text = serde_json::to_string_pretty(&artifact)?;

    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            fs::write(&path, text + "\n")
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Output: {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", text)?;
        }
    }

    Ok(())
}
