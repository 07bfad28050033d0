//! `scotter plugins`: list registered providers and what each supports.

use std::sync::Arc;

use serde::Serialize;

use scotter_adapters::LocalFilesystem;
use scotter_core::{
    application::ProviderRegistry,
    domain::{CiCapability, LanguageCapability},
};

use crate::{
    cli::PluginsArgs, commands::builtin_registry, error::CliResult, output::OutputManager,
};

#[derive(Debug, Serialize)]
struct LanguageRow {
    name: String,
    project_types: Vec<String>,
    platforms: Vec<String>,
    architectures: Vec<String>,
    release_assets: Vec<String>,
}

#[derive(Debug, Serialize)]
struct CiRow {
    name: String,
    languages: Vec<String>,
}

#[derive(Debug, Serialize)]
struct Listing {
    languages: Vec<LanguageRow>,
    ci: Vec<CiRow>,
}

pub fn execute(args: PluginsArgs, output: OutputManager) -> CliResult<()> {
    let registry = builtin_registry(Arc::new(LocalFilesystem::new()))?;
    let listing = listing(&registry)?;

    if output.wants_json(args.format) {
        return output.json(&listing);
    }

    output.header("Language providers:")?;
    for lang in &listing.languages {
        output.print(&format!("  {}", lang.name))?;
        output.print(&format!("    project types:  {}", lang.project_types.join(", ")))?;
        output.print(&format!("    platforms:      {}", lang.platforms.join(", ")))?;
        output.print(&format!("    architectures:  {}", lang.architectures.join(", ")))?;
        output.print(&format!("    release assets: {}", lang.release_assets.join(", ")))?;
    }

    output.print("")?;
    output.header("CI providers:")?;
    for ci in &listing.ci {
        output.print(&format!("  {:<10} languages: {}", ci.name, ci.languages.join(", ")))?;
    }

    Ok(())
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// Providers sorted by name.
fn listing(registry: &ProviderRegistry) -> CliResult<Listing> {
    let mut languages: Vec<LanguageRow> = registry
        .languages()?
        .iter()
        .map(|p| LanguageRow {
            name: p.name().to_string(),
            project_types: owned(p.supported_project_types()),
            platforms: owned(p.supported_platforms()),
            architectures: owned(p.supported_architectures()),
            release_assets: owned(p.supported_release_assets()),
        })
        .collect();
    languages.sort_by(|a, b| a.name.cmp(&b.name));

    let mut ci: Vec<CiRow> = registry
        .ci_providers()?
        .iter()
        .map(|p| CiRow {
            name: p.name().to_string(),
            languages: owned(p.supported_languages()),
        })
        .collect();
    ci.sort_by(|a, b| a.name.cmp(&b.name));

    Ok(Listing { languages, ci })
}
