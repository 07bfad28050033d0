//! Implementation of the `scotter init` command.
//!
//! Translates arguments plus configured defaults into an [`InitRequest`],
//! runs it through the project service and reports the outcome.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use scotter_core::{
    application::{InitReport, InitRequest, SeedDefaults},
    domain::ContainerFormat,
};

use crate::{
    cli::InitArgs,
    commands::project_service,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[instrument(skip_all, fields(project = %args.name))]
pub fn execute(args: InitArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let (project_name, project_root) = resolve_project_path(&args.name)?;
    validate_project_name(&project_name)?;

    let request = build_request(args, project_name, project_root, &config)?;
    debug!(
        language = %request.language,
        project_type = request.project_type.as_deref().unwrap_or("(provider default)"),
        ci = request.ci_provider.as_deref().unwrap_or("none"),
        "Init request resolved"
    );

    let service = project_service()?;
    output.header(&format!("Creating '{}'...", request.project_name))?;
    let root = request.project_root.clone();
    let report = service.init_project(request)?;
    info!(path = %root.display(), "Project created");

    report_outcome(&report, &root, &output)?;

    if !output.is_quiet() {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!("  cd {}", root.display()))?;
        output.print("  scotter add platform <name>")?;
    }

    Ok(())
}

fn build_request(
    args: InitArgs,
    project_name: String,
    project_root: PathBuf,
    config: &AppConfig,
) -> CliResult<InitRequest> {
    let defaults = &config.defaults;

    let container_format = args
        .container_format
        .as_deref()
        .unwrap_or(&defaults.container_format)
        .parse::<ContainerFormat>()
        .map_err(|e| CliError::InvalidInput {
            message: e.to_string(),
            source: Some(Box::new(e)),
        })?;

    let features = if args.features.is_empty() {
        defaults.features.clone()
    } else {
        args.features
    };

    let seed = if args.no_defaults {
        SeedDefaults::default()
    } else {
        SeedDefaults {
            platforms: defaults.platforms.clone(),
            architectures: defaults.architectures.clone(),
            release_assets: defaults.release_assets.clone(),
        }
    };

    let taskfile = match (args.taskfile, args.no_taskfile) {
        (_, true) => false,
        (true, false) => true,
        (false, false) => defaults.taskfile,
    };
    let extra = BTreeMap::from([("taskfile".to_string(), serde_json::Value::Bool(taskfile))]);

    Ok(InitRequest {
        project_root,
        project_name,
        language: args.language.unwrap_or_else(|| defaults.language.clone()),
        project_type: args.project_type.or_else(|| defaults.project_type.clone()),
        ci_provider: args.ci.or_else(|| defaults.ci_provider.clone()),
        features,
        container_format,
        seed,
        extra,
        force: args.force,
    })
}

fn report_outcome(report: &InitReport, root: &Path, output: &OutputManager) -> CliResult<()> {
    let config = &report.config;
    output.success(&format!(
        "Project '{}' created at {}",
        config.project_name(),
        root.display()
    ))?;
    output.info(&format!(
        "Language: {}  Type: {}  CI: {}",
        config.language(),
        config.project_type(),
        config.ci_provider().unwrap_or("none"),
    ))?;

    if !config.pipeline_features().is_empty() {
        output.info(&format!(
            "Pipeline features: {}",
            config.pipeline_features().join(", ")
        ))?;
    }
    if !report.implied_features.is_empty() {
        let implied: Vec<&str> = report.implied_features.iter().map(String::as_str).collect();
        output.info(&format!("Added as prerequisites: {}", implied.join(", ")))?;
    }
    for skipped in &report.skipped {
        output.warning(&format!(
            "Skipped default {} '{}': {}",
            skipped.kind, skipped.value, skipped.reason
        ))?;
    }

    Ok(())
}

// ── Path resolution ───────────────────────────────────────────────────────────

/// Split `name` into the project name (its last component) and the project
/// root (the whole path).
pub fn resolve_project_path(name: &str) -> CliResult<(String, PathBuf)> {
    let path = Path::new(name);

    let project_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| CliError::InvalidProjectName {
            name: name.into(),
            reason: "cannot extract a project name from the path".into(),
        })?
        .to_string();

    Ok((project_name, path.to_path_buf()))
}

pub fn validate_project_name(name: &str) -> CliResult<()> {
    let invalid = |reason: &str| {
        Err(CliError::InvalidProjectName {
            name: name.into(),
            reason: reason.into(),
        })
    };

    if name.is_empty() {
        return invalid("must not be empty");
    }
    if name.starts_with('.') {
        return invalid("must not start with '.'");
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return invalid("only letters, digits, '-' and '_' are allowed");
    }
    Ok(())
}
