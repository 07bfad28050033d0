//! `scotter add`: grow a project's capability lists, attach a CI provider or
//! enable a pipeline feature. Every change is checked against the providers
//! before the record is saved.

use tracing::instrument;

use crate::{
    cli::{AddArgs, AddTarget},
    commands::project_service,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all, fields(project = %args.project.display()))]
pub fn execute(args: AddArgs, output: OutputManager) -> CliResult<()> {
    let service = project_service()?;
    let root = args.project.as_path();

    match args.target {
        AddTarget::Ci { provider } => {
            let config = service.add_ci(root, &provider)?;
            output.success(&format!(
                "CI provider '{}' attached; workflows generated for {}",
                provider,
                config.project_name()
            ))?;
        }
        AddTarget::Platform { value } => {
            service.add_platform(root, &value)?;
            output.success(&format!("Added platform '{value}'"))?;
        }
        AddTarget::Architecture { value } => {
            service.add_architecture(root, &value)?;
            output.success(&format!("Added architecture '{value}'"))?;
        }
        AddTarget::ReleaseAsset { value } => {
            service.add_release_asset(root, &value)?;
            output.success(&format!("Added release asset '{value}'"))?;
        }
        AddTarget::Feature { id } => {
            let change = service.add_feature(root, &id)?;
            if change.changed.is_empty() {
                output.info(&format!("Feature '{id}' is already enabled"))?;
            } else {
                output.success(&format!("Enabled: {}", change.changed.join(", ")))?;
            }
            if change.config.ci_provider().is_none() {
                output.warning("No CI provider attached; run 'scotter add ci <provider>'")?;
            }
        }
    }

    Ok(())
}
