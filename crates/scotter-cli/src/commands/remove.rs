//! `scotter remove`: shrink capability lists or disable a pipeline feature.

use tracing::instrument;

use crate::{
    cli::{RemoveArgs, RemoveTarget},
    commands::project_service,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all, fields(project = %args.project.display()))]
pub fn execute(args: RemoveArgs, output: OutputManager) -> CliResult<()> {
    let service = project_service()?;
    let root = args.project.as_path();

    match args.target {
        RemoveTarget::Platform { value } => {
            service.remove_platform(root, &value)?;
            output.success(&format!("Removed platform '{value}'"))?;
        }
        RemoveTarget::Architecture { value } => {
            service.remove_architecture(root, &value)?;
            output.success(&format!("Removed architecture '{value}'"))?;
        }
        RemoveTarget::ReleaseAsset { value } => {
            service.remove_release_asset(root, &value)?;
            output.success(&format!("Removed release asset '{value}'"))?;
        }
        RemoveTarget::Feature { id } => {
            service.remove_feature(root, &id)?;
            output.success(&format!("Disabled feature '{id}'"))?;
            output.info("Previously generated workflow files are left in place")?;
        }
    }

    Ok(())
}
