use crate::domain::{
    entities::ProjectConfig, error::DomainError, features::FeatureCatalog,
    capabilities::LanguageCapability, value_objects::CapabilityKind,
};

/// Centralized domain validation.
///
/// Checks that span more than one domain object live here.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_project_config(config: &ProjectConfig) -> Result<(), DomainError> {
        config.validate()
    }

    /// A freshly built record against the language that will generate it.
    pub fn validate_new_project<P>(config: &ProjectConfig, language: &P) -> Result<(), DomainError>
    where
        P: LanguageCapability + ?Sized,
    {
        config.validate()?;
        if !language.is_supported_project_type(config.project_type()) {
            return Err(DomainError::UnsupportedCapability {
                kind: CapabilityKind::ProjectType,
                value: config.project_type().to_string(),
                provider: language.name().to_string(),
                supported: language
                    .supported_project_types()
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            });
        }
        Ok(())
    }

    pub fn validate_features(
        config: &ProjectConfig,
        catalog: &FeatureCatalog,
    ) -> Result<(), DomainError> {
        catalog.validate_selection(config.pipeline_features())?;
        let closed = catalog.resolve(config.pipeline_features().iter().cloned());
        if closed.len() != config.pipeline_features().len() {
            let missing: Vec<String> = closed
                .into_iter()
                .filter(|f| !config.has_feature(f))
                .collect();
            return Err(DomainError::InvalidProject(format!(
                "pipeline features are missing prerequisites: {}",
                missing.join(", ")
            )));
        }
        Ok(())
    }
}
