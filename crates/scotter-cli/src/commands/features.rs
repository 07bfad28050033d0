//! `scotter features`: print the pipeline feature catalog, or preview what a
//! selection expands to once prerequisites are added.

use serde::Serialize;

use scotter_core::{domain::FeatureCatalog, error::ScotterError};

use crate::{cli::FeaturesArgs, error::CliResult, output::OutputManager};

#[derive(Debug, Serialize)]
struct FeatureRow<'a> {
    id: &'a str,
    name: &'a str,
    description: &'a str,
    requires: &'a [&'a str],
}

#[derive(Debug, Serialize, PartialEq)]
struct Resolution {
    selected: Vec<String>,
    resolved: Vec<String>,
    implied: Vec<String>,
}

pub fn execute(args: FeaturesArgs, output: OutputManager) -> CliResult<()> {
    let catalog = FeatureCatalog::builtin();

    if args.resolve.is_empty() {
        let rows = catalog_rows(&catalog);
        if output.wants_json(args.format) {
            return output.json(&rows);
        }

        output.header("Pipeline features:")?;
        for row in &rows {
            let requires = if row.requires.is_empty() {
                String::new()
            } else {
                format!("  (requires {})", row.requires.join(", "))
            };
            output.print(&format!("  {:<12} {}{}", row.id, row.description, requires))?;
        }
        return Ok(());
    }

    let resolution = resolve(&catalog, args.resolve)?;
    if output.wants_json(args.format) {
        return output.json(&resolution);
    }

    output.header(&format!("Selection: {}", resolution.selected.join(", ")))?;
    output.print(&format!("  Resolved: {}", resolution.resolved.join(", ")))?;
    if !resolution.implied.is_empty() {
        output.print(&format!("  Implied:  {}", resolution.implied.join(", ")))?;
    }
    Ok(())
}

fn catalog_rows(catalog: &FeatureCatalog) -> Vec<FeatureRow<'_>> {
    catalog
        .iter()
        .map(|f| FeatureRow {
            id: f.id,
            name: f.name,
            description: f.description,
            requires: f.requires,
        })
        .collect()
}

fn resolve(catalog: &FeatureCatalog, selected: Vec<String>) -> CliResult<Resolution> {
    catalog
        .validate_selection(&selected)
        .map_err(ScotterError::from)?;
    let resolved = catalog.resolve(selected.iter().cloned());
    let implied = catalog.implied_by(selected.iter().cloned());

    Ok(Resolution {
        selected,
        resolved: resolved.into_iter().collect(),
        implied: implied.into_iter().collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;

    #[test]
    fn release_pulls_in_its_chain() {
        let resolution = resolve(&FeatureCatalog::builtin(), vec!["release".into()]).unwrap();
        assert_eq!(
            resolution,
            Resolution {
                selected: vec!["release".into()],
                resolved: vec!["changelog".into(), "commit-lint".into(), "release".into()],
                implied: vec!["changelog".into(), "commit-lint".into()],
            }
        );
    }

    #[test]
    fn unknown_feature_is_not_found() {
        let err = resolve(&FeatureCatalog::builtin(), vec!["nope".into()]).unwrap_err();
        assert!(matches!(err, CliError::Core(_)));
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn rows_cover_the_whole_catalog() {
        let catalog = FeatureCatalog::builtin();
        let rows = catalog_rows(&catalog);
        assert_eq!(rows.len(), catalog.len());
        let json = serde_json::to_value(&rows).unwrap();
        assert!(json.as_array().unwrap().iter().any(|r| r["id"] == "release"
            && r["requires"] == serde_json::json!(["changelog"])));
    }
}
