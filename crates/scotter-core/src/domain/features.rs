//! Pipeline feature catalog and prerequisite resolution.
//!
//! The catalog is a small static graph: each feature lists the features it
//! needs. [`FeatureCatalog::resolve`] expands a selection into its
//! prerequisite closure so that the list persisted in a project record is
//! always self-consistent.

use std::collections::{BTreeSet, HashMap, HashSet};

use crate::domain::DomainError;

// ── Feature definitions ──────────────────────────────────────────────────────

/// One catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    /// Unique identifier, as stored in `.scotter.yaml`.
    pub id: &'static str,

    /// Human-readable name for listings.
    pub name: &'static str,

    pub description: &'static str,

    /// Features that must be enabled whenever this one is.
    pub requires: &'static [&'static str],
}

/// The built-in pipeline features.
///
/// Invariants (checked by `assert_catalog_integrity`):
/// - ids are unique
/// - every prerequisite names a feature in this table
/// - the prerequisite graph is acyclic
pub static PIPELINE_FEATURES: &[Feature] = &[
    Feature {
        id: "ci",
        name: "CI Pipeline",
        description: "Continuous Integration pipeline (build, test)",
        requires: &[],
    },
    Feature {
        id: "commit-lint",
        name: "Commit Lint",
        description: "Validates commit message format",
        requires: &[],
    },
    Feature {
        id: "changelog",
        name: "Changelog",
        description: "Generates a changelog from commits",
        requires: &["commit-lint"],
    },
    Feature {
        id: "release",
        name: "Automatic Release",
        description: "Creates releases automatically on tag push",
        requires: &["changelog"],
    },
    Feature {
        id: "dependabot",
        name: "Dependabot",
        description: "Automatic dependency updates",
        requires: &[],
    },
    Feature {
        id: "container",
        name: "Container",
        description: "Container build file (Dockerfile or Containerfile)",
        requires: &[],
    },
];

// ── Catalog ──────────────────────────────────────────────────────────────────

/// An immutable, validated set of features.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureCatalog {
    features: Vec<Feature>,
}

impl FeatureCatalog {
    /// Build a catalog, rejecting duplicate ids, dangling prerequisite
    /// references and prerequisite cycles.
    pub fn new(features: impl IntoIterator<Item = Feature>) -> Result<Self, DomainError> {
        let features: Vec<Feature> = features.into_iter().collect();

        let mut seen = HashSet::new();
        for feature in &features {
            if !seen.insert(feature.id) {
                return Err(DomainError::MalformedCatalog {
                    reason: format!("duplicate feature id '{}'", feature.id),
                });
            }
        }

        for feature in &features {
            if let Some(missing) = feature.requires.iter().find(|dep| !seen.contains(*dep)) {
                return Err(DomainError::MalformedCatalog {
                    reason: format!(
                        "feature '{}' requires unknown feature '{}'",
                        feature.id, missing
                    ),
                });
            }
        }

        if let Some(cycle) = find_cycle(&features) {
            return Err(DomainError::MalformedCatalog {
                reason: format!("prerequisite cycle: {}", cycle.join(" -> ")),
            });
        }

        Ok(Self { features })
    }

    /// The built-in pipeline catalog.
    pub fn builtin() -> Self {
        // PIPELINE_FEATURES is covered by assert_catalog_integrity.
        Self {
            features: PIPELINE_FEATURES.to_vec(),
        }
    }

    pub fn get(&self, id: &str) -> Option<&Feature> {
        self.features.iter().find(|f| f.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Features in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Feature> {
        self.features.iter()
    }

    pub fn ids(&self) -> Vec<&'static str> {
        self.features.iter().map(|f| f.id).collect()
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Reject any id that is not in the catalog.
    pub fn validate_selection<I, S>(&self, selected: I) -> Result<(), DomainError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for id in selected {
            let id = id.as_ref();
            if !self.contains(id) {
                return Err(DomainError::UnknownFeature {
                    id: id.to_string(),
                    available: self.ids().into_iter().map(String::from).collect(),
                });
            }
        }
        Ok(())
    }

    /// Expand `selected` into its prerequisite closure.
    ///
    /// Ids that are not in the catalog are kept as-is and contribute no
    /// prerequisites. The result is ordered, so callers that persist it get
    /// stable output across runs.
    pub fn resolve<I, S>(&self, selected: I) -> BTreeSet<String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut resolved: BTreeSet<String> = selected.into_iter().map(Into::into).collect();

        loop {
            let mut changed = false;
            for feature in &self.features {
                if !resolved.contains(feature.id) {
                    continue;
                }
                for dep in feature.requires {
                    changed |= resolved.insert((*dep).to_string());
                }
            }
            if !changed {
                return resolved;
            }
        }
    }

    /// [`validate_selection`](Self::validate_selection) followed by
    /// [`resolve`](Self::resolve).
    pub fn resolve_validated<I, S>(&self, selected: I) -> Result<BTreeSet<String>, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let selected: Vec<String> = selected
            .into_iter()
            .map(|s| s.as_ref().to_string())
            .collect();
        self.validate_selection(&selected)?;
        Ok(self.resolve(selected))
    }

    /// Ids the closure adds on top of `selected`.
    pub fn implied_by<I, S>(&self, selected: I) -> BTreeSet<String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let selected: BTreeSet<String> = selected.into_iter().map(Into::into).collect();
        self.resolve(selected.iter().cloned())
            .into_iter()
            .filter(|id| !selected.contains(id))
            .collect()
    }

    /// Enabled features (from `enabled`) that list `id` as a direct prerequisite.
    pub fn dependents_of<'a, I>(&self, id: &str, enabled: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a String>,
    {
        enabled
            .into_iter()
            .filter(|other| other.as_str() != id)
            .filter(|other| {
                self.get(other)
                    .map(|f| f.requires.iter().any(|dep| *dep == id))
                    .unwrap_or(false)
            })
            .cloned()
            .collect()
    }
}

impl Default for FeatureCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Depth-first search for a prerequisite cycle; returns the cycle path.
fn find_cycle(features: &[Feature]) -> Option<Vec<&'static str>> {
    #[derive(Clone, Copy, PartialEq)]
    enum Mark {
        Visiting,
        Done,
    }

    fn visit(
        id: &'static str,
        edges: &HashMap<&'static str, &'static [&'static str]>,
        marks: &mut HashMap<&'static str, Mark>,
        path: &mut Vec<&'static str>,
    ) -> Option<Vec<&'static str>> {
        match marks.get(id) {
            Some(Mark::Done) => return None,
            Some(Mark::Visiting) => {
                let start = path.iter().position(|p| *p == id).unwrap_or(0);
                let mut cycle = path[start..].to_vec();
                cycle.push(id);
                return Some(cycle);
            }
            None => {}
        }

        marks.insert(id, Mark::Visiting);
        path.push(id);
        for dep in edges.get(id).copied().unwrap_or(&[]) {
            if let Some(cycle) = visit(*dep, edges, marks, path) {
                return Some(cycle);
            }
        }
        path.pop();
        marks.insert(id, Mark::Done);
        None
    }

    let edges: HashMap<_, _> = features.iter().map(|f| (f.id, f.requires)).collect();
    let mut marks = HashMap::new();
    let mut path = Vec::new();

    features
        .iter()
        .find_map(|f| visit(f.id, &edges, &mut marks, &mut path))
}

/// Assert that the built-in catalog is internally consistent.
///
/// Call this in a test; it panics with a clear message on any violation.
#[doc(hidden)]
pub fn assert_catalog_integrity() {
    if let Err(e) = FeatureCatalog::new(PIPELINE_FEATURES.iter().copied()) {
        panic!("PIPELINE_FEATURES is malformed: {}", e);
    }

    for feature in PIPELINE_FEATURES {
        assert!(
            !feature.id.is_empty() && feature.id == feature.id.to_lowercase(),
            "Feature id {:?} must be non-empty lowercase",
            feature.id
        );
        assert!(
            !feature.name.is_empty(),
            "Feature {:?} has no display name",
            feature.id
        );
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn set(ids: &[&str]) -> BTreeSet<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    fn pipeline() -> FeatureCatalog {
        FeatureCatalog::new([
            Feature {
                id: "ci",
                name: "CI",
                description: "",
                requires: &[],
            },
            Feature {
                id: "commit-lint",
                name: "Commit Lint",
                description: "",
                requires: &[],
            },
            Feature {
                id: "changelog",
                name: "Changelog",
                description: "",
                requires: &["commit-lint"],
            },
            Feature {
                id: "release",
                name: "Release",
                description: "",
                requires: &["changelog"],
            },
            Feature {
                id: "dependabot",
                name: "Dependabot",
                description: "",
                requires: &[],
            },
        ])
        .unwrap()
    }

    #[test]
    fn builtin_catalog_is_internally_consistent() {
        assert_catalog_integrity();
    }

    #[test]
    fn release_pulls_in_changelog_and_commit_lint() {
        assert_eq!(
            pipeline().resolve(["release"]),
            set(&["release", "changelog", "commit-lint"])
        );
    }

    #[test]
    fn feature_without_prerequisites_resolves_to_itself() {
        assert_eq!(pipeline().resolve(["ci"]), set(&["ci"]));
    }

    #[test]
    fn empty_selection_resolves_to_empty() {
        assert!(pipeline().resolve(Vec::<String>::new()).is_empty());
    }

    #[test]
    fn resolve_is_idempotent() {
        let catalog = FeatureCatalog::builtin();
        for selection in [
            set(&[]),
            set(&["release"]),
            set(&["ci", "dependabot"]),
            set(&["changelog", "container"]),
        ] {
            let once = catalog.resolve(selection);
            let twice = catalog.resolve(once.clone());
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn resolve_is_monotonic() {
        let catalog = FeatureCatalog::builtin();
        let small = catalog.resolve(["changelog"]);
        let large = catalog.resolve(["changelog", "release", "ci"]);
        assert!(small.is_subset(&large));
    }

    #[test]
    fn resolved_set_is_closed_under_prerequisites() {
        let catalog = FeatureCatalog::builtin();
        let all: Vec<&str> = catalog.ids();

        // every subset of the builtin catalog
        for mask in 0u32..(1 << all.len()) {
            let selection: Vec<&str> = all
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, id)| *id)
                .collect();
            let resolved = catalog.resolve(selection);

            for id in &resolved {
                let feature = catalog.get(id).unwrap();
                for dep in feature.requires {
                    assert!(resolved.contains(*dep), "{} missing prerequisite {}", id, dep);
                }
            }
        }
    }

    #[test]
    fn unknown_id_is_kept_without_prerequisites() {
        let resolved = pipeline().resolve(["nonsense", "changelog"]);
        assert_eq!(resolved, set(&["nonsense", "changelog", "commit-lint"]));
    }

    #[test]
    fn validate_selection_rejects_unknown_ids() {
        let err = pipeline()
            .validate_selection(["ci", "nonsense"])
            .unwrap_err();
        assert!(matches!(err, DomainError::UnknownFeature { ref id, .. } if id == "nonsense"));
    }

    #[test]
    fn resolve_validated_expands_valid_selection() {
        let resolved = FeatureCatalog::builtin()
            .resolve_validated(["release", "container"])
            .unwrap();
        assert_eq!(
            resolved,
            set(&["release", "changelog", "commit-lint", "container"])
        );
    }

    #[test]
    fn implied_by_reports_only_added_ids() {
        let implied = pipeline().implied_by(["release", "changelog"]);
        assert_eq!(implied, set(&["commit-lint"]));
    }

    #[test]
    fn dependents_of_lists_direct_dependents_only() {
        let catalog = pipeline();
        let enabled = set(&["release", "changelog", "commit-lint"]);

        assert_eq!(catalog.dependents_of("commit-lint", &enabled), vec!["changelog"]);
        assert_eq!(catalog.dependents_of("changelog", &enabled), vec!["release"]);
        assert!(catalog.dependents_of("release", &enabled).is_empty());
    }

    #[test]
    fn catalog_rejects_cycles() {
        let err = FeatureCatalog::new([
            Feature {
                id: "a",
                name: "A",
                description: "",
                requires: &["b"],
            },
            Feature {
                id: "b",
                name: "B",
                description: "",
                requires: &["a"],
            },
        ])
        .unwrap_err();

        match err {
            DomainError::MalformedCatalog { reason } => assert!(reason.contains("a -> b -> a")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn catalog_rejects_self_reference() {
        let err = FeatureCatalog::new([Feature {
            id: "loop",
            name: "Loop",
            description: "",
            requires: &["loop"],
        }])
        .unwrap_err();
        assert!(matches!(err, DomainError::MalformedCatalog { .. }));
    }

    #[test]
    fn catalog_rejects_dangling_prerequisites() {
        let err = FeatureCatalog::new([Feature {
            id: "release",
            name: "Release",
            description: "",
            requires: &["changelog"],
        }])
        .unwrap_err();

        match err {
            DomainError::MalformedCatalog { reason } => assert!(reason.contains("changelog")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn catalog_rejects_duplicate_ids() {
        let ci = Feature {
            id: "ci",
            name: "CI",
            description: "",
            requires: &[],
        };
        assert!(FeatureCatalog::new([ci, ci]).is_err());
    }
}
