//! `{{VARIABLE}}` substitution for provider file templates.

use std::collections::BTreeMap;

use scotter_core::domain::ProjectConfig;

/// Variables available to provider templates.
///
/// Built-ins derived from the project record:
/// `PROJECT_NAME`, `PROJECT_NAME_SNAKE`, `PROJECT_NAME_KEBAB`,
/// `PROJECT_TYPE`, `LANGUAGE`.
#[derive(Debug, Clone, Default)]
pub struct TemplateVars {
    variables: BTreeMap<String, String>,
}

impl TemplateVars {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_project(config: &ProjectConfig) -> Self {
        let name = config.project_name();
        Self::new()
            .with("PROJECT_NAME", name)
            .with("PROJECT_NAME_SNAKE", split_words(name).join("_"))
            .with("PROJECT_NAME_KEBAB", split_words(name).join("-"))
            .with("PROJECT_TYPE", config.project_type())
            .with("LANGUAGE", config.language())
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    /// Replace every `{{KEY}}` in one left-to-right pass. Substituted values
    /// are not scanned again. Unknown placeholders are left as they are,
    /// which keeps GitHub Actions `${{ ... }}` expressions intact.
    pub fn render(&self, template: &str) -> String {
        let mut result = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find("{{") {
            result.push_str(&rest[..start]);
            let after = &rest[start + 2..];
            let value = after
                .find("}}")
                .and_then(|end| self.variables.get(&after[..end]).map(|v| (end, v)));
            match value {
                Some((end, value)) => {
                    result.push_str(value);
                    rest = &after[end + 2..];
                }
                None => {
                    result.push_str("{{");
                    rest = after;
                }
            }
        }
        result.push_str(rest);
        result
    }
}

/// Lowercase words split on separators and camelCase boundaries.
fn split_words(s: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev_lower = false;

    for c in s.chars() {
        if c == '_' || c == '-' || c == '.' || c.is_whitespace() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_lower = false;
            continue;
        }
        if c.is_uppercase() && prev_lower && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        prev_lower = c.is_lowercase() || c.is_ascii_digit();
        current.extend(c.to_lowercase());
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}
