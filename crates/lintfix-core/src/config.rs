use crate::error::FixError;
use serde::Deserialize;

/// Default location of the per-rule explanation pages.
pub const DEFAULT_EXPLANATION_BASE_URL: &str =
    "https://github.com/xxpxxxxp/intellij-plugin-golangci-lint/blob/master/explanation";

/// Configuration for [`Registry`](crate::Registry).
///
/// Every field has a default, so a partial JSON document (or `{}`) is a valid configuration:
///
/// ```
/// use lintfix_core::FixConfig;
///
/// let config = FixConfig::from_json(r#"{ "excluded-rules": [] }"#).unwrap();
/// assert!(config.excluded_rules.is_empty());
/// assert_eq!(config.placeholder, "_");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct FixConfig {
    /// Base URL of the explanation pages; `<base>/<rule>.md` is opened for explained rules.
    pub explanation_base_url: String,
    /// Complexity linters silenced with a suppression comment on the enclosing function.
    pub function_linters: Vec<String>,
    /// Rules that keep their strategy out of dispatch.
    pub excluded_rules: Vec<String>,
    /// Name assigned in place of an ineffectual assignment target.
    pub placeholder: String,
}

impl Default for FixConfig {
    fn default() -> Self {
        Self {
            explanation_base_url: DEFAULT_EXPLANATION_BASE_URL.to_string(),
            function_linters: ["funlen", "gocognit", "gocyclo", "nakedret"]
                .map(String::from)
                .to_vec(),
            // Inserted case clauses are easy to get wrong; opt in explicitly.
            excluded_rules: vec!["exhaustive".to_string()],
            placeholder: "_".to_string(),
        }
    }
}

impl FixConfig {
    /// Decode a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, FixError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the explanation base URL. A trailing `/` is dropped.
    pub fn with_explanation_base_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.explanation_base_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Add a function-scoped complexity linter.
    pub fn with_function_linter(mut self, linter: impl Into<String>) -> Self {
        let linter = linter.into();
        if !self.function_linters.contains(&linter) {
            self.function_linters.push(linter);
        }
        self
    }

    /// Exclude a rule from dispatch.
    pub fn with_excluded_rule(mut self, rule: impl Into<String>) -> Self {
        let rule = rule.into();
        if !self.excluded_rules.contains(&rule) {
            self.excluded_rules.push(rule);
        }
        self
    }

    /// Re-admit a previously excluded rule.
    pub fn without_excluded_rule(mut self, rule: &str) -> Self {
        self.excluded_rules.retain(|excluded| excluded != rule);
        self
    }

    /// Set the placeholder name for ineffectual assignments.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// URL of the explanation page for `rule`.
    pub fn explanation_url(&self, rule: &str) -> String {
        format!(
            "{}/{rule}.md",
            self.explanation_base_url.trim_end_matches('/')
        )
    }
}
