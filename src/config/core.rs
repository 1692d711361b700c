use serde::{Deserialize, Serialize};

use crate::model::TagKind;
use crate::naming::{DEFAULT_CONSTRUCTOR_NAME, UNUSABLE_RETURN_VALUES};

/// Placeholder substituted with the attribute name in implicit templates
pub const NAME_PLACEHOLDER: &str = "{name}";

/// Root configuration structure, read from `.docsignal.toml`
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DocsignalConfig {
    /// Signal extraction configuration
    #[serde(default)]
    pub signals: SignalConfig,
}

/// Vocabulary and thresholds used while deriving signals
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SignalConfig {
    /// Designated constructor name of the target object model
    #[serde(default = "default_constructor_name")]
    pub constructor_name: String,

    /// Return types that document "no meaningful value"
    #[serde(default = "default_unusable_return_values")]
    pub unusable_return_values: Vec<String>,

    /// Short parameter names that are still considered good names
    #[serde(default = "default_bad_name_exceptions")]
    pub bad_name_exceptions: Vec<String>,

    /// Parameter names shorter than this are flagged (default: 3)
    #[serde(default = "default_bad_name_threshold")]
    pub bad_name_threshold: usize,

    /// Texts the parser synthesizes for attribute accessors
    #[serde(default)]
    pub implicit: ImplicitTemplates,

    /// Tag kinds that count as documentation evidence
    #[serde(default = "default_considered_tags")]
    pub considered_tags: Vec<TagKind>,
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self {
            constructor_name: default_constructor_name(),
            unusable_return_values: default_unusable_return_values(),
            bad_name_exceptions: default_bad_name_exceptions(),
            bad_name_threshold: default_bad_name_threshold(),
            implicit: ImplicitTemplates::default(),
            considered_tags: default_considered_tags(),
        }
    }
}

impl SignalConfig {
    // Pure function: Collect all validation failures
    fn validation_errors(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.constructor_name.trim().is_empty() {
            errors.push("constructor_name must not be empty".to_string());
        }
        if self.bad_name_threshold == 0 {
            errors.push("bad_name_threshold must be at least 1".to_string());
        }
        if self
            .unusable_return_values
            .iter()
            .any(|v| v.trim().is_empty())
        {
            errors.push("unusable_return_values must not contain blank entries".to_string());
        }
        errors
    }

    /// Validate the configuration, joining every problem into one message
    pub fn validate(&self) -> Result<(), String> {
        let errors = self.validation_errors();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors.join("; "))
        }
    }

    pub fn considers(&self, kind: TagKind) -> bool {
        self.considered_tags.contains(&kind)
    }
}

/// Templates for parser-synthesized accessor documentation.
///
/// `{name}` expands to the attribute name (the reader name, without the
/// writer suffix).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImplicitTemplates {
    #[serde(default = "default_getter_docstring")]
    pub getter_docstring: String,

    #[serde(default = "default_setter_docstring")]
    pub setter_docstring: String,

    #[serde(default = "default_getter_return")]
    pub getter_return: String,

    #[serde(default = "default_setter_return")]
    pub setter_return: String,
}

impl Default for ImplicitTemplates {
    fn default() -> Self {
        Self {
            getter_docstring: default_getter_docstring(),
            setter_docstring: default_setter_docstring(),
            getter_return: default_getter_return(),
            setter_return: default_setter_return(),
        }
    }
}

/// Expand `{name}` in a template
pub fn render_template(template: &str, name: &str) -> String {
    template.replace(NAME_PLACEHOLDER, name)
}

fn default_constructor_name() -> String {
    DEFAULT_CONSTRUCTOR_NAME.to_string()
}

fn default_unusable_return_values() -> Vec<String> {
    UNUSABLE_RETURN_VALUES.iter().map(|v| v.to_string()).collect()
}

fn default_bad_name_exceptions() -> Vec<String> {
    vec!["id".to_string()]
}

fn default_bad_name_threshold() -> usize {
    3
}

fn default_considered_tags() -> Vec<TagKind> {
    vec![
        TagKind::Api,
        TagKind::Example,
        TagKind::Overload,
        TagKind::Param,
        TagKind::Private,
        TagKind::Return,
        TagKind::Since,
    ]
}

fn default_getter_docstring() -> String {
    "Returns the value of attribute {name}".to_string()
}

fn default_setter_docstring() -> String {
    "Sets the attribute {name}".to_string()
}

fn default_getter_return() -> String {
    "the current value of {name}".to_string()
}

fn default_setter_return() -> String {
    "the newly set value".to_string()
}
