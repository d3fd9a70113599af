use crate::pipeline::ConvertOptions;
use crate::rewrite::ArgumentScan;
use crate::rules::RuleOptions;
use serde::Deserialize;
use std::fmt;

pub const DEFAULT_BACKUP_DIR: &str = "v1src.bak";

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct ToolConfig {
    #[serde(default)]
    pub convert: ConvertSettings,
    #[serde(default)]
    pub rules: RuleSettings,
}

impl ToolConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut issues = Vec::new();
        let convert = &self.convert;

        if convert.backup_dir.trim().is_empty() {
            issues.push(ValidationIssue::EmptyField {
                field: "convert.backup_dir",
            });
        }

        if convert.extensions.is_empty() {
            issues.push(ValidationIssue::EmptyField {
                field: "convert.extensions",
            });
        }

        for (field, list) in [
            ("convert.extensions", &convert.extensions),
            ("convert.header_extensions", &convert.header_extensions),
        ] {
            for ext in list {
                if !is_plain_extension(ext) {
                    issues.push(ValidationIssue::InvalidExtension {
                        field,
                        value: ext.clone(),
                    });
                }
            }
        }

        for ext in &convert.header_extensions {
            if !convert.extensions.contains(ext) {
                issues.push(ValidationIssue::UndiscoveredHeader { value: ext.clone() });
            }
        }

        for ident in &self.rules.deprefix_exempt {
            if !ident.starts_with("Fl_") {
                issues.push(ValidationIssue::InvalidExemption {
                    value: ident.clone(),
                });
            }
        }

        if issues.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { issues })
        }
    }

    pub fn rule_options(&self) -> RuleOptions {
        RuleOptions {
            deprefix_exempt: self.rules.deprefix_exempt.clone(),
        }
    }

    pub fn convert_options(&self) -> ConvertOptions {
        ConvertOptions {
            scan: ArgumentScan::from_nested(self.convert.nested_arguments),
            header_extensions: self.convert.header_extensions.clone(),
        }
    }
}

/// Extensions are written without the dot and without glob characters.
fn is_plain_extension(ext: &str) -> bool {
    !ext.is_empty()
        && !ext.starts_with('.')
        && !ext.contains(['*', '?', '[', ']', '/', '\\'])
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ConvertSettings {
    #[serde(default = "default_backup_dir")]
    pub backup_dir: String,
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    #[serde(default = "default_header_extensions")]
    pub header_extensions: Vec<String>,
    /// Match argument lists by nesting depth instead of the first `)`.
    #[serde(default)]
    pub nested_arguments: bool,
}

impl Default for ConvertSettings {
    fn default() -> Self {
        Self {
            backup_dir: default_backup_dir(),
            extensions: default_extensions(),
            header_extensions: default_header_extensions(),
            nested_arguments: false,
        }
    }
}

fn default_backup_dir() -> String {
    DEFAULT_BACKUP_DIR.to_string()
}

fn default_extensions() -> Vec<String> {
    ["h", "H", "cxx", "cpp"].map(String::from).to_vec()
}

fn default_header_extensions() -> Vec<String> {
    ["h", "H"].map(String::from).to_vec()
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct RuleSettings {
    /// Compound `Fl_` identifiers that keep their inner underscores.
    #[serde(default)]
    pub deprefix_exempt: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct ValidationError {
    pub issues: Vec<ValidationIssue>,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, issue) in self.issues.iter().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            write!(f, "{issue}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    EmptyField {
        field: &'static str,
    },
    InvalidExtension {
        field: &'static str,
        value: String,
    },
    UndiscoveredHeader {
        value: String,
    },
    InvalidExemption {
        value: String,
    },
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationIssue::EmptyField { field } => write!(f, "'{field}' must not be empty"),
            ValidationIssue::InvalidExtension { field, value } => write!(
                f,
                "'{field}' entry '{value}' must be a bare extension such as \"cxx\""
            ),
            ValidationIssue::UndiscoveredHeader { value } => write!(
                f,
                "header extension '{value}' is not listed in 'convert.extensions'"
            ),
            ValidationIssue::InvalidExemption { value } => write!(
                f,
                "deprefix exemption '{value}' does not start with 'Fl_'"
            ),
        }
    }
}
