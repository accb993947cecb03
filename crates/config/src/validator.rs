use crate::*;
use regex::Regex;
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum ValidationError {
    #[error("Service name is required")]
    MissingServiceName,

    #[error("Service description is required")]
    MissingServiceDescription,

    #[error("Invalid version format: {0}. Must be in format X.Y.Z (e.g., 1.0.0)")]
    InvalidVersionFormat(String),

    #[error("Invalid log format: {0}. Must be one of: pretty, json, compact")]
    InvalidLogFormat(String),

    #[error("Bind host is required")]
    MissingHost,

    #[error("Field '{field}' contains an unresolved environment variable placeholder: {value}")]
    UnresolvedEnvVar { field: String, value: String },
}

#[derive(Debug, Clone)]
pub struct ValidationWarning {
    pub field: String,
    pub message: String,
}

#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, field: &str, message: &str) {
        self.warnings.push(ValidationWarning {
            field: field.to_string(),
            message: message.to_string(),
        });
    }
}

/// Validate a loaded configuration and collect every problem found.
pub fn validate_config(config: &AppConfig) -> ValidationReport {
    let mut report = ValidationReport::new();

    if config.service.name.trim().is_empty() {
        report.add_error(ValidationError::MissingServiceName);
    }
    if config.service.description.trim().is_empty() {
        report.add_error(ValidationError::MissingServiceDescription);
    }

    let version_re = Regex::new(r"^\d+\.\d+\.\d+$").expect("version pattern is valid");
    if !version_re.is_match(&config.service.version) {
        report.add_error(ValidationError::InvalidVersionFormat(
            config.service.version.clone(),
        ));
    }

    match config.logging.format.to_lowercase().as_str() {
        "pretty" | "json" | "compact" => {}
        other => report.add_error(ValidationError::InvalidLogFormat(other.to_string())),
    }

    if config.server.host.trim().is_empty() {
        report.add_error(ValidationError::MissingHost);
    }

    if config.server.port == 0 {
        report.add_warning(
            "server.port",
            "port 0 binds an ephemeral port; the listen address will change on every start",
        );
    }

    for (field, value) in [
        ("service.name", &config.service.name),
        ("service.description", &config.service.description),
        ("server.host", &config.server.host),
    ] {
        if has_unresolved_env_vars(value) {
            report.add_error(ValidationError::UnresolvedEnvVar {
                field: field.to_string(),
                value: value.clone(),
            });
        }
    }

    report
}
