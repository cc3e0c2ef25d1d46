use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("Invalid {target} index {index} (length {len})")]
    InvalidIndex {
        target: &'static str,
        index: usize,
        len: usize,
    },

    #[error("Unknown catalog item: {id}")]
    UnknownCatalogItem { id: String },

    #[error("Duplicate catalog item: {id}")]
    DuplicateCatalogItem { id: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Missing configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// 呼叫端傳入錯誤的位置或 ID
    Usage,
    Configuration,
    Io,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl PlannerError {
    pub fn invalid_index(target: &'static str, index: usize, len: usize) -> Self {
        PlannerError::InvalidIndex { target, index, len }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            PlannerError::InvalidIndex { .. }
            | PlannerError::UnknownCatalogItem { .. }
            | PlannerError::DuplicateCatalogItem { .. } => ErrorCategory::Usage,
            PlannerError::MissingConfigError { .. }
            | PlannerError::InvalidConfigValueError { .. }
            | PlannerError::ConfigValidationError { .. } => ErrorCategory::Configuration,
            PlannerError::IoError(_) => ErrorCategory::Io,
            PlannerError::SerializationError(_) | PlannerError::CsvError(_) => {
                ErrorCategory::Output
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Usage => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Io | ErrorCategory::Output => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            PlannerError::InvalidIndex { target, len, .. } => {
                format!("Use a {} index between 0 and {}", target, len.saturating_sub(1))
            }
            PlannerError::UnknownCatalogItem { .. } => {
                "Check the item id against the [[catalog]] entries".to_string()
            }
            PlannerError::DuplicateCatalogItem { .. } => {
                "Give every catalog item a unique id".to_string()
            }
            PlannerError::MissingConfigError { field } => {
                format!("Add the '{}' field to the configuration file", field)
            }
            PlannerError::InvalidConfigValueError { field, .. }
            | PlannerError::ConfigValidationError { field, .. } => {
                format!("Fix the '{}' entry in the configuration file", field)
            }
            PlannerError::IoError(_) => "Make sure the file exists and is readable".to_string(),
            PlannerError::SerializationError(_) | PlannerError::CsvError(_) => {
                "Try a different --format".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Usage => format!("Itinerary action rejected: {}", self),
            ErrorCategory::Configuration => format!("Trip plan is invalid: {}", self),
            ErrorCategory::Io => format!("Could not read the trip plan: {}", self),
            ErrorCategory::Output => format!("Could not write the output: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, PlannerError>;
