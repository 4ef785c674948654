// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use prodcal::CoreError;
use prodcal_domain::DomainError;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl ApiError {
    /// The human-readable message, without the error category.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::DomainRuleViolation { message, .. }
            | Self::InvalidInput { message, .. }
            | Self::ResourceNotFound { message, .. }
            | Self::Internal { message } => message,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::Overlap { .. } => ApiError::DomainRuleViolation {
            rule: String::from("no_overlap"),
            message: err.to_string(),
        },
        DomainError::OrderNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Order"),
            message: format!("Order {id} does not exist"),
        },
        DomainError::InvalidDateRange { .. } => ApiError::InvalidInput {
            field: String::from("end"),
            message: String::from("End date must be after start date."),
        },
        DomainError::InvalidProgress { .. } => ApiError::InvalidInput {
            field: String::from("progress"),
            message: err.to_string(),
        },
        DomainError::InvalidStatus(_) => ApiError::InvalidInput {
            field: String::from("status"),
            message: err.to_string(),
        },
        DomainError::InvalidViewMode(_) => ApiError::InvalidInput {
            field: String::from("view_mode"),
            message: err.to_string(),
        },
        DomainError::AreaNotFound(name) => ApiError::ResourceNotFound {
            resource_type: String::from("Area"),
            message: format!("Area '{name}' is not configured"),
        },
        DomainError::DateParseError { date_string, error } => ApiError::InvalidInput {
            field: String::from("date"),
            message: format!("Invalid date '{date_string}': {error}"),
        },
        DomainError::DateArithmeticOverflow { .. } => ApiError::DomainRuleViolation {
            rule: String::from("representable_dates"),
            message: err.to_string(),
        },
    }
}

/// Translates a core error into an API error.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
    }
}
