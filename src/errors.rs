// ABOUTME: Unified error handling with standard error codes and HTTP response formatting
// ABOUTME: Defines validation error kinds raised by the recommendation engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan Engine

//! # Unified Error Handling System
//!
//! Centralized error types for the recommendation engine. Every engine
//! operation validates its inputs up front and returns one of the codes
//! below before any computation happens; there is no partial output followed
//! by failure, and nothing is logged-and-swallowed internally.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Input validation (3000-3999)
    #[serde(rename = "INVALID_AGE")]
    InvalidAge = 3000,
    #[serde(rename = "INVALID_BIOMETRIC")]
    InvalidBiometric = 3001,
    #[serde(rename = "INVALID_GOAL")]
    InvalidGoal = 3002,
    #[serde(rename = "INVALID_ACTIVITY_LEVEL")]
    InvalidActivityLevel = 3003,
    #[serde(rename = "INVALID_DAYS_PER_WEEK")]
    InvalidDaysPerWeek = 3004,

    // Configuration (6000-6999)
    #[serde(rename = "CONFIG_ERROR")]
    ConfigError = 6000,

    // Internal errors (9000-9999)
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9001,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        match self {
            // 400 Bad Request
            Self::InvalidAge
            | Self::InvalidBiometric
            | Self::InvalidGoal
            | Self::InvalidActivityLevel
            | Self::InvalidDaysPerWeek => 400,

            // 500 Internal Server Error
            Self::ConfigError | Self::InternalError | Self::SerializationError => 500,
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidAge => "Age is outside the supported range",
            Self::InvalidBiometric => "Height or weight is outside the supported range",
            Self::InvalidGoal => "The fitness goal is not recognized",
            Self::InvalidActivityLevel => "The activity level is not recognized",
            Self::InvalidDaysPerWeek => "Days per week must be between 1 and 7",
            Self::ConfigError => "Engine configuration error encountered",
            Self::InternalError => "An internal engine error occurred",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }
}

/// Unified error type for the engine
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Additional key-value context
    pub details: serde_json::Value,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: serde_json::Value::Null,
        }
    }

    /// Add details to the error
    #[must_use]
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = details;
        self
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.code.http_status()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Client-facing error response format
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorResponseDetails,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponseDetails {
    pub code: ErrorCode,
    pub message: String,
    #[serde(skip_serializing_if = "serde_json::Value::is_null")]
    pub details: serde_json::Value,
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self {
            error: ErrorResponseDetails {
                code: error.code,
                message: error.message,
                details: error.details,
            },
        }
    }
}

/// Convenience functions for creating common errors
impl AppError {
    /// Age outside the supported range
    pub fn invalid_age(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidAge, message)
    }

    /// Height or weight outside the supported range
    pub fn invalid_biometric(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidBiometric, message)
    }

    /// Unrecognized fitness goal
    pub fn invalid_goal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidGoal, message)
    }

    /// Unrecognized activity level
    pub fn invalid_activity_level(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidActivityLevel, message)
    }

    /// Days per week outside 1..=7
    pub fn invalid_days_per_week(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidDaysPerWeek, message)
    }

    /// Configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// Internal engine error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

/// Conversion from `anyhow::Error` for callers composing the engine with
/// anyhow-based plumbing
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        match error.source() {
            Some(source) => {
                Self::new(ErrorCode::InternalError, error.to_string()).with_details(
                    serde_json::json!({
                        "source": source.to_string()
                    }),
                )
            }
            None => Self::new(ErrorCode::InternalError, error.to_string()),
        }
    }
}
