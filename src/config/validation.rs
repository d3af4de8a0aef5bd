//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the bind address and mount-prefix shape
//! - Report every violation, not just the first
//!
//! # Design Decisions
//! - Pure function: HostConfig → Result<(), Vec<ValidationError>>
//! - Runs before the config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::HostConfig;

/// A single semantic violation in the host configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("entry.app must not be empty")]
    EmptyApp,

    #[error("entry.mount_prefix `{0}` must start with `/`")]
    PrefixMissingSlash(String),

    #[error("entry.mount_prefix `{0}` must not end with `/`")]
    PrefixTrailingSlash(String),

    #[error("listener.bind_address `{0}` is not a valid socket address")]
    BadBindAddress(String),

    #[error("timeouts.request_secs must be greater than zero")]
    ZeroRequestTimeout,
}

/// Check every semantic rule, collecting all violations.
pub fn validate_config(config: &HostConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.entry.app.trim().is_empty() {
        errors.push(ValidationError::EmptyApp);
    }

    let prefix = &config.entry.mount_prefix;
    if !prefix.is_empty() && prefix != "/" {
        if !prefix.starts_with('/') {
            errors.push(ValidationError::PrefixMissingSlash(prefix.clone()));
        }
        if prefix.ends_with('/') {
            errors.push(ValidationError::PrefixTrailingSlash(prefix.clone()));
        }
    }

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BadBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
