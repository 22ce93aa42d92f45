//! Core value types and utilities for the case portal.
//!
//! This crate provides the error alias and the session value types shared by
//! the access library, the REST client, and the web application.

pub mod error;
pub mod identity;

pub use error::Result;
pub use identity::{Credential, Identity, InvalidValueError};
