//! REST client for the case portal backend.
//!
//! `PortalApi` signs users in and implements the `ProfileResolver` seam of
//! `case-portal-access` over HTTP. Every endpoint wraps its payload in a
//! `{"respuesta": ...}` envelope and expects `Authorization: Bearer <token>`.

pub mod client;
pub mod error;

pub use client::{PortalApi, decode_envelope};
pub use error::ApiError;
