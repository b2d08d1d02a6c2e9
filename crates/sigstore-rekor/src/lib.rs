//! Rekor transparency log client
//!
//! This crate provides the pieces of the Rekor v1 API the verifier needs for
//! online checks: the [`LogEntry`] record type and a [`RekorClient`] that
//! looks entries up by log index. The [`RekorLogClient`] and
//! [`RekorClientFactory`] traits let callers substitute their own transport.

pub mod client;
pub mod entry;
pub mod error;

pub use client::{
    HttpClientFactory, RekorClient, RekorClientConfig, RekorClientFactory, RekorLogClient,
    DEFAULT_USER_AGENT, PUBLIC_REKOR_URL,
};
pub use entry::{entries_from_response, InclusionProof, LogEntry, LogEntryResponse, Verification};
pub use error::{Error, Result};
