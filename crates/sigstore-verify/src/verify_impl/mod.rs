//! Transparency log verification pipeline
//!
//! admission -> structural validation -> log resolution -> evidence
//! (offline `tlog` or online `rekor`) -> consistency -> threshold

pub mod admission;
pub mod consistency;
pub mod evidence;
pub mod rekor;
pub mod threshold;
pub mod tlog;
pub mod validation;
