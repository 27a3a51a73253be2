//! # Domain Models
//!
//! This crate contains the privacy-policy record with minimal dependencies (`serde`, `bitflags`).
//! Keep it lean: no I/O, no page behavior, no date math. Just data and simple helpers.

pub mod config;
pub mod constants;
pub mod features;
