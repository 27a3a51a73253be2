//! Kernel utilities shared by the page layer and the CLI.
//! Keep this crate lightweight; it loads the policy record and renders it for consumers.
//!
//! ## Config loading (non-wasm)
//! ```rust,ignore
//! use policy_kernel::config::load_config;
//! let cfg = load_config(Some("config/policy")).unwrap();
//! ```
//!
//! ## Global binding
//! ```rust
//! # use policy_kernel::{domain::config::PolicyConfig, export::global_script};
//! let script = global_script(&PolicyConfig::default()).unwrap();
//! assert!(script.starts_with("window.APP_CONFIG = "));
//! ```
#[cfg(not(target_arch = "wasm32"))]
pub mod config;
mod error;
pub mod export;

pub use crate::error::{ConfigError, ConfigErrorExt, ExportError};
pub use policy_domain as domain;
