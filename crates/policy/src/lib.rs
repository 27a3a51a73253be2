//! Facade crate for the privacy-policy tooling.
//! Re-exports the record types, the kernel (loading and export) and, with the `page`
//! feature, the page behaviors.
//! Keep this crate thin: it should compose other crates, not implement behavior.
//!
//! ## Usage
//! - Add `policy` (the `page` feature is on by default).
//! - Load the record with `policy::kernel::config::load_config`, then hand it to
//!   `policy::page::Startup` or to `policy::kernel::export`.

pub use policy_domain as domain;
pub use policy_kernel as kernel;
#[cfg(feature = "page")]
pub use policy_page as page;

/// Build-time enabled features (by Cargo feature).
pub mod features {
    pub const ENABLED: &[&str] = &[
        #[cfg(feature = "page")]
        "page",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Runs the standard page startup for `config`.
#[cfg(feature = "page")]
pub fn start<D, W>(config: &domain::config::PolicyConfig, page: &mut page::Page<D, W>) -> page::StartupReport
where
    D: page::Document + 'static,
    W: page::Window + 'static,
{
    page::Startup::new(config.clone()).run(page)
}
