//! Startup sequencing: which routines run, in which order, under which configuration.

use crate::behaviors::{
    Outcome, SkipReason, active_section, back_to_top, collapsible, copy_email, freshness, print_button,
    reading_progress, skip_link, smooth_scroll,
};
use crate::dom::Document;
use crate::host::Window;
use crate::page::Page;
use chrono::{Local, NaiveDate};
use policy_domain::config::PolicyConfig;
use policy_domain::features::FeatureFlags;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display, strum_macros::IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
pub enum Routine {
    BackToTop,
    SmoothScroll,
    ActiveSection,
    CopyEmail,
    PrintButton,
    ReadingProgress,
    LastUpdated,
    SkipLink,
    CollapsibleSections,
}

impl Routine {
    /// The fixed document-ready sequence. Collapsible sections are opt-in and run last.
    pub const STANDARD: [Self; 8] = [
        Self::BackToTop,
        Self::SmoothScroll,
        Self::ActiveSection,
        Self::CopyEmail,
        Self::PrintButton,
        Self::ReadingProgress,
        Self::LastUpdated,
        Self::SkipLink,
    ];

    #[must_use]
    pub fn is_enabled(self, config: &PolicyConfig) -> bool {
        let ui = &config.ui;
        let flags = config.features.flags();
        match self {
            Self::BackToTop => ui.show_back_to_top,
            Self::SmoothScroll => ui.enable_smooth_scroll,
            Self::CopyEmail => ui.enable_copy_email && flags.contains(FeatureFlags::EMAIL_COPY_TO_CLIPBOARD),
            Self::PrintButton => ui.show_print_button,
            Self::ReadingProgress => ui.show_reading_progress,
            Self::CollapsibleSections => flags.contains(FeatureFlags::COLLAPSIBLE_SECTIONS),
            Self::ActiveSection | Self::LastUpdated | Self::SkipLink => true,
        }
    }
}

/// What startup did, routine by routine, in execution order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StartupReport {
    entries: Vec<(Routine, Outcome)>,
}

impl StartupReport {
    #[must_use]
    pub fn entries(&self) -> &[(Routine, Outcome)] {
        &self.entries
    }

    #[must_use]
    pub fn outcome(&self, routine: Routine) -> Option<&Outcome> {
        self.entries.iter().find(|(r, _)| *r == routine).map(|(_, outcome)| outcome)
    }

    pub fn installed(&self) -> impl Iterator<Item = Routine> + '_ {
        self.entries.iter().filter(|(_, outcome)| outcome.is_installed()).map(|(r, _)| *r)
    }

    fn push(&mut self, routine: Routine, outcome: Outcome) {
        self.entries.push((routine, outcome));
    }
}

/// Runs the page routines once the document is ready.
///
/// ```rust
/// use policy_domain::config::PolicyConfig;
/// use policy_page::{MemoryClipboard, MemoryDocument, MemoryWindow, Page, Routine, Startup};
/// use std::sync::Arc;
///
/// let mut page = Page::new(MemoryDocument::new(), MemoryWindow::new(2000.0, 800.0), Arc::new(MemoryClipboard::new()));
/// let report = Startup::new(PolicyConfig::default()).run(&mut page);
/// assert!(report.outcome(Routine::ReadingProgress).is_some_and(|o| o.is_installed()));
/// ```
#[derive(Debug, Clone)]
pub struct Startup {
    config: PolicyConfig,
    today: NaiveDate,
}

impl Startup {
    #[must_use]
    pub fn new(config: PolicyConfig) -> Self {
        Self { config, today: Local::now().date_naive() }
    }

    /// Fixes the date the freshness note is computed against.
    #[must_use]
    pub const fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    #[must_use]
    pub const fn config(&self) -> &PolicyConfig {
        &self.config
    }

    /// Installs every enabled routine in order, then delivers the initial intersection batch.
    pub fn run<D: Document + 'static, W: Window + 'static>(&self, page: &mut Page<D, W>) -> StartupReport {
        info!(company = %self.config.company.name, "Privacy policy page loaded");

        let optional = Routine::CollapsibleSections
            .is_enabled(&self.config)
            .then_some(Routine::CollapsibleSections);
        let mut report = StartupReport::default();

        for routine in Routine::STANDARD.into_iter().chain(optional) {
            let outcome = if routine.is_enabled(&self.config) {
                self.install(routine, page)
            } else {
                Outcome::Skipped(SkipReason::Disabled)
            };

            match &outcome {
                Outcome::Installed => debug!(%routine, "Routine installed"),
                Outcome::Skipped(reason) => debug!(%routine, %reason, "Routine skipped"),
            }
            report.push(routine, outcome);
        }

        page.refresh_intersections();
        info!(installed = report.installed().count(), "All features initialized");
        report
    }

    /// Installs one routine regardless of configuration toggles.
    pub fn install<D: Document + 'static, W: Window + 'static>(&self, routine: Routine, page: &mut Page<D, W>) -> Outcome {
        match routine {
            Routine::BackToTop => back_to_top::install(page),
            Routine::SmoothScroll => smooth_scroll::install(page),
            Routine::ActiveSection => active_section::install(page),
            Routine::CopyEmail => copy_email::install(page),
            Routine::PrintButton => print_button::install(page),
            Routine::ReadingProgress => reading_progress::install(page),
            Routine::LastUpdated => freshness::install(page, &self.config.legal.last_updated, self.today),
            Routine::SkipLink => skip_link::install(page),
            Routine::CollapsibleSections => collapsible::install(page),
        }
    }
}

/// Logs the page load duration from navigation-timing marks in milliseconds.
///
/// Returns `None` when the load has not finished (`load_event_end` before the start).
pub fn report_load_timing(navigation_start: u64, load_event_end: u64) -> Option<u64> {
    let elapsed = load_event_end.checked_sub(navigation_start)?;
    info!(elapsed_ms = elapsed, "Page loaded in {elapsed}ms");
    Some(elapsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routine_names_are_kebab_case() {
        assert_eq!(Routine::BackToTop.to_string(), "back-to-top");
        assert_eq!(<&'static str>::from(Routine::CollapsibleSections), "collapsible-sections");
    }

    #[test]
    fn defaults_enable_the_standard_sequence_only() {
        let config = PolicyConfig::default();
        assert!(Routine::STANDARD.iter().all(|r| r.is_enabled(&config)));
        assert!(!Routine::CollapsibleSections.is_enabled(&config));
    }

    #[test]
    fn copy_email_needs_both_toggles() {
        let mut config = PolicyConfig::default();
        config.features.email_copy_to_clipboard = false;
        assert!(!Routine::CopyEmail.is_enabled(&config));

        let mut config = PolicyConfig::default();
        config.ui.enable_copy_email = false;
        assert!(!Routine::CopyEmail.is_enabled(&config));
    }

    #[test]
    fn feature_toggles_gate_through_flags() {
        let mut config = PolicyConfig::default();
        config.features.collapsible_sections = true;
        config.features.email_copy_to_clipboard = false;

        let flags = config.features.flags();
        assert_eq!(
            Routine::CollapsibleSections.is_enabled(&config),
            flags.contains(FeatureFlags::COLLAPSIBLE_SECTIONS)
        );
        assert!(Routine::CollapsibleSections.is_enabled(&config));
        assert!(!Routine::CopyEmail.is_enabled(&config));
    }

    #[test]
    fn load_timing_needs_a_finished_load() {
        assert_eq!(report_load_timing(1_000, 1_250), Some(250));
        assert_eq!(report_load_timing(1_000, 0), None);
    }
}
