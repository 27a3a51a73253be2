use super::{Outcome, SkipReason};
use crate::dom::{Document, Query};
use crate::host::Window;
use crate::page::Page;
use chrono::NaiveDate;
use policy_domain::constants::POLICY_DATE_FORMAT;

pub const ELEMENT_CLASS: &str = "last-updated";

const NOTE_STYLE: &[(&str, &str)] = &[
    ("color", "var(--text-light)"),
    ("font-size", "0.85rem"),
    ("display", "block"),
    ("margin-top", "0.25rem"),
];

/// Parses a display date such as `November 30, 2025`.
#[must_use]
pub fn parse_policy_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), POLICY_DATE_FORMAT).ok()
}

/// Whole days from `last_updated` to `today`; negative for future dates.
#[must_use]
pub fn days_since(last_updated: NaiveDate, today: NaiveDate) -> i64 {
    (today - last_updated).num_days()
}

/// `(N days ago)`, `(1 day ago)`, or nothing for today and future dates.
#[must_use]
pub fn note(days: i64) -> Option<String> {
    match days {
        ..=0 => None,
        1 => Some("(1 day ago)".to_owned()),
        n => Some(format!("({n} days ago)")),
    }
}

/// Appends the elapsed-days note to `.last-updated`.
pub fn install<D: Document + 'static, W: Window + 'static>(
    page: &mut Page<D, W>,
    last_updated: &str,
    today: NaiveDate,
) -> Outcome {
    let Some(element) = page.document().query(Query::Class(ELEMENT_CLASS)) else {
        return Outcome::missing(Query::Class(ELEMENT_CLASS));
    };
    let Some(date) = parse_policy_date(last_updated) else {
        return Outcome::Skipped(SkipReason::UnparsableDate(last_updated.to_owned()));
    };

    if let Some(text) = note(days_since(date, today)) {
        let document = page.document_mut();
        let span = document.create_element("span");
        document.set_styles(span, NOTE_STYLE);
        document.set_text(span, &text);
        document.append_child(element, span);
    }

    Outcome::Installed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_display_dates() {
        assert_eq!(parse_policy_date("November 30, 2025"), NaiveDate::from_ymd_opt(2025, 11, 30));
        assert_eq!(parse_policy_date(" January 2, 2026 "), NaiveDate::from_ymd_opt(2026, 1, 2));
        assert_eq!(parse_policy_date("2025-11-30"), None);
        assert_eq!(parse_policy_date(""), None);
    }

    #[test]
    fn note_wording() {
        assert_eq!(note(0), None);
        assert_eq!(note(-3), None);
        assert_eq!(note(1).as_deref(), Some("(1 day ago)"));
        assert_eq!(note(45).as_deref(), Some("(45 days ago)"));
    }

    #[test]
    fn days_cross_year_boundaries() {
        let updated = NaiveDate::from_ymd_opt(2025, 11, 30).unwrap();
        let today = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        assert_eq!(days_since(updated, today), 32);
        assert_eq!(days_since(today, updated), -32);
    }
}
