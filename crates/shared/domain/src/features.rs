use crate::config::Features;
use bitflags::bitflags;

bitflags! {
    /// Page features toggled through the `features` section of the record.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct FeatureFlags: u32 {
        const EMAIL_COPY_TO_CLIPBOARD = 1 << 0;
        const COLLAPSIBLE_SECTIONS = 1 << 1;
        const DARK_MODE_TOGGLE = 1 << 2;
        const LANGUAGE_SELECTOR = 1 << 3;
        const CHAT_SUPPORT = 1 << 4;
    }
}

impl From<&Features> for FeatureFlags {
    fn from(features: &Features) -> Self {
        let mut flags = Self::empty();
        flags.set(Self::EMAIL_COPY_TO_CLIPBOARD, features.email_copy_to_clipboard);
        flags.set(Self::COLLAPSIBLE_SECTIONS, features.collapsible_sections);
        flags.set(Self::DARK_MODE_TOGGLE, features.dark_mode_toggle);
        flags.set(Self::LANGUAGE_SELECTOR, features.language_selector);
        flags.set(Self::CHAT_SUPPORT, features.chat_support);
        flags
    }
}

impl From<&str> for FeatureFlags {
    fn from(s: &str) -> Self {
        match s {
            "emailCopyToClipboard" => Self::EMAIL_COPY_TO_CLIPBOARD,
            "collapsibleSections" => Self::COLLAPSIBLE_SECTIONS,
            "darkModeToggle" => Self::DARK_MODE_TOGGLE,
            "languageSelector" => Self::LANGUAGE_SELECTOR,
            "chatSupport" => Self::CHAT_SUPPORT,
            "all" | "*" => Self::all(),
            _ => Self::empty(),
        }
    }
}
