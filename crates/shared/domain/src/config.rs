use crate::features::FeatureFlags;
use serde::{Deserialize, Serialize};
use std::ops::{Deref, DerefMut};
use std::sync::Arc;

/// The privacy-policy record: organizational facts plus page toggles.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PolicyConfigInner {
    pub company: CompanyConfig,
    pub contact: ContactConfig,
    pub legal: LegalConfig,
    pub third_party_services: ThirdPartyServices,
    pub links: LinksConfig,
    pub data_storage: DataStorageConfig,
    pub security: SecurityConfig,
    pub cookies: CookiesConfig,
    pub user_rights: UserRights,
    pub data_collected: DataCollected,
    pub ui: UiConfig,
    pub features: Features,
}

/// Thin Arc-wrapped record for inexpensive cloning into page behaviors.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PolicyConfig {
    inner: Arc<PolicyConfigInner>,
}

impl PolicyConfig {
    #[must_use]
    pub fn new(inner: PolicyConfigInner) -> Self {
        Self { inner: Arc::new(inner) }
    }
}

impl From<PolicyConfigInner> for PolicyConfig {
    fn from(inner: PolicyConfigInner) -> Self {
        Self::new(inner)
    }
}

impl Deref for PolicyConfig {
    type Target = PolicyConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for PolicyConfig {
    fn deref_mut(&mut self) -> &mut PolicyConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CompanyConfig {
    pub name: String,
    pub legal_name: String,
    pub website: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactConfig {
    pub email: String,
    pub dpo_email: String,
    pub support_email: String,
    pub phone: String,
    pub address: PostalAddress,
    /// Response time for privacy inquiries, in days.
    pub response_time: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PostalAddress {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LegalConfig {
    /// Display date, e.g. `November 30, 2025`.
    pub last_updated: String,
    pub effective_date: String,
    pub minimum_age: MinimumAge,
    pub data_retention: DataRetention,
    pub jurisdiction: String,
    pub eu_compliant: bool,
    pub ccpa_compliant: bool,
    pub gdpr_compliant: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MinimumAge {
    pub default: u8,
    pub eu: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DataRetention {
    pub active_account: Retention,
    pub deleted_account: Retention,
    pub backup_systems: Retention,
    pub legal_hold: Retention,
}

/// A retention period: either a number of days or a free-text rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Retention {
    Days(u32),
    Period(String),
}

impl std::fmt::Display for Retention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Days(1) => f.write_str("1 day"),
            Self::Days(days) => write!(f, "{days} days"),
            Self::Period(text) => f.write_str(text),
        }
    }
}

/// A category of external processors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceCategory {
    pub name: String,
    pub providers: Vec<String>,
    pub purpose: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThirdPartyServices {
    pub analytics: ServiceCategory,
    pub payment: ServiceCategory,
    pub hosting: ServiceCategory,
    pub communication: ServiceCategory,
    pub support: ServiceCategory,
}

impl ThirdPartyServices {
    /// Categories in display order.
    #[must_use]
    pub const fn categories(&self) -> [&ServiceCategory; 5] {
        [&self.analytics, &self.payment, &self.hosting, &self.communication, &self.support]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LinksConfig {
    pub terms_of_service: String,
    pub privacy_policy: String,
    pub cookie_policy: String,
    pub contact_page: String,
    pub homepage: String,
    pub social: SocialLinks,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLinks {
    pub twitter: String,
    pub linkedin: String,
    pub facebook: String,
    pub instagram: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DataStorageConfig {
    pub locations: Vec<String>,
    pub encryption_in_transit: String,
    pub encryption_at_rest: String,
    pub backup_frequency: String,
    pub redundancy: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecurityConfig {
    pub features: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CookieCategory {
    pub name: String,
    pub description: String,
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CookiesConfig {
    pub essential: CookieCategory,
    pub performance: CookieCategory,
    pub functional: CookieCategory,
    pub marketing: CookieCategory,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserRight {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserRights {
    pub access: UserRight,
    pub correction: UserRight,
    pub deletion: UserRight,
    pub portability: UserRight,
    pub opt_out: UserRight,
    pub restriction: UserRight,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataCollected {
    pub personal: PersonalData,
    pub automatic: AutomaticData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalData {
    pub account: Vec<String>,
    pub instagram: Vec<String>,
    pub payment: Vec<String>,
    pub communication: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutomaticData {
    pub usage: Vec<String>,
    pub device: Vec<String>,
    pub logs: Vec<String>,
    pub tracking: Vec<String>,
}

/// Page customization toggles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UiConfig {
    pub show_print_button: bool,
    pub show_reading_progress: bool,
    pub show_back_to_top: bool,
    pub enable_smooth_scroll: bool,
    pub enable_copy_email: bool,
    pub colors: ColorScheme,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorScheme {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Features {
    pub email_copy_to_clipboard: bool,
    pub collapsible_sections: bool,
    pub dark_mode_toggle: bool,
    pub language_selector: bool,
    pub chat_support: bool,
}

impl Features {
    #[must_use]
    pub fn flags(&self) -> FeatureFlags {
        FeatureFlags::from(self)
    }
}

// --- Default ---

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

fn service(name: &str, providers: &[&str], purpose: &str) -> ServiceCategory {
    ServiceCategory { name: name.to_owned(), providers: strings(providers), purpose: purpose.to_owned() }
}

fn cookie(name: &str, description: &str, required: bool) -> CookieCategory {
    CookieCategory { name: name.to_owned(), description: description.to_owned(), required }
}

fn right(name: &str, description: &str) -> UserRight {
    UserRight { name: name.to_owned(), description: description.to_owned() }
}

impl Default for CompanyConfig {
    fn default() -> Self {
        Self {
            name: "Instagram Automation Platform".to_owned(),
            legal_name: "Your Company Legal Name Inc.".to_owned(),
            website: "https://yourcompany.com".to_owned(),
            description: "Instagram automation and messaging platform".to_owned(),
        }
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            email: "privacy@yourcompany.com".to_owned(),
            dpo_email: "dpo@yourcompany.com".to_owned(),
            support_email: "support@yourcompany.com".to_owned(),
            phone: "+1 (555) 123-4567".to_owned(),
            address: PostalAddress::default(),
            response_time: 30,
        }
    }
}

impl Default for PostalAddress {
    fn default() -> Self {
        Self {
            street: "1234 Tech Street, Suite 100".to_owned(),
            city: "Delhi".to_owned(),
            state: "Delhi".to_owned(),
            zip_code: String::new(),
            country: "India".to_owned(),
        }
    }
}

impl Default for LegalConfig {
    fn default() -> Self {
        Self {
            last_updated: "November 30, 2025".to_owned(),
            effective_date: "November 30, 2025".to_owned(),
            minimum_age: MinimumAge::default(),
            data_retention: DataRetention::default(),
            jurisdiction: "United States".to_owned(),
            eu_compliant: true,
            ccpa_compliant: true,
            gdpr_compliant: true,
        }
    }
}

impl Default for MinimumAge {
    fn default() -> Self {
        Self { default: 13, eu: 16 }
    }
}

impl Default for DataRetention {
    fn default() -> Self {
        Self {
            active_account: Retention::Period("duration of account".to_owned()),
            deleted_account: Retention::Days(30),
            backup_systems: Retention::Days(90),
            legal_hold: Retention::Period("as required by law".to_owned()),
        }
    }
}

impl Default for ServiceCategory {
    fn default() -> Self {
        service("", &[], "")
    }
}

impl Default for ThirdPartyServices {
    fn default() -> Self {
        Self {
            analytics: service(
                "Analytics Services",
                &["Google Analytics", "Mixpanel"],
                "Analyzes usage patterns and improves service quality",
            ),
            payment: service(
                "Payment Processors",
                &["Stripe", "PayPal"],
                "Processes payments securely",
            ),
            hosting: service(
                "Cloud Infrastructure",
                &["AWS", "Google Cloud"],
                "Provides hosting and data storage",
            ),
            communication: service(
                "Communication Services",
                &["SendGrid", "Twilio"],
                "Delivers email and SMS notifications",
            ),
            support: service(
                "Customer Support",
                &["Zendesk", "Intercom"],
                "Manages support tickets and live chat",
            ),
        }
    }
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            terms_of_service: "#".to_owned(),
            privacy_policy: "#".to_owned(),
            cookie_policy: "#".to_owned(),
            contact_page: "#".to_owned(),
            homepage: "https://yourcompany.com".to_owned(),
            social: SocialLinks::default(),
        }
    }
}

impl Default for SocialLinks {
    fn default() -> Self {
        Self {
            twitter: "https://twitter.com/yourcompany".to_owned(),
            linkedin: "https://linkedin.com/company/yourcompany".to_owned(),
            facebook: "https://facebook.com/yourcompany".to_owned(),
            instagram: "https://instagram.com/yourcompany".to_owned(),
        }
    }
}

impl Default for DataStorageConfig {
    fn default() -> Self {
        Self {
            locations: strings(&["United States", "European Union", "India"]),
            encryption_in_transit: "TLS/SSL".to_owned(),
            encryption_at_rest: "AES-256".to_owned(),
            backup_frequency: "Daily".to_owned(),
            redundancy: true,
        }
    }
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            features: strings(&[
                "Encryption: Data in transit uses TLS/SSL encryption; data at rest uses AES-256 encryption",
                "Access Controls: Role-based access with multi-factor authentication for staff",
                "Regular Audits: Conducts periodic security assessments and vulnerability testing",
                "Secure Infrastructure: Hosts data on secure cloud servers with redundancy and backup systems",
                "Monitoring: Implements 24/7 system monitoring for suspicious activity",
            ]),
        }
    }
}

impl Default for CookieCategory {
    fn default() -> Self {
        cookie("", "", false)
    }
}

impl Default for CookiesConfig {
    fn default() -> Self {
        Self {
            essential: cookie(
                "Essential Cookies",
                "Enables basic functionality like user authentication and security features",
                true,
            ),
            performance: cookie(
                "Performance Cookies",
                "Collects anonymous usage data to improve service performance",
                false,
            ),
            functional: cookie(
                "Functional Cookies",
                "Remembers your preferences and settings",
                false,
            ),
            marketing: cookie(
                "Marketing Cookies",
                "Tracks your activity for targeted advertising",
                false,
            ),
        }
    }
}

impl Default for UserRight {
    fn default() -> Self {
        right("", "")
    }
}

impl Default for UserRights {
    fn default() -> Self {
        Self {
            access: right("Access", "Requests a copy of the personal data we hold about you"),
            correction: right(
                "Correction",
                "Updates or corrects inaccurate or incomplete information",
            ),
            deletion: right(
                "Deletion",
                "Requests deletion of your personal data (subject to legal obligations)",
            ),
            portability: right(
                "Data Portability",
                "Receives your data in a structured, machine-readable format",
            ),
            opt_out: right("Opt-Out", "Unsubscribes from marketing communications at any time"),
            restriction: right("Restriction", "Limits how we process your personal information"),
        }
    }
}

impl Default for PersonalData {
    fn default() -> Self {
        Self {
            account: strings(&["Name", "Email address", "Phone number", "Password"]),
            instagram: strings(&[
                "Instagram username",
                "Profile information",
                "Authentication tokens",
            ]),
            payment: strings(&[
                "Billing address",
                "Payment method details (processed securely through third-party payment processors)",
            ]),
            communication: strings(&[
                "Messages",
                "Comments",
                "Interactions you create through our platform",
            ]),
        }
    }
}

impl Default for AutomaticData {
    fn default() -> Self {
        Self {
            usage: strings(&["Features used", "Time spent", "Automation workflows created"]),
            device: strings(&[
                "IP address",
                "Browser type",
                "Operating system",
                "Device identifiers",
            ]),
            logs: strings(&["Access times", "Pages viewed", "Error logs", "System activity"]),
            tracking: strings(&["Session cookies", "Preference cookies", "Analytics cookies"]),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_print_button: true,
            show_reading_progress: true,
            show_back_to_top: true,
            enable_smooth_scroll: true,
            enable_copy_email: true,
            colors: ColorScheme::default(),
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            primary: "#6366f1".to_owned(),
            secondary: "#8b5cf6".to_owned(),
            accent: "#ec4899".to_owned(),
        }
    }
}

impl Default for Features {
    fn default() -> Self {
        Self {
            email_copy_to_clipboard: true,
            collapsible_sections: false,
            dark_mode_toggle: false,
            language_selector: false,
            chat_support: false,
        }
    }
}
