//! Translation key definitions.
//!
//! Plain static structs checked at compile time; one table per language.
//! Page field/column labels live under their page so the schema's dotted
//! label keys map one-to-one.

/// Root of all translated text.
pub struct Translations {
    pub common: CommonTexts,
    pub nav: NavTexts,
    pub login: LoginTexts,
    pub records: RecordsTexts,
    pub modal: ModalTexts,
    pub help: HelpTexts,
    pub accounts: AccountsTexts,
    pub hosts: HostsTexts,
    pub secrets: SecretsTexts,
    pub sites: SitesTexts,
}

/// Reused verbs and state words.
pub struct CommonTexts {
    pub app_name: &'static str,
    pub add: &'static str,
    pub edit: &'static str,
    pub delete: &'static str,
    pub save: &'static str,
    pub cancel: &'static str,
    pub confirm: &'static str,
    pub quit: &'static str,
    pub loading: &'static str,
    pub yes: &'static str,
    pub no: &'static str,
    pub id: &'static str,
    pub created_at: &'static str,
    pub updated_at: &'static str,
}

pub struct NavTexts {
    pub title: &'static str,
    pub accounts: &'static str,
    pub hosts: &'static str,
    pub secrets: &'static str,
    pub sites: &'static str,
    pub logout: &'static str,
}

pub struct LoginTexts {
    pub title: &'static str,
    pub username: &'static str,
    pub password: &'static str,
    pub submit: &'static str,
    pub hint: &'static str,
}

/// Records page chrome (table itself renders schema labels).
pub struct RecordsTexts {
    pub empty_title: &'static str,
    pub empty_hint: &'static str,
    pub search: &'static str,
    pub selected: &'static str,
    pub page_of: &'static str,
    pub total: &'static str,
    pub csv_unavailable: &'static str,
}

pub struct ModalTexts {
    pub create_title: &'static str,
    pub edit_title: &'static str,
    pub delete_title: &'static str,
    pub delete_one: &'static str,
    pub delete_many: &'static str,
    pub required_mark: &'static str,
    pub field_required: &'static str,
    pub generate_hint: &'static str,
    pub logo_disabled: &'static str,
}

pub struct HelpTexts {
    pub title: &'static str,
    pub lines: &'static [&'static str],
}

pub struct AccountsTexts {
    pub title: &'static str,
    pub platform: &'static str,
    pub platform_url: &'static str,
    pub logo: &'static str,
    pub username: &'static str,
    pub password: &'static str,
    pub security_email: &'static str,
    pub security_phone: &'static str,
    pub remark: &'static str,
}

pub struct HostsTexts {
    pub title: &'static str,
    pub provider: &'static str,
    pub provider_url: &'static str,
    pub address: &'static str,
    pub ports: &'static str,
    pub username: &'static str,
    pub password: &'static str,
    pub hostname: &'static str,
    pub os: &'static str,
    pub logo: &'static str,
    pub cpu_capacity: &'static str,
    pub ram_capacity: &'static str,
    pub disk_capacity: &'static str,
    pub specs: &'static str,
    pub cpu_placeholder: &'static str,
    pub ram_placeholder: &'static str,
    pub disk_placeholder: &'static str,
}

pub struct SecretsTexts {
    pub title: &'static str,
    pub platform: &'static str,
    pub platform_url: &'static str,
    pub logo: &'static str,
    pub key_id: &'static str,
    pub key_secret: &'static str,
    pub remark: &'static str,
}

pub struct SitesTexts {
    pub title: &'static str,
    pub name: &'static str,
    pub url: &'static str,
    pub logo: &'static str,
}
