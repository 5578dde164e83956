//! Internationalization.
//!
//! The active language is a process-wide atomic so `t()` stays a cheap
//! static lookup from anywhere in the view layer. Schema label keys are
//! dotted strings ("accounts.platform"); `label()` bridges them onto the
//! typed tables and falls back to the raw key for anything unknown.

pub mod keys;

mod en_us;
mod zh_cn;

use std::sync::atomic::{AtomicUsize, Ordering};

use keys::Translations;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    EnUs,
    ZhCn,
}

impl Language {
    pub const fn code(self) -> &'static str {
        match self {
            Self::EnUs => "en-US",
            Self::ZhCn => "zh-CN",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en-US" => Some(Self::EnUs),
            "zh-CN" => Some(Self::ZhCn),
            _ => None,
        }
    }

    pub const fn next(self) -> Self {
        match self {
            Self::EnUs => Self::ZhCn,
            Self::ZhCn => Self::EnUs,
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::EnUs => 0,
            Self::ZhCn => 1,
        }
    }
}

static CURRENT_LANGUAGE: AtomicUsize = AtomicUsize::new(0);

pub fn set_language(language: Language) {
    CURRENT_LANGUAGE.store(language.index(), Ordering::Relaxed);
}

pub fn current_language() -> Language {
    match CURRENT_LANGUAGE.load(Ordering::Relaxed) {
        1 => Language::ZhCn,
        _ => Language::EnUs,
    }
}

/// Translation table for the active language.
pub fn t() -> &'static Translations {
    match current_language() {
        Language::EnUs => &en_us::TRANSLATIONS,
        Language::ZhCn => &zh_cn::TRANSLATIONS,
    }
}

/// Resolves a dotted schema label key against the active language.
pub fn label(key: &'static str) -> &'static str {
    let t = t();
    match key {
        "common.id" => t.common.id,
        "common.created_at" => t.common.created_at,
        "common.updated_at" => t.common.updated_at,

        "accounts.title" => t.accounts.title,
        "accounts.platform" => t.accounts.platform,
        "accounts.platform_url" => t.accounts.platform_url,
        "accounts.logo" => t.accounts.logo,
        "accounts.username" => t.accounts.username,
        "accounts.password" => t.accounts.password,
        "accounts.security_email" => t.accounts.security_email,
        "accounts.security_phone" => t.accounts.security_phone,
        "accounts.remark" => t.accounts.remark,

        "hosts.title" => t.hosts.title,
        "hosts.provider" => t.hosts.provider,
        "hosts.provider_url" => t.hosts.provider_url,
        "hosts.address" => t.hosts.address,
        "hosts.ports" => t.hosts.ports,
        "hosts.username" => t.hosts.username,
        "hosts.password" => t.hosts.password,
        "hosts.hostname" => t.hosts.hostname,
        "hosts.os" => t.hosts.os,
        "hosts.logo" => t.hosts.logo,
        "hosts.cpu_capacity" => t.hosts.cpu_capacity,
        "hosts.ram_capacity" => t.hosts.ram_capacity,
        "hosts.disk_capacity" => t.hosts.disk_capacity,
        "hosts.specs" => t.hosts.specs,
        "hosts.cpu_placeholder" => t.hosts.cpu_placeholder,
        "hosts.ram_placeholder" => t.hosts.ram_placeholder,
        "hosts.disk_placeholder" => t.hosts.disk_placeholder,

        "secrets.title" => t.secrets.title,
        "secrets.platform" => t.secrets.platform,
        "secrets.platform_url" => t.secrets.platform_url,
        "secrets.logo" => t.secrets.logo,
        "secrets.key_id" => t.secrets.key_id,
        "secrets.key_secret" => t.secrets.key_secret,
        "secrets.remark" => t.secrets.remark,

        "sites.title" => t.sites.title,
        "sites.name" => t.sites.name,
        "sites.url" => t.sites.url,
        "sites.logo" => t.sites.logo,

        // Unknown keys render as-is so a missing entry is visible
        // instead of a silent blank.
        _ => key,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn language_round_trips_through_code() {
        for lang in [Language::EnUs, Language::ZhCn] {
            assert_eq!(Language::from_code(lang.code()), Some(lang));
        }
        assert_eq!(Language::from_code("fr-FR"), None);
    }

    #[test]
    fn every_schema_label_key_resolves() {
        set_language(Language::EnUs);
        for kind in opsvault_core::PageKind::ALL {
            let schema = opsvault_core::schema(kind);
            assert_ne!(label(schema.title), schema.title);
            for field in schema.flat_fields() {
                assert_ne!(label(field.label), field.label, "field {}", field.key);
            }
            for column in &schema.columns {
                assert_ne!(label(column.label), column.label, "column {}", column.key);
            }
        }
    }

    #[test]
    fn unknown_key_falls_back_to_itself() {
        assert_eq!(label("nonexistent.key"), "nonexistent.key");
    }
}
