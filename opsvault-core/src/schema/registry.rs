//! The static page registry.

use std::sync::LazyLock;

use opsvault_client::IconKind;

use super::column::{Column, ColumnFormat};
use super::field::{flatten, CapacityKind, FieldDef, FieldItem, FieldType};

/// The four admin pages. Doubles as the navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageKind {
    Accounts,
    Hosts,
    Secrets,
    Sites,
}

impl PageKind {
    pub const ALL: [PageKind; 4] = [Self::Accounts, Self::Hosts, Self::Secrets, Self::Sites];

    /// Stable identifier used for persistence and resource paths.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Accounts => "accounts",
            Self::Hosts => "hosts",
            Self::Secrets => "secrets",
            Self::Sites => "sites",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.key() == key)
    }
}

/// Complete description of one admin page.
pub struct PageSchema {
    pub kind: PageKind,
    /// Translation key for the page title.
    pub title: &'static str,
    /// Glyph shown next to the title in navigation.
    pub icon: &'static str,
    /// Resource segment in API paths, e.g. `/api/accounts/...`.
    pub resource: &'static str,
    /// Whether the page offers CSV import/export.
    pub csv_enabled: bool,
    pub fields: Vec<FieldItem>,
    pub columns: Vec<Column>,
}

impl PageSchema {
    /// Leaf fields in declaration order.
    #[must_use]
    pub fn flat_fields(&self) -> Vec<&FieldDef> {
        flatten(&self.fields)
    }
}

/// Look up the schema for a page. Infallible: every [`PageKind`] has one.
#[must_use]
pub fn schema(kind: PageKind) -> &'static PageSchema {
    match kind {
        PageKind::Accounts => &ACCOUNTS,
        PageKind::Hosts => &HOSTS,
        PageKind::Secrets => &SECRETS,
        PageKind::Sites => &SITES,
    }
}

static ACCOUNTS: LazyLock<PageSchema> = LazyLock::new(|| PageSchema {
    kind: PageKind::Accounts,
    title: "accounts.title",
    icon: "\u{1f464}",
    resource: "accounts",
    csv_enabled: true,
    fields: vec![
        FieldItem::Single(FieldDef::new("platform", "accounts.platform", FieldType::Text).required()),
        FieldItem::Single(
            FieldDef::new("platform_url", "accounts.platform_url", FieldType::Url).required(),
        ),
        FieldItem::Single(
            FieldDef::new(
                "logo",
                "accounts.logo",
                FieldType::Logo {
                    depends_on: "platform",
                    upload: IconKind::Platform,
                },
            ),
        ),
        FieldItem::Single(FieldDef::new("username", "accounts.username", FieldType::Text).required()),
        FieldItem::Single(
            FieldDef::new("password", "accounts.password", FieldType::Password).required(),
        ),
        FieldItem::Single(FieldDef::new(
            "security_email",
            "accounts.security_email",
            FieldType::Email,
        )),
        FieldItem::Single(FieldDef::new(
            "security_phone",
            "accounts.security_phone",
            FieldType::Tel,
        )),
        FieldItem::Single(FieldDef::new("remark", "accounts.remark", FieldType::Textarea)),
    ],
    columns: vec![
        Column::new("ID", "common.id").width(6),
        Column::new("platform", "accounts.platform")
            .width(14)
            .format(ColumnFormat::PlatformLink {
                url_key: "platform_url",
            }),
        Column::new("username", "accounts.username").width(18).copyable(),
        Column::new("password", "accounts.password")
            .width(18)
            .format(ColumnFormat::Password)
            .copyable(),
        Column::new("security_email", "accounts.security_email")
            .width(22)
            .copyable(),
        Column::new("security_phone", "accounts.security_phone")
            .width(16)
            .copyable(),
        Column::new("remark", "accounts.remark"),
        Column::new("CreatedAt", "common.created_at")
            .width(20)
            .format(ColumnFormat::DateTime),
        Column::new("UpdatedAt", "common.updated_at")
            .width(20)
            .format(ColumnFormat::DateTime),
    ],
});

static HOSTS: LazyLock<PageSchema> = LazyLock::new(|| PageSchema {
    kind: PageKind::Hosts,
    title: "hosts.title",
    icon: "\u{1f5a5}",
    resource: "hosts",
    csv_enabled: true,
    fields: vec![
        FieldItem::Single(FieldDef::new("provider", "hosts.provider", FieldType::Text).required()),
        FieldItem::Single(
            FieldDef::new("provider_url", "hosts.provider_url", FieldType::Url).required(),
        ),
        FieldItem::Single(FieldDef::new("address", "hosts.address", FieldType::Text).required()),
        FieldItem::Single(FieldDef::new("ports", "hosts.ports", FieldType::PortList).required()),
        FieldItem::Single(FieldDef::new("username", "hosts.username", FieldType::Text).required()),
        FieldItem::Single(
            FieldDef::new("password", "hosts.password", FieldType::Password).required(),
        ),
        FieldItem::Group {
            key: "hostname_os_group",
            fields: vec![
                FieldDef::new("hostname", "hosts.hostname", FieldType::Text).required(),
                FieldDef::new("os", "hosts.os", FieldType::Text),
            ],
        },
        FieldItem::Single(FieldDef::new(
            "logo",
            "hosts.logo",
            FieldType::Logo {
                depends_on: "os",
                upload: IconKind::Os,
            },
        )),
        FieldItem::Group {
            key: "capacity_group",
            fields: vec![
                FieldDef::new(
                    "cpu_num",
                    "hosts.cpu_capacity",
                    FieldType::Capacity(CapacityKind::Cores),
                )
                .placeholder("hosts.cpu_placeholder"),
                FieldDef::new(
                    "ram_size",
                    "hosts.ram_capacity",
                    FieldType::Capacity(CapacityKind::Storage),
                )
                .placeholder("hosts.ram_placeholder"),
                FieldDef::new(
                    "disk_size",
                    "hosts.disk_capacity",
                    FieldType::Capacity(CapacityKind::Storage),
                )
                .placeholder("hosts.disk_placeholder"),
            ],
        },
    ],
    columns: vec![
        Column::new("ID", "common.id").width(6),
        Column::new("provider", "hosts.provider")
            .width(14)
            .format(ColumnFormat::PlatformLink {
                url_key: "provider_url",
            }),
        Column::new("hostname", "hosts.hostname").width(18),
        Column::new("address", "hosts.address").width(18).copyable(),
        Column::new("ports", "hosts.ports")
            .width(18)
            .format(ColumnFormat::PortMapping),
        Column::new("username", "hosts.username").width(14).copyable(),
        Column::new("password", "hosts.password")
            .width(18)
            .format(ColumnFormat::Password)
            .copyable(),
        Column::new("os", "hosts.os").width(14),
        Column::new("specs", "hosts.specs")
            .width(20)
            .format(ColumnFormat::HardwareSpecs {
                cpu_key: "cpu_num",
                ram_key: "ram_size",
                disk_key: "disk_size",
            }),
        Column::new("CreatedAt", "common.created_at")
            .width(20)
            .format(ColumnFormat::DateTime),
        Column::new("UpdatedAt", "common.updated_at")
            .width(20)
            .format(ColumnFormat::DateTime),
    ],
});

static SECRETS: LazyLock<PageSchema> = LazyLock::new(|| PageSchema {
    kind: PageKind::Secrets,
    title: "secrets.title",
    icon: "\u{1f511}",
    resource: "secrets",
    csv_enabled: true,
    fields: vec![
        FieldItem::Single(FieldDef::new("platform", "secrets.platform", FieldType::Text).required()),
        FieldItem::Single(
            FieldDef::new("platform_url", "secrets.platform_url", FieldType::Url).required(),
        ),
        FieldItem::Single(FieldDef::new(
            "logo",
            "secrets.logo",
            FieldType::Logo {
                depends_on: "platform",
                upload: IconKind::Platform,
            },
        )),
        FieldItem::Single(FieldDef::new("key_id", "secrets.key_id", FieldType::Text).required()),
        FieldItem::Single(
            FieldDef::new("key_secret", "secrets.key_secret", FieldType::Password).required(),
        ),
        FieldItem::Single(FieldDef::new("remark", "secrets.remark", FieldType::Textarea)),
    ],
    columns: vec![
        Column::new("ID", "common.id").width(6),
        Column::new("platform", "secrets.platform")
            .width(18)
            .format(ColumnFormat::PlatformLink {
                url_key: "platform_url",
            }),
        Column::new("key_id", "secrets.key_id").width(24).copyable(),
        Column::new("key_secret", "secrets.key_secret")
            .width(24)
            .format(ColumnFormat::Password)
            .copyable(),
        Column::new("remark", "secrets.remark"),
        Column::new("CreatedAt", "common.created_at")
            .width(20)
            .format(ColumnFormat::DateTime),
        Column::new("UpdatedAt", "common.updated_at")
            .width(20)
            .format(ColumnFormat::DateTime),
    ],
});

static SITES: LazyLock<PageSchema> = LazyLock::new(|| PageSchema {
    kind: PageKind::Sites,
    title: "sites.title",
    icon: "\u{1f310}",
    resource: "sites",
    csv_enabled: false,
    fields: vec![
        FieldItem::Single(FieldDef::new("name", "sites.name", FieldType::Text).required()),
        FieldItem::Single(FieldDef::new("url", "sites.url", FieldType::Url).required()),
        FieldItem::Single(FieldDef::new(
            "logo",
            "sites.logo",
            FieldType::Logo {
                depends_on: "name",
                upload: IconKind::Site,
            },
        )),
    ],
    columns: vec![
        Column::new("ID", "common.id").width(6),
        Column::new("name", "sites.name")
            .width(18)
            .format(ColumnFormat::PlatformLink { url_key: "url" }),
        Column::new("url", "sites.url").width(30).copyable(),
        Column::new("CreatedAt", "common.created_at")
            .width(20)
            .format(ColumnFormat::DateTime),
        Column::new("UpdatedAt", "common.updated_at")
            .width(20)
            .format(ColumnFormat::DateTime),
    ],
});

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn every_page_resolves() {
        for kind in PageKind::ALL {
            let s = schema(kind);
            assert_eq!(s.kind, kind);
            assert_eq!(s.resource, kind.key());
            assert!(!s.columns.is_empty());
        }
    }

    #[test]
    fn page_keys_round_trip() {
        for kind in PageKind::ALL {
            assert_eq!(PageKind::from_key(kind.key()), Some(kind));
        }
        assert_eq!(PageKind::from_key("nope"), None);
    }

    #[test]
    fn field_keys_are_unique_per_page() {
        for kind in PageKind::ALL {
            let s = schema(kind);
            let mut seen = HashSet::new();
            for def in s.flat_fields() {
                assert!(seen.insert(def.key), "duplicate field {} on {:?}", def.key, kind);
            }
        }
    }

    #[test]
    fn logo_dependencies_name_existing_fields() {
        for kind in PageKind::ALL {
            let s = schema(kind);
            let keys: HashSet<&str> = s.flat_fields().iter().map(|f| f.key).collect();
            for def in s.flat_fields() {
                if let FieldType::Logo { depends_on, .. } = def.field_type {
                    assert!(
                        keys.contains(depends_on),
                        "{:?}: logo depends on missing field {depends_on}",
                        kind
                    );
                }
            }
        }
    }

    #[test]
    fn hardware_specs_reference_record_keys() {
        let s = schema(PageKind::Hosts);
        let col = s
            .columns
            .iter()
            .find(|c| matches!(c.format, Some(ColumnFormat::HardwareSpecs { .. })));
        let Some(col) = col else {
            panic!("hosts page should summarize hardware specs");
        };
        if let Some(ColumnFormat::HardwareSpecs {
            cpu_key,
            ram_key,
            disk_key,
        }) = col.format
        {
            let keys: HashSet<&str> = s.flat_fields().iter().map(|f| f.key).collect();
            for key in [cpu_key, ram_key, disk_key] {
                assert!(keys.contains(key));
            }
        }
    }
}
