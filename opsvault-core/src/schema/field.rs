//! Form field descriptors.

use opsvault_client::IconKind;

/// What a capacity field measures. Determines the unit selector and the
/// stored encoding (plain cores vs. megabytes).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapacityKind {
    Cores,
    Storage,
}

/// Closed set of editor kinds a field can render as.
///
/// Adding a page that needs a new editor means adding a variant here and
/// handling it in the form engine; there is no escape hatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Text,
    Password,
    Email,
    Tel,
    Url,
    Number,
    Textarea,
    /// Free-form JSON object, edited as text and parsed on collect.
    Json,
    /// Port-to-service rows collected into a map keyed by port number.
    PortList,
    /// Numeric amount with a unit, stored floor-encoded.
    Capacity(CapacityKind),
    /// Icon picker fed by the icon subsystem. Disabled until the field named
    /// by `depends_on` has a value.
    Logo {
        depends_on: &'static str,
        upload: IconKind,
    },
    /// Server-managed timestamp, shown read-only.
    DateTime,
}

/// A single editable field.
#[derive(Debug, Clone, Copy)]
pub struct FieldDef {
    /// Record key this field reads and writes.
    pub key: &'static str,
    /// Translation key for the field's label.
    pub label: &'static str,
    pub field_type: FieldType,
    pub required: bool,
    pub placeholder: Option<&'static str>,
}

impl FieldDef {
    #[must_use]
    pub const fn new(key: &'static str, label: &'static str, field_type: FieldType) -> Self {
        Self {
            key,
            label,
            field_type,
            required: false,
            placeholder: None,
        }
    }

    #[must_use]
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    #[must_use]
    pub const fn placeholder(mut self, text: &'static str) -> Self {
        self.placeholder = Some(text);
        self
    }
}

/// One entry in a schema's field list: a standalone field or a named group
/// of fields laid out on one row. Groups cannot nest; the type makes that
/// unrepresentable.
#[derive(Debug, Clone)]
pub enum FieldItem {
    Single(FieldDef),
    Group {
        key: &'static str,
        fields: Vec<FieldDef>,
    },
}

/// Flatten items into leaf fields in declaration order. Collection and
/// validation always operate on this order.
#[must_use]
pub fn flatten(items: &[FieldItem]) -> Vec<&FieldDef> {
    let mut out = Vec::new();
    for item in items {
        match item {
            FieldItem::Single(def) => out.push(def),
            FieldItem::Group { fields, .. } => out.extend(fields.iter()),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flatten_preserves_declaration_order() {
        let items = vec![
            FieldItem::Single(FieldDef::new("a", "l.a", FieldType::Text)),
            FieldItem::Group {
                key: "g",
                fields: vec![
                    FieldDef::new("b", "l.b", FieldType::Text),
                    FieldDef::new("c", "l.c", FieldType::Number),
                ],
            },
            FieldItem::Single(FieldDef::new("d", "l.d", FieldType::Json)),
        ];
        let keys: Vec<&str> = flatten(&items).iter().map(|f| f.key).collect();
        assert_eq!(keys, ["a", "b", "c", "d"]);
    }
}
