//! Table column descriptors.

/// Closed set of cell renderings. A column without a format displays the
/// raw value as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnFormat {
    /// `YYYY-MM-DD HH:mm:ss`.
    DateTime,
    /// Date part only.
    Date,
    /// Masked dots with reveal/copy support.
    Password,
    /// Cell text doubles as a link to the URL found under `url_key` in the
    /// same record.
    PlatformLink { url_key: &'static str },
    /// Compact single-line JSON.
    Json,
    /// Megabyte count rendered in the largest unit that keeps the value
    /// below 1024.
    Storage,
    /// `port:service` pairs joined with commas.
    PortMapping,
    /// Synthesized `cpu / ram / disk` summary pulled from three record keys.
    HardwareSpecs {
        cpu_key: &'static str,
        ram_key: &'static str,
        disk_key: &'static str,
    },
}

/// A single table column.
#[derive(Debug, Clone, Copy)]
pub struct Column {
    /// Record key the cell value comes from. Synthetic columns (hardware
    /// specs) use a key that does not exist on the record.
    pub key: &'static str,
    /// Translation key for the header label.
    pub label: &'static str,
    pub format: Option<ColumnFormat>,
    /// Whether the cell offers copy-to-clipboard of its raw value.
    pub copyable: bool,
    /// Preferred rendering width in characters, None for flexible.
    pub width: Option<u16>,
}

impl Column {
    #[must_use]
    pub const fn new(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            format: None,
            copyable: false,
            width: None,
        }
    }

    #[must_use]
    pub const fn format(mut self, format: ColumnFormat) -> Self {
        self.format = Some(format);
        self
    }

    #[must_use]
    pub const fn copyable(mut self) -> Self {
        self.copyable = true;
        self
    }

    #[must_use]
    pub const fn width(mut self, chars: u16) -> Self {
        self.width = Some(chars);
        self
    }
}
