//! Capacity encoding.
//!
//! Capacities persist as a single integer in a canonical unit: plain cores
//! for CPU, megabytes for RAM and disk. Editing happens in `{value, unit}`
//! form; display picks the largest unit that keeps the magnitude below 1024.

/// Storage units selectable in the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageUnit {
    Mb,
    Gb,
    Tb,
}

impl StorageUnit {
    pub const ALL: [StorageUnit; 3] = [Self::Mb, Self::Gb, Self::Tb];

    /// Megabytes per one of this unit.
    #[must_use]
    pub fn multiplier(self) -> f64 {
        match self {
            Self::Mb => 1.0,
            Self::Gb => 1024.0,
            Self::Tb => 1024.0 * 1024.0,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Mb => "MB",
            Self::Gb => "GB",
            Self::Tb => "TB",
        }
    }
}

/// Encode an edited storage amount into megabytes, floor-truncated.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn encode_storage(value: f64, unit: StorageUnit) -> i64 {
    (value * unit.multiplier()).floor() as i64
}

/// Encode an edited core count, floor-truncated.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn encode_cores(value: f64) -> i64 {
    value.floor() as i64
}

/// Split a stored megabyte count into the largest unit keeping the value
/// below 1024. Zero (and anything below 1024 MB) stays in MB.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn display_storage(megabytes: i64) -> (f64, StorageUnit) {
    const GB: i64 = 1024;
    const TB: i64 = 1024 * 1024;
    if megabytes >= TB {
        (megabytes as f64 / TB as f64, StorageUnit::Tb)
    } else if megabytes >= GB {
        (megabytes as f64 / GB as f64, StorageUnit::Gb)
    } else {
        (megabytes as f64, StorageUnit::Mb)
    }
}

/// Render a numeric value with up to two decimals, trailing zeros trimmed.
#[must_use]
pub fn trim_decimal(value: f64) -> String {
    let s = format!("{value:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    s.to_string()
}

/// Table-side rendering of a stored megabyte count, e.g. `2.5 GB`.
#[must_use]
pub fn format_storage(megabytes: i64) -> String {
    let (value, unit) = display_storage(megabytes);
    format!("{} {}", trim_decimal(value), unit.label())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_round_trip() {
        assert_eq!(encode_storage(2.5, StorageUnit::Gb), 2560);
        assert_eq!(display_storage(2560), (2.5, StorageUnit::Gb));
    }

    #[test]
    fn zero_stays_in_megabytes() {
        assert_eq!(encode_storage(0.0, StorageUnit::Gb), 0);
        assert_eq!(display_storage(0), (0.0, StorageUnit::Mb));
    }

    #[test]
    fn large_values_collapse_to_terabytes() {
        let mb = encode_storage(1024.0, StorageUnit::Gb);
        assert_eq!(display_storage(mb), (1.0, StorageUnit::Tb));
        assert_eq!(display_storage(1024 * 1024 + 524_288), (1.5, StorageUnit::Tb));
    }

    #[test]
    fn encoding_floors() {
        assert_eq!(encode_storage(0.4, StorageUnit::Mb), 0);
        assert_eq!(encode_storage(1.999, StorageUnit::Mb), 1);
        assert_eq!(encode_cores(2.9), 2);
    }

    #[test]
    fn formatting_trims_decimals() {
        assert_eq!(format_storage(2560), "2.5 GB");
        assert_eq!(format_storage(1024), "1 GB");
        assert_eq!(format_storage(512), "512 MB");
        assert_eq!(trim_decimal(1.25), "1.25");
    }
}
