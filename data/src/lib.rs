//! Static demonstration dataset shown on the Portal globe.
//!
//! Everything here is `'static` and read-only: the records are embedded at
//! compile time, handed out by reference, and never mutated. Percentage
//! breakdowns are ordered `(label, percent)` slices because the statistics
//! panel displays entries in insertion order.
#![deny(missing_docs)]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::dbg_macro, clippy::large_enum_variant)]

mod sample;

pub use sample::{CITIES, COUNTRIES};

/// Geographic coordinate in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LatLon {
    /// Latitude, positive north, in `[-90, 90]`.
    pub lat_deg: f32,
    /// Longitude, positive east, in `[-180, 180]`.
    pub lon_deg: f32,
}

/// A country with selectable statistics.
#[derive(Clone, Copy, Debug)]
pub struct CountryRecord {
    /// Display name.
    pub name: &'static str,
    /// Short country code (ISO-3166-ish, display only).
    pub code: &'static str,
    /// Marker position.
    pub coordinate: LatLon,
    /// Nationality shares in percent, display order preserved. Intended to
    /// sum to roughly 100; nothing enforces it at runtime.
    pub nationalities: &'static [(&'static str, u8)],
    /// Language shares in percent, display order preserved.
    pub languages: &'static [(&'static str, u8)],
}

/// A decorative reference city. Carries no statistics.
#[derive(Clone, Copy, Debug)]
pub struct CityRecord {
    /// Display name.
    pub name: &'static str,
    /// Marker position.
    pub coordinate: LatLon,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_counts() {
        assert_eq!(COUNTRIES.len(), 6);
        assert_eq!(CITIES.len(), 12);
        // Per-frame marker work is O(markers); the sample set stays small.
        assert!(COUNTRIES.len() + CITIES.len() <= 20);
    }

    #[test]
    fn codes_unique() {
        for (i, a) in COUNTRIES.iter().enumerate() {
            for b in &COUNTRIES[i + 1..] {
                assert_ne!(a.code, b.code);
            }
        }
    }

    #[test]
    fn coordinates_in_range() {
        let all = COUNTRIES
            .iter()
            .map(|c| c.coordinate)
            .chain(CITIES.iter().map(|c| c.coordinate));
        for ll in all {
            assert!(ll.lat_deg.abs() <= 90.0, "lat {}", ll.lat_deg);
            assert!(ll.lon_deg.abs() <= 180.0, "lon {}", ll.lon_deg);
        }
    }

    #[test]
    fn shares_sum_near_hundred() {
        // Documented-but-unenforced invariant; this pins the shipped sample
        // so extensions get looked at.
        for c in COUNTRIES {
            for (label, shares) in [("nationalities", c.nationalities), ("languages", c.languages)]
            {
                let sum: u32 = shares.iter().map(|(_, p)| u32::from(*p)).sum();
                assert!(
                    (95..=105).contains(&sum),
                    "{} {label} sum to {sum}",
                    c.name
                );
            }
        }
    }

    #[test]
    fn no_empty_breakdowns() {
        for c in COUNTRIES {
            assert!(!c.nationalities.is_empty());
            assert!(!c.languages.is_empty());
        }
    }
}
