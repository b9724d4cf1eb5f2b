//! The embedded sample records.

use crate::{CityRecord, CountryRecord, LatLon};

/// Countries with nationality/language breakdowns, shown as clickable
/// markers.
pub const COUNTRIES: &[CountryRecord] = &[
    CountryRecord {
        name: "United States",
        code: "US",
        coordinate: LatLon { lat_deg: 37.0902, lon_deg: -95.7129 },
        nationalities: &[("American", 80), ("Hispanic", 10), ("Asian", 5), ("Other", 5)],
        languages: &[("English", 80), ("Spanish", 15), ("Other", 5)],
    },
    CountryRecord {
        name: "Russia",
        code: "RU",
        coordinate: LatLon { lat_deg: 61.5240, lon_deg: 105.3188 },
        nationalities: &[("Russian", 85), ("Tatar", 5), ("Ukrainian", 3), ("Other", 7)],
        languages: &[("Russian", 90), ("Tatar", 5), ("Other", 5)],
    },
    CountryRecord {
        name: "China",
        code: "CN",
        coordinate: LatLon { lat_deg: 35.8617, lon_deg: 104.1954 },
        nationalities: &[("Han Chinese", 90), ("Zhuang", 2), ("Hui", 1), ("Other", 7)],
        languages: &[("Mandarin", 85), ("Cantonese", 5), ("Other", 10)],
    },
    CountryRecord {
        name: "Brazil",
        code: "BR",
        coordinate: LatLon { lat_deg: -14.2350, lon_deg: -51.9253 },
        nationalities: &[("Brazilian", 85), ("Portuguese", 5), ("Italian", 3), ("Other", 7)],
        languages: &[("Portuguese", 95), ("Spanish", 3), ("Other", 2)],
    },
    CountryRecord {
        name: "Germany",
        code: "DE",
        coordinate: LatLon { lat_deg: 51.1657, lon_deg: 10.4515 },
        nationalities: &[("German", 85), ("Turkish", 5), ("Polish", 3), ("Other", 7)],
        languages: &[("German", 92), ("English", 5), ("Other", 3)],
    },
    CountryRecord {
        name: "Japan",
        code: "JP",
        coordinate: LatLon { lat_deg: 36.2048, lon_deg: 138.2529 },
        nationalities: &[("Japanese", 98), ("Other", 2)],
        languages: &[("Japanese", 99), ("Other", 1)],
    },
];

/// Major cities drawn as small hover-only markers for visual reference.
pub const CITIES: &[CityRecord] = &[
    CityRecord { name: "New York", coordinate: LatLon { lat_deg: 40.7128, lon_deg: -74.006 } },
    CityRecord { name: "Los Angeles", coordinate: LatLon { lat_deg: 34.0522, lon_deg: -118.2437 } },
    CityRecord { name: "London", coordinate: LatLon { lat_deg: 51.5074, lon_deg: -0.1278 } },
    CityRecord { name: "Paris", coordinate: LatLon { lat_deg: 48.8566, lon_deg: 2.3522 } },
    CityRecord { name: "Tokyo", coordinate: LatLon { lat_deg: 35.6762, lon_deg: 139.6503 } },
    CityRecord { name: "Beijing", coordinate: LatLon { lat_deg: 39.9042, lon_deg: 116.4074 } },
    CityRecord { name: "São Paulo", coordinate: LatLon { lat_deg: -23.5505, lon_deg: -46.6333 } },
    CityRecord { name: "Sydney", coordinate: LatLon { lat_deg: -33.8688, lon_deg: 151.2093 } },
    CityRecord { name: "Cairo", coordinate: LatLon { lat_deg: 30.0444, lon_deg: 31.2357 } },
    CityRecord { name: "Moscow", coordinate: LatLon { lat_deg: 55.7558, lon_deg: 37.6173 } },
    CityRecord { name: "Mumbai", coordinate: LatLon { lat_deg: 19.076, lon_deg: 72.8777 } },
    CityRecord { name: "Mexico City", coordinate: LatLon { lat_deg: 19.4326, lon_deg: -99.1332 } },
];
