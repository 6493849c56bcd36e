//! Deterministic distance/duration estimates for when the mapping upstream is
//! unavailable, unauthenticated, or returns an invalid payload.
//!
//! Resolution is three-tiered: curated route data first, the reversed pair
//! second (routes are symmetric), and a crude planar estimate last. The last
//! tier substitutes default coordinates for unrecognized names, so this module
//! has no failure mode at all. By the time it runs, the caller's real upstream
//! request has already failed and something must be returned.

use crate::constants::{DEGREE_METERS, FALLBACK_SPEED_MPS};
use crate::models::matrix::{
    DistanceMatrixResponse, FormattedEstimate, MatrixElement, MatrixRow, ValueText, STATUS_OK,
};
use crate::models::Coordinates;

struct KnownCity {
    key: &'static str,
    coords: Coordinates,
}

const KNOWN_CITIES: &[KnownCity] = &[
    KnownCity {
        key: "tokyo",
        coords: Coordinates {
            lat: 35.6762,
            lng: 139.6503,
        },
    },
    KnownCity {
        key: "osaka",
        coords: Coordinates {
            lat: 34.6937,
            lng: 135.5023,
        },
    },
    KnownCity {
        key: "kyoto",
        coords: Coordinates {
            lat: 35.0116,
            lng: 135.7681,
        },
    },
    KnownCity {
        key: "sapporo",
        coords: Coordinates {
            lat: 43.0618,
            lng: 141.3545,
        },
    },
    KnownCity {
        key: "fukuoka",
        coords: Coordinates {
            lat: 33.5904,
            lng: 130.4017,
        },
    },
    KnownCity {
        key: "naha",
        coords: Coordinates {
            lat: 26.2124,
            lng: 127.6809,
        },
    },
    KnownCity {
        key: "nagoya",
        coords: Coordinates {
            lat: 35.1815,
            lng: 136.9066,
        },
    },
    KnownCity {
        key: "hiroshima",
        coords: Coordinates {
            lat: 34.3853,
            lng: 132.4553,
        },
    },
    KnownCity {
        key: "sendai",
        coords: Coordinates {
            lat: 38.2682,
            lng: 140.8694,
        },
    },
    KnownCity {
        key: "kanazawa",
        coords: Coordinates {
            lat: 36.5613,
            lng: 136.6562,
        },
    },
];

/// Recognition rules, one per known city, checked in this exact order.
/// Order matters: "東京都" contains both "東京" (Tokyo) and "京都" (Kyoto);
/// with tokyo checked first it resolves correctly. Reordering these rules
/// changes behavior for such inputs.
const CITY_RULES: &[(&str, &[&str])] = &[
    ("tokyo", &["tokyo", "東京", "とうきょう"]),
    ("osaka", &["osaka", "大阪", "おおさか"]),
    ("kyoto", &["kyoto", "京都", "きょうと"]),
    ("sapporo", &["sapporo", "札幌", "さっぽろ"]),
    ("fukuoka", &["fukuoka", "hakata", "福岡", "博多"]),
    ("naha", &["naha", "okinawa", "那覇", "沖縄"]),
    ("nagoya", &["nagoya", "名古屋"]),
    ("hiroshima", &["hiroshima", "広島"]),
    ("sendai", &["sendai", "仙台"]),
    ("kanazawa", &["kanazawa", "金沢"]),
];

/// Substitute coordinates when a name misses the city table entirely:
/// Tokyo for the origin side, Osaka for the destination side.
const DEFAULT_ORIGIN_COORDS: Coordinates = Coordinates {
    lat: 35.6762,
    lng: 139.6503,
};
const DEFAULT_DESTINATION_COORDS: Coordinates = Coordinates {
    lat: 34.6937,
    lng: 135.5023,
};

struct KnownRoute {
    from: &'static str,
    to: &'static str,
    distance_m: u64,
    duration_s: u64,
}

/// Curated city-pair figures, roughly matching express-rail timetables
/// (flight figures for Sapporo/Naha). Looked up in both orders.
const KNOWN_ROUTES: &[KnownRoute] = &[
    KnownRoute {
        from: "tokyo",
        to: "osaka",
        distance_m: 503_000,
        duration_s: 9_000,
    },
    KnownRoute {
        from: "osaka",
        to: "kyoto",
        distance_m: 56_000,
        duration_s: 1_800,
    },
    KnownRoute {
        from: "tokyo",
        to: "kyoto",
        distance_m: 476_000,
        duration_s: 8_100,
    },
    KnownRoute {
        from: "tokyo",
        to: "nagoya",
        distance_m: 350_000,
        duration_s: 6_000,
    },
    KnownRoute {
        from: "nagoya",
        to: "osaka",
        distance_m: 186_000,
        duration_s: 3_600,
    },
    KnownRoute {
        from: "tokyo",
        to: "sendai",
        distance_m: 352_000,
        duration_s: 5_400,
    },
    KnownRoute {
        from: "tokyo",
        to: "kanazawa",
        distance_m: 450_000,
        duration_s: 9_000,
    },
    KnownRoute {
        from: "tokyo",
        to: "hiroshima",
        distance_m: 821_000,
        duration_s: 14_400,
    },
    KnownRoute {
        from: "osaka",
        to: "hiroshima",
        distance_m: 330_000,
        duration_s: 5_400,
    },
    KnownRoute {
        from: "hiroshima",
        to: "fukuoka",
        distance_m: 281_000,
        duration_s: 4_500,
    },
    KnownRoute {
        from: "osaka",
        to: "fukuoka",
        distance_m: 612_000,
        duration_s: 9_900,
    },
    KnownRoute {
        from: "tokyo",
        to: "sapporo",
        distance_m: 831_000,
        duration_s: 28_800,
    },
    KnownRoute {
        from: "tokyo",
        to: "fukuoka",
        distance_m: 1_069_000,
        duration_s: 18_000,
    },
    KnownRoute {
        from: "tokyo",
        to: "naha",
        distance_m: 1_554_000,
        duration_s: 10_800,
    },
];

/// Map a free-text place name to a canonical city key.
///
/// Lowercases, strips whitespace, then checks each recognition rule in order;
/// the first rule whose romanized name or Japanese-script synonym occurs as a
/// substring wins. Unmatched input comes back normalized but otherwise
/// unchanged (it will miss every table below and land on the default
/// coordinates). This function never fails.
pub fn normalize_place(name: &str) -> String {
    let cleaned: String = name
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    for (canonical, synonyms) in CITY_RULES {
        if synonyms.iter().any(|synonym| cleaned.contains(synonym)) {
            return (*canonical).to_string();
        }
    }

    cleaned
}

fn city_coords(key: &str) -> Option<Coordinates> {
    KNOWN_CITIES
        .iter()
        .find(|city| city.key == key)
        .map(|city| city.coords)
}

fn known_route(from: &str, to: &str) -> Option<(u64, u64)> {
    KNOWN_ROUTES
        .iter()
        .find(|route| route.from == from && route.to == to)
        .map(|route| (route.distance_m, route.duration_s))
}

/// Resolve `(distance_m, duration_s)` for a pair of place names.
///
/// Tiers, first match wins:
/// 1. curated pair lookup,
/// 2. reversed curated pair (routes are symmetric),
/// 3. planar estimate from city coordinates, with Tokyo standing in for an
///    unknown origin and Osaka for an unknown destination.
pub fn resolve(origin: &str, destination: &str) -> (u64, u64) {
    let from = normalize_place(origin);
    let to = normalize_place(destination);

    if let Some(found) = known_route(&from, &to) {
        return found;
    }
    if let Some(found) = known_route(&to, &from) {
        return found;
    }

    let from_coords = city_coords(&from).unwrap_or(DEFAULT_ORIGIN_COORDS);
    let to_coords = city_coords(&to).unwrap_or(DEFAULT_DESTINATION_COORDS);

    // Planar approximation on purpose: one degree ~ 111 km, no great-circle
    // math. This tier only exists to return a placeholder once curated data
    // has missed.
    let delta_lat = from_coords.lat - to_coords.lat;
    let delta_lng = from_coords.lng - to_coords.lng;
    let distance_m = ((delta_lat * delta_lat + delta_lng * delta_lng).sqrt() * DEGREE_METERS)
        .round() as u64;
    let duration_s = (distance_m as f64 / FALLBACK_SPEED_MPS).round() as u64;

    (distance_m, duration_s)
}

/// `999` -> `"999 m"`, `503000` -> `"503.0 km"`.
pub fn format_distance(meters: u64) -> String {
    if meters < 1_000 {
        format!("{} m", meters)
    } else {
        format!("{:.1} km", meters as f64 / 1_000.0)
    }
}

/// `3599` -> `"59分"`, `9000` -> `"2時間30分"`. The Japanese suffixes are a
/// fixed presentation choice matching the rest of the fallback payload.
pub fn format_duration(seconds: u64) -> String {
    let hours = seconds / 3_600;
    let minutes = (seconds % 3_600) / 60;
    if hours > 0 {
        format!("{}時間{}分", hours, minutes)
    } else {
        format!("{}分", minutes)
    }
}

/// Produce the full upstream-shaped payload for an origin/destination pair.
///
/// Pure and total: any inputs yield a `status: "OK"` response.
pub fn estimate(origin: &str, destination: &str) -> DistanceMatrixResponse {
    let (distance_m, duration_s) = resolve(origin, destination);
    let distance_text = format_distance(distance_m);
    let duration_text = format_duration(duration_s);

    DistanceMatrixResponse {
        destination_addresses: vec![destination.to_string()],
        origin_addresses: vec![origin.to_string()],
        rows: vec![MatrixRow {
            elements: vec![MatrixElement {
                distance: ValueText {
                    text: distance_text.clone(),
                    value: distance_m,
                },
                duration: ValueText {
                    text: duration_text.clone(),
                    value: duration_s,
                },
                status: STATUS_OK.to_string(),
            }],
        }],
        status: STATUS_OK.to_string(),
        origin_name: Some(origin.to_string()),
        destination_name: Some(destination.to_string()),
        formatted: Some(FormattedEstimate {
            distance: distance_text,
            duration: duration_text,
            status: STATUS_OK.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_romanized_and_japanese() {
        assert_eq!(normalize_place("Tokyo"), "tokyo");
        assert_eq!(normalize_place("東京"), "tokyo");
        assert_eq!(normalize_place("大阪"), "osaka");
        assert_eq!(normalize_place("  Kyoto  Station "), "kyoto");
        assert_eq!(normalize_place("Okinawa"), "naha");
        assert_eq!(normalize_place("沖縄"), "naha");
        assert_eq!(normalize_place("博多"), "fukuoka");
    }

    #[test]
    fn normalize_passes_unknown_through() {
        assert_eq!(normalize_place("Paris"), "paris");
        assert_eq!(normalize_place("New York"), "newyork");
    }

    #[test]
    fn normalize_is_idempotent_for_all_synonyms() {
        for (_, synonyms) in CITY_RULES {
            for synonym in *synonyms {
                let once = normalize_place(synonym);
                assert_eq!(normalize_place(&once), once, "synonym {:?}", synonym);
            }
        }
    }

    #[test]
    fn normalize_rule_order_is_significant() {
        // "東京都" (Tokyo Metropolis) contains both 東京 and 京都. The tokyo
        // rule runs first, so it resolves to tokyo; checking kyoto earlier
        // would misclassify it. Same shadowing for romanized "tokyoto".
        assert_eq!(normalize_place("東京都"), "tokyo");
        assert_eq!(normalize_place("tokyoto"), "tokyo");
    }

    #[test]
    fn resolve_known_pair_verbatim() {
        assert_eq!(resolve("tokyo", "osaka"), (503_000, 9_000));
        assert_eq!(resolve("osaka", "kyoto"), (56_000, 1_800));
    }

    #[test]
    fn resolve_is_symmetric_for_every_curated_pair() {
        for route in KNOWN_ROUTES {
            let forward = resolve(route.from, route.to);
            let reverse = resolve(route.to, route.from);
            assert_eq!(forward, reverse, "{}-{}", route.from, route.to);
            assert_eq!(forward, (route.distance_m, route.duration_s));
        }
    }

    #[test]
    fn resolve_japanese_input() {
        assert_eq!(resolve("大阪", "京都"), (56_000, 1_800));
    }

    #[test]
    fn resolve_geometric_tier_for_uncurated_city_pair() {
        // Both cities are known but no curated pair exists, so the planar
        // estimate runs: sqrt(dlat^2 + dlng^2) * 111km.
        let (distance_m, duration_s) = resolve("sendai", "kanazawa");
        let expected = (((38.2682f64 - 36.5613).powi(2) + (140.8694f64 - 136.6562).powi(2))
            .sqrt()
            * 111_000.0)
            .round() as u64;
        assert_eq!(distance_m, expected);
        assert_eq!(duration_s, (expected as f64 / 55.5).round() as u64);
    }

    #[test]
    fn resolve_unknown_names_fall_back_to_default_coordinates() {
        // Tokyo stands in for the origin, Osaka for the destination, so two
        // unknown names produce the tokyo-osaka planar figure.
        let unknown = resolve("Unknown Place", "Another Unknown");
        let defaults = resolve("somewhere", "elsewhere");
        assert_eq!(unknown, defaults);
        assert!(unknown.0 > 0);
        assert!((400_000..=550_000).contains(&unknown.0));
    }

    #[test]
    fn format_distance_boundaries() {
        assert_eq!(format_distance(999), "999 m");
        assert_eq!(format_distance(1_000), "1.0 km");
        assert_eq!(format_distance(503_000), "503.0 km");
        assert_eq!(format_distance(56_000), "56.0 km");
    }

    #[test]
    fn format_duration_boundaries() {
        assert_eq!(format_duration(3_599), "59分");
        assert_eq!(format_duration(3_600), "1時間0分");
        assert_eq!(format_duration(9_000), "2時間30分");
        assert_eq!(format_duration(0), "0分");
    }

    #[test]
    fn estimate_tokyo_osaka_scenario() {
        let response = estimate("tokyo", "osaka");

        assert_eq!(response.status, STATUS_OK);
        let element = response.primary_element().unwrap();
        assert_eq!(element.distance.value, 503_000);
        assert_eq!(element.duration.value, 9_000);

        let formatted = response.formatted.unwrap();
        assert_eq!(formatted.distance, "503.0 km");
        assert_eq!(formatted.duration, "2時間30分");
        assert_eq!(formatted.status, STATUS_OK);
    }

    #[test]
    fn estimate_mirrors_upstream_shape() {
        let response = estimate("大阪", "京都");

        assert_eq!(response.origin_addresses, vec!["大阪".to_string()]);
        assert_eq!(response.destination_addresses, vec!["京都".to_string()]);
        assert_eq!(response.rows.len(), 1);
        assert_eq!(response.rows[0].elements.len(), 1);
        assert_eq!(response.rows[0].elements[0].distance.value, 56_000);
        assert_eq!(response.formatted.unwrap().distance, "56.0 km");
    }

    #[test]
    fn estimate_never_fails() {
        for (origin, destination) in [
            ("", ""),
            ("???", "!!!"),
            ("Unknown Place", "Another Unknown"),
            ("東京", "Unknown Place"),
        ] {
            let response = estimate(origin, destination);
            assert_eq!(response.status, STATUS_OK);
            let element = response.primary_element().unwrap();
            assert_eq!(element.status, STATUS_OK);
            // u64 values are non-negative by construction; assert the pair is
            // internally consistent instead.
            assert_eq!(
                element.duration.value,
                (element.distance.value as f64 / 55.5).round() as u64
            );
        }
    }
}
