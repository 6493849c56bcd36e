//! Deterministic mock flight offers for when the flight-search upstream is
//! unavailable or unauthenticated.
//!
//! Durations come from great-circle airport distances at a fixed cruise model
//! and fares from a per-kilometer rate, with a seeded spread so identical
//! queries always produce identical schedules and prices.

use crate::constants::{
    MOCK_CRUISE_SPEED_KMH, MOCK_FLIGHT_OVERHEAD_MINUTES, MOCK_PRICE_BASE_JPY,
    MOCK_PRICE_PER_KM_JPY,
};
use crate::fallback::distance::normalize_place;
use crate::models::{Coordinates, FlightOffer};
use rand::{rngs::StdRng, RngExt, SeedableRng};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use time::Date;
use uuid::Uuid;

pub struct MockAirport {
    pub city: &'static str,
    pub iata: &'static str,
    pub name: &'static str,
    coords: Coordinates,
}

/// Primary airport per known city. Kyoto has no airport of its own and is
/// served through Osaka Itami, as the real booking flows do.
const AIRPORTS: &[MockAirport] = &[
    MockAirport {
        city: "tokyo",
        iata: "HND",
        name: "Tokyo Haneda",
        coords: Coordinates {
            lat: 35.5494,
            lng: 139.7798,
        },
    },
    MockAirport {
        city: "osaka",
        iata: "ITM",
        name: "Osaka Itami",
        coords: Coordinates {
            lat: 34.7855,
            lng: 135.4382,
        },
    },
    MockAirport {
        city: "kyoto",
        iata: "ITM",
        name: "Osaka Itami",
        coords: Coordinates {
            lat: 34.7855,
            lng: 135.4382,
        },
    },
    MockAirport {
        city: "sapporo",
        iata: "CTS",
        name: "New Chitose",
        coords: Coordinates {
            lat: 42.7752,
            lng: 141.6923,
        },
    },
    MockAirport {
        city: "fukuoka",
        iata: "FUK",
        name: "Fukuoka",
        coords: Coordinates {
            lat: 33.5859,
            lng: 130.4508,
        },
    },
    MockAirport {
        city: "naha",
        iata: "OKA",
        name: "Naha",
        coords: Coordinates {
            lat: 26.1958,
            lng: 127.6459,
        },
    },
    MockAirport {
        city: "nagoya",
        iata: "NGO",
        name: "Chubu Centrair",
        coords: Coordinates {
            lat: 34.8584,
            lng: 136.8049,
        },
    },
    MockAirport {
        city: "hiroshima",
        iata: "HIJ",
        name: "Hiroshima",
        coords: Coordinates {
            lat: 34.4361,
            lng: 132.9195,
        },
    },
    MockAirport {
        city: "sendai",
        iata: "SDJ",
        name: "Sendai",
        coords: Coordinates {
            lat: 38.1397,
            lng: 140.9170,
        },
    },
    MockAirport {
        city: "kanazawa",
        iata: "KMQ",
        name: "Komatsu",
        coords: Coordinates {
            lat: 36.3946,
            lng: 136.4075,
        },
    },
];

const CARRIERS: &[(&str, &str)] = &[
    ("NH", "All Nippon Airways"),
    ("JL", "Japan Airlines"),
    ("GK", "Jetstar Japan"),
    ("MM", "Peach Aviation"),
];

/// Fixed departure slots across the day; offer `i` takes slot `i`.
const DEPARTURE_SLOTS: &[(u8, u8)] = &[(8, 0), (11, 30), (15, 0), (18, 30)];

/// Look up the airport serving a free-text place name, via the shared city
/// normalizer so Japanese-script input works.
pub fn airport_for(place: &str) -> Option<&'static MockAirport> {
    let key = normalize_place(place);
    AIRPORTS.iter().find(|airport| airport.city == key)
}

fn origin_airport(place: &str) -> &'static MockAirport {
    airport_for(place).unwrap_or(&AIRPORTS[0]) // Tokyo Haneda
}

fn destination_airport(place: &str) -> &'static MockAirport {
    airport_for(place).unwrap_or(&AIRPORTS[1]) // Osaka Itami
}

fn route_seed(origin_iata: &str, destination_iata: &str, date: Date) -> u64 {
    let mut hasher = DefaultHasher::new();
    origin_iata.hash(&mut hasher);
    destination_iata.hash(&mut hasher);
    date.to_julian_day().hash(&mut hasher);
    hasher.finish()
}

fn format_local(date: Date, hour: u8, minute: u8) -> String {
    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:00",
        date.year(),
        u8::from(date.month()),
        date.day(),
        hour,
        minute
    )
}

/// Generate 2-4 offers for a route and date. Unknown cities degrade to the
/// Tokyo/Osaka default airports; this function never fails. Offer ids are
/// fresh per call, everything else is reproducible for the same query.
pub fn generate_offers(origin: &str, destination: &str, date: Date) -> Vec<FlightOffer> {
    let from = origin_airport(origin);
    let to = destination_airport(destination);

    let distance_km = from.coords.distance_to(&to.coords);
    let duration_minutes =
        MOCK_FLIGHT_OVERHEAD_MINUTES + (distance_km / MOCK_CRUISE_SPEED_KMH * 60.0).round() as u64;

    let seed = route_seed(from.iata, to.iata, date);
    let mut rng = StdRng::seed_from_u64(seed);
    let offer_count = 2 + (seed % 3) as usize;

    (0..offer_count)
        .map(|i| {
            let (dep_hour, dep_minute) = DEPARTURE_SLOTS[i];
            let dep_total = u64::from(dep_hour) * 60 + u64::from(dep_minute);
            let arr_total = (dep_total + duration_minutes) % (24 * 60);

            let (carrier_code, carrier_name) = CARRIERS[rng.random_range(0..CARRIERS.len())];
            let fare = MOCK_PRICE_BASE_JPY + distance_km * MOCK_PRICE_PER_KM_JPY;
            let price = ((fare * rng.random_range(0.85..1.15)) / 10.0).round() as u64 * 10;

            FlightOffer {
                id: Uuid::new_v4(),
                origin: from.iata.to_string(),
                destination: to.iata.to_string(),
                carrier: carrier_name.to_string(),
                flight_number: format!("{}{}", carrier_code, 100 + rng.random_range(0..800)),
                departure_at: format_local(date, dep_hour, dep_minute),
                arrival_at: format_local(date, (arr_total / 60) as u8, (arr_total % 60) as u8),
                duration_minutes,
                price,
                currency: "JPY".to_string(),
                seats_available: rng.random_range(2..9),
            }
        })
        .collect()
}
