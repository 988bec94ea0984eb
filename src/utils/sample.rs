//! Random sample data for exercising upload endpoints against a test account.
//!
//! Mirrors what a fresh device would sync: a batch of contacts, a call log
//! and a location fix.

use crate::model::contact::{Call, CallType, NewContact};
use chrono::{Duration, Utc};
use rand::prelude::*;
use rand::rng;

const SAMPLE_NAMES: &[&str] = &[
    "Chandler", "Monica", "Rachel", "Phoebe", "Ross", "Joey", "Gunther", "Janice",
];

fn random_phone(rng: &mut impl Rng) -> u64 {
    rng.random_range(972_500_000_000u64..972_599_999_999u64)
}

fn random_called_at(rng: &mut impl Rng) -> String {
    let offset = Duration::minutes(rng.random_range(0..60 * 24 * 365));
    (Utc::now() - offset).format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

/// Generates `count` plausible contacts for `/main/contacts/sync/`.
pub fn sample_contacts(count: usize) -> Vec<NewContact> {
    let mut rng = rng();
    (0..count)
        .map(|_| NewContact {
            name: SAMPLE_NAMES.choose(&mut rng).unwrap_or(&"Contact").to_string(),
            phone_number: random_phone(&mut rng),
            country_code: Some("IL".to_string()),
            date_of_birth: None,
        })
        .collect()
}

/// Generates `count` plausible call-log entries for `/main/call-log/change-sync/`.
pub fn sample_calls(count: usize) -> Vec<Call> {
    let mut rng = rng();
    let types = [CallType::Incoming, CallType::Outgoing, CallType::Missed];
    (0..count)
        .map(|_| Call {
            name: SAMPLE_NAMES.choose(&mut rng).unwrap_or(&"Caller").to_string(),
            phone_number: random_phone(&mut rng),
            call_type: *types.choose(&mut rng).unwrap_or(&CallType::Incoming),
            called_at: random_called_at(&mut rng),
            duration: rng.random_range(0..600),
            tag: None,
        })
        .collect()
}

/// Generates a random location fix for `/main/location/update/`.
pub fn sample_location() -> (f64, f64) {
    let mut rng = rng();
    (
        rng.random_range(29.0..33.5),
        rng.random_range(34.0..36.0),
    )
}
