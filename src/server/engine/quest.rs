//! Common free time and nearby places for a match's quests.
//!
//! Times are handled as minutes since midnight UTC of the quest date. Only the
//! 07:00 to 22:00 window is considered for dates.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::Deserialize;

/// Mean Earth radius used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;
/// First minute of the day a quest may start.
pub const WINDOW_START_MINUTE: i64 = 7 * 60;
/// Minute of the day by which a quest must end.
pub const WINDOW_END_MINUTE: i64 = 22 * 60;
/// Length of a quest slot.
pub const SLOT_MINUTES: i64 = 120;
/// Number of places suggested per generation.
pub const MAX_PLACES: usize = 3;
/// Combined distance up to which a place counts as close.
pub const NEAR_DISTANCE_KM: f64 = 5.0;
pub const NEAR_XP_REWARD: i32 = 5;
pub const FAR_XP_REWARD: i32 = 10;

const MINUTES_PER_DAY: i64 = 24 * 60;

/// A point on the globe in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Catalog entry loaded from the places file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Place {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Place {
    pub fn coordinates(&self) -> Coordinates {
        Coordinates {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

/// A place chosen for a match with its combined distance from both homes.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceSuggestion {
    pub place: Place,
    pub total_km: f64,
}

impl PlaceSuggestion {
    pub fn activity(&self) -> &'static str {
        activity_for(&self.place.kind)
    }

    pub fn xp_reward(&self) -> i32 {
        xp_reward(self.total_km)
    }
}

/// Great-circle distance in kilometres.
pub fn haversine_km(a: Coordinates, b: Coordinates) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let dlat = (b.latitude - a.latitude).to_radians();
    let dlon = (b.longitude - a.longitude).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}

/// Converts busy periods into minute intervals inside the quest window.
///
/// Periods are clamped to the date first and then to the window; periods that end
/// up empty are dropped.
///
/// # Arguments
/// - `periods` - `(start, end)` pairs of busy tasks
/// - `date` - Quest date, interpreted in UTC
///
/// # Returns
/// - `Vec<(i64, i64)>` - Busy minute intervals sorted by start
pub fn busy_minutes(periods: &[(DateTime<Utc>, DateTime<Utc>)], date: NaiveDate) -> Vec<(i64, i64)> {
    let midnight = date.and_time(chrono::NaiveTime::MIN).and_utc();

    let mut busy: Vec<(i64, i64)> = periods
        .iter()
        .filter_map(|(start, end)| {
            let start = (*start - midnight).num_minutes().clamp(0, MINUTES_PER_DAY);
            let end = (*end - midnight).num_minutes().clamp(0, MINUTES_PER_DAY);
            let start = start.clamp(WINDOW_START_MINUTE, WINDOW_END_MINUTE);
            let end = end.clamp(WINDOW_START_MINUTE, WINDOW_END_MINUTE);

            (end > start).then_some((start, end))
        })
        .collect();

    busy.sort_unstable();
    busy
}

/// Finds the first free slot of [`SLOT_MINUTES`] inside the window.
///
/// # Arguments
/// - `busy` - Busy minute intervals of both users, any order
///
/// # Returns
/// - `Some((start, end))` - The earliest free slot, `end = start + SLOT_MINUTES`
/// - `None` - No gap is long enough
pub fn find_common_slot(busy: &[(i64, i64)]) -> Option<(i64, i64)> {
    let mut busy = busy.to_vec();
    busy.sort_unstable();

    let mut cursor = WINDOW_START_MINUTE;
    for (start, end) in busy {
        if start - cursor >= SLOT_MINUTES {
            return Some((cursor, cursor + SLOT_MINUTES));
        }
        cursor = cursor.max(end);
    }

    (WINDOW_END_MINUTE - cursor >= SLOT_MINUTES).then_some((cursor, cursor + SLOT_MINUTES))
}

/// Formats minutes since midnight as `HH:MM`.
pub fn format_minutes(minutes: i64) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Converts minutes since midnight of `date` to an instant.
pub fn minute_to_instant(date: NaiveDate, minutes: i64) -> DateTime<Utc> {
    date.and_time(chrono::NaiveTime::MIN).and_utc() + Duration::minutes(minutes)
}

/// Picks the places closest to both homes.
///
/// # Arguments
/// - `places` - Place catalog
/// - `home1` - Home of the first participant
/// - `home2` - Home of the second participant
/// - `exclude` - Place names already used by the match
/// - `limit` - Maximum number of suggestions
///
/// # Returns
/// - `Vec<PlaceSuggestion>` - Suggestions by ascending combined distance
pub fn nearest_places(
    places: &[Place],
    home1: Coordinates,
    home2: Coordinates,
    exclude: &[String],
    limit: usize,
) -> Vec<PlaceSuggestion> {
    let mut suggestions: Vec<PlaceSuggestion> = places
        .iter()
        .filter(|place| !exclude.contains(&place.name))
        .map(|place| {
            let here = place.coordinates();
            PlaceSuggestion {
                place: place.clone(),
                total_km: haversine_km(home1, here) + haversine_km(home2, here),
            }
        })
        .collect();

    suggestions.sort_by(|a, b| a.total_km.total_cmp(&b.total_km));
    suggestions.truncate(limit);

    suggestions
}

/// Activity suggested for a place type.
pub fn activity_for(kind: &str) -> &'static str {
    match kind {
        "Cafe" => "Coffee date",
        "Dining" => "Dinner date",
        "Park" => "Walking date",
        "Shopping" => "Shopping date",
        "Cinema" => "Movie date",
        _ => "Hangout",
    }
}

/// XP reward for a combined distance.
pub fn xp_reward(total_km: f64) -> i32 {
    if total_km <= NEAR_DISTANCE_KM {
        NEAR_XP_REWARD
    } else {
        FAR_XP_REWARD
    }
}
