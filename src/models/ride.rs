use serde::{Deserialize, Serialize};

/// Body of `POST /rides/publish`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PublishRideRequest {
    pub user_id: i64,
    pub source: String,
    pub destination: String,
    pub seats: u32,
    pub fare: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", from = "RideRecord")]
pub struct Ride {
    pub id: String,
    pub user_id: String,
    pub source: String,
    pub destination: String,
    pub seats: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_seats: Option<u32>,
    pub fare: f64,
}

impl Ride {
    pub fn seats_left(&self) -> u32 {
        self.available_seats.unwrap_or(self.seats)
    }
}

// Wire shape. Older backends name fields differently and some send both
// spellings in the same object.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RideRecord {
    #[serde(default, deserialize_with = "super::identifier")]
    id: String,
    #[serde(default, deserialize_with = "super::identifier")]
    ride_id: String,
    #[serde(default, deserialize_with = "super::identifier")]
    user_id: String,
    source: String,
    destination: String,
    #[serde(default)]
    seats: Option<u32>,
    #[serde(default)]
    total_seats: Option<u32>,
    #[serde(default)]
    available_seats: Option<u32>,
    #[serde(default)]
    fare: Option<f64>,
    #[serde(default)]
    fare_per_seat: Option<f64>,
}

impl From<RideRecord> for Ride {
    fn from(record: RideRecord) -> Self {
        Self {
            id: super::first_present(record.id, record.ride_id),
            user_id: record.user_id,
            source: record.source,
            destination: record.destination,
            seats: record.seats.or(record.total_seats).unwrap_or_default(),
            available_seats: record.available_seats,
            fare: record.fare.or(record.fare_per_seat).unwrap_or_default(),
        }
    }
}
