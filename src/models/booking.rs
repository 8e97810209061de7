use serde::{Deserialize, Serialize};

use super::Ride;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookRideRequest {
    pub ride_id: i64,
    pub user_id: i64,
    pub seats: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CancelBookingRequest {
    pub booking_id: i64,
    pub user_id: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", from = "BookingRecord")]
pub struct Booking {
    pub id: String,
    pub ride_id: String,
    pub user_id: String,
    pub seats: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ride: Option<Ride>,
}

impl Booking {
    pub fn is_cancelled(&self) -> bool {
        self.status
            .as_deref()
            .map(|s| s.eq_ignore_ascii_case("cancelled"))
            .unwrap_or(false)
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BookingRecord {
    #[serde(default, deserialize_with = "super::identifier")]
    id: String,
    #[serde(default, deserialize_with = "super::identifier")]
    booking_id: String,
    #[serde(default, deserialize_with = "super::identifier")]
    ride_id: String,
    #[serde(default, deserialize_with = "super::identifier")]
    user_id: String,
    #[serde(default)]
    seats: Option<u32>,
    #[serde(default)]
    seats_booked: Option<u32>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    ride: Option<Ride>,
}

impl From<BookingRecord> for Booking {
    fn from(record: BookingRecord) -> Self {
        Self {
            id: super::first_present(record.id, record.booking_id),
            ride_id: record.ride_id,
            user_id: record.user_id,
            seats: record.seats.or(record.seats_booked).unwrap_or_default(),
            status: record.status,
            ride: record.ride,
        }
    }
}
