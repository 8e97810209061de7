pub mod booking;
pub mod ride;
pub mod user;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::normalizer::coerce_identifier;

// Re-export all the models that are used in other modules
pub use booking::{BookRideRequest, Booking, CancelBookingRequest};
pub use ride::{PublishRideRequest, Ride};
pub use user::{RegisterRequest, User};

// Ids come back as numbers or strings depending on the endpoint.
fn identifier<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_identifier(&value))
}

fn first_present(primary: String, fallback: String) -> String {
    if primary.is_empty() {
        fallback
    } else {
        primary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn ride_ids_accept_numbers_and_strings() {
        let rides: Vec<Ride> = serde_json::from_value(json!([
            {"id": 4, "userId": 7, "source": "Pune", "destination": "Mumbai", "seats": 3, "fare": 250.0},
            {"rideId": "5", "userId": "8", "source": "Delhi", "destination": "Agra", "totalSeats": 2, "farePerSeat": 400, "availableSeats": 1}
        ]))
        .unwrap();

        assert_eq!(rides[0].id, "4");
        assert_eq!(rides[0].user_id, "7");
        assert_eq!(rides[0].seats_left(), 3);
        assert_eq!(rides[1].id, "5");
        assert_eq!(rides[1].fare, 400.0);
        assert_eq!(rides[1].seats_left(), 1);
    }

    #[test]
    fn publish_request_uses_camel_case() {
        let req = PublishRideRequest {
            user_id: 7,
            source: "Pune".into(),
            destination: "Mumbai".into(),
            seats: 3,
            fare: 250.0,
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"userId": 7, "source": "Pune", "destination": "Mumbai", "seats": 3, "fare": 250.0})
        );
    }

    #[test]
    fn booking_with_nested_ride() {
        let booking: Booking = serde_json::from_value(json!({
            "bookingId": 11,
            "rideId": 4,
            "userId": 7,
            "seatsBooked": 2,
            "status": "CANCELLED",
            "ride": {"id": 4, "source": "Pune", "destination": "Mumbai"}
        }))
        .unwrap();

        assert_eq!(booking.id, "11");
        assert_eq!(booking.seats, 2);
        assert!(booking.is_cancelled());
        assert_eq!(booking.ride.unwrap().destination, "Mumbai");
    }

    #[test]
    fn both_id_spellings_in_one_record() {
        let rides: Vec<Ride> = crate::normalizer::Payload::Json(json!([
            {"id": 4, "rideId": 4, "source": "Pune", "destination": "Mumbai", "seats": 3, "totalSeats": 3},
            {"id": "", "rideId": 6, "source": "Pune", "destination": "Nashik"}
        ]))
        .into_list()
        .unwrap();
        assert_eq!(rides[0].id, "4");
        assert_eq!(rides[0].seats, 3);
        assert_eq!(rides[1].id, "6");

        let bookings: Vec<Booking> = crate::normalizer::Payload::Json(json!([
            {"id": 11, "bookingId": 11, "rideId": 4, "seats": 1, "seatsBooked": 1}
        ]))
        .into_list()
        .unwrap();
        assert_eq!(bookings[0].id, "11");
        assert_eq!(bookings[0].ride_id, "4");
        assert_eq!(bookings[0].seats, 1);
    }

    #[test]
    fn user_id_is_rendered_as_string() {
        let user: User = serde_json::from_value(json!({"id": 17, "name": "A", "email": "a@b.com"})).unwrap();
        assert_eq!(user.id, "17");

        let unsaved: User = serde_json::from_value(json!({"name": "B", "email": "b@c.com"})).unwrap();
        assert_eq!(unsaved.id, "");
    }
}
