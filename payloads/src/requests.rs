use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::BookingId;

/// Allow-listed editable booking fields. Every field is optional and
/// `None` fields are omitted from the wire payload, so the request
/// body stays `{ "booking_id": ..., <changed fields> }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookingPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guest_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guest_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guest_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_in: Option<Date>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_out: Option<Date>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guests: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
}

/// Body for `POST booking/update_booking.php`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateBooking {
    pub booking_id: BookingId,
    #[serde(flatten)]
    pub patch: BookingPatch,
}

/// Query string for `GET booking/check_availability.php`. Dates
/// serialize as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityQuery {
    pub check_in: Date,
    pub check_out: Date,
    pub guests: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;

    #[test]
    fn update_booking_flattens_the_patch_next_to_the_id() {
        let request = UpdateBooking {
            booking_id: BookingId::from("17"),
            patch: BookingPatch {
                guest_name: Some("Asha Rao".to_string()),
                guests: Some(2),
                ..Default::default()
            },
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "booking_id": "17",
                "guest_name": "Asha Rao",
                "guests": 2,
            })
        );
    }

    #[test]
    fn unset_patch_fields_are_omitted_entirely() {
        let request = UpdateBooking {
            booking_id: BookingId::from("3"),
            patch: BookingPatch::default(),
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json, serde_json::json!({ "booking_id": "3" }));
    }

    #[test]
    fn patch_dates_serialize_as_iso_days() {
        let patch = BookingPatch {
            check_in: Some(date(2024, 3, 1)),
            check_out: Some(date(2024, 3, 3)),
            ..Default::default()
        };

        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(json["check_in"], "2024-03-01");
        assert_eq!(json["check_out"], "2024-03-03");
    }

    #[test]
    fn availability_query_matches_the_endpoint_parameters() {
        let query = AvailabilityQuery {
            check_in: date(2024, 3, 1),
            check_out: date(2024, 3, 3),
            guests: 2,
        };

        let encoded = serde_urlencoded::to_string(query).unwrap();
        assert_eq!(
            encoded,
            "check_in=2024-03-01&check_out=2024-03-03&guests=2"
        );
    }
}
