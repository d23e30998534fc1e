use serde::{Deserialize, Serialize};

use crate::RoomCandidate;

/// Standard envelope wrapped around every booking endpoint response.
///
/// `message` carries user-displayable text on failure; `data` is only
/// meaningful when `success` is true.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    // No serde(default) here: it would put a `T: Default` bound on the
    // derived Deserialize impl, and a missing Option field already
    // decodes as None.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

/// Payload of a successful availability check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailableRooms {
    pub available_rooms: Vec<RoomCandidate>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::dec;

    #[test]
    fn availability_payload_decodes_with_full_pricing() {
        let body = serde_json::json!({
            "success": true,
            "data": {
                "available_rooms": [{
                    "room_number": "101",
                    "room_type_name": "Deluxe",
                    "floor": 1,
                    "capacity": 2,
                    "amenities": ["wifi", "ac"],
                    "pricing": {
                        "total_price": 5000,
                        "price_per_night": 2500,
                        "base_price_per_night": 2500,
                        "nights": 2,
                        "extra_guest_charge": 0
                    }
                }]
            }
        });

        let envelope: ApiResponse<AvailableRooms> =
            serde_json::from_value(body).unwrap();
        assert!(envelope.success);

        let rooms = envelope.data.unwrap().available_rooms;
        assert_eq!(rooms.len(), 1);
        let room = &rooms[0];
        assert_eq!(room.room_number, "101");
        assert_eq!(room.capacity, 2);
        assert_eq!(
            room.amenities.as_deref(),
            Some(&["wifi".to_string(), "ac".to_string()][..])
        );
        let pricing = room.pricing.as_ref().unwrap();
        assert_eq!(pricing.total_price, dec!(5000));
        assert_eq!(pricing.nights, 2);
    }

    #[test]
    fn amenities_and_pricing_may_be_absent() {
        let body = serde_json::json!({
            "success": true,
            "data": {
                "available_rooms": [{
                    "room_number": "204",
                    "room_type_name": "Standard",
                    "floor": 2,
                    "capacity": 3
                }]
            }
        });

        let envelope: ApiResponse<AvailableRooms> =
            serde_json::from_value(body).unwrap();
        let rooms = envelope.data.unwrap().available_rooms;
        assert_eq!(rooms[0].amenities, None);
        assert_eq!(rooms[0].pricing, None);
    }

    #[test]
    fn failure_envelopes_decode_without_data() {
        let body = serde_json::json!({
            "success": false,
            "message": "No rooms match those dates"
        });

        let envelope: ApiResponse<AvailableRooms> =
            serde_json::from_value(body).unwrap();
        assert!(!envelope.success);
        assert_eq!(
            envelope.message.as_deref(),
            Some("No rooms match those dates")
        );
        assert_eq!(envelope.data, None);
    }
}
