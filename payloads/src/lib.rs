use derive_more::Display;
use jiff::civil::Date;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub mod api_client;
pub mod requests;
pub mod responses;

pub use api_client::{APIClient, ClientError};

/// Opaque booking identifier assigned by the backend. Serializes as a
/// plain string; accepts either a JSON string or a JSON number on the
/// way in, since the backend is loose about which it returns.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Serialize)]
#[serde(transparent)]
pub struct BookingId(pub String);

impl<'de> Deserialize<'de> for BookingId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct IdVisitor;

        impl serde::de::Visitor<'_> for IdVisitor {
            type Value = BookingId;

            fn expecting(
                &self,
                formatter: &mut std::fmt::Formatter,
            ) -> std::fmt::Result {
                formatter.write_str("a string or integer booking id")
            }

            fn visit_str<E: serde::de::Error>(
                self,
                value: &str,
            ) -> Result<BookingId, E> {
                Ok(BookingId(value.to_string()))
            }

            fn visit_u64<E: serde::de::Error>(
                self,
                value: u64,
            ) -> Result<BookingId, E> {
                Ok(BookingId(value.to_string()))
            }

            fn visit_i64<E: serde::de::Error>(
                self,
                value: i64,
            ) -> Result<BookingId, E> {
                Ok(BookingId(value.to_string()))
            }
        }

        deserializer.deserialize_any(IdVisitor)
    }
}

impl BookingId {
    /// An empty or whitespace-only id means the record was never
    /// persisted; updates must not be attempted against it.
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<&str> for BookingId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// A booking record as stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: BookingId,
    pub guest_name: String,
    pub guest_email: String,
    #[serde(default)]
    pub guest_phone: Option<String>,
    pub check_in: Date,
    pub check_out: Date,
    pub guests: u32,
    /// Assigned room, if one has been allocated.
    #[serde(default)]
    pub room_number: Option<String>,
    #[serde(default)]
    pub special_requests: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// A room returned by the availability query, eligible for selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomCandidate {
    /// Unique key within a result set.
    pub room_number: String,
    pub room_type_name: String,
    pub floor: i32,
    pub capacity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amenities: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pricing: Option<RoomPricing>,
}

/// Price breakdown for a candidate room over the requested stay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomPricing {
    pub total_price: Decimal,
    pub price_per_night: Decimal,
    pub base_price_per_night: Decimal,
    pub nights: u32,
    pub extra_guest_charge: Decimal,
}

/// How to display money amounts in the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencySettings {
    pub symbol: String,
}

impl Default for CurrencySettings {
    fn default() -> Self {
        Self {
            symbol: "₹".to_string(),
        }
    }
}

impl CurrencySettings {
    /// Format an amount with Indian digit grouping: the last three
    /// digits form one group, every group above that has two digits
    /// (`12,34,567`). Trailing zero decimals are dropped rather than
    /// padded, so 5000 renders as `₹5,000` and 2500.5 as `₹2,500.5`.
    pub fn format_amount(&self, amount: Decimal) -> String {
        let normalized = amount.normalize();
        let text = normalized.abs().to_string();
        let (int_part, frac_part) = match text.split_once('.') {
            Some((int_part, frac_part)) => (int_part, Some(frac_part)),
            None => (text.as_str(), None),
        };

        let mut out = String::new();
        if normalized.is_sign_negative() {
            out.push('-');
        }
        out.push_str(&self.symbol);
        out.push_str(&group_indian(int_part));
        if let Some(frac) = frac_part {
            out.push('.');
            out.push_str(frac);
        }
        out
    }
}

/// Group a plain digit string 3-then-2s from the right.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::dec;

    fn rupees() -> CurrencySettings {
        CurrencySettings::default()
    }

    #[test]
    fn small_amounts_are_not_grouped() {
        assert_eq!(rupees().format_amount(dec!(0)), "₹0");
        assert_eq!(rupees().format_amount(dec!(999)), "₹999");
    }

    #[test]
    fn thousands_group_like_western_grouping() {
        assert_eq!(rupees().format_amount(dec!(1234)), "₹1,234");
        assert_eq!(rupees().format_amount(dec!(5000)), "₹5,000");
    }

    #[test]
    fn lakhs_and_crores_use_two_digit_groups() {
        assert_eq!(rupees().format_amount(dec!(100000)), "₹1,00,000");
        assert_eq!(rupees().format_amount(dec!(1234567)), "₹12,34,567");
        assert_eq!(rupees().format_amount(dec!(123456789)), "₹12,34,56,789");
    }

    #[test]
    fn trailing_zero_decimals_are_dropped() {
        assert_eq!(rupees().format_amount(dec!(2500.00)), "₹2,500");
        assert_eq!(rupees().format_amount(dec!(2500.50)), "₹2,500.5");
        assert_eq!(rupees().format_amount(dec!(1234567.89)), "₹12,34,567.89");
    }

    #[test]
    fn negative_amounts_carry_the_sign_before_the_symbol() {
        assert_eq!(rupees().format_amount(dec!(-1500)), "-₹1,500");
    }

    #[test]
    fn custom_symbol_is_respected() {
        let dollars = CurrencySettings {
            symbol: "$".to_string(),
        };
        assert_eq!(dollars.format_amount(dec!(12345)), "$12,345");
    }

    #[test]
    fn blank_booking_ids_count_as_missing() {
        assert!(BookingId::from("").is_empty());
        assert!(BookingId::from("   ").is_empty());
        assert!(!BookingId::from("42").is_empty());
    }

    #[test]
    fn booking_ids_decode_from_strings_and_numbers() {
        let id: BookingId = serde_json::from_str("\"17\"").unwrap();
        assert_eq!(id, BookingId::from("17"));

        let id: BookingId = serde_json::from_str("42").unwrap();
        assert_eq!(id, BookingId::from("42"));

        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"42\"");
    }

    #[test]
    fn updated_booking_envelopes_decode_with_numeric_ids() {
        // The PHP backend returns booking ids as bare numbers in the
        // updated record; the envelope also omits `message` on success.
        let body = serde_json::json!({
            "success": true,
            "data": {
                "id": 42,
                "guest_name": "Asha Rao",
                "guest_email": "asha@example.com",
                "check_in": "2024-03-01",
                "check_out": "2024-03-03",
                "guests": 2
            }
        });

        let envelope: crate::responses::ApiResponse<Booking> =
            serde_json::from_value(body).unwrap();
        assert!(envelope.success);
        assert_eq!(envelope.message, None);

        let booking = envelope.data.unwrap();
        assert_eq!(booking.id, BookingId::from("42"));
        assert_eq!(booking.guests, 2);
        assert_eq!(booking.room_number, None);
    }
}
