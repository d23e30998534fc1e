use reqwest::StatusCode;
use serde::Serialize;

use crate::{
    Booking, RoomCandidate,
    requests,
    responses::{ApiResponse, AvailableRooms},
};

type ReqwestResult = Result<reqwest::Response, reqwest::Error>;

/// Fallback text for failures that carry no server-provided message.
pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

/// An API client for interfacing with the booking backend.
///
/// The base address is injected at construction; callers hold the
/// client rather than reading configuration from ambient state.
pub struct APIClient {
    pub address: String,
    pub inner_client: reqwest::Client,
}

/// Helper methods for http actions
impl APIClient {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            inner_client: reqwest::Client::new(),
        }
    }

    fn format_url(&self, path: &str) -> String {
        format!("{}/booking/{path}", self.address.trim_end_matches('/'))
    }

    async fn post(&self, path: &str, body: &impl Serialize) -> ReqwestResult {
        let request = self.inner_client.post(self.format_url(path)).json(body);

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }

    async fn get(&self, path: &str, query: &impl Serialize) -> ReqwestResult {
        let request =
            self.inner_client.get(self.format_url(path)).query(query);

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }
}

/// Methods on the booking API
impl APIClient {
    /// Submit a replacement payload for an existing booking. Returns
    /// the updated record as stored by the backend.
    pub async fn update_booking(
        &self,
        details: &requests::UpdateBooking,
    ) -> Result<Booking, ClientError> {
        let response = self.post("update_booking.php", details).await?;
        ok_envelope(response).await
    }

    /// Fetch the rooms available for the given stay dates and guest
    /// count.
    pub async fn check_availability(
        &self,
        query: &requests::AvailabilityQuery,
    ) -> Result<Vec<RoomCandidate>, ClientError> {
        let response = self.get("check_availability.php", query).await?;
        let rooms: AvailableRooms = ok_envelope(response).await?;
        Ok(rooms.available_rooms)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The backend answered `success: false`; displays the server
    /// message when one was provided.
    #[error("{0}")]
    Api(String),
    /// Unexpected HTTP status.
    #[error("{}", GENERIC_FAILURE)]
    Http(StatusCode),
    /// Transport or JSON decode failure. Shown to users with the same
    /// generic text as any other unexplained failure.
    #[error("{}", GENERIC_FAILURE)]
    Network(#[from] reqwest::Error),
    /// `success: true` but no `data` field in the envelope.
    #[error("{}", GENERIC_FAILURE)]
    MalformedResponse,
}

/// Decode the standard envelope out of a response, mapping
/// `success: false` and a missing `data` field to errors.
pub async fn ok_envelope<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::Http(response.status()));
    }
    let envelope = response.json::<ApiResponse<T>>().await?;
    envelope_result(envelope)
}

/// Envelope-to-result mapping, split out from the transport so it can
/// be exercised directly.
pub fn envelope_result<T>(
    envelope: ApiResponse<T>,
) -> Result<T, ClientError> {
    if !envelope.success {
        return Err(ClientError::Api(
            envelope
                .message
                .unwrap_or_else(|| GENERIC_FAILURE.to_string()),
        ));
    }
    envelope.data.ok_or(ClientError::MalformedResponse)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn envelope(
        success: bool,
        message: Option<&str>,
        data: Option<u32>,
    ) -> ApiResponse<u32> {
        ApiResponse {
            success,
            message: message.map(str::to_string),
            data,
        }
    }

    #[test]
    fn successful_envelopes_yield_their_data() {
        let result = envelope_result(envelope(true, None, Some(7)));
        assert_eq!(result.unwrap(), 7);
    }

    #[test]
    fn failure_envelopes_surface_the_server_message() {
        let result =
            envelope_result(envelope(false, Some("Room already booked"), None));
        let error = result.unwrap_err();
        assert!(matches!(error, ClientError::Api(_)));
        assert_eq!(error.to_string(), "Room already booked");
    }

    #[test]
    fn failure_envelopes_without_a_message_fall_back_to_generic_text() {
        let result = envelope_result(envelope(false, None, None));
        assert_eq!(result.unwrap_err().to_string(), GENERIC_FAILURE);
    }

    #[test]
    fn success_without_data_is_malformed() {
        let result = envelope_result(envelope(true, None, None));
        assert!(matches!(
            result.unwrap_err(),
            ClientError::MalformedResponse
        ));
    }

    #[test]
    fn urls_join_cleanly_regardless_of_trailing_slash() {
        let client = APIClient::new("https://hotel.example.com/");
        assert_eq!(
            client.format_url("check_availability.php"),
            "https://hotel.example.com/booking/check_availability.php"
        );

        let client = APIClient::new("https://hotel.example.com");
        assert_eq!(
            client.format_url("update_booking.php"),
            "https://hotel.example.com/booking/update_booking.php"
        );
    }
}
