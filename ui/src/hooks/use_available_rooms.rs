use jiff::civil::Date;
use payloads::{RoomCandidate, requests};
use yew::prelude::*;

use crate::contexts::api::use_api;

/// State of the reactive availability query.
#[derive(Clone, PartialEq)]
pub struct AvailableRoomsHook {
    /// `None` until a query has completed at least once.
    pub rooms: Option<Vec<RoomCandidate>>,
    pub is_loading: bool,
    pub error: Option<String>,
}

/// True when every field of the criteria triple is present. Partial
/// criteria must not trigger a query.
pub fn criteria_complete(
    check_in: Option<Date>,
    check_out: Option<Date>,
    guests: u32,
) -> bool {
    check_in.is_some() && check_out.is_some() && guests > 0
}

/// Fetches available rooms whenever the criteria triple becomes
/// complete or changes. Incomplete criteria leave the previous result
/// set untouched. No debounce and no cancellation: if criteria change
/// while a request is outstanding, the last response to arrive wins.
#[hook]
pub fn use_available_rooms(
    check_in: Option<Date>,
    check_out: Option<Date>,
    guests: u32,
) -> AvailableRoomsHook {
    let api = use_api();
    let rooms = use_state(|| None::<Vec<RoomCandidate>>);
    let is_loading = use_state(|| false);
    let error = use_state(|| None::<String>);

    {
        let api = api.clone();
        let rooms = rooms.clone();
        let is_loading = is_loading.clone();
        let error = error.clone();

        use_effect_with((check_in, check_out, guests), move |deps| {
            let (check_in, check_out, guests) = *deps;
            if !criteria_complete(check_in, check_out, guests) {
                return;
            }
            let (Some(check_in), Some(check_out)) = (check_in, check_out)
            else {
                return;
            };

            yew::platform::spawn_local(async move {
                is_loading.set(true);
                error.set(None);

                let query = requests::AvailabilityQuery {
                    check_in,
                    check_out,
                    guests,
                };
                match api.check_availability(&query).await {
                    Ok(result) => {
                        rooms.set(Some(result));
                    }
                    Err(e) => {
                        tracing::error!("availability query failed: {e:?}");
                        error.set(Some(e.to_string()));
                    }
                }

                is_loading.set(false);
            });
        });
    }

    AvailableRoomsHook {
        rooms: (*rooms).clone(),
        is_loading: *is_loading,
        error: (*error).clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;

    #[test]
    fn all_three_fields_present_allows_a_query() {
        assert!(criteria_complete(
            Some(date(2024, 3, 1)),
            Some(date(2024, 3, 3)),
            2
        ));
    }

    #[test]
    fn any_missing_field_suppresses_the_query() {
        let check_in = Some(date(2024, 3, 1));
        let check_out = Some(date(2024, 3, 3));

        assert!(!criteria_complete(None, check_out, 2));
        assert!(!criteria_complete(check_in, None, 2));
        assert!(!criteria_complete(check_in, check_out, 0));
        assert!(!criteria_complete(None, None, 0));
    }
}
