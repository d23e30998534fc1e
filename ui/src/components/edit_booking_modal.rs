use jiff::civil::Date;
use payloads::{Booking, requests};
use yew::prelude::*;

use crate::components::Modal;
use crate::contexts::api::use_api;
use crate::contexts::notifications::use_notifications;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Visibility toggle; the component stays mounted either way.
    pub is_open: bool,
    pub booking: Booking,
    pub on_close: Callback<()>,
    /// Receives the updated record the backend returned.
    #[prop_or_default]
    pub on_success: Callback<Booking>,
}

/// A save may start only when no save is already in flight. The
/// submit button's disabled attribute is one render behind the state
/// it reflects, so the handler has to refuse re-entry itself.
fn save_may_start(is_saving: bool) -> bool {
    !is_saving
}

/// Check-out must fall strictly after check-in.
fn stay_dates_valid(check_in: Option<Date>, check_out: Option<Date>) -> bool {
    match (check_in, check_out) {
        (Some(check_in), Some(check_out)) => check_out > check_in,
        _ => false,
    }
}

fn text_setter(state: UseStateHandle<String>) -> Callback<Event> {
    Callback::from(move |e: Event| {
        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
        state.set(input.value());
    })
}

#[function_component]
pub fn EditBookingModal(props: &Props) -> Html {
    let api = use_api();
    let notifications = use_notifications();

    // Form state, seeded from the bound booking
    let guest_name = use_state(|| props.booking.guest_name.clone());
    let guest_email = use_state(|| props.booking.guest_email.clone());
    let guest_phone =
        use_state(|| props.booking.guest_phone.clone().unwrap_or_default());
    let check_in = use_state(|| props.booking.check_in.to_string());
    let check_out = use_state(|| props.booking.check_out.to_string());
    let guests = use_state(|| props.booking.guests.to_string());
    let special_requests = use_state(|| {
        props.booking.special_requests.clone().unwrap_or_default()
    });

    // Submission state
    let is_saving = use_state(|| false);

    // Rebind the form whenever a different booking is edited.
    {
        let guest_name = guest_name.clone();
        let guest_email = guest_email.clone();
        let guest_phone = guest_phone.clone();
        let check_in = check_in.clone();
        let check_out = check_out.clone();
        let guests = guests.clone();
        let special_requests = special_requests.clone();

        use_effect_with(props.booking.clone(), move |booking| {
            guest_name.set(booking.guest_name.clone());
            guest_email.set(booking.guest_email.clone());
            guest_phone.set(booking.guest_phone.clone().unwrap_or_default());
            check_in.set(booking.check_in.to_string());
            check_out.set(booking.check_out.to_string());
            guests.set(booking.guests.to_string());
            special_requests
                .set(booking.special_requests.clone().unwrap_or_default());
        });
    }

    let on_special_requests_change = {
        let special_requests = special_requests.clone();
        Callback::from(move |e: Event| {
            let input: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
            special_requests.set(input.value());
        })
    };

    let parsed_check_in = check_in.parse::<Date>().ok();
    let parsed_check_out = check_out.parse::<Date>().ok();
    let parsed_guests = guests.parse::<u32>().ok().filter(|g| *g >= 1);
    let dates_valid = stay_dates_valid(parsed_check_in, parsed_check_out);

    let can_save = !guest_name.trim().is_empty()
        && parsed_guests.is_some()
        && dates_valid
        && !*is_saving;

    let on_save = {
        let api = api.clone();
        let notifications = notifications.clone();
        let booking_id = props.booking.id.clone();
        let guest_name = guest_name.clone();
        let guest_email = guest_email.clone();
        let guest_phone = guest_phone.clone();
        let check_in = check_in.clone();
        let check_out = check_out.clone();
        let guests = guests.clone();
        let special_requests = special_requests.clone();
        let is_saving = is_saving.clone();
        let on_success = props.on_success.clone();
        let on_close = props.on_close.clone();

        Callback::from(move |_| {
            if !save_may_start(*is_saving) {
                return;
            }

            // Never hit the network without a persisted booking.
            if booking_id.is_empty() {
                notifications
                    .error("Booking ID is missing. Cannot update.");
                return;
            }

            let (Ok(check_in), Ok(check_out)) =
                (check_in.parse::<Date>(), check_out.parse::<Date>())
            else {
                notifications.error("Please enter valid stay dates.");
                return;
            };
            if !stay_dates_valid(Some(check_in), Some(check_out)) {
                notifications.error("Check-out must be after check-in.");
                return;
            }
            let Ok(guests) = guests.parse::<u32>() else {
                notifications.error("Please enter a valid guest count.");
                return;
            };

            let trimmed_phone = guest_phone.trim();
            let trimmed_requests = special_requests.trim();
            let request = requests::UpdateBooking {
                booking_id: booking_id.clone(),
                patch: requests::BookingPatch {
                    guest_name: Some((*guest_name).clone()),
                    guest_email: Some((*guest_email).clone()),
                    guest_phone: (!trimmed_phone.is_empty())
                        .then(|| trimmed_phone.to_string()),
                    check_in: Some(check_in),
                    check_out: Some(check_out),
                    guests: Some(guests),
                    special_requests: (!trimmed_requests.is_empty())
                        .then(|| trimmed_requests.to_string()),
                },
            };

            let api = api.clone();
            let notifications = notifications.clone();
            let is_saving = is_saving.clone();
            let on_success = on_success.clone();
            let on_close = on_close.clone();

            yew::platform::spawn_local(async move {
                is_saving.set(true);

                match api.update_booking(&request).await {
                    Ok(updated) => {
                        notifications
                            .success("Booking updated successfully.");
                        on_success.emit(updated);
                        on_close.emit(());
                    }
                    Err(e) => {
                        tracing::error!("booking update failed: {e:?}");
                        notifications
                            .error(format!("Failed to update booking: {e}"));
                    }
                }

                is_saving.set(false);
            });
        })
    };

    // Backdrop and cancel are no-ops while the save is in flight.
    let on_modal_close = {
        let on_close = props.on_close.clone();
        let is_saving = is_saving.clone();
        Callback::from(move |_: ()| {
            if !*is_saving {
                on_close.emit(());
            }
        })
    };

    if !props.is_open {
        return html! {};
    }

    let input_class = "w-full px-3 py-2 border border-neutral-300 \
                       dark:border-neutral-600 rounded bg-white \
                       dark:bg-neutral-800 text-neutral-900 \
                       dark:text-neutral-100";
    let label_class = "block text-sm font-medium text-neutral-700 \
                       dark:text-neutral-300 mb-1";

    html! {
        <Modal
            on_close={on_modal_close.clone()}
            close_on_backdrop={!*is_saving}
        >
            <h2 class="text-xl font-semibold text-neutral-900 \
                       dark:text-neutral-100 mb-4">
                {"Edit Booking"}
            </h2>

            <div class="space-y-4">
                <div>
                    <label class={label_class}>{"Guest name"}</label>
                    <input
                        type="text"
                        class={input_class}
                        value={(*guest_name).clone()}
                        onchange={text_setter(guest_name.clone())}
                        disabled={*is_saving}
                    />
                </div>

                <div>
                    <label class={label_class}>{"Email"}</label>
                    <input
                        type="email"
                        class={input_class}
                        value={(*guest_email).clone()}
                        onchange={text_setter(guest_email.clone())}
                        disabled={*is_saving}
                    />
                </div>

                <div>
                    <label class={label_class}>{"Phone"}</label>
                    <input
                        type="tel"
                        class={input_class}
                        value={(*guest_phone).clone()}
                        onchange={text_setter(guest_phone.clone())}
                        disabled={*is_saving}
                    />
                </div>

                <div class="grid grid-cols-2 gap-4">
                    <div>
                        <label class={label_class}>{"Check-in"}</label>
                        <input
                            type="date"
                            class={input_class}
                            value={(*check_in).clone()}
                            onchange={text_setter(check_in.clone())}
                            disabled={*is_saving}
                        />
                    </div>
                    <div>
                        <label class={label_class}>{"Check-out"}</label>
                        <input
                            type="date"
                            class={input_class}
                            value={(*check_out).clone()}
                            onchange={text_setter(check_out.clone())}
                            disabled={*is_saving}
                        />
                    </div>
                </div>
                {if !dates_valid
                    && parsed_check_in.is_some()
                    && parsed_check_out.is_some()
                {
                    html! {
                        <p class="text-sm text-red-600 dark:text-red-400">
                            {"Check-out must be after check-in."}
                        </p>
                    }
                } else {
                    html! {}
                }}

                <div>
                    <label class={label_class}>{"Guests"}</label>
                    <input
                        type="number"
                        min="1"
                        class={input_class}
                        value={(*guests).clone()}
                        onchange={text_setter(guests.clone())}
                        disabled={*is_saving}
                    />
                </div>

                <div>
                    <label class={label_class}>{"Special requests"}</label>
                    <textarea
                        rows="3"
                        class={input_class}
                        value={(*special_requests).clone()}
                        onchange={on_special_requests_change}
                        disabled={*is_saving}
                    />
                </div>
            </div>

            <div class="flex gap-3 mt-6">
                <button
                    onclick={on_save}
                    disabled={!can_save}
                    class="flex-1 justify-center py-2 px-4 border \
                           border-transparent rounded-md shadow-sm text-sm \
                           font-medium text-white bg-neutral-900 \
                           hover:bg-neutral-800 dark:bg-neutral-100 \
                           dark:text-neutral-900 dark:hover:bg-neutral-200 \
                           disabled:opacity-50 disabled:cursor-not-allowed \
                           transition-colors duration-200"
                >
                    {if *is_saving { "Saving..." } else { "Save Changes" }}
                </button>
                <button
                    onclick={on_modal_close.reform(|_| ())}
                    disabled={*is_saving}
                    class="flex-1 py-2 px-4 border border-neutral-300 \
                           dark:border-neutral-600 rounded-md shadow-sm \
                           text-sm font-medium text-neutral-700 \
                           dark:text-neutral-300 bg-white dark:bg-neutral-800 \
                           hover:bg-neutral-50 dark:hover:bg-neutral-700 \
                           disabled:opacity-50 disabled:cursor-not-allowed \
                           transition-colors duration-200"
                >
                    {"Cancel"}
                </button>
            </div>
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;

    #[test]
    fn checkout_after_checkin_is_valid() {
        assert!(stay_dates_valid(
            Some(date(2024, 3, 1)),
            Some(date(2024, 3, 3))
        ));
    }

    #[test]
    fn same_day_or_reversed_stays_are_invalid() {
        assert!(!stay_dates_valid(
            Some(date(2024, 3, 1)),
            Some(date(2024, 3, 1))
        ));
        assert!(!stay_dates_valid(
            Some(date(2024, 3, 3)),
            Some(date(2024, 3, 1))
        ));
    }

    #[test]
    fn missing_dates_are_invalid() {
        assert!(!stay_dates_valid(None, Some(date(2024, 3, 3))));
        assert!(!stay_dates_valid(Some(date(2024, 3, 1)), None));
        assert!(!stay_dates_valid(None, None));
    }

    #[test]
    fn a_save_in_flight_blocks_a_second_submission() {
        assert!(!save_may_start(true));
        assert!(save_may_start(false));
    }
}
