use jiff::civil::Date;
use payloads::RoomCandidate;
use yew::prelude::*;

use crate::components::AvailabilityBoard;

/// Parent view owning the search criteria and the current selection.
/// The board reports selections upward through `on_room_select`; no
/// state flows back down besides the criteria.
#[function_component]
pub fn RoomSearchPage() -> Html {
    let check_in_input = use_state(String::new);
    let check_out_input = use_state(String::new);
    let guests_input = use_state(|| "2".to_string());
    let selected = use_state(|| None::<RoomCandidate>);

    let check_in = check_in_input.parse::<Date>().ok();
    let check_out = check_out_input.parse::<Date>().ok();
    let guests = guests_input.parse::<u32>().unwrap_or(0);

    let on_room_select = {
        let selected = selected.clone();
        Callback::from(move |room: RoomCandidate| {
            selected.set(Some(room));
        })
    };

    let date_setter = |state: UseStateHandle<String>| {
        Callback::from(move |e: Event| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            state.set(input.value());
        })
    };

    let input_class = "px-3 py-2 border border-neutral-300 \
                       dark:border-neutral-600 rounded bg-white \
                       dark:bg-neutral-800 text-neutral-900 \
                       dark:text-neutral-100";
    let label_class = "block text-sm font-medium text-neutral-700 \
                       dark:text-neutral-300 mb-1";

    html! {
        <div class="space-y-8">
            <div>
                <h1 class="text-2xl font-bold text-neutral-900 \
                           dark:text-neutral-100 mb-4">
                    {"Find a room"}
                </h1>

                <div class="flex flex-wrap gap-4 items-end">
                    <div>
                        <label class={label_class}>{"Check-in"}</label>
                        <input
                            type="date"
                            class={input_class}
                            value={(*check_in_input).clone()}
                            onchange={date_setter(check_in_input.clone())}
                        />
                    </div>
                    <div>
                        <label class={label_class}>{"Check-out"}</label>
                        <input
                            type="date"
                            class={input_class}
                            value={(*check_out_input).clone()}
                            onchange={date_setter(check_out_input.clone())}
                        />
                    </div>
                    <div>
                        <label class={label_class}>{"Guests"}</label>
                        <input
                            type="number"
                            min="1"
                            class={input_class}
                            value={(*guests_input).clone()}
                            onchange={date_setter(guests_input.clone())}
                        />
                    </div>
                </div>
            </div>

            <AvailabilityBoard
                {check_in}
                {check_out}
                {guests}
                on_room_select={on_room_select}
            />

            {if let Some(room) = &*selected {
                html! {
                    <div class="p-4 rounded-lg border border-neutral-200 \
                                dark:border-neutral-700 bg-neutral-50 \
                                dark:bg-neutral-800">
                        <p class="text-sm text-neutral-700 \
                                  dark:text-neutral-300">
                            {format!(
                                "Selected: {} (Room {})",
                                room.room_type_name, room.room_number
                            )}
                        </p>
                    </div>
                }
            } else {
                html! {}
            }}
        </div>
    }
}
