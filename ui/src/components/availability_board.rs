use jiff::civil::Date;
use payloads::{CurrencySettings, RoomCandidate};
use rust_decimal::Decimal;
use yew::prelude::*;

use crate::hooks::use_available_rooms;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub check_in: Option<Date>,
    pub check_out: Option<Date>,
    pub guests: u32,
    /// Invoked on every selection gesture (click or drag-drop) with
    /// the room that became selected.
    pub on_room_select: Callback<RoomCandidate>,
    #[prop_or_default]
    pub currency: CurrencySettings,
}

/// The candidate that becomes selected when the dragged card drops on
/// `target`. Dropping a card onto itself is a no-op; anything else
/// selects the drop target. List order never changes — drag-and-drop
/// is a selection gesture, not a reorder.
fn drop_target<'a>(
    dragged: Option<&str>,
    target: &'a RoomCandidate,
) -> Option<&'a RoomCandidate> {
    match dragged {
        Some(source) if source != target.room_number => Some(target),
        _ => None,
    }
}

#[function_component]
pub fn AvailabilityBoard(props: &Props) -> Html {
    let availability =
        use_available_rooms(props.check_in, props.check_out, props.guests);
    let selected_room = use_state(|| None::<String>);
    let dragged_room = use_state(|| None::<String>);

    // A fresh result set invalidates any previous selection; the
    // selected room number may not exist in the new list.
    {
        let selected_room = selected_room.clone();
        use_effect_with(availability.rooms.clone(), move |_| {
            selected_room.set(None);
        });
    }

    let on_card_click = {
        let selected_room = selected_room.clone();
        let on_room_select = props.on_room_select.clone();
        Callback::from(move |room: RoomCandidate| {
            selected_room.set(Some(room.room_number.clone()));
            on_room_select.emit(room);
        })
    };

    let on_drag_start = {
        let dragged_room = dragged_room.clone();
        Callback::from(move |room_number: String| {
            dragged_room.set(Some(room_number));
        })
    };

    let on_drop = {
        let selected_room = selected_room.clone();
        let dragged_room = dragged_room.clone();
        let on_room_select = props.on_room_select.clone();
        Callback::from(move |room: RoomCandidate| {
            if let Some(target) =
                drop_target((*dragged_room).as_deref(), &room)
            {
                selected_room.set(Some(target.room_number.clone()));
                on_room_select.emit(target.clone());
            }
            // Cleared after every drop, whether or not it selected.
            dragged_room.set(None);
        })
    };

    let on_drag_end = {
        let dragged_room = dragged_room.clone();
        Callback::from(move |_| {
            dragged_room.set(None);
        })
    };

    if availability.is_loading {
        return html! {
            <div class="text-center py-12">
                <p class="text-neutral-600 dark:text-neutral-400">
                    {"Checking room availability..."}
                </p>
            </div>
        };
    }

    if let Some(error) = &availability.error {
        return html! {
            <div class="p-4 rounded-md bg-red-50 dark:bg-red-900/20 border \
                        border-red-200 dark:border-red-800">
                <p class="text-sm text-red-700 dark:text-red-400">
                    {error}
                </p>
            </div>
        };
    }

    match &availability.rooms {
        None => html! {
            <div class="text-center py-12">
                <p class="text-neutral-600 dark:text-neutral-400">
                    {"Select check-in, check-out and guest count to see \
                      available rooms."}
                </p>
            </div>
        },
        Some(rooms) if rooms.is_empty() => html! {
            <div class="text-center py-12">
                <p class="text-neutral-600 dark:text-neutral-400">
                    {"No rooms available for the selected dates."}
                </p>
            </div>
        },
        Some(rooms) => html! {
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                {rooms.iter().map(|room| {
                    let is_selected = (*selected_room).as_deref()
                        == Some(room.room_number.as_str());
                    html! {
                        <RoomCard
                            key={room.room_number.clone()}
                            room={room.clone()}
                            currency={props.currency.clone()}
                            {is_selected}
                            on_click={on_card_click.clone()}
                            on_drag_start={on_drag_start.clone()}
                            on_drop={on_drop.clone()}
                            on_drag_end={on_drag_end.clone()}
                        />
                    }
                }).collect::<Html>()}
            </div>
        },
    }
}

#[derive(Properties, PartialEq)]
struct RoomCardProps {
    room: RoomCandidate,
    currency: CurrencySettings,
    is_selected: bool,
    on_click: Callback<RoomCandidate>,
    on_drag_start: Callback<String>,
    on_drop: Callback<RoomCandidate>,
    on_drag_end: Callback<()>,
}

#[function_component]
fn RoomCard(props: &RoomCardProps) -> Html {
    let room = &props.room;

    let onclick = {
        let on_click = props.on_click.clone();
        let room = room.clone();
        Callback::from(move |_| {
            on_click.emit(room.clone());
        })
    };

    let ondragstart = {
        let on_drag_start = props.on_drag_start.clone();
        let room_number = room.room_number.clone();
        Callback::from(move |_: DragEvent| {
            on_drag_start.emit(room_number.clone());
        })
    };

    // Required for the element to accept a drop.
    let ondragover = Callback::from(|e: DragEvent| {
        e.prevent_default();
    });

    let ondrop = {
        let on_drop = props.on_drop.clone();
        let room = room.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            on_drop.emit(room.clone());
        })
    };

    let ondragend = {
        let on_drag_end = props.on_drag_end.clone();
        Callback::from(move |_: DragEvent| {
            on_drag_end.emit(());
        })
    };

    html! {
        <div
            draggable="true"
            {onclick}
            {ondragstart}
            {ondragover}
            {ondrop}
            {ondragend}
            class={classes!(
                "bg-white", "dark:bg-neutral-800", "p-6", "rounded-lg",
                "shadow-md", "border", "cursor-pointer", "select-none",
                "transition-colors",
                if props.is_selected {
                    classes!("border-neutral-900", "dark:border-neutral-100",
                             "ring-2", "ring-neutral-900",
                             "dark:ring-neutral-100")
                } else {
                    classes!("border-neutral-200", "dark:border-neutral-700",
                             "hover:border-neutral-400",
                             "dark:hover:border-neutral-500")
                }
            )}
        >
            <div class="space-y-3">
                <div class="flex items-start justify-between">
                    <div>
                        <h3 class="text-lg font-semibold text-neutral-900 \
                                   dark:text-neutral-100">
                            {&room.room_type_name}
                        </h3>
                        <p class="text-sm text-neutral-600 \
                                  dark:text-neutral-400">
                            {"Room "}{&room.room_number}
                        </p>
                    </div>
                    {if props.is_selected {
                        html! {
                            <span class="text-xs font-medium px-2 py-1 \
                                         rounded bg-neutral-900 text-white \
                                         dark:bg-neutral-100 \
                                         dark:text-neutral-900">
                                {"Selected"}
                            </span>
                        }
                    } else {
                        html! {}
                    }}
                </div>

                <div class="flex gap-4 text-sm text-neutral-600 \
                            dark:text-neutral-400">
                    <span>{format!("Floor {}", room.floor)}</span>
                    <span>{format!(
                        "Sleeps {}",
                        room.capacity
                    )}</span>
                </div>

                {if let Some(amenities) = &room.amenities {
                    html! {
                        <div class="flex flex-wrap gap-1">
                            {amenities.iter().map(|amenity| html! {
                                <span
                                    key={amenity.clone()}
                                    class="text-xs px-2 py-1 rounded \
                                           bg-neutral-100 dark:bg-neutral-700 \
                                           text-neutral-700 \
                                           dark:text-neutral-300"
                                >
                                    {amenity}
                                </span>
                            }).collect::<Html>()}
                        </div>
                    }
                } else {
                    html! {}
                }}

                {if let Some(pricing) = &room.pricing {
                    html! {
                        <div class="pt-2 border-t border-neutral-200 \
                                    dark:border-neutral-700">
                            <div class="flex items-baseline justify-between">
                                <span class="text-xl font-semibold \
                                             text-neutral-900 \
                                             dark:text-neutral-100">
                                    {props.currency.format_amount(
                                        pricing.total_price
                                    )}
                                </span>
                                <span class="text-sm text-neutral-600 \
                                             dark:text-neutral-400">
                                    {format!(
                                        "{}/night",
                                        props.currency.format_amount(
                                            pricing.price_per_night
                                        )
                                    )}
                                </span>
                            </div>
                            <p class="text-xs text-neutral-500 \
                                      dark:text-neutral-400 mt-1">
                                {format!(
                                    "{} night{}",
                                    pricing.nights,
                                    if pricing.nights == 1 { "" } else { "s" }
                                )}
                                {if pricing.extra_guest_charge
                                    > Decimal::ZERO
                                {
                                    format!(
                                        ", includes {} extra guest charge",
                                        props.currency.format_amount(
                                            pricing.extra_guest_charge
                                        )
                                    )
                                } else {
                                    String::new()
                                }}
                            </p>
                        </div>
                    }
                } else {
                    html! {}
                }}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(room_number: &str) -> RoomCandidate {
        RoomCandidate {
            room_number: room_number.to_string(),
            room_type_name: "Standard".to_string(),
            floor: 1,
            capacity: 2,
            amenities: None,
            pricing: None,
        }
    }

    #[test]
    fn dropping_on_a_different_room_selects_the_target() {
        let target = candidate("202");
        let selected = drop_target(Some("101"), &target);
        assert_eq!(selected.map(|r| r.room_number.as_str()), Some("202"));
    }

    #[test]
    fn dropping_a_room_onto_itself_changes_nothing() {
        let target = candidate("101");
        assert!(drop_target(Some("101"), &target).is_none());
    }

    #[test]
    fn dropping_without_a_drag_in_progress_changes_nothing() {
        let target = candidate("101");
        assert!(drop_target(None, &target).is_none());
    }
}
