use crate::services::date_utils::format_slot_date;
use shared::SelectedSlot;
use yew::prelude::*;

const SELECTION_HINT: &str = "Je hebt nog niet 3 verschillende dagen geselecteerd. \
Bij meerdere opties wordt de klus beter opgepakt.";

#[derive(Properties, PartialEq)]
pub struct SelectedSlotsListProps {
    pub slots: Vec<SelectedSlot>,
    pub max_selections: usize,
    pub on_remove: Callback<String>,
}

#[function_component(SelectedSlotsList)]
pub fn selected_slots_list(props: &SelectedSlotsListProps) -> Html {
    html! {
        <div class="selected-slots">
            <div class="selected-slots-list">
                {for props.slots.iter().map(|slot| {
                    let on_remove = props.on_remove.clone();
                    let key = slot.key.clone();

                    html! {
                        <div class="selected-slot-item">
                            <div class="slot-info">
                                <div class="slot-date">{format_slot_date(&slot.date)}</div>
                                <div class="slot-time">
                                    {format!("{}: {}", slot.time_slot.label, slot.time_slot.time)}
                                </div>
                            </div>
                            <button
                                type="button"
                                class="remove-slot"
                                onclick={Callback::from(move |_: MouseEvent| on_remove.emit(key.clone()))}
                            >
                                {"×"}
                            </button>
                        </div>
                    }
                })}
            </div>

            {if props.slots.len() < props.max_selections {
                html! { <p class="selection-hint">{SELECTION_HINT}</p> }
            } else {
                html! {}
            }}
        </div>
    }
}
