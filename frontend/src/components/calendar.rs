use shared::{CalendarMonth, TimeSlotId};
use yew::prelude::*;

const WEEKDAYS: [&str; 7] = ["ma", "di", "wo", "do", "vr", "za", "zo"];

/// Primary wizard calendar: one active date at a time, time slots attach
/// to that date individually.
#[derive(Properties, PartialEq)]
pub struct CalendarProps {
    pub calendar_month: CalendarMonth,
    pub month_label: String,
    /// Slots checked for the active date
    pub checked_slots: Vec<TimeSlotId>,
    /// False while no date is active; the checkboxes are then disabled
    pub slots_enabled: bool,
    /// Rejection message from the slot store, shown above the slot list
    pub alert: Option<String>,
    pub on_prev_month: Callback<MouseEvent>,
    pub on_next_month: Callback<MouseEvent>,
    pub on_date_click: Callback<String>,
    pub on_slot_toggle: Callback<TimeSlotId>,
}

#[function_component(Calendar)]
pub fn calendar(props: &CalendarProps) -> Html {
    html! {
        <div class="calendar">
            <div class="calendar-header">
                <button type="button" class="calendar-nav-btn" onclick={props.on_prev_month.clone()}>{"‹"}</button>
                <h3 class="calendar-title">{&props.month_label}</h3>
                <button type="button" class="calendar-nav-btn" onclick={props.on_next_month.clone()}>{"›"}</button>
            </div>

            <div class="calendar-weekdays">
                {for WEEKDAYS.iter().map(|day| html! { <div class="weekday-header">{day}</div> })}
            </div>

            <div class="calendar-grid">
                {for props.calendar_month.days.iter().map(|day| {
                    if day.is_empty() {
                        return html! { <div class="calendar-day empty"></div> };
                    }

                    let onclick = (!day.is_disabled).then(|| {
                        let on_date_click = props.on_date_click.clone();
                        let iso_date = day.iso_date.clone();
                        Callback::from(move |_: MouseEvent| on_date_click.emit(iso_date.clone()))
                    });

                    html! {
                        <div
                            class={classes!(
                                "calendar-day",
                                day.is_disabled.then(|| "disabled"),
                                day.is_selected.then(|| "selected"),
                                day.has_slot.then(|| "has-selected-slot"),
                            )}
                            {onclick}
                        >
                            {day.day}
                        </div>
                    }
                })}
            </div>

            {if let Some(alert) = &props.alert {
                html! { <div class="selection-alert">{alert}</div> }
            } else {
                html! {}
            }}

            <div class="time-slots">
                <h4>{"Kies een tijdslot"}</h4>
                {for TimeSlotId::ALL.iter().map(|slot| {
                    let slot = *slot;
                    let checked = props.checked_slots.contains(&slot);
                    let on_slot_toggle = props.on_slot_toggle.clone();

                    html! {
                        <label class={classes!("time-slot-option", checked.then(|| "selected"))}>
                            <span class="time-slot-checkbox">
                                <input
                                    type="checkbox"
                                    value={slot.as_str()}
                                    checked={checked}
                                    disabled={!props.slots_enabled}
                                    onchange={Callback::from(move |_: Event| on_slot_toggle.emit(slot))}
                                />
                            </span>
                            <span class="time-slot-label">{slot.label()}</span>
                            <span class="time-slot-time">{slot.display_time()}</span>
                        </label>
                    }
                })}
            </div>
        </div>
    }
}
