use std::collections::BTreeSet;
use std::rc::Rc;

use buddey_domain::availability::AvailabilityTracker;
use buddey_domain::booking::{BookingService, LocalBookingSubmitter};
use buddey_domain::calendar::{CalendarContext, CalendarService, CalendarVariant};
use buddey_domain::shared_slot_selection::SharedSlotSelectionService;
use buddey_domain::slot_selection::SlotSelectionService;
use buddey_domain::validation;
use buddey_domain::wizard::{NextOutcome, WizardService};
use shared::{
    BookingConfig, BookingValidationError, SelectedSlot, SlotPolicy, SubmitBookingResponse,
    TimeSlotId,
};
use yew::prelude::*;

use crate::components::calendar::Calendar;
use crate::components::confirmation_overlay::ConfirmationOverlay;
use crate::components::forms::contact_step::ContactStep;
use crate::components::forms::job_details_step::JobDetailsStep;
use crate::components::forms::zipcode_step::ZipcodeStep;
use crate::components::progress_bar::ProgressBar;
use crate::components::selected_slots_list::SelectedSlotsList;
use crate::components::simple_calendar::SimpleCalendar;
use crate::hooks::use_availability::use_availability;
use crate::services::date_utils;
use crate::services::logging::Logger;

/// The wizard's state lives in these domain services, constructed once at
/// mount and shared into the event callbacks. Rendering derives
/// everything from them; the `revision` counter only forces re-renders.
struct WizardServices {
    config: BookingConfig,
    wizard: WizardService,
    slots: SlotSelectionService,
    shared_slots: SharedSlotSelectionService,
    booking: BookingService,
    calendar: CalendarService,
    tracker: AvailabilityTracker,
}

impl WizardServices {
    fn new() -> Self {
        let config = BookingConfig::default();
        let (month, year) = date_utils::current_month_year();

        Self {
            wizard: WizardService::new(),
            slots: SlotSelectionService::new(&config),
            shared_slots: SharedSlotSelectionService::new(&config),
            booking: BookingService::new(),
            calendar: CalendarService::with_focus(month, year),
            tracker: AvailabilityTracker::new(),
            config,
        }
    }

    fn slot_count(&self) -> usize {
        match self.config.slot_policy {
            SlotPolicy::PerDate => self.slots.len(),
            SlotPolicy::SharedSet => self.shared_slots.len(),
        }
    }

    fn slot_snapshot(&self) -> Vec<SelectedSlot> {
        match self.config.slot_policy {
            SlotPolicy::PerDate => self.slots.snapshot(),
            SlotPolicy::SharedSet => self.shared_slots.snapshot(),
        }
    }

    /// Mirror the current slot selection into the booking record.
    fn sync_booked_slots(&self) {
        let booked = match self.config.slot_policy {
            SlotPolicy::PerDate => self.slots.to_booked_slots(),
            SlotPolicy::SharedSet => self.shared_slots.to_booked_slots(),
        };
        self.booking.set_selected_slots(booked);
    }
}

fn field_setter<F>(
    services: &Rc<WizardServices>,
    refresh: &Callback<()>,
    apply: F,
) -> Callback<String>
where
    F: Fn(&WizardServices, &str) + 'static,
{
    let services = services.clone();
    let refresh = refresh.clone();
    Callback::from(move |value: String| {
        apply(&services, &value);
        refresh.emit(());
    })
}

#[function_component(BookingWizard)]
pub fn booking_wizard() -> Html {
    let services = use_memo((), |_| WizardServices::new());
    // Bumped after every service mutation to re-derive the view
    let revision = use_state(|| 0u32);
    let selection_alert = use_state(|| Option::<String>::None);
    let submit_response = use_state(|| Option::<SubmitBookingResponse>::None);

    let availability = use_availability(
        services.tracker.clone(),
        services.config.availability_delay_ms,
    );

    let refresh = {
        let revision = revision.clone();
        Callback::from(move |_: ()| revision.set((*revision).wrapping_add(1)))
    };

    // -- step 1: postal code ------------------------------------------------

    let on_zipcode_input = {
        let services = services.clone();
        let check = availability.check.clone();
        let reset_check = availability.reset.clone();
        let refresh = refresh.clone();

        Callback::from(move |raw: String| {
            let formatted = validation::format_zipcode(&raw);
            services.booking.set_zipcode(&formatted);

            if validation::is_valid_zipcode(&formatted) {
                check.emit(formatted);
            } else {
                reset_check.emit(());
            }
            refresh.emit(());
        })
    };

    // -- step 2: calendar and slots ----------------------------------------

    let on_prev_month = {
        let services = services.clone();
        let refresh = refresh.clone();
        Callback::from(move |_: MouseEvent| {
            services.calendar.navigate_previous_month();
            refresh.emit(());
        })
    };

    let on_next_month = {
        let services = services.clone();
        let refresh = refresh.clone();
        Callback::from(move |_: MouseEvent| {
            services.calendar.navigate_next_month();
            refresh.emit(());
        })
    };

    let on_date_click = {
        let services = services.clone();
        let selection_alert = selection_alert.clone();
        let refresh = refresh.clone();

        Callback::from(move |date: String| {
            match services.config.slot_policy {
                SlotPolicy::PerDate => {
                    services.slots.toggle_active_date(&date);
                    selection_alert.set(None);
                }
                SlotPolicy::SharedSet => match services.shared_slots.toggle_date(&date) {
                    Ok(_) => selection_alert.set(None),
                    Err(err) => selection_alert.set(Some(err.to_string())),
                },
            }
            services.sync_booked_slots();
            refresh.emit(());
        })
    };

    let on_slot_toggle = {
        let services = services.clone();
        let selection_alert = selection_alert.clone();
        let refresh = refresh.clone();

        Callback::from(move |slot: TimeSlotId| {
            let result = match services.config.slot_policy {
                SlotPolicy::PerDate => match services.slots.active_date() {
                    Some(date) if services.slots.is_selected(&date, slot) => {
                        services
                            .slots
                            .deselect(&SelectedSlot::generate_key(&date, slot));
                        Ok(())
                    }
                    _ => services.slots.select(slot).map(|_| ()),
                },
                SlotPolicy::SharedSet => services.shared_slots.toggle_slot(slot).map(|_| ()),
            };

            match result {
                Ok(()) => selection_alert.set(None),
                Err(err) => selection_alert.set(Some(err.to_string())),
            }
            services.sync_booked_slots();
            refresh.emit(());
        })
    };

    let on_slot_remove = {
        let services = services.clone();
        let refresh = refresh.clone();

        Callback::from(move |key: String| {
            match services.config.slot_policy {
                SlotPolicy::PerDate => {
                    services.slots.deselect(&key);
                }
                SlotPolicy::SharedSet => {
                    services.shared_slots.remove_date_by_key(&key);
                }
            }
            services.sync_booked_slots();
            refresh.emit(());
        })
    };

    // -- steps 3 and 4: form fields ----------------------------------------

    let on_project_type_change = field_setter(&services, &refresh, |s, v| {
        s.booking.set_project_type(v)
    });
    let on_job_description_change = field_setter(&services, &refresh, |s, v| {
        s.booking.set_job_description(v)
    });
    let on_duration_change = field_setter(&services, &refresh, |s, v| s.booking.set_duration(v));
    let on_first_name_change =
        field_setter(&services, &refresh, |s, v| s.booking.set_first_name(v));
    let on_last_name_change = field_setter(&services, &refresh, |s, v| s.booking.set_last_name(v));
    let on_email_change = field_setter(&services, &refresh, |s, v| s.booking.set_email(v));
    let on_address_change = field_setter(&services, &refresh, |s, v| s.booking.set_address(v));
    let on_city_change = field_setter(&services, &refresh, |s, v| s.booking.set_city(v));

    let on_privacy_change = {
        let services = services.clone();
        let refresh = refresh.clone();
        Callback::from(move |accepted: bool| {
            services.booking.set_privacy_accepted(accepted);
            refresh.emit(());
        })
    };

    let on_photo_add = {
        let services = services.clone();
        let refresh = refresh.clone();
        Callback::from(move |data_url: String| {
            services.booking.add_photo(data_url);
            refresh.emit(());
        })
    };

    let on_photo_remove = {
        let services = services.clone();
        let refresh = refresh.clone();
        Callback::from(move |data_url: String| {
            services.booking.remove_photo(&data_url);
            refresh.emit(());
        })
    };

    // -- navigation ---------------------------------------------------------

    let on_next = {
        let services = services.clone();
        let availability_response = availability.response.clone();
        let submit_response = submit_response.clone();
        let refresh = refresh.clone();

        Callback::from(move |_: MouseEvent| {
            let step = services.wizard.current_step();
            let result = validation::validate_step(
                step,
                &services.booking.data(),
                services.slot_count(),
                availability_response.as_ref(),
            );

            match services.wizard.try_next(result.is_valid) {
                NextOutcome::Blocked | NextOutcome::Advanced(_) => {}
                NextOutcome::Submit => {
                    services.sync_booked_slots();
                    match services.booking.submit(&LocalBookingSubmitter) {
                        Ok(response) => {
                            Logger::info_with_component(
                                "wizard",
                                &format!("aanvraag verstuurd, referentie {}", response.reference_id),
                            );
                            services.wizard.complete_submission();
                            submit_response.set(Some(response));
                        }
                        Err(err) => {
                            Logger::error_with_component(
                                "wizard",
                                &format!("versturen mislukt: {}", err),
                            );
                        }
                    }
                }
            }
            refresh.emit(());
        })
    };

    let on_prev = {
        let services = services.clone();
        let refresh = refresh.clone();
        Callback::from(move |_: MouseEvent| {
            services.wizard.back();
            refresh.emit(());
        })
    };

    let on_jump = {
        let services = services.clone();
        let refresh = refresh.clone();
        Callback::from(move |step: u32| {
            if services.wizard.jump_to(step).is_ok() {
                refresh.emit(());
            }
        })
    };

    let on_acknowledge = {
        let services = services.clone();
        let submit_response = submit_response.clone();
        let selection_alert = selection_alert.clone();
        let reset_check = availability.reset.clone();
        let refresh = refresh.clone();

        Callback::from(move |_: MouseEvent| {
            services.wizard.reset();
            services.slots.clear();
            services.shared_slots.clear();
            services.booking.reset();
            reset_check.emit(());
            selection_alert.set(None);
            submit_response.set(None);
            refresh.emit(());
        })
    };

    // -- derive the view from the services ----------------------------------

    let booking_data = services.booking.data();
    let current_step = services.wizard.current_step();
    let total_steps = services.wizard.total_steps();
    let completed_steps: Vec<u32> = (1..=total_steps)
        .filter(|step| services.wizard.is_completed(*step))
        .collect();

    let step_validation = validation::validate_step(
        current_step,
        &booking_data,
        services.slot_count(),
        availability.response.as_ref(),
    );

    let zipcode_error = if booking_data.zipcode.is_empty() {
        None
    } else if !validation::is_valid_zipcode(&booking_data.zipcode) {
        Some(BookingValidationError::InvalidPostalCode.message())
    } else {
        availability.response.as_ref().and_then(|response| {
            if response.zipcode == booking_data.zipcode && !response.available {
                Some(
                    response
                        .message
                        .clone()
                        .unwrap_or_else(|| BookingValidationError::ServiceUnavailable.message()),
                )
            } else {
                None
            }
        })
    };

    let contact_started = !booking_data.first_name.is_empty()
        || !booking_data.last_name.is_empty()
        || !booking_data.email.is_empty()
        || !booking_data.address.is_empty()
        || !booking_data.city.is_empty();
    let contact_error = if current_step == 4 && contact_started {
        step_validation
            .errors
            .first()
            .map(BookingValidationError::message)
    } else {
        None
    };

    let step_body = match current_step {
        1 => html! {
            <ZipcodeStep
                zipcode={booking_data.zipcode.clone()}
                error={zipcode_error}
                checking={availability.checking}
                on_input={on_zipcode_input}
            />
        },
        2 => render_date_step(
            &services,
            (*selection_alert).clone(),
            on_prev_month,
            on_next_month,
            on_date_click,
            on_slot_toggle,
            on_slot_remove,
        ),
        3 => html! {
            <JobDetailsStep
                project_type={booking_data.project_type.clone()}
                job_description={booking_data.job_description.clone()}
                duration={booking_data.duration.clone()}
                on_project_type_change={on_project_type_change}
                on_job_description_change={on_job_description_change}
                on_duration_change={on_duration_change}
            />
        },
        _ => html! {
            <ContactStep
                first_name={booking_data.first_name.clone()}
                last_name={booking_data.last_name.clone()}
                email={booking_data.email.clone()}
                address={booking_data.address.clone()}
                city={booking_data.city.clone()}
                privacy_accepted={booking_data.privacy_accepted}
                photos={booking_data.photos.clone()}
                error={contact_error}
                on_first_name_change={on_first_name_change}
                on_last_name_change={on_last_name_change}
                on_email_change={on_email_change}
                on_address_change={on_address_change}
                on_city_change={on_city_change}
                on_privacy_change={on_privacy_change}
                on_photo_add={on_photo_add}
                on_photo_remove={on_photo_remove}
            />
        },
    };

    let next_label = if current_step == total_steps {
        "Buddey aanvragen"
    } else {
        "Volgende"
    };

    html! {
        <div class="booking-container">
            <ProgressBar
                current_step={current_step}
                total_steps={total_steps}
                completed_steps={completed_steps}
                percent={services.wizard.progress_percent()}
                on_jump={on_jump}
            />

            <form class="booking-form" onsubmit={Callback::from(|e: SubmitEvent| e.prevent_default())}>
                {step_body}
            </form>

            <div class="wizard-navigation">
                {if current_step > 1 {
                    html! {
                        <button type="button" class="btn secondary" onclick={on_prev}>
                            {"Vorige"}
                        </button>
                    }
                } else {
                    html! {}
                }}
                <button
                    type="button"
                    class="btn primary"
                    disabled={!step_validation.is_valid}
                    onclick={on_next}
                >
                    {next_label}
                </button>
            </div>

            {if let Some(response) = (*submit_response).clone() {
                html! { <ConfirmationOverlay response={response} on_close={on_acknowledge} /> }
            } else {
                html! {}
            }}
        </div>
    }
}

/// Mount the calendar variant the configuration asks for. Both variants
/// share the grid; only the selection policy differs.
fn render_date_step(
    services: &Rc<WizardServices>,
    alert: Option<String>,
    on_prev_month: Callback<MouseEvent>,
    on_next_month: Callback<MouseEvent>,
    on_date_click: Callback<String>,
    on_slot_toggle: Callback<TimeSlotId>,
    on_slot_remove: Callback<String>,
) -> Html {
    let focus = services.calendar.get_focus_date();
    let today = date_utils::current_date();
    let month_label = format!(
        "{} {}",
        services.calendar.month_name(focus.month),
        focus.year
    );

    let (selected_dates, dates_with_slots, variant) = match services.config.slot_policy {
        SlotPolicy::PerDate => {
            let mut selected = BTreeSet::new();
            if let Some(date) = services.slots.active_date() {
                selected.insert(date);
            }
            (
                selected,
                services.slots.dates_with_slots(),
                CalendarVariant::SingleActiveDate,
            )
        }
        SlotPolicy::SharedSet => (
            services.shared_slots.selected_dates(),
            services.shared_slots.dates_with_slots(),
            CalendarVariant::MultiDate,
        ),
    };

    let calendar_month = services.calendar.generate_calendar_month(
        focus.month,
        focus.year,
        &CalendarContext {
            today: &today,
            selected_dates: &selected_dates,
            dates_with_slots: &dates_with_slots,
            variant,
        },
    );

    let calendar = match services.config.slot_policy {
        SlotPolicy::PerDate => {
            let checked_slots: Vec<TimeSlotId> = match services.slots.active_date() {
                Some(date) => TimeSlotId::ALL
                    .into_iter()
                    .filter(|slot| services.slots.is_selected(&date, *slot))
                    .collect(),
                None => Vec::new(),
            };

            html! {
                <Calendar
                    calendar_month={calendar_month}
                    month_label={month_label}
                    checked_slots={checked_slots}
                    slots_enabled={services.slots.active_date().is_some()}
                    alert={alert}
                    on_prev_month={on_prev_month}
                    on_next_month={on_next_month}
                    on_date_click={on_date_click}
                    on_slot_toggle={on_slot_toggle}
                />
            }
        }
        SlotPolicy::SharedSet => {
            let checked_slots: Vec<TimeSlotId> =
                services.shared_slots.checked_slots().into_iter().collect();

            html! {
                <SimpleCalendar
                    calendar_month={calendar_month}
                    month_label={month_label}
                    checked_slots={checked_slots}
                    slots_enabled={!services.shared_slots.selected_dates().is_empty()}
                    alert={alert}
                    on_prev_month={on_prev_month}
                    on_next_month={on_next_month}
                    on_date_click={on_date_click}
                    on_slot_toggle={on_slot_toggle}
                />
            }
        }
    };

    html! {
        <div class="step-content">
            <h2>{"Wanneer komt het uit?"}</h2>
            <p class="step-intro">
                {"Kies tot 3 voorkeursmomenten. Hoe meer opties, hoe sneller de klus wordt opgepakt."}
            </p>
            {calendar}
            <SelectedSlotsList
                slots={services.slot_snapshot()}
                max_selections={services.config.max_slot_selections}
                on_remove={on_slot_remove}
            />
        </div>
    }
}
