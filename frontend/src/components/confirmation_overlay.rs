use shared::SubmitBookingResponse;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ConfirmationOverlayProps {
    pub response: SubmitBookingResponse,
    /// Acknowledging the confirmation resets the whole wizard
    pub on_close: Callback<MouseEvent>,
}

#[function_component(ConfirmationOverlay)]
pub fn confirmation_overlay(props: &ConfirmationOverlayProps) -> Html {
    html! {
        <>
            <div class="confirmation-overlay"></div>
            <div class="confirmation-message">
                <h3>{"Bedankt voor je aanvraag!"}</h3>
                <p>{&props.response.success_message}</p>
                <p class="confirmation-reference">
                    {format!("Referentie: {}", props.response.reference_id)}
                </p>
                <button type="button" class="btn primary" onclick={props.on_close.clone()}>
                    {"Sluiten"}
                </button>
            </div>
        </>
    }
}
