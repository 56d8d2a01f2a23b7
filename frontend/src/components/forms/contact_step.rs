use crate::components::photo_upload::PhotoUpload;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ContactStepProps {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub privacy_accepted: bool,
    pub photos: Vec<String>,
    /// First blocking validation error for inline display, if any
    pub error: Option<String>,
    pub on_first_name_change: Callback<String>,
    pub on_last_name_change: Callback<String>,
    pub on_email_change: Callback<String>,
    pub on_address_change: Callback<String>,
    pub on_city_change: Callback<String>,
    pub on_privacy_change: Callback<bool>,
    pub on_photo_add: Callback<String>,
    pub on_photo_remove: Callback<String>,
}

fn text_input_handler(on_change: &Callback<String>) -> Callback<InputEvent> {
    let on_change = on_change.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        on_change.emit(input.value());
    })
}

#[function_component(ContactStep)]
pub fn contact_step(props: &ContactStepProps) -> Html {
    let on_privacy_change = {
        let on_change = props.on_privacy_change.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(input.checked());
        })
    };

    html! {
        <div class="step-content">
            <h2>{"Je gegevens"}</h2>

            <div class="form-row">
                <div class="form-group">
                    <label for="firstName">{"Voornaam"}</label>
                    <input
                        type="text"
                        id="firstName"
                        required=true
                        value={props.first_name.clone()}
                        oninput={text_input_handler(&props.on_first_name_change)}
                    />
                </div>
                <div class="form-group">
                    <label for="lastName">{"Achternaam"}</label>
                    <input
                        type="text"
                        id="lastName"
                        required=true
                        value={props.last_name.clone()}
                        oninput={text_input_handler(&props.on_last_name_change)}
                    />
                </div>
            </div>

            <div class="form-group">
                <label for="email">{"E-mailadres"}</label>
                <input
                    type="email"
                    id="email"
                    required=true
                    placeholder="naam@voorbeeld.nl"
                    value={props.email.clone()}
                    oninput={text_input_handler(&props.on_email_change)}
                />
            </div>

            <div class="form-group">
                <label for="address">{"Adres"}</label>
                <input
                    type="text"
                    id="address"
                    required=true
                    value={props.address.clone()}
                    oninput={text_input_handler(&props.on_address_change)}
                />
            </div>

            <div class="form-group">
                <label for="city">{"Woonplaats"}</label>
                <input
                    type="text"
                    id="city"
                    required=true
                    value={props.city.clone()}
                    oninput={text_input_handler(&props.on_city_change)}
                />
            </div>

            <div class="form-group">
                <label>{"Foto's van de klus (optioneel)"}</label>
                <PhotoUpload
                    photos={props.photos.clone()}
                    on_add={props.on_photo_add.clone()}
                    on_remove={props.on_photo_remove.clone()}
                />
            </div>

            <div class="form-group privacy-group">
                <label class="privacy-label">
                    <input
                        type="checkbox"
                        id="privacyPolicy"
                        checked={props.privacy_accepted}
                        onchange={on_privacy_change}
                    />
                    {"Ik ga akkoord met het privacybeleid"}
                </label>
            </div>

            {if let Some(error) = &props.error {
                html! { <div class="error-message">{error}</div> }
            } else {
                html! {}
            }}
        </div>
    }
}
