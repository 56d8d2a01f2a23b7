use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ZipcodeStepProps {
    pub zipcode: String,
    /// Inline validation or availability message
    pub error: Option<String>,
    /// The availability check is in flight
    pub checking: bool,
    pub on_input: Callback<String>,
}

#[function_component(ZipcodeStep)]
pub fn zipcode_step(props: &ZipcodeStepProps) -> Html {
    let on_input = {
        let on_input = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_input.emit(input.value());
        })
    };

    html! {
        <div class="step-content">
            <h2>{"Waar moet de klus gebeuren?"}</h2>
            <p class="step-intro">{"Vul je postcode in, dan kijken we of Buddey bij jou in de buurt werkt."}</p>

            <div class="form-group">
                <label for="zipcode">{"Postcode"}</label>
                <input
                    type="text"
                    id="zipcode"
                    placeholder="1234 AB"
                    maxlength="7"
                    value={props.zipcode.clone()}
                    oninput={on_input}
                />
                <div class="error-message">
                    {props.error.clone().unwrap_or_default()}
                </div>
                {if props.checking {
                    html! { <div class="availability-checking">{"Beschikbaarheid controleren..."}</div> }
                } else {
                    html! {}
                }}
            </div>
        </div>
    }
}
