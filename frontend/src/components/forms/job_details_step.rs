use shared::duration_options;
use web_sys::{HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

const PROJECT_TYPES: [&str; 6] = [
    "Montage",
    "Reparatie",
    "Schilderen",
    "Tuinklussen",
    "Verhuizen",
    "Overig",
];

#[derive(Properties, PartialEq)]
pub struct JobDetailsStepProps {
    pub project_type: String,
    pub job_description: String,
    pub duration: String,
    pub on_project_type_change: Callback<String>,
    pub on_job_description_change: Callback<String>,
    pub on_duration_change: Callback<String>,
}

#[function_component(JobDetailsStep)]
pub fn job_details_step(props: &JobDetailsStepProps) -> Html {
    let on_project_type_change = {
        let on_change = props.on_project_type_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_change.emit(select.value());
        })
    };

    let on_job_description_change = {
        let on_change = props.on_job_description_change.clone();
        Callback::from(move |e: InputEvent| {
            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
            on_change.emit(textarea.value());
        })
    };

    let on_duration_change = {
        let on_change = props.on_duration_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_change.emit(select.value());
        })
    };

    html! {
        <div class="step-content">
            <h2>{"Wat moet er gebeuren?"}</h2>

            <div class="form-group">
                <label for="projectType">{"Type klus"}</label>
                <select id="projectType" onchange={on_project_type_change}>
                    <option value="" disabled=true selected={props.project_type.is_empty()}>
                        {"Kies een type klus..."}
                    </option>
                    {for PROJECT_TYPES.iter().map(|project_type| html! {
                        <option
                            value={*project_type}
                            selected={props.project_type == *project_type}
                        >
                            {project_type}
                        </option>
                    })}
                </select>
            </div>

            <div class="form-group">
                <label for="jobDescription">{"Omschrijving"}</label>
                <textarea
                    id="jobDescription"
                    rows="4"
                    placeholder="Beschrijf de klus zo duidelijk mogelijk..."
                    value={props.job_description.clone()}
                    oninput={on_job_description_change}
                />
            </div>

            <div class="form-group">
                <label for="duration">{"Geschatte duur"}</label>
                <select id="duration" onchange={on_duration_change}>
                    <option value="" disabled=true selected={props.duration.is_empty()}>
                        {"Kies aantal uur..."}
                    </option>
                    {for duration_options().iter().map(|option| {
                        let value = option.value.to_string();
                        html! {
                            <option value={value.clone()} selected={props.duration == value}>
                                {&option.label}
                            </option>
                        }
                    })}
                </select>
            </div>
        </div>
    }
}
