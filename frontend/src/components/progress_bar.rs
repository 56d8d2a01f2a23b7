use yew::prelude::*;

const STEP_LABELS: [&str; 4] = ["Postcode", "Datum & tijd", "De klus", "Contact"];

#[derive(Properties, PartialEq)]
pub struct ProgressBarProps {
    pub current_step: u32,
    pub total_steps: u32,
    pub completed_steps: Vec<u32>,
    /// Fill width of the bar, 0.0..=100.0
    pub percent: f64,
    /// Clicking a completed step jumps back to it
    pub on_jump: Callback<u32>,
}

#[function_component(ProgressBar)]
pub fn progress_bar(props: &ProgressBarProps) -> Html {
    html! {
        <div class="progress-container">
            <div class="progress-bar">
                <div class="progress" style={format!("width: {}%", props.percent)}></div>
            </div>

            <div class="progress-steps">
                {for (1..=props.total_steps).map(|step| {
                    let is_active = step == props.current_step;
                    let is_completed = props.completed_steps.contains(&step) && step < props.current_step;
                    let on_jump = props.on_jump.clone();

                    html! {
                        <div
                            class={classes!(
                                "progress-step",
                                is_active.then(|| "active"),
                                is_completed.then(|| "completed"),
                            )}
                            onclick={Callback::from(move |_: MouseEvent| on_jump.emit(step))}
                        >
                            <div class="step-circle">
                                {if is_completed {
                                    html! { {"✓"} }
                                } else {
                                    html! { {step} }
                                }}
                            </div>
                            <div class="step-label">
                                {STEP_LABELS.get((step - 1) as usize).copied().unwrap_or("")}
                            </div>
                        </div>
                    }
                })}
            </div>
        </div>
    }
}
