use gloo_timers::callback::Timeout;
use log::{debug, error};
use web_sys::{HtmlInputElement, HtmlSelectElement, KeyboardEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::analysis::{AnalysisResult, AnalyzerHandle, Gender, RiskLevel};
use crate::config;
use crate::wizard::{Step, Ticket, Wizard, WizardAction};

#[derive(Properties, PartialEq)]
pub struct WizardModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub analyzer: AnalyzerHandle,
}

#[function_component(WizardModal)]
pub fn wizard_modal(props: &WizardModalProps) -> Html {
    let wizard = use_reducer(Wizard::new);

    // Closing (or never having opened) always leaves an empty first step behind,
    // which also drops any pending analysis below.
    {
        let dispatcher = wizard.dispatcher();
        use_effect_with_deps(
            move |open: &bool| {
                if !*open {
                    dispatcher.dispatch(WizardAction::Reset);
                }
                || ()
            },
            props.open,
        );
    }

    // The delay timer lives exactly as long as its ticket is pending.
    {
        let dispatcher = wizard.dispatcher();
        let analyzer = props.analyzer.clone();
        let info = wizard.info().clone();
        use_effect_with_deps(
            move |pending: &Option<Ticket>| {
                let timer = pending.map(|ticket| {
                    Timeout::new(config::ANALYSIS_DELAY_MS, move || {
                        let outcome = analyzer.analyze(&info);
                        match &outcome {
                            Ok(result) => debug!(
                                "Analysis result: {}",
                                serde_json::to_string(result).unwrap_or_default()
                            ),
                            Err(err) => error!("Analysis failed: {}", err),
                        }
                        dispatcher.dispatch(WizardAction::Complete(ticket, outcome));
                    })
                });
                move || drop(timer)
            },
            wizard.pending(),
        );
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    {
        let on_close = props.on_close.clone();
        let open = props.open;
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if open && e.key() == "Escape" {
                on_close.emit(());
            }
        });
    }

    if !props.open {
        return html! {};
    }

    let body = match wizard.step() {
        Step::Demographics => render_demographics(&wizard),
        Step::Medicine => render_medicine(&wizard),
        Step::Analyzing => render_analyzing(),
        Step::Results => match wizard.result() {
            Some(result) => render_results(&wizard, result),
            None => html! {},
        },
    };

    html! {
        <div class="modal-overlay" onclick={close.clone()}>
            <style>
                {r#"
                    .modal-overlay {
                        position: fixed;
                        inset: 0;
                        z-index: 100;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: rgba(0, 0, 0, 0.7);
                        backdrop-filter: blur(4px);
                    }
                    .modal-content {
                        position: relative;
                        width: min(42rem, calc(100vw - 2rem));
                        max-height: 90vh;
                        overflow-y: auto;
                        padding: 2rem;
                        border-radius: 16px;
                    }
                    .modal-close {
                        position: absolute;
                        top: 1rem;
                        right: 1rem;
                        background: none;
                        border: none;
                        color: #9ca3af;
                        font-size: 1.5rem;
                        cursor: pointer;
                    }
                    .modal-close:hover {
                        color: #fff;
                    }
                    .modal-title {
                        text-align: center;
                        font-size: 1.5rem;
                        font-weight: 700;
                        margin: 0 0 1.5rem;
                    }
                    .steps {
                        display: flex;
                        justify-content: center;
                        gap: 1rem;
                        margin-bottom: 1.5rem;
                    }
                    .steps__dot {
                        width: 2rem;
                        height: 2rem;
                        border-radius: 50%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 0.875rem;
                        font-weight: 500;
                        background: rgba(255, 255, 255, 0.08);
                        color: #9ca3af;
                        transition: all 0.3s;
                    }
                    .steps__dot--reached {
                        background: #4facfe;
                        color: #0a0e1a;
                    }
                    .wizard-step {
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                        animation: fadeIn 0.4s ease-out;
                    }
                    .wizard-step__heading {
                        text-align: center;
                    }
                    .wizard-step__heading h3 {
                        margin: 0 0 0.5rem;
                        font-size: 1.25rem;
                    }
                    .wizard-step__heading p, .wizard-hint {
                        margin: 0;
                        color: #9ca3af;
                    }
                    .field {
                        display: flex;
                        flex-direction: column;
                        gap: 0.5rem;
                    }
                    .field input, .field select {
                        padding: 0.75rem;
                        border-radius: 8px;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        background: rgba(255, 255, 255, 0.05);
                        color: inherit;
                        font-size: 1rem;
                    }
                    .wizard-actions {
                        display: flex;
                        gap: 0.75rem;
                    }
                    .wizard-actions button {
                        flex: 1;
                    }
                    .wizard-error {
                        color: #ef4444;
                        font-size: 0.875rem;
                    }
                    .analyzing {
                        text-align: center;
                        padding: 3rem 0;
                    }
                    .analyzing__spinner {
                        width: 5rem;
                        height: 5rem;
                        margin: 0 auto 1.5rem;
                        border-radius: 50%;
                        border: 4px solid rgba(79, 172, 254, 0.25);
                        border-top-color: #4facfe;
                        animation: spin 1s linear infinite;
                    }
                    @keyframes spin {
                        to { transform: rotate(360deg); }
                    }
                    .analyzing__checks div {
                        font-size: 0.875rem;
                        color: #9ca3af;
                        animation: pulse 1.5s ease-in-out infinite;
                    }
                    @keyframes pulse {
                        50% { opacity: 0.4; }
                    }
                    .result-card h4 {
                        margin: 0 0 0.75rem;
                    }
                    .result-card ul {
                        list-style: none;
                        margin: 0;
                        padding: 0;
                    }
                    .result-card li {
                        display: flex;
                        gap: 0.5rem;
                        font-size: 0.875rem;
                        margin-bottom: 0.5rem;
                    }
                    .risk {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                    }
                    .risk__icon {
                        font-size: 1.25rem;
                    }
                    .risk p {
                        margin: 0;
                        font-size: 0.875rem;
                    }
                "#}
            </style>
            <div class="modal-content glass-strong" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                <button class="modal-close" onclick={close}>{"×"}</button>
                <h2 class="modal-title">{"Medicine Safety Analysis"}</h2>
                <div class="steps">
                    { for Step::ALL.iter().map(|step| html! {
                        <div class={classes!("steps__dot", step.reached_by(wizard.step()).then(|| "steps__dot--reached"))}>
                            {step.number().to_string()}
                        </div>
                    }) }
                </div>
                {body}
            </div>
        </div>
    }
}

fn render_demographics(wizard: &UseReducerHandle<Wizard>) -> Html {
    let info = wizard.info();

    let on_age = {
        let wizard = wizard.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            wizard.dispatch(WizardAction::SetAge(input.value()));
        })
    };

    let on_gender = {
        let wizard = wizard.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            wizard.dispatch(WizardAction::SetGender(Gender::from_value(&select.value())));
        })
    };

    let on_continue = {
        let wizard = wizard.clone();
        Callback::from(move |_: MouseEvent| wizard.dispatch(WizardAction::Continue))
    };

    html! {
        <div class="wizard-step">
            <div class="wizard-step__heading">
                <h3>{"Personal Information"}</h3>
                <p>{"Help us provide personalized analysis"}</p>
            </div>

            <label class="field">
                {"Age"}
                <input
                    id="age"
                    type="number"
                    placeholder="Enter your age"
                    value={info.age.clone()}
                    oninput={on_age}
                />
            </label>

            <label class="field">
                {"Gender"}
                <select id="gender" onchange={on_gender}>
                    <option value="" disabled=true selected={info.gender.is_none()}>{"Select gender"}</option>
                    { for Gender::ALL.iter().map(|gender| html! {
                        <option value={gender.value()} selected={info.gender == Some(*gender)}>
                            {gender.label()}
                        </option>
                    }) }
                </select>
            </label>

            <button class="btn-primary" onclick={on_continue} disabled={!wizard.can_continue()}>
                {"Continue"}
            </button>
        </div>
    }
}

fn render_medicine(wizard: &UseReducerHandle<Wizard>) -> Html {
    let on_medicine = {
        let wizard = wizard.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            wizard.dispatch(WizardAction::SetMedicine(input.value()));
        })
    };

    let on_back = {
        let wizard = wizard.clone();
        Callback::from(move |_: MouseEvent| wizard.dispatch(WizardAction::Back))
    };

    let on_analyze = {
        let wizard = wizard.clone();
        Callback::from(move |_: MouseEvent| wizard.dispatch(WizardAction::Analyze))
    };

    html! {
        <div class="wizard-step">
            <div class="wizard-step__heading">
                <h3>{"Medicine Information"}</h3>
                <p>{"Enter the medicine name or active ingredients"}</p>
            </div>

            <label class="field">
                {"Medicine Name"}
                <input
                    id="medicine"
                    placeholder="e.g., Tylenol Cold & Flu, Ibuprofen 200mg"
                    value={wizard.info().medicine.clone()}
                    oninput={on_medicine}
                />
            </label>

            if let Some(message) = wizard.error() {
                <p class="wizard-error">{message.to_string()}</p>
            }

            <div class="wizard-actions">
                <button class="btn-outline" onclick={on_back}>{"Back"}</button>
                <button class="btn-primary" onclick={on_analyze} disabled={!wizard.can_continue()}>
                    {"Analyze Medicine"}
                </button>
            </div>
        </div>
    }
}

fn render_analyzing() -> Html {
    html! {
        <div class="wizard-step analyzing">
            <div class="analyzing__spinner"></div>
            <div class="wizard-step__heading">
                <h3>{"Analyzing Medicine..."}</h3>
                <p>{"Processing composition and safety data"}</p>
            </div>
            <div class="analyzing__checks">
                <div>{"Checking active ingredients"}</div>
                <div style="animation-delay: 0.5s;">{"Analyzing potential interactions"}</div>
                <div style="animation-delay: 1s;">{"Generating safety recommendations"}</div>
            </div>
        </div>
    }
}

fn render_list(title: &str, marker: &str, tone: &str, items: &[String]) -> Html {
    html! {
        <div class="card glass result-card">
            <h4>{title.to_string()}</h4>
            <ul>
                { for items.iter().map(|item| html! {
                    <li>
                        <span class={tone.to_string()}>{marker.to_string()}</span>
                        <span>{item.clone()}</span>
                    </li>
                }) }
            </ul>
        </div>
    }
}

fn render_risk(level: RiskLevel) -> Html {
    html! {
        <div class="card glass result-card risk">
            <span class={classes!("risk__icon", level.color_class())}>{level.icon()}</span>
            <div>
                <h4>{"Risk Level"}</h4>
                <p class={level.color_class()}>{format!("{} Risk", level)}</p>
            </div>
        </div>
    }
}

fn render_results(wizard: &UseReducerHandle<Wizard>, result: &AnalysisResult) -> Html {
    let on_restart = {
        let wizard = wizard.clone();
        Callback::from(move |_: MouseEvent| wizard.dispatch(WizardAction::Reset))
    };

    html! {
        <div class="wizard-step">
            <div class="wizard-step__heading">
                <h3>{"Analysis Complete"}</h3>
                <p>{"Here's your medicine safety analysis"}</p>
            </div>

            { render_risk(result.risk_level) }
            { render_list("Active Ingredients", "●", "text-primary", &result.composition) }
            { render_list("Possible Side Effects", "⚠", "text-warning", &result.side_effects) }
            { render_list("Drug Interactions", "⚠", "text-danger", &result.interactions) }
            { render_list("Recommendations", "✓", "text-success", &result.recommendations) }

            <p class="wizard-hint">
                {"This is a demonstration. Always consult a pharmacist or doctor about your medication."}
            </p>

            <button class="btn-primary" onclick={on_restart}>{"Start New Analysis"}</button>
        </div>
    }
}
