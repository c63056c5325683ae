use gloo_timers::callback::Timeout;
use log::warn;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew::AttrValue;

use crate::actions::{dispatch, BrowserEffects, Intent};
use crate::config;
use crate::contact::machine::{ContactForm, SubmissionState, SubmitOutcome};
use crate::contact::transport::{deliver, TransportHandle};
use crate::contact::validation::Field;

/// `(name, value)` of the input, textarea or select that fired the event.
fn named_value(e: &Event) -> Option<(String, String)> {
    if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
        return Some((input.name(), input.value()));
    }
    if let Some(area) = e.target_dyn_into::<HtmlTextAreaElement>() {
        return Some((area.name(), area.value()));
    }
    e.target_dyn_into::<HtmlSelectElement>()
        .map(|select| (select.name(), select.value()))
}

/// `(value, label)` pairs for the service select. The empty value is the placeholder.
pub static SERVICE_OPTIONS: [(&str, &str); 8] = [
    ("", "Välj tjänst"),
    ("plattsattning", "Plattsättning"),
    ("tradgardsanlaggning", "Trädgårdsanläggning"),
    ("murar", "Murar & Stödmurar"),
    ("tradgardsskotsel", "Trädgårdsskötsel"),
    ("dranering", "Dränering"),
    ("belysning", "Trädgårdsbelysning"),
    ("annat", "Annat"),
];

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    #[prop_or_default]
    pub on_submit_success: Option<Callback<()>>,
    /// Where validated forms are sent. Defaults to the simulated transport.
    #[prop_or_default]
    pub transport: Option<TransportHandle>,
}

#[function_component(Contact)]
pub fn contact(props: &ContactProps) -> Html {
    let form = use_mut_ref(ContactForm::new);
    let dismiss_timer = use_mut_ref(|| None::<Timeout>);
    let rerender = use_force_update();

    // Teardown: later transport results are ignored and the banner timer is cancelled.
    {
        let form = form.clone();
        let dismiss_timer = dismiss_timer.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    form.borrow_mut().detach();
                    dismiss_timer.borrow_mut().take();
                }
            },
            (),
        );
    }

    // One handler for every input, keyed by the element's `name`.
    let on_change = {
        let form = form.clone();
        let rerender = rerender.clone();
        Callback::from(move |e: Event| {
            let Some((name, value)) = named_value(&e) else {
                return;
            };
            match form.borrow_mut().handle_named_change(&name, value) {
                Ok(true) => rerender.force_update(),
                Ok(false) => {}
                Err(err) => warn!("Ignoring input: {}", err),
            }
        })
    };
    let on_input = on_change.reform(|e: InputEvent| e.into());

    let onsubmit = {
        let form = form.clone();
        let dismiss_timer = dismiss_timer.clone();
        let rerender = rerender.clone();
        let transport = props.transport.clone().unwrap_or_default();
        let on_success = props.on_submit_success.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let outcome = form.borrow_mut().submit();
            rerender.force_update();
            let ticket = match outcome {
                SubmitOutcome::Started(ticket) => ticket,
                SubmitOutcome::Rejected | SubmitOutcome::Busy => return,
            };
            // A new submission supersedes any banner still waiting to clear.
            dismiss_timer.borrow_mut().take();

            let form = form.clone();
            let dismiss_timer = dismiss_timer.clone();
            let rerender = rerender.clone();
            let transport = transport.clone();
            let on_success = on_success.clone();
            spawn_local(async move {
                let Some(completion) = deliver(&form, &transport, ticket).await else {
                    return;
                };
                if completion.succeeded {
                    dispatch(on_success.as_ref(), (), Intent::SubmitSucceeded, &BrowserEffects);
                }
                rerender.force_update();

                let ticket = completion.dismiss;
                let timer = {
                    let form = form.clone();
                    Timeout::new(ticket.delay_ms(), move || {
                        if form.borrow_mut().dismiss(ticket) {
                            rerender.force_update();
                        }
                    })
                };
                *dismiss_timer.borrow_mut() = Some(timer);
            });
        })
    };

    // Option `selected` only sets the default, so keep the live selection in sync after resets.
    let service_ref = use_node_ref();
    {
        let service_ref = service_ref.clone();
        let service = form.borrow().fields().service.clone();
        use_effect(move || {
            if let Some(select) = service_ref.cast::<HtmlSelectElement>() {
                select.set_value(&service);
            }
            || ()
        });
    }

    let snapshot = form.borrow();
    let fields = snapshot.fields();
    let errors = snapshot.errors();
    let disabled = snapshot.inputs_disabled();
    let state = snapshot.state();

    let input_class = |field: Field, base: &'static str| classes!(base, errors.contains(field).then_some("error"));
    let error_id = |field: Field| errors.contains(field).then(|| AttrValue::from(format!("{}-error", field)));
    let error_text = |field: Field| match errors.message(field) {
        Some(message) => html! {
            <span class="form-error" id={format!("{}-error", field)} role="alert">{message}</span>
        },
        None => html! {},
    };

    html! {
        <div class="contact">
            <style>
                {r#"
                .contact-container { max-width: 1200px; margin: 0 auto; padding: 6rem 1.5rem; }
                .contact-header { text-align: center; margin-bottom: 3rem; }
                .contact-label { color: #2f7a3f; font-weight: 600; text-transform: uppercase; }
                .contact-content { display: grid; grid-template-columns: 3fr 2fr; gap: 2.5rem; }
                .contact-form { background: #fff; border-radius: 16px; padding: 2rem; box-shadow: 0 8px 24px rgba(0, 0, 0, 0.06); }
                .form-row { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; }
                .form-group { display: flex; flex-direction: column; margin-bottom: 1.25rem; }
                .form-label { font-weight: 600; margin-bottom: 0.4rem; }
                .required { color: #c0392b; }
                .form-input, .form-select, .form-textarea {
                    border: 1px solid #cfd8cc;
                    border-radius: 8px;
                    padding: 0.75rem;
                    font-size: 1rem;
                    font-family: inherit;
                }
                .form-input.error, .form-select.error, .form-textarea.error { border-color: #c0392b; }
                .form-error { color: #c0392b; font-size: 0.85rem; margin-top: 0.3rem; }
                .form-success, .form-error-message {
                    display: flex;
                    gap: 0.75rem;
                    align-items: center;
                    border-radius: 8px;
                    padding: 1rem;
                    margin-bottom: 1rem;
                }
                .form-success { background: #e6f4e3; color: #1f4d2b; }
                .form-error-message { background: #fbe9e7; color: #8e2a1e; }
                .form-submit {
                    width: 100%;
                    background: #2f7a3f;
                    color: #fff;
                    border: none;
                    border-radius: 999px;
                    padding: 1rem;
                    font-size: 1rem;
                    cursor: pointer;
                }
                .form-submit:disabled { opacity: 0.7; cursor: wait; }
                .spinner {
                    display: inline-block;
                    width: 16px;
                    height: 16px;
                    margin-right: 0.5rem;
                    border: 3px solid rgba(255, 255, 255, 0.3);
                    border-radius: 50%;
                    border-top-color: #fff;
                    animation: spin 1s ease-in-out infinite;
                }
                @keyframes spin { to { transform: rotate(360deg); } }
                .contact-info-card { background: #1f4d2b; color: #fff; border-radius: 16px; padding: 2rem; }
                .contact-info-item { display: flex; gap: 1rem; margin-bottom: 1rem; }
                .contact-info-link { color: #b9e28c; }
                .contact-cta-button {
                    display: inline-block;
                    margin-top: 1rem;
                    background: #fff;
                    color: #1f4d2b;
                    border-radius: 999px;
                    padding: 0.8rem 1.4rem;
                    text-decoration: none;
                    font-weight: 600;
                }
                @media (max-width: 900px) {
                    .contact-content, .form-row { grid-template-columns: 1fr; }
                }
                "#}
            </style>
            <div class="contact-container">
                <div class="contact-header">
                    <span class="contact-label">{"Kontakta Oss"}</span>
                    <h2 class="contact-title">{"Få en Kostnadsfri Offert"}</h2>
                    <p class="contact-description">
                        {"Berätta om ditt projekt så återkommer vi med en skräddarsydd offert. \
                          Vi erbjuder kostnadsfri rådgivning och platsbesök."}
                    </p>
                </div>

                <div class="contact-content">
                    <div class="contact-form-wrapper">
                        <form class="contact-form" {onsubmit} novalidate={true}>
                            <div class="form-group">
                                <label for="name" class="form-label">
                                    {"Namn "}<span class="required">{"*"}</span>
                                </label>
                                <input
                                    type="text"
                                    id="name"
                                    name="name"
                                    class={input_class(Field::Name, "form-input")}
                                    placeholder="Ditt fullständiga namn"
                                    value={fields.name.clone()}
                                    oninput={on_input.clone()}
                                    {disabled}
                                    aria-required="true"
                                    aria-invalid={errors.contains(Field::Name).to_string()}
                                    aria-describedby={error_id(Field::Name)}
                                />
                                { error_text(Field::Name) }
                            </div>

                            <div class="form-row">
                                <div class="form-group">
                                    <label for="email" class="form-label">
                                        {"E-post "}<span class="required">{"*"}</span>
                                    </label>
                                    <input
                                        type="email"
                                        id="email"
                                        name="email"
                                        class={input_class(Field::Email, "form-input")}
                                        placeholder="din@email.se"
                                        value={fields.email.clone()}
                                        oninput={on_input.clone()}
                                        {disabled}
                                        aria-required="true"
                                        aria-invalid={errors.contains(Field::Email).to_string()}
                                        aria-describedby={error_id(Field::Email)}
                                    />
                                    { error_text(Field::Email) }
                                </div>

                                <div class="form-group">
                                    <label for="phone" class="form-label">
                                        {"Telefon "}<span class="required">{"*"}</span>
                                    </label>
                                    <input
                                        type="tel"
                                        id="phone"
                                        name="phone"
                                        class={input_class(Field::Phone, "form-input")}
                                        placeholder={config::PHONE_SHORT}
                                        value={fields.phone.clone()}
                                        oninput={on_input.clone()}
                                        {disabled}
                                        aria-required="true"
                                        aria-invalid={errors.contains(Field::Phone).to_string()}
                                        aria-describedby={error_id(Field::Phone)}
                                    />
                                    { error_text(Field::Phone) }
                                </div>
                            </div>

                            <div class="form-group">
                                <label for="service" class="form-label">
                                    {"Tjänst "}<span class="required">{"*"}</span>
                                </label>
                                <select
                                    id="service"
                                    name="service"
                                    ref={service_ref}
                                    class={input_class(Field::Service, "form-select")}
                                    onchange={on_change}
                                    {disabled}
                                    aria-required="true"
                                    aria-invalid={errors.contains(Field::Service).to_string()}
                                    aria-describedby={error_id(Field::Service)}
                                >
                                    { for SERVICE_OPTIONS.iter().map(|(value, label)| html! {
                                        <option key={*value} value={*value} selected={fields.service == *value}>
                                            {*label}
                                        </option>
                                    }) }
                                </select>
                                { error_text(Field::Service) }
                            </div>

                            <div class="form-group">
                                <label for="message" class="form-label">
                                    {"Meddelande "}<span class="required">{"*"}</span>
                                </label>
                                <textarea
                                    id="message"
                                    name="message"
                                    class={input_class(Field::Message, "form-textarea")}
                                    placeholder="Beskriv ditt projekt och vad du behöver hjälp med..."
                                    rows="6"
                                    value={fields.message.clone()}
                                    oninput={on_input}
                                    {disabled}
                                    aria-required="true"
                                    aria-invalid={errors.contains(Field::Message).to_string()}
                                    aria-describedby={error_id(Field::Message)}
                                />
                                { error_text(Field::Message) }
                            </div>

                            if state == SubmissionState::Success {
                                <div class="form-success" role="alert">
                                    <span class="success-icon">{"✓"}</span>
                                    <p>{"Tack för ditt meddelande! Vi återkommer inom 24 timmar."}</p>
                                </div>
                            }
                            if state == SubmissionState::Error {
                                <div class="form-error-message" role="alert">
                                    <span class="error-icon">{"✕"}</span>
                                    <p>{"Något gick fel. Vänligen försök igen eller ring oss direkt."}</p>
                                </div>
                            }

                            <button type="submit" class="form-submit" {disabled} aria-busy={disabled.to_string()}>
                                if disabled {
                                    <>
                                        <span class="spinner" aria-hidden="true"></span>
                                        {"Skickar..."}
                                    </>
                                } else {
                                    <>
                                        <span class="submit-icon">{"📧"}</span>
                                        {"Skicka Förfrågan"}
                                    </>
                                }
                            </button>
                        </form>
                    </div>

                    <div class="contact-info-wrapper">
                        <div class="contact-info-card">
                            <h3 class="contact-info-title">{"Kontaktinformation"}</h3>
                            <p class="contact-info-text">
                                {"Vi finns här för att hjälpa dig med alla dina trädgårdsbehov. \
                                  Kontakta oss idag för en kostnadsfri konsultation."}
                            </p>
                            <div class="contact-info-list">
                                <div class="contact-info-item">
                                    <div class="contact-info-icon">{"📞"}</div>
                                    <div class="contact-info-content">
                                        <h4 class="contact-info-label">{"Telefon"}</h4>
                                        <a href={config::PHONE_HREF} class="contact-info-link">{config::PHONE_DISPLAY}</a>
                                    </div>
                                </div>
                                <div class="contact-info-item">
                                    <div class="contact-info-icon">{"✉️"}</div>
                                    <div class="contact-info-content">
                                        <h4 class="contact-info-label">{"E-post"}</h4>
                                        <a href={config::EMAIL_HREF} class="contact-info-link">{config::EMAIL}</a>
                                    </div>
                                </div>
                                <div class="contact-info-item">
                                    <div class="contact-info-icon">{"📍"}</div>
                                    <div class="contact-info-content">
                                        <h4 class="contact-info-label">{"Adress"}</h4>
                                        <p class="contact-info-value">{config::ADDRESS}</p>
                                    </div>
                                </div>
                                <div class="contact-info-item">
                                    <div class="contact-info-icon">{"🕐"}</div>
                                    <div class="contact-info-content">
                                        <h4 class="contact-info-label">{"Öppettider"}</h4>
                                        <p class="contact-info-value">{"Mån-Fre: 07:00-17:00"}</p>
                                    </div>
                                </div>
                            </div>

                            <div class="contact-cta">
                                <h4 class="contact-cta-title">{"Akut trädgårdshjälp?"}</h4>
                                <p class="contact-cta-text">{"Ring oss direkt för snabb service och rådgivning."}</p>
                                <a href={config::PHONE_HREF} class="contact-cta-button">
                                    <span class="cta-icon">{"📞"}</span>
                                    {format!("Ring Nu: {}", config::PHONE_DISPLAY)}
                                </a>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
