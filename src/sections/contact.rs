use gloo_timers::callback::Timeout;
use web_sys::{window, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::config;
use crate::content::INVOLVEMENT_OPTIONS;
use crate::forms::{
    self, ContactForm, FieldErrors, Subject, SubmitStatus, CONTACT_RESET_MS, SEND_SIMULATION_MS,
};

/// Validation runs on every edit once a submit has been attempted, so error
/// messages clear as soon as the field is fixed.
fn revalidate(errors: &UseStateHandle<FieldErrors>, attempted: bool, next: &ContactForm) {
    if attempted {
        errors.set(forms::validate(next).err().unwrap_or_default());
    }
}

fn field_error(error: Option<&'static str>) -> Html {
    match error {
        Some(text) => html! { <p class="field-error">{ text }</p> },
        None => html! {},
    }
}

fn involvement_subject(title: &str) -> Option<Subject> {
    match title {
        "Sponsor" => Some(Subject::Sponsorship),
        "Partner" => Some(Subject::Partnership),
        "Judge" => Some(Subject::Judging),
        "Speak" => Some(Subject::Speaking),
        _ => None,
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let form = use_state(ContactForm::default);
    let errors = use_state(FieldErrors::default);
    let attempted = use_state(|| false);
    let status = use_state(SubmitStatus::default);
    let pending = use_mut_ref(|| None::<Timeout>);

    // Dropping the handle cancels whatever simulation step is still queued.
    {
        let pending = pending.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    pending.borrow_mut().take();
                }
            },
            (),
        );
    }

    let oninput_name = {
        let form = form.clone();
        let errors = errors.clone();
        let attempted = attempted.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.name = input.value();
            revalidate(&errors, *attempted, &next);
            form.set(next);
        })
    };

    let oninput_email = {
        let form = form.clone();
        let errors = errors.clone();
        let attempted = attempted.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.email = input.value();
            revalidate(&errors, *attempted, &next);
            form.set(next);
        })
    };

    let oninput_organization = {
        let form = form.clone();
        let errors = errors.clone();
        let attempted = attempted.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.organization = input.value();
            revalidate(&errors, *attempted, &next);
            form.set(next);
        })
    };

    let onchange_subject = {
        let form = form.clone();
        let errors = errors.clone();
        let attempted = attempted.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.subject = select.value();
            revalidate(&errors, *attempted, &next);
            form.set(next);
        })
    };

    let oninput_message = {
        let form = form.clone();
        let errors = errors.clone();
        let attempted = attempted.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.message = input.value();
            revalidate(&errors, *attempted, &next);
            form.set(next);
        })
    };

    let onsubmit = {
        let form = form.clone();
        let errors = errors.clone();
        let attempted = attempted.clone();
        let status = status.clone();
        let pending = pending.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if status.is_busy() {
                return;
            }
            attempted.set(true);

            match forms::validate(&form) {
                Err(field_errors) => {
                    errors.set(field_errors);
                }
                Ok(message) => {
                    errors.set(FieldErrors::default());
                    status.set(SubmitStatus::Sending);

                    let form_reset = form.clone();
                    let status_after = status.clone();
                    let pending_inner = pending.clone();
                    let send = Timeout::new(SEND_SIMULATION_MS, move || {
                        let mailto = forms::mailto_url(
                            config::get_contact_email(),
                            &forms::contact_subject(&message),
                            &forms::contact_body(&message),
                        );
                        let opened = window()
                            .and_then(|w| w.location().set_href(&mailto).ok())
                            .is_some();
                        if opened {
                            status_after.set(SubmitStatus::Sent);
                            form_reset.set(ContactForm::default());
                        } else {
                            gloo_console::error!("Failed to open mail client");
                            status_after.set(SubmitStatus::Failed);
                        }
                        let status_reset = status_after.clone();
                        let reset = Timeout::new(CONTACT_RESET_MS, move || {
                            status_reset.set(SubmitStatus::Idle);
                        });
                        *pending_inner.borrow_mut() = Some(reset);
                    });
                    *pending.borrow_mut() = Some(send);
                }
            }
        })
    };

    let submit_label = match *status {
        SubmitStatus::Idle | SubmitStatus::Failed => "Send Message",
        SubmitStatus::Sending => "Sending...",
        SubmitStatus::Sent => "Message Sent! ✓",
    };

    html! {
        <section id="contact" class="section">
            <div class="section-inner">
                <Reveal>
                    <div class="section-header">
                        <span class="section-tag">{"Get in Touch"}</span>
                        <h2 class="section-title">
                            {"Contact "}<span class="text-gradient">{"Us"}</span>
                        </h2>
                        <p class="section-subtitle">
                            {"Questions about sponsorship, partnership, or anything else? We'd love to hear from you."}
                        </p>
                    </div>
                </Reveal>

                <Reveal>
                    <div class="contact-layout">
                        <form class="glass-card contact-form" onsubmit={onsubmit}>
                            <div class="form-row">
                                <div class="form-field">
                                    <label for="contact-name">{"Name"}</label>
                                    <input
                                        id="contact-name"
                                        type="text"
                                        placeholder="Your name"
                                        value={form.name.clone()}
                                        oninput={oninput_name}
                                    />
                                    { field_error(errors.name) }
                                </div>
                                <div class="form-field">
                                    <label for="contact-email">{"Email"}</label>
                                    <input
                                        id="contact-email"
                                        type="email"
                                        placeholder="you@company.com"
                                        value={form.email.clone()}
                                        oninput={oninput_email}
                                    />
                                    { field_error(errors.email) }
                                </div>
                            </div>

                            <div class="form-row">
                                <div class="form-field">
                                    <label for="contact-organization">{"Organization"}</label>
                                    <input
                                        id="contact-organization"
                                        type="text"
                                        placeholder="Company or school"
                                        value={form.organization.clone()}
                                        oninput={oninput_organization}
                                    />
                                    { field_error(errors.organization) }
                                </div>
                                <div class="form-field">
                                    <label for="contact-subject">{"Subject"}</label>
                                    <select id="contact-subject" onchange={onchange_subject}>
                                        <option value="" selected={form.subject.is_empty()}>
                                            {"Select a subject"}
                                        </option>
                                        {
                                            for Subject::ALL.iter().map(|subject| html! {
                                                <option
                                                    value={subject.value()}
                                                    selected={form.subject == subject.value()}
                                                >
                                                    { subject.label() }
                                                </option>
                                            })
                                        }
                                    </select>
                                    { field_error(errors.subject) }
                                </div>
                            </div>

                            <div class="form-field">
                                <label for="contact-message">{"Message"}</label>
                                <textarea
                                    id="contact-message"
                                    rows="5"
                                    placeholder="Tell us what's on your mind..."
                                    value={form.message.clone()}
                                    oninput={oninput_message}
                                />
                                { field_error(errors.message) }
                            </div>

                            <button
                                type="submit"
                                class="btn btn-primary contact-submit"
                                disabled={status.is_busy()}
                            >
                                { submit_label }
                            </button>

                            {
                                match *status {
                                    SubmitStatus::Sent => html! {
                                        <p class="form-note success">
                                            {"Your email client has been opened. We'll get back to you within 24 hours."}
                                        </p>
                                    },
                                    SubmitStatus::Failed => html! {
                                        <p class="form-note failure">
                                            {"Something went wrong. Email us directly at "}
                                            { config::get_contact_email() }
                                        </p>
                                    },
                                    _ => html! {},
                                }
                            }
                        </form>

                        <div class="contact-side">
                            <div class="glass-card contact-quick">
                                <h3>{"Quick Contact"}</h3>
                                <p>
                                    {"✉️ "}
                                    <a href={forms::mailto_url(
                                        config::get_contact_email(),
                                        "MoneyHacks Inquiry",
                                        "",
                                    )}>
                                        { config::get_contact_email() }
                                    </a>
                                </p>
                                <p class="contact-response">{"⏱️ We typically respond within 24 hours"}</p>
                            </div>

                            <div class="glass-card contact-involve">
                                <h3>{"Get Involved"}</h3>
                                <div class="involve-grid">
                                    {
                                        for INVOLVEMENT_OPTIONS.iter().map(|option| {
                                            let onclick = {
                                                let form = form.clone();
                                                let errors = errors.clone();
                                                let attempted = attempted.clone();
                                                let title = option.title;
                                                Callback::from(move |_| {
                                                    if let Some(subject) = involvement_subject(title) {
                                                        let mut next = (*form).clone();
                                                        next.subject = subject.value().to_string();
                                                        revalidate(&errors, *attempted, &next);
                                                        form.set(next);
                                                    }
                                                })
                                            };
                                            html! {
                                                <button type="button" class="involve-card" {onclick}>
                                                    <span class="involve-icon">{ option.icon }</span>
                                                    <span class="involve-title">{ option.title }</span>
                                                    <span class="involve-desc">{ option.description }</span>
                                                </button>
                                            }
                                        })
                                    }
                                </div>
                            </div>
                        </div>
                    </div>
                </Reveal>
            </div>

            <style>
                {r#"
                .contact-layout {
                    display: grid;
                    grid-template-columns: 3fr 2fr;
                    gap: 1.75rem;
                    margin-top: 3rem;
                    align-items: start;
                }

                .contact-form {
                    padding: 2rem;
                }

                .form-row {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1.25rem;
                }

                .form-field {
                    margin-bottom: 1.25rem;
                    display: flex;
                    flex-direction: column;
                }

                .form-field label {
                    color: #cbd5e1;
                    font-size: 0.9rem;
                    margin-bottom: 0.4rem;
                }

                .form-field input,
                .form-field select,
                .form-field textarea {
                    padding: 0.8rem 1rem;
                    border-radius: 10px;
                    border: 1px solid rgba(148, 163, 184, 0.25);
                    background: rgba(15, 23, 42, 0.6);
                    color: #f1f5f9;
                    font-size: 1rem;
                    font-family: inherit;
                }

                .form-field input:focus,
                .form-field select:focus,
                .form-field textarea:focus {
                    outline: none;
                    border-color: rgba(16, 185, 129, 0.5);
                }

                .form-field textarea {
                    resize: vertical;
                }

                .field-error {
                    color: #f87171;
                    font-size: 0.85rem;
                    margin: 0.4rem 0 0;
                }

                .contact-submit {
                    width: 100%;
                    margin-top: 0.5rem;
                }

                .form-note {
                    margin: 1rem 0 0;
                    text-align: center;
                    font-size: 0.95rem;
                }

                .form-note.success {
                    color: #6ee7b7;
                }

                .form-note.failure {
                    color: #f87171;
                }

                .contact-side {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }

                .contact-quick,
                .contact-involve {
                    padding: 1.75rem;
                }

                .contact-quick h3,
                .contact-involve h3 {
                    color: #f1f5f9;
                    margin: 0 0 1rem;
                }

                .contact-quick p {
                    color: #94a3b8;
                    margin: 0 0 0.6rem;
                }

                .contact-quick a {
                    color: #38bdf8;
                    text-decoration: none;
                }

                .contact-response {
                    font-size: 0.9rem;
                }

                .involve-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 0.75rem;
                }

                .involve-card {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 0.25rem;
                    padding: 1rem 0.75rem;
                    border-radius: 12px;
                    border: 1px solid rgba(148, 163, 184, 0.2);
                    background: rgba(15, 23, 42, 0.55);
                    cursor: pointer;
                    transition: border-color 0.25s ease;
                }

                .involve-card:hover {
                    border-color: rgba(16, 185, 129, 0.45);
                }

                .involve-icon {
                    font-size: 1.4rem;
                }

                .involve-title {
                    color: #e2e8f0;
                    font-weight: 600;
                }

                .involve-desc {
                    color: #64748b;
                    font-size: 0.8rem;
                }

                @media (max-width: 900px) {
                    .contact-layout {
                        grid-template-columns: 1fr;
                    }

                    .form-row {
                        grid-template-columns: 1fr;
                        gap: 0;
                    }
                }
                "#}
            </style>
        </section>
    }
}
