use chrono::{Datelike, Utc};
use gloo_timers::callback::Timeout;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::JsFuture;
use web_sys::{window, HtmlInputElement};
use yew::prelude::*;
use yew_router::components::Link;

use crate::config;
use crate::content::{EVENT, NAV_ITEMS};
use crate::forms::{self, SubmitStatus, COPY_INDICATOR_MS, SEND_SIMULATION_MS, SUBSCRIBE_RESET_MS};
use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    let copied = use_state(|| false);
    let newsletter_email = use_state(String::new);
    let newsletter_error = use_state(|| None::<&'static str>);
    let newsletter_status = use_state(SubmitStatus::default);
    let pending = use_mut_ref(|| None::<Timeout>);

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

    let copy_email = {
        let copied = copied.clone();
        Callback::from(move |_| {
            let copied = copied.clone();
            if let Some(window) = window() {
                let clipboard = window.navigator().clipboard();
                wasm_bindgen_futures::spawn_local(async move {
                    if JsFuture::from(clipboard.write_text(config::get_contact_email()))
                        .await
                        .is_ok()
                    {
                        copied.set(true);
                        TimeoutFuture::new(COPY_INDICATOR_MS).await;
                        copied.set(false);
                    } else {
                        gloo_console::error!("Clipboard write failed");
                    }
                });
            }
        })
    };

    let oninput_newsletter = {
        let newsletter_email = newsletter_email.clone();
        let newsletter_error = newsletter_error.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            newsletter_email.set(input.value());
            newsletter_error.set(None);
        })
    };

    let onsubmit_newsletter = {
        let newsletter_email = newsletter_email.clone();
        let newsletter_error = newsletter_error.clone();
        let newsletter_status = newsletter_status.clone();
        let pending = pending.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if newsletter_status.is_busy() {
                return;
            }
            if !forms::is_valid_email(newsletter_email.trim()) {
                newsletter_error.set(Some("Please enter a valid email address"));
                return;
            }
            newsletter_error.set(None);
            newsletter_status.set(SubmitStatus::Sending);

            let email_reset = newsletter_email.clone();
            let status_after = newsletter_status.clone();
            let pending_inner = pending.clone();
            let send = Timeout::new(SEND_SIMULATION_MS, move || {
                status_after.set(SubmitStatus::Sent);
                email_reset.set(String::new());
                let status_reset = status_after.clone();
                let reset = Timeout::new(SUBSCRIBE_RESET_MS, move || {
                    status_reset.set(SubmitStatus::Idle);
                });
                *pending_inner.borrow_mut() = Some(reset);
            });
            *pending.borrow_mut() = Some(send);
        })
    };

    let subscribe_label = match *newsletter_status {
        SubmitStatus::Idle | SubmitStatus::Failed => "Subscribe",
        SubmitStatus::Sending => "Subscribing...",
        SubmitStatus::Sent => "Subscribed! ✓",
    };

    let year = Utc::now().year();

    html! {
        <footer class="footer">
            <div class="footer-inner">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <h3>{"Money"}<span class="text-gradient">{"Hacks"}</span></h3>
                        <p>{"The premier fintech hackathon by AI Valley and AI Collective Stanford Chapter."}</p>
                        <p class="footer-meta">{"📍 "}{ EVENT.location }</p>
                        <p class="footer-meta">{"📅 "}{ EVENT.date }</p>
                    </div>

                    <div class="footer-links">
                        <h4>{"Quick Links"}</h4>
                        {
                            for NAV_ITEMS.iter().take(5).map(|item| {
                                let anchor = item.anchor;
                                let onclick = Callback::from(move |_| {
                                    if let Some(window) = window() {
                                        if let Some(document) = window.document() {
                                            if let Some(element) = document.get_element_by_id(anchor) {
                                                element.scroll_into_view();
                                            }
                                        }
                                    }
                                });
                                html! {
                                    <button class="footer-link" {onclick}>{ item.label }</button>
                                }
                            })
                        }
                    </div>

                    <div class="footer-contact">
                        <h4>{"Contact"}</h4>
                        <p>{ config::get_contact_email() }</p>
                        <button class="footer-copy" onclick={copy_email}>
                            { if *copied { "✓ Copied!" } else { "📋 Copy Email" } }
                        </button>
                    </div>

                    <div class="footer-newsletter">
                        <h4>{"Stay Updated"}</h4>
                        <p>{"Get announcements about speakers, sponsors, and applications."}</p>
                        <form onsubmit={onsubmit_newsletter}>
                            <input
                                type="email"
                                placeholder="you@example.com"
                                value={(*newsletter_email).clone()}
                                oninput={oninput_newsletter}
                            />
                            <button
                                type="submit"
                                class="btn btn-primary"
                                disabled={newsletter_status.is_busy()}
                            >
                                { subscribe_label }
                            </button>
                        </form>
                        {
                            if let Some(error) = *newsletter_error {
                                html! { <p class="field-error">{ error }</p> }
                            } else {
                                html! {}
                            }
                        }
                    </div>
                </div>

                <div class="footer-bottom">
                    <span>{"© "}{ year }{" MoneyHacks. All rights reserved."}</span>
                    <span>
                        {"Organized by "}
                        <a
                            href={config::get_org_url()}
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            {"AI Valley"}
                        </a>
                        {" × AI Collective Stanford"}
                    </span>
                    <span class="footer-legal">
                        <Link<Route> to={Route::Privacy}>{"Privacy Policy"}</Link<Route>>
                        <Link<Route> to={Route::CodeOfConduct}>{"Code of Conduct"}</Link<Route>>
                    </span>
                </div>
            </div>

            <style>
                {r#"
                .footer {
                    border-top: 1px solid rgba(148, 163, 184, 0.15);
                    background: rgba(10, 15, 28, 0.9);
                    padding: 3.5rem 2rem 2rem;
                }

                .footer-inner {
                    max-width: 1100px;
                    margin: 0 auto;
                }

                .footer-grid {
                    display: grid;
                    grid-template-columns: 2fr 1fr 1fr 2fr;
                    gap: 2rem;
                    margin-bottom: 2.5rem;
                }

                .footer-brand h3 {
                    color: #f1f5f9;
                    font-size: 1.4rem;
                    margin: 0 0 0.6rem;
                }

                .footer-brand p {
                    color: #64748b;
                    line-height: 1.6;
                    margin: 0;
                    max-width: 260px;
                }

                .footer-brand .footer-meta {
                    margin-top: 0.6rem;
                    font-size: 0.9rem;
                }

                .footer h4 {
                    color: #e2e8f0;
                    margin: 0 0 0.9rem;
                    font-size: 1rem;
                }

                .footer-link {
                    display: block;
                    background: none;
                    border: none;
                    color: #94a3b8;
                    padding: 0.25rem 0;
                    cursor: pointer;
                    font-size: 0.95rem;
                    text-align: left;
                }

                .footer-link:hover {
                    color: #6ee7b7;
                }

                .footer-contact p {
                    color: #94a3b8;
                    margin: 0 0 0.75rem;
                }

                .footer-copy {
                    padding: 0.45rem 0.9rem;
                    border-radius: 8px;
                    border: 1px solid rgba(148, 163, 184, 0.25);
                    background: rgba(15, 23, 42, 0.6);
                    color: #cbd5e1;
                    font-size: 0.85rem;
                    cursor: pointer;
                }

                .footer-copy:hover {
                    border-color: rgba(16, 185, 129, 0.45);
                }

                .footer-newsletter p {
                    color: #64748b;
                    font-size: 0.9rem;
                    margin: 0 0 0.9rem;
                }

                .footer-newsletter form {
                    display: flex;
                    gap: 0.6rem;
                }

                .footer-newsletter input {
                    flex: 1;
                    padding: 0.6rem 0.9rem;
                    border-radius: 10px;
                    border: 1px solid rgba(148, 163, 184, 0.25);
                    background: rgba(15, 23, 42, 0.6);
                    color: #f1f5f9;
                    min-width: 0;
                }

                .footer-newsletter input:focus {
                    outline: none;
                    border-color: rgba(16, 185, 129, 0.5);
                }

                .footer-bottom {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    flex-wrap: wrap;
                    gap: 1rem;
                    padding-top: 1.75rem;
                    border-top: 1px solid rgba(148, 163, 184, 0.1);
                    color: #64748b;
                    font-size: 0.9rem;
                }

                .footer-bottom a {
                    color: #94a3b8;
                    text-decoration: none;
                }

                .footer-bottom a:hover {
                    color: #6ee7b7;
                }

                .footer-legal {
                    display: flex;
                    gap: 1.25rem;
                }

                @media (max-width: 900px) {
                    .footer-grid {
                        grid-template-columns: 1fr 1fr;
                    }
                }

                @media (max-width: 560px) {
                    .footer-grid {
                        grid-template-columns: 1fr;
                    }

                    .footer-bottom {
                        flex-direction: column;
                        text-align: center;
                    }
                }
                "#}
            </style>
        </footer>
    }
}
