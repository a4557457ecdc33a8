use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::config;
use crate::content::{SPONSOR_BENEFITS, SPONSOR_TIERS};
use crate::forms;

#[function_component(Sponsors)]
pub fn sponsors() -> Html {
    let sponsor_mailto = forms::mailto_url(
        config::get_contact_email(),
        "MoneyHacks Sponsorship Inquiry",
        "Hi,\n\nI'm interested in sponsoring MoneyHacks. Please send more information about the available packages.",
    );

    html! {
        <section id="sponsors" class="section">
            <div class="section-inner">
                <Reveal>
                    <div class="section-header">
                        <span class="section-tag">{"Our Sponsors"}</span>
                        <h2 class="section-title">
                            {"Powered by "}<span class="text-gradient">{"Industry Leaders"}</span>
                        </h2>
                        <p class="section-subtitle">
                            {"MoneyHacks is made possible by companies that believe in the next generation of fintech builders."}
                        </p>
                    </div>
                </Reveal>

                {
                    for SPONSOR_TIERS
                        .iter()
                        .filter(|tier| !tier.sponsors.is_empty())
                        .map(|tier| html! {
                            <Reveal>
                                <div class="sponsor-tier">
                                    <h3 class="sponsor-tier-name">
                                        { tier.name }
                                        <span
                                            class="sponsor-tier-bar"
                                            style={format!("background: {}", tier.accent)}
                                        ></span>
                                    </h3>
                                    <div class="sponsor-row">
                                        {
                                            for tier.sponsors.iter().map(|sponsor| html! {
                                                <div class={classes!("glass-card", "sponsor-card", tier.card_class)}>
                                                    <span class="sponsor-logo">{ sponsor.logo }</span>
                                                    <span class="sponsor-name">{ sponsor.name }</span>
                                                </div>
                                            })
                                        }
                                    </div>
                                </div>
                            </Reveal>
                        })
                }

                <Reveal>
                    <div class="glass-card sponsor-pitch">
                        <h3>{"Why Sponsor MoneyHacks?"}</h3>
                        <div class="sponsor-benefits">
                            { for SPONSOR_BENEFITS.iter().map(|benefit| html! {
                                <span class="chip">{ *benefit }</span>
                            }) }
                        </div>
                        <a class="btn btn-primary" href={sponsor_mailto}>
                            {"Become a Sponsor"}
                        </a>
                        <p class="sponsor-pitch-email">
                            {"Email: "}{ config::get_contact_email() }
                        </p>
                    </div>
                </Reveal>
            </div>

            <style>
                {r#"
                .sponsor-tier {
                    margin-top: 2.5rem;
                    text-align: center;
                }

                .sponsor-tier-name {
                    display: inline-flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 0.4rem;
                    color: #e2e8f0;
                    font-size: 1.2rem;
                    margin-bottom: 1.25rem;
                }

                .sponsor-tier-bar {
                    width: 48px;
                    height: 3px;
                    border-radius: 2px;
                }

                .sponsor-row {
                    display: flex;
                    justify-content: center;
                    flex-wrap: wrap;
                    gap: 1.25rem;
                }

                .sponsor-card {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 0.5rem;
                }

                .sponsor-lg {
                    width: 240px;
                    height: 130px;
                    font-size: 1.2rem;
                }

                .sponsor-md {
                    width: 200px;
                    height: 110px;
                    font-size: 1.1rem;
                }

                .sponsor-sm {
                    width: 170px;
                    height: 95px;
                    font-size: 1rem;
                }

                .sponsor-xs {
                    width: 145px;
                    height: 85px;
                    font-size: 0.9rem;
                }

                .sponsor-logo {
                    font-size: 1.8em;
                }

                .sponsor-name {
                    color: #cbd5e1;
                    font-weight: 600;
                }

                .sponsor-pitch {
                    margin-top: 3.5rem;
                    padding: 2.25rem 2rem;
                    text-align: center;
                }

                .sponsor-pitch h3 {
                    color: #f1f5f9;
                    font-size: 1.4rem;
                    margin: 0 0 1.25rem;
                }

                .sponsor-benefits {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 0.65rem;
                    margin-bottom: 1.75rem;
                }

                .sponsor-pitch-email {
                    margin: 1rem 0 0;
                    color: #94a3b8;
                    font-size: 0.9rem;
                }
                "#}
            </style>
        </section>
    }
}
