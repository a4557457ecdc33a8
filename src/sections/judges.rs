use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::config;
use crate::content::{confirmed_judges, Judge, JUDGING_CRITERIA};
use crate::forms;

fn judge_card(judge: &'static Judge) -> Html {
    html! {
        <div class="glass-card judge-card">
            <h3>{ judge.name }</h3>
            <p class="judge-role">{ judge.title }{" · "}{ judge.company }</p>
            <p class="judge-bio">{ judge.bio }</p>
            <div class="judge-expertise">
                { for judge.expertise.iter().map(|area| html! {
                    <span class="chip">{ *area }</span>
                }) }
            </div>
            <div class="judge-links">
                {
                    if let Some(url) = judge.linkedin {
                        html! { <a href={url} target="_blank" rel="noopener noreferrer">{"LinkedIn"}</a> }
                    } else {
                        html! {}
                    }
                }
                {
                    if let Some(url) = judge.twitter {
                        html! { <a href={url} target="_blank" rel="noopener noreferrer">{"Twitter"}</a> }
                    } else {
                        html! {}
                    }
                }
            </div>
        </div>
    }
}

#[function_component(Judges)]
pub fn judges() -> Html {
    let judges: Vec<&'static Judge> = confirmed_judges().collect();

    let judging_mailto = forms::mailto_url(
        config::get_contact_email(),
        "MoneyHacks Judging Application",
        "Hi,\n\nI'd like to apply as a judge for MoneyHacks. Here's a bit about my background:",
    );

    html! {
        <section id="judges" class="section">
            <div class="section-inner">
                <Reveal>
                    <div class="section-header">
                        <span class="section-tag">{"Expert Panel"}</span>
                        <h2 class="section-title">
                            {"Meet the "}<span class="text-gradient">{"Judges"}</span>
                        </h2>
                        <p class="section-subtitle">
                            {"Industry leaders evaluating your projects and picking the winners."}
                        </p>
                    </div>
                </Reveal>

                <Reveal>
                    {
                        if judges.is_empty() {
                            html! {
                                <div class="glass-card judge-placeholder">
                                    <div class="judge-placeholder-icon">{"⚖️"}</div>
                                    <h3>{"Judges Being Confirmed"}</h3>
                                    <p>
                                        {"We're assembling an incredible panel of fintech leaders, VCs, and technical experts. Check back soon!"}
                                    </p>
                                </div>
                            }
                        } else {
                            html! {
                                <div class="judge-grid">
                                    { for judges.iter().map(|judge| judge_card(judge)) }
                                </div>
                            }
                        }
                    }
                </Reveal>

                <Reveal>
                    <div class="glass-card judge-cta">
                        <h3>{"Join the Judging Panel"}</h3>
                        <p>
                            {"Are you a fintech operator, investor, or technical leader? Help us pick the winning teams."}
                        </p>
                        <a class="btn btn-primary" href={judging_mailto}>
                            {"Apply to Be a Judge"}
                        </a>
                        <div class="judge-criteria">
                            {
                                for JUDGING_CRITERIA.iter().map(|criterion| html! {
                                    <div class="judge-criterion">
                                        <span class="judge-criterion-weight">
                                            { criterion.weight }{"%"}
                                        </span>
                                        <span class="judge-criterion-label">{ criterion.label }</span>
                                    </div>
                                })
                            }
                        </div>
                    </div>
                </Reveal>
            </div>

            <style>
                {r#"
                .judge-placeholder {
                    max-width: 520px;
                    margin: 3rem auto 0;
                    padding: 2.5rem 2rem;
                    text-align: center;
                }

                .judge-placeholder-icon {
                    font-size: 2.5rem;
                    margin-bottom: 1rem;
                }

                .judge-placeholder h3 {
                    color: #f1f5f9;
                    margin: 0 0 0.75rem;
                }

                .judge-placeholder p {
                    color: #94a3b8;
                    line-height: 1.6;
                    margin: 0;
                }

                .judge-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                    gap: 1.5rem;
                    margin-top: 3rem;
                }

                .judge-card {
                    padding: 1.75rem;
                }

                .judge-card h3 {
                    color: #f1f5f9;
                    margin: 0 0 0.35rem;
                }

                .judge-role {
                    color: #38bdf8;
                    font-size: 0.95rem;
                    margin-bottom: 0.75rem;
                }

                .judge-bio {
                    color: #94a3b8;
                    line-height: 1.6;
                    margin-bottom: 1rem;
                }

                .judge-expertise {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                    margin-bottom: 1rem;
                }

                .judge-links {
                    display: flex;
                    gap: 1rem;
                }

                .judge-links a {
                    color: #38bdf8;
                    text-decoration: none;
                    font-size: 0.9rem;
                }

                .judge-cta {
                    max-width: 720px;
                    margin: 3.5rem auto 0;
                    padding: 2.5rem 2rem;
                    text-align: center;
                }

                .judge-cta h3 {
                    color: #f1f5f9;
                    font-size: 1.5rem;
                    margin: 0 0 0.75rem;
                }

                .judge-cta > p {
                    color: #94a3b8;
                    line-height: 1.6;
                    margin-bottom: 1.5rem;
                }

                .judge-criteria {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(130px, 1fr));
                    gap: 1rem;
                    margin-top: 2rem;
                    padding-top: 1.75rem;
                    border-top: 1px solid rgba(148, 163, 184, 0.15);
                }

                .judge-criterion-weight {
                    display: block;
                    font-size: 1.6rem;
                    font-weight: 800;
                    color: #34d399;
                }

                .judge-criterion-label {
                    color: #94a3b8;
                    font-size: 0.9rem;
                }
                "#}
            </style>
        </section>
    }
}
