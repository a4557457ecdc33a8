use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::config;
use crate::content::{confirmed_speakers, track_by_id, Speaker, TRACKS, WORKSHOP_TOPICS};
use crate::filters;
use crate::forms;

fn speaker_card(speaker: &'static Speaker) -> Html {
    let track_title = track_by_id(speaker.track).map(|t| t.title).unwrap_or(speaker.track);
    html! {
        <div class="glass-card speaker-card">
            <h3>{ speaker.name }</h3>
            <p class="speaker-role">{ speaker.title }{" · "}{ speaker.company }</p>
            <p class="speaker-topic">{ speaker.topic }</p>
            <div class="speaker-meta">
                <span class="chip">{ track_title }</span>
                <span class="speaker-time">{"🕐 "}{ speaker.time }</span>
            </div>
        </div>
    }
}

#[function_component(Speakers)]
pub fn speakers() -> Html {
    let selected_track = use_state(|| filters::ALL);
    let confirmed: Vec<&'static Speaker> = confirmed_speakers().collect();
    let shown = filters::filter_speakers(confirmed.iter().copied(), *selected_track);

    let speaking_mailto = forms::mailto_url(
        config::get_contact_email(),
        "MoneyHacks Speaking Proposal",
        "Hi,\n\nI'd like to run a workshop or talk at MoneyHacks. Here's my proposed topic:",
    );

    html! {
        <section id="speakers" class="section">
            <div class="section-inner">
                <Reveal>
                    <div class="section-header">
                        <span class="section-tag">{"Learn From the Best"}</span>
                        <h2 class="section-title">
                            {"Workshops & "}<span class="text-gradient">{"Speakers"}</span>
                        </h2>
                        <p class="section-subtitle">
                            {"Hands-on sessions and talks running alongside the hacking."}
                        </p>
                    </div>
                </Reveal>

                <Reveal>
                    {
                        if confirmed.is_empty() {
                            html! {
                                <div class="glass-card speaker-placeholder">
                                    <div class="speaker-placeholder-icon">{"🎤"}</div>
                                    <h3>{"Speakers Being Confirmed"}</h3>
                                    <p>
                                        {"We're lining up founders, engineers, and investors for workshops across all four tracks. The full lineup drops soon."}
                                    </p>
                                </div>
                            }
                        } else {
                            html! {
                                <>
                                    <div class="speaker-filters">
                                        {
                                            {
                                                let is_active = *selected_track == filters::ALL;
                                                let onclick = {
                                                    let selected_track = selected_track.clone();
                                                    Callback::from(move |_| selected_track.set(filters::ALL))
                                                };
                                                html! {
                                                    <button
                                                        class={classes!("filter-pill", if is_active { "active" } else { "" })}
                                                        {onclick}
                                                    >
                                                        {"All"}
                                                    </button>
                                                }
                                            }
                                        }
                                        {
                                            for TRACKS.iter().map(|t| {
                                                let id = t.id;
                                                let is_active = *selected_track == id;
                                                let onclick = {
                                                    let selected_track = selected_track.clone();
                                                    Callback::from(move |_| selected_track.set(id))
                                                };
                                                html! {
                                                    <button
                                                        class={classes!("filter-pill", if is_active { "active" } else { "" })}
                                                        {onclick}
                                                    >
                                                        { t.title }
                                                    </button>
                                                }
                                            })
                                        }
                                    </div>
                                    {
                                        if shown.is_empty() {
                                            html! {
                                                <p class="speaker-none">{"No sessions on this track yet."}</p>
                                            }
                                        } else {
                                            html! {
                                                <div class="speaker-grid">
                                                    { for shown.iter().map(|speaker| speaker_card(speaker)) }
                                                </div>
                                            }
                                        }
                                    }
                                </>
                            }
                        }
                    }
                </Reveal>

                <Reveal>
                    <div class="workshop-block">
                        <h3>{"Workshop Topics"}</h3>
                        <div class="workshop-grid">
                            {
                                for WORKSHOP_TOPICS.iter().map(|topic| html! {
                                    <div class="glass-card workshop-card">{ *topic }</div>
                                })
                            }
                        </div>
                    </div>
                </Reveal>

                <Reveal>
                    <div class="glass-card speaker-cta">
                        <h3>{"Share Your Expertise"}</h3>
                        <p>
                            {"Have insights builders need? Lead a workshop or give a talk at MoneyHacks."}
                        </p>
                        <a class="btn btn-primary" href={speaking_mailto}>
                            {"Propose a Workshop"}
                        </a>
                    </div>
                </Reveal>
            </div>

            <style>
                {r#"
                .speaker-placeholder {
                    max-width: 520px;
                    margin: 3rem auto 0;
                    padding: 2.5rem 2rem;
                    text-align: center;
                }

                .speaker-placeholder-icon {
                    font-size: 2.5rem;
                    margin-bottom: 1rem;
                }

                .speaker-placeholder h3 {
                    color: #f1f5f9;
                    margin: 0 0 0.75rem;
                }

                .speaker-placeholder p {
                    color: #94a3b8;
                    line-height: 1.6;
                    margin: 0;
                }

                .speaker-filters {
                    display: flex;
                    justify-content: center;
                    flex-wrap: wrap;
                    gap: 0.6rem;
                    margin: 3rem 0 1.75rem;
                }

                .filter-pill {
                    padding: 0.5rem 1.1rem;
                    border-radius: 999px;
                    border: 1px solid rgba(148, 163, 184, 0.25);
                    background: transparent;
                    color: #94a3b8;
                    font-size: 0.95rem;
                    cursor: pointer;
                    transition: all 0.25s ease;
                }

                .filter-pill:hover {
                    color: #e2e8f0;
                }

                .filter-pill.active {
                    color: #f1f5f9;
                    border-color: rgba(16, 185, 129, 0.5);
                    background: rgba(16, 185, 129, 0.12);
                }

                .speaker-none {
                    text-align: center;
                    color: #64748b;
                }

                .speaker-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                    gap: 1.5rem;
                }

                .speaker-card {
                    padding: 1.75rem;
                }

                .speaker-card h3 {
                    color: #f1f5f9;
                    margin: 0 0 0.35rem;
                }

                .speaker-role {
                    color: #38bdf8;
                    font-size: 0.95rem;
                    margin-bottom: 0.75rem;
                }

                .speaker-topic {
                    color: #cbd5e1;
                    font-weight: 600;
                    margin-bottom: 1rem;
                }

                .speaker-meta {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                }

                .speaker-time {
                    color: #94a3b8;
                    font-size: 0.9rem;
                }

                .workshop-block {
                    margin-top: 4rem;
                    text-align: center;
                }

                .workshop-block h3 {
                    color: #f1f5f9;
                    font-size: 1.5rem;
                    margin-bottom: 1.75rem;
                }

                .workshop-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                    gap: 1rem;
                }

                .workshop-card {
                    padding: 1.1rem 1rem;
                    color: #cbd5e1;
                    font-size: 0.95rem;
                }

                .speaker-cta {
                    max-width: 720px;
                    margin: 3.5rem auto 0;
                    padding: 2.5rem 2rem;
                    text-align: center;
                }

                .speaker-cta h3 {
                    color: #f1f5f9;
                    font-size: 1.5rem;
                    margin: 0 0 0.75rem;
                }

                .speaker-cta p {
                    color: #94a3b8;
                    line-height: 1.6;
                    margin-bottom: 1.5rem;
                }
                "#}
            </style>
        </section>
    }
}
