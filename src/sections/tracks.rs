use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::{track_by_id, TRACKS};

#[function_component(Tracks)]
pub fn tracks() -> Html {
    let selected = use_state(|| TRACKS[0].id);
    let track = track_by_id(*selected).unwrap_or(&TRACKS[0]);

    html! {
        <section id="tracks" class="section">
            <div class="section-inner">
                <Reveal>
                    <div class="section-header">
                        <span class="section-tag">{"Competition Tracks"}</span>
                        <h2 class="section-title">
                            {"Choose Your "}<span class="text-gradient">{"Track"}</span>
                        </h2>
                        <p class="section-subtitle">
                            {"Four tracks, each with a $5,000 prize. Pick the one that matches your ambition."}
                        </p>
                    </div>
                </Reveal>

                <Reveal>
                    <div class="track-tabs">
                        {
                            for TRACKS.iter().map(|t| {
                                let id = t.id;
                                let is_active = *selected == id;
                                let onclick = {
                                    let selected = selected.clone();
                                    Callback::from(move |_| selected.set(id))
                                };
                                html! {
                                    <button
                                        class={classes!("track-tab", if is_active { "active" } else { "" })}
                                        {onclick}
                                    >
                                        <span class="track-tab-icon">{ t.icon }</span>
                                        <span>{ t.title }</span>
                                    </button>
                                }
                            })
                        }
                    </div>

                    <div class="glass-card track-detail">
                        <div class="track-accent" style={format!("background: {}", track.accent)}></div>
                        <div class="track-detail-head">
                            <div>
                                <h3>{ track.icon }{" "}{ track.title }</h3>
                                <p>{ track.description }</p>
                            </div>
                            <span class="track-prize">{"🏆 "}{ track.prize }{" Prize"}</span>
                        </div>
                        <div class="track-detail-body">
                            <div>
                                <h4>{"Example Ideas"}</h4>
                                <ul>
                                    { for track.ideas.iter().map(|idea| html! { <li>{ *idea }</li> }) }
                                </ul>
                            </div>
                            <div>
                                <h4>{"Suggested Tools"}</h4>
                                <div class="track-tools">
                                    { for track.tools.iter().map(|tool| html! {
                                        <span class="chip">{ *tool }</span>
                                    }) }
                                </div>
                            </div>
                        </div>
                        <div class="track-detail-foot">
                            <span>{"You compete against the other teams building in this track."}</span>
                            <span>{"Judged on innovation, implementation, viability, and presentation."}</span>
                        </div>
                    </div>

                    <div class="track-cards">
                        {
                            for TRACKS.iter().map(|t| html! {
                                <div class="glass-card track-card">
                                    <div class="track-accent" style={format!("background: {}", t.accent)}></div>
                                    <h3>{ t.icon }{" "}{ t.title }</h3>
                                    <p>{ t.description }</p>
                                    <span class="track-prize">{"🏆 "}{ t.prize }</span>
                                </div>
                            })
                        }
                    </div>
                </Reveal>

                <Reveal>
                    <div class="glass-card track-note">
                        <p>
                            {"Can't decide? You can switch tracks any time before final \
                              submission. The important thing is to start building."}
                        </p>
                    </div>
                </Reveal>
            </div>

            <style>
                {r#"
                .track-tabs {
                    display: flex;
                    justify-content: center;
                    flex-wrap: wrap;
                    gap: 0.75rem;
                    margin: 3rem 0 1.5rem;
                }

                .track-tab {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.7rem 1.3rem;
                    border-radius: 12px;
                    border: 1px solid rgba(148, 163, 184, 0.2);
                    background: rgba(15, 23, 42, 0.6);
                    color: #94a3b8;
                    font-size: 1rem;
                    cursor: pointer;
                    transition: all 0.25s ease;
                }

                .track-tab:hover {
                    color: #e2e8f0;
                    border-color: rgba(148, 163, 184, 0.4);
                }

                .track-tab.active {
                    color: #f1f5f9;
                    border-color: rgba(16, 185, 129, 0.5);
                    background: rgba(16, 185, 129, 0.12);
                }

                .track-tab-icon {
                    font-size: 1.2rem;
                }

                .track-detail {
                    position: relative;
                    padding: 2rem;
                    overflow: hidden;
                }

                .track-accent {
                    position: absolute;
                    top: 0;
                    left: 0;
                    width: 100%;
                    height: 4px;
                }

                .track-detail-head {
                    display: flex;
                    justify-content: space-between;
                    align-items: flex-start;
                    gap: 1rem;
                    flex-wrap: wrap;
                    margin-bottom: 1.5rem;
                }

                .track-detail-head h3 {
                    color: #f1f5f9;
                    font-size: 1.5rem;
                    margin: 0 0 0.5rem;
                }

                .track-detail-head p {
                    color: #94a3b8;
                    margin: 0;
                    max-width: 460px;
                }

                .track-prize {
                    display: inline-block;
                    padding: 0.45rem 1rem;
                    border-radius: 999px;
                    background: rgba(234, 179, 8, 0.15);
                    border: 1px solid rgba(234, 179, 8, 0.35);
                    color: #fbbf24;
                    font-weight: 600;
                    white-space: nowrap;
                }

                .track-detail-body {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 2rem;
                }

                .track-detail-body h4 {
                    color: #e2e8f0;
                    margin: 0 0 0.75rem;
                }

                .track-detail-body ul {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                }

                .track-detail-body li {
                    color: #94a3b8;
                    padding: 0.35rem 0 0.35rem 1.25rem;
                    position: relative;
                }

                .track-detail-body li::before {
                    content: '▸';
                    position: absolute;
                    left: 0;
                    color: #34d399;
                }

                .track-tools {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                }

                .track-detail-foot {
                    display: flex;
                    justify-content: space-between;
                    flex-wrap: wrap;
                    gap: 0.75rem;
                    margin-top: 1.75rem;
                    padding-top: 1.25rem;
                    border-top: 1px solid rgba(148, 163, 184, 0.15);
                    color: #64748b;
                    font-size: 0.9rem;
                }

                .track-note {
                    margin-top: 2rem;
                    padding: 1.5rem 2rem;
                    text-align: center;
                }

                .track-note p {
                    margin: 0;
                    color: #94a3b8;
                }

                .track-cards {
                    display: none;
                }

                @media (max-width: 768px) {
                    .track-tabs,
                    .track-detail {
                        display: none;
                    }

                    .track-cards {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 1.25rem;
                        margin-top: 2.5rem;
                    }

                    .track-card {
                        position: relative;
                        padding: 1.5rem;
                        overflow: hidden;
                    }

                    .track-card h3 {
                        color: #f1f5f9;
                        margin: 0 0 0.5rem;
                    }

                    .track-card p {
                        color: #94a3b8;
                        margin: 0 0 1rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}
