use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::{EntryKind, EVENT, SCHEDULE};

#[function_component(Schedule)]
pub fn schedule() -> Html {
    let selected = use_state(|| SCHEDULE[0].label);
    let day = SCHEDULE
        .iter()
        .find(|d| d.label == *selected)
        .unwrap_or(&SCHEDULE[0]);

    html! {
        <section id="schedule" class="section">
            <div class="section-inner">
                <Reveal>
                    <div class="section-header">
                        <span class="section-tag">{"Event Timeline"}</span>
                        <h2 class="section-title">
                            {"Two Days of "}<span class="text-gradient">{"Building"}</span>
                        </h2>
                        <p class="section-subtitle">
                            {"From opening speeches to the awards ceremony, here's how the weekend unfolds."}
                        </p>
                    </div>
                </Reveal>

                <Reveal>
                    <div class="day-tabs">
                        {
                            for SCHEDULE.iter().map(|d| {
                                let label = d.label;
                                let is_active = *selected == label;
                                let onclick = {
                                    let selected = selected.clone();
                                    Callback::from(move |_| selected.set(label))
                                };
                                html! {
                                    <button
                                        class={classes!("day-tab", if is_active { "active" } else { "" })}
                                        {onclick}
                                    >
                                        { label }
                                    </button>
                                }
                            })
                        }
                    </div>

                    <div class="timeline">
                        {
                            for day.entries.iter().map(|entry| html! {
                                <div class="timeline-entry">
                                    <span class="timeline-time">{ entry.time }</span>
                                    <span
                                        class="timeline-dot"
                                        style={format!("background: {}", entry.kind.color())}
                                    ></span>
                                    <div class="glass-card timeline-card">
                                        <span class="timeline-icon">{ entry.kind.icon() }</span>
                                        <span class="timeline-title">{ entry.title }</span>
                                        {
                                            if entry.kind == EntryKind::Milestone {
                                                html! { <span class="timeline-badge">{"Important"}</span> }
                                            } else {
                                                html! {}
                                            }
                                        }
                                    </div>
                                </div>
                            })
                        }
                    </div>
                </Reveal>

                <Reveal>
                    <div class="schedule-info">
                        <div class="glass-card schedule-info-card">
                            <span class="schedule-info-icon">{"⏱️"}</span>
                            <h4>{"Duration"}</h4>
                            <p>{ EVENT.duration }{" of continuous hacking"}</p>
                        </div>
                        <div class="glass-card schedule-info-card">
                            <span class="schedule-info-icon">{"📍"}</span>
                            <h4>{"Venue"}</h4>
                            <p>{ EVENT.location }{", open 24/7"}</p>
                        </div>
                        <div class="glass-card schedule-info-card">
                            <span class="schedule-info-icon">{"🍽️"}</span>
                            <h4>{"Food & Drinks"}</h4>
                            <p>{"All meals and snacks provided"}</p>
                        </div>
                    </div>
                    <p class="schedule-note">
                        {"Schedule is subject to change. Final timings go out to registered participants. Arrive on time for check-in and stay through judging to be eligible for prizes."}
                    </p>
                </Reveal>
            </div>

            <style>
                {r#"
                .day-tabs {
                    display: flex;
                    justify-content: center;
                    gap: 0.75rem;
                    margin: 3rem 0 2.5rem;
                }

                .day-tab {
                    padding: 0.65rem 1.8rem;
                    border-radius: 12px;
                    border: 1px solid rgba(148, 163, 184, 0.2);
                    background: rgba(15, 23, 42, 0.6);
                    color: #94a3b8;
                    font-size: 1.05rem;
                    font-weight: 600;
                    cursor: pointer;
                    transition: all 0.25s ease;
                }

                .day-tab:hover {
                    color: #e2e8f0;
                }

                .day-tab.active {
                    color: #f1f5f9;
                    border-color: rgba(16, 185, 129, 0.5);
                    background: rgba(16, 185, 129, 0.12);
                }

                .timeline {
                    max-width: 680px;
                    margin: 0 auto;
                    position: relative;
                }

                .timeline::before {
                    content: '';
                    position: absolute;
                    top: 0;
                    bottom: 0;
                    left: 104px;
                    width: 2px;
                    background: rgba(148, 163, 184, 0.15);
                }

                .timeline-entry {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    margin-bottom: 1rem;
                    position: relative;
                }

                .timeline-time {
                    width: 88px;
                    text-align: right;
                    color: #64748b;
                    font-size: 0.9rem;
                    flex-shrink: 0;
                }

                .timeline-dot {
                    width: 12px;
                    height: 12px;
                    border-radius: 50%;
                    flex-shrink: 0;
                    z-index: 1;
                }

                .timeline-card {
                    flex: 1;
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    padding: 0.9rem 1.25rem;
                }

                .timeline-icon {
                    font-size: 1.2rem;
                }

                .timeline-title {
                    color: #e2e8f0;
                    flex: 1;
                }

                .timeline-badge {
                    padding: 0.2rem 0.7rem;
                    border-radius: 999px;
                    background: rgba(59, 130, 246, 0.15);
                    border: 1px solid rgba(59, 130, 246, 0.35);
                    color: #93c5fd;
                    font-size: 0.75rem;
                    font-weight: 600;
                }

                .schedule-info {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                    gap: 1.25rem;
                    margin-top: 3rem;
                }

                .schedule-info-card {
                    padding: 1.5rem;
                    text-align: center;
                }

                .schedule-info-icon {
                    font-size: 1.8rem;
                }

                .schedule-info-card h4 {
                    color: #e2e8f0;
                    margin: 0.6rem 0 0.4rem;
                }

                .schedule-info-card p {
                    color: #94a3b8;
                    font-size: 0.95rem;
                    margin: 0;
                }

                .schedule-note {
                    text-align: center;
                    color: #64748b;
                    font-size: 0.85rem;
                    margin-top: 1.75rem;
                }

                @media (max-width: 768px) {
                    .timeline::before {
                        display: none;
                    }

                    .timeline-entry {
                        flex-wrap: wrap;
                    }

                    .timeline-time {
                        width: auto;
                        text-align: left;
                    }

                    .timeline-dot {
                        display: none;
                    }

                    .timeline-card {
                        flex-basis: 100%;
                    }
                }
                "#}
            </style>
        </section>
    }
}
