use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::{
    self, JUDGING_CRITERIA, SPECIAL_PRIZES, TOTAL_PRIZE_POOL, TRACKS, WINNER_PERKS,
};

#[function_component(Prizes)]
pub fn prizes() -> Html {
    let hovered = use_state(|| None::<usize>);

    html! {
        <section id="prizes" class="section">
            <div class="section-inner">
                <Reveal>
                    <div class="section-header">
                        <span class="section-tag">{"Win Big"}</span>
                        <h2 class="section-title">
                            <span class="text-gradient">
                                {"$"}{ content::group_thousands(TOTAL_PRIZE_POOL) }{"+"}
                            </span>
                            {" in Prizes"}
                        </h2>
                        <p class="section-subtitle">
                            {"Cash prizes across every track, plus special awards for standout work."}
                        </p>
                    </div>
                </Reveal>

                <Reveal>
                    <div class="prize-tracks">
                        <h3>{"Track Winners"}</h3>
                        <p class="prize-tracks-sub">{"Each track winner takes home the full track prize."}</p>
                        <div class="prize-track-grid">
                            {
                                for TRACKS.iter().enumerate().map(|(i, track)| {
                                    let is_lifted = *hovered == Some(i);
                                    let onmouseenter = {
                                        let hovered = hovered.clone();
                                        Callback::from(move |_| hovered.set(Some(i)))
                                    };
                                    let onmouseleave = {
                                        let hovered = hovered.clone();
                                        Callback::from(move |_| hovered.set(None))
                                    };
                                    html! {
                                        <div
                                            class={classes!(
                                                "glass-card",
                                                "prize-track-card",
                                                if is_lifted { "lifted" } else { "" }
                                            )}
                                            {onmouseenter}
                                            {onmouseleave}
                                        >
                                            <span class="prize-track-icon">{ track.icon }</span>
                                            <h4>{ track.title }</h4>
                                            <span class="prize-amount">{ track.prize }</span>
                                            <p class="prize-track-place">{"First Place"}</p>
                                            {
                                                if is_lifted {
                                                    html! {
                                                        <p class="prize-track-hint">
                                                            {"Plus mentorship and potential funding opportunities"}
                                                        </p>
                                                    }
                                                } else {
                                                    html! {}
                                                }
                                            }
                                        </div>
                                    }
                                })
                            }
                        </div>
                    </div>
                </Reveal>

                <Reveal>
                    <div class="prize-specials">
                        <h3>{"Special Prizes"}</h3>
                        <div class="prize-special-grid">
                            {
                                for SPECIAL_PRIZES.iter().map(|prize| html! {
                                    <div class="glass-card prize-special-card">
                                        <div
                                            class="prize-special-accent"
                                            style={format!("background: {}", prize.accent)}
                                        ></div>
                                        <span class="prize-special-icon">{ prize.icon }</span>
                                        <h4>{ prize.title }</h4>
                                        <span class="prize-amount">{ prize.prize }</span>
                                        <p>{ prize.description }</p>
                                    </div>
                                })
                            }
                        </div>
                    </div>
                </Reveal>

                <Reveal>
                    <div class="prize-judging">
                        <h3>{"How We Judge"}</h3>
                        <div class="glass-card prize-judging-card">
                            <div class="judging-grid">
                                {
                                    for JUDGING_CRITERIA.iter().map(|criterion| html! {
                                        <div class="judging-item">
                                            <div
                                                class="judging-ring"
                                                style={format!(
                                                    "background: conic-gradient(#34d399 {}%, rgba(148, 163, 184, 0.15) 0)",
                                                    criterion.weight
                                                )}
                                            >
                                                <span>{ criterion.weight }{"%"}</span>
                                            </div>
                                            <h4>{ criterion.label }</h4>
                                            <p>{ criterion.description }</p>
                                        </div>
                                    })
                                }
                            </div>
                        </div>
                    </div>
                </Reveal>

                <Reveal>
                    <div class="glass-card prize-perks">
                        <h3>{"More Than Just Money"}</h3>
                        <div class="prize-perk-grid">
                            {
                                for WINNER_PERKS.iter().map(|perk| html! {
                                    <div class="prize-perk">
                                        <span class="prize-perk-icon">{ perk.icon }</span>
                                        <h4>{ perk.label }</h4>
                                        <p>{ perk.description }</p>
                                    </div>
                                })
                            }
                        </div>
                    </div>
                </Reveal>
            </div>

            <style>
                {r#"
                .prize-tracks,
                .prize-specials {
                    margin-top: 3rem;
                    text-align: center;
                }

                .prize-tracks h3,
                .prize-specials h3,
                .prize-judging h3,
                .prize-perks h3 {
                    color: #f1f5f9;
                    font-size: 1.5rem;
                    margin-bottom: 0.5rem;
                }

                .prize-tracks-sub {
                    color: #94a3b8;
                    margin-bottom: 1.75rem;
                }

                .prize-track-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(190px, 1fr));
                    gap: 1.25rem;
                }

                .prize-track-card {
                    padding: 1.6rem 1.25rem;
                    transition: transform 0.25s ease;
                }

                .prize-track-card.lifted {
                    transform: translateY(-6px);
                }

                .prize-track-icon {
                    font-size: 2rem;
                }

                .prize-track-card h4 {
                    color: #e2e8f0;
                    margin: 0.6rem 0;
                }

                .prize-track-place {
                    color: #94a3b8;
                    font-size: 0.85rem;
                    margin: 0.5rem 0 0;
                }

                .prize-track-hint {
                    margin-top: 0.9rem;
                    padding-top: 0.9rem;
                    border-top: 1px solid rgba(148, 163, 184, 0.15);
                    color: #64748b;
                    font-size: 0.8rem;
                }

                .prize-amount {
                    display: inline-block;
                    color: #fbbf24;
                    font-size: 1.3rem;
                    font-weight: 700;
                }

                .prize-special-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                    gap: 1.25rem;
                    margin-top: 1.75rem;
                }

                .prize-special-card {
                    position: relative;
                    padding: 1.75rem 1.25rem;
                    overflow: hidden;
                    transition: transform 0.25s ease;
                }

                .prize-special-card:hover {
                    transform: translateY(-6px);
                }

                .prize-special-accent {
                    position: absolute;
                    top: 0;
                    left: 0;
                    width: 100%;
                    height: 4px;
                }

                .prize-special-icon {
                    font-size: 2rem;
                }

                .prize-special-card h4 {
                    color: #e2e8f0;
                    margin: 0.6rem 0 0.4rem;
                }

                .prize-special-card p {
                    color: #94a3b8;
                    font-size: 0.9rem;
                    margin: 0.6rem 0 0;
                }

                .prize-judging {
                    margin-top: 3.5rem;
                    text-align: center;
                }

                .prize-judging-card {
                    padding: 2.25rem 2rem;
                    margin-top: 1.75rem;
                }

                .judging-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(170px, 1fr));
                    gap: 1.5rem;
                }

                .judging-ring {
                    width: 84px;
                    height: 84px;
                    margin: 0 auto 0.9rem;
                    border-radius: 50%;
                    position: relative;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }

                .judging-ring::before {
                    content: '';
                    position: absolute;
                    inset: 9px;
                    border-radius: 50%;
                    background: #141c2c;
                }

                .judging-ring span {
                    position: relative;
                    color: #f1f5f9;
                    font-size: 1.05rem;
                    font-weight: 700;
                }

                .judging-item h4 {
                    color: #e2e8f0;
                    margin: 0 0 0.35rem;
                }

                .judging-item p {
                    color: #94a3b8;
                    font-size: 0.85rem;
                    line-height: 1.5;
                    margin: 0;
                }

                .prize-perks {
                    margin-top: 3.5rem;
                    padding: 2.25rem 2rem;
                    text-align: center;
                }

                .prize-perk-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                    gap: 1.5rem;
                    margin-top: 1.75rem;
                }

                .prize-perk-icon {
                    font-size: 1.8rem;
                }

                .prize-perk h4 {
                    color: #e2e8f0;
                    margin: 0.6rem 0 0.4rem;
                }

                .prize-perk p {
                    color: #94a3b8;
                    font-size: 0.95rem;
                    margin: 0;
                }
                "#}
            </style>
        </section>
    }
}
