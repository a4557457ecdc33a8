use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::HOSTS;

#[function_component(Hosts)]
pub fn hosts() -> Html {
    html! {
        <section id="hosts" class="section">
            <div class="section-inner">
                <Reveal>
                    <div class="section-header">
                        <span class="section-tag">{"Organized By"}</span>
                        <h2 class="section-title">
                            {"Meet Your "}<span class="text-gradient">{"Hosts"}</span>
                        </h2>
                        <p class="section-subtitle">
                            {"Two communities joining forces to push fintech innovation forward."}
                        </p>
                    </div>
                </Reveal>

                <Reveal>
                    <div class="host-grid">
                        {
                            for HOSTS.iter().map(|host| html! {
                                <div class="glass-card host-card">
                                    <div class="host-accent" style={format!("background: {}", host.accent)}></div>
                                    <div class="host-logo">{ host.logo }</div>
                                    <h3>{ host.name }</h3>
                                    <p class="host-description">{ host.description }</p>
                                    <div class="host-stats">
                                        {
                                            for host.stats.iter().map(|stat| html! {
                                                <div class="host-stat">
                                                    <span class="host-stat-value">{ stat.value }</span>
                                                    <span class="host-stat-label">{ stat.label }</span>
                                                </div>
                                            })
                                        }
                                    </div>
                                    {
                                        if let Some(url) = host.website {
                                            html! {
                                                <a
                                                    class="host-link"
                                                    href={url}
                                                    target="_blank"
                                                    rel="noopener noreferrer"
                                                >
                                                    {"Visit Website →"}
                                                </a>
                                            }
                                        } else {
                                            html! {}
                                        }
                                    }
                                </div>
                            })
                        }
                    </div>
                </Reveal>

                <Reveal>
                    <div class="host-banner glass-card">
                        <h3>{"Why This Partnership Matters"}</h3>
                        <p>
                            {"Together, we're bringing the best of Silicon Valley innovation and Stanford's academic excellence to create an unforgettable hackathon experience."}
                        </p>
                        <div class="host-banner-chips">
                            <span class="chip">{"Industry Network"}</span>
                            <span class="chip">{"Academic Excellence"}</span>
                            <span class="chip">{"Innovation Focus"}</span>
                        </div>
                    </div>
                </Reveal>
            </div>

            <style>
                {r#"
                .host-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
                    gap: 1.75rem;
                    margin-top: 3rem;
                }

                .host-card {
                    position: relative;
                    padding: 2rem;
                    overflow: hidden;
                }

                .host-accent {
                    position: absolute;
                    top: 0;
                    left: 0;
                    width: 100%;
                    height: 4px;
                }

                .host-logo {
                    font-size: 2.5rem;
                    margin-bottom: 0.75rem;
                }

                .host-card h3 {
                    color: #f1f5f9;
                    font-size: 1.4rem;
                    margin: 0 0 0.75rem;
                }

                .host-description {
                    color: #94a3b8;
                    line-height: 1.65;
                    margin-bottom: 1.5rem;
                }

                .host-stats {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 0.75rem;
                    margin-bottom: 1.5rem;
                }

                .host-stat {
                    text-align: center;
                    padding: 0.75rem 0.25rem;
                    border-radius: 12px;
                    background: rgba(15, 23, 42, 0.55);
                }

                .host-stat-value {
                    display: block;
                    color: #34d399;
                    font-weight: 700;
                    font-size: 1.1rem;
                }

                .host-stat-label {
                    display: block;
                    color: #64748b;
                    font-size: 0.75rem;
                    margin-top: 0.2rem;
                }

                .host-link {
                    color: #38bdf8;
                    text-decoration: none;
                    font-weight: 600;
                }

                .host-link:hover {
                    color: #7dd3fc;
                }

                .host-banner {
                    margin-top: 2.5rem;
                    padding: 1.75rem 2rem;
                    text-align: center;
                }

                .host-banner h3 {
                    color: #f1f5f9;
                    font-size: 1.3rem;
                    margin: 0 0 0.75rem;
                }

                .host-banner p {
                    color: #cbd5e1;
                    font-size: 1.05rem;
                    line-height: 1.6;
                    margin: 0;
                }

                .host-banner-chips {
                    display: flex;
                    justify-content: center;
                    flex-wrap: wrap;
                    gap: 0.75rem;
                    margin-top: 1.25rem;
                }
                "#}
            </style>
        </section>
    }
}
