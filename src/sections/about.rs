use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::{AUDIENCES, BENEFITS, EVENT};

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id="about" class="section">
            <div class="section-inner">
                <Reveal>
                    <div class="section-header">
                        <span class="section-tag">{"About the Event"}</span>
                        <h2 class="section-title">
                            {"What is "}<span class="text-gradient">{"MoneyHacks"}</span>{"?"}
                        </h2>
                        <p class="section-subtitle">
                            {"MoneyHacks brings together the brightest minds in fintech for an intensive "}
                            { EVENT.duration }
                            {" building experience. Organized by AI Valley in partnership with AI Collective Stanford Chapter, we're creating the next generation of financial technology."}
                        </p>
                    </div>
                </Reveal>

                <Reveal>
                    <div class="glass-card about-intro">
                        <p>
                            {"Join us for an intensive "}{ EVENT.duration }{" fintech hackathon \
                              where builders, students, and industry professionals come together \
                              to reimagine the future of financial technology."}
                        </p>
                        <p>
                            {"Whether you're into payments, investing, Web3, or have a wildcard \
                              idea, you'll have world-class mentors, cutting-edge APIs, and a \
                              community of driven builders behind you."}
                        </p>
                        <div class="about-expected">
                            <p class="about-expected-count">{"Expected: 30-50 MVPs"}</p>
                            <p>{"Real products, real impact, real opportunities"}</p>
                        </div>
                    </div>
                </Reveal>

                <Reveal>
                    <div class="benefit-grid">
                        {
                            for BENEFITS.iter().map(|benefit| html! {
                                <div class="glass-card benefit-card">
                                    <div class="benefit-icon">{ benefit.icon }</div>
                                    <h3>{ benefit.title }</h3>
                                    <p>{ benefit.description }</p>
                                </div>
                            })
                        }
                    </div>
                </Reveal>

                <Reveal>
                    <div class="audience-block">
                        <h3>{"Who Should Participate?"}</h3>
                        <div class="audience-chips">
                            { for AUDIENCES.iter().map(|audience| html! {
                                <span class="chip">{ *audience }</span>
                            }) }
                        </div>
                    </div>
                </Reveal>
            </div>

            <style>
                {r#"
                .about-intro {
                    max-width: 760px;
                    margin: 3rem auto 0;
                    padding: 2rem 2.25rem;
                }

                .about-intro p {
                    color: #cbd5e1;
                    line-height: 1.7;
                    margin: 0 0 1rem;
                }

                .about-expected {
                    margin-top: 1.5rem;
                    padding-top: 1.5rem;
                    border-top: 1px solid rgba(148, 163, 184, 0.15);
                    text-align: center;
                }

                .about-expected p {
                    color: #94a3b8;
                    margin: 0;
                }

                .about-expected .about-expected-count {
                    font-size: 1.4rem;
                    font-weight: 700;
                    color: #34d399;
                    margin-bottom: 0.35rem;
                }

                .benefit-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                    gap: 1.5rem;
                    margin-top: 3rem;
                }

                .benefit-card {
                    padding: 1.75rem;
                }

                .benefit-icon {
                    font-size: 2rem;
                    margin-bottom: 0.75rem;
                }

                .benefit-card h3 {
                    color: #f1f5f9;
                    font-size: 1.15rem;
                    margin: 0 0 0.5rem;
                }

                .benefit-card p {
                    color: #94a3b8;
                    line-height: 1.6;
                    margin: 0;
                }

                .audience-block {
                    text-align: center;
                    margin-top: 4rem;
                }

                .audience-block h3 {
                    color: #f1f5f9;
                    font-size: 1.5rem;
                    margin-bottom: 1.5rem;
                }

                .audience-chips {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 0.75rem;
                    max-width: 640px;
                    margin: 0 auto;
                }
                "#}
            </style>
        </section>
    }
}
