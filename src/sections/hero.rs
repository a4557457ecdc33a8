use gloo_timers::callback::Timeout;
use web_sys::window;
use yew::prelude::*;

use crate::config::ApplicationStatus;
use crate::content::{self, Stat, EVENT, HOSTS, STATS};

const COUNTER_STEPS: u32 = 30;
const COUNTER_STEP_MS: u32 = 40;

#[derive(Properties, PartialEq)]
struct CounterProps {
    stat: &'static Stat,
}

/// Counts up from zero to the stat value after mount. Each render schedules
/// the next step until the target is reached.
#[function_component(Counter)]
fn counter(props: &CounterProps) -> Html {
    let target = props.stat.value;
    let count = use_state(|| 0u32);

    {
        let count_clone = count.clone();
        let count_setter = count.setter();
        use_effect(move || {
            if *count_clone < target {
                let step = (target / COUNTER_STEPS).max(1);
                let next = (*count_clone + step).min(target);
                let timeout = Timeout::new(COUNTER_STEP_MS, move || {
                    count_setter.set(next);
                });
                timeout.forget();
            }
            || ()
        });
    }

    html! {
        <div class="stat-card">
            <div class="stat-value">
                { props.stat.prefix }{ content::group_thousands(*count) }{ props.stat.suffix }
            </div>
            <div class="stat-label">{ props.stat.label }</div>
        </div>
    }
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let status = ApplicationStatus::current();

    let view_tracks = Callback::from(move |_| {
        if let Some(window) = window() {
            if let Some(document) = window.document() {
                if let Some(element) = document.get_element_by_id("tracks") {
                    element.scroll_into_view();
                }
            }
        }
    });

    html! {
        <section id="hero" class="hero">
            <div class="hero-orb hero-orb-left"></div>
            <div class="hero-orb hero-orb-right"></div>

            <div class="hero-content">
                <div class="hero-hosts">
                    <span class="chip">{ HOSTS[0].name }</span>
                    <span class="hero-hosts-x">{"×"}</span>
                    <span class="chip">{ HOSTS[1].name }</span>
                </div>

                <h1 class="hero-title">
                    {"Money"}<span class="text-gradient">{"Hacks"}</span>
                </h1>
                <h2 class="hero-subtitle">{"Hack the Future of Finance"}</h2>
                <p class="hero-tagline">{ EVENT.tagline }</p>

                <div class="hero-meta">
                    <span>{"📅 "}{ EVENT.date }</span>
                    <span>{"📍 "}{ EVENT.location }</span>
                    <span>{"⏱️ "}{ EVENT.duration }</span>
                </div>

                <div class="hero-actions">
                    {
                        match status {
                            ApplicationStatus::Open(url) => html! {
                                <a
                                    class="btn btn-primary"
                                    href={url}
                                    target="_blank"
                                    rel="noopener noreferrer"
                                >
                                    { status.cta_label() }
                                </a>
                            },
                            ApplicationStatus::ComingSoon => html! {
                                <button class="btn btn-primary" disabled=true>
                                    { status.cta_label() }
                                </button>
                            },
                        }
                    }
                    <button class="btn btn-secondary" onclick={view_tracks}>
                        {"View Tracks"}
                    </button>
                </div>

                <div class="hero-stats">
                    { for STATS.iter().map(|stat| html! { <Counter {stat} /> }) }
                </div>
            </div>

            <div class="hero-scroll">{"⌄"}</div>

            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                    align-items: center;
                    text-align: center;
                    padding: 7rem 2rem 4rem;
                    overflow: hidden;
                }

                .hero-orb {
                    position: absolute;
                    width: 480px;
                    height: 480px;
                    border-radius: 50%;
                    filter: blur(120px);
                    opacity: 0.25;
                    pointer-events: none;
                }

                .hero-orb-left {
                    top: -10%;
                    left: -10%;
                    background: #10b981;
                }

                .hero-orb-right {
                    bottom: -10%;
                    right: -10%;
                    background: #3b82f6;
                }

                .hero-content {
                    position: relative;
                    max-width: 900px;
                }

                .hero-hosts {
                    display: flex;
                    justify-content: center;
                    align-items: center;
                    gap: 0.75rem;
                    margin-bottom: 2rem;
                }

                .hero-hosts-x {
                    color: #64748b;
                }

                .hero-title {
                    font-size: clamp(3.5rem, 10vw, 6.5rem);
                    font-weight: 800;
                    letter-spacing: -0.03em;
                    margin: 0;
                    color: #fff;
                }

                .hero-subtitle {
                    font-size: clamp(1.4rem, 3.5vw, 2.2rem);
                    font-weight: 600;
                    color: #cbd5e1;
                    margin: 0.75rem 0 1.25rem;
                }

                .hero-tagline {
                    font-size: 1.15rem;
                    color: #94a3b8;
                    max-width: 560px;
                    margin: 0 auto 1.75rem;
                    line-height: 1.6;
                }

                .hero-meta {
                    display: flex;
                    justify-content: center;
                    flex-wrap: wrap;
                    gap: 1.5rem;
                    color: #94a3b8;
                    font-size: 1rem;
                    margin-bottom: 2.5rem;
                }

                .hero-actions {
                    display: flex;
                    justify-content: center;
                    flex-wrap: wrap;
                    gap: 1rem;
                    margin-bottom: 3.5rem;
                }

                .hero-stats {
                    display: grid;
                    grid-template-columns: repeat(4, minmax(120px, 1fr));
                    gap: 1.25rem;
                    max-width: 760px;
                    margin: 0 auto;
                }

                .stat-card {
                    padding: 1.25rem 1rem;
                    border-radius: 16px;
                    border: 1px solid rgba(148, 163, 184, 0.15);
                    background: rgba(15, 23, 42, 0.6);
                }

                .stat-value {
                    font-size: 1.75rem;
                    font-weight: 700;
                    color: #34d399;
                }

                .stat-label {
                    font-size: 0.9rem;
                    color: #94a3b8;
                    margin-top: 0.25rem;
                }

                .hero-scroll {
                    position: absolute;
                    bottom: 1.5rem;
                    font-size: 2rem;
                    color: #475569;
                    animation: heroBounce 2s infinite;
                }

                @keyframes heroBounce {
                    0%, 100% { transform: translateY(0); }
                    50% { transform: translateY(10px); }
                }

                @media (max-width: 768px) {
                    .hero-stats {
                        grid-template-columns: repeat(2, 1fr);
                    }

                    .hero-meta {
                        flex-direction: column;
                        gap: 0.5rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}
