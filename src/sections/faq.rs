use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::config;
use crate::content::FAQS;
use crate::filters;
use crate::forms;

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: &'static str,
    answer: &'static str,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class={classes!("faq-item", if *is_open { "open" } else { "" })}>
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{ props.question }</span>
                <span class="toggle-icon">{ if *is_open { "−" } else { "+" } }</span>
            </button>
            <div class="faq-answer">
                <p>{ props.answer }</p>
            </div>
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    let query = use_state(String::new);
    let category = use_state(|| filters::ALL);

    let groups = filters::filter_faqs(FAQS, *category, &query);

    let oninput = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            query.set(input.value());
        })
    };

    let clear_filters = {
        let query = query.clone();
        let category = category.clone();
        Callback::from(move |_| {
            query.set(String::new());
            category.set(filters::ALL);
        })
    };

    let question_mailto = forms::mailto_url(
        config::get_contact_email(),
        "MoneyHacks Question",
        "Hi,\n\nI have a question about MoneyHacks:",
    );

    html! {
        <section id="faq" class="section">
            <div class="section-inner">
                <Reveal>
                    <div class="section-header">
                        <span class="section-tag">{"FAQ"}</span>
                        <h2 class="section-title">
                            {"Frequently Asked "}<span class="text-gradient">{"Questions"}</span>
                        </h2>
                        <p class="section-subtitle">
                            {"Everything you need to know before the hackathon weekend."}
                        </p>
                    </div>
                </Reveal>

                <Reveal>
                    <div class="faq-controls">
                        <input
                            type="text"
                            class="faq-search"
                            placeholder="Search questions..."
                            value={(*query).clone()}
                            {oninput}
                        />
                        <div class="faq-categories">
                            {
                                {
                                    let is_active = *category == filters::ALL;
                                    let onclick = {
                                        let category = category.clone();
                                        Callback::from(move |_| category.set(filters::ALL))
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
                                for FAQS.iter().map(|group| {
                                    let label = group.category;
                                    let is_active = *category == label;
                                    let onclick = {
                                        let category = category.clone();
                                        Callback::from(move |_| category.set(label))
                                    };
                                    html! {
                                        <button
                                            class={classes!("filter-pill", if is_active { "active" } else { "" })}
                                            {onclick}
                                        >
                                            { label }
                                        </button>
                                    }
                                })
                            }
                        </div>
                    </div>

                    {
                        if groups.is_empty() {
                            html! {
                                <div class="faq-empty">
                                    <p>{"No questions match your search."}</p>
                                    <button class="btn btn-secondary" onclick={clear_filters}>
                                        {"Clear Filters"}
                                    </button>
                                </div>
                            }
                        } else {
                            html! {
                                <div class="faq-groups">
                                    {
                                        for groups.iter().map(|group| html! {
                                            <div class="faq-group">
                                                <h3>{ group.category }</h3>
                                                {
                                                    for group.entries.iter().map(|entry| html! {
                                                        <FaqItem
                                                            key={entry.question}
                                                            question={entry.question}
                                                            answer={entry.answer}
                                                        />
                                                    })
                                                }
                                            </div>
                                        })
                                    }
                                </div>
                            }
                        }
                    }
                </Reveal>

                <Reveal>
                    <div class="glass-card faq-cta">
                        <h3>{"Still Have Questions?"}</h3>
                        <p>{"Reach out and we'll get back to you within 24 hours."}</p>
                        <a class="btn btn-primary" href={question_mailto}>
                            {"Ask Us Anything"}
                        </a>
                    </div>
                </Reveal>
            </div>

            <style>
                {r#"
                .faq-controls {
                    max-width: 680px;
                    margin: 3rem auto 2rem;
                }

                .faq-search {
                    width: 100%;
                    padding: 0.9rem 1.25rem;
                    border-radius: 12px;
                    border: 1px solid rgba(148, 163, 184, 0.25);
                    background: rgba(15, 23, 42, 0.6);
                    color: #f1f5f9;
                    font-size: 1rem;
                    margin-bottom: 1rem;
                    box-sizing: border-box;
                }

                .faq-search:focus {
                    outline: none;
                    border-color: rgba(16, 185, 129, 0.5);
                }

                .faq-categories {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 0.6rem;
                }

                .faq-empty {
                    text-align: center;
                    padding: 2.5rem 0;
                }

                .faq-empty p {
                    color: #94a3b8;
                    margin-bottom: 1.25rem;
                }

                .faq-groups {
                    max-width: 680px;
                    margin: 0 auto;
                }

                .faq-group h3 {
                    color: #e2e8f0;
                    font-size: 1.2rem;
                    margin: 2rem 0 1rem;
                }

                .faq-item {
                    background: rgba(15, 23, 42, 0.6);
                    border: 1px solid rgba(148, 163, 184, 0.15);
                    border-radius: 12px;
                    margin-bottom: 0.75rem;
                    overflow: hidden;
                    transition: border-color 0.3s ease;
                }

                .faq-item:hover {
                    border-color: rgba(16, 185, 129, 0.35);
                }

                .faq-question {
                    width: 100%;
                    padding: 1.1rem 1.25rem;
                    background: none;
                    border: none;
                    color: #f1f5f9;
                    font-size: 1.05rem;
                    text-align: left;
                    cursor: pointer;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }

                .faq-question:hover {
                    color: #6ee7b7;
                }

                .toggle-icon {
                    font-size: 1.4rem;
                    color: #34d399;
                    transition: transform 0.3s ease;
                }

                .faq-item.open .toggle-icon {
                    transform: rotate(180deg);
                }

                .faq-answer {
                    max-height: 0;
                    overflow: hidden;
                    transition: max-height 0.4s ease;
                    padding: 0 1.25rem;
                }

                .faq-item.open .faq-answer {
                    max-height: 400px;
                    padding: 0 1.25rem 1.1rem;
                }

                .faq-answer p {
                    color: #94a3b8;
                    line-height: 1.65;
                    margin: 0;
                }

                .faq-cta {
                    margin-top: 3.5rem;
                    padding: 2.25rem 2rem;
                    text-align: center;
                }

                .faq-cta h3 {
                    color: #f1f5f9;
                    margin: 0 0 0.5rem;
                }

                .faq-cta p {
                    color: #94a3b8;
                    margin-bottom: 1.5rem;
                }
                "#}
            </style>
        </section>
    }
}
