use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use web_sys::{window, MouseEvent};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod content;
mod filters;
mod forms;
mod components {
    pub mod footer;
    pub mod reveal;
}
mod sections {
    pub mod about;
    pub mod contact;
    pub mod faq;
    pub mod hero;
    pub mod hosts;
    pub mod judges;
    pub mod prizes;
    pub mod schedule;
    pub mod speakers;
    pub mod sponsors;
    pub mod tracks;
}
mod pages {
    pub mod home;
    pub mod termsprivacy;
}

use config::ApplicationStatus;
use content::NAV_ITEMS;
use pages::{
    home::Home,
    termsprivacy::{CodeOfConduct, PrivacyPolicy},
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/privacy")]
    Privacy,
    #[at("/code-of-conduct")]
    CodeOfConduct,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <PrivacyPolicy /> }
        },
        Route::CodeOfConduct => {
            info!("Rendering Code of Conduct page");
            html! { <CodeOfConduct /> }
        },
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);
    let navigator = use_navigator().unwrap();

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window().unwrap();
            let document = window.document().unwrap();

            let scroll_callback = Closure::wrap(Box::new(move || {
                let scroll_top = document.document_element().unwrap().scroll_top();
                is_scrolled.set(scroll_top > 10);
            }) as Box<dyn FnMut()>);

            window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                .unwrap();

            move || {
                window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                    .unwrap();
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    let status = ApplicationStatus::current();

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"Money"}<span class="text-gradient">{"Hacks"}</span>
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    {
                        for NAV_ITEMS.iter().map(|item| {
                            let anchor = item.anchor;
                            let menu_open = menu_open.clone();
                            let navigator = navigator.clone();
                            // Scroll when the section is on the page, otherwise
                            // go back home (anchors only exist there).
                            let onclick = Callback::from(move |e: MouseEvent| {
                                e.prevent_default();
                                menu_open.set(false);
                                if let Some(window) = window() {
                                    if let Some(document) = window.document() {
                                        if let Some(element) = document.get_element_by_id(anchor) {
                                            element.scroll_into_view();
                                            return;
                                        }
                                    }
                                }
                                navigator.push(&Route::Home);
                            });
                            html! {
                                <button class="nav-link" {onclick}>{ item.label }</button>
                            }
                        })
                    }
                    {
                        match status {
                            ApplicationStatus::Open(url) => html! {
                                <a
                                    class="nav-apply"
                                    href={url}
                                    target="_blank"
                                    rel="noopener noreferrer"
                                >
                                    { status.cta_label() }
                                </a>
                            },
                            ApplicationStatus::ComingSoon => html! {
                                <span class="nav-apply disabled">{ status.cta_label() }</span>
                            },
                        }
                    }
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
