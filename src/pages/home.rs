use web_sys::window;
use yew::prelude::*;

use crate::components::footer::Footer;
use crate::content::EVENT;
use crate::sections::about::About;
use crate::sections::contact::Contact;
use crate::sections::faq::Faq;
use crate::sections::hero::Hero;
use crate::sections::hosts::Hosts;
use crate::sections::judges::Judges;
use crate::sections::prizes::Prizes;
use crate::sections::schedule::Schedule;
use crate::sections::speakers::Speakers;
use crate::sections::sponsors::Sponsors;
use crate::sections::tracks::Tracks;

#[function_component(Home)]
pub fn home() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                    if let Some(document) = window.document() {
                        document.set_title(EVENT.title);
                    }
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="home">
            <Hero />
            <About />
            <Hosts />
            <Tracks />
            <Sponsors />
            <Judges />
            <Speakers />
            <Schedule />
            <Prizes />
            <Faq />
            <Contact />
            <Footer />
        </div>
    }
}
