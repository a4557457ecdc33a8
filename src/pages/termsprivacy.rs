use web_sys::window;
use yew::prelude::*;
use yew_router::components::Link;

use crate::config;
use crate::content::EVENT;
use crate::Route;

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                    if let Some(document) = window.document() {
                        document.set_title(&format!("Privacy Policy - {}", EVENT.name));
                    }
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="legal-content privacy-policy">
            <h1>{"Privacy Policy"}</h1>
            <p class="legal-intro">{"MoneyHacks is organized by AI Valley and AI Collective Stanford Chapter. This policy describes what we do with the information you share with us."}</p>

            <section>
                <h2>{"1. Information We Collect"}</h2>
                <p>{"We collect the following information:"}</p>
                <ul>
                    <li>{"Name, email address, and organization when you contact us or apply to participate"}</li>
                    <li>{"Team and project information submitted during the hackathon"}</li>
                    <li>{"Dietary restrictions and accessibility needs you choose to share for event logistics"}</li>
                </ul>
            </section>

            <section>
                <h2>{"2. How We Use Your Information"}</h2>
                <ul>
                    <li>{"Running the event: check-in, team formation, judging, and prize distribution"}</li>
                    <li>{"Sending announcements about schedule changes, speakers, and applications"}</li>
                    <li>{"Responding to inquiries sent through the contact form"}</li>
                </ul>
            </section>

            <section>
                <h2>{"3. Photography and Recording"}</h2>
                <p>{"The event is photographed and recorded. By attending, you consent to appearing in photos and videos used to promote MoneyHacks and future events. Contact us during the event if you prefer not to be photographed."}</p>
            </section>

            <section>
                <h2>{"4. Sharing with Sponsors"}</h2>
                <p>{"We only share your contact details or resume with sponsors if you explicitly opt in during registration. Projects demoed at the Hackfair are public."}</p>
            </section>

            <section>
                <h2>{"5. Data Retention"}</h2>
                <p>{"We keep registration data until the event wraps up and winners are paid out, then delete it within 90 days unless you ask us to keep you on the mailing list."}</p>
            </section>

            <section>
                <h2>{"6. Your Rights"}</h2>
                <p>{"You can request access to, correction of, or deletion of your personal data at any time by emailing us."}</p>
            </section>

            <section>
                <h2>{"7. Contact"}</h2>
                <p>
                    {"For privacy-related inquiries, contact "}
                    <a href={format!("mailto:{}", config::get_contact_email())}>
                        { config::get_contact_email() }
                    </a>
                </p>
            </section>

            <div class="legal-links">
                <Link<Route> to={Route::Privacy}>{"Privacy Policy"}</Link<Route>>
                {" | "}
                <Link<Route> to={Route::CodeOfConduct}>{"Code of Conduct"}</Link<Route>>
            </div>
        </div>
    }
}

#[function_component(CodeOfConduct)]
pub fn code_of_conduct() -> Html {
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                    if let Some(document) = window.document() {
                        document.set_title(&format!("Code of Conduct - {}", EVENT.name));
                    }
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="legal-content code-of-conduct">
            <h1>{"Code of Conduct"}</h1>
            <p class="legal-intro">{"MoneyHacks is dedicated to providing a harassment-free experience for everyone. We do not tolerate harassment of participants in any form."}</p>

            <section>
                <h2>{"1. Expected Behavior"}</h2>
                <ul>
                    <li>{"Be respectful and considerate toward other participants, mentors, judges, and staff"}</li>
                    <li>{"Collaborate openly and give credit where it is due"}</li>
                    <li>{"Respect the venue, equipment, and quiet areas"}</li>
                </ul>
            </section>

            <section>
                <h2>{"2. Unacceptable Behavior"}</h2>
                <ul>
                    <li>{"Harassment, discrimination, or intimidation in any form"}</li>
                    <li>{"Inappropriate or disruptive conduct during talks, workshops, or demos"}</li>
                    <li>{"Tampering with other teams' projects or equipment"}</li>
                </ul>
            </section>

            <section>
                <h2>{"3. Project Integrity"}</h2>
                <p>{"The core of your application must be built during the hackathon. Open-source libraries and frameworks are welcome; any pre-existing code must be disclosed to the judges. Plagiarized submissions are disqualified."}</p>
            </section>

            <section>
                <h2>{"4. Reporting"}</h2>
                <p>{"If you experience or witness a violation, find an organizer on site or email us. Reports are handled confidentially."}</p>
            </section>

            <section>
                <h2>{"5. Enforcement"}</h2>
                <p>{"Organizers may take any action they deem appropriate, from a warning to disqualification and expulsion from the venue without a refund of any travel costs."}</p>
            </section>

            <section>
                <h2>{"6. Contact"}</h2>
                <p>
                    {"Conduct concerns: "}
                    <a href={format!("mailto:{}", config::get_contact_email())}>
                        { config::get_contact_email() }
                    </a>
                </p>
            </section>

            <div class="legal-links">
                <Link<Route> to={Route::Privacy}>{"Privacy Policy"}</Link<Route>>
                {" | "}
                <Link<Route> to={Route::CodeOfConduct}>{"Code of Conduct"}</Link<Route>>
            </div>
        </div>
    }
}
