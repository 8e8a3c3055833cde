use yew::prelude::*;

use crate::config::{self, CONTACT_INFO, OPENING_HOURS};

#[function_component]
pub fn LocationSection() -> Html {
    let location_css = r#"
        .location-section {
            padding: 5rem 1rem;
            background: #f3f4f6;
        }
        .location-inner {
            max-width: 72rem;
            margin: 0 auto;
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(20rem, 1fr));
            gap: 2rem;
        }
        .location-map iframe {
            width: 100%;
            height: 100%;
            min-height: 24rem;
            border: 0;
            border-radius: 1rem;
        }
        .location-card {
            background: #fff;
            border-radius: 1rem;
            padding: 2rem;
            box-shadow: 0 4px 12px rgba(0, 0, 0, 0.08);
            margin-bottom: 1.5rem;
        }
        .location-card a {
            color: inherit;
            text-decoration: none;
        }
        .hours-row {
            display: flex;
            justify-content: space-between;
            padding: 0.5rem 0;
            border-bottom: 1px solid #e5e7eb;
        }
        .hours-row.closed span:last-child {
            color: #ef4444;
            font-weight: bold;
        }
    "#;
    html! {
        <section id="location" class="location-section" dir="rtl">
            <style>{location_css}</style>
            <h2 style="text-align: center;">{"בואו לבקר אותנו"}</h2>
            <div class="location-inner">
                <div class="location-map">
                    <iframe
                        src={config::get_map_embed_url()}
                        title={format!("מיקום {}", config::get_site_name())}
                        aria-label="מפת מיקום מכון הכושר"
                        loading="lazy"
                        referrerpolicy="no-referrer-when-downgrade"
                    ></iframe>
                </div>
                <div>
                    <div class="location-card">
                        <h3>{config::get_site_name()}</h3>
                        <p><i class="fas fa-location-dot"></i>{" "}{CONTACT_INFO.address}</p>
                        <p>
                            <i class="fas fa-phone"></i>{" "}
                            <a href={format!("tel:{}", CONTACT_INFO.phone)} dir="ltr">{CONTACT_INFO.phone}</a>
                        </p>
                        <p>
                            <i class="fas fa-envelope"></i>{" "}
                            <a href={format!("mailto:{}", CONTACT_INFO.email)}>{CONTACT_INFO.email}</a>
                        </p>
                    </div>
                    <div class="location-card">
                        <h3>{"שעות פעילות"}</h3>
                        { for OPENING_HOURS.iter().map(|entry| html! {
                            <div class={classes!("hours-row", entry.is_closed().then_some("closed"))}>
                                <span>{entry.day}</span>
                                <span dir="ltr">{entry.hours}</span>
                            </div>
                        }) }
                    </div>
                    <p>
                        {"אנחנו מזמינים אתכם לבקר במכון הכושר שלנו ולהתרשם מהמתקנים המתקדמים והצוות המקצועי. הצטרפו אלינו והתחילו את המסע לכושר טוב יותר ואורח חיים בריא!"}
                    </p>
                    <a href="#contact" class="hero-cta">{"צרו קשר עכשיו"}</a>
                </div>
            </div>
        </section>
    }
}
