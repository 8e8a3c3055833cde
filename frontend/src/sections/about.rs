use yew::prelude::*;

use crate::config;

struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const FEATURES: [Feature; 4] = [
    Feature {
        icon: "fas fa-dumbbell",
        title: "ציוד מתקדם",
        description: "מכשירים חדישים ומתקדמים לאימון יעיל ובטוח",
    },
    Feature {
        icon: "fas fa-award",
        title: "צוות מקצועי",
        description: "מאמנים מוסמכים עם ניסיון רב בתחום הכושר",
    },
    Feature {
        icon: "fas fa-users",
        title: "קהילה תומכת",
        description: "אווירה חברתית ותומכת שתעזור לך להשיג את היעדים שלך",
    },
    Feature {
        icon: "fas fa-clock",
        title: "שעות פעילות נוחות",
        description: "פתוח בשעות נוחות לאורך כל השבוע",
    },
];

const REASONS: [&str; 4] = [
    "צוות מקצועי ומנוסה שילווה אותך לאורך כל הדרך",
    "תוכניות אימון מותאמות אישית לפי הצרכים והיעדים שלך",
    "מגוון רחב של שיעורים וסדנאות לכל רמות הכושר",
    "אווירה תומכת ומוטיבציה לעזור לך להשיג את המטרות שלך",
];

#[function_component]
pub fn AboutSection() -> Html {
    let about_css = r#"
        .about-section {
            padding: 5rem 1rem;
            background: #f9fafb;
        }
        .about-inner {
            max-width: 72rem;
            margin: 0 auto;
        }
        .about-title {
            font-size: 2.5rem;
            text-align: center;
            color: #1f2937;
        }
        .about-title span {
            color: #fff;
            background: #1f2937;
            padding: 0.25rem 0.75rem;
            border-radius: 0.5rem;
        }
        .feature-grid {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr));
            gap: 1.5rem;
            margin: 3rem 0;
        }
        .feature-card {
            background: #fff;
            border-radius: 1rem;
            padding: 1.5rem;
            box-shadow: 0 4px 12px rgba(0, 0, 0, 0.08);
        }
        .feature-card i {
            font-size: 1.5rem;
            color: #1f2937;
            background: #fcff2e;
            padding: 0.75rem;
            border-radius: 9999px;
        }
        .about-why {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(20rem, 1fr));
            gap: 2rem;
            align-items: center;
        }
        .about-why img {
            width: 100%;
            border-radius: 1rem;
        }
        .about-why li {
            font-size: 1.125rem;
            margin-bottom: 0.75rem;
        }
        .experience-badge {
            display: inline-block;
            background: #1f2937;
            color: #fff;
            padding: 0.5rem 1rem;
            border-radius: 0.5rem;
        }
    "#;
    html! {
        <section id="about" class="about-section" dir="rtl">
            <style>{about_css}</style>
            <div class="about-inner">
                <h2 class="about-title">{"אודות "}<span>{config::get_site_name()}</span></h2>
                <p>
                    {"אנחנו מכון כושר מוביל בתחום עם ניסיון של שנים רבות. מתמחים במתן שירות מקצועי ואיכותי ללקוחותינו דרך ציוד מתקדם, צוות מיומן ואווירה תומכת."}
                </p>
                <div class="feature-grid">
                    { for FEATURES.iter().map(|feature| html! {
                        <div class="feature-card">
                            <i class={feature.icon}></i>
                            <h3>{feature.title}</h3>
                            <p>{feature.description}</p>
                        </div>
                    }) }
                </div>
                <div class="about-why">
                    <div>
                        <img
                            src="https://images.unsplash.com/photo-1534438327276-14e5300c3a48?q=80&w=2070"
                            alt={format!("{} - אימון איכותי", config::get_site_name())}
                            loading="lazy"
                        />
                        <p class="experience-badge">{"10+ שנות ניסיון"}</p>
                    </div>
                    <div>
                        <h3>{"למה לבחור בנו?"}</h3>
                        <ul>
                            { for REASONS.iter().map(|reason| html! { <li>{*reason}</li> }) }
                        </ul>
                        <a href="#contact" class="hero-cta">{"הצטרפו אלינו עכשיו"}</a>
                    </div>
                </div>
            </div>
        </section>
    }
}
