use yew::prelude::*;

struct Service {
    id: u32,
    title: &'static str,
    description: &'static str,
    icon: &'static str,
}

const SERVICES: [Service; 6] = [
    Service {
        id: 1,
        title: "אימון אישי",
        description: "אימונים מותאמים אישית עם מאמנים מוסמכים שיעזרו לך להשיג את היעדים שלך",
        icon: "fas fa-user",
    },
    Service {
        id: 2,
        title: "שיעורים קבוצתיים",
        description: "מגוון רחב של שיעורים קבוצתיים מאתגרים ומהנים לכל רמות הכושר",
        icon: "fas fa-people-group",
    },
    Service {
        id: 3,
        title: "ייעוץ תזונה",
        description: "תוכניות תזונה מותאמות אישית שיעזרו לך להשיג את יעדי הבריאות והכושר שלך",
        icon: "fas fa-apple-whole",
    },
    Service {
        id: 4,
        title: "תוכניות אימון מותאמות",
        description: "תוכניות אימון מקצועיות המותאמות ליעדים ולצרכים האישיים שלך",
        icon: "fas fa-clipboard-list",
    },
    Service {
        id: 5,
        title: "הערכת כושר",
        description: "בדיקות כושר מקיפות לקביעת רמת הכושר הנוכחית שלך וקביעת יעדים ריאליים",
        icon: "fas fa-heart-pulse",
    },
    Service {
        id: 6,
        title: "שיקום פציעות",
        description: "תוכניות שיקום מקצועיות לאחר פציעות בהדרכת מאמנים מוסמכים",
        icon: "fas fa-kit-medical",
    },
];

#[function_component]
pub fn ServicesSection() -> Html {
    let services_css = r#"
        .services-section {
            padding: 5rem 1rem;
            background: #fff;
        }
        .services-inner {
            max-width: 72rem;
            margin: 0 auto;
            text-align: center;
        }
        .services-grid {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr));
            gap: 2rem;
            margin: 3rem 0;
            text-align: right;
        }
        .service-card {
            border-radius: 1rem;
            padding: 2rem;
            background: #f9fafb;
            border: 1px solid #e5e7eb;
            transition: transform 0.3s, box-shadow 0.3s;
        }
        .service-card:hover {
            transform: translateY(-0.5rem);
            box-shadow: 0 12px 24px rgba(0, 0, 0, 0.1);
        }
        .service-card i {
            font-size: 2rem;
            color: #1f2937;
        }
        .service-more {
            color: #1f2937;
            font-weight: bold;
        }
        .services-cta {
            background: #feffd6;
            border-radius: 1rem;
            padding: 2.5rem;
        }
    "#;
    html! {
        <section id="services" class="services-section" dir="rtl">
            <style>{services_css}</style>
            <div class="services-inner">
                <h2>{"השירותים שלנו"}</h2>
                <p>{"במכון כושר ביתא אנו מציעים מגוון רחב של שירותים מקצועיים המותאמים לצרכים האישיים שלך"}</p>
                <div class="services-grid">
                    { for SERVICES.iter().map(|service| html! {
                        <div key={service.id} class="service-card">
                            <i class={service.icon}></i>
                            <h3>{service.title}</h3>
                            <p>{service.description}</p>
                            <a href="#contact" class="service-more">{"פרטים נוספים"}</a>
                        </div>
                    }) }
                </div>
                <div class="services-cta">
                    <h3>{"מוכנים להתחיל את מסע הכושר שלכם?"}</h3>
                    <p>{"הצטרפו היום למכון כושר ביתא וקבלו שבוע ניסיון חינם וייעוץ אישי ללא התחייבות!"}</p>
                    <a href="#contact" class="hero-cta">{"קבעו פגישת היכרות"}</a>
                </div>
            </div>
        </section>
    }
}
