use yew::prelude::*;

use crate::config;

#[function_component]
pub fn HeroSection() -> Html {
    let hero_css = r#"
        .hero {
            position: relative;
            min-height: 100vh;
            display: flex;
            align-items: center;
            justify-content: center;
            overflow: hidden;
            color: #fff;
        }
        .hero-background {
            position: absolute;
            inset: 0;
            object-fit: cover;
            width: 100%;
            height: 100%;
            z-index: 0;
        }
        .hero-overlay {
            position: absolute;
            inset: 0;
            background: linear-gradient(to left, rgba(0, 0, 0, 0.8), rgba(0, 0, 0, 0.4));
            z-index: 1;
        }
        .hero-content {
            position: relative;
            z-index: 2;
            max-width: 48rem;
            padding: 2rem;
            text-align: right;
        }
        .hero-title {
            font-size: 3.5rem;
            font-weight: 800;
            line-height: 1.1;
        }
        .hero-title .highlight {
            color: #fcff2e;
        }
        .hero-subtitle {
            font-size: 1.5rem;
            margin: 1rem 0;
        }
        .hero-cta {
            display: inline-block;
            padding: 1rem 2.5rem;
            background: #fcff2e;
            color: #1f2937;
            font-weight: bold;
            border-radius: 9999px;
            text-decoration: none;
        }
        .scroll-indicator {
            position: absolute;
            bottom: 2rem;
            left: 50%;
            transform: translateX(-50%);
            z-index: 2;
            font-size: 0.875rem;
        }
        @media (max-width: 768px) {
            .hero-title {
                font-size: 2.25rem;
            }
        }
    "#;
    html! {
        <header class="hero">
            <style>{hero_css}</style>
            <img
                class="hero-background"
                src="https://images.unsplash.com/photo-1517836357463-d25dfeac3438?q=80&w=2070"
                alt={format!("{} - אימון מקצועי", config::get_site_name())}
            />
            <div class="hero-overlay"></div>
            <div class="hero-content">
                <h1 class="hero-title">
                    <span class="highlight">{"מכון כושר"}</span>{" מוביל בישראל"}
                </h1>
                <p class="hero-subtitle">{"חווית לקוח מושלמת בכל ביקור"}</p>
                <p>{"אנחנו מכון כושר מוביל בתחום עם ניסיון של שנים רבות. אנחנו מתמחים במתן שירות מקצועי ואיכותי ללקוחותינו."}</p>
                <a href="#contact" class="hero-cta" aria-label={format!("קבע תור עכשיו ל{}", config::get_site_name())}>
                    {"קבע תור עכשיו"}
                </a>
            </div>
            <a href="#about" class="scroll-indicator">{"גלול למטה"}</a>
        </header>
    }
}
