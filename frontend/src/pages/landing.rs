use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config;
use crate::contact::contact_form::ContactFormSection;
use crate::gallery::portfolio_gallery::PortfolioGallery;
use crate::sections::about::AboutSection;
use crate::sections::cta::CtaSection;
use crate::sections::footer::FooterSection;
use crate::sections::hero::HeroSection;
use crate::sections::location::LocationSection;
use crate::sections::services::ServicesSection;

#[function_component(Landing)]
pub fn landing() -> Html {
    let is_loading = use_state(|| true);
    // Splash screen while fonts and hero image settle
    {
        let is_loading = is_loading.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(config::SPLASH_MS, move || is_loading.set(false));
                move || drop(timeout)
            },
            (),
        );
    }
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    if *is_loading {
        let splash_css = r#"
            .splash {
                min-height: 100vh;
                display: flex;
                flex-direction: column;
                align-items: center;
                justify-content: center;
                gap: 1.5rem;
                background: linear-gradient(135deg, #f9fafb, #f3f4f6);
            }
            .splash-ring {
                width: 6rem;
                height: 6rem;
                border-radius: 50%;
                border: 4px solid rgba(252, 255, 46, 0.3);
                border-top-color: rgba(31, 41, 55, 0.9);
                animation: spin 1s linear infinite;
            }
            .splash p {
                color: #6b7280;
                font-size: 1.125rem;
            }
            @keyframes spin {
                to { transform: rotate(360deg); }
            }
        "#;
        return html! {
            <div class="splash">
                <style>{splash_css}</style>
                <div class="splash-ring"></div>
                <p>{"טוען..."}</p>
            </div>
        };
    }

    html! {
        <main class="landing-page">
            <head>
                <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.2/css/all.min.css" integrity="sha512-SnH5WK+bZxgPHs44uWIX+LLJAJ9/2PkPKZ5QiAj6Ta86w+fsb2TkcmfRyVX3pBnMFcV7oQPJkl9QevSCWr3W6A==" crossorigin="anonymous" referrerpolicy="no-referrer" />
            </head>
            <HeroSection />
            <AboutSection />
            <ServicesSection />
            <PortfolioGallery />
            <CtaSection />
            <ContactFormSection />
            <LocationSection />
            <FooterSection />
        </main>
    }
}
