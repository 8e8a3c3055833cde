use chrono::Datelike;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config::{self, CONTACT_INFO};
use crate::utils::scroll::{scroll_to_top, use_scroll_past_threshold};

const NAV_LINKS: [(&str, &str); 7] = [
    ("דף הבית", "#"),
    ("אודות", "#about"),
    ("שירותים", "#services"),
    ("גלריה", "#gallery"),
    ("צור קשר", "#contact"),
    ("מיקום", "#location"),
    ("שעות פעילות", "#location"),
];

const SOCIAL_LINKS: [(&str, &str, &str); 4] = [
    ("פייסבוק", "https://facebook.com", "fab fa-facebook"),
    ("אינסטגרם", "https://instagram.com", "fab fa-instagram"),
    ("טוויטר", "https://twitter.com", "fab fa-twitter"),
    ("וואטסאפ", "https://whatsapp.com", "fab fa-whatsapp"),
];

#[function_component]
pub fn FooterSection() -> Html {
    let show_scroll_top = use_scroll_past_threshold();
    let newsletter_email = use_state(String::new);
    let current_year = chrono::Local::now().year();

    // Newsletter signup has no validation and goes nowhere.
    let on_newsletter_submit = {
        let newsletter_email = newsletter_email.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            log::info!("Newsletter signup for {}", *newsletter_email);
            newsletter_email.set(String::new());
        })
    };

    let footer_css = r#"
        .site-footer {
            background: #feffd6;
            padding: 3rem 1rem 1.5rem;
            color: #374151;
        }
        .footer-grid {
            max-width: 72rem;
            margin: 0 auto;
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr));
            gap: 2rem;
            text-align: right;
        }
        .footer-grid h3 {
            font-size: 1.125rem;
            color: #1f2937;
        }
        .footer-grid ul {
            list-style: none;
            padding: 0;
        }
        .footer-grid a {
            color: inherit;
            text-decoration: none;
        }
        .footer-social {
            display: flex;
            gap: 1rem;
            font-size: 1.5rem;
        }
        .newsletter-form {
            display: flex;
            gap: 0.5rem;
        }
        .newsletter-form input {
            flex: 1;
            padding: 0.5rem 0.75rem;
            border-radius: 0.5rem;
            border: 1px solid #d1d5db;
        }
        .newsletter-form button {
            padding: 0.5rem 1rem;
            border: none;
            border-radius: 0.5rem;
            background: #fcff2e;
            font-weight: bold;
            cursor: pointer;
        }
        .footer-bottom {
            text-align: center;
            margin-top: 2rem;
            font-size: 0.875rem;
        }
        .scroll-top {
            position: fixed;
            bottom: 2rem;
            left: 2rem;
            width: 3rem;
            height: 3rem;
            border-radius: 9999px;
            border: none;
            background: #fcff2e;
            box-shadow: 0 4px 12px rgba(0, 0, 0, 0.2);
            cursor: pointer;
            transition: opacity 0.3s, transform 0.3s;
            opacity: 0;
            transform: translateY(2.5rem);
            pointer-events: none;
        }
        .scroll-top.visible {
            opacity: 1;
            transform: translateY(0);
            pointer-events: auto;
        }
    "#;

    html! {
        <footer class="site-footer" dir="rtl">
            <style>{footer_css}</style>
            <div class="footer-grid">
                <div>
                    <h3>{config::get_site_name()}</h3>
                    <p>{"אנחנו מכון כושר מוביל בתחום עם ניסיון של שנים רבות. אנחנו מתמחים במתן שירות מקצועי ואיכותי ללקוחותינו."}</p>
                </div>
                <div>
                    <h3>{"ניווט מהיר"}</h3>
                    <ul>
                        { for NAV_LINKS.iter().map(|(name, href)| html! {
                            <li><a href={*href}>{*name}</a></li>
                        }) }
                    </ul>
                </div>
                <div>
                    <h3>{"צור קשר"}</h3>
                    <p>{format!("טלפון: {}", CONTACT_INFO.phone)}</p>
                    <p>{format!("אימייל: {}", CONTACT_INFO.email)}</p>
                    <p>{format!("כתובת: {}", CONTACT_INFO.address)}</p>
                </div>
                <div>
                    <h3>{"עקבו אחרינו"}</h3>
                    <div class="footer-social">
                        { for SOCIAL_LINKS.iter().map(|(name, href, icon)| html! {
                            <a href={*href} target="_blank" rel="noopener noreferrer" aria-label={*name}>
                                <i class={*icon}></i>
                            </a>
                        }) }
                    </div>
                    <h3>{"הרשמו לניוזלטר"}</h3>
                    <form class="newsletter-form" onsubmit={on_newsletter_submit}>
                        <input
                            type="email"
                            placeholder="האימייל שלך"
                            value={(*newsletter_email).clone()}
                            oninput={
                                let newsletter_email = newsletter_email.clone();
                                move |e: InputEvent| {
                                    let input: HtmlInputElement = e.target_unchecked_into();
                                    newsletter_email.set(input.value());
                                }
                            }
                        />
                        <button type="submit">{"הרשמה"}</button>
                    </form>
                </div>
            </div>
            <div class="footer-bottom">
                {format!("© {} {}. כל הזכויות שמורות.", current_year, config::get_site_name())}
            </div>
            <button
                class={classes!("scroll-top", show_scroll_top.then_some("visible"))}
                aria-label="חזרה למעלה"
                onclick={Callback::from(|_: MouseEvent| scroll_to_top())}
            >
                <i class="fas fa-arrow-up"></i>
            </button>
        </footer>
    }
}
