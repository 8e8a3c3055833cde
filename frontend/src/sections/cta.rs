use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CtaSectionProps {
    #[prop_or(AttrValue::Static("הצטרפו למכון כושר ביתא והתחילו את המסע שלכם לחיים בריאים!"))]
    pub headline: AttrValue,
    #[prop_or(AttrValue::Static("אימונים מותאמים אישית, מאמנים מקצועיים, וציוד מתקדם - הכל במקום אחד"))]
    pub subheadline: AttrValue,
    #[prop_or(AttrValue::Static("קבע תור עכשיו"))]
    pub button_text: AttrValue,
    #[prop_or(AttrValue::Static("https://images.unsplash.com/photo-1571902943202-507ec2618e8f?q=80&w=2075"))]
    pub background_image_url: AttrValue,
}

#[function_component]
pub fn CtaSection(props: &CtaSectionProps) -> Html {
    let cta_css = r#"
        .cta-section {
            position: relative;
            padding: 6rem 1rem;
            overflow: hidden;
            color: #fff;
            text-align: center;
        }
        .cta-background {
            position: absolute;
            inset: 0;
            width: 100%;
            height: 100%;
            object-fit: cover;
            z-index: 0;
        }
        .cta-overlay {
            position: absolute;
            inset: 0;
            background: rgba(0, 0, 0, 0.6);
            z-index: 1;
        }
        .cta-content {
            position: relative;
            z-index: 2;
            max-width: 48rem;
            margin: 0 auto;
        }
        .cta-content h2 {
            font-size: 2.5rem;
        }
        .cta-badges {
            display: flex;
            justify-content: center;
            gap: 1rem;
            flex-wrap: wrap;
            margin-top: 2rem;
        }
        .cta-badge {
            backdrop-filter: blur(8px);
            background: rgba(255, 255, 255, 0.15);
            padding: 0.5rem 1rem;
            border-radius: 9999px;
        }
    "#;
    html! {
        <section class="cta-section" dir="rtl">
            <style>{cta_css}</style>
            <img class="cta-background" src={props.background_image_url.clone()} alt="אנשים מתאמנים במכון כושר" loading="lazy" />
            <div class="cta-overlay"></div>
            <div class="cta-content">
                <h2>{props.headline.clone()}</h2>
                <p>{props.subheadline.clone()}</p>
                <a href="#contact" class="hero-cta">{props.button_text.clone()}</a>
                <div class="cta-badges">
                    <span class="cta-badge">{"⭐ מדורג מספר 1 באזור"}</span>
                    <span class="cta-badge">{"🔥 הצטרפו עכשיו וקבלו 20% הנחה"}</span>
                </div>
            </div>
        </section>
    }
}
