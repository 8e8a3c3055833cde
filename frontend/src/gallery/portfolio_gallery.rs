use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::gallery::view_state::{Filter, GalleryView};

#[function_component]
pub fn PortfolioGallery() -> Html {
    let view = use_state(GalleryView::default);
    let lightbox_open = view.selected().is_some();

    // Escape closes the lightbox; the listener only lives while it is open.
    {
        let view = view.clone();
        use_effect_with_deps(
            move |open: &bool| {
                let destructor: Box<dyn FnOnce()> = match (*open, web_sys::window()) {
                    (true, Some(window)) => {
                        let callback = Closure::<dyn Fn(web_sys::KeyboardEvent)>::new(move |e: web_sys::KeyboardEvent| {
                            if e.key() == "Escape" {
                                let mut next = (*view).clone();
                                next.deselect();
                                view.set(next);
                            }
                        });
                        if let Err(e) = window.add_event_listener_with_callback("keydown", callback.as_ref().unchecked_ref()) {
                            log::warn!("Failed to attach lightbox key listener: {:?}", e);
                        }
                        Box::new(move || {
                            if let Some(win) = web_sys::window() {
                                let _ = win.remove_event_listener_with_callback("keydown", callback.as_ref().unchecked_ref());
                            }
                        })
                    }
                    _ => Box::new(|| ()),
                };
                move || destructor()
            },
            lightbox_open,
        );
    }

    let close_lightbox = {
        let view = view.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*view).clone();
            next.deselect();
            view.set(next);
        })
    };

    let gallery_css = r#"
        .gallery-section {
            padding: 4rem 1rem;
            background: linear-gradient(135deg, #111827, #1f2937);
            min-height: 100vh;
        }
        .gallery-header {
            max-width: 80rem;
            margin: 0 auto 3rem;
            backdrop-filter: blur(12px);
            background: rgba(255, 255, 255, 0.1);
            border-radius: 0.75rem;
            padding: 1.5rem;
            border: 1px solid rgba(255, 255, 255, 0.2);
            text-align: center;
        }
        .gallery-header h2 {
            font-size: 2.25rem;
            color: #fcff2e;
        }
        .gallery-header p {
            font-size: 1.25rem;
            color: rgba(255, 255, 255, 0.9);
        }
        .gallery-filters {
            display: flex;
            flex-wrap: wrap;
            justify-content: center;
            gap: 0.75rem;
        }
        .filter-button {
            padding: 0.5rem 1.25rem;
            border-radius: 9999px;
            border: 1px solid rgba(255, 255, 255, 0.1);
            background: rgba(255, 255, 255, 0.05);
            color: rgba(255, 255, 255, 0.7);
            cursor: pointer;
            transition: all 0.3s;
        }
        .filter-button.active {
            background: rgba(252, 255, 46, 0.15);
            box-shadow: 0 4px 12px rgba(252, 255, 46, 0.15);
            color: #fff;
        }
        .gallery-grid {
            max-width: 80rem;
            margin: 0 auto;
            display: grid;
            grid-template-columns: repeat(auto-fill, minmax(16rem, 1fr));
            gap: 1.5rem;
        }
        .gallery-card {
            position: relative;
            overflow: hidden;
            border-radius: 0.75rem;
            border: 1px solid rgba(255, 255, 255, 0.1);
            cursor: pointer;
            transition: transform 0.4s ease-in-out;
            padding: 0;
            background: none;
        }
        .gallery-card:hover {
            transform: scale(1.03);
        }
        .gallery-card img {
            width: 100%;
            height: 16rem;
            object-fit: cover;
            display: block;
        }
        .gallery-caption {
            position: absolute;
            bottom: 0;
            left: 0;
            right: 0;
            padding: 1rem;
            background: rgba(0, 0, 0, 0.4);
            text-align: right;
        }
        .gallery-caption h3 {
            color: #fcff2e;
            margin: 0 0 0.25rem;
        }
        .gallery-caption p {
            color: rgba(255, 255, 255, 0.8);
            font-size: 0.875rem;
            margin: 0;
        }
        .gallery-empty {
            text-align: center;
            padding: 3rem 0;
            color: rgba(255, 255, 255, 0.8);
            font-size: 1.25rem;
        }
        .lightbox {
            position: fixed;
            inset: 0;
            z-index: 50;
            display: flex;
            align-items: center;
            justify-content: center;
            background: rgba(0, 0, 0, 0.85);
        }
        .lightbox-content {
            position: relative;
            max-width: 90vw;
            max-height: 90vh;
        }
        .lightbox-content img {
            max-width: 90vw;
            max-height: 80vh;
            border-radius: 0.5rem;
        }
        .lightbox-content p {
            color: #fcff2e;
            text-align: center;
            font-size: 1.25rem;
        }
        .lightbox-close {
            position: absolute;
            top: -2.5rem;
            left: 0;
            background: none;
            border: none;
            color: #fff;
            font-size: 2rem;
            cursor: pointer;
        }
    "#;

    let visible = view.visible_items();

    html! {
        <section id="gallery" class="gallery-section" dir="rtl">
            <style>{gallery_css}</style>
            <div class="gallery-header">
                <h2>{"הגלריה שלנו"}</h2>
                <p>{"צפו במתקני מכון כושר ביתא המתקדמים והסביבה המקצועית שלנו"}</p>
                <div class="gallery-filters">
                    {
                        Filter::ALL_OPTIONS.iter().map(|filter| {
                            let filter = *filter;
                            let is_active = view.active_filter() == filter;
                            let onclick = {
                                let view = view.clone();
                                Callback::from(move |_: MouseEvent| {
                                    let mut next = (*view).clone();
                                    next.set_filter(filter);
                                    view.set(next);
                                })
                            };
                            html! {
                                <button
                                    key={filter.label()}
                                    class={classes!("filter-button", is_active.then_some("active"))}
                                    aria-pressed={is_active.to_string()}
                                    {onclick}
                                >
                                    {filter.label()}
                                </button>
                            }
                        }).collect::<Html>()
                    }
                </div>
            </div>
            <div class="gallery-grid">
                {
                    visible.iter().map(|item| {
                        let onclick = {
                            let view = view.clone();
                            let item = (*item).clone();
                            Callback::from(move |_: MouseEvent| {
                                let mut next = (*view).clone();
                                next.select(item.clone());
                                view.set(next);
                            })
                        };
                        html! {
                            <button key={item.id} class="gallery-card" {onclick}>
                                <img src={item.image_ref} alt={item.alt_text} loading="lazy" />
                                <div class="gallery-caption">
                                    <h3>{item.caption}</h3>
                                    <p>{"לחצו להגדלה"}</p>
                                </div>
                            </button>
                        }
                    }).collect::<Html>()
                }
            </div>
            {
                if view.is_empty() {
                    html! {
                        <div class="gallery-empty">
                            <p>{"לא נמצאו תוצאות בקטגוריה זו"}</p>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            {
                if let Some(item) = view.selected() {
                    html! {
                        <div class="lightbox" role="dialog" aria-modal="true" onclick={close_lightbox.clone()}>
                            <div class="lightbox-content" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                                <button class="lightbox-close" aria-label="סגירה" onclick={close_lightbox}>{"×"}</button>
                                <img src={item.image_ref} alt={item.alt_text} />
                                <p>{item.caption}</p>
                            </div>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </section>
    }
}
