use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::config::SCROLL_TOP_THRESHOLD_PX;

/// Whether the page has scrolled far enough to offer "back to top".
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    pub past_threshold: bool,
}

impl ScrollState {
    /// Records a new offset. Returns true only when `past_threshold` flipped.
    pub fn observe(&mut self, offset: f64) -> bool {
        let past = offset > SCROLL_TOP_THRESHOLD_PX;
        let changed = past != self.past_threshold;
        self.past_threshold = past;
        changed
    }
}

/// Tracks window scroll for as long as the calling component is mounted.
#[hook]
pub fn use_scroll_past_threshold() -> bool {
    let past_threshold = use_state(|| false);
    let state = use_mut_ref(ScrollState::default);
    {
        let past_threshold = past_threshold.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let on_offset = move |offset: f64| {
                        let mut state = state.borrow_mut();
                        if state.observe(offset) {
                            past_threshold.set(state.past_threshold);
                        }
                    };
                    // Initial call
                    if let Ok(scroll_y) = window.scroll_y() {
                        on_offset(scroll_y);
                    }
                    let callback = Closure::<dyn Fn()>::new(move || {
                        if let Some(win) = web_sys::window() {
                            if let Ok(scroll_y) = win.scroll_y() {
                                on_offset(scroll_y);
                            }
                        }
                    });
                    match window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref()) {
                        Ok(()) => Box::new(move || {
                            if let Some(win) = web_sys::window() {
                                let _ = win.remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
                            }
                        }),
                        Err(e) => {
                            log::warn!("Failed to attach scroll listener: {:?}", e);
                            Box::new(|| ())
                        }
                    }
                } else {
                    Box::new(|| ())
                };
                move || destructor()
            },
            (),
        );
    }
    *past_threshold
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flips_only_across_threshold() {
        let mut state = ScrollState::default();
        assert!(!state.observe(0.0));
        assert!(!state.observe(300.0));
        assert!(!state.past_threshold);
        assert!(state.observe(300.5));
        assert!(state.past_threshold);
        assert!(!state.observe(1200.0));
        assert!(state.observe(120.0));
        assert!(!state.past_threshold);
    }

    #[test]
    fn repeated_offsets_are_harmless() {
        let mut state = ScrollState::default();
        state.observe(500.0);
        for _ in 0..3 {
            assert!(!state.observe(500.0));
            assert!(state.past_threshold);
        }
    }
}
