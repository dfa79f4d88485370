use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::config;

const NAV_LINKS: &[(&str, &str)] = &[("#home", "Home"), ("#analysis", "Analysis"), ("#about", "About")];

pub fn is_scrolled(offset: f64) -> bool {
    offset > config::NAV_SCROLL_THRESHOLD
}

#[function_component(FloatingNav)]
pub fn floating_nav() -> Html {
    let scrolled = use_state_eq(|| false);

    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(move |_| {
            let subscription = web_sys::window().and_then(|window| {
                let target = window.clone();
                let scroll_callback = Closure::wrap(Box::new(move || {
                    let offset = target.scroll_y().unwrap_or(0.0);
                    scrolled.set(is_scrolled(offset));
                }) as Box<dyn FnMut()>);

                match window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref()) {
                    Ok(()) => Some((window, scroll_callback)),
                    Err(err) => {
                        warn!("Could not listen for scroll events: {:?}", err);
                        None
                    }
                }
            });

            move || {
                if let Some((window, scroll_callback)) = subscription {
                    if let Err(err) = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref()) {
                        warn!("Could not stop listening for scroll events: {:?}", err);
                    }
                }
            }
        }, ());
    }

    html! {
        <nav class={classes!("floating-nav", if *scrolled { "glass-strong" } else { "glass" })}>
            <style>
                {r#"
                    .floating-nav {
                        position: fixed;
                        top: 1rem;
                        left: 50%;
                        transform: translateX(-50%);
                        z-index: 50;
                        min-width: 300px;
                        padding: 0.75rem 1.5rem;
                        border-radius: 9999px;
                        transition: all 0.3s ease;
                    }
                    .floating-nav__content {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 2rem;
                    }
                    .floating-nav__brand {
                        font-size: 1.125rem;
                        font-weight: 700;
                        background: linear-gradient(135deg, #4facfe, #00f2fe);
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                    }
                    .floating-nav__links {
                        display: flex;
                        gap: 1.5rem;
                        font-size: 0.875rem;
                        font-weight: 500;
                    }
                    .floating-nav__links a {
                        color: #9ca3af;
                        text-decoration: none;
                        transition: color 0.2s;
                    }
                    .floating-nav__links a:first-child {
                        color: #f3f4f6;
                    }
                    .floating-nav__links a:hover {
                        color: #4facfe;
                    }
                    @media (max-width: 768px) {
                        .floating-nav__links {
                            display: none;
                        }
                    }
                "#}
            </style>
            <div class="floating-nav__content">
                <div class="floating-nav__brand">{"MedSafe"}</div>
                <div class="floating-nav__links">
                    { for NAV_LINKS.iter().map(|(href, label)| html! {
                        <a href={*href}>{*label}</a>
                    }) }
                </div>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(20.0));
        assert!(is_scrolled(20.5));
        assert!(is_scrolled(600.0));
    }
}
