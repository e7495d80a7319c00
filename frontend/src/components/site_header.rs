use std::rc::Rc;

use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::catalog::Catalog;
use crate::scroll_spy::dom::WindowTarget;
use crate::scroll_spy::listener::Listener;
use crate::Route;

const SCROLLED_AFTER: f64 = 40.0;

/// Header switches to its compact look once the page leaves the very top.
pub fn is_past_top(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_AFTER
}

#[derive(Properties, PartialEq)]
pub struct SiteHeaderProps {
    pub catalog: Rc<Catalog>,
}

#[function_component(SiteHeader)]
pub fn site_header(props: &SiteHeaderProps) -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state_eq(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let listener = web_sys::window().map(|window| {
                let target = WindowTarget(window.clone());
                Listener::new(&target, "scroll", Rc::new(move || {
                    let scroll_y = window.scroll_y().unwrap_or(0.0);
                    // use_state_eq: re-render only when the threshold flips.
                    is_scrolled.set(is_past_top(scroll_y));
                }))
            });
            move || drop(listener)
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "header-links mobile-menu-open"
    } else {
        "header-links"
    };

    html! {
        <header class={classes!("site-header", (*is_scrolled).then(|| "scrolled"))}>
            <div class="header-content">
                <Link<Route> to={Route::Home} classes="header-logo">
                    {&props.catalog.brand.name}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for props.catalog.products.iter().map(|product| html! {
                        <div onclick={close_menu.clone()}>
                            <Link<Route> to={Route::Product { slug: product.slug.clone() }} classes="header-link">
                                {&product.name}
                            </Link<Route>>
                        </div>
                    }) }
                </div>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_only_past_threshold() {
        assert!(!is_past_top(0.0));
        assert!(!is_past_top(40.0));
        assert!(is_past_top(40.5));
        assert!(is_past_top(3000.0));
    }

    #[test]
    fn scrolling_within_one_side_keeps_the_same_value() {
        let ticks = [120.0, 480.0, 960.0, 2000.0];
        assert!(ticks.iter().all(|&y| is_past_top(y) == is_past_top(ticks[0])));
    }
}
