use std::rc::Rc;

use log::{debug, warn};
use yew::prelude::*;

use super::dom::{DomLayout, WindowTarget};
use super::navigator::{Navigation, ScrollSpyNavigator, SkipReason};
use super::section::{NavItem, SectionId, SectionList};
use super::session::mount;
use crate::config::ScrollSpyConfig;
use crate::download::AnchorDownloader;

pub struct ScrollSpyHandle {
    pub active: SectionId,
    pub navigate: Callback<NavItem>,
}

/// Wires a [`ScrollSpyNavigator`] to the window for as long as the calling
/// component is mounted.
#[hook]
pub fn use_scroll_spy(sections: SectionList, config: ScrollSpyConfig) -> ScrollSpyHandle {
    let navigator = use_mut_ref(|| ScrollSpyNavigator::new(sections.clone(), config.clone()));
    let active = use_state(|| navigator.borrow().active_section());

    {
        let navigator = navigator.clone();
        let active = active.clone();
        use_effect_with_deps(
            move |(sections, config)| {
                // Fresh state per mount, and per page when the router reuses us.
                *navigator.borrow_mut() = ScrollSpyNavigator::new(sections.clone(), config.clone());
                active.set(sections.first());

                let session = match (web_sys::window(), DomLayout::new(&config.header_selector)) {
                    (Some(window), Some(layout)) => {
                        let on_change: Rc<dyn Fn(SectionId)> = {
                            let active = active.clone();
                            Rc::new(move |section: SectionId| active.set(section))
                        };
                        Some(mount(&navigator, &WindowTarget(window), layout, on_change))
                    }
                    _ => {
                        warn!("no window available, section tracking disabled");
                        None
                    }
                };

                move || drop(session)
            },
            (sections, config),
        );
    }

    let navigate = {
        let navigator = navigator.clone();
        let active = active.clone();
        Callback::from(move |item: NavItem| {
            let Some(window) = web_sys::window() else {
                return;
            };
            let mut nav = navigator.borrow_mut();
            let Some(layout) = DomLayout::new(&nav.config().header_selector) else {
                return;
            };

            match nav.navigate_to(&item, &layout, &WindowTarget(window), &AnchorDownloader) {
                Navigation::Scrolled { section, target_y } => {
                    debug!("scrolling to {} at {}px", section, target_y);
                    active.set(section);
                }
                Navigation::Downloaded(_) => {}
                Navigation::Skipped(reason @ SkipReason::MissingElement(_)) => {
                    debug!("navigation skipped: {}", reason);
                }
                Navigation::Skipped(reason) => warn!("navigation skipped: {}", reason),
            }
        })
    };

    ScrollSpyHandle {
        active: *active,
        navigate,
    }
}
