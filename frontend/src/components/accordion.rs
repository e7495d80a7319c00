use std::collections::BTreeSet;

use web_sys::MouseEvent;
use yew::prelude::*;

use crate::catalog::Panel;
use crate::config;

/// Which panels of one accordion are expanded.
#[derive(Debug, Clone, PartialEq)]
pub struct OpenPanels {
    open: BTreeSet<usize>,
    single: bool,
}

impl OpenPanels {
    pub fn new(single: bool) -> Self {
        Self { open: BTreeSet::new(), single }
    }

    pub fn toggle(&mut self, index: usize) {
        if self.open.remove(&index) {
            return;
        }
        if self.single {
            self.open.clear();
        }
        self.open.insert(index);
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open.contains(&index)
    }

    pub fn collapse_all(&mut self) {
        self.open.clear();
    }

    pub fn open_count(&self) -> usize {
        self.open.len()
    }
}

#[derive(Properties, PartialEq)]
pub struct AccordionProps {
    pub panels: Vec<Panel>,
    #[prop_or_default]
    pub heading: Option<String>,
    #[prop_or_default]
    pub single_open: bool,
}

#[function_component(Accordion)]
pub fn accordion(props: &AccordionProps) -> Html {
    let open = use_state(|| OpenPanels::new(props.single_open));

    let collapse_all = {
        let open = open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let mut next = (*open).clone();
            next.collapse_all();
            open.set(next);
        })
    };

    html! {
        <div class="accordion">
            {
                if let Some(heading) = &props.heading {
                    html! { <h2>{heading}</h2> }
                } else {
                    html! {}
                }
            }
            { for props.panels.iter().enumerate().map(|(index, panel)| {
                let is_open = open.is_open(index);
                let toggle = {
                    let open = open.clone();
                    Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        let mut next = (*open).clone();
                        next.toggle(index);
                        open.set(next);
                    })
                };
                html! {
                    <div class={classes!("accordion-item", is_open.then(|| "open"))}>
                        <button class="accordion-title" onclick={toggle}>
                            <span>{&panel.title}</span>
                            <span class="toggle-icon">{if is_open { "−" } else { "+" }}</span>
                        </button>
                        if is_open {
                            <div class="accordion-body">
                                { for panel.body.iter().map(|p| html! { <p>{p}</p> }) }
                                if let Some(image) = &panel.image {
                                    <img src={config::asset_url(image)} alt={panel.title.clone()} class="accordion-image" />
                                }
                            </div>
                        }
                    </div>
                }
            }) }
            if open.open_count() > 1 {
                <button class="accordion-collapse" onclick={collapse_all}>{"Collapse all"}</button>
            }
        </div>
    }
}
