use std::rc::Rc;

use log::error;
use yew::prelude::*;

use crate::catalog::{Catalog, PageSection, Product, SectionBody};
use crate::components::accordion::Accordion;
use crate::components::downloads::SoftwareDownloads;
use crate::components::gallery::Gallery;
use crate::components::hero::HeroBanner;
use crate::components::media::{AudioPlayer, VideoPlayer};
use crate::components::section_nav::SectionNav;
use crate::config::{self, ScrollSpyConfig};
use crate::pages::not_found::NotFound;
use crate::scroll_spy::hook::use_scroll_spy;
use crate::scroll_spy::section::SectionList;

#[derive(Properties, PartialEq)]
pub struct ProductPageProps {
    pub catalog: Rc<Catalog>,
    pub slug: String,
}

#[function_component(ProductPage)]
pub fn product_page(props: &ProductPageProps) -> Html {
    // Start every product at the top, including when switching between products.
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            props.slug.clone(),
        );
    }

    let Some(product) = props.catalog.product(&props.slug) else {
        return html! { <NotFound /> };
    };
    let sections = match product.section_list() {
        Ok(sections) => sections,
        Err(err) => {
            error!("{}", err);
            return html! { <NotFound /> };
        }
    };

    html! {
        <ProductView
            key={product.slug.clone()}
            product={product.clone()}
            sections={sections}
            config={props.catalog.brand.scroll_spy.clone()}
        />
    }
}

#[derive(Properties, PartialEq)]
struct ProductViewProps {
    product: Product,
    sections: SectionList,
    config: ScrollSpyConfig,
}

#[function_component(ProductView)]
fn product_view(props: &ProductViewProps) -> Html {
    let spy = use_scroll_spy(props.sections.clone(), props.config.clone());
    let product = &props.product;

    html! {
        <div class="product-page">
            <HeroBanner hero={product.hero.clone()} category={product.category.clone()} />
            <SectionNav
                title={product.name.clone()}
                items={product.nav_items()}
                active={spy.active}
                on_navigate={spy.navigate}
            />
            { for product.sections.iter().map(render_section) }
        </div>
    }
}

fn render_section(section: &PageSection) -> Html {
    html! {
        <section id={section.id.as_str()} class={classes!("product-section", section.id.as_str())}>
            <h2 class="section-label">{&section.label}</h2>
            { render_body(&section.body) }
        </section>
    }
}

fn render_body(body: &SectionBody) -> Html {
    match body {
        SectionBody::Text { heading, paragraphs, image } => html! {
            <div class="text-block">
                <h3>{heading}</h3>
                { for paragraphs.iter().map(|p| html! { <p>{p}</p> }) }
                if let Some(image) = image {
                    <img src={config::asset_url(image)} alt={heading.clone()} class="text-image" />
                }
            </div>
        },
        SectionBody::Video { src, poster, caption } => html! {
            <VideoPlayer src={src.clone()} poster={poster.clone()} caption={caption.clone()} />
        },
        SectionBody::Audio { tracks } => html! {
            <AudioPlayer tracks={tracks.clone()} />
        },
        SectionBody::Gallery { images } => html! {
            <Gallery images={images.clone()} />
        },
        SectionBody::Accordion { heading, single_open, panels } => html! {
            <Accordion heading={heading.clone()} single_open={*single_open} panels={panels.clone()} />
        },
        SectionBody::Downloads { items } => html! {
            <SoftwareDownloads items={items.clone()} />
        },
    }
}
