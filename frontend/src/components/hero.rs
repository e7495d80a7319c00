use yew::prelude::*;

use crate::catalog::Hero;
use crate::config;

#[derive(Properties, PartialEq)]
pub struct HeroBannerProps {
    pub hero: Hero,
    pub category: String,
}

#[function_component(HeroBanner)]
pub fn hero_banner(props: &HeroBannerProps) -> Html {
    let background = format!(
        "background-image: url('{}');",
        config::asset_url(&props.hero.image)
    );

    html! {
        <section class="hero" style={background}>
            <style>
                {r#"
                    .hero {
                        min-height: 80vh;
                        display: flex;
                        flex-direction: column;
                        justify-content: flex-end;
                        padding: 4rem 2rem;
                        background-size: cover;
                        background-position: center;
                        color: #fff;
                    }
                    .hero-category {
                        text-transform: uppercase;
                        letter-spacing: 0.2em;
                        opacity: 0.8;
                    }
                "#}
            </style>
            <span class="hero-category">{&props.category}</span>
            <h1>{&props.hero.headline}</h1>
            if let Some(subline) = &props.hero.subline {
                <p class="hero-subline">{subline}</p>
            }
        </section>
    }
}
