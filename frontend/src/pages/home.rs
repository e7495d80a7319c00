use std::rc::Rc;

use yew::prelude::*;
use yew_router::prelude::*;

use crate::catalog::Catalog;
use crate::config;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub catalog: Rc<Catalog>,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    let brand = &props.catalog.brand;

    html! {
        <div class="home-page">
            <section class="home-hero">
                <h1>{&brand.name}</h1>
                <p>{&brand.tagline}</p>
            </section>

            <section class="product-grid">
                { for props.catalog.products.iter().map(|product| html! {
                    <Link<Route> to={Route::Product { slug: product.slug.clone() }} classes="product-card">
                        <img src={config::asset_url(&product.hero.image)} alt={product.name.clone()} />
                        <span class="product-category">{&product.category}</span>
                        <h2>{&product.name}</h2>
                        <p>{&product.tagline}</p>
                    </Link<Route>>
                }) }
            </section>

            if let Some(email) = &brand.support_email {
                <footer class="home-footer">
                    {"Questions? "}
                    <a href={format!("mailto:{}", email)}>{email}</a>
                </footer>
            }
        </div>
    }
}
