use std::rc::Rc;

use log::{error, info};
use yew::prelude::*;
use yew_router::prelude::*;

mod catalog;
mod config;
mod download;
mod scroll_spy {
    pub mod dom;
    pub mod header;
    pub mod hook;
    pub mod layout;
    pub mod listener;
    pub mod navigator;
    pub mod section;
    pub mod session;
}
mod components {
    pub mod accordion;
    pub mod downloads;
    pub mod gallery;
    pub mod hero;
    pub mod media;
    pub mod section_nav;
    pub mod site_header;
}
mod pages {
    pub mod home;
    pub mod not_found;
    pub mod product;
}

use catalog::Catalog;
use components::site_header::SiteHeader;
use pages::{home::Home, not_found::NotFound, product::ProductPage};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/products/:slug")]
    Product { slug: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(catalog: Rc<Catalog>, route: Route) -> Html {
    match route {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home {catalog} /> }
        }
        Route::Product { slug } => {
            info!("Rendering product page {}", slug);
            html! { <ProductPage {catalog} {slug} /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    let Some(catalog) = catalog::bundled() else {
        return html! {
            <div class="catalog-error">
                <h1>{"Something went wrong"}</h1>
                <p>{"Product information could not be loaded. Please try again later."}</p>
            </div>
        };
    };

    let render = {
        let catalog = catalog.clone();
        move |route: Route| switch(catalog.clone(), route)
    };

    html! {
        <BrowserRouter>
            <SiteHeader catalog={catalog.clone()} />
            <main class="site-main">
                <Switch<Route> {render} />
            </main>
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    if let Err(err) = console_log::init_with_level(config::log_level()) {
        // Nothing to log to; the page still renders.
        web_sys::console::error_1(&format!("error initializing log: {}", err).into());
    }

    match catalog::bundled() {
        Some(catalog) => info!(
            "Starting {} with {} product pages",
            catalog.brand.name,
            catalog.products.len()
        ),
        None => error!("Starting without a product catalog"),
    }
    yew::Renderer::<App>::new().render();
}
