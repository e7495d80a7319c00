use web_sys::MouseEvent;
use yew::prelude::*;

use crate::catalog::GalleryImage;
use crate::config;

/// Selected image index that wraps around at both ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GalleryCursor {
    index: usize,
    len: usize,
}

impl GalleryCursor {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn next(self) -> Self {
        if self.len == 0 {
            return self;
        }
        Self { index: (self.index + 1) % self.len, ..self }
    }

    pub fn prev(self) -> Self {
        if self.len == 0 {
            return self;
        }
        Self { index: (self.index + self.len - 1) % self.len, ..self }
    }

    pub fn select(self, index: usize) -> Self {
        if index < self.len {
            Self { index, ..self }
        } else {
            self
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct GalleryProps {
    pub images: Vec<GalleryImage>,
}

#[function_component(Gallery)]
pub fn gallery(props: &GalleryProps) -> Html {
    let cursor = use_state(|| GalleryCursor::new(props.images.len()));

    let Some(current) = props.images.get(cursor.index()) else {
        return html! {};
    };

    let step = |forward: bool| {
        let cursor = cursor.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            cursor.set(if forward { cursor.next() } else { cursor.prev() });
        })
    };

    html! {
        <div class="gallery">
            <div class="gallery-stage">
                <button class="gallery-arrow" onclick={step(false)}>{"‹"}</button>
                <img src={config::asset_url(&current.src)} alt={current.alt.clone()} />
                <button class="gallery-arrow" onclick={step(true)}>{"›"}</button>
            </div>
            <div class="gallery-thumbs">
                { for props.images.iter().enumerate().map(|(index, image)| {
                    let select = {
                        let cursor = cursor.clone();
                        Callback::from(move |_: MouseEvent| cursor.set(cursor.select(index)))
                    };
                    html! {
                        <img
                            class={classes!("gallery-thumb", (index == cursor.index()).then(|| "selected"))}
                            src={config::asset_url(&image.src)}
                            alt={image.alt.clone()}
                            onclick={select}
                        />
                    }
                }) }
            </div>
        </div>
    }
}
