use yew::prelude::*;

use crate::catalog::AudioTrack;
use crate::config;

#[derive(Properties, PartialEq)]
pub struct VideoProps {
    pub src: String,
    #[prop_or_default]
    pub poster: Option<String>,
    #[prop_or_default]
    pub caption: Option<String>,
}

#[function_component(VideoPlayer)]
pub fn video_player(props: &VideoProps) -> Html {
    let poster = props.poster.as_deref().map(config::asset_url);
    html! {
        <figure class="video-player">
            <video controls=true preload="metadata" poster={poster}>
                <source src={config::asset_url(&props.src)} type="video/mp4" />
            </video>
            if let Some(caption) = &props.caption {
                <figcaption>{caption}</figcaption>
            }
        </figure>
    }
}

#[derive(Properties, PartialEq)]
pub struct AudioProps {
    pub tracks: Vec<AudioTrack>,
}

#[function_component(AudioPlayer)]
pub fn audio_player(props: &AudioProps) -> Html {
    html! {
        <ul class="audio-tracks">
            { for props.tracks.iter().map(|track| html! {
                <li class="audio-track">
                    <span class="track-title">{&track.title}</span>
                    <audio controls=true preload="none" src={config::asset_url(&track.src)}></audio>
                </li>
            }) }
        </ul>
    }
}
