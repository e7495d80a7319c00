use web_sys::MouseEvent;
use yew::prelude::*;

use crate::catalog::DownloadItem;
use crate::components::accordion::OpenPanels;
use crate::download::download_url;

const ANY_PLATFORM: &str = "All platforms";

#[derive(Properties, PartialEq)]
pub struct SoftwareDownloadsProps {
    pub items: Vec<DownloadItem>,
}

fn item_meta(item: &DownloadItem) -> String {
    match (&item.platform, &item.version) {
        (Some(platform), Some(version)) => format!("{} · v{}", platform, version),
        (Some(platform), None) => platform.clone(),
        (None, Some(version)) => format!("v{}", version),
        (None, None) => String::new(),
    }
}

/// Groups downloads by platform, in order of first appearance. Items without
/// a platform land in one shared group.
pub fn group_by_platform(items: &[DownloadItem]) -> Vec<(String, Vec<DownloadItem>)> {
    let mut groups: Vec<(String, Vec<DownloadItem>)> = Vec::new();
    for item in items {
        let key = item.platform.as_deref().unwrap_or(ANY_PLATFORM);
        match groups.iter_mut().find(|(name, _)| name == key) {
            Some((_, group)) => group.push(item.clone()),
            None => groups.push((key.to_string(), vec![item.clone()])),
        }
    }
    groups
}

#[function_component(SoftwareDownloads)]
pub fn software_downloads(props: &SoftwareDownloadsProps) -> Html {
    let groups = group_by_platform(&props.items);
    let open = use_state(|| OpenPanels::new(false));

    html! {
        <div class="software-downloads accordion">
            { for groups.into_iter().enumerate().map(|(index, (platform, items))| {
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
                            <span>{platform}</span>
                            <span class="toggle-icon">{if is_open { "−" } else { "+" }}</span>
                        </button>
                        if is_open {
                            <ul class="accordion-body">
                                { for items.iter().map(|item| html! {
                                    <li class="download-item">
                                        <span class="download-title">{&item.title}</span>
                                        <span class="download-meta">{item_meta(item)}</span>
                                        <a
                                            class="download-link"
                                            href={download_url(&item.file)}
                                            download={item.file.download_name().to_string()}
                                        >
                                            {"Download"}
                                        </a>
                                    </li>
                                }) }
                            </ul>
                        }
                    </div>
                }
            }) }
        </div>
    }
}
