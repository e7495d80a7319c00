use web_sys::MouseEvent;
use yew::prelude::*;

use crate::scroll_spy::section::{NavItem, SectionId};

#[derive(Debug, Clone, PartialEq)]
pub struct NavEntry {
    pub label: String,
    pub item: NavItem,
    pub is_active: bool,
    pub is_download: bool,
}

/// Marks the entry for `active`. Download entries are never highlighted.
pub fn nav_entries(items: &[(String, NavItem)], active: SectionId) -> Vec<NavEntry> {
    items
        .iter()
        .map(|(label, item)| NavEntry {
            label: label.clone(),
            is_active: matches!(item, NavItem::ScrollTarget(id) if *id == active),
            is_download: matches!(item, NavItem::DownloadAction(_)),
            item: item.clone(),
        })
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct SectionNavProps {
    pub title: String,
    pub items: Vec<(String, NavItem)>,
    pub active: SectionId,
    pub on_navigate: Callback<NavItem>,
}

#[function_component(SectionNav)]
pub fn section_nav(props: &SectionNavProps) -> Html {
    html! {
        <nav class="section-nav">
            <style>
                {r#"
                    .section-nav {
                        position: sticky;
                        top: var(--header-height, 72px);
                        z-index: 10;
                        display: flex;
                        align-items: center;
                        gap: 1.5rem;
                        padding: 0.75rem 2rem;
                        background: rgba(12, 12, 14, 0.92);
                        backdrop-filter: blur(8px);
                    }
                    .section-nav-title {
                        font-weight: 600;
                        margin-right: auto;
                    }
                    .section-nav-link {
                        background: none;
                        border: none;
                        color: #aaa;
                        cursor: pointer;
                    }
                    .section-nav-link.active {
                        color: #fff;
                        border-bottom: 2px solid #e4572e;
                    }
                    .section-nav-link.download {
                        border: 1px solid #555;
                        border-radius: 4px;
                        padding: 0.25rem 0.75rem;
                    }
                "#}
            </style>
            <span class="section-nav-title">{&props.title}</span>
            { for nav_entries(&props.items, props.active).into_iter().map(|entry| {
                let onclick = {
                    let on_navigate = props.on_navigate.clone();
                    let item = entry.item.clone();
                    Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        on_navigate.emit(item.clone());
                    })
                };
                html! {
                    <button
                        class={classes!(
                            "section-nav-link",
                            entry.is_active.then(|| "active"),
                            entry.is_download.then(|| "download")
                        )}
                        {onclick}
                    >
                        {entry.label}
                    </button>
                }
            }) }
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll_spy::section::FileRef;

    fn items() -> Vec<(String, NavItem)> {
        vec![
            ("Concept".to_string(), NavItem::ScrollTarget(SectionId::Concept)),
            ("Features".to_string(), NavItem::ScrollTarget(SectionId::Features)),
            ("Manual".to_string(), NavItem::DownloadAction(FileRef::new("m.pdf"))),
        ]
    }

    #[test]
    fn exactly_one_entry_is_highlighted() {
        let entries = nav_entries(&items(), SectionId::Features);
        let active: Vec<_> = entries.iter().filter(|e| e.is_active).map(|e| e.label.as_str()).collect();
        assert_eq!(active, vec!["Features"]);
    }

    #[test]
    fn download_entry_is_flagged_and_never_active() {
        let entries = nav_entries(&items(), SectionId::Concept);
        assert!(entries[2].is_download);
        assert!(!entries[2].is_active);
        assert!(!entries[0].is_download);
    }
}
