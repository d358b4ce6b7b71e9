//! Header, nav and footer around every page.

use dioxus::prelude::*;
use dioxus_router::Link;
use journey_core::model::PageId;

use crate::context::AppContext;
use crate::vm::map_nav_links;

/// Pages the visitor has loaded, refreshed by each page's gate.
#[derive(Clone, Copy)]
pub struct NavState {
    pub visited: Signal<Vec<PageId>>,
}

#[component]
pub fn SiteFrame(children: Element) -> Element {
    let ctx = use_context::<AppContext>();
    let dark_mode = use_signal(|| false);
    let visited = use_signal(Vec::<PageId>::new);
    use_context_provider(|| NavState { visited });

    let journal = ctx.journal();
    let _preference = use_resource(move || {
        let journal = journal.clone();
        let mut dark_mode = dark_mode;
        async move {
            match journal.load().await {
                Ok(record) => dark_mode.set(record.dark_mode()),
                Err(err) => tracing::warn!(error = %err, "could not read dark mode preference"),
            }
        }
    });

    let links = map_nav_links(ctx.progression().gate().catalog(), &visited.read());
    let theme = if dark_mode() { "app dark-mode" } else { "app" };
    let toggle_label = if dark_mode() { "Light mode" } else { "Dark mode" };
    let journal = ctx.journal();
    rsx! {
        div { class: "{theme}",
            header { class: "site-header",
                h1 { class: "site-title", "Journey" }
                nav { class: "site-nav",
                    ul {
                        for link in links {
                            li { key: "{link.page}",
                                Link { class: "{link.class}", to: link.path.clone(), "{link.title}" }
                            }
                        }
                    }
                }
            }
            main { class: "content", {children} }
            footer { class: "site-footer",
                button {
                    class: "btn btn-ghost theme-toggle",
                    r#type: "button",
                    onclick: move |_| {
                        let journal = journal.clone();
                        let mut dark_mode = dark_mode;
                        spawn(async move {
                            match journal.toggle_dark_mode().await {
                                Ok(enabled) => dark_mode.set(enabled),
                                Err(err) => tracing::warn!(error = %err, "could not store dark mode"),
                            }
                        });
                    },
                    "{toggle_label}"
                }
            }
        }
    }
}
