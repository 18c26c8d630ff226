use super::forum_page::ForumPage;
use dioxus::logger::tracing::info;
use dioxus::prelude::*;
use forum_core::AppState;

#[component]
pub fn App() -> Element {
    let state = use_context::<AppState>();
    let view = use_hook(move || state.view());
    info!("Rendering {} freelancers", view.table.rows.len());

    rsx! {
        ForumPage { view }
    }
}
