use crate::pages::EditorPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn App() -> impl IntoView {
    // The wiki server mounts the bundle on `/editor?page=...`; the bare root
    // is accepted for local development.
    view! {
        <Router>
            <Routes fallback=|| view! { <div class="px-4 py-8 text-xs text-muted-foreground">"Not found"</div> }>
                <Route path=path!("editor") view=EditorPage />
                <Route path=path!("") view=EditorPage />
            </Routes>
        </Router>
    }
}
