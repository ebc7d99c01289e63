use crate::api::EditorConfig;
use crate::components::ui::{
    Button, ButtonSize, ButtonVariant, Spinner, StatusLine, TextField, Textarea,
};
use crate::editor::OutlinePanel;
use crate::models::{EditorBootstrap, Severity};
use crate::state::EditorController;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_query_map;

#[component]
pub fn EditorPage() -> impl IntoView {
    let query = use_query_map();
    let bootstrap =
        EditorBootstrap::from_window().with_page_fallback(query.get_untracked().get("page"));

    let controller = EditorController::new(EditorConfig::new(), bootstrap);
    provide_context(controller.clone());
    let state = controller.state();

    let textarea_ref: NodeRef<html::Textarea> = NodeRef::new();

    controller.show_message("Editor Loaded", Severity::Success);

    let c = controller.clone();
    let on_title_input = Callback::new(move |v: String| c.on_title_input(v));
    let c = controller.clone();
    let on_title_commit = Callback::new(move |_: ()| c.update_page_name());

    let c = controller.clone();
    let on_category_input = Callback::new(move |v: String| c.on_category_input(v));
    let c = controller.clone();
    let on_category_commit = Callback::new(move |_: ()| c.update_category_name());

    let c = controller.clone();
    let on_content_input = Callback::new(move |v: String| c.on_content_input(v));

    let c = controller.clone();
    let on_save = move |_: web_sys::MouseEvent| {
        let c = c.clone();
        spawn_local(async move {
            let _ = c.save().await;
        });
    };

    let c = controller.clone();
    let on_return = move |_: web_sys::MouseEvent| {
        let c = c.clone();
        spawn_local(async move {
            c.return_to_page().await;
        });
    };

    let saving = move || state.is_saving();

    view! {
        <div class="mx-auto flex max-w-6xl flex-col gap-4 px-4 py-6">
            <header class="flex flex-wrap items-center justify-between gap-3">
                <div class="flex min-w-0 flex-col">
                    <span class="text-xs text-muted-foreground">"Editing"</span>
                    <h1 id="top_title" class="truncate text-xl font-semibold">
                        {move || state.page.get()}
                    </h1>
                </div>
                <div class="flex items-center gap-2">
                    <StatusLine status=state.status />
                    <Button
                        variant=ButtonVariant::Outline
                        size=ButtonSize::Sm
                        attr:title="Save (Ctrl+S / Cmd+S)"
                        attr:disabled=saving
                        on:click=on_save
                    >
                        <Show when=saving>
                            <Spinner />
                        </Show>
                        "Save"
                    </Button>
                    <Button
                        size=ButtonSize::Sm
                        attr:disabled=saving
                        on:click=on_return
                    >
                        "Return to page"
                    </Button>
                </div>
            </header>

            <div class="grid gap-3 sm:grid-cols-2">
                <TextField
                    label="Title"
                    id="page_title"
                    value=state.title_input
                    on_input=on_title_input
                    on_commit=on_title_commit
                />
                <TextField
                    label="Category"
                    id="page_category"
                    value=state.category_input
                    on_input=on_category_input
                    on_commit=on_category_commit
                />
            </div>

            <div class="grid gap-4 md:grid-cols-[1fr_14rem]">
                <Textarea
                    id="editor"
                    placeholder="Write markdown..."
                    value=state.content
                    on_input=on_content_input
                    node_ref=textarea_ref
                />
                <aside class="hidden md:block">
                    <OutlinePanel textarea_ref=textarea_ref />
                </aside>
            </div>
        </div>
    }
}
