use leptos::html;
use leptos::prelude::*;
use tw_merge::tw_merge;
use wasm_bindgen::JsCast;

/// Labelled single-line field for the page title and category.
///
/// `value` is written by the caller (so a failed rename can revert it);
/// keystrokes are reported through `on_input`, and Enter through `on_commit`.
#[component]
pub fn TextField(
    #[prop(into)] label: String,
    #[prop(into)] id: String,
    #[prop(into, optional)] class: String,
    #[prop(into, optional)] placeholder: String,

    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(into, optional)] on_commit: Option<Callback<()>>,

    #[prop(optional)] node_ref: NodeRef<html::Input>,
) -> impl IntoView {
    let merged_class = tw_merge!(
        "placeholder:text-muted-foreground selection:bg-primary selection:text-primary-foreground dark:bg-input/30 border-input flex h-9 w-full min-w-0 rounded-md border bg-transparent px-3 py-1 text-base shadow-xs transition-[color,box-shadow] outline-none md:text-sm",
        "focus-visible:border-ring focus-visible:ring-ring/50",
        "focus-visible:ring-2",
        class
    );

    let handle_input = move |ev: web_sys::Event| {
        if let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        {
            on_input.run(input.value());
        }
    };

    let handle_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() != "Enter" {
            return;
        }
        if let Some(cb) = on_commit {
            ev.prevent_default();
            cb.run(());
        }
    };

    let label_for = id.clone();

    view! {
        <div data-name="TextField" class="flex flex-col gap-1.5">
            <label
                class="text-xs leading-none font-medium text-muted-foreground select-none"
                r#for=label_for
            >
                {label}
            </label>
            <input
                type="text"
                class=merged_class
                id=id
                placeholder=placeholder
                autocomplete="off"
                prop:value=move || value.get()
                on:input=handle_input
                on:keydown=handle_keydown
                node_ref=node_ref
            />
        </div>
    }
}
