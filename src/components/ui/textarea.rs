use leptos::html;
use leptos::prelude::*;
use tw_merge::tw_merge;
use wasm_bindgen::JsCast;

#[component]
pub fn Textarea(
    #[prop(into, optional)] class: String,
    #[prop(into, optional)] id: String,
    #[prop(into, optional)] placeholder: String,

    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,

    #[prop(optional)] node_ref: NodeRef<html::Textarea>,
) -> impl IntoView {
    let merged_class = tw_merge!(
        "placeholder:text-muted-foreground dark:bg-input/30 border-input w-full min-h-[60vh] rounded-md border bg-transparent px-3 py-2 font-mono text-sm leading-6 shadow-xs outline-none resize-y",
        "focus-visible:border-ring focus-visible:ring-ring/50 focus-visible:ring-2",
        class
    );

    let handle_input = move |ev: web_sys::Event| {
        if let Some(el) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlTextAreaElement>().ok())
        {
            on_input.run(el.value());
        }
    };

    view! {
        <textarea
            data-name="Textarea"
            class=merged_class
            id=id
            placeholder=placeholder
            spellcheck="false"
            prop:value=move || value.get()
            on:input=handle_input
            node_ref=node_ref
        ></textarea>
    }
}
