use crate::outline::{line_start_offset_utf16, OutlineEntry};
use crate::state::EditorController;
use leptos::html;
use leptos::prelude::*;

/// Heading outline of the document, refreshed after a typing pause.
/// Selecting an entry moves the caret to that line.
#[component]
pub fn OutlinePanel(textarea_ref: NodeRef<html::Textarea>) -> impl IntoView {
    let controller = expect_context::<EditorController>();
    let state = controller.state();

    let jump_to = move |line: usize| {
        let Some(el) = textarea_ref.get_untracked() else {
            return;
        };
        let offset = line_start_offset_utf16(&state.content.get_untracked(), line);
        let _ = el.focus();
        if let Err(e) = el.set_selection_range(offset, offset) {
            log::warn!("Failed to move caret to line {line}: {e:?}");
        }
    };

    view! {
        <nav data-name="OutlinePanel" class="flex flex-col gap-1 text-sm">
            <div class="text-xs font-medium uppercase tracking-wide text-muted-foreground">
                "Outline"
            </div>
            <Show
                when=move || state.outline.with(|o| !o.is_empty())
                fallback=|| view! { <div class="text-xs text-muted-foreground">"No headings"</div> }
            >
                <ul class="flex flex-col gap-0.5">
                    <For
                        each=move || state.outline.get()
                        key=|entry: &OutlineEntry| (entry.line, entry.level, entry.title.clone())
                        children=move |entry: OutlineEntry| {
                            let line = entry.line;
                            let indent = format!("padding-left: {}rem", (entry.level.saturating_sub(1)) as f32 * 0.75);
                            view! {
                                <li style=indent>
                                    <button
                                        type="button"
                                        class="w-full truncate rounded px-1 text-left hover:bg-accent hover:cursor-pointer"
                                        title=format!("Line {}", line + 1)
                                        on:click=move |_| jump_to(line)
                                    >
                                        {entry.title.clone()}
                                    </button>
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>
        </nav>
    }
}
