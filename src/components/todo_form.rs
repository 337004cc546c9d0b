//! Todo Form Component
//!
//! Single input plus the primary button. The button adds in Composing mode
//! and updates in Editing mode; Enter submits either way.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use todo_core::TodoAction;

use crate::context::use_app_context;
use crate::store::{dispatch, draft, editing_id, feedback, use_app_store};

/// Label of the primary button
pub fn submit_label(editing: bool) -> &'static str {
    if editing { "Update" } else { "Add" }
}

#[component]
pub fn TodoForm() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let editing = move || editing_id(&store).is_some();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        dispatch(&store, TodoAction::Submit);
    };

    view! {
        <form class="flex mb-4" on:submit=on_submit>
            <input
                type="text"
                placeholder=ctx.placeholder()
                prop:value=move || draft(&store)
                on:input=move |ev| dispatch(&store, TodoAction::SetDraft(event_target_value(&ev)))
                class="border p-2 flex-grow mr-2 rounded"
            />
            <button type="submit" class="bg-blue-500 text-white px-4 py-2 rounded">
                {move || submit_label(editing())}
            </button>
            <Show when=editing>
                <button
                    type="button"
                    class="bg-gray-400 text-white px-4 py-2 rounded ml-2"
                    on:click=move |_| dispatch(&store, TodoAction::CancelEdit)
                >
                    "Cancel"
                </button>
            </Show>
        </form>
        {move || feedback(&store).map(|msg| view! {
            <p class="text-sm text-red-500 -mt-2 mb-4">{msg}</p>
        })}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_label() {
        assert_eq!(submit_label(false), "Add");
        assert_eq!(submit_label(true), "Update");
    }
}
