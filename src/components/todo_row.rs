//! Todo Row Component
//!
//! One list entry with its Edit and Remove buttons.

use leptos::prelude::*;
use todo_core::{TodoAction, TodoItem};

use crate::store::{dispatch, editing_id, use_app_store};

const ROW_CLASS: &str = "flex items-center justify-between p-2 border-b";

#[component]
pub fn TodoRow(item: TodoItem) -> impl IntoView {
    let store = use_app_store();
    let id = item.id;

    let row_class = move || {
        if editing_id(&store) == Some(id) {
            format!("{ROW_CLASS} bg-yellow-50")
        } else {
            ROW_CLASS.to_string()
        }
    };

    view! {
        <li class=row_class>
            <span class="flex-grow">{item.text}</span>
            <button
                class="bg-yellow-500 text-white px-2 py-1 rounded mr-2"
                on:click=move |_| dispatch(&store, TodoAction::BeginEdit(id))
            >
                "Edit"
            </button>
            <button
                class="bg-red-500 text-white px-2 py-1 rounded"
                on:click=move |_| dispatch(&store, TodoAction::Delete(id))
            >
                "Remove"
            </button>
        </li>
    }
}
