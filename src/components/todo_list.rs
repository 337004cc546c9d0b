//! Todo List Component

use leptos::prelude::*;

use crate::components::TodoRow;
use crate::store::{todo_items, use_app_store};

/// All todos in insertion order
#[component]
pub fn TodoList() -> impl IntoView {
    let store = use_app_store();

    view! {
        <ul>
            <For
                each=move || todo_items(&store)
                // Text is part of the key so an updated row re-renders
                key=|item| (item.id, item.text.clone())
                children=move |item| view! { <TodoRow item=item /> }
            />
        </ul>
    }
}
