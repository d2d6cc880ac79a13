//! Todo List View Component
//!
//! Renders the todos in insertion order.

use leptos::prelude::*;

use crate::components::TodoRow;
use crate::context::use_app_context;
use crate::models::TodoRecord;

#[component]
pub fn TodoListView() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <ul class="todo-list">
            <For
                each=move || ctx.todos.with(|list| list.todos().to_vec())
                // Completion is part of the key so toggled rows re-render
                key=|todo| (todo.id, todo.completed)
                children=move |todo: TodoRecord| view! { <TodoRow todo=todo /> }
            />
        </ul>
    }
}
