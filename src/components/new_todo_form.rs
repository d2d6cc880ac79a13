//! New Todo Form Component
//!
//! Title and description inputs bound to the list's drafts.

use leptos::prelude::*;

use crate::context::use_app_context;

/// Form for appending a todo
#[component]
pub fn NewTodoForm() -> impl IntoView {
    let ctx = use_app_context();

    let add_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let result = ctx.todos.write().add();
        match result {
            Ok(id) => log::debug!("[form] added todo {}", id),
            Err(e) => ctx.notifier.error(e.to_string()),
        }
    };

    view! {
        <form class="new-todo-form" on:submit=add_todo>
            <input
                type="text"
                name="todoTitle"
                placeholder="Enter a new todo title"
                prop:value=move || ctx.todos.with(|list| list.draft_title().to_string())
                on:input=move |ev| {
                    ctx.todos.write().set_draft_title(event_target_value(&ev));
                }
            />
            <input
                type="text"
                name="todoDescription"
                placeholder="Enter a new todo description"
                prop:value=move || ctx.todos.with(|list| list.draft_description().to_string())
                on:input=move |ev| {
                    ctx.todos.write().set_draft_description(event_target_value(&ev));
                }
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
