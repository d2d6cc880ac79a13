//! Todo Row Component

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::TodoRecord;

/// A single todo; clicking the row toggles completion, the checkbox selects it
#[component]
pub fn TodoRow(todo: TodoRecord) -> impl IntoView {
    let ctx = use_app_context();

    let id = todo.id;
    let status = todo.status_label();

    view! {
        // Checkbox clicks bubble up here too, so they also toggle completion
        <li
            class=if todo.completed { "completed" } else { "" }
            on:click=move |_| {
                ctx.todos.write().toggle(id);
            }
        >
            <input
                type="checkbox"
                prop:checked=move || ctx.todos.with(|list| list.is_selected(id))
                on:change=move |_| {
                    ctx.todos.write().toggle_selected(id);
                }
            />
            <div>
                <h3>{todo.title}</h3>
                <p>{todo.description}</p>
                <span>{status}</span>
            </div>
        </li>
    }
}
