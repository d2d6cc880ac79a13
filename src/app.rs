//! Todo App
//!
//! Main application component: form, list, batch delete and notices.

use leptos::prelude::*;
use persisted_cell::BrowserStorage;

use crate::context::AppContext;
use crate::todos::TodoList;
use crate::components::{NewTodoForm, TodoListView, DeleteSelectedButton, NoticeContainer};

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new(TodoList::open(BrowserStorage));
    provide_context(ctx);

    let summary = move || {
        ctx.todos.with(|list| format!("{} todos, {} selected", list.todos().len(), list.selected_count()))
    };

    view! {
        <div class="container">
            <h1 class="title">"Todo App"</h1>

            <NewTodoForm />

            <TodoListView />

            <p class="todo-count">{summary}</p>

            <DeleteSelectedButton />

            <NoticeContainer />
        </div>
    }
}
