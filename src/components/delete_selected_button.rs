//! Delete Selected Button Component

use leptos::prelude::*;

use crate::context::use_app_context;

const DELETED_MESSAGE: &str = "Selected todos have been deleted";

/// Removes every selected todo; disabled while nothing is selected
#[component]
pub fn DeleteSelectedButton() -> impl IntoView {
    let ctx = use_app_context();

    let delete_selected = move |_: web_sys::MouseEvent| {
        let removed = ctx.todos.write().delete_selected();
        if let Some(count) = removed {
            log::debug!("[delete] removed {} todos", count);
            ctx.notifier.success(DELETED_MESSAGE);
        }
    };

    view! {
        <button
            class="delete-btn"
            disabled=move || !ctx.todos.with(|list| list.can_delete())
            on:click=delete_selected
        >
            "Delete Selected"
        </button>
    }
}
