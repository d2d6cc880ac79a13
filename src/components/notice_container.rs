//! Notice Container Component
//!
//! Stacks the active notices; clicking one dismisses it early.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::notify::Notice;

#[component]
pub fn NoticeContainer() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="notice-container">
            <For
                each=move || ctx.notifier.notices()
                key=|notice| notice.id
                children=move |notice: Notice| {
                    let id = notice.id;
                    view! {
                        <div
                            class=notice.kind.css_class()
                            role="status"
                            on:click=move |_| ctx.notifier.dismiss(id)
                        >
                            {notice.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
