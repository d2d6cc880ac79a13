//! UI Components
//!
//! Leptos components for the todo page.

mod new_todo_form;
mod todo_row;
mod todo_list_view;
mod delete_selected_button;
mod notice_container;

pub use new_todo_form::NewTodoForm;
pub use todo_row::TodoRow;
pub use todo_list_view::TodoListView;
pub use delete_selected_button::DeleteSelectedButton;
pub use notice_container::NoticeContainer;
