//! UI Components
//!
//! Leptos components for the catalog screen.

mod delete_confirm_button;
mod feedback_bar;
mod filter_bar;
mod pager_bar;
mod product_form;
mod product_table;

pub use delete_confirm_button::DeleteConfirmButton;
pub use feedback_bar::FeedbackBar;
pub use filter_bar::FilterBar;
pub use pager_bar::PagerBar;
pub use product_form::ProductForm;
pub use product_table::ProductTable;
