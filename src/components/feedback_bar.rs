//! Feedback Bar Component
//!
//! Single fixed area showing the outcome of the last operation. Each new
//! outcome replaces the previous one.

use leptos::prelude::*;

use crate::context::use_catalog_context;

#[component]
pub fn FeedbackBar() -> impl IntoView {
    let ctx = use_catalog_context();

    let class = move || {
        let feedback = ctx.feedback.get();
        if feedback.text.is_empty() {
            "feedback"
        } else if feedback.ok {
            "feedback ok"
        } else {
            "feedback err"
        }
    };

    view! {
        <div class=class>
            {move || ctx.feedback.get().text}
        </div>
    }
}
