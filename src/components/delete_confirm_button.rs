//! Delete Confirm Button Component
//!
//! Inline two-step delete: the first click only arms the confirmation, and
//! cancelling leaves everything untouched. No request is sent until the user
//! confirms.

use leptos::prelude::*;

#[component]
pub fn DeleteConfirmButton(
    /// CSS class for the initial button
    #[prop(into)]
    button_class: String,
    /// Runs once the user confirms
    #[prop(into)]
    on_confirm: Callback<()>,
) -> impl IntoView {
    let (armed, set_armed) = signal(false);

    view! {
        {move || if armed.get() {
            view! {
                <span class="delete-confirm">
                    <span class="delete-confirm-text">"Confirma a exclusão?"</span>
                    <button
                        class="confirm-btn"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            set_armed.set(false);
                            on_confirm.run(());
                        }
                    >
                        "Sim"
                    </button>
                    <button
                        class="cancel-btn"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            set_armed.set(false);
                        }
                    >
                        "Não"
                    </button>
                </span>
            }.into_any()
        } else {
            let class = button_class.clone();
            view! {
                <button
                    class=class
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_armed.set(true);
                    }
                >
                    "Excluir"
                </button>
            }.into_any()
        }}
    }
}
