//! Catalog App
//!
//! Root component: owns the store, context and form state, and runs the list
//! effect that keeps the table in sync with the backend.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::components::{FeedbackBar, FilterBar, PagerBar, ProductForm, ProductTable};
use crate::context::{CatalogContext, Feedback, FilterState};
use crate::form_state::FormState;
use crate::store::{store_apply_page, CatalogState, CatalogStateStoreFields, CatalogStore};

#[component]
pub fn App() -> impl IntoView {
    let store: CatalogStore = Store::new(CatalogState::new());
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let (feedback, set_feedback) = signal(Feedback::default());
    let ctx = CatalogContext::new((reload_trigger, set_reload_trigger), (feedback, set_feedback));
    let filters = FilterState::new();
    let form = FormState::new();
    let (loading, set_loading) = signal(false);

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);
    provide_context(filters);
    provide_context(form);

    // Load the listing on mount, on every reload and on page changes. The
    // filter inputs are read untracked, like re-reading the live DOM: typing
    // in a filter never fires a request by itself.
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        let page = store.page().get();
        let snapshot = filters.snapshot();
        web_sys::console::log_1(
            &format!("[APP] Loading products page={}, trigger={}", page, trigger).into(),
        );
        set_loading.set(true);
        spawn_local(async move {
            match api::list(&snapshot, page).await {
                Ok(data) => store_apply_page(&store, data.content, data.total_pages),
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("[APP] List failed: status {}", e.status).into(),
                    );
                    ctx.set_err(format!("Erro ao carregar produtos ({})", e.status));
                }
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="app-layout">
            <header class="top-bar">
                <h1>"Catálogo de produtos"</h1>
                <FeedbackBar />
            </header>

            <main class="content">
                <section class="card">
                    <FilterBar />
                    <ProductTable loading=loading />
                    <PagerBar />
                </section>

                <section class="card">
                    <ProductForm />
                </section>
            </main>
        </div>
    }
}
