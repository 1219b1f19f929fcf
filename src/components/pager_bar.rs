//! Pager Bar Component
//!
//! Previous/next controls driven by the server-reported page count.

use leptos::prelude::*;

use crate::paging::Pager;
use crate::store::{store_set_page, use_catalog_store, CatalogStateStoreFields};

#[component]
pub fn PagerBar() -> impl IntoView {
    let store = use_catalog_store();
    let pager = move || Pager::new(store.page().get(), store.total_pages().get());

    view! {
        <div class="pager">
            <button
                prop:disabled=move || pager().at_first()
                on:click=move |_| store_set_page(&store, pager().prev())
            >
                "Anterior"
            </button>
            <span>{move || pager().label()}</span>
            <button
                prop:disabled=move || pager().at_last()
                on:click=move |_| store_set_page(&store, pager().next())
            >
                "Próxima"
            </button>
        </div>
    }
}
