//! Filter Bar Component
//!
//! Filter inputs above the table. Searching jumps back to the first page;
//! clearing resets every filter and searches again.

use leptos::prelude::*;

use crate::context::{use_catalog_context, CatalogContext, use_filter_state};
use crate::store::{store_set_page, use_catalog_store, CatalogStateStoreFields, CatalogStore};

/// Jump back to the first page and refresh the listing once: the page write
/// alone retriggers the list effect, so the trigger is only bumped when the
/// listing is already on page 0.
fn refresh_from_first_page(store: &CatalogStore, ctx: &CatalogContext) {
    if store.page().get_untracked() == 0 {
        ctx.reload();
    } else {
        store_set_page(store, 0);
    }
}

#[component]
pub fn FilterBar() -> impl IntoView {
    let ctx = use_catalog_context();
    let store = use_catalog_store();
    let filters = use_filter_state();

    let search = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        refresh_from_first_page(&store, &ctx);
    };

    let reset = move |_| {
        filters.clear();
        refresh_from_first_page(&store, &ctx);
    };

    view! {
        <form class="filter-bar" on:submit=search>
            <input
                type="text"
                placeholder="Nome"
                prop:value=move || filters.name.get()
                on:input=move |ev| filters.name.set(event_target_value(&ev))
            />
            <input
                type="text"
                placeholder="Categoria"
                prop:value=move || filters.category.get()
                on:input=move |ev| filters.category.set(event_target_value(&ev))
            />
            <input
                type="number"
                step="0.01"
                placeholder="Preço mín."
                prop:value=move || filters.min_price.get()
                on:input=move |ev| filters.min_price.set(event_target_value(&ev))
            />
            <input
                type="number"
                step="0.01"
                placeholder="Preço máx."
                prop:value=move || filters.max_price.get()
                on:input=move |ev| filters.max_price.set(event_target_value(&ev))
            />
            <select
                prop:value=move || filters.active.get()
                on:change=move |ev| filters.active.set(event_target_value(&ev))
            >
                <option value="">"Todos"</option>
                <option value="true">"Ativos"</option>
                <option value="false">"Inativos"</option>
            </select>
            <button type="submit">"Buscar"</button>
            <button type="button" on:click=reset>"Limpar filtros"</button>
        </form>
    }
}
