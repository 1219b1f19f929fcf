//! Product Table Component
//!
//! One row per product on the current page, with edit and delete actions.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::DeleteConfirmButton;
use crate::context::use_catalog_context;
use crate::form_state::use_form_state;
use crate::models::format_price;
use crate::store::{use_catalog_store, CatalogStateStoreFields};

#[component]
pub fn ProductTable(loading: ReadSignal<bool>) -> impl IntoView {
    let ctx = use_catalog_context();
    let store = use_catalog_store();
    let form = use_form_state();

    // Load-for-edit: the form only changes when the fetch succeeds
    let edit = move |id: i64| {
        spawn_local(async move {
            match api::get(id).await {
                Ok(product) => {
                    form.populate(&product);
                    ctx.set_ok("Produto carregado para edição.");
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("[TABLE] get {} failed: status {}", id, e.status).into(),
                    );
                    ctx.set_err("Erro ao carregar produto para edição");
                }
            }
        });
    };

    let remove = move |id: i64| {
        spawn_local(async move {
            match api::delete(id).await {
                Ok(()) => {
                    ctx.set_ok(format!("Produto {} removido.", id));
                    ctx.reload();
                }
                Err(e) => ctx.set_err(e.or_generic("excluir")),
            }
        });
    };

    view! {
        <Show when=move || loading.get()>
            <div class="loading">"Carregando..."</div>
        </Show>

        <table class="products-table">
            <thead>
                <tr>
                    <th>"Id"</th>
                    <th>"Nome"</th>
                    <th>"Categoria"</th>
                    <th>"Preço"</th>
                    <th>"Estoque"</th>
                    <th>"Situação"</th>
                    <th>"Ações"</th>
                </tr>
            </thead>
            <tbody>
                <Show when=move || store.products().get().is_empty()>
                    <tr>
                        <td colspan="7" class="empty-row">"Nenhum produto encontrado"</td>
                    </tr>
                </Show>
                <For
                    each=move || store.products().get()
                    key=|product| product.id
                    children=move |product| {
                        let id = product.id;
                        let category = product.category.clone().unwrap_or_else(|| "-".to_string());
                        let badge = if product.active { "Ativo" } else { "Inativo" };
                        view! {
                            <tr>
                                <td>{id}</td>
                                <td>{product.name.clone()}</td>
                                <td>{category}</td>
                                <td>{format_price(product.price)}</td>
                                <td>{product.stock_quantity}</td>
                                <td><span class="badge">{badge}</span></td>
                                <td>
                                    <button class="inline-btn" on:click=move |_| edit(id)>
                                        "Editar"
                                    </button>
                                    <DeleteConfirmButton
                                        button_class="inline-btn"
                                        on_confirm=Callback::new(move |_| remove(id))
                                    />
                                </td>
                            </tr>
                        }
                    }
                />
            </tbody>
        </table>
    }
}
