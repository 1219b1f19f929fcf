//! Product Form Component
//!
//! Create/edit form plus the stock adjustment controls. Submitting with no
//! editing id creates a product; with one, it updates that product.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::use_catalog_context;
use crate::form_state::{stock_target, use_form_state};

#[component]
pub fn ProductForm() -> impl IntoView {
    let ctx = use_catalog_context();
    let form = use_form_state();

    let save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let editing = form.editing_id();
        let input = form.read();
        spawn_local(async move {
            match api::save(editing, &input).await {
                Ok(_) => {
                    let text = if editing.is_some() {
                        "Produto atualizado com sucesso."
                    } else {
                        "Produto criado com sucesso."
                    };
                    ctx.set_ok(text);
                    form.clear();
                    ctx.reload();
                }
                // Form is left as-is so the user can correct it
                Err(e) => ctx.set_err(e.or_generic("salvar")),
            }
        });
    };

    let adjust = move |_| {
        let id = match stock_target(form.editing_id()) {
            Ok(id) => id,
            Err(msg) => {
                ctx.set_err(msg);
                return;
            }
        };
        let delta: i32 = form.delta.get_untracked().trim().parse().unwrap_or(0);
        spawn_local(async move {
            match api::adjust_stock(id, delta).await {
                Ok(updated) => {
                    form.populate(&updated);
                    ctx.set_ok("Estoque ajustado.");
                    ctx.reload();
                }
                Err(e) => ctx.set_err(e.or_generic("ajustar estoque")),
            }
        });
    };

    view! {
        <form class="product-form" on:submit=save>
            <h2>{move || form.title.get()}</h2>

            <label>"Nome"</label>
            <input
                type="text"
                prop:value=move || form.name.get()
                on:input=move |ev| form.name.set(event_target_value(&ev))
            />

            <label>"Descrição"</label>
            <textarea
                prop:value=move || form.description.get()
                on:input=move |ev| form.description.set(event_target_value(&ev))
            ></textarea>

            <label>"Preço"</label>
            <input
                type="number"
                step="0.01"
                prop:value=move || form.price.get()
                on:input=move |ev| form.price.set(event_target_value(&ev))
            />

            <label>"Categoria"</label>
            <input
                type="text"
                prop:value=move || form.category.get()
                on:input=move |ev| form.category.set(event_target_value(&ev))
            />

            <label>"Estoque"</label>
            <input
                type="number"
                prop:value=move || form.stock.get()
                on:input=move |ev| form.stock.set(event_target_value(&ev))
            />

            <label class="checkbox-row">
                <input
                    type="checkbox"
                    prop:checked=move || form.active.get()
                    on:change=move |ev| form.active.set(event_target_checked(&ev))
                />
                "Ativo"
            </label>

            <div class="form-actions">
                <button type="submit">"Salvar"</button>
                <button type="button" on:click=move |_| form.clear()>"Limpar"</button>
            </div>

            <div class="stock-row">
                <label>"Ajuste de estoque"</label>
                <input
                    type="number"
                    prop:value=move || form.delta.get()
                    on:input=move |ev| form.delta.set(event_target_value(&ev))
                />
                <button type="button" on:click=adjust>"Ajustar estoque"</button>
            </div>
        </form>
    }
}
