//! Product Form State
//!
//! Signals backing the create/edit form, shared via context so the table's
//! edit action and the stock controls can write into the same form.

use leptos::prelude::*;

use crate::models::{Product, ProductInput};

const NEW_PRODUCT_TITLE: &str = "Novo produto";

/// Form fields plus the id of the product currently loaded for editing.
///
/// The editing id is only ever set by [`FormState::populate`], i.e. after a
/// successful load-for-edit or stock adjustment, and cleared by
/// [`FormState::clear`].
#[derive(Clone, Copy)]
pub struct FormState {
    /// Id of the product being edited, None while creating - read
    pub editing: ReadSignal<Option<i64>>,
    set_editing: WriteSignal<Option<i64>>,
    /// Form heading: "Novo produto" or "Editar produto #id" - read
    pub title: ReadSignal<String>,
    set_title: WriteSignal<String>,
    pub name: RwSignal<String>,
    pub description: RwSignal<String>,
    pub price: RwSignal<String>,
    pub category: RwSignal<String>,
    pub stock: RwSignal<String>,
    pub active: RwSignal<bool>,
    /// Signed delta for the stock adjustment controls
    pub delta: RwSignal<String>,
}

impl FormState {
    pub fn new() -> Self {
        let (editing, set_editing) = signal(None);
        let (title, set_title) = signal(NEW_PRODUCT_TITLE.to_string());
        Self {
            editing,
            set_editing,
            title,
            set_title,
            name: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            price: RwSignal::new(String::new()),
            category: RwSignal::new(String::new()),
            stock: RwSignal::new(String::new()),
            active: RwSignal::new(true),
            delta: RwSignal::new("1".to_string()),
        }
    }

    /// Current editing id, read without tracking
    pub fn editing_id(&self) -> Option<i64> {
        self.editing.get_untracked()
    }

    /// Load a product into the form and mark it as the one being edited
    pub fn populate(&self, product: &Product) {
        self.set_editing.set(Some(product.id));
        self.name.set(product.name.clone());
        self.description
            .set(product.description.clone().unwrap_or_default());
        self.price.set(product.price.to_string());
        self.category
            .set(product.category.clone().unwrap_or_default());
        self.stock.set(product.stock_quantity.to_string());
        self.active.set(product.active);
        self.set_title.set(format!("Editar produto #{}", product.id));
    }

    /// Reset every field and drop the editing id
    pub fn clear(&self) {
        self.set_editing.set(None);
        self.name.set(String::new());
        self.description.set(String::new());
        self.price.set(String::new());
        self.category.set(String::new());
        self.stock.set(String::new());
        self.active.set(true);
        self.delta.set("1".to_string());
        self.set_title.set(NEW_PRODUCT_TITLE.to_string());
    }

    /// Assemble the request body from the current field values
    pub fn read(&self) -> ProductInput {
        ProductInput::from_fields(
            &self.name.get_untracked(),
            &self.description.get_untracked(),
            &self.price.get_untracked(),
            &self.category.get_untracked(),
            &self.stock.get_untracked(),
            self.active.get_untracked(),
        )
    }
}

/// Get the form state from Leptos context
pub fn use_form_state() -> FormState {
    use_context::<FormState>().expect("FormState should be provided")
}

/// A stock adjustment needs a loaded product; without one it fails locally,
/// before any request is built.
pub fn stock_target(editing: Option<i64>) -> Result<i64, &'static str> {
    editing.ok_or("Selecione um produto para ajustar o estoque.")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_product() -> Product {
        Product {
            id: 7,
            name: "Café torrado".to_string(),
            description: Some("500g".to_string()),
            price: 19.9,
            category: Some("Mercearia".to_string()),
            stock_quantity: 12,
            active: false,
        }
    }

    #[test]
    fn test_populate_fills_fields_and_title() {
        let form = FormState::new();
        form.populate(&sample_product());

        assert_eq!(form.editing_id(), Some(7));
        assert_eq!(form.name.get_untracked(), "Café torrado");
        assert_eq!(form.description.get_untracked(), "500g");
        assert_eq!(form.price.get_untracked(), "19.9");
        assert_eq!(form.category.get_untracked(), "Mercearia");
        assert_eq!(form.stock.get_untracked(), "12");
        assert!(!form.active.get_untracked());
        assert_eq!(form.title.get_untracked(), "Editar produto #7");
    }

    #[test]
    fn test_clear_resets_every_field() {
        let form = FormState::new();
        form.populate(&sample_product());
        form.delta.set("-3".to_string());

        form.clear();

        assert_eq!(form.editing_id(), None);
        assert_eq!(form.name.get_untracked(), "");
        assert_eq!(form.description.get_untracked(), "");
        assert_eq!(form.price.get_untracked(), "");
        assert_eq!(form.category.get_untracked(), "");
        assert_eq!(form.stock.get_untracked(), "");
        assert!(form.active.get_untracked());
        assert_eq!(form.delta.get_untracked(), "1");
        assert_eq!(form.title.get_untracked(), "Novo produto");
    }

    #[test]
    fn test_read_assembles_input_from_fields() {
        let form = FormState::new();
        form.name.set(" Arroz ".to_string());
        form.price.set("8.5".to_string());
        form.stock.set("4".to_string());

        let input = form.read();
        assert_eq!(input.name, "Arroz");
        assert_eq!(input.price, 8.5);
        assert_eq!(input.stock_quantity, 4);
        assert_eq!(input.category, None);
        assert!(input.active);
    }

    #[test]
    fn test_stock_target_requires_editing_id() {
        assert_eq!(
            stock_target(None),
            Err("Selecione um produto para ajustar o estoque.")
        );
        assert_eq!(stock_target(Some(3)), Ok(3));
    }
}
