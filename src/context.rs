//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::query::ListFilters;

/// Outcome of the last user-triggered operation, shown in the feedback area
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Feedback {
    pub text: String,
    pub ok: bool,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct CatalogContext {
    /// Trigger to reload the product list - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload the product list - write
    set_reload_trigger: WriteSignal<u32>,
    /// Last operation outcome - read
    pub feedback: ReadSignal<Feedback>,
    set_feedback: WriteSignal<Feedback>,
}

impl CatalogContext {
    pub fn new(
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        feedback: (ReadSignal<Feedback>, WriteSignal<Feedback>),
    ) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            feedback: feedback.0,
            set_feedback: feedback.1,
        }
    }

    /// Trigger a reload of the current page
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Replace the feedback line with a success message
    pub fn set_ok(&self, text: impl Into<String>) {
        self.set_feedback.set(Feedback {
            text: text.into(),
            ok: true,
        });
    }

    /// Replace the feedback line with an error message
    pub fn set_err(&self, text: impl Into<String>) {
        self.set_feedback.set(Feedback {
            text: text.into(),
            ok: false,
        });
    }
}

/// Get the catalog context from Leptos context
pub fn use_catalog_context() -> CatalogContext {
    use_context::<CatalogContext>().expect("CatalogContext should be provided")
}

/// Filter input signals, shared between the filter bar and the list effect
#[derive(Clone, Copy)]
pub struct FilterState {
    pub name: RwSignal<String>,
    pub category: RwSignal<String>,
    pub min_price: RwSignal<String>,
    pub max_price: RwSignal<String>,
    pub active: RwSignal<String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self {
            name: RwSignal::new(String::new()),
            category: RwSignal::new(String::new()),
            min_price: RwSignal::new(String::new()),
            max_price: RwSignal::new(String::new()),
            active: RwSignal::new(String::new()),
        }
    }

    /// Read the live filter values without tracking. The list effect calls
    /// this on every run, so filters persist exactly as long as the inputs
    /// hold them - typing alone never triggers a request.
    pub fn snapshot(&self) -> ListFilters {
        ListFilters {
            name: self.name.get_untracked(),
            category: self.category.get_untracked(),
            min_price: self.min_price.get_untracked(),
            max_price: self.max_price.get_untracked(),
            active: self.active.get_untracked(),
        }
    }

    /// Reset every filter input to blank
    pub fn clear(&self) {
        self.name.set(String::new());
        self.category.set(String::new());
        self.min_price.set(String::new());
        self.max_price.set(String::new());
        self.active.set(String::new());
    }
}

/// Get the filter state from Leptos context
pub fn use_filter_state() -> FilterState {
    use_context::<FilterState>().expect("FilterState should be provided")
}
