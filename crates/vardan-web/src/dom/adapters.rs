//! Binder traits over live DOM nodes.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement, HtmlOptionElement, HtmlSelectElement};

use vardan_commerce::binder::{AttributeTarget, ControlReader, SelectedOption};

/// Attribute access on an element.
pub struct ElementAttributes<'a>(pub &'a Element);

impl AttributeTarget for ElementAttributes<'_> {
    fn get_attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        let _ = self.0.set_attribute(name, value);
    }

    fn remove_attribute(&mut self, name: &str) {
        let _ = self.0.remove_attribute(name);
    }
}

/// Reads quantity inputs and variant selects from the document.
pub struct DocumentControls<'a>(pub &'a Document);

impl ControlReader for DocumentControls<'_> {
    fn input_value(&self, selector: &str) -> Option<String> {
        let el = self.0.query_selector(selector).ok()??;
        match el.dyn_ref::<HtmlInputElement>() {
            Some(input) => Some(input.value()),
            None => el.get_attribute("value"),
        }
    }

    fn selected_option(&self, selector: &str) -> Option<SelectedOption> {
        let select = self
            .0
            .query_selector(selector)
            .ok()??
            .dyn_into::<HtmlSelectElement>()
            .ok()?;
        let index = u32::try_from(select.selected_index()).ok()?;
        let option = select.item(index)?.dyn_into::<HtmlOptionElement>().ok()?;
        Some(SelectedOption {
            value: option.value(),
            text: option.text(),
            price: option.get_attribute("data-price"),
        })
    }
}
