//! DOM behavior bindings.
//!
//! Each behavior binds to a resolved element set and returns a handle
//! holding its listeners. Dropping a handle through `release` detaches the
//! listeners; `forget` leaks them for page-lifetime bindings.

mod carousel;
mod dropdown;
mod form;
mod nav;

pub use carousel::DragScroll;
pub use dropdown::DropdownMenus;
pub use form::FormSubmit;
pub use nav::AnchorScroll;

use wasm_bindgen::JsValue;
use web_sys::Document;

/// Element ids and endpoint the shipped pages use.
pub const CAROUSEL_ID: &str = "projectsContainer";
pub const FORM_ID: &str = "priceCalculator";
pub const FORM_ENDPOINT: &str = "/api/submit-form";

/// Scroll distance per pixel of pointer travel for the carousel.
pub const DRAG_MULTIPLIER: f64 = 2.0;

/// Handles for every behavior bound on a page.
pub struct PageBindings {
    carousel: Option<DragScroll>,
    form: Option<FormSubmit>,
    dropdowns: DropdownMenus,
    anchors: AnchorScroll,
}

/// Bind all behaviors against a document. Behaviors whose target elements
/// are absent bind to nothing and stay inert.
pub fn bind_page(document: &Document) -> Result<PageBindings, JsValue> {
    Ok(PageBindings {
        carousel: DragScroll::bind(document, CAROUSEL_ID, DRAG_MULTIPLIER)?,
        form: FormSubmit::bind(document, FORM_ID, FORM_ENDPOINT)?,
        dropdowns: DropdownMenus::bind(document)?,
        anchors: AnchorScroll::bind(document)?,
    })
}

impl PageBindings {
    /// Keep every listener alive for the remaining page lifetime.
    pub fn forget(self) {
        std::mem::forget(self);
    }

    /// Detach every listener.
    pub fn release(self) -> Result<(), JsValue> {
        if let Some(carousel) = self.carousel {
            carousel.release()?;
        }
        if let Some(form) = self.form {
            form.release()?;
        }
        self.dropdowns.release()?;
        self.anchors.release()?;
        Ok(())
    }
}
