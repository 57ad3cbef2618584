//! Hover dropdown behavior.
//!
//! Entering a dropdown container reveals its menu panel, leaving hides it.
//! Purely presentational; the panel transitions on inline style.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, MouseEvent};

/// Hover bindings for every `.dropdown` container on the page.
pub struct DropdownMenus {
    bindings: Vec<DropdownBinding>,
}

struct DropdownBinding {
    container: Element,
    on_enter: Closure<dyn FnMut(MouseEvent)>,
    on_leave: Closure<dyn FnMut(MouseEvent)>,
}

impl DropdownMenus {
    /// Bind every container that has both an `a` trigger and a
    /// `.dropdown-menu` panel; containers missing either are skipped.
    pub fn bind(document: &Document) -> Result<Self, JsValue> {
        let mut bindings = Vec::new();
        let containers = document.query_selector_all(".dropdown")?;
        for index in 0..containers.length() {
            let Some(node) = containers.get(index) else {
                continue;
            };
            let Ok(container) = node.dyn_into::<Element>() else {
                continue;
            };
            if let Some(binding) = DropdownBinding::bind(&container)? {
                bindings.push(binding);
            }
        }
        Ok(Self { bindings })
    }

    /// Detach all listeners.
    pub fn release(self) -> Result<(), JsValue> {
        for binding in self.bindings {
            binding.release()?;
        }
        Ok(())
    }
}

impl DropdownBinding {
    fn bind(container: &Element) -> Result<Option<Self>, JsValue> {
        let trigger = container.query_selector("a")?;
        let panel = container.query_selector(".dropdown-menu")?;
        let (Some(_trigger), Some(panel)) = (trigger, panel) else {
            return Ok(None);
        };
        let Ok(panel) = panel.dyn_into::<HtmlElement>() else {
            return Ok(None);
        };

        let on_enter = reveal_closure(&panel, true);
        let on_leave = reveal_closure(&panel, false);
        container
            .add_event_listener_with_callback("mouseenter", on_enter.as_ref().unchecked_ref())?;
        container
            .add_event_listener_with_callback("mouseleave", on_leave.as_ref().unchecked_ref())?;

        Ok(Some(Self {
            container: container.clone(),
            on_enter,
            on_leave,
        }))
    }

    fn release(self) -> Result<(), JsValue> {
        self.container.remove_event_listener_with_callback(
            "mouseenter",
            self.on_enter.as_ref().unchecked_ref(),
        )?;
        self.container.remove_event_listener_with_callback(
            "mouseleave",
            self.on_leave.as_ref().unchecked_ref(),
        )?;
        Ok(())
    }
}

fn reveal_closure(panel: &HtmlElement, revealed: bool) -> Closure<dyn FnMut(MouseEvent)> {
    let panel = panel.clone();
    Closure::new(move |_event: MouseEvent| {
        set_revealed(&panel, revealed);
    })
}

/// Inline style transition between the hidden and revealed panel states.
fn set_revealed(panel: &HtmlElement, revealed: bool) {
    let (opacity, visibility, transform) = if revealed {
        ("1", "visible", "translateY(0)")
    } else {
        ("0", "hidden", "translateY(-10px)")
    };

    let style = panel.style();
    let _ = style.set_property("opacity", opacity);
    let _ = style.set_property("visibility", visibility);
    let _ = style.set_property("transform", transform);
}
