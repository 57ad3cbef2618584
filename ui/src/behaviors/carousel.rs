//! Drag-scroll carousel behavior.
//!
//! While the pointer is held down on the container, horizontal scroll
//! offset follows pointer travel scaled by a multiplier. Releasing the
//! pointer or leaving the container ends the drag.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, MouseEvent};

/// Class toggled on the container while a drag is active.
const ACTIVE_CLASS: &str = "active";

#[derive(Default)]
struct DragState {
    active: bool,
    start_x: i32,
    scroll_origin: i32,
}

/// Drag-to-scroll binding for a horizontal container.
pub struct DragScroll {
    container: HtmlElement,
    on_down: Closure<dyn FnMut(MouseEvent)>,
    on_move: Closure<dyn FnMut(MouseEvent)>,
    on_up: Closure<dyn FnMut(MouseEvent)>,
    on_leave: Closure<dyn FnMut(MouseEvent)>,
}

impl DragScroll {
    /// Bind to the element with `container_id`; `None` when it is absent.
    pub fn bind(
        document: &Document,
        container_id: &str,
        multiplier: f64,
    ) -> Result<Option<Self>, JsValue> {
        let Some(element) = document.get_element_by_id(container_id) else {
            return Ok(None);
        };
        let container: HtmlElement = element.dyn_into()?;
        let state = Rc::new(RefCell::new(DragState::default()));

        let on_down = {
            let state = Rc::clone(&state);
            let container = container.clone();
            Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
                let mut drag = state.borrow_mut();
                drag.active = true;
                drag.start_x = event.page_x() - container.offset_left();
                drag.scroll_origin = container.scroll_left();
                let _ = container.class_list().add_1(ACTIVE_CLASS);
            })
        };

        let on_move = {
            let state = Rc::clone(&state);
            let container = container.clone();
            Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
                let drag = state.borrow();
                if !drag.active {
                    return;
                }
                event.prevent_default();
                let x = event.page_x() - container.offset_left();
                container.set_scroll_left(drag.scroll_origin - walk(x, drag.start_x, multiplier));
            })
        };

        let on_up = end_drag_closure(&state, &container);
        let on_leave = end_drag_closure(&state, &container);

        container
            .add_event_listener_with_callback("mousedown", on_down.as_ref().unchecked_ref())?;
        container
            .add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())?;
        container.add_event_listener_with_callback("mouseup", on_up.as_ref().unchecked_ref())?;
        container
            .add_event_listener_with_callback("mouseleave", on_leave.as_ref().unchecked_ref())?;

        Ok(Some(Self {
            container,
            on_down,
            on_move,
            on_up,
            on_leave,
        }))
    }

    /// Detach the listeners.
    pub fn release(self) -> Result<(), JsValue> {
        self.container
            .remove_event_listener_with_callback("mousedown", self.on_down.as_ref().unchecked_ref())?;
        self.container
            .remove_event_listener_with_callback("mousemove", self.on_move.as_ref().unchecked_ref())?;
        self.container
            .remove_event_listener_with_callback("mouseup", self.on_up.as_ref().unchecked_ref())?;
        self.container
            .remove_event_listener_with_callback("mouseleave", self.on_leave.as_ref().unchecked_ref())?;
        Ok(())
    }
}

/// Closure ending the current drag.
fn end_drag_closure(
    state: &Rc<RefCell<DragState>>,
    container: &HtmlElement,
) -> Closure<dyn FnMut(MouseEvent)> {
    let state = Rc::clone(state);
    let container = container.clone();
    Closure::new(move |_event: MouseEvent| {
        state.borrow_mut().active = false;
        let _ = container.class_list().remove_1(ACTIVE_CLASS);
    })
}

/// Scroll distance for pointer travel from `start_x` to `x`.
#[allow(clippy::cast_possible_truncation)]
fn walk(x: i32, start_x: i32, multiplier: f64) -> i32 {
    (f64::from(x - start_x) * multiplier) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walk_is_proportional_to_travel() {
        assert_eq!(walk(110, 100, 2.0), 20);
        assert_eq!(walk(100, 100, 2.0), 0);
        assert_eq!(walk(90, 100, 2.0), -20);
    }

    #[test]
    fn test_walk_respects_multiplier() {
        assert_eq!(walk(110, 100, 1.0), 10);
        assert_eq!(walk(110, 100, 0.5), 5);
    }
}
