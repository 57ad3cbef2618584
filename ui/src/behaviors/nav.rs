//! Smooth anchor scroll behavior.
//!
//! Clicks on same-page anchor links suppress default navigation and animate
//! scroll to the target element's top. The bare `#` href and anchors whose
//! target is missing keep their default behavior.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, MouseEvent, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition};

/// Click bindings for every `a[href^="#"]` link on the page.
pub struct AnchorScroll {
    bindings: Vec<AnchorBinding>,
}

struct AnchorBinding {
    link: Element,
    on_click: Closure<dyn FnMut(MouseEvent)>,
}

impl AnchorScroll {
    pub fn bind(document: &Document) -> Result<Self, JsValue> {
        let mut bindings = Vec::new();
        let links = document.query_selector_all(r##"a[href^="#"]"##)?;
        for index in 0..links.length() {
            let Some(node) = links.get(index) else {
                continue;
            };
            let Ok(link) = node.dyn_into::<Element>() else {
                continue;
            };

            let on_click = {
                let document = document.clone();
                let link = link.clone();
                Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
                    let Some(href) = link.get_attribute("href") else {
                        return;
                    };
                    if !is_same_page_anchor(&href) {
                        return;
                    }
                    let Some(target) = document.get_element_by_id(&href[1..]) else {
                        return;
                    };
                    event.prevent_default();
                    scroll_to(&target);
                })
            };
            link.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
            bindings.push(AnchorBinding { link, on_click });
        }
        Ok(Self { bindings })
    }

    /// Detach all listeners.
    pub fn release(self) -> Result<(), JsValue> {
        for binding in self.bindings {
            binding.link.remove_event_listener_with_callback(
                "click",
                binding.on_click.as_ref().unchecked_ref(),
            )?;
        }
        Ok(())
    }
}

/// An href qualifies when it points at a fragment on this page; the bare
/// `#` does not.
fn is_same_page_anchor(href: &str) -> bool {
    href.starts_with('#') && href != "#"
}

fn scroll_to(target: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_hrefs_qualify() {
        assert!(is_same_page_anchor("#section1"));
        assert!(is_same_page_anchor("#top"));
    }

    #[test]
    fn test_bare_hash_and_urls_do_not() {
        assert!(!is_same_page_anchor("#"));
        assert!(!is_same_page_anchor("/about"));
        assert!(!is_same_page_anchor("https://example.com/#x"));
    }
}
