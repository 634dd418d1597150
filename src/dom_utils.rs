//! dom_utils.rs – thin helper layer for repetitive DOM operations.
//!
//! Element builders, focus helpers and [`ListenerGuard`], which owns an
//! event listener for exactly as long as it is attached.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement};

use crate::constants::{ATTR_TYPE, BUTTON_TYPE_BUTTON};

pub type EventClosure = Closure<dyn FnMut(Event)>;

pub fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))
}

/// Append a freshly built element: `append(&parent, el(..)?)?`.
pub fn append(parent: &Element, child: Element) -> Result<(), JsValue> {
    parent.append_child(&child)?;
    Ok(())
}

/// `<tag class="class">`.  An empty `class` leaves the attribute off.
pub fn el(document: &Document, tag: &str, class: &str) -> Result<Element, JsValue> {
    let element = document.create_element(tag)?;
    if !class.is_empty() {
        element.set_class_name(class);
    }
    Ok(element)
}

/// Like [`el`] with text content.  Text is never parsed as markup.
pub fn text_el(document: &Document, tag: &str, class: &str, text: &str) -> Result<Element, JsValue> {
    let element = el(document, tag, class)?;
    element.set_text_content(Some(text));
    Ok(element)
}

/// `<i class="icon">` for Font Awesome glyphs.
pub fn icon(document: &Document, icon: &str) -> Result<Element, JsValue> {
    el(document, "i", icon)
}

/// `<button type="button">` with an optional leading icon.
pub fn button(document: &Document, class: &str, icon_class: Option<&str>, label: &str) -> Result<Element, JsValue> {
    let btn = el(document, "button", class)?;
    btn.set_attribute(ATTR_TYPE, BUTTON_TYPE_BUTTON)?;
    if let Some(icon_class) = icon_class {
        append(&btn, icon(document, icon_class)?)?;
        btn.append_child(&document.create_text_node(&format!(" {}", label)))?;
    } else {
        btn.set_text_content(Some(label));
    }
    Ok(btn)
}

/// Append `text` to `parent`, turning each `\n` into a `<br>`.
pub fn append_multiline(document: &Document, parent: &Element, text: &str) -> Result<(), JsValue> {
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            append(parent, document.create_element("br")?)?;
        }
        parent.append_child(&document.create_text_node(line))?;
    }
    Ok(())
}

pub fn clear_children(element: &Element) {
    while let Some(child) = element.first_child() {
        let _ = element.remove_child(&child);
    }
}

pub fn set_class(element: &Element, class: &str, on: bool) {
    let _ = element.class_list().toggle_with_force(class, on);
}

pub fn focus(element: &Element) -> bool {
    match element.dyn_ref::<HtmlElement>() {
        Some(html) => html.focus().is_ok(),
        None => false,
    }
}

/// Focus the first form control within the given container.
/// Returns true if an element was focused, false otherwise.
pub fn focus_first_field(container: &Element) -> bool {
    match container.query_selector("input:not([disabled]), select:not([disabled]), textarea:not([disabled])") {
        Ok(Some(element)) => focus(&element),
        _ => false,
    }
}

/// An attached event listener.  Detaching (or dropping the guard) removes
/// it from the target.  The closure itself is released on a later tick, so
/// a listener may detach itself from inside its own callback.
pub struct ListenerGuard {
    target: EventTarget,
    event: &'static str,
    closure: Option<EventClosure>,
    live: Option<Rc<Cell<usize>>>,
}

impl ListenerGuard {
    pub fn attach<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Self, JsValue>
    where
        F: FnMut(Event) + 'static,
    {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            closure: Some(closure),
            live: None,
        })
    }

    /// Count this listener in `live` until it is detached.
    pub fn counted(mut self, live: &Rc<Cell<usize>>) -> Self {
        if self.is_attached() {
            live.set(live.get() + 1);
            self.live = Some(live.clone());
        }
        self
    }

    pub fn is_attached(&self) -> bool {
        self.closure.is_some()
    }

    /// Remove the listener.  Returns whether it was still attached.
    pub fn detach(&mut self) -> bool {
        let Some(closure) = self.closure.take() else {
            return false;
        };
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, closure.as_ref().unchecked_ref());
        spawn_local(async move { drop(closure) });
        if let Some(live) = self.live.take() {
            live.set(live.get().saturating_sub(1));
        }
        true
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        self.detach();
    }
}
