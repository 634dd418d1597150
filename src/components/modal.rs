//! Browser modal manager.
//!
//! Mounts one overlay at a time inside `#modal-root` and turns DOM events
//! into [`DialogEvent`]s; [`DialogSpec::resolve`] decides what they mean.
//! Every listener a modal registers is scoped to its overlay and held in a
//! [`ListenerGuard`], so closing the modal leaves nothing attached.  The
//! overlay is focusable and keeps focus while open, so keyboard events
//! keep reaching it after a click on plain text.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use async_trait::async_trait;
use futures::channel::oneshot;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, Event, HtmlInputElement, HtmlOptionElement, HtmlSelectElement,
    HtmlTextAreaElement, KeyboardEvent, Node,
};

use crate::constants::{
    CSS_BTN_GHOST, CSS_BTN_PRIMARY, CSS_MODAL_BOX, CSS_MODAL_CLOSE, CSS_MODAL_OVERLAY,
    ID_MODAL_ROOT, LABEL_CLOSE,
};
use crate::dialog::{
    ButtonVariant, DialogBody, DialogEvent, DialogSpec, Dialogs, FieldKind, FieldSpec,
    FocusTarget, FormSpec, FormValues, Resolution,
};
use crate::dom_utils::{self, ListenerGuard};
use crate::{debug_log, error_log};

const CSS_INVALID: &str = "invalid";
const TITLE_ID: &str = "modal-title";
/// Targets that take focus themselves on mousedown.
const FOCUSABLE: &str = "input, select, textarea, button";

/// How an open modal ended.
struct Closed {
    resolution: Resolution,
    values: Option<FormValues>,
}

struct OpenModal {
    spec: DialogSpec,
    form: Option<FormSpec>,
    overlay: Element,
    listeners: Vec<ListenerGuard>,
    reply: Option<oneshot::Sender<Closed>>,
}

struct Inner {
    document: Document,
    open: RefCell<Option<OpenModal>>,
    /// Listeners attached by any modal of this manager and not yet removed.
    live: Rc<Cell<usize>>,
}

/// Owns the currently open modal.  Cheap to clone; clones share the modal.
#[derive(Clone)]
pub struct ModalManager {
    inner: Rc<Inner>,
}

impl ModalManager {
    pub fn new(document: Document) -> Self {
        Self {
            inner: Rc::new(Inner {
                document,
                open: RefCell::new(None),
                live: Rc::new(Cell::new(0)),
            }),
        }
    }

    /// Listeners still attached by every modal this manager ever mounted.
    /// Equals the open modal's own listeners, or 0 when none is open.
    pub fn attached_listener_count(&self) -> usize {
        self.inner.live.get()
    }

    pub fn is_open(&self) -> bool {
        self.inner.open.borrow().is_some()
    }

    async fn run(&self, spec: DialogSpec, form: Option<FormSpec>) -> Option<Closed> {
        match Inner::mount(&self.inner, spec, form) {
            Ok(receiver) => receiver.await.ok(),
            Err(err) => {
                error_log!("failed to mount modal: {:?}", err);
                None
            }
        }
    }
}

#[async_trait(?Send)]
impl Dialogs for ModalManager {
    async fn show_message(&self, text: &str, title: &str) {
        let _ = self.run(DialogSpec::message(text, title), None).await;
    }

    async fn show_confirmation(&self, text: &str, title: &str) -> bool {
        self.run(DialogSpec::confirmation(text, title), None)
            .await
            .map_or(false, |closed| closed.resolution.confirmed())
    }

    async fn show_form(&self, form: FormSpec) -> Option<FormValues> {
        let spec = DialogSpec::form(&form);
        let closed = self.run(spec, Some(form)).await?;
        if closed.resolution.submitted() {
            closed.values
        } else {
            None
        }
    }
}

impl Inner {
    fn mount(
        this: &Rc<Self>,
        spec: DialogSpec,
        form: Option<FormSpec>,
    ) -> Result<oneshot::Receiver<Closed>, JsValue> {
        // One modal at a time: the previous one resolves as dismissed.
        this.close(Resolution::Dismissed, None);

        let doc = &this.document;
        let overlay = dom_utils::el(doc, "div", CSS_MODAL_OVERLAY)?;
        overlay.set_attribute("tabindex", "-1")?;
        overlay.set_attribute("role", "dialog")?;
        overlay.set_attribute("aria-modal", "true")?;
        overlay.set_attribute("aria-labelledby", TITLE_ID)?;

        let modal_box = dom_utils::el(doc, "div", CSS_MODAL_BOX)?;
        overlay.append_child(&modal_box)?;

        let header = dom_utils::el(doc, "div", "modal-header")?;
        let title = dom_utils::text_el(doc, "h3", "modal-title", &spec.title)?;
        title.set_id(TITLE_ID);
        let close_btn = dom_utils::button(doc, CSS_MODAL_CLOSE, None, "×")?;
        close_btn.set_attribute("aria-label", LABEL_CLOSE)?;
        header.append_child(&title)?;
        header.append_child(&close_btn)?;
        modal_box.append_child(&header)?;

        let body = dom_utils::el(doc, "div", "modal-body")?;
        match &spec.body {
            DialogBody::Text(text) => {
                let p = dom_utils::el(doc, "p", "modal-text")?;
                dom_utils::append_multiline(doc, &p, text)?;
                body.append_child(&p)?;
            }
            DialogBody::Form(fields) => {
                let form_el = dom_utils::el(doc, "form", "modal-form")?;
                for field in fields {
                    dom_utils::append(&form_el, field_row(doc, field)?)?;
                }
                body.append_child(&form_el)?;
            }
        }
        modal_box.append_child(&body)?;

        let footer = dom_utils::el(doc, "div", "modal-footer")?;
        let mut buttons = Vec::with_capacity(spec.buttons.len());
        for button in &spec.buttons {
            let class = match button.variant {
                ButtonVariant::Primary => CSS_BTN_PRIMARY,
                ButtonVariant::Ghost => CSS_BTN_GHOST,
            };
            let btn = dom_utils::button(doc, class, None, &button.label)?;
            footer.append_child(&btn)?;
            buttons.push(btn);
        }
        modal_box.append_child(&footer)?;

        let weak = Rc::downgrade(this);
        let live = &this.live;
        let mut listeners = Vec::with_capacity(buttons.len() + 4);

        let overlay_node = overlay.clone();
        listeners.push(ListenerGuard::attach(&overlay, "click", {
            let weak = weak.clone();
            move |event: Event| {
                let on_backdrop = event
                    .target()
                    .and_then(|t| t.dyn_into::<Element>().ok())
                    .map_or(false, |t| t == overlay_node);
                if on_backdrop {
                    dispatch(&weak, DialogEvent::Backdrop, Some(&event));
                }
            }
        })?
        .counted(live));
        listeners.push(ListenerGuard::attach(&overlay, "mousedown", {
            let overlay_node = overlay.clone();
            move |event: Event| keep_focus(&overlay_node, &event)
        })?
        .counted(live));
        listeners.push(ListenerGuard::attach(&overlay, "keydown", {
            let weak = weak.clone();
            move |event: Event| {
                if let Some(key) = event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) {
                    dispatch(&weak, DialogEvent::Key(key), Some(&event));
                }
            }
        })?
        .counted(live));
        listeners.push(ListenerGuard::attach(&close_btn, "click", {
            let weak = weak.clone();
            move |_event: Event| dispatch(&weak, DialogEvent::CloseButton, None)
        })?
        .counted(live));
        for (index, btn) in buttons.iter().enumerate() {
            let weak = weak.clone();
            listeners.push(ListenerGuard::attach(btn, "click", move |_event: Event| {
                dispatch(&weak, DialogEvent::Button(index), None)
            })?
            .counted(live));
        }

        // Listeners first: a failed attach leaves nothing in the page.
        let root = match doc.get_element_by_id(ID_MODAL_ROOT) {
            Some(root) => root,
            None => doc
                .body()
                .map(Element::from)
                .ok_or_else(|| JsValue::from_str("no body"))?,
        };
        root.append_child(&overlay)?;

        let focus_target = spec.focus_target();
        let (sender, receiver) = oneshot::channel();
        *this.open.borrow_mut() = Some(OpenModal {
            spec,
            form,
            overlay: overlay.clone(),
            listeners,
            reply: Some(sender),
        });

        let focused = match focus_target {
            FocusTarget::FirstField => dom_utils::focus_first_field(&overlay),
            FocusTarget::PrimaryButton => false,
        };
        if !focused {
            let primary = overlay
                .query_selector(&format!(".modal-footer .{}", CSS_BTN_PRIMARY))
                .ok()
                .flatten();
            if !primary.map_or(false, |p| dom_utils::focus(&p)) {
                dom_utils::focus(&overlay);
            }
        }
        Ok(receiver)
    }

    fn handle(&self, event: DialogEvent, dom_event: Option<&Event>) {
        let (resolution, form) = {
            let open = self.open.borrow();
            let Some(modal) = open.as_ref() else {
                return;
            };
            let Some(resolution) = modal.spec.resolve(&event) else {
                return;
            };
            (resolution, modal.form.clone())
        };
        if let Some(dom_event) = dom_event {
            dom_event.prevent_default();
        }

        let values = match (&form, resolution.submitted()) {
            (Some(form), true) => {
                let values = self.collect(form);
                if let Some(missing) = form.first_missing_required(&values) {
                    self.flag_invalid(&missing.name);
                    return;
                }
                Some(values)
            }
            _ => None,
        };
        self.close(resolution, values);
    }

    fn control(&self, name: &str) -> Option<Element> {
        let open = self.open.borrow();
        let overlay = &open.as_ref()?.overlay;
        overlay.query_selector(&format!("[name=\"{}\"]", name)).ok().flatten()
    }

    fn collect(&self, form: &FormSpec) -> FormValues {
        form.collect(|field| self.control(&field.name).and_then(|el| control_value(&el)))
    }

    fn flag_invalid(&self, name: &str) {
        let open = self.open.borrow();
        let Some(modal) = open.as_ref() else {
            return;
        };
        if let Ok(controls) = modal.overlay.query_selector_all(&format!(".{}", CSS_INVALID)) {
            for i in 0..controls.length() {
                if let Some(el) = controls.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                    dom_utils::set_class(&el, CSS_INVALID, false);
                }
            }
        }
        drop(open);
        if let Some(control) = self.control(name) {
            dom_utils::set_class(&control, CSS_INVALID, true);
            dom_utils::focus(&control);
        }
    }

    /// Tear down the open modal, if any, and deliver its outcome.
    fn close(&self, resolution: Resolution, values: Option<FormValues>) {
        let Some(mut modal) = self.open.borrow_mut().take() else {
            return;
        };
        for listener in modal.listeners.iter_mut() {
            listener.detach();
        }
        modal.overlay.remove();
        debug_log!("modal '{}' closed: {:?}", modal.spec.title, resolution);
        if let Some(reply) = modal.reply.take() {
            let _ = reply.send(Closed { resolution, values });
        }
    }
}

/// Mousedown on text or padding would move focus to `<body>`, where Escape
/// no longer reaches the overlay.  Keep it inside instead.
fn keep_focus(overlay: &Element, event: &Event) {
    let on_control = event
        .target()
        .and_then(|t| t.dyn_into::<Element>().ok())
        .and_then(|t| t.closest(FOCUSABLE).ok().flatten())
        .is_some();
    if on_control {
        return;
    }
    event.prevent_default();
    let focus_inside = overlay
        .owner_document()
        .and_then(|doc| doc.active_element())
        .map_or(false, |active| {
            let active: &Node = &active;
            overlay.contains(Some(active))
        });
    if !focus_inside {
        dom_utils::focus(overlay);
    }
}

fn dispatch(weak: &Weak<Inner>, event: DialogEvent, dom_event: Option<&Event>) {
    if let Some(inner) = weak.upgrade() {
        inner.handle(event, dom_event);
    }
}

fn field_row(doc: &Document, field: &FieldSpec) -> Result<Element, JsValue> {
    let row = dom_utils::el(doc, "div", "form-row")?;
    let label = dom_utils::text_el(doc, "label", "", field.display_label())?;
    row.append_child(&label)?;

    let control = match &field.kind {
        FieldKind::Text { .. } | FieldKind::Password { .. } => {
            let input = dom_utils::el(doc, "input", "")?;
            let kind = if matches!(field.kind, FieldKind::Password { .. }) {
                "password"
            } else {
                "text"
            };
            input.set_attribute("type", kind)?;
            input.set_attribute("value", &field.value)?;
            input
        }
        FieldKind::TextArea { .. } => {
            let area = dom_utils::el(doc, "textarea", "")?;
            area.set_text_content(Some(&field.value));
            area
        }
        FieldKind::Select { options } => {
            let select = dom_utils::el(doc, "select", "")?;
            for option in options {
                let opt = dom_utils::text_el(doc, "option", "", &option.label)?;
                opt.set_attribute("value", &option.value)?;
                if option.value == field.value {
                    if let Some(opt) = opt.dyn_ref::<HtmlOptionElement>() {
                        opt.set_selected(true);
                    }
                }
                select.append_child(&opt)?;
            }
            select
        }
    };
    control.set_attribute("name", &field.name)?;
    if let Some(placeholder) = field.kind.placeholder() {
        control.set_attribute("placeholder", placeholder)?;
    }
    if field.required {
        control.set_attribute("required", "")?;
    }
    row.append_child(&control)?;
    Ok(row)
}

fn control_value(el: &Element) -> Option<String> {
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        return Some(area.value());
    }
    el.dyn_ref::<HtmlSelectElement>().map(HtmlSelectElement::value)
}
