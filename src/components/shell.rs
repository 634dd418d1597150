//! DOM implementation of [`Surface`]: paints page models into the static
//! shell built by [`crate::ui::setup::create_shell`].

use std::cell::RefCell;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event};

use crate::app::{ActionSink, Surface};
use crate::constants::{
    ATTR_DATA_TAB, CSS_ACTIVE, CSS_NAV_ITEM, CSS_SIDEBAR_FOOTER, ID_MAIN_CONTAINER,
    ID_PROFILE_ARROW, ID_PROFILE_DROPDOWN, ID_PROFILE_HANDLE, ID_PROFILE_LIST, ID_PROFILE_NAME,
    ID_PROFILE_TRIGGER, ID_SIDEBAR, ID_SIDEBAR_OVERLAY, ID_SIDEBAR_TOGGLE, NARROW_VIEWPORT_PX,
};
use crate::dom_utils::{self, ListenerGuard};
use crate::router::Route;
use crate::views::messages::EMPTY_LIST;
use crate::views::page::{ActionButton, Card, Inbox, MetricCard, Page, PageBody, ThreadPane, ViewAction};
use crate::views::profiles::{self, ProfileSwitcher};
use crate::{error_log, warn_log};

pub struct DomSurface {
    document: Document,
    shell_listeners: RefCell<Vec<ListenerGuard>>,
    page_listeners: RefCell<Vec<ListenerGuard>>,
    profile_listeners: RefCell<Vec<ListenerGuard>>,
}

/// Collects the listeners of one paint.
struct Painter<'a> {
    doc: &'a Document,
    sink: ActionSink,
    listeners: Vec<ListenerGuard>,
}

impl<'a> Painter<'a> {
    fn on_click(&mut self, element: &Element, action: ViewAction) -> Result<(), JsValue> {
        let sink = self.sink.clone();
        self.listeners.push(ListenerGuard::attach(element, "click", move |_e: Event| {
            sink(action.clone())
        })?);
        Ok(())
    }

    fn action_button(&mut self, button: &ActionButton) -> Result<Element, JsValue> {
        let el = dom_utils::button(self.doc, button.style.class_name(), Some(button.icon), &button.label)?;
        self.on_click(&el, button.action.clone())?;
        Ok(el)
    }

    fn page(&mut self, page: &Page, container: &Element) -> Result<(), JsValue> {
        let doc = self.doc;
        let header = dom_utils::el(doc, "div", "header")?;
        let h1 = dom_utils::el(doc, "h1", "")?;
        dom_utils::append(&h1, dom_utils::icon(doc, page.icon)?)?;
        h1.append_child(&doc.create_text_node(&format!(" {}", page.title)))?;
        header.append_child(&h1)?;
        if let Some(action) = &page.header_action {
            dom_utils::append(&header, self.action_button(action)?)?;
        }
        container.append_child(&header)?;

        match &page.body {
            PageBody::NoProfile => {
                let (heading, hint) = Page::no_profile_copy();
                dom_utils::append(container, notice(doc, "fas fa-user-slash", heading, hint)?)?;
            }
            PageBody::Notice { heading, hint } => {
                dom_utils::append(container, notice(doc, "fas fa-code", heading, hint)?)?;
            }
            PageBody::Metrics(cards) => {
                let grid = dom_utils::el(doc, "div", "dashboard-metrics")?;
                for card in cards {
                    dom_utils::append(&grid, metric_card(doc, card)?)?;
                }
                container.append_child(&grid)?;
            }
            PageBody::Grid(cards) => {
                let grid = dom_utils::el(doc, "div", "content-grid")?;
                for card in cards {
                    dom_utils::append(&grid, self.card(card)?)?;
                }
                container.append_child(&grid)?;
            }
            PageBody::Inbox(inbox) => {
                dom_utils::append(container, self.inbox(inbox)?)?;
            }
        }
        Ok(())
    }

    fn card(&mut self, card: &Card) -> Result<Element, JsValue> {
        let doc = self.doc;
        let class = if card.is_empty_state() {
            "content-card empty-card"
        } else {
            "content-card"
        };
        let root = dom_utils::el(doc, "div", class)?;
        if let Some(badge) = &card.badge {
            dom_utils::append(&root, dom_utils::text_el(doc, "div", badge.tone.class_name(), badge.text)?)?;
        }

        let header = dom_utils::el(doc, "div", "card-header")?;
        let heading = dom_utils::el(doc, "div", "")?;
        dom_utils::append(&heading, dom_utils::text_el(doc, "h3", "card-title", &card.title)?)?;
        dom_utils::append(&heading, dom_utils::text_el(doc, "p", "card-subtitle", &card.subtitle)?)?;
        header.append_child(&heading)?;
        root.append_child(&header)?;

        if let Some(excerpt) = &card.excerpt {
            dom_utils::append(&root, dom_utils::text_el(doc, "p", "card-excerpt", excerpt)?)?;
        }
        if !card.breakdown.is_empty() {
            let breakdown = dom_utils::el(doc, "div", "metric-breakdown")?;
            for (label, value) in &card.breakdown {
                let item = dom_utils::el(doc, "div", "breakdown-item")?;
                dom_utils::append(&item, dom_utils::text_el(doc, "span", "breakdown-label", label)?)?;
                dom_utils::append(&item, dom_utils::text_el(doc, "span", "breakdown-value", value)?)?;
                breakdown.append_child(&item)?;
            }
            root.append_child(&breakdown)?;
        }
        if !card.actions.is_empty() {
            let actions = dom_utils::el(doc, "div", "card-actions")?;
            for action in &card.actions {
                dom_utils::append(&actions, self.action_button(action)?)?;
            }
            root.append_child(&actions)?;
        }
        Ok(root)
    }

    fn inbox(&mut self, inbox: &Inbox) -> Result<Element, JsValue> {
        let doc = self.doc;
        let root = dom_utils::el(doc, "div", "inbox")?;

        let list = dom_utils::el(doc, "div", "inbox-list")?;
        let list_header = dom_utils::el(doc, "div", "inbox-list-header")?;
        dom_utils::append(&list_header, dom_utils::text_el(doc, "h3", "", "Conversas")?)?;
        let unread = format!("{} não lidas", inbox.unread_conversations);
        dom_utils::append(&list_header, dom_utils::text_el(doc, "p", "", &unread)?)?;
        list.append_child(&list_header)?;

        let items = dom_utils::el(doc, "div", "inbox-items")?;
        if inbox.items.is_empty() {
            dom_utils::append(&items, dom_utils::text_el(doc, "div", "inbox-empty", EMPTY_LIST)?)?;
        }
        for item in &inbox.items {
            let class = if item.selected {
                "conversation-item active"
            } else {
                "conversation-item"
            };
            let row = dom_utils::el(doc, "div", class)?;
            dom_utils::append(&row, dom_utils::text_el(doc, "div", "conversation-avatar", &item.initials)?)?;
            let details = dom_utils::el(doc, "div", "conversation-details")?;
            let top = dom_utils::el(doc, "div", "conversation-top")?;
            dom_utils::append(&top, dom_utils::text_el(doc, "h4", "", &item.name)?)?;
            dom_utils::append(&top, dom_utils::text_el(doc, "span", "conversation-time", &item.time)?)?;
            details.append_child(&top)?;
            dom_utils::append(&details, dom_utils::text_el(doc, "p", "conversation-last", &item.last_message)?)?;
            let bottom = dom_utils::el(doc, "div", "conversation-bottom")?;
            dom_utils::append(&bottom, dom_utils::text_el(doc, "span", "conversation-instance", &item.instance_name)?)?;
            if item.unread > 0 {
                dom_utils::append(&bottom, dom_utils::text_el(doc, "span", "unread-badge", &item.unread.to_string())?)?;
            }
            details.append_child(&bottom)?;
            row.append_child(&details)?;
            self.on_click(&row, ViewAction::OpenConversation(item.id.clone()))?;
            items.append_child(&row)?;
        }
        list.append_child(&items)?;
        root.append_child(&list)?;
        dom_utils::append(&root, self.thread(&inbox.thread)?)?;
        Ok(root)
    }

    fn thread(&mut self, thread: &ThreadPane) -> Result<Element, JsValue> {
        let doc = self.doc;
        let pane = dom_utils::el(doc, "div", "inbox-thread")?;
        let header = dom_utils::el(doc, "div", "thread-header")?;
        let heading = dom_utils::el(doc, "div", "")?;
        dom_utils::append(&heading, dom_utils::text_el(doc, "h3", "", &thread.title)?)?;
        dom_utils::append(&heading, dom_utils::text_el(doc, "p", "", &thread.subtitle)?)?;
        header.append_child(&heading)?;
        if !thread.actions.is_empty() {
            let actions = dom_utils::el(doc, "div", "card-actions")?;
            for action in &thread.actions {
                dom_utils::append(&actions, self.action_button(action)?)?;
            }
            header.append_child(&actions)?;
        }
        pane.append_child(&header)?;

        let bubbles = dom_utils::el(doc, "div", "thread-messages")?;
        for bubble in &thread.bubbles {
            let class = if bubble.outgoing {
                "bubble outgoing"
            } else {
                "bubble incoming"
            };
            let el = dom_utils::el(doc, "div", class)?;
            let text = dom_utils::el(doc, "p", "")?;
            dom_utils::append_multiline(doc, &text, &bubble.text)?;
            el.append_child(&text)?;
            dom_utils::append(&el, dom_utils::text_el(doc, "span", "bubble-time", &bubble.time)?)?;
            bubbles.append_child(&el)?;
        }
        pane.append_child(&bubbles)?;
        Ok(pane)
    }

    fn profiles(&mut self, switcher: &ProfileSwitcher, list: &Element) -> Result<(), JsValue> {
        let doc = self.doc;
        if switcher.entries.is_empty() {
            dom_utils::append(list, dom_utils::text_el(doc, "div", "profile-empty", profiles::EMPTY_LIST)?)?;
        }
        for entry in &switcher.entries {
            let class = if entry.active {
                "profile-item active"
            } else {
                "profile-item"
            };
            let item = dom_utils::el(doc, "div", class)?;
            let details = dom_utils::el(doc, "div", "profile-details")?;
            dom_utils::append(&details, dom_utils::text_el(doc, "div", "name", &entry.name)?)?;
            dom_utils::append(&details, dom_utils::text_el(doc, "div", "handle", &entry.handle)?)?;
            item.append_child(&details)?;
            if entry.active {
                dom_utils::append(&item, dom_utils::icon(doc, "fas fa-check profile-check")?)?;
            }
            self.on_click(&item, ViewAction::SelectProfile(entry.id.clone()))?;
            list.append_child(&item)?;
        }
        let actions = dom_utils::el(doc, "div", "profile-actions")?;
        for action in &switcher.actions {
            dom_utils::append(&actions, self.action_button(action)?)?;
        }
        list.append_child(&actions)?;
        Ok(())
    }
}

fn notice(doc: &Document, icon: &str, heading: &str, hint: &str) -> Result<Element, JsValue> {
    let root = dom_utils::el(doc, "div", "notice")?;
    dom_utils::append(&root, dom_utils::icon(doc, &format!("{} notice-icon", icon))?)?;
    dom_utils::append(&root, dom_utils::text_el(doc, "h2", "", heading)?)?;
    dom_utils::append(&root, dom_utils::text_el(doc, "p", "", hint)?)?;
    Ok(root)
}

fn metric_card(doc: &Document, card: &MetricCard) -> Result<Element, JsValue> {
    let root = dom_utils::el(doc, "div", "metric-card")?;
    let header = dom_utils::el(doc, "div", "metric-header")?;
    dom_utils::append(&header, dom_utils::text_el(doc, "div", "metric-title", &card.title)?)?;
    let icon_box = dom_utils::el(doc, "div", "metric-icon")?;
    dom_utils::append(&icon_box, dom_utils::icon(doc, card.icon)?)?;
    header.append_child(&icon_box)?;
    root.append_child(&header)?;
    dom_utils::append(&root, dom_utils::text_el(doc, "div", "metric-value", &card.value)?)?;
    dom_utils::append(&root, dom_utils::text_el(doc, "div", "metric-subtitle", &card.subtitle)?)?;
    Ok(root)
}

impl DomSurface {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            shell_listeners: RefCell::new(Vec::new()),
            page_listeners: RefCell::new(Vec::new()),
            profile_listeners: RefCell::new(Vec::new()),
        }
    }

    fn by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn try_bind_shell(&self, sink: ActionSink) -> Result<(), JsValue> {
        let mut guards = Vec::new();

        let nav_items = self.document.query_selector_all(&format!(".{}", CSS_NAV_ITEM))?;
        for i in 0..nav_items.length() {
            let Some(item) = nav_items.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
                continue;
            };
            let tab_id = item.get_attribute(ATTR_DATA_TAB).unwrap_or_default();
            let sink = sink.clone();
            guards.push(ListenerGuard::attach(&item, "click", move |_e: Event| {
                sink(ViewAction::Navigate(Route::parse(&tab_id)))
            })?);
        }

        for id in [ID_SIDEBAR_TOGGLE, ID_SIDEBAR_OVERLAY] {
            if let Some(el) = self.by_id(id) {
                let sink = sink.clone();
                guards.push(ListenerGuard::attach(&el, "click", move |_e: Event| {
                    sink(ViewAction::ToggleSidebar)
                })?);
            }
        }

        if let Some(trigger) = self.by_id(ID_PROFILE_TRIGGER) {
            let sink = sink.clone();
            guards.push(ListenerGuard::attach(&trigger, "click", move |_e: Event| {
                sink(ViewAction::ToggleProfileMenu)
            })?);
        }

        let footer_selector = format!(".{}", CSS_SIDEBAR_FOOTER);
        guards.push(ListenerGuard::attach(&self.document, "click", move |e: Event| {
            let inside_footer = e
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .and_then(|t| t.closest(&footer_selector).ok().flatten())
                .is_some();
            if !inside_footer {
                sink(ViewAction::CloseProfileMenu);
            }
        })?);

        *self.shell_listeners.borrow_mut() = guards;
        Ok(())
    }

    fn try_paint(&self, page: &Page, sink: ActionSink) -> Result<(), JsValue> {
        let container = self
            .by_id(ID_MAIN_CONTAINER)
            .ok_or_else(|| JsValue::from_str("no #mainContainer"))?;
        // Old listeners go before their nodes do.
        self.page_listeners.borrow_mut().clear();
        dom_utils::clear_children(&container);

        let mut painter = Painter {
            doc: &self.document,
            sink,
            listeners: Vec::new(),
        };
        let painted = painter.page(page, &container);
        *self.page_listeners.borrow_mut() = painter.listeners;
        painted
    }

    fn try_paint_profiles(&self, switcher: &ProfileSwitcher, sink: ActionSink) -> Result<(), JsValue> {
        if let Some(name) = self.by_id(ID_PROFILE_NAME) {
            name.set_text_content(Some(&switcher.name));
        }
        if let Some(handle) = self.by_id(ID_PROFILE_HANDLE) {
            handle.set_text_content(Some(&switcher.handle));
        }
        let list = self
            .by_id(ID_PROFILE_LIST)
            .ok_or_else(|| JsValue::from_str("no #profileList"))?;
        self.profile_listeners.borrow_mut().clear();
        dom_utils::clear_children(&list);

        let mut painter = Painter {
            doc: &self.document,
            sink,
            listeners: Vec::new(),
        };
        let painted = painter.profiles(switcher, &list);
        *self.profile_listeners.borrow_mut() = painter.listeners;
        painted
    }
}

impl Surface for DomSurface {
    fn bind_shell(&self, sink: ActionSink) {
        if let Err(err) = self.try_bind_shell(sink) {
            error_log!("failed to bind shell: {:?}", err);
        }
    }

    fn mark_active_tab(&self, route: &Route) {
        let Ok(items) = self.document.query_selector_all(&format!(".{}", CSS_NAV_ITEM)) else {
            return;
        };
        for i in 0..items.length() {
            if let Some(item) = items.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                let is_route = item.get_attribute(ATTR_DATA_TAB).as_deref() == Some(route.id());
                dom_utils::set_class(&item, CSS_ACTIVE, is_route);
            }
        }
    }

    fn paint(&self, page: &Page, sink: ActionSink) {
        if let Err(err) = self.try_paint(page, sink) {
            error_log!("failed to paint '{}': {:?}", page.title, err);
        }
    }

    fn paint_profiles(&self, switcher: &ProfileSwitcher, sink: ActionSink) {
        if let Err(err) = self.try_paint_profiles(switcher, sink) {
            error_log!("failed to paint profile switcher: {:?}", err);
        }
    }

    fn set_profile_menu_open(&self, open: bool) {
        for id in [ID_PROFILE_DROPDOWN, ID_PROFILE_ARROW] {
            if let Some(el) = self.by_id(id) {
                dom_utils::set_class(&el, CSS_ACTIVE, open);
            }
        }
    }

    fn toggle_sidebar(&self, open: Option<bool>) {
        let (Some(sidebar), Some(overlay)) = (self.by_id(ID_SIDEBAR), self.by_id(ID_SIDEBAR_OVERLAY)) else {
            warn_log!("sidebar markup missing");
            return;
        };
        let show = open.unwrap_or_else(|| !sidebar.class_list().contains(CSS_ACTIVE));
        dom_utils::set_class(&sidebar, CSS_ACTIVE, show);
        dom_utils::set_class(&overlay, CSS_ACTIVE, show);
    }

    fn is_narrow_viewport(&self) -> bool {
        web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|w| w.as_f64())
            .map_or(false, |width| width <= NARROW_VIEWPORT_PX)
    }
}
