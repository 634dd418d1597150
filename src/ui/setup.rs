use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

use crate::constants::{
    ATTR_DATA_TAB, CSS_NAV_ITEM, CSS_SIDEBAR_FOOTER, ID_MAIN_CONTAINER, ID_MODAL_ROOT,
    ID_PROFILE_ARROW, ID_PROFILE_DROPDOWN, ID_PROFILE_HANDLE, ID_PROFILE_LIST, ID_PROFILE_NAME,
    ID_PROFILE_TRIGGER, ID_SIDEBAR, ID_SIDEBAR_OVERLAY, ID_SIDEBAR_TOGGLE,
};
use crate::dom_utils::{self, el, text_el};
use crate::router::NAV_ENTRIES;
use crate::views::profiles::NO_PROFILE_NAME;

const APP_NAME: &str = "ZapDesk";

/// Build the static shell: sidebar with navigation and profile switcher,
/// the content region and the modal root.  Safe to call twice.
pub fn create_shell(document: &Document) -> Result<(), JsValue> {
    if document.get_element_by_id(ID_SIDEBAR).is_some() {
        return Ok(());
    }
    let body = document.body().ok_or(JsValue::from_str("No body found"))?;

    let overlay = el(document, "div", "sidebar-overlay")?;
    overlay.set_id(ID_SIDEBAR_OVERLAY);
    body.append_child(&overlay)?;

    let toggle = dom_utils::button(document, "sidebar-toggle", Some("fas fa-bars"), "")?;
    toggle.set_id(ID_SIDEBAR_TOGGLE);
    toggle.set_attribute("aria-label", "Menu")?;
    body.append_child(&toggle)?;

    let sidebar = el(document, "aside", "sidebar")?;
    sidebar.set_id(ID_SIDEBAR);

    let brand = el(document, "div", "sidebar-header")?;
    dom_utils::append(&brand, dom_utils::icon(document, "fab fa-whatsapp")?)?;
    dom_utils::append(&brand, text_el(document, "span", "brand", APP_NAME)?)?;
    sidebar.append_child(&brand)?;

    let nav = el(document, "nav", "sidebar-nav")?;
    for (tab_id, label, icon) in NAV_ENTRIES {
        dom_utils::append(&nav, nav_item(document, tab_id, label, icon)?)?;
    }
    sidebar.append_child(&nav)?;
    dom_utils::append(&sidebar, profile_footer(document)?)?;
    body.append_child(&sidebar)?;

    let main = el(document, "main", "main-container")?;
    main.set_id(ID_MAIN_CONTAINER);
    body.append_child(&main)?;

    let modal_root = el(document, "div", "")?;
    modal_root.set_id(ID_MODAL_ROOT);
    body.append_child(&modal_root)?;

    Ok(())
}

fn nav_item(document: &Document, tab_id: &str, label: &str, icon: &str) -> Result<Element, JsValue> {
    let item = el(document, "div", CSS_NAV_ITEM)?;
    item.set_attribute(ATTR_DATA_TAB, tab_id)?;
    item.set_attribute("role", "button")?;
    dom_utils::append(&item, dom_utils::icon(document, icon)?)?;
    dom_utils::append(&item, text_el(document, "span", "", label)?)?;
    Ok(item)
}

fn profile_footer(document: &Document) -> Result<Element, JsValue> {
    let footer = el(document, "div", CSS_SIDEBAR_FOOTER)?;

    let dropdown = el(document, "div", "profile-dropdown")?;
    dropdown.set_id(ID_PROFILE_DROPDOWN);
    let list = el(document, "div", "profile-list")?;
    list.set_id(ID_PROFILE_LIST);
    dropdown.append_child(&list)?;
    footer.append_child(&dropdown)?;

    let trigger = el(document, "div", "profile-trigger")?;
    trigger.set_id(ID_PROFILE_TRIGGER);
    trigger.set_attribute("role", "button")?;
    let avatar = el(document, "div", "profile-avatar")?;
    dom_utils::append(&avatar, dom_utils::icon(document, "fas fa-user")?)?;
    trigger.append_child(&avatar)?;

    let details = el(document, "div", "profile-details")?;
    let name = text_el(document, "div", "name", NO_PROFILE_NAME)?;
    name.set_id(ID_PROFILE_NAME);
    let handle = text_el(document, "div", "handle", crate::constants::MISSING_VALUE)?;
    handle.set_id(ID_PROFILE_HANDLE);
    details.append_child(&name)?;
    details.append_child(&handle)?;
    trigger.append_child(&details)?;

    let arrow = dom_utils::icon(document, "fas fa-chevron-up profile-arrow")?;
    arrow.set_id(ID_PROFILE_ARROW);
    trigger.append_child(&arrow)?;
    footer.append_child(&trigger)?;

    Ok(footer)
}
