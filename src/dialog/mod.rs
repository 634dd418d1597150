//! Dialog engine: what a modal shows and how a user action resolves it.
//!
//! This module is DOM-free.  [`DialogSpec`] describes one modal and decides
//! how each [`DialogEvent`] resolves it; the browser implementation lives in
//! [`crate::components::modal`] and only wires DOM events to
//! [`DialogSpec::resolve`].  Callers talk to the [`Dialogs`] trait so view
//! handlers can be exercised without a browser.

pub mod fields;

use async_trait::async_trait;

use crate::constants::{LABEL_CANCEL, LABEL_CONFIRM, LABEL_OK, TITLE_ALERT, TITLE_CONFIRM};

pub use fields::{FieldKind, FieldSpec, FormSpec, FormValues, SelectOption};

/// The user-facing dialog operations.
#[async_trait(?Send)]
pub trait Dialogs {
    /// Informational text with a single acknowledgement.  Always completes.
    async fn show_message(&self, text: &str, title: &str);

    /// `true` only when the confirm action was chosen.
    async fn show_confirmation(&self, text: &str, title: &str) -> bool;

    /// Submitted values, or `None` when cancelled.
    async fn show_form(&self, form: FormSpec) -> Option<FormValues>;
}

/// Convenience wrappers with the default titles.
pub async fn alert(dialogs: &dyn Dialogs, text: &str) {
    dialogs.show_message(text, TITLE_ALERT).await
}

pub async fn confirm(dialogs: &dyn Dialogs, text: &str) -> bool {
    dialogs.show_confirmation(text, TITLE_CONFIRM).await
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    Primary,
    Ghost,
}

/// What choosing a footer button means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonValue {
    Acknowledge,
    Confirm,
    Cancel,
    Submit,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ButtonSpec {
    pub label: String,
    pub variant: ButtonVariant,
    pub value: ButtonValue,
}

impl ButtonSpec {
    fn new(label: &str, variant: ButtonVariant, value: ButtonValue) -> Self {
        Self {
            label: label.to_string(),
            variant,
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DialogBody {
    Text(String),
    Form(Vec<FieldSpec>),
}

/// Everything that can happen to an open modal.
#[derive(Debug, Clone, PartialEq)]
pub enum DialogEvent {
    /// Footer button at this index.
    Button(usize),
    /// The `×` in the header.
    CloseButton,
    /// A click that landed on the overlay itself, outside the box.
    Backdrop,
    /// A key press inside the modal, by `KeyboardEvent.key`.
    Key(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Chosen(ButtonValue),
    Dismissed,
}

/// Where focus goes when the modal mounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    FirstField,
    PrimaryButton,
}

pub const CANCEL_KEY: &str = "Escape";

#[derive(Debug, Clone, PartialEq)]
pub struct DialogSpec {
    pub title: String,
    pub body: DialogBody,
    pub buttons: Vec<ButtonSpec>,
    pub dismissible: bool,
}

impl DialogSpec {
    pub fn message(text: &str, title: &str) -> Self {
        Self {
            title: title.to_string(),
            body: DialogBody::Text(text.to_string()),
            buttons: vec![ButtonSpec::new(LABEL_OK, ButtonVariant::Primary, ButtonValue::Acknowledge)],
            dismissible: true,
        }
    }

    pub fn confirmation(text: &str, title: &str) -> Self {
        Self {
            title: title.to_string(),
            body: DialogBody::Text(text.to_string()),
            buttons: vec![
                ButtonSpec::new(LABEL_CANCEL, ButtonVariant::Ghost, ButtonValue::Cancel),
                ButtonSpec::new(LABEL_CONFIRM, ButtonVariant::Primary, ButtonValue::Confirm),
            ],
            dismissible: true,
        }
    }

    /// Forms must be cancelled or submitted explicitly.
    pub fn form(form: &FormSpec) -> Self {
        Self {
            title: form.title.clone(),
            body: DialogBody::Form(form.fields.clone()),
            buttons: vec![
                ButtonSpec::new(LABEL_CANCEL, ButtonVariant::Ghost, ButtonValue::Cancel),
                ButtonSpec::new(&form.submit_label, ButtonVariant::Primary, ButtonValue::Submit),
            ],
            dismissible: false,
        }
    }

    pub fn with_dismissible(mut self, dismissible: bool) -> Self {
        self.dismissible = dismissible;
        self
    }

    /// Resolve an event, or `None` when the modal must stay open.
    pub fn resolve(&self, event: &DialogEvent) -> Option<Resolution> {
        match event {
            DialogEvent::Button(index) => self
                .buttons
                .get(*index)
                .map(|button| Resolution::Chosen(button.value)),
            DialogEvent::CloseButton => Some(Resolution::Dismissed),
            DialogEvent::Backdrop if self.dismissible => Some(Resolution::Dismissed),
            DialogEvent::Key(key) if self.dismissible && key == CANCEL_KEY => {
                Some(Resolution::Dismissed)
            }
            DialogEvent::Backdrop | DialogEvent::Key(_) => None,
        }
    }

    pub fn focus_target(&self) -> FocusTarget {
        match &self.body {
            DialogBody::Form(fields) if !fields.is_empty() => FocusTarget::FirstField,
            _ => FocusTarget::PrimaryButton,
        }
    }
}

impl Resolution {
    pub fn confirmed(self) -> bool {
        self == Resolution::Chosen(ButtonValue::Confirm)
    }

    pub fn submitted(self) -> bool {
        self == Resolution::Chosen(ButtonValue::Submit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(k: &str) -> DialogEvent {
        DialogEvent::Key(k.to_string())
    }

    #[test]
    fn confirmation_buttons_map_to_bool() {
        let spec = DialogSpec::confirmation("Remover?", TITLE_CONFIRM);
        assert!(!spec.resolve(&DialogEvent::Button(0)).unwrap().confirmed());
        assert!(spec.resolve(&DialogEvent::Button(1)).unwrap().confirmed());
    }

    #[test]
    fn confirmation_dismissal_paths_are_not_confirmed() {
        let spec = DialogSpec::confirmation("Remover?", TITLE_CONFIRM);
        for event in [DialogEvent::Backdrop, DialogEvent::CloseButton, key("Escape")] {
            let resolution = spec.resolve(&event).expect("dismissible");
            assert_eq!(resolution, Resolution::Dismissed);
            assert!(!resolution.confirmed());
        }
    }

    #[test]
    fn other_keys_keep_the_modal_open() {
        let spec = DialogSpec::message("ok", TITLE_ALERT);
        assert_eq!(spec.resolve(&key("Enter")), None);
        assert_eq!(spec.resolve(&key("a")), None);
    }

    #[test]
    fn forms_ignore_backdrop_and_cancel_key() {
        let form = FormSpec::new("Novo", vec![FieldSpec::text("name", "Nome")], "Criar");
        let spec = DialogSpec::form(&form);
        assert!(!spec.dismissible);
        assert_eq!(spec.resolve(&DialogEvent::Backdrop), None);
        assert_eq!(spec.resolve(&key("Escape")), None);
        assert_eq!(spec.resolve(&DialogEvent::CloseButton), Some(Resolution::Dismissed));
        assert!(spec.resolve(&DialogEvent::Button(1)).unwrap().submitted());
        assert!(!spec.resolve(&DialogEvent::Button(0)).unwrap().submitted());
    }

    #[test]
    fn non_dismissible_message_ignores_escape() {
        let spec = DialogSpec::message("hi", TITLE_ALERT).with_dismissible(false);
        assert_eq!(spec.resolve(&key("Escape")), None);
    }

    #[test]
    fn out_of_range_button_is_ignored() {
        let spec = DialogSpec::message("hi", TITLE_ALERT);
        assert_eq!(spec.resolve(&DialogEvent::Button(7)), None);
    }

    #[test]
    fn focus_prefers_fields() {
        let form = FormSpec::new("x", vec![FieldSpec::password("p", "Senha")], "Ok");
        assert_eq!(DialogSpec::form(&form).focus_target(), FocusTarget::FirstField);
        assert_eq!(
            DialogSpec::confirmation("x", "y").focus_target(),
            FocusTarget::PrimaryButton
        );
    }
}
