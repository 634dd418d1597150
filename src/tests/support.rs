//! Test doubles for the three seams of [`App`]: transport, dialogs, surface.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};
use std::future::Future;
use std::rc::Rc;

use async_trait::async_trait;
use futures::channel::oneshot;
use serde_json::{json, Value};

use crate::app::{ActionSink, App, Surface};
use crate::dialog::{Dialogs, FormSpec, FormValues};
use crate::network::{ApiClient, ApiError, ApiRequest, Method, Transport};
use crate::router::Route;
use crate::state::AppState;
use crate::views::page::Page;
use crate::views::profiles::ProfileSwitcher;

pub fn block_on<F: Future>(future: F) -> F::Output {
    futures::executor::block_on(future)
}

/// Scripted REST backend.  Each `(method, path)` has a queue of replies;
/// the last reply repeats.  Unscripted GETs answer 404, other unscripted
/// requests answer `null`.  A gated request waits until its gate opens.
#[derive(Default)]
pub struct MockBackend {
    replies: RefCell<HashMap<(Method, String), VecDeque<Result<Value, ApiError>>>>,
    requests: RefCell<Vec<ApiRequest>>,
    gates: RefCell<HashMap<(Method, String), oneshot::Receiver<()>>>,
}

impl MockBackend {
    pub fn reply(&self, method: Method, path: &str, body: Value) {
        self.push(method, path, Ok(body));
    }

    pub fn fail(&self, method: Method, path: &str, status: u16, status_text: &str) {
        self.push(
            method,
            path,
            Err(ApiError::Status {
                status,
                status_text: status_text.to_string(),
            }),
        );
    }

    fn push(&self, method: Method, path: &str, reply: Result<Value, ApiError>) {
        self.replies
            .borrow_mut()
            .entry((method, path.to_string()))
            .or_default()
            .push_back(reply);
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    /// `"METHOD path"` of every request so far.
    pub fn log(&self) -> Vec<String> {
        self.requests
            .borrow()
            .iter()
            .map(|r| format!("{} {}", r.method.as_str(), r.path))
            .collect()
    }

    pub fn forget_requests(&self) {
        self.requests.borrow_mut().clear();
    }

    pub fn forget_replies(&self) {
        self.replies.borrow_mut().clear();
    }

    /// Hold the next `method path` request until the returned sender fires.
    pub fn gate(&self, method: Method, path: &str) -> oneshot::Sender<()> {
        let (open, wait) = oneshot::channel();
        self.gates.borrow_mut().insert((method, path.to_string()), wait);
        open
    }
}

#[async_trait(?Send)]
impl Transport for MockBackend {
    async fn send(&self, request: &ApiRequest) -> Result<Value, ApiError> {
        self.requests.borrow_mut().push(request.clone());
        let gate = self
            .gates
            .borrow_mut()
            .remove(&(request.method, request.path.clone()));
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        let mut replies = self.replies.borrow_mut();
        let Some(queue) = replies.get_mut(&(request.method, request.path.clone())) else {
            return match request.method {
                Method::Get => Err(ApiError::Status {
                    status: 404,
                    status_text: "Not Found".into(),
                }),
                _ => Ok(Value::Null),
            };
        };
        if queue.len() > 1 {
            queue.pop_front().unwrap_or(Ok(Value::Null))
        } else {
            queue.front().cloned().unwrap_or(Ok(Value::Null))
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shown {
    Message { text: String, title: String },
    Confirmation { text: String },
    Form(FormSpec),
}

/// Dialogs answered from a script.  Unscripted confirmations answer
/// `false`, unscripted forms are cancelled.
#[derive(Default)]
pub struct ScriptedDialogs {
    shown: RefCell<Vec<Shown>>,
    confirmations: RefCell<VecDeque<bool>>,
    forms: RefCell<VecDeque<Option<Vec<(String, String)>>>>,
}

impl ScriptedDialogs {
    pub fn confirm_next(&self, answer: bool) {
        self.confirmations.borrow_mut().push_back(answer);
    }

    /// Submit the next form.  Fields not listed keep their pre-filled value.
    pub fn submit_next(&self, typed: &[(&str, &str)]) {
        let typed = typed
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        self.forms.borrow_mut().push_back(Some(typed));
    }

    pub fn cancel_next(&self) {
        self.forms.borrow_mut().push_back(None);
    }

    pub fn shown(&self) -> Vec<Shown> {
        self.shown.borrow().clone()
    }

    pub fn messages(&self) -> Vec<(String, String)> {
        self.shown
            .borrow()
            .iter()
            .filter_map(|s| match s {
                Shown::Message { text, title } => Some((text.clone(), title.clone())),
                _ => None,
            })
            .collect()
    }

    pub fn forms(&self) -> Vec<FormSpec> {
        self.shown
            .borrow()
            .iter()
            .filter_map(|s| match s {
                Shown::Form(form) => Some(form.clone()),
                _ => None,
            })
            .collect()
    }
}

#[async_trait(?Send)]
impl Dialogs for ScriptedDialogs {
    async fn show_message(&self, text: &str, title: &str) {
        self.shown.borrow_mut().push(Shown::Message {
            text: text.to_string(),
            title: title.to_string(),
        });
    }

    async fn show_confirmation(&self, text: &str, _title: &str) -> bool {
        self.shown.borrow_mut().push(Shown::Confirmation {
            text: text.to_string(),
        });
        self.confirmations.borrow_mut().pop_front().unwrap_or(false)
    }

    async fn show_form(&self, form: FormSpec) -> Option<FormValues> {
        self.shown.borrow_mut().push(Shown::Form(form.clone()));
        let typed = self.forms.borrow_mut().pop_front().flatten()?;
        Some(form.collect(|field| {
            typed
                .iter()
                .find(|(name, _)| *name == field.name)
                .map(|(_, value)| value.clone())
                .or_else(|| Some(field.value.clone()))
        }))
    }
}

/// Keeps every page and switcher painted.
#[derive(Default)]
pub struct RecordingSurface {
    pages: RefCell<Vec<Page>>,
    switchers: RefCell<Vec<ProfileSwitcher>>,
    active_tabs: RefCell<Vec<String>>,
    pub menu_open: Cell<bool>,
    pub sidebar_open: Cell<bool>,
    pub narrow: Cell<bool>,
}

impl RecordingSurface {
    pub fn pages(&self) -> Vec<Page> {
        self.pages.borrow().clone()
    }

    pub fn last_page(&self) -> Page {
        self.pages.borrow().last().cloned().expect("nothing painted")
    }

    pub fn last_switcher(&self) -> ProfileSwitcher {
        self.switchers
            .borrow()
            .last()
            .cloned()
            .expect("switcher never painted")
    }

    pub fn active_tabs(&self) -> Vec<String> {
        self.active_tabs.borrow().clone()
    }
}

impl Surface for RecordingSurface {
    fn bind_shell(&self, _sink: ActionSink) {}

    fn mark_active_tab(&self, route: &Route) {
        self.active_tabs.borrow_mut().push(route.id().to_string());
    }

    fn paint(&self, page: &Page, _sink: ActionSink) {
        self.pages.borrow_mut().push(page.clone());
    }

    fn paint_profiles(&self, switcher: &ProfileSwitcher, _sink: ActionSink) {
        self.switchers.borrow_mut().push(switcher.clone());
    }

    fn set_profile_menu_open(&self, open: bool) {
        self.menu_open.set(open);
    }

    fn toggle_sidebar(&self, open: Option<bool>) {
        let next = open.unwrap_or(!self.sidebar_open.get());
        self.sidebar_open.set(next);
    }

    fn is_narrow_viewport(&self) -> bool {
        self.narrow.get()
    }
}

pub struct Harness {
    pub app: App,
    pub backend: Rc<MockBackend>,
    pub dialogs: Rc<ScriptedDialogs>,
    pub surface: Rc<RecordingSurface>,
}

impl Harness {
    pub fn new() -> Self {
        let backend = Rc::new(MockBackend::default());
        let dialogs = Rc::new(ScriptedDialogs::default());
        let surface = Rc::new(RecordingSurface::default());
        let api = ApiClient::new(backend.clone(), dialogs.clone());
        let app = App::new(AppState::shared(), api, dialogs.clone(), surface.clone());
        Self {
            app,
            backend,
            dialogs,
            surface,
        }
    }

    /// Harness with profile `u1` ("Comercial") loaded and active, and the
    /// backend script and request log cleared.
    pub fn with_profile() -> Self {
        let h = Self::new();
        h.backend.reply(Method::Get, "/users", json!([profile_json("u1", "Comercial")]));
        block_on(h.app.load_profiles());
        h.app.dispatch(crate::messages::Message::SelectProfile("u1".into()));
        h.backend.forget_requests();
        h.backend.forget_replies();
        h
    }
}

pub fn profile_json(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "username": name.to_lowercase(),
        "password": "segredo",
        "created_at": "2024-05-01T09:00:00"
    })
}

pub fn instance_json(id: &str, name: &str, status: &str, created_at: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "phone": "+55 31 99999-0000",
        "status": status,
        "created_at": created_at,
        "metrics": {"today": 0, "groups": 0}
    })
}
