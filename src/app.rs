// src/app.rs
//
// Application root: owns the shared state, the API client, the dialog
// manager and the painting surface, and drives navigation and actions.
//
use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;

use crate::dialog::Dialogs;
use crate::handlers;
use crate::messages::Message;
use crate::models::OperatorProfile;
use crate::network::{ApiClient, ApiError};
use crate::router::{Route, Tab};
use crate::state::{RenderTicket, SharedState};
use crate::views::{self, page::Page, page::ViewAction, profiles::ProfileSwitcher};
use crate::{debug_log, warn_log};

/// Callback a painted control invokes with the action it stands for.
pub type ActionSink = Rc<dyn Fn(ViewAction)>;

/// Everything the application needs from the page it lives in.
pub trait Surface {
    /// Wire the static shell (navigation, sidebar toggle, outside clicks).
    fn bind_shell(&self, sink: ActionSink);
    fn mark_active_tab(&self, route: &Route);
    fn paint(&self, page: &Page, sink: ActionSink);
    fn paint_profiles(&self, switcher: &ProfileSwitcher, sink: ActionSink);
    fn set_profile_menu_open(&self, open: bool);
    /// `None` flips the current state.
    fn toggle_sidebar(&self, open: Option<bool>);
    fn is_narrow_viewport(&self) -> bool;
}

#[derive(Clone)]
pub struct App {
    pub state: SharedState,
    pub api: ApiClient,
    pub dialogs: Rc<dyn Dialogs>,
    surface: Rc<dyn Surface>,
}

impl App {
    pub fn new(
        state: SharedState,
        api: ApiClient,
        dialogs: Rc<dyn Dialogs>,
        surface: Rc<dyn Surface>,
    ) -> Self {
        Self {
            state,
            api,
            dialogs,
            surface,
        }
    }

    pub fn dispatch(&self, msg: Message) {
        self.state.borrow_mut().dispatch(msg);
    }

    /// Snapshot of the active profile.  Cloned so no borrow outlives the call.
    pub fn active_profile(&self) -> Option<OperatorProfile> {
        self.state.borrow().active_profile().cloned()
    }

    pub fn sink(&self) -> ActionSink {
        let app = self.clone();
        Rc::new(move |action| {
            let app = app.clone();
            spawn_local(async move { app.perform(action).await });
        })
    }

    /// Boot sequence: wire the shell, load profiles, show the dashboard.
    pub async fn start(&self) {
        self.surface.bind_shell(self.sink());
        self.load_profiles().await;
        self.paint_profiles();
        self.navigate(Route::default()).await;
    }

    /// Re-fetch the profile list.  A failed fetch leaves an empty list; the
    /// client has already told the operator.
    pub async fn load_profiles(&self) {
        let profiles = self.api.list_profiles().await.unwrap_or_default();
        self.dispatch(Message::ProfilesLoaded(profiles));
    }

    pub fn paint_profiles(&self) {
        let (switcher, open) = {
            let state = self.state.borrow();
            (views::profiles::switcher(&state), state.profile_menu_open)
        };
        self.surface.paint_profiles(&switcher, self.sink());
        self.surface.set_profile_menu_open(open);
    }

    pub async fn navigate(&self, route: Route) {
        self.surface.mark_active_tab(&route);
        let ticket = self.state.borrow_mut().begin_render(route);
        let page = views::render(self, &ticket).await;
        if !self.state.borrow().is_current(&ticket) {
            debug_log!("discarding stale render of {}", ticket.route.id());
            return;
        }
        self.surface.paint(&page, self.sink());
        if self.surface.is_narrow_viewport() {
            self.surface.toggle_sidebar(Some(false));
        }
    }

    /// Re-render whatever view is showing, from a fresh fetch.
    pub async fn refresh(&self) {
        let route = self.state.borrow().active_route.clone();
        self.navigate(route).await;
    }

    /// Re-render the view owning `tab` from a fresh fetch.
    pub async fn show(&self, tab: Tab) {
        self.navigate(Route::Tab(tab)).await;
    }

    /// Cache `msg` unless `ticket` went stale while its data was in flight.
    pub fn store_if_current(&self, ticket: &RenderTicket, msg: Message) -> bool {
        let current = self.state.borrow().is_current(ticket);
        if current {
            self.dispatch(msg);
        }
        current
    }

    pub fn set_profile_menu(&self, open: Option<bool>) {
        self.dispatch(Message::ToggleProfileMenu(open));
        let open = self.state.borrow().profile_menu_open;
        self.surface.set_profile_menu_open(open);
    }

    pub async fn perform(&self, action: ViewAction) {
        debug_log!("action: {:?}", action);
        let outcome: Result<(), ApiError> = match action {
            ViewAction::Navigate(route) => {
                self.navigate(route).await;
                Ok(())
            }
            ViewAction::ToggleSidebar => {
                self.surface.toggle_sidebar(None);
                Ok(())
            }
            ViewAction::ToggleProfileMenu => {
                self.set_profile_menu(None);
                Ok(())
            }
            ViewAction::CloseProfileMenu => {
                if self.state.borrow().profile_menu_open {
                    self.set_profile_menu(Some(false));
                }
                Ok(())
            }
            ViewAction::SelectProfile(id) => {
                handlers::profiles::select(self, &id).await;
                Ok(())
            }
            ViewAction::NewProfile => handlers::profiles::create(self).await,
            ViewAction::EditProfile => handlers::profiles::edit_active(self).await,
            ViewAction::NewInstance => handlers::instances::create(self).await,
            ViewAction::EditInstance(id) => handlers::instances::edit(self, &id).await,
            ViewAction::ReconnectInstance(id) => handlers::instances::reconnect(self, &id).await,
            ViewAction::DisconnectInstance(id) => {
                handlers::instances::disconnect(self, &id).await
            }
            ViewAction::RemoveInstance(id) => handlers::instances::remove(self, &id).await,
            ViewAction::NewConversation => handlers::conversations::create(self).await,
            ViewAction::OpenConversation(id) => {
                handlers::conversations::open(self, &id).await;
                Ok(())
            }
            ViewAction::EditConversation(id) => handlers::conversations::edit(self, &id).await,
            ViewAction::RemoveConversation(id) => {
                handlers::conversations::remove(self, &id).await
            }
            ViewAction::ReplyConversation(id) => handlers::conversations::reply(self, &id).await,
            ViewAction::NewCampaign => handlers::campaigns::create(self).await,
            ViewAction::EditCampaign(id) => handlers::campaigns::edit(self, &id).await,
            ViewAction::RemoveCampaign(id) => handlers::campaigns::remove(self, &id).await,
        };
        if let Err(err) = outcome {
            warn_log!("action aborted: {}", err);
        }
    }
}
