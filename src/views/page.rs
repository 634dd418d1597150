//! Page model: what the content region shows, independent of the DOM.
//!
//! Renderers build a [`Page`]; the surface paints it and turns every
//! [`ActionButton`] into a control that emits its [`ViewAction`].

use crate::constants::{
    LOAD_ERROR_SUFFIX, NO_PROFILE_HEADING, NO_PROFILE_HINT, WIP_HEADING, WIP_HINT,
};
use crate::router::{Route, Tab};

/// Everything a control on the page can ask the application to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewAction {
    Navigate(Route),
    ToggleSidebar,
    ToggleProfileMenu,
    CloseProfileMenu,
    SelectProfile(String),
    NewProfile,
    EditProfile,
    NewInstance,
    EditInstance(String),
    ReconnectInstance(String),
    DisconnectInstance(String),
    RemoveInstance(String),
    NewConversation,
    OpenConversation(String),
    EditConversation(String),
    RemoveConversation(String),
    ReplyConversation(String),
    NewCampaign,
    EditCampaign(String),
    RemoveCampaign(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonStyle {
    Primary,
    Edit,
    Connect,
    Delete,
}

impl ButtonStyle {
    pub fn class_name(self) -> &'static str {
        match self {
            ButtonStyle::Primary => "btn-primary",
            ButtonStyle::Edit => "btn-action btn-edit",
            ButtonStyle::Connect => "btn-action btn-connect",
            ButtonStyle::Delete => "btn-action btn-delete",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionButton {
    pub label: String,
    pub icon: &'static str,
    pub style: ButtonStyle,
    pub action: ViewAction,
}

impl ActionButton {
    pub fn new(label: &str, icon: &'static str, style: ButtonStyle, action: ViewAction) -> Self {
        Self {
            label: label.to_string(),
            icon,
            style,
            action,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    Active,
    Pending,
    Offline,
}

impl BadgeTone {
    pub fn class_name(self) -> &'static str {
        match self {
            BadgeTone::Active => "card-status status-active",
            BadgeTone::Pending => "card-status status-pending",
            BadgeTone::Offline => "card-status status-offline",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBadge {
    pub text: &'static str,
    pub tone: BadgeTone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardKind {
    Entity,
    Empty,
}

/// One card of a grid: an entity, or the empty-state card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub kind: CardKind,
    /// Backend id of the entity shown, `None` for the empty card.
    pub entity_id: Option<String>,
    pub badge: Option<StatusBadge>,
    pub title: String,
    pub subtitle: String,
    pub excerpt: Option<String>,
    pub breakdown: Vec<(String, String)>,
    pub actions: Vec<ActionButton>,
}

impl Card {
    pub fn empty(title: &str, hint: &str) -> Self {
        Self {
            kind: CardKind::Empty,
            entity_id: None,
            badge: None,
            title: title.to_string(),
            subtitle: hint.to_string(),
            excerpt: None,
            breakdown: Vec::new(),
            actions: Vec::new(),
        }
    }

    pub fn is_empty_state(&self) -> bool {
        self.kind == CardKind::Empty
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricCard {
    pub title: String,
    pub icon: &'static str,
    pub value: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationItem {
    pub id: String,
    pub initials: String,
    pub name: String,
    pub time: String,
    pub last_message: String,
    pub instance_name: String,
    pub unread: u32,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bubble {
    pub text: String,
    pub time: String,
    pub outgoing: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadPane {
    pub title: String,
    pub subtitle: String,
    /// Empty when no conversation is open.
    pub bubbles: Vec<Bubble>,
    pub actions: Vec<ActionButton>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inbox {
    pub unread_conversations: usize,
    pub items: Vec<ConversationItem>,
    pub thread: ThreadPane,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageBody {
    /// Fixed notice: no operator profile is active.
    NoProfile,
    /// Tab without content yet, or a view whose data failed to load.
    Notice { heading: String, hint: String },
    Metrics(Vec<MetricCard>),
    Grid(Vec<Card>),
    Inbox(Inbox),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub title: String,
    pub icon: &'static str,
    pub header_action: Option<ActionButton>,
    pub body: PageBody,
}

impl Page {
    pub fn no_profile(tab: Tab) -> Self {
        Self {
            title: tab.title().to_string(),
            icon: tab.icon(),
            header_action: None,
            body: PageBody::NoProfile,
        }
    }

    /// Placeholder naming the view whose fetch failed.
    pub fn load_error(tab: Tab) -> Self {
        Self::notice(&format!("{} - {}", tab.short_name(), LOAD_ERROR_SUFFIX))
    }

    /// "Under construction" page titled `title`.
    pub fn notice(title: &str) -> Self {
        Self {
            title: title.to_string(),
            icon: "fas fa-wrench",
            header_action: None,
            body: PageBody::Notice {
                heading: WIP_HEADING.to_string(),
                hint: WIP_HINT.to_string(),
            },
        }
    }

    /// Heading and hint of the no-profile notice.
    pub fn no_profile_copy() -> (&'static str, &'static str) {
        (NO_PROFILE_HEADING, NO_PROFILE_HINT)
    }

    pub fn cards(&self) -> &[Card] {
        match &self.body {
            PageBody::Grid(cards) => cards,
            _ => &[],
        }
    }
}
