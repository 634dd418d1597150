//! "Central de Mensagens": conversation list plus the open thread.

use futures::future::try_join;

use crate::app::App;
use crate::constants::MISSING_VALUE;
use crate::messages::Message;
use crate::models::{Conversation, Instance, OperatorProfile};
use crate::network::ApiError;
use crate::router::Tab;
use crate::state::RenderTicket;
use crate::utils::{format_time, initials, sort_newest_first};

use super::page::{
    ActionButton, Bubble, ButtonStyle, ConversationItem, Inbox, Page, PageBody, ThreadPane,
    ViewAction,
};

pub const EMPTY_LIST: &str = "Nenhuma conversa";
pub const NO_THREAD_TITLE: &str = "Selecione uma conversa";
pub const NO_THREAD_HINT: &str = "Crie ou selecione uma conversa na coluna à esquerda.";

pub async fn render(
    app: &App,
    ticket: &RenderTicket,
    profile: &OperatorProfile,
) -> Result<Page, ApiError> {
    let (mut conversations, instances) = try_join(
        app.api.list_conversations(&profile.id),
        app.api.list_instances(&profile.id),
    )
    .await?;
    sort_newest_first(&mut conversations, |c| c.updated_at.as_deref());

    let selected = app.state.borrow().selected_conversation_id.clone();
    let page = build(&conversations, &instances, selected.as_deref());
    app.store_if_current(ticket, Message::InstancesLoaded(instances));
    app.store_if_current(ticket, Message::ConversationsLoaded(conversations));
    Ok(page)
}

pub fn build(conversations: &[Conversation], instances: &[Instance], selected: Option<&str>) -> Page {
    let instance_of = |c: &Conversation| instances.iter().find(|i| i.id == c.instance_id);
    let open = selected.and_then(|id| conversations.iter().find(|c| c.id == id));

    let items = conversations
        .iter()
        .map(|c| ConversationItem {
            id: c.id.clone(),
            initials: initials(&c.name),
            name: if c.name.is_empty() {
                "Sem nome".to_string()
            } else {
                c.name.clone()
            },
            time: format_time(c.updated_at.as_deref()),
            last_message: c.messages.last().map(|m| m.text.clone()).unwrap_or_default(),
            instance_name: instance_of(c)
                .map(|i| i.name.clone())
                .unwrap_or_else(|| MISSING_VALUE.to_string()),
            unread: c.unread,
            selected: open.map_or(false, |o| o.id == c.id),
        })
        .collect();

    let thread = match open {
        Some(c) => thread_pane(c, instance_of(c)),
        None => ThreadPane {
            title: NO_THREAD_TITLE.to_string(),
            subtitle: NO_THREAD_HINT.to_string(),
            bubbles: Vec::new(),
            actions: Vec::new(),
        },
    };

    Page {
        title: Tab::Messages.title().to_string(),
        icon: Tab::Messages.icon(),
        header_action: Some(ActionButton::new(
            "Nova Conversa",
            "fas fa-plus",
            ButtonStyle::Primary,
            ViewAction::NewConversation,
        )),
        body: PageBody::Inbox(Inbox {
            unread_conversations: conversations.iter().filter(|c| c.unread > 0).count(),
            items,
            thread,
        }),
    }
}

fn thread_pane(c: &Conversation, instance: Option<&Instance>) -> ThreadPane {
    let mut subtitle = c.phone.clone().unwrap_or_default();
    if let Some(instance) = instance {
        if !subtitle.is_empty() {
            subtitle.push_str(" • ");
        }
        subtitle.push_str(&format!("via {}", instance.picker_label()));
    }

    ThreadPane {
        title: if c.name.is_empty() {
            "Sem nome".to_string()
        } else {
            c.name.clone()
        },
        subtitle,
        bubbles: c
            .messages
            .iter()
            .map(|m| Bubble {
                text: m.text.clone(),
                time: m.time.clone(),
                outgoing: m.is_outgoing(),
            })
            .collect(),
        actions: vec![
            ActionButton::new(
                "Responder",
                "fas fa-reply",
                ButtonStyle::Connect,
                ViewAction::ReplyConversation(c.id.clone()),
            ),
            ActionButton::new(
                "Editar",
                "fas fa-edit",
                ButtonStyle::Edit,
                ViewAction::EditConversation(c.id.clone()),
            ),
            ActionButton::new(
                "Remover",
                "fas fa-trash",
                ButtonStyle::Delete,
                ViewAction::RemoveConversation(c.id.clone()),
            ),
        ],
    }
}
