//! "Números Conectados": one card per WhatsApp instance.

use chrono::{DateTime, Utc};

use crate::app::App;
use crate::constants::MISSING_VALUE;
use crate::messages::Message;
use crate::models::{Instance, InstanceStatus, OperatorProfile};
use crate::network::ApiError;
use crate::router::Tab;
use crate::state::RenderTicket;
use crate::utils::{format_time, sort_newest_first, time_ago};

use super::page::{
    ActionButton, BadgeTone, ButtonStyle, Card, CardKind, Page, PageBody, StatusBadge, ViewAction,
};

pub const EMPTY_TITLE: &str = "Nenhum número cadastrado";
pub const EMPTY_HINT: &str = "Crie um número clicando em \"Conectar Número\".";

pub async fn render(
    app: &App,
    ticket: &RenderTicket,
    profile: &OperatorProfile,
    now: DateTime<Utc>,
) -> Result<Page, ApiError> {
    let mut instances = app.api.list_instances(&profile.id).await?;
    sort_newest_first(&mut instances, |i| i.created_at.as_deref());
    let page = build(&instances, now);
    app.store_if_current(ticket, Message::InstancesLoaded(instances));
    Ok(page)
}

/// `instances` are expected newest first.
pub fn build(instances: &[Instance], now: DateTime<Utc>) -> Page {
    let cards = if instances.is_empty() {
        vec![Card::empty(EMPTY_TITLE, EMPTY_HINT)]
    } else {
        instances.iter().map(|n| card(n, now)).collect()
    };

    Page {
        title: Tab::Numbers.title().to_string(),
        icon: Tab::Numbers.icon(),
        header_action: Some(ActionButton::new(
            "Conectar Número",
            "fas fa-plus",
            ButtonStyle::Primary,
            ViewAction::NewInstance,
        )),
        body: PageBody::Grid(cards),
    }
}

fn badge(status: InstanceStatus) -> StatusBadge {
    match status {
        InstanceStatus::Active => StatusBadge {
            text: "Online",
            tone: BadgeTone::Active,
        },
        InstanceStatus::Pending => StatusBadge {
            text: "Aguardando",
            tone: BadgeTone::Pending,
        },
        InstanceStatus::Offline => StatusBadge {
            text: "Offline",
            tone: BadgeTone::Offline,
        },
    }
}

fn card(n: &Instance, now: DateTime<Utc>) -> Card {
    let name = if n.name.is_empty() { "(sem apelido)" } else { &n.name };
    let title = if n.phone.is_empty() {
        name.to_string()
    } else {
        format!("{} • {}", name, n.phone)
    };
    let last_access = match n.last_access.as_deref() {
        Some(raw) => format_time(Some(raw)),
        None => MISSING_VALUE.to_string(),
    };

    let toggle = if n.status == InstanceStatus::Active {
        ActionButton::new(
            "Desconectar",
            "fas fa-unlink",
            ButtonStyle::Delete,
            ViewAction::DisconnectInstance(n.id.clone()),
        )
    } else {
        ActionButton::new(
            "Reconectar",
            "fas fa-link",
            ButtonStyle::Connect,
            ViewAction::ReconnectInstance(n.id.clone()),
        )
    };

    Card {
        kind: CardKind::Entity,
        entity_id: Some(n.id.clone()),
        badge: Some(badge(n.status)),
        title,
        subtitle: format!(
            "Criado há {} • Último acesso {}",
            time_ago(n.created_at.as_deref(), now),
            last_access
        ),
        excerpt: None,
        breakdown: vec![
            ("Mensagens hoje".to_string(), n.metrics.today.to_string()),
            ("Grupos ativos".to_string(), n.metrics.groups.to_string()),
        ],
        actions: vec![
            ActionButton::new(
                "Configurar",
                "fas fa-cog",
                ButtonStyle::Edit,
                ViewAction::EditInstance(n.id.clone()),
            ),
            toggle,
            ActionButton::new(
                "Remover",
                "fas fa-trash",
                ButtonStyle::Delete,
                ViewAction::RemoveInstance(n.id.clone()),
            ),
        ],
    }
}
