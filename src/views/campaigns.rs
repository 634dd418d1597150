//! "Campanhas": broadcast campaigns, newest first.

use chrono::{DateTime, Utc};

use crate::app::App;
use crate::constants::CAMPAIGN_EXCERPT_LEN;
use crate::messages::Message;
use crate::models::{Campaign, CampaignStatus, OperatorProfile};
use crate::network::ApiError;
use crate::router::Tab;
use crate::state::RenderTicket;
use crate::utils::{excerpt, format_time, sort_newest_first, time_ago};

use super::page::{
    ActionButton, BadgeTone, ButtonStyle, Card, CardKind, Page, PageBody, StatusBadge, ViewAction,
};

pub const EMPTY_TITLE: &str = "Nenhuma campanha criada";
pub const EMPTY_HINT: &str = "Crie uma campanha clicando em \"Nova Campanha\".";

pub async fn render(
    app: &App,
    ticket: &RenderTicket,
    profile: &OperatorProfile,
    now: DateTime<Utc>,
) -> Result<Page, ApiError> {
    let mut campaigns = app.api.list_campaigns(&profile.id).await?;
    sort_newest_first(&mut campaigns, |c| c.created_at.as_deref());
    let page = build(&campaigns, now);
    app.store_if_current(ticket, Message::CampaignsLoaded(campaigns));
    Ok(page)
}

pub fn build(campaigns: &[Campaign], now: DateTime<Utc>) -> Page {
    let cards = if campaigns.is_empty() {
        vec![Card::empty(EMPTY_TITLE, EMPTY_HINT)]
    } else {
        campaigns.iter().map(|c| card(c, now)).collect()
    };

    Page {
        title: Tab::Campaigns.title().to_string(),
        icon: Tab::Campaigns.icon(),
        header_action: Some(ActionButton::new(
            "Nova Campanha",
            "fas fa-plus",
            ButtonStyle::Primary,
            ViewAction::NewCampaign,
        )),
        body: PageBody::Grid(cards),
    }
}

fn badge(status: CampaignStatus) -> StatusBadge {
    let (text, tone) = match status {
        CampaignStatus::Active => ("Ativa", BadgeTone::Active),
        CampaignStatus::Draft => ("Rascunho", BadgeTone::Pending),
        CampaignStatus::Paused => ("Pausada", BadgeTone::Pending),
        CampaignStatus::Completed => ("Concluída", BadgeTone::Offline),
    };
    StatusBadge { text, tone }
}

fn card(c: &Campaign, now: DateTime<Utc>) -> Card {
    let schedule = match c.scheduled_at.as_deref() {
        Some(raw) => format_time(Some(raw)),
        None => "Imediato".to_string(),
    };
    Card {
        kind: CardKind::Entity,
        entity_id: Some(c.id.clone()),
        badge: Some(badge(c.status)),
        title: if c.name.is_empty() {
            "(sem nome)".to_string()
        } else {
            c.name.clone()
        },
        subtitle: format!("Criada há {}", time_ago(c.created_at.as_deref(), now)),
        excerpt: Some(excerpt(&c.message, CAMPAIGN_EXCERPT_LEN)),
        breakdown: vec![
            ("Grupos alvo".to_string(), c.target_groups.len().to_string()),
            ("Agendamento".to_string(), schedule),
        ],
        actions: vec![
            ActionButton::new(
                "Editar",
                "fas fa-edit",
                ButtonStyle::Edit,
                ViewAction::EditCampaign(c.id.clone()),
            ),
            ActionButton::new(
                "Remover",
                "fas fa-trash",
                ButtonStyle::Delete,
                ViewAction::RemoveCampaign(c.id.clone()),
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn now() -> DateTime<Utc> {
        crate::utils::parse_timestamp("2024-05-03T00:00:00").unwrap()
    }

    #[test]
    fn long_message_is_cut_with_ellipsis() {
        let c: Campaign = serde_json::from_value(json!({
            "id": "c1", "name": "Natal", "instance_id": "i1",
            "message": "a".repeat(120), "status": "paused",
            "target_groups": ["g1", "g2"], "created_at": "2024-05-01T00:00:00"
        }))
        .unwrap();
        let page = build(&[c], now());
        let card = &page.cards()[0];
        let text = card.excerpt.as_deref().unwrap();
        assert!(text.ends_with("..."));
        assert_eq!(text.chars().count(), CAMPAIGN_EXCERPT_LEN + 3);
        assert_eq!(card.subtitle, "Criada há 2 d");
        assert_eq!(card.badge.as_ref().map(|b| b.text), Some("Pausada"));
        assert_eq!(
            card.breakdown,
            vec![
                ("Grupos alvo".to_string(), "2".to_string()),
                ("Agendamento".to_string(), "Imediato".to_string()),
            ]
        );
    }

    #[test]
    fn empty_list_shows_empty_card() {
        let page = build(&[], now());
        assert_eq!(page.cards().len(), 1);
        assert_eq!(page.cards()[0].title, EMPTY_TITLE);
    }
}
