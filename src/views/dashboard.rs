use crate::app::App;
use crate::models::{DashboardMetrics, OperatorProfile};
use crate::network::ApiError;
use crate::router::Tab;

use super::page::{MetricCard, Page, PageBody};

pub async fn render(app: &App, profile: &OperatorProfile) -> Result<Page, ApiError> {
    let summary = app.api.dashboard(&profile.id).await?;
    Ok(build(profile, &summary.metrics))
}

fn metric(title: &str, icon: &'static str, value: impl ToString, subtitle: String) -> MetricCard {
    MetricCard {
        title: title.to_string(),
        icon,
        value: value.to_string(),
        subtitle,
    }
}

pub fn build(profile: &OperatorProfile, metrics: &DashboardMetrics) -> Page {
    let cards = vec![
        metric("Usuário ativo", "fas fa-user", &profile.username, "logado".to_string()),
        metric(
            "Números conectados",
            "fas fa-phone",
            metrics.total_instances,
            format!("{} ativos", metrics.active_instances),
        ),
        metric(
            "Conversas ativas",
            "fas fa-comments",
            metrics.total_conversations,
            format!("{} não lidas", metrics.unread_messages),
        ),
        metric(
            "Campanhas",
            "fas fa-bullhorn",
            metrics.active_campaigns,
            "ativas".to_string(),
        ),
    ];

    Page {
        title: format!("{} — {}", Tab::Dashboard.title(), profile.name),
        icon: Tab::Dashboard.icon(),
        header_action: None,
        body: PageBody::Metrics(cards),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metric_cards_follow_backend_counts() {
        let profile = OperatorProfile {
            id: "u1".into(),
            name: "Comercial".into(),
            username: "comercial01".into(),
            password: String::new(),
            created_at: None,
        };
        let metrics = DashboardMetrics {
            total_instances: 3,
            active_instances: 2,
            total_conversations: 7,
            unread_messages: 4,
            active_campaigns: 1,
            messages_today: 12,
        };
        let page = build(&profile, &metrics);
        assert_eq!(page.title, "Dashboard — Comercial");
        let PageBody::Metrics(cards) = page.body else {
            panic!("expected metric cards");
        };
        let values: Vec<(&str, &str)> = cards
            .iter()
            .map(|c| (c.value.as_str(), c.subtitle.as_str()))
            .collect();
        assert_eq!(
            values,
            vec![
                ("comercial01", "logado"),
                ("3", "2 ativos"),
                ("7", "4 não lidas"),
                ("1", "ativas"),
            ]
        );
    }
}
