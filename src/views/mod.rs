// src/views/mod.rs
//
// Renderers: fetch what a view needs for the active profile and build its
// `Page`.  Rendering never fails; a failed fetch becomes the load-error page.
//
pub mod campaigns;
pub mod dashboard;
pub mod messages;
pub mod numbers;
pub mod page;
pub mod profiles;

use chrono::Utc;

use crate::app::App;
use crate::router::{Route, Tab};
use crate::state::RenderTicket;
use crate::warn_log;
use page::Page;

/// Build the page for `ticket.route`.  Entity views without an active
/// profile get the no-profile notice and make no request.
pub async fn render(app: &App, ticket: &RenderTicket) -> Page {
    let tab = match &ticket.route {
        Route::Tab(tab) => *tab,
        Route::Placeholder(_) => return Page::notice(ticket.route.title()),
    };
    let Some(profile) = app.active_profile() else {
        return Page::no_profile(tab);
    };

    let now = Utc::now();
    let built = match tab {
        Tab::Dashboard => dashboard::render(app, &profile).await,
        Tab::Numbers => numbers::render(app, ticket, &profile, now).await,
        Tab::Messages => messages::render(app, ticket, &profile).await,
        Tab::Campaigns => campaigns::render(app, ticket, &profile, now).await,
    };
    built.unwrap_or_else(|err| {
        warn_log!("{} failed to load: {}", tab.id(), err);
        Page::load_error(tab)
    })
}
