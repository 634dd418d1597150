use futures::executor::LocalPool;
use futures::task::LocalSpawnExt;
use serde_json::json;

use super::support::{block_on, instance_json, profile_json, Harness, Shown};
use crate::handlers::{instances, NO_INSTANCES_ALERT, NO_PROFILE_ALERT};
use crate::messages::Message;
use crate::network::Method;
use crate::router::{Route, Tab};
use crate::views::page::{PageBody, ViewAction};

const INSTANCES: &str = "/users/u1/instances";
const CAMPAIGNS: &str = "/users/u1/campaigns";
const CONVERSATIONS: &str = "/users/u1/conversations";

#[test]
fn numbers_without_profile_renders_notice_and_makes_no_calls() {
    let h = Harness::new();
    block_on(h.app.navigate(Route::Tab(Tab::Numbers)));

    let page = h.surface.last_page();
    assert_eq!(page.body, PageBody::NoProfile);
    assert_eq!(page.title, "Números Conectados");
    assert!(h.backend.log().is_empty());
    assert_eq!(h.surface.active_tabs(), vec!["numbers"]);
}

#[test]
fn placeholder_tabs_render_without_calls() {
    let h = Harness::with_profile();
    block_on(h.app.navigate(Route::parse("groups")));
    assert_eq!(h.surface.last_page().title, "Gerenciar Grupos");
    assert!(h.backend.log().is_empty());
}

#[test]
fn boot_loads_profiles_and_shows_dashboard_without_selection() {
    let h = Harness::new();
    h.backend.reply(Method::Get, "/users", json!([profile_json("u1", "Comercial")]));
    block_on(h.app.start());

    assert_eq!(h.backend.log(), vec!["GET /users"]);
    assert_eq!(h.surface.last_switcher().entries.len(), 1);
    assert_eq!(h.surface.last_switcher().name, "Sem usuário");
    assert_eq!(h.surface.last_page().body, PageBody::NoProfile);
}

#[test]
fn failed_profile_load_leaves_empty_switcher() {
    let h = Harness::new();
    h.backend.fail(Method::Get, "/users", 500, "Internal Server Error");
    block_on(h.app.start());

    assert!(h.surface.last_switcher().entries.is_empty());
    assert_eq!(h.dialogs.messages().len(), 1);
}

#[test]
fn empty_numbers_then_create_posts_then_refetches() {
    let h = Harness::with_profile();
    let created = instance_json("i1", "Comercial 01", "pending", "2024-05-01T10:00:00");
    h.backend.reply(Method::Get, INSTANCES, json!([]));
    h.backend.reply(Method::Get, INSTANCES, json!([created.clone()]));
    h.backend.reply(Method::Post, INSTANCES, created);

    block_on(h.app.navigate(Route::Tab(Tab::Numbers)));
    let page = h.surface.last_page();
    assert_eq!(page.cards().len(), 1);
    assert!(page.cards()[0].is_empty_state());
    assert_eq!(
        page.header_action.as_ref().map(|a| &a.action),
        Some(&ViewAction::NewInstance)
    );

    h.backend.forget_requests();
    h.dialogs
        .submit_next(&[("name", "Comercial 01"), ("phone", "+55 31 99999-0000")]);
    block_on(h.app.perform(ViewAction::NewInstance));

    assert_eq!(h.backend.log(), vec![format!("POST {}", INSTANCES), format!("GET {}", INSTANCES)]);
    assert_eq!(
        h.backend.requests()[0].body,
        Some(json!({"name": "Comercial 01", "phone": "+55 31 99999-0000"}))
    );
    assert_eq!(
        h.dialogs.messages(),
        vec![(instances::PENDING_NOTICE.to_string(), instances::PENDING_TITLE.to_string())]
    );
    let page = h.surface.last_page();
    assert_eq!(page.cards().len(), 1);
    assert_eq!(page.cards()[0].entity_id.as_deref(), Some("i1"));
}

#[test]
fn cancelled_form_makes_no_call() {
    let h = Harness::with_profile();
    h.dialogs.cancel_next();
    block_on(h.app.perform(ViewAction::NewInstance));

    assert_eq!(h.dialogs.forms().len(), 1);
    assert!(h.backend.log().is_empty());
    assert!(h.surface.pages().is_empty());
}

#[test]
fn declined_confirmation_makes_no_call() {
    let h = Harness::with_profile();
    h.dialogs.confirm_next(false);
    block_on(h.app.perform(ViewAction::RemoveInstance("i1".into())));

    assert!(matches!(h.dialogs.shown()[0], Shown::Confirmation { .. }));
    assert!(h.backend.log().is_empty());
}

#[test]
fn edit_is_reflected_from_follow_up_fetch() {
    let h = Harness::with_profile();
    let old = instance_json("i1", "Antigo", "active", "2024-05-01T10:00:00");
    let renamed = instance_json("i1", "Novo", "active", "2024-05-01T10:00:00");
    h.backend.reply(Method::Get, INSTANCES, json!([old.clone()]));
    h.backend.reply(Method::Get, INSTANCES, json!([old]));
    h.backend.reply(Method::Get, INSTANCES, json!([renamed.clone()]));
    h.backend.reply(Method::Put, "/users/u1/instances/i1", renamed);

    block_on(h.app.navigate(Route::Tab(Tab::Numbers)));
    h.dialogs.submit_next(&[("name", "Novo")]);
    block_on(h.app.perform(ViewAction::EditInstance("i1".into())));

    let form = &h.dialogs.forms()[0];
    assert_eq!(form.fields[0].value, "Antigo", "form is pre-filled from a fresh fetch");
    let put = h
        .backend
        .requests()
        .into_iter()
        .find(|r| r.method == Method::Put)
        .expect("PUT issued");
    assert_eq!(put.body, Some(json!({"name": "Novo", "phone": "+55 31 99999-0000"})));

    assert_eq!(h.surface.last_page().cards()[0].title, "Novo • +55 31 99999-0000");
    assert_eq!(h.app.state.borrow().instances[0].name, "Novo");
}

#[test]
fn api_failure_reports_once_and_renders_error_page() {
    let h = Harness::with_profile();
    h.backend.fail(Method::Get, INSTANCES, 500, "Internal Server Error");
    block_on(h.app.navigate(Route::Tab(Tab::Numbers)));

    assert_eq!(h.surface.last_page().title, "Números - Erro ao carregar dados");
    assert_eq!(
        h.dialogs.messages(),
        vec![(
            "Erro na API: API Error: 500 Internal Server Error".to_string(),
            "Atenção".to_string()
        )]
    );
}

#[test]
fn campaigns_render_newest_first() {
    let h = Harness::with_profile();
    h.backend.reply(
        Method::Get,
        CAMPAIGNS,
        json!([
            {"id": "c1", "name": "Antiga", "message": "m", "instance_id": "i1",
             "status": "draft", "created_at": "2024-05-01T00:00:00"},
            {"id": "c2", "name": "Nova", "message": "m", "instance_id": "i1",
             "status": "active", "created_at": "2024-05-02T00:00:00"}
        ]),
    );
    block_on(h.app.navigate(Route::Tab(Tab::Campaigns)));

    let ids: Vec<_> = h
        .surface
        .last_page()
        .cards()
        .iter()
        .filter_map(|c| c.entity_id.clone())
        .collect();
    assert_eq!(ids, vec!["c2", "c1"]);
}

#[test]
fn campaign_create_splits_target_groups() {
    let h = Harness::with_profile();
    h.backend.reply(
        Method::Get,
        INSTANCES,
        json!([instance_json("i1", "Comercial", "active", "2024-05-01T10:00:00")]),
    );
    h.backend.reply(Method::Post, CAMPAIGNS, json!({"id": "c1", "instance_id": "i1"}));
    h.backend.reply(Method::Get, CAMPAIGNS, json!([]));
    h.dialogs.submit_next(&[
        ("name", "Natal"),
        ("message", "Boas festas!"),
        ("target_groups", " VIP, , Revenda "),
    ]);
    block_on(h.app.perform(ViewAction::NewCampaign));

    let post = h
        .backend
        .requests()
        .into_iter()
        .find(|r| r.method == Method::Post)
        .expect("POST issued");
    assert_eq!(
        post.body,
        Some(json!({
            "name": "Natal",
            "message": "Boas festas!",
            "instance_id": "i1",
            "target_groups": ["VIP", "Revenda"]
        }))
    );
}

#[test]
fn conversation_create_needs_an_instance() {
    let h = Harness::with_profile();
    h.backend.reply(Method::Get, INSTANCES, json!([]));
    block_on(h.app.perform(ViewAction::NewConversation));

    assert_eq!(h.dialogs.messages()[0].0, NO_INSTANCES_ALERT);
    assert!(h.dialogs.forms().is_empty());
    assert_eq!(h.backend.log(), vec![format!("GET {}", INSTANCES)]);
}

#[test]
fn actions_without_profile_alert_and_abort() {
    let h = Harness::new();
    block_on(h.app.perform(ViewAction::NewCampaign));
    assert_eq!(h.dialogs.messages()[0].0, NO_PROFILE_ALERT);
    assert!(h.backend.log().is_empty());
}

#[test]
fn blank_reply_is_not_sent() {
    let h = Harness::with_profile();
    h.dialogs.submit_next(&[("text", "   ")]);
    block_on(h.app.perform(ViewAction::ReplyConversation("c1".into())));
    assert!(h.backend.log().is_empty());
}

#[test]
fn opening_a_conversation_fills_the_thread() {
    let h = Harness::with_profile();
    h.backend.reply(
        Method::Get,
        CONVERSATIONS,
        json!([{"id": "c1", "instance_id": "i1", "name": "João",
                "messages": [{"from_user": "João", "text": "Oi", "time": "10:00"}]}]),
    );
    h.backend.reply(Method::Get, INSTANCES, json!([]));
    block_on(h.app.perform(ViewAction::OpenConversation("c1".into())));

    let PageBody::Inbox(inbox) = h.surface.last_page().body else {
        panic!("expected inbox");
    };
    assert_eq!(inbox.thread.title, "João");
    assert_eq!(inbox.thread.bubbles.len(), 1);
    assert_eq!(h.app.state.borrow().selected_conversation_id.as_deref(), Some("c1"));
}

#[test]
fn creating_a_profile_selects_it_and_shows_its_dashboard() {
    let h = Harness::with_profile();
    h.backend.reply(Method::Post, "/users", profile_json("u2", "Suporte"));
    h.backend.reply(
        Method::Get,
        "/users",
        json!([profile_json("u1", "Comercial"), profile_json("u2", "Suporte")]),
    );
    h.backend.reply(
        Method::Get,
        "/users/u2/dashboard",
        json!({"user": profile_json("u2", "Suporte"), "metrics": {"total_instances": 0}}),
    );
    h.dialogs
        .submit_next(&[("name", "Suporte"), ("username", "suporte"), ("password", "x")]);
    block_on(h.app.perform(ViewAction::NewProfile));

    assert_eq!(
        h.backend.log(),
        vec!["POST /users", "GET /users", "GET /users/u2/dashboard"]
    );
    assert_eq!(h.app.state.borrow().active_profile_id(), Some("u2"));
    assert_eq!(h.surface.last_switcher().name, "Suporte");
    assert_eq!(h.surface.last_page().title, "Dashboard — Suporte");
}

#[test]
fn selecting_unknown_profile_is_a_no_op() {
    let h = Harness::with_profile();
    h.app.dispatch(Message::SelectProfile("ghost".into()));
    assert_eq!(h.app.state.borrow().active_profile_id(), Some("u1"));
}

#[test]
fn selecting_a_profile_closes_the_menu() {
    let h = Harness::with_profile();
    h.backend.reply(
        Method::Get,
        "/users/u1/dashboard",
        json!({"metrics": {"total_instances": 1}}),
    );
    block_on(h.app.perform(ViewAction::ToggleProfileMenu));
    assert!(h.surface.menu_open.get());

    block_on(h.app.perform(ViewAction::SelectProfile("u1".into())));
    assert!(!h.surface.menu_open.get());
    assert_eq!(h.surface.active_tabs().last().map(String::as_str), Some("dashboard"));
}

#[test]
fn narrow_viewport_closes_sidebar_after_navigation() {
    let h = Harness::new();
    h.surface.narrow.set(true);
    h.surface.sidebar_open.set(true);
    block_on(h.app.navigate(Route::parse("reports")));
    assert!(!h.surface.sidebar_open.get());
}

#[test]
fn stale_ticket_does_not_touch_the_cache() {
    let h = Harness::with_profile();
    let stale = h.app.state.borrow_mut().begin_render(Route::Tab(Tab::Numbers));
    let _newer = h.app.state.borrow_mut().begin_render(Route::Tab(Tab::Campaigns));

    let instances = serde_json::from_value(json!([instance_json(
        "i1",
        "Comercial",
        "active",
        "2024-05-01T10:00:00"
    )]))
    .unwrap();
    assert!(!h.app.store_if_current(&stale, Message::InstancesLoaded(instances)));
    assert!(h.app.state.borrow().instances.is_empty());
}

#[test]
fn late_render_of_an_abandoned_view_is_discarded() {
    let h = Harness::with_profile();
    h.backend.reply(
        Method::Get,
        INSTANCES,
        json!([instance_json("i1", "Comercial", "active", "2024-05-01T10:00:00")]),
    );
    h.backend.reply(Method::Get, CAMPAIGNS, json!([{"id": "c1", "instance_id": "i1", "name": "Natal"}]));
    let open_numbers = h.backend.gate(Method::Get, INSTANCES);
    let open_campaigns = h.backend.gate(Method::Get, CAMPAIGNS);

    let mut pool = LocalPool::new();
    let spawner = pool.spawner();
    let app = h.app.clone();
    spawner
        .spawn_local(async move { app.show(Tab::Numbers).await })
        .unwrap();
    let app = h.app.clone();
    spawner
        .spawn_local(async move { app.show(Tab::Campaigns).await })
        .unwrap();
    pool.run_until_stalled();
    assert!(h.surface.pages().is_empty());

    open_campaigns.send(()).unwrap();
    pool.run_until_stalled();
    open_numbers.send(()).unwrap();
    pool.run_until_stalled();

    let pages = h.surface.pages();
    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0].title, Tab::Campaigns.title());
    let state = h.app.state.borrow();
    assert!(state.instances.is_empty());
    assert_eq!(state.campaigns.len(), 1);
    assert_eq!(state.active_route, Route::Tab(Tab::Campaigns));
}

#[test]
fn mutation_reply_of_any_shape_still_refreshes() {
    let h = Harness::with_profile();
    h.backend.reply(Method::Get, CAMPAIGNS, json!([]));
    h.backend
        .reply(Method::Get, INSTANCES, json!([instance_json("i1", "Comercial", "active", "2024-05-01T10:00:00")]));
    h.backend.reply(Method::Post, CAMPAIGNS, json!({"status": "queued"}));
    h.dialogs
        .submit_next(&[("name", "Natal"), ("message", "Boas festas!"), ("target_groups", "")]);

    block_on(h.app.perform(ViewAction::NewCampaign));

    assert!(h.dialogs.messages().is_empty());
    assert_eq!(
        h.backend.log(),
        vec![
            format!("GET {}", INSTANCES),
            format!("POST {}", CAMPAIGNS),
            format!("GET {}", CAMPAIGNS)
        ]
    );
    assert_eq!(h.surface.last_page().title, Tab::Campaigns.title());
}

#[test]
fn profile_created_without_id_in_reply_is_not_selected() {
    let h = Harness::new();
    h.backend.reply(Method::Post, "/users", json!(null));
    h.backend.reply(Method::Get, "/users", json!([profile_json("u1", "Comercial")]));
    h.dialogs
        .submit_next(&[("name", "Comercial"), ("username", "comercial"), ("password", "x")]);

    block_on(h.app.perform(ViewAction::NewProfile));

    assert!(h.dialogs.messages().is_empty());
    assert!(h.app.active_profile().is_none());
    assert_eq!(h.surface.last_page().body, PageBody::NoProfile);
}
