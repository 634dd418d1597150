use futures::future::try_join;

use crate::app::App;
use crate::constants::{LABEL_CREATE, LABEL_SAVE};
use crate::debug_log;
use crate::dialog::{self, FieldSpec, FormSpec, FormValues};
use crate::models::{Campaign, CampaignInput, Instance};
use crate::network::ApiError;
use crate::router::Tab;
use crate::utils::split_list;

use super::{instance_options, require_instances, require_profile};

fn campaign_form(
    title: &str,
    instances: &[Instance],
    existing: Option<&Campaign>,
    submit: &str,
) -> FormSpec {
    let mut name = FieldSpec::text("name", "Nome da campanha").required();
    let mut message = FieldSpec::textarea("message", "Mensagem").required();
    let mut groups = FieldSpec::text("target_groups", "Grupos alvo (separados por vírgula)");
    let mut instance = FieldSpec::select("instance_id", "Enviar pelo número", instance_options(instances));

    match existing {
        Some(c) => {
            name = name.value(c.name.as_str());
            message = message.value(c.message.as_str());
            groups = groups.value(c.target_groups.join(", "));
            instance = instance.value(c.instance_id.as_str());
        }
        None => {
            name = name.placeholder("Ex.: Promoção de Natal");
            message = message.placeholder("Digite a mensagem que será enviada...");
            groups = groups.placeholder("Ex.: Clientes VIP, Revendedores");
            if let Some(first) = instances.first() {
                instance = instance.value(first.id.as_str());
            }
        }
    }
    FormSpec::new(title, vec![name, message, instance, groups], submit)
}

fn input(values: &FormValues) -> CampaignInput {
    CampaignInput {
        name: values.get("name").trim().to_string(),
        message: values.get("message").to_string(),
        instance_id: values.get("instance_id").to_string(),
        target_groups: split_list(values.get("target_groups")),
    }
}

pub async fn create(app: &App) -> Result<(), ApiError> {
    let Some(profile) = require_profile(app).await else {
        return Ok(());
    };
    let Some(instances) = require_instances(app, &profile).await? else {
        return Ok(());
    };

    let form = campaign_form("Nova Campanha", &instances, None, LABEL_CREATE);
    let Some(values) = app.dialogs.show_form(form).await else {
        return Ok(());
    };

    app.api.create_campaign(&profile.id, &input(&values)).await?;
    app.show(Tab::Campaigns).await;
    Ok(())
}

pub async fn edit(app: &App, campaign_id: &str) -> Result<(), ApiError> {
    let Some(profile) = require_profile(app).await else {
        return Ok(());
    };

    let (campaigns, instances) = try_join(
        app.api.list_campaigns(&profile.id),
        app.api.list_instances(&profile.id),
    )
    .await?;
    let Some(c) = campaigns.into_iter().find(|c| c.id == campaign_id) else {
        debug_log!("campaign {} vanished before edit", campaign_id);
        return Ok(());
    };

    let form = campaign_form("Editar Campanha", &instances, Some(&c), LABEL_SAVE);
    let Some(values) = app.dialogs.show_form(form).await else {
        return Ok(());
    };

    app.api
        .update_campaign(&profile.id, campaign_id, &input(&values))
        .await?;
    app.show(Tab::Campaigns).await;
    Ok(())
}

pub async fn remove(app: &App, campaign_id: &str) -> Result<(), ApiError> {
    let Some(profile) = require_profile(app).await else {
        return Ok(());
    };
    if !dialog::confirm(app.dialogs.as_ref(), "Remover definitivamente esta campanha?").await {
        return Ok(());
    }
    app.api.delete_campaign(&profile.id, campaign_id).await?;
    app.show(Tab::Campaigns).await;
    Ok(())
}
