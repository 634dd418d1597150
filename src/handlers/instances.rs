use crate::app::App;
use crate::constants::LABEL_SAVE;
use crate::debug_log;
use crate::dialog::{self, FieldSpec, FormSpec, FormValues};
use crate::models::InstanceInput;
use crate::network::ApiError;
use crate::router::Tab;

use super::require_profile;

pub const PENDING_TITLE: &str = "Conexão pendente";
pub const PENDING_NOTICE: &str =
    "Número criado.\nGere o QR Code em \"Reconectar\" para finalizar a conexão.";

fn input(values: &FormValues) -> InstanceInput {
    InstanceInput {
        name: values.get("name").trim().to_string(),
        phone: values.get("phone").trim().to_string(),
    }
}

pub async fn create(app: &App) -> Result<(), ApiError> {
    let Some(profile) = require_profile(app).await else {
        return Ok(());
    };

    let form = FormSpec::new(
        "Conectar Número",
        vec![
            FieldSpec::text("name", "Apelido")
                .required()
                .placeholder("Ex.: Comercial 01"),
            FieldSpec::text("phone", "Telefone (com DDI/DDD)")
                .required()
                .placeholder("+55 31 99999-0000"),
        ],
        "Conectar",
    );
    let Some(values) = app.dialogs.show_form(form).await else {
        return Ok(());
    };

    app.api.create_instance(&profile.id, &input(&values)).await?;
    app.dialogs.show_message(PENDING_NOTICE, PENDING_TITLE).await;
    app.show(Tab::Numbers).await;
    Ok(())
}

pub async fn edit(app: &App, instance_id: &str) -> Result<(), ApiError> {
    let Some(profile) = require_profile(app).await else {
        return Ok(());
    };

    let instances = app.api.list_instances(&profile.id).await?;
    let Some(n) = instances.into_iter().find(|i| i.id == instance_id) else {
        debug_log!("instance {} vanished before edit", instance_id);
        return Ok(());
    };

    let form = FormSpec::new(
        "Configurar Número",
        vec![
            FieldSpec::text("name", "Apelido").value(n.name).required(),
            FieldSpec::text("phone", "Telefone").value(n.phone).required(),
        ],
        LABEL_SAVE,
    );
    let Some(values) = app.dialogs.show_form(form).await else {
        return Ok(());
    };

    app.api
        .update_instance(&profile.id, instance_id, &input(&values))
        .await?;
    app.show(Tab::Numbers).await;
    Ok(())
}

pub async fn reconnect(app: &App, instance_id: &str) -> Result<(), ApiError> {
    let Some(profile) = require_profile(app).await else {
        return Ok(());
    };
    if !dialog::confirm(app.dialogs.as_ref(), "Gerar novo QR Code e marcar como Online?").await {
        return Ok(());
    }
    app.api.reconnect_instance(&profile.id, instance_id).await?;
    app.show(Tab::Numbers).await;
    Ok(())
}

pub async fn disconnect(app: &App, instance_id: &str) -> Result<(), ApiError> {
    let Some(profile) = require_profile(app).await else {
        return Ok(());
    };
    if !dialog::confirm(app.dialogs.as_ref(), "Desconectar este número (ficará Offline)?").await {
        return Ok(());
    }
    app.api.disconnect_instance(&profile.id, instance_id).await?;
    app.show(Tab::Numbers).await;
    Ok(())
}

pub async fn remove(app: &App, instance_id: &str) -> Result<(), ApiError> {
    let Some(profile) = require_profile(app).await else {
        return Ok(());
    };
    if !dialog::confirm(app.dialogs.as_ref(), "Remover definitivamente este número?").await {
        return Ok(());
    }
    app.api.delete_instance(&profile.id, instance_id).await?;
    app.show(Tab::Numbers).await;
    Ok(())
}
