use futures::future::try_join;

use crate::app::App;
use crate::constants::{LABEL_CREATE, LABEL_SAVE};
use crate::debug_log;
use crate::dialog::{self, FieldSpec, FormSpec, FormValues};
use crate::messages::Message;
use crate::models::{ConversationInput, Instance, ReplyInput};
use crate::network::ApiError;
use crate::router::Tab;

use super::{instance_options, require_instances, require_profile};

fn conversation_form(
    title: &str,
    instances: &[Instance],
    instance_id: &str,
    name: &str,
    phone: &str,
    submit: &str,
) -> FormSpec {
    FormSpec::new(
        title,
        vec![
            FieldSpec::select("instance_id", "Enviar pelo número", instance_options(instances))
                .value(instance_id),
            FieldSpec::text("name", "Nome do contato")
                .required()
                .placeholder("Ex.: João")
                .value(name),
            FieldSpec::text("phone", "Telefone (opcional)")
                .placeholder("+55 31 99999-0000")
                .value(phone),
        ],
        submit,
    )
}

fn input(values: &FormValues) -> ConversationInput {
    ConversationInput {
        instance_id: values.get("instance_id").to_string(),
        name: values.get("name").trim().to_string(),
        phone: values.optional("phone"),
    }
}

pub async fn create(app: &App) -> Result<(), ApiError> {
    let Some(profile) = require_profile(app).await else {
        return Ok(());
    };
    let Some(instances) = require_instances(app, &profile).await? else {
        return Ok(());
    };

    let first = instances[0].id.clone();
    let form = conversation_form("Nova Conversa", &instances, &first, "", "", LABEL_CREATE);
    let Some(values) = app.dialogs.show_form(form).await else {
        return Ok(());
    };

    app.api
        .create_conversation(&profile.id, &input(&values))
        .await?;
    app.show(Tab::Messages).await;
    Ok(())
}

/// Show `conversation_id` in the thread pane.
pub async fn open(app: &App, conversation_id: &str) {
    app.dispatch(Message::SelectConversation(Some(conversation_id.to_string())));
    app.show(Tab::Messages).await;
}

pub async fn edit(app: &App, conversation_id: &str) -> Result<(), ApiError> {
    let Some(profile) = require_profile(app).await else {
        return Ok(());
    };

    let (conversations, instances) = try_join(
        app.api.list_conversations(&profile.id),
        app.api.list_instances(&profile.id),
    )
    .await?;
    let Some(c) = conversations.into_iter().find(|c| c.id == conversation_id) else {
        debug_log!("conversation {} vanished before edit", conversation_id);
        return Ok(());
    };

    let form = conversation_form(
        "Editar Conversa",
        &instances,
        &c.instance_id,
        &c.name,
        c.phone.as_deref().unwrap_or_default(),
        LABEL_SAVE,
    );
    let Some(values) = app.dialogs.show_form(form).await else {
        return Ok(());
    };

    app.api
        .update_conversation(&profile.id, conversation_id, &input(&values))
        .await?;
    app.show(Tab::Messages).await;
    Ok(())
}

pub async fn remove(app: &App, conversation_id: &str) -> Result<(), ApiError> {
    let Some(profile) = require_profile(app).await else {
        return Ok(());
    };
    if !dialog::confirm(app.dialogs.as_ref(), "Remover definitivamente esta conversa?").await {
        return Ok(());
    }

    app.api
        .delete_conversation(&profile.id, conversation_id)
        .await?;
    app.show(Tab::Messages).await;
    Ok(())
}

pub async fn reply(app: &App, conversation_id: &str) -> Result<(), ApiError> {
    let Some(profile) = require_profile(app).await else {
        return Ok(());
    };

    let form = FormSpec::new(
        "Responder",
        vec![FieldSpec::textarea("text", "Mensagem")
            .required()
            .placeholder("Digite sua resposta...")],
        "Enviar",
    );
    let Some(values) = app.dialogs.show_form(form).await else {
        return Ok(());
    };
    let Some(text) = values.optional("text") else {
        return Ok(());
    };

    app.api
        .send_reply(&profile.id, conversation_id, &ReplyInput { text })
        .await?;
    app.show(Tab::Messages).await;
    Ok(())
}
