use crate::app::App;
use crate::constants::{LABEL_CREATE, LABEL_SAVE};
use crate::dialog::{self, FieldSpec, FormSpec, FormValues};
use crate::messages::Message;
use crate::models::{OperatorProfile, ProfileInput};
use crate::network::ApiError;
use crate::router::Tab;

const NOTHING_SELECTED: &str = "Nenhum usuário selecionado.";

fn profile_form(title: &str, existing: Option<&OperatorProfile>, submit: &str) -> FormSpec {
    let mut name = FieldSpec::text("name", "Nome / Apelido").required();
    let mut username = FieldSpec::text("username", "Usuário (login)").required();
    let mut password = FieldSpec::password("password", "Senha").required();
    match existing {
        Some(p) => {
            name = name.value(p.name.as_str());
            username = username.value(p.username.as_str());
            password = password.value(p.password.as_str());
        }
        None => {
            name = name.placeholder("Ex.: Comercial");
            username = username.placeholder("ex.: comercial01");
            password = password.placeholder("••••••••");
        }
    }
    FormSpec::new(title, vec![name, username, password], submit)
}

fn input(values: &FormValues) -> ProfileInput {
    ProfileInput {
        name: values.get("name").trim().to_string(),
        username: values.get("username").trim().to_string(),
        password: values.get("password").to_string(),
    }
}

/// Create a profile, then make it the active one.
pub async fn create(app: &App) -> Result<(), ApiError> {
    let form = profile_form("Novo Usuário", None, LABEL_CREATE);
    let Some(values) = app.dialogs.show_form(form).await else {
        return Ok(());
    };

    let created = app.api.create_profile(&input(&values)).await?;
    app.load_profiles().await;
    if let Some(id) = created {
        app.dispatch(Message::SelectProfile(id));
    }
    app.paint_profiles();
    app.show(Tab::Dashboard).await;
    Ok(())
}

pub async fn edit_active(app: &App) -> Result<(), ApiError> {
    let Some(profile) = app.active_profile() else {
        dialog::alert(app.dialogs.as_ref(), NOTHING_SELECTED).await;
        return Ok(());
    };

    let form = profile_form("Configurar Usuário", Some(&profile), LABEL_SAVE);
    let Some(values) = app.dialogs.show_form(form).await else {
        return Ok(());
    };

    app.api.update_profile(&profile.id, &input(&values)).await?;
    app.load_profiles().await;
    app.paint_profiles();
    app.refresh().await;
    Ok(())
}

pub async fn select(app: &App, id: &str) {
    app.dispatch(Message::SelectProfile(id.to_string()));
    app.set_profile_menu(Some(false));
    app.paint_profiles();
    app.show(Tab::Dashboard).await;
}
