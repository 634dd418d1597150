// src/handlers/mod.rs
//
// Entity action handlers.  Each one follows the same sequence: require an
// active profile, collect input through a form or a confirmation, issue one
// mutation, then re-render the owning view from a fresh fetch.  Cancelling
// a dialog ends the action without touching the backend; API failures are
// already reported by the client and simply end the action with `Err`.
//
pub mod campaigns;
pub mod conversations;
pub mod instances;
pub mod profiles;

use crate::app::App;
use crate::dialog::{self, SelectOption};
use crate::models::{Instance, OperatorProfile};
use crate::network::ApiError;

pub const NO_PROFILE_ALERT: &str = "Selecione ou crie um usuário primeiro.";
pub const NO_INSTANCES_ALERT: &str = "Crie ao menos um número na aba \"Números Conectados\".";

/// The active profile, or `None` after telling the operator to pick one.
pub(crate) async fn require_profile(app: &App) -> Option<OperatorProfile> {
    let profile = app.active_profile();
    if profile.is_none() {
        dialog::alert(app.dialogs.as_ref(), NO_PROFILE_ALERT).await;
    }
    profile
}

/// Fresh instance list for a picker.  `None` when there is nothing to pick,
/// after saying so.
pub(crate) async fn require_instances(
    app: &App,
    profile: &OperatorProfile,
) -> Result<Option<Vec<Instance>>, ApiError> {
    let instances = app.api.list_instances(&profile.id).await?;
    if instances.is_empty() {
        dialog::alert(app.dialogs.as_ref(), NO_INSTANCES_ALERT).await;
        return Ok(None);
    }
    Ok(Some(instances))
}

pub(crate) fn instance_options(instances: &[Instance]) -> Vec<SelectOption> {
    instances
        .iter()
        .map(|i| SelectOption::new(i.picker_label(), i.id.clone()))
        .collect()
}
