// Element ids of the static shell.  Single source of truth shared by the
// shell builder, the DOM surface and the browser tests.
pub const ID_SIDEBAR: &str = "sidebar";
pub const ID_SIDEBAR_OVERLAY: &str = "sidebar-overlay";
pub const ID_SIDEBAR_TOGGLE: &str = "sidebar-toggle";
pub const ID_MAIN_CONTAINER: &str = "mainContainer";
pub const ID_MODAL_ROOT: &str = "modal-root";
pub const ID_PROFILE_NAME: &str = "currentProfileName";
pub const ID_PROFILE_HANDLE: &str = "currentProfileHandle";
pub const ID_PROFILE_TRIGGER: &str = "profileTrigger";
pub const ID_PROFILE_DROPDOWN: &str = "profileDropdown";
pub const ID_PROFILE_LIST: &str = "profileList";
pub const ID_PROFILE_ARROW: &str = "profileArrow";

// CSS classes
pub const CSS_ACTIVE: &str = "active";
pub const CSS_NAV_ITEM: &str = "nav-item";
pub const CSS_SIDEBAR_FOOTER: &str = "sidebar-footer";
pub const CSS_MODAL_OVERLAY: &str = "modal-overlay";
pub const CSS_MODAL_BOX: &str = "modal-box";
pub const CSS_MODAL_CLOSE: &str = "modal-close";
pub const CSS_BTN_PRIMARY: &str = "btn-primary";
pub const CSS_BTN_GHOST: &str = "btn-ghost";

// Attributes
pub const ATTR_TYPE: &str = "type";
pub const ATTR_DATA_TAB: &str = "data-tab";
pub const BUTTON_TYPE_BUTTON: &str = "button";

/// Sidebar collapses after navigation at or below this viewport width.
pub const NARROW_VIEWPORT_PX: f64 = 768.0;

/// Campaign message excerpts on cards are cut after this many graphemes.
pub const CAMPAIGN_EXCERPT_LEN: usize = 100;

pub const DEFAULT_API_BASE: &str = "/api";

// Dialog copy
pub const TITLE_ALERT: &str = "Atenção";
pub const TITLE_CONFIRM: &str = "Confirmar";
pub const LABEL_OK: &str = "OK";
pub const LABEL_CANCEL: &str = "Cancelar";
pub const LABEL_CONFIRM: &str = "Confirmar";
pub const LABEL_CREATE: &str = "Criar";
pub const LABEL_SAVE: &str = "Salvar";
pub const LABEL_CLOSE: &str = "Fechar";

// Placeholder copy
pub const NO_PROFILE_HEADING: &str = "Nenhum usuário selecionado";
pub const NO_PROFILE_HINT: &str = "Crie ou selecione um usuário no rodapé.";
pub const WIP_HEADING: &str = "Em construção";
pub const WIP_HINT: &str = "Conteúdo será adicionado nas próximas versões.";
pub const LOAD_ERROR_SUFFIX: &str = "Erro ao carregar dados";
pub const MISSING_VALUE: &str = "—";
