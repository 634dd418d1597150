//! Tab identifiers and the route they resolve to.

/// Tabs with a real renderer behind them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tab {
    Dashboard,
    Numbers,
    Messages,
    Campaigns,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Dashboard, Tab::Numbers, Tab::Messages, Tab::Campaigns];

    pub fn id(self) -> &'static str {
        match self {
            Tab::Dashboard => "dashboard",
            Tab::Numbers => "numbers",
            Tab::Messages => "messages",
            Tab::Campaigns => "campaigns",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::Numbers => "Números Conectados",
            Tab::Messages => "Central de Mensagens",
            Tab::Campaigns => "Campanhas",
        }
    }

    /// Short name used in load-error placeholders.
    pub fn short_name(self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::Numbers => "Números",
            Tab::Messages => "Mensagens",
            Tab::Campaigns => "Campanhas",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Tab::Dashboard => "fas fa-chart-pie",
            Tab::Numbers => "fas fa-phone",
            Tab::Messages => "fas fa-comments",
            Tab::Campaigns => "fas fa-bullhorn",
        }
    }

    fn from_id(id: &str) -> Option<Tab> {
        Tab::ALL.into_iter().find(|tab| tab.id() == id)
    }
}

/// Where a navigation lands: a registered tab, or the placeholder page for
/// any other tab id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Tab(Tab),
    Placeholder(String),
}

impl Default for Route {
    fn default() -> Self {
        Route::Tab(Tab::Dashboard)
    }
}

impl Route {
    pub fn parse(id: &str) -> Route {
        match Tab::from_id(id) {
            Some(tab) => Route::Tab(tab),
            None => Route::Placeholder(id.to_string()),
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Route::Tab(tab) => tab.id(),
            Route::Placeholder(id) => id,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Tab(tab) => tab.title(),
            Route::Placeholder(id) => placeholder_title(id),
        }
    }
}

/// Entries of the sidebar navigation, in display order: `(tab id, label, icon)`.
pub const NAV_ENTRIES: &[(&str, &str, &str)] = &[
    ("dashboard", "Dashboard", "fas fa-chart-pie"),
    ("numbers", "Números", "fas fa-phone"),
    ("messages", "Mensagens", "fas fa-comments"),
    ("contacts", "Contatos", "fas fa-address-book"),
    ("groups", "Grupos", "fas fa-users"),
    ("campaigns", "Campanhas", "fas fa-bullhorn"),
    ("schedules", "Agendamentos", "fas fa-calendar"),
    ("chatbot", "Chatbot", "fas fa-robot"),
    ("macros", "Macros", "fas fa-bolt"),
    ("reports", "Relatórios", "fas fa-chart-line"),
    ("finances", "Finanças", "fas fa-wallet"),
    ("settings", "Configurações", "fas fa-cog"),
];

fn placeholder_title(id: &str) -> &'static str {
    match id {
        "contacts" => "Contatos",
        "groups" => "Gerenciar Grupos",
        "finances" => "Finanças",
        "settings" => "Configurações do Sistema",
        "macros" => "Gerenciar Macros",
        "chatbot" => "Configurar Chatbot",
        "schedules" => "Agendamentos",
        "reports" => "Relatórios e Analytics",
        _ => "Página em Desenvolvimento",
    }
}
