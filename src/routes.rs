//! Route Table
//!
//! Static path mapping plus the session gate decision. The router renders
//! pages; this module decides what a path means and who may see it.

pub const LOGIN_PATH: &str = "/login";
pub const EXTRACTS_PATH: &str = "/extracts";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppRoute {
    Clients,
    Transactions,
    Login,
    Extracts { client_id: Option<u32> },
    NotFound,
}

/// Header tab a route belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Clients,
    Transactions,
    Extracts,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Clients, Section::Transactions, Section::Extracts];

    pub fn label(&self) -> &'static str {
        match self {
            Section::Clients => "Clients",
            Section::Transactions => "Transactions",
            Section::Extracts => "Extracts",
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Section::Clients => "/clients",
            Section::Transactions => "/transactions",
            Section::Extracts => EXTRACTS_PATH,
        }
    }
}

impl AppRoute {
    pub fn resolve(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] | ["clients"] => AppRoute::Clients,
            ["transactions"] => AppRoute::Transactions,
            ["login"] => AppRoute::Login,
            ["extracts"] => AppRoute::Extracts { client_id: None },
            ["extracts", id] => AppRoute::Extracts {
                client_id: parse_client_id(id),
            },
            _ => AppRoute::NotFound,
        }
    }

    pub fn requires_session(&self) -> bool {
        matches!(self, AppRoute::Extracts { .. })
    }

    pub fn section(&self) -> Option<Section> {
        match self {
            AppRoute::Clients => Some(Section::Clients),
            AppRoute::Transactions => Some(Section::Transactions),
            AppRoute::Extracts { .. } => Some(Section::Extracts),
            AppRoute::Login | AppRoute::NotFound => None,
        }
    }
}

/// Zero and non-numeric ids count as "no id"
pub fn parse_client_id(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok().filter(|id| *id > 0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Render,
    Redirect(&'static str),
}

/// Session gate
pub fn decide(route: AppRoute, authenticated: bool) -> Access {
    match route {
        r if r.requires_session() && !authenticated => Access::Redirect(LOGIN_PATH),
        AppRoute::Login if authenticated => Access::Redirect(EXTRACTS_PATH),
        _ => Access::Render,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_paths() {
        assert_eq!(AppRoute::resolve("/"), AppRoute::Clients);
        assert_eq!(AppRoute::resolve("/clients"), AppRoute::Clients);
        assert_eq!(AppRoute::resolve("/transactions/"), AppRoute::Transactions);
        assert_eq!(AppRoute::resolve("/login?next=x"), AppRoute::Login);
        assert_eq!(AppRoute::resolve("/extracts"), AppRoute::Extracts { client_id: None });
        assert_eq!(
            AppRoute::resolve("/extracts/12"),
            AppRoute::Extracts { client_id: Some(12) }
        );
    }

    #[test]
    fn test_resolve_unknown_paths() {
        assert_eq!(AppRoute::resolve("/reports"), AppRoute::NotFound);
        assert_eq!(AppRoute::resolve("/clients/3/edit"), AppRoute::NotFound);
        assert_eq!(AppRoute::resolve("/extracts/abc"), AppRoute::Extracts { client_id: None });
    }

    #[test]
    fn test_extracts_require_session() {
        let route = AppRoute::resolve("/extracts");
        assert_eq!(decide(route, false), Access::Redirect("/login"));
        assert_eq!(decide(route, true), Access::Render);
        assert_eq!(
            decide(AppRoute::Extracts { client_id: Some(1) }, false),
            Access::Redirect("/login")
        );
    }

    #[test]
    fn test_public_routes_always_render() {
        for route in [AppRoute::Clients, AppRoute::Transactions, AppRoute::NotFound] {
            assert_eq!(decide(route, false), Access::Render);
            assert_eq!(decide(route, true), Access::Render);
        }
    }

    #[test]
    fn test_login_redirects_when_signed_in() {
        assert_eq!(decide(AppRoute::Login, false), Access::Render);
        assert_eq!(decide(AppRoute::Login, true), Access::Redirect("/extracts"));
    }

    #[test]
    fn test_sections() {
        assert_eq!(AppRoute::resolve("/").section(), Some(Section::Clients));
        assert_eq!(AppRoute::Login.section(), None);
        assert_eq!(Section::Extracts.path(), "/extracts");
    }
}
