//! Screen table: every navigable screen, its path pattern and who may see it.
//!
//! DESIGN
//! ======
//! The table is data, not router configuration, so the guard can be checked
//! against every declared role without mounting a UI. The Leptos router in
//! the client crate registers one route per [`Screen`] using
//! [`Screen::pattern`].

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::types::Role;

pub const HOME_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Who may render a screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    /// Anyone, signed in or not.
    Open,
    /// Signed-in users; `Some(role)` additionally requires that exact role.
    Protected(Option<Role>),
    /// Only visitors without a session (login, registration).
    GuestOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Landing,
    Login,
    Register,
    Offers,
    OfferDetail,
    Dashboard,
    OwnProfile,
    UserProfile,
    Inbox,
    Conversation,
    EventHistory,
    ApplyToOffer,
    MyApplications,
    CreateOffer,
    EditOffer,
    OfferApplications,
    MyOffers,
    Payment,
    NotFound,
}

impl Screen {
    pub const ALL: [Self; 19] = [
        Self::Landing,
        Self::Login,
        Self::Register,
        Self::Offers,
        Self::OfferDetail,
        Self::Dashboard,
        Self::OwnProfile,
        Self::UserProfile,
        Self::Inbox,
        Self::Conversation,
        Self::EventHistory,
        Self::ApplyToOffer,
        Self::MyApplications,
        Self::CreateOffer,
        Self::EditOffer,
        Self::OfferApplications,
        Self::MyOffers,
        Self::Payment,
        Self::NotFound,
    ];

    /// Router path pattern. `:name` segments are parameters; `*` matches anything.
    #[must_use]
    pub fn pattern(self) -> &'static str {
        match self {
            Self::Landing => HOME_PATH,
            Self::Login => LOGIN_PATH,
            Self::Register => REGISTER_PATH,
            Self::Offers => "/ofertas",
            Self::OfferDetail => "/ofertas/:id",
            Self::Dashboard => DASHBOARD_PATH,
            Self::OwnProfile => "/profile",
            Self::UserProfile => "/profile/:id",
            Self::Inbox => "/mensajes",
            Self::Conversation => "/mensajes/:userId",
            Self::EventHistory => "/historial",
            Self::ApplyToOffer => "/ofertas/:id/postular",
            Self::MyApplications => "/mis-postulaciones",
            Self::CreateOffer => "/crear-oferta",
            Self::EditOffer => "/ofertas/:id/editar",
            Self::OfferApplications => "/ofertas/:id/postulaciones",
            Self::MyOffers => "/mis-ofertas",
            Self::Payment => "/pagos/:ofertaId/:postulacionId",
            Self::NotFound => "*",
        }
    }

    #[must_use]
    pub fn access(self) -> Access {
        match self {
            Self::Landing | Self::Offers | Self::OfferDetail | Self::NotFound => Access::Open,
            Self::Login | Self::Register => Access::GuestOnly,
            Self::Dashboard
            | Self::OwnProfile
            | Self::UserProfile
            | Self::Inbox
            | Self::Conversation
            | Self::EventHistory => Access::Protected(None),
            Self::ApplyToOffer | Self::MyApplications => Access::Protected(Some(Role::Musician)),
            Self::CreateOffer
            | Self::EditOffer
            | Self::OfferApplications
            | Self::MyOffers
            | Self::Payment => Access::Protected(Some(Role::Organizer)),
        }
    }

    /// Role a screen demands, if any.
    #[must_use]
    pub fn required_role(self) -> Option<Role> {
        match self.access() {
            Access::Protected(role) => role,
            Access::Open | Access::GuestOnly => None,
        }
    }

    /// Every distinct role literal the table requires, in declaration order.
    #[must_use]
    pub fn declared_roles() -> Vec<Role> {
        let mut roles: Vec<Role> = Vec::new();
        for role in Self::ALL.iter().filter_map(|s| s.required_role()) {
            if !roles.contains(&role) {
                roles.push(role);
            }
        }
        roles
    }

    /// Match a concrete path (query and fragment ignored). Unknown paths
    /// resolve to [`Screen::NotFound`].
    #[must_use]
    pub fn resolve(path: &str) -> RouteMatch {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        Self::ALL
            .iter()
            .filter(|s| **s != Self::NotFound)
            .find_map(|screen| match_pattern(screen.pattern(), &segments).map(|params| RouteMatch { screen: *screen, params }))
            .unwrap_or(RouteMatch { screen: Self::NotFound, params: Vec::new() })
    }

    /// Concrete path for this screen with `args` substituted for its
    /// parameters in order. Missing arguments leave the segment empty.
    #[must_use]
    pub fn href(self, args: &[&str]) -> String {
        if self == Self::NotFound {
            return HOME_PATH.to_owned();
        }
        let mut args = args.iter();
        let mut out = String::new();
        for segment in self.pattern().split('/').filter(|s| !s.is_empty()) {
            out.push('/');
            if segment.starts_with(':') {
                out.push_str(&urlencoding::encode(args.next().copied().unwrap_or_default()));
            } else {
                out.push_str(segment);
            }
        }
        if out.is_empty() { HOME_PATH.to_owned() } else { out }
    }
}

/// A resolved path: the screen plus its captured parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    pub screen: Screen,
    pub params: Vec<(&'static str, String)>,
}

impl RouteMatch {
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.iter().find(|(k, _)| *k == name).map(|(_, v)| v.as_str())
    }
}

fn match_pattern(pattern: &'static str, segments: &[&str]) -> Option<Vec<(&'static str, String)>> {
    let expected: Vec<&'static str> = pattern.split('/').filter(|s| !s.is_empty()).collect();
    if expected.len() != segments.len() {
        return None;
    }

    let mut params = Vec::new();
    for (want, got) in expected.iter().zip(segments) {
        if let Some(name) = want.strip_prefix(':') {
            let value = urlencoding::decode(got).map_or_else(|_| (*got).to_owned(), |v| v.into_owned());
            params.push((name, value));
        } else if want != got {
            return None;
        }
    }
    Some(params)
}
