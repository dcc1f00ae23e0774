use crate::models::{Capability, ModeratorProfile};

struct NavEntry {
    title: &'static str,
    url: &'static str,
    requires: Option<Capability>,
}

const NAV: &[NavEntry] = &[
    NavEntry {
        title: "Analytics",
        url: "/dashboard/analytics",
        requires: None,
    },
    NavEntry {
        title: "Users",
        url: "/dashboard/users",
        requires: None,
    },
    NavEntry {
        title: "Requests",
        url: "/dashboard/requests",
        requires: None,
    },
    NavEntry {
        title: "Items",
        url: "/dashboard/items",
        requires: None,
    },
    NavEntry {
        title: "Bookings",
        url: "/dashboard/bookings",
        requires: None,
    },
    NavEntry {
        title: "Merchants",
        url: "/dashboard/merchants",
        requires: None,
    },
    NavEntry {
        title: "Moderators",
        url: "/dashboard/moderators",
        requires: Some(Capability::ManageModerators),
    },
];

#[derive(Debug, Clone)]
pub struct NavLink {
    pub title: &'static str,
    pub url: &'static str,
    pub active: bool,
}

/// Sidebar and header data shared by every dashboard page.
#[derive(Debug, Clone)]
pub struct Layout {
    pub page_name: String,
    pub nav: Vec<NavLink>,
    pub username: String,
    pub initial: String,
    pub role: &'static str,
    pub is_admin: bool,
}

impl Layout {
    pub fn new(moderator: &ModeratorProfile, path: &str) -> Self {
        let nav = NAV
            .iter()
            .filter(|entry| entry.requires.is_none_or(|cap| moderator.can(cap)))
            .map(|entry| NavLink {
                title: entry.title,
                url: entry.url,
                active: entry.url == path,
            })
            .collect();

        Self {
            page_name: page_name(path),
            nav,
            username: moderator.username.clone(),
            initial: moderator.initial(),
            role: moderator.role.label(),
            is_admin: moderator.can(Capability::AdminSettings),
        }
    }
}

/// Capitalised last path segment, "Dashboard" at the root.
pub fn page_name(path: &str) -> String {
    let segment = path.split('/').filter(|s| !s.is_empty()).last().unwrap_or("dashboard");
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => "Dashboard".to_string(),
    }
}
