use login_redirect_axum::Principal;

// Toy user directory standing in for a real authentication backend
const USERS: &[(&str, &[&str])] = &[
    ("alice", &["READ_PRIVILEGE", "ROLE_MANAGER"]),
    ("bob", &["READ_PRIVILEGE", "WRITE_PRIVILEGE"]),
    ("carol", &["READ_PRIVILEGE"]),
    ("dave", &[]),
];

pub(crate) fn user_names() -> Vec<&'static str> {
    USERS.iter().map(|(name, _)| *name).collect()
}

/// Authenticate by user name alone; returns `None` for unknown users
pub(crate) fn authenticate(username: &str) -> Option<Principal> {
    USERS
        .iter()
        .find(|(name, _)| *name == username)
        .map(|(name, authorities)| Principal::new(*name, authorities.iter().copied()))
}
