/// Admin vs. front-end classification

/// Path segment every WordPress admin screen lives under
pub const ADMIN_MARKER: &str = "/wp-admin/";

/// Login script, treated as part of the admin side
pub const LOGIN_MARKER: &str = "/wp-login.php";

/// Which side of the site the current page belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Admin,
    FrontEnd,
}

impl Mode {
    /// The side a toggle from this mode lands on
    pub fn opposite(self) -> Mode {
        match self {
            Mode::Admin => Mode::FrontEnd,
            Mode::FrontEnd => Mode::Admin,
        }
    }
}

/// Is this pathname a WordPress admin (or login) screen?
///
/// Plain case-sensitive substring check, no normalization.
pub fn is_admin_mode(pathname: &str) -> bool {
    pathname.contains(ADMIN_MARKER) || pathname.contains(LOGIN_MARKER)
}

pub fn classify_mode(pathname: &str) -> Mode {
    if is_admin_mode(pathname) {
        Mode::Admin
    } else {
        Mode::FrontEnd
    }
}
