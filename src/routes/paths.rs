//! Route paths and link building under the configured base path.

pub const LOGIN: &str = "/login";
pub const REGISTER: &str = "/register";

/// Where `/` sends the user. Router navigation adds the base itself, so this
/// stays unprefixed; only plain anchors go through `href`.
pub fn home_redirect() -> &'static str {
    LOGIN
}

/// Prefixes an app path with the router base. `base` is expected to be
/// normalized (see `config::normalize_base_path`).
pub fn href(base: &str, path: &str) -> String {
    format!("{base}{path}")
}

#[cfg(test)]
mod tests {
    use super::{LOGIN, REGISTER, home_redirect, href};

    #[test]
    fn href_without_base_is_the_path() {
        assert_eq!(href("", LOGIN), "/login");
        assert_eq!(href("", REGISTER), "/register");
    }

    #[test]
    fn href_prefixes_base() {
        assert_eq!(href("/portal", LOGIN), "/portal/login");
        assert_eq!(href("/apps/portal", REGISTER), "/apps/portal/register");
    }

    #[test]
    fn home_redirect_is_router_relative() {
        assert_eq!(home_redirect(), "/login");
        // The router prepends its base; a prefixed target would end up doubled.
        assert_eq!(href("/portal", home_redirect()), "/portal/login");
        assert!(!home_redirect().starts_with("/portal"));
    }
}
