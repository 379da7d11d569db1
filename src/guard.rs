//! Edge guard — the per-navigation allow/redirect decision.
//!
//! DESIGN
//! ======
//! A pure function of exactly two inputs: the requested path and whether the
//! auth-token cookie is present. It never touches the session record, never
//! errors, and performs no side effects, so every route/session combination
//! is testable without a live session.

/// Default landing route for authenticated users.
pub const DASHBOARD_ROUTE: &str = "/dashboard";
/// Login form route.
pub const LOGIN_ROUTE: &str = "/login";
/// Registration form route.
pub const REGISTER_ROUTE: &str = "/register";

/// Outcome of a navigation check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the requested route.
    Allow,
    /// Short-circuit navigation to the given route instead.
    Redirect(&'static str),
}

/// Decide whether a navigation to `path` may proceed.
///
/// Rules, in order: authenticated visitors are pushed off the auth-only
/// pages, anonymous visitors are pushed off the dashboard, everything else
/// passes through.
#[must_use]
pub fn decide(path: &str, token_present: bool) -> GuardDecision {
    let is_auth_page = path.starts_with(LOGIN_ROUTE) || path.starts_with(REGISTER_ROUTE);
    let is_dashboard_page = path.starts_with(DASHBOARD_ROUTE);

    if token_present && is_auth_page {
        return GuardDecision::Redirect(DASHBOARD_ROUTE);
    }
    if !token_present && is_dashboard_page {
        return GuardDecision::Redirect(LOGIN_ROUTE);
    }
    GuardDecision::Allow
}

#[cfg(test)]
#[path = "guard_test.rs"]
mod tests;
