use super::*;

// =============================================================================
// PROTECTED PREFIX
// =============================================================================

#[test]
fn anonymous_dashboard_redirects_to_login() {
    assert_eq!(decide("/dashboard/sales", false), GuardDecision::Redirect(LOGIN_ROUTE));
}

#[test]
fn anonymous_dashboard_root_redirects_to_login() {
    assert_eq!(decide("/dashboard", false), GuardDecision::Redirect(LOGIN_ROUTE));
}

#[test]
fn authenticated_dashboard_allows() {
    assert_eq!(decide("/dashboard/sales", true), GuardDecision::Allow);
}

#[test]
fn nested_dashboard_paths_are_protected() {
    assert_eq!(decide("/dashboard/reports", false), GuardDecision::Redirect(LOGIN_ROUTE));
    assert_eq!(decide("/dashboard/customers", false), GuardDecision::Redirect(LOGIN_ROUTE));
}

// =============================================================================
// AUTH-ONLY ROUTES
// =============================================================================

#[test]
fn authenticated_login_redirects_to_dashboard() {
    assert_eq!(decide("/login", true), GuardDecision::Redirect(DASHBOARD_ROUTE));
}

#[test]
fn authenticated_register_redirects_to_dashboard() {
    assert_eq!(decide("/register", true), GuardDecision::Redirect(DASHBOARD_ROUTE));
}

#[test]
fn anonymous_login_allows() {
    assert_eq!(decide("/login", false), GuardDecision::Allow);
}

#[test]
fn anonymous_register_allows() {
    assert_eq!(decide("/register", false), GuardDecision::Allow);
}

// =============================================================================
// PUBLIC ROUTES
// =============================================================================

#[test]
fn root_is_public_either_way() {
    assert_eq!(decide("/", false), GuardDecision::Allow);
    assert_eq!(decide("/", true), GuardDecision::Allow);
}

#[test]
fn unrelated_paths_pass_through() {
    assert_eq!(decide("/about", false), GuardDecision::Allow);
    assert_eq!(decide("/about", true), GuardDecision::Allow);
}
