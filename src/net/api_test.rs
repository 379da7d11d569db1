use super::*;

use std::sync::Arc;

use crate::net::fixtures::InMemoryUserStore;
use crate::net::mock::MockNetwork;

fn transport() -> MockNetwork {
    MockNetwork::new(Arc::new(InMemoryUserStore::seeded()))
}

// =============================================================================
// AUTH CALLS
// =============================================================================

#[tokio::test]
async fn login_decodes_the_user_record() {
    let user = login(&transport(), "test@example.com", "password123")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(user, AuthUser { id: 1, email: "test@example.com".into(), name: "Test User".into() });
}

#[tokio::test]
async fn login_rejection_is_none_not_err() {
    let outcome = login(&transport(), "test@example.com", "wrong").await.unwrap();
    assert!(outcome.is_none());
}

#[tokio::test]
async fn register_decodes_the_new_user() {
    let user = register(&transport(), "Alice", "alice@example.com", "pw")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(user.id, 2);
    assert_eq!(user.name, "Alice");
}

#[tokio::test]
async fn register_duplicate_is_none_not_err() {
    let outcome = register(&transport(), "Imposter", "test@example.com", "pw")
        .await
        .unwrap();
    assert!(outcome.is_none());
}

// =============================================================================
// DASHBOARD CALLS
// =============================================================================

#[tokio::test]
async fn fetch_metrics_decodes_camel_case_fields() {
    let metrics = fetch_metrics(&transport()).await.unwrap();
    assert_eq!(metrics.total_users, 1234);
    assert_eq!(metrics.active_sessions, 567);
    assert_eq!(metrics.sales_revenue, 89123);
}

#[tokio::test]
async fn fetch_series_pairs_labels_with_data() {
    let series = fetch_series(&transport(), SeriesKind::Sales).await.unwrap();
    assert_eq!(series.labels.len(), series.data.len());
    assert_eq!(series.labels[0], "Jan");
    assert_eq!(series.data[0], 30);
}

#[test]
fn series_kinds_map_to_their_endpoints() {
    assert_eq!(SeriesKind::Sales.path(), "/api/dashboard/sales");
    assert_eq!(SeriesKind::Users.path(), "/api/dashboard/users");
    assert_eq!(SeriesKind::Categories.path(), "/api/dashboard/categories");
}
