//! Fixture store backing the mock network service.
//!
//! DESIGN
//! ======
//! User records live behind the [`UserStore`] capability so the login and
//! register handlers never touch a concrete collection; swapping the mock
//! for a real backend removes this module without disturbing the session
//! layer. Everything else here is canned read-only payload data for the
//! dashboard pages.

use std::sync::Mutex;

use serde_json::{Value, json};

/// A canned user record. Plaintext password is acceptable only because this
/// store never leaves the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureUser {
    pub id: u64,
    pub email: String,
    pub password: String,
    pub name: String,
}

/// Capability surface the auth handlers need from the user fixture store.
pub trait UserStore: Send + Sync {
    /// Exact, case-sensitive email lookup.
    fn find_by_email(&self, email: &str) -> Option<FixtureUser>;
    /// Exact, case-sensitive email + password match.
    fn find_by_credentials(&self, email: &str, password: &str) -> Option<FixtureUser>;
    /// Append a new record; ids are assigned as running count + 1.
    fn insert(&self, name: &str, email: &str, password: &str) -> FixtureUser;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory [`UserStore`] seeded with the stock demo account.
pub struct InMemoryUserStore {
    users: Mutex<Vec<FixtureUser>>,
}

impl InMemoryUserStore {
    /// Store containing the single demo user (`test@example.com`).
    #[must_use]
    pub fn seeded() -> Self {
        Self {
            users: Mutex::new(vec![FixtureUser {
                id: 1,
                email: "test@example.com".into(),
                password: "password123".into(),
                name: "Test User".into(),
            }]),
        }
    }

    #[must_use]
    pub fn empty() -> Self {
        Self { users: Mutex::new(Vec::new()) }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<FixtureUser>> {
        self.users
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl UserStore for InMemoryUserStore {
    fn find_by_email(&self, email: &str) -> Option<FixtureUser> {
        self.lock().iter().find(|u| u.email == email).cloned()
    }

    fn find_by_credentials(&self, email: &str, password: &str) -> Option<FixtureUser> {
        self.lock()
            .iter()
            .find(|u| u.email == email && u.password == password)
            .cloned()
    }

    fn insert(&self, name: &str, email: &str, password: &str) -> FixtureUser {
        let mut users = self.lock();
        let user = FixtureUser {
            id: users.len() as u64 + 1,
            email: email.into(),
            password: password.into(),
            name: name.into(),
        };
        users.push(user.clone());
        user
    }

    fn len(&self) -> usize {
        self.lock().len()
    }
}

// =============================================================================
// CANNED DASHBOARD PAYLOADS
// =============================================================================

#[must_use]
pub fn metrics_payload() -> Value {
    json!({
        "totalUsers": 1234,
        "activeSessions": 567,
        "salesRevenue": 89123,
    })
}

#[must_use]
pub fn sales_series() -> Value {
    json!({
        "labels": ["Jan", "Feb", "Mar", "Apr", "May", "Jun"],
        "data": [30, 45, 35, 50, 49, 60],
    })
}

#[must_use]
pub fn users_series() -> Value {
    json!({
        "labels": ["Jan", "Feb", "Mar", "Apr", "May", "Jun"],
        "data": [100, 150, 200, 250, 300, 350],
    })
}

#[must_use]
pub fn categories_series() -> Value {
    json!({
        "labels": ["Category A", "Category B", "Category C", "Category D"],
        "data": [30, 25, 20, 25],
    })
}

// =============================================================================
// LIST-PAGE ROWS
// =============================================================================

/// Customer list row rendered by the customers page.
#[derive(Debug, Clone)]
pub struct CustomerRow {
    pub id: u64,
    pub name: &'static str,
    pub email: &'static str,
    pub status: &'static str,
    pub last_purchase: &'static str,
    pub total_spent: f64,
    pub orders: u32,
}

#[must_use]
pub fn customers() -> Vec<CustomerRow> {
    vec![
        CustomerRow {
            id: 1,
            name: "John Doe",
            email: "john@example.com",
            status: "Active",
            last_purchase: "2024-03-15",
            total_spent: 1234.56,
            orders: 5,
        },
        CustomerRow {
            id: 2,
            name: "Jane Smith",
            email: "jane@example.com",
            status: "Active",
            last_purchase: "2024-03-14",
            total_spent: 2345.67,
            orders: 8,
        },
        CustomerRow {
            id: 3,
            name: "Bob Johnson",
            email: "bob@example.com",
            status: "Inactive",
            last_purchase: "2024-02-28",
            total_spent: 567.89,
            orders: 2,
        },
    ]
}

/// Product list row rendered by the products page.
#[derive(Debug, Clone)]
pub struct ProductRow {
    pub id: u64,
    pub name: &'static str,
    pub category: &'static str,
    pub price: f64,
    pub stock: u32,
    pub sales: u32,
    pub revenue: f64,
    pub growth: f64,
}

#[must_use]
pub fn products() -> Vec<ProductRow> {
    vec![
        ProductRow {
            id: 1,
            name: "Product A",
            category: "Electronics",
            price: 99.99,
            stock: 100,
            sales: 50,
            revenue: 4999.50,
            growth: 12.5,
        },
        ProductRow {
            id: 2,
            name: "Product B",
            category: "Clothing",
            price: 49.99,
            stock: 200,
            sales: 75,
            revenue: 3749.25,
            growth: 8.3,
        },
        ProductRow {
            id: 3,
            name: "Product C",
            category: "Home",
            price: 149.99,
            stock: 50,
            sales: 25,
            revenue: 3749.75,
            growth: -5.2,
        },
    ]
}

/// Generated-report history row rendered by the reports page.
#[derive(Debug, Clone)]
pub struct ReportRow {
    pub id: u64,
    pub name: &'static str,
    pub kind: &'static str,
    pub date: &'static str,
    pub status: &'static str,
    pub size: &'static str,
}

#[must_use]
pub fn report_history() -> Vec<ReportRow> {
    vec![
        ReportRow {
            id: 1,
            name: "Monthly Sales Report",
            kind: "sales",
            date: "2024-03-15",
            status: "Completed",
            size: "2.5 MB",
        },
        ReportRow {
            id: 2,
            name: "Customer Demographics",
            kind: "customers",
            date: "2024-03-14",
            status: "Completed",
            size: "1.8 MB",
        },
        ReportRow {
            id: 3,
            name: "Product Performance Q1",
            kind: "products",
            date: "2024-03-13",
            status: "Processing",
            size: "3.2 MB",
        },
    ]
}

#[cfg(test)]
#[path = "fixtures_test.rs"]
mod tests;
