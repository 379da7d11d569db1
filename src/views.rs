//! Text renderings of the dashboard pages.
//!
//! These are deliberately thin: static rows and canned series fetched
//! through the network boundary, printed as plain tables. All the
//! interesting behavior lives in the guard and the session manager.

use std::fmt::Write as _;

use crate::net::api::{self, SeriesKind};
use crate::net::fixtures;
use crate::net::{ApiTransport, TransportError};

/// Render the page at `path`, or `None` if there is no such page.
///
/// Callers are expected to have run the route guard already; this function
/// renders whatever it is asked for.
pub async fn render_route(path: &str, transport: &dyn ApiTransport) -> Result<Option<String>, TransportError> {
    let page = match path {
        "/" => Some(landing()),
        "/login" => Some("Sign in with your email and password.\n".to_owned()),
        "/register" => Some("Create an account with a name, email and password.\n".to_owned()),
        "/dashboard" => Some(overview(transport).await?),
        "/dashboard/sales" => Some(sales(transport).await?),
        "/dashboard/customers" => Some(customers()),
        "/dashboard/products" => Some(products()),
        "/dashboard/reports" => Some(reports()),
        _ => None,
    };
    Ok(page)
}

fn landing() -> String {
    "Pulseboard — business metrics at a glance. Sign in to continue.\n".to_owned()
}

async fn overview(transport: &dyn ApiTransport) -> Result<String, TransportError> {
    let metrics = api::fetch_metrics(transport).await?;
    let sales = api::fetch_series(transport, SeriesKind::Sales).await?;
    let users = api::fetch_series(transport, SeriesKind::Users).await?;
    let categories = api::fetch_series(transport, SeriesKind::Categories).await?;

    let mut out = String::new();
    let _ = writeln!(out, "== Dashboard ==");
    let _ = writeln!(out, "Total users:     {}", metrics.total_users);
    let _ = writeln!(out, "Active sessions: {}", metrics.active_sessions);
    let _ = writeln!(out, "Sales revenue:   ${}", metrics.sales_revenue);
    let _ = writeln!(out);
    out.push_str(&series_block("Sales", &sales));
    out.push_str(&series_block("User growth", &users));
    out.push_str(&series_block("Categories", &categories));
    Ok(out)
}

async fn sales(transport: &dyn ApiTransport) -> Result<String, TransportError> {
    let series = api::fetch_series(transport, SeriesKind::Sales).await?;
    let mut out = String::from("== Sales ==\n");
    out.push_str(&series_block("Monthly sales", &series));
    Ok(out)
}

fn series_block(title: &str, series: &api::Series) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{title}:");
    for (label, value) in series.labels.iter().zip(&series.data) {
        let _ = writeln!(out, "  {label:<12} {value}");
    }
    out
}

fn customers() -> String {
    let mut out = String::from("== Customers ==\n");
    for c in fixtures::customers() {
        let _ = writeln!(
            out,
            "  #{:<3} {:<12} {:<20} {:<8} last purchase {}  ${:>8.2}  {} orders",
            c.id, c.name, c.email, c.status, c.last_purchase, c.total_spent, c.orders
        );
    }
    out
}

fn products() -> String {
    let mut out = String::from("== Products ==\n");
    for p in fixtures::products() {
        let _ = writeln!(
            out,
            "  #{:<3} {:<10} {:<12} ${:>7.2}  stock {:<4} sales {:<4} revenue ${:>8.2}  growth {:+.1}%",
            p.id, p.name, p.category, p.price, p.stock, p.sales, p.revenue, p.growth
        );
    }
    out
}

fn reports() -> String {
    let mut out = String::from("== Reports ==\n");
    for r in fixtures::report_history() {
        let _ = writeln!(out, "  #{:<3} {:<26} [{}] {}  {}  {}", r.id, r.name, r.kind, r.date, r.status, r.size);
    }
    out
}

#[cfg(test)]
#[path = "views_test.rs"]
mod tests;
