//! Integration tests for the analytics reports.
//!
//! History is built through the real purchase flow (aisle-register), so the
//! aggregates are computed over exactly the rows the coordinator commits.

use aisle_analytics::AnalyticsService;
use aisle_core::{Money, PurchaseItemRequest, PurchaseRequest};
use aisle_db::{Database, DbConfig};
use aisle_register::RegisterService;

const USER_A: &str = "00000000-0000-0000-0000-00000000000a";
const USER_B: &str = "00000000-0000-0000-0000-00000000000b";

async fn setup() -> (Database, RegisterService, AnalyticsService) {
    let db = Database::new(DbConfig::in_memory()).await.unwrap();

    db.branches().get_or_create("SMKT001").await.unwrap();
    for (name, cents) in [
        ("Apples", 230),
        ("Bananas", 110),
        ("Cheese", 480),
        ("Dates", 520),
    ] {
        db.products()
            .get_or_create(name, Money::from_cents(cents))
            .await
            .unwrap();
    }

    let register = RegisterService::new(db.clone());
    let analytics = AnalyticsService::new(db.clone());
    (db, register, analytics)
}

/// Records one purchase for `user` containing the given products.
async fn record(register: &RegisterService, user: &str, items: &[&str]) {
    register
        .create_purchase(PurchaseRequest {
            supermarket_id: "SMKT001".to_string(),
            user_id: Some(user.to_string()),
            items: items
                .iter()
                .map(|name| PurchaseItemRequest::new(*name))
                .collect(),
            timestamp: None,
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn unique_buyers_counts_purchase_participants_only() {
    let (db, register, analytics) = setup().await;

    // A user row with no purchases does not count as a buyer.
    db.users().get_or_create(None).await.unwrap();
    assert_eq!(analytics.unique_buyers().await.unwrap().unique_buyers_count, 0);

    record(&register, USER_A, &["Apples"]).await;
    record(&register, USER_A, &["Bananas"]).await;
    record(&register, USER_B, &["Apples"]).await;

    // Two distinct purchase owners, regardless of purchase count.
    let report = analytics.unique_buyers().await.unwrap();
    assert_eq!(report.unique_buyers_count, 2);
}

#[tokio::test]
async fn loyalty_threshold_is_inclusive() {
    let (_db, register, analytics) = setup().await;

    // USER_A: exactly 3 purchases, USER_B: 2
    for _ in 0..3 {
        record(&register, USER_A, &["Apples"]).await;
    }
    for _ in 0..2 {
        record(&register, USER_B, &["Bananas"]).await;
    }

    // Default threshold (3): the user with exactly 3 purchases is included
    let report = analytics.loyal_customers(None).await.unwrap();
    assert_eq!(report.min_purchases, 3);
    assert_eq!(report.total_loyal_customers, 1);
    assert_eq!(report.loyal_customers[0].user_id, USER_A);
    assert_eq!(report.loyal_customers[0].purchase_count, 3);

    // Threshold 4: the same user is excluded
    let report = analytics.loyal_customers(Some(4)).await.unwrap();
    assert!(report.loyal_customers.is_empty());

    // Threshold 1: both users qualify, ordered by count descending
    let report = analytics.loyal_customers(Some(1)).await.unwrap();
    assert_eq!(report.total_loyal_customers, 2);
    assert_eq!(report.loyal_customers[0].user_id, USER_A);
    assert_eq!(report.loyal_customers[1].user_id, USER_B);
}

#[tokio::test]
async fn top_sellers_dense_rank_keeps_boundary_ties() {
    let (_db, register, analytics) = setup().await;

    // Totals: Apples 20, Bananas 20, Cheese 5, Dates 1
    for _ in 0..20 {
        record(&register, USER_A, &["Apples", "Bananas"]).await;
    }
    for _ in 0..5 {
        record(&register, USER_A, &["Cheese"]).await;
    }
    record(&register, USER_A, &["Dates"]).await;

    // Three distinct popularity levels → all four products are within the
    // top 3 dense ranks, so limit=3 returns MORE than 3 rows.
    let report = analytics.top_sellers(Some(3)).await.unwrap();
    assert_eq!(report.limit, 3);
    assert_eq!(report.total_products_found, 4);

    let rows: Vec<(&str, i64, i64)> = report
        .top_selling_products
        .iter()
        .map(|p| (p.product_name.as_str(), p.total_sold, p.rank))
        .collect();
    assert_eq!(
        rows,
        vec![
            ("Apples", 20, 1),
            ("Bananas", 20, 1),
            ("Cheese", 5, 2),
            ("Dates", 1, 3),
        ]
    );
}

#[tokio::test]
async fn top_sellers_limit_bounds_rank_levels_not_rows() {
    let (_db, register, analytics) = setup().await;

    for _ in 0..2 {
        record(&register, USER_A, &["Apples", "Bananas"]).await;
    }
    record(&register, USER_A, &["Cheese"]).await;

    // limit=1 keeps the whole tied first rank
    let report = analytics.top_sellers(Some(1)).await.unwrap();
    assert_eq!(report.total_products_found, 2);
    assert!(report
        .top_selling_products
        .iter()
        .all(|p| p.rank == 1 && p.total_sold == 2));

    // A limit beyond the number of distinct levels returns everything
    let report = analytics.top_sellers(Some(10)).await.unwrap();
    assert_eq!(report.total_products_found, 3);
}

#[tokio::test]
async fn top_sellers_empty_history_is_an_empty_report() {
    let (_db, _register, analytics) = setup().await;

    let report = analytics.top_sellers(None).await.unwrap();
    assert_eq!(report.limit, 3);
    assert!(report.top_selling_products.is_empty());
    assert_eq!(report.total_products_found, 0);
}

#[tokio::test]
async fn reports_serialize_with_boundary_field_names() {
    let (_db, register, analytics) = setup().await;
    record(&register, USER_A, &["Apples"]).await;

    let report = analytics.top_sellers(None).await.unwrap();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["limit"], 3);
    assert_eq!(json["total_products_found"], 1);
    assert_eq!(json["top_selling_products"][0]["product_name"], "Apples");
    assert_eq!(json["top_selling_products"][0]["rank"], 1);

    let report = analytics.loyal_customers(Some(1)).await.unwrap();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["min_purchases"], 1);
    assert_eq!(json["loyal_customers"][0]["user_id"], USER_A);
}
