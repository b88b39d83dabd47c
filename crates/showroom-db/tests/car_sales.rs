//! Listing, searching, summarizing and selling against a live database.
//!
//! Each test gets its own migrated database from `#[sqlx::test]`, which
//! reads `DATABASE_URL`.

mod common;

use common::{days_ago, fixture, new_sale};
use showroom_core::{Money, SaleRecord};
use showroom_db::migrations::migration_status;
use showroom_db::{Database, DbError};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../migrations/postgres")]
async fn test_health_and_migrations(pool: PgPool) {
    let db = Database::from_pool(pool);

    assert!(db.health_check().await);

    let (total, applied) = migration_status(db.pool()).await.unwrap();
    assert_eq!(total, 2);
    assert_eq!(applied, total);
}

#[sqlx::test(migrations = false)]
async fn test_unmigrated_database_reports_zero_applied(pool: PgPool) {
    let (total, applied) = migration_status(&pool).await.unwrap();
    assert_eq!(total, 2);
    assert_eq!(applied, 0);
}

#[sqlx::test(migrations = "../../migrations/postgres")]
async fn test_new_listing_is_unsold(pool: PgPool) {
    let db = Database::from_pool(pool);
    let f = fixture(&db).await;

    let id = db
        .car_sales()
        .add(&new_sale(&f.make, "Hatch", 12_345))
        .await
        .unwrap();

    let listing = db.car_sales().get_by_id(id).await.unwrap().expect("listing");
    assert_eq!(listing.make, f.make);
    assert_eq!(listing.model, "Hatch");
    assert_eq!(listing.price, Money::from_dollars(12_345));
    assert!(!listing.is_sold);
    assert_eq!(listing.is_sold_label(), "No");
    assert_eq!(listing.buyer_label(), "N/A");
    assert!(listing.is_consistent());
}

#[sqlx::test(migrations = "../../migrations/postgres")]
async fn test_price_cents_survive_round_trip(pool: PgPool) {
    let db = Database::from_pool(pool);
    let f = fixture(&db).await;

    let mut sale = new_sale(&f.make, "Wagon", 0);
    sale.price = Money::from_cents(1_899_995);
    let id = db.car_sales().add(&sale).await.unwrap();

    let listing = db.car_sales().get_by_id(id).await.unwrap().unwrap();
    assert_eq!(listing.price.cents(), 1_899_995);
}

#[sqlx::test(migrations = "../../migrations/postgres")]
async fn test_record_sale_marks_listing_sold(pool: PgPool) {
    let db = Database::from_pool(pool);
    let f = fixture(&db).await;

    let id = db
        .car_sales()
        .add(&new_sale(&f.make, "Sedan", 20_000))
        .await
        .unwrap();

    let sale_date = days_ago(3);
    db.car_sales()
        .record_sale(&SaleRecord {
            car_sale_id: id,
            customer: f.customer_name.clone(),
            salesperson: f.salesperson_name.clone(),
            sale_date,
        })
        .await
        .unwrap();

    let listing = db.car_sales().get_by_id(id).await.unwrap().unwrap();
    assert!(listing.is_sold);
    assert_eq!(listing.sale_date, Some(sale_date));
    assert_eq!(listing.buyer.as_deref(), Some(f.customer_name.as_str()));
    assert_eq!(listing.salesperson.as_deref(), Some(f.salesperson_name.as_str()));
    assert!(listing.is_consistent());
}

#[sqlx::test(migrations = "../../migrations/postgres")]
async fn test_unknown_customer_does_not_commit(pool: PgPool) {
    let db = Database::from_pool(pool);
    let f = fixture(&db).await;

    let id = db
        .car_sales()
        .add(&new_sale(&f.make, "Coupe", 30_000))
        .await
        .unwrap();

    let err = db
        .car_sales()
        .record_sale(&SaleRecord {
            car_sale_id: id,
            customer: format!("Nobody {}", f.token),
            salesperson: f.salesperson_name.clone(),
            sale_date: days_ago(1),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, DbError::NotFound { ref entity, .. } if entity == "Customer"));

    let listing = db.car_sales().get_by_id(id).await.unwrap().unwrap();
    assert!(!listing.is_sold);
    assert!(listing.sale_date.is_none());
}

#[sqlx::test(migrations = "../../migrations/postgres")]
async fn test_unknown_salesperson_does_not_commit(pool: PgPool) {
    let db = Database::from_pool(pool);
    let f = fixture(&db).await;

    let id = db
        .car_sales()
        .add(&new_sale(&f.make, "Coupe", 30_000))
        .await
        .unwrap();

    let err = db
        .car_sales()
        .record_sale(&SaleRecord {
            car_sale_id: id,
            customer: f.customer_name.clone(),
            salesperson: format!("Ghost {}", f.token),
            sale_date: days_ago(1),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, DbError::NotFound { ref entity, .. } if entity == "Salesperson"));

    let listing = db.car_sales().get_by_id(id).await.unwrap().unwrap();
    assert!(!listing.is_sold);
    assert!(listing.buyer.is_none());
}

#[sqlx::test(migrations = "../../migrations/postgres")]
async fn test_unknown_car_sale_is_not_found(pool: PgPool) {
    let db = Database::from_pool(pool);
    let f = fixture(&db).await;

    let err = db
        .car_sales()
        .record_sale(&SaleRecord {
            car_sale_id: i32::MAX,
            customer: f.customer_name.clone(),
            salesperson: f.salesperson_name.clone(),
            sale_date: days_ago(1),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, DbError::NotFound { ref entity, .. } if entity == "CarSale"));
}

#[sqlx::test(migrations = "../../migrations/postgres")]
async fn test_find_matches_make_and_names(pool: PgPool) {
    let db = Database::from_pool(pool);
    let f = fixture(&db).await;

    let older = db.car_sales().add(&new_sale(&f.make, "Alpha", 10_000)).await.unwrap();
    let newer = db.car_sales().add(&new_sale(&f.make, "Beta", 11_000)).await.unwrap();
    let unsold = db.car_sales().add(&new_sale(&f.make, "Gamma", 12_000)).await.unwrap();

    for (id, days) in [(older, 30), (newer, 2)] {
        db.car_sales()
            .record_sale(&SaleRecord {
                car_sale_id: id,
                customer: f.customer_name.clone(),
                salesperson: f.salesperson_name.clone(),
                sale_date: days_ago(days),
            })
            .await
            .unwrap();
    }

    // Make match, case-insensitive: newest sale first, unsold last.
    let hits = db.car_sales().find(&f.make.to_uppercase()).await.unwrap();
    let ids: Vec<i32> = hits.iter().map(|l| l.car_sale_id).collect();
    assert_eq!(ids, vec![newer, older, unsold]);

    // Buyer name match only finds the sold ones.
    let hits = db.car_sales().find(&format!("buyer{}", f.token)).await.unwrap();
    let ids: Vec<i32> = hits.iter().map(|l| l.car_sale_id).collect();
    assert_eq!(ids, vec![newer, older]);

    // Salesperson name match.
    let hits = db.car_sales().find(&format!("Seller{}", f.token)).await.unwrap();
    assert_eq!(hits.len(), 2);
    assert!(hits.iter().all(|l| l.is_sold && l.is_consistent()));
}

#[sqlx::test(migrations = "../../migrations/postgres")]
async fn test_find_treats_wildcards_literally(pool: PgPool) {
    let db = Database::from_pool(pool);
    let f = fixture(&db).await;

    db.car_sales().add(&new_sale(&f.make, "Plain", 9_000)).await.unwrap();

    let hits = db
        .car_sales()
        .find(&format!("{}%_", f.make))
        .await
        .unwrap();
    assert!(hits.is_empty());
}

#[sqlx::test(migrations = "../../migrations/postgres")]
async fn test_summary_groups_by_make_and_model(pool: PgPool) {
    let db = Database::from_pool(pool);
    let f = fixture(&db).await;

    let a1 = db.car_sales().add(&new_sale(&f.make, "A", 10_000)).await.unwrap();
    db.car_sales().add(&new_sale(&f.make, "A", 12_000)).await.unwrap();
    db.car_sales().add(&new_sale(&f.make, "B", 5_000)).await.unwrap();

    let sale_date = days_ago(5);
    db.car_sales()
        .record_sale(&SaleRecord {
            car_sale_id: a1,
            customer: f.customer_name.clone(),
            salesperson: f.salesperson_name.clone(),
            sale_date,
        })
        .await
        .unwrap();

    let summary: Vec<_> = db
        .car_sales()
        .summary()
        .await
        .unwrap()
        .into_iter()
        .filter(|s| s.make == f.make)
        .collect();

    assert_eq!(summary.len(), 2);

    let a = &summary[0];
    assert_eq!(a.model, "A");
    assert_eq!(a.available_units, 1);
    assert_eq!(a.sold_units, 1);
    assert_eq!(a.total_prices, Money::from_dollars(22_000));
    assert_eq!(a.sold_total_prices, Money::from_dollars(10_000));
    assert_eq!(a.last_purchase_at, Some(sale_date));

    let b = &summary[1];
    assert_eq!(b.model, "B");
    assert_eq!(b.available_units, 1);
    assert_eq!(b.sold_units, 0);
    assert_eq!(b.sold_total_prices, Money::zero());
    assert_eq!(b.last_purchase_label(), "N/A");
}

#[sqlx::test(migrations = "../../migrations/postgres")]
async fn test_server_side_aggregates(pool: PgPool) {
    let db = Database::from_pool(pool);
    let f = fixture(&db).await;

    assert_eq!(db.stats().salesperson_revenue(&f.username).await.unwrap(), Money::zero());

    let sold = db.car_sales().add(&new_sale(&f.make, "X", 15_000)).await.unwrap();
    db.car_sales().add(&new_sale(&f.make, "Y", 8_000)).await.unwrap();
    db.car_sales().add(&new_sale(&f.make, "Z", 9_000)).await.unwrap();

    db.car_sales()
        .record_sale(&SaleRecord {
            car_sale_id: sold,
            customer: f.customer_name.clone(),
            salesperson: f.salesperson_name.clone(),
            sale_date: days_ago(0),
        })
        .await
        .unwrap();

    let revenue = db
        .stats()
        .salesperson_revenue(&f.username.to_uppercase())
        .await
        .unwrap();
    assert_eq!(revenue, Money::from_dollars(15_000));

    let available = db.stats().available_units(&f.make.to_lowercase()).await.unwrap();
    assert_eq!(available, 2);
}
