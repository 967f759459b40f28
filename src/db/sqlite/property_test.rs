//! Tests for the SQLite PropertyRepository.

use crate::db::{
    Database, DbError, NewProperty, PropertyPatch, PropertyQuery, PropertyRepository,
    PropertyStatus, SqliteDatabase, UnitOfWork,
};

async fn setup_db() -> SqliteDatabase {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create in-memory database");
    db.init_schema().await.expect("Schema should be created");
    db
}

fn new_property(id: &str, city: &str, price: f64, status: &str) -> NewProperty {
    NewProperty {
        id: id.to_string(),
        city: city.to_string(),
        price,
        rooms: 3,
        status: status.to_string(),
        description: String::new(),
        features: String::new(),
    }
}

async fn insert(db: &SqliteDatabase, property: NewProperty) {
    let mut uow = db.begin().await.unwrap();
    uow.create(&property).await.expect("Create should succeed");
    uow.commit().await.unwrap();
}

#[tokio::test(flavor = "multi_thread")]
async fn create_and_get_round_trips_all_fields() {
    let db = setup_db().await;
    let input = NewProperty {
        id: "p1".to_string(),
        city: "Lyon".to_string(),
        price: 200000.0,
        rooms: 3,
        status: "available".to_string(),
        description: "Near the Saone".to_string(),
        features: "balcony,parking".to_string(),
    };
    insert(&db, input.clone()).await;

    let mut uow = db.begin().await.unwrap();
    let fetched = uow.get("p1").await.unwrap().expect("Property should exist");

    assert_eq!(fetched.id, input.id);
    assert_eq!(fetched.city, input.city);
    assert_eq!(fetched.price, input.price);
    assert_eq!(fetched.rooms, input.rooms);
    assert_eq!(fetched.status, PropertyStatus::Available);
    assert_eq!(fetched.description, input.description);
    assert_eq!(fetched.features, input.features);
}

#[tokio::test(flavor = "multi_thread")]
async fn get_missing_property_returns_none() {
    let db = setup_db().await;
    let mut uow = db.begin().await.unwrap();

    assert!(uow.get("nope").await.unwrap().is_none());
}

#[tokio::test(flavor = "multi_thread")]
async fn create_rejects_blank_id() {
    let db = setup_db().await;
    let mut uow = db.begin().await.unwrap();

    let result = uow.create(&new_property("   ", "Lyon", 1.0, "available")).await;
    assert!(matches!(result, Err(DbError::Validation { .. })));

    let result = uow.create(&new_property("", "Lyon", 1.0, "available")).await;
    assert!(matches!(result, Err(DbError::Validation { .. })));
}

#[tokio::test(flavor = "multi_thread")]
async fn create_rejects_unknown_status() {
    let db = setup_db().await;
    let mut uow = db.begin().await.unwrap();

    let result = uow.create(&new_property("p1", "Lyon", 1.0, "rented")).await;
    assert!(matches!(result, Err(DbError::UnknownStatus { .. })));
    assert!(uow.list_all().await.unwrap().is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn create_resolves_status_case_insensitively() {
    let db = setup_db().await;
    let mut uow = db.begin().await.unwrap();

    let created = uow
        .create(&new_property("p1", "Lyon", 1.0, "SOLD"))
        .await
        .unwrap();
    assert_eq!(created.status, PropertyStatus::Sold);
}

#[tokio::test(flavor = "multi_thread")]
async fn create_duplicate_id_reports_already_exists() {
    let db = setup_db().await;
    insert(&db, new_property("p1", "Lyon", 1.0, "available")).await;

    let mut uow = db.begin().await.unwrap();
    let result = uow.create(&new_property("p1", "Paris", 2.0, "sold")).await;

    assert!(matches!(
        result,
        Err(DbError::AlreadyExists { ref id, .. }) if id == "p1"
    ));
}

#[tokio::test(flavor = "multi_thread")]
async fn search_matches_city_case_insensitively_as_substring() {
    let db = setup_db().await;
    insert(&db, new_property("p1", "Lyon", 200000.0, "available")).await;
    insert(&db, new_property("p2", "Paris", 200000.0, "available")).await;

    let mut uow = db.begin().await.unwrap();
    let query = PropertyQuery {
        city: Some("YO".to_string()),
        ..Default::default()
    };
    let found = uow.search(&query).await.unwrap();

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, "p1");
}

#[tokio::test(flavor = "multi_thread")]
async fn search_with_empty_city_does_not_filter() {
    let db = setup_db().await;
    insert(&db, new_property("p1", "Lyon", 1.0, "available")).await;
    insert(&db, new_property("p2", "Paris", 1.0, "available")).await;

    let mut uow = db.begin().await.unwrap();
    let query = PropertyQuery {
        city: Some(String::new()),
        ..Default::default()
    };

    assert_eq!(uow.search(&query).await.unwrap().len(), 2);
}

#[tokio::test(flavor = "multi_thread")]
async fn search_price_bounds_are_inclusive() {
    let db = setup_db().await;
    insert(&db, new_property("low", "Lyon", 100000.0, "available")).await;
    insert(&db, new_property("mid", "Lyon", 200000.0, "available")).await;
    insert(&db, new_property("high", "Lyon", 300000.0, "available")).await;
    insert(&db, new_property("over", "Lyon", 300000.5, "available")).await;

    let mut uow = db.begin().await.unwrap();
    let query = PropertyQuery {
        min_price: 100000.0,
        max_price: 300000.0,
        ..Default::default()
    };
    let mut ids: Vec<String> = uow
        .search(&query)
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.id)
        .collect();
    ids.sort();

    assert_eq!(ids, vec!["high", "low", "mid"]);
}

#[tokio::test(flavor = "multi_thread")]
async fn search_status_is_case_insensitive_and_lenient() {
    let db = setup_db().await;
    insert(&db, new_property("free", "Lyon", 1.0, "available")).await;
    insert(&db, new_property("gone", "Lyon", 1.0, "sold")).await;

    let mut uow = db.begin().await.unwrap();
    let search = |status: &str| PropertyQuery {
        status: status.to_string(),
        ..Default::default()
    };

    let sold = uow.search(&search("SOLD")).await.unwrap();
    assert_eq!(sold.len(), 1);
    assert_eq!(sold[0].id, "gone");

    let bogus = uow.search(&search("bogus")).await.unwrap();
    let available = uow.search(&search("available")).await.unwrap();
    assert_eq!(bogus, available);
    assert_eq!(bogus.len(), 1);
    assert_eq!(bogus[0].id, "free");
}

#[tokio::test(flavor = "multi_thread")]
async fn update_overwrites_only_supplied_fields() {
    let db = setup_db().await;
    insert(&db, new_property("p1", "Lyon", 200000.0, "available")).await;

    let mut uow = db.begin().await.unwrap();
    let patch = PropertyPatch {
        price: Some(250000.0),
        features: Some("garden".to_string()),
        ..Default::default()
    };
    let updated = uow.update("p1", &patch).await.unwrap().expect("Should exist");
    uow.commit().await.unwrap();

    assert_eq!(updated.price, 250000.0);

    let mut uow = db.begin().await.unwrap();
    let stored = uow.get("p1").await.unwrap().unwrap();
    assert_eq!(stored.price, 250000.0);
    assert_eq!(stored.features, "garden");
    assert_eq!(stored.city, "Lyon");
    assert_eq!(stored.rooms, 3);
    assert_eq!(stored.status, PropertyStatus::Available);
}

#[tokio::test(flavor = "multi_thread")]
async fn update_missing_property_returns_none() {
    let db = setup_db().await;
    let mut uow = db.begin().await.unwrap();

    let patch = PropertyPatch {
        city: Some("Paris".to_string()),
        ..Default::default()
    };
    assert!(uow.update("nope", &patch).await.unwrap().is_none());
}

#[tokio::test(flavor = "multi_thread")]
async fn update_with_unknown_status_modifies_nothing() {
    let db = setup_db().await;
    insert(&db, new_property("p1", "Lyon", 200000.0, "available")).await;

    let mut uow = db.begin().await.unwrap();
    let patch = PropertyPatch {
        city: Some("Paris".to_string()),
        price: Some(1.0),
        status: Some("rented".to_string()),
        ..Default::default()
    };
    let result = uow.update("p1", &patch).await;
    assert!(matches!(result, Err(DbError::UnknownStatus { .. })));

    let stored = uow.get("p1").await.unwrap().unwrap();
    assert_eq!(stored.city, "Lyon");
    assert_eq!(stored.price, 200000.0);
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_reports_whether_a_row_was_removed() {
    let db = setup_db().await;
    insert(&db, new_property("p1", "Lyon", 1.0, "available")).await;

    let mut uow = db.begin().await.unwrap();
    assert!(uow.delete("p1").await.unwrap());
    assert!(!uow.delete("p1").await.unwrap());
    assert!(uow.get("p1").await.unwrap().is_none());
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_rejects_blank_id() {
    let db = setup_db().await;
    let mut uow = db.begin().await.unwrap();

    let result = uow.delete(" \t").await;
    assert!(matches!(result, Err(DbError::Validation { .. })));
}

#[tokio::test(flavor = "multi_thread")]
async fn seed_populates_empty_catalog_once() {
    let db = setup_db().await;

    let mut uow = db.begin().await.unwrap();
    assert!(uow.seed().await.unwrap());
    uow.commit().await.unwrap();

    let mut uow = db.begin().await.unwrap();
    assert!(!uow.seed().await.unwrap());

    let all = uow.list_all().await.unwrap();
    assert_eq!(all.len(), 3);
    let madrid = all.iter().find(|p| p.id == "prop_001").unwrap();
    assert_eq!(madrid.city, "Madrid");
    assert_eq!(madrid.price, 300000.0);
    assert_eq!(madrid.rooms, 2);
    assert_eq!(madrid.description, "Bright apartment in downtown");
}

#[tokio::test(flavor = "multi_thread")]
async fn seed_skips_catalog_with_existing_data() {
    let db = setup_db().await;
    insert(&db, new_property("mine", "Lyon", 1.0, "available")).await;

    let mut uow = db.begin().await.unwrap();
    assert!(!uow.seed().await.unwrap());
    assert_eq!(uow.list_all().await.unwrap().len(), 1);
}
