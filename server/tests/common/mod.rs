#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Request},
    response::Response,
    Router,
};
use base::{database::connect, setting::Pool};
use migration::Migrator;
use sea_orm::{ConnectionTrait, DatabaseConnection, DbBackend, Statement};
use sea_orm_migration::MigratorTrait;

pub const SECRET: &str = "integration-secret";

/// Fresh in-memory database with every migration applied. A single pooled
/// connection keeps the whole test on the same memory database.
pub async fn setup_db() -> DatabaseConnection {
    let pool = Pool {
        max_connections: 1,
        min_connections: 1,
        ..Default::default()
    };
    let db = connect("sqlite::memory:", &pool)
        .await
        .expect("Should open in-memory database");
    Migrator::up(&db, None).await.expect("Should migrate");
    db
}

pub async fn setup() -> (Router, DatabaseConnection) {
    let db = setup_db().await;
    (fyyur::api::router(db.clone(), SECRET), db)
}

pub async fn exec(db: &DatabaseConnection, sql: &str) {
    db.execute(Statement::from_string(DbBackend::Sqlite, sql.to_string()))
        .await
        .expect("Should run raw statement");
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post(uri: &str, form: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .unwrap()
}

pub async fn body_string(response: Response) -> String {
    let bytes = hyper::body::to_bytes(response.into_body())
        .await
        .expect("Should read body");
    String::from_utf8(bytes.to_vec()).expect("Body should be UTF-8")
}

pub fn venue_form(name: &str, city: &str, extra: &str) -> String {
    format!(
        "name={}&city={}&state=CA&address=1015+Folsom+Street&phone=123-123-1234&image_link=&facebook_link=&website_link=&seeking_description={}",
        name, city, extra
    )
}

pub fn artist_form(name: &str, extra: &str) -> String {
    format!(
        "name={}&city=San+Francisco&state=CA&phone=326-123-5000&image_link=&facebook_link=&website_link=&seeking_description={}",
        name, extra
    )
}
