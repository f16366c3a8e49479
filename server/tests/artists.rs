mod common;

use axum::http::StatusCode;
use common::{artist_form, body_string, exec, get, post, setup};
use sea_orm::{EntityTrait, PaginatorTrait};
use tower::util::ServiceExt;

#[tokio::test]
async fn create_renders_the_form_again() {
    let (app, db) = setup().await;

    let response = app
        .oneshot(post(
            "/artists/create",
            &artist_form("Guns+N+Petals", "&genres=Rock+n+Roll&seeking_venue=y"),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("Guns N Petals was successfully added!"));
    assert!(body.contains(r#"action="/artists/create""#));

    let artist = entity::ArtistEntity::find().one(&db).await.unwrap().unwrap();
    assert_eq!(artist.name, "Guns N Petals");
    assert_eq!(artist.genres.as_deref(), Some("Rock n Roll"));
    assert!(artist.seeking_venue);
}

#[tokio::test]
async fn list_is_ordered_by_id() {
    let (app, db) = setup().await;
    exec(
        &db,
        "INSERT INTO Artist (id, name) VALUES (6, 'The Wild Sax Band'), (4, 'Guns N Petals'), (5, 'Matt Quevedo')",
    )
    .await;

    let body = body_string(app.oneshot(get("/artists")).await.unwrap()).await;
    let positions: Vec<usize> = ["Guns N Petals", "Matt Quevedo", "The Wild Sax Band"]
        .iter()
        .map(|name| body.find(name).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[tokio::test]
async fn search_counts_upcoming_shows() {
    let (app, db) = setup().await;
    exec(&db, "INSERT INTO Venue (id, name) VALUES (1, 'The Musical Hop')").await;
    exec(
        &db,
        "INSERT INTO Artist (id, name) VALUES (4, 'Guns N Petals'), (5, 'Matt Quevedo'), (6, 'The Wild Sax Band')",
    )
    .await;
    exec(
        &db,
        "INSERT INTO Show (artist_id, venue_id, start_time) VALUES \
         (6, 1, '2035-04-01 20:00:00'), (6, 1, '2035-04-08 20:00:00'), (6, 1, '2019-06-15 23:00:00')",
    )
    .await;

    let response = app
        .oneshot(post("/artists/search", "search_term=A"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains(r#"Number of search results for "A": 3"#));
    assert!(body.contains("The Wild Sax Band</a> <small>2 upcoming shows</small>"));
}

#[tokio::test]
async fn detail_lists_shows_with_their_venue() {
    let (app, db) = setup().await;
    exec(&db, "INSERT INTO Venue (id, name) VALUES (3, 'Park Square Live Music & Coffee')").await;
    exec(
        &db,
        "INSERT INTO Artist (id, name, genres, seeking_venue, seeking_description) VALUES \
         (4, 'Guns N Petals', 'Rock n Roll', 1, 'Looking for shows')",
    )
    .await;
    exec(
        &db,
        "INSERT INTO Show (artist_id, venue_id, start_time) VALUES (4, 3, '2035-04-01 20:00:00')",
    )
    .await;

    let response = app.oneshot(get("/artists/4")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("Currently seeking performance venues"));
    assert!(body.contains("Looking for shows"));
    assert!(body.contains(r#"<a href="/venues/3">Park Square Live Music &amp; Coffee</a>"#));
    assert!(body.contains("1 Upcoming Shows"));
    assert!(body.contains("0 Past Shows"));
}

#[tokio::test]
async fn edit_redirects_and_updates() {
    let (app, db) = setup().await;
    exec(&db, "INSERT INTO Artist (id, name) VALUES (4, 'Guns N Petals')").await;

    let response = app
        .oneshot(post(
            "/artists/4/edit",
            &artist_form("Guns+N+Roses", "&genres=Rock+n+Roll&genres=Punk"),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()["location"], "/artists/4");
    assert!(response.headers()["set-cookie"]
        .to_str()
        .unwrap()
        .starts_with("fyyur_flash="));

    let artist = entity::ArtistEntity::find_by_id(4)
        .one(&db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(artist.name, "Guns N Roses");
    assert_eq!(artist.genres.as_deref(), Some("Rock n Roll,Punk"));
    assert!(!artist.seeking_venue);
    assert_eq!(entity::ArtistEntity::find().count(&db).await.unwrap(), 1);
}

#[tokio::test]
async fn edit_form_of_missing_artist_is_not_found() {
    let (app, _db) = setup().await;

    let response = app.oneshot(get("/artists/4/edit")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn detail_of_missing_artist_is_not_found() {
    let (app, _db) = setup().await;

    let response = app.oneshot(get("/artists/99")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_string(response).await.contains("404 Not Found"));
}

#[tokio::test]
async fn search_folds_non_ascii_case() {
    let (app, db) = setup().await;
    exec(&db, "INSERT INTO Artist (name) VALUES ('ÖSTEN QUARTET'), ('Guns N Petals')").await;

    let body = body_string(
        app.oneshot(post("/artists/search", "search_term=%C3%B6sten"))
            .await
            .unwrap(),
    )
    .await;
    assert!(body.contains(r#"Number of search results for "östen": 1"#));
    assert!(body.contains("ÖSTEN QUARTET"));
}

#[tokio::test]
async fn failed_search_is_unprocessable() {
    let (app, db) = setup().await;
    exec(&db, "INSERT INTO Artist (id, name) VALUES (4, 'Guns N Petals')").await;
    exec(&db, "DROP TABLE Show").await;

    let response = app
        .oneshot(post("/artists/search", "search_term=guns"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
