//! In-process content service for tests

use axum::{
    extract::{Query, Request},
    http::StatusCode,
    middleware::{self, Next},
    routing::{get, MethodRouter},
    Json, Router,
};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Path and decoded query pairs of every request a router received, in order
pub(crate) type RequestLog = Arc<Mutex<Vec<(String, Vec<(String, String)>)>>>;

/// Serve a router on a free local port and return its base URL
pub(crate) async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{}", addr)
}

/// Wrap a router so each request's path and query pairs are logged
pub(crate) fn record_requests(router: Router) -> (Router, RequestLog) {
    let log = RequestLog::default();
    let recorder = log.clone();

    let router = router.layer(middleware::from_fn(move |req: Request, next: Next| {
        let recorder = recorder.clone();
        async move {
            let pairs = Query::<Vec<(String, String)>>::try_from_uri(req.uri())
                .map(|Query(pairs)| pairs)
                .unwrap_or_default();
            recorder
                .lock()
                .unwrap()
                .push((req.uri().path().to_string(), pairs));
            next.run(req).await
        }
    }));

    (router, log)
}

/// Base URL of a port nothing listens on
pub(crate) async fn unreachable_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

pub(crate) fn project_json(id: u64, slug: &str, order: i64) -> Value {
    json!({
        "id": id,
        "documentId": format!("doc-{}", slug),
        "createdAt": "2025-01-10T12:00:00.000Z",
        "updatedAt": "2025-01-10T12:00:00.000Z",
        "publishedAt": "2025-01-10T12:00:00.000Z",
        "title": format!("Project {}", slug),
        "slug": slug,
        "category": "Corporate",
        "description": "Short description",
        "detailedDescription": null,
        "client": "Acme",
        "date": "2024",
        "order": order,
        "imagePath": format!("/images/projects/{}.jpg", slug),
        "logoPath": null,
        "galleryPaths": null,
        "image": null,
        "logo": null,
        "gallery": null
    })
}

pub(crate) fn partner_json(id: u64, name: &str, order: i64) -> Value {
    json!({
        "id": id,
        "documentId": format!("partner-{}", id),
        "name": name,
        "url": null,
        "order": order,
        "logoPath": format!("/images/partners/{}.svg", name.to_lowercase()),
        "logo": null
    })
}

fn envelope(data: Value) -> Json<Value> {
    Json(json!({ "data": data, "meta": {} }))
}

/// A content service with every read endpoint
///
/// Collections are returned in the given order, ignoring `sort` and
/// `populate`. The project endpoint honours the slug filter. Wrap it with
/// [`record_requests`] to check the query each call sends.
pub(crate) fn fixture_cms(projects: Vec<Value>, partners: Vec<Value>) -> Router {
    fixture_cms_failing(projects, partners, &[])
}

/// Same as [`fixture_cms`], but the listed paths answer 500
pub(crate) fn fixture_cms_failing(
    projects: Vec<Value>,
    partners: Vec<Value>,
    failing: &[&str],
) -> Router {
    let projects = Arc::new(projects);
    let partners = Arc::new(partners);

    let routes: Vec<(&str, MethodRouter)> = vec![
        (
            "/api/homepage",
            get(|| async {
                envelope(json!({
                    "id": 1,
                    "heroTitle": "Eventum",
                    "heroSubtitle": "Event agency",
                    "heroDescription": "Premium events",
                    "heroButtonText": "Get in touch",
                    "seoTitle": "Eventum",
                    "seoDescription": "Premium events"
                }))
            }),
        ),
        (
            "/api/about",
            get(|| async {
                envelope(json!({
                    "id": 1,
                    "title": "About us",
                    "description": "We make events",
                    "statistics": [
                        { "id": 1, "value": 150, "suffix": "+", "label": "events" },
                        { "id": 2, "value": 10, "label": "years" }
                    ]
                }))
            }),
        ),
        (
            "/api/contact-info",
            get(|| async {
                envelope(json!({
                    "id": 1,
                    "email": "hello@eventum.ru",
                    "phone": "+7 000 000-00-00",
                    "address": "Moscow",
                    "latitude": 55.75,
                    "longitude": 37.62,
                    "socialLinks": [{ "id": 1, "platform": "telegram", "url": "https://t.me/eventum" }],
                    "serviceOptions": [
                        { "id": 1, "serviceId": "vip", "label": "VIP events" },
                        { "id": 2, "serviceId": "corporate", "label": "Corporate" }
                    ]
                }))
            }),
        ),
        (
            "/api/footer",
            get(|| async {
                envelope(json!({
                    "id": 1,
                    "copyright": "(c) Eventum",
                    "linkGroups": [
                        { "id": 1, "title": "Company", "links": [
                            { "id": 1, "label": "Projects", "url": "/#projects" }
                        ]}
                    ]
                }))
            }),
        ),
        (
            "/api/projects",
            get(move |Query(query): Query<HashMap<String, String>>| {
                let projects = projects.clone();
                async move {
                    let selected: Vec<Value> = match query.get("filters[slug][$eq]") {
                        Some(slug) => projects
                            .iter()
                            .filter(|p| p["slug"] == slug.as_str())
                            .cloned()
                            .collect(),
                        None => projects.to_vec(),
                    };
                    envelope(Value::Array(selected))
                }
            }),
        ),
        (
            "/api/partners",
            get(move || {
                let partners = partners.clone();
                async move { envelope(Value::Array(partners.to_vec())) }
            }),
        ),
    ];

    routes
        .into_iter()
        .fold(Router::new(), |router, (path, route)| {
            if failing.contains(&path) {
                router.route(path, get(|| async { StatusCode::INTERNAL_SERVER_ERROR }))
            } else {
                router.route(path, route)
            }
        })
}
