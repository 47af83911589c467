/// Tests of the production path: the content layer talking to a live worker
use content_sync::application::repositories::{KeyValueStore, RemoteStore};
use content_sync::application::{ContentSite, VariantStatus};
use content_sync::config::ContentConfig;
use content_sync::domain::defaults::default_news_items;
use content_sync::domain::{PageContent, PageId, PageSection, SectionId, TranslatedText};
use content_sync::infrastructure::http::{worker_router, WorkerClient};
use content_sync::infrastructure::persistence::SqliteKeyValueStore;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

/// A worker on an ephemeral port, backed by its own in-memory store
struct TestWorker {
    base_url: String,
    store: Arc<dyn KeyValueStore>,
}

async fn start_worker() -> TestWorker {
    let store: Arc<dyn KeyValueStore> = Arc::new(SqliteKeyValueStore::new_in_memory().unwrap());
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = worker_router(store.clone());
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    TestWorker {
        base_url: format!("http://{}", addr),
        store,
    }
}

fn production_config(worker: &TestWorker) -> ContentConfig {
    ContentConfig::for_host("ngo.example")
        .with_api_base_url(worker.base_url.clone())
        .with_request_timeout(Duration::from_secs(2))
}

fn production_site(worker: &TestWorker) -> ContentSite {
    let config = production_config(worker);
    let local = Arc::new(SqliteKeyValueStore::new_in_memory().unwrap());
    let remote = Arc::new(WorkerClient::new(&config).unwrap());
    ContentSite::new(config, local, remote)
}

fn page(id: &str, sections: &[(&str, &str, &str)]) -> PageContent {
    let mut content = PageContent::new(PageId::new(id).unwrap(), TranslatedText::new("Titre", "عنوان"))
        .with_sections(
            sections
                .iter()
                .map(|(id, fr, ar)| PageSection::new(SectionId::new(*id).unwrap(), TranslatedText::new(*fr, *ar)))
                .collect(),
        );
    content.normalize();
    content
}

#[tokio::test]
async fn test_client_round_trip() {
    let worker = start_worker().await;
    let client = WorkerClient::new(&production_config(&worker)).unwrap();

    client.put("language", "\"ar\"".to_string()).await.unwrap();
    assert_eq!(client.get("language").await.unwrap().as_deref(), Some("\"ar\""));

    client.delete("language").await.unwrap();
    assert!(client.get("language").await.unwrap().is_none());
    assert!(client.get("never_written").await.unwrap().is_none());
}

#[tokio::test]
async fn test_list_keys_with_prefix() {
    let worker = start_worker().await;
    let client = WorkerClient::new(&production_config(&worker)).unwrap();
    for key in ["page_home", "editor_home", "page_about"] {
        client.put(key, "{}".to_string()).await.unwrap();
    }

    let names: Vec<String> = client
        .list_keys(Some("page_"))
        .await
        .unwrap()
        .into_iter()
        .map(|entry| entry.name)
        .collect();
    assert_eq!(names, vec!["page_about", "page_home"]);
    assert_eq!(client.list_keys(None).await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_initialize_and_diagnostics() {
    let worker = start_worker().await;
    let client = WorkerClient::new(&production_config(&worker)).unwrap();

    assert_eq!(client.initialize().await.unwrap(), "Database initialized");
    assert!(worker.store.get("structure").await.unwrap().is_some());

    let diagnostics = client.test().await.unwrap();
    assert!(diagnostics["timestamp"].is_string());
}

#[tokio::test]
async fn test_site_saves_and_applies_through_worker() {
    let worker = start_worker().await;
    let site = production_site(&worker);
    let id = PageId::new("contact").unwrap();

    assert!(site.adapter().is_production());
    assert!(site.seeder().initialize().await);

    let saved = page("contact", &[("main_header", "A", "ب")]);
    assert!(site.sync().save(&saved).await);
    assert_eq!(site.repository().get_page_content(&id).await, Some(saved.clone()));
    assert!(worker.store.get("editor_contact").await.unwrap().is_some());

    let draft = page("contact", &[("main_header", "A", "ب"), ("form_title", "Formulaire", "استمارة")]);
    assert!(site.sync().save_draft(&draft).await);
    assert_eq!(site.sync().variant_status(&id).await, VariantStatus::Diverged);

    assert!(site.sync().apply(&id).await);
    assert_eq!(site.repository().get_page_content(&id).await, Some(draft));
}

#[tokio::test]
async fn test_production_save_skips_clearing_keys() {
    let worker = start_worker().await;
    let site = production_site(&worker);
    let mut events = site.sync().subscribe();

    site.sync().save(&page("news", &[("intro", "Actualités", "الأخبار")])).await;

    // ContentUpdated plus one storage event per key, nothing from the adapter
    for _ in 0..3 {
        events.try_recv().unwrap();
    }
    assert!(events.try_recv().is_err());
}

#[tokio::test]
async fn test_unreachable_worker_reads_as_absent() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = ContentConfig::production()
        .with_api_base_url(format!("http://{}", addr))
        .with_request_timeout(Duration::from_millis(500));
    let site = ContentSite::new(
        config.clone(),
        Arc::new(SqliteKeyValueStore::new_in_memory().unwrap()),
        Arc::new(WorkerClient::new(&config).unwrap()),
    );

    // Unreachable reads like absent: the built-in list comes back unpersisted
    assert_eq!(site.repository().get_news_items().await, default_news_items());
    assert!(site.adapter().get_raw("newsItems").await.is_none());
    assert!(!site.sync().save(&page("home", &[("hero", "Bienvenue", "مرحبا")])).await);
    assert!(!site.sync().apply(&PageId::new("home").unwrap()).await);
}

#[tokio::test]
async fn test_http_surface() {
    let worker = start_worker().await;
    let http = reqwest::Client::new();

    let response = http
        .post(format!("{}/api/data/resources", worker.base_url))
        .body("{broken")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);

    let response = http
        .get(format!("{}/api/nowhere", worker.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "success": false, "error": "Endpoint not found" }));

    let response = http
        .request(reqwest::Method::OPTIONS, format!("{}/api/data/page_home", worker.base_url))
        .header("Origin", "https://ngo.example")
        .header("Access-Control-Request-Method", "DELETE")
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
    assert_eq!(response.headers()["access-control-allow-origin"], "*");
    let methods = response.headers()["access-control-allow-methods"].to_str().unwrap();
    assert!(methods.contains("DELETE"));

    let response = http
        .get(format!("{}/api/debug", worker.base_url))
        .send()
        .await
        .unwrap();
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["data"]["keyCount"], json!(0));
}
