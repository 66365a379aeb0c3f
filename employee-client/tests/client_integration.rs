// employee-client/tests/client_integration.rs
// 集成测试: 启动真实服务器 (随机端口)，通过客户端访问

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;

use axum_server::Handle;
use employee_client::{ClientConfig, ClientError, EmployeeOutcome, EmployeePayload, HttpClient};
use employee_server::{Config, EmployeeStore, MemoryEmployeeStore, Server, ServerState};

struct TestServer {
    client: HttpClient,
    handle: Handle<SocketAddr>,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.shutdown();
    }
}

async fn spawn_server(config: Config, store: Option<Arc<dyn EmployeeStore>>) -> TestServer {
    let mut config = config;
    config.http_host = IpAddr::V4(Ipv4Addr::LOCALHOST);
    config.http_port = 0;
    config.cors_origin = "http://localhost:4200".to_string();

    let server = match store {
        Some(store) => Server::with_state(config.clone(), ServerState::new(config, store)),
        None => Server::new(config),
    };

    let handle = Handle::new();
    let server_handle = handle.clone();
    tokio::spawn(async move { server.run_with_handle(server_handle).await });

    let addr = handle.listening().await.expect("server failed to bind");
    let client = ClientConfig::new(format!("http://{}", addr))
        .with_timeout(5)
        .build_http_client()
        .unwrap();

    TestServer { client, handle }
}

async fn memory_server() -> TestServer {
    spawn_server(
        Config::with_overrides("./unused", 0, "memory"),
        Some(Arc::new(MemoryEmployeeStore::new())),
    )
    .await
}

fn payload(name: &str) -> EmployeePayload {
    EmployeePayload {
        name: name.to_string(),
        phone: "555-0100".to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
    }
}

#[tokio::test]
async fn test_crud_round_trip() {
    let server = memory_server().await;
    let client = &server.client;

    let outcome = client.create_employee(&payload("Alice")).await.unwrap();
    assert_eq!(outcome, EmployeeOutcome::Created { id: 1 });
    assert_eq!(outcome.message(), "Employee created successfully");

    let alice = client.get_employee(1).await.unwrap();
    assert!(alice.matches(&payload("Alice")));

    let outcome = client.update_employee(1, &payload("Alicia")).await.unwrap();
    assert_eq!(outcome, EmployeeOutcome::Updated { id: 1 });
    assert_eq!(client.get_employee(1).await.unwrap().name, "Alicia");

    let outcome = client.delete_employee(1).await.unwrap();
    assert_eq!(outcome, EmployeeOutcome::Deleted { id: 1 });
    assert!(client.list_employees().await.unwrap().is_empty());

    match client.get_employee(1).await {
        Err(ClientError::NotFound(message)) => assert_eq!(message, "Employee 1 not found"),
        other => panic!("expected not found, got {other:?}"),
    }
}

#[tokio::test]
async fn test_missing_employee_is_an_outcome() {
    let server = memory_server().await;
    let client = &server.client;

    assert_eq!(
        client.delete_employee(5).await.unwrap(),
        EmployeeOutcome::NotFound { id: 5 }
    );
    assert_eq!(
        client.update_employee(5, &payload("Ghost")).await.unwrap(),
        EmployeeOutcome::NotFound { id: 5 }
    );
}

#[tokio::test]
async fn test_validation_error_surfaces_message() {
    let server = memory_server().await;

    let mut bad = payload("Alice");
    bad.email = "nope".to_string();
    match server.client.create_employee(&bad).await {
        Err(ClientError::Validation(message)) => assert!(message.contains("nope")),
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_health() {
    let server = memory_server().await;
    server.client.create_employee(&payload("Alice")).await.unwrap();

    let report = server.client.health().await.unwrap();
    assert!(report.is_healthy());
    assert_eq!(report.storage.backend, "memory");
    assert_eq!(report.storage.employees, Some(1));
}

#[tokio::test]
async fn test_redb_server_from_config() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::with_overrides(dir.path().to_string_lossy(), 0, "redb");
    let server = spawn_server(config, None).await;

    server.client.create_employee(&payload("Alice")).await.unwrap();
    server.client.create_employee(&payload("Bob")).await.unwrap();

    let names: Vec<String> = server
        .client
        .list_employees()
        .await
        .unwrap()
        .into_iter()
        .map(|e| e.name)
        .collect();
    assert_eq!(names, vec!["Alice", "Bob"]);
    assert_eq!(server.client.health().await.unwrap().storage.backend, "redb");
}

#[tokio::test]
async fn test_graceful_shutdown_stops_serving() {
    let server = memory_server().await;
    let client = server.client.clone();
    server.handle.graceful_shutdown(Some(Duration::from_millis(100)));
    tokio::time::sleep(Duration::from_millis(300)).await;

    assert!(matches!(
        client.list_employees().await,
        Err(ClientError::Http(_))
    ));
}
