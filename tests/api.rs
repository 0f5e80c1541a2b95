//! End-to-end tests of the product API over a real socket.

use std::net::SocketAddr;
use std::time::Duration;
use tronics::registry::{KeyPolicy, Registry};
use tronics_sdk::Product;

mod common;

fn product(id: u64, name: &str) -> Product {
    Product {
        id,
        name: name.to_string(),
    }
}

#[tokio::test]
async fn test_product_lifecycle() {
    let addr: SocketAddr = "127.0.0.1:28381".parse().unwrap();
    let shutdown = common::start_server(addr, Registry::default()).await;
    let client = common::client(addr);

    assert!(client.list().await.unwrap().is_empty());

    assert_eq!(client.create("phone").await.unwrap(), product(1, "phone"));
    assert_eq!(client.list().await.unwrap(), vec![product(1, "phone")]);

    assert_eq!(client.create("watch").await.unwrap(), product(2, "watch"));
    assert_eq!(
        client.list().await.unwrap(),
        vec![product(1, "phone"), product(2, "watch")]
    );

    assert_eq!(client.delete(1).await.unwrap(), product(1, "phone"));
    assert_eq!(client.list().await.unwrap(), vec![product(2, "watch")]);

    let err = client.get(1).await.unwrap_err();
    assert_eq!(err.status(), Some(404));

    shutdown.trigger();
}

#[tokio::test]
async fn test_validation_and_updates() {
    let addr: SocketAddr = "127.0.0.1:28382".parse().unwrap();
    let registry = Registry::default().seed(["mobiles", "tv", "laptops"]);
    let shutdown = common::start_server(addr, registry).await;
    let client = common::client(addr);

    let err = client.create("abc").await.unwrap_err();
    assert_eq!(err.status(), Some(400));
    assert_eq!(client.list().await.unwrap().len(), 3);

    assert_eq!(
        client.update(2, "television").await.unwrap(),
        product(2, "television")
    );
    assert_eq!(client.update(7, "television").await.unwrap_err().status(), Some(404));
    assert_eq!(client.update(2, "").await.unwrap_err().status(), Some(400));

    assert_eq!(
        client.list().await.unwrap(),
        vec![
            product(1, "mobiles"),
            product(2, "television"),
            product(3, "laptops"),
        ]
    );

    shutdown.trigger();
}

#[tokio::test]
async fn test_non_integer_ids_rejected() {
    let addr: SocketAddr = "127.0.0.1:28383".parse().unwrap();
    let shutdown = common::start_server(addr, Registry::default().seed(["mobiles"])).await;
    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    let base = common::base_url(addr);

    let res = client.get(format!("{}/products/abc", base)).send().await.unwrap();
    assert_eq!(res.status(), 400);
    assert!(res.headers().contains_key("x-request-id"));
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["message"], "invalid product id 'abc'");

    let res = client.delete(format!("{}/products/1.5", base)).send().await.unwrap();
    assert_eq!(res.status(), 400);

    let res = client
        .post(format!("{}/products", base))
        .header("content-type", "application/json")
        .body("{\"product_name\":")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 400);

    shutdown.trigger();
}

#[tokio::test]
async fn test_entry_count_policy_over_http() {
    let addr: SocketAddr = "127.0.0.1:28384".parse().unwrap();
    let registry = Registry::new(KeyPolicy::EntryCount).seed(["mobiles", "tv", "laptops"]);
    let shutdown = common::start_server(addr, registry).await;
    let client = common::client(addr);

    client.delete(1).await.unwrap();
    // two live entries, so the new key duplicates "laptops"
    assert_eq!(client.create("speakers").await.unwrap(), product(3, "speakers"));
    assert_eq!(client.list().await.unwrap().len(), 3);

    shutdown.trigger();
}

#[tokio::test]
async fn test_graceful_shutdown() {
    let addr: SocketAddr = "127.0.0.1:28385".parse().unwrap();
    let shutdown = common::start_server(addr, Registry::default()).await;
    let client = common::client(addr);

    assert_eq!(client.health().await.unwrap()["status"], "ok");

    shutdown.trigger();
    tokio::time::sleep(Duration::from_millis(300)).await;

    // fresh connection, the listener is gone
    assert!(common::client(addr).health().await.is_err());
}
