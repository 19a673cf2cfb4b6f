//! DEXScreener client against a local stand-in server.

use axum::{extract::Query, http::StatusCode, routing::get, Json, Router};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::time::Duration;

use spamek_bot::dexscreener::{Config, DexScreenerClient, MarketClient};

async fn search(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    match params.get("q").map(String::as_str) {
        Some("BonkMint") => Json(json!({
            "schemaVersion": "1.0.0",
            "pairs": [{
                "baseToken": { "name": "Bonk", "symbol": "BONK" },
                "priceUsd": "0.00002314",
                "liquidity": { "usd": 1250000.5 },
                "volume": { "h24": 98000 },
                "fdv": 1800000000,
                "url": "https://dexscreener.com/solana/bonk"
            }]
        })),
        _ => Json(json!({ "schemaVersion": "1.0.0", "pairs": null })),
    }
}

async fn start_server(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

fn client(api_url: String, timeout: Duration) -> DexScreenerClient {
    DexScreenerClient::new(Config { api_url, timeout }).unwrap()
}

#[tokio::test]
async fn returns_pairs_for_a_known_mint() {
    let base = start_server(Router::new().route("/latest/dex/search", get(search))).await;
    let pairs = client(base, Duration::from_secs(5))
        .search_pairs("BonkMint")
        .await
        .unwrap();

    assert_eq!(pairs.len(), 1);
    assert_eq!(pairs[0].price_usd, Some(0.00002314));
    assert_eq!(pairs[0].volume.as_ref().unwrap().h24, Some(98000.0));
    assert_eq!(pairs[0].fdv, Some(1_800_000_000.0));
}

#[tokio::test]
async fn null_pairs_is_an_empty_list() {
    let base = start_server(Router::new().route("/latest/dex/search", get(search))).await;
    let pairs = client(base, Duration::from_secs(5))
        .search_pairs("Unknown")
        .await
        .unwrap();

    assert!(pairs.is_empty());
}

#[tokio::test]
async fn server_error_is_a_failure() {
    let router = Router::new().route(
        "/latest/dex/search",
        get(|| async { (StatusCode::TOO_MANY_REQUESTS, "slow down") }),
    );
    let base = start_server(router).await;

    let err = client(base, Duration::from_secs(5))
        .search_pairs("BonkMint")
        .await
        .unwrap_err();
    assert!(err.to_string().contains("429"));
    assert!(err.to_string().contains("slow down"));
}

#[tokio::test]
async fn malformed_body_is_a_failure() {
    let router = Router::new().route("/latest/dex/search", get(|| async { "<html>oops</html>" }));
    let base = start_server(router).await;

    let err = client(base, Duration::from_secs(5))
        .search_pairs("BonkMint")
        .await
        .unwrap_err();
    assert!(err.to_string().starts_with("Failed to parse DEXScreener response"));
}

#[tokio::test]
async fn slow_upstream_times_out() {
    let router = Router::new().route(
        "/latest/dex/search",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(json!({ "pairs": [] }))
        }),
    );
    let base = start_server(router).await;

    let err = client(base, Duration::from_millis(200))
        .search_pairs("BonkMint")
        .await
        .unwrap_err();
    assert!(err.to_string().contains("timed out"));
}
