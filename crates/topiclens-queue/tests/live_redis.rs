//! Round-trip against a live Redis.
//!
//! Run with: cargo test --package topiclens-queue --test live_redis -- --ignored --nocapture

use redis::AsyncCommands;
use topiclens_queue::TaskQueue;

fn redis_url() -> String {
    std::env::var("REDIS_URL").unwrap_or_else(|_| "redis://localhost:6379".into())
}

#[tokio::test]
#[ignore]
async fn test_publish_round_trip() {
    let url = redis_url();
    let queue_name = "topiclens_test_queue";

    let queue = TaskQueue::connect(&url, queue_name)
        .await
        .expect("could not connect");
    queue.publish("umap").await.unwrap();

    // Pop the message back off and check the exact wire text.
    let client = redis::Client::open(url.as_str()).unwrap();
    let mut conn = client.get_multiplexed_async_connection().await.unwrap();
    let raw: Option<String> = conn.lpop(queue_name, None).await.unwrap();
    assert_eq!(raw.as_deref(), Some(r#"{"task":"umap"}"#));
}
