use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use zipcast_application::services::ForecastCache;
use zipcast_domain::WeatherReport;
use zipcast_infrastructure::MemoryForecastStore;

fn report(temp: f64) -> WeatherReport {
    WeatherReport::new(temp, None, None, serde_json::json!({}))
}

#[tokio::test]
async fn entries_expire_after_the_ttl_and_become_misses() {
    let store = Arc::new(MemoryForecastStore::new());
    let cache = ForecastCache::new(store, Duration::from_millis(30));
    let invocations = AtomicUsize::new(0);

    let (_, first_cached) = cache
        .fetch_or_store("94043", || async {
            invocations.fetch_add(1, Ordering::SeqCst);
            Ok(Some(report(61.9)))
        })
        .await
        .unwrap();
    assert!(!first_cached);

    // Still inside the window: served from cache.
    let fetched = cache.fetch("94043").await.unwrap();
    assert_eq!(fetched.unwrap().current_temp_f(), 61.9);
    assert!(cache.exists("94043").await.unwrap());

    tokio::time::sleep(Duration::from_millis(60)).await;

    assert!(cache.fetch("94043").await.unwrap().is_none());
    assert!(!cache.exists("94043").await.unwrap());

    let (_, second_cached) = cache
        .fetch_or_store("94043", || async {
            invocations.fetch_add(1, Ordering::SeqCst);
            Ok(Some(report(64.2)))
        })
        .await
        .unwrap();
    assert!(!second_cached);
    assert_eq!(invocations.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn delete_forces_the_next_access_to_recompute() {
    let store = Arc::new(MemoryForecastStore::new());
    let cache = ForecastCache::new(store, Duration::from_secs(60));
    let invocations = AtomicUsize::new(0);

    cache
        .fetch_or_store("94043", || async {
            invocations.fetch_add(1, Ordering::SeqCst);
            Ok(Some(report(61.9)))
        })
        .await
        .unwrap();
    cache.delete("94043").await.unwrap();

    let (_, was_cached) = cache
        .fetch_or_store("94043", || async {
            invocations.fetch_add(1, Ordering::SeqCst);
            Ok(Some(report(61.9)))
        })
        .await
        .unwrap();
    assert!(!was_cached);
    assert_eq!(invocations.load(Ordering::SeqCst), 2);
}
