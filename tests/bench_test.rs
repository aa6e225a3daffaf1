//! Benchmark tests for the storage paths
//!
//! Run with: cargo test --release bench -- --ignored --nocapture

use std::sync::Arc;
use std::time::{Duration, Instant};

use tempfile::NamedTempFile;

use pocket_services::shorturl::database as links;
use pocket_services::todo::database as items;
use pocket_services::todo::model::{CreateItem, ItemUpdate};

fn report(name: &str, iterations: usize, duration: Duration) {
    let avg_ms = duration.as_secs_f64() * 1_000.0 / iterations as f64;
    let ops_per_sec = (iterations as f64 / duration.as_secs_f64()) as u64;

    println!("  {} ({} iterations)", name, iterations);
    println!("    Total time: {:?}", duration);
    println!("    Avg time: {:.3}ms", avg_ms);
    println!("    Throughput: {} ops/sec\n", ops_per_sec);
}

#[test]
#[ignore] // Run explicitly with: cargo test bench --release -- --ignored --nocapture
fn bench_create_links() {
    println!("\n=== Benchmark: Create short links ===\n");

    let temp_db = NamedTempFile::new().unwrap();
    let db = links::init_db(temp_db.path()).unwrap();

    let iterations = 1_000;
    let start = Instant::now();
    for i in 0..iterations {
        links::create_link(&db, &format!("https://example.com/bench/{i}")).unwrap();
    }
    report("create_link", iterations, start.elapsed());

    let ids: Vec<String> = (0..iterations)
        .map(|i| links::create_link(&db, &format!("https://example.com/lookup/{i}")).unwrap())
        .map(|link| link.short_id)
        .collect();

    let start = Instant::now();
    for id in &ids {
        assert!(links::find_link(&db, id).unwrap().is_some());
    }
    report("find_link", ids.len(), start.elapsed());
}

#[test]
#[ignore]
fn bench_item_lifecycle() {
    println!("\n=== Benchmark: Item lifecycle ===\n");

    let temp_db = NamedTempFile::new().unwrap();
    let db = items::init_db(temp_db.path()).unwrap();

    let iterations = 1_000;
    let start = Instant::now();
    for i in 0..iterations {
        let new_item = CreateItem {
            title: format!("task {i}"),
            description: None,
            completed: false,
        };
        items::insert_item(&db, new_item).unwrap();
    }
    report("insert_item", iterations, start.elapsed());

    let start = Instant::now();
    for id in 1..=iterations as u64 {
        let update = ItemUpdate {
            completed: Some(true),
            ..Default::default()
        };
        items::update_item(&db, id, update).unwrap();
    }
    report("update_item", iterations, start.elapsed());

    let start = Instant::now();
    let listed = items::list_items(&db).unwrap();
    report("list_items (1 call)", 1, start.elapsed());
    assert_eq!(listed.len(), iterations);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
#[ignore]
async fn bench_concurrent_link_creation() {
    println!("\n=== Benchmark: Concurrent short link creation ===\n");

    let temp_db = NamedTempFile::new().unwrap();
    let db = Arc::new(links::init_db(temp_db.path()).unwrap());

    let num_tasks = 100;
    let ops_per_task = 10;

    let start = Instant::now();
    let mut handles = Vec::with_capacity(num_tasks);
    for task_id in 0..num_tasks {
        let db = db.clone();
        handles.push(tokio::task::spawn_blocking(move || {
            for op_id in 0..ops_per_task {
                let url = format!("https://example.com/concurrent-{task_id}-{op_id}");
                links::create_link(&db, &url).unwrap();
            }
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    report("create_link x concurrent", num_tasks * ops_per_task, start.elapsed());
    assert_eq!(
        links::count_links(&db).unwrap(),
        (num_tasks * ops_per_task) as u64
    );
}
