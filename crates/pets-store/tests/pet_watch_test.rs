// Change-feed tests for PetStore::watch_all

use std::time::Duration;

use pets_core::model::{Gender, PetRecord};
use pets_store::{PetRepository, PetStore};

#[tokio::test]
async fn test_watch_starts_with_current_list() {
    let store = PetStore::open_in_memory().unwrap();
    store
        .insert(&PetRecord::new("Toto", None, Gender::Male, 7))
        .await
        .unwrap();

    let mut watch = store.watch_all();
    let current = watch.current().await.unwrap();
    assert_eq!(current.len(), 1);
}

#[tokio::test]
async fn test_watch_sees_each_write() {
    let store = PetStore::open_in_memory().unwrap();
    let mut watch = store.watch_all();
    assert!(watch.current().await.unwrap().is_empty());

    let id = store
        .insert(&PetRecord::new("Toto", None, Gender::Male, 7))
        .await
        .unwrap();
    let after_insert = watch.changed().await.unwrap();
    assert_eq!(after_insert.len(), 1);

    let mut pet = after_insert[0].clone();
    pet.set_name("Toto II");
    store.update(&pet).await.unwrap();
    let after_update = watch.changed().await.unwrap();
    assert_eq!(after_update[0].name(), "Toto II");

    store.delete(id).await.unwrap();
    assert!(watch.changed().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_missed_write_does_not_wake_watch() {
    let store = PetStore::open_in_memory().unwrap();
    let mut watch = store.watch_all();
    watch.current().await.unwrap();

    // Nothing matched, so nothing changed
    assert_eq!(store.delete(404).await.unwrap(), 0);

    let woke = tokio::time::timeout(Duration::from_millis(50), watch.changed()).await;
    assert!(woke.is_err(), "watch should stay idle after a no-op write");
}

#[tokio::test]
async fn test_watch_from_another_task() {
    let store = PetStore::open_in_memory().unwrap();
    let mut watch = store.watch_all();
    watch.current().await.unwrap();

    let writer = store.clone();
    tokio::spawn(async move {
        writer.delete_all().await.unwrap();
        writer
            .insert(&PetRecord::new("Binx", None, Gender::Female, 3))
            .await
            .unwrap();
    });

    // Writes may coalesce; keep reading until the insert is visible
    let mut latest = watch.changed().await.unwrap();
    while latest.is_empty() {
        latest = watch.changed().await.unwrap();
    }
    assert_eq!(latest[0].name(), "Binx");
}
