// Async contract tests for PetStore

use std::collections::HashSet;
use std::time::Duration;

use pets_core::model::{Gender, PetRecord};
use pets_store::{PetRepository, PetStore, StoreConfig, INSERT_FAILED};

fn store() -> PetStore {
    PetStore::open_in_memory().unwrap()
}

fn toto() -> PetRecord {
    PetRecord::new("Toto", Some("Terrier".to_string()), Gender::Male, 7)
}

#[tokio::test]
async fn test_toto_lifecycle() {
    let store = store();

    let id = store.insert(&toto()).await.unwrap();
    assert!(id >= 0, "insert should return a non-negative id");

    let loaded = store.load_by_id(id).await.unwrap().unwrap();
    assert_eq!(loaded.id(), Some(id));
    assert_eq!(loaded.name(), "Toto");
    assert_eq!(loaded.breed(), Some("Terrier"));
    assert_eq!(loaded.gender(), Gender::Male);
    assert_eq!(loaded.weight(), 7);

    assert_eq!(store.delete(id).await.unwrap(), 1);
    assert_eq!(store.load_by_id(id).await.unwrap(), None);
}

#[tokio::test]
async fn test_inserted_ids_are_distinct() {
    let store = store();
    let mut ids = HashSet::new();

    for i in 0..20 {
        let pet = PetRecord::new(format!("pet-{}", i), None, Gender::Unknown, i);
        let id = store.insert(&pet).await.unwrap();
        assert!(ids.insert(id), "id {} handed out twice", id);
    }
    assert_eq!(store.count().await.unwrap(), 20);
}

#[tokio::test]
async fn test_update_changes_only_that_field() {
    let store = store();
    let id = store.insert(&toto()).await.unwrap();

    let mut pet = store.load_by_id(id).await.unwrap().unwrap();
    pet.set_weight(9);
    assert_eq!(store.update(&pet).await.unwrap(), 1);

    let reloaded = store.load_by_id(id).await.unwrap().unwrap();
    assert_eq!(
        reloaded,
        PetRecord::with_id(id, "Toto", Some("Terrier".to_string()), Gender::Male, 9)
    );
}

#[tokio::test]
async fn test_update_and_delete_missing_id_return_zero() {
    let store = store();
    let id = store.insert(&toto()).await.unwrap();
    let before = store.load_all().await.unwrap();

    let ghost = PetRecord::with_id(id + 1, "Ghost", None, Gender::Unknown, 0);
    assert_eq!(store.update(&ghost).await.unwrap(), 0);
    assert_eq!(store.delete(id + 1).await.unwrap(), 0);

    assert_eq!(store.load_all().await.unwrap(), before);
}

#[tokio::test]
async fn test_delete_all_empties_table() {
    let store = store();
    store.insert(&toto()).await.unwrap();
    store
        .insert(&PetRecord::new("Binx", None, Gender::Female, 4))
        .await
        .unwrap();

    store.delete_all().await.unwrap();
    assert!(store.load_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_all_on_empty_table_is_noop() {
    let store = store();
    store.delete_all().await.unwrap();
    assert!(store.load_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_clones_share_one_database() {
    let store = store();
    let other = store.clone();

    let id = store.insert(&toto()).await.unwrap();
    assert!(other.load_by_id(id).await.unwrap().is_some());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_inserts_from_many_tasks() {
    let store = store();

    let handles: Vec<_> = (0..16)
        .map(|i| {
            let store = store.clone();
            tokio::spawn(async move {
                store
                    .insert(&PetRecord::new(format!("p{}", i), None, Gender::Unknown, 0))
                    .await
            })
        })
        .collect();

    let mut ids = HashSet::new();
    for handle in handles {
        ids.insert(handle.await.unwrap().unwrap());
    }
    assert_eq!(ids.len(), 16);
    assert_eq!(store.load_all().await.unwrap().len(), 16);
}

#[tokio::test]
async fn test_file_backed_store_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let config = StoreConfig::at(dir.path().join("pets.db"));

    let id = {
        let store = PetStore::open(&config).await.unwrap();
        store.insert(&toto()).await.unwrap()
    };

    let reopened = PetStore::open(&config).await.unwrap();
    let pet = reopened.load_by_id(id).await.unwrap().unwrap();
    assert_eq!(pet.name(), "Toto");
}

#[tokio::test]
async fn test_repository_usable_as_trait_object() {
    let repo: Box<dyn PetRepository> = Box::new(store());
    let id = repo.insert(&toto()).await.unwrap();
    assert_eq!(repo.load_all().await.unwrap().len(), 1);
    assert_eq!(repo.delete(id).await.unwrap(), 1);
}

#[tokio::test]
async fn test_rejected_insert_returns_sentinel_and_stays_quiet() {
    let dir = tempfile::tempdir().unwrap();
    let config = StoreConfig::at(dir.path().join("pets.db"));

    // Create the schema, then make the table refuse every new row
    drop(PetStore::open(&config).await.unwrap());
    rusqlite::Connection::open(&config.path)
        .unwrap()
        .execute_batch(
            "CREATE TRIGGER reject_pet BEFORE INSERT ON pet
             BEGIN SELECT RAISE(ABORT, 'rejected'); END;",
        )
        .unwrap();

    let store = PetStore::open(&config).await.unwrap();
    let mut watch = store.watch_all();
    watch.current().await.unwrap();

    assert_eq!(store.insert(&toto()).await.unwrap(), INSERT_FAILED);
    assert_eq!(store.count().await.unwrap(), 0);

    let woke = tokio::time::timeout(Duration::from_millis(50), watch.changed()).await;
    assert!(woke.is_err(), "watch should stay idle after a rejected insert");
}
