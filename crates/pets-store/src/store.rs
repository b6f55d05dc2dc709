//! Async pet store handle
//!
//! `PetStore` is opened once at startup and cloned into every consumer.
//! Each operation runs its statement on tokio's blocking pool and returns a
//! future the caller awaits.
//!
//! ## Logging Ownership
//!
//! This boundary owns lifecycle logging (`log_op_start!`, `log_op_end!`,
//! `log_op_error!`). The statement layer only emits `tracing::debug!`.

use std::sync::{Arc, Mutex};
use std::time::Instant;

use async_trait::async_trait;
use pets_core::model::{PetId, PetRecord};
use pets_core::{log_op_end, log_op_error, log_op_start};
use rusqlite::Connection;
use tokio::sync::watch;

use crate::config::StoreConfig;
use crate::db;
use crate::errors::{join_error, lock_poisoned, Result};
use crate::migrations::apply_migrations;
use crate::repo::{PetRepository, SqlitePetRepo};

/// Shared handle to the pet database
///
/// Cloning is cheap; all clones use the same connection and change feed.
/// The connection closes when the last clone is dropped.
#[derive(Clone)]
pub struct PetStore {
    conn: Arc<Mutex<Connection>>,
    revision: Arc<watch::Sender<u64>>,
}

impl PetStore {
    /// Open (creating if needed) the database described by `config`
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be opened or migrations do not apply.
    pub async fn open(config: &StoreConfig) -> Result<Self> {
        let config = config.clone();
        let conn = tokio::task::spawn_blocking(move || -> Result<Connection> {
            let mut conn = db::open(&config.path)?;
            db::configure(&conn, &config)?;
            apply_migrations(&mut conn)?;
            Ok(conn)
        })
        .await
        .map_err(|e| join_error("pet_store_open", e))??;

        Ok(Self::from_connection(conn))
    }

    /// Open a private in-memory database with the schema applied
    ///
    /// # Errors
    ///
    /// Fails only if SQLite cannot allocate the database or apply migrations.
    pub fn open_in_memory() -> Result<Self> {
        let mut conn = db::open_in_memory()?;
        apply_migrations(&mut conn)?;
        Ok(Self::from_connection(conn))
    }

    fn from_connection(conn: Connection) -> Self {
        let (revision, _) = watch::channel(0);
        Self {
            conn: Arc::new(Mutex::new(conn)),
            revision: Arc::new(revision),
        }
    }

    /// Number of stored pets
    ///
    /// # Errors
    ///
    /// Propagates storage faults from the underlying query.
    pub async fn count(&self) -> Result<u64> {
        log_op_start!("pet_count");
        let start = Instant::now();

        let count = self.run("pet_count", SqlitePetRepo::count_pets).await?;

        log_op_end!(
            "pet_count",
            duration_ms = start.elapsed().as_millis() as u64,
            pet_count = count
        );
        Ok(count)
    }

    /// Subscribe to the pet list
    ///
    /// The watch yields the list as it is now, then a fresh list after
    /// every write that changed the table.
    pub fn watch_all(&self) -> PetListWatch {
        PetListWatch {
            store: self.clone(),
            rx: self.revision.subscribe(),
        }
    }

    fn notify_changed(&self) {
        self.revision.send_modify(|rev| *rev += 1);
    }

    /// Run a statement on the blocking pool; failures are logged here
    async fn run<T, F>(&self, op: &'static str, f: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&Connection) -> Result<T> + Send + 'static,
    {
        let start = Instant::now();
        let conn = Arc::clone(&self.conn);

        let result = tokio::task::spawn_blocking(move || {
            let guard = conn.lock().map_err(|_| lock_poisoned(op))?;
            f(&*guard)
        })
        .await
        .map_err(|e| join_error(op, e))
        .and_then(|inner| inner);

        if let Err(e) = &result {
            log_op_error!(op, e.clone(), duration_ms = start.elapsed().as_millis() as u64);
        }
        result
    }
}

#[async_trait]
impl PetRepository for PetStore {
    async fn insert(&self, pet: &PetRecord) -> Result<PetId> {
        log_op_start!("pet_insert");
        let start = Instant::now();

        let pet = pet.clone();
        let id = self
            .run("pet_insert", move |conn| SqlitePetRepo::insert_pet(conn, &pet))
            .await?;

        if id >= 0 {
            self.notify_changed();
        }
        log_op_end!(
            "pet_insert",
            duration_ms = start.elapsed().as_millis() as u64,
            pet_id = id
        );
        Ok(id)
    }

    async fn update(&self, pet: &PetRecord) -> Result<usize> {
        log_op_start!("pet_update", pet_id = ?pet.id());
        let start = Instant::now();

        let pet = pet.clone();
        let changed = self
            .run("pet_update", move |conn| SqlitePetRepo::update_pet(conn, &pet))
            .await?;

        if changed > 0 {
            self.notify_changed();
        }
        log_op_end!(
            "pet_update",
            duration_ms = start.elapsed().as_millis() as u64,
            rows_affected = changed
        );
        Ok(changed)
    }

    async fn delete(&self, id: PetId) -> Result<usize> {
        log_op_start!("pet_delete", pet_id = id);
        let start = Instant::now();

        let changed = self
            .run("pet_delete", move |conn| SqlitePetRepo::delete_pet(conn, id))
            .await?;

        if changed > 0 {
            self.notify_changed();
        }
        log_op_end!(
            "pet_delete",
            duration_ms = start.elapsed().as_millis() as u64,
            rows_affected = changed
        );
        Ok(changed)
    }

    async fn delete_all(&self) -> Result<()> {
        log_op_start!("pet_delete_all");
        let start = Instant::now();

        self.run("pet_delete_all", SqlitePetRepo::delete_all_pets)
            .await?;

        self.notify_changed();
        log_op_end!(
            "pet_delete_all",
            duration_ms = start.elapsed().as_millis() as u64
        );
        Ok(())
    }

    async fn load_all(&self) -> Result<Vec<PetRecord>> {
        log_op_start!("pet_load_all");
        let start = Instant::now();

        let pets = self
            .run("pet_load_all", SqlitePetRepo::load_all_pets)
            .await?;

        log_op_end!(
            "pet_load_all",
            duration_ms = start.elapsed().as_millis() as u64,
            pet_count = pets.len()
        );
        Ok(pets)
    }

    async fn load_by_id(&self, id: PetId) -> Result<Option<PetRecord>> {
        log_op_start!("pet_load_by_id", pet_id = id);
        let start = Instant::now();

        let pet = self
            .run("pet_load_by_id", move |conn| {
                SqlitePetRepo::load_pet_by_id(conn, id)
            })
            .await?;

        log_op_end!(
            "pet_load_by_id",
            duration_ms = start.elapsed().as_millis() as u64,
            found = pet.is_some()
        );
        Ok(pet)
    }
}

/// Live view of the pet list, re-queried after each change
pub struct PetListWatch {
    store: PetStore,
    rx: watch::Receiver<u64>,
}

impl PetListWatch {
    /// The list as it is now; marks the current revision as seen
    ///
    /// # Errors
    ///
    /// Propagates storage faults from the underlying query.
    pub async fn current(&mut self) -> Result<Vec<PetRecord>> {
        self.rx.borrow_and_update();
        self.store.load_all().await
    }

    /// Wait for the next write, then return the list after it
    ///
    /// Several writes landing before this is polled are coalesced into one
    /// wake-up; the returned list always reflects all of them.
    ///
    /// # Errors
    ///
    /// Propagates storage faults from the underlying query.
    pub async fn changed(&mut self) -> Result<Vec<PetRecord>> {
        // The sender lives in `self.store`, so it cannot close while we wait
        let _ = self.rx.changed().await;
        self.rx.borrow_and_update();
        self.store.load_all().await
    }
}
