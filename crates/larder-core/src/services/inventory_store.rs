//! The inventory store - owner of the persisted item collection.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::NaiveDate;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use super::{read_slot, write_slot};
use crate::domain::{
    InventoryItem, InventoryView, NewInventoryItem, next_item_id, sample_inventory,
};
use crate::ports::{Clock, CoreError, KeyValueStore, RepositoryError, slots};

/// Service owning the `inventory` slot.
///
/// Every read goes back to storage, so there is no cached copy to drift.
/// Mutations (`add`, `remove`, `save`) hold an async lock for their whole
/// load-modify-write cycle.
pub struct InventoryStore {
    store: Arc<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
    write_lock: Mutex<()>,
}

impl InventoryStore {
    pub fn new(store: Arc<dyn KeyValueStore>, clock: Arc<dyn Clock>) -> Self {
        Self {
            store,
            clock,
            write_lock: Mutex::new(()),
        }
    }

    /// Today's date according to the injected clock.
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// The persisted collection, or the sample set when there is nothing
    /// usable in storage. Never fails.
    pub async fn load(&self) -> Vec<InventoryItem> {
        match read_slot::<Vec<InventoryItem>>(self.store.as_ref(), slots::INVENTORY).await {
            Ok(Some(items)) => items,
            Ok(None) => {
                debug!("No stored inventory, starting from sample items");
                sample_inventory(self.today())
            }
            Err(e) => {
                warn!(error = %e, "Stored inventory is unusable, falling back to sample items");
                sample_inventory(self.today())
            }
        }
    }

    /// Look up one item by id.
    pub async fn get(&self, id: i64) -> Result<InventoryItem, CoreError> {
        self.load()
            .await
            .into_iter()
            .find(|item| item.id == id)
            .ok_or_else(|| CoreError::NotFound(format!("Inventory item {id}")))
    }

    /// Validate, append with a fresh id and persist.
    pub async fn add(&self, new_item: NewInventoryItem) -> Result<InventoryItem, CoreError> {
        let new_item = new_item.validated()?;

        let _guard = self.write_lock.lock().await;
        let mut items = self.load_for_write().await?;
        let item = new_item.into_item(next_item_id(&items));
        items.push(item.clone());
        self.persist(&items).await?;

        info!(id = item.id, name = %item.name, expiry = %item.expiry_date, "Added inventory item");
        Ok(item)
    }

    /// Remove the item with `id`. Returns `false` (and writes nothing) when
    /// no such item exists.
    pub async fn remove(&self, id: i64) -> Result<bool, CoreError> {
        let _guard = self.write_lock.lock().await;
        let mut items = self.load_for_write().await?;
        let before = items.len();
        items.retain(|item| item.id != id);

        if items.len() == before {
            debug!(id, "Remove requested for unknown item, nothing to do");
            return Ok(false);
        }

        self.persist(&items).await?;
        info!(id, "Removed inventory item");
        Ok(true)
    }

    /// Overwrite the stored collection. Duplicate ids are rejected before
    /// anything is written.
    pub async fn save(&self, items: &[InventoryItem]) -> Result<(), CoreError> {
        let mut seen = HashSet::with_capacity(items.len());
        if let Some(dup) = items.iter().find(|item| !seen.insert(item.id)) {
            return Err(CoreError::Validation(format!(
                "Duplicate inventory item id {}",
                dup.id
            )));
        }

        let _guard = self.write_lock.lock().await;
        self.persist(items).await
    }

    /// Classified rows, expiring-soon section and notification for today.
    pub async fn view(&self) -> InventoryView {
        InventoryView::build(self.load().await, self.today())
    }

    /// Base collection for a mutation. Same fallbacks as [`Self::load`],
    /// except a storage failure is returned: writing the sample set back
    /// over a slot we could not read would destroy the stored items.
    async fn load_for_write(&self) -> Result<Vec<InventoryItem>, CoreError> {
        match read_slot::<Vec<InventoryItem>>(self.store.as_ref(), slots::INVENTORY).await {
            Ok(Some(items)) => Ok(items),
            Ok(None) => Ok(sample_inventory(self.today())),
            Err(RepositoryError::Serialization(e)) => {
                warn!(error = %e, "Stored inventory is unparseable, replacing with sample items");
                Ok(sample_inventory(self.today()))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn persist(&self, items: &[InventoryItem]) -> Result<(), CoreError> {
        write_slot(self.store.as_ref(), slots::INVENTORY, items).await?;
        debug!(count = items.len(), "Persisted inventory");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::domain::Tier;
    use crate::ports::{FixedClock, InMemoryKeyValueStore, MockKeyValueStore};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, 10).unwrap()
    }

    fn store_with(kv: InMemoryKeyValueStore) -> (InventoryStore, Arc<InMemoryKeyValueStore>) {
        let kv = Arc::new(kv);
        let store = InventoryStore::new(kv.clone(), Arc::new(FixedClock(today())));
        (store, kv)
    }

    #[tokio::test]
    async fn test_load_absent_slot_yields_sample() {
        let (store, _) = store_with(InMemoryKeyValueStore::new());
        let items = store.load().await;

        assert_eq!(items.len(), 5);
        assert_eq!(items[0].name, "Milk");
        assert_eq!(items[1].expiry_date, NaiveDate::from_ymd_opt(2025, 4, 12).unwrap());
    }

    #[tokio::test]
    async fn test_load_corrupt_payload_yields_sample() {
        let (store, _) =
            store_with(InMemoryKeyValueStore::new().with_slot(slots::INVENTORY, "{not json"));
        assert_eq!(store.load().await.len(), 5);
    }

    #[tokio::test]
    async fn test_load_read_failure_yields_sample() {
        let mut kv = MockKeyValueStore::new();
        kv.expect_get()
            .returning(|_| Err(RepositoryError::Storage("disk gone".to_string())));
        let store = InventoryStore::new(Arc::new(kv), Arc::new(FixedClock(today())));

        assert_eq!(store.load().await.len(), 5);
    }

    #[tokio::test]
    async fn test_load_accepts_stale_days_left() {
        let raw = r#"[{"id":7,"name":"Cheese","category":"Dairy","expiryDate":"2025-04-20","daysLeft":99}]"#;
        let (store, _) = store_with(InMemoryKeyValueStore::new().with_slot(slots::INVENTORY, raw));

        let view = store.view().await;
        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.rows[0].days_left, 10);
    }

    #[tokio::test]
    async fn test_save_empty_then_load_is_empty() {
        let (store, _) = store_with(InMemoryKeyValueStore::new());
        store.save(&[]).await.unwrap();
        assert!(store.load().await.is_empty());
    }

    #[tokio::test]
    async fn test_add_to_empty_collection() {
        let (store, _) = store_with(InMemoryKeyValueStore::new());
        store.save(&[]).await.unwrap();

        let expiry = NaiveDate::from_ymd_opt(2025, 4, 12).unwrap();
        let item = store
            .add(NewInventoryItem::new("Bread", "Bakery", expiry))
            .await
            .unwrap();
        assert_eq!(item.id, 1);

        let view = store.view().await;
        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.rows[0].days_left, 2);
        assert_eq!(view.rows[0].tier, Tier::Critical);
        assert_eq!(view.expiring_soon.len(), 1);
        assert_eq!(view.notification.map(|n| n.count), Some(1));
    }

    #[tokio::test]
    async fn test_add_assigns_unique_ids() {
        let (store, _) = store_with(InMemoryKeyValueStore::new());
        let expiry = today();
        let a = store.add(NewInventoryItem::new("Eggs", "Dairy", expiry)).await.unwrap();
        let b = store.add(NewInventoryItem::new("Rice", "", expiry)).await.unwrap();

        assert_eq!(a.id, 6);
        assert_eq!(b.id, 7);
        let names: Vec<String> = store.load().await.into_iter().map(|i| i.name).collect();
        assert_eq!(names.last().map(String::as_str), Some("Rice"));
    }

    #[tokio::test]
    async fn test_add_rejects_blank_name_without_writing() {
        let (store, kv) = store_with(InMemoryKeyValueStore::new());
        let result = store.add(NewInventoryItem::new("   ", "Dairy", today())).await;

        assert!(matches!(result, Err(CoreError::Validation(_))));
        assert_eq!(kv.get(slots::INVENTORY).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_remove_existing_item() {
        let (store, _) = store_with(InMemoryKeyValueStore::new());
        assert!(store.remove(2).await.unwrap());

        let ids: Vec<i64> = store.load().await.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 3, 4, 5]);
    }

    #[tokio::test]
    async fn test_remove_unknown_id_is_noop() {
        let (store, kv) = store_with(InMemoryKeyValueStore::new());
        assert!(!store.remove(42).await.unwrap());
        assert_eq!(kv.get(slots::INVENTORY).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_add_propagates_write_failure() {
        let mut kv = MockKeyValueStore::new();
        kv.expect_get().returning(|_| Ok(Some("[]".to_string())));
        kv.expect_set()
            .returning(|_, _| Err(RepositoryError::Storage("read-only".to_string())));
        let store = InventoryStore::new(Arc::new(kv), Arc::new(FixedClock(today())));

        let result = store.add(NewInventoryItem::new("Milk", "Dairy", today())).await;
        assert!(matches!(result, Err(CoreError::Repository(_))));
    }

    /// Fails the first `get` like a locked database, then behaves.
    struct FlakyStore {
        inner: InMemoryKeyValueStore,
        failed_once: AtomicBool,
    }

    #[async_trait]
    impl KeyValueStore for FlakyStore {
        async fn get(&self, key: &str) -> Result<Option<String>, RepositoryError> {
            if !self.failed_once.swap(true, Ordering::SeqCst) {
                return Err(RepositoryError::Storage("database is locked".to_string()));
            }
            self.inner.get(key).await
        }

        async fn set(&self, key: &str, value: &str) -> Result<(), RepositoryError> {
            self.inner.set(key, value).await
        }

        async fn remove(&self, key: &str) -> Result<(), RepositoryError> {
            self.inner.remove(key).await
        }
    }

    fn flaky_store_with_cheese() -> InventoryStore {
        let raw = r#"[{"id":10,"name":"Cheese","category":"Dairy","expiryDate":"2025-04-20"}]"#;
        let kv = FlakyStore {
            inner: InMemoryKeyValueStore::new().with_slot(slots::INVENTORY, raw),
            failed_once: AtomicBool::new(false),
        };
        InventoryStore::new(Arc::new(kv), Arc::new(FixedClock(today())))
    }

    #[tokio::test]
    async fn test_add_after_read_failure_keeps_stored_items() {
        let store = flaky_store_with_cheese();

        let result = store.add(NewInventoryItem::new("Eggs", "Dairy", today())).await;
        assert!(matches!(result, Err(CoreError::Repository(_))));

        let names: Vec<String> = store.load().await.into_iter().map(|i| i.name).collect();
        assert_eq!(names, vec!["Cheese"]);
    }

    #[tokio::test]
    async fn test_remove_after_read_failure_keeps_stored_items() {
        let store = flaky_store_with_cheese();

        assert!(matches!(store.remove(10).await, Err(CoreError::Repository(_))));
        assert_eq!(store.get(10).await.unwrap().name, "Cheese");
    }

    #[tokio::test]
    async fn test_add_over_corrupt_payload_starts_from_sample() {
        let (store, _) =
            store_with(InMemoryKeyValueStore::new().with_slot(slots::INVENTORY, "{not json"));
        let item = store
            .add(NewInventoryItem::new("Eggs", "Dairy", today()))
            .await
            .unwrap();

        assert_eq!(item.id, 6);
        assert_eq!(store.load().await.len(), 6);
    }

    fn item(id: i64, name: &str, expiry: NaiveDate) -> InventoryItem {
        InventoryItem {
            id,
            name: name.to_string(),
            category: "Pantry".to_string(),
            expiry_date: expiry,
        }
    }

    #[tokio::test]
    async fn test_save_then_load_preserves_items_and_order() {
        let (store, _) = store_with(InMemoryKeyValueStore::new());
        let saved = vec![
            item(3, "Oats", NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()),
            item(9, "Honey", NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()),
            item(4, "Lentils", NaiveDate::from_ymd_opt(2025, 4, 9).unwrap()),
        ];

        store.save(&saved).await.unwrap();
        assert_eq!(store.load().await, saved);

        let next = store.add(NewInventoryItem::new("Rice", "", today())).await.unwrap();
        assert_eq!(next.id, 10);
    }

    #[tokio::test]
    async fn test_save_rejects_duplicate_ids_without_writing() {
        let (store, kv) = store_with(InMemoryKeyValueStore::new());
        let items = vec![item(2, "Oats", today()), item(2, "Honey", today())];

        let result = store.save(&items).await;
        assert!(matches!(result, Err(CoreError::Validation(_))));
        assert_eq!(kv.get(slots::INVENTORY).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_get_missing_item() {
        let (store, _) = store_with(InMemoryKeyValueStore::new());
        assert!(store.get(1).await.is_ok());
        assert!(matches!(store.get(99).await, Err(CoreError::NotFound(_))));
    }
}
