use std::{
    collections::HashMap,
    sync::{PoisonError, RwLock},
};

use gofinances_domain::{TransactionRecord, TransactionType};
use serde_json::Value;
use tracing::{info, warn};
use uuid::Uuid;

use crate::{time::Clock, CoreError};

/// Storage key prefix under which each user's records are kept.
pub const TRANSACTIONS_KEY_PREFIX: &str = "@gofinances:transactions_user:";

/// Opaque string key-value storage.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, CoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), CoreError>;
}

/// Key holding the JSON record list for `user_id`.
pub fn transactions_key(user_id: &str) -> String {
    format!("{TRANSACTIONS_KEY_PREFIX}{user_id}")
}

/// Decodes a stored record list.
///
/// Payloads that are not a JSON array decode to an empty list; array elements
/// that are not valid records are skipped.
pub fn decode_records(raw: &str) -> Vec<TransactionRecord> {
    let elements = match serde_json::from_str::<Vec<Value>>(raw) {
        Ok(elements) => elements,
        Err(err) => {
            warn!(error = %err, "stored transactions are not a JSON array; treating as empty");
            return Vec::new();
        }
    };
    elements
        .into_iter()
        .enumerate()
        .filter_map(
            |(index, element)| match serde_json::from_value::<TransactionRecord>(element) {
                Ok(record) => Some(record),
                Err(err) => {
                    warn!(index, error = %err, "skipping undecodable transaction record");
                    None
                }
            },
        )
        .collect()
}

/// In-process store, used by tests and embedders without persistence.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(_: PoisonError<T>) -> CoreError {
    CoreError::Storage("memory store lock poisoned".into())
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, CoreError> {
        let entries = self.entries.read().map_err(poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CoreError> {
        let mut entries = self.entries.write().map_err(poisoned)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Fields supplied when registering a new transaction; id and date are assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub title: String,
    pub kind: TransactionType,
    pub amount: f64,
    pub category: String,
}

/// Reads and appends a user's transaction records through a [`KeyValueStore`].
pub struct TransactionRepository<'a> {
    store: &'a dyn KeyValueStore,
}

impl<'a> TransactionRepository<'a> {
    pub fn new(store: &'a dyn KeyValueStore) -> Self {
        Self { store }
    }

    /// Latest stored snapshot for `user_id`. A missing key is an empty list.
    pub fn load(&self, user_id: &str) -> Result<Vec<TransactionRecord>, CoreError> {
        let key = transactions_key(user_id);
        Ok(self
            .store
            .get(&key)?
            .map(|raw| decode_records(&raw))
            .unwrap_or_default())
    }

    /// Appends a record dated `clock.today()` with a fresh id and persists the list.
    ///
    /// Existing elements are written back untouched, including ones this version
    /// cannot decode. A payload that is not a JSON array is left alone and reported.
    pub fn register(
        &self,
        user_id: &str,
        draft: NewTransaction,
        clock: &dyn Clock,
    ) -> Result<TransactionRecord, CoreError> {
        if !draft.amount.is_finite() || draft.amount < 0.0 {
            return Err(CoreError::Validation(format!(
                "amount must be a non-negative number, got {}",
                draft.amount
            )));
        }
        let key = transactions_key(user_id);
        let mut elements = match self.store.get(&key)? {
            Some(raw) => serde_json::from_str::<Vec<Value>>(&raw).map_err(|err| {
                CoreError::Storage(format!(
                    "refusing to overwrite unreadable transactions for `{user_id}`: {err}"
                ))
            })?,
            None => Vec::new(),
        };

        let record = TransactionRecord::new(
            Uuid::new_v4().to_string(),
            draft.title,
            draft.kind,
            draft.amount,
            draft.category,
            clock.today(),
        );
        elements.push(serde_json::to_value(&record)?);
        self.store.set(&key, &serde_json::to_string(&elements)?)?;
        info!(user = user_id, id = %record.id, "registered transaction");
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::time::FixedClock;

    fn draft(title: &str, amount: f64) -> NewTransaction {
        NewTransaction {
            title: title.into(),
            kind: TransactionType::Outflow,
            amount,
            category: "food".into(),
        }
    }

    #[test]
    fn malformed_payload_loads_as_empty() {
        assert!(decode_records("not json").is_empty());
        assert!(decode_records(r#"{"id":"1"}"#).is_empty());
    }

    #[test]
    fn bad_elements_are_skipped() {
        let raw = r#"[
            {"id":"1","title":"ok","type":"up","amount":"10","category":"salary","date":"2021-06-01"},
            {"id":"2","title":"bad type","type":"sideways","amount":"10","category":"salary","date":"2021-06-01"},
            {"id":"3","title":"bad date","type":"down","amount":"10","category":"food","date":"yesterday"}
        ]"#;
        let records = decode_records(raw);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "1");
    }

    #[test]
    fn load_missing_key_is_empty() {
        let store = MemoryStore::new();
        let repo = TransactionRepository::new(&store);
        assert!(repo.load("nobody").expect("load").is_empty());
    }

    #[test]
    fn register_appends_and_preserves_foreign_elements() {
        let store = MemoryStore::new();
        store
            .set(&transactions_key("u1"), r#"[{"legacy":true}]"#)
            .expect("seed");
        let repo = TransactionRepository::new(&store);
        let clock = FixedClock::new(NaiveDate::from_ymd_opt(2021, 6, 9).unwrap());

        let record = repo
            .register("u1", draft("Hamburgueria", 59.0), &clock)
            .expect("register");
        assert_eq!(record.date, clock.date);
        assert_eq!(record.amount, "59");

        let raw = store.get(&transactions_key("u1")).unwrap().unwrap();
        assert!(raw.contains(r#""legacy":true"#));
        let loaded = repo.load("u1").expect("load");
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].title, "Hamburgueria");
    }

    #[test]
    fn register_keeps_users_apart() {
        let store = MemoryStore::new();
        let repo = TransactionRepository::new(&store);
        let clock = FixedClock::new(NaiveDate::from_ymd_opt(2021, 6, 9).unwrap());
        repo.register("a", draft("one", 1.0), &clock).unwrap();
        repo.register("b", draft("two", 2.0), &clock).unwrap();

        assert_eq!(repo.load("a").unwrap().len(), 1);
        assert_eq!(repo.load("b").unwrap()[0].title, "two");
    }

    #[test]
    fn register_refuses_to_clobber_unreadable_payload() {
        let store = MemoryStore::new();
        store.set(&transactions_key("u1"), "{broken").unwrap();
        let repo = TransactionRepository::new(&store);
        let clock = FixedClock::new(NaiveDate::from_ymd_opt(2021, 6, 9).unwrap());

        let err = repo
            .register("u1", draft("x", 1.0), &clock)
            .expect_err("should refuse");
        assert!(matches!(err, CoreError::Storage(_)));
        assert_eq!(store.get(&transactions_key("u1")).unwrap().unwrap(), "{broken");
    }

    #[test]
    fn register_rejects_negative_amounts() {
        let store = MemoryStore::new();
        let repo = TransactionRepository::new(&store);
        let clock = FixedClock::new(NaiveDate::from_ymd_opt(2021, 6, 9).unwrap());
        assert!(matches!(
            repo.register("u1", draft("x", -1.0), &clock),
            Err(CoreError::Validation(_))
        ));
    }
}
