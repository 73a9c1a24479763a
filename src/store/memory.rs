//! In-process store with the same semantics as the Postgres one. Selected with `DATABASE_URL=memory://`.

use super::MessageStore;
use crate::error::AppError;
use crate::message::{Message, NewMessage};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Default)]
struct Inner {
    last_id: i64,
    /// Latest timestamp handed out; keeps insertion order and `created_at` order aligned.
    last_stamp: Option<DateTime<Utc>>,
    rows: BTreeMap<i64, Message>,
}

#[derive(Default)]
pub struct MemoryMessageStore {
    inner: RwLock<Inner>,
}

impl MemoryMessageStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Inner>, AppError> {
        self.inner
            .read()
            .map_err(|_| AppError::Internal("memory store lock poisoned".into()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Inner>, AppError> {
        self.inner
            .write()
            .map_err(|_| AppError::Internal("memory store lock poisoned".into()))
    }
}

#[async_trait]
impl MessageStore for MemoryMessageStore {
    async fn list(&self) -> Result<Vec<Message>, AppError> {
        let inner = self.read()?;
        let mut rows: Vec<Message> = inner.rows.values().cloned().collect();
        rows.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(rows)
    }

    async fn insert(&self, new: &NewMessage) -> Result<Message, AppError> {
        let mut inner = self.write()?;
        inner.last_id += 1;
        let now = match inner.last_stamp {
            Some(prev) => Utc::now().max(prev),
            None => Utc::now(),
        };
        inner.last_stamp = Some(now);
        let msg = Message {
            id: inner.last_id,
            body: new.body.clone(),
            username: new.username.clone(),
            created_at: now,
            updated_at: now,
        };
        inner.rows.insert(msg.id, msg.clone());
        Ok(msg)
    }

    async fn find(&self, id: i64) -> Result<Option<Message>, AppError> {
        Ok(self.read()?.rows.get(&id).cloned())
    }

    async fn update_body(&self, id: i64, body: &str) -> Result<Option<Message>, AppError> {
        let mut inner = self.write()?;
        let Some(msg) = inner.rows.get_mut(&id) else {
            return Ok(None);
        };
        msg.body = body.to_string();
        msg.updated_at = Utc::now().max(msg.updated_at);
        Ok(Some(msg.clone()))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        Ok(self.write()?.rows.remove(&id).is_some())
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.read().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_message(body: &str, username: &str) -> NewMessage {
        NewMessage {
            body: body.into(),
            username: username.into(),
        }
    }

    #[tokio::test]
    async fn insert_assigns_ids_and_equal_timestamps() {
        let store = MemoryMessageStore::new();
        let a = store.insert(&new_message("Hello 👋", "Liza")).await.unwrap();
        let b = store.insert(&new_message("Hi", "Duane")).await.unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_eq!(a.created_at, a.updated_at);
        assert_eq!(store.find(1).await.unwrap(), Some(a));
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let store = MemoryMessageStore::new();
        let a = store.insert(&new_message("one", "Liza")).await.unwrap();
        assert!(store.delete(a.id).await.unwrap());
        let b = store.insert(&new_message("two", "Liza")).await.unwrap();
        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn update_changes_body_only() {
        let store = MemoryMessageStore::new();
        let before = store.insert(&new_message("Old Message", "Liza")).await.unwrap();
        let after = store.update_body(before.id, "Updated Message").await.unwrap().unwrap();
        assert_eq!(after.body, "Updated Message");
        assert_eq!(after.username, before.username);
        assert_eq!(after.created_at, before.created_at);
        assert!(after.updated_at >= before.updated_at);
    }

    #[tokio::test]
    async fn unknown_ids() {
        let store = MemoryMessageStore::new();
        assert_eq!(store.find(42).await.unwrap(), None);
        assert_eq!(store.update_body(42, "x").await.unwrap(), None);
        assert!(!store.delete(42).await.unwrap());
    }

    #[tokio::test]
    async fn list_is_ordered_oldest_first() {
        let store = MemoryMessageStore::new();
        for i in 0..5 {
            store.insert(&new_message(&format!("m{}", i), "Liza")).await.unwrap();
        }
        let rows = store.list().await.unwrap();
        assert_eq!(rows.len(), 5);
        assert!(rows.windows(2).all(|w| w[0].created_at <= w[1].created_at));
        assert_eq!(rows.iter().map(|m| m.id).collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
    }
}
