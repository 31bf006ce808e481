//! In-process user store
//!
//! Same observable semantics as [`PgUserRepo`](super::PgUserRepo): serial
//! ids that are never reused, a unique email, `updated_at` refreshed on
//! update. Used by the router and behaviour tests.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::{StoreError, UserStore};
use crate::models::{NewUser, User, UserId};

const EMAIL_CONSTRAINT: &str = "users_email_key";

#[derive(Default)]
struct Inner {
    rows: BTreeMap<UserId, User>,
    next_id: UserId,
}

/// Map-backed store behind an async lock
#[derive(Default)]
pub struct MemoryUserStore {
    inner: RwLock<Inner>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Inner {
    fn email_taken(&self, email: &str, except: Option<UserId>) -> bool {
        self.rows
            .values()
            .any(|u| u.email == email && Some(u.id) != except)
    }
}

fn duplicate() -> StoreError {
    StoreError::DuplicateKey {
        constraint: EMAIL_CONSTRAINT.to_owned(),
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn list(&self) -> Result<Vec<User>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.rows.values().cloned().collect())
    }

    async fn get(&self, id: UserId) -> Result<User, StoreError> {
        let inner = self.inner.read().await;
        inner
            .rows
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound { id })
    }

    async fn create(&self, user: &NewUser) -> Result<User, StoreError> {
        let mut inner = self.inner.write().await;
        if inner.email_taken(user.email(), None) {
            return Err(duplicate());
        }

        inner.next_id += 1;
        let now = Utc::now();
        let created = User {
            id: inner.next_id,
            name: user.name().to_owned(),
            lastname: user.lastname().to_owned(),
            email: user.email().to_owned(),
            created_at: now,
            updated_at: now,
        };
        inner.rows.insert(created.id, created.clone());
        Ok(created)
    }

    async fn update(&self, id: UserId, user: &NewUser) -> Result<User, StoreError> {
        let mut inner = self.inner.write().await;
        if !inner.rows.contains_key(&id) {
            return Err(StoreError::NotFound { id });
        }
        if inner.email_taken(user.email(), Some(id)) {
            return Err(duplicate());
        }

        let row = inner
            .rows
            .get_mut(&id)
            .ok_or(StoreError::NotFound { id })?;
        row.name = user.name().to_owned();
        row.lastname = user.lastname().to_owned();
        row.email = user.email().to_owned();
        row.updated_at = Utc::now().max(row.created_at);
        Ok(row.clone())
    }

    async fn delete(&self, id: UserId) -> Result<User, StoreError> {
        let mut inner = self.inner.write().await;
        inner.rows.remove(&id).ok_or(StoreError::NotFound { id })
    }
}
