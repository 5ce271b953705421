//! In-memory cache of shop profiles keyed by `ShopUsername`.
//!
//! The whole map is rebuilt on every refresh and swapped in as a new `Arc`,
//! so a reader holds either the old snapshot or the new one, never a mix.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use sheetshop_core::ShopProfile;
use sheetshop_sheets::{SheetClient, SheetError};
use tokio::sync::RwLock;

type ProfileMap = HashMap<String, ShopProfile>;

/// Result of [`ShopCache::lookup`].
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup {
    Found(ShopProfile),
    /// The cache holds profiles, just not this one.
    Missing,
    /// Nothing has been loaded yet (or the last refresh found no valid rows).
    CacheEmpty,
}

/// Summary of a successful refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshOutcome {
    /// Distinct profiles now cached.
    pub count: usize,
    /// Sheet rows dropped by the profile mapper.
    pub skipped: usize,
}

#[derive(Debug, Default)]
struct Snapshot {
    profiles: Arc<ProfileMap>,
    refreshed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Default)]
pub struct ShopCache {
    inner: RwLock<Snapshot>,
}

impl ShopCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the cached set with `profiles`. On duplicate usernames the
    /// later profile wins. Returns the number of cached profiles.
    pub async fn replace(&self, profiles: Vec<ShopProfile>) -> usize {
        let mut map = ProfileMap::with_capacity(profiles.len());
        for profile in profiles {
            if let Some(previous) = map.insert(profile.shop_username.clone(), profile) {
                tracing::debug!(
                    shop_username = %previous.shop_username,
                    "duplicate ShopUsername; later row replaces earlier one"
                );
            }
        }
        let count = map.len();

        let mut guard = self.inner.write().await;
        *guard = Snapshot {
            profiles: Arc::new(map),
            refreshed_at: Some(Utc::now()),
        };
        drop(guard);

        count
    }

    /// Re-reads the customers sheet at `sheet_url` and replaces the cache.
    ///
    /// Fetching and mapping finish before the swap, so readers are never
    /// blocked on the network.
    ///
    /// # Errors
    ///
    /// Returns the [`SheetError`] from the fetch. The cache is left untouched
    /// in that case.
    pub async fn refresh(
        &self,
        sheets: &SheetClient,
        sheet_url: &str,
    ) -> Result<RefreshOutcome, SheetError> {
        let mapped = sheets.fetch_profiles(sheet_url).await?;
        let skipped = mapped.skipped.len();
        let count = self.replace(mapped.records).await;
        tracing::info!(count, skipped, "shop cache refreshed");
        Ok(RefreshOutcome { count, skipped })
    }

    /// Looks up a profile. Never triggers a refresh.
    pub async fn lookup(&self, shop_username: &str) -> Lookup {
        let profiles = self.snapshot().await;
        if profiles.is_empty() {
            return Lookup::CacheEmpty;
        }
        profiles
            .get(shop_username)
            .cloned()
            .map_or(Lookup::Missing, Lookup::Found)
    }

    pub async fn len(&self) -> usize {
        self.snapshot().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.snapshot().await.is_empty()
    }

    /// When the last successful refresh (or replace) happened.
    pub async fn last_refreshed(&self) -> Option<DateTime<Utc>> {
        self.inner.read().await.refreshed_at
    }

    async fn snapshot(&self) -> Arc<ProfileMap> {
        Arc::clone(&self.inner.read().await.profiles)
    }
}
