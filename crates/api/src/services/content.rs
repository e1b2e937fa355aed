//! Content reads with bounded timeout, retry and static fallback.
//!
//! Every read returns a non-empty collection: when the database cannot be
//! reached, keeps failing, or holds no rows for a category, the built-in
//! dataset for that category is served instead.

use std::future::Future;
use std::sync::Arc;

use serde::Serialize;
use spacetour_core::content::{ContentCategory, CrewMember, Destination, PageMeta, Technology};
use spacetour_core::fallback;
use spacetour_core::retry::{retry, with_timeout, RetryPolicy};
use spacetour_db::ContentStore;

/// Where a content response came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentOrigin {
    Live,
    Fallback,
}

/// A content collection ready to render.
#[derive(Debug, Clone, Serialize)]
pub struct ContentPage<T> {
    pub meta: PageMeta,
    pub source: ContentOrigin,
    pub items: Vec<T>,
}

pub struct ContentService {
    store: Arc<dyn ContentStore>,
    policy: RetryPolicy,
    precheck: bool,
}

impl ContentService {
    pub fn new(store: Arc<dyn ContentStore>, policy: RetryPolicy, precheck: bool) -> Self {
        Self {
            store,
            policy,
            precheck,
        }
    }

    /// Whether the database answers a ping within the read timeout.
    pub async fn is_healthy(&self) -> bool {
        with_timeout(self.policy.timeout, self.store.ping())
            .await
            .is_ok()
    }

    pub async fn destinations(&self) -> ContentPage<Destination> {
        let store = self.store.as_ref();
        self.load(ContentCategory::Destinations, fallback::destinations, move |_| {
            store.destinations()
        })
        .await
    }

    pub async fn crew(&self) -> ContentPage<CrewMember> {
        let store = self.store.as_ref();
        self.load(ContentCategory::Crew, fallback::crew, move |_| store.crew())
            .await
    }

    pub async fn technologies(&self) -> ContentPage<Technology> {
        let store = self.store.as_ref();
        self.load(ContentCategory::Technology, fallback::technologies, move |_| {
            store.technologies()
        })
        .await
    }

    async fn load<T, F, Fut>(
        &self,
        category: ContentCategory,
        fallback: fn() -> Vec<T>,
        read: F,
    ) -> ContentPage<T>
    where
        F: FnMut(u32) -> Fut,
        Fut: Future<Output = Result<Vec<T>, sqlx::Error>>,
    {
        let page = |source, items| ContentPage {
            meta: category.meta(),
            source,
            items,
        };

        if self.precheck {
            if let Err(e) = with_timeout(self.policy.timeout, self.store.ping()).await {
                tracing::warn!(%category, error = %e, "Database pre-check failed, serving fallback content");
                return page(ContentOrigin::Fallback, fallback());
            }
        }

        match retry(&self.policy, category.table_name(), read).await {
            Ok(items) if items.is_empty() => {
                tracing::warn!(%category, "No rows returned, serving fallback content");
                page(ContentOrigin::Fallback, fallback())
            }
            Ok(items) => {
                tracing::debug!(%category, count = items.len(), "Loaded content");
                page(ContentOrigin::Live, items)
            }
            Err(e) => {
                tracing::error!(%category, error = %e, "Content read failed, serving fallback content");
                page(ContentOrigin::Fallback, fallback())
            }
        }
    }
}
