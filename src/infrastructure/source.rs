//! Backends a list view loads from

use std::path::Path;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc, Mutex,
};
use std::time::Duration;

use color_eyre::eyre::{bail, eyre, Result, WrapErr};
use futures::future::{BoxFuture, FutureExt};
use serde::de::DeserializeOwned;

use crate::{
    core::cmd::{Mutation, Query},
    core::msg::LoadedPage,
    core::state::ListFilter,
    domain::Listable,
};

/// Where a list view's items come from.
///
/// Futures are `'static` so the executor can run them on their own task and
/// drop them on cancellation.
pub trait ListSource<T>: Send + Sync + 'static {
    /// An empty query asks for the whole collection (client-side paging).
    /// A query with a page asks for that page and the matching total.
    fn fetch(&self, query: Query) -> BoxFuture<'static, Result<LoadedPage<T>>>;

    fn mutate(&self, mutation: Mutation<T>) -> BoxFuture<'static, Result<()>>;
}

/// An in-memory collection that answers queries the way the REST backend does
#[derive(Debug, Clone)]
pub struct MemorySource<T> {
    items: Arc<Mutex<Vec<T>>>,
    latency: Duration,
    failing: Arc<AtomicBool>,
}

impl<T: Listable> MemorySource<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items: Arc::new(Mutex::new(items)),
            latency: Duration::ZERO,
            failing: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Reads a JSON array of records
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self>
    where
        T: DeserializeOwned,
    {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read {}", path.display()))?;
        let items: Vec<T> = serde_json::from_str(&json)
            .wrap_err_with(|| format!("failed to parse {}", path.display()))?;
        log::info!("loaded {} records from {}", items.len(), path.display());
        Ok(Self::new(items))
    }

    /// Delay every answer, e.g. to let a newer request overtake an older one
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// While set, every fetch and mutation fails
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn len(&self) -> usize {
        self.items.lock().map(|items| items.len()).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    async fn respond(&self) -> Result<()> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        if self.failing.load(Ordering::SeqCst) {
            bail!("backend unavailable");
        }
        Ok(())
    }

    fn answer(&self, query: &Query) -> Result<LoadedPage<T>> {
        let items = self.items.lock().map_err(|_| eyre!("source lock poisoned"))?;

        let mut filter = ListFilter::new();
        if let Some(search) = &query.search {
            filter.set_search(search);
        }
        for (facet, value) in &query.facets {
            filter.set_facet(*facet, Some(value));
        }
        let matching = items.iter().filter(|item| filter.matches(*item));

        Ok(match query.page {
            None => LoadedPage::all(matching.cloned().collect()),
            Some(request) => {
                let matching: Vec<&T> = matching.collect();
                let total = matching.len();
                LoadedPage {
                    items: matching
                        .into_iter()
                        .skip(request.offset())
                        .take(request.limit)
                        .cloned()
                        .collect(),
                    total: Some(total),
                }
            }
        })
    }

    fn apply(&self, mutation: Mutation<T>) -> Result<()> {
        let mut items = self.items.lock().map_err(|_| eyre!("source lock poisoned"))?;
        match mutation {
            Mutation::Remove { id } => {
                let before = items.len();
                items.retain(|item| item.id() != id);
                if items.len() == before {
                    bail!("{id} not found");
                }
            }
            Mutation::Upsert(item) => {
                match items.iter().position(|existing| existing.id() == item.id()) {
                    Some(position) => items[position] = item,
                    None => items.insert(0, item),
                }
            }
        }
        Ok(())
    }
}

impl<T: Listable> ListSource<T> for MemorySource<T> {
    fn fetch(&self, query: Query) -> BoxFuture<'static, Result<LoadedPage<T>>> {
        let source = self.clone();
        async move {
            source.respond().await?;
            source.answer(&query)
        }
        .boxed()
    }

    fn mutate(&self, mutation: Mutation<T>) -> BoxFuture<'static, Result<()>> {
        let source = self.clone();
        async move {
            source.respond().await?;
            source.apply(mutation)
        }
        .boxed()
    }
}
