pub mod model;
pub mod service;

use std::sync::Arc;
use crate::core::events::DomainEvent;
use crate::favorites::domain::model::{FavoriteRecord, FavoritesSet};

pub type FavoritesEvent = DomainEvent<FavoritesSet>;

// Listeners run synchronously on the mutating call, after the store lock is released.
pub type FavoritesListener = Arc<dyn Fn(&FavoritesEvent) + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub(crate) u64);

pub trait FavoritesService: Sync + Send {
    fn favorites(&self) -> FavoritesSet;
    fn is_favorite(&self, id: &str) -> bool;
    fn add(&self, record: FavoriteRecord) -> bool;
    fn remove(&self, id: &str) -> bool;
    fn toggle(&self, record: FavoriteRecord) -> bool;
    fn subscribe(&self, listener: FavoritesListener) -> SubscriptionId;
    fn unsubscribe(&self, id: SubscriptionId) -> bool;
}
