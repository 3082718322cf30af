use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};
use crate::core::events::DomainEvent;
use crate::favorites::domain::{FavoritesEvent, FavoritesListener, FavoritesService, SubscriptionId};
use crate::favorites::domain::model::{FavoriteRecord, FavoritesSet};
use crate::favorites::repository::FavoritesRepository;

const EVENT_NAME: &str = "favorites";

// Reads the persisted favorites. Never fails: a missing slot or an unreadable one yields an
// empty set.
pub fn load(repository: &dyn FavoritesRepository) -> FavoritesSet {
    match repository.load_favorites() {
        Ok(Some(favorites)) => {
            tracing::info!(count = favorites.len(), "favorites hydrated");
            favorites
        }
        Ok(None) => FavoritesSet::new(),
        Err(err) => {
            tracing::warn!(error = %err, "discarding unreadable favorites");
            FavoritesSet::new()
        }
    }
}

// FavoritesStore owns the favorites set and its durable mirror.
pub struct FavoritesStore {
    repository: Box<dyn FavoritesRepository>,
    image_proxy: Option<String>,
    favorites: Mutex<FavoritesSet>,
    listeners: Mutex<Vec<(SubscriptionId, FavoritesListener)>>,
    next_subscription: AtomicU64,
}

impl FavoritesStore {
    pub fn new(repository: Box<dyn FavoritesRepository>) -> Self {
        Self::with_image_proxy(repository, None)
    }

    // Covers are normalized on hydration and on every insert, so records written by older
    // clients come back upgraded.
    pub fn with_image_proxy(repository: Box<dyn FavoritesRepository>, image_proxy: Option<&str>) -> Self {
        let favorites = load(repository.as_ref()).with_normalized_images(image_proxy);
        Self {
            repository,
            image_proxy: image_proxy.map(str::to_string),
            favorites: Mutex::new(favorites),
            listeners: Mutex::new(vec![]),
            next_subscription: AtomicU64::new(1),
        }
    }

    // Applies a mutation and, when it changed the set, persists the full set before
    // returning the event to publish. The lock is held across the write to keep writes ordered.
    fn mutate<F>(&self, key: &str, op: F) -> Option<FavoritesEvent>
        where F: FnOnce(&mut FavoritesSet) -> Option<bool> {
        let mut favorites = self.favorites.lock().unwrap_or_else(PoisonError::into_inner);
        let added = op(&mut *favorites)?;
        let warning = match self.repository.save_favorites(&favorites) {
            Ok(()) => None,
            Err(err) => {
                tracing::warn!(error = %err, key, "favorites kept in memory only");
                Some(err)
            }
        };
        let snapshot = favorites.clone();
        Some(if added {
            DomainEvent::added(EVENT_NAME, key, snapshot, warning)
        } else {
            DomainEvent::removed(EVENT_NAME, key, snapshot, warning)
        })
    }

    fn publish(&self, event: &FavoritesEvent) {
        let listeners: Vec<FavoritesListener> = self.listeners.lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter().map(|(_, l)| l.clone()).collect();
        for listener in listeners {
            listener(event);
        }
    }

    pub fn len(&self) -> usize {
        self.favorites.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FavoritesService for FavoritesStore {
    fn favorites(&self) -> FavoritesSet {
        self.favorites.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn is_favorite(&self, id: &str) -> bool {
        self.favorites.lock().unwrap_or_else(PoisonError::into_inner).contains(id)
    }

    fn add(&self, record: FavoriteRecord) -> bool {
        let record = record.with_normalized_image(self.image_proxy.as_deref());
        let key = record.id.clone();
        let event = self.mutate(key.as_str(), |favorites| {
            if favorites.insert(record) { Some(true) } else { None }
        });
        match event {
            Some(event) => {
                tracing::info!(id = key.as_str(), "favorite added");
                self.publish(&event);
                true
            }
            None => false,
        }
    }

    fn remove(&self, id: &str) -> bool {
        let event = self.mutate(id, |favorites| {
            if favorites.remove(id) { Some(false) } else { None }
        });
        match event {
            Some(event) => {
                tracing::info!(id, "favorite removed");
                self.publish(&event);
                true
            }
            None => false,
        }
    }

    fn toggle(&self, record: FavoriteRecord) -> bool {
        let record = record.with_normalized_image(self.image_proxy.as_deref());
        let key = record.id.clone();
        let event = self.mutate(key.as_str(), |favorites| {
            if favorites.remove(&record.id) {
                Some(false)
            } else {
                Some(favorites.insert(record))
            }
        });
        match event {
            Some(event) => {
                let favorite = event.data.contains(&key);
                tracing::info!(id = key.as_str(), favorite, "favorite toggled");
                self.publish(&event);
                favorite
            }
            None => self.is_favorite(&key),
        }
    }

    fn subscribe(&self, listener: FavoritesListener) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription.fetch_add(1, Ordering::SeqCst));
        self.listeners.lock().unwrap_or_else(PoisonError::into_inner).push((id, listener));
        id
    }

    fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners.lock().unwrap_or_else(PoisonError::into_inner);
        let before = listeners.len();
        listeners.retain(|(sid, _)| *sid != id);
        listeners.len() != before
    }
}
