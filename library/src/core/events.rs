use serde::Serialize;
use crate::core::library::LibraryError;

// DomainEventType defines type of event for domain changes
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum DomainEventType {
    Added,
    Removed,
}

// DomainEvent carries a snapshot of the state after a change, plus a soft warning when the
// change could not be made durable.
#[derive(Debug, Clone, PartialEq)]
pub struct DomainEvent<T> {
    pub name: String,
    pub key: String,
    pub kind: DomainEventType,
    pub data: T,
    pub warning: Option<LibraryError>,
}

impl<T> DomainEvent<T> {
    pub fn added(name: &str, key: &str, data: T, warning: Option<LibraryError>) -> Self {
        Self::build(name, key, DomainEventType::Added, data, warning)
    }

    pub fn removed(name: &str, key: &str, data: T, warning: Option<LibraryError>) -> Self {
        Self::build(name, key, DomainEventType::Removed, data, warning)
    }

    fn build(name: &str, key: &str, kind: DomainEventType, data: T, warning: Option<LibraryError>) -> Self {
        DomainEvent {
            name: name.to_string(),
            key: key.to_string(),
            kind,
            data,
            warning,
        }
    }

    pub fn is_durable(&self) -> bool {
        self.warning.is_none()
    }
}

#[cfg(test)]
mod tests {
    use crate::core::events::{DomainEvent, DomainEventType};
    use crate::core::library::LibraryError;

    #[tokio::test]
    async fn test_should_build_added() {
        let event = DomainEvent::added("favorites", "key", vec![1, 2], None);
        assert_eq!("favorites", event.name.as_str());
        assert_eq!("key", event.key.as_str());
        assert_eq!(DomainEventType::Added, event.kind);
        assert!(event.is_durable());
    }

    #[tokio::test]
    async fn test_should_build_removed_with_warning() {
        let event = DomainEvent::removed("favorites", "key", vec![1], Some(LibraryError::storage_persist("full", None)));
        assert_eq!(DomainEventType::Removed, event.kind);
        assert!(!event.is_durable());
    }
}
