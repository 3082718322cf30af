use crate::core::library::LibraryResult;

// Repository abstracts a durable, string-keyed slot: one value per key, overwritten wholesale.
// Reads and writes are synchronous so a write completes before the caller returns.
pub trait Repository: Sync + Send {
    // reads the raw value stored under key, None when the slot was never written
    fn read(&self, key: &str) -> LibraryResult<Option<String>>;

    // replaces the value stored under key
    fn write(&self, key: &str, value: &str) -> LibraryResult<()>;

    // clears the slot
    fn delete(&self, key: &str) -> LibraryResult<()>;
}
