use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// A wrapper for sensitive values (user emails, addresses) that masks its
/// contents in `Debug` and `Display` output while serializing transparently.
///
/// Log macros format through `Debug`/`Display`, so a `Masked<String>` email
/// cannot leak via `tracing::info!("{:?}", ...)`. Serialization keeps the
/// real value because the persisted profile needs it back on rehydration.
#[derive(Clone, Deserialize)]
pub struct Masked<T>(pub T);

impl<T: fmt::Display> fmt::Debug for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "********")
    }
}

impl<T: fmt::Display> fmt::Display for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "********")
    }
}

impl<T: Serialize> Serialize for Masked<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<T> Masked<T> {
    pub fn into_inner(self) -> T {
        self.0
    }

    pub fn as_inner(&self) -> &T {
        &self.0
    }
}
