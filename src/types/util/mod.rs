//! Utilities shared by the wire types.

pub mod datetime;

pub use self::datetime::Timestamp;

/// Extension trait on [`serde_json::Value`] for the second half of a
/// two-step deserialize: read the discriminant from the value first, then
/// decode the whole value into the matching variant.
pub(crate) trait ValueExt: Sized {
    /// Consume this value and attempt to deserialize it into `T`.
    fn deserialize_into<T: serde::de::DeserializeOwned>(self) -> Result<T, serde_json::Error>;
}

impl ValueExt for serde_json::Value {
    fn deserialize_into<T: serde::de::DeserializeOwned>(self) -> Result<T, serde_json::Error> {
        serde_json::from_value(self)
    }
}
