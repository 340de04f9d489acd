//! Typed integer ID wrappers for compile-time type safety.
//!
//! This module provides `Id<T>`, a typed wrapper around the `i64` primary keys
//! used by the inventory schema. It prevents accidentally mixing up different
//! ID types (e.g., passing a `RoomId` where a `HallId` was expected), which
//! matters on the status board where rooms and halls flow through the same
//! unified view.
//!
//! # Example
//!
//! ```rust
//! use backoffice_core::common::id::Id;
//!
//! // Define entity marker types
//! pub struct Room;
//! pub struct Hall;
//!
//! // Create type aliases
//! pub type RoomId = Id<Room>;
//! pub type HallId = Id<Hall>;
//!
//! // These are now incompatible types:
//! let room_id = RoomId::from_i64(101);
//! let hall_id = HallId::from_i64(101);
//!
//! // This would be a compile error:
//! // let wrong: HallId = room_id;
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt::{self, Debug, Display};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::num::ParseIntError;
use std::str::FromStr;

/// A typed wrapper around an `i64` database key that provides compile-time
/// type safety.
///
/// The type parameter `T` represents the entity type this ID belongs to.
/// Keys are assigned by the database (`BIGSERIAL`), so there is no `new()`;
/// values enter the program through sqlx decoding, deserialization, or
/// `from_i64`.
///
/// # Type Safety
///
/// IDs with different `T` parameters are incompatible at compile time:
///
/// ```compile_fail
/// use backoffice_core::common::id::Id;
///
/// struct Room;
/// struct Hall;
///
/// let room_id: Id<Room> = Id::from_i64(1);
/// let hall_id: Id<Hall> = room_id; // Compile error!
/// ```
#[repr(transparent)]
pub struct Id<T>(i64, PhantomData<fn() -> T>);

// ============================================================================
// Core implementations
// ============================================================================

impl<T> Id<T> {
    /// Creates an `Id` from a raw key.
    ///
    /// This is useful when loading IDs from the database or from URL path
    /// segments.
    #[inline]
    pub fn from_i64(value: i64) -> Self {
        Self(value, PhantomData)
    }

    /// Returns the inner key.
    #[inline]
    pub fn into_i64(self) -> i64 {
        self.0
    }

    /// Returns the inner key without consuming the ID.
    #[inline]
    pub fn as_i64(&self) -> i64 {
        self.0
    }

    /// Parses an `Id` from a string.
    ///
    /// This is the primary way to convert path and query string inputs to
    /// typed IDs.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid integer.
    #[inline]
    pub fn parse(s: &str) -> Result<Self, ParseIntError> {
        Ok(Self(s.parse()?, PhantomData))
    }
}

// ============================================================================
// Standard trait implementations
// ============================================================================

impl<T> Clone for Id<T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Include type name for debugging clarity
        f.debug_tuple(&format!("Id<{}>", std::any::type_name::<T>()))
            .field(&self.0)
            .finish()
    }
}

impl<T> Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl<T> PartialEq for Id<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for Id<T> {}

impl<T> PartialOrd for Id<T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Id<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl<T> Hash for Id<T> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl<T> From<i64> for Id<T> {
    #[inline]
    fn from(value: i64) -> Self {
        Self::from_i64(value)
    }
}

impl<T> From<Id<T>> for i64 {
    #[inline]
    fn from(id: Id<T>) -> Self {
        id.0
    }
}

impl<T> FromStr for Id<T> {
    type Err = ParseIntError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// ============================================================================
// Serde support
// ============================================================================

impl<T> Serialize for Id<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        i64::deserialize(deserializer).map(Self::from_i64)
    }
}

// ============================================================================
// sqlx support (always enabled)
// ============================================================================

use sqlx::encode::IsNull;
use sqlx::error::BoxDynError;
use sqlx::postgres::{PgArgumentBuffer, PgHasArrayType, PgTypeInfo, PgValueRef, Postgres};
use sqlx::{Decode, Encode, Type};

impl<T> Type<Postgres> for Id<T> {
    fn type_info() -> PgTypeInfo {
        <i64 as Type<Postgres>>::type_info()
    }

    fn compatible(ty: &PgTypeInfo) -> bool {
        <i64 as Type<Postgres>>::compatible(ty)
    }
}

impl<T> PgHasArrayType for Id<T> {
    fn array_type_info() -> PgTypeInfo {
        <i64 as PgHasArrayType>::array_type_info()
    }
}

impl<T> Encode<'_, Postgres> for Id<T> {
    fn encode_by_ref(&self, buf: &mut PgArgumentBuffer) -> Result<IsNull, BoxDynError> {
        <i64 as Encode<Postgres>>::encode_by_ref(&self.0, buf)
    }
}

impl<T> Decode<'_, Postgres> for Id<T> {
    fn decode(value: PgValueRef<'_>) -> Result<Self, BoxDynError> {
        <i64 as Decode<Postgres>>::decode(value).map(Self::from_i64)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    struct Unit;

    type UnitId = Id<Unit>;

    #[test]
    fn test_from_i64_roundtrip() {
        let id = UnitId::from_i64(42);
        assert_eq!(id.into_i64(), 42);
        assert_eq!(id.as_i64(), 42);
    }

    #[test]
    fn test_parse_and_display_roundtrip() {
        let id = UnitId::from_i64(7);
        let s = id.to_string();
        let parsed = UnitId::parse(&s).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(UnitId::parse("abc").is_err());
        assert!(UnitId::parse("").is_err());
    }

    #[test]
    fn test_serde_roundtrip() {
        let id = UnitId::from_i64(301);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "301");
        let parsed: UnitId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_hash_map_key() {
        use std::collections::HashMap;
        let mut map: HashMap<UnitId, &str> = HashMap::new();
        let id = UnitId::from_i64(9);
        map.insert(id, "test");
        assert_eq!(map.get(&id), Some(&"test"));
    }

    #[test]
    fn test_ordering_follows_key() {
        let id1 = UnitId::from_i64(1);
        let id2 = UnitId::from_i64(2);
        assert!(id1 < id2);
    }

    #[test]
    fn test_debug_includes_type_name() {
        let id = UnitId::from_i64(5);
        let debug = format!("{:?}", id);
        assert!(debug.contains("Unit"));
    }
}
