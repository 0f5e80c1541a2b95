//! Product registry types.

use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Key identifying a product within the registry.
pub type ProductId = u64;

/// A single key/name entry in the registry.
///
/// On the wire a product is a one-entry object keyed by its decimal id,
/// e.g. `{"1":"phone"}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
}

impl Product {
    pub fn new(id: ProductId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl Serialize for Product {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.id, &self.name)?;
        map.end()
    }
}

impl<'de> Deserialize<'de> for Product {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ProductVisitor;

        impl<'de> Visitor<'de> for ProductVisitor {
            type Value = Product;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object with exactly one integer key")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Product, A::Error> {
                let (id, name) = map
                    .next_entry::<ProductId, String>()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                if map.next_key::<de::IgnoredAny>()?.is_some() {
                    return Err(de::Error::invalid_length(2, &self));
                }
                Ok(Product { id, name })
            }
        }

        deserializer.deserialize_map(ProductVisitor)
    }
}

/// How the registry assigns keys to newly created products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyPolicy {
    /// `live entries + 1`. Can hand out a key that is still in use after a delete.
    EntryCount,
    /// One more than the largest key ever issued. Keys are never reused.
    #[default]
    Monotonic,
}
