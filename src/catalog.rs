//! The category → titles mapping the playlist is built from.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub titles: Vec<String>,
}

/// Categories in the order they were declared.
///
/// Serialized as a JSON object; key order is preserved on the way in and out.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a category. A repeated name extends the existing category in place.
    pub fn push<N, I, T>(&mut self, name: N, titles: I)
    where
        N: Into<String>,
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let name = name.into();
        let titles = titles.into_iter().map(Into::into);
        match self.categories.iter_mut().find(|c| c.name == name) {
            Some(existing) => existing.titles.extend(titles),
            None => self.categories.push(Category {
                name,
                titles: titles.collect(),
            }),
        }
    }

    #[cfg(test)]
    pub fn with<N, I, T>(mut self, name: N, titles: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.push(name, titles);
        self
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn song_count(&self) -> usize {
        self.categories.iter().map(|c| c.titles.len()).sum()
    }
}

impl Serialize for Catalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.categories.len()))?;
        for category in &self.categories {
            map.serialize_entry(&category.name, &category.titles)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Catalog {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CatalogVisitor;

        impl<'de> Visitor<'de> for CatalogVisitor {
            type Value = Catalog;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object mapping category names to title lists")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Catalog, A::Error> {
                let mut catalog = Catalog::new();
                while let Some((name, titles)) = access.next_entry::<String, Vec<String>>()? {
                    catalog.push(name, titles);
                }
                Ok(catalog)
            }
        }

        deserializer.deserialize_map(CatalogVisitor)
    }
}
