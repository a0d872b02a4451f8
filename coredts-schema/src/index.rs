//! Name to entity index.
//!
//! Built once per generation run from the full document. Each entity kind has
//! its own table, so a class and a namespace sharing a name both resolve.
//! Within a kind, a later entry with the same name replaces an earlier one.

use crate::types::{Class, CoreApi, Enum, Namespace};
use std::collections::{HashMap, HashSet};

/// Lookup tables from entity name to entity, one per kind.
#[derive(Debug, Clone, Default)]
pub struct SchemaIndex<'a> {
    classes: HashMap<&'a str, &'a Class>,
    namespaces: HashMap<&'a str, &'a Namespace>,
    enums: HashMap<&'a str, &'a Enum>,
}

impl<'a> SchemaIndex<'a> {
    /// Builds the index from a document.
    #[must_use]
    pub fn build(api: &'a CoreApi) -> Self {
        Self {
            classes: by_name(&api.classes, |c| &c.name),
            namespaces: by_name(&api.namespaces, |n| &n.name),
            enums: by_name(&api.enums, |e| &e.name),
        }
    }

    /// Looks up a class by name.
    #[must_use]
    pub fn class(&self, name: &str) -> Option<&'a Class> {
        self.classes.get(name).copied()
    }

    /// Looks up a namespace by name.
    #[must_use]
    pub fn namespace(&self, name: &str) -> Option<&'a Namespace> {
        self.namespaces.get(name).copied()
    }

    /// Looks up an enum by name.
    #[must_use]
    pub fn enumeration(&self, name: &str) -> Option<&'a Enum> {
        self.enums.get(name).copied()
    }

    /// Returns the number of indexed entities across all kinds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.classes.len() + self.namespaces.len() + self.enums.len()
    }

    /// Returns true if the index is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn by_name<'a, T>(
    items: &'a [T],
    name: impl Fn(&'a T) -> &'a String,
) -> HashMap<&'a str, &'a T> {
    items.iter().map(|item| (name(item).as_str(), item)).collect()
}

/// Returns names in first-occurrence order with duplicates removed.
pub fn unique_names<'a, I>(names: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    names.into_iter().filter(|name| seen.insert(*name)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{EnumValue, Property};

    fn create_test_api() -> CoreApi {
        CoreApi {
            classes: vec![Class::new("Object"), Class::new("CoreObject").with_base("Object")],
            namespaces: vec![Namespace::new("World")],
            enums: vec![Enum::new("Color", vec![EnumValue::new("RED", Some(0))])],
        }
    }

    #[test]
    fn test_index_lookup_by_kind() {
        let api = create_test_api();
        let index = SchemaIndex::build(&api);

        assert_eq!(index.len(), 4);
        assert!(index.class("CoreObject").is_some());
        assert!(index.namespace("World").is_some());
        assert!(index.enumeration("Color").is_some());
        assert!(index.class("World").is_none());
        assert!(index.class("Missing").is_none());
    }

    #[test]
    fn test_index_last_write_wins() {
        let mut first = Class::new("Player");
        first.properties.push(Property::new("name", "string"));
        let second = Class::new("Player");
        let api = CoreApi {
            classes: vec![first, second],
            ..CoreApi::default()
        };

        let index = SchemaIndex::build(&api);
        let resolved = index.class("Player").expect("Player should resolve");
        assert!(resolved.properties.is_empty());
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_index_same_name_across_kinds() {
        let api = CoreApi {
            classes: vec![Class::new("Game")],
            namespaces: vec![Namespace::new("Game")],
            enums: vec![Enum::new("Game", Vec::new())],
        };

        let index = SchemaIndex::build(&api);
        assert_eq!(index.class("Game").map(|c| c.name.as_str()), Some("Game"));
        assert!(index.namespace("Game").is_some());
        assert!(index.enumeration("Game").is_some());
        assert_eq!(index.len(), 3);
    }

    #[test]
    fn test_unique_names_keeps_first_occurrence() {
        let names = unique_names(["b", "a", "b", "c", "a"]);
        assert_eq!(names, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_empty_index() {
        let api = CoreApi::default();
        let index = SchemaIndex::build(&api);
        assert!(index.is_empty());
        assert!(index.class("Object").is_none());
    }
}
