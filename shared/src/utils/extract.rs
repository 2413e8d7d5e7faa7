//! Helpers for pulling identifiers and fields out of collections

use std::collections::HashSet;
use std::hash::Hash;

/// Entities identified by a numeric id
pub trait HasId {
    fn id(&self) -> i64;
}

/// Ids of `items`, in iteration order
pub fn extract_id_list<'a, T, I>(items: I) -> Vec<i64>
where
    T: HasId + 'a,
    I: IntoIterator<Item = &'a T>,
{
    extract_list(items, |item| item.id())
}

/// Distinct ids of `items`
pub fn extract_id_set<'a, T, I>(items: I) -> HashSet<i64>
where
    T: HasId + 'a,
    I: IntoIterator<Item = &'a T>,
{
    extract_set(items, |item| item.id())
}

pub fn extract_list<T, R, I, F>(items: I, mapper: F) -> Vec<R>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T) -> R,
{
    items.into_iter().map(mapper).collect()
}

pub fn extract_set<T, R, I, F>(items: I, mapper: F) -> HashSet<R>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T) -> R,
    R: Eq + Hash,
{
    items.into_iter().map(mapper).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Bookmark {
        id: i64,
        collection_id: i64,
    }

    impl HasId for Bookmark {
        fn id(&self) -> i64 {
            self.id
        }
    }

    fn bookmarks() -> Vec<Bookmark> {
        vec![
            Bookmark { id: 3, collection_id: 10 },
            Bookmark { id: 1, collection_id: 10 },
            Bookmark { id: 3, collection_id: 11 },
        ]
    }

    #[test]
    fn test_extract_id_list_keeps_order_and_duplicates() {
        assert_eq!(extract_id_list(&bookmarks()), vec![3, 1, 3]);
    }

    #[test]
    fn test_extract_id_set_is_distinct() {
        let ids = extract_id_set(&bookmarks());
        assert_eq!(ids.len(), 2);
        assert!(ids.contains(&1) && ids.contains(&3));
    }

    #[test]
    fn test_extract_with_mapper() {
        let items = bookmarks();
        let collections = extract_set(&items, |b| b.collection_id);
        assert_eq!(collections, HashSet::from([10, 11]));
        assert!(extract_list(Vec::<Bookmark>::new(), |b| b.id).is_empty());
    }
}
