//! Caller-supplied strategies for comparing, copying and releasing entries.
//!
//! The `*_by` / `*_with` methods on [`RedBlackTreeMap`](crate::RedBlackTreeMap)
//! take these by reference on every call instead of storing them in the tree.
//! Any state a strategy needs travels inside it, usually as a closure capture.

use std::cmp::Ordering;

/// A total order over keys.
///
/// Implementations must be consistent, antisymmetric and transitive for the
/// lifetime of the tree they are used with.
pub trait KeyOrder<K: ?Sized> {
    fn compare(&self, a: &K, b: &K) -> Ordering;
}

/// Orders keys by their `Ord` implementation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<K: Ord + ?Sized> KeyOrder<K> for NaturalOrder {
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        a.cmp(b)
    }
}

/// Orders keys by the reverse of their `Ord` implementation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReverseOrder;

impl<K: Ord + ?Sized> KeyOrder<K> for ReverseOrder {
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        b.cmp(a)
    }
}

impl<K: ?Sized, F> KeyOrder<K> for F
where
    F: Fn(&K, &K) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        self(a, b)
    }
}

/// Produces the independent copies the tree stores on insertion.
pub trait EntryCloner<K, V> {
    fn clone_key(&self, key: &K) -> K;
    fn clone_value(&self, value: &V) -> V;
}

/// Copies entries through `Clone`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CloneEntries;

impl<K: Clone, V: Clone> EntryCloner<K, V> for CloneEntries {
    fn clone_key(&self, key: &K) -> K {
        key.clone()
    }

    fn clone_value(&self, value: &V) -> V {
        value.clone()
    }
}

/// Copies entries with a pair of closures.
#[derive(Debug, Clone, Copy)]
pub struct FnCloner<FK, FV> {
    pub key: FK,
    pub value: FV,
}

impl<K, V, FK, FV> EntryCloner<K, V> for FnCloner<FK, FV>
where
    FK: Fn(&K) -> K,
    FV: Fn(&V) -> V,
{
    fn clone_key(&self, key: &K) -> K {
        (self.key)(key)
    }

    fn clone_value(&self, value: &V) -> V {
        (self.value)(value)
    }
}

/// Releases keys and values as they leave the tree.
///
/// Each stored key and value is passed to exactly one call.
pub trait EntryDestroyer<K, V> {
    fn destroy_key(&self, key: K);
    fn destroy_value(&self, value: V);
}

/// Releases entries by dropping them.
#[derive(Debug, Clone, Copy, Default)]
pub struct DropEntries;

impl<K, V> EntryDestroyer<K, V> for DropEntries {
    fn destroy_key(&self, key: K) {
        drop(key);
    }

    fn destroy_value(&self, value: V) {
        drop(value);
    }
}

/// Releases entries with a pair of closures.
#[derive(Debug, Clone, Copy)]
pub struct FnDestroyer<FK, FV> {
    pub key: FK,
    pub value: FV,
}

impl<K, V, FK, FV> EntryDestroyer<K, V> for FnDestroyer<FK, FV>
where
    FK: Fn(K),
    FV: Fn(V),
{
    fn destroy_key(&self, key: K) {
        (self.key)(key)
    }

    fn destroy_value(&self, value: V) {
        (self.value)(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_orders() {
        assert_eq!(NaturalOrder.compare(&1, &2), Ordering::Less);
        assert_eq!(ReverseOrder.compare(&1, &2), Ordering::Greater);
        assert_eq!(NaturalOrder.compare("b", "a"), Ordering::Greater);

        let by_len = |a: &String, b: &String| a.len().cmp(&b.len());
        assert_eq!(
            by_len.compare(&"abc".to_string(), &"de".to_string()),
            Ordering::Greater
        );
    }

    #[test]
    fn test_fn_cloner_and_destroyer() {
        let cloner: &dyn EntryCloner<i32, String> = &FnCloner {
            key: |k: &i32| k * 10,
            value: |v: &String| v.to_uppercase(),
        };
        assert_eq!(cloner.clone_key(&4), 40);
        assert_eq!(cloner.clone_value(&"x".to_string()), "X");

        let released = RefCell::new(Vec::new());
        let destroyer: &dyn EntryDestroyer<i32, &str> = &FnDestroyer {
            key: |k: i32| released.borrow_mut().push(format!("k{}", k)),
            value: |v: &str| released.borrow_mut().push(format!("v{}", v)),
        };
        destroyer.destroy_key(1);
        destroyer.destroy_value("one");
        assert_eq!(*released.borrow(), vec!["k1", "vone"]);
    }
}
