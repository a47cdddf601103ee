use std::fmt::Debug;

use crate::error::{AssertResult, AssertionError};

/// Assert that a collection contains the given element.
pub fn assert_contains<T: PartialEq + Debug>(
    collection: &[T],
    element: &T,
    message: &str,
) -> AssertResult {
    if collection.contains(element) {
        Ok(())
    } else {
        Err(AssertionError::new(format!(
            "{message} Collection does not contain: {element:?}"
        )))
    }
}

/// Assert that a collection does not contain the given element.
pub fn assert_not_contains<T: PartialEq + Debug>(
    collection: &[T],
    element: &T,
    message: &str,
) -> AssertResult {
    if collection.contains(element) {
        Err(AssertionError::new(format!(
            "{message} Collection contains: {element:?}"
        )))
    } else {
        Ok(())
    }
}

/// Assert that every element of `subset` appears in `superset`.
pub fn assert_subset_of<T: PartialEq>(subset: &[T], superset: &[T], message: &str) -> AssertResult {
    if contains_all(superset, subset) {
        Ok(())
    } else {
        Err(AssertionError::new(format!(
            "{message} Expected subset, but was not found"
        )))
    }
}

/// Assert that two collections share no element.
pub fn assert_disjoint<T: PartialEq + Debug>(
    first: &[T],
    second: &[T],
    message: &str,
) -> AssertResult {
    for item in first {
        if second.contains(item) {
            return Err(AssertionError::new(format!(
                "{message} Collections are not disjoint; common element: {item:?}"
            )));
        }
    }
    Ok(())
}

/// Assert that two collections hold the same members, ignoring order.
pub fn assert_same_members<T: PartialEq>(first: &[T], second: &[T], message: &str) -> AssertResult {
    if contains_all(first, second) && contains_all(second, first) {
        Ok(())
    } else {
        Err(AssertionError::new(format!(
            "{message} Collections do not have the same members"
        )))
    }
}

/// Assert that two collections do not hold the same members.
pub fn assert_not_same_members<T: PartialEq>(
    first: &[T],
    second: &[T],
    message: &str,
) -> AssertResult {
    if contains_all(first, second) && contains_all(second, first) {
        Err(AssertionError::new(format!(
            "{message} Collections have the same members, but they should not"
        )))
    } else {
        Ok(())
    }
}

/// Assert that a collection is empty.
pub fn assert_is_empty<T>(collection: &[T], message: &str) -> AssertResult {
    if collection.is_empty() {
        Ok(())
    } else {
        Err(AssertionError::new(format!(
            "{message} Expected empty collection, but was not."
        )))
    }
}

/// Assert that a collection holds at least one element.
pub fn assert_is_not_empty<T>(collection: &[T], message: &str) -> AssertResult {
    if collection.is_empty() {
        Err(AssertionError::new(format!(
            "{message} Expected non-empty collection, but was empty."
        )))
    } else {
        Ok(())
    }
}

/// Assert that a collection has exactly the expected number of elements.
pub fn assert_length<T>(collection: &[T], expected: usize, message: &str) -> AssertResult {
    if collection.len() != expected {
        return Err(AssertionError::new(format!(
            "{message} Expected length: {expected}, but was: {}",
            collection.len()
        )));
    }
    Ok(())
}

/// Assert that some inner collection contains the given element.
pub fn assert_nested_contains<T, C>(collection: &[C], element: &T, message: &str) -> AssertResult
where
    T: PartialEq + Debug,
    C: AsRef<[T]>,
{
    if collection
        .iter()
        .any(|inner| inner.as_ref().contains(element))
    {
        Ok(())
    } else {
        Err(AssertionError::new(format!(
            "{message} Collection does not include nested element: {element:?}"
        )))
    }
}

/// Assert that no inner collection contains the given element.
pub fn assert_not_nested_contains<T, C>(
    collection: &[C],
    element: &T,
    message: &str,
) -> AssertResult
where
    T: PartialEq + Debug,
    C: AsRef<[T]>,
{
    if collection
        .iter()
        .any(|inner| inner.as_ref().contains(element))
    {
        Err(AssertionError::new(format!(
            "{message} Collection includes nested element: {element:?}"
        )))
    } else {
        Ok(())
    }
}

fn contains_all<T: PartialEq>(haystack: &[T], needles: &[T]) -> bool {
    needles.iter().all(|needle| haystack.contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn membership() {
        let values = ["a", "b", "c"];
        assert!(assert_contains(&values, &"b", "has b").is_ok());
        let err = assert_contains(&values, &"z", "has z").unwrap_err();
        assert!(err.message().starts_with("has z"));
        assert!(assert_not_contains(&values, &"z", "no z").is_ok());
        assert!(assert_not_contains(&values, &"a", "no a").is_err());
    }

    #[test]
    fn subsets_and_disjointness() {
        assert!(assert_subset_of(&[1, 2], &[1, 2, 3], "subset").is_ok());
        assert!(assert_subset_of(&[1, 4], &[1, 2, 3], "subset").is_err());
        assert!(assert_disjoint(&[1, 2], &[3, 4], "disjoint").is_ok());
        assert!(assert_disjoint(&[1, 2], &[2, 3], "disjoint").is_err());
    }

    #[test]
    fn same_members_ignores_order() {
        assert!(assert_same_members(&[1, 2, 3], &[3, 1, 2], "same").is_ok());
        assert!(assert_same_members(&[1, 2], &[1, 2, 3], "same").is_err());
        assert!(assert_not_same_members(&[1, 2], &[1, 2, 3], "differ").is_ok());
        assert!(assert_not_same_members(&[1, 2], &[2, 1], "differ").is_err());
    }

    #[test]
    fn emptiness_and_length() {
        let empty: [u8; 0] = [];
        assert!(assert_is_empty(&empty, "empty").is_ok());
        assert!(assert_is_empty(&[1], "empty").is_err());
        assert!(assert_is_not_empty(&[1], "non-empty").is_ok());
        assert!(assert_is_not_empty(&empty, "non-empty").is_err());
        assert!(assert_length(&[1, 2, 3], 3, "len").is_ok());
        assert!(assert_length(&[1, 2, 3], 2, "len").is_err());
    }

    #[test]
    fn nested_membership() {
        let nested = [vec![1, 2], vec![3, 4]];
        assert!(assert_nested_contains(&nested, &3, "nested").is_ok());
        assert!(assert_nested_contains(&nested, &9, "nested").is_err());
        assert!(assert_not_nested_contains(&nested, &9, "not nested").is_ok());
        assert!(assert_not_nested_contains(&nested, &1, "not nested").is_err());
    }
}
