/// Collection returned by the Trello client.
///
/// It can only be walked once, front to back; it has no indexing and no
/// length beyond the iterator size hint. Use [`materialize`] to get a `Vec`.
#[derive(Debug)]
pub struct Association<T> {
    items: std::vec::IntoIter<T>,
}

impl<T> Association<T> {
    pub(crate) fn new(items: Vec<T>) -> Self {
        Self {
            items: items.into_iter(),
        }
    }
}

impl<T> Iterator for Association<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.items.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.items.size_hint()
    }
}

/// Copy every element of `items`, in order, into a plain `Vec`.
pub fn materialize<I: IntoIterator>(items: I) -> Vec<I::Item> {
    let iter = items.into_iter();
    let mut out = Vec::with_capacity(iter.size_hint().0);
    for item in iter {
        out.push(item);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_materialize_empty() {
        let v: Vec<u32> = materialize(Association::new(Vec::new()));
        assert!(v.is_empty());
    }

    #[test]
    fn test_materialize_single() {
        assert_eq!(materialize(Association::new(vec!["a"])), vec!["a"]);
    }

    #[test]
    fn test_materialize_preserves_order() {
        let items = vec![3, 1, 4, 1, 5, 9, 2, 6];
        let v = materialize(Association::new(items.clone()));
        assert_eq!(v, items);
    }

    #[test]
    fn test_materialize_is_idempotent() {
        let once = materialize(Association::new(vec!["x", "y", "z"]));
        let twice = materialize(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_materialize_any_iterable() {
        let v = materialize((1..=3).map(|i| i * 10));
        assert_eq!(v, vec![10, 20, 30]);
    }
}
