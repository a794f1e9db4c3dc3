use std::cmp::Ordering;

/// Binary search over a sorted slice.
///
/// The index comes back only when the needle is present; absence is
/// `None`, so a hit at position zero and a miss cannot be confused.
pub fn binary_search<T: Ord>(items: &[T], needle: &T) -> Option<usize> {
    let mut lower = 0;
    let mut upper = items.len();
    while lower < upper {
        let mid = lower + (upper - lower) / 2;
        match needle.cmp(&items[mid]) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => upper = mid,
            Ordering::Greater => lower = mid + 1,
        }
    }
    None
}
