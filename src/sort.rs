//! Merge sort engine used to restore element order
//!
//! Elements are kept in a contiguous vector, so the engine is a top-down
//! merge sort over slices with a single scratch buffer rather than a
//! list splitter. The ordering key is injected by the caller; the matrix
//! uses the row-major position computed from its current column count.
//!
//! The merge takes from the left run whenever keys are equal, which makes
//! the sort stable and the result deterministic.

/// Runs shorter than this are sorted by insertion
const INSERTION_THRESHOLD: usize = 16;

/// Sorts `items` in ascending order of `key`, stable on equal keys
///
/// # Arguments
///
/// * `items` - Sequence to sort in place
/// * `key` - Ordering key for each item
pub fn merge_sort_by_key<T, K, F>(items: &mut [T], key: F)
where
    T: Copy,
    K: Ord,
    F: Fn(&T) -> K,
{
    if items.len() <= 1 {
        return;
    }

    let mut scratch = items.to_vec();
    sort_run(items, &mut scratch, &key);
}

/// Sorts `items` using `scratch` (same length) as merge space
fn sort_run<T, K, F>(items: &mut [T], scratch: &mut [T], key: &F)
where
    T: Copy,
    K: Ord,
    F: Fn(&T) -> K,
{
    let len = items.len();
    if len <= INSERTION_THRESHOLD {
        insertion_sort(items, key);
        return;
    }

    let mid = len / 2;
    {
        let (left, right) = items.split_at_mut(mid);
        let (left_scratch, right_scratch) = scratch.split_at_mut(mid);
        sort_run(left, left_scratch, key);
        sort_run(right, right_scratch, key);
    }

    // Already in order, nothing to merge
    if key(&items[mid - 1]) <= key(&items[mid]) {
        return;
    }

    scratch.copy_from_slice(items);
    let (left, right) = scratch.split_at(mid);
    merge_into(left, right, items, key);
}

/// Merges two sorted runs into `out`, preferring `left` on equal keys
///
/// `out.len()` must equal `left.len() + right.len()`.
pub fn merge_into<T, K, F>(left: &[T], right: &[T], out: &mut [T], key: &F)
where
    T: Copy,
    K: Ord,
    F: Fn(&T) -> K,
{
    debug_assert_eq!(out.len(), left.len() + right.len());

    let (mut i, mut j) = (0, 0);
    for slot in out.iter_mut() {
        let take_left = match (left.get(i), right.get(j)) {
            (Some(l), Some(r)) => key(l) <= key(r),
            (Some(_), None) => true,
            _ => false,
        };

        if take_left {
            *slot = left[i];
            i += 1;
        } else {
            *slot = right[j];
            j += 1;
        }
    }
}

fn insertion_sort<T, K, F>(items: &mut [T], key: &F)
where
    T: Copy,
    K: Ord,
    F: Fn(&T) -> K,
{
    for i in 1..items.len() {
        let current = items[i];
        let current_key = key(&current);
        let mut j = i;
        // Strict comparison keeps equal keys in their original order
        while j > 0 && key(&items[j - 1]) > current_key {
            items[j] = items[j - 1];
            j -= 1;
        }
        items[j] = current;
    }
}
