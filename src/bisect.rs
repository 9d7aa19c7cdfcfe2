//! Right-biased binary search over a sorted slice.

/// Insertion point for `x` to the right of any equal entries.
///
/// Returns the smallest `i` in `lo..=hi` such that every `a[j] <= x` for
/// `lo <= j < i` and every `a[j] > x` for `i <= j < hi`. `hi` defaults to
/// `a.len()` and is clamped to it; `lo` past `hi` returns `lo` unchanged.
///
/// With `hi = Some(a.len() - 1)` the result never exceeds the last valid
/// index, which is what the cumulative sampler relies on. With `hi = None`
/// a query `x >= a[a.len() - 1]` returns `a.len()`.
///
/// `a` must be non-decreasing over `lo..hi`; the result is meaningless
/// otherwise.
///
/// ```
/// use seedpick::bisect_right;
/// assert_eq!(bisect_right(&[10, 15, 17, 20, 21], &16, 0, None), 2);
/// ```
pub fn bisect_right<T: Ord>(a: &[T], x: &T, lo: usize, hi: Option<usize>) -> usize {
    let mut lo = lo;
    let mut hi = hi.map_or(a.len(), |h| h.min(a.len()));
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if *x < a[mid] {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }
    lo
}
