//! Smoothsort, Edsger W. Dijkstra's adaptive heapsort over Leonardo trees.

use core::cmp::Ordering;
use core::mem;

mod heap;
mod leonardo;

use heap::LeonardoHeap;

/// Sorts the slice, but might not preserve the order of equal elements.
///
/// This sort is unstable (i.e., may reorder equal elements), in-place
/// (i.e., does not allocate memory proportional to the input), and
/// *O*(*n* \* log(*n*)) worst-case.
///
/// # Current implementation
///
/// The current algorithm is [smoothsort][smoothsort] by Edsger W. Dijkstra,
/// a heapsort variant built on an implicit forest of Leonardo trees. It
/// mutates the slice through swaps only, keeps its bookkeeping to
/// *O*(log(*n*)) tree orders, and degrades gracefully to *O*(*n*) on
/// already sorted or nearly sorted input.
///
/// # Examples
///
/// ```
/// let mut v = [-5, 4, 1, -3, 2];
///
/// smoothsort::sort(&mut v);
/// assert!(v == [-5, -3, 1, 2, 4]);
/// ```
///
/// [smoothsort]: https://en.wikipedia.org/wiki/Smoothsort
#[inline(always)]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    smoothsort(v, |a, b| a.lt(b));
}

/// Sorts the slice with a comparator function, but might not preserve the
/// order of equal elements.
///
/// This sort is unstable (i.e., may reorder equal elements), in-place
/// (i.e., does not allocate memory proportional to the input), and
/// *O*(*n* \* log(*n*)) worst-case.
///
/// The comparator function must define a total ordering for the elements in
/// the slice. If the ordering is not total, the order of the elements is
/// unspecified, but the slice keeps its original set of elements.
///
/// # Examples
///
/// ```
/// let mut v = [5, 4, 1, 3, 2];
/// smoothsort::sort_by(&mut v, |a, b| a.cmp(b));
/// assert!(v == [1, 2, 3, 4, 5]);
///
/// // reverse sorting
/// smoothsort::sort_by(&mut v, |a, b| b.cmp(a));
/// assert!(v == [5, 4, 3, 2, 1]);
/// ```
#[inline(always)]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    smoothsort(v, |a, b| compare(a, b) == Ordering::Less);
}

// --- IMPL ---

fn smoothsort<T, F>(v: &mut [T], is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    // Sorting has no meaningful behavior on zero-sized types.
    if mem::size_of::<T>() == 0 {
        return;
    }

    // Slices of length 0 and 1 are always sorted, no heap is built for them.
    if v.len() < 2 {
        return;
    }

    let mut heap = LeonardoHeap::new(v, is_less);
    heap.build();
    heap.extract();
}
