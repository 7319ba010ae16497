//! Leonardo numbers: L(0) = L(1) = 1, L(n) = L(n-1) + L(n-2) + 1.

use once_cell::sync::Lazy;

// Built once per process and immutable afterwards. The table holds every
// Leonardo number representable in usize, 90 entries on 64-bit targets. A
// tree of order n spans L(n) slots, so any order reachable from a slice that
// fits in memory is covered.
static TABLE: Lazy<Vec<usize>> = Lazy::new(|| {
    let mut table = vec![1usize, 1];

    while let Some(next) = table[table.len() - 1]
        .checked_add(table[table.len() - 2])
        .and_then(|sum| sum.checked_add(1))
    {
        table.push(next);
    }

    table
});

/// Returns the n-th Leonardo number.
///
/// Panics if `L(n)` does not fit in `usize`. An index that large means the
/// caller's index arithmetic is broken, there is no recoverable state.
#[inline]
pub(crate) fn leonardo(n: usize) -> usize {
    assert!(
        n < TABLE.len(),
        "Leonardo number L({n}) does not fit in usize"
    );

    TABLE[n]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_values() {
        let expected = [1, 1, 3, 5, 9, 15];

        for (n, val) in expected.iter().enumerate() {
            assert_eq!(leonardo(n), *val);
        }
    }

    #[test]
    fn recurrence_holds_for_entire_table() {
        for n in 2..TABLE.len() {
            assert_eq!(leonardo(n), leonardo(n - 1) + leonardo(n - 2) + 1);
        }
    }

    #[test]
    fn table_covers_any_addressable_slice_len() {
        // The next number after the last entry overflows usize, so the last
        // entry must already exceed half the address space.
        assert!(*TABLE.last().unwrap() > usize::MAX / 2);
    }

    #[test]
    #[should_panic(expected = "does not fit in usize")]
    fn out_of_range_order_panics() {
        leonardo(TABLE.len());
    }
}
