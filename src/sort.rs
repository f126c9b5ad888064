//! Sort engine: pure, stable ordering of items by the active sort column.
//!
//! Never mutates the source sequence. When no sort applies — inactive
//! state, unknown column id, or a column without a comparator — the input
//! order passes through untouched so downstream consumers see identical
//! data and skip invalidation.

use std::borrow::Cow;

use crate::types::{Column, SortDirection, SortState};

/// Permutation mapping display row -> source index, or `None` when the
/// source order applies unchanged.
///
/// The permutation form is what the virtualizer consumes: realized rows
/// index into the original item slice without cloning anything.
pub fn sort_order<T>(
    items: &[T],
    columns: &[Column<T>],
    state: &SortState,
) -> Option<Vec<usize>> {
    let column_id = state.column_id()?;
    let direction = state.direction()?;

    let Some(column) = columns.iter().find(|c| c.id == column_id) else {
        log::warn!("sort references unknown column {column_id:?}, ignoring");
        return None;
    };
    // A sortable flag alone, without a comparator, does not sort.
    let comparator = column.comparator.as_ref()?;

    let mut order: Vec<usize> = (0..items.len()).collect();
    // Stable sort: ties keep their original relative order, preserving any
    // prior manual ordering of the items.
    order.sort_by(|&a, &b| {
        let (Some(lhs), Some(rhs)) = (items.get(a), items.get(b)) else {
            return std::cmp::Ordering::Equal;
        };
        match direction {
            SortDirection::Ascending => comparator(lhs, rhs),
            SortDirection::Descending => comparator(rhs, lhs),
        }
    });
    Some(order)
}

/// Sorted view of `items` for hosts that want a materialized sequence.
/// Borrows the input untouched whenever no sort applies.
pub fn resolve<'a, T: Clone>(
    items: &'a [T],
    columns: &[Column<T>],
    state: &SortState,
) -> Cow<'a, [T]> {
    match sort_order(items, columns, state) {
        None => Cow::Borrowed(items),
        Some(order) => Cow::Owned(
            order
                .into_iter()
                .filter_map(|i| items.get(i).cloned())
                .collect(),
        ),
    }
}
