// crates/cwmp-datamodel/src/order.rs

//! Precedence handling for tables whose rows carry an `Order`-style
//! parameter (`DHCPv4.Client.{i}.ReqOption.{i}.Order`,
//! `DHCPConditionalServingPool.{i}.PoolOrder`).
//!
//! Rules:
//! - Order values start at 1. Zero is rejected.
//! - A row added without an order is placed last (highest order + 1).
//! - Giving a row an order already held by another row shifts every other row
//!   with an equal or higher order up by one.
//! - After each change the orders are compacted to `1..=n`, keeping the
//!   relative precedence. Rows with no order sort after all ordered rows.
//!
//! Row indices are 0-based positions in the `Vec`; instance numbers are not
//! touched.

use crate::error::ModelError;
use crate::log::my_trace;
use crate::schema::Entity;

/// A table row with a precedence parameter.
pub trait Ordered: Entity {
    /// Wire name of the order parameter.
    const ORDER_FIELD: &'static str;

    fn order_key(&self) -> Option<u32>;

    fn set_order_key(&mut self, order: u32);
}

/// Appends `row` and returns its position.
///
/// An unset order becomes the current maximum plus one; an explicit order is
/// applied with the shifting rule.
pub fn push_ordered<T: Ordered>(rows: &mut Vec<T>, mut row: T) -> Result<usize, ModelError> {
    let index = rows.len();
    match row.order_key() {
        Some(0) => Err(ModelError::InvalidOrder(0)),
        Some(order) => {
            rows.push(row);
            reorder(rows, index, order)?;
            Ok(index)
        }
        None => {
            let next = max_order(rows).saturating_add(1);
            my_trace!(
                *row.spec(),
                "Appending row {} with {}={}",
                index,
                T::ORDER_FIELD,
                next
            );
            row.set_order_key(next);
            rows.push(row);
            Ok(index)
        }
    }
}

/// Gives the row at `index` the precedence `order`.
pub fn reorder<T: Ordered>(rows: &mut [T], index: usize, order: u32) -> Result<(), ModelError> {
    if order == 0 {
        return Err(ModelError::InvalidOrder(order));
    }
    check_index(rows, index)?;

    let taken = rows
        .iter()
        .enumerate()
        .any(|(i, row)| i != index && row.order_key() == Some(order));
    if taken {
        for (i, row) in rows.iter_mut().enumerate() {
            match row.order_key() {
                Some(current) if i != index && current >= order => {
                    row.set_order_key(current.saturating_add(1));
                }
                _ => {}
            }
        }
    }
    my_trace!(
        *rows[index].spec(),
        "Row {} takes {}={} (shifted others: {})",
        index,
        T::ORDER_FIELD,
        order,
        taken
    );
    rows[index].set_order_key(order);
    compact(rows);
    Ok(())
}

/// Removes and returns the row at `index`, then closes the gap.
pub fn remove_ordered<T: Ordered>(rows: &mut Vec<T>, index: usize) -> Result<T, ModelError> {
    check_index(rows, index)?;
    let removed = rows.remove(index);
    compact(rows);
    Ok(removed)
}

/// Renumbers the rows to `1..=n` in their current precedence. Ties keep table
/// position.
pub fn compact<T: Ordered>(rows: &mut [T]) {
    let mut ranking: Vec<(usize, Option<u32>)> = rows
        .iter()
        .map(Ordered::order_key)
        .enumerate()
        .collect();
    // None sorts after every Some.
    ranking.sort_by_key(|&(i, order)| (order.is_none(), order, i));

    for (rank, (i, _)) in ranking.into_iter().enumerate() {
        let order = rank as u32 + 1;
        if rows[i].order_key() != Some(order) {
            rows[i].set_order_key(order);
        }
    }
}

/// Positions of the rows sorted by precedence, highest precedence first.
pub fn precedence<T: Ordered>(rows: &[T]) -> Vec<usize> {
    let mut positions: Vec<usize> = (0..rows.len()).collect();
    positions.sort_by_key(|&i| {
        let order = rows[i].order_key();
        (order.is_none(), order, i)
    });
    positions
}

fn max_order<T: Ordered>(rows: &[T]) -> u32 {
    rows.iter().filter_map(Ordered::order_key).max().unwrap_or(0)
}

fn check_index<T>(rows: &[T], index: usize) -> Result<(), ModelError> {
    if index < rows.len() {
        Ok(())
    } else {
        Err(ModelError::InstanceNotFound {
            index,
            len: rows.len(),
        })
    }
}
