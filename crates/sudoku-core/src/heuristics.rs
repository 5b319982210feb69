//! Constraint-propagation heuristics over a single unit (row, column, or block).
//!
//! Every function here takes the candidate sets of one unit as a plain `&mut [ColorSet]`
//! slice — nothing here knows about rows, columns, blocks, or grid coordinates. That
//! separation is deliberate: it lets [`crate::Grid::converge`] marshal a unit's cells into a
//! scratch buffer, run these heuristics against it, and write the (possibly narrowed)
//! buffer back, without ever handing out more than one mutable borrow of the grid at a
//! time.
//!
//! Each heuristic only ever *removes* colors from cells; none can introduce a color that
//! wasn't already a candidate. They return `true` if they changed the buffer, `false`
//! otherwise.

use crate::ColorSet;

/// For every determined (singleton) cell in the unit, removes that cell's color from every
/// other cell's candidates.
///
/// This is the textbook "cross-hatching" technique: once a cell is known to be, say, `5`,
/// no other cell in the same row/column/block can be `5`.
pub fn cross_hatching(unit: &mut [ColorSet]) -> bool {
    let mut changed = false;
    let determined: ColorSet = unit
        .iter()
        .copied()
        .filter(|c| c.is_singleton())
        .fold(ColorSet::EMPTY, ColorSet::union);
    for cell in unit.iter_mut() {
        if cell.is_singleton() {
            continue;
        }
        let narrowed = cell.difference(determined);
        if narrowed != *cell {
            *cell = narrowed;
            changed = true;
        }
    }
    changed
}

/// For every color that appears in the candidates of exactly one cell of the unit, pins
/// that cell to that color.
///
/// This is the "lone number" (hidden single) technique: if only one cell in a unit can
/// possibly hold color `c`, that cell must hold `c`, even if it still lists other
/// candidates.
pub fn lone_number(unit: &mut [ColorSet]) -> bool {
    let mut appeared = ColorSet::EMPTY;
    let mut repeated = ColorSet::EMPTY;
    for &cell in unit.iter() {
        repeated = repeated.union(appeared.intersection(cell));
        appeared = appeared.union(cell);
    }
    let lone = appeared.difference(repeated);
    if lone.is_empty() {
        return false;
    }
    let mut changed = false;
    for cell in unit.iter_mut() {
        let this_lone = cell.intersection(lone);
        if this_lone.is_singleton() && *cell != this_lone {
            *cell = this_lone;
            changed = true;
        }
    }
    changed
}

/// Generalized naked-subset elimination: if `k` non-determined cells in the unit share a
/// union of exactly `k` candidates between them, those `k` colors cannot appear in any
/// other cell of the unit and are removed from it.
///
/// `k = 1` is the familiar "naked single" (already handled more directly by
/// [`cross_hatching`] once a cell becomes a singleton); this function also finds naked
/// pairs, triples, and so on, for any `k` up to the unit's size.
pub fn naked_subset(unit: &mut [ColorSet]) -> bool {
    let n = unit.len();
    let mut changed = false;
    for i in 0..n {
        let a = unit[i];
        if a.is_singleton() || a.is_empty() {
            continue;
        }
        let mut group = a;
        let mut members = vec![i];
        for (j, &b) in unit.iter().enumerate() {
            if j == i || b.is_singleton() || b.is_empty() {
                continue;
            }
            if b.is_subset(a) {
                group = group.union(b);
                members.push(j);
            }
        }
        if group.count() != members.len() {
            continue;
        }
        for (j, cell) in unit.iter_mut().enumerate() {
            if members.contains(&j) {
                continue;
            }
            let narrowed = cell.difference(group);
            if narrowed != *cell {
                *cell = narrowed;
                changed = true;
            }
        }
    }
    changed
}

/// Generalized hidden-subset elimination, the dual of [`naked_subset`]: if `k` colors are
/// each confined to the same `k` cells of the unit (and no others), every other candidate
/// can be stripped from those `k` cells.
pub fn hidden_subset(unit: &mut [ColorSet]) -> bool {
    let n = unit.len();
    // position(c) = set of unit-indices whose candidates still include color c.
    let position = |c: usize| -> ColorSet {
        unit.iter()
            .enumerate()
            .filter(|(_, cell)| cell.contains(c))
            .map(|(i, _)| i)
            .collect()
    };
    let mut changed = false;
    for c in 0..n {
        let pc = position(c);
        if pc.is_empty() || pc.is_singleton() {
            continue;
        }
        let mut group_colors = ColorSet::singleton(c);
        let mut group_positions = pc;
        for d in 0..n {
            if d == c {
                continue;
            }
            let pd = position(d);
            if pd.is_empty() || pd.is_singleton() {
                continue;
            }
            if pd.is_subset(pc) {
                group_colors = group_colors.add(d);
                group_positions = group_positions.union(pd);
            }
        }
        if group_positions.count() != group_colors.count() {
            continue;
        }
        for i in group_positions.iter() {
            let narrowed = unit[i].intersection(group_colors);
            if narrowed != unit[i] {
                unit[i] = narrowed;
                changed = true;
            }
        }
    }
    changed
}

/// The two cheap heuristics, [`cross_hatching`] and [`lone_number`].
///
/// Both are always evaluated — neither short-circuits the other — because each can expose
/// progress the other missed on the same pass.
pub fn apply_cheap(unit: &mut [ColorSet]) -> bool {
    let a = cross_hatching(unit);
    let b = lone_number(unit);
    a | b
}

/// The two expensive heuristics, [`naked_subset`] and [`hidden_subset`].
///
/// As with [`apply_cheap`], both run on every call.
pub fn apply_expensive(unit: &mut [ColorSet]) -> bool {
    let a = naked_subset(unit);
    let b = hidden_subset(unit);
    a | b
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn consistent_unit(size: usize) -> impl Strategy<Value = Vec<ColorSet>> {
        Just(
            (0..size)
                .map(|c| ColorSet::singleton(c % size))
                .collect::<Vec<_>>(),
        )
    }

    #[test]
    fn cross_hatching_removes_determined_colors_from_peers() {
        let mut unit = vec![ColorSet::singleton(0), ColorSet::full(4), ColorSet::full(4)];
        assert!(cross_hatching(&mut unit));
        assert!(!unit[1].contains(0));
        assert!(!unit[2].contains(0));
    }

    #[test]
    fn cross_hatching_is_a_no_op_without_determined_cells() {
        let mut unit = vec![ColorSet::full(4); 4];
        assert!(!cross_hatching(&mut unit));
    }

    #[test]
    fn lone_number_pins_the_only_holder_of_a_color() {
        let mut unit = vec![
            ColorSet::full(4).discard(0),
            ColorSet::singleton(0),
            ColorSet::full(4),
            ColorSet::full(4),
        ];
        // color 0 only ever appears in cell 1 here, so lone_number has nothing new to do,
        // but color 1, say, might appear only once elsewhere.
        unit[2] = unit[2].discard(1);
        unit[3] = unit[3].discard(1);
        assert!(lone_number(&mut unit));
        assert!(unit[0].contains(1));
        assert_eq!(unit[0], ColorSet::singleton(1));
    }

    #[test]
    fn lone_number_leaves_a_cell_untouched_when_two_colors_are_both_lone_there() {
        // Colors 0 and 1 each appear in exactly one cell (cell 0), alongside color 2,
        // which also appears in every other cell. cell0 ∩ lone = {0, 1}, not a
        // singleton, so cell0 must stay untouched rather than being collapsed to {0, 1}
        // (which would drop its still-valid candidate 2).
        let mut unit = vec![
            ColorSet::singleton(0).add(1).add(2),
            ColorSet::singleton(2).add(3),
            ColorSet::singleton(2).add(3),
            ColorSet::singleton(2).add(3),
        ];
        let before = unit.clone();
        assert!(!lone_number(&mut unit));
        assert_eq!(unit, before);
    }

    #[test]
    fn naked_pair_strips_the_pair_from_other_cells() {
        let pair = ColorSet::singleton(0).add(1);
        let mut unit = vec![pair, pair, ColorSet::full(4), ColorSet::full(4)];
        assert!(naked_subset(&mut unit));
        assert!(!unit[2].contains(0) && !unit[2].contains(1));
        assert!(!unit[3].contains(0) && !unit[3].contains(1));
    }

    #[test]
    fn hidden_pair_strips_everything_else_from_the_pair_cells() {
        // colors 0 and 1 only ever appear in cells 0 and 1.
        let mut unit = vec![
            ColorSet::singleton(0).add(1).add(2),
            ColorSet::singleton(0).add(1).add(3),
            ColorSet::full(4).discard(0).discard(1),
            ColorSet::full(4).discard(0).discard(1),
        ];
        assert!(hidden_subset(&mut unit));
        assert_eq!(unit[0], ColorSet::singleton(0).add(1));
        assert_eq!(unit[1], ColorSet::singleton(0).add(1));
    }

    #[test]
    fn hidden_subset_ignores_colors_already_pinned_to_a_single_position() {
        // position(1) = {0, 1}, position(2) = {1} (already a singleton). Color 2's
        // position set is a subset of position(1), but color 2 must not be folded into
        // color 1's group on that basis alone, or cell0 gets wrongly narrowed from
        // {0, 1} to just {1}.
        let mut unit = vec![
            ColorSet::singleton(0).add(1),
            ColorSet::singleton(0).add(1).add(2),
            ColorSet::singleton(0),
        ];
        let before = unit.clone();
        assert!(!hidden_subset(&mut unit));
        assert_eq!(unit, before);
    }

    proptest! {
        #[test]
        fn heuristics_never_add_a_candidate(mut unit in consistent_unit(9)) {
            let before = unit.clone();
            apply_cheap(&mut unit);
            apply_expensive(&mut unit);
            for (b, a) in before.iter().zip(unit.iter()) {
                prop_assert!(a.is_subset(*b));
            }
        }

        #[test]
        fn heuristics_are_idempotent_on_a_fixed_point(mut unit in consistent_unit(9)) {
            loop {
                let changed = apply_cheap(&mut unit) | apply_expensive(&mut unit);
                if !changed {
                    break;
                }
            }
            let snapshot = unit.clone();
            apply_cheap(&mut unit);
            apply_expensive(&mut unit);
            prop_assert_eq!(unit, snapshot);
        }
    }
}
