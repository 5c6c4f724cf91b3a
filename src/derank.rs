// Picks the best-ranked child of a sibling group.
//
// Small groups run as a fixed tournament, which keeps comparisons independent
// of each other and lets the CPU overlap them. Other widths fold left to
// right. Either way a right contender only wins when it strictly outranks the
// left one, so ties always resolve to the leftmost child.

use std::ops::Range;

use crate::sift::SiftTarget;

/// Core comparison and slot selection
#[inline(always)]
#[must_use]
fn fight<T: SiftTarget + ?Sized>(t: &T, l: usize, r: usize) -> usize {
    if t.outranks(r, l) { r } else { l }
}

// 0   1
// *   *
//  \ /
//   *
#[inline(always)]
#[must_use]
fn derank_2<T: SiftTarget + ?Sized>(t: &T, f: usize) -> usize {
    fight(t, f, f + 1)
}

// 0   1   2   3
// *   *   *   *
//  \ /     \ /
//   *       *
//    \     /
//       *
#[inline(always)]
#[must_use]
fn derank_4<T: SiftTarget + ?Sized>(t: &T, f: usize) -> usize {
    fight(
        t, //
        fight(t, f, f + 1),
        fight(t, f + 2, f + 3),
    )
}

// 0   1 2   3 4   5 6   7
// *   * *   * *   * *   *
//  \ /   \ /   \ /   \ /
//   *     *     *     *
//    \   /       \   /
//      *           *
//        \        /
//            *
#[inline(always)]
#[must_use]
fn derank_8<T: SiftTarget + ?Sized>(t: &T, f: usize) -> usize {
    fight(
        t,
        fight(
            t, //
            fight(t, f, f + 1),
            fight(t, f + 2, f + 3),
        ),
        fight(
            t, //
            fight(t, f + 4, f + 5),
            fight(t, f + 6, f + 7),
        ),
    )
}

/// Leftmost best-ranked slot scanning left to right.
#[inline(always)]
#[must_use]
pub(crate) fn linear_best<T: SiftTarget + ?Sized>(t: &T, siblings: Range<usize>) -> usize {
    debug_assert!(!siblings.is_empty());
    let mut best = siblings.start;
    for sib in siblings.start + 1..siblings.end {
        if t.outranks(sib, best) {
            best = sib;
        }
    }
    best
}

/// Slot of the best-ranked sibling in a non-empty group.
#[inline(always)]
#[must_use]
pub(crate) fn derank<T: SiftTarget + ?Sized>(t: &T, siblings: Range<usize>) -> usize {
    debug_assert!(!siblings.is_empty(), "Can't pick a child out of none");
    let f = siblings.start;
    match siblings.len() {
        1 => f,
        2 => derank_2(t, f),
        4 => derank_4(t, f),
        8 => derank_8(t, f),
        _ => linear_best(t, siblings),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::Max;
    use crate::order::Min;
    use crate::order::Natural;
    use crate::order::Orientation;

    struct Slots<O> {
        keys: Vec<u8>,
        _o: O,
    }

    impl<O: Orientation> SiftTarget for Slots<O> {
        fn len(&self) -> usize {
            self.keys.len()
        }
        fn outranks(&self, i: usize, j: usize) -> bool {
            O::outranks(&Natural, &self.keys[i], &self.keys[j])
        }
        fn swap(&mut self, i: usize, j: usize) {
            self.keys.swap(i, j);
        }
    }

    fn min_slots(keys: Vec<u8>) -> Slots<Min> {
        Slots { keys, _o: Min }
    }

    #[test]
    fn verify_02() {
        let s = min_slots(vec![0u8, 1u8]);
        assert_eq!(derank(&s, 0..2), linear_best(&s, 0..2));
    }

    #[test]
    fn verify_04() {
        let s = min_slots(vec![0u8, 1u8, 3u8, 2u8]);
        assert_eq!(derank(&s, 0..4), linear_best(&s, 0..4));
    }

    #[test]
    fn verify_05() {
        let s = min_slots(vec![1u8, 0u8, 4u8, 3u8, 2u8]);
        assert_eq!(derank(&s, 0..5), 1);
    }

    #[test]
    fn verify_08() {
        let s = min_slots(vec![1u8, 5u8, 0u8, 4u8, 6u8, 3u8, 7u8, 2u8]);
        assert_eq!(derank(&s, 0..8), linear_best(&s, 0..8));
        assert_eq!(derank(&s, 0..8), 2);
    }

    #[test]
    fn offset_groups() {
        let s = min_slots(vec![9u8, 1u8, 5u8, 0u8, 4u8, 6u8, 3u8, 7u8, 2u8]);
        assert_eq!(derank(&s, 1..9), 3);
        assert_eq!(derank(&s, 4..8), 6);
    }

    #[test]
    fn ties_go_left() {
        let s = min_slots(vec![3u8, 1u8, 2u8, 1u8, 1u8, 5u8, 1u8, 9u8]);
        for range in [0..2, 0..4, 0..8, 1..4, 2..8, 0..7] {
            assert_eq!(derank(&s, range.clone()), linear_best(&s, range.clone()));
        }
        assert_eq!(derank(&s, 0..8), 1);
        assert_eq!(derank(&s, 2..8), 3);
    }

    #[test]
    fn max_orientation_picks_largest() {
        let s = Slots {
            keys: vec![1u8, 5u8, 0u8, 5u8, 6u8, 3u8, 6u8, 2u8],
            _o: Max,
        };
        assert_eq!(derank(&s, 0..8), 4);
        assert_eq!(derank(&s, 0..4), 1);
        assert_eq!(derank(&s, 0..3), 1);
    }
}
