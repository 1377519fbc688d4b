//! Comparator tables for the partial sorting networks.
//!
//! Generated data, do not edit by hand. Each entry is a list of `(lo, hi)`
//! slot pairs applied in order; after a compare-exchange the smaller value
//! sits in `lo`.
//!
//! Merge tables index slots `0..k` as the sorted levels and `k..k + n` as the
//! unordered candidates. Worthy tables index 16 unordered candidates and move
//! the `n` smallest into slots `0..n` without ordering them.

/// Ordered list of comparator slot pairs.
pub type Comparators = &'static [(u8, u8)];

/// merge(k, 6) for k in 1..=24, indexed by `k - 1`.
pub const MERGE_N6: [Comparators; 24] = [
    // k = 1
    &[
        (4, 5), (0, 1), (0, 4), (3, 6), (2, 3), (0, 2),
    ],
    // k = 2
    &[
        (2, 4), (3, 5), (6, 7), (1, 5), (0, 4), (0, 3), (2, 6), (6, 7), (0, 6), (1, 2), (1, 3),
        (0, 1),
    ],
    // k = 3
    &[
        (6, 7), (4, 8), (3, 5), (0, 3), (4, 6), (0, 4), (5, 8), (5, 7), (2, 3), (1, 5), (2, 6),
        (1, 4), (2, 4), (1, 2),
    ],
    // k = 4
    &[
        (5, 7), (4, 6), (4, 5), (8, 9), (6, 7), (4, 8), (5, 9), (1, 7), (5, 8), (1, 5), (0, 6),
        (2, 6), (3, 9), (0, 4), (3, 4), (2, 8), (1, 3), (2, 5), (2, 3),
    ],
    // k = 5
    &[
        (7, 10), (6, 9), (6, 8), (5, 7), (8, 10), (7, 9), (9, 10), (7, 8), (5, 6), (1, 7),
        (3, 9), (4, 5), (2, 8), (0, 6), (3, 7), (0, 4), (1, 4), (2, 6), (2, 4), (3, 6), (3, 4),
    ],
    // k = 6
    &[
        (8, 10), (6, 11), (10, 11), (6, 8), (6, 7), (9, 10), (5, 6), (2, 11), (7, 10), (0, 9),
        (7, 9), (1, 8), (3, 9), (4, 10), (0, 5), (5, 7), (2, 7), (4, 8), (1, 5), (3, 4),
        (2, 5), (4, 7), (3, 5), (4, 5),
    ],
    // k = 7
    &[
        (9, 11), (8, 12), (7, 10), (7, 9), (6, 7), (6, 8), (10, 11), (10, 12), (0, 6), (2, 8),
        (3, 12), (9, 10), (1, 9), (3, 9), (4, 10), (2, 6), (4, 6), (8, 11), (6, 8), (3, 6),
        (5, 9), (5, 8), (1, 2), (2, 4), (3, 4), (5, 6),
    ],
    // k = 8
    &[
        (10, 13), (8, 12), (12, 13), (9, 11), (8, 10), (8, 9), (11, 13), (11, 12), (3, 8),
        (0, 11), (0, 3), (9, 10), (1, 9), (10, 12), (10, 11), (6, 10), (6, 9), (2, 13), (2, 6),
        (4, 11), (7, 12), (1, 3), (4, 6), (2, 3), (5, 9), (7, 8), (5, 7), (4, 5), (6, 7),
    ],
    // k = 9
    &[
        (10, 14), (11, 12), (12, 13), (9, 11), (11, 14), (13, 14), (10, 12), (11, 12), (7, 14),
        (12, 13), (9, 10), (0, 9), (8, 9), (10, 11), (11, 12), (3, 10), (5, 12), (6, 11),
        (1, 5), (4, 13), (4, 8), (2, 6), (2, 4), (6, 8), (7, 10), (5, 7), (1, 3), (7, 8),
        (1, 2), (3, 4), (5, 6),
    ],
    // k = 10
    &[
        (13, 14), (10, 15), (10, 12), (14, 15), (11, 13), (12, 13), (13, 15), (12, 14),
        (4, 15), (10, 11), (11, 14), (8, 12), (13, 14), (5, 14), (1, 10), (8, 11), (0, 8),
        (2, 13), (7, 11), (3, 7), (6, 13), (9, 10), (2, 8), (4, 8), (5, 9), (7, 9), (3, 5),
        (4, 5), (6, 8), (0, 1), (2, 3), (6, 7), (8, 9),
    ],
    // k = 11
    &[
        (14, 16), (11, 13), (12, 15), (11, 14), (14, 15), (13, 16), (12, 13), (11, 12),
        (9, 14), (15, 16), (13, 15), (5, 16), (0, 12), (9, 13), (9, 12), (10, 11), (6, 15),
        (0, 10), (8, 12), (7, 13), (4, 8), (1, 9), (5, 9), (3, 7), (7, 9), (2, 10), (6, 10),
        (8, 10), (1, 2), (7, 8), (4, 6), (3, 5), (5, 6), (3, 4), (9, 10),
    ],
    // k = 12
    &[
        (12, 17), (13, 15), (14, 16), (12, 13), (13, 14), (15, 16), (15, 17), (12, 13),
        (1, 13), (16, 17), (0, 15), (6, 17), (10, 15), (11, 12), (14, 16), (3, 11), (10, 14),
        (10, 13), (7, 16), (8, 14), (4, 8), (0, 3), (2, 10), (6, 10), (1, 3), (9, 13), (8, 10),
        (5, 9), (4, 6), (7, 11), (5, 7), (4, 5), (9, 11), (10, 11), (2, 3), (8, 9), (6, 7),
    ],
    // k = 13
    &[
        (14, 16), (15, 18), (14, 15), (16, 18), (13, 17), (15, 16), (13, 14), (14, 16),
        (15, 17), (11, 14), (17, 18), (11, 15), (16, 17), (10, 15), (9, 16), (12, 13), (6, 10),
        (3, 11), (8, 17), (4, 8), (5, 9), (0, 12), (8, 12), (7, 18), (10, 12), (7, 11), (4, 8),
        (9, 11), (1, 5), (5, 7), (2, 6), (6, 8), (1, 3), (7, 8), (5, 6), (11, 12), (2, 4),
        (1, 2), (9, 10), (3, 4),
    ],
    // k = 14
    &[
        (14, 17), (16, 19), (17, 18), (15, 17), (17, 19), (14, 16), (14, 15), (18, 19),
        (8, 19), (16, 17), (0, 14), (13, 14), (8, 13), (12, 15), (1, 8), (17, 18), (12, 16),
        (11, 17), (11, 16), (3, 11), (10, 16), (7, 11), (2, 10), (4, 12), (9, 18), (5, 9),
        (6, 10), (12, 13), (9, 12), (1, 4), (2, 4), (6, 9), (5, 8), (10, 13), (3, 5), (11, 12),
        (12, 13), (10, 11), (7, 8), (4, 5), (2, 3), (6, 7), (8, 9),
    ],
    // k = 15
    &[
        (16, 19), (15, 17), (17, 19), (15, 16), (14, 18), (16, 17), (14, 20), (19, 20),
        (13, 17), (16, 19), (14, 15), (13, 15), (13, 16), (0, 14), (15, 19), (11, 15), (1, 13),
        (11, 13), (3, 11), (9, 20), (7, 9), (7, 11), (6, 14), (10, 19), (2, 10), (10, 14),
        (12, 16), (2, 6), (5, 13), (8, 12), (12, 14), (4, 8), (1, 2), (9, 13), (4, 6), (8, 10),
        (5, 7), (2, 4), (9, 11), (7, 8), (9, 10), (13, 14), (5, 6), (11, 12), (3, 4),
    ],
    // k = 16
    &[
        (16, 18), (19, 21), (18, 21), (19, 20), (16, 17), (16, 19), (17, 20), (15, 16),
        (20, 21), (17, 19), (18, 19), (19, 20), (17, 18), (13, 18), (7, 13), (1, 15), (2, 19),
        (14, 17), (0, 14), (8, 14), (9, 15), (11, 20), (12, 19), (12, 15), (10, 21), (4, 10),
        (5, 11), (11, 14), (2, 8), (4, 8), (10, 13), (6, 12), (14, 15), (13, 14), (6, 8),
        (3, 7), (10, 11), (14, 15), (5, 9), (3, 5), (11, 12), (2, 3), (7, 9), (8, 9), (0, 1),
        (6, 7), (10, 11), (4, 5),
    ],
    // k = 17
    &[
        (17, 22), (19, 21), (21, 22), (18, 20), (17, 19), (17, 18), (19, 21), (16, 17),
        (18, 21), (20, 22), (19, 20), (15, 22), (18, 19), (14, 19), (20, 21), (10, 14),
        (2, 10), (0, 16), (13, 20), (1, 13), (4, 21), (11, 18), (3, 11), (1, 3), (8, 16),
        (12, 21), (2, 8), (12, 16), (7, 15), (9, 13), (5, 9), (15, 18), (13, 15), (6, 10),
        (4, 8), (3, 4), (10, 12), (14, 16), (15, 16), (7, 11), (5, 7), (1, 2), (6, 8), (5, 6),
        (9, 11), (11, 12), (13, 14), (7, 8), (9, 10),
    ],
    // k = 18
    &[
        (19, 20), (18, 23), (20, 22), (18, 21), (21, 23), (19, 20), (18, 19), (20, 21),
        (19, 20), (22, 23), (20, 22), (21, 22), (16, 19), (8, 16), (0, 8), (2, 21), (13, 22),
        (1, 18), (12, 23), (11, 20), (3, 11), (9, 18), (3, 9), (4, 12), (2, 8), (4, 8),
        (10, 21), (5, 13), (5, 9), (7, 11), (0, 1), (17, 18), (6, 10), (12, 16), (7, 9),
        (10, 12), (6, 8), (14, 21), (13, 17), (15, 20), (8, 9), (2, 3), (11, 13), (10, 11),
        (6, 7), (12, 13), (15, 17), (4, 5), (14, 16), (14, 15), (16, 17),
    ],
    // k = 19
    &[
        (19, 20), (20, 24), (21, 23), (22, 23), (23, 24), (20, 22), (19, 21), (21, 22),
        (19, 20), (20, 21), (21, 23), (17, 20), (1, 17), (13, 24), (18, 19), (0, 21), (22, 23),
        (16, 21), (13, 17), (15, 22), (3, 15), (9, 17), (8, 16), (12, 16), (4, 8), (2, 18),
        (7, 15), (11, 15), (10, 18), (6, 23), (6, 10), (15, 17), (5, 13), (14, 23), (14, 18),
        (16, 18), (0, 2), (4, 6), (9, 13), (7, 9), (3, 5), (12, 14), (3, 4), (11, 13), (8, 10),
        (9, 10), (11, 12), (13, 14), (5, 6), (7, 8), (15, 16), (17, 18), (1, 2),
    ],
    // k = 20
    &[
        (19, 20), (23, 25), (21, 24), (19, 22), (24, 25), (22, 24), (24, 25), (19, 21),
        (21, 22), (19, 23), (22, 23), (21, 22), (23, 24), (11, 21), (14, 25), (12, 23),
        (14, 21), (7, 14), (9, 12), (0, 19), (1, 11), (3, 11), (13, 22), (13, 19), (2, 13),
        (10, 24), (6, 10), (17, 22), (6, 13), (5, 9), (7, 11), (12, 19), (8, 12), (18, 21),
        (10, 13), (14, 19), (12, 13), (15, 24), (15, 19), (9, 11), (3, 5), (16, 23), (4, 8),
        (8, 10), (17, 19), (9, 10), (4, 6), (16, 18), (16, 17), (5, 7), (5, 6), (13, 14),
        (11, 12), (18, 19), (7, 8), (3, 4), (1, 2),
    ],
    // k = 21
    &[
        (20, 24), (21, 23), (22, 25), (21, 22), (23, 25), (20, 26), (0, 20), (0, 21), (20, 22),
        (25, 26), (23, 25), (22, 25), (1, 23), (20, 21), (1, 20), (12, 20), (16, 25), (2, 21),
        (22, 23), (4, 12), (21, 22), (14, 22), (11, 21), (7, 26), (15, 26), (16, 20), (6, 14),
        (2, 4), (8, 16), (19, 21), (3, 11), (15, 19), (10, 14), (8, 12), (6, 8), (13, 23),
        (14, 16), (7, 11), (10, 12), (9, 13), (5, 9), (5, 7), (18, 22), (13, 15), (18, 20),
        (5, 6), (17, 23), (17, 19), (9, 11), (19, 20), (9, 10), (11, 12), (13, 14), (3, 4),
        (17, 18), (7, 8), (15, 16),
    ],
    // k = 22
    &[
        (22, 24), (21, 22), (23, 25), (26, 27), (24, 27), (21, 23), (21, 26), (20, 23),
        (25, 27), (20, 26), (10, 27), (24, 25), (24, 26), (20, 24), (25, 26), (17, 26),
        (0, 20), (14, 25), (5, 17), (14, 20), (9, 21), (6, 10), (11, 24), (12, 20), (16, 27),
        (2, 14), (13, 21), (17, 21), (16, 20), (8, 12), (6, 14), (4, 8), (19, 24), (10, 14),
        (18, 25), (1, 9), (13, 17), (15, 19), (15, 17), (8, 10), (3, 11), (19, 21), (7, 11),
        (3, 9), (5, 9), (11, 13), (18, 20), (7, 9), (10, 11), (8, 9), (16, 17), (0, 1), (4, 6),
        (6, 7), (20, 21), (18, 19), (12, 14), (12, 13), (2, 3), (4, 5), (14, 15),
    ],
    // k = 23
    &[
        (23, 27), (24, 26), (23, 24), (25, 28), (26, 28), (26, 27), (23, 25), (24, 25),
        (24, 26), (27, 28), (25, 27), (22, 23), (25, 26), (15, 26), (13, 28), (18, 25),
        (21, 24), (1, 21), (8, 22), (20, 27), (6, 18), (20, 25), (10, 18), (13, 21), (2, 6),
        (4, 20), (12, 20), (11, 15), (14, 18), (7, 11), (0, 8), (5, 13), (15, 21), (3, 7),
        (17, 28), (9, 15), (9, 13), (7, 9), (17, 21), (1, 8), (4, 8), (6, 8), (16, 22),
        (20, 22), (18, 20), (19, 26), (19, 21), (7, 8), (12, 16), (10, 12), (3, 5), (2, 4),
        (3, 4), (5, 6), (19, 20), (14, 16), (11, 13), (21, 22), (17, 18), (15, 16), (11, 12),
        (9, 10), (13, 14),
    ],
    // k = 24
    &[
        (27, 28), (24, 26), (25, 26), (24, 27), (28, 29), (25, 28), (24, 25), (26, 29),
        (22, 27), (0, 24), (26, 28), (22, 28), (23, 24), (22, 26), (15, 23), (22, 25),
        (17, 25), (3, 26), (7, 26), (20, 26), (11, 28), (19, 28), (21, 25), (14, 22), (5, 29),
        (1, 14), (10, 17), (4, 11), (3, 14), (12, 20), (18, 29), (8, 15), (17, 18), (19, 23),
        (11, 15), (16, 20), (9, 14), (18, 22), (2, 10), (13, 17), (12, 14), (4, 8), (20, 22),
        (2, 4), (5, 9), (21, 23), (6, 10), (13, 15), (17, 19), (7, 9), (3, 4), (14, 15),
        (12, 13), (6, 8), (22, 23), (20, 21), (16, 18), (18, 19), (10, 11), (16, 17), (7, 8),
        (13, 14), (11, 12), (5, 6), (9, 10), (1, 2),
    ],
];

/// merge(k, 8) for k in 1..=24, indexed by `k - 1`.
pub const MERGE_N8: [Comparators; 24] = [
    // k = 1
    &[
        (2, 3), (1, 6), (1, 8), (4, 5), (1, 7), (0, 4), (0, 2), (0, 1),
    ],
    // k = 2
    &[
        (2, 3), (8, 9), (4, 6), (7, 8), (2, 6), (4, 5), (2, 7), (0, 3), (7, 8), (1, 5), (0, 4),
        (0, 9), (0, 7), (1, 2), (1, 4), (0, 1),
    ],
    // k = 3
    &[
        (3, 4), (6, 9), (5, 10), (6, 8), (3, 7), (0, 6), (4, 9), (3, 5), (0, 3), (4, 10),
        (7, 8), (1, 4), (5, 6), (2, 7), (1, 2), (3, 5), (2, 3), (1, 5), (1, 2),
    ],
    // k = 4
    &[
        (8, 10), (4, 9), (4, 7), (3, 11), (3, 4), (5, 6), (5, 8), (5, 9), (6, 10), (0, 10),
        (2, 4), (1, 9), (6, 8), (0, 5), (7, 8), (1, 7), (1, 6), (1, 2), (3, 5), (5, 7), (5, 6),
        (0, 3), (2, 5), (1, 3), (2, 3),
    ],
    // k = 5
    &[
        (7, 8), (10, 12), (6, 11), (11, 12), (5, 9), (0, 10), (8, 9), (6, 7), (5, 6), (8, 11),
        (9, 11), (7, 10), (0, 5), (9, 12), (5, 7), (6, 8), (1, 6), (2, 8), (6, 9), (4, 5),
        (2, 7), (3, 10), (3, 6), (1, 4), (2, 4), (3, 7), (3, 4),
    ],
    // k = 6
    &[
        (12, 13), (8, 12), (6, 11), (7, 10), (7, 9), (10, 12), (7, 8), (3, 12), (9, 13),
        (4, 13), (10, 11), (1, 10), (0, 6), (5, 7), (0, 5), (2, 8), (6, 9), (3, 9), (1, 2),
        (4, 11), (4, 8), (3, 10), (3, 4), (5, 6), (1, 5), (2, 6), (6, 10), (4, 6), (2, 5),
        (3, 5), (4, 5),
    ],
    // k = 7
    &[
        (9, 11), (7, 10), (8, 13), (12, 14), (13, 14), (10, 11), (9, 12), (7, 8), (8, 12),
        (7, 9), (11, 14), (8, 9), (1, 8), (3, 13), (2, 9), (6, 11), (5, 10), (0, 7), (6, 8),
        (3, 5), (9, 13), (5, 9), (3, 7), (4, 12), (1, 3), (5, 6), (4, 8), (4, 7), (2, 4),
        (2, 3), (6, 7), (4, 5), (3, 4), (5, 6),
    ],
    // k = 8
    &[
        (13, 14), (10, 12), (8, 15), (10, 13), (9, 11), (8, 9), (11, 15), (8, 10), (9, 13),
        (0, 8), (5, 13), (12, 14), (1, 10), (6, 9), (14, 15), (11, 12), (4, 14), (6, 11),
        (2, 12), (7, 8), (3, 11), (4, 10), (7, 15), (1, 7), (5, 12), (2, 6), (3, 7), (4, 7),
        (5, 10), (1, 2), (6, 10), (5, 11), (5, 6), (4, 5), (2, 3), (6, 7), (5, 6), (3, 4),
    ],
    // k = 9
    &[
        (10, 11), (9, 13), (11, 13), (12, 15), (14, 16), (15, 16), (11, 15), (9, 10), (13, 16),
        (12, 14), (13, 15), (9, 12), (6, 13), (10, 14), (0, 9), (7, 16), (2, 11), (5, 14),
        (3, 15), (5, 11), (2, 9), (8, 9), (10, 12), (1, 10), (4, 12), (6, 10), (3, 10), (4, 8),
        (6, 8), (3, 5), (5, 8), (1, 2), (7, 12), (7, 11), (3, 6), (5, 6), (2, 4), (3, 4),
        (7, 10), (7, 8),
    ],
    // k = 10
    &[
        (10, 11), (13, 14), (16, 17), (12, 15), (11, 17), (14, 15), (12, 16), (8, 11), (8, 14),
        (10, 13), (13, 16), (15, 17), (14, 16), (10, 12), (8, 12), (0, 10), (12, 13), (14, 15),
        (9, 10), (2, 17), (8, 12), (8, 9), (15, 16), (4, 15), (7, 12), (13, 14), (2, 13),
        (5, 14), (2, 9), (3, 16), (4, 9), (3, 7), (6, 13), (1, 8), (3, 8), (5, 8), (7, 8),
        (2, 3), (4, 5), (6, 9), (8, 9), (6, 7),
    ],
    // k = 11
    &[
        (12, 16), (14, 17), (11, 18), (12, 14), (13, 15), (11, 13), (17, 18), (15, 16),
        (15, 17), (13, 14), (13, 15), (16, 18), (3, 18), (9, 13), (16, 17), (14, 16), (11, 12),
        (12, 15), (14, 15), (0, 12), (10, 11), (7, 14), (6, 15), (3, 7), (9, 12), (8, 12),
        (1, 9), (16, 17), (2, 10), (4, 17), (4, 8), (3, 9), (5, 16), (6, 10), (5, 9), (0, 2),
        (4, 6), (3, 4), (8, 10), (5, 6), (7, 9), (7, 8), (9, 10), (1, 2),
    ],
    // k = 12
    &[
        (13, 19), (14, 15), (12, 18), (11, 14), (10, 18), (11, 12), (10, 19), (16, 17),
        (13, 16), (11, 13), (15, 17), (10, 15), (17, 19), (12, 16), (12, 13), (15, 17),
        (10, 13), (10, 12), (9, 12), (8, 13), (15, 16), (8, 15), (0, 11), (4, 19), (10, 11),
        (1, 10), (16, 17), (7, 15), (2, 11), (6, 16), (9, 10), (3, 9), (2, 8), (4, 8), (5, 17),
        (6, 11), (7, 9), (5, 10), (4, 6), (9, 10), (5, 7), (8, 11), (8, 9), (6, 7), (4, 5),
        (10, 11), (2, 3),
    ],
    // k = 13
    &[
        (13, 18), (14, 16), (17, 19), (16, 18), (15, 20), (14, 17), (13, 15), (15, 17),
        (19, 20), (18, 20), (17, 18), (16, 19), (18, 19), (13, 14), (17, 18), (11, 16),
        (7, 13), (13, 18), (5, 20), (11, 15), (14, 15), (15, 17), (0, 7), (11, 14), (2, 14),
        (3, 11), (6, 19), (8, 17), (4, 8), (1, 15), (12, 13), (9, 15), (5, 9), (1, 3),
        (10, 14), (6, 10), (11, 12), (8, 11), (4, 7), (10, 11), (5, 8), (9, 12), (6, 7),
        (11, 12), (5, 6), (9, 10), (7, 8), (2, 4), (3, 4), (1, 2),
    ],
    // k = 14
    &[
        (14, 16), (17, 18), (19, 21), (14, 17), (15, 20), (20, 21), (10, 21), (16, 18),
        (12, 16), (10, 18), (12, 20), (15, 19), (17, 19), (12, 17), (10, 19), (14, 15),
        (11, 17), (10, 20), (19, 20), (4, 19), (13, 14), (12, 15), (11, 15), (10, 15), (6, 18),
        (0, 13), (12, 13), (2, 10), (1, 12), (9, 15), (5, 12), (9, 12), (7, 20), (5, 9),
        (3, 11), (7, 11), (8, 19), (2, 13), (3, 5), (2, 3), (11, 12), (6, 10), (8, 13), (4, 8),
        (7, 9), (6, 8), (10, 13), (8, 9), (12, 13), (6, 7), (4, 5), (10, 11),
    ],
    // k = 15
    &[
        (18, 19), (21, 22), (16, 17), (18, 21), (16, 21), (14, 21), (19, 22), (15, 20),
        (17, 20), (16, 18), (17, 19), (0, 15), (20, 22), (17, 18), (14, 15), (19, 20),
        (15, 20), (15, 19), (14, 18), (15, 18), (0, 16), (8, 20), (14, 16), (16, 17), (13, 16),
        (10, 18), (2, 10), (4, 17), (1, 13), (9, 19), (11, 15), (6, 14), (3, 11), (9, 13),
        (12, 17), (7, 22), (7, 11), (5, 9), (10, 14), (9, 13), (2, 6), (8, 12), (3, 5),
        (8, 10), (11, 13), (12, 14), (7, 9), (7, 8), (4, 6), (11, 12), (5, 6), (9, 10), (1, 2),
        (3, 4), (13, 14),
    ],
    // k = 16
    &[
        (16, 23), (18, 22), (17, 20), (22, 23), (19, 21), (16, 18), (14, 22), (17, 19),
        (20, 21), (21, 23), (18, 20), (14, 19), (16, 17), (15, 20), (15, 21), (15, 19),
        (19, 21), (4, 23), (17, 18), (14, 18), (5, 21), (14, 17), (8, 23), (13, 17), (0, 16),
        (15, 18), (15, 16), (14, 15), (2, 15), (6, 15), (11, 18), (8, 16), (1, 14), (4, 8),
        (9, 21), (12, 16), (10, 19), (6, 10), (7, 11), (10, 15), (13, 14), (9, 14), (11, 14),
        (3, 13), (12, 15), (4, 6), (8, 10), (7, 13), (5, 9), (9, 13), (5, 7), (11, 13),
        (10, 11), (2, 3), (4, 5), (12, 13), (6, 7), (14, 15), (8, 9),
    ],
    // k = 17
    &[
        (16, 22), (19, 21), (16, 17), (18, 24), (20, 23), (21, 23), (16, 18), (17, 24),
        (18, 21), (19, 20), (23, 24), (17, 20), (13, 23), (16, 19), (17, 18), (20, 21),
        (13, 20), (20, 21), (7, 20), (18, 19), (1, 24), (13, 19), (17, 18), (0, 16), (12, 19),
        (9, 24), (5, 13), (9, 13), (2, 18), (3, 17), (4, 12), (4, 16), (8, 16), (14, 18),
        (6, 21), (10, 14), (2, 4), (1, 3), (7, 17), (11, 17), (12, 16), (15, 20), (6, 10),
        (3, 5), (9, 11), (5, 7), (6, 8), (10, 12), (11, 12), (15, 17), (14, 21), (14, 16),
        (13, 15), (9, 10), (5, 6), (3, 4), (7, 8), (1, 2), (13, 14), (15, 16),
    ],
    // k = 18
    &[
        (17, 23), (21, 22), (17, 19), (24, 25), (18, 20), (18, 24), (17, 21), (19, 22),
        (19, 21), (16, 25), (16, 20), (16, 24), (15, 21), (15, 24), (17, 18), (20, 22),
        (1, 17), (9, 17), (16, 19), (14, 20), (14, 19), (16, 18), (15, 18), (14, 16), (19, 24),
        (16, 18), (2, 16), (3, 15), (0, 14), (13, 18), (15, 24), (8, 16), (3, 9), (13, 17),
        (11, 24), (10, 22), (5, 13), (4, 19), (6, 14), (4, 6), (2, 4), (10, 19), (12, 19),
        (0, 1), (10, 14), (12, 16), (12, 14), (5, 9), (7, 15), (4, 5), (7, 9), (11, 15),
        (8, 10), (6, 8), (8, 9), (15, 17), (11, 13), (16, 17), (14, 15), (10, 11), (6, 7),
        (2, 3), (12, 13),
    ],
    // k = 19
    &[
        (20, 23), (21, 25), (17, 25), (17, 23), (22, 24), (19, 26), (24, 26), (19, 20),
        (15, 23), (17, 24), (21, 22), (20, 22), (15, 26), (15, 24), (19, 21), (22, 24),
        (17, 20), (5, 26), (11, 26), (15, 22), (20, 21), (0, 19), (15, 21), (1, 15), (17, 19),
        (19, 20), (11, 19), (1, 11), (5, 15), (8, 20), (12, 24), (13, 22), (7, 13), (3, 11),
        (2, 17), (14, 21), (14, 17), (7, 11), (4, 12), (9, 15), (18, 19), (6, 14), (10, 17),
        (4, 8), (16, 20), (13, 15), (4, 6), (12, 16), (10, 14), (8, 10), (13, 18), (5, 7),
        (12, 14), (1, 2), (15, 18), (16, 17), (15, 16), (13, 14), (9, 11), (7, 8), (9, 10),
        (5, 6), (11, 12), (3, 4), (17, 18),
    ],
    // k = 20
    &[
        (19, 21), (22, 25), (20, 24), (19, 23), (26, 27), (24, 25), (19, 26), (20, 22),
        (19, 20), (23, 27), (22, 26), (20, 22), (23, 24), (22, 23), (25, 27), (20, 22),
        (24, 25), (14, 25), (4, 27), (24, 26), (3, 19), (14, 26), (9, 22), (23, 24), (10, 20),
        (1, 9), (0, 10), (11, 19), (5, 26), (8, 23), (7, 24), (8, 10), (14, 20), (16, 23),
        (17, 22), (2, 8), (12, 27), (6, 14), (12, 16), (12, 14), (15, 24), (15, 19), (6, 8),
        (18, 20), (7, 11), (1, 3), (16, 18), (5, 9), (9, 11), (5, 7), (13, 26), (13, 17),
        (4, 10), (13, 15), (4, 6), (12, 13), (2, 3), (6, 7), (17, 19), (0, 1), (18, 19),
        (8, 10), (16, 17), (14, 15), (10, 11), (4, 5), (8, 9),
    ],
    // k = 21
    &[
        (23, 28), (21, 25), (22, 27), (25, 28), (24, 26), (26, 27), (21, 23), (27, 28),
        (5, 28), (23, 26), (22, 24), (24, 25), (23, 24), (21, 22), (19, 25), (19, 26),
        (22, 23), (19, 27), (1, 22), (23, 24), (10, 23), (19, 24), (19, 22), (0, 21), (26, 27),
        (6, 27), (7, 26), (14, 27), (8, 21), (16, 24), (4, 16), (2, 10), (3, 19), (12, 21),
        (13, 28), (20, 21), (11, 19), (7, 11), (4, 8), (12, 16), (9, 22), (6, 10), (6, 8),
        (18, 23), (14, 18), (17, 22), (15, 26), (5, 9), (16, 20), (13, 17), (15, 19), (5, 7),
        (7, 8), (9, 11), (17, 19), (18, 20), (1, 4), (14, 16), (13, 15), (2, 4), (5, 6),
        (10, 12), (15, 16), (9, 10), (13, 14), (19, 20), (11, 12), (3, 4), (17, 18),
    ],
    // k = 22
    &[
        (21, 22), (21, 25), (28, 29), (23, 26), (24, 27), (25, 27), (24, 28), (21, 23),
        (23, 28), (21, 24), (1, 21), (26, 29), (25, 26), (23, 24), (23, 25), (24, 25), (5, 24),
        (27, 29), (19, 24), (26, 28), (27, 28), (4, 23), (14, 29), (26, 27), (8, 27), (8, 23),
        (12, 23), (18, 26), (17, 28), (6, 14), (16, 27), (0, 8), (18, 25), (15, 25), (17, 21),
        (13, 19), (21, 25), (19, 21), (2, 18), (6, 18), (9, 19), (20, 23), (16, 20), (10, 18),
        (11, 17), (15, 17), (17, 19), (9, 13), (14, 18), (7, 15), (0, 4), (3, 11), (14, 16),
        (7, 11), (10, 12), (2, 4), (9, 11), (3, 5), (18, 20), (16, 17), (13, 15), (5, 7),
        (4, 5), (0, 1), (12, 13), (2, 3), (10, 11), (20, 21), (6, 8), (18, 19), (6, 7),
        (14, 15), (8, 9),
    ],
    // k = 23
    &[
        (25, 26), (23, 29), (26, 29), (24, 30), (27, 28), (28, 30), (23, 25), (25, 28),
        (24, 27), (23, 24), (29, 30), (19, 29), (26, 27), (8, 23), (14, 23), (24, 25),
        (27, 28), (19, 27), (27, 28), (25, 26), (13, 27), (24, 25), (7, 30), (9, 24), (1, 9),
        (22, 23), (17, 27), (21, 24), (20, 25), (19, 26), (18, 20), (11, 19), (3, 11), (7, 11),
        (0, 8), (10, 18), (4, 26), (6, 28), (20, 26), (12, 20), (4, 8), (3, 9), (5, 13),
        (2, 10), (15, 30), (16, 28), (16, 22), (16, 18), (6, 10), (2, 4), (12, 14), (20, 22),
        (10, 12), (15, 19), (5, 9), (13, 21), (18, 20), (11, 13), (6, 8), (15, 21), (3, 4),
        (7, 9), (7, 8), (17, 21), (14, 16), (15, 16), (1, 2), (13, 14), (17, 18), (19, 21),
        (9, 10), (19, 20), (11, 12), (5, 6), (21, 22),
    ],
    // k = 24
    &[
        (29, 31), (25, 28), (25, 29), (22, 29), (26, 27), (27, 28), (24, 30), (30, 31),
        (27, 30), (24, 26), (24, 25), (22, 26), (22, 27), (15, 24), (22, 25), (28, 31),
        (26, 28), (1, 22), (9, 22), (25, 27), (28, 30), (26, 28), (26, 27), (19, 27), (8, 15),
        (10, 25), (18, 26), (7, 31), (4, 19), (6, 30), (14, 30), (17, 25), (16, 22), (0, 8),
        (21, 30), (20, 28), (3, 18), (11, 18), (22, 31), (20, 26), (5, 20), (19, 22), (2, 10),
        (23, 24), (21, 25), (20, 21), (12, 19), (3, 9), (6, 10), (12, 15), (10, 12), (13, 20),
        (13, 16), (22, 23), (21, 23), (18, 22), (7, 11), (14, 17), (4, 8), (2, 4), (17, 19),
        (20, 22), (5, 9), (3, 4), (11, 13), (6, 8), (7, 9), (1, 2), (16, 18), (9, 10),
        (21, 22), (14, 15), (5, 6), (11, 12), (13, 14), (15, 16), (7, 8), (19, 20), (17, 18),
    ],
];

/// Selects the 6 smallest of 16 candidates into slots `0..6`.
pub const WORTHY_16_6: Comparators = &[
    (5, 6), (12, 14), (0, 7), (2, 3), (10, 15), (8, 13), (9, 12), (1, 11), (1, 8), (0, 2),
    (3, 7), (2, 12), (6, 13), (6, 10), (2, 6), (14, 15), (7, 10), (6, 8), (4, 7), (4, 11),
    (0, 9), (5, 6), (4, 9), (7, 12), (3, 14), (3, 9), (6, 9), (2, 4), (0, 1), (7, 15),
    (3, 5), (1, 6), (13, 14), (1, 4), (6, 7), (5, 6), (6, 13), (6, 11), (6, 8), (5, 6),
    (4, 6),
];

/// Selects the 8 smallest of 16 candidates into slots `0..8`.
pub const WORTHY_16_8: Comparators = &[
    (5, 13), (6, 9), (1, 10), (3, 7), (8, 14), (5, 11), (2, 4), (9, 13), (1, 2), (3, 5),
    (5, 14), (2, 9), (0, 15), (10, 14), (7, 15), (0, 2), (7, 10), (6, 8), (4, 9), (12, 13),
    (2, 5), (8, 12), (3, 6), (9, 14), (0, 6), (4, 6), (1, 2), (5, 6), (10, 13), (9, 15),
    (6, 12), (6, 9), (4, 7), (2, 7), (7, 10), (7, 9), (2, 8), (5, 6), (5, 7), (7, 11),
    (6, 10), (6, 8), (6, 11), (7, 8),
];
