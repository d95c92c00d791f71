use crate::Point;

/// Chebyshev (L∞) distance between two points.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}

/// Lower bound on the cost from `a` to `b` on an unobstructed 8-connected
/// grid where straight steps cost `straight` and diagonal steps cost
/// `diagonal`.
///
/// With `diagonal >= straight` this is the exact octile distance. Cheaper
/// diagonals make zig-zag routes competitive, so the bound falls back to
/// `diagonal` per step along the longer axis.
#[inline]
pub fn octile(a: Point, b: Point, straight: i32, diagonal: i32) -> i32 {
    let dx = (a.x - b.x).abs();
    let dy = (a.y - b.y).abs();
    let (long, short) = (dx.max(dy), dx.min(dy));
    if diagonal < straight {
        return diagonal.saturating_mul(long);
    }
    let diag = diagonal.min(straight.saturating_mul(2));
    straight
        .saturating_mul(long - short)
        .saturating_add(diag.saturating_mul(short))
}
