//! Cycle decomposition.
use crate::error::RangeError;
use crate::perm::Permutation;
use crate::Point;

impl Permutation {
    /// Return the cycle starting at a point.
    ///
    /// Returns a 1-cycle when the point is fixed and an error when the point is out of range.
    pub fn cycle_at(&self, point: Point) -> Result<Cycle, RangeError> {
        self.apply(point)?;
        Ok(Cycle::new(self, point))
    }

    /// Returns an iterator over the cycles of a permutation, in cycle notation.
    ///
    /// Each cycle starts at its smallest point and the cycles are ordered by their starting point.
    /// 1-cycles are left out, except for the 1-cycle of the largest point of the domain. Keeping
    /// that one retains the size of the permutation.
    pub fn cycles(&self) -> Cycles {
        self.decomposition(true)
    }

    /// Returns an iterator over all cycles of a permutation, including every fixed point.
    ///
    /// The points of the produced cycles partition {1, ..., n}.
    pub fn all_cycles(&self) -> Cycles {
        self.decomposition(false)
    }

    fn decomposition(&self, simplify: bool) -> Cycles {
        Cycles {
            perm: self,
            seen: vec![false; self.len()],
            pos: 1,
            simplify,
        }
    }

    /// Decompose this permutation into disjoint cycles.
    ///
    /// With `simplify` this returns the cycles of [`Permutation::cycles`], otherwise those of
    /// [`Permutation::all_cycles`].
    ///
    /// ```
    /// use cyclic::perm;
    ///
    /// let a = perm!((1, 2), (5, 4), (3, 6), (7,), (9,)).unwrap();
    /// assert_eq!(a.decompose(true), vec![vec![1, 2], vec![3, 6], vec![4, 5], vec![9]]);
    /// assert_eq!(
    ///     a.decompose(false),
    ///     vec![vec![1, 2], vec![3, 6], vec![4, 5], vec![7], vec![8], vec![9]],
    /// );
    /// ```
    pub fn decompose(&self, simplify: bool) -> Vec<Vec<Point>> {
        self.decomposition(simplify)
            .map(|cycle| cycle.collect())
            .collect()
    }
}

/// Iterator over the points of a permutation's cycle.
///
/// Yields the starting point first, then its successive images until the cycle closes.
#[derive(Clone)]
pub struct Cycle<'a> {
    perm: &'a Permutation,
    start: Point,
    upcoming: Option<Point>,
}

impl<'a> Cycle<'a> {
    fn new(perm: &'a Permutation, start: Point) -> Self {
        Cycle {
            perm,
            start,
            upcoming: Some(start),
        }
    }

    /// The point this cycle starts at.
    pub fn start(&self) -> Point {
        self.start
    }
}

impl<'a> Iterator for Cycle<'a> {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        let point = self.upcoming?;
        let start = self.start;
        self.upcoming = Some(self.perm.image(point)).filter(|&image| image != start);
        Some(point)
    }
}

/// Iterator over the disjoint cycles of a permutation.
#[derive(Clone)]
pub struct Cycles<'a> {
    perm: &'a Permutation,
    seen: Vec<bool>,
    pos: Point,
    simplify: bool,
}

impl<'a> Iterator for Cycles<'a> {
    type Item = Cycle<'a>;

    fn next(&mut self) -> Option<Cycle<'a>> {
        let last = self.perm.max_point();
        while self.pos <= last {
            let start = self.pos;
            self.pos += 1;

            if self.seen[start as usize - 1] {
                continue;
            }

            let cycle = Cycle::new(self.perm, start);
            for point in cycle.clone() {
                self.seen[point as usize - 1] = true;
            }

            let fixed = self.perm.image(start) == start;
            if !self.simplify || !fixed || start == last {
                return Some(cycle);
            }
        }
        None
    }
}
