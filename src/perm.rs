//! Permutations of {1, ..., n}.
use std::cmp::max;
use std::hash::{Hash, Hasher};

use log::trace;

use crate::action::LeftAction;
use crate::error::{ConstructionError, RangeError};
use crate::Point;

/// A permutation of {1, ..., n}.
///
/// A permutation rearranges the points {1, ..., n}. It is a bijection from this set to itself. The
/// number n is the size of the permutation, returned by [`Permutation::len`]. It is the largest
/// point mentioned when the permutation was built, points not moved by any cycle are fixed points
/// but still belong to the domain.
///
/// Internally a permutation is stored as a lookup table containing the images of 1, ..., n.
///
/// Two permutations compare equal when they have the same cycle notation (see
/// [`Permutation::cycles`]). This means that permutations of different size can be equal as long
/// as they only differ in fixed points that the cycle notation omits.
#[derive(Clone)]
pub struct Permutation {
    // lookup[i] is the image of the point i + 1
    lookup: Box<[Point]>,
}

impl Permutation {
    /// Build the composition of a sequence of cycles.
    ///
    /// Each cycle maps each of its points to the next one, and the last point to the first one.
    /// The cycles are applied right to left, so for `[a, b]` the cycle `b` is applied first. The
    /// cycles don't have to be disjoint.
    ///
    /// The size of the result is the largest point in any of the cycles.
    pub fn from_cycles<C>(cycles: &[C]) -> Result<Permutation, ConstructionError>
    where
        C: AsRef<[Point]>,
    {
        if cycles.is_empty() {
            return Err(ConstructionError::NoCycles);
        }

        let mut size = 0;
        let mut seen = vec![];

        for (index, cycle) in cycles.iter().enumerate() {
            let cycle = cycle.as_ref();
            let &cycle_max = cycle
                .iter()
                .max()
                .ok_or(ConstructionError::EmptyCycle { index })?;

            seen.clear();
            seen.resize(cycle_max as usize + 1, false);
            for &point in cycle {
                if point == 0 {
                    return Err(ConstructionError::ZeroPoint { index });
                }
                if seen[point as usize] {
                    return Err(ConstructionError::RepeatedPoint { index, point });
                }
                seen[point as usize] = true;
            }

            size = max(size, cycle_max);
        }

        trace!(
            "building permutation of size {} from {} cycles",
            size,
            cycles.len()
        );

        Ok(Self::compose_cycles(size, cycles))
    }

    /// Composition of already validated cycles on the points {1, ..., size}.
    pub(crate) fn compose_cycles<C>(size: Point, cycles: &[C]) -> Permutation
    where
        C: AsRef<[Point]>,
    {
        let lookup = (1..=size)
            .map(|point| {
                cycles.iter().rev().fold(point, |point, cycle| {
                    cycle_image(cycle.as_ref(), point).unwrap_or(point)
                })
            })
            .collect();

        Permutation { lookup }
    }

    /// The identity permutation on {1, ..., size}.
    pub fn identity(size: Point) -> Result<Permutation, ConstructionError> {
        if size == 0 {
            return Err(ConstructionError::NoCycles);
        }
        Ok(Self::identity_unchecked(size))
    }

    pub(crate) fn identity_unchecked(size: Point) -> Permutation {
        Permutation {
            lookup: (1..=size).collect(),
        }
    }

    /// Create a permutation from a vector containing the images of 1, ..., n.
    ///
    /// Returns None if the vector is empty or does not correspond to a permutation of 1, ..., n.
    pub fn from_images(images: Vec<Point>) -> Option<Permutation> {
        if images.is_empty() || images.len() > Point::MAX as usize {
            return None;
        }

        let mut seen = vec![false; images.len()];

        for &image in images.iter() {
            let index = (image as usize).checked_sub(1)?;
            if index >= images.len() || seen[index] {
                return None;
            }
            seen[index] = true;
        }

        Some(Permutation {
            lookup: images.into_boxed_slice(),
        })
    }

    /// Apply the permutation to a point.
    ///
    /// Fails when the point is not in {1, ..., n}.
    pub fn apply(&self, point: Point) -> Result<Point, RangeError> {
        point
            .checked_sub(1)
            .and_then(|index| self.lookup.get(index as usize))
            .copied()
            .ok_or(RangeError {
                point,
                size: self.len(),
            })
    }

    /// Image of a point known to be in the domain.
    pub(crate) fn image(&self, point: Point) -> Point {
        self.lookup[point as usize - 1]
    }

    /// The size n of this permutation.
    pub fn len(&self) -> usize {
        self.lookup.len()
    }

    /// Always false, a permutation acts on at least one point.
    pub fn is_empty(&self) -> bool {
        self.lookup.is_empty()
    }

    /// The images of 1, ..., n.
    pub fn images(&self) -> &[Point] {
        &self.lookup
    }

    /// The largest point of the domain.
    pub(crate) fn max_point(&self) -> Point {
        self.lookup.len() as Point
    }
}

/// Image of a point under a single cycle, None if the cycle doesn't contain the point.
fn cycle_image(cycle: &[Point], point: Point) -> Option<Point> {
    cycle
        .iter()
        .position(|&p| p == point)
        .map(|i| cycle[(i + 1) % cycle.len()])
}

/// Application of a permutation to a point.
impl LeftAction<Point> for Permutation {
    type Output = Result<Point, RangeError>;

    fn left_apply(&self, point: Point) -> Result<Point, RangeError> {
        self.apply(point)
    }
}

impl PartialEq for Permutation {
    fn eq(&self, other: &Permutation) -> bool {
        let mut cycles = self.cycles();
        let mut other_cycles = other.cycles();
        loop {
            match (cycles.next(), other_cycles.next()) {
                (None, None) => return true,
                (Some(cycle), Some(other_cycle)) => {
                    if !cycle.eq(other_cycle) {
                        return false;
                    }
                }
                _ => return false,
            }
        }
    }
}

impl Eq for Permutation {}

impl Hash for Permutation {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for cycle in self.cycles() {
            state.write_usize(cycle.clone().count());
            for point in cycle {
                point.hash(state);
            }
        }
    }
}
