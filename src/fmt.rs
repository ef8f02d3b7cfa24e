//! Cycle notation and reconstruction code.
use std::fmt;

use crate::cycles::Cycle;
use crate::perm::Permutation;

impl Permutation {
    /// Return the code needed to build this permutation.
    ///
    /// This is an invocation of the [`perm!`][crate::perm] macro, listing the cycles of
    /// [`Permutation::cycles`] as tuples. The same text is also accepted by
    /// [`str::parse`](std::str::FromStr).
    ///
    /// ```
    /// use cyclic::perm;
    ///
    /// let a = perm!((1, 2), (5, 4, 3, 7)).unwrap();
    /// assert_eq!(a.to_code(), "perm!((1, 2), (3, 7, 5, 4))");
    /// ```
    pub fn to_code(&self) -> String {
        format!("{:?}", self)
    }
}

/// Cycle notation, `(1 2)(3 7 5 4)`.
impl fmt::Display for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for cycle in self.cycles() {
            fmt::Display::fmt(&cycle, f)?;
        }
        Ok(())
    }
}

/// Reconstruction code, `perm!((1, 2), (3, 7, 5, 4))`.
impl fmt::Debug for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("perm!(")?;
        for (i, cycle) in self.cycles().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write_tuple(cycle, f)?;
        }
        f.write_str(")")
    }
}

/// Write the points of a cycle in parentheses, returning how many were written.
fn write_points(cycle: Cycle, sep: &str, f: &mut fmt::Formatter) -> Result<usize, fmt::Error> {
    f.write_str("(")?;
    let mut written = 0;
    for point in cycle {
        if written > 0 {
            f.write_str(sep)?;
        }
        write!(f, "{}", point)?;
        written += 1;
    }
    Ok(written)
}

fn write_tuple(cycle: Cycle, f: &mut fmt::Formatter) -> fmt::Result {
    // one element tuples need a trailing comma
    match write_points(cycle, ", ", f)? {
        1 => f.write_str(",)"),
        _ => f.write_str(")"),
    }
}

/// The cycle in cycle notation, `(4 1 2)`.
impl<'a> fmt::Display for Cycle<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_points(self.clone(), " ", f)?;
        f.write_str(")")
    }
}

impl<'a> fmt::Debug for Cycle<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use crate::perm;
    use crate::Permutation;

    #[test]
    fn fmt_cycle_notation() {
        assert_eq!(
            perm!((1, 2), (5, 4, 3, 7)).unwrap().to_string(),
            "(1 2)(3 7 5 4)"
        );
        assert_eq!(perm!((1, 2, 4)).unwrap().to_string(), "(1 2 4)");
        assert_eq!(Permutation::identity(3).unwrap().to_string(), "(3)");
    }

    #[test]
    fn fmt_cycles() {
        let a = perm!((1, 2, 4)).unwrap();
        assert_eq!(format!("{}", a.cycle_at(4).unwrap()), "(4 1 2)");
        assert_eq!(format!("{:?}", a.cycle_at(3).unwrap()), "(3)");
        assert_eq!(a.cycle_at(1).unwrap().to_string(), "(1 2 4)");
    }

    #[test]
    fn fmt_reconstruction_code() {
        assert_eq!(
            format!("{:?}", perm!((1, 2), (5, 4, 3, 7)).unwrap()),
            "perm!((1, 2), (3, 7, 5, 4))"
        );
        assert_eq!(perm!((1, 2), (3,)).unwrap().to_code(), "perm!((1, 2), (3,))");
        assert_eq!(perm!((2,)).unwrap().to_code(), "perm!((2,))");
    }

    #[test]
    fn reconstruction_code_is_rust() {
        let a = perm!((1, 2), (5, 4, 3, 7)).unwrap();
        assert_eq!(a.to_code(), "perm!((1, 2), (3, 7, 5, 4))");
        assert_eq!(perm!((1, 2), (3, 7, 5, 4)).unwrap(), a);
    }
}
