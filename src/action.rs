//! Group actions.

/// Left action on `T`.
///
/// Elements of implementing types act on `T` values on the left. Permutations act on points,
/// where acting fails for points outside of the domain, and on other permutations by
/// composition.
pub trait LeftAction<T> {
    /// Result of acting on a value.
    type Output;

    /// Act on a value on the left.
    fn left_apply(&self, value: T) -> Self::Output;

    /// Act on each value of an iterator on the left.
    fn left_apply_all<I>(&self, values: I) -> Vec<Self::Output>
    where
        I: IntoIterator<Item = T>,
    {
        values
            .into_iter()
            .map(|value| self.left_apply(value))
            .collect()
    }
}
