//! Partial application of leading arguments to an execution function.
//!
//! [`Bound`] holds a function plus the arguments it is always called with
//! first. The facade binds the pandoc path in front of each process runner
//! so that call sites only supply the per-call flags.

/// A function with a fixed prefix of arguments.
///
/// Calling [`Bound::run`] forwards `leading ++ trailing` to the function in
/// order. The adapter never checks how many arguments the target expects; a
/// target that reads past the end of the slice simply sees `None` from
/// `args.get(i)`.
///
/// # Example
///
/// ```
/// use pandoc_bridge_exec::Bound;
///
/// let join = Bound::new(|args: Vec<&str>| args.join("::"), ["one"]);
/// assert_eq!(join.run(["two", "three"]), "one::two::three");
/// ```
#[derive(Debug, Clone)]
pub struct Bound<F, A> {
    func: F,
    leading: Vec<A>,
}

impl<F, A: Clone> Bound<F, A> {
    /// Bind `leading` in front of every call to `func`.
    pub fn new(func: F, leading: impl IntoIterator<Item = A>) -> Self {
        Self {
            func,
            leading: leading.into_iter().collect(),
        }
    }

    /// The arguments bound at construction.
    pub fn leading(&self) -> &[A] {
        &self.leading
    }

    /// Call the bound function with the leading arguments followed by
    /// `trailing`.
    pub fn run<R>(&self, trailing: impl IntoIterator<Item = A>) -> R
    where
        F: Fn(Vec<A>) -> R,
    {
        let mut args = self.leading.clone();
        args.extend(trailing);
        (self.func)(args)
    }
}
