//! Structural zero-value detection and order-insensitive slice comparison.

/// True when `value` is its type's zero value or an absence sentinel.
///
/// "Zero" is the structural default for the value's shape: `None`, the empty
/// string, numeric zero, the empty vector — anything equal to `T::default()`.
/// The check is total and has no side effects.
///
/// Note that a present-but-zero inner value is not zero for the outer shape:
/// `Some(0)` is not `None`.
///
/// # Examples
///
/// ```rust
/// use taskhost_util::value::zero_or_nil;
///
/// assert!(zero_or_nil(&None::<u32>));
/// assert!(zero_or_nil(&""));
/// assert!(zero_or_nil(&0u64));
/// assert!(zero_or_nil(&Vec::<u8>::new()));
///
/// assert!(!zero_or_nil(&"x"));
/// assert!(!zero_or_nil(&vec![1]));
/// ```
pub fn zero_or_nil<T>(value: &T) -> bool
where
    T: Default + PartialEq,
{
    *value == T::default()
}

/// Order-insensitive equality over two slices (multiset equality).
///
/// True iff the slices have equal length and every element of `left` can be
/// paired with a distinct, structurally equal element of `right`. Duplicates
/// are counted: `[1, 2]` does not equal `[1, 1]`.
///
/// The scan is O(n²) element comparisons; it is intended for the short slices
/// the agent compares (port bindings, attribute lists), not bulk data.
///
/// # Examples
///
/// ```rust
/// use taskhost_util::value::slices_deep_equal;
///
/// assert!(slices_deep_equal(&[1, 2, 2], &[2, 1, 2]));
/// assert!(!slices_deep_equal(&[1, 2], &[1, 1]));
/// ```
pub fn slices_deep_equal<T: PartialEq>(left: &[T], right: &[T]) -> bool {
    if left.len() != right.len() {
        return false;
    }

    let mut consumed = vec![false; right.len()];
    'outer: for item in left {
        for (idx, candidate) in right.iter().enumerate() {
            if consumed[idx] {
                // Already paired with an earlier element of `left`.
                continue;
            }
            if item == candidate {
                consumed[idx] = true;
                continue 'outer;
            }
        }
        // No unconsumed element of `right` matches.
        return false;
    }
    true
}
