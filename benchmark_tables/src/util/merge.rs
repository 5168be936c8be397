//!
//! Merging of ordered sequences.
//!

/// Appends the elements of `sources` to `base`, skipping every element that
/// is already equal to one in the accumulated result.
///
/// Elements of `base` itself are never removed, even if they repeat. The
/// order of first occurrence is preserved, and each source is checked against
/// the result accumulated so far, including the elements appended from the
/// previous sources.
///
/// # Arguments
///
/// * `base` - The sequence copied in full.
/// * `sources` - The sequences whose new elements are appended in order.
///
/// # Example
///
/// ```rust
/// use benchmark_tables::util::merge::merge_distinct;
///
/// let efficient: &[char] = &['b', 'c'];
/// let performers: &[char] = &['c', 'd'];
/// let merged = merge_distinct(&['a', 'b'], &[efficient, performers]);
/// assert_eq!(merged, vec!['a', 'b', 'c', 'd']);
/// ```
pub fn merge_distinct<T>(base: &[T], sources: &[&[T]]) -> Vec<T>
where
    T: PartialEq + Clone,
{
    let capacity = base.len() + sources.iter().map(|source| source.len()).sum::<usize>();
    let mut result = Vec::with_capacity(capacity);
    result.extend_from_slice(base);
    for source in sources.iter() {
        for element in source.iter() {
            if !result.contains(element) {
                result.push(element.clone());
            }
        }
    }
    result
}
