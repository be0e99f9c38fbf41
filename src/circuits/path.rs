//! Flat nesting labels that replace an explicit series/parallel tree.

/// Ordered tag sequence encoding an element's position in the nesting
/// structure.
///
/// `[0]` marks an element directly in series on a wire (the main wire or
/// the series run inside a branch). An element nested `d` levels deep
/// inside parallel splits carries `[group, b1, ..., bd, 0]`: the group id
/// of the enclosing main-wire split, the 1-based branch indices from
/// outermost to innermost split, and a trailing series marker. Distinct
/// splits opened on the main wire get distinct group ids, so their
/// branches are never mistaken for siblings.
///
/// Two equal labels mark elements directly in series at the same node.
/// Two quasi-equal labels (see [`is_quasi_equal`](Self::is_quasi_equal))
/// mark direct siblings of the same parallel split. Label length and the
/// last two tags fully determine mergeability; no element attribute
/// participates.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PathLabel(Vec<u32>);

const SERIES_MARKER: u32 = 0;

impl PathLabel {
    /// Label for an element placed directly in series.
    #[must_use]
    pub fn series() -> Self {
        Self(vec![SERIES_MARKER])
    }

    /// Label for an element nested inside parallel splits: the main-wire
    /// group id followed by the branch chain from outermost to innermost
    /// split.
    #[must_use]
    pub fn nested(group: u32, branches: &[u32]) -> Self {
        debug_assert!(!branches.is_empty());
        let mut tags = Vec::with_capacity(branches.len() + 2);
        tags.push(group);
        tags.extend_from_slice(branches);
        tags.push(SERIES_MARKER);
        Self(tags)
    }

    /// Raw tag sequence.
    #[must_use]
    pub fn tags(&self) -> &[u32] {
        &self.0
    }

    /// Number of tags. Reduction buckets entries by this length.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for a label with no tags (never produced by the constructors).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True for the lone series marker `[0]`.
    #[must_use]
    pub fn is_series(&self) -> bool {
        self.0 == [SERIES_MARKER]
    }

    /// Parallel nesting depth: the number of splits enclosing the element.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.0.len().saturating_sub(2)
    }

    /// True when `self` and `other` mark direct siblings of the same
    /// parallel split: same length, identical in every position except the
    /// second-to-last (the innermost branch tag), which must differ.
    #[must_use]
    pub fn is_quasi_equal(&self, other: &Self) -> bool {
        let n = self.0.len();
        if n != other.0.len() || n < 3 {
            return false;
        }
        let branch = n - 2;
        self.0[branch] != other.0[branch]
            && self.0[..branch] == other.0[..branch]
            && self.0[n - 1] == other.0[n - 1]
    }

    /// Label after collapsing one parallel split.
    ///
    /// Drops the innermost branch tag while outer splits remain; a
    /// depth-one label collapses to `[0]`, the merged group now sitting
    /// directly on the main wire.
    #[must_use]
    pub fn collapse(&self) -> Self {
        if self.depth() > 1 {
            let mut tags = self.0.clone();
            tags.remove(tags.len() - 2);
            Self(tags)
        } else {
            Self::series()
        }
    }
}
