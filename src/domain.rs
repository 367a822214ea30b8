use std::ops::Range;

use crate::value::AttrValue;

/// Distinct attribute values in ascending order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeDomain {
    values: Vec<AttrValue>,
}

impl AttributeDomain {
    pub fn from_values<'a, I>(values: I) -> Self
    where
        I: IntoIterator<Item = &'a AttrValue>,
    {
        let mut values: Vec<AttrValue> = values.into_iter().cloned().collect();
        values.sort();
        values.dedup();
        AttributeDomain { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[AttrValue] {
        &self.values
    }

    pub fn is_numeric(&self) -> bool {
        !self.values.is_empty() && self.values.iter().all(AttrValue::is_numeric)
    }

    /// Split the domain into at most `budget` contiguous buckets.
    ///
    /// With more values than `budget` every bucket holds `len / budget`
    /// values and the first `len % budget` buckets hold one more. Otherwise
    /// each value gets a bucket of its own.
    pub fn buckets(&self, budget: usize) -> Vec<Range<usize>> {
        bucket_bounds(self.values.len(), budget)
    }

    pub fn bucket_members(&self, bucket: &Range<usize>) -> &[AttrValue] {
        &self.values[bucket.clone()]
    }
}

pub fn bucket_bounds(len: usize, budget: usize) -> Vec<Range<usize>> {
    if len == 0 || budget == 0 {
        return Vec::new();
    }
    if len <= budget {
        return (0..len).map(|i| i..i + 1).collect();
    }
    let base = len / budget;
    let remainder = len % budget;
    let mut bounds = Vec::with_capacity(budget);
    let mut start = 0;
    for i in 0..budget {
        let width = if i < remainder { base + 1 } else { base };
        bounds.push(start..start + width);
        start += width;
    }
    bounds
}

/// Legend label for the sorted members of one bucket.
///
/// Numeric buckets read `min–max`; anything else lists up to three members
/// and abbreviates longer buckets to `first, …, last`.
pub fn bucket_label(members: &[AttrValue]) -> String {
    match members {
        [] => String::new(),
        [only] => only.to_string(),
        [first, .., last] if members.iter().all(AttrValue::is_numeric) => {
            format!("{}–{}", first, last)
        }
        [_, _] | [_, _, _] => members
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", "),
        [first, .., last] => format!("{}, …, {}", first, last),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_even_split() {
        let bounds = bucket_bounds(1000, 4);
        assert_eq!(bounds, vec![0..250, 250..500, 500..750, 750..1000]);
    }

    #[test]
    fn test_bounds_remainder_goes_first() {
        let bounds = bucket_bounds(10, 3);
        assert_eq!(bounds, vec![0..4, 4..7, 7..10]);
    }

    #[test]
    fn test_bounds_below_budget() {
        assert_eq!(bucket_bounds(3, 10), vec![0..1, 1..2, 2..3]);
        assert!(bucket_bounds(0, 10).is_empty());
    }

    #[test]
    fn test_domain_dedups_and_sorts() {
        let raw: Vec<AttrValue> = vec!["c".into(), "a".into(), "c".into(), "b".into()];
        let domain = AttributeDomain::from_values(&raw);
        assert_eq!(domain.len(), 3);
        assert_eq!(domain.values()[0], AttrValue::from("a"));
        assert!(!domain.is_numeric());
    }

    #[test]
    fn test_labels() {
        let nums: Vec<AttrValue> = vec![0.into(), 1.into(), 249.into()];
        assert_eq!(bucket_label(&nums), "0–249");

        let few: Vec<AttrValue> = vec!["a".into(), "b".into()];
        assert_eq!(bucket_label(&few), "a, b");

        let many: Vec<AttrValue> = vec!["a".into(), "b".into(), "c".into(), "d".into()];
        assert_eq!(bucket_label(&many), "a, …, d");

        let single: Vec<AttrValue> = vec![AttrValue::Absent];
        assert_eq!(bucket_label(&single), "<absent>");
    }
}
