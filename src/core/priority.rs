use std::cmp::Ordering;

/// Compare two ages for priority order: known ages descending, unknown last
///
/// Equal ages (including two unknowns) compare equal so that a stable sort
/// preserves the original relative order of tied entries.
#[inline]
pub fn age_priority(a: Option<u32>, b: Option<u32>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Sort a slice into age priority order
///
/// `slice::sort_by` is stable, which the priority contract relies on: entries
/// with equal ages keep their input order.
pub fn sort_by_age_priority<T>(items: &mut [T], age: impl Fn(&T) -> Option<u32>) {
    items.sort_by(|a, b| age_priority(age(a), age(b)));
}
