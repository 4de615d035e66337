//! District selection.

use crate::model::CollectionRecord;

/// Lazily keep the records whose district is exactly `district`.
///
/// The comparison is case-sensitive and nothing is normalized; the original
/// order is preserved.
pub fn filter_by_district<'a, I>(
    records: I,
    district: &'a str,
) -> impl Iterator<Item = &'a CollectionRecord>
where
    I: IntoIterator<Item = &'a CollectionRecord>,
    I::IntoIter: 'a,
{
    records
        .into_iter()
        .filter(move |record| record.district == district)
}
