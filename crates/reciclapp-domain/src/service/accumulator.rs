//! Cumulative impact over the history log

use reciclapp_types::{AccumulatedImpact, ImpactRecord};

/// Sum the scaled impact of every record
pub fn accumulate<'a, I>(records: I) -> AccumulatedImpact
where
    I: IntoIterator<Item = &'a ImpactRecord>,
{
    records
        .into_iter()
        .fold(AccumulatedImpact::default(), |mut total, record| {
            total.add(&record.impact);
            total
        })
}

/// Totals per material, in order of first appearance
pub fn accumulate_by_material<'a, I>(records: I) -> Vec<(String, AccumulatedImpact)>
where
    I: IntoIterator<Item = &'a ImpactRecord>,
{
    let mut groups: Vec<(String, AccumulatedImpact)> = Vec::new();
    for record in records {
        match groups.iter_mut().find(|(name, _)| *name == record.material) {
            Some((_, total)) => total.add(&record.impact),
            None => {
                let mut total = AccumulatedImpact::default();
                total.add(&record.impact);
                groups.push((record.material.clone(), total));
            }
        }
    }
    groups
}
