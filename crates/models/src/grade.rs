/// Computes the weighted average of scored grade categories.
///
/// Each item is a `(weight, score)` pair. Categories without a score, or with
/// a non-positive weight, do not contribute. Returns `None` when nothing
/// contributes.
pub fn weighted_grade<I>(categories: I) -> Option<f64>
where
    I: IntoIterator<Item = (f64, Option<f64>)>,
{
    let (weighted_sum, total_weight) = categories
        .into_iter()
        .filter_map(|(weight, score)| score.map(|score| (weight, score)))
        .filter(|(weight, _)| *weight > 0.0)
        .fold((0.0, 0.0), |(sum, total), (weight, score)| {
            (sum + weight * score, total + weight)
        });

    (total_weight > 0.0).then(|| weighted_sum / total_weight)
}
