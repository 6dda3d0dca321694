// Minimum selection with a stable tie-break

/// Returns the index of the first smallest value.
///
/// Later values only win when they are strictly smaller, so equal totals
/// resolve to whichever appears first. NaN values are never selected.
pub fn first_min_index<I>(values: I) -> Option<usize>
where
    I: IntoIterator<Item = f64>,
{
    let mut best: Option<(usize, f64)> = None;
    for (i, value) in values.into_iter().enumerate() {
        if value.is_nan() {
            continue;
        }
        match best {
            Some((_, best_value)) if value >= best_value => {}
            _ => best = Some((i, value)),
        }
    }
    best.map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_min_index() {
        assert_eq!(first_min_index(vec![5.0, 3.0, 4.0]), Some(1));
        assert_eq!(first_min_index(Vec::<f64>::new()), None);
    }

    #[test]
    fn test_ties_resolve_to_first() {
        assert_eq!(first_min_index(vec![7.0, 2.0, 9.0, 2.0]), Some(1));
        assert_eq!(first_min_index(vec![1.0, 1.0, 1.0]), Some(0));
    }

    #[test]
    fn test_nan_skipped() {
        assert_eq!(first_min_index(vec![f64::NAN, 4.0, 2.0]), Some(2));
        assert_eq!(first_min_index(vec![f64::NAN]), None);
    }
}
