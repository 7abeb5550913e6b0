/// Arithmetic mean of `values`, or `0.0` when there are none.
///
/// All averages on a record go through here, so "no data" always reads as 0.
pub fn mean<I>(values: I) -> f64
where
    I: IntoIterator<Item = i32>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0i64, 0u64), |(sum, count), v| (sum + v as i64, count + 1));

    if count == 0 {
        0.0
    } else {
        sum as f64 / count as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_empty_is_zero() {
        assert_eq!(mean(Vec::new()), 0.0);
    }

    #[test]
    fn test_mean_single() {
        assert_eq!(mean([3]), 3.0);
    }

    #[test]
    fn test_mean_fractional() {
        assert_eq!(mean([4, 5]), 4.5);
        assert_eq!(mean([4, 5, 3]), 4.0);
    }

    #[test]
    fn test_mean_does_not_overflow_i32() {
        assert_eq!(mean([i32::MAX, i32::MAX]), i32::MAX as f64);
    }
}
