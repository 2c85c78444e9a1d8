// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{DataValue, InlineVec, PlotError, PlotResult};

/// Equal width bins over `[min, max]` of a set of samples. The last bin is closed on
/// the right so the maximum sample lands in it.
///
/// When every sample is equal (`max == min`) the bins are 1 wide and centered on
/// `min`, `min + 1`, ... All samples are counted in bin 0, whose center is exactly
/// `min`.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    origin: f64,
    bin_width: f64,
    counts: InlineVec<usize>,
    centers: InlineVec<f64>,
}

impl Histogram {
    /// Bin `values` into `bin_count` bins. Returns `Ok(None)` if `values` is empty.
    ///
    /// # Errors
    ///
    /// - [`PlotError::ZeroBinCount`] if `bin_count` is 0.
    /// - [`PlotError::NonFiniteSample`] for the first `NaN` or infinite sample.
    /// - [`PlotError::UnrepresentableBinWidth`] if `(max - min) / bin_count` overflows
    ///   or underflows to zero.
    #[allow(clippy::cast_precision_loss, clippy::float_cmp)]
    pub fn try_new<T: DataValue>(values: &[T], bin_count: usize) -> PlotResult<Option<Self>> {
        if bin_count == 0 {
            return Err(PlotError::ZeroBinCount);
        }
        if values.is_empty() {
            return Ok(None);
        }

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for (index, value) in values.iter().enumerate() {
            let value = value.to_f64();
            if !value.is_finite() {
                return Err(PlotError::NonFiniteSample { index, value });
            }
            min = min.min(value);
            max = max.max(value);
        }

        let mut counts: InlineVec<usize> = smallvec::smallvec![0; bin_count];

        if max == min {
            counts[0] = values.len();
            return Ok(Some(Self {
                origin: min - 0.5,
                bin_width: 1.0,
                counts,
                centers: (0..bin_count).map(|index| min + index as f64).collect(),
            }));
        }

        // Work with halved values: `max - min` overflows when the samples span more
        // than `f64::MAX`, `max / 2 - min / 2` never does.
        let half_width = (max * 0.5 - min * 0.5) / bin_count as f64;
        let bin_width = half_width * 2.0;
        if half_width <= 0.0 || !bin_width.is_finite() {
            return Err(PlotError::UnrepresentableBinWidth {
                min,
                max,
                bin_count,
            });
        }

        for value in values {
            let offset = ((value.to_f64() * 0.5 - min * 0.5) / half_width).floor();
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let bin = if offset.is_nan() {
                bin_count - 1
            } else {
                (offset.max(0.0) as usize).min(bin_count - 1)
            };
            counts[bin] += 1;
        }

        let centers = (0..bin_count)
            .map(|index| 2.0 * (min * 0.5 + half_width * (index as f64 + 0.5)))
            .collect();

        Ok(Some(Self {
            origin: min,
            bin_width,
            counts,
            centers,
        }))
    }

    /// Left edge of bin 0.
    #[must_use]
    pub fn origin(&self) -> f64 { self.origin }

    #[must_use]
    pub fn bin_width(&self) -> f64 { self.bin_width }

    #[must_use]
    pub fn counts(&self) -> &[usize] { &self.counts }

    /// `origin + bin_width * (i + 0.5)` for every bin `i`, always finite.
    #[must_use]
    pub fn centers(&self) -> &[f64] { &self.centers }

    /// Sum of all bin counts, which is the number of binned samples.
    #[must_use]
    pub fn total(&self) -> usize { self.counts.iter().sum() }
}

#[cfg(test)]
mod tests_histogram {
    use super::*;
    use pretty_assertions::assert_eq;

    const SAMPLES: [i32; 32] = [
        1, 1, 1, 1, 2, 2, 2, 2, 2, 2, 2, 3, 3, 3, 3, 3, 3, 4, 4, 4, 5, 5, 5, 5, 5, 5, 6, 6,
        6, 6, 6, 6,
    ];

    #[test]
    fn test_three_bins() {
        let histogram = Histogram::try_new(&SAMPLES, 3).unwrap().unwrap();
        assert_eq!(histogram.total(), 32);
        // Width 5/3: [1, 2.67) [2.67, 4.33) [4.33, 6].
        assert_eq!(histogram.counts(), &[11, 9, 12]);
        assert_eq!(histogram.origin(), 1.0);
        assert!((histogram.bin_width() - 5.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_max_lands_in_last_bin() {
        let histogram = Histogram::try_new(&[0.0, 10.0], 5).unwrap().unwrap();
        assert_eq!(histogram.counts(), &[1, 0, 0, 0, 1]);
        assert_eq!(histogram.centers(), &[1.0, 3.0, 5.0, 7.0, 9.0]);
    }

    #[test]
    fn test_counts_always_sum_to_sample_count() {
        for bin_count in 1..=40 {
            let histogram = Histogram::try_new(&SAMPLES, bin_count).unwrap().unwrap();
            assert_eq!(histogram.total(), SAMPLES.len(), "bin_count = {bin_count}");
            assert_eq!(histogram.counts().len(), bin_count);
        }
    }

    #[test]
    fn test_all_samples_equal() {
        let histogram = Histogram::try_new(&[4.0, 4.0, 4.0], 3).unwrap().unwrap();
        assert_eq!(histogram.counts(), &[3, 0, 0]);
        assert_eq!(histogram.bin_width(), 1.0);
        assert_eq!(histogram.centers()[0], 4.0);
        assert_eq!(histogram.total(), 3);
    }

    #[test]
    fn test_all_samples_equal_at_large_magnitude() {
        // 2^53 - 1: `v - 0.5` is not representable and rounds down to `v - 1`.
        let v = 9_007_199_254_740_991.0;
        let histogram = Histogram::try_new(&[v, v, v], 3).unwrap().unwrap();
        assert_eq!(histogram.counts(), &[3, 0, 0]);
        assert_eq!(histogram.centers()[0], v);
        assert_eq!(histogram.centers()[1], v + 1.0);
    }

    #[test]
    fn test_span_wider_than_f64_max() {
        let histogram = Histogram::try_new(&[-1e308, 0.0, 1e308], 4).unwrap().unwrap();
        assert_eq!(histogram.counts(), &[1, 0, 1, 1]);
        assert_eq!(histogram.bin_width(), 5e307);
        assert!(histogram.centers().iter().all(|center| center.is_finite()));
        assert!((histogram.centers()[0] + 7.5e307).abs() < 1e295);
        assert!((histogram.centers()[3] - 7.5e307).abs() < 1e295);
    }

    #[test]
    fn test_unrepresentable_bin_width() {
        let error = Histogram::try_new(&[-1e308, 1e308], 1).unwrap_err();
        assert!(matches!(
            error,
            PlotError::UnrepresentableBinWidth { bin_count: 1, .. }
        ));
        assert!(error.is_invalid_usage());

        let error = Histogram::try_new(&[0.0, f64::from_bits(1)], 2).unwrap_err();
        assert!(matches!(error, PlotError::UnrepresentableBinWidth { .. }));
    }

    #[test]
    fn test_empty_and_invalid_input() {
        let empty: [f64; 0] = [];
        assert_eq!(Histogram::try_new(&empty, 3).unwrap(), None);
        assert!(matches!(
            Histogram::try_new(&empty, 0),
            Err(PlotError::ZeroBinCount)
        ));
        assert!(matches!(
            Histogram::try_new(&[1.0, f64::NAN], 2),
            Err(PlotError::NonFiniteSample { index: 1, .. })
        ));
    }
}
