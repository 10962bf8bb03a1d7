//! Classification of a latency window into a rail status

use std::time::Duration;
use crate::types::RailStatus;

/// Mean latency boundaries, in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatencyThresholds {
    /// Means strictly below this are OK.
    pub ok_below_secs: f64,
    /// Means up to and including this are slow; above it oscillating.
    pub slow_up_to_secs: f64,
}

impl Default for LatencyThresholds {
    fn default() -> Self {
        Self {
            ok_below_secs: 2.5,
            slow_up_to_secs: 5.0,
        }
    }
}

impl LatencyThresholds {
    pub fn classify<'a, I>(&self, samples: I) -> RailStatus
    where
        I: IntoIterator<Item = &'a Duration>,
    {
        let (count, total) = samples
            .into_iter()
            .fold((0usize, 0.0f64), |(n, sum), d| (n + 1, sum + d.as_secs_f64()));

        if count == 0 {
            return RailStatus::Unknown;
        }

        let mean = total / count as f64;
        if mean < self.ok_below_secs {
            RailStatus::Ok
        } else if mean <= self.slow_up_to_secs {
            RailStatus::Slow
        } else {
            RailStatus::Oscillating
        }
    }
}

/// Classifies with the default thresholds.
pub fn classify<'a, I>(samples: I) -> RailStatus
where
    I: IntoIterator<Item = &'a Duration>,
{
    LatencyThresholds::default().classify(samples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn secs(values: &[f64]) -> Vec<Duration> {
        values.iter().map(|v| Duration::from_secs_f64(*v)).collect()
    }

    #[test]
    fn empty_window_is_unknown() {
        assert_eq!(classify(&Vec::<Duration>::new()), RailStatus::Unknown);
    }

    #[test]
    fn boundaries() {
        assert_eq!(classify(&secs(&[0.2, 0.3])), RailStatus::Ok);
        assert_eq!(classify(&secs(&[2.499])), RailStatus::Ok);
        assert_eq!(classify(&secs(&[2.5])), RailStatus::Slow);
        assert_eq!(classify(&secs(&[5.0])), RailStatus::Slow);
        assert_eq!(classify(&secs(&[5.001])), RailStatus::Oscillating);
    }

    #[test]
    fn uses_mean_not_last_sample() {
        // one slow outlier among fast samples stays OK
        assert_eq!(classify(&secs(&[0.1, 0.1, 0.1, 6.0])), RailStatus::Ok);
        assert_eq!(classify(&secs(&[4.0, 7.0])), RailStatus::Oscillating);
    }

    proptest! {
        #[test]
        fn non_empty_window_follows_mean(
            millis in proptest::collection::vec(0u64..12_000, 1..10),
        ) {
            let samples: Vec<Duration> =
                millis.iter().map(|ms| Duration::from_millis(*ms)).collect();
            let total = samples.iter().map(Duration::as_secs_f64).sum::<f64>();
            let mean = total / samples.len() as f64;

            let expected = if mean < 2.5 {
                RailStatus::Ok
            } else if mean <= 5.0 {
                RailStatus::Slow
            } else {
                RailStatus::Oscillating
            };
            prop_assert_eq!(classify(&samples), expected);
            prop_assert_ne!(classify(&samples), RailStatus::Unknown);
        }
    }
}
