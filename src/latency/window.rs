//! Fixed-size moving window of connect latencies

use std::collections::VecDeque;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct LatencyWindow {
    samples: VecDeque<Duration>,
    capacity: usize,
}

impl LatencyWindow {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        LatencyWindow {
            samples: VecDeque::new(),
            capacity,
        }
    }

    /// Appends a sample, dropping the oldest one when the window is full.
    pub fn push(&mut self, latency: Duration) {
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(latency);
    }

    pub fn mean(&self) -> Option<Duration> {
        if self.samples.is_empty() {
            return None;
        }
        let count = self.samples.len() as u32;
        let mean = match self
            .samples
            .iter()
            .try_fold(Duration::ZERO, |total, d| total.checked_add(*d))
        {
            Some(total) => total / count,
            // sum past Duration::MAX, average in float seconds instead
            None => {
                let secs = self.samples.iter().map(Duration::as_secs_f64).sum::<f64>();
                Duration::try_from_secs_f64(secs / count as f64).unwrap_or(Duration::MAX)
            }
        };
        Some(mean)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Duration> {
        self.samples.iter()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<'a> IntoIterator for &'a LatencyWindow {
    type Item = &'a Duration;
    type IntoIter = std::collections::vec_deque::Iter<'a, Duration>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}
