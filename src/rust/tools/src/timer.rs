use std::time;

use tracing::info;

/// Records instants and reports the laps between consecutive clicks.
#[derive(Default)]
pub struct Stopwatch {
    instants: Vec<time::Instant>,
}

impl Stopwatch {
    pub fn new() -> Stopwatch {
        Stopwatch::default()
    }

    pub fn click(&mut self) {
        self.instants.push(time::Instant::now());
    }

    pub fn laps(&self) -> Vec<time::Duration> {
        self.instants
            .windows(2)
            .map(|w| w[1].duration_since(w[0]))
            .collect()
    }

    pub fn total(&self) -> time::Duration {
        match (self.instants.first(), self.instants.last()) {
            (Some(first), Some(last)) => last.duration_since(*first),
            _ => time::Duration::ZERO,
        }
    }

    pub fn report(&self, label: &str) {
        for (i, elapsed) in self.laps().into_iter().enumerate() {
            info!(label, lap = i, ?elapsed, "{}-{} : {} us", i, i + 1, elapsed.as_micros());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn laps_count_is_clicks_minus_one() {
        let mut s = Stopwatch::new();
        assert!(s.laps().is_empty());
        assert_eq!(s.total(), time::Duration::ZERO);
        s.click();
        s.click();
        s.click();
        let laps = s.laps();
        assert_eq!(laps.len(), 2);
        assert_eq!(laps.iter().sum::<time::Duration>(), s.total());
    }
}
