//! Classification rules behind the analytics screen's badges and charts.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Stable,
    Down,
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Trend::Up => "Up",
            Trend::Stable => "Stable",
            Trend::Down => "Down",
        })
    }
}

/// Colour band of a letter grade badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradeBand {
    A,
    B,
    Other,
}

impl GradeBand {
    pub fn of(grade: &str) -> Self {
        if grade.starts_with('A') {
            GradeBand::A
        } else if grade.starts_with('B') {
            GradeBand::B
        } else {
            GradeBand::Other
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudentStatus {
    NeedsSupport,
    Good,
    Excellent,
}

impl StudentStatus {
    pub fn of(completion: u8) -> Self {
        if completion < 80 {
            StudentStatus::NeedsSupport
        } else if completion > 90 {
            StudentStatus::Excellent
        } else {
            StudentStatus::Good
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StudentStatus::NeedsSupport => "Needs Support",
            StudentStatus::Good => "Good",
            StudentStatus::Excellent => "Excellent",
        }
    }
}

/// A named chart series, scaled against the largest value across all series
/// drawn in the same chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: &'static str,
    pub points: Vec<(&'static str, f32)>,
}

impl Series {
    pub fn new(name: &'static str, points: impl IntoIterator<Item = (&'static str, f32)>) -> Self {
        Self {
            name,
            points: points.into_iter().collect(),
        }
    }

    pub fn max(&self) -> f32 {
        self.points.iter().map(|(_, v)| *v).fold(0.0, f32::max)
    }
}

/// Fraction of the chart height each point occupies, in `0.0..=1.0`.
pub fn normalized(series: &[Series]) -> Vec<Vec<f32>> {
    let ceiling = series.iter().map(Series::max).fold(0.0, f32::max);
    series
        .iter()
        .map(|s| {
            s.points
                .iter()
                .map(|(_, v)| if ceiling > 0.0 { (v / ceiling).clamp(0.0, 1.0) } else { 0.0 })
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_thresholds() {
        assert_eq!(StudentStatus::of(72), StudentStatus::NeedsSupport);
        assert_eq!(StudentStatus::of(79), StudentStatus::NeedsSupport);
        assert_eq!(StudentStatus::of(80), StudentStatus::Good);
        assert_eq!(StudentStatus::of(90), StudentStatus::Good);
        assert_eq!(StudentStatus::of(91), StudentStatus::Excellent);
    }

    #[test]
    fn grade_bands_by_letter() {
        assert_eq!(GradeBand::of("A-"), GradeBand::A);
        assert_eq!(GradeBand::of("B+"), GradeBand::B);
        assert_eq!(GradeBand::of("C+"), GradeBand::Other);
        assert_eq!(GradeBand::of(""), GradeBand::Other);
    }

    #[test]
    fn normalization_shares_one_ceiling() {
        let series = [
            Series::new("a", [("x", 50.0), ("y", 100.0)]),
            Series::new("b", [("x", 25.0), ("y", 0.0)]),
        ];
        assert_eq!(normalized(&series), vec![vec![0.5, 1.0], vec![0.25, 0.0]]);
        assert_eq!(normalized(&[Series::new("empty", [])]), vec![Vec::<f32>::new()]);
    }
}
