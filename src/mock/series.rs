//! Parameter time series generators

use std::f64::consts::PI;
use std::str::FromStr;

use chrono::{Duration, NaiveDate};
use rand::Rng;

use crate::models::{ChartSeries, Dataset, Parameter, ParameterSnapshot};

/// Buckets in the live chart, one per hour
pub const HOURLY_BUCKETS: usize = 24;

fn hourly_labels() -> Vec<String> {
    (0..HOURLY_BUCKETS).map(|h| format!("{}:00", h)).collect()
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

fn hourly(parameter: Parameter, data: Vec<f64>) -> ChartSeries {
    ChartSeries {
        labels: hourly_labels(),
        datasets: vec![Dataset::for_parameter(parameter, parameter.hourly_label(), data)],
    }
}

/// 7.83 Hz fundamental with jitter and a slight upward drift
pub fn schumann_series<R: Rng + ?Sized>(rng: &mut R) -> ChartSeries {
    let data = (0..HOURLY_BUCKETS)
        .map(|i| {
            let variation = rng.gen_range(-0.05..0.05);
            let trend = i as f64 / 100.0;
            round_to(7.83 + variation + trend, 2)
        })
        .collect();
    hourly(Parameter::SchumannResonance, data)
}

/// Diurnal TEC cycle peaking around midday
pub fn tec_series<R: Rng + ?Sized>(rng: &mut R) -> ChartSeries {
    let data = (0..HOURLY_BUCKETS)
        .map(|i| {
            let time_of_day = ((i as f64 - 6.0) * PI / 12.0).sin() * 10.0;
            let variation = rng.gen_range(-2.0..2.0);
            (20.0 + time_of_day + variation).round().max(5.0)
        })
        .collect();
    hourly(Parameter::TotalElectronContent, data)
}

/// Background ELF activity with a burst between 10:00 and 14:00
pub fn elf_series<R: Rng + ?Sized>(rng: &mut R) -> ChartSeries {
    let data = (0..HOURLY_BUCKETS)
        .map(|i| {
            let mut value = 5.0 + rng.gen_range(-1.5..1.5);
            if (10..=14).contains(&i) {
                value += 10.0 * ((i as f64 - 10.0) * PI / 4.0).sin();
            }
            value.round().max(1.0)
        })
        .collect();
    hourly(Parameter::ElfBurstActivity, data)
}

pub fn gravity_series<R: Rng + ?Sized>(rng: &mut R) -> ChartSeries {
    let data = (0..HOURLY_BUCKETS)
        .map(|i| {
            let variation = rng.gen_range(-0.1..0.1);
            let trend = i as f64 / 100.0;
            round_to(0.5 + variation + trend, 1)
        })
        .collect();
    hourly(Parameter::GravityField, data)
}

pub fn parameter_series<R: Rng + ?Sized>(rng: &mut R, parameter: Parameter) -> ChartSeries {
    match parameter {
        Parameter::SchumannResonance => schumann_series(rng),
        Parameter::TotalElectronContent => tec_series(rng),
        Parameter::ElfBurstActivity => elf_series(rng),
        Parameter::GravityField => gravity_series(rng),
    }
}

pub fn parameter_snapshot<R: Rng + ?Sized>(rng: &mut R) -> ParameterSnapshot {
    ParameterSnapshot {
        schumann: schumann_series(rng),
        tec: tec_series(rng),
        elf: elf_series(rng),
        gravity: gravity_series(rng),
    }
}

/// Window selectable on the historical chart
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TimeRange {
    Day,
    #[default]
    Week,
    Month,
    Quarter,
    HalfYear,
    Year,
}

impl TimeRange {
    pub fn days(&self) -> i64 {
        match self {
            TimeRange::Day => 1,
            TimeRange::Week => 7,
            TimeRange::Month => 30,
            TimeRange::Quarter => 90,
            TimeRange::HalfYear => 180,
            TimeRange::Year => 365,
        }
    }

    /// Parse a query value, falling back to a week for anything unknown
    pub fn from_query(value: Option<&str>) -> Self {
        value.and_then(|v| v.parse().ok()).unwrap_or_default()
    }
}

impl FromStr for TimeRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1d" => Ok(TimeRange::Day),
            "1w" => Ok(TimeRange::Week),
            "1m" => Ok(TimeRange::Month),
            "3m" => Ok(TimeRange::Quarter),
            "6m" => Ok(TimeRange::HalfYear),
            "1y" => Ok(TimeRange::Year),
            other => Err(format!("unknown time range '{}'", other)),
        }
    }
}

/// (baseline, variance, trend) for the historical random walk
fn historical_profile(parameter: Parameter) -> (f64, f64, f64) {
    match parameter {
        Parameter::SchumannResonance => (7.83, 0.2, 0.1),
        Parameter::TotalElectronContent => (25.0, 10.0, 5.0),
        Parameter::ElfBurstActivity => (5.0, 5.0, 8.0),
        Parameter::GravityField => (0.5, 0.5, 0.8),
    }
}

/// Day-bucketed history ending at `today` (inclusive).
///
/// An empty `parameters` slice means all four.
pub fn historical_series<R: Rng + ?Sized>(
    rng: &mut R,
    range: TimeRange,
    parameters: &[Parameter],
    today: NaiveDate,
) -> ChartSeries {
    let days = range.days();
    let labels: Vec<String> = (0..=days)
        .rev()
        .map(|back| (today - Duration::days(back)).format("%Y-%m-%d").to_string())
        .collect();
    let len = labels.len() as f64;

    let selected: &[Parameter] = if parameters.is_empty() {
        &Parameter::ALL
    } else {
        parameters
    };

    let datasets = Parameter::ALL
        .into_iter()
        .filter(|p| selected.contains(p))
        .map(|parameter| {
            let (baseline, variance, trend) = historical_profile(parameter);
            let data = (0..labels.len())
                .map(|index| {
                    baseline + rng.gen_range(-variance..variance) + trend * index as f64 / len
                })
                .collect();
            Dataset::for_parameter(parameter, parameter.historical_label(), data)
        })
        .collect();

    ChartSeries { labels, datasets }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(1234)
    }

    #[test]
    fn test_hourly_series_shape() {
        let mut rng = rng();
        for parameter in Parameter::ALL {
            let series = parameter_series(&mut rng, parameter);
            assert_eq!(series.labels.len(), HOURLY_BUCKETS);
            assert_eq!(series.labels[0], "0:00");
            assert_eq!(series.labels[23], "23:00");
            assert_eq!(series.datasets.len(), 1);
            assert_eq!(series.datasets[0].data.len(), HOURLY_BUCKETS);
            assert_eq!(series.datasets[0].label, parameter.hourly_label());
        }
    }

    #[test]
    fn test_series_respect_floors() {
        let mut rng = rng();
        for _ in 0..50 {
            assert!(tec_series(&mut rng).datasets[0].data.iter().all(|v| *v >= 5.0));
            assert!(elf_series(&mut rng).datasets[0].data.iter().all(|v| *v >= 1.0));
        }
    }

    #[test]
    fn test_schumann_stays_near_fundamental() {
        let series = schumann_series(&mut rng());
        for value in &series.datasets[0].data {
            assert!((7.77..=8.12).contains(value), "value {}", value);
        }
    }

    #[test]
    fn test_elf_burst_peaks_midday() {
        let series = elf_series(&mut rng());
        let data = &series.datasets[0].data;
        // Burst adds 10 at 12:00; background never exceeds 6.5.
        assert!(data[12] > data[0]);
        assert!(data[12] >= 14.0);
    }

    #[test]
    fn test_time_range_parsing() {
        assert_eq!(TimeRange::from_query(Some("1m")), TimeRange::Month);
        assert_eq!(TimeRange::from_query(Some("5y")), TimeRange::Week);
        assert_eq!(TimeRange::from_query(None), TimeRange::Week);
        assert_eq!(TimeRange::Year.days(), 365);
    }

    #[test]
    fn test_historical_series_labels() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 2).unwrap();
        let series = historical_series(&mut rng(), TimeRange::Week, &[], today);

        assert_eq!(series.labels.len(), 8);
        assert_eq!(series.labels.first().unwrap(), "2025-02-23");
        assert_eq!(series.labels.last().unwrap(), "2025-03-02");
        assert_eq!(series.datasets.len(), 4);
    }

    #[test]
    fn test_historical_series_filters_parameters() {
        let today = NaiveDate::from_ymd_opt(2025, 5, 20).unwrap();
        let series = historical_series(
            &mut rng(),
            TimeRange::Month,
            &[Parameter::GravityField, Parameter::TotalElectronContent],
            today,
        );

        assert_eq!(series.labels.len(), 31);
        let labels: Vec<&str> = series.datasets.iter().map(|d| d.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Total Electron Content (TECU)", "Gravity Field Variation (μGal)"]
        );
        assert!(series.datasets.iter().all(|d| d.data.len() == 31));
    }
}
