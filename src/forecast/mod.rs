//! Synthetic weather forecasts.
//!
//! Generates five daily forecasts starting tomorrow. Temperatures and summaries
//! come from an injected [`RandomSource`] so callers can substitute a
//! deterministic sequence.

mod random;

use chrono::{Days, NaiveDate};
use serde::Serialize;
use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{EnumCount as EnumCountMacro, EnumIter, IntoStaticStr};

use crate::config::{FORECAST_DAYS, TEMPERATURE_MAX_C, TEMPERATURE_MIN_C};

pub use random::{RandomSource, ThreadRandom};

/// Fixed summary labels, in index order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, EnumCountMacro, IntoStaticStr, Serialize)]
pub enum Summary {
    Freezing,
    Bracing,
    Chilly,
    Cool,
    Mild,
    Warm,
    Balmy,
    Hot,
    Sweltering,
    Scorching,
}

impl Summary {
    /// Number of labels, the exclusive bound for index draws.
    pub fn count() -> i32 {
        Summary::COUNT as i32
    }

    /// Label at `index`, wrapping values outside `[0, count)`.
    pub fn from_index(index: i32) -> Summary {
        let wrapped = index.rem_euclid(Self::count()) as usize;
        Summary::iter().nth(wrapped).unwrap_or(Summary::Freezing)
    }
}

/// One day's synthetic forecast. Built per request, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherForecast {
    pub date: NaiveDate,
    pub temperature_c: i32,
    pub summary: Summary,
}

// Serialized form carries the derived Fahrenheit value alongside the stored fields.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WeatherForecastView<'a> {
    date: &'a NaiveDate,
    temperature_c: i32,
    temperature_f: i32,
    summary: Summary,
}

impl WeatherForecast {
    /// Fahrenheit equivalent, truncated toward zero.
    pub fn temperature_f(&self) -> i32 {
        32 + (f64::from(self.temperature_c) / 0.5556) as i32
    }

    fn view(&self) -> WeatherForecastView<'_> {
        WeatherForecastView {
            date: &self.date,
            temperature_c: self.temperature_c,
            temperature_f: self.temperature_f(),
            summary: self.summary,
        }
    }
}

/// Serializes forecasts to JSON, optionally indented.
pub fn forecasts_to_json(
    forecasts: &[WeatherForecast],
    indent: bool,
) -> Result<String, serde_json::Error> {
    let views: Vec<_> = forecasts.iter().map(WeatherForecast::view).collect();
    if indent {
        serde_json::to_string_pretty(&views)
    } else {
        serde_json::to_string(&views)
    }
}

/// Generates the forecasts for the five days following `today`.
///
/// Each forecast takes one temperature draw in `[-20, 55)` and then one summary
/// draw in `[0, 10)`, in date order.
pub fn generate_forecast(today: NaiveDate, random: &dyn RandomSource) -> Vec<WeatherForecast> {
    (1..=FORECAST_DAYS)
        .map(|offset| WeatherForecast {
            date: today + Days::new(offset),
            temperature_c: random.next_in_range(TEMPERATURE_MIN_C, TEMPERATURE_MAX_C),
            summary: Summary::from_index(random.next_below(Summary::count())),
        })
        .collect()
}
