//! Weather snapshot displayed on the dashboard.
//!
//! The dashboard has no live weather feed; [`WeatherSnapshot::default`] is
//! the fixed mock it shows.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentConditions {
    /// Degrees Celsius.
    pub temperature: f64,
    /// Relative humidity, percent.
    pub humidity: u8,
    pub condition: String,
    /// km/h.
    pub wind_speed: f64,
}

/// One forecast entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    pub label: String,
    pub high: f64,
    pub low: f64,
    pub condition: String,
    /// Probability of rain, percent.
    pub rain: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub current: CurrentConditions,
    pub forecast: Vec<ForecastDay>,
}

impl WeatherSnapshot {
    /// Highest rain probability across the forecast, if any.
    pub fn max_rain_chance(&self) -> Option<u8> {
        self.forecast.iter().map(|d| d.rain).max()
    }
}

fn day(label: &str, high: f64, low: f64, condition: &str, rain: u8) -> ForecastDay {
    ForecastDay {
        label: label.to_string(),
        high,
        low,
        condition: condition.to_string(),
        rain,
    }
}

impl Default for WeatherSnapshot {
    fn default() -> Self {
        Self {
            current: CurrentConditions {
                temperature: 28.0,
                humidity: 65,
                condition: "Partly Cloudy".to_string(),
                wind_speed: 12.0,
            },
            forecast: vec![
                day("Today", 32.0, 24.0, "Sunny", 0),
                day("Tomorrow", 30.0, 22.0, "Cloudy", 20),
                day("Day 3", 28.0, 20.0, "Rainy", 80),
            ],
        }
    }
}
