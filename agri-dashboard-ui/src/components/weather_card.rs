//! Current weather and short forecast.

use super::CARD_STYLE;
use crate::state::DashboardState;
use dioxus::prelude::*;

/// Forecast rain chance at which the card suggests planning around rain.
const RAIN_WARNING_PERCENT: u8 = 60;

#[component]
pub fn WeatherCard() -> Element {
    let state = use_context::<DashboardState>();
    let weather = state.store.read().weather().clone();
    let rain_warning = weather
        .max_rain_chance()
        .filter(|chance| *chance >= RAIN_WARNING_PERCENT);
    let current = weather.current;

    rsx! {
        div {
            style: CARD_STYLE,
            h3 { style: "margin: 0 0 8px 0; font-size: 16px;", "Weather" }
            p {
                style: "margin: 0; font-size: 28px; font-weight: 700;",
                "{current.temperature}°C"
            }
            p {
                style: "margin: 0 0 8px 0; color: #4a5568;",
                "{current.condition} · Humidity {current.humidity}% · Wind {current.wind_speed} km/h"
            }
            if let Some(chance) = rain_warning {
                p {
                    style: "margin: 0 0 8px 0; padding: 6px 8px; background: #EBF8FF; color: #2B6CB0; border-radius: 6px; font-size: 13px;",
                    "Up to {chance}% chance of rain in the coming days. Plan field work accordingly."
                }
            }
            ul {
                style: "list-style: none; padding: 0; margin: 0;",
                for day in weather.forecast {
                    li {
                        key: "{day.label}",
                        style: "display: flex; justify-content: space-between; padding: 4px 0; border-top: 1px solid #f1f5f9; font-size: 13px;",
                        span { "{day.label}" }
                        span { "{day.condition}" }
                        span { "{day.high}° / {day.low}°" }
                        span { "{day.rain}% rain" }
                    }
                }
            }
        }
    }
}
