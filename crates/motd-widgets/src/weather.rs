use std::time::Duration;

use anyhow::Result;
use serde::Deserialize;

use motd_config::WidgetSpec;
use motd_core::widget::Widget;

const API_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// Current weather conditions from the Open-Meteo API.
pub struct WeatherWidget {
    label: String,
    latitude: f64,
    longitude: f64,
    fahrenheit: bool,
    timeout: Duration,
}

#[derive(Debug, Deserialize)]
struct WeatherResponse {
    current: CurrentConditions,
}

#[derive(Debug, Deserialize)]
struct CurrentConditions {
    temperature_2m: f64,
    apparent_temperature: f64,
    relative_humidity_2m: f64,
    wind_speed_10m: f64,
    weather_code: u64,
}

impl WeatherWidget {
    pub fn new(spec: &WidgetSpec, _width: u16) -> Self {
        Self {
            label: spec.opt_str("label").unwrap_or("Weather").to_string(),
            latitude: spec.opt_f64("latitude").unwrap_or(0.0),
            longitude: spec.opt_f64("longitude").unwrap_or(0.0),
            fahrenheit: spec.opt_str("units").unwrap_or("f") == "f",
            timeout: Duration::from_secs(spec.opt_u64("timeout").unwrap_or(5)),
        }
    }

    fn fetch(&self) -> reqwest::Result<WeatherResponse> {
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()?;

        let (temp_unit, wind_unit) = if self.fahrenheit {
            ("fahrenheit", "mph")
        } else {
            ("celsius", "kmh")
        };

        client
            .get(API_URL)
            .query(&[
                ("latitude", self.latitude.to_string()),
                ("longitude", self.longitude.to_string()),
                (
                    "current",
                    "temperature_2m,relative_humidity_2m,apparent_temperature,\
                     weather_code,wind_speed_10m"
                        .to_string(),
                ),
                ("temperature_unit", temp_unit.to_string()),
                ("wind_speed_unit", wind_unit.to_string()),
            ])
            .send()?
            .error_for_status()?
            .json()
    }

    fn format_conditions(&self, current: &CurrentConditions) -> Vec<String> {
        let unit_label = if self.fahrenheit { "°F" } else { "°C" };
        let wind_unit = if self.fahrenheit { "mph" } else { "km/h" };
        let desc = wmo_description(current.weather_code);

        vec![
            format!("{}:", self.label),
            format!(
                "  {}, {:.0}{} (feels {:.0}{})",
                desc, current.temperature_2m, unit_label, current.apparent_temperature, unit_label
            ),
            format!(
                "  Humidity: {:.0}% | Wind: {:.0} {}",
                current.relative_humidity_2m, current.wind_speed_10m, wind_unit
            ),
        ]
    }
}

impl Widget for WeatherWidget {
    fn name(&self) -> &'static str {
        "weather"
    }

    fn render(&self) -> Result<Vec<String>> {
        match self.fetch() {
            Ok(response) => Ok(self.format_conditions(&response.current)),
            Err(e) if e.is_connect() => {
                Ok(vec![format!("{}: no internet connection", self.label)])
            }
            Err(e) if e.is_timeout() => Ok(vec![format!("{}: request timed out", self.label)]),
            Err(e) => {
                tracing::debug!(error = %e, "weather request failed");
                Ok(vec![format!("{}: unavailable ({})", self.label, e)])
            }
        }
    }
}

/// WMO weather interpretation codes.
/// https://open-meteo.com/en/docs
fn wmo_description(code: u64) -> &'static str {
    match code {
        0 => "Clear sky",
        1 => "Mainly clear",
        2 => "Partly cloudy",
        3 => "Overcast",
        45 => "Foggy",
        48 => "Depositing rime fog",
        51 => "Light drizzle",
        53 => "Moderate drizzle",
        55 => "Dense drizzle",
        56 => "Light freezing drizzle",
        57 => "Dense freezing drizzle",
        61 => "Slight rain",
        63 => "Moderate rain",
        65 => "Heavy rain",
        66 => "Light freezing rain",
        67 => "Heavy freezing rain",
        71 => "Slight snow",
        73 => "Moderate snow",
        75 => "Heavy snow",
        77 => "Snow grains",
        80 => "Slight rain showers",
        81 => "Moderate rain showers",
        82 => "Violent rain showers",
        85 => "Slight snow showers",
        86 => "Heavy snow showers",
        95 => "Thunderstorm",
        96 => "Thunderstorm with slight hail",
        99 => "Thunderstorm with heavy hail",
        _ => "Unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn widget(units: &str) -> WeatherWidget {
        let mut spec = WidgetSpec::of_type("weather");
        spec.options.insert("units".into(), json!(units));
        WeatherWidget::new(&spec, 80)
    }

    fn conditions(code: u64) -> CurrentConditions {
        CurrentConditions {
            temperature_2m: 71.6,
            apparent_temperature: 69.4,
            relative_humidity_2m: 55.0,
            wind_speed_10m: 7.3,
            weather_code: code,
        }
    }

    #[test]
    fn wmo_codes_resolve() {
        assert_eq!(wmo_description(0), "Clear sky");
        assert_eq!(wmo_description(95), "Thunderstorm");
        assert_eq!(wmo_description(42), "Unknown");
    }

    #[test]
    fn conditions_format_fahrenheit() {
        let lines = widget("f").format_conditions(&conditions(2));
        assert_eq!(lines[0], "Weather:");
        assert_eq!(lines[1], "  Partly cloudy, 72°F (feels 69°F)");
        assert_eq!(lines[2], "  Humidity: 55% | Wind: 7 mph");
    }

    #[test]
    fn conditions_format_celsius() {
        let lines = widget("c").format_conditions(&conditions(0));
        assert!(lines[1].contains("°C"));
        assert!(lines[2].ends_with("km/h"));
    }

    #[test]
    fn response_payload_deserializes() {
        let raw = r#"{"current": {"temperature_2m": 20.5, "apparent_temperature": 19.0,
            "relative_humidity_2m": 60, "wind_speed_10m": 12.0, "weather_code": 3}}"#;
        let response: WeatherResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.current.weather_code, 3);
    }
}
