/// One current-weather observation, built from the provider response and
/// consumed immediately by [`WeatherReading::status_line`].
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReading {
    /// Primary condition label, e.g. "Clouds" or "Rain".
    pub condition: String,
    /// Relative humidity, percent.
    pub humidity: u8,
    /// Atmospheric pressure, millibars.
    pub pressure: f64,
    /// Wind speed, metres per second.
    pub wind_speed_mps: f64,
    /// Temperature, degrees Celsius.
    pub temperature_c: f64,
}

impl WeatherReading {
    /// Render the one-line summary shown on the clock face, e.g.
    /// `Clouds 77% 1013mb 4m/s 21C`.
    ///
    /// Wind speed and temperature are rounded half-to-even; humidity and
    /// pressure are emitted as received.
    pub fn status_line(&self) -> String {
        format!(
            "{} {}% {}mb {}m/s {}C",
            self.condition,
            self.humidity,
            self.pressure,
            round_even(self.wind_speed_mps),
            round_even(self.temperature_c),
        )
    }
}

fn round_even(value: f64) -> i64 {
    value.round_ties_even() as i64
}
