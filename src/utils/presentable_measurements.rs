//! Resting place for [PresentableMeasurement]: how times & memory sizes are shown in the report

use std::{
    fmt::{Display, Formatter},
    time::Duration,
};
use once_cell::sync::Lazy;


/// One step of an auto-scaling table: values of at least `threshold` are divided by `divisor`
/// and shown with `decimals` places, followed by `suffix`
#[derive(Debug, Clone, Copy)]
pub struct Scale {
    threshold: f64,
    divisor:   f64,
    suffix:    &'static str,
    decimals:  usize,
}

/// Holds and presents a measurement, picking the first [Scale] (biggest first) the value reaches
pub struct PresentableMeasurement {
    pub(crate) value: f64,
    scales: &'static [Scale],
}

impl Display for PresentableMeasurement {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.scales.iter().find(|scale| self.value >= scale.threshold) {
            Some(scale) => write!(f, "{:.*}{}", scale.decimals, self.value / scale.divisor, scale.suffix),
            // negative or NaN: no scale applies
            None => write!(f, "{}", self.value),
        }
    }
}

/// A duration, in seconds with 8 decimal places -- the resolution of the report tables
pub fn seconds_measurement(duration: Duration) -> PresentableMeasurement {
    const SECONDS: &[Scale] = &[
        Scale { threshold: 0.0, divisor: 1.0, suffix: "", decimals: 8 },
    ];
    PresentableMeasurement {
        value:  duration.as_secs_f64(),
        scales: SECONDS,
    }
}

/// A number of bytes, scaled to the biggest binary unit it reaches
pub fn bytes_measurement(value: f64) -> PresentableMeasurement {
    static BYTES: Lazy<Vec<Scale>> = Lazy::new(|| {
        ["TiB", "GiB", "MiB", "KiB"].into_iter()
            .zip([40, 30, 20, 10])
            .map(|(suffix, exponent)| {
                let unit = (1u64 << exponent) as f64;
                Scale { threshold: unit, divisor: unit, suffix, decimals: 2 }
            })
            .chain([Scale { threshold: 0.0, divisor: 1.0, suffix: "b", decimals: 0 }])
            .collect()
    });
    PresentableMeasurement {
        value,
        scales: BYTES.as_slice(),
    }
}
