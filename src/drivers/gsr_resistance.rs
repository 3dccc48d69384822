//! Shimmer GSR ADC to skin resistance conversion.
//!
//! Each hardware range has a 4th order polynomial curve-fit of resistance
//! (ohms) against the raw 12-bit ADC value:
//! `R = a4*x^4 + a3*x^3 + a2*x^2 + a1*x + a0`, truncated toward zero.
//!
//! - A pinned (non-auto) range also has a valid ADC window; samples outside it
//!   yield [`UNKNOWN_RESISTANCE`].
//! - Under auto-ranging the window is not checked; the range the device
//!   reports is trusted as-is.
//! - The 3M3 curve bends above ADC 3163, where a linear correction replaces
//!   the quartic.
use crate::drivers::GsrRange;

/// Returned when the sample cannot be converted. Callers must check for it.
pub const UNKNOWN_RESISTANCE: i32 = i32::MAX;

/// First ADC value handled by the 3M3 linear correction.
pub const RES_3M3_LINEAR_START_ADC: i32 = 3163;
/// Resistance (ohms) at [`RES_3M3_LINEAR_START_ADC`].
pub const RES_3M3_LINEAR_START_OHMS: i32 = 864_000;
/// Ohms lost per ADC count above [`RES_3M3_LINEAR_START_ADC`].
pub const RES_3M3_LINEAR_SLOPE: f64 = 256.2748;

/// Calibration of one hardware range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurveFit {
    /// `[a4, a3, a2, a1, a0]`
    pub coefficients: [f64; 5],
    /// Inclusive valid ADC window, enforced only when the range is pinned.
    pub min_adc: i32,
    pub max_adc: i32,
}

impl CurveFit {
    pub fn contains(&self, adc: i32) -> bool {
        (self.min_adc..=self.max_adc).contains(&adc)
    }

    pub fn evaluate(&self, adc: i32) -> i32 {
        let x = f64::from(adc);
        let [a4, a3, a2, a1, a0] = self.coefficients;
        let ohms = a4 * x.powi(4) + a3 * x.powi(3) + a2 * x.powi(2) + a1 * x + a0;
        // `as` truncates toward zero and saturates at the i32 bounds
        ohms as i32
    }
}

pub const CURVE_40K: CurveFit = CurveFit {
    coefficients: [6.5995e-9, -6.8950e-5, 0.2699, -476.9835, 340351.3341],
    min_adc: 1140,
    max_adc: 3400,
};

pub const CURVE_287K: CurveFit = CurveFit {
    coefficients: [
        1.3569627e-8,
        -1.650399e-4,
        0.7541990,
        -1572.6287856,
        1367507.9270,
    ],
    min_adc: 1490,
    max_adc: 3800,
};

pub const CURVE_1M: CurveFit = CurveFit {
    coefficients: [
        2.550036498e-8,
        -3.3136e-4,
        1.6509426597,
        -3833.348044,
        3806317.6947,
    ],
    min_adc: 1630,
    max_adc: 3700,
};

/// Quartic part of the 3M3 range, valid below [`RES_3M3_LINEAR_START_ADC`].
pub const CURVE_3M3: CurveFit = CurveFit {
    coefficients: [
        3.7153627e-7,
        -4.239437e-3,
        17.905709,
        -33723.8657,
        25368044.6279,
    ],
    min_adc: 1125,
    max_adc: 3300,
};

impl GsrRange {
    /// Quartic calibration for a fixed range; `None` for `AutoRange`.
    pub fn curve_fit(self) -> Option<&'static CurveFit> {
        match self {
            GsrRange::Res40K => Some(&CURVE_40K),
            GsrRange::Res287K => Some(&CURVE_287K),
            GsrRange::Res1M => Some(&CURVE_1M),
            GsrRange::Res3M3 => Some(&CURVE_3M3),
            GsrRange::AutoRange => None,
        }
    }
}

/// Estimate skin resistance (ohms) from a GSR ADC sample.
///
/// `reported_range` is the range the device tagged the sample with and is
/// only consulted when `configured_range` is `AutoRange`. A pinned range
/// gets its ADC window enforced; auto-ranging does not.
///
/// For the 3M3 band the linear correction (`adc >= 3163`) is selected before
/// the window check, so the window only gates the quartic branch.
pub fn gsr_resistance(adc: i32, reported_range: GsrRange, configured_range: GsrRange) -> i32 {
    let validate = configured_range != GsrRange::AutoRange;
    let range = if validate {
        configured_range
    } else {
        reported_range
    };

    let fit = match range {
        GsrRange::Res40K => &CURVE_40K,
        GsrRange::Res287K => &CURVE_287K,
        GsrRange::Res1M => &CURVE_1M,
        GsrRange::Res3M3 if adc >= RES_3M3_LINEAR_START_ADC => {
            return res_3m3_linear_correction(adc);
        }
        GsrRange::Res3M3 => &CURVE_3M3,
        GsrRange::AutoRange => return UNKNOWN_RESISTANCE,
    };

    if validate && !fit.contains(adc) {
        return UNKNOWN_RESISTANCE;
    }
    fit.evaluate(adc)
}

fn res_3m3_linear_correction(adc: i32) -> i32 {
    let counts = f64::from(adc - RES_3M3_LINEAR_START_ADC);
    let correction = (RES_3M3_LINEAR_SLOPE * counts).round() as i32;
    RES_3M3_LINEAR_START_OHMS.saturating_sub(correction)
}

pub fn is_unknown_resistance(ohms: i32) -> bool {
    ohms == UNKNOWN_RESISTANCE
}
