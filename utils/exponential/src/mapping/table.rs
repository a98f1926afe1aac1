//! Precomputed parameters of the logarithm mapping, one record per scale.
//!
//! The values were derived with 256-bit arithmetic and rounded once to the
//! nearest `f64`. Recomputing them with double precision does not reproduce
//! `max_boundary` bit for bit, so treat the literals as reference data.

/// Constants describing the logarithm mapping at one scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogarithmParams {
    /// Index of `MIN_VALUE`, `MIN_NORMAL_EXPONENT << scale`.
    pub min_index: i32,
    /// Index of `MAX_VALUE`, `((MAX_NORMAL_EXPONENT + 1) << scale) - 1`.
    pub max_index: i32,
    /// Lower boundary of `max_index`, `2^(1024 - 2^-scale)`.
    pub max_boundary: f64,
    /// `log2(e) * 2^scale`.
    pub scale_factor: f64,
    /// `ln(2) * 2^-scale`.
    pub inverse_factor: f64,
}

/// Indexed by `scale - 1`.
pub(crate) static LOGARITHM_PARAMS: [LogarithmParams; 20] = [
    // scale 1
    LogarithmParams {
        min_index: -2044,
        max_index: 2047,
        max_boundary: f64::from_bits(0x7fe6a09e667f3bcd),
        scale_factor: 2.8853900817779268,
        inverse_factor: 0.34657359027997264,
    },
    // scale 2
    LogarithmParams {
        min_index: -4088,
        max_index: 4095,
        max_boundary: f64::from_bits(0x7feae89f995ad3ad),
        scale_factor: 5.7707801635558535,
        inverse_factor: 0.17328679513998632,
    },
    // scale 3
    LogarithmParams {
        min_index: -8176,
        max_index: 8191,
        max_boundary: f64::from_bits(0x7fed5818dcfba487),
        scale_factor: 11.541560327111707,
        inverse_factor: 0.08664339756999316,
    },
    // scale 4
    LogarithmParams {
        min_index: -16352,
        max_index: 16383,
        max_boundary: f64::from_bits(0x7feea4afa2a490da),
        scale_factor: 23.083120654223414,
        inverse_factor: 0.04332169878499658,
    },
    // scale 5
    LogarithmParams {
        min_index: -32704,
        max_index: 32767,
        max_boundary: f64::from_bits(0x7fef50765b6e4540),
        scale_factor: 46.16624130844683,
        inverse_factor: 0.02166084939249829,
    },
    // scale 6
    LogarithmParams {
        min_index: -65408,
        max_index: 65535,
        max_boundary: f64::from_bits(0x7fefa7c1819e90d8),
        scale_factor: 92.33248261689366,
        inverse_factor: 0.010830424696249145,
    },
    // scale 7
    LogarithmParams {
        min_index: -130816,
        max_index: 131071,
        max_boundary: f64::from_bits(0x7fefd3c22b8f71f1),
        scale_factor: 184.6649652337873,
        inverse_factor: 0.0054152123481245725,
    },
    // scale 8
    LogarithmParams {
        min_index: -261632,
        max_index: 262143,
        max_boundary: f64::from_bits(0x7fefe9d96b2a23d9),
        scale_factor: 369.3299304675746,
        inverse_factor: 0.0027076061740622863,
    },
    // scale 9
    LogarithmParams {
        min_index: -523264,
        max_index: 524287,
        max_boundary: f64::from_bits(0x7feff4eaca4391b6),
        scale_factor: 738.6598609351493,
        inverse_factor: 0.0013538030870311431,
    },
    // scale 10
    LogarithmParams {
        min_index: -1046528,
        max_index: 1048575,
        max_boundary: f64::from_bits(0x7feffa74ea381efc),
        scale_factor: 1477.3197218702985,
        inverse_factor: 0.0006769015435155716,
    },
    // scale 11
    LogarithmParams {
        min_index: -2093056,
        max_index: 2097151,
        max_boundary: f64::from_bits(0x7feffd3a565efb65),
        scale_factor: 2954.639443740597,
        inverse_factor: 0.0003384507717577858,
    },
    // scale 12
    LogarithmParams {
        min_index: -4186112,
        max_index: 4194303,
        max_boundary: f64::from_bits(0x7feffe9d237fe372),
        scale_factor: 5909.278887481194,
        inverse_factor: 0.0001692253858788929,
    },
    // scale 13
    LogarithmParams {
        min_index: -8372224,
        max_index: 8388607,
        max_boundary: f64::from_bits(0x7fefff4e8fd40081),
        scale_factor: 11818.557774962388,
        inverse_factor: 8.461269293944645e-05,
    },
    // scale 14
    LogarithmParams {
        min_index: -16744448,
        max_index: 16777215,
        max_boundary: f64::from_bits(0x7fefffa7476f029d),
        scale_factor: 23637.115549924776,
        inverse_factor: 4.230634646972322e-05,
    },
    // scale 15
    LogarithmParams {
        min_index: -33488896,
        max_index: 33554431,
        max_boundary: f64::from_bits(0x7fefffd3a398c1bb),
        scale_factor: 47274.23109984955,
        inverse_factor: 2.115317323486161e-05,
    },
    // scale 16
    LogarithmParams {
        min_index: -66977792,
        max_index: 67108863,
        max_boundary: f64::from_bits(0x7fefffe9d1c4b0f3),
        scale_factor: 94548.4621996991,
        inverse_factor: 1.0576586617430806e-05,
    },
    // scale 17
    LogarithmParams {
        min_index: -133955584,
        max_index: 134217727,
        max_boundary: f64::from_bits(0x7feffff4e8e06c7f),
        scale_factor: 189096.9243993982,
        inverse_factor: 5.288293308715403e-06,
    },
    // scale 18
    LogarithmParams {
        min_index: -267911168,
        max_index: 268435455,
        max_boundary: f64::from_bits(0x7feffffa746fbb40),
        scale_factor: 378193.8487987964,
        inverse_factor: 2.6441466543577014e-06,
    },
    // scale 19
    LogarithmParams {
        min_index: -535822336,
        max_index: 536870911,
        max_boundary: f64::from_bits(0x7feffffd3a37bee0),
        scale_factor: 756387.6975975928,
        inverse_factor: 1.3220733271788507e-06,
    },
    // scale 20
    LogarithmParams {
        min_index: -1071644672,
        max_index: 1073741823,
        max_boundary: f64::from_bits(0x7feffffe9d1bd7c0),
        scale_factor: 1512775.3951951857,
        inverse_factor: 6.610366635894254e-07,
    },
];
