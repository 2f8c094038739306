use std::fmt;

use super::Rgb;

/// Number of entries in a [`GradientLut`]; entry `i` represents intensity `i / 255`.
pub const LUT_SIZE: usize = 256;

/// Segments narrower than this are treated as zero-width.
const MIN_SEGMENT_WIDTH: f32 = 1e-6;

/// A single gradient stop.
///
/// `t` is clamped to [0, 1] when the stop enters a [`Gradient`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GradientStop {
    pub t: f32,
    pub color: Rgb,
}

impl GradientStop {
    #[inline]
    pub const fn new(t: f32, color: Rgb) -> Self {
        Self { t, color }
    }

    /// Builds a stop from a color string; unrecognized colors become black.
    pub fn parse(t: f32, color: &str) -> Self {
        Self::new(t, Rgb::parse_or_black(color))
    }
}

/// Ordered list of at least two stops, sorted ascending by position.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    stops: Vec<GradientStop>,
}

impl Gradient {
    /// Normalizes and validates `stops`.
    ///
    /// Positions are clamped to [0, 1] and sorted (stable, so equal positions keep
    /// their input order). Non-finite positions are rejected.
    pub fn new(stops: impl Into<Vec<GradientStop>>) -> Result<Self, GradientError> {
        let mut stops: Vec<GradientStop> = stops.into();
        if stops.len() < 2 {
            return Err(GradientError::TooFewStops(stops.len()));
        }
        if let Some(bad) = stops.iter().find(|s| !s.t.is_finite()) {
            return Err(GradientError::NonFinitePosition(bad.t));
        }

        for s in &mut stops {
            s.t = s.t.clamp(0.0, 1.0);
        }
        stops.sort_by(|a, b| a.t.total_cmp(&b.t));

        Ok(Self { stops })
    }

    /// Builds a gradient from `(position, color string)` pairs.
    pub fn from_css(stops: &[(f32, &str)]) -> Result<Self, GradientError> {
        Self::new(
            stops
                .iter()
                .map(|&(t, c)| GradientStop::parse(t, c))
                .collect::<Vec<_>>(),
        )
    }

    pub fn stops(&self) -> &[GradientStop] {
        &self.stops
    }

    /// Blue → cyan → green → yellow → red.
    pub fn heat() -> Self {
        Self {
            stops: vec![
                GradientStop::new(0.00, Rgb::new(0, 0, 255)),
                GradientStop::new(0.25, Rgb::new(0, 255, 255)),
                GradientStop::new(0.50, Rgb::new(0, 255, 0)),
                GradientStop::new(0.75, Rgb::new(255, 255, 0)),
                GradientStop::new(1.00, Rgb::new(255, 0, 0)),
            ],
        }
    }
}

impl Default for Gradient {
    fn default() -> Self {
        Self::heat()
    }
}

/// Gradient construction error.
#[derive(Debug, Clone, PartialEq)]
pub enum GradientError {
    TooFewStops(usize),
    NonFinitePosition(f32),
}

impl fmt::Display for GradientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GradientError::TooFewStops(n) => {
                write!(f, "gradient needs at least 2 stops, got {n}")
            }
            GradientError::NonFinitePosition(t) => {
                write!(f, "gradient stop position {t} is not finite")
            }
        }
    }
}

impl std::error::Error for GradientError {}

/// Dense 256-entry color table sampled from a gradient.
///
/// Immutable once built; rebuild when the gradient changes.
#[derive(Clone, PartialEq, Eq)]
pub struct GradientLut {
    entries: [Rgb; LUT_SIZE],
}

impl GradientLut {
    pub fn new(gradient: &Gradient) -> Self {
        Self::from_stops(gradient.stops())
    }

    /// Samples any stop list, assumed sorted.
    ///
    /// Degenerate inputs never fail: no stops yields all black, one stop a flat table.
    pub fn from_stops(stops: &[GradientStop]) -> Self {
        let mut entries = [Rgb::black(); LUT_SIZE];
        let Some(last) = stops.len().checked_sub(1) else {
            return Self { entries };
        };

        for (i, entry) in entries.iter_mut().enumerate() {
            let t = i as f32 / (LUT_SIZE - 1) as f32;

            // First segment whose upper stop is at or beyond t; past the end,
            // both ends collapse onto the last stop.
            let mut j = 0;
            while j < last && t > stops[j + 1].t {
                j += 1;
            }
            let lo = stops[j];
            let hi = stops[(j + 1).min(last)];

            let width = hi.t - lo.t;
            let f = if width > MIN_SEGMENT_WIDTH {
                ((t - lo.t) / width).clamp(0.0, 1.0)
            } else {
                0.0
            };

            *entry = lo.color.lerp(hi.color, f);
        }

        Self { entries }
    }

    /// Color for intensity level `v`.
    #[inline]
    pub fn get(&self, v: u8) -> Rgb {
        self.entries[v as usize]
    }

    pub fn entries(&self) -> &[Rgb; LUT_SIZE] {
        &self.entries
    }
}

impl Default for GradientLut {
    fn default() -> Self {
        Self::new(&Gradient::heat())
    }
}

impl fmt::Debug for GradientLut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GradientLut")
            .field("first", &self.entries[0])
            .field("last", &self.entries[LUT_SIZE - 1])
            .finish()
    }
}
