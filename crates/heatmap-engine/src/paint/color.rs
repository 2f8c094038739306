use std::fmt;

/// Straight 8-bit sRGB color, as written in gradient stops (`"#00ff00"`, `"rgb(0, 255, 0)"`).
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    #[inline]
    pub const fn black() -> Self {
        Self::new(0, 0, 0)
    }

    #[inline]
    pub const fn white() -> Self {
        Self::new(255, 255, 255)
    }

    /// Parses `#rgb`, `#rrggbb`, `rgb(r, g, b)` or `rgba(r, g, b, a)`.
    ///
    /// Functional components are truncated to integers and clamped to `0..=255`;
    /// the alpha component of `rgba(...)` is accepted but ignored.
    pub fn parse(s: &str) -> Result<Self, ColorParseError> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| ColorParseError::new(s));
        }
        if s.starts_with("rgb") {
            return parse_functional(s).ok_or_else(|| ColorParseError::new(s));
        }
        Err(ColorParseError::new(s))
    }

    /// Fail-soft variant of [`parse`](Self::parse): unrecognized input becomes black.
    pub fn parse_or_black(s: &str) -> Self {
        match Self::parse(s) {
            Ok(c) => c,
            Err(e) => {
                log::warn!("{e}; using black");
                Self::black()
            }
        }
    }

    /// Per-channel linear interpolation, rounded to the nearest integer.
    #[inline]
    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| -> u8 {
            let v = a as f32 + (b as f32 - a as f32) * t;
            v.round().clamp(0.0, 255.0) as u8
        };
        Rgb::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }
}

fn parse_hex(hex: &str) -> Option<Rgb> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok();
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();

    match hex.len() {
        3 => {
            // "#0f0" expands each digit: 0 → 00, f → ff.
            let (r, g, b) = (nibble(0)?, nibble(1)?, nibble(2)?);
            Some(Rgb::new(r * 17, g * 17, b * 17))
        }
        6 => Some(Rgb::new(byte(0)?, byte(2)?, byte(4)?)),
        _ => None,
    }
}

fn parse_functional(s: &str) -> Option<Rgb> {
    let open = s.find('(')?;
    let close = s.rfind(')')?;
    if close < open {
        return None;
    }
    let name = s[..open].trim();
    if name != "rgb" && name != "rgba" {
        return None;
    }

    let mut channels = [0u8; 3];
    let mut parts = s[open + 1..close]
        .split(|c: char| c == ',' || c.is_whitespace() || c == '/')
        .filter(|p| !p.is_empty());

    for ch in &mut channels {
        let v: f32 = parts.next()?.parse().ok()?;
        if !v.is_finite() {
            return None;
        }
        *ch = v.trunc().clamp(0.0, 255.0) as u8;
    }

    Some(Rgb::new(channels[0], channels[1], channels[2]))
}

/// A color string that is neither hex nor functional RGB notation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorParseError {
    pub input: String,
}

impl ColorParseError {
    fn new(input: impl Into<String>) -> Self {
        Self { input: input.into() }
    }
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized color {:?}", self.input)
    }
}

impl std::error::Error for ColorParseError {}

/// Linear premultiplied RGBA color used for surface clears.
///
/// Invariant: `rgb` components are multiplied by `a`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32, // premultiplied
    pub g: f32, // premultiplied
    pub b: f32, // premultiplied
    pub a: f32,
}

impl Color {
    #[inline]
    pub const fn transparent() -> Self {
        Self { r: 0.0, g: 0.0, b: 0.0, a: 0.0 }
    }

    /// Creates a premultiplied color from straight sRGB bytes.
    #[inline]
    pub fn from_srgb_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::from_straight(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a as f32 / 255.0)
    }

    /// Creates a premultiplied color from straight alpha components.
    #[inline]
    pub fn from_straight(r: f32, g: f32, b: f32, a: f32) -> Self {
        let a = a.clamp(0.0, 1.0);
        Self {
            r: r.clamp(0.0, 1.0) * a,
            g: g.clamp(0.0, 1.0) * a,
            b: b.clamp(0.0, 1.0) * a,
            a,
        }
    }
}

impl From<Rgb> for Color {
    fn from(c: Rgb) -> Self {
        Color::from_srgb_u8(c.r, c.g, c.b, 255)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── hex ───────────────────────────────────────────────────────────────

    #[test]
    fn parses_six_digit_hex() {
        assert_eq!(Rgb::parse("#00ff80"), Ok(Rgb::new(0, 255, 128)));
    }

    #[test]
    fn parses_three_digit_hex() {
        assert_eq!(Rgb::parse("#0f0"), Ok(Rgb::new(0, 255, 0)));
        assert_eq!(Rgb::parse("#abc"), Ok(Rgb::new(0xaa, 0xbb, 0xcc)));
    }

    #[test]
    fn hex_is_case_insensitive() {
        assert_eq!(Rgb::parse("#FFff00"), Ok(Rgb::new(255, 255, 0)));
    }

    #[test]
    fn rejects_bad_hex() {
        assert!(Rgb::parse("#12345").is_err());
        assert!(Rgb::parse("#ggg").is_err());
        assert!(Rgb::parse("#").is_err());
    }

    // ── functional ────────────────────────────────────────────────────────

    #[test]
    fn parses_rgb_function() {
        assert_eq!(Rgb::parse("rgb(10, 20, 30)"), Ok(Rgb::new(10, 20, 30)));
        assert_eq!(Rgb::parse("rgb(10 20 30)"), Ok(Rgb::new(10, 20, 30)));
    }

    #[test]
    fn parses_rgba_and_ignores_alpha() {
        assert_eq!(Rgb::parse("rgba(1,2,3,0.5)"), Ok(Rgb::new(1, 2, 3)));
    }

    #[test]
    fn functional_components_truncate_and_clamp() {
        assert_eq!(Rgb::parse("rgb(12.9, 300, -4)"), Ok(Rgb::new(12, 255, 0)));
    }

    #[test]
    fn rejects_short_functional() {
        assert!(Rgb::parse("rgb(1, 2)").is_err());
        assert!(Rgb::parse("rgb 1 2 3").is_err());
    }

    // ── fail-soft ─────────────────────────────────────────────────────────

    #[test]
    fn unknown_formats_resolve_to_black() {
        assert_eq!(Rgb::parse_or_black("tomato"), Rgb::black());
        assert_eq!(Rgb::parse_or_black(""), Rgb::black());
        assert_eq!(Rgb::parse_or_black("hsl(0, 100%, 50%)"), Rgb::black());
    }

    #[test]
    fn error_names_the_input() {
        let err = Rgb::parse("nope").unwrap_err();
        assert_eq!(err.input, "nope");
        assert!(err.to_string().contains("nope"));
    }

    // ── lerp ──────────────────────────────────────────────────────────────

    #[test]
    fn lerp_endpoints_and_midpoint() {
        let a = Rgb::black();
        let b = Rgb::white();
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Rgb::new(128, 128, 128));
    }
}
