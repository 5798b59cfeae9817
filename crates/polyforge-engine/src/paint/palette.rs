use core::str::FromStr;

use super::{ColorSpec, Rgb};

/// Fixed palette of named colors.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum NamedColor {
    Red,
    Green,
    Blue,
    Yellow,
    Cyan,
    Magenta,
    White,
    Black,
    Gray,
    Orange,
    Purple,
    Pink,
}

impl NamedColor {
    pub const ALL: [NamedColor; 12] = [
        NamedColor::Red,
        NamedColor::Green,
        NamedColor::Blue,
        NamedColor::Yellow,
        NamedColor::Cyan,
        NamedColor::Magenta,
        NamedColor::White,
        NamedColor::Black,
        NamedColor::Gray,
        NamedColor::Orange,
        NamedColor::Purple,
        NamedColor::Pink,
    ];

    /// Canonical upper-case name.
    pub const fn name(self) -> &'static str {
        match self {
            NamedColor::Red => "RED",
            NamedColor::Green => "GREEN",
            NamedColor::Blue => "BLUE",
            NamedColor::Yellow => "YELLOW",
            NamedColor::Cyan => "CYAN",
            NamedColor::Magenta => "MAGENTA",
            NamedColor::White => "WHITE",
            NamedColor::Black => "BLACK",
            NamedColor::Gray => "GRAY",
            NamedColor::Orange => "ORANGE",
            NamedColor::Purple => "PURPLE",
            NamedColor::Pink => "PINK",
        }
    }

    pub const fn rgb(self) -> Rgb {
        match self {
            NamedColor::Red => Rgb::new(1.0, 0.0, 0.0),
            NamedColor::Green => Rgb::new(0.0, 1.0, 0.0),
            NamedColor::Blue => Rgb::new(0.0, 0.0, 1.0),
            NamedColor::Yellow => Rgb::new(1.0, 1.0, 0.0),
            NamedColor::Cyan => Rgb::new(0.0, 1.0, 1.0),
            NamedColor::Magenta => Rgb::new(1.0, 0.0, 1.0),
            NamedColor::White => Rgb::new(1.0, 1.0, 1.0),
            NamedColor::Black => Rgb::new(0.0, 0.0, 0.0),
            NamedColor::Gray => Rgb::new(0.5, 0.5, 0.5),
            NamedColor::Orange => Rgb::new(1.0, 0.5, 0.0),
            NamedColor::Purple => Rgb::new(0.5, 0.0, 1.0),
            NamedColor::Pink => Rgb::new(1.0, 0.4, 0.7),
        }
    }
}

/// A color name that is not part of the palette.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown color name '{0}'")]
pub struct UnknownColorName(pub String);

impl FromStr for NamedColor {
    type Err = UnknownColorName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NamedColor::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownColorName(s.to_owned()))
    }
}

/// Looks up a palette entry by name (case-insensitive).
pub fn lookup_color(name: &str) -> Result<Rgb, UnknownColorName> {
    name.parse::<NamedColor>().map(NamedColor::rgb)
}

/// Resolves a color argument to a triple.
///
/// Unknown names log a warning and fall back to white. Explicit triples are
/// returned unchanged.
pub fn resolve_color(spec: impl Into<ColorSpec>) -> Rgb {
    match spec.into() {
        ColorSpec::Rgb(rgb) => rgb,
        ColorSpec::Named(name) => lookup_color(&name).unwrap_or_else(|err| {
            log::warn!("{err}; using WHITE");
            NamedColor::White.rgb()
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_twelve_distinct_names() {
        let mut names: Vec<_> = NamedColor::ALL.iter().map(|c| c.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 12);
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(lookup_color("red"), Ok(Rgb::new(1.0, 0.0, 0.0)));
        assert_eq!(lookup_color("Orange"), Ok(Rgb::new(1.0, 0.5, 0.0)));
        assert_eq!(lookup_color("PINK"), Ok(Rgb::new(1.0, 0.4, 0.7)));
    }

    #[test]
    fn unknown_name_is_an_error_for_lookup() {
        assert_eq!(
            lookup_color("notacolor"),
            Err(UnknownColorName("notacolor".to_owned()))
        );
    }

    #[test]
    fn unknown_name_resolves_to_white() {
        assert_eq!(resolve_color("notacolor"), Rgb::white());
    }

    #[test]
    fn triples_pass_through() {
        assert_eq!(resolve_color([0.1, 0.2, 0.3]), Rgb::new(0.1, 0.2, 0.3));
        assert_eq!(resolve_color([1.5, -0.5, 9.0]), Rgb::new(1.5, -0.5, 9.0));
    }

    #[test]
    fn every_entry_round_trips_through_its_name() {
        for c in NamedColor::ALL {
            assert_eq!(c.name().to_lowercase().parse::<NamedColor>(), Ok(c));
        }
    }
}
