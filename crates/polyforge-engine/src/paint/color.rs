use core::fmt;

/// Linear RGB triple used for per-vertex colors.
///
/// Components are nominally in `[0, 1]` but are never clamped: out-of-range
/// values propagate to the shader untouched.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    #[inline]
    pub const fn white() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }

    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[f32; 3]> for Rgb {
    #[inline]
    fn from([r, g, b]: [f32; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Rgb> for [f32; 3] {
    #[inline]
    fn from(c: Rgb) -> Self {
        c.to_array()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Straight-alpha RGBA color, used for framebuffer clears.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn opaque_white() -> Self {
        Self::new(1.0, 1.0, 1.0, 1.0)
    }

    #[inline]
    pub const fn opaque(rgb: Rgb) -> Self {
        Self::new(rgb.r, rgb.g, rgb.b, 1.0)
    }

    pub(crate) fn to_wgpu(self) -> wgpu::Color {
        wgpu::Color {
            r: self.r as f64,
            g: self.g as f64,
            b: self.b as f64,
            a: self.a as f64,
        }
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::opaque_white()
    }
}

/// Color argument accepted by every mesh generator: either a palette name
/// (resolved case-insensitively) or an explicit triple.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorSpec {
    Named(String),
    Rgb(Rgb),
}

impl From<&str> for ColorSpec {
    fn from(name: &str) -> Self {
        ColorSpec::Named(name.to_owned())
    }
}

impl From<String> for ColorSpec {
    fn from(name: String) -> Self {
        ColorSpec::Named(name)
    }
}

impl From<Rgb> for ColorSpec {
    fn from(rgb: Rgb) -> Self {
        ColorSpec::Rgb(rgb)
    }
}

impl From<[f32; 3]> for ColorSpec {
    fn from(rgb: [f32; 3]) -> Self {
        ColorSpec::Rgb(rgb.into())
    }
}

impl From<super::NamedColor> for ColorSpec {
    fn from(named: super::NamedColor) -> Self {
        ColorSpec::Rgb(named.rgb())
    }
}

/// Repeats `rgb` once per vertex.
pub fn replicate(rgb: Rgb, count: usize) -> Vec<[f32; 3]> {
    vec![rgb.to_array(); count]
}

/// Repeats `rgb` once per vertex as a flat `count * 3` float stream.
pub fn replicate_flat(rgb: Rgb, count: usize) -> Vec<f32> {
    let mut out = Vec::with_capacity(count * 3);
    for _ in 0..count {
        out.extend_from_slice(&rgb.to_array());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replicate_yields_count_copies() {
        let c = Rgb::new(0.25, 0.5, 0.75);
        let out = replicate(c, 4);
        assert_eq!(out.len(), 4);
        assert!(out.iter().all(|v| *v == [0.25, 0.5, 0.75]));
    }

    #[test]
    fn replicate_flat_interleaves_channels() {
        let out = replicate_flat(Rgb::new(1.0, 0.0, 0.5), 2);
        assert_eq!(out, vec![1.0, 0.0, 0.5, 1.0, 0.0, 0.5]);
    }

    #[test]
    fn replicate_zero_is_empty() {
        assert!(replicate(Rgb::white(), 0).is_empty());
        assert!(replicate_flat(Rgb::white(), 0).is_empty());
    }

    #[test]
    fn triple_spec_is_not_clamped() {
        let spec: ColorSpec = [2.0, -1.0, 0.5].into();
        assert_eq!(spec, ColorSpec::Rgb(Rgb::new(2.0, -1.0, 0.5)));
    }

    #[test]
    fn clear_color_defaults_to_opaque_white() {
        assert_eq!(Rgba::default(), Rgba::new(1.0, 1.0, 1.0, 1.0));
    }
}
