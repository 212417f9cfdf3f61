//! Colors

/// Color as Red, Green, Blue
///
/// Every channel is fully opaque; there is no alpha component
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq,Hash)]
pub struct Rgb8 {
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
}

impl Rgb8 {
    /// White Color (255,255,255)
    pub fn white() -> Self {
        Self::new(255,255,255)
    }
    /// Black Color (0,0,0)
    pub fn black() -> Self {
        Self::new(0,0,0)
    }
    /// Red Color (255,0,0)
    pub fn red() -> Self {
        Self::new(255,0,0)
    }
    /// Green Color (0,255,0)
    pub fn green() -> Self {
        Self::new(0,255,0)
    }
    /// Blue Color (0,0,255)
    pub fn blue() -> Self {
        Self::new(0,0,255)
    }
    /// Create new color
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb8 { r, g, b }
    }
    /// Gray scale color, all components set to `g`
    pub fn gray(g: u8) -> Self {
        Self::new(g,g,g)
    }
    /// Create a color from the first three values of a slice
    ///
    ///     use ppmcanvas::Rgb8;
    ///     assert_eq!(Rgb8::from_slice(&[1,2,3,4]), Rgb8::new(1,2,3));
    ///
    pub fn from_slice(v: &[u8]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
    /// Components as an array in R,G,B order
    pub fn to_array(self) -> [u8;3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8;3]> for Rgb8 {
    fn from(c: [u8;3]) -> Rgb8 {
        Rgb8::new(c[0], c[1], c[2])
    }
}
impl From<(u8,u8,u8)> for Rgb8 {
    fn from(c: (u8,u8,u8)) -> Rgb8 {
        Rgb8::new(c.0, c.1, c.2)
    }
}
impl From<Rgb8> for [u8;3] {
    fn from(c: Rgb8) -> [u8;3] {
        c.to_array()
    }
}
impl From<image::Rgb<u8>> for Rgb8 {
    fn from(c: image::Rgb<u8>) -> Rgb8 {
        Rgb8::from(c.0)
    }
}
