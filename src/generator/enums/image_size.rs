#[non_exhaustive]
pub struct ImageSize;

impl ImageSize {
    pub const SQUARE_256: &'static str = "256x256";
    pub const SQUARE_512: &'static str = "512x512";
    pub const SQUARE_768: &'static str = "768x768";
    pub const SQUARE_1024: &'static str = "1024x1024";
    pub const PORTRAIT_1024: &'static str = "1024x1792";
    pub const LANDSCAPE_1024: &'static str = "1792x1024";

    pub const ALL: [&'static str; 6] = [
        Self::SQUARE_256,
        Self::SQUARE_512,
        Self::SQUARE_768,
        Self::SQUARE_1024,
        Self::PORTRAIT_1024,
        Self::LANDSCAPE_1024,
    ];

    pub fn is_valid(size: &str) -> bool {
        Self::ALL.contains(&size)
    }
}
