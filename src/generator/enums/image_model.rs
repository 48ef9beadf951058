#[non_exhaustive]
pub struct ImageModel;

impl ImageModel {
    pub const NANO_BANANA: &'static str = "nano-banana";
    pub const NANO_BANANA_PRO: &'static str = "nano-banana-pro";
    pub const FLUX_SCHNELL: &'static str = "flux-schnell";
    pub const FLUX_DEV: &'static str = "flux-dev";
    pub const SDXL: &'static str = "sdxl";

    pub const ALL: [&'static str; 5] = [
        Self::NANO_BANANA,
        Self::NANO_BANANA_PRO,
        Self::FLUX_SCHNELL,
        Self::FLUX_DEV,
        Self::SDXL,
    ];

    pub fn is_valid(model: &str) -> bool {
        Self::ALL.contains(&model)
    }
}
