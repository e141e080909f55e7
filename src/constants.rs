/// Fixed values shared by the renderer, the batch driver and the CLI

pub mod colors {
    use crate::theme::Color;

    /// Ghost body fill (opaque white)
    pub const GHOST: Color = Color::rgba(255, 255, 255, 255);

    /// Initial canvas fill
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    /// Active state background, teal #38C5BB
    pub const ACTIVE: Color = Color::rgba(56, 197, 187, 255);

    /// Inactive state background, dark grey #292C33
    pub const INACTIVE: Color = Color::rgba(41, 44, 51, 255);
}

pub mod themes {
    /// Theme the application manifest uses as its default icon set
    pub const ACTIVE: &str = "active";

    pub const INACTIVE: &str = "inactive";
}

pub mod output {
    /// Icon sizes generated when nothing else is configured
    pub const DEFAULT_SIZES: [u32; 3] = [16, 48, 128];

    /// Config file picked up from the working directory when present
    pub const DEFAULT_CONFIG_FILE: &str = "ghost-icons.yaml";

    /// Background corner radius is `size / CORNER_RADIUS_DIVISOR`
    pub const CORNER_RADIUS_DIVISOR: u32 = 6;
}
