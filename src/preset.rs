/// Layout parameters for one icon size.
///
/// Presets are looked up by exact size. Sizes without an entry use
/// [`FALLBACK`]; they are not scaled from the nearest entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preset {
    /// Empty rows above and below the ghost, in pixels
    pub padding: u32,
    /// Number of bumps along the bottom edge
    pub wave_count: u32,
    /// Eye diameter as a fraction of the icon size
    pub eye_ratio: f64,
    /// Body width as a fraction of the icon size
    pub body_width_ratio: f64,
}

const SMALL: Preset = Preset {
    padding: 2,
    wave_count: 2,
    eye_ratio: 0.15,
    body_width_ratio: 0.65,
};

const MEDIUM: Preset = Preset {
    padding: 6,
    wave_count: 3,
    eye_ratio: 0.12,
    body_width_ratio: 0.7,
};

const LARGE: Preset = Preset {
    padding: 16,
    wave_count: 4,
    eye_ratio: 0.1,
    body_width_ratio: 0.7,
};

/// Sizes with a documented preset
pub const PRESET_TABLE: [(u32, Preset); 3] = [(16, SMALL), (48, MEDIUM), (128, LARGE)];

/// Used for any size missing from [`PRESET_TABLE`]
pub const FALLBACK: Preset = LARGE;

impl Preset {
    pub fn for_size(size: u32) -> Preset {
        PRESET_TABLE
            .iter()
            .find(|(entry_size, _)| *entry_size == size)
            .map(|(_, preset)| *preset)
            .unwrap_or(FALLBACK)
    }

    /// Whether `size` has its own table entry
    pub fn is_documented(size: u32) -> bool {
        PRESET_TABLE.iter().any(|(entry_size, _)| *entry_size == size)
    }

    pub fn with_wave_count(self, wave_count: u32) -> Preset {
        Preset { wave_count, ..self }
    }
}
