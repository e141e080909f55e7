use crate::config::Config;
use crate::constants::themes;
use crate::renderer;
use crate::theme::{Theme, ThemeSet};
use anyhow::{Context, Result};
use image::{ImageFormat, RgbaImage};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// `icon-<theme>-<size>.png`
pub fn icon_file_name(theme: &str, size: u32) -> String {
    format!("icon-{}-{}.png", theme, size)
}

/// One output file: a theme rendered at one size
#[derive(Debug, Clone, PartialEq)]
pub struct IconJob {
    pub theme: Theme,
    pub size: u32,
}

impl IconJob {
    pub fn file_name(&self) -> String {
        icon_file_name(&self.theme.name, self.size)
    }

    pub fn render(&self) -> RgbaImage {
        renderer::render(self.size, self.theme.color)
    }
}

/// Renders every theme at every size and writes the PNGs.
///
/// Jobs share nothing, so they run one after another.
#[derive(Debug, Clone)]
pub struct BatchDriver {
    output_dir: PathBuf,
    sizes: Vec<u32>,
    themes: ThemeSet,
}

impl BatchDriver {
    pub fn new(output_dir: impl Into<PathBuf>, sizes: Vec<u32>, themes: ThemeSet) -> Self {
        BatchDriver {
            output_dir: output_dir.into(),
            sizes,
            themes,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        BatchDriver::new(
            config.output_dir.clone(),
            config.sizes.clone(),
            config.themes.clone(),
        )
    }

    /// Themes outer, sizes inner, both in declared order
    pub fn jobs(&self) -> Vec<IconJob> {
        self.themes
            .iter()
            .flat_map(|theme| {
                self.sizes.iter().map(move |&size| IconJob {
                    theme: theme.clone(),
                    size,
                })
            })
            .collect()
    }

    /// Write every icon, printing one line per file to stdout
    pub fn run(&self) -> Result<Vec<PathBuf>> {
        self.run_to(&mut io::stdout().lock())
    }

    /// Write every icon, reporting one line per file to `out`. Stops at the
    /// first failed write.
    pub fn run_to(&self, out: &mut impl Write) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(&self.output_dir).with_context(|| {
            format!(
                "Failed to create output directory {}",
                self.output_dir.display()
            )
        })?;

        let jobs = self.jobs();
        info!(count = jobs.len(), dir = %self.output_dir.display(), "Generating icons");

        let mut written = Vec::with_capacity(jobs.len());
        for job in &jobs {
            let file_name = job.file_name();
            let path = self.output_dir.join(&file_name);

            debug!(theme = %job.theme.name, size = job.size, "Rendering");
            write_png(&job.render(), &path)?;

            writeln!(out, "Created {}", file_name).context("Failed to report progress")?;
            written.push(path);
        }

        if self.themes.get(themes::ACTIVE).is_some() {
            writeln!(out).context("Failed to report progress")?;
            writeln!(
                out,
                "Note: the application manifest uses icon-{}-{{size}}.png as the default icon set",
                themes::ACTIVE
            )
            .context("Failed to report progress")?;
        }

        Ok(written)
    }
}

pub fn write_png(img: &RgbaImage, path: &Path) -> Result<()> {
    img.save_with_format(path, ImageFormat::Png)
        .with_context(|| format!("Failed to write {}", path.display()))
}
