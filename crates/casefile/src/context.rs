//! Generation context
//!
//! Holds what the renderers share across a batch: where files go, where
//! fonts are searched, the random source and the reference day.

use chrono::{Local, NaiveDate};
use rand::rngs::StdRng;
use rand::SeedableRng;
use raster_core::{default_font_dirs, FontLoader};
use std::path::{Path, PathBuf};

/// Output directory used when none is given
pub const DEFAULT_OUTPUT_DIR: &str = "./data/synthetic_samples";

pub struct GeneratorContext {
    pub(crate) output_dir: PathBuf,
    pub(crate) font_dirs: Vec<PathBuf>,
    pub(crate) fonts: FontLoader,
    pub(crate) rng: StdRng,
    pub(crate) today: NaiveDate,
}

impl GeneratorContext {
    /// Defaults: `./data/synthetic_samples`, system font directories,
    /// an entropy-seeded generator and the local date
    pub fn new() -> Self {
        let font_dirs = default_font_dirs();
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            fonts: FontLoader::new(font_dirs.clone()),
            font_dirs,
            rng: StdRng::from_entropy(),
            today: Local::now().date_naive(),
        }
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Replace the font search directories (and drop cached faces)
    pub fn with_font_dirs(mut self, dirs: Vec<PathBuf>) -> Self {
        self.fonts = FontLoader::new(dirs.clone());
        self.font_dirs = dirs;
        self
    }

    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    /// Pin the reference day used for ages, lease terms and note dates
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn font_dirs(&self) -> &[PathBuf] {
        &self.font_dirs
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    /// Path of a file in the output directory
    pub fn output_path(&self, file_name: &str) -> PathBuf {
        self.output_dir.join(file_name)
    }
}

impl Default for GeneratorContext {
    fn default() -> Self {
        Self::new()
    }
}
