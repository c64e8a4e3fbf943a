//! Font loading with fallback
//!
//! A font request walks a fixed list of TrueType candidates and ends in the
//! built-in bitmap face, so loading a font never fails.

use crate::builtin;
use ab_glyph::{Font, FontVec, PxScale, ScaleFont};
use log::{debug, warn};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use walkdir::WalkDir;

/// Extra pixels between lines of multi-line text
const LINE_SPACING: f32 = 4.0;

/// Font weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
}

impl FontWeight {
    /// TrueType files tried in order before the built-in face
    pub fn candidates(&self) -> &'static [&'static str] {
        match self {
            FontWeight::Regular => &["DejaVuSans.ttf", "Arial.ttf"],
            FontWeight::Bold => &["DejaVuSans-Bold.ttf", "Arial Bold.ttf"],
        }
    }
}

/// The glyph source behind a [`FormFont`]
#[derive(Clone)]
pub enum FontFace {
    TrueType(Arc<FontVec>),
    Builtin,
}

/// A face at a pixel size, ready to draw
#[derive(Clone)]
pub struct FormFont {
    face: FontFace,
    size: f32,
}

impl FormFont {
    /// The built-in bitmap face at the given size
    pub fn builtin(size: f32) -> Self {
        Self {
            face: FontFace::Builtin,
            size,
        }
    }

    pub fn face(&self) -> &FontFace {
        &self.face
    }

    /// Em size in pixels
    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self.face, FontFace::Builtin)
    }

    /// `ab_glyph` scale for a TrueType face
    ///
    /// `PxScale` is the ascent-to-descent height, while `size` is the em
    /// size, so the two differ by the face's height/em ratio.
    pub(crate) fn px_scale(face: &FontVec, size: f32) -> PxScale {
        let units_per_em = face.units_per_em().unwrap_or(1000.0);
        PxScale::from(size * face.height_unscaled() / units_per_em)
    }

    /// Distance between the tops of consecutive lines
    pub fn line_height(&self) -> f32 {
        match &self.face {
            FontFace::TrueType(face) => {
                let scaled = face.as_scaled(Self::px_scale(face, self.size));
                scaled.ascent() - scaled.descent() + LINE_SPACING
            }
            FontFace::Builtin => {
                (builtin::CELL_HEIGHT * builtin::scale_for(self.size)) as f32 + LINE_SPACING
            }
        }
    }
}

/// Common system font directories, searched recursively
pub fn default_font_dirs() -> Vec<PathBuf> {
    let mut dirs = vec![
        PathBuf::from("/usr/share/fonts"),
        PathBuf::from("/usr/local/share/fonts"),
        PathBuf::from("/Library/Fonts"),
        PathBuf::from("/System/Library/Fonts"),
        PathBuf::from("C:\\Windows\\Fonts"),
    ];
    if let Some(home) = std::env::var_os("HOME") {
        dirs.push(Path::new(&home).join(".local/share/fonts"));
        dirs.push(Path::new(&home).join(".fonts"));
    }
    dirs
}

/// Resolves font candidates to loaded faces, caching by file name
pub struct FontLoader {
    /// Directories searched when a candidate is not found as given
    search_dirs: Vec<PathBuf>,
    /// File name -> parsed face (None if missing or unparsable)
    cache: HashMap<String, Option<Arc<FontVec>>>,
    /// Candidate lists already reported as falling back
    warned: HashSet<Vec<String>>,
}

impl FontLoader {
    pub fn new(search_dirs: Vec<PathBuf>) -> Self {
        Self {
            search_dirs,
            cache: HashMap::new(),
            warned: HashSet::new(),
        }
    }

    /// Load the preferred face for a weight, falling back as needed
    ///
    /// # Example
    /// ```
    /// use raster_core::{FontLoader, FontWeight};
    ///
    /// let mut loader = FontLoader::new(Vec::new());
    /// let font = loader.load(FontWeight::Bold, 36.0);
    /// assert_eq!(font.size(), 36.0);
    /// ```
    pub fn load(&mut self, weight: FontWeight, size: f32) -> FormFont {
        self.load_candidates(weight.candidates(), size)
    }

    /// Try each candidate in order, then the built-in face
    pub fn load_candidates(&mut self, candidates: &[&str], size: f32) -> FormFont {
        for name in candidates {
            if let Some(face) = self.face(name) {
                return FormFont {
                    face: FontFace::TrueType(face),
                    size,
                };
            }
        }

        let key: Vec<String> = candidates.iter().map(|name| name.to_string()).collect();
        if self.warned.insert(key) {
            warn!(
                "None of {:?} could be loaded, using built-in bitmap font",
                candidates
            );
        }
        FormFont::builtin(size)
    }

    fn face(&mut self, name: &str) -> Option<Arc<FontVec>> {
        if let Some(cached) = self.cache.get(name) {
            return cached.clone();
        }

        let face = self.resolve(name).and_then(|path| read_face(&path));
        self.cache.insert(name.to_string(), face.clone());
        face
    }

    /// Find a candidate as given, then by file name under the search dirs
    fn resolve(&self, name: &str) -> Option<PathBuf> {
        let direct = Path::new(name);
        if direct.is_file() {
            return Some(direct.to_path_buf());
        }

        self.search_dirs
            .iter()
            .filter(|dir| dir.is_dir())
            .find_map(|dir| {
                WalkDir::new(dir)
                    .follow_links(true)
                    .into_iter()
                    .filter_map(|entry| entry.ok())
                    .find(|entry| entry.file_type().is_file() && entry.file_name() == name)
                    .map(|entry| entry.into_path())
            })
    }
}

fn read_face(path: &Path) -> Option<Arc<FontVec>> {
    let data = match std::fs::read(path) {
        Ok(data) => data,
        Err(e) => {
            debug!("Failed to read font {}: {}", path.display(), e);
            return None;
        }
    };

    match FontVec::try_from_vec(data) {
        Ok(face) => {
            debug!("Loaded font {}", path.display());
            Some(Arc::new(face))
        }
        Err(e) => {
            debug!("Failed to parse font {}: {}", path.display(), e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidates() {
        assert_eq!(
            FontWeight::Regular.candidates(),
            &["DejaVuSans.ttf", "Arial.ttf"]
        );
        assert_eq!(
            FontWeight::Bold.candidates(),
            &["DejaVuSans-Bold.ttf", "Arial Bold.ttf"]
        );
    }

    #[test]
    fn test_missing_fonts_fall_back_to_builtin() {
        let mut loader = FontLoader::new(Vec::new());
        let font = loader.load_candidates(&["no-such-face.ttf", "also-missing.ttf"], 24.0);
        assert!(font.is_builtin());
        assert_eq!(font.size(), 24.0);
    }

    #[test]
    fn test_unparsable_font_falls_through() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("broken-face.ttf"), b"not a font").unwrap();

        let mut loader = FontLoader::new(vec![dir.path().to_path_buf()]);
        assert!(loader.resolve("broken-face.ttf").is_some());

        let font = loader.load_candidates(&["broken-face.ttf", "absent-face.ttf"], 20.0);
        assert!(font.is_builtin());
    }

    #[test]
    fn test_failures_are_cached() {
        let mut loader = FontLoader::new(Vec::new());
        loader.load_candidates(&["no-such-face.ttf"], 12.0);
        assert!(matches!(loader.cache.get("no-such-face.ttf"), Some(None)));
    }

    #[test]
    fn test_fallback_is_reported_once_per_candidate_list() {
        let mut loader = FontLoader::new(Vec::new());
        for size in [36.0, 24.0, 24.0, 20.0] {
            let font = loader.load_candidates(&["no-such-face.ttf", "no-such-bold.ttf"], size);
            assert!(font.is_builtin());
        }
        loader.load_candidates(&["no-such-face.ttf"], 12.0);

        assert_eq!(loader.warned.len(), 2);
        assert!(loader
            .warned
            .contains(&vec!["no-such-face.ttf".to_string(), "no-such-bold.ttf".to_string()]));
    }

    #[test]
    fn test_search_dirs_are_recursive() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("truetype").join("dejavu");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(nested.join("nested-face.ttf"), b"x").unwrap();

        let loader = FontLoader::new(vec![dir.path().to_path_buf()]);
        assert_eq!(
            loader.resolve("nested-face.ttf"),
            Some(nested.join("nested-face.ttf"))
        );
    }

    #[test]
    fn test_builtin_line_height() {
        let font = FormFont::builtin(24.0);
        assert_eq!(font.line_height(), 28.0);
    }
}
