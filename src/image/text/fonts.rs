//! Font database shared by every job of a run.

use std::path::PathBuf;
use std::sync::Arc;
use usvg::fontdb::Database;

use super::FontUnavailable;
use crate::debug;

/// Families tried, in order, after any configured ones.
const DEFAULT_FAMILIES: &[&str] = &[
    "Arial",
    "Helvetica",
    "DejaVu Sans",
    "Liberation Sans",
    "Noto Sans",
];

/// Loaded font faces plus the family chosen for placeholder text.
///
/// Loading system fonts is the slowest step of a run, so a book is built
/// once per batch and passed by reference to every job.
pub struct FontBook {
    db: Arc<Database>,
    family: Option<String>,
}

impl FontBook {
    /// Load system fonts and any extra font directories.
    ///
    /// `preferred` families are tried before the built-in list; when none of
    /// them is installed the first available family is used.
    pub fn system(extra_dirs: &[PathBuf], preferred: &[String]) -> Self {
        let mut db = Database::new();
        db.load_system_fonts();
        for dir in extra_dirs {
            db.load_fonts_dir(dir);
        }
        debug!("fonts"; "loaded {} font faces", db.len());

        Self::from_database(db, preferred)
    }

    /// A book without any scalable fonts. Every text run uses the bitmap glyphs.
    #[cfg(test)]
    pub fn empty() -> Self {
        Self::from_database(Database::new(), &[])
    }

    fn from_database(db: Database, preferred: &[String]) -> Self {
        let family = pick_family(&db, preferred);
        match &family {
            Some(name) => debug!("fonts"; "using font family `{}`", name),
            None => debug!("fonts"; "no scalable font installed"),
        }
        Self {
            db: Arc::new(db),
            family,
        }
    }

    /// Family used for generated text.
    pub(crate) fn family(&self) -> Result<&str, FontUnavailable> {
        self.family.as_deref().ok_or(FontUnavailable)
    }

    /// usvg options sharing this book's font database.
    pub fn usvg_options(&self) -> usvg::Options<'static> {
        usvg::Options {
            fontdb: Arc::clone(&self.db),
            ..usvg::Options::default()
        }
    }
}

fn pick_family(db: &Database, preferred: &[String]) -> Option<String> {
    let installed = |name: &str| {
        db.faces().any(|face| {
            face.families
                .iter()
                .any(|(family, _)| family.eq_ignore_ascii_case(name))
        })
    };

    preferred
        .iter()
        .map(String::as_str)
        .chain(DEFAULT_FAMILIES.iter().copied())
        .find(|name| installed(name))
        .map(str::to_string)
        .or_else(|| {
            db.faces()
                .find_map(|face| face.families.first().map(|(family, _)| family.clone()))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_book_has_no_family() {
        let book = FontBook::empty();
        assert_eq!(book.family(), Err(FontUnavailable));
    }

    #[test]
    fn test_pick_family_empty_database() {
        let db = Database::new();
        assert_eq!(pick_family(&db, &["Arial".to_string()]), None);
    }

    #[test]
    fn test_usvg_options_share_database() {
        let book = FontBook::empty();
        let options = book.usvg_options();
        assert!(Arc::ptr_eq(&options.fontdb, &book.db));
    }
}
