//! File categorization by filename extension.
//!
//! Every file maps to exactly one [`Category`]. The mapping is a fixed table of
//! dot-prefixed extensions; anything the table does not name lands in
//! [`Category::Other`].
//!
//! # Examples
//!
//! ```
//! use declutter::file_category::{Category, classify};
//!
//! assert_eq!(classify("photo.png"), Category::Images);
//! assert_eq!(classify("readme.txt"), Category::Documents);
//! assert_eq!(classify("archive.tar.gz"), Category::Other);
//! ```

use std::fmt;

use serde::Serialize;

/// The closed set of category directories a file can be sorted into.
///
/// The declaration order is the processing order used everywhere output or
/// filesystem side effects must be reproducible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Raster images (.jpg, .png)
    Images,
    /// Office documents, plain text and SQL scripts
    Documents,
    /// PDF files
    Pdf,
    /// Audio and video (.mp3, .mp4, .mpg)
    Media,
    /// Zip archives
    Zips,
    /// Binaries, scripts and web sources
    Programming,
    /// Anything not matched by another category
    Other,
}

impl Category {
    /// Number of categories.
    pub const COUNT: usize = 7;

    /// All categories in processing order.
    pub const ALL: [Category; Category::COUNT] = [
        Category::Images,
        Category::Documents,
        Category::Pdf,
        Category::Media,
        Category::Zips,
        Category::Programming,
        Category::Other,
    ];

    /// Returns the directory name for this category.
    ///
    /// # Examples
    ///
    /// ```
    /// use declutter::file_category::Category;
    ///
    /// assert_eq!(Category::Images.dir_name(), "images");
    /// assert_eq!(Category::Zips.dir_name(), "zips");
    /// assert_eq!(Category::Other.dir_name(), "other");
    /// ```
    pub fn dir_name(&self) -> &'static str {
        match self {
            Category::Images => "images",
            Category::Documents => "documents",
            Category::Pdf => "pdf",
            Category::Media => "media",
            Category::Zips => "zips",
            Category::Programming => "programming",
            Category::Other => "other",
        }
    }

    /// Position of this category in [`Category::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// A single extension-to-category mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtensionRule {
    /// Lowercase, dot-prefixed extension such as `.png`.
    pub extension: &'static str,
    pub category: Category,
}

const fn rule(extension: &'static str, category: Category) -> ExtensionRule {
    ExtensionRule {
        extension,
        category,
    }
}

/// The fixed extension table. Several extensions share a category.
pub const EXTENSION_RULES: &[ExtensionRule] = &[
    // Images
    rule(".jpg", Category::Images),
    rule(".png", Category::Images),
    // Documents
    rule(".doc", Category::Documents),
    rule(".docx", Category::Documents),
    rule(".xls", Category::Documents),
    rule(".xlsx", Category::Documents),
    rule(".ppt", Category::Documents),
    rule(".pptx", Category::Documents),
    rule(".txt", Category::Documents),
    rule(".sql", Category::Documents),
    // Pdf
    rule(".pdf", Category::Pdf),
    // Zips
    rule(".zip", Category::Zips),
    // Media
    rule(".mp3", Category::Media),
    rule(".mp4", Category::Media),
    rule(".mpg", Category::Media),
    // Programming
    rule(".dll", Category::Programming),
    rule(".exe", Category::Programming),
    rule(".js", Category::Programming),
    rule(".ts", Category::Programming),
    rule(".css", Category::Programming),
    rule(".html", Category::Programming),
    rule(".tsx", Category::Programming),
    rule(".jsx", Category::Programming),
];

/// How extensions are compared against [`EXTENSION_RULES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExtensionCase {
    /// `.JPG` does not match `.jpg`.
    #[default]
    Sensitive,
    /// Extensions are lowercased before lookup.
    Insensitive,
}

/// Returns the dot-prefixed suffix after the last `.` in `filename`.
///
/// A name without any `.` yields the whole name prefixed with `.`, and a name
/// ending in `.` yields just `.`. Only the latter is used for classification;
/// [`Classifier::classify`] treats a name without a `.` as having no extension.
///
/// ```
/// use declutter::file_category::extension_of;
///
/// assert_eq!(extension_of("archive.tar.gz"), ".gz");
/// assert_eq!(extension_of("Makefile"), ".Makefile");
/// assert_eq!(extension_of("trailing."), ".");
/// ```
pub fn extension_of(filename: &str) -> String {
    let suffix = filename
        .rsplit_once('.')
        .map_or(filename, |(_, suffix)| suffix);
    format!(".{suffix}")
}

/// Maps filenames to categories under a given case policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct Classifier {
    case: ExtensionCase,
}

impl Classifier {
    pub fn new(case: ExtensionCase) -> Self {
        Self { case }
    }

    /// Maps a dot-prefixed extension to a category, if any rule names it.
    pub fn extension_to_category(&self, extension: &str) -> Option<Category> {
        let matches = |rule: &&ExtensionRule| match self.case {
            ExtensionCase::Sensitive => rule.extension == extension,
            ExtensionCase::Insensitive => rule.extension.eq_ignore_ascii_case(extension),
        };
        EXTENSION_RULES.iter().find(matches).map(|rule| rule.category)
    }

    /// Determines the category of a file from its name alone. A name with no
    /// `.` is always [`Category::Other`].
    pub fn classify(&self, filename: &str) -> Category {
        if !filename.contains('.') {
            return Category::Other;
        }
        self.extension_to_category(&extension_of(filename))
            .unwrap_or(Category::Other)
    }
}

/// Classifies `filename` with the default, case-sensitive policy.
pub fn classify(filename: &str) -> Category {
    Classifier::default().classify(filename)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_category_dir_names() {
        assert_eq!(Category::Images.dir_name(), "images");
        assert_eq!(Category::Documents.dir_name(), "documents");
        assert_eq!(Category::Pdf.dir_name(), "pdf");
        assert_eq!(Category::Media.dir_name(), "media");
        assert_eq!(Category::Zips.dir_name(), "zips");
        assert_eq!(Category::Programming.dir_name(), "programming");
        assert_eq!(Category::Other.dir_name(), "other");
    }

    #[test]
    fn test_all_is_in_index_order() {
        for (i, category) in Category::ALL.iter().enumerate() {
            assert_eq!(category.index(), i);
        }
    }

    #[test]
    fn test_dir_names_are_distinct() {
        let names: HashSet<_> = Category::ALL.iter().map(|c| c.dir_name()).collect();
        assert_eq!(names.len(), Category::COUNT);
    }

    #[test]
    fn test_rules_are_unique_and_lowercase() {
        let mut seen = HashSet::new();
        for rule in EXTENSION_RULES {
            assert!(rule.extension.starts_with('.'));
            assert_eq!(rule.extension, rule.extension.to_lowercase());
            assert!(seen.insert(rule.extension), "duplicate {}", rule.extension);
            assert_ne!(rule.category, Category::Other);
        }
    }

    #[test]
    fn test_classify_known_extensions() {
        assert_eq!(classify("readme.txt"), Category::Documents);
        assert_eq!(classify("photo.png"), Category::Images);
        assert_eq!(classify("video.mp4"), Category::Media);
        assert_eq!(classify("app.js"), Category::Programming);
        assert_eq!(classify("data.pdf"), Category::Pdf);
        assert_eq!(classify("bundle.zip"), Category::Zips);
        assert_eq!(classify("schema.sql"), Category::Documents);
        assert_eq!(classify("setup.exe"), Category::Programming);
    }

    #[test]
    fn test_classify_uses_last_dot() {
        assert_eq!(classify("archive.tar.gz"), Category::Other);
        assert_eq!(classify("report.final.pdf"), Category::Pdf);
    }

    #[test]
    fn test_classify_degenerate_names() {
        assert_eq!(classify("noext"), Category::Other);
        assert_eq!(classify("trailing."), Category::Other);
        assert_eq!(classify(""), Category::Other);
        // ".png" has an empty stem but still a png suffix
        assert_eq!(classify(".png"), Category::Images);
        // a bare name equal to an extension word is not that extension
        assert_eq!(classify("png"), Category::Other);
    }

    #[test]
    fn test_classify_name_equal_to_extension_word_is_other() {
        let insensitive = Classifier::new(ExtensionCase::Insensitive);
        for name in ["png", "zip", "pdf", "exe", "js", "PNG"] {
            assert_eq!(classify(name), Category::Other, "{name}");
            assert_eq!(insensitive.classify(name), Category::Other, "{name}");
        }
        assert_eq!(insensitive.classify("Setup.EXE"), Category::Programming);
    }

    #[test]
    fn test_classify_is_case_sensitive_by_default() {
        assert_eq!(classify("photo.jpg"), Category::Images);
        assert_eq!(classify("photo.JPG"), Category::Other);
        assert_eq!(classify("Notes.TXT"), Category::Other);
    }

    #[test]
    fn test_classify_case_insensitive() {
        let classifier = Classifier::new(ExtensionCase::Insensitive);
        assert_eq!(classifier.classify("photo.JPG"), Category::Images);
        assert_eq!(classifier.classify("Notes.TxT"), Category::Documents);
        assert_eq!(classifier.classify("noext"), Category::Other);
    }

    #[test]
    fn test_classify_is_pure() {
        let names = ["a.png", "b.zip", "c", "d.JPG", "e.html"];
        let first: Vec<_> = names.iter().map(|n| classify(n)).collect();
        let second: Vec<_> = names.iter().rev().map(|n| classify(n)).collect();
        let second: Vec<_> = second.into_iter().rev().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_extension_to_category_unknown() {
        let classifier = Classifier::default();
        assert_eq!(classifier.extension_to_category(".xyz"), None);
        assert_eq!(classifier.extension_to_category("png"), None);
    }
}
