//! Path predicates for the Unified Font Object source specification.
//!
//! All functions operate on repository-relative path strings as git reports
//! them (`/`-separated) and never fail: anything unrecognized is simply not
//! part of a UFO source tree.

/// Non-glyph files that define font-wide data in a UFO container.
pub const METADATA_FILES: [&str; 9] = [
    "metainfo.plist",
    "fontinfo.plist",
    "groups.plist",
    "kerning.plist",
    "features.fea",
    "lib.plist",
    "contents.plist",
    "layercontents.plist",
    "layerinfo.plist",
];

pub const GLYPH_EXTENSION: &str = ".glif";
pub const UFO_EXTENSION: &str = ".ufo";

const DATA_DIRECTORY: &str = "data";
const IMAGES_DIRECTORY: &str = "images";
const IMAGE_EXTENSION: &str = ".png";
const FORMAT_VERSION_FILE: &str = "metainfo.plist";

fn segments(path: &str) -> Vec<&str> {
    path.split('/').collect()
}

fn basename(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Returns the segment directly above the first `directory` segment, if any.
fn parent_of_first<'a>(parts: &[&'a str], directory: &str) -> Option<&'a str> {
    let index = parts.iter().position(|part| *part == directory)?;
    index.checked_sub(1).map(|parent| parts[parent])
}

/// Returns `true` if `path` is part of a UFO source tree.
#[must_use]
pub fn is_spec_file(path: &str) -> bool {
    METADATA_FILES.contains(&basename(path))
        || path.ends_with(GLYPH_EXTENSION)
        || is_data_directory_file(path)
        || is_images_directory_file(path)
}

/// Any file below `<name>.ufo/data/` (UFO 3).
#[must_use]
pub fn is_data_directory_file(path: &str) -> bool {
    parent_of_first(&segments(path), DATA_DIRECTORY)
        .is_some_and(|parent| parent.ends_with(UFO_EXTENSION))
}

/// A `.png` file below `<name>.ufo/images/` (UFO 3).
#[must_use]
pub fn is_images_directory_file(path: &str) -> bool {
    let parts = segments(path);
    let Some(parent) = parent_of_first(&parts, IMAGES_DIRECTORY) else {
        return false;
    };

    let file_name = basename(path);
    parent.ends_with(UFO_EXTENSION)
        && file_name.len() > IMAGE_EXTENSION.len()
        && file_name.ends_with(IMAGE_EXTENSION)
}

#[must_use]
pub fn is_glyph_file(path: &str) -> bool {
    path.ends_with(GLYPH_EXTENSION)
}

#[must_use]
pub fn is_nonglyph_file(path: &str) -> bool {
    path.ends_with(".plist") || path.ends_with(".fea")
}

#[must_use]
pub fn is_format_version_file(path: &str) -> bool {
    basename(path) == FORMAT_VERSION_FILE
}

/// Pathspec globs that together select every UFO source file in a diff.
///
/// One glob per metadata file, then the `images` and `data` directories and
/// finally glyph files. The order is fixed.
#[must_use]
pub fn diff_glob_patterns() -> Vec<String> {
    METADATA_FILES
        .iter()
        .map(|name| format!("*{name}"))
        .chain([
            format!("*{UFO_EXTENSION}/{IMAGES_DIRECTORY}/*"),
            format!("*{UFO_EXTENSION}/{DATA_DIRECTORY}/*"),
            format!("*{GLYPH_EXTENSION}"),
        ])
        .collect()
}
