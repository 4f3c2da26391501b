//! Readability cleanup for raw `git diff` output.
//!
//! Each file section's `diff --git a/<path> b/<path>` header becomes the bare
//! path, the redundant `---`/`+++` pair before the first hunk is dropped and
//! the `100644` file-mode markers are removed from header lines. Everything
//! else, including color escapes, passes through untouched.

use std::sync::LazyLock;

use regex::Regex;
use ufodiff_core::LINE_ENDING;

static ANSI_ESCAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1b\[[0-9;]*m").expect("ANSI escape pattern is valid"));

static TRAILING_ESCAPES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\x1b\[[0-9;]*m)*$").expect("trailing escape pattern is valid")
});

const HEADER_PREFIX: &str = "diff --git ";
const FILE_MODE: &str = "100644";

/// Cleans one raw diff block. Every output line ends with [`LINE_ENDING`];
/// an empty input gives an empty output.
#[must_use]
pub fn clean_diff(raw: &str) -> String {
    let mut cleaned = String::with_capacity(raw.len());
    if raw.is_empty() {
        return cleaned;
    }

    let mut in_header = false;
    let mut pending_old_path: Option<&str> = None;

    for line in raw.split('\n') {
        let visible = ANSI_ESCAPE.replace_all(line, "");

        if let Some(paths) = visible.strip_prefix(HEADER_PREFIX) {
            flush(&mut cleaned, pending_old_path.take());
            push_line(&mut cleaned, &header_path_line(line, paths));
            in_header = true;
            continue;
        }

        if in_header {
            if visible.starts_with("--- ") {
                flush(&mut cleaned, pending_old_path.replace(line));
                continue;
            }
            if visible.starts_with("+++ ") && pending_old_path.take().is_some() {
                continue;
            }
            flush(&mut cleaned, pending_old_path.take());

            if visible.starts_with("@@") {
                in_header = false;
            } else if line.contains(FILE_MODE) {
                let stripped = line.replace(FILE_MODE, "").replace("mode", "");
                push_line(&mut cleaned, &trim_before_escapes(&stripped));
                continue;
            }
        }

        push_line(&mut cleaned, line);
    }
    flush(&mut cleaned, pending_old_path);

    cleaned
}

/// Rewrites `diff --git a/<path> b/<path>` as `<path>`, keeping any color
/// escapes that wrap the header.
fn header_path_line(line: &str, visible_paths: &str) -> String {
    let path = repeated_path(visible_paths).unwrap_or(visible_paths);

    let Some(start) = line.find(HEADER_PREFIX) else {
        return path.to_string();
    };
    let leading = &line[..start];
    let trailing = line[start + HEADER_PREFIX.len()..]
        .strip_prefix(visible_paths)
        .unwrap_or_default();

    format!("{leading}{path}{trailing}")
}

/// The path of an `a/<path> b/<path>` pair naming the same file twice.
fn repeated_path(paths: &str) -> Option<&str> {
    let middle = paths.len() / 2;
    if paths.as_bytes().get(middle) != Some(&b' ') {
        return None;
    }

    let old = paths.get(..middle)?.strip_prefix("a/")?;
    let new = paths.get(middle + 1..)?.strip_prefix("b/")?;
    (old == new).then_some(new)
}

/// Trims trailing whitespace while keeping a trailing run of color escapes.
fn trim_before_escapes(line: &str) -> String {
    let escapes_start = TRAILING_ESCAPES
        .find(line)
        .map_or(line.len(), |escapes| escapes.start());
    let (text, escapes) = line.split_at(escapes_start);

    format!("{}{escapes}", text.trim_end())
}

fn flush(cleaned: &mut String, pending: Option<&str>) {
    if let Some(line) = pending {
        push_line(cleaned, line);
    }
}

fn push_line(cleaned: &mut String, line: &str) {
    cleaned.push_str(line);
    cleaned.push_str(LINE_ENDING);
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAIN_BLOCK: &str = "diff --git a/Font.ufo/glyphs/A_.glif b/Font.ufo/glyphs/A_.glif
index 83db48f..bf269f4 100644
--- a/Font.ufo/glyphs/A_.glif
+++ b/Font.ufo/glyphs/A_.glif
@@ -1,3 +1,3 @@
 <glyph name=\"A\">
-<advance width=\"500\"/>
+<advance width=\"520\"/>
 </glyph>";

    const COLOR_BLOCK: &str = "\x1b[1mdiff --git a/Font.ufo/glyphs/A_.glif b/Font.ufo/glyphs/A_.glif\x1b[m
\x1b[1mindex 83db48f..bf269f4 100644\x1b[m
\x1b[1m--- a/Font.ufo/glyphs/A_.glif\x1b[m
\x1b[1m+++ b/Font.ufo/glyphs/A_.glif\x1b[m
\x1b[36m@@ -1,3 +1,3 @@\x1b[m
 <glyph name=\"A\">
\x1b[31m-<advance width=\"500\"/>\x1b[m
\x1b[32m+<advance width=\"520\"/>\x1b[m
 </glyph>";

    fn lines(cleaned: &str) -> Vec<&str> {
        cleaned.split(LINE_ENDING).collect()
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(clean_diff(""), "");
    }

    #[test]
    fn minimal_header_is_replaced() {
        let cleaned = clean_diff("diff --git a/x b/x\n--- a/x\n+++ a/x");

        assert!(!cleaned.starts_with("diff --git"));
        assert_eq!(cleaned, format!("x{LINE_ENDING}"));
    }

    #[test]
    fn path_with_spaced_directory_is_kept_whole() {
        let cleaned = clean_diff(
            "diff --git a/Family b/Font.ufo/lib.plist b/Family b/Font.ufo/lib.plist\n@@ -1 +1 @@",
        );

        assert_eq!(lines(&cleaned), ["Family b/Font.ufo/lib.plist", "@@ -1 +1 @@", ""]);
    }

    #[test]
    fn unpaired_header_keeps_raw_paths() {
        let cleaned = clean_diff("diff --git a/old.glif b/new.glif");

        assert_eq!(lines(&cleaned), ["a/old.glif b/new.glif", ""]);
    }

    #[test]
    fn plain_block() {
        let cleaned = clean_diff(PLAIN_BLOCK);

        assert_eq!(
            lines(&cleaned),
            [
                "Font.ufo/glyphs/A_.glif",
                "index 83db48f..bf269f4",
                "@@ -1,3 +1,3 @@",
                " <glyph name=\"A\">",
                "-<advance width=\"500\"/>",
                "+<advance width=\"520\"/>",
                " </glyph>",
                "",
            ]
        );
    }

    #[test]
    fn colored_block_keeps_escapes() {
        let cleaned = clean_diff(COLOR_BLOCK);

        assert_eq!(
            lines(&cleaned),
            [
                "\x1b[1mFont.ufo/glyphs/A_.glif\x1b[m",
                "\x1b[1mindex 83db48f..bf269f4\x1b[m",
                "\x1b[36m@@ -1,3 +1,3 @@\x1b[m",
                " <glyph name=\"A\">",
                "\x1b[31m-<advance width=\"500\"/>\x1b[m",
                "\x1b[32m+<advance width=\"520\"/>\x1b[m",
                " </glyph>",
                "",
            ]
        );
    }

    #[test]
    fn file_mode_lines_lose_mode_markers() {
        let raw = "diff --git a/Font.ufo/lib.plist b/Font.ufo/lib.plist
new file mode 100644
index 0000000..e69de29
--- /dev/null
+++ b/Font.ufo/lib.plist
@@ -0,0 +1 @@
+<plist/>";

        let cleaned = clean_diff(raw);

        assert_eq!(
            lines(&cleaned),
            [
                "Font.ufo/lib.plist",
                "new file",
                "index 0000000..e69de29",
                "@@ -0,0 +1 @@",
                "+<plist/>",
                "",
            ]
        );
    }

    #[test]
    fn colored_and_plain_mode_lines_match() {
        let raw = "\x1b[1mdiff --git a/lib.plist b/lib.plist\x1b[m
\x1b[1mnew file mode 100644\x1b[m
\x1b[1mindex 0000000..e69de29\x1b[m";

        let cleaned = clean_diff(raw);
        let visible = ANSI_ESCAPE.replace_all(&cleaned, "");

        assert_eq!(
            lines(&cleaned),
            [
                "\x1b[1mlib.plist\x1b[m",
                "\x1b[1mnew file\x1b[m",
                "\x1b[1mindex 0000000..e69de29\x1b[m",
                "",
            ]
        );
        assert_eq!(
            visible,
            clean_diff("diff --git a/lib.plist b/lib.plist\nnew file mode 100644\nindex 0000000..e69de29")
        );
    }

    #[test]
    fn every_file_section_is_cleaned() {
        let raw = "diff --git a/A_.glif b/A_.glif
--- a/A_.glif
+++ b/A_.glif
@@ -1 +1 @@
-a
+b
diff --git a/B_.glif b/B_.glif
--- a/B_.glif
+++ b/B_.glif
@@ -1 +1 @@
-c
+d";

        let cleaned = clean_diff(raw);

        assert_eq!(
            lines(&cleaned),
            ["A_.glif", "@@ -1 +1 @@", "-a", "+b", "B_.glif", "@@ -1 +1 @@", "-c", "+d", ""]
        );
    }

    #[test]
    fn hunk_content_resembling_headers_is_kept() {
        let raw = "diff --git a/features.fea b/features.fea
--- a/features.fea
+++ b/features.fea
@@ -1,2 +1,2 @@
--- old comment mode 100644
+++ new comment";

        let cleaned = clean_diff(raw);

        assert!(cleaned.contains("--- old comment mode 100644"));
        assert!(cleaned.contains("+++ new comment"));
    }

    #[test]
    fn lone_old_path_marker_is_kept() {
        let cleaned = clean_diff("diff --git a/x b/x\n--- a/x\nBinary files differ");

        assert_eq!(lines(&cleaned), ["x", "--- a/x", "Binary files differ", ""]);
    }

    #[test]
    fn text_without_header_passes_through() {
        let cleaned = clean_diff("just text\nmore text");

        assert_eq!(lines(&cleaned), ["just text", "more text", ""]);
    }
}
