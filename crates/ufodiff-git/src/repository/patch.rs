use crate::Result;

use super::Repository;

const BOLD: &str = "\x1b[1m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const CYAN: &str = "\x1b[36m";
const RESET: &str = "\x1b[m";

impl Repository {
    /// Unified diff text for files in `range` that match `pathspec`.
    ///
    /// With `color` set, lines are painted with git's default palette. The
    /// final newline is dropped and an empty string means nothing matched.
    ///
    /// # Errors
    ///
    /// Returns [`crate::GitError::RefNotFound`] if the range cannot be resolved.
    pub fn patch(&self, range: &str, pathspec: &str, color: bool) -> Result<String> {
        let mut opts = git2::DiffOptions::new();
        opts.pathspec(pathspec).minimal(true);

        let diff = self.diff_range(range, &mut opts)?;

        let mut text = String::new();
        diff.print(git2::DiffFormat::Patch, |_delta, _hunk, line| {
            append_line(&mut text, &line, color);
            true
        })?;

        if text.ends_with('\n') {
            text.pop();
        }
        Ok(text)
    }
}

fn append_line(out: &mut String, line: &git2::DiffLine<'_>, color: bool) {
    let content = String::from_utf8_lossy(line.content());
    let body = content.strip_suffix('\n').unwrap_or(content.as_ref());

    match line.origin() {
        origin @ ('+' | '-' | ' ') => {
            let paint = match origin {
                '+' => Some(GREEN),
                '-' => Some(RED),
                _ => None,
            };
            push_painted(out, &format!("{origin}{body}"), paint.filter(|_| color));
            if content.ends_with('\n') {
                out.push('\n');
            }
        }
        'F' => {
            for header in body.lines() {
                push_painted(out, header, color.then_some(BOLD));
                out.push('\n');
            }
        }
        'H' => {
            push_painted(out, body, color.then_some(CYAN));
            out.push('\n');
        }
        _ => out.push_str(&content),
    }
}

fn push_painted(out: &mut String, text: &str, paint: Option<&str>) {
    match paint {
        Some(code) => {
            out.push_str(code);
            out.push_str(text);
            out.push_str(RESET);
        }
        None => out.push_str(text),
    }
}
