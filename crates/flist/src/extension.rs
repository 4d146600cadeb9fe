use std::path::Path;

/// Returns `true` when `path` ends with at least one of `extensions`.
///
/// The comparison is a plain byte suffix test on the whole path: `.jsx`
/// matches `foo.jsx` but `.js` does not, and `.d.ts` matches `types.d.ts`.
/// An empty extension string matches every path; an empty list matches none.
///
/// ```
/// use flist::matches_extension;
/// use std::path::Path;
///
/// assert!(matches_extension(Path::new("src/foo.jsx"), &[".jsx"]));
/// assert!(!matches_extension(Path::new("src/foo.jsx"), &[".js"]));
/// ```
pub fn matches_extension<S: AsRef<str>>(path: &Path, extensions: &[S]) -> bool {
    let path = path.as_os_str().as_encoded_bytes();
    extensions
        .iter()
        .any(|extension| path.ends_with(extension.as_ref().as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::matches_extension;
    use std::path::Path;

    #[test]
    fn suffix_must_match_exactly() {
        let path = Path::new("components/button.jsx");
        assert!(matches_extension(path, &[".jsx"]));
        assert!(matches_extension(path, &[".js", ".jsx"]));
        assert!(!matches_extension(path, &[".js"]));
        assert!(!matches_extension(path, &[".JSX"]));
    }

    #[test]
    fn compound_suffixes_match() {
        assert!(matches_extension(Path::new("types/index.d.ts"), &[".d.ts"]));
        assert!(matches_extension(Path::new("types/index.d.ts"), &[".ts"]));
    }

    #[test]
    fn suffix_without_dot_matches_any_ending() {
        assert!(matches_extension(Path::new("Makefile"), &["file"]));
    }

    #[test]
    fn empty_extension_matches_every_path() {
        assert!(matches_extension(Path::new("a.js"), &[""]));
        assert!(matches_extension(Path::new("Makefile"), &[".rs", ""]));
    }

    #[test]
    fn empty_extension_list_matches_nothing() {
        assert!(!matches_extension::<&str>(Path::new("a.js"), &[]));
    }

    #[test]
    fn owned_strings_are_accepted() {
        let extensions = vec![String::from(".ts")];
        assert!(matches_extension(Path::new("main.ts"), &extensions));
    }
}
