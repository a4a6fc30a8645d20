//! Key paths into a JSON document.
//!
//! A path is an ordered list of object keys, one per level of nesting. Paths
//! never index into arrays. A bare string is a one-key path; the empty path
//! ([`ROOT`]) addresses the document itself.

/// The empty path, addressing the root of a container.
pub const ROOT: &[&str] = &[];

/// Anything that can be read as a sequence of object keys.
pub trait IntoPath {
    /// The keys of this path, outermost first.
    fn path_keys(&self) -> Vec<&str>;
}

impl IntoPath for str {
    fn path_keys(&self) -> Vec<&str> {
        vec![self]
    }
}

impl IntoPath for String {
    fn path_keys(&self) -> Vec<&str> {
        vec![self.as_str()]
    }
}

impl IntoPath for [&str] {
    fn path_keys(&self) -> Vec<&str> {
        self.to_vec()
    }
}

impl<const N: usize> IntoPath for [&str; N] {
    fn path_keys(&self) -> Vec<&str> {
        self.to_vec()
    }
}

impl IntoPath for Vec<&str> {
    fn path_keys(&self) -> Vec<&str> {
        self.clone()
    }
}

impl IntoPath for [String] {
    fn path_keys(&self) -> Vec<&str> {
        self.iter().map(String::as_str).collect()
    }
}

impl<const N: usize> IntoPath for [String; N] {
    fn path_keys(&self) -> Vec<&str> {
        self.iter().map(String::as_str).collect()
    }
}

impl IntoPath for Vec<String> {
    fn path_keys(&self) -> Vec<&str> {
        self.iter().map(String::as_str).collect()
    }
}

impl IntoPath for () {
    fn path_keys(&self) -> Vec<&str> {
        Vec::new()
    }
}

impl<P: IntoPath + ?Sized> IntoPath for &P {
    fn path_keys(&self) -> Vec<&str> {
        (**self).path_keys()
    }
}

/// Render a path for error messages (`a.b.c`, or `<root>` when empty).
pub(crate) fn display_path(keys: &[&str]) -> String {
    if keys.is_empty() {
        "<root>".to_string()
    } else {
        keys.join(".")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys_of(path: impl IntoPath) -> Vec<String> {
        path.path_keys().into_iter().map(str::to_owned).collect()
    }

    #[test]
    fn bare_string_is_single_key() {
        assert_eq!(keys_of("foo"), vec!["foo"]);
        assert_eq!(keys_of(String::from("foo")), vec!["foo"]);
    }

    #[test]
    fn arrays_slices_and_vectors() {
        assert_eq!(keys_of(["a", "b"]), vec!["a", "b"]);
        assert_eq!(keys_of(&["a", "b"]), vec!["a", "b"]);
        assert_eq!(keys_of(vec!["a", "b", "c"]), vec!["a", "b", "c"]);
        let owned = vec!["x".to_string(), "y".to_string()];
        assert_eq!(keys_of(&owned), vec!["x", "y"]);
    }

    #[test]
    fn root_is_empty() {
        assert!(keys_of(ROOT).is_empty());
        assert!(keys_of(()).is_empty());
    }

    #[test]
    fn display_path_joins_keys() {
        assert_eq!(display_path(&["a", "b"]), "a.b");
        assert_eq!(display_path(&[]), "<root>");
    }
}
