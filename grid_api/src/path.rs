//! Region path derivation.
//!
//! A top-level region's full path is the separator followed by its name; a
//! sub-region's full path is its parent's full path, the separator, and its
//! name.

/// Separator between the segments of a region's full path.
pub const REGION_PATH_SEPARATOR: &str = "/";

/// Full path of a top-level region named `name`.
pub fn top_level_region_path(name: &str) -> String {
    format!("{REGION_PATH_SEPARATOR}{name}")
}

/// Full path of a sub-region named `name` under a parent with full path
/// `parent_path`.
pub fn sub_region_path(parent_path: &str, name: &str) -> String {
    format!("{parent_path}{REGION_PATH_SEPARATOR}{name}")
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn top_level() {
        assert_eq!(top_level_region_path("users"), "/users");
    }

    #[test]
    fn nested() {
        let parent = top_level_region_path("users");
        assert_eq!(sub_region_path(&parent, "sessions"), "/users/sessions");
        assert_eq!(
            sub_region_path("/users/sessions", "tokens"),
            "/users/sessions/tokens"
        );
    }

    proptest! {
        #[test]
        fn sub_region_path_law(parent in "[a-zA-Z0-9_]{1,12}", name in "[a-zA-Z0-9_]{1,12}") {
            let parent_path = top_level_region_path(&parent);
            let path = sub_region_path(&parent_path, &name);

            prop_assert_eq!(&path, &format!("{parent_path}/{name}"));
            prop_assert!(path.starts_with(&parent_path));
            prop_assert!(path.ends_with(&name));
            prop_assert_eq!(path.matches(REGION_PATH_SEPARATOR).count(), 2);
        }
    }
}
