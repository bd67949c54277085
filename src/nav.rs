//! Rendering the "Versionen" nav dropdown.
//!
//! The block is rendered with the exact indentation and quoting of the
//! surrounding VitePress config (4-space indents, single quotes), so a run
//! over an already-synchronized config reproduces the existing bytes and
//! the patcher writes nothing.

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

/// Label of the versions dropdown in the nav.
pub const NAV_LABEL: &str = "Versionen";

/// Bytes escaped by JavaScript's `encodeURI`: controls plus the ASCII
/// characters outside its unreserved set. Non-ASCII bytes are always
/// percent-encoded. Slashes stay literal, so path templates survive.
const ENCODE_URI: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// URL path for one version's staged docs page.
///
/// Version directory names may contain spaces, parentheses, non-ASCII —
/// VitePress routes are URL paths, so the identifier is percent-encoded
/// inside the fixed `/versions/<name>/` template.
pub fn version_link(version: &str) -> String {
    utf8_percent_encode(&format!("/versions/{version}/"), ENCODE_URI).to_string()
}

/// Render the dropdown block listing `versions` in the given order.
///
/// An empty list renders a placeholder comment instead of an empty `items`
/// array, keeping the surrounding structure syntactically valid.
pub fn build_versions_nav_item(versions: &[String]) -> String {
    let items = versions
        .iter()
        .map(|v| {
            format!(
                "                    {{ text: '{}', link: '{}' }}",
                v,
                version_link(v)
            )
        })
        .collect::<Vec<_>>()
        .join(",\n");

    let items = if items.is_empty() {
        "                    // (keine Versionen gefunden)".to_string()
    } else {
        items
    };

    [
        "            {".to_string(),
        format!("                text: '{NAV_LABEL}',"),
        "                items: [".to_string(),
        items,
        "                ]".to_string(),
        "            }".to_string(),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(versions: &[&str]) -> Vec<String> {
        versions.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn link_for_plain_version() {
        assert_eq!(version_link("v1.2.3"), "/versions/v1.2.3/");
    }

    #[test]
    fn link_escapes_spaces() {
        assert_eq!(version_link("v1 beta"), "/versions/v1%20beta/");
    }

    #[test]
    fn link_keeps_encode_uri_unreserved_chars() {
        // Parentheses, tilde, plus are untouched by encodeURI.
        assert_eq!(
            version_link("v2.0.0-rc.1+(test)~x"),
            "/versions/v2.0.0-rc.1+(test)~x/"
        );
    }

    #[test]
    fn link_escapes_brackets_and_percent() {
        assert_eq!(version_link("v[1]%"), "/versions/v%5B1%5D%25/");
    }

    #[test]
    fn link_escapes_non_ascii() {
        assert_eq!(version_link("vü"), "/versions/v%C3%BC/");
    }

    #[test]
    fn block_lists_versions_in_order() {
        let block = build_versions_nav_item(&ids(&["v2.0.0", "v1.0.1"]));
        let expected = [
            "            {",
            "                text: 'Versionen',",
            "                items: [",
            "                    { text: 'v2.0.0', link: '/versions/v2.0.0/' },",
            "                    { text: 'v1.0.1', link: '/versions/v1.0.1/' }",
            "                ]",
            "            }",
        ]
        .join("\n");
        assert_eq!(block, expected);
    }

    #[test]
    fn empty_list_renders_placeholder_comment() {
        let block = build_versions_nav_item(&[]);
        assert!(block.contains("// (keine Versionen gefunden)"));
        // Still a syntactically valid object literal around the comment.
        assert!(block.contains("items: ["));
        assert!(block.trim_end().ends_with('}'));
    }

    #[test]
    fn rendering_is_deterministic() {
        let versions = ids(&["v1.0.0"]);
        assert_eq!(
            build_versions_nav_item(&versions),
            build_versions_nav_item(&versions)
        );
    }
}
