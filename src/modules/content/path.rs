use crate::core::error::{AppError, Result};
use crate::shared::constants::ARTICLE_PATH_MARKER;

/// Hierarchical article address split out of a request path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticlePath {
    /// Slash-joined category slugs, e.g. "travel-tips/central-america"
    pub category_path: String,
    pub article_slug: String,
}

impl ArticlePath {
    /// Parse `.../article/<category>[/<category>...]/<slug>`.
    ///
    /// Empty segments (double or trailing slashes) are skipped and every
    /// segment is percent-decoded. A segment that decodes to something
    /// containing `/` is rejected.
    pub fn parse(raw: &str) -> Result<Self> {
        let (_, rest) = raw
            .split_once(ARTICLE_PATH_MARKER)
            .ok_or_else(|| AppError::InvalidPath("missing article prefix".to_string()))?;

        let mut segments = rest
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(|segment| {
                let decoded = urlencoding::decode(segment)
                    .map_err(|_| AppError::InvalidPath("malformed path encoding".to_string()))?;
                if decoded.contains('/') {
                    return Err(AppError::InvalidPath(
                        "encoded slash in path segment".to_string(),
                    ));
                }
                Ok(decoded.into_owned())
            })
            .collect::<Result<Vec<String>>>()?;

        let article_slug = match segments.len() {
            0 => return Err(AppError::InvalidPath("empty path".to_string())),
            1 => return Err(AppError::InvalidPath("missing category segment".to_string())),
            _ => segments.pop().unwrap_or_default(),
        };

        Ok(Self {
            category_path: segments.join("/"),
            article_slug,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invalid_path_message(raw: &str) -> String {
        match ArticlePath::parse(raw) {
            Err(AppError::InvalidPath(msg)) => msg,
            other => panic!("expected InvalidPath for {raw:?}, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_nested_path() {
        let path =
            ArticlePath::parse("/api/article/travel-tips/central-america/guatemala-guide").unwrap();
        assert_eq!(path.category_path, "travel-tips/central-america");
        assert_eq!(path.article_slug, "guatemala-guide");
    }

    #[test]
    fn test_parse_single_category() {
        let path = ArticlePath::parse("/api/article/travel-tips/packing-list").unwrap();
        assert_eq!(path.category_path, "travel-tips");
        assert_eq!(path.article_slug, "packing-list");
    }

    #[test]
    fn test_parse_ignores_empty_segments() {
        let path = ArticlePath::parse("/api/article//travel-tips//packing-list/").unwrap();
        assert_eq!(path.category_path, "travel-tips");
        assert_eq!(path.article_slug, "packing-list");
    }

    #[test]
    fn test_parse_decodes_segments() {
        let path = ArticlePath::parse("/api/article/caf%C3%A9/men%C3%BA").unwrap();
        assert_eq!(path.category_path, "café");
        assert_eq!(path.article_slug, "menú");
    }

    #[test]
    fn test_parse_failures_are_distinct() {
        assert_eq!(
            invalid_path_message("/api/articles/travel-tips/x"),
            "missing article prefix"
        );
        assert_eq!(invalid_path_message("/api/article/"), "empty path");
        assert_eq!(
            invalid_path_message("/api/article/only-one-part"),
            "missing category segment"
        );
        assert_eq!(
            invalid_path_message("/api/article/a/%FF"),
            "malformed path encoding"
        );
        assert_eq!(
            invalid_path_message("/api/article/travel-tips/b%2Fc"),
            "encoded slash in path segment"
        );
        assert_eq!(
            invalid_path_message("/api/article/travel%2ftips/guide"),
            "encoded slash in path segment"
        );
    }
}
