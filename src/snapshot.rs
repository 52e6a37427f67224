//! Page snapshot extraction from raw HTML
//!
//! Checks never touch HTML directly; they read an immutable [`PageSnapshot`]
//! built here. Extraction uses case-insensitive tag heuristics rather than a
//! full DOM parser: the checklist only needs tag counts and a handful of
//! attribute values, and malformed markup should degrade to "absent", not to
//! a parse failure.

use log::debug;
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;
use std::time::Instant;

use crate::error::SeoAuditError;

/// Compiled tag patterns (cached for performance)
static TITLE_RE: OnceLock<Regex> = OnceLock::new();
static META_RE: OnceLock<Regex> = OnceLock::new();
static LINK_RE: OnceLock<Regex> = OnceLock::new();
static IMG_RE: OnceLock<Regex> = OnceLock::new();
static ANCHOR_RE: OnceLock<Regex> = OnceLock::new();
static SCRIPT_RE: OnceLock<Regex> = OnceLock::new();
static HEADING_RE: OnceLock<Regex> = OnceLock::new();
static ATTR_RE: OnceLock<Regex> = OnceLock::new();

/// Immutable snapshot of the document state the checklist evaluates.
///
/// This is the capability set the checks need and nothing more: the title,
/// the two meta tags with thresholds, element counts, and the elapsed load
/// time. Building one from a string is pure; absence of markup shows up as
/// `None` or a zero count, never as an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageSnapshot {
    /// Text of the first `<title>` element, `None` when the tag is absent
    pub title: Option<String>,
    /// Content of `<meta name="description">`
    pub meta_description: Option<String>,
    /// Content of `<meta name="viewport">`
    pub viewport: Option<String>,
    /// Number of `<h1>` elements
    pub h1_count: usize,
    /// Number of `<h2>` elements
    pub h2_count: usize,
    /// Number of `<h3>` elements
    pub h3_count: usize,
    /// Number of `<img>` elements
    pub image_count: usize,
    /// Number of images whose `alt` attribute is absent or whitespace-only
    pub images_missing_alt: usize,
    /// Anchors whose `href` is relative or fragment-only
    pub internal_links: usize,
    /// Anchors whose `href` is an absolute `http(s)://` URL
    pub external_links: usize,
    /// Number of `<script type="application/ld+json">` blocks
    pub ld_json_blocks: usize,
    /// Number of `og:*` meta properties
    pub og_tags: usize,
    /// Number of `twitter:*` meta properties (or `name` attributes)
    pub twitter_tags: usize,
    /// Whether a `<link rel="canonical">` is present
    pub has_canonical: bool,
    /// Elapsed load time supplied by the caller, in milliseconds
    pub elapsed_ms: u64,
}

impl PageSnapshot {
    /// Build a snapshot from raw HTML.
    ///
    /// Never fails: empty or malformed input yields an empty snapshot.
    /// `elapsed_ms` defaults to 0; use [`PageSnapshot::with_elapsed_ms`] or
    /// [`PageSnapshot::from_file`] to attach a load time.
    ///
    /// # Examples
    ///
    /// ```
    /// use seo_audit::snapshot::PageSnapshot;
    ///
    /// let snapshot = PageSnapshot::parse("<html><head><title>Hi</title></head><h1>x</h1></html>");
    /// assert_eq!(snapshot.title.as_deref(), Some("Hi"));
    /// assert_eq!(snapshot.h1_count, 1);
    /// ```
    pub fn parse(html: &str) -> Self {
        let mut snapshot = PageSnapshot {
            title: extract_title(html),
            ..PageSnapshot::default()
        };

        scan_meta_tags(html, &mut snapshot);
        scan_link_tags(html, &mut snapshot);
        scan_images(html, &mut snapshot);
        scan_anchors(html, &mut snapshot);
        snapshot.ld_json_blocks = count_ld_json(html);

        let (h1, h2, h3) = count_headings(html);
        snapshot.h1_count = h1;
        snapshot.h2_count = h2;
        snapshot.h3_count = h3;

        debug!(
            "parsed snapshot: title={:?} h1={} images={} links={}/{}",
            snapshot.title,
            snapshot.h1_count,
            snapshot.image_count,
            snapshot.internal_links,
            snapshot.external_links
        );

        snapshot
    }

    /// Read and parse an HTML file, measuring read + parse wall time as the
    /// page's elapsed load time.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SeoAuditError> {
        let path = path.as_ref();
        let start = Instant::now();

        let html =
            std::fs::read_to_string(path).map_err(|source| SeoAuditError::PageNotFound {
                path: path.to_path_buf(),
                source,
            })?;

        let snapshot = Self::parse(&html);
        Ok(snapshot.with_elapsed_ms(start.elapsed().as_millis() as u64))
    }

    /// Override the elapsed load time (deterministic tests, external timing).
    #[must_use]
    pub fn with_elapsed_ms(mut self, elapsed_ms: u64) -> Self {
        self.elapsed_ms = elapsed_ms;
        self
    }
}

/// Extract the value of a named attribute from a single tag's source text.
///
/// Handles double-quoted, single-quoted, and unquoted values; attribute names
/// match case-insensitively.
fn attr(tag: &str, name: &str) -> Option<String> {
    let re = ATTR_RE.get_or_init(|| {
        // SAFETY: This regex pattern is compile-time validated and will never fail.
        Regex::new(r#"([a-zA-Z][a-zA-Z0-9:_-]*)\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s>"']+))"#)
            .expect("attribute regex is valid")
    });

    for caps in re.captures_iter(tag) {
        let attr_name = caps.get(1).map(|m| m.as_str())?;
        if attr_name.eq_ignore_ascii_case(name) {
            let value = caps
                .get(2)
                .or_else(|| caps.get(3))
                .or_else(|| caps.get(4))
                .map(|m| m.as_str().to_string())
                .unwrap_or_default();
            return Some(value);
        }
    }
    None
}

fn extract_title(html: &str) -> Option<String> {
    let re = TITLE_RE.get_or_init(|| {
        // SAFETY: This regex pattern is compile-time validated and will never fail.
        Regex::new(r"(?is)<title[^>]*>(.*?)</title>").expect("title regex is valid")
    });

    re.captures(html).map(|caps| {
        caps.get(1)
            .map(|m| m.as_str())
            .unwrap_or_default()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    })
}

fn scan_meta_tags(html: &str, snapshot: &mut PageSnapshot) {
    let re = META_RE.get_or_init(|| {
        // SAFETY: This regex pattern is compile-time validated and will never fail.
        Regex::new(r"(?is)<meta\b[^>]*>").expect("meta regex is valid")
    });

    for m in re.find_iter(html) {
        let tag = m.as_str();
        let name = attr(tag, "name").map(|v| v.to_ascii_lowercase());
        let property = attr(tag, "property").map(|v| v.to_ascii_lowercase());

        match name.as_deref() {
            Some("description") if snapshot.meta_description.is_none() => {
                snapshot.meta_description = Some(attr(tag, "content").unwrap_or_default());
            }
            Some("viewport") if snapshot.viewport.is_none() => {
                snapshot.viewport = Some(attr(tag, "content").unwrap_or_default());
            }
            _ => {}
        }

        if property.as_deref().is_some_and(|p| p.starts_with("og:")) {
            snapshot.og_tags += 1;
        }
        // Twitter cards appear with either property= or name= in the wild.
        let is_twitter = |v: Option<&str>| v.is_some_and(|p| p.starts_with("twitter:"));
        if is_twitter(property.as_deref()) || is_twitter(name.as_deref()) {
            snapshot.twitter_tags += 1;
        }
    }
}

fn scan_link_tags(html: &str, snapshot: &mut PageSnapshot) {
    let re = LINK_RE.get_or_init(|| {
        // SAFETY: This regex pattern is compile-time validated and will never fail.
        Regex::new(r"(?is)<link\b[^>]*>").expect("link regex is valid")
    });

    for m in re.find_iter(html) {
        if attr(m.as_str(), "rel").is_some_and(|rel| rel.eq_ignore_ascii_case("canonical")) {
            snapshot.has_canonical = true;
        }
    }
}

fn scan_images(html: &str, snapshot: &mut PageSnapshot) {
    let re = IMG_RE.get_or_init(|| {
        // SAFETY: This regex pattern is compile-time validated and will never fail.
        Regex::new(r"(?is)<img\b[^>]*>").expect("img regex is valid")
    });

    for m in re.find_iter(html) {
        snapshot.image_count += 1;
        let alt = attr(m.as_str(), "alt");
        if alt.as_deref().map(str::trim).unwrap_or_default().is_empty() {
            snapshot.images_missing_alt += 1;
        }
    }
}

fn scan_anchors(html: &str, snapshot: &mut PageSnapshot) {
    let re = ANCHOR_RE.get_or_init(|| {
        // SAFETY: This regex pattern is compile-time validated and will never fail.
        Regex::new(r"(?is)<a\b[^>]*>").expect("anchor regex is valid")
    });

    for m in re.find_iter(html) {
        let Some(href) = attr(m.as_str(), "href") else {
            continue;
        };
        let lower = href.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            snapshot.external_links += 1;
        } else {
            snapshot.internal_links += 1;
        }
    }
}

fn count_ld_json(html: &str) -> usize {
    let re = SCRIPT_RE.get_or_init(|| {
        // SAFETY: This regex pattern is compile-time validated and will never fail.
        Regex::new(r"(?is)<script\b[^>]*>").expect("script regex is valid")
    });

    re.find_iter(html)
        .filter(|m| {
            attr(m.as_str(), "type")
                .is_some_and(|t| t.trim().eq_ignore_ascii_case("application/ld+json"))
        })
        .count()
}

fn count_headings(html: &str) -> (usize, usize, usize) {
    let re = HEADING_RE.get_or_init(|| {
        // SAFETY: This regex pattern is compile-time validated and will never fail.
        Regex::new(r"(?i)<h([123])[\s>]").expect("heading regex is valid")
    });

    let mut counts = (0, 0, 0);
    for caps in re.captures_iter(html) {
        match caps.get(1).map(|m| m.as_str()) {
            Some("1") => counts.0 += 1,
            Some("2") => counts.1 += 1,
            Some("3") => counts.2 += 1,
            _ => {}
        }
    }
    counts
}
