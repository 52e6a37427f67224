//! The fixed check battery
//!
//! Ten independent checks, each a pure function of a [`PageSnapshot`]
//! returning exactly one [`CheckResult`]. Absence of expected markup is data:
//! it produces a warning or error status with an explanatory message, never a
//! failure. Checks read the snapshot only; nothing is mutated.

use serde::{Deserialize, Serialize};

use crate::snapshot::PageSnapshot;

/// Outcome of a single check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    /// Check passed
    Success,
    /// Check passed partially; improvement recommended
    Warning,
    /// Check failed; a fix is required
    Error,
}

/// Grouping label for checks and recommendations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Title and meta description fundamentals
    #[serde(rename = "Basic SEO")]
    BasicSeo,
    /// Headings, images, and link structure
    Content,
    /// Viewport, structured data, and canonical markup
    Technical,
    /// Load-time heuristics
    Performance,
    /// Open Graph and Twitter card tags
    Social,
    /// Score-level advice not tied to a single check
    General,
}

impl Category {
    /// Human-readable label used in reports
    pub fn label(&self) -> &'static str {
        match self {
            Category::BasicSeo => "Basic SEO",
            Category::Content => "Content",
            Category::Technical => "Technical",
            Category::Performance => "Performance",
            Category::Social => "Social",
            Category::General => "General",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of one check, immutable once produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    /// Grouping label
    pub category: Category,
    /// Check name as shown in reports
    pub name: String,
    /// Pass/warn/fail status
    pub status: CheckStatus,
    /// Explanatory message
    pub message: String,
}

impl CheckResult {
    fn new(
        category: Category,
        name: &str,
        status: CheckStatus,
        message: impl Into<String>,
    ) -> Self {
        CheckResult {
            category,
            name: name.to_string(),
            status,
            message: message.into(),
        }
    }
}

/// Run the full battery in its fixed order.
pub fn run_all(snapshot: &PageSnapshot) -> Vec<CheckResult> {
    vec![
        check_title(snapshot),
        check_meta_description(snapshot),
        check_heading_structure(snapshot),
        check_images(snapshot),
        check_links(snapshot),
        check_page_speed(snapshot),
        check_mobile_optimization(snapshot),
        check_structured_data(snapshot),
        check_social_meta_tags(snapshot),
        check_canonical_url(snapshot),
    ]
}

/// Title present with length in [30,60] characters.
pub fn check_title(snapshot: &PageSnapshot) -> CheckResult {
    const NAME: &str = "Page Title";

    let title = snapshot.title.as_deref().unwrap_or("");
    if title.is_empty() {
        return CheckResult::new(
            Category::BasicSeo,
            NAME,
            CheckStatus::Error,
            "Missing page title",
        );
    }

    let len = title.chars().count();
    match len {
        0..=29 => CheckResult::new(
            Category::BasicSeo,
            NAME,
            CheckStatus::Warning,
            format!("Title too short ({} chars). Recommended: 30-60 characters", len),
        ),
        30..=60 => CheckResult::new(
            Category::BasicSeo,
            NAME,
            CheckStatus::Success,
            format!("Good title length ({} chars)", len),
        ),
        _ => CheckResult::new(
            Category::BasicSeo,
            NAME,
            CheckStatus::Warning,
            format!("Title too long ({} chars). Recommended: 30-60 characters", len),
        ),
    }
}

/// Meta description present with length in [120,160] characters.
pub fn check_meta_description(snapshot: &PageSnapshot) -> CheckResult {
    const NAME: &str = "Meta Description";

    let description = snapshot.meta_description.as_deref().unwrap_or("");
    if description.is_empty() {
        return CheckResult::new(
            Category::BasicSeo,
            NAME,
            CheckStatus::Error,
            "Missing meta description",
        );
    }

    let len = description.chars().count();
    match len {
        0..=119 => CheckResult::new(
            Category::BasicSeo,
            NAME,
            CheckStatus::Warning,
            format!(
                "Description too short ({} chars). Recommended: 120-160 characters",
                len
            ),
        ),
        120..=160 => CheckResult::new(
            Category::BasicSeo,
            NAME,
            CheckStatus::Success,
            format!("Good description length ({} chars)", len),
        ),
        _ => CheckResult::new(
            Category::BasicSeo,
            NAME,
            CheckStatus::Warning,
            format!(
                "Description too long ({} chars). Recommended: 120-160 characters",
                len
            ),
        ),
    }
}

/// Exactly one H1. Zero H1s is an error; more than one is a warning.
pub fn check_heading_structure(snapshot: &PageSnapshot) -> CheckResult {
    const NAME: &str = "Heading Structure";

    match snapshot.h1_count {
        0 => CheckResult::new(Category::Content, NAME, CheckStatus::Error, "Missing H1 tag"),
        1 => CheckResult::new(
            Category::Content,
            NAME,
            CheckStatus::Success,
            format!(
                "Good heading structure: {} H1, {} H2s, {} H3s",
                snapshot.h1_count, snapshot.h2_count, snapshot.h3_count
            ),
        ),
        n => CheckResult::new(
            Category::Content,
            NAME,
            CheckStatus::Warning,
            format!("Multiple H1 tags found ({}). Use only one H1 per page", n),
        ),
    }
}

/// Every image carries non-empty alt text. A page with no images warns.
pub fn check_images(snapshot: &PageSnapshot) -> CheckResult {
    const NAME: &str = "Images";

    if snapshot.image_count == 0 {
        CheckResult::new(
            Category::Content,
            NAME,
            CheckStatus::Warning,
            "No images found on page",
        )
    } else if snapshot.images_missing_alt > 0 {
        CheckResult::new(
            Category::Content,
            NAME,
            CheckStatus::Warning,
            format!(
                "{} out of {} images missing alt text",
                snapshot.images_missing_alt, snapshot.image_count
            ),
        )
    } else {
        CheckResult::new(
            Category::Content,
            NAME,
            CheckStatus::Success,
            format!("All {} images have alt text", snapshot.image_count),
        )
    }
}

/// Always succeeds; reports internal/external link counts.
pub fn check_links(snapshot: &PageSnapshot) -> CheckResult {
    CheckResult::new(
        Category::Content,
        "Links",
        CheckStatus::Success,
        format!(
            "Found {} internal and {} external links",
            snapshot.internal_links, snapshot.external_links
        ),
    )
}

/// Elapsed load time: <1000 ms passes, 1000-3000 ms warns, >3000 ms fails.
pub fn check_page_speed(snapshot: &PageSnapshot) -> CheckResult {
    const NAME: &str = "Page Speed";

    match snapshot.elapsed_ms {
        0..=999 => CheckResult::new(
            Category::Performance,
            NAME,
            CheckStatus::Success,
            "Page loads quickly",
        ),
        1000..=3000 => CheckResult::new(
            Category::Performance,
            NAME,
            CheckStatus::Warning,
            "Page load time could be improved",
        ),
        _ => CheckResult::new(
            Category::Performance,
            NAME,
            CheckStatus::Error,
            "Page loads slowly, optimization needed",
        ),
    }
}

/// Viewport meta present and configured with `width=device-width`.
pub fn check_mobile_optimization(snapshot: &PageSnapshot) -> CheckResult {
    const NAME: &str = "Mobile Optimization";

    match snapshot.viewport.as_deref() {
        None => CheckResult::new(
            Category::Technical,
            NAME,
            CheckStatus::Error,
            "Missing viewport meta tag",
        ),
        Some(content) if content.contains("width=device-width") => CheckResult::new(
            Category::Technical,
            NAME,
            CheckStatus::Success,
            "Viewport configured for mobile devices",
        ),
        Some(_) => CheckResult::new(
            Category::Technical,
            NAME,
            CheckStatus::Warning,
            "Viewport may not be optimized for mobile",
        ),
    }
}

/// At least one JSON-LD structured data block.
pub fn check_structured_data(snapshot: &PageSnapshot) -> CheckResult {
    const NAME: &str = "Structured Data";

    if snapshot.ld_json_blocks == 0 {
        CheckResult::new(
            Category::Technical,
            NAME,
            CheckStatus::Warning,
            "No structured data found",
        )
    } else {
        CheckResult::new(
            Category::Technical,
            NAME,
            CheckStatus::Success,
            format!("Found {} structured data block(s)", snapshot.ld_json_blocks),
        )
    }
}

/// At least one Open Graph or Twitter card tag.
pub fn check_social_meta_tags(snapshot: &PageSnapshot) -> CheckResult {
    const NAME: &str = "Social Meta Tags";

    if snapshot.og_tags == 0 && snapshot.twitter_tags == 0 {
        CheckResult::new(
            Category::Social,
            NAME,
            CheckStatus::Warning,
            "No social media meta tags found",
        )
    } else {
        CheckResult::new(
            Category::Social,
            NAME,
            CheckStatus::Success,
            format!(
                "Found {} Open Graph and {} Twitter tags",
                snapshot.og_tags, snapshot.twitter_tags
            ),
        )
    }
}

/// Canonical URL declared.
pub fn check_canonical_url(snapshot: &PageSnapshot) -> CheckResult {
    const NAME: &str = "Canonical URL";

    if snapshot.has_canonical {
        CheckResult::new(
            Category::Technical,
            NAME,
            CheckStatus::Success,
            "Canonical URL is set",
        )
    } else {
        CheckResult::new(
            Category::Technical,
            NAME,
            CheckStatus::Warning,
            "No canonical URL specified",
        )
    }
}
