//! Test fixture helpers for creating HTML pages on disk
//!
//! Provides utilities for setting up realistic test pages with proper head
//! metadata, headings, and images.

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Re-export anyhow for convenience
pub use anyhow;

/// A page that passes every check: title in [30,60], description in
/// [120,160], one H1, images with alt text, mobile viewport, JSON-LD,
/// social tags, and a canonical URL.
pub const WELL_OPTIMIZED_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <title>Projects and writing by a Rust engineer</title>
  <meta name="description" content="A personal portfolio featuring selected software projects, engineering notes, and experiments in systems programming and web tooling.">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <meta property="og:title" content="Projects and writing">
  <meta name="twitter:card" content="summary">
  <link rel="canonical" href="https://example.com/">
  <script type="application/ld+json">{"@type": "Person"}</script>
</head>
<body>
  <h1>Projects</h1>
  <h2>Recent work</h2>
  <img src="shot.png" alt="Screenshot of the dashboard">
  <a href="/about.html">About</a>
  <a href="https://github.com/example">GitHub</a>
</body>
</html>
"#;

/// A page missing nearly everything the checklist looks for.
pub const BARE_PAGE: &str = "<!DOCTYPE html><html><body><p>hello</p></body></html>";

/// Write a single HTML page into a fresh temp directory.
///
/// # Returns
///
/// A tuple of (TempDir, PathBuf to the page) - the TempDir must be kept alive
pub fn create_page(name: &str, html: &str) -> anyhow::Result<(TempDir, PathBuf)> {
    let temp_dir = TempDir::new()?;
    let page = temp_dir.path().join(name);
    fs::write(&page, html)?;
    Ok((temp_dir, page))
}

/// Write a small multi-page site into a fresh temp directory.
pub fn create_site() -> anyhow::Result<TempDir> {
    let temp_dir = TempDir::new()?;
    fs::write(temp_dir.path().join("index.html"), WELL_OPTIMIZED_PAGE)?;
    let blog = temp_dir.path().join("blog");
    fs::create_dir(&blog)?;
    fs::write(blog.join("post.html"), BARE_PAGE)?;
    Ok(temp_dir)
}
