//! Offline bulk extraction and the one-shot migration into Postgres.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::path::Path;
use tracing::{error, info, warn};

use crate::extractor::{ExtractedProfile, Extraction, extract};
use crate::pages::{LegacyPageStore, SourceError};
use crate::repositories::PageRepositoryTrait;

pub const DEFAULT_OUTPUT: &str = "extracted-page-data.json";

/// Slugs that shipped as hand-written pages.
pub const KNOWN_SLUGS: &[&str] = &[
    "test123",
    "jen",
    "sel",
    "brooke",
    "rachel",
    "rachsotiny",
    "josh",
    "m8d1son",
    "abbiehall",
    "abby",
    "aimee",
    "alaska",
    "alfrileyyy",
    "alicia",
    "amyleigh",
    "amberr",
    "chloeayling",
    "chloetami",
    "dominika",
    "ellejean",
    "em",
    "freya",
    "hannah",
    "kaceymay",
    "kayley",
    "kimbo_bimbo",
    "kxceyrose",
    "laurdunne",
    "laylasoyoung",
    "lily",
    "lou",
    "maddison",
    "megann",
    "morgan",
    "ollie",
    "poppy",
    "skye",
    "victoria",
    "wackojacko69",
];

#[derive(Debug, Default)]
pub struct BatchReport {
    pub extractions: Vec<Extraction>,
    pub skipped: Vec<String>,
    pub failed: Vec<(String, String)>,
}

impl BatchReport {
    pub fn profiles(&self) -> Vec<ExtractedProfile> {
        self.extractions.iter().map(|e| e.profile.clone()).collect()
    }

    /// One line per page showing which fields were recovered.
    pub fn checklist(&self) -> String {
        let mut out = String::new();
        for extraction in &self.extractions {
            let d = &extraction.diagnostics;
            let _ = writeln!(
                out,
                "{:<16} title {}  subtitle {}  avatar {}  preview {}  links {}",
                extraction.profile.slug,
                mark(d.found_title),
                mark(d.found_subtitle),
                mark(d.found_avatar),
                mark(d.found_preview),
                d.found_links,
            );
        }
        for slug in &self.skipped {
            let _ = writeln!(out, "{:<16} skipped (no page file)", slug);
        }
        for (slug, reason) in &self.failed {
            let _ = writeln!(out, "{:<16} failed: {}", slug, reason);
        }
        let _ = write!(
            out,
            "{} extracted, {} skipped, {} failed",
            self.extractions.len(),
            self.skipped.len(),
            self.failed.len()
        );
        out
    }
}

fn mark(found: bool) -> char {
    if found { '+' } else { '-' }
}

/// Runs the extractor over every slug. Missing pages are skipped, not fatal.
pub async fn extract_all<S: AsRef<str>>(store: &LegacyPageStore, slugs: &[S]) -> BatchReport {
    let mut report = BatchReport::default();

    for slug in slugs {
        let slug = slug.as_ref();
        match store.read(slug).await {
            Ok(source) => {
                info!("Extracted page {}", slug);
                report.extractions.push(extract(slug, &source));
            }
            Err(SourceError::NotFound) => {
                warn!("No page file for {}, skipping", slug);
                report.skipped.push(slug.to_string());
            }
            Err(e) => {
                error!("Failed to read page {}: {}", slug, e);
                report.failed.push((slug.to_string(), e.to_string()));
            }
        }
    }

    report
}

pub fn write_profiles(path: &Path, profiles: &[ExtractedProfile]) -> Result<()> {
    let json = serde_json::to_string_pretty(profiles)?;
    std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

pub fn read_profiles(path: &Path) -> Result<Vec<ExtractedProfile>> {
    let raw = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let profiles = serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))?;
    Ok(profiles)
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MigrationSummary {
    pub created: usize,
    pub updated: usize,
    pub links: usize,
    pub failed: Vec<String>,
}

/// Saves each profile independently; one failure does not stop the rest.
pub async fn persist_profiles(
    repo: &dyn PageRepositoryTrait,
    profiles: &[ExtractedProfile],
) -> MigrationSummary {
    let mut summary = MigrationSummary::default();

    for profile in profiles {
        match repo.save_profile(profile).await {
            Ok(saved) => {
                if saved.created {
                    info!("Created page {} ({})", profile.slug, saved.page_id);
                    summary.created += 1;
                } else {
                    info!("Updated page {} ({})", profile.slug, saved.page_id);
                    summary.updated += 1;
                }
                summary.links += saved.links;
            }
            Err(e) => {
                error!("Failed to save page {}: {:#}", profile.slug, e);
                summary.failed.push(profile.slug.clone());
            }
        }
    }

    summary
}
