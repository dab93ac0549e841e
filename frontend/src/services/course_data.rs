use anyhow::{Context, Result};
use shared::{CardInput, CourseSummary, LoadingMarker};

use crate::services::logging::Logger;

const DEMO_COURSES: &str = include_str!("../../demo-courses.json");

/// Cards built from a batch of summaries, plus what had to be skipped or flagged
#[derive(Debug, Default)]
pub struct CourseBatch {
    pub cards: Vec<CardInput>,
    pub warnings: Vec<String>,
}

/// Parse a JSON array of course summaries.
///
/// Entries are decoded one by one so that a single bad record (missing
/// field, unknown status, empty id) is skipped instead of failing the whole
/// batch. A `{"loading": true}` entry becomes a placeholder without any
/// course fields.
pub fn parse_course_batch(json: &str) -> Result<CourseBatch> {
    let entries: Vec<serde_json::Value> =
        serde_json::from_str(json).context("Course list is not a JSON array")?;

    let mut batch = CourseBatch::default();
    for (index, entry) in entries.into_iter().enumerate() {
        let is_placeholder = serde_json::from_value::<LoadingMarker>(entry.clone())
            .map(|marker| marker.is_loading())
            .unwrap_or(false);
        if is_placeholder {
            batch.cards.push(CardInput::Loading);
            continue;
        }

        let summary = match serde_json::from_value::<CourseSummary>(entry) {
            Ok(summary) => summary,
            Err(e) => {
                batch.warnings.push(format!("Skipping course #{}: {}", index, e));
                continue;
            }
        };

        let id = summary.id.clone();
        match CardInput::from_summary(summary) {
            Ok(card) => {
                if let CardInput::Ready(model) = &card {
                    for anomaly in model.anomalies() {
                        batch.warnings.push(format!("Course {}: {}", id, anomaly));
                    }
                }
                batch.cards.push(card);
            }
            Err(e) => batch.warnings.push(format!("Skipping course #{}: {}", index, e)),
        }
    }

    Ok(batch)
}

/// Load the bundled demo courses, logging anything odd along the way
pub fn load_demo_cards() -> Vec<CardInput> {
    match parse_course_batch(DEMO_COURSES) {
        Ok(batch) => {
            for warning in &batch.warnings {
                Logger::warn_with_component("course-data", warning);
            }
            Logger::info_with_component(
                "course-data",
                &format!("📚 Loaded {} course cards", batch.cards.len()),
            );
            batch.cards
        }
        Err(e) => {
            Logger::error_with_component("course-data", &format!("Failed to load courses: {:#}", e));
            Vec::new()
        }
    }
}
