use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Default route under which course detail pages live
pub const DEFAULT_DETAIL_ROUTE_PREFIX: &str = "/teacher/courses";

/// Default number of days before a deadline at which the warning badge appears
pub const DEFAULT_DEADLINE_WARNING_DAYS: u32 = 7;

/// Errors raised at the course view-model boundary
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CourseCardError {
    #[error("course id must not be empty")]
    EmptyId,
    #[error("unknown course status: {0}")]
    UnknownStatus(String),
    #[error("unparsable deadline: {0}")]
    InvalidDeadline(String),
}

/// Progress status of a course, drives the badge and the progress bar tone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CourseStatus {
    NotStarted,
    InProgress,
    Completed,
}

impl CourseStatus {
    /// Human readable badge label
    pub fn label(&self) -> &'static str {
        match self {
            CourseStatus::NotStarted => "Not Started",
            CourseStatus::InProgress => "In Progress",
            CourseStatus::Completed => "Completed",
        }
    }

    /// CSS class carrying the badge color (gray / blue / green)
    pub fn css_class(&self) -> &'static str {
        match self {
            CourseStatus::NotStarted => "status-not-started",
            CourseStatus::InProgress => "status-in-progress",
            CourseStatus::Completed => "status-completed",
        }
    }

    pub fn progress_tone(&self) -> ProgressTone {
        match self {
            CourseStatus::Completed => ProgressTone::Completed,
            CourseStatus::NotStarted | CourseStatus::InProgress => ProgressTone::Active,
        }
    }
}

impl FromStr for CourseStatus {
    type Err = CourseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NOT_STARTED" => Ok(CourseStatus::NotStarted),
            "IN_PROGRESS" => Ok(CourseStatus::InProgress),
            "COMPLETED" => Ok(CourseStatus::Completed),
            other => Err(CourseCardError::UnknownStatus(other.to_string())),
        }
    }
}

/// Fill color of the progress bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressTone {
    /// Course finished (green)
    Completed,
    /// Anything else (blue)
    Active,
}

impl ProgressTone {
    pub fn css_class(&self) -> &'static str {
        match self {
            ProgressTone::Completed => "progress-fill-completed",
            ProgressTone::Active => "progress-fill-active",
        }
    }
}

/// Course summary as delivered by whoever feeds the card.
///
/// Field names are camelCase on the wire. Only `thumbnail`, `deadline` and
/// `loading` may be omitted; a bare placeholder goes through
/// [`LoadingMarker`] instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseSummary {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Thumbnail URI, falls back to a glyph when absent
    #[serde(default)]
    pub thumbnail: Option<String>,
    /// Percentage, not range checked
    pub progress: i32,
    pub total_modules: u32,
    pub completed_modules: u32,
    pub estimated_hours: f64,
    /// ISO-8601 date or date-time
    #[serde(default)]
    pub deadline: Option<String>,
    pub status: CourseStatus,
    /// When true everything else is ignored and a skeleton is shown
    #[serde(default)]
    pub loading: Option<bool>,
}

/// Just the `loading` flag of a course record.
///
/// Decoded before [`CourseSummary`] so that `{"loading": true}` placeholders
/// need none of the course fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct LoadingMarker {
    #[serde(default)]
    pub loading: Option<bool>,
}

impl LoadingMarker {
    pub fn is_loading(&self) -> bool {
        self.loading.unwrap_or(false)
    }
}

/// Parse an ISO-8601 deadline into a UTC instant.
///
/// Accepts RFC 3339, a date-time without offset (read as UTC) and a plain
/// `YYYY-MM-DD` date (midnight UTC).
pub fn parse_deadline(raw: &str) -> Result<DateTime<Utc>, CourseCardError> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(naive.and_utc());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(midnight.and_utc());
        }
    }

    Err(CourseCardError::InvalidDeadline(raw.to_string()))
}

/// Deadline after boundary parsing
#[derive(Debug, Clone, PartialEq)]
pub enum Deadline {
    None,
    At(DateTime<Utc>),
    /// Kept verbatim; never produces a day count
    Unparsable(String),
}

impl Deadline {
    pub fn from_wire(raw: Option<&str>) -> Self {
        match raw {
            None => Deadline::None,
            Some(value) => match parse_deadline(value) {
                Ok(instant) => Deadline::At(instant),
                Err(_) => Deadline::Unparsable(value.to_string()),
            },
        }
    }

    pub fn instant(&self) -> Option<DateTime<Utc>> {
        match self {
            Deadline::At(instant) => Some(*instant),
            Deadline::None | Deadline::Unparsable(_) => None,
        }
    }
}

/// Whole days from `now` until `deadline`, rounded up.
pub fn days_until(deadline: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let millis = (deadline - now).num_milliseconds() as f64;
    (millis / MILLIS_PER_DAY).ceil() as i64
}

/// Tunables for the card, shared by every card on a page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CourseCardConfig {
    pub detail_route_prefix: String,
    pub deadline_warning_days: u32,
}

impl Default for CourseCardConfig {
    fn default() -> Self {
        Self {
            detail_route_prefix: DEFAULT_DETAIL_ROUTE_PREFIX.to_string(),
            deadline_warning_days: DEFAULT_DEADLINE_WARNING_DAYS,
        }
    }
}

/// Detail page path for a course. The id is inserted verbatim.
pub fn detail_path(id: &str, config: &CourseCardConfig) -> String {
    format!("{}/{}", config.detail_route_prefix.trim_end_matches('/'), id)
}

/// Something odd about a model that is rendered as-is but worth logging
#[derive(Debug, Clone, PartialEq)]
pub enum ModelAnomaly {
    ProgressOutOfRange(i32),
    CompletedExceedsTotal { completed: u32, total: u32 },
    UnparsableDeadline(String),
}

impl fmt::Display for ModelAnomaly {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ModelAnomaly::ProgressOutOfRange(progress) => {
                write!(f, "progress {} is outside 0-100", progress)
            }
            ModelAnomaly::CompletedExceedsTotal { completed, total } => {
                write!(f, "completed modules {} exceed total {}", completed, total)
            }
            ModelAnomaly::UnparsableDeadline(raw) => {
                write!(f, "deadline '{}' could not be parsed", raw)
            }
        }
    }
}

/// Validated course data ready for rendering
#[derive(Debug, Clone, PartialEq)]
pub struct CourseCardModel {
    pub id: String,
    pub title: String,
    pub description: String,
    pub thumbnail: Option<String>,
    pub progress: i32,
    pub total_modules: u32,
    pub completed_modules: u32,
    pub estimated_hours: f64,
    pub deadline: Deadline,
    pub status: CourseStatus,
}

impl CourseCardModel {
    /// Out-of-range values kept uncorrected on this model
    pub fn anomalies(&self) -> Vec<ModelAnomaly> {
        let mut anomalies = Vec::new();

        if !(0..=100).contains(&self.progress) {
            anomalies.push(ModelAnomaly::ProgressOutOfRange(self.progress));
        }
        if self.completed_modules > self.total_modules {
            anomalies.push(ModelAnomaly::CompletedExceedsTotal {
                completed: self.completed_modules,
                total: self.total_modules,
            });
        }
        if let Deadline::Unparsable(raw) = &self.deadline {
            anomalies.push(ModelAnomaly::UnparsableDeadline(raw.clone()));
        }

        anomalies
    }
}

impl TryFrom<CourseSummary> for CourseCardModel {
    type Error = CourseCardError;

    fn try_from(summary: CourseSummary) -> Result<Self, Self::Error> {
        if summary.id.trim().is_empty() {
            return Err(CourseCardError::EmptyId);
        }

        let deadline = Deadline::from_wire(summary.deadline.as_deref());
        // An empty URI is treated like a missing one
        let thumbnail = summary.thumbnail.filter(|uri| !uri.trim().is_empty());

        Ok(Self {
            id: summary.id,
            title: summary.title,
            description: summary.description,
            thumbnail,
            progress: summary.progress,
            total_modules: summary.total_modules,
            completed_modules: summary.completed_modules,
            estimated_hours: summary.estimated_hours,
            deadline,
            status: summary.status,
        })
    }
}

/// What a card is asked to show
#[derive(Debug, Clone, PartialEq)]
pub enum CardInput {
    Loading,
    Ready(CourseCardModel),
}

impl CardInput {
    /// A summary flagged as loading becomes a placeholder without validation
    pub fn from_summary(summary: CourseSummary) -> Result<Self, CourseCardError> {
        if summary.loading.unwrap_or(false) {
            return Ok(CardInput::Loading);
        }
        CourseCardModel::try_from(summary).map(CardInput::Ready)
    }
}

/// Whether the deadline warning applies for a given day count
pub fn deadline_warning_visible(days_until_deadline: Option<i64>, warning_days: u32) -> bool {
    matches!(days_until_deadline, Some(days) if days > 0 && days <= i64::from(warning_days))
}

pub fn deadline_warning_text(days_left: i64) -> String {
    if days_left == 1 {
        "1 day left".to_string()
    } else {
        format!("{} days left", days_left)
    }
}

/// The single badge slot in the card's corner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CornerBadge {
    None,
    Completed,
    DeadlineWarning { days_left: i64 },
}

impl CornerBadge {
    /// Completed wins over the deadline warning
    pub fn resolve(status: CourseStatus, days_until_deadline: Option<i64>, warning_days: u32) -> Self {
        if status == CourseStatus::Completed {
            return CornerBadge::Completed;
        }
        match days_until_deadline {
            Some(days) if deadline_warning_visible(Some(days), warning_days) => {
                CornerBadge::DeadlineWarning { days_left: days }
            }
            _ => CornerBadge::None,
        }
    }

    pub fn text(&self) -> Option<String> {
        match self {
            CornerBadge::None => None,
            CornerBadge::Completed => Some("Completed".to_string()),
            CornerBadge::DeadlineWarning { days_left } => Some(deadline_warning_text(*days_left)),
        }
    }
}

/// Every display value a content-mode card needs
#[derive(Debug, Clone, PartialEq)]
pub struct CourseCardView {
    pub title: String,
    pub description: String,
    pub thumbnail: Option<String>,
    pub status_label: &'static str,
    pub status_class: &'static str,
    pub days_until_deadline: Option<i64>,
    pub corner_badge: CornerBadge,
    /// "{completed}/{total} lessons"
    pub lessons_text: String,
    /// "{progress}%"
    pub percent_text: String,
    /// Inline style for the bar fill, unclamped
    pub progress_width_style: String,
    pub progress_tone: ProgressTone,
    pub hours_text: String,
    pub total_lessons_text: String,
    pub detail_path: String,
}

impl CourseCardView {
    pub fn derive(model: &CourseCardModel, now: DateTime<Utc>, config: &CourseCardConfig) -> Self {
        let days_until_deadline = model
            .deadline
            .instant()
            .map(|deadline| days_until(deadline, now));

        Self {
            title: model.title.clone(),
            description: model.description.clone(),
            thumbnail: model.thumbnail.clone(),
            status_label: model.status.label(),
            status_class: model.status.css_class(),
            days_until_deadline,
            corner_badge: CornerBadge::resolve(
                model.status,
                days_until_deadline,
                config.deadline_warning_days,
            ),
            lessons_text: format!("{}/{} lessons", model.completed_modules, model.total_modules),
            percent_text: format!("{}%", model.progress),
            progress_width_style: format!("width: {}%", model.progress),
            progress_tone: model.status.progress_tone(),
            hours_text: format!("{}h", model.estimated_hours),
            total_lessons_text: format!("{} lessons", model.total_modules),
            detail_path: detail_path(&model.id, config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 15, 10, 30, 0).unwrap()
    }

    fn summary(status: CourseStatus) -> CourseSummary {
        CourseSummary {
            id: "rust-101".to_string(),
            title: "Intro to Rust".to_string(),
            description: "Ownership, borrowing and lifetimes".to_string(),
            thumbnail: Some("https://cdn.example.com/rust.png".to_string()),
            progress: 40,
            total_modules: 10,
            completed_modules: 4,
            estimated_hours: 12.0,
            deadline: None,
            status,
            loading: None,
        }
    }

    fn view_for(summary: CourseSummary) -> CourseCardView {
        let model = CourseCardModel::try_from(summary).unwrap();
        CourseCardView::derive(&model, fixed_now(), &CourseCardConfig::default())
    }

    #[test]
    fn test_status_lookup_is_total() {
        assert_eq!(CourseStatus::NotStarted.label(), "Not Started");
        assert_eq!(CourseStatus::InProgress.label(), "In Progress");
        assert_eq!(CourseStatus::Completed.label(), "Completed");

        assert_eq!(CourseStatus::NotStarted.css_class(), "status-not-started");
        assert_eq!(CourseStatus::InProgress.css_class(), "status-in-progress");
        assert_eq!(CourseStatus::Completed.css_class(), "status-completed");
    }

    #[test]
    fn test_status_from_str() {
        assert_eq!("IN_PROGRESS".parse::<CourseStatus>().unwrap(), CourseStatus::InProgress);
        assert_eq!(
            "ARCHIVED".parse::<CourseStatus>(),
            Err(CourseCardError::UnknownStatus("ARCHIVED".to_string()))
        );
    }

    #[test]
    fn test_progress_tone() {
        assert_eq!(CourseStatus::Completed.progress_tone(), ProgressTone::Completed);
        assert_eq!(CourseStatus::InProgress.progress_tone(), ProgressTone::Active);
        assert_eq!(CourseStatus::NotStarted.progress_tone(), ProgressTone::Active);
    }

    #[test]
    fn test_summary_deserializes_camel_case() {
        let json = r#"{
            "id": "c-1",
            "title": "Algebra",
            "description": "Linear equations",
            "thumbnail": null,
            "progress": 55,
            "totalModules": 8,
            "completedModules": 3,
            "estimatedHours": 6.5,
            "deadline": "2025-06-20",
            "status": "IN_PROGRESS"
        }"#;

        let summary: CourseSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.total_modules, 8);
        assert_eq!(summary.completed_modules, 3);
        assert_eq!(summary.estimated_hours, 6.5);
        assert_eq!(summary.status, CourseStatus::InProgress);
        assert_eq!(summary.loading, None);
    }

    #[test]
    fn test_missing_required_fields_are_rejected() {
        assert!(serde_json::from_str::<CourseSummary>(r#"{"id": "x"}"#).is_err());

        let without_status = r#"{
            "id": "c-1", "title": "Algebra", "description": "Linear equations",
            "progress": 10, "totalModules": 4, "completedModules": 1, "estimatedHours": 2
        }"#;
        let err = serde_json::from_str::<CourseSummary>(without_status).unwrap_err();
        assert!(err.to_string().contains("missing field `status`"));
    }

    #[test]
    fn test_optional_fields_may_be_omitted() {
        let json = r#"{
            "id": "c-1", "title": "Algebra", "description": "Linear equations",
            "progress": 10, "totalModules": 4, "completedModules": 1,
            "estimatedHours": 2, "status": "NOT_STARTED"
        }"#;
        let summary: CourseSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.thumbnail, None);
        assert_eq!(summary.deadline, None);
        assert_eq!(summary.loading, None);
    }

    #[test]
    fn test_status_serializes_in_screaming_snake_case() {
        let json = serde_json::to_string(&CourseStatus::InProgress).unwrap();
        assert_eq!(json, "\"IN_PROGRESS\"");
        let status: CourseStatus = serde_json::from_str("\"NOT_STARTED\"").unwrap();
        assert_eq!(status, CourseStatus::NotStarted);
    }

    #[test]
    fn test_unknown_status_is_rejected_on_the_wire() {
        let json = r#"{"id": "c-1", "status": "ARCHIVED"}"#;
        assert!(serde_json::from_str::<CourseSummary>(json).is_err());
    }

    #[test]
    fn test_loading_marker_needs_no_course_fields() {
        let marker: LoadingMarker = serde_json::from_str(r#"{"loading": true}"#).unwrap();
        assert!(marker.is_loading());

        let marker: LoadingMarker = serde_json::from_str(r#"{"id": "x"}"#).unwrap();
        assert!(!marker.is_loading());
    }

    #[test]
    fn test_loading_ignores_everything_else() {
        let mut loading = summary(CourseStatus::Completed);
        loading.id = String::new();
        loading.loading = Some(true);
        assert_eq!(CardInput::from_summary(loading).unwrap(), CardInput::Loading);
    }

    #[test]
    fn test_empty_id_is_rejected() {
        let mut bad = summary(CourseStatus::InProgress);
        bad.id = "   ".to_string();
        assert_eq!(CourseCardModel::try_from(bad), Err(CourseCardError::EmptyId));
    }

    #[test]
    fn test_empty_thumbnail_counts_as_missing() {
        let mut course = summary(CourseStatus::InProgress);
        course.thumbnail = Some(String::new());
        let model = CourseCardModel::try_from(course).unwrap();
        assert_eq!(model.thumbnail, None);
    }

    #[test]
    fn test_parse_deadline_formats() {
        let midnight = Utc.with_ymd_and_hms(2025, 6, 20, 0, 0, 0).unwrap();
        assert_eq!(parse_deadline("2025-06-20").unwrap(), midnight);
        assert_eq!(parse_deadline("2025-06-20T00:00:00Z").unwrap(), midnight);
        assert_eq!(parse_deadline("2025-06-20T02:00:00+02:00").unwrap(), midnight);
        assert_eq!(parse_deadline("2025-06-20T00:00:00").unwrap(), midnight);
        assert_eq!(parse_deadline("2025-06-20T00:00:00.000").unwrap(), midnight);
        assert_eq!(parse_deadline("2025-06-20T00:00").unwrap(), midnight);
        assert!(matches!(
            parse_deadline("next friday"),
            Err(CourseCardError::InvalidDeadline(_))
        ));
    }

    #[test]
    fn test_days_until_rounds_up() {
        let now = fixed_now();
        assert_eq!(days_until(now + Duration::days(3), now), 3);
        assert_eq!(days_until(now + Duration::hours(1), now), 1);
        assert_eq!(days_until(now + Duration::hours(25), now), 2);
        assert_eq!(days_until(now, now), 0);
        assert_eq!(days_until(now - Duration::hours(1), now), 0);
        assert_eq!(days_until(now - Duration::hours(36), now), -1);
    }

    #[test]
    fn test_deadline_warning_window() {
        assert!(!deadline_warning_visible(None, 7));
        assert!(!deadline_warning_visible(Some(0), 7));
        assert!(!deadline_warning_visible(Some(-2), 7));
        assert!(deadline_warning_visible(Some(1), 7));
        assert!(deadline_warning_visible(Some(7), 7));
        assert!(!deadline_warning_visible(Some(8), 7));
        assert!(deadline_warning_visible(Some(10), 14));
    }

    #[test]
    fn test_deadline_warning_text() {
        assert_eq!(deadline_warning_text(3), "3 days left");
        assert_eq!(deadline_warning_text(1), "1 day left");
    }

    #[test]
    fn test_badges_are_mutually_exclusive() {
        for status in [CourseStatus::NotStarted, CourseStatus::InProgress, CourseStatus::Completed] {
            for days in [None, Some(-1), Some(0), Some(1), Some(3), Some(7), Some(8)] {
                let badge = CornerBadge::resolve(status, days, 7);
                let completed_shown = badge == CornerBadge::Completed;
                let warning_shown = matches!(badge, CornerBadge::DeadlineWarning { .. });
                assert!(!(completed_shown && warning_shown));
                assert_eq!(completed_shown, status == CourseStatus::Completed);
                assert_eq!(
                    warning_shown,
                    status != CourseStatus::Completed && deadline_warning_visible(days, 7)
                );
            }
        }
    }

    #[test]
    fn test_completed_course_due_tomorrow() {
        let mut course = summary(CourseStatus::Completed);
        course.progress = 100;
        course.completed_modules = 10;
        course.deadline = Some((fixed_now() + Duration::days(1)).to_rfc3339());

        let view = view_for(course);
        assert_eq!(view.days_until_deadline, Some(1));
        assert_eq!(view.corner_badge, CornerBadge::Completed);
        assert_eq!(view.progress_width_style, "width: 100%");
        assert_eq!(view.progress_tone, ProgressTone::Completed);
    }

    #[test]
    fn test_in_progress_course_due_in_three_days() {
        let mut course = summary(CourseStatus::InProgress);
        course.deadline = Some((fixed_now() + Duration::days(3)).to_rfc3339());

        let view = view_for(course);
        assert_eq!(view.corner_badge, CornerBadge::DeadlineWarning { days_left: 3 });
        assert_eq!(view.corner_badge.text().as_deref(), Some("3 days left"));
        assert_eq!(view.progress_tone, ProgressTone::Active);
    }

    #[test]
    fn test_not_started_without_deadline_has_no_badge() {
        let view = view_for(summary(CourseStatus::NotStarted));
        assert_eq!(view.days_until_deadline, None);
        assert_eq!(view.corner_badge, CornerBadge::None);
        assert_eq!(view.corner_badge.text(), None);
    }

    #[test]
    fn test_unparsable_deadline_degrades_silently() {
        let mut course = summary(CourseStatus::InProgress);
        course.deadline = Some("soon-ish".to_string());

        let model = CourseCardModel::try_from(course).unwrap();
        assert_eq!(model.deadline, Deadline::Unparsable("soon-ish".to_string()));

        let view = CourseCardView::derive(&model, fixed_now(), &CourseCardConfig::default());
        assert_eq!(view.days_until_deadline, None);
        assert_eq!(view.corner_badge, CornerBadge::None);
    }

    #[test]
    fn test_texts_are_rendered_unclamped() {
        let mut course = summary(CourseStatus::InProgress);
        course.progress = 150;
        course.completed_modules = 12;
        course.total_modules = 10;
        course.estimated_hours = 2.5;

        let view = view_for(course);
        assert_eq!(view.lessons_text, "12/10 lessons");
        assert_eq!(view.percent_text, "150%");
        assert_eq!(view.progress_width_style, "width: 150%");
        assert_eq!(view.hours_text, "2.5h");
        assert_eq!(view.total_lessons_text, "10 lessons");
    }

    #[test]
    fn test_whole_hours_drop_the_fraction() {
        let view = view_for(summary(CourseStatus::InProgress));
        assert_eq!(view.hours_text, "12h");
        assert_eq!(view.lessons_text, "4/10 lessons");
        assert_eq!(view.percent_text, "40%");
    }

    #[test]
    fn test_anomalies_are_reported_not_corrected() {
        let mut course = summary(CourseStatus::InProgress);
        course.progress = -5;
        course.completed_modules = 11;
        course.deadline = Some("31/12/2025".to_string());

        let model = CourseCardModel::try_from(course).unwrap();
        assert_eq!(model.progress, -5);
        assert_eq!(
            model.anomalies(),
            vec![
                ModelAnomaly::ProgressOutOfRange(-5),
                ModelAnomaly::CompletedExceedsTotal { completed: 11, total: 10 },
                ModelAnomaly::UnparsableDeadline("31/12/2025".to_string()),
            ]
        );

        let clean = CourseCardModel::try_from(summary(CourseStatus::Completed)).unwrap();
        assert!(clean.anomalies().is_empty());
    }

    #[test]
    fn test_detail_path() {
        let config = CourseCardConfig::default();
        assert_eq!(detail_path("rust-101", &config), "/teacher/courses/rust-101");

        let custom = CourseCardConfig {
            detail_route_prefix: "/student/courses/".to_string(),
            ..CourseCardConfig::default()
        };
        assert_eq!(detail_path("abc", &custom), "/student/courses/abc");
    }

    #[test]
    fn test_config_defaults_fill_missing_fields() {
        let config: CourseCardConfig =
            serde_json::from_str(r#"{"deadline_warning_days": 3}"#).unwrap();
        assert_eq!(config.detail_route_prefix, DEFAULT_DETAIL_ROUTE_PREFIX);
        assert_eq!(config.deadline_warning_days, 3);

        let mut course = summary(CourseStatus::InProgress);
        course.deadline = Some((fixed_now() + Duration::days(5)).to_rfc3339());
        let model = CourseCardModel::try_from(course).unwrap();
        let view = CourseCardView::derive(&model, fixed_now(), &config);
        assert_eq!(view.corner_badge, CornerBadge::None);
    }
}
