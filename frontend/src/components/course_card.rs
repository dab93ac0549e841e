use chrono::{DateTime, Utc};
use shared::{deadline_warning_text, CardInput, CornerBadge, CourseCardConfig, CourseCardView};
use yew::prelude::*;

use super::course_card_skeleton::CourseCardSkeleton;
use super::icons::{AlertIcon, BookIcon, CheckIcon, ClockIcon, ThumbnailFallbackIcon};
use crate::services::date_utils;
use crate::services::navigation::Navigator;

#[derive(Properties, PartialEq)]
pub struct CourseCardProps {
    pub input: CardInput,
    pub navigator: Navigator,
    #[prop_or_default]
    pub config: CourseCardConfig,
    /// Instant used for deadline arithmetic; the browser clock is read when absent
    #[prop_or_default]
    pub now: Option<DateTime<Utc>>,
}

/// Course summary tile. The whole card is one click target leading to the
/// course detail page.
#[function_component(CourseCard)]
pub fn course_card(props: &CourseCardProps) -> Html {
    let model = match &props.input {
        CardInput::Loading => return html! { <CourseCardSkeleton /> },
        CardInput::Ready(model) => model,
    };

    let now = props.now.unwrap_or_else(date_utils::now);
    let view = CourseCardView::derive(model, now, &props.config);

    let onclick = {
        let navigator = props.navigator.clone();
        let path = view.detail_path.clone();
        Callback::from(move |_: MouseEvent| navigator.navigate(&path))
    };

    // Enter and Space act like a click for keyboard users
    let onkeydown = {
        let navigator = props.navigator.clone();
        let path = view.detail_path.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" || e.key() == " " {
                e.prevent_default();
                navigator.navigate(&path);
            }
        })
    };

    let thumbnail = match &view.thumbnail {
        Some(src) => html! {
            <img class="course-card-image" src={src.clone()} alt={view.title.clone()} />
        },
        None => html! {
            <div class="course-card-image-fallback">
                <ThumbnailFallbackIcon />
            </div>
        },
    };

    let corner_badge = match view.corner_badge {
        CornerBadge::Completed => html! {
            <span class="corner-badge completed-badge">
                <CheckIcon />
                {"Completed"}
            </span>
        },
        CornerBadge::DeadlineWarning { days_left } => {
            let due = model
                .deadline
                .instant()
                .map(|deadline| format!("Due {}", date_utils::format_deadline_for_display(deadline)));
            html! {
                <span class="corner-badge deadline-warning" title={due}>
                    <AlertIcon />
                    {deadline_warning_text(days_left)}
                </span>
            }
        }
        CornerBadge::None => html! {},
    };

    html! {
        <article
            class="course-card"
            role="link"
            tabindex="0"
            aria-label={view.title.clone()}
            data-course-id={model.id.clone()}
            {onclick}
            {onkeydown}
        >
            <div class="course-card-thumbnail">
                {thumbnail}
                <span class={classes!("status-badge", view.status_class)}>{view.status_label}</span>
                {corner_badge}
            </div>
            <div class="course-card-body">
                <h3 class="course-card-title">{&view.title}</h3>
                <p class="course-card-description">{&view.description}</p>
                <div class="course-card-progress">
                    <div class="progress-labels">
                        <span class="lessons-count">{&view.lessons_text}</span>
                        <span class="progress-percent">{&view.percent_text}</span>
                    </div>
                    <div class="progress-track">
                        <div
                            class={classes!("progress-fill", view.progress_tone.css_class())}
                            style={view.progress_width_style.clone()}
                        ></div>
                    </div>
                </div>
                <div class="course-card-meta">
                    <span class="meta-hours">
                        <ClockIcon />
                        {&view.hours_text}
                    </span>
                    <span class="meta-lessons">
                        <BookIcon />
                        {&view.total_lessons_text}
                    </span>
                </div>
            </div>
        </article>
    }
}
