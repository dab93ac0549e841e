use yew::prelude::*;

/// Fixed-shape placeholder shown while course data is on its way.
/// No listeners are attached.
#[function_component(CourseCardSkeleton)]
pub fn course_card_skeleton() -> Html {
    html! {
        <div class="course-card course-card-skeleton" aria-busy="true">
            <div class="skeleton-block skeleton-thumbnail"></div>
            <div class="course-card-body">
                <div class="skeleton-block skeleton-title"></div>
                <div class="skeleton-block skeleton-description"></div>
                <div class="skeleton-block skeleton-progress"></div>
                <div class="course-card-meta">
                    <div class="skeleton-block skeleton-meta"></div>
                    <div class="skeleton-block skeleton-meta"></div>
                </div>
            </div>
        </div>
    }
}
