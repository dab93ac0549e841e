use gloo::timers::future::TimeoutFuture;
use shared::CardInput;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::course_data::load_demo_cards;
use crate::services::logging::Logger;

/// Number of placeholder cards shown while courses load
pub const SKELETON_CARD_COUNT: usize = 3;

pub struct UseCoursesResult {
    pub cards: Vec<CardInput>,
    pub loading: bool,
}

/// Course cards for the dashboard.
///
/// Yields skeleton placeholders until the course list has been loaded,
/// after `load_delay_ms`.
#[hook]
pub fn use_courses(load_delay_ms: u32) -> UseCoursesResult {
    let cards = use_state(Vec::<CardInput>::new);
    let loading = use_state(|| true);

    {
        let cards = cards.clone();
        let loading = loading.clone();

        use_effect_with((), move |_| {
            spawn_local(async move {
                TimeoutFuture::new(load_delay_ms).await;
                Logger::debug_with_component("use-courses", "Loading course list");
                cards.set(load_demo_cards());
                loading.set(false);
            });
            || ()
        });
    }

    UseCoursesResult {
        cards: displayed_cards(*loading, &cards),
        loading: *loading,
    }
}

fn displayed_cards(loading: bool, loaded: &[CardInput]) -> Vec<CardInput> {
    if loading {
        vec![CardInput::Loading; SKELETON_CARD_COUNT]
    } else {
        loaded.to_vec()
    }
}
