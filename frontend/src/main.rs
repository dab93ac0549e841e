use yew::prelude::*;

mod components;
mod config;
mod hooks;
mod services;

use components::course_card::CourseCard;
use config::AppConfig;
use hooks::use_courses::use_courses;
use services::logging::Logger;
use services::navigation::Navigator;

#[derive(Properties, PartialEq)]
struct AppProps {
    config: AppConfig,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let navigator = use_memo((), |_| Navigator::browser());
    let courses = use_courses(props.config.simulated_load_ms);

    html! {
        <main class="course-dashboard">
            <h1>{"My Courses"}</h1>
            <section class="course-grid" aria-busy={courses.loading.to_string()}>
                {for courses.cards.iter().enumerate().map(|(index, input)| html! {
                    <CourseCard
                        key={index}
                        input={input.clone()}
                        navigator={(*navigator).clone()}
                        config={props.config.card.clone()}
                    />
                })}
            </section>
        </main>
    }
}

fn main() {
    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    Logger::init(config.log_level, config.log_endpoint.clone());
    if let Some(e) = config_error {
        Logger::error_with_component("app", &format!("{:#}, using defaults", e));
    }
    Logger::info_with_component("app", "🚀 Starting course dashboard");

    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
