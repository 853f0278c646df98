//! Workout Suggestions Page

use leptos::*;
use octofit::models::WorkoutSuggestion;
use octofit::views::workouts::{self, load_suggestions, EMPTY_MESSAGE};
use octofit::views::ViewState;

use crate::components::{LoadError, Loading};
use crate::state::{spawn_load, use_global_state, use_view_model};

#[component]
pub fn Workouts() -> impl IntoView {
    let state = use_global_state();
    let model = use_view_model::<Vec<WorkoutSuggestion>>();
    let (generating, set_generating) = create_signal(false);

    let client = state.client.clone();
    let reload = Callback::new(move |_: ()| {
        let client = client.clone();
        spawn_load(model, async move { load_suggestions(&client).await });
    });
    reload.call(());

    let on_generate = {
        let state = state.clone();
        move |_| {
            let client = state.client.clone();
            let state = state.clone();
            set_generating.set(true);
            spawn_local(async move {
                match workouts::generate(&client).await {
                    Ok(count) => {
                        state.show_success(&format!("{} new workout suggestions generated", count));
                        reload.call(());
                    }
                    Err(e) => state.show_error(&e.user_message()),
                }
                set_generating.try_set(false);
            });
        }
    };

    let on_complete = {
        let state = state.clone();
        Callback::new(move |id: u64| {
            let client = state.client.clone();
            let state = state.clone();
            spawn_local(async move {
                match workouts::mark_completed(&client, id).await {
                    Ok(()) => {
                        state.show_success("Workout marked as completed");
                        reload.call(());
                    }
                    Err(e) => state.show_error(&e.user_message()),
                }
            });
        })
    };

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <h1 class="text-3xl font-bold">"Workout Suggestions"</h1>
                <button
                    on:click=on_generate
                    disabled=move || generating.get()
                    class="px-4 py-2 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600 rounded-lg font-medium"
                >
                    {move || if generating.get() { "Generating..." } else { "Generate Suggestions" }}
                </button>
            </div>

            {move || match model.with(|m| m.state().clone()) {
                ViewState::Ready(list) => view! {
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4">
                        {list
                            .into_iter()
                            .map(|s| view! { <SuggestionCard suggestion=s on_complete=on_complete /> })
                            .collect_view()}
                    </div>
                }
                .into_view(),
                ViewState::Empty => view! {
                    <div class="bg-blue-900/40 border border-blue-700 text-blue-200 rounded-lg px-4 py-3">
                        {EMPTY_MESSAGE}
                    </div>
                }
                .into_view(),
                ViewState::Failed(message) => view! { <LoadError message=message /> }.into_view(),
                _ => view! { <Loading /> }.into_view(),
            }}
        </div>
    }
}

#[component]
fn SuggestionCard(suggestion: WorkoutSuggestion, on_complete: Callback<u64>) -> impl IntoView {
    let id = suggestion.id;
    let details = workouts::summary(&suggestion);

    view! {
        <div class="bg-gray-800 rounded-xl p-6 flex flex-col">
            <h3 class="text-lg font-semibold">{suggestion.title}</h3>
            <p class="text-gray-400 my-2">{suggestion.description}</p>
            <p class="text-sm flex-1">
                {details
                    .into_iter()
                    .map(|(label, value)| view! { <strong>{label}": "</strong>{value}<br /> })
                    .collect_view()}
            </p>
            <div class="mt-4">
                {if suggestion.completed {
                    view! {
                        <span class="px-2 py-1 text-xs bg-green-600 rounded">"Completed"</span>
                    }
                    .into_view()
                } else {
                    view! {
                        <button
                            on:click=move |_| on_complete.call(id)
                            class="px-3 py-1 text-sm bg-green-600 hover:bg-green-700 rounded-lg"
                        >
                            "Mark as Completed"
                        </button>
                    }
                    .into_view()
                }}
            </div>
        </div>
    }
}
