//! Dashboard Page
//!
//! Totals, profile information, recent activities and achievements for the
//! signed-in user.

use leptos::*;
use leptos_router::*;
use octofit::views::dashboard::{load_dashboard, DashboardData};
use octofit::views::ViewState;

use crate::components::{LoadError, Loading};
use crate::state::{spawn_load, use_global_state, use_view_model};

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_global_state();
    let model = use_view_model::<DashboardData>();

    // Fetch on mount
    let client = state.client.clone();
    spawn_load(model, async move { load_dashboard(&client).await });

    move || match model.with(|m| m.state().clone()) {
        ViewState::Ready(data) => view! { <DashboardContent data=data /> }.into_view(),
        ViewState::Failed(message) => view! { <LoadError message=message /> }.into_view(),
        _ => view! { <Loading /> }.into_view(),
    }
}

#[component]
fn DashboardContent(data: DashboardData) -> impl IntoView {
    let cards = data.stat_cards();
    let rows = data.profile_rows();

    view! {
        <div class="space-y-8">
            <h1 class="text-3xl font-bold">{format!("Welcome, {}!", data.profile.username)}</h1>

            // Stat cards
            <section class="grid grid-cols-2 md:grid-cols-4 gap-4">
                {cards
                    .into_iter()
                    .map(|card| view! {
                        <div class="bg-gray-800 rounded-xl p-6 text-center">
                            <h3 class="text-3xl font-bold">{card.value}</h3>
                            <p class="text-gray-400">{card.label}</p>
                        </div>
                    })
                    .collect_view()}
            </section>

            <section class="grid grid-cols-1 md:grid-cols-2 gap-4">
                <div class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"Profile Information"</h2>
                    {rows
                        .into_iter()
                        .map(|(label, value)| view! {
                            <p><strong>{label}":"</strong>" "{value}</p>
                        })
                        .collect_view()}
                </div>

                <div class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"Recent Activities"</h2>
                    {if data.recent_activities.is_empty() {
                        view! {
                            <p>
                                "No activities yet. "
                                <A href="/activities" class="text-primary-400 hover:underline">
                                    "Log your first workout!"
                                </A>
                            </p>
                        }
                        .into_view()
                    } else {
                        view! {
                            <ul class="divide-y divide-gray-700">
                                {data
                                    .recent_activities
                                    .into_iter()
                                    .map(|a| view! {
                                        <li class="py-2">
                                            <strong>{a.activity_type.display_name()}</strong>
                                            {format!(" - {} min", a.duration)}
                                            <br />
                                            <small class="text-gray-400">{a.date_performed.to_string()}</small>
                                        </li>
                                    })
                                    .collect_view()}
                            </ul>
                        }
                        .into_view()
                    }}
                </div>
            </section>

            {(!data.achievements.is_empty()).then(|| view! {
                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"Achievements"</h2>
                    <div class="flex flex-wrap gap-3">
                        {data
                            .achievements
                            .into_iter()
                            .map(|a| view! {
                                <div class="bg-gray-700 rounded-lg px-4 py-2" title=a.description>
                                    <span class="font-medium">{a.title}</span>
                                    <span class="ml-2 text-xs text-gray-400">{a.badge_type}</span>
                                </div>
                            })
                            .collect_view()}
                    </div>
                </section>
            })}
        </div>
    }
}
