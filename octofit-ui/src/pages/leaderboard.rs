//! Leaderboard Page

use leptos::*;
use octofit::views::leaderboard::{load_leaderboards, LeaderboardTab, Leaderboards};
use octofit::views::ViewState;

use crate::components::{LoadError, Loading};
use crate::state::{spawn_load, use_global_state, use_view_model};

#[component]
pub fn Leaderboard() -> impl IntoView {
    let state = use_global_state();
    let model = use_view_model::<Leaderboards>();
    let (tab, set_tab) = create_signal(LeaderboardTab::default());

    let client = state.client.clone();
    spawn_load(model, async move { load_leaderboards(&client).await });

    view! {
        <div class="space-y-6">
            <h1 class="text-3xl font-bold">"Leaderboard"</h1>

            <div class="flex border-b border-gray-700">
                {[LeaderboardTab::Users, LeaderboardTab::Teams]
                    .into_iter()
                    .map(|t| view! {
                        <button
                            on:click=move |_| set_tab.set(t)
                            class=move || {
                                if tab.get() == t {
                                    "px-4 py-2 -mb-px border-b-2 border-primary-500"
                                } else {
                                    "px-4 py-2 -mb-px border-b-2 border-transparent text-gray-400"
                                }
                            }
                        >
                            {t.label()}
                        </button>
                    })
                    .collect_view()}
            </div>

            {move || match model.with(|m| m.state().clone()) {
                ViewState::Ready(boards) => view! { <Board boards=boards tab=tab /> }.into_view(),
                ViewState::Failed(message) => view! { <LoadError message=message /> }.into_view(),
                _ => view! { <Loading /> }.into_view(),
            }}
        </div>
    }
}

#[component]
fn Board(boards: Leaderboards, tab: ReadSignal<LeaderboardTab>) -> impl IntoView {
    move || {
        let current = tab.get();
        let rows = boards.rows(current);

        view! {
            <table class="w-full bg-gray-800 rounded-xl overflow-hidden">
                <thead class="bg-gray-700">
                    <tr>
                        {current
                            .headers()
                            .into_iter()
                            .map(|h| view! { <th class="px-4 py-3 text-left">{h}</th> })
                            .collect_view()}
                    </tr>
                </thead>
                <tbody>
                    {rows
                        .into_iter()
                        .map(|row| view! {
                            <tr class="border-t border-gray-700">
                                <td class="px-4 py-3 text-lg">{row.badge.to_string()}</td>
                                <td class="px-4 py-3">{row.name}</td>
                                <td class="px-4 py-3 font-semibold">{row.points}</td>
                                <td class="px-4 py-3">{row.secondary}</td>
                            </tr>
                        })
                        .collect_view()}
                </tbody>
            </table>
        }
    }
}
