//! Teams Page

use leptos::*;
use octofit::models::Team;
use octofit::views::teams::{self, load_teams, Membership, TeamForm, TeamsData};
use octofit::views::{SubmitError, ViewState};

use crate::components::{LoadError, Loading};
use crate::state::{spawn_load, use_global_state, use_view_model};

#[derive(Clone, Copy)]
enum TeamAction {
    Join,
    Leave,
}

#[component]
pub fn Teams() -> impl IntoView {
    let state = use_global_state();
    let model = use_view_model::<TeamsData>();
    let (show_form, set_show_form) = create_signal(false);

    let client = state.client.clone();
    let reload = Callback::new(move |_: ()| {
        let client = client.clone();
        spawn_load(model, async move { load_teams(&client).await });
    });
    reload.call(());

    let on_action = {
        let state = state.clone();
        Callback::new(move |(team_id, action): (u64, TeamAction)| {
            let client = state.client.clone();
            let state = state.clone();
            spawn_local(async move {
                let result = match action {
                    TeamAction::Join => teams::join_team(&client, team_id).await,
                    TeamAction::Leave => teams::leave_team(&client, team_id).await,
                };
                match result {
                    Ok(detail) => {
                        state.show_success(&detail);
                        reload.call(());
                    }
                    Err(e) => state.show_error(&e.user_message()),
                }
            });
        })
    };

    let on_created = Callback::new(move |_: Team| {
        set_show_form.set(false);
        reload.call(());
    });

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <h1 class="text-3xl font-bold">"Teams"</h1>
                <button
                    on:click=move |_| set_show_form.update(|s| *s = !*s)
                    class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium"
                >
                    {move || if show_form.get() { "Cancel" } else { "Create Team" }}
                </button>
            </div>

            <Show when=move || show_form.get()>
                <NewTeamForm on_created=on_created />
            </Show>

            {move || match model.with(|m| m.state().clone()) {
                ViewState::Ready(data) => view! { <TeamSections data=data on_action=on_action /> }.into_view(),
                ViewState::Failed(message) => view! { <LoadError message=message /> }.into_view(),
                _ => view! { <Loading /> }.into_view(),
            }}
        </div>
    }
}

#[component]
fn TeamSections(data: TeamsData, on_action: Callback<(u64, TeamAction)>) -> impl IntoView {
    let my_teams = if data.my_teams.is_empty() {
        view! { <p class="text-gray-400">"You haven't joined any teams yet."</p> }.into_view()
    } else {
        view! {
            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                {data
                    .my_teams
                    .iter()
                    .map(|team| {
                        let id = team.id;
                        view! {
                            <TeamCard team=team.clone() highlight=true>
                                <button
                                    on:click=move |_| on_action.call((id, TeamAction::Leave))
                                    class="px-3 py-1 text-sm border border-red-500 text-red-400
                                           hover:bg-red-900/40 rounded-lg"
                                >
                                    "Leave Team"
                                </button>
                            </TeamCard>
                        }
                    })
                    .collect_view()}
            </div>
        }
        .into_view()
    };

    let all_teams = data
        .cards()
        .map(|(team, membership)| {
            let id = team.id;
            view! {
                <TeamCard team=team.clone() highlight=false>
                    {match membership {
                        Membership::NotMember => view! {
                            <button
                                on:click=move |_| on_action.call((id, TeamAction::Join))
                                class="px-3 py-1 text-sm bg-primary-600 hover:bg-primary-700 rounded-lg"
                            >
                                "Join Team"
                            </button>
                        }
                        .into_view(),
                        Membership::Member => view! {
                            <span class="px-2 py-1 text-xs bg-green-600 rounded">"Member"</span>
                        }
                        .into_view(),
                    }}
                </TeamCard>
            }
        })
        .collect_view();

    view! {
        <section>
            <h2 class="text-2xl font-semibold mb-3">"My Teams"</h2>
            {my_teams}
        </section>
        <section>
            <h2 class="text-2xl font-semibold mb-3">"All Teams"</h2>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">{all_teams}</div>
        </section>
    }
}

#[component]
fn TeamCard(team: Team, highlight: bool, children: Children) -> impl IntoView {
    let border = if highlight { "border border-primary-500" } else { "" };
    view! {
        <div class=format!("bg-gray-800 rounded-xl p-6 {}", border)>
            <h3 class="text-lg font-semibold">{team.name}</h3>
            <p class="text-gray-400">{team.description.unwrap_or_default()}</p>
            <p class="text-sm my-3">
                <strong>"Points: "</strong>{team.total_points}<br />
                <strong>"Members: "</strong>{team.member_count}<br />
                <strong>"Creator: "</strong>{team.creator_username}
            </p>
            {children()}
        </div>
    }
}

#[component]
fn NewTeamForm(on_created: Callback<Team>) -> impl IntoView {
    let state = use_global_state();
    let name = create_rw_signal(String::new());
    let description = create_rw_signal(String::new());
    let (error, set_error) = create_signal(Option::<String>::None);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let form = TeamForm {
            name: name.get(),
            description: description.get(),
        };
        let client = state.client.clone();
        let state = state.clone();
        set_error.set(None);

        spawn_local(async move {
            match teams::create_team(&client, &form).await {
                Ok(team) => {
                    state.show_success(&format!("Team \"{}\" created", team.name));
                    on_created.call(team);
                }
                Err(SubmitError::Form(e)) => {
                    set_error.try_set(Some(e.to_string()));
                }
                Err(e) => state.show_error(&e.to_string()),
            }
        });
    };

    view! {
        <form on:submit=on_submit class="bg-gray-800 rounded-xl p-6 space-y-4">
            <h2 class="text-xl font-semibold">"Create New Team"</h2>
            {move || error.get().map(|e| view! { <p class="text-red-400">{e}</p> })}
            <label class="block">
                <span class="text-sm text-gray-400">"Team Name"</span>
                <input
                    type="text"
                    required
                    class="w-full bg-gray-700 rounded-lg px-4 py-3"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
            </label>
            <label class="block">
                <span class="text-sm text-gray-400">"Description"</span>
                <textarea
                    rows="3"
                    class="w-full bg-gray-700 rounded-lg px-4 py-3"
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                />
            </label>
            <button type="submit" class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium">
                "Create Team"
            </button>
        </form>
    }
}
