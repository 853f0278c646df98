//! Activities Page
//!
//! The user's activity log and the form to add to it.

use leptos::*;
use octofit::models::{Activity, ActivityType, Intensity};
use octofit::views::activities::{load_activities, submit_activity, ActivityForm};
use octofit::views::{SubmitError, ViewState};

use crate::components::{LoadError, Loading};
use crate::state::{spawn_load, use_global_state, use_view_model};

fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}

#[component]
pub fn Activities() -> impl IntoView {
    let state = use_global_state();
    let model = use_view_model::<Vec<Activity>>();
    let (show_form, set_show_form) = create_signal(false);

    let client = state.client.clone();
    let reload = move || {
        let client = client.clone();
        spawn_load(model, async move { load_activities(&client).await });
    };
    reload();

    let on_created = {
        let state = state.clone();
        let reload = reload.clone();
        Callback::new(move |activity: Activity| {
            set_show_form.set(false);
            state.show_success(&format!(
                "Activity logged: {} points earned",
                activity.points_earned
            ));
            reload();
        })
    };

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <h1 class="text-3xl font-bold">"My Activities"</h1>
                <button
                    on:click=move |_| set_show_form.update(|s| *s = !*s)
                    class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium"
                >
                    {move || if show_form.get() { "Cancel" } else { "Log Activity" }}
                </button>
            </div>

            <Show when=move || show_form.get()>
                <NewActivityForm on_created=on_created />
            </Show>

            {move || match model.with(|m| m.state().clone()) {
                ViewState::Ready(list) => view! { <ActivityList activities=list /> }.into_view(),
                ViewState::Empty => view! {
                    <p class="text-gray-400">"No activities logged yet."</p>
                }
                .into_view(),
                ViewState::Failed(message) => view! { <LoadError message=message /> }.into_view(),
                _ => view! { <Loading /> }.into_view(),
            }}
        </div>
    }
}

#[component]
fn NewActivityForm(on_created: Callback<Activity>) -> impl IntoView {
    let state = use_global_state();
    let form = create_rw_signal(ActivityForm::default_for(today()));
    let (error, set_error) = create_signal(Option::<String>::None);
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let current = form.get();
        let client = state.client.clone();
        let state = state.clone();
        set_error.set(None);
        set_submitting.set(true);

        spawn_local(async move {
            match submit_activity(&client, &current).await {
                Ok(activity) => {
                    form.try_set(ActivityForm::default_for(today()));
                    on_created.call(activity);
                }
                Err(SubmitError::Form(e)) => {
                    set_error.try_set(Some(e.to_string()));
                }
                Err(e) => state.show_error(&e.to_string()),
            }
            set_submitting.try_set(false);
        });
    };

    view! {
        <form on:submit=on_submit class="bg-gray-800 rounded-xl p-6 space-y-4">
            <h2 class="text-xl font-semibold">"Log New Activity"</h2>
            {move || error.get().map(|e| view! { <p class="text-red-400">{e}</p> })}

            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                <label class="block">
                    <span class="text-sm text-gray-400">"Activity Type"</span>
                    <select
                        class="w-full bg-gray-700 rounded-lg px-4 py-3"
                        on:change=move |ev| {
                            if let Some(t) = ActivityType::parse(&event_target_value(&ev)) {
                                form.update(|f| f.activity_type = t);
                            }
                        }
                    >
                        {ActivityType::ALL
                            .into_iter()
                            .map(|t| view! {
                                <option
                                    value=t.as_str()
                                    selected=move || form.with(|f| f.activity_type == t)
                                >
                                    {t.label()}
                                </option>
                            })
                            .collect_view()}
                    </select>
                </label>

                <label class="block">
                    <span class="text-sm text-gray-400">"Duration (minutes)"</span>
                    <input
                        type="number"
                        min="1"
                        required
                        class="w-full bg-gray-700 rounded-lg px-4 py-3"
                        prop:value=move || form.with(|f| f.duration.clone())
                        on:input=move |ev| form.update(|f| f.duration = event_target_value(&ev))
                    />
                </label>

                <label class="block">
                    <span class="text-sm text-gray-400">"Distance (km) - Optional"</span>
                    <input
                        type="number"
                        step="0.1"
                        min="0"
                        class="w-full bg-gray-700 rounded-lg px-4 py-3"
                        prop:value=move || form.with(|f| f.distance.clone())
                        on:input=move |ev| form.update(|f| f.distance = event_target_value(&ev))
                    />
                </label>

                <label class="block">
                    <span class="text-sm text-gray-400">"Intensity"</span>
                    <select
                        class="w-full bg-gray-700 rounded-lg px-4 py-3"
                        on:change=move |ev| {
                            if let Some(i) = Intensity::parse(&event_target_value(&ev)) {
                                form.update(|f| f.intensity = i);
                            }
                        }
                    >
                        {Intensity::ALL
                            .into_iter()
                            .map(|i| view! {
                                <option
                                    value=i.as_str()
                                    selected=move || form.with(|f| f.intensity == i)
                                >
                                    {i.label()}
                                </option>
                            })
                            .collect_view()}
                    </select>
                </label>
            </div>

            <label class="block">
                <span class="text-sm text-gray-400">"Date"</span>
                <input
                    type="date"
                    required
                    class="w-full bg-gray-700 rounded-lg px-4 py-3"
                    prop:value=move || form.with(|f| f.date_performed.clone())
                    on:input=move |ev| form.update(|f| f.date_performed = event_target_value(&ev))
                />
            </label>

            <label class="block">
                <span class="text-sm text-gray-400">"Notes"</span>
                <textarea
                    rows="3"
                    class="w-full bg-gray-700 rounded-lg px-4 py-3"
                    prop:value=move || form.with(|f| f.notes.clone())
                    on:input=move |ev| form.update(|f| f.notes = event_target_value(&ev))
                />
            </label>

            <div class="flex items-center justify-between">
                <span class="text-sm text-gray-400">
                    {move || form
                        .with(|f| f.estimated_points())
                        .map(|p| format!("Estimated points: {}", p))}
                </span>
                <button
                    type="submit"
                    disabled=move || submitting.get()
                    class="px-4 py-2 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600 rounded-lg font-medium"
                >
                    "Log Activity"
                </button>
            </div>
        </form>
    }
}

#[component]
fn ActivityList(activities: Vec<Activity>) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
            {activities
                .into_iter()
                .map(|a| view! {
                    <div class="bg-gray-800 rounded-xl p-6">
                        <h3 class="text-lg font-semibold capitalize">{a.activity_type.display_name()}</h3>
                        <p class="text-sm space-y-1">
                            <strong>"Duration: "</strong>{format!("{} minutes", a.duration)}<br />
                            {a.distance.map(|d| view! {
                                <strong>"Distance: "</strong>{format!("{} km", d)}<br />
                            })}
                            <strong>"Intensity: "</strong>{a.intensity.label()}<br />
                            <strong>"Points Earned: "</strong>{a.points_earned}<br />
                            <strong>"Date: "</strong>{a.date_performed.to_string()}
                        </p>
                        {a.notes
                            .filter(|n| !n.is_empty())
                            .map(|n| view! { <p class="text-gray-400 mt-2">{n}</p> })}
                    </div>
                })
                .collect_view()}
        </div>
    }
}
