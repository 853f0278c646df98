//! Home Page

use leptos::*;
use leptos_router::*;

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div class="space-y-10">
            <section class="bg-gray-800 rounded-xl p-10 text-center">
                <div class="text-6xl mb-4">"🐙"</div>
                <h1 class="text-4xl font-bold">"Welcome to OctoFit Tracker"</h1>
                <p class="text-xl text-gray-300 mt-3">
                    "Your comprehensive gym SaaS for managing customer training progress"
                </p>
                <hr class="my-6 border-gray-700" />
                <p class="text-gray-400 mb-6">
                    "Track your workouts, compete with friends, and achieve your fitness goals!"
                </p>
                <div class="flex justify-center space-x-3">
                    <A
                        href="/register"
                        class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium"
                    >
                        "Get Started"
                    </A>
                    <A
                        href="/leaderboard"
                        class="px-6 py-3 border border-primary-500 hover:bg-gray-700 rounded-lg font-medium"
                    >
                        "View Leaderboard"
                    </A>
                </div>
            </section>

            <section class="grid grid-cols-1 md:grid-cols-3 gap-4">
                <FeatureCard title="📊 Track Activities" text="Log your workouts and track your progress over time" />
                <FeatureCard title="👥 Join Teams" text="Create or join teams and compete together" />
                <FeatureCard title="🏆 Compete" text="Climb the leaderboard and earn achievements" />
            </section>
        </div>
    }
}

#[component]
fn FeatureCard(title: &'static str, text: &'static str) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-xl p-6 text-center">
            <h3 class="text-xl font-semibold mb-2">{title}</h3>
            <p class="text-gray-400">{text}</p>
        </div>
    }
}
