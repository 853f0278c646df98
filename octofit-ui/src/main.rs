//! OctoFit Tracker
//!
//! Fitness tracking web client built with Leptos (WASM).
//!
//! # Features
//!
//! - Activity logging with points preview
//! - Teams: create, join and leave
//! - User and team leaderboards
//! - Personalized workout suggestions
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Data loading, forms and session handling live in the
//! `octofit` core crate; this crate renders them and talks to the OctoFit
//! API through a fetch-based transport.

use leptos::*;

mod api;
mod app;
mod components;
mod config;
mod logging;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    let config = config::load();
    logging::init(&config.logging.level);
    tracing::info!(api = %config.api_base(), "Starting OctoFit");

    mount_to_body(move || view! { <app::App config=config.clone() /> });
}
