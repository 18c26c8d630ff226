#![allow(non_snake_case)]

use dioxus::logger::tracing::{error, info};
use dioxus::prelude::*;
use forum_core::{require_mount, AppState, ForumConfig};

mod components;
mod constants;
mod mount;

use components::app::App;
use constants::MOUNT_ID;
use mount::DomPage;

fn main() {
    dioxus::logger::initialize_default();

    let page = match DomPage::current() {
        Ok(page) => page,
        Err(e) => mount::report_fatal(None, &e),
    };
    if let Err(e) = require_mount(&page, MOUNT_ID) {
        mount::report_fatal(Some(&page), &e);
    }

    let state = match AppState::init(ForumConfig::default(), &mut rand::thread_rng()) {
        Ok(state) => state,
        Err(e) => {
            error!("Invalid forum configuration: {}", e);
            wasm_bindgen::throw_str(&e.to_string());
        }
    };

    info!("Mounting forum on #{}", MOUNT_ID);
    LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname(MOUNT_ID))
        .with_context(state)
        .launch(App);
}
