use leptos::*;
use leptos_meta::*;
use wasm_bindgen::prelude::*;

pub mod config;
pub mod content;
mod error;
mod landing;
pub mod style;

pub use error::MountError;
pub use landing::LandingPage;

/// Main application component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Html lang="en" />
        <Meta charset="utf-8" />
        <Meta name="viewport" content="width=device-width, initial-scale=1" />
        <Title text=config::PAGE_TITLE />
        <Stylesheet href=config::STYLESHEET_HREF />

        <LandingPage />
    }
}

/// Resolve the mount target: `#MOUNT_ID` if present, `<body>` otherwise.
fn mount_target() -> Result<web_sys::HtmlElement, MountError> {
    let document = web_sys::window()
        .ok_or(MountError::NoWindow)?
        .document()
        .ok_or(MountError::NoDocument)?;

    match document.get_element_by_id(config::MOUNT_ID) {
        Some(el) => el
            .dyn_into::<web_sys::HtmlElement>()
            .map_err(|_| MountError::NotHtmlElement(config::MOUNT_ID.to_string())),
        None => {
            log::warn!("#{} not found, mounting to <body>", config::MOUNT_ID);
            document.body().ok_or(MountError::NoBody)
        }
    }
}

/// Attach [`App`] to the document.
pub fn mount() -> Result<(), MountError> {
    let target = mount_target()?;
    mount_to(target, || view! { <App /> });
    log::debug!("landing page mounted");
    Ok(())
}

/// Initialize the app
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(config::log_level()) {
        // Only happens if a logger is already installed, e.g. under test.
        log::debug!("logger already initialized: {}", e);
    }

    if let Err(e) = mount() {
        log::error!("failed to mount landing page: {}", e);
    }
}
