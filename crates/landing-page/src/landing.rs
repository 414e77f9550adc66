use leptos::*;

use crate::content::LANDING_COPY;
use crate::style;

/// Marketing landing page: heading, tagline and a call-to-action link.
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class=style::SCREEN>
            <div class=style::PANEL>
                <h1 class=style::HEADING>{LANDING_COPY.heading}</h1>
                <p class=style::TAGLINE>{LANDING_COPY.tagline}</p>
                <a href=LANDING_COPY.cta_href class=style::CTA>
                    {LANDING_COPY.cta_label}
                </a>
            </div>
        </div>
    }
}
