//! Display copy for the landing page.

/// Text shown on the landing page. Every field is a literal baked into the build.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LandingCopy {
    pub heading: &'static str,
    pub tagline: &'static str,
    pub cta_label: &'static str,
    /// In-page fragment the call-to-action jumps to. Never an external URL.
    pub cta_href: &'static str,
}

pub const LANDING_COPY: LandingCopy = LandingCopy {
    heading: "Welcome to Our Website",
    tagline: "Discover our amazing services and start your journey with us today.",
    cta_label: "Get Started",
    cta_href: "#get-started",
};
