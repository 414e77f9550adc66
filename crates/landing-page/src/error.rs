use thiserror::Error;

/// Errors returned while attaching the app to the document.
#[derive(Debug, Error)]
pub enum MountError {
    #[error("no global window")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("document has no body")]
    NoBody,

    #[error("mount target #{0} is not an HTML element")]
    NotHtmlElement(String),
}
