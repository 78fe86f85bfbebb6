use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// What the callback route does with the code it receives.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum CallbackMode {
    /// Forward the code to the mobile app with a 302
    #[default]
    Redirect,
    /// Render the code in an HTML page, no redirect
    Echo,
}

#[derive(Clone, Debug)]
pub struct AppState {
    pub(crate) app_redirect_uri: String,
    pub(crate) mode: CallbackMode,
    pub(crate) encode_code: bool,
}
