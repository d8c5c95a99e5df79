//! Initial route selection.
//!
//! The surrounding UI picks its first screen from the hydrated auth and
//! onboarding state; nothing route-dependent may render before hydration
//! completes.

use crate::auth::AuthState;
use serde::{Deserialize, Serialize};

/// Top-level navigation targets of the client UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InitialRoute {
    /// Landing screen for unauthenticated users.
    Welcome,
    /// Profile + body scan flow, shown until the first successful analysis.
    Onboarding,
    /// The main tab navigator.
    MainTabs,
}

/// Selects the route the UI must start on.
///
/// | auth              | onboarding    | route      |
/// |-------------------|---------------|------------|
/// | not authenticated | —             | Welcome    |
/// | authenticated     | not completed | Onboarding |
/// | authenticated     | completed     | MainTabs   |
pub fn initial_route(auth: &AuthState, has_completed_onboarding: bool) -> InitialRoute {
    if !auth.is_authenticated {
        InitialRoute::Welcome
    } else if !has_completed_onboarding {
        InitialRoute::Onboarding
    } else {
        InitialRoute::MainTabs
    }
}
