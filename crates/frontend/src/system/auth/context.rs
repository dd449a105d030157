use contracts::system::auth::{Role, UserInfo};
use leptos::prelude::*;

use super::{api, storage};
use crate::shared::api_utils::ApiError;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user_info: Option<UserInfo>,
}

impl AuthState {
    /// Session persisted by an earlier visit; needs both the token and the profile.
    pub fn restore() -> Self {
        match (storage::get_access_token(), storage::get_user_info()) {
            (Some(token), Some(user)) => AuthState {
                access_token: Some(token),
                user_info: Some(user),
            },
            _ => AuthState::default(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    pub fn role(&self) -> Option<Role> {
        self.user_info.as_ref().map(|u| u.role())
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState::restore());

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Logs in, persists the session and publishes it to the context.
pub async fn do_login(
    email: String,
    password: String,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<UserInfo, ApiError> {
    let response = api::login(email, password).await?;
    let (token, user) = response.into_session();

    storage::save_access_token(&token);
    storage::save_user_info(&user);
    log::info!("Signed in as {} ({})", user.email, user.role().label());

    set_auth_state.set(AuthState {
        access_token: Some(token),
        user_info: Some(user.clone()),
    });
    Ok(user)
}

/// Clears storage and state; the caller navigates to `/login`.
pub fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_tokens();
    set_auth_state.set(AuthState::default());
}

/// Ends the session after a 401/403 and reloads on the login page.
pub fn expire_session() {
    storage::clear_tokens();
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().set_href("/login") {
            log::error!("Failed to redirect to login: {:?}", e);
        }
    }
}
