use contracts::system::auth::RegisterRequest;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::system::auth::api;

const USERNAME_MIN: usize = 3;
const USERNAME_MAX: usize = 50;
const PASSWORD_MIN: usize = 6;
const REDIRECT_DELAY_MS: u32 = 1500;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistrationForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub accept_terms: bool,
}

fn is_valid_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !email.contains(char::is_whitespace)
                && domain
                    .split_once('.')
                    .map(|(host, tld)| !host.is_empty() && !tld.is_empty())
                    .unwrap_or(false)
        }
        None => false,
    }
}

/// Checks the form before anything is sent; the first problem found is reported.
pub fn validate_registration(form: &RegistrationForm) -> Result<RegisterRequest, String> {
    let username = form.username.trim();
    let email = form.email.trim();
    let name_len = username.chars().count();

    if name_len < USERNAME_MIN || name_len > USERNAME_MAX {
        return Err(format!(
            "Username must be between {} and {} characters",
            USERNAME_MIN, USERNAME_MAX
        ));
    }
    if !is_valid_email(email) {
        return Err("Please enter a valid email address".to_string());
    }
    if form.password.chars().count() < PASSWORD_MIN {
        return Err(format!("Password must be at least {} characters", PASSWORD_MIN));
    }
    if form.password != form.confirm_password {
        return Err("Passwords do not match".to_string());
    }
    if !form.accept_terms {
        return Err("You must accept the terms of service".to_string());
    }
    Ok(RegisterRequest {
        username: username.to_string(),
        email: email.to_string(),
        password: form.password.clone(),
    })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let form = RwSignal::new(RegistrationForm::default());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (success_message, set_success_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_error_message.set(None);

        let request = match validate_registration(&form.get_untracked()) {
            Ok(request) => request,
            Err(msg) => {
                set_error_message.set(Some(msg));
                return;
            }
        };

        set_is_loading.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::register(&request).await {
                Ok(_) => {
                    set_success_message.set(Some(
                        "Registration successful. Redirecting to sign in...".to_string(),
                    ));
                    TimeoutFuture::new(REDIRECT_DELAY_MS).await;
                    navigate("/login", Default::default());
                }
                Err(e) => {
                    log::warn!("Registration failed: {}", e);
                    set_error_message.set(Some(e.user_message()));
                }
            }
            set_is_loading.set(false);
        });
    };

    let text_field = move |id: &'static str,
                           label: &'static str,
                           kind: &'static str,
                           get: fn(&RegistrationForm) -> String,
                           set: fn(&mut RegistrationForm, String)| {
        view! {
            <div class="form-group">
                <label for=id>{label}</label>
                <input
                    type=kind
                    id=id
                    prop:value=move || form.with(get)
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| set(f, value));
                    }
                    disabled=move || is_loading.get()
                />
            </div>
        }
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Invoice Admin"</h1>
                <h2>"Create an account"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">{move || error_message.get().unwrap_or_default()}</div>
                </Show>
                <Show when=move || success_message.get().is_some()>
                    <div class="success-message">{move || success_message.get().unwrap_or_default()}</div>
                </Show>

                <form on:submit=on_submit>
                    {text_field("username", "Username", "text", |f| f.username.clone(), |f, v| f.username = v)}
                    {text_field("email", "Email", "email", |f| f.email.clone(), |f, v| f.email = v)}
                    {text_field("password", "Password", "password", |f| f.password.clone(), |f, v| f.password = v)}
                    {text_field(
                        "confirm_password",
                        "Confirm password",
                        "password",
                        |f| f.confirm_password.clone(),
                        |f, v| f.confirm_password = v,
                    )}

                    <div class="form-group form-group--inline">
                        <input
                            type="checkbox"
                            id="accept_terms"
                            prop:checked=move || form.with(|f| f.accept_terms)
                            on:change=move |ev| {
                                let checked = event_target_checked(&ev);
                                form.update(|f| f.accept_terms = checked);
                            }
                        />
                        <label for="accept_terms">"I agree to the terms of service"</label>
                    </div>

                    <button type="submit" class="btn-primary" disabled=move || is_loading.get()>
                        {move || if is_loading.get() { "Creating account..." } else { "Register" }}
                    </button>
                </form>

                <div class="login-info">
                    "Already registered? " <A href="/login">"Sign in"</A>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> RegistrationForm {
        RegistrationForm {
            username: "lan.nguyen".into(),
            email: "lan@shop.vn".into(),
            password: "secret1".into(),
            confirm_password: "secret1".into(),
            accept_terms: true,
        }
    }

    #[test]
    fn test_valid_form_builds_request() {
        let mut form = valid();
        form.email = "  lan@shop.vn ".into();
        let request = validate_registration(&form).unwrap();
        assert_eq!(request.email, "lan@shop.vn");
        assert_eq!(request.username, "lan.nguyen");
    }

    #[test]
    fn test_username_length() {
        let mut form = valid();
        form.username = "ab".into();
        assert!(validate_registration(&form).unwrap_err().starts_with("Username"));
        form.username = "x".repeat(51);
        assert!(validate_registration(&form).is_err());
        form.username = "x".repeat(50);
        assert!(validate_registration(&form).is_ok());
    }

    #[test]
    fn test_email_rules() {
        for bad in ["lan", "lan@", "@shop.vn", "lan@shop", "lan@.vn", "lan@shop.", "l an@shop.vn"] {
            let mut form = valid();
            form.email = bad.into();
            assert!(validate_registration(&form).is_err(), "{} accepted", bad);
        }
    }

    #[test]
    fn test_password_rules() {
        let mut form = valid();
        form.password = "12345".into();
        form.confirm_password = "12345".into();
        assert!(validate_registration(&form).unwrap_err().contains("at least 6"));

        let mut form = valid();
        form.confirm_password = "secret2".into();
        assert_eq!(validate_registration(&form).unwrap_err(), "Passwords do not match");
    }

    #[test]
    fn test_terms_required() {
        let mut form = valid();
        form.accept_terms = false;
        assert!(validate_registration(&form).unwrap_err().contains("terms"));
    }
}
