//! Sign-in, registration and sign-out

use crate::api::{ApiClient, ApiError, Transport};
use crate::error::{message_or, RequestContext, ViewError};
use crate::forms::{AdminSignupForm, LoginForm, SignupForm};
use crate::router::Route;
use crate::session::{clear_session, KeyValueStore, Role, SessionContext};

/// Sign in and persist the session. Returns the context for the new session.
pub async fn login<T: Transport>(
    api: &ApiClient<T>,
    store: &mut impl KeyValueStore,
    form: &LoginForm,
) -> Result<SessionContext, ViewError> {
    let request = form.validate()?;
    let response = api.login(&request).await.or_fallback("Login failed")?;

    let token = response
        .token
        .filter(|t| !t.is_empty())
        .ok_or_else(|| {
            ViewError::request(
                ApiError::Decode("login response has no token".to_string()),
                "Login failed",
            )
        })?;
    let role = match response.user_type.as_deref().map(str::parse::<Role>) {
        Some(Ok(role)) => role,
        Some(Err(e)) => {
            tracing::warn!("{}; using the role signed in as", e);
            form.role
        }
        None => form.role,
    };

    let ctx = SessionContext {
        token,
        role,
        email: response.email.or(Some(request.email)),
        name: response.name,
        full_name: response.full_name,
        voter_id: response.voter_id,
    };
    ctx.save(store)?;
    tracing::info!(role = %ctx.role, "Signed in");
    Ok(ctx)
}

pub async fn signup<T: Transport>(
    api: &ApiClient<T>,
    form: &SignupForm,
) -> Result<String, ViewError> {
    let request = form.validate()?;
    let message = api.signup(&request).await.or_fallback("Signup failed")?;
    Ok(message_or(message, "Account created. You can sign in now."))
}

pub async fn admin_signup<T: Transport>(
    api: &ApiClient<T>,
    form: &AdminSignupForm,
) -> Result<String, ViewError> {
    let request = form.validate()?;
    let message = api
        .admin_signup(&request)
        .await
        .or_fallback("Admin signup failed")?;
    Ok(message_or(message, "Admin account created. You can sign in now."))
}

/// Drop the stored session; the caller navigates to the returned route
pub fn logout(store: &mut impl KeyValueStore) -> Result<Route, ViewError> {
    clear_session(store)?;
    tracing::info!("Signed out");
    Ok(Route::Landing)
}

#[cfg(all(test, feature = "native"))]
mod tests {
    use super::*;
    use crate::api::mock::MockApi;
    use crate::session::{keys, MemoryStore, Session};
    use serde_json::json;

    fn filled(role: Role) -> LoginForm {
        LoginForm {
            email: "asha@club.org".to_string(),
            password: "pw".to_string(),
            role,
        }
    }

    #[tokio::test]
    async fn test_login_persists_session() {
        let mock = MockApi::new()
            .route(
                "POST",
                "/auth/login",
                200,
                json!({
                    "success": true,
                    "token": "jwt-1",
                    "userType": "voter",
                    "email": "asha@club.org",
                    "fullName": "Asha K",
                    "voterId": 1021
                }),
            )
            .start()
            .await;
        let mut store = MemoryStore::new();

        let ctx = login(&mock.client(), &mut store, &filled(Role::Voter))
            .await
            .unwrap();

        assert_eq!(ctx.voter_id.as_deref(), Some("1021"));
        assert_eq!(store.get(keys::TOKEN).as_deref(), Some("jwt-1"));
        assert_eq!(store.get(keys::USER_TYPE).as_deref(), Some("voter"));
        assert_eq!(store.get(keys::FULL_NAME).as_deref(), Some("Asha K"));
        assert_eq!(Session::load(&store), Session::signed_in(Role::Voter));

        let sent = mock.hits_for("POST", "/auth/login")[0].json();
        assert_eq!(sent["userType"], "voter");
    }

    #[tokio::test]
    async fn test_login_failure_uses_server_message() {
        let mock = MockApi::new()
            .route(
                "POST",
                "/auth/login",
                401,
                json!({"success": false, "message": "Invalid credentials"}),
            )
            .start()
            .await;
        let mut store = MemoryStore::new();

        let err = login(&mock.client(), &mut store, &filled(Role::Admin))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid credentials");
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_login_validates_before_sending() {
        let mock = MockApi::new().start().await;
        let mut store = MemoryStore::new();

        let err = login(&mock.client(), &mut store, &LoginForm::new(Role::Voter))
            .await
            .unwrap_err();
        assert!(matches!(err, ViewError::Invalid(_)));
        assert!(mock.hits().is_empty());
    }

    #[test]
    fn test_logout_clears_session_keys() {
        let mut store = MemoryStore::new();
        let mut ctx = SessionContext::new("jwt", Role::Voter);
        ctx.email = Some("a@b.org".to_string());
        ctx.voter_id = Some("7".to_string());
        ctx.save(&mut store).unwrap();

        assert_eq!(logout(&mut store).unwrap(), Route::Landing);
        for key in keys::SESSION_KEYS {
            assert!(store.get(key).is_none(), "{} survived logout", key);
        }
        assert_eq!(Session::load(&store), Session::anonymous());
    }
}
