//! Login page component.

use case_portal_access::{LoginError, SessionStatus, landing_path};
use case_portal_core::Identity;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::{
    NavigateOptions,
    hooks::{use_navigate, use_query_map},
};

use crate::session::use_session;

/// Email and password login.
///
/// Once the session resolves the visitor continues to the page recorded in
/// `?next=`, or to their role's landing page.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let query = use_query_map();
    let navigate = use_navigate();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(Option::<String>::None);
    let (submitted, set_submitted) = signal(false);

    Effect::new(move |_| {
        let snapshot = session.snapshot();
        match snapshot.status() {
            SessionStatus::Authenticated => {
                let next = query.with(|params| params.get("next"));
                let target = landing_path(next.as_deref(), &snapshot, &session.paths());
                navigate(
                    &target,
                    NavigateOptions {
                        replace: true,
                        ..Default::default()
                    },
                );
            }
            SessionStatus::Anonymous if submitted.get_untracked() => {
                if snapshot.last_failure().is_some() {
                    set_error.set(Some(
                        "No fue posible cargar tu perfil. Intenta de nuevo.".to_string(),
                    ));
                }
                set_submitted.set(false);
            }
            _ => {}
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);

        let identity = match Identity::new(email.get_untracked()) {
            Ok(identity) => identity,
            Err(e) => {
                set_error.set(Some(e.to_string()));
                return;
            }
        };
        let secret = password.get_untracked();
        let Some(api) = session.api() else {
            set_error.set(Some("El portal aún se está cargando.".to_string()));
            return;
        };

        set_submitted.set(true);
        spawn_local(async move {
            let signed_in = api.sign_in(&identity, &secret).await.map_err(|e| {
                tracing::debug!(error = %e, identity = %identity, "login rejected");
                LoginError::from(e.current_context().clone())
            });
            match signed_in {
                Ok(credential) => session.login(credential, identity),
                Err(e) => {
                    set_error.set(Some(e.to_string()));
                    set_submitted.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-page">
            <form class="login-box" on:submit=on_submit>
                <h1>"Iniciar sesión"</h1>
                <label for="email">"Correo electrónico"</label>
                <input
                    id="email"
                    type="email"
                    required
                    prop:value=email
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
                <label for="password">"Contraseña"</label>
                <input
                    id="password"
                    type="password"
                    required
                    prop:value=password
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
                <button type="submit" class="login-button" disabled=move || submitted.get()>
                    "Ingresar"
                </button>
                {move || error.get().map(|msg| view! { <p class="error">{msg}</p> })}
                <a href="/recuperar-contrasena">"¿Olvidaste tu contraseña?"</a>
                <a href="/signup">"Crear una cuenta"</a>
            </form>
        </div>
    }
}
