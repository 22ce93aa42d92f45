//! Home page component.

use crate::session::use_session;
use leptos::prelude::*;

/// The public landing page.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();

    view! {
        <div class="home-page">
            <section class="historia">
                <h1>"Nuestra Historia"</h1>
                <p>
                    "En La Ley del Hielo creemos en la justicia como pilar de la sociedad. "
                    "Brindamos asesoría y representación legal con integridad y compromiso."
                </p>
            </section>
            {move || {
                let snapshot = session.snapshot();
                match (snapshot.profile(), snapshot.role()) {
                    (Some(profile), Some(role)) => {
                        let landing = session.paths().landing_for(role).to_string();
                        view! {
                            <div class="welcome">
                                <p>{format!("Bienvenido, {}.", profile.display_name())}</p>
                                <a href=landing class="cta-button">"Ir a mi portal"</a>
                            </div>
                        }.into_any()
                    }
                    _ => view! {
                        <a href="/login" class="cta-button">"Iniciar sesión"</a>
                    }.into_any(),
                }
            }}
        </div>
    }
}
