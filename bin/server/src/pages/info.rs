//! Public information pages.

use leptos::prelude::*;

/// Firm mission, vision, and goals.
#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="about-page">
            <section>
                <h2>"Misión"</h2>
                <p>"Brindar asesoría y representación legal de alta calidad a nuestros clientes."</p>
            </section>
            <section>
                <h2>"Visión"</h2>
                <p>"Ser una firma reconocida por la ética y transparencia en cada caso."</p>
            </section>
            <section>
                <h2>"Objetivos"</h2>
                <p>"Mantener un equipo de abogados capacitado y actualizado."</p>
            </section>
        </div>
    }
}

/// Contact details of the firm.
#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <div class="contact-page">
            <h1>"Contacto"</h1>
            <dl>
                <dt>"Correo electrónico:"</dt>
                <dd>"contacto@leydelhielo.co"</dd>
                <dt>"Teléfono:"</dt>
                <dd>"+57 601 000 0000"</dd>
                <dt>"Dirección:"</dt>
                <dd>"Bogotá, Colombia"</dd>
            </dl>
        </div>
    }
}

/// Client self-registration.
#[component]
pub fn SignupPage() -> impl IntoView {
    view! {
        <div class="signup-page">
            <h1>"Registro de cliente"</h1>
            <p>"Completa tus datos para crear una cuenta de cliente."</p>
            <a href="/login">"¿Ya tienes cuenta? Inicia sesión"</a>
        </div>
    }
}

/// Password recovery.
#[component]
pub fn RecoverPasswordPage() -> impl IntoView {
    view! {
        <div class="recover-page">
            <h1>"Recuperar contraseña"</h1>
            <p>"Te enviaremos un enlace de recuperación a tu correo electrónico."</p>
        </div>
    }
}
