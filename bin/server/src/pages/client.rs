//! Client views. Forms and listings live behind the backend's own endpoints.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::session::use_session;

/// Cases followed by the signed-in client.
#[component]
pub fn ClientCasesPage() -> impl IntoView {
    view! {
        <div class="client-cases">
            <h1>"Mis casos"</h1>
            <p>"Consulta el estado, documentos y comentarios de tus casos."</p>
        </div>
    }
}

/// One invoice of the signed-in client, with payment.
#[component]
pub fn ClientInvoicePage() -> impl IntoView {
    let params = use_params_map();
    let invoice = move || params.with(|p| p.get("id")).unwrap_or_default();

    view! {
        <div class="client-invoice">
            <h1>{move || format!("Factura {}", invoice())}</h1>
            <p>"Revisa el detalle de la factura y registra tu pago."</p>
        </div>
    }
}

/// Profile fields of the signed-in client.
#[component]
pub fn ClientProfilePage() -> impl IntoView {
    let session = use_session();

    view! {
        <div class="client-profile">
            <h1>"Mi perfil"</h1>
            {move || session.snapshot().profile().cloned().map(|profile| view! {
                <dl>
                    <dt>"Nombre"</dt>
                    <dd>{profile.name().unwrap_or_default().to_string()}</dd>
                    <dt>"Cédula"</dt>
                    <dd>{profile.national_id().unwrap_or_default().to_string()}</dd>
                    <dt>"Correo electrónico"</dt>
                    <dd>{profile.email().unwrap_or_default().to_string()}</dd>
                </dl>
            })}
        </div>
    }
}
