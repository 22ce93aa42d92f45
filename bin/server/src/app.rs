//! Main Leptos application component and routing.

use case_portal_access::{Decision, Role, RouteDeclaration, SessionStatus};
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    NavigateOptions,
    components::{Redirect, Route, Router, Routes},
    hooks::{use_location, use_navigate},
    path,
};

use crate::pages::{
    AboutPage, AdminCreateLawyerPage, CaseDetailPage, ClientCasesPage, ClientInvoicePage,
    ClientProfilePage, ContactPage, HomePage, LawyerCaseDetailPage, LawyerCasesPage,
    LawyerCreateCasePage, LawyerCreateInvoicePage, LawyerInvoicePage, LoginPage,
    RecoverPasswordPage, SignupPage,
};
use crate::routes::portal_routes;
use crate::session::{provide_session, use_session};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_session();

    view! {
        <Title text="La Ley del Hielo"/>
        <Router>
            <TopBar/>
            <main class="container">
                <Protected>
                    <Routes fallback=NotFoundView>
                        <Route path=path!("/") view=HomePage/>
                        <Route path=path!("/login") view=LoginPage/>
                        <Route path=path!("/signup") view=SignupPage/>
                        <Route path=path!("/aboutus") view=AboutPage/>
                        <Route path=path!("/contactanos") view=ContactPage/>
                        <Route path=path!("/recuperar-contrasena") view=RecoverPasswordPage/>

                        <Route path=path!("/cliente/casos") view=ClientCasesPage/>
                        <Route path=path!("/cliente/facturas/:id") view=ClientInvoicePage/>
                        <Route path=path!("/cliente/perfil") view=ClientProfilePage/>
                        <Route path=path!("/abogado/casos") view=LawyerCasesPage/>
                        <Route path=path!("/abogado/crear-caso") view=LawyerCreateCasePage/>
                        <Route path=path!("/abogado/casos/:id") view=LawyerCaseDetailPage/>
                        <Route path=path!("/abogado/crear-factura") view=LawyerCreateInvoicePage/>
                        <Route path=path!("/abogado/facturas/:id") view=LawyerInvoicePage/>
                        <Route path=path!("/admin/crear-abogado") view=AdminCreateLawyerPage/>
                        <Route path=path!("/caso/:id") view=CaseDetailPage/>
                    </Routes>
                </Protected>
            </main>
        </Router>
    }
}

/// Guards its children with the route table's decision for the current
/// location.
///
/// Renders a placeholder while the session resolves, redirects once it
/// settles without the required role, and shows nothing for paths the table
/// does not declare.
#[component]
pub fn Protected(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let location = use_location();
    let routes = StoredValue::new(portal_routes());

    let decision = Memo::new(move |_| {
        let pathname = location.pathname.get();
        let search = location.search.get();
        let requested = match search.trim_start_matches('?') {
            "" => pathname,
            query => format!("{pathname}?{query}"),
        };
        let decision =
            routes.with_value(|routes| routes.authorize(&session.snapshot(), &requested));
        if decision.is_none() {
            tracing::debug!(path = %requested, "no route declared");
        }
        decision
    });

    move || match decision.get() {
        Some(Decision::Render) => children().into_any(),
        Some(Decision::Pending) => view! { <PendingView/> }.into_any(),
        Some(redirect) => {
            let target = redirect
                .location(&session.paths())
                .unwrap_or_else(|| "/".to_string());
            view! { <Redirect path=target/> }.into_any()
        }
        None => view! { <NotFoundView/> }.into_any(),
    }
}

#[component]
fn NotFoundView() -> impl IntoView {
    view! { <p class="not-found">"Página no encontrada."</p> }
}

/// Non-interactive placeholder shown while the session resolves.
#[component]
fn PendingView() -> impl IntoView {
    view! {
        <div class="pending" aria-busy="true">
            <p>"Cargando..."</p>
        </div>
    }
}

/// Top bar with navigation and the session menu.
#[component]
fn TopBar() -> impl IntoView {
    let session = use_session();

    view! {
        <header class="header">
            <div class="header-left">
                <a href="/" class="logo">"La Ley del Hielo"</a>
                <a href="/aboutus">"Nosotros"</a>
                <a href="/contactanos">"Contáctanos"</a>
            </div>
            <div class="header-right">
                {move || {
                    let snapshot = session.snapshot();
                    match (snapshot.status(), snapshot.profile()) {
                        (SessionStatus::Authenticated, Some(profile)) => view! {
                            <UserMenu
                                display_name=profile.display_name().to_string()
                                role=profile.role()
                            />
                        }.into_any(),
                        (SessionStatus::Authenticating, _) => view! {
                            <span class="session-loading">"Cargando..."</span>
                        }.into_any(),
                        _ => view! {
                            <a href="/login" class="login-button">"Iniciar sesión"</a>
                            <a href="/signup" class="signup-button">"Registrarse"</a>
                        }.into_any(),
                    }
                }}
            </div>
        </header>
    }
}

/// Menu for an authenticated user: role links and logout.
#[component]
fn UserMenu(display_name: String, role: Role) -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let links: Vec<RouteDeclaration> = portal_routes().nav_for(role).cloned().collect();

    let on_logout = move |_| {
        session.logout();
        let home = session.paths().home;
        navigate(&home, NavigateOptions::default());
    };

    view! {
        <div class="user-menu">
            <span class="user-name">{display_name}</span>
            <span class="user-role">{role.label()}</span>
            <nav class="user-dropdown">
                {links
                    .into_iter()
                    .map(|route| view! {
                        <a href=route.path()>{route.nav_label().unwrap_or_default()}</a>
                    })
                    .collect_view()}
                <button class="logout-button" on:click=on_logout>"Cerrar sesión"</button>
            </nav>
        </div>
    }
}
