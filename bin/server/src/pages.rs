//! Page components for the application.
//!
//! Each page is a Leptos component that renders a specific route. Role
//! pages are mounted behind [`crate::app::Protected`].

pub mod admin;
pub mod case;
pub mod client;
pub mod home;
pub mod info;
pub mod lawyer;
pub mod login;

// Re-export all page components for convenient access
pub use admin::AdminCreateLawyerPage;
pub use case::CaseDetailPage;
pub use client::{ClientCasesPage, ClientInvoicePage, ClientProfilePage};
pub use home::HomePage;
pub use info::{AboutPage, ContactPage, RecoverPasswordPage, SignupPage};
pub use lawyer::{
    LawyerCaseDetailPage, LawyerCasesPage, LawyerCreateCasePage, LawyerCreateInvoicePage,
    LawyerInvoicePage,
};
pub use login::LoginPage;
