//! Route table of the portal.
//!
//! Views are mounted in [`crate::app`]; this table is the single place that
//! says which roles may open which path. The shell denies any path it does
//! not list.

use case_portal_access::{Role, RoleSet, RouteDeclaration, RouteTable};

/// Returns the portal's route table.
#[must_use]
pub fn portal_routes() -> RouteTable {
    let client = || RoleSet::only(Role::Client);
    let lawyer = || RoleSet::only(Role::Lawyer);

    RouteTable::new(vec![
        RouteDeclaration::public("/"),
        RouteDeclaration::public("/login"),
        RouteDeclaration::public("/signup"),
        RouteDeclaration::public("/aboutus"),
        RouteDeclaration::public("/contactanos"),
        RouteDeclaration::public("/recuperar-contrasena"),
        RouteDeclaration::protected("/cliente/casos", client()).labelled("Mis casos"),
        RouteDeclaration::protected("/cliente/facturas/:id", client()),
        RouteDeclaration::protected("/cliente/perfil", client()).labelled("Mi perfil"),
        RouteDeclaration::protected("/abogado/casos", lawyer()).labelled("Casos"),
        RouteDeclaration::protected("/abogado/crear-caso", lawyer()).labelled("Crear caso"),
        RouteDeclaration::protected("/abogado/casos/:id", lawyer()),
        RouteDeclaration::protected("/abogado/crear-factura", lawyer())
            .labelled("Crear factura"),
        RouteDeclaration::protected("/abogado/facturas/:id", lawyer()),
        RouteDeclaration::protected("/admin/crear-abogado", RoleSet::only(Role::Admin))
            .labelled("Crear abogado"),
        RouteDeclaration::protected("/caso/:id", RoleSet::of(&[Role::Client, Role::Lawyer])),
    ])
}
