//! Known role constants for the console
//!
//! UI and route code reference roles symbolically through this enum instead of
//! stringly-typed names or hardcoded identifiers. Each variant maps to the
//! normalized key its catalog entry produces, so the set of valid role
//! references is statically enumerable while identifiers stay dynamic.

use std::fmt;

/// Roles the console's screens and route guards are written against.
///
/// A variant whose role is missing from the deployed catalog simply resolves
/// to `None` (and therefore denies), it never panics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoleKey {
    /// Full administrative access
    Administrador,
    /// Research directorate, approves POAs
    DirectorDeInvestigacion,
    /// Owns a project and its annual plans
    CoordinadorDeProyecto,
    /// Registers activities and budget lines
    DocenteInvestigador,
    /// Reviews submitted plans
    Evaluador,
    /// Read-only institutional oversight
    Vicerrectorado,
}

impl RoleKey {
    /// Every key the console knows about, for diagnostics and startup checks.
    pub const ALL: [RoleKey; 6] = [
        RoleKey::Administrador,
        RoleKey::DirectorDeInvestigacion,
        RoleKey::CoordinadorDeProyecto,
        RoleKey::DocenteInvestigador,
        RoleKey::Evaluador,
        RoleKey::Vicerrectorado,
    ];

    /// The normalized catalog key this variant stands for.
    pub const fn as_key(self) -> &'static str {
        match self {
            RoleKey::Administrador => "ADMINISTRADOR",
            RoleKey::DirectorDeInvestigacion => "DIRECTOR_DE_INVESTIGACION",
            RoleKey::CoordinadorDeProyecto => "COORDINADOR_DE_PROYECTO",
            RoleKey::DocenteInvestigador => "DOCENTE_INVESTIGADOR",
            RoleKey::Evaluador => "EVALUADOR",
            RoleKey::Vicerrectorado => "VICERRECTORADO",
        }
    }
}

impl fmt::Display for RoleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_key())
    }
}
