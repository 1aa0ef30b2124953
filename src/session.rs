use crate::model::EmployeeId;

/// Fournisseur d'identité : qui agit sur le plan.
///
/// Abstraction du fournisseur d'authentification distant ; `None` signifie
/// session anonyme (aucun utilisateur connecté).
pub trait IdentityProvider {
    fn current_user(&self) -> Option<EmployeeId>;
}

/// Session fixée à la construction (CLI, tests).
#[derive(Debug, Clone, Default)]
pub struct FixedSession {
    user: Option<EmployeeId>,
}

impl FixedSession {
    pub fn new(user: Option<EmployeeId>) -> Self {
        Self { user }
    }

    pub fn signed_in(user: EmployeeId) -> Self {
        Self { user: Some(user) }
    }
}

impl IdentityProvider for FixedSession {
    fn current_user(&self) -> Option<EmployeeId> {
        self.user.clone()
    }
}
