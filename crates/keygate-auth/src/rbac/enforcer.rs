use keygate_core::error::AppError;
use keygate_entity::user::{User, UserRole};

/// Admits `user` only if their role is exactly `required`.
///
/// Roles carry no hierarchy, so an admin does not implicitly satisfy a
/// `user` requirement.
pub fn require_role(user: &User, required: UserRole) -> Result<(), AppError> {
    if user.role == required {
        Ok(())
    } else {
        Err(AppError::forbidden(format!(
            "Role '{required}' is required for this operation"
        )))
    }
}
