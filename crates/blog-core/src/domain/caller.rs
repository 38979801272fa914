//! The identity behind a request and what it may do.

use uuid::Uuid;

use crate::error::DomainError;

/// Roles that grant staff capability.
pub const STAFF_ROLES: &[&str] = &["staff", "superuser"];

/// A capability a handler can demand before it runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    Authenticated,
    Staff,
}

/// Who is making the current request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Caller {
    Anonymous,
    User { user_id: Uuid, roles: Vec<String> },
}

impl Caller {
    pub fn user(user_id: Uuid, roles: Vec<String>) -> Self {
        Self::User { user_id, roles }
    }

    pub fn user_id(&self) -> Option<Uuid> {
        match self {
            Self::Anonymous => None,
            Self::User { user_id, .. } => Some(*user_id),
        }
    }

    pub fn is_staff(&self) -> bool {
        match self {
            Self::Anonymous => false,
            Self::User { roles, .. } => roles.iter().any(|r| STAFF_ROLES.contains(&r.as_str())),
        }
    }

    /// Check the caller holds `capability`, returning their user id if so.
    ///
    /// Anonymous callers always get [`DomainError::Unauthenticated`], so a
    /// missing login is never reported as a permission problem.
    pub fn authorize(&self, capability: Capability) -> Result<Uuid, DomainError> {
        let user_id = self.user_id().ok_or(DomainError::Unauthenticated)?;

        match capability {
            Capability::Authenticated => Ok(user_id),
            Capability::Staff if self.is_staff() => Ok(user_id),
            Capability::Staff => Err(DomainError::Forbidden),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymous_is_unauthenticated() {
        let caller = Caller::Anonymous;

        assert!(matches!(
            caller.authorize(Capability::Authenticated),
            Err(DomainError::Unauthenticated)
        ));
        assert!(matches!(
            caller.authorize(Capability::Staff),
            Err(DomainError::Unauthenticated)
        ));
    }

    #[test]
    fn test_plain_user_is_not_staff() {
        let id = Uuid::new_v4();
        let caller = Caller::user(id, vec!["user".to_string()]);

        assert_eq!(caller.authorize(Capability::Authenticated).unwrap(), id);
        assert!(matches!(
            caller.authorize(Capability::Staff),
            Err(DomainError::Forbidden)
        ));
    }

    #[test]
    fn test_staff_and_superuser_roles() {
        for role in ["staff", "superuser"] {
            let id = Uuid::new_v4();
            let caller = Caller::user(id, vec![role.to_string()]);

            assert!(caller.is_staff());
            assert_eq!(caller.authorize(Capability::Staff).unwrap(), id);
        }
    }
}
