use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identifier of a store (tenant). Every catalog and campaign read is keyed by one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TenantId(pub Uuid);

impl TenantId {
    pub fn new(id: Uuid) -> Self {
        Self(id)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for TenantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Anything that belongs to exactly one tenant.
pub trait TenantScoped {
    fn tenant_id(&self) -> TenantId;

    fn belongs_to(&self, tenant: TenantId) -> bool {
        self.tenant_id() == tenant
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tenant_id_serializes_as_bare_uuid() {
        let id = Uuid::new_v4();
        let json = serde_json::to_string(&TenantId(id)).unwrap();
        assert_eq!(json, format!("\"{}\"", id));
    }
}
