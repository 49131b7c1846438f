use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// A project visible on the dashboard.
///
/// Project data is owned by an upstream system; this API only serves a
/// sample snapshot to demonstrate the member-level gate.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    pub status: String,
    pub owner: String,
}
