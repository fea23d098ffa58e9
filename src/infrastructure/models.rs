use diesel::prelude::*;
use serde_json::Value;
use uuid::Uuid;

use crate::schema::documents;

/// The columns a lookup hands back; `collection` and `created_at` only
/// filter and order.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = documents)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct DocumentRow {
    pub id: Uuid,
    pub body: Value,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = documents)]
pub struct NewDocumentRow<'a> {
    pub id: Uuid,
    pub collection: &'a str,
    pub body: Value,
}
