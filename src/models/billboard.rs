use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Billboard as listed in the creation form's selector
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Billboard {
    pub id: i64,
    pub name: String,
}
