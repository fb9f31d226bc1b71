use serde::{Deserialize, Serialize};

use crate::models::race::DriverId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Driver {
    pub id: DriverId,
    pub name: String,
}
