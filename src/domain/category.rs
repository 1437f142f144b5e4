use crate::domain::prelude::*;

///
/// Category
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Category {
    pub id: u64,
    pub name: String,
    pub description: String,
}
