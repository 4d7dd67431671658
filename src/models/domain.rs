use serde::{Deserialize, Serialize};

/// One sellable item from the auction catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct CatalogItem {
    pub id: i32,
    pub name: String,
    #[serde(rename = "mediaUrl")]
    pub media_url: String,
    pub rarity: String,
}
