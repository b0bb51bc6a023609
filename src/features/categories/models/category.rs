use sqlx::FromRow;

/// Database model for category
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Category {
    pub id: i64,
    /// `None` or `Some(0)` marks a root category
    pub parent_id: Option<i64>,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub article_count: i64,
}

impl Category {
    /// Parent id if this category declares one
    pub fn declared_parent(&self) -> Option<i64> {
        self.parent_id.filter(|id| *id != 0)
    }
}
