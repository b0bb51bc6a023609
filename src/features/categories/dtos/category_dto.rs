use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::core::error::{AppError, Result};
use crate::features::categories::models::Category;

/// Response DTO for category
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponseDto {
    pub id: i64,
    pub parent_id: Option<i64>,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub article_count: i64,
}

impl From<Category> for CategoryResponseDto {
    fn from(c: Category) -> Self {
        Self {
            id: c.id,
            parent_id: c.declared_parent(),
            name: c.name,
            slug: c.slug,
            description: c.description,
            article_count: c.article_count,
        }
    }
}

/// Category listing: the nested forest, or the flat list when requested
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum CategoryListing {
    Tree(Vec<CategoryTreeDto>),
    Flat(Vec<CategoryResponseDto>),
}

/// Response DTO for category tree (hierarchical structure)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(no_recursion)]
pub struct CategoryTreeDto {
    pub id: i64,
    pub parent_id: Option<i64>,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub article_count: i64,
    pub children: Vec<CategoryTreeDto>,
}

impl CategoryTreeDto {
    /// Build a forest from a flat list of categories.
    ///
    /// Roots are categories without a parent and orphans whose parent is not
    /// in the list. Siblings keep their input order. Categories that can
    /// only be reached through a parent cycle, and duplicate ids, are
    /// rejected with `InvalidHierarchy`.
    pub fn build_tree(categories: Vec<Category>) -> Result<Vec<CategoryTreeDto>> {
        let mut ids = HashSet::with_capacity(categories.len());
        for category in &categories {
            if !ids.insert(category.id) {
                return Err(AppError::InvalidHierarchy(format!(
                    "duplicate category id {}",
                    category.id
                )));
            }
        }

        let mut roots = Vec::new();
        let mut children_of: HashMap<i64, Vec<usize>> = HashMap::new();
        for (position, category) in categories.iter().enumerate() {
            match category.declared_parent() {
                Some(parent_id) if ids.contains(&parent_id) => {
                    children_of.entry(parent_id).or_default().push(position)
                }
                Some(parent_id) => {
                    tracing::warn!(
                        "Category {} references missing parent {}, treating it as a root",
                        category.id,
                        parent_id
                    );
                    roots.push(position)
                }
                None => roots.push(position),
            }
        }

        // Each slot is taken exactly once, when its parent is built
        let mut slots: Vec<Option<Category>> = categories.into_iter().map(Some).collect();
        let tree: Vec<CategoryTreeDto> = roots
            .into_iter()
            .filter_map(|position| Self::build_subtree(position, &mut slots, &children_of))
            .collect();

        let unreachable: Vec<i64> = slots.iter().flatten().map(|c| c.id).collect();
        if !unreachable.is_empty() {
            return Err(AppError::InvalidHierarchy(format!(
                "categories {:?} are part of a parent cycle",
                unreachable
            )));
        }

        Ok(tree)
    }

    /// Build the subtree under `root` with an explicit stack, so depth is
    /// bounded by the heap rather than the call stack
    fn build_subtree(
        root: usize,
        slots: &mut [Option<Category>],
        children_of: &HashMap<i64, Vec<usize>>,
    ) -> Option<CategoryTreeDto> {
        let category = slots[root].take()?;
        let mut stack = vec![PendingNode::new(category, children_of)];

        loop {
            let top = stack.last_mut()?;
            match top.remaining.next().copied() {
                Some(child) => {
                    if let Some(category) = slots[child].take() {
                        stack.push(PendingNode::new(category, children_of));
                    }
                }
                None => {
                    let node = stack.pop()?.finish();
                    match stack.last_mut() {
                        Some(parent) => parent.children.push(node),
                        None => return Some(node),
                    }
                }
            }
        }
    }

    /// Number of categories in this subtree, including `self`
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Self::node_count).sum::<usize>()
    }
}

/// Category whose children are still being built
struct PendingNode<'a> {
    category: Category,
    remaining: std::slice::Iter<'a, usize>,
    children: Vec<CategoryTreeDto>,
}

impl<'a> PendingNode<'a> {
    fn new(category: Category, children_of: &'a HashMap<i64, Vec<usize>>) -> Self {
        let remaining = children_of
            .get(&category.id)
            .map(|positions| positions.iter())
            .unwrap_or_default();
        Self {
            category,
            remaining,
            children: Vec::new(),
        }
    }

    fn finish(self) -> CategoryTreeDto {
        let category = self.category;
        CategoryTreeDto {
            id: category.id,
            parent_id: category.declared_parent(),
            name: category.name,
            slug: category.slug,
            description: category.description,
            article_count: category.article_count,
            children: self.children,
        }
    }
}
