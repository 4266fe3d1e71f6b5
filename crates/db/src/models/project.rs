//! Project entity model and DTOs.

use atelier_core::types::{ProjectId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Portfolio category. Stored as the `project_category` Postgres enum and
/// serialized with the display labels the site uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "project_category")]
pub enum Category {
    #[sqlx(rename = "Residential")]
    Residential,
    #[sqlx(rename = "Commercial")]
    Commercial,
    #[serde(rename = "Holiday Homes")]
    #[sqlx(rename = "Holiday Homes")]
    HolidayHomes,
}

/// All category labels, in display order.
pub const CATEGORIES: &[Category] = &[
    Category::Residential,
    Category::Commercial,
    Category::HolidayHomes,
];

/// A project row from the `projects` table: one portfolio case study.
///
/// `pictures` is the gallery in display order; `thumbnail` may be empty,
/// in which case the UI shows a placeholder.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    pub category: Category,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
    pub size: String,
    pub location: String,
    pub thumbnail: String,
    pub pictures: Vec<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a new project. `id` and `created_at` are server-assigned.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProject {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: Category,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub size: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub pictures: Vec<String>,
}

/// DTO for updating an existing project. All fields are optional; only
/// present fields are patched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProject {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<Category>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub size: Option<String>,
    pub location: Option<String>,
    pub thumbnail: Option<String>,
    pub pictures: Option<Vec<String>>,
}
