//! Repository for the `projects` table.

use atelier_core::types::ProjectId;
use sqlx::PgPool;

use crate::models::project::{CreateProject, Project, UpdateProject};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, title, description, category, type, size, location, thumbnail, pictures, created_at";

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    ///
    /// `id` and `created_at` are assigned by the database.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (title, description, category, type, size, location, thumbnail, pictures)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.category)
            .bind(&input.kind)
            .bind(&input.size)
            .bind(&input.location)
            .bind(&input.thumbnail)
            .bind(&input.pictures)
            .fetch_one(pool)
            .await
    }

    /// Find a project by ID. A missing row is `None`, not an error.
    pub async fn find_by_id(pool: &PgPool, id: ProjectId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all projects ordered by most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects ORDER BY created_at DESC");
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// Update a project. Only non-`None` fields in `input` are applied;
    /// last writer wins, there is no optimistic-concurrency check.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: ProjectId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                category = COALESCE($4, category),
                type = COALESCE($5, type),
                size = COALESCE($6, size),
                location = COALESCE($7, location),
                thumbnail = COALESCE($8, thumbnail),
                pictures = COALESCE($9, pictures)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.category)
            .bind(&input.kind)
            .bind(&input.size)
            .bind(&input.location)
            .bind(&input.thumbnail)
            .bind(&input.pictures)
            .fetch_optional(pool)
            .await
    }

    /// Delete a project by ID. Returns `true` if a row was removed;
    /// deleting a nonexistent id is a silent no-op.
    pub async fn delete(pool: &PgPool, id: ProjectId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
