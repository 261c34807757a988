use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

/// Creates and returns a PostgreSQL connection pool.
pub async fn create_pool(database_url: &str) -> Result<PgPool> {
    info!("Connecting to PostgreSQL...");

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await?;

    info!("PostgreSQL connection pool established");
    Ok(pool)
}

/// Creates the application tables if they do not exist yet.
/// Idempotent — safe to run on every startup.
pub async fn init_schema(pool: &PgPool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS cv_uploads (
            id UUID PRIMARY KEY,
            user_id UUID NOT NULL,
            original_filename TEXT NOT NULL,
            extracted_text TEXT,
            skills JSONB NOT NULL DEFAULT '[]',
            experience_years INTEGER,
            education_level TEXT,
            current_role TEXT,
            industries JSONB NOT NULL DEFAULT '[]',
            strengths JSONB NOT NULL DEFAULT '[]',
            areas_for_improvement JSONB NOT NULL DEFAULT '[]',
            summary TEXT,
            uploaded_at TIMESTAMPTZ NOT NULL DEFAULT now()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS career_questions (
            id UUID PRIMARY KEY,
            question_text TEXT NOT NULL,
            question_type TEXT NOT NULL,
            is_active BOOLEAN NOT NULL DEFAULT TRUE,
            question_order INTEGER NOT NULL DEFAULT 0
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS question_responses (
            id UUID PRIMARY KEY,
            user_id UUID NOT NULL,
            question_id UUID NOT NULL REFERENCES career_questions(id) ON DELETE CASCADE,
            response_text TEXT NOT NULL,
            response_date TIMESTAMPTZ NOT NULL DEFAULT now(),
            UNIQUE (user_id, question_id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS career_plans (
            id UUID PRIMARY KEY,
            user_id UUID NOT NULL,
            title TEXT NOT NULL,
            description TEXT NOT NULL DEFAULT '',
            career_goals JSONB NOT NULL DEFAULT '[]',
            skill_gaps JSONB NOT NULL DEFAULT '[]',
            learning_path JSONB NOT NULL DEFAULT '[]',
            timeline JSONB NOT NULL DEFAULT '{}',
            recommendations JSONB NOT NULL DEFAULT '[]',
            is_active BOOLEAN NOT NULL DEFAULT TRUE,
            created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS learning_items (
            id UUID PRIMARY KEY,
            career_plan_id UUID NOT NULL REFERENCES career_plans(id) ON DELETE CASCADE,
            title TEXT NOT NULL,
            description TEXT NOT NULL DEFAULT '',
            item_type TEXT NOT NULL DEFAULT 'course',
            duration TEXT NOT NULL DEFAULT '',
            priority TEXT NOT NULL DEFAULT 'medium',
            status TEXT NOT NULL DEFAULT 'not_started',
            item_order INTEGER NOT NULL DEFAULT 0,
            url TEXT,
            cost DOUBLE PRECISION
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS skill_gaps (
            id UUID PRIMARY KEY,
            career_plan_id UUID NOT NULL REFERENCES career_plans(id) ON DELETE CASCADE,
            skill_name TEXT NOT NULL,
            current_level TEXT NOT NULL DEFAULT 'beginner',
            target_level TEXT NOT NULL DEFAULT 'intermediate',
            priority TEXT NOT NULL DEFAULT 'medium',
            progress_percentage INTEGER NOT NULL DEFAULT 0,
            notes TEXT NOT NULL DEFAULT ''
        )
        "#,
    )
    .execute(pool)
    .await?;

    info!("Database schema initialized");
    Ok(())
}
