// src/db/employee_repo.rs

use sqlx::{Executor, PgPool, Postgres};

use crate::{common::error::AppError, models::employee::EmployeeMembership};

#[derive(Clone)]
pub struct EmployeeRepository {
    pool: PgPool,
}

impl EmployeeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_membership<'e, E>(
        &self,
        executor: E,
        employee_email: &str,
        hr_email: &str,
    ) -> Result<Option<EmployeeMembership>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let membership = sqlx::query_as::<_, EmployeeMembership>(
            "SELECT * FROM employees WHERE employee_email = $1 AND hr_email = $2",
        )
        .bind(employee_email)
        .bind(hr_email)
        .fetch_optional(executor)
        .await?;
        Ok(membership)
    }

    /// Insere a filiação se ainda não existir. A UNIQUE do banco é a guarda
    /// autoritativa: sob corrida, o perdedor recebe None e segue como membro
    /// já existente.
    pub async fn insert_membership<'e, E>(
        &self,
        executor: E,
        employee_email: &str,
        employee_name: &str,
        hr_email: &str,
    ) -> Result<Option<EmployeeMembership>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let membership = sqlx::query_as::<_, EmployeeMembership>(
            r#"
            INSERT INTO employees (employee_email, employee_name, hr_email)
            VALUES ($1, $2, $3)
            ON CONFLICT (employee_email, hr_email) DO NOTHING
            RETURNING *
            "#,
        )
        .bind(employee_email)
        .bind(employee_name)
        .bind(hr_email)
        .fetch_optional(executor)
        .await?;
        Ok(membership)
    }

    pub async fn count_for_hr<'e, E>(&self, executor: E, hr_email: &str) -> Result<i64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM employees WHERE hr_email = $1")
            .bind(hr_email)
            .fetch_one(executor)
            .await?;
        Ok(count)
    }

    pub async fn list_for_hr(&self, hr_email: &str) -> Result<Vec<EmployeeMembership>, AppError> {
        let members = sqlx::query_as::<_, EmployeeMembership>(
            "SELECT * FROM employees WHERE hr_email = $1 ORDER BY added_at ASC",
        )
        .bind(hr_email)
        .fetch_all(&self.pool)
        .await?;
        Ok(members)
    }

    pub async fn delete_membership<'e, E>(
        &self,
        executor: E,
        employee_email: &str,
        hr_email: &str,
    ) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query("DELETE FROM employees WHERE employee_email = $1 AND hr_email = $2")
            .bind(employee_email)
            .bind(hr_email)
            .execute(executor)
            .await?;
        Ok(result.rows_affected())
    }
}
