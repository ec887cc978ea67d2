// src/infrastructure/repositories/postgres_slug.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::schema::FieldValue;
use crate::domain::slug::{Lookup, SlugQuery, SlugRepository};
use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

/// Slug existence check against a Postgres table whose id column is `id`.
#[derive(Clone)]
pub struct PostgresSlugRepository {
    pool: PgPool,
}

impl PostgresSlugRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn build_query(query: &SlugQuery) -> DomainResult<QueryBuilder<'static, Postgres>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("SELECT EXISTS (SELECT 1 FROM ");
        builder.push(quote_ident(&query.collection)?);
        builder.push(" WHERE ");
        builder.push(quote_ident(&query.slug_field)?);
        builder.push(" = ");
        builder.push_bind(query.slug.clone());

        if let Some(id) = query.exclude {
            builder.push(" AND id <> ");
            builder.push_bind(i64::from(id));
        }

        for filter in &query.filters {
            builder.push(" AND ");
            builder.push(quote_ident(filter.field)?);
            if filter.lookup == Lookup::Date {
                builder.push("::date");
            }
            push_comparison(&mut builder, &filter.value);
        }

        builder.push(")");
        Ok(builder)
    }
}

fn push_comparison(builder: &mut QueryBuilder<'static, Postgres>, value: &FieldValue) {
    match value {
        FieldValue::Null => {
            builder.push(" IS NULL");
        }
        FieldValue::Text(text) => {
            builder.push(" = ");
            builder.push_bind(text.clone());
        }
        FieldValue::Integer(n) => {
            builder.push(" = ");
            builder.push_bind(*n);
        }
        FieldValue::Bool(b) => {
            builder.push(" = ");
            builder.push_bind(*b);
        }
        FieldValue::DateTime(at) => {
            builder.push(" = ");
            builder.push_bind(*at);
        }
        FieldValue::Date(date) => {
            builder.push(" = ");
            builder.push_bind(*date);
        }
    }
}

/// Table and column names come from record declarations, never from
/// request data; anything outside `[a-z0-9_]` is refused anyway.
fn quote_ident(name: &str) -> DomainResult<String> {
    let valid = !name.is_empty()
        && !name.starts_with(|c: char| c.is_ascii_digit())
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');
    if valid {
        Ok(format!("\"{name}\""))
    } else {
        Err(DomainError::Validation(format!("invalid identifier {name:?}")))
    }
}

#[async_trait]
impl SlugRepository for PostgresSlugRepository {
    async fn slug_exists(&self, query: &SlugQuery) -> DomainResult<bool> {
        let mut builder = Self::build_query(query)?;
        builder
            .build_query_scalar::<bool>()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)
    }
}
