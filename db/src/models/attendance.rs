use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{DbConn, QueryOrder, Set};
use serde::Serialize;

/// A single attendance mark in the `attendance` table.
///
/// Rows are append-only: there is no update or delete path. `timestamp` is
/// the wall-clock time of submission, stored pre-formatted (see
/// [`Model::format_timestamp`]).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "attendance")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: String,
    pub student_name: Option<String>,
    pub session_id: String,
    pub timestamp: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        panic!("No RelationDef implemented")
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Formats a submission time the way it is persisted, e.g.
    /// `2026-08-23 10:15:42 UTC`.
    pub fn format_timestamp(at: DateTime<Utc>) -> String {
        at.format("%Y-%m-%d %H:%M:%S UTC").to_string()
    }

    /// Inserts a new attendance row. No uniqueness is enforced here; callers
    /// that want at-most-one mark per (student, session) must check
    /// [`Model::exists_for`] first.
    pub async fn create(
        db: &DbConn,
        student_id: &str,
        student_name: Option<&str>,
        session_id: &str,
        taken_at: DateTime<Utc>,
    ) -> Result<Model, DbErr> {
        let record = ActiveModel {
            student_id: Set(student_id.to_owned()),
            student_name: Set(student_name.map(|s| s.to_owned())),
            session_id: Set(session_id.to_owned()),
            timestamp: Set(Self::format_timestamp(taken_at)),
            ..Default::default()
        };

        record.insert(db).await
    }

    /// Whether a mark already exists for this (student, session) pair.
    pub async fn exists_for(
        db: &DbConn,
        student_id: &str,
        session_id: &str,
    ) -> Result<bool, DbErr> {
        let found = Entity::find()
            .filter(Column::StudentId.eq(student_id))
            .filter(Column::SessionId.eq(session_id))
            .one(db)
            .await?;
        Ok(found.is_some())
    }

    /// All attendance rows in insertion order.
    pub async fn list_all(db: &DbConn) -> Result<Vec<Model>, DbErr> {
        Entity::find().order_by_asc(Column::Id).all(db).await
    }
}
