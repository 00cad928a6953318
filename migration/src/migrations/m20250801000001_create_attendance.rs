// migration: create_attendance
use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m20250801000001_create_attendance"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("attendance"))
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Alias::new("id"))
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Alias::new("student_id"))
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Alias::new("student_name")).string().null())
                    .col(
                        ColumnDef::new(Alias::new("session_id"))
                            .string()
                            .not_null(),
                    )
                    // Pre-formatted wall-clock text, not a SQL timestamp.
                    .col(ColumnDef::new(Alias::new("timestamp")).string().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Alias::new("attendance")).to_owned())
            .await
    }
}
