//! # Medias Table Migration
//!
//! One row per stored product file. The object itself lives in blob storage;
//! `file_url` is the only link to it.
//!
//! ## Thumbnail rules
//! - `ck_medias_thumbnail_is_image`: only images can carry `is_thumbnail`.
//! - `uq_medias_product_thumbnail`: partial unique index, at most one
//!   thumbnail per product. Flag moves happen inside one transaction
//!   (clear old holder, then set the new one).
//!
//! ## Indexes
//! - `idx_medias_product_created`: product listings in creation order.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create medias table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Medias::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Medias::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    // Free text, products live in another service
                    .col(ColumnDef::new(Medias::ProductId).text().not_null())
                    .col(ColumnDef::new(Medias::FileName).text().not_null())
                    .col(ColumnDef::new(Medias::FileUrl).text().not_null())
                    .col(ColumnDef::new(Medias::FileType).text().not_null())
                    .col(
                        ColumnDef::new(Medias::IsThumbnail)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Medias::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Check constraints
        // =====================================================
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                ALTER TABLE medias
                ADD CONSTRAINT ck_medias_file_type
                CHECK (file_type IN ('image', 'video'));
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                ALTER TABLE medias
                ADD CONSTRAINT ck_medias_thumbnail_is_image
                CHECK (file_type = 'image' OR is_thumbnail = false);
                "#,
            )
            .await?;

        // =====================================================
        // Indexes
        // =====================================================
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_medias_product_created
                ON medias (product_id, created_at);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX uq_medias_product_thumbnail
                ON medias (product_id)
                WHERE is_thumbnail;
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS uq_medias_product_thumbnail;
                DROP INDEX IF EXISTS idx_medias_product_created;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Medias::Table).if_exists().to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Medias {
    Table,
    Id,
    ProductId,
    FileName,
    FileUrl,
    FileType,
    IsThumbnail,
    CreatedAt,
}
