pub trait HasCreatedAtColumn: sea_orm::EntityTrait {
    fn created_at_column() -> Self::Column;
}

pub trait HasIdColumn: sea_orm::EntityTrait {
    fn id_column() -> Self::Column;
}

pub trait TimestampedActiveModel {
    fn set_created_at(&mut self, ts: sea_orm::entity::prelude::DateTimeWithTimeZone);

    /// No-op for tables without an `updated_at` column.
    fn set_updated_at(&mut self, _ts: sea_orm::entity::prelude::DateTimeWithTimeZone) {}
}
