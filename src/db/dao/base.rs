use chrono::Utc;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DatabaseConnection, EntityTrait, FromQueryResult,
    IntoActiveModel, Order, PrimaryKeyTrait, QueryOrder, sea_query::OnConflict,
};

use super::base_traits::{HasCreatedAtColumn, HasIdColumn, TimestampedActiveModel};
use super::error::{DaoLayerError, DaoResult};

type DaoModel<D> = <<D as DaoBase>::Entity as EntityTrait>::Model;
type DaoActiveModel<D> = <<D as DaoBase>::Entity as EntityTrait>::ActiveModel;
type DaoColumn<D> = <<D as DaoBase>::Entity as EntityTrait>::Column;

pub trait DaoBase: Clone + Send + Sync + Sized
where
    <Self::Entity as EntityTrait>::Model:
        FromQueryResult + IntoActiveModel<<Self::Entity as EntityTrait>::ActiveModel> + Send + Sync,
    <Self::Entity as EntityTrait>::ActiveModel: ActiveModelTrait<Entity = Self::Entity>
        + ActiveModelBehavior
        + TimestampedActiveModel
        + Send,
    <<Self::Entity as EntityTrait>::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
{
    type Entity: EntityTrait + HasCreatedAtColumn + HasIdColumn + Send + Sync;

    fn new(db: &DatabaseConnection) -> Self;

    fn db(&self) -> &DatabaseConnection;

    async fn create(
        &self,
        data: impl IntoActiveModel<DaoActiveModel<Self>> + Send,
    ) -> DaoResult<DaoModel<Self>> {
        let now = Utc::now().fixed_offset();
        let mut active = data.into_active_model();
        active.set_created_at(now);
        active.set_updated_at(now);
        active.insert(self.db()).await.map_err(DaoLayerError::Db)
    }

    /// Inserts every row in one statement, skipping rows rejected by `on_conflict`.
    /// Returns the number of rows the store actually inserted.
    async fn insert_many_ignoring(
        &self,
        rows: Vec<DaoActiveModel<Self>>,
        on_conflict: OnConflict,
    ) -> DaoResult<u64> {
        if rows.is_empty() {
            return Ok(0);
        }

        let now = Utc::now().fixed_offset();
        let rows = rows.into_iter().map(|mut active| {
            active.set_created_at(now);
            active.set_updated_at(now);
            active
        });

        Self::Entity::insert_many(rows)
            .on_conflict(on_conflict)
            .exec_without_returning(self.db())
            .await
            .map_err(DaoLayerError::Db)
    }

    async fn find_by_id(&self, id: i32) -> DaoResult<DaoModel<Self>> {
        let model = Self::Entity::find_by_id(id)
            .one(self.db())
            .await
            .map_err(DaoLayerError::Db)?;

        model.ok_or(DaoLayerError::NotFound {
            entity: std::any::type_name::<Self::Entity>(),
            id,
        })
    }

    /// Newest rows first unless an explicit order is given.
    async fn find_all(
        &self,
        order: Option<(DaoColumn<Self>, Order)>,
    ) -> DaoResult<Vec<DaoModel<Self>>> {
        let query = Self::Entity::find();
        let query = match order {
            Some((column, order)) => query.order_by(column, order),
            None => query
                .order_by_desc(Self::Entity::created_at_column())
                .order_by_desc(Self::Entity::id_column()),
        };
        query.all(self.db()).await.map_err(DaoLayerError::Db)
    }

    async fn update<F>(&self, id: i32, apply: F) -> DaoResult<DaoModel<Self>>
    where
        F: FnOnce(&mut DaoActiveModel<Self>) + Send,
    {
        let model = self.find_by_id(id).await?;

        let mut active = model.into_active_model();
        apply(&mut active);
        active.set_updated_at(Utc::now().fixed_offset());

        active.update(self.db()).await.map_err(DaoLayerError::Db)
    }

    async fn delete(&self, id: i32) -> DaoResult<i32> {
        let result = Self::Entity::delete_by_id(id)
            .exec(self.db())
            .await
            .map_err(DaoLayerError::Db)?;

        if result.rows_affected == 0 {
            return Err(DaoLayerError::NotFound {
                entity: std::any::type_name::<Self::Entity>(),
                id,
            });
        }

        Ok(id)
    }
}
