use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, OnConflict},
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect, Select,
};

use crate::server::model::{
    overrider::{
        CreateOverriderParams, Overrider, OverriderFieldValue, OverriderFilter,
        UpdateOverriderParams,
    },
    reference::PlaceRef,
};

use entity::overrider::Column;

pub struct OverriderRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OverriderRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates the override of a product at a place.
    ///
    /// When a row already exists for `(product_id, place)`, active or soft-deleted,
    /// its fields are replaced and `deleted_at` is cleared instead, so the key never
    /// has more than one row.
    pub async fn upsert(&self, params: CreateOverriderParams) -> Result<Overrider, DbErr> {
        let now = Utc::now();

        let entity = entity::prelude::Overrider::insert(entity::overrider::ActiveModel {
            product_id: ActiveValue::Set(params.product_id),
            place_kind: ActiveValue::Set(params.place.kind.as_str().to_string()),
            place_id: ActiveValue::Set(params.place.id),
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            image: ActiveValue::Set(params.image),
            price: ActiveValue::Set(params.price),
            enable: ActiveValue::Set(params.enable),
            discount_id: ActiveValue::Set(params.discount_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::columns([Column::ProductId, Column::PlaceKind, Column::PlaceId])
                .update_columns([
                    Column::Name,
                    Column::Description,
                    Column::Image,
                    Column::Price,
                    Column::Enable,
                    Column::DiscountId,
                    Column::UpdatedAt,
                    Column::DeletedAt,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Overrider::from_entity(entity)
    }

    /// Gets active overrides matching every set field of the filter
    pub async fn find(&self, filter: OverriderFilter) -> Result<Vec<Overrider>, DbErr> {
        let mut query = active();

        if let Some(product_id) = filter.product_id {
            query = query.filter(Column::ProductId.eq(product_id));
        }
        if let Some(place_kind) = filter.place_kind {
            query = query.filter(Column::PlaceKind.eq(place_kind.as_str()));
        }
        if let Some(place_id) = filter.place_id {
            query = query.filter(Column::PlaceId.eq(place_id));
        }

        query
            .order_by_asc(Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Overrider::from_entity)
            .collect()
    }

    /// Gets all active overrides at a place
    pub async fn find_by_place(&self, place: PlaceRef) -> Result<Vec<Overrider>, DbErr> {
        self.find(OverriderFilter {
            product_id: None,
            place_kind: Some(place.kind),
            place_id: Some(place.id),
        })
        .await
    }

    /// Gets the active override of a product at a place
    pub async fn find_one(
        &self,
        product_id: i32,
        place: PlaceRef,
    ) -> Result<Option<Overrider>, DbErr> {
        active()
            .filter(Column::ProductId.eq(product_id))
            .filter(Column::PlaceKind.eq(place.kind.as_str()))
            .filter(Column::PlaceId.eq(place.id))
            .one(self.db)
            .await?
            .map(Overrider::from_entity)
            .transpose()
    }

    /// Gets an active override by id
    pub async fn get(&self, id: i32) -> Result<Option<Overrider>, DbErr> {
        active()
            .filter(Column::Id.eq(id))
            .one(self.db)
            .await?
            .map(Overrider::from_entity)
            .transpose()
    }

    /// Applies the fields present in `params` to an active override
    pub async fn update(&self, params: UpdateOverriderParams) -> Result<Overrider, DbErr> {
        let mut active_model: entity::overrider::ActiveModel =
            self.get_active_model(params.id).await?.into();

        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(description) = params.description {
            active_model.description = ActiveValue::Set(description);
        }
        if let Some(image) = params.image {
            active_model.image = ActiveValue::Set(image);
        }
        if let Some(price) = params.price {
            active_model.price = ActiveValue::Set(price);
        }
        if let Some(enable) = params.enable {
            active_model.enable = ActiveValue::Set(enable);
        }
        if let Some(discount_id) = params.discount_id {
            active_model.discount_id = ActiveValue::Set(discount_id);
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        Overrider::from_entity(active_model.update(self.db).await?)
    }

    /// Soft-deletes an active override and returns it
    pub async fn delete(&self, id: i32) -> Result<Overrider, DbErr> {
        let mut active_model: entity::overrider::ActiveModel =
            self.get_active_model(id).await?.into();

        let now = Utc::now();
        active_model.deleted_at = ActiveValue::Set(Some(now));
        active_model.updated_at = ActiveValue::Set(now);

        Overrider::from_entity(active_model.update(self.db).await?)
    }

    /// Gets the ids of every active override of a product
    pub async fn get_ids_by_product(&self, product_id: i32) -> Result<Vec<i32>, DbErr> {
        active()
            .select_only()
            .column(Column::Id)
            .filter(Column::ProductId.eq(product_id))
            .order_by_asc(Column::Id)
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// Sets one field to one value on every active override in `ids`.
    ///
    /// Returns the number of rows changed. An empty id list touches nothing.
    pub async fn update_field(
        &self,
        ids: &[i32],
        value: OverriderFieldValue,
    ) -> Result<u64, DbErr> {
        if ids.is_empty() {
            return Ok(0);
        }

        let (column, expr) = match value {
            OverriderFieldValue::Name(v) => (Column::Name, Expr::value(v)),
            OverriderFieldValue::Description(v) => (Column::Description, Expr::value(v)),
            OverriderFieldValue::Image(v) => (Column::Image, Expr::value(v)),
            OverriderFieldValue::Price(v) => (Column::Price, Expr::value(v)),
            OverriderFieldValue::Enable(v) => (Column::Enable, Expr::value(v)),
        };

        let result = entity::prelude::Overrider::update_many()
            .col_expr(column, expr)
            .col_expr(Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(Column::Id.is_in(ids.iter().copied()))
            .filter(Column::DeletedAt.is_null())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    async fn get_active_model(&self, id: i32) -> Result<entity::overrider::Model, DbErr> {
        active()
            .filter(Column::Id.eq(id))
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Overrider with id {} not found",
                id
            )))
    }
}

fn active() -> Select<entity::prelude::Overrider> {
    entity::prelude::Overrider::find().filter(Column::DeletedAt.is_null())
}
