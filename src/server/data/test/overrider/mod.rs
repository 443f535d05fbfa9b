use crate::{
    model::kind::PlaceKind,
    server::{
        data::overrider::OverriderRepository,
        model::{
            overrider::{
                CreateOverriderParams, OverriderFieldValue, OverriderFilter,
                UpdateOverriderParams,
            },
            reference::PlaceRef,
        },
    },
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod find;
mod get_ids_by_product;
mod update;
mod update_field;

fn create_params(product_id: i32, store_id: i32) -> CreateOverriderParams {
    CreateOverriderParams {
        product_id,
        place: PlaceRef::store(store_id),
        name: Some("Store Latte".to_string()),
        description: None,
        image: None,
        price: Some(4.5),
        enable: true,
        discount_id: None,
    }
}
