use crate::{
    model::kind::{EntityKind, PlaceKind},
    server::{
        data::availability::AvailabilityRepository,
        model::reference::{AvailabilityKey, EntityRef, PlaceRef},
    },
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod find_by_entity;
mod find_by_place;
mod get;
mod upsert;

fn menu_at_store(menu_id: i32, store_id: i32) -> AvailabilityKey {
    AvailabilityKey::new(
        EntityRef::new(EntityKind::Menu, menu_id),
        PlaceRef::store(store_id),
    )
}
