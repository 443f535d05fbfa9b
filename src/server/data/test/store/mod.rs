use crate::server::{
    data::store::StoreRepository,
    model::store::{CreateStoreParams, UpdateStoreParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod update;
