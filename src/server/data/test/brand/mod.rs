use crate::server::{
    data::brand::BrandRepository,
    model::brand::{CreateBrandParams, UpdateBrandParams},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
