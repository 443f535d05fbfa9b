use crate::server::{
    data::menu::MenuRepository,
    model::menu::{CreateMenuParams, UpdateMenuParams},
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod categories_for_menus;
mod create;
mod link;
