use crate::server::{
    error::AppError,
    model::{
        brand::CreateBrandParams, menu::CreateMenuParams, store::CreateStoreParams,
    },
    service::{
        brand::BrandService, category::CategoryService, menu::MenuService, store::StoreService,
    },
};
use test_utils::{builder::TestBuilder, factory};

mod brand_checks;
mod links;
