use crate::{
    model::overrider::OverriderField,
    server::{
        error::AppError,
        model::{
            overrider::{CreateOverriderParams, OverriderFieldValue, UpdateOverriderParams},
            product::UpdateProductParams,
            reference::PlaceRef,
        },
        service::{overrider::OverriderService, product::ProductService},
    },
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod price_propagation;
mod update_all_for_product;
