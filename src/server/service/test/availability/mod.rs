use crate::{
    model::kind::{EntityKind, PlaceKind},
    server::{
        error::AppError,
        model::reference::{AvailabilityKey, EntityRef, PlaceRef},
        service::availability::AvailabilityService,
    },
};
use test_utils::{builder::TestBuilder, factory};

mod enable_entity;
mod remove_entity;
