//! Catalog records as seen from one place.
//!
//! These are produced by the resolver after dropping disabled entities and
//! overlaying product overrides.

use crate::{
    model::place::{PlaceCategoryDto, PlaceMenuDto, PlaceProductDto},
    server::model::{category::Category, menu::Menu, reference::PlaceRef},
};

#[derive(Debug, Clone, PartialEq)]
pub struct PlaceProduct {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub image: String,
    pub sku: String,
    pub price: f64,
    pub unit: String,
    pub color: String,
    pub discount_id: Option<i32>,
    pub brand_id: i32,
    pub overrider_id: Option<i32>,
}

impl PlaceProduct {
    pub fn into_dto(self) -> PlaceProductDto {
        PlaceProductDto {
            id: self.id,
            name: self.name,
            description: self.description,
            image: self.image,
            sku: self.sku,
            price: self.price,
            unit: self.unit,
            color: self.color,
            discount_id: self.discount_id,
            brand_id: self.brand_id,
            overrider_id: self.overrider_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlaceCategory {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub image: String,
    pub color: String,
    pub sort_id: i32,
    pub brand_id: i32,
    pub products: Vec<PlaceProduct>,
}

impl PlaceCategory {
    pub fn new(category: Category, products: Vec<PlaceProduct>) -> Self {
        Self {
            id: category.id,
            name: category.name,
            description: category.description,
            image: category.image,
            color: category.color,
            sort_id: category.sort_id,
            brand_id: category.brand_id,
            products,
        }
    }

    pub fn into_dto(self) -> PlaceCategoryDto {
        PlaceCategoryDto {
            id: self.id,
            name: self.name,
            description: self.description,
            image: self.image,
            color: self.color,
            sort_id: self.sort_id,
            brand_id: self.brand_id,
            products: self.products.into_iter().map(PlaceProduct::into_dto).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlaceMenu {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub brand_id: i32,
    pub place: PlaceRef,
    pub categories: Vec<PlaceCategory>,
}

impl PlaceMenu {
    pub fn new(menu: Menu, place: PlaceRef, categories: Vec<PlaceCategory>) -> Self {
        Self {
            id: menu.id,
            name: menu.name,
            description: menu.description,
            brand_id: menu.brand_id,
            place,
            categories,
        }
    }

    pub fn into_dto(self) -> PlaceMenuDto {
        PlaceMenuDto {
            id: self.id,
            name: self.name,
            description: self.description,
            brand_id: self.brand_id,
            place: self.place.kind,
            place_id: self.place.id,
            categories: self
                .categories
                .into_iter()
                .map(PlaceCategory::into_dto)
                .collect(),
        }
    }
}
