pub mod availability;
pub mod brand;
pub mod category;
pub mod menu;
pub mod overrider;
pub mod product;
pub mod resolver;
pub mod store;

#[cfg(test)]
mod test;
