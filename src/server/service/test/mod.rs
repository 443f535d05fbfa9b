mod availability;
mod catalog;
mod overrider;
