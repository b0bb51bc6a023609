mod category_dto;

pub use category_dto::{CategoryListing, CategoryResponseDto, CategoryTreeDto};
