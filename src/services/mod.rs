pub mod booking_service;
pub mod catalog_service;
pub mod exoplanet_service;
pub mod packing_service;
pub mod pricing_service;
pub mod travel_service;
pub mod validation_service;
