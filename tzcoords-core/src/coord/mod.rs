mod coord_error;
mod coordinate_field;
pub mod iso6709;
mod lat_lon;

pub use coord_error::CoordinateError;
pub use coordinate_field::CoordinateField;
pub use lat_lon::LatLon;
