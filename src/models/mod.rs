pub mod attraction;
pub mod coordinates;
pub mod flight;
pub mod matrix;
pub mod trip;

pub use attraction::{Attraction, AttractionSearchResponse};
pub use coordinates::Coordinates;
pub use flight::{FlightOffer, FlightSearchResponse};
pub use matrix::{DistanceMatrixResponse, FormattedEstimate, MatrixElement, MatrixRow, ValueText};
pub use trip::{TripLeg, TripLegsRequest, TripLegsResponse, TripTotals};
