/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Request option types and optional typed response views
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

pub mod requests;
pub mod responses;

pub use requests::*;
pub use responses::*;
