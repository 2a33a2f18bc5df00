mod application;

pub use application::{Application, NewApplication};
