//! Todo Repository Adapters

mod postgres;

pub use postgres::PostgresTodoRepository;
