mod aggregate_id;

pub use aggregate_id::AggregateId;
