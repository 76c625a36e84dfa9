pub mod blocked_date;
pub mod chalet;
pub mod job;
pub mod slot;
