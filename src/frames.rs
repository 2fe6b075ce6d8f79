pub mod load;
pub mod score;
pub mod search;
