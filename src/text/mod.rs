pub mod atlas;
pub mod mono;
pub mod wrap;
