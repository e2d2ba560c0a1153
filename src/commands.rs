pub mod post_sync;
pub mod sync;
