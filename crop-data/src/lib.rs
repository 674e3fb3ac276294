pub mod palette;
pub mod record;
pub mod view_state;
