pub mod profile;
pub mod slot;
pub mod slot_store;
pub mod view;

pub use profile::{Profile, ProfileField};
pub use slot::Slot;
pub use slot_store::{DaySlots, Hour, SlotStore};
pub use view::View;
