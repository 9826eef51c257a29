pub mod day_total;
pub mod edit_state;
pub mod form;
pub mod record;

pub use day_total::DayTotal;
pub use edit_state::EditState;
pub use form::ActivityForm;
pub use record::ActivityRecord;
