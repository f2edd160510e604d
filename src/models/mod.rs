mod reading;

pub use reading::{Reading, ReadingList, NOT_AVAILABLE};
