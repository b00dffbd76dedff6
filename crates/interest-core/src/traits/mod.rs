mod clock;
mod linguistic;
mod profanity;
mod profile_sync;
mod storage;

pub use clock::{IClock, SystemClock};
pub use linguistic::ILinguisticAnalyzer;
pub use profanity::IProfanityFilter;
pub use profile_sync::IProfileSync;
pub use storage::IKeyValueStorage;
