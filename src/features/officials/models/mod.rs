mod official;

pub use official::{NewOfficial, OfficialChanges, VillageOfficial};
