mod official_dto;

pub use official_dto::{CreateOfficialDto, OfficialResponseDto, UpdateOfficialDto};
