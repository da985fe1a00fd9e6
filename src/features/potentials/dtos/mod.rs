mod potential_dto;

pub use potential_dto::{
    CreatePotentialDto, PotentialQuery, PotentialResponseDto, UpdatePotentialDto,
};
