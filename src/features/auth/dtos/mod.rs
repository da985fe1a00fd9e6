mod auth_dto;

pub use auth_dto::{LoginRequestDto, LoginResponseDto, MeResponseDto};
