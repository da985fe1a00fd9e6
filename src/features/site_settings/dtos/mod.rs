mod settings_dto;

pub use settings_dto::{
    BulkUpdateResponseDto, GroupedSettingsDto, SettingInputDto, SettingsMapDto,
    SiteSettingResponseDto,
};
