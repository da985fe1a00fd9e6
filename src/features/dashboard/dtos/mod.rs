mod dashboard_dto;

pub use dashboard_dto::{
    ContentStatsDto, DashboardDto, RecentContactDto, RecentNewsDto, SystemInfoDto,
    TrafficStatsDto,
};
