use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::analytics::{dtos as analytics_dtos, handlers as analytics_handlers};
use crate::features::auth::{dtos as auth_dtos, handlers as auth_handlers, model as auth_model};
use crate::features::contacts::{dtos as contacts_dtos, handlers as contacts_handlers};
use crate::features::dashboard::{dtos as dashboard_dtos, handlers as dashboard_handlers};
use crate::features::hero_sliders::{
    dtos as hero_sliders_dtos, handlers as hero_sliders_handlers, models as hero_sliders_models,
};
use crate::features::news::{dtos as news_dtos, handlers as news_handlers, models as news_models};
use crate::features::officials::{dtos as officials_dtos, handlers as officials_handlers};
use crate::features::potentials::{
    dtos as potentials_dtos, handlers as potentials_handlers, models as potentials_models,
};
use crate::features::site_settings::{dtos as settings_dtos, handlers as settings_handlers};
use crate::features::users::{dtos as users_dtos, handlers as users_handlers};
use crate::features::village_services::{dtos as services_dtos, handlers as services_handlers};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Auth
        auth_handlers::login,
        auth_handlers::get_me,
        // Users
        users_handlers::list_users,
        users_handlers::get_user,
        users_handlers::create_user,
        users_handlers::update_user,
        users_handlers::delete_user,
        // News
        news_handlers::list_posts,
        news_handlers::get_post,
        news_handlers::get_post_by_slug,
        news_handlers::list_admin_posts,
        news_handlers::get_admin_post,
        news_handlers::create_post,
        news_handlers::update_post,
        news_handlers::delete_post,
        // Settings
        settings_handlers::get_settings,
        settings_handlers::get_settings_by_group,
        settings_handlers::get_admin_settings,
        settings_handlers::bulk_update_settings,
        settings_handlers::upsert_setting,
        // Hero sliders
        hero_sliders_handlers::list_active_sliders,
        hero_sliders_handlers::list_sliders,
        hero_sliders_handlers::get_slider,
        hero_sliders_handlers::create_slider,
        hero_sliders_handlers::update_slider,
        hero_sliders_handlers::delete_slider,
        // Officials
        officials_handlers::list_officials,
        officials_handlers::get_official,
        officials_handlers::list_admin_officials,
        officials_handlers::create_official,
        officials_handlers::update_official,
        officials_handlers::delete_official,
        // Services
        services_handlers::list_services,
        services_handlers::get_service,
        services_handlers::create_service,
        services_handlers::update_service,
        services_handlers::delete_service,
        // Potentials
        potentials_handlers::list_potentials,
        potentials_handlers::get_potential,
        potentials_handlers::create_potential,
        potentials_handlers::update_potential,
        potentials_handlers::delete_potential,
        // Contacts
        contacts_handlers::submit_contact,
        contacts_handlers::list_contacts,
        contacts_handlers::get_contact,
        contacts_handlers::mark_contact_read,
        contacts_handlers::delete_contact,
        // Analytics
        analytics_handlers::track_page_view,
        // Dashboard
        dashboard_handlers::get_dashboard,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Auth
            auth_model::AuthenticatedUser,
            auth_model::UserRole,
            auth_dtos::LoginRequestDto,
            auth_dtos::LoginResponseDto,
            auth_dtos::MeResponseDto,
            ApiResponse<auth_dtos::LoginResponseDto>,
            ApiResponse<auth_dtos::MeResponseDto>,
            // Users
            users_dtos::CreateUserDto,
            users_dtos::UpdateUserDto,
            users_dtos::UserResponseDto,
            ApiResponse<Vec<users_dtos::UserResponseDto>>,
            ApiResponse<users_dtos::UserResponseDto>,
            // News
            news_models::NewsStatus,
            news_dtos::CreateNewsDto,
            news_dtos::UpdateNewsDto,
            news_dtos::AuthorSummaryDto,
            news_dtos::NewsResponseDto,
            ApiResponse<Vec<news_dtos::NewsResponseDto>>,
            ApiResponse<news_dtos::NewsResponseDto>,
            // Settings
            settings_dtos::SettingInputDto,
            settings_dtos::SiteSettingResponseDto,
            settings_dtos::SettingsMapDto,
            settings_dtos::GroupedSettingsDto,
            settings_dtos::BulkUpdateResponseDto,
            ApiResponse<settings_dtos::SettingsMapDto>,
            ApiResponse<settings_dtos::GroupedSettingsDto>,
            ApiResponse<settings_dtos::BulkUpdateResponseDto>,
            ApiResponse<settings_dtos::SiteSettingResponseDto>,
            // Hero sliders
            hero_sliders_models::MediaType,
            hero_sliders_dtos::CreateHeroSliderDto,
            hero_sliders_dtos::UpdateHeroSliderDto,
            hero_sliders_dtos::HeroSliderResponseDto,
            ApiResponse<Vec<hero_sliders_dtos::HeroSliderResponseDto>>,
            ApiResponse<hero_sliders_dtos::HeroSliderResponseDto>,
            // Officials
            officials_dtos::CreateOfficialDto,
            officials_dtos::UpdateOfficialDto,
            officials_dtos::OfficialResponseDto,
            ApiResponse<Vec<officials_dtos::OfficialResponseDto>>,
            ApiResponse<officials_dtos::OfficialResponseDto>,
            // Services
            services_dtos::CreateServiceDto,
            services_dtos::UpdateServiceDto,
            services_dtos::ServiceResponseDto,
            ApiResponse<Vec<services_dtos::ServiceResponseDto>>,
            ApiResponse<services_dtos::ServiceResponseDto>,
            // Potentials
            potentials_models::PotentialType,
            potentials_dtos::CreatePotentialDto,
            potentials_dtos::UpdatePotentialDto,
            potentials_dtos::PotentialResponseDto,
            ApiResponse<Vec<potentials_dtos::PotentialResponseDto>>,
            ApiResponse<potentials_dtos::PotentialResponseDto>,
            // Contacts
            contacts_dtos::CreateContactDto,
            contacts_dtos::ContactResponseDto,
            ApiResponse<Vec<contacts_dtos::ContactResponseDto>>,
            ApiResponse<contacts_dtos::ContactResponseDto>,
            // Analytics
            analytics_dtos::TrackPageViewDto,
            // Dashboard
            dashboard_dtos::DashboardDto,
            ApiResponse<dashboard_dtos::DashboardDto>,
        )
    ),
    tags(
        (name = "auth", description = "Login and current identity"),
        (name = "users", description = "Account administration (admin)"),
        (name = "news", description = "News articles"),
        (name = "settings", description = "Site settings"),
        (name = "hero-sliders", description = "Home page hero sliders"),
        (name = "officials", description = "Village officials"),
        (name = "services", description = "Village administrative services"),
        (name = "potentials", description = "Local potentials (UMKM, tourism, agriculture)"),
        (name = "contacts", description = "Contact form messages"),
        (name = "analytics", description = "Page view tracking"),
        (name = "dashboard", description = "Admin overview"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "Desa CMS API",
        version = "0.1.0",
        description = "API documentation for the village website CMS",
    )
)]
pub struct ApiDoc;

/// Adds Bearer JWT security scheme to the OpenAPI document
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
