use crate::features::hero_sliders::models::{MediaType, NewHeroSlider};

/// Placeholder slider shown until an admin adds real ones
pub fn default_slider() -> NewHeroSlider {
    NewHeroSlider {
        title: "Selamat Datang di Website Desa".to_string(),
        subtitle: Some("Silakan edit slider ini melalui menu Admin > Hero Slider".to_string()),
        media_url: "https://placehold.co/1920x1080/2563eb/ffffff?text=Selamat+Datang".to_string(),
        media_type: MediaType::Image,
        link_url: Some("/profil".to_string()),
        link_text: Some("Pelajari Lebih Lanjut".to_string()),
        display_order: 1,
        is_active: true,
    }
}
