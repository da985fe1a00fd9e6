use crate::features::officials::models::NewOfficial;

/// Placeholder officials shown until an admin enters the real ones
pub fn default_officials() -> Vec<NewOfficial> {
    vec![
        NewOfficial {
            name: "Nama Kepala Desa".to_string(),
            position: "Kepala Desa".to_string(),
            photo_url: Some(
                "https://placehold.co/400x400/64748b/ffffff?text=Kepala+Desa".to_string(),
            ),
            bio: Some(
                "Kepala Desa bertanggung jawab atas penyelenggaraan pemerintahan desa, \
                 pembangunan desa, pembinaan kemasyarakatan, dan pemberdayaan masyarakat desa."
                    .to_string(),
            ),
            display_order: 1,
            hamlet_number: None,
            hamlet_name: None,
        },
        NewOfficial {
            name: "Nama Sekretaris Desa".to_string(),
            position: "Sekretaris Desa".to_string(),
            photo_url: Some(
                "https://placehold.co/400x400/64748b/ffffff?text=Sekretaris+Desa".to_string(),
            ),
            bio: Some(
                "Sekretaris Desa membantu Kepala Desa dalam melaksanakan tugas dan wewenangnya, \
                 serta mengelola administrasi pemerintahan desa."
                    .to_string(),
            ),
            display_order: 2,
            hamlet_number: None,
            hamlet_name: None,
        },
    ]
}
