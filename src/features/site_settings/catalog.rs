//! Settings every deployment is expected to have, with placeholder values.

use crate::features::site_settings::models::SettingGroup::{General, Government, Profile, Social};
use crate::features::site_settings::models::{SettingEntry, SettingGroup};

pub struct DefaultSetting {
    pub key: &'static str,
    pub value: &'static str,
    pub group: SettingGroup,
    pub description: &'static str,
}

impl DefaultSetting {
    pub fn to_entry(&self) -> SettingEntry {
        SettingEntry::new(self.key, Some(self.value), self.group)
    }
}

const fn setting(
    key: &'static str,
    value: &'static str,
    group: SettingGroup,
    description: &'static str,
) -> DefaultSetting {
    DefaultSetting {
        key,
        value,
        group,
        description,
    }
}

pub static DEFAULT_SETTINGS: &[DefaultSetting] = &[
    // general
    setting("site_name", "[Nama Desa]", General, "Nama website yang ditampilkan di header dan title"),
    setting("site_description", "[Deskripsi singkat tentang website desa]", General, "Deskripsi untuk SEO meta tag"),
    setting(
        "site_logo",
        "https://placehold.co/400x400/2563eb/ffffff?text=Logo+%7C+400x400px&font=montserrat",
        General,
        "Logo website (PNG atau SVG, ukuran rekomendasi: 400x400px)",
    ),
    setting("contact_email", "[email@desa.go.id]", General, "Email kontak desa"),
    setting("contact_phone", "[0xxx-xxxxxxx]", General, "Nomor telepon kantor desa"),
    setting("contact_whatsapp", "[62xxx]", General, "Nomor WhatsApp untuk kontak"),
    setting("contact_address", "[Alamat lengkap kantor desa]", General, "Alamat lengkap kantor desa"),
    setting("map_embed_url", "", General, "URL embed Google Maps (paste src dari iframe Google Maps)"),
    setting("google_maps_link", "https://maps.google.com", General, "Link Google Maps untuk tombol petunjuk arah"),
    setting("district", "", General, "Kecamatan untuk ditampilkan di header"),
    setting("regency", "", General, "Kabupaten untuk ditampilkan di header"),
    // profile
    setting("village_name", "[Nama Desa]", Profile, "Nama resmi desa"),
    setting("village_head", "[Nama Kepala Desa]", Profile, "Nama kepala desa yang menjabat"),
    setting("village_vision", "[Visi desa untuk masa depan]", Profile, "Visi desa"),
    setting("village_mission", "[Misi 1]\n[Misi 2]\n[Misi 3]", Profile, "Misi desa (pisahkan dengan newline)"),
    setting("village_history", "[Sejarah desa dari masa ke masa]", Profile, "Sejarah desa"),
    setting("village_area", "[xxx hektar]", Profile, "Luas wilayah desa"),
    setting("village_population", "[xxx jiwa]", Profile, "Jumlah penduduk"),
    setting("village_address", "[Alamat desa]", Profile, "Alamat desa"),
    setting("village_district", "[Nama Kecamatan]", Profile, "Kecamatan"),
    setting("village_regency", "[Nama Kabupaten]", Profile, "Kabupaten"),
    setting("village_province", "[Nama Provinsi]", Profile, "Provinsi"),
    setting("village_postal_code", "[xxxxx]", Profile, "Kode pos"),
    // government
    setting(
        "organizational_structure_image",
        "https://placehold.co/1200x800/e5e7eb/6b7280?text=Struktur+Organisasi+%7C+1200x800px&font=montserrat",
        Government,
        "Gambar struktur organisasi pemerintahan desa (ukuran rekomendasi: 1200x800px)",
    ),
    // social
    setting("facebook_url", "", Social, "URL Facebook page (opsional)"),
    setting("instagram_url", "", Social, "URL Instagram profile (opsional)"),
    setting("twitter_url", "", Social, "URL Twitter profile (opsional)"),
    setting("youtube_url", "", Social, "URL YouTube channel (opsional)"),
    setting("tiktok_url", "", Social, "URL TikTok profile (opsional)"),
];

pub fn find(key: &str) -> Option<&'static DefaultSetting> {
    DEFAULT_SETTINGS.iter().find(|s| s.key == key)
}
