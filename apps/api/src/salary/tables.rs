//! Constant lookup tables for the salary module: the 81 provinces and the
//! common role list served to form dropdowns.

pub const TURKISH_CITIES: &[&str] = &[
    "Adana", "Adıyaman", "Afyonkarahisar", "Ağrı", "Aksaray", "Amasya", "Ankara", "Antalya",
    "Ardahan", "Artvin", "Aydın", "Balıkesir", "Bartın", "Batman", "Bayburt", "Bilecik", "Bingöl",
    "Bitlis", "Bolu", "Burdur", "Bursa", "Çanakkale", "Çankırı", "Çorum", "Denizli", "Diyarbakır",
    "Düzce", "Edirne", "Elazığ", "Erzincan", "Erzurum", "Eskişehir", "Gaziantep", "Giresun",
    "Gümüşhane", "Hakkari", "Hatay", "Iğdır", "Isparta", "İstanbul", "İzmir", "Kahramanmaraş",
    "Karabük", "Karaman", "Kars", "Kastamonu", "Kayseri", "Kırıkkale", "Kırklareli", "Kırşehir",
    "Kilis", "Kocaeli", "Konya", "Kütahya", "Malatya", "Manisa", "Mardin", "Mersin", "Muğla",
    "Muş", "Nevşehir", "Niğde", "Ordu", "Osmaniye", "Rize", "Sakarya", "Samsun", "Siirt", "Sinop",
    "Sivas", "Şanlıurfa", "Şırnak", "Tekirdağ", "Tokat", "Trabzon", "Tunceli", "Uşak", "Van",
    "Yalova", "Yozgat", "Zonguldak",
];

pub const COMMON_ROLES: &[&str] = &[
    // Bilişim & Teknoloji
    "Yazılım Mühendisi",
    "Frontend Geliştirici",
    "Backend Geliştirici",
    "Full Stack Geliştirici",
    "Mobil Geliştirici (iOS/Android)",
    "DevOps Mühendisi",
    "Siber Güvenlik Uzmanı",
    "Veri Analisti",
    "Veri Bilimci",
    "Sistem Yöneticisi",
    "Oyun Geliştirici",
    "Yazılım Mimarı",
    "Teknoloji Lideri (Tech Lead)",
    "Ürün Yöneticisi (Product Manager)",
    "Proje Yöneticisi",
    "İş Analisti",
    "UI/UX Tasarımcı",
    "Grafik Tasarımcı",
    // Mühendislik & Teknik
    "Makine Mühendisi",
    "İnşaat Mühendisi",
    "Elektrik-Elektronik Mühendisi",
    "Endüstri Mühendisi",
    "Mimar",
    "Harita Mühendisi",
    "Ziraat Mühendisi",
    // Eğitim & Akademik
    "Öğretmen (İlkokul/Ortaokul/Lise)",
    "Akademisyen / Araştırma Görevlisi",
    "Özel Ders Öğretmeni",
    "Yabancı Dil Eğitmeni",
    // Sağlık
    "Hemşire",
    "Eczacı",
    "Psikolog",
    "Diyetisyen",
    "Fizyoterapist",
    "Diş Hekimi",
    "Veteriner Hekim",
    // Hukuk & Finans
    "Avukat",
    "Mali Müşavir",
    "Muhasebeci",
    "Finans Uzmanı",
    "İnsan Kaynakları Uzmanı",
    "Bankacı",
    // Satış & Pazarlama
    "Dijital Pazarlama Uzmanı",
    "Sosyal Medya Uzmanı",
    "SEO Uzmanı",
    "Satış Temsilcisi",
    "Müşteri Temsilcisi",
    "Emlak Danışmanı",
    // Hizmet & Operasyon
    "Lojistik Uzmanı",
    "Çağrı Merkezi Müşteri Temsilcisi",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_81_provinces_present() {
        assert_eq!(TURKISH_CITIES.len(), 81);
        assert!(TURKISH_CITIES.contains(&"İstanbul"));
        assert!(TURKISH_CITIES.contains(&"Zonguldak"));
    }

    #[test]
    fn test_roles_nonempty_and_unique() {
        assert!(!COMMON_ROLES.is_empty());
        let mut sorted: Vec<&str> = COMMON_ROLES.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), COMMON_ROLES.len());
    }
}
