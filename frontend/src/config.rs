/// Display name of the gym, overridable at build time.
pub fn get_site_name() -> &'static str {
    option_env!("SITE_NAME").unwrap_or("מכון כושר ביתא")
}

/// Google Maps embed used by the location panel.
pub fn get_map_embed_url() -> &'static str {
    option_env!("MAP_EMBED_URL").unwrap_or(
        "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3380.5775816193827!2d34.7914134!3d32.0852379!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x151d4b9c4c7d72f5%3A0x3ba3d73d84d74615!2z16jXl9eV15Eg15TXkdeo15bXnCAxNSwg16rXnCDXkNeR15nXkS3Xmdek15U!5e0!3m2!1siw!2sil!4v1654321234567!5m2!1siw!2sil",
    )
}

// Timings in milliseconds
pub const SUBMIT_DELAY_MS: u32 = 1_500;
pub const FEEDBACK_RESET_MS: u32 = 5_000;
pub const SPLASH_MS: u32 = 800;

/// Vertical offset after which the "back to top" button shows up.
pub const SCROLL_TOP_THRESHOLD_PX: f64 = 300.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContactInfo {
    pub phone: &'static str,
    pub email: &'static str,
    pub address: &'static str,
}

pub const CONTACT_INFO: ContactInfo = ContactInfo {
    phone: "03-1234567",
    email: "info@beta-fitness.co.il",
    address: "רחוב הברזל 15, תל אביב",
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OpeningHours {
    pub day: &'static str,
    pub hours: &'static str,
}

pub const CLOSED: &str = "סגור";

pub const OPENING_HOURS: [OpeningHours; 7] = [
    OpeningHours { day: "ראשון", hours: "06:00 - 23:00" },
    OpeningHours { day: "שני", hours: "06:00 - 23:00" },
    OpeningHours { day: "שלישי", hours: "06:00 - 23:00" },
    OpeningHours { day: "רביעי", hours: "06:00 - 23:00" },
    OpeningHours { day: "חמישי", hours: "06:00 - 23:00" },
    OpeningHours { day: "שישי", hours: "06:00 - 14:00" },
    OpeningHours { day: "שבת", hours: CLOSED },
];

impl OpeningHours {
    pub fn is_closed(&self) -> bool {
        self.hours == CLOSED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_saturday_is_closed() {
        let closed: Vec<_> = OPENING_HOURS.iter().filter(|h| h.is_closed()).map(|h| h.day).collect();
        assert_eq!(closed, vec!["שבת"]);
    }
}
