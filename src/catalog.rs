//! Fixed reference data: flavours, cup sizes and the shop's contact details.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flavour {
    pub name: &'static str,
    /// File name under the image base path.
    pub image: &'static str,
    pub popular: bool,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CupSize {
    pub size: &'static str,
    pub price_cents: u32,
    pub description: &'static str,
}

impl CupSize {
    /// Price as shown on the menu board, e.g. `$6.99`.
    pub fn price_label(&self) -> String {
        format!("${}.{:02}", self.price_cents / 100, self.price_cents % 100)
    }
}

pub const FLAVOURS: [Flavour; 7] = [
    Flavour {
        name: "Ultimate Swirl",
        image: "ultimate-swirl.jpg",
        popular: true,
        description: "A perfect harmony of chocolate and vanilla",
    },
    Flavour {
        name: "Classic Vanilla",
        image: "classic-vanilla.jpg",
        popular: true,
        description: "Pure, creamy vanilla perfection",
    },
    Flavour {
        name: "Chocolate Heaven",
        image: "chocolate-heaven.jpg",
        popular: true,
        description: "Rich, decadent chocolate indulgence",
    },
    Flavour {
        name: "Mango Twist",
        image: "mango-twist.jpg",
        popular: false,
        description: "Tropical mango with a delightful twist",
    },
    Flavour {
        name: "Strawberry Madness",
        image: "strawberry-madness.jpg",
        popular: true,
        description: "Fresh strawberry bliss in every swirl",
    },
    Flavour {
        name: "Tropical Berry Açai",
        image: "tropical-berry.jpg",
        popular: false,
        description: "Exotic açai with tropical berry notes",
    },
    Flavour {
        name: "Pistachio Madness",
        image: "pistachio-madness.jpg",
        popular: false,
        description: "Luxurious pistachio with nutty richness",
    },
];

pub const CUP_SIZES: [CupSize; 4] = [
    CupSize {
        size: "Small Cup",
        price_cents: 499,
        description: "Perfect for a light treat",
    },
    CupSize {
        size: "Medium Cup",
        price_cents: 699,
        description: "Our most popular size",
    },
    CupSize {
        size: "Large Cup",
        price_cents: 999,
        description: "For the true froyo lover",
    },
    CupSize {
        size: "Jumbo Cup",
        price_cents: 1599,
        description: "Share or indulge completely",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpeningHours {
    pub days: &'static str,
    pub hours: &'static str,
}

impl OpeningHours {
    pub fn label(&self) -> String {
        format!("{}: {}", self.days, self.hours)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactDetails {
    pub street: &'static str,
    pub locality: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub hours: [OpeningHours; 2],
}

pub const CONTACT: ContactDetails = ContactDetails {
    street: "200 Elgin Street, Carlton",
    locality: "Melbourne, VIC 3053",
    phone: "+61 424 424 421",
    email: "justcraveit.info@gmail.com",
    hours: [
        OpeningHours {
            days: "Sunday–Thursday",
            hours: "5pm – 12am",
        },
        OpeningHours {
            days: "Friday–Saturday",
            hours: "12pm – 2am",
        },
    ],
};

impl ContactDetails {
    pub fn full_address(&self) -> String {
        format!("{}, {}", self.street, self.locality)
    }

    pub fn phone_href(&self) -> String {
        let digits: String = self
            .phone
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect();
        format!("tel:{}", digits)
    }

    pub fn email_href(&self) -> String {
        format!("mailto:{}", self.email)
    }

    /// Map search for the shop, opened by "Get Directions".
    pub fn directions_url(&self) -> String {
        format!(
            "https://www.google.com/maps/search/?api=1&query={}",
            urlencoding::encode(&format!("Just Crave It, {}", self.full_address()))
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_sizes_are_fixed() {
        assert_eq!(FLAVOURS.len(), 7);
        assert_eq!(CUP_SIZES.len(), 4);
    }

    #[test]
    fn flavour_names_are_unique_keys() {
        let names: HashSet<_> = FLAVOURS.iter().map(|f| f.name).collect();
        assert_eq!(names.len(), FLAVOURS.len());
        let sizes: HashSet<_> = CUP_SIZES.iter().map(|c| c.size).collect();
        assert_eq!(sizes.len(), CUP_SIZES.len());
    }

    #[test]
    fn popular_flavours() {
        let popular: Vec<_> = FLAVOURS.iter().filter(|f| f.popular).map(|f| f.name).collect();
        assert_eq!(
            popular,
            ["Ultimate Swirl", "Classic Vanilla", "Chocolate Heaven", "Strawberry Madness"]
        );
    }

    #[test]
    fn prices_render_with_cents() {
        let labels: Vec<_> = CUP_SIZES.iter().map(CupSize::price_label).collect();
        assert_eq!(labels, ["$4.99", "$6.99", "$9.99", "$15.99"]);
        let even = CupSize {
            size: "Test",
            price_cents: 500,
            description: "",
        };
        assert_eq!(even.price_label(), "$5.00");
    }

    #[test]
    fn contact_details_match_the_shop() {
        assert_eq!(
            CONTACT.full_address(),
            "200 Elgin Street, Carlton, Melbourne, VIC 3053"
        );
        assert_eq!(CONTACT.hours[0].label(), "Sunday–Thursday: 5pm – 12am");
        assert_eq!(CONTACT.hours[1].label(), "Friday–Saturday: 12pm – 2am");
        assert_eq!(CONTACT.phone_href(), "tel:+61424424421");
        assert_eq!(CONTACT.email_href(), "mailto:justcraveit.info@gmail.com");
    }

    #[test]
    fn directions_url_is_encoded() {
        let url = CONTACT.directions_url();
        assert!(url.starts_with("https://www.google.com/maps/search/?api=1&query="));
        assert!(url.contains("200%20Elgin%20Street%2C%20Carlton"));
        assert!(!url.contains(' '));
    }
}
