//! Fixed facts about the salon used by the marketing and contact pages.

pub const NAME: &str = "Manisha Beauty Care";
pub const TAGLINE: &str = "Enhancing your natural beauty and confidence";

pub const PHONE_DISPLAY: &str = "+91 98765 43210";
pub const PHONE_TEL: &str = "tel:+919876543210";
pub const WHATSAPP_URL: &str = "https://wa.me/919876543210";

pub const ADDRESS: &str = "Koramangala, Bangalore, Karnataka";

pub const MAP_EMBED_URL: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3888.675494822!2d77.60063931482222!3d12.927923990883647!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x3bae15a3a19e4f53%3A0xb745e5c3b1c6f3a!2sBangalore%2C%20Karnataka!5e0!3m2!1sen!2sin!4v1234567890123!5m2!1sen!2sin";

/// Opening hours as `(days, hours)` rows.
pub const OPENING_HOURS: [(&str, &str); 2] = [
    ("Monday - Saturday", "9:00 AM - 7:00 PM"),
    ("Sunday", "10:00 AM - 6:00 PM"),
];

/// A service highlighted on the home page. Static; not read from the datastore.
#[derive(Debug, Clone, Copy)]
pub struct Highlight {
    pub title: &'static str,
    pub blurb: &'static str,
    pub image: &'static str,
}

pub const HIGHLIGHTS: [Highlight; 4] = [
    Highlight {
        title: "Hair Styling",
        blurb: "Cuts, blow-dries and styling for every occasion",
        image: "/static/img/hair.jpg",
    },
    Highlight {
        title: "Bridal Makeup",
        blurb: "Complete bridal looks for your special day",
        image: "/static/img/bridal.jpg",
    },
    Highlight {
        title: "Skin Care",
        blurb: "Facials and treatments for glowing skin",
        image: "/static/img/facial.jpg",
    },
    Highlight {
        title: "Mehandhi",
        blurb: "Traditional and contemporary henna designs",
        image: "/static/img/mehandhi.jpg",
    },
];

/// Values listed on the about page as `(title, text)`.
pub const VALUES: [(&str, &str); 3] = [
    (
        "Expert Care",
        "Trained professionals who stay current with the latest techniques",
    ),
    (
        "Quality Products",
        "Only trusted, skin-friendly products on every client",
    ),
    (
        "Personal Attention",
        "Every treatment tailored to your needs and preferences",
    ),
];

/// Reasons to join the team, shown beside the careers form.
pub const BENEFITS: [(&str, &str); 4] = [
    (
        "Professional Growth",
        "Continuous training and skill development opportunities",
    ),
    (
        "Competitive Compensation",
        "Fair pay with performance incentives",
    ),
    (
        "Positive Environment",
        "Supportive team culture and friendly atmosphere",
    ),
    (
        "Flexible Hours",
        "Work-life balance with flexible scheduling",
    ),
];
