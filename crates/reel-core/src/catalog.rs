use crate::item::Item;

const PEXELS_QUERY: &str = "?auto=compress&cs=tinysrgb&w=600&h=400&fit=crop";

fn pexels(photo_id: u32) -> String {
    format!(
        "https://images.pexels.com/photos/{id}/pexels-photo-{id}.jpeg{PEXELS_QUERY}",
        id = photo_id
    )
}

// (id, title, pexels photo id, category)
const SHOWCASE: &[(u32, &str, u32, &str)] = &[
    (1, "Romantic Ceremony", 1024993, "Ceremony"),
    (2, "First Dance Magic", 1444442, "Reception"),
    (3, "Golden Hour Portraits", 1024960, "Portraits"),
    (4, "Emotional Vows", 1444424, "Ceremony"),
    (5, "Celebration Moments", 1444416, "Reception"),
    (6, "Intimate Details", 1444408, "Details"),
    (7, "Sunset Romance", 1444401, "Portraits"),
    (8, "Joyful Celebration", 1444394, "Reception"),
];

/// Cinematic stills shown on the home page carousel.
pub fn showcase_items() -> Vec<Item> {
    SHOWCASE
        .iter()
        .map(|&(id, title, photo, category)| Item::new(id, title, pexels(photo), category))
        .collect()
}

// Static copy rendered around the track.
pub const SECTION_TITLE: &str = "Our Cinematic Works";
pub const SECTION_TAGLINE: &str =
    "Découvrez nos créations cinématographiques qui capturent l'essence de votre jour spécial";
pub const HINT_DESKTOP: &str = "Drag to explore • ";
pub const HINT_MOBILE: &str = "Swipe to explore • ";
pub const HINT_SUFFIX: &str = "Auto-scrolling showcase";
