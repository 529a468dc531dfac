//! In-code demo data. Seed records carry `demo_` ids so the store can swap
//! them for updated versions on load without touching user-created records.

use crate::domain::models::{Category, Listing, ListingStatus, Rating, Role, User};
use crate::services::identity::hash_password;
use chrono::{Duration, Utc};

pub fn seed_users() -> Vec<User> {
    vec![
        User {
            id: "demo_admin".to_string(),
            name: "Campus Admin".to_string(),
            email: "admin@campus.example".to_string(),
            nim: "00000000".to_string(),
            password_hash: hash_password("Admin123"),
            is_verified: true,
            role: Role::Admin,
        },
        User {
            id: "demo_user_1".to_string(),
            name: "Ben Hartono".to_string(),
            email: "ben@campus.example".to_string(),
            nim: "1234567890".to_string(),
            password_hash: hash_password("password123"),
            is_verified: true,
            role: Role::Student,
        },
        User {
            id: "demo_user_2".to_string(),
            name: "Clara Wijaya".to_string(),
            email: "clara@campus.example".to_string(),
            nim: "0987654321".to_string(),
            password_hash: hash_password("password123"),
            is_verified: true,
            role: Role::Student,
        },
        User {
            id: "demo_user_3".to_string(),
            name: "Dion Prasetyo".to_string(),
            email: "dion@campus.example".to_string(),
            nim: "1122334455".to_string(),
            password_hash: hash_password("password123"),
            is_verified: true,
            role: Role::Student,
        },
    ]
}

struct SeedListing {
    id: &'static str,
    provider_id: &'static str,
    provider_name: &'static str,
    title: &'static str,
    category: Category,
    description: &'static str,
    price: u64,
    contact: &'static str,
    photo: Option<&'static str>,
    gallery: &'static [&'static str],
    map_url: Option<&'static str>,
    days_ago: i64,
}

const SEED_LISTINGS: &[SeedListing] = &[
    SeedListing {
        id: "demo_1",
        provider_id: "demo_user_2",
        provider_name: "Clara Wijaya",
        title: "Graphic design and club branding",
        category: Category::Design,
        description: "Logos, posters, banners and social media kits for campus \
                      events and student clubs. 1-3 day turnaround, three minor \
                      revisions included.",
        price: 250_000,
        contact: "WA: 081222333444",
        photo: Some("https://images.campus.example/design-main.jpg"),
        gallery: &[
            "https://images.campus.example/design-1.jpg",
            "https://images.campus.example/design-2.jpg",
        ],
        map_url: None,
        days_ago: 10,
    },
    SeedListing {
        id: "demo_2",
        provider_id: "demo_user_1",
        provider_name: "Ben Hartono",
        title: "Private tutoring: calculus and basic physics",
        category: Category::Tutoring,
        description: "One-on-one tutoring for Calculus I/II and intro physics. \
                      Online or at the central library, 90 minutes per session.",
        price: 85_000,
        contact: "WA: 081122334455",
        photo: Some("https://images.campus.example/tutoring-main.jpg"),
        gallery: &["https://images.campus.example/tutoring-1.jpg"],
        map_url: None,
        days_ago: 8,
    },
    SeedListing {
        id: "demo_3",
        provider_id: "demo_user_3",
        provider_name: "Dion Prasetyo",
        title: "Event and graduation photography",
        category: Category::Photography,
        description: "Photo and cinematic video coverage for graduations, \
                      seminars and club events. Editing included.",
        price: 750_000,
        contact: "WA: 085566778899",
        photo: Some("https://images.campus.example/photo-main.jpg"),
        gallery: &[
            "https://images.campus.example/photo-1.jpg",
            "https://images.campus.example/photo-2.jpg",
        ],
        map_url: None,
        days_ago: 7,
    },
    SeedListing {
        id: "demo_4",
        provider_id: "demo_user_1",
        provider_name: "Ben Hartono",
        title: "Print, binding and fast document scans",
        category: Category::Print,
        description: "Papers, reports and theses printed and bound, soft or \
                      hard cover. Near the back gate, open late.",
        price: 500,
        contact: "WA: 081122334455",
        photo: Some("https://images.campus.example/print-main.jpg"),
        gallery: &[],
        map_url: Some("https://maps.example.com/s/print-corner"),
        days_ago: 6,
    },
    SeedListing {
        id: "demo_5",
        provider_id: "demo_user_3",
        provider_name: "Dion Prasetyo",
        title: "Laptop repair and OS reinstall",
        category: Category::It,
        description: "Slow laptop, virus trouble, or a fresh OS install? All \
                      brands serviced, free consult first.",
        price: 150_000,
        contact: "WA: 085566778899",
        photo: Some("https://images.campus.example/it-main.jpg"),
        gallery: &["https://images.campus.example/it-1.jpg"],
        map_url: None,
        days_ago: 5,
    },
    SeedListing {
        id: "demo_6",
        provider_id: "demo_user_2",
        provider_name: "Clara Wijaya",
        title: "Dorm moving help by motorbike",
        category: Category::Other,
        description: "Moving out of the dorms? I haul up to four medium boxes \
                      per trip, campus area only.",
        price: 40_000,
        contact: "WA: 081222333444",
        photo: Some("https://images.campus.example/moving-main.jpg"),
        gallery: &[],
        map_url: None,
        days_ago: 4,
    },
    SeedListing {
        id: "demo_7",
        provider_id: "demo_user_3",
        provider_name: "Dion Prasetyo",
        title: "Short-form video editing for reels",
        category: Category::VideoEditing,
        description: "Short video edits for product promos or personal \
                      content: captions, trending audio, clean transitions.",
        price: 100_000,
        contact: "WA: 085566778899",
        photo: Some("https://images.campus.example/video-main.jpg"),
        gallery: &[],
        map_url: None,
        days_ago: 2,
    },
    // Pre-flagged so the admin review flow has something to act on out of the box.
    SeedListing {
        id: "demo_8",
        provider_id: "demo_user_3",
        provider_name: "Dion Prasetyo",
        title: "Suspicious listing (demo)",
        category: Category::It,
        description: "Reported by three different users and waiting in the \
                      admin review queue.",
        price: 10_000,
        contact: "WA: 085511223300",
        photo: Some("https://images.campus.example/flagged-main.jpg"),
        gallery: &[],
        map_url: None,
        days_ago: 0,
    },
];

pub fn seed_listings() -> Vec<Listing> {
    let now = Utc::now();
    let mut listings: Vec<Listing> = SEED_LISTINGS
        .iter()
        .map(|s| Listing {
            id: s.id.to_string(),
            provider_id: s.provider_id.to_string(),
            provider_name: s.provider_name.to_string(),
            title: s.title.to_string(),
            category: s.category,
            description: s.description.to_string(),
            price: s.price,
            contact: s.contact.to_string(),
            photo: s.photo.map(str::to_string),
            gallery: s.gallery.iter().map(|g| g.to_string()).collect(),
            map_url: s.map_url.map(str::to_string),
            ratings: vec![],
            reports: vec![],
            created_at: now - Duration::days(s.days_ago),
            status: ListingStatus::Active,
        })
        .collect();

    seed_rating(&mut listings, "demo_1", "demo_user_1", 5, "Modern, on-brief design work.");
    seed_rating(&mut listings, "demo_1", "demo_user_3", 5, "Fast turnaround, great result.");
    seed_rating(&mut listings, "demo_2", "demo_user_2", 5, "Clear explanations, grade saved.");
    seed_rating(&mut listings, "demo_3", "demo_user_1", 5, "Reliable photographer, sharp shots.");
    seed_rating(&mut listings, "demo_4", "demo_user_2", 4, "Cheap and quick.");
    seed_rating(&mut listings, "demo_5", "demo_user_1", 5, "Laptop runs like new again.");
    seed_rating(&mut listings, "demo_8", "demo_user_1", 1, "Not recommended at all.");

    if let Some(flagged) = listings.iter_mut().find(|l| l.id == "demo_8") {
        flagged.reports = vec![
            "demo_user_1".to_string(),
            "demo_user_2".to_string(),
            "demo_admin".to_string(),
        ];
        flagged.status = ListingStatus::Flagged;
    }

    listings
}

fn seed_rating(listings: &mut [Listing], listing_id: &str, user_id: &str, stars: u8, comment: &str) {
    if let Some(listing) = listings.iter_mut().find(|l| l.id == listing_id) {
        listing.ratings.push(Rating {
            user_id: user_id.to_string(),
            rating: stars,
            comment: Some(comment.to_string()),
            date: Utc::now() - Duration::days(1),
        });
    }
}
