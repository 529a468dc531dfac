use crate::domain::constants::{
    DEFAULT_MAX_LISTING_IMAGES, DEFAULT_MAX_POSTS_PER_DAY, DEFAULT_REPORT_THRESHOLD,
    SEED_ID_PREFIX,
};
use chrono::{DateTime, NaiveDate, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Admin,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Student id number: all-numeric, at least 8 digits.
    pub nim: String,
    /// `sha256$<salt-hex>$<digest-hex>`, see `services::identity`.
    pub password_hash: String,
    pub is_verified: bool,
    pub role: Role,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn summary(&self) -> UserSummary {
        UserSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            nim: self.nim.clone(),
            role: self.role,
        }
    }
}

/// User view without the credential field; everything user-facing prints this.
#[derive(Debug, Serialize, Clone)]
pub struct UserSummary {
    pub id: String,
    pub name: String,
    pub email: String,
    pub nim: String,
    pub role: Role,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum Category {
    Print,
    Design,
    VideoEditing,
    Tutoring,
    Photography,
    #[serde(rename = "IT")]
    #[value(name = "it")]
    It,
    Other,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingStatus {
    Active,
    Flagged,
    Deleted,
}

impl ListingStatus {
    /// `deleted` is terminal: no transition leads out of it.
    pub fn is_terminal(&self) -> bool {
        matches!(self, ListingStatus::Deleted)
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Rating {
    pub user_id: String,
    pub rating: u8,
    #[serde(default)]
    pub comment: Option<String>,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Listing {
    pub id: String,
    pub provider_id: String,
    /// Snapshot of the provider's name at creation time.
    pub provider_name: String,
    pub title: String,
    pub category: Category,
    pub description: String,
    /// Smallest currency unit.
    pub price: u64,
    pub contact: String,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub gallery: Vec<String>,
    #[serde(default)]
    pub map_url: Option<String>,
    #[serde(default)]
    pub ratings: Vec<Rating>,
    /// Ids of users who reported this listing, unique, append-only.
    #[serde(default)]
    pub reports: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub status: ListingStatus,
}

impl Listing {
    pub fn is_seed(&self) -> bool {
        self.id.starts_with(SEED_ID_PREFIX)
    }

    pub fn mean_rating(&self) -> f64 {
        if self.ratings.is_empty() {
            return 0.0;
        }
        let sum: u32 = self.ratings.iter().map(|r| u32::from(r.rating)).sum();
        f64::from(sum) / self.ratings.len() as f64
    }

    pub fn created_on(&self, day: NaiveDate) -> bool {
        self.created_at.date_naive() == day
    }
}

/// Input payload for `post` / `edit`: everything the provider controls.
#[derive(Debug, Clone)]
pub struct ListingDraft {
    pub title: String,
    pub category: Category,
    pub description: String,
    pub price: u64,
    pub contact: String,
    pub photo: Option<String>,
    pub gallery: Vec<String>,
    pub map_url: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct State {
    pub users: Vec<User>,
    pub services: Vec<Listing>,
}

#[derive(Debug, Deserialize, Default)]
pub struct LimitsFile {
    #[serde(default)]
    pub limits: Limits,
}

#[derive(Debug, Deserialize, Clone, Copy)]
pub struct Limits {
    #[serde(default = "default_report_threshold")]
    pub report_threshold: usize,
    #[serde(default = "default_max_posts_per_day")]
    pub max_posts_per_day: usize,
    #[serde(default = "default_max_listing_images")]
    pub max_listing_images: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            report_threshold: DEFAULT_REPORT_THRESHOLD,
            max_posts_per_day: DEFAULT_MAX_POSTS_PER_DAY,
            max_listing_images: DEFAULT_MAX_LISTING_IMAGES,
        }
    }
}

fn default_report_threshold() -> usize {
    DEFAULT_REPORT_THRESHOLD
}

fn default_max_posts_per_day() -> usize {
    DEFAULT_MAX_POSTS_PER_DAY
}

fn default_max_listing_images() -> usize {
    DEFAULT_MAX_LISTING_IMAGES
}

#[derive(Serialize, Clone)]
pub struct BrowseRow {
    pub id: String,
    pub title: String,
    pub category: Category,
    pub price: u64,
    pub provider_name: String,
    pub mean_rating: f64,
    pub ratings_count: usize,
    pub created_at: DateTime<Utc>,
}

impl BrowseRow {
    pub fn from_listing(l: &Listing) -> Self {
        BrowseRow {
            id: l.id.clone(),
            title: l.title.clone(),
            category: l.category,
            price: l.price,
            provider_name: l.provider_name.clone(),
            mean_rating: l.mean_rating(),
            ratings_count: l.ratings.len(),
            created_at: l.created_at,
        }
    }
}

#[derive(Serialize)]
pub struct ShowReport {
    pub listing: Listing,
    pub mean_rating: f64,
    pub favorite: bool,
}

#[derive(Serialize)]
pub struct WhoamiReport {
    pub logged_in: bool,
    pub user: Option<UserSummary>,
}

#[derive(Serialize)]
pub struct ProfileReport {
    pub user: UserSummary,
    pub listings: Vec<BrowseRow>,
    pub favorites: Vec<BrowseRow>,
}

#[derive(Serialize)]
pub struct ReviewRow {
    pub id: String,
    pub title: String,
    pub provider_name: String,
    pub reports: usize,
}

#[derive(Serialize)]
pub struct ExportReport {
    pub path: String,
    pub users: usize,
    pub services: usize,
}
