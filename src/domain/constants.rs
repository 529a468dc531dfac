/// Reports needed before a listing is pulled from public browse for review.
pub const DEFAULT_REPORT_THRESHOLD: usize = 3;

/// Listings a single provider may create per UTC calendar day.
pub const DEFAULT_MAX_POSTS_PER_DAY: usize = 5;

/// Images per listing, primary photo included.
pub const DEFAULT_MAX_LISTING_IMAGES: usize = 5;

/// Id prefix of records shipped as in-code demo data. Reconciliation treats
/// every id carrying this prefix as seed-origin and replaces it on load;
/// user-created ids are uuid-based and never collide with it.
pub const SEED_ID_PREFIX: &str = "demo_";

/// Default file name for `admin export`.
pub const EXPORT_FILE_NAME: &str = "kampusskill_data.json";
